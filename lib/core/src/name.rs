//! Validated route names.
//!
//! Route names are the stable handles views and links use to refer to a
//! route independently of its path. They must be non-empty and free of
//! whitespace and of the `#`, `/`, `?` URL delimiters.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

/// Error returned when a string is not a valid route name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRouteNameError {
    /// The rejected input.
    pub name: String,
    /// The reason for the rejection.
    pub reason: &'static str,
}

impl fmt::Display for ParseRouteNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid route name '{}': {}", self.name, self.reason)
    }
}

impl std::error::Error for ParseRouteNameError {}

/// Unique identifier of a route, such as `home` or `not-found`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RouteName(String);

impl RouteName {
    /// Creates a route name, validating its characters.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty or contains whitespace or one of
    /// `#`, `/`, `?`.
    pub fn new(name: impl Into<String>) -> Result<Self, ParseRouteNameError> {
        let name = name.into();
        let reason = if name.is_empty() {
            Some("name is empty")
        } else if name.chars().any(char::is_whitespace) {
            Some("name contains whitespace")
        } else if name.contains(['#', '/', '?']) {
            Some("name contains a URL delimiter")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(ParseRouteNameError { name, reason }),
            None => Ok(Self(name)),
        }
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RouteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for RouteName {
    type Err = ParseRouteNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for RouteName {
    type Error = ParseRouteNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RouteName> for String {
    fn from(name: RouteName) -> Self {
        name.0
    }
}

impl AsRef<str> for RouteName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for RouteName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for RouteName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for RouteName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
