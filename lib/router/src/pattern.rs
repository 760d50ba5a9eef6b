//! Path patterns and matching rules.

use crate::error::RouteTableError;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;

/// Parameters captured while matching a path.
pub type Params = BTreeMap<String, String>;

/// How literal paths are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct MatchOptions {
    /// Compare paths case-sensitively.
    #[serde(default)]
    pub case_sensitive: bool,
    /// Treat `/about/` and `/about` as different paths.
    #[serde(default)]
    pub strict: bool,
}

impl MatchOptions {
    /// Normalizes a path for comparison under these options.
    #[must_use]
    pub fn normalize(&self, path: &str) -> String {
        let mut normalized = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{path}")
        };
        if !self.strict {
            while normalized.len() > 1 && normalized.ends_with('/') {
                normalized.pop();
            }
        }
        if !self.case_sensitive {
            normalized = normalized.to_lowercase();
        }
        normalized
    }
}

/// A route's path pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathPattern {
    /// Matches exactly one path, e.g. `/code`.
    Literal { path: String },
    /// Matches any path, written `/*name` (or `/*` to capture nothing).
    CatchAll { param: Option<String> },
}

impl PathPattern {
    /// Parses a pattern.
    ///
    /// # Errors
    ///
    /// Returns [`RouteTableError::InvalidPattern`] if the path does not start
    /// with `/`, contains `#` or `?`, or uses a wildcard anywhere but as the
    /// whole path.
    pub fn parse(raw: &str) -> Result<Self, RouteTableError> {
        let invalid = |reason: &str| RouteTableError::InvalidPattern {
            path: raw.to_string(),
            reason: reason.to_string(),
        };

        let Some(body) = raw.strip_prefix('/') else {
            return Err(invalid("path must start with '/'"));
        };
        if raw.contains(['#', '?']) {
            return Err(invalid("path must not contain '#' or '?'"));
        }

        if let Some(param) = body.strip_prefix('*') {
            if param.contains(['/', '*']) {
                return Err(invalid("a wildcard must be the only segment"));
            }
            let param = (!param.is_empty()).then(|| param.to_string());
            return Ok(Self::CatchAll { param });
        }
        if body.contains('*') {
            return Err(invalid("a wildcard must be the only segment"));
        }

        Ok(Self::Literal {
            path: raw.to_string(),
        })
    }

    /// Returns whether this pattern matches every path.
    #[must_use]
    pub fn is_catch_all(&self) -> bool {
        matches!(self, Self::CatchAll { .. })
    }

    /// Returns the literal path, if this is a literal pattern.
    #[must_use]
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Self::Literal { path } => Some(path),
            Self::CatchAll { .. } => None,
        }
    }

    /// Returns the key two patterns collide on under `options`.
    #[must_use]
    pub fn key(&self, options: &MatchOptions) -> String {
        match self {
            Self::Literal { path } => options.normalize(path),
            Self::CatchAll { .. } => "*".to_string(),
        }
    }

    /// Matches `path` against this pattern, returning captured parameters.
    #[must_use]
    pub fn matches(&self, path: &str, options: &MatchOptions) -> Option<Params> {
        match self {
            Self::Literal { path: literal } => {
                (options.normalize(literal) == options.normalize(path)).then(Params::new)
            }
            Self::CatchAll { param } => {
                let mut params = Params::new();
                if let Some(param) = param {
                    params.insert(param.clone(), path.trim_start_matches('/').to_string());
                }
                Some(params)
            }
        }
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal { path } => f.write_str(path),
            Self::CatchAll { param } => write!(f, "/*{}", param.as_deref().unwrap_or("")),
        }
    }
}
