//! Error types for the router crate.
//!
//! Errors are designed for layered context using rootcause:
//! - `RouteTableError`: Rejected route tables, raised at construction time
//! - `NavigationError`: Failures local to a single navigation
//! - `LoadError`: Failures reported by a lazy component loader

use hashnav_core::{ParseRouteNameError, RouteName};
use std::fmt;

/// Errors from building a route table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteTableError {
    /// A table slot held no route (for example a `null` in a config array).
    EmptyEntry { index: usize },
    /// A route name failed validation.
    InvalidName(ParseRouteNameError),
    /// A path pattern could not be parsed.
    InvalidPattern { path: String, reason: String },
    /// Two routes (or aliases) share the same path.
    DuplicatePathConflict {
        path: String,
        first: RouteName,
        second: RouteName,
    },
    /// Two routes share the same name.
    DuplicateName { name: RouteName },
    /// A catch-all route is followed by other routes.
    CatchAllNotLast { name: RouteName },
    /// A configured route refers to a view that was never registered.
    UnknownView { route: RouteName, view: String },
}

impl fmt::Display for RouteTableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyEntry { index } => write!(f, "route table entry {index} is empty"),
            Self::InvalidName(err) => write!(f, "{err}"),
            Self::InvalidPattern { path, reason } => {
                write!(f, "invalid path pattern '{path}': {reason}")
            }
            Self::DuplicatePathConflict {
                path,
                first,
                second,
            } => {
                write!(
                    f,
                    "path '{path}' is declared by both '{first}' and '{second}'"
                )
            }
            Self::DuplicateName { name } => write!(f, "route name '{name}' is declared twice"),
            Self::CatchAllNotLast { name } => {
                write!(f, "catch-all route '{name}' must be the last route")
            }
            Self::UnknownView { route, view } => {
                write!(f, "route '{route}' refers to unregistered view '{view}'")
            }
        }
    }
}

impl std::error::Error for RouteTableError {}

impl From<ParseRouteNameError> for RouteTableError {
    fn from(err: ParseRouteNameError) -> Self {
        Self::InvalidName(err)
    }
}

/// Errors from a single navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    /// No route matched and the table has no catch-all.
    RouteNotFound { path: String },
    /// The lazily loaded component for the route could not be produced.
    ComponentLoadFailure { route: RouteName, reason: String },
}

impl fmt::Display for NavigationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RouteNotFound { path } => write!(f, "no route matches '{path}'"),
            Self::ComponentLoadFailure { route, reason } => {
                write!(f, "failed to load component for route '{route}': {reason}")
            }
        }
    }
}

impl std::error::Error for NavigationError {}

/// Error reported by a [`ComponentLoader`](crate::lazy::ComponentLoader).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadError {
    message: String,
}

impl LoadError {
    /// Creates a load error with the given message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the failure message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for LoadError {}
