//! Core types shared by the hashnav crates.
//!
//! This crate provides the `Result` alias used at the application layer and
//! the validated [`RouteName`] that identifies routes across the router and
//! the view registry.

pub mod error;
pub mod name;

pub use error::Result;
pub use name::{ParseRouteNameError, RouteName};
