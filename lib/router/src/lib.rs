//! Client-side navigation for hashnav.
//!
//! This crate resolves the hash portion of the browser URL against an ordered
//! route table and hands back the view to mount:
//!
//! - **Fragments**: parsing `#/path?query` into a normalized path
//! - **Patterns**: literal paths and a single trailing catch-all
//! - **Route table**: first-match-wins ordering, validated at construction
//! - **Lazy components**: memoized asynchronous loaders, retried after failure
//! - **Router**: navigation state and stale-navigation handling
//! - **Config**: route tables declared in TOML or JSON

pub mod config;
pub mod error;
pub mod fragment;
pub mod lazy;
pub mod pattern;
pub mod route;
pub mod router;
pub mod table;

pub use config::{RouteConfig, RouteTableConfig, ViewRegistry};
pub use error::{LoadError, NavigationError, RouteTableError};
pub use fragment::Fragment;
pub use lazy::{ComponentLoader, LazyComponent};
pub use pattern::{MatchOptions, Params, PathPattern};
pub use route::{ComponentSource, Route, RouteDef};
pub use router::{Navigation, NavigationState, Router};
pub use table::{Resolution, RouteMatch, RouteTable};
