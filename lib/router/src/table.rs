//! The ordered route table.
//!
//! Routes are tested in declaration order and the first match wins. Tables
//! are validated when built so ambiguous declarations never reach
//! navigation:
//!
//! - no empty entries
//! - no two routes or aliases on the same (normalized) path
//! - unique route names
//! - at most one catch-all, and only as the last route

use crate::error::{NavigationError, RouteTableError};
use crate::fragment::Fragment;
use crate::pattern::{MatchOptions, Params};
use crate::route::{Route, RouteDef};
use hashnav_core::RouteName;
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// A route matched against a path, with any captured parameters.
#[derive(Debug)]
pub struct RouteMatch<'a, V> {
    route: &'a Route<V>,
    params: Params,
}

impl<'a, V> RouteMatch<'a, V> {
    /// Returns the matched route.
    #[must_use]
    pub fn route(&self) -> &'a Route<V> {
        self.route
    }

    /// Returns the captured parameters.
    #[must_use]
    pub fn params(&self) -> &Params {
        &self.params
    }
}

/// Outcome of resolving a path against the table.
#[derive(Debug)]
pub enum Resolution<'a, V> {
    /// A route matched.
    Matched(RouteMatch<'a, V>),
    /// Nothing matched and the table has no catch-all.
    Unresolved { path: String },
}

impl<'a, V> Resolution<'a, V> {
    /// Returns the match, if any.
    #[must_use]
    pub fn matched(self) -> Option<RouteMatch<'a, V>> {
        match self {
            Self::Matched(route_match) => Some(route_match),
            Self::Unresolved { .. } => None,
        }
    }

    /// Converts an unresolved outcome into [`NavigationError::RouteNotFound`].
    ///
    /// # Errors
    ///
    /// Returns `RouteNotFound` when nothing matched.
    pub fn into_result(self) -> Result<RouteMatch<'a, V>, NavigationError> {
        match self {
            Self::Matched(route_match) => Ok(route_match),
            Self::Unresolved { path } => Err(NavigationError::RouteNotFound { path }),
        }
    }
}

/// Ordered, validated set of routes.
#[derive(Debug, Clone)]
pub struct RouteTable<V> {
    routes: Vec<Route<V>>,
    options: MatchOptions,
}

impl<V> RouteTable<V> {
    /// Builds a table with default matching options.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure.
    pub fn new(routes: impl IntoIterator<Item = RouteDef<V>>) -> Result<Self, RouteTableError> {
        Self::with_options(routes, MatchOptions::default())
    }

    /// Builds a table with the given matching options.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure.
    pub fn with_options(
        routes: impl IntoIterator<Item = RouteDef<V>>,
        options: MatchOptions,
    ) -> Result<Self, RouteTableError> {
        Self::from_entries(routes.into_iter().map(Some), options)
    }

    /// Builds a table from entries that may contain empty slots.
    ///
    /// # Errors
    ///
    /// Returns [`RouteTableError::EmptyEntry`] for the first `None`, or the
    /// first other validation failure.
    pub fn from_entries(
        entries: impl IntoIterator<Item = Option<RouteDef<V>>>,
        options: MatchOptions,
    ) -> Result<Self, RouteTableError> {
        let mut routes: Vec<Route<V>> = Vec::new();
        let mut paths: HashMap<String, RouteName> = HashMap::new();
        let mut names: HashSet<RouteName> = HashSet::new();

        for (index, entry) in entries.into_iter().enumerate() {
            let def = entry.ok_or(RouteTableError::EmptyEntry { index })?;
            let route = Route::compile(def)?;

            if let Some(catch_all) = routes.last().filter(|r| r.is_catch_all()) {
                return Err(RouteTableError::CatchAllNotLast {
                    name: catch_all.name().clone(),
                });
            }
            if !names.insert(route.name().clone()) {
                return Err(RouteTableError::DuplicateName {
                    name: route.name().clone(),
                });
            }
            for pattern in route.patterns() {
                let key = pattern.key(&options);
                if let Some(first) = paths.get(&key) {
                    return Err(RouteTableError::DuplicatePathConflict {
                        path: pattern.to_string(),
                        first: first.clone(),
                        second: route.name().clone(),
                    });
                }
                paths.insert(key, route.name().clone());
            }

            routes.push(route);
        }

        debug!(routes = routes.len(), "route table built");
        Ok(Self { routes, options })
    }

    /// Resolves a path; the first matching route wins.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Resolution<'_, V> {
        self.routes
            .iter()
            .find_map(|route| {
                route
                    .matches(path, &self.options)
                    .map(|params| RouteMatch { route, params })
            })
            .map_or_else(
                || Resolution::Unresolved {
                    path: path.to_string(),
                },
                Resolution::Matched,
            )
    }

    /// Looks up a route by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Route<V>> {
        self.routes.iter().find(|route| route.name() == name)
    }

    /// Returns the `#/path` link for a named literal route.
    #[must_use]
    pub fn href(&self, name: &str) -> Option<String> {
        self.get(name)
            .and_then(|route| route.path().as_literal())
            .map(|path| Fragment::parse(path).href())
    }

    /// Returns the catch-all route, if declared.
    #[must_use]
    pub fn catch_all(&self) -> Option<&Route<V>> {
        self.routes.last().filter(|route| route.is_catch_all())
    }

    /// Returns the routes in declaration order.
    #[must_use]
    pub fn routes(&self) -> &[Route<V>] {
        &self.routes
    }

    /// Returns the matching options.
    #[must_use]
    pub fn options(&self) -> MatchOptions {
        self.options
    }

    /// Returns the number of routes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Returns whether the table has no routes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site_routes() -> Vec<RouteDef<&'static str>> {
        vec![
            RouteDef::eager("/", "home", "HomeView"),
            RouteDef::eager("/code", "code", "CodeView"),
            RouteDef::eager("/game", "game", "GameView"),
            RouteDef::eager("/about", "about", "AboutView"),
        ]
    }

    fn matched_name<V>(table: &RouteTable<V>, path: &str) -> Option<String> {
        table
            .resolve(path)
            .matched()
            .map(|m| m.route().name().to_string())
    }

    #[test]
    fn literal_paths_resolve_to_their_route_in_any_order() {
        let forward = RouteTable::new(site_routes()).expect("valid table");
        let reversed = RouteTable::new(site_routes().into_iter().rev()).expect("valid table");

        for (path, name) in [("/", "home"), ("/code", "code"), ("/game", "game"), ("/about", "about")] {
            assert_eq!(matched_name(&forward, path).as_deref(), Some(name));
            assert_eq!(matched_name(&reversed, path).as_deref(), Some(name));
        }
    }

    #[test]
    fn catch_all_receives_unmatched_paths() {
        let mut routes = site_routes();
        routes.push(RouteDef::eager("/*path", "not-found", "NotFoundView"));
        let table = RouteTable::new(routes).expect("valid table");

        for path in ["/missing", "/code/extra", "/abouts"] {
            let m = table.resolve(path).matched().expect("catch-all matches");
            assert_eq!(m.route().name(), "not-found");
            assert_eq!(
                m.params().get("path").map(String::as_str),
                Some(path.trim_start_matches('/'))
            );
        }
        assert_eq!(matched_name(&table, "/game").as_deref(), Some("game"));
    }

    #[test]
    fn unmatched_without_catch_all_is_unresolved() {
        let table = RouteTable::new(site_routes()).expect("valid table");

        let resolution = table.resolve("/missing");
        assert!(matches!(&resolution, Resolution::Unresolved { path } if path == "/missing"));
        assert_eq!(
            resolution.into_result().unwrap_err(),
            NavigationError::RouteNotFound {
                path: "/missing".to_string()
            }
        );
    }

    #[test]
    fn rejects_duplicate_paths() {
        let mut routes = site_routes();
        routes.push(RouteDef::eager("/", "index", "HomeView"));

        let err = RouteTable::new(routes).unwrap_err();
        assert_eq!(
            err,
            RouteTableError::DuplicatePathConflict {
                path: "/".to_string(),
                first: RouteName::new("home").expect("valid"),
                second: RouteName::new("index").expect("valid"),
            }
        );
    }

    #[test]
    fn duplicate_detection_follows_match_options() {
        let routes = || {
            vec![
                RouteDef::eager("/about", "about", "AboutView"),
                RouteDef::eager("/About/", "about-upper", "AboutView"),
            ]
        };

        let err = RouteTable::new(routes()).unwrap_err();
        assert!(matches!(err, RouteTableError::DuplicatePathConflict { .. }));

        let strict = MatchOptions {
            case_sensitive: true,
            strict: true,
        };
        assert!(RouteTable::with_options(routes(), strict).is_ok());
    }

    #[test]
    fn aliases_resolve_and_conflict_like_paths() {
        let routes = vec![
            RouteDef::eager("/", "home", "HomeView").alias("/home"),
            RouteDef::eager("/game", "game", "GameView"),
        ];
        let table = RouteTable::new(routes).expect("valid table");
        assert_eq!(matched_name(&table, "/home").as_deref(), Some("home"));

        let conflicting = vec![
            RouteDef::eager("/", "home", "HomeView"),
            RouteDef::eager("/game", "game", "GameView").alias("/"),
        ];
        let err = RouteTable::new(conflicting).unwrap_err();
        assert!(matches!(err, RouteTableError::DuplicatePathConflict { .. }));
    }

    #[test]
    fn rejects_duplicate_names() {
        let routes = vec![
            RouteDef::eager("/code", "code", "CodeView"),
            RouteDef::eager("/source", "code", "CodeView"),
        ];
        let err = RouteTable::new(routes).unwrap_err();
        assert!(matches!(err, RouteTableError::DuplicateName { name } if name == "code"));
    }

    #[test]
    fn rejects_empty_entries() {
        let entries = vec![
            Some(RouteDef::eager("/", "home", "HomeView")),
            Some(RouteDef::eager("/game", "game", "GameView")),
            None,
        ];
        let err = RouteTable::from_entries(entries, MatchOptions::default()).unwrap_err();
        assert_eq!(err, RouteTableError::EmptyEntry { index: 2 });
    }

    #[test]
    fn rejects_routes_after_catch_all() {
        let routes = vec![
            RouteDef::eager("/", "home", "HomeView"),
            RouteDef::eager("/*path", "not-found", "NotFoundView"),
            RouteDef::eager("/game", "game", "GameView"),
        ];
        let err = RouteTable::new(routes).unwrap_err();
        assert!(matches!(err, RouteTableError::CatchAllNotLast { name } if name == "not-found"));
    }

    #[test]
    fn href_builds_hash_links() {
        let mut routes = site_routes();
        routes.push(RouteDef::eager("/*path", "not-found", "NotFoundView"));
        let table = RouteTable::new(routes).expect("valid table");

        assert_eq!(table.href("about").as_deref(), Some("#/about"));
        assert_eq!(table.href("home").as_deref(), Some("#/"));
        assert_eq!(table.href("not-found"), None);
        assert_eq!(table.href("missing"), None);
        assert_eq!(
            table.catch_all().map(|r| r.name().to_string()).as_deref(),
            Some("not-found")
        );
    }
}
