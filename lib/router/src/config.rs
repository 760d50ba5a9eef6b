//! Route tables declared as configuration.
//!
//! A table is described in TOML or JSON and loaded through the `config`
//! crate. Each route names a view which is looked up in a [`ViewRegistry`]
//! supplied by the application:
//!
//! ```toml
//! [[routes]]
//! path = "/"
//! name = "home"
//! alias = ["/home"]
//!
//! [[routes]]
//! path = "/*path"
//! name = "not-found"
//! view = "not_found"
//! ```
//!
//! JSON arrays may contain `null` entries; these are rejected when the table
//! is built rather than skipped.

use crate::error::RouteTableError;
use crate::lazy::ComponentLoader;
use crate::pattern::MatchOptions;
use crate::route::{ComponentSource, RouteDef};
use crate::table::RouteTable;
use config::{Config, ConfigError, File, FileFormat};
use hashnav_core::RouteName;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// One route declaration.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteConfig {
    /// Path pattern, e.g. `/about` or `/*path`.
    pub path: String,
    /// Unique route name.
    pub name: String,
    /// Registered view to render. Defaults to the route name.
    #[serde(default)]
    pub view: Option<String>,
    /// Additional literal paths for the same route.
    #[serde(default)]
    pub alias: Vec<String>,
}

impl RouteConfig {
    /// Returns the view this route renders.
    #[must_use]
    pub fn view(&self) -> &str {
        self.view.as_deref().unwrap_or(&self.name)
    }
}

/// A route table declaration.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteTableConfig {
    /// Compare paths case-sensitively.
    #[serde(default)]
    pub case_sensitive: bool,
    /// Distinguish paths by trailing slash.
    #[serde(default)]
    pub strict: bool,
    /// Routes in match order. `None` marks an empty slot.
    #[serde(default)]
    pub routes: Vec<Option<RouteConfig>>,
}

impl RouteTableConfig {
    /// Parses a declaration from text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is malformed or does not fit the schema.
    pub fn from_source(source: &str, format: FileFormat) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from_str(source, format))
            .build()?
            .try_deserialize()
    }

    /// Loads a declaration from a file; the format follows the extension.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, malformed, or does not fit
    /// the schema.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()?
            .try_deserialize()
    }

    /// Returns the matching options.
    #[must_use]
    pub fn options(&self) -> MatchOptions {
        MatchOptions {
            case_sensitive: self.case_sensitive,
            strict: self.strict,
        }
    }

    /// Builds a route table, taking components from `views`.
    ///
    /// Routes that render the same lazy view share its cache.
    ///
    /// # Errors
    ///
    /// Returns [`RouteTableError::UnknownView`] for an unregistered view and
    /// any error from [`RouteTable::from_entries`].
    pub fn build<V: Clone + 'static>(
        &self,
        views: &ViewRegistry<V>,
    ) -> Result<RouteTable<V>, RouteTableError> {
        let mut defs = Vec::with_capacity(self.routes.len());
        for (index, entry) in self.routes.iter().enumerate() {
            let route = entry
                .as_ref()
                .ok_or(RouteTableError::EmptyEntry { index })?;
            let source = views.get(route.view()).cloned().ok_or_else(|| {
                match RouteName::new(route.name.clone()) {
                    Ok(name) => RouteTableError::UnknownView {
                        route: name,
                        view: route.view().to_string(),
                    },
                    Err(err) => RouteTableError::InvalidName(err),
                }
            })?;

            let def = route
                .alias
                .iter()
                .fold(RouteDef::new(route.path.clone(), route.name.clone(), source), |def, alias| {
                    def.alias(alias.clone())
                });
            defs.push(def);
        }

        RouteTable::with_options(defs, self.options())
    }
}

/// Components available to configured routes, keyed by view name.
pub struct ViewRegistry<V> {
    views: HashMap<String, ComponentSource<V>>,
}

impl<V> Default for ViewRegistry<V> {
    fn default() -> Self {
        Self {
            views: HashMap::new(),
        }
    }
}

impl<V: Clone + 'static> ViewRegistry<V> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a component available at startup.
    pub fn eager(&mut self, view: impl Into<String>, component: V) -> &mut Self {
        self.views
            .insert(view.into(), ComponentSource::Eager(component));
        self
    }

    /// Registers a component loaded on first visit.
    pub fn lazy(
        &mut self,
        view: impl Into<String>,
        loader: impl ComponentLoader<V> + 'static,
    ) -> &mut Self {
        self.views
            .insert(view.into(), ComponentSource::lazy(loader));
        self
    }

    /// Looks up a view.
    #[must_use]
    pub fn get(&self, view: &str) -> Option<&ComponentSource<V>> {
        self.views.get(view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LoadError;
    use crate::router::{Navigation, Router};
    use std::cell::Cell;
    use std::rc::Rc;

    const SITE: &str = r#"
[[routes]]
path = "/"
name = "home"

[[routes]]
path = "/code"
name = "code"

[[routes]]
path = "/game"
name = "game"

[[routes]]
path = "/about"
name = "about"
alias = ["/info"]

[[routes]]
path = "/*path"
name = "not-found"
view = "not_found"
"#;

    fn registry(calls: Rc<Cell<usize>>) -> ViewRegistry<&'static str> {
        let mut views = ViewRegistry::new();
        views
            .eager("home", "HomeView")
            .eager("code", "CodeView")
            .eager("game", "GameView")
            .eager("not_found", "NotFoundView")
            .lazy("about", move || {
                calls.set(calls.get() + 1);
                futures::future::ready(Ok::<_, LoadError>("AboutView"))
            });
        views
    }

    #[test]
    fn parses_toml_declaration() {
        let config = RouteTableConfig::from_source(SITE, FileFormat::Toml).expect("valid config");

        assert_eq!(config.routes.len(), 5);
        assert_eq!(config.options(), MatchOptions::default());
        let not_found = config.routes[4].as_ref().expect("present");
        assert_eq!(not_found.view(), "not_found");
        let home = config.routes[0].as_ref().expect("present");
        assert_eq!(home.view(), "home");
    }

    #[test]
    fn builds_table_from_registry() {
        let config = RouteTableConfig::from_source(SITE, FileFormat::Toml).expect("valid config");
        let table = config
            .build(&registry(Rc::new(Cell::new(0))))
            .expect("valid table");

        assert_eq!(table.len(), 5);
        assert!(table.get("about").expect("declared").source().is_lazy());
        assert!(table.catch_all().is_some());
    }

    #[tokio::test]
    async fn alias_shares_lazy_cache() {
        let calls = Rc::new(Cell::new(0));
        let config = RouteTableConfig::from_source(SITE, FileFormat::Toml).expect("valid config");
        let router = Router::new(config.build(&registry(Rc::clone(&calls))).expect("valid table"));

        for fragment in ["#/about", "#/info", "#/about"] {
            let nav = router.navigate(fragment).await.expect("navigates");
            assert!(matches!(nav, Navigation::Rendered { component: "AboutView", .. }));
        }
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn null_entry_is_rejected() {
        let json = r#"{
            "routes": [
                { "path": "/", "name": "home" },
                null,
                { "path": "/game", "name": "game" }
            ]
        }"#;
        let config = RouteTableConfig::from_source(json, FileFormat::Json).expect("valid config");
        let err = config
            .build(&registry(Rc::new(Cell::new(0))))
            .unwrap_err();
        assert_eq!(err, RouteTableError::EmptyEntry { index: 1 });
    }

    #[test]
    fn unknown_view_is_rejected() {
        let toml = r#"
[[routes]]
path = "/scores"
name = "scores"
"#;
        let config = RouteTableConfig::from_source(toml, FileFormat::Toml).expect("valid config");
        let err = config
            .build(&registry(Rc::new(Cell::new(0))))
            .unwrap_err();
        assert!(matches!(err, RouteTableError::UnknownView { view, .. } if view == "scores"));
    }

    #[test]
    fn duplicate_paths_are_rejected() {
        let toml = r#"
[[routes]]
path = "/"
name = "home"

[[routes]]
path = "/"
name = "game"
"#;
        let config = RouteTableConfig::from_source(toml, FileFormat::Toml).expect("valid config");
        let err = config
            .build(&registry(Rc::new(Cell::new(0))))
            .unwrap_err();
        assert!(matches!(err, RouteTableError::DuplicatePathConflict { .. }));
    }

    #[test]
    fn loads_from_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("routes.toml");
        std::fs::write(&path, format!("case_sensitive = true\n{}", SITE)).expect("write config");

        let config = RouteTableConfig::from_file(&path).expect("valid config");
        assert!(config.options().case_sensitive);
        assert_eq!(config.routes.len(), 5);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let result = RouteTableConfig::from_file(dir.path().join("absent.toml"));
        assert!(result.is_err());
    }
}
