//! Route declarations and validated routes.

use crate::error::{LoadError, RouteTableError};
use crate::lazy::{ComponentLoader, LazyComponent};
use crate::pattern::{MatchOptions, Params, PathPattern};
use hashnav_core::RouteName;
use std::fmt;

/// Where a route's component comes from.
#[derive(Clone)]
pub enum ComponentSource<V> {
    /// Available at startup.
    Eager(V),
    /// Fetched the first time the route is visited.
    Lazy(LazyComponent<V>),
}

impl<V: Clone + 'static> ComponentSource<V> {
    /// Wraps a loader as a lazy source.
    pub fn lazy(loader: impl ComponentLoader<V> + 'static) -> Self {
        Self::Lazy(LazyComponent::new(loader))
    }

    /// Returns whether the component is loaded on demand.
    #[must_use]
    pub fn is_lazy(&self) -> bool {
        matches!(self, Self::Lazy(_))
    }

    /// Produces the component, loading it if needed.
    ///
    /// # Errors
    ///
    /// Returns the loader's error for lazy sources.
    pub async fn component(&self) -> Result<V, LoadError> {
        match self {
            Self::Eager(component) => Ok(component.clone()),
            Self::Lazy(lazy) => lazy.get().await,
        }
    }
}

impl<V> fmt::Debug for ComponentSource<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Eager(_) => f.write_str("Eager"),
            Self::Lazy(_) => f.write_str("Lazy"),
        }
    }
}

/// An unvalidated route declaration.
#[derive(Clone)]
pub struct RouteDef<V> {
    path: String,
    name: String,
    aliases: Vec<String>,
    source: ComponentSource<V>,
}

impl<V> RouteDef<V> {
    /// Declares a route with the given component source.
    pub fn new(path: impl Into<String>, name: impl Into<String>, source: ComponentSource<V>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            aliases: Vec::new(),
            source,
        }
    }

    /// Declares a route whose component is available at startup.
    pub fn eager(path: impl Into<String>, name: impl Into<String>, component: V) -> Self {
        Self::new(path, name, ComponentSource::Eager(component))
    }

    /// Adds an alternative literal path that resolves to this route.
    #[must_use]
    pub fn alias(mut self, path: impl Into<String>) -> Self {
        self.aliases.push(path.into());
        self
    }
}

impl<V: Clone + 'static> RouteDef<V> {
    /// Declares a route whose component is loaded on first visit.
    pub fn lazy(
        path: impl Into<String>,
        name: impl Into<String>,
        loader: impl ComponentLoader<V> + 'static,
    ) -> Self {
        Self::new(path, name, ComponentSource::lazy(loader))
    }
}

/// A validated route.
#[derive(Clone)]
pub struct Route<V> {
    name: RouteName,
    path: PathPattern,
    aliases: Vec<PathPattern>,
    source: ComponentSource<V>,
}

impl<V> Route<V> {
    pub(crate) fn compile(def: RouteDef<V>) -> Result<Self, RouteTableError> {
        let name = RouteName::new(def.name)?;
        let path = PathPattern::parse(&def.path)?;
        let aliases = def
            .aliases
            .iter()
            .map(|alias| match PathPattern::parse(alias)? {
                PathPattern::CatchAll { .. } => Err(RouteTableError::InvalidPattern {
                    path: alias.clone(),
                    reason: "an alias cannot be a wildcard".to_string(),
                }),
                literal => Ok(literal),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            name,
            path,
            aliases,
            source: def.source,
        })
    }

    /// Returns the route name.
    #[must_use]
    pub fn name(&self) -> &RouteName {
        &self.name
    }

    /// Returns the primary path pattern.
    #[must_use]
    pub fn path(&self) -> &PathPattern {
        &self.path
    }

    /// Returns the alias patterns.
    #[must_use]
    pub fn aliases(&self) -> &[PathPattern] {
        &self.aliases
    }

    /// Returns the component source.
    #[must_use]
    pub fn source(&self) -> &ComponentSource<V> {
        &self.source
    }

    /// Returns whether this route matches every path.
    #[must_use]
    pub fn is_catch_all(&self) -> bool {
        self.path.is_catch_all()
    }

    /// Iterates the primary path followed by its aliases.
    pub fn patterns(&self) -> impl Iterator<Item = &PathPattern> {
        std::iter::once(&self.path).chain(self.aliases.iter())
    }

    pub(crate) fn matches(&self, path: &str, options: &MatchOptions) -> Option<Params> {
        self.patterns()
            .find_map(|pattern| pattern.matches(path, options))
    }
}

impl<V> fmt::Debug for Route<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("name", &self.name)
            .field("path", &self.path)
            .field("aliases", &self.aliases)
            .field("source", &self.source)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compiles_route_with_alias() {
        let def = RouteDef::eager("/", "home", "HomeView").alias("/home");
        let route = Route::compile(def).expect("valid route");

        assert_eq!(route.name(), "home");
        assert_eq!(route.patterns().count(), 2);
        assert!(route.matches("/home", &MatchOptions::default()).is_some());
        assert!(!route.source().is_lazy());
    }

    #[test]
    fn rejects_wildcard_alias() {
        let def = RouteDef::eager("/missing", "missing", "NotFoundView").alias("/*rest");
        let err = Route::compile(def).unwrap_err();
        assert!(matches!(err, RouteTableError::InvalidPattern { .. }));
    }

    #[test]
    fn rejects_invalid_name() {
        let def = RouteDef::eager("/code", "", "CodeView");
        let err = Route::compile(def).unwrap_err();
        assert!(matches!(err, RouteTableError::InvalidName(_)));
    }

    #[tokio::test]
    async fn eager_component_resolves_immediately() {
        let source = ComponentSource::Eager("GameView");
        assert_eq!(source.component().await, Ok("GameView"));
    }
}
