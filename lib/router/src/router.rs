//! Navigation over a route table.
//!
//! The router owns the [`NavigationState`] for the lifetime of the page. Each
//! call to [`Router::navigate`] bumps a generation counter; a navigation that
//! finishes after a newer one started reports [`Navigation::Superseded`] and
//! leaves the state alone, so a slow lazy load never mounts over the page the
//! user moved on to.

use crate::error::NavigationError;
use crate::fragment::Fragment;
use crate::pattern::Params;
use crate::table::{Resolution, RouteTable};
use hashnav_core::RouteName;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tracing::{debug, instrument, warn};

/// The route currently shown.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum NavigationState {
    /// No navigation has completed yet.
    #[default]
    Pending,
    /// A route is displayed.
    Resolved {
        name: RouteName,
        fragment: Fragment,
        params: Params,
    },
    /// The fragment matched nothing and there is no catch-all.
    Unresolved { fragment: Fragment },
}

impl NavigationState {
    /// Returns the name of the displayed route.
    #[must_use]
    pub fn route_name(&self) -> Option<&RouteName> {
        match self {
            Self::Resolved { name, .. } => Some(name),
            Self::Pending | Self::Unresolved { .. } => None,
        }
    }
}

/// Outcome of a completed navigation.
#[derive(Debug, Clone)]
pub enum Navigation<V> {
    /// The route resolved and its component is ready to mount.
    Rendered {
        name: RouteName,
        fragment: Fragment,
        params: Params,
        component: V,
    },
    /// Nothing matched.
    Unresolved { fragment: Fragment },
    /// A newer navigation started before this one finished.
    Superseded,
}

struct RouterState<V> {
    table: RouteTable<V>,
    current: RefCell<NavigationState>,
    generation: Cell<u64>,
}

/// Resolves fragments and tracks the current route.
///
/// Clones share the same table and state.
pub struct Router<V> {
    inner: Rc<RouterState<V>>,
}

impl<V> Clone for Router<V> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<V: Clone + 'static> Router<V> {
    /// Creates a router in the [`NavigationState::Pending`] state.
    #[must_use]
    pub fn new(table: RouteTable<V>) -> Self {
        Self {
            inner: Rc::new(RouterState {
                table,
                current: RefCell::new(NavigationState::Pending),
                generation: Cell::new(0),
            }),
        }
    }

    /// Returns the route table.
    #[must_use]
    pub fn table(&self) -> &RouteTable<V> {
        &self.inner.table
    }

    /// Returns a snapshot of the navigation state.
    #[must_use]
    pub fn state(&self) -> NavigationState {
        self.inner.current.borrow().clone()
    }

    /// Resolves a fragment without navigating.
    #[must_use]
    pub fn resolve(&self, fragment: &str) -> Resolution<'_, V> {
        self.inner.table.resolve(Fragment::parse(fragment).path())
    }

    /// Returns the `#/path` link for a named route.
    #[must_use]
    pub fn href(&self, name: &str) -> Option<String> {
        self.inner.table.href(name)
    }

    /// Navigates to a fragment, loading the route's component if needed.
    ///
    /// Unmatched fragments are not errors; they produce
    /// [`Navigation::Unresolved`].
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::ComponentLoadFailure`] if a lazy component
    /// fails to load. The state keeps its previous value and the next
    /// navigation to the route retries the load.
    #[instrument(skip(self))]
    pub async fn navigate(&self, fragment: &str) -> Result<Navigation<V>, NavigationError> {
        let fragment = Fragment::parse(fragment);
        let generation = self.inner.generation.get() + 1;
        self.inner.generation.set(generation);

        let matched = match self.inner.table.resolve(fragment.path()) {
            Resolution::Matched(matched) => matched,
            Resolution::Unresolved { path } => {
                debug!(%path, "no route matches fragment");
                self.set_state(NavigationState::Unresolved {
                    fragment: fragment.clone(),
                });
                return Ok(Navigation::Unresolved { fragment });
            }
        };

        let route = matched.route();
        let name = route.name().clone();
        let outcome = route.source().component().await;

        if self.inner.generation.get() != generation {
            debug!(route = %name, "navigation superseded");
            return Ok(Navigation::Superseded);
        }

        let component = outcome.map_err(|error| {
            warn!(route = %name, %error, "navigation failed");
            NavigationError::ComponentLoadFailure {
                route: name.clone(),
                reason: error.to_string(),
            }
        })?;

        debug!(route = %name, path = fragment.path(), "navigation resolved");
        let params = matched.params().clone();
        self.set_state(NavigationState::Resolved {
            name: name.clone(),
            fragment: fragment.clone(),
            params: params.clone(),
        });

        Ok(Navigation::Rendered {
            name,
            fragment,
            params,
            component,
        })
    }

    fn set_state(&self, state: NavigationState) {
        *self.inner.current.borrow_mut() = state;
    }
}
