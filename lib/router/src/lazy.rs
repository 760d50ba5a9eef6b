//! Lazily loaded components.
//!
//! A [`LazyComponent`] wraps a loader and memoizes it for the session:
//!
//! 1. The first request starts the load and caches the in-flight future
//! 2. Requests made while the load is in flight await the same future
//! 3. A successful result is cached and returned without reloading
//! 4. A failure resets the cache so the next request starts a fresh load
//!
//! Everything runs on the UI thread, so the shared state uses `Rc` and
//! `RefCell` and the futures are not required to be `Send`.

use crate::error::LoadError;
use async_trait::async_trait;
use futures::future::{FutureExt, LocalBoxFuture, Shared};
use std::cell::{Cell, RefCell};
use std::future::Future;
use std::rc::Rc;
use tracing::{info, warn};

/// Produces a component asynchronously.
#[async_trait(?Send)]
pub trait ComponentLoader<V> {
    /// Loads the component.
    async fn load(&self) -> Result<V, LoadError>;
}

#[async_trait(?Send)]
impl<V, F, Fut> ComponentLoader<V> for F
where
    V: 'static,
    F: Fn() -> Fut,
    Fut: Future<Output = Result<V, LoadError>> + 'static,
{
    async fn load(&self) -> Result<V, LoadError> {
        self().await
    }
}

type PendingLoad<V> = Shared<LocalBoxFuture<'static, Result<V, LoadError>>>;

enum LoadState<V> {
    Idle,
    Loading(PendingLoad<V>),
    Ready(V),
}

/// A component fetched on first use and cached for the session.
///
/// Clones share the same cache.
pub struct LazyComponent<V> {
    loader: Rc<dyn ComponentLoader<V>>,
    state: Rc<RefCell<LoadState<V>>>,
    loads: Rc<Cell<usize>>,
}

impl<V> Clone for LazyComponent<V> {
    fn clone(&self) -> Self {
        Self {
            loader: Rc::clone(&self.loader),
            state: Rc::clone(&self.state),
            loads: Rc::clone(&self.loads),
        }
    }
}

impl<V: Clone + 'static> LazyComponent<V> {
    /// Wraps a loader. Nothing is loaded until [`get`](Self::get) is called.
    pub fn new(loader: impl ComponentLoader<V> + 'static) -> Self {
        Self {
            loader: Rc::new(loader),
            state: Rc::new(RefCell::new(LoadState::Idle)),
            loads: Rc::new(Cell::new(0)),
        }
    }

    /// Returns the component, starting or joining a load if necessary.
    ///
    /// # Errors
    ///
    /// Returns the loader's error. The failure is not cached.
    pub async fn get(&self) -> Result<V, LoadError> {
        let pending = {
            let mut state = self.state.borrow_mut();
            match &*state {
                LoadState::Ready(component) => return Ok(component.clone()),
                LoadState::Loading(pending) => pending.clone(),
                LoadState::Idle => {
                    let loader = Rc::clone(&self.loader);
                    let pending = async move { loader.load().await }
                        .boxed_local()
                        .shared();
                    self.loads.set(self.loads.get() + 1);
                    info!(attempt = self.loads.get(), "loading lazy component");
                    *state = LoadState::Loading(pending.clone());
                    pending
                }
            }
        };

        let outcome = pending.clone().await;
        self.settle(&pending, &outcome);
        outcome
    }

    /// Returns the cached component without triggering a load.
    #[must_use]
    pub fn cached(&self) -> Option<V> {
        match &*self.state.borrow() {
            LoadState::Ready(component) => Some(component.clone()),
            LoadState::Idle | LoadState::Loading(_) => None,
        }
    }

    /// Returns whether a load is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(&*self.state.borrow(), LoadState::Loading(_))
    }

    /// Returns how many times the loader has been invoked.
    #[must_use]
    pub fn load_count(&self) -> usize {
        self.loads.get()
    }

    // Only the load that is still current may update the state; an older
    // failed load must not clobber a retry started after it.
    fn settle(&self, pending: &PendingLoad<V>, outcome: &Result<V, LoadError>) {
        let mut state = self.state.borrow_mut();
        let is_current = matches!(&*state, LoadState::Loading(current) if current.ptr_eq(pending));
        if !is_current {
            return;
        }

        *state = match outcome {
            Ok(component) => {
                info!(attempt = self.loads.get(), "lazy component loaded");
                LoadState::Ready(component.clone())
            }
            Err(error) => {
                warn!(%error, attempt = self.loads.get(), "lazy component load failed");
                LoadState::Idle
            }
        };
    }
}
