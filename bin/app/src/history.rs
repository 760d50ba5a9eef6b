//! Hash history.
//!
//! The router only sees the value of `location.hash`; changes arrive through
//! the window's `hashchange` event, which fires for link clicks, the back
//! and forward buttons, and manual edits of the address bar.

#[cfg(feature = "csr")]
use leptos::prelude::*;

/// Returns the current `location.hash`, including the leading `#`.
#[cfg(feature = "csr")]
pub fn current_hash() -> String {
    location().hash().unwrap_or_default()
}

/// Returns the current `location.hash`; outside the browser this is empty.
#[cfg(not(feature = "csr"))]
pub fn current_hash() -> String {
    String::new()
}

/// Calls `handler` with the new hash on every `hashchange`.
///
/// The listener stays registered for the lifetime of the page.
#[cfg(feature = "csr")]
pub fn on_hash_change(handler: impl Fn(String) + 'static) {
    let _listener = window_event_listener(leptos::ev::hashchange, move |_| handler(current_hash()));
}

#[cfg(not(feature = "csr"))]
pub fn on_hash_change(_handler: impl Fn(String) + 'static) {}
