//! Main Leptos application component and hash routing.

use crate::about::about_url;
use crate::history::{current_hash, on_hash_change};
use crate::routes::{NAV, build_router, title_for};
use crate::views::{ConfigErrorView, LoadFailedView, NotFoundView};
use hashnav_core::RouteName;
use hashnav_router::{ComponentSource, Navigation, NavigationError, Router};
use leptos::children::ViewFn;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::{Title, provide_meta_context};
use tracing::{error, warn};

/// What the main area currently shows.
#[derive(Clone)]
pub enum Outlet {
    /// A page component is being fetched.
    Loading,
    Page { route: RouteName, view: ViewFn },
    /// No route matched and the table has no catch-all.
    Unmatched { path: String },
    LoadFailed { message: String },
    Misconfigured { message: String },
}

impl Outlet {
    /// Document title for this outlet.
    #[must_use]
    pub fn title(&self) -> String {
        match self {
            Self::Loading => "Loading | hashnav".to_string(),
            Self::Page { route, .. } => title_for(route.as_ref()),
            Self::Unmatched { .. } => title_for(""),
            Self::LoadFailed { .. } | Self::Misconfigured { .. } => "Error | hashnav".to_string(),
        }
    }
}

/// Maps a finished navigation onto the outlet.
///
/// Returns `None` for superseded navigations, which leave the outlet to the
/// navigation that replaced them.
#[must_use]
pub fn outlet_for(result: Result<Navigation<ViewFn>, NavigationError>) -> Option<Outlet> {
    match result {
        Ok(Navigation::Rendered {
            name, component, ..
        }) => Some(Outlet::Page {
            route: name,
            view: component,
        }),
        Ok(Navigation::Unresolved { fragment }) => Some(Outlet::Unmatched {
            path: fragment.path().to_string(),
        }),
        Ok(Navigation::Superseded) => None,
        Err(err) => {
            warn!(error = %err, "page failed to load");
            Some(Outlet::LoadFailed {
                message: err.to_string(),
            })
        }
    }
}

/// Whether navigating to `hash` has to wait for a component download.
fn needs_load(router: &Router<ViewFn>, hash: &str) -> bool {
    router.resolve(hash).matched().is_some_and(|matched| {
        matches!(matched.route().source(), ComponentSource::Lazy(lazy) if lazy.cached().is_none())
    })
}

/// The main application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let outlet = RwSignal::new(Outlet::Loading);

    let links: Vec<(String, &'static str)> = match build_router(about_url()) {
        Ok(router) => {
            let links = NAV
                .iter()
                .filter_map(|(name, label)| router.href(name).map(|href| (href, *label)))
                .collect();

            let router = StoredValue::new_local(router);
            let navigate = move |hash: String| {
                let router = router.get_value();
                if needs_load(&router, &hash) {
                    outlet.set(Outlet::Loading);
                }
                spawn_local(async move {
                    if let Some(next) = outlet_for(router.navigate(&hash).await) {
                        outlet.set(next);
                    }
                });
            };

            navigate(current_hash());
            on_hash_change(navigate);
            links
        }
        Err(report) => {
            error!(error = %report, "route table rejected");
            outlet.set(Outlet::Misconfigured {
                message: report.to_string(),
            });
            Vec::new()
        }
    };

    view! {
        <Title text=move || outlet.with(Outlet::title)/>
        <NavBar links=links/>
        <main class="container">
            {move || match outlet.get() {
                Outlet::Loading => view! { <p class="loading">"Loading..."</p> }.into_any(),
                Outlet::Page { view, .. } => view.run(),
                Outlet::Unmatched { path } => view! { <NotFoundView path=path/> }.into_any(),
                Outlet::LoadFailed { message } => {
                    view! { <LoadFailedView message=message/> }.into_any()
                }
                Outlet::Misconfigured { message } => {
                    view! { <ConfigErrorView message=message/> }.into_any()
                }
            }}
        </main>
    }
}

/// Site menu.
#[component]
fn NavBar(links: Vec<(String, &'static str)>) -> impl IntoView {
    view! {
        <nav class="nav">
            {links
                .into_iter()
                .map(|(href, label)| view! { <a href=href>{label}</a> })
                .collect_view()}
        </nav>
    }
}
