//! The site's route table.
//!
//! Routes are declared in `routes.toml`, bundled into the binary, and bound
//! to the page components registered here.

use crate::about::load_about_view;
use crate::error::ShellError;
use crate::views::{CodeView, GameView, HomeView, NotFoundView};
use config::FileFormat;
use hashnav_router::{RouteTableConfig, Router, ViewRegistry};
use leptos::children::ViewFn;
use leptos::prelude::*;
use tracing::info;

/// Route declarations shipped with the app.
pub const ROUTES: &str = include_str!("../routes.toml");

/// Menu entries as `(route name, label)`, in display order.
pub const NAV: [(&str, &str); 4] = [
    ("home", "Home"),
    ("code", "Code"),
    ("game", "Game"),
    ("about", "About"),
];

/// Registers the page components by view name.
pub fn views(about_url: String) -> ViewRegistry<ViewFn> {
    let mut views = ViewRegistry::new();
    views
        .eager("home", ViewFn::from(|| view! { <HomeView/> }))
        .eager("code", ViewFn::from(|| view! { <CodeView/> }))
        .eager("game", ViewFn::from(|| view! { <GameView/> }))
        .eager("not_found", ViewFn::from(|| view! { <NotFoundView/> }))
        .lazy("about", move || load_about_view(about_url.clone()));
    views
}

/// Builds the router from the bundled declaration.
///
/// # Errors
///
/// Returns a [`ShellError`] if the declaration is malformed or the table
/// fails validation.
pub fn build_router(about_url: String) -> hashnav_core::Result<Router<ViewFn>, ShellError> {
    let config = RouteTableConfig::from_source(ROUTES, FileFormat::Toml).map_err(|e| {
        ShellError::InvalidRouteConfig {
            details: e.to_string(),
        }
    })?;
    let table = config.build(&views(about_url)).map_err(ShellError::from)?;
    info!(routes = table.len(), "route table loaded");
    Ok(Router::new(table))
}

/// Page title for a route.
#[must_use]
pub fn title_for(route: &str) -> String {
    let label = NAV
        .iter()
        .find(|(name, _)| *name == route)
        .map_or("Not found", |(_, label)| *label);
    format!("{} | hashnav", label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hashnav_router::Resolution;

    fn router() -> Router<ViewFn> {
        build_router("http://localhost/about.json".to_string()).expect("bundled routes are valid")
    }

    fn resolved(router: &Router<ViewFn>, fragment: &str) -> String {
        match router.resolve(fragment) {
            Resolution::Matched(matched) => matched.route().name().to_string(),
            Resolution::Unresolved { path } => panic!("{} did not resolve", path),
        }
    }

    #[test]
    fn bundled_table_resolves_every_page() {
        let router = router();
        assert_eq!(resolved(&router, ""), "home");
        assert_eq!(resolved(&router, "#/"), "home");
        assert_eq!(resolved(&router, "#/code"), "code");
        assert_eq!(resolved(&router, "#/game"), "game");
        assert_eq!(resolved(&router, "#/about"), "about");
        assert_eq!(resolved(&router, "#/missing/page"), "not-found");
    }

    #[test]
    fn only_about_is_lazy() {
        let router = router();
        for route in router.table().routes() {
            assert_eq!(route.source().is_lazy(), route.name() == "about", "{}", route.name());
        }
        assert!(router.table().catch_all().is_some());
    }

    #[test]
    fn every_menu_entry_has_a_link() {
        let router = router();
        for (name, _) in NAV {
            let href = router.href(name).expect("menu route exists");
            assert!(href.starts_with("#/"), "{}", href);
        }
    }

    #[test]
    fn titles_follow_menu_labels() {
        assert_eq!(title_for("game"), "Game | hashnav");
        assert_eq!(title_for("not-found"), "Not found | hashnav");
    }
}
