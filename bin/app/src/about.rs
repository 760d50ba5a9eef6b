//! Content for the About page, fetched on first visit.

use crate::views::AboutView;
use hashnav_router::LoadError;
use leptos::children::ViewFn;
use leptos::prelude::*;
use serde::Deserialize;
use tracing::debug;

/// File the About page is built from, relative to the page.
pub const ABOUT_FILE: &str = "about.json";

/// Text shown on the About page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AboutContent {
    pub title: String,
    #[serde(default)]
    pub paragraphs: Vec<String>,
}

/// Fetches and parses the About content.
///
/// # Errors
///
/// Returns a [`LoadError`] if the request fails, the server answers with an
/// error status, or the body is not valid content.
pub async fn fetch_about(url: &str) -> Result<AboutContent, LoadError> {
    debug!(%url, "fetching about content");
    let response = reqwest::get(url)
        .await
        .and_then(reqwest::Response::error_for_status)
        .map_err(|e| LoadError::new(format!("failed to fetch {}: {}", url, e)))?;

    response
        .json::<AboutContent>()
        .await
        .map_err(|e| LoadError::new(format!("invalid about content: {}", e)))
}

/// Loads the About view; used as the lazy loader for the `about` route.
///
/// # Errors
///
/// Propagates any [`fetch_about`] failure.
pub async fn load_about_view(url: String) -> Result<ViewFn, LoadError> {
    let content = fetch_about(&url).await?;
    Ok(ViewFn::from(move || {
        let content = content.clone();
        view! { <AboutView content=content/> }
    }))
}

/// Builds the content URL from the page origin and path.
///
/// The file sits next to `index.html`, so the last path segment is replaced.
#[must_use]
pub fn about_url_for(origin: &str, pathname: &str) -> String {
    let dir = match pathname.rfind('/') {
        Some(idx) => &pathname[..=idx],
        None => "/",
    };
    format!("{}{}{}", origin.trim_end_matches('/'), dir, ABOUT_FILE)
}

/// URL of the About content for the current page.
#[cfg(feature = "csr")]
#[must_use]
pub fn about_url() -> String {
    let location = location();
    let origin = location.origin().unwrap_or_default();
    let pathname = location.pathname().unwrap_or_else(|_| "/".to_string());
    about_url_for(&origin, &pathname)
}

#[cfg(not(feature = "csr"))]
#[must_use]
pub fn about_url() -> String {
    about_url_for("http://localhost:8080", "/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_content_parses() {
        let content: AboutContent =
            serde_json::from_str(include_str!("../public/about.json")).expect("valid content");
        assert!(!content.title.is_empty());
        assert!(!content.paragraphs.is_empty());
    }

    #[test]
    fn paragraphs_default_to_empty() {
        let content: AboutContent =
            serde_json::from_str(r#"{ "title": "About" }"#).expect("valid content");
        assert!(content.paragraphs.is_empty());
    }

    #[test]
    fn url_sits_next_to_the_page() {
        assert_eq!(
            about_url_for("https://example.com", "/"),
            "https://example.com/about.json"
        );
        assert_eq!(
            about_url_for("https://example.com", "/site/index.html"),
            "https://example.com/site/about.json"
        );
        assert_eq!(
            about_url_for("https://example.com/", "/site/"),
            "https://example.com/site/about.json"
        );
    }
}
