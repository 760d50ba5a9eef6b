//! URL fragment parsing.
//!
//! Navigation state lives entirely in the hash portion of the URL
//! (`https://host/#/about?tab=1`), so the site can be served as static files
//! without server-side rewrite rules for deep links.

use std::fmt;

/// The in-app location carried by a URL fragment.
///
/// `path` always starts with `/`; an empty fragment is the root path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    path: String,
    query: Option<String>,
}

impl Fragment {
    /// Parses the value of `location.hash`, with or without the leading `#`.
    #[must_use]
    pub fn parse(hash: &str) -> Self {
        let raw = hash.strip_prefix('#').unwrap_or(hash);
        let (path, query) = match raw.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (raw, None),
        };

        let path = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{path}")
        };

        Self {
            path,
            query: query.filter(|q| !q.is_empty()).map(str::to_string),
        }
    }

    /// Extracts the fragment from a full URL. A URL without `#` is the root.
    #[must_use]
    pub fn from_url(url: &str) -> Self {
        match url.split_once('#') {
            Some((_, hash)) => Self::parse(hash),
            None => Self::root(),
        }
    }

    /// The root fragment, `#/`.
    #[must_use]
    pub fn root() -> Self {
        Self {
            path: "/".to_string(),
            query: None,
        }
    }

    /// Returns the path portion.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the query portion, without the `?`.
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// Renders the fragment as an `href` value, e.g. `#/about?tab=1`.
    #[must_use]
    pub fn href(&self) -> String {
        self.to_string()
    }
}

impl Default for Fragment {
    fn default() -> Self {
        Self::root()
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.path)?;
        if let Some(query) = &self.query {
            write!(f, "?{query}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_hash_is_root() {
        assert_eq!(Fragment::parse("").path(), "/");
        assert_eq!(Fragment::parse("#").path(), "/");
    }

    #[test]
    fn strips_hash_and_splits_query() {
        let fragment = Fragment::parse("#/game?level=3");
        assert_eq!(fragment.path(), "/game");
        assert_eq!(fragment.query(), Some("level=3"));
    }

    #[test]
    fn adds_missing_leading_slash() {
        assert_eq!(Fragment::parse("#code").path(), "/code");
    }

    #[test]
    fn empty_query_is_dropped() {
        assert_eq!(Fragment::parse("#/about?").query(), None);
    }

    #[test]
    fn from_url_uses_portion_after_hash() {
        let fragment = Fragment::from_url("https://example.com/app/#/about");
        assert_eq!(fragment.path(), "/about");

        let root = Fragment::from_url("https://example.com/app/");
        assert_eq!(root, Fragment::root());
    }

    #[test]
    fn href_round_trips_through_parse() {
        let fragment = Fragment::parse("/code?lang=rust");
        assert_eq!(fragment.href(), "#/code?lang=rust");
        assert_eq!(Fragment::parse(&fragment.href()), fragment);
    }
}
