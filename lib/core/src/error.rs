//! Error handling foundation for hashnav.
//!
//! Library crates return their own typed error enums. The application layer
//! wraps them in rootcause reports through this alias so each layer can add
//! its own context as errors propagate.

use rootcause::Report;

/// A Result type alias using rootcause's Report for error handling.
pub type Result<T, C = ()> = std::result::Result<T, Report<C>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_type_works() {
        let ok: Result<&str> = Ok("home");
        assert_eq!(ok.expect("should be ok"), "home");
    }
}
