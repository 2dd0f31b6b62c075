//! URL decomposition.
//!
//! Splits a raw URL string into scheme, network location, path, params,
//! query and fragment using permissive generic-syntax rules. Splitting never
//! fails: input that is not a URL at all simply yields empty components.
//! Strict validation for the shell layer lives in [`validate_url`].

mod split;
mod validate;

pub use split::split_url;
pub use validate::{validate_url, InvalidUrl};

/// Components of a URL as produced by [`split_url`].
///
/// Every component is always present; absent parts are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedUrl {
    /// Lowercased scheme (`http`), empty when none was recognised.
    pub scheme: String,
    /// Network location (`user@host:port`), exactly as written.
    pub domain: String,
    pub path: String,
    /// `;params` of the last path segment, without the leading `;`.
    pub params: String,
    pub query: String,
    pub fragment: String,
}

impl ParsedUrl {
    /// Parse `url`; shorthand for [`split_url`].
    pub fn parse(url: &str) -> Self {
        split_url(url)
    }

    /// Path with leading and trailing `/` removed.
    pub fn trimmed_path(&self) -> &str {
        self.path.trim_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trimmed_path_strips_slashes() {
        let p = ParsedUrl::parse("http://example.com//a/b/");
        assert_eq!(p.path, "//a/b/");
        assert_eq!(p.trimmed_path(), "a/b");
    }

    #[test]
    fn trimmed_path_of_root_is_empty() {
        assert_eq!(ParsedUrl::parse("http://example.com/").trimmed_path(), "");
        assert_eq!(ParsedUrl::parse("http://example.com").trimmed_path(), "");
    }
}
