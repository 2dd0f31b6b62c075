//! Permissive generic-syntax URL splitting.

use super::ParsedUrl;

/// Schemes whose last path segment may carry `;params`.
const SCHEMES_WITH_PARAMS: &[&str] = &[
    "", "ftp", "hdl", "prospero", "http", "imap", "https", "shttp", "rtsp", "rtsps", "rtspu",
    "sip", "sips", "mms", "sftp", "tel",
];

fn is_scheme_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')
}

/// Splits `url` into its components without validating it.
///
/// Leading C0 controls and spaces are stripped and ASCII tab, CR and LF are
/// removed anywhere before splitting. A scheme is recognised only when the
/// text before the first `:` starts with an ASCII letter and consists of
/// scheme characters. The network location is only taken after `//` and ends
/// at the first `/`, `?` or `#`.
///
/// # Examples
///
/// - `split_url("http://example.com/a?b=1")` → domain `example.com`, path `/a`, query `b=1`
/// - `split_url("example.com/a")` → domain empty, path `example.com/a`
pub fn split_url(url: &str) -> ParsedUrl {
    let cleaned: String = url
        .trim_start_matches(|c: char| c <= ' ')
        .chars()
        .filter(|c| !matches!(c, '\t' | '\r' | '\n'))
        .collect();
    let mut rest = cleaned.as_str();

    let mut scheme = String::new();
    if let Some(i) = rest.find(':') {
        let candidate = &rest[..i];
        let starts_with_letter = candidate
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic());
        if starts_with_letter && candidate.chars().all(is_scheme_char) {
            scheme = candidate.to_ascii_lowercase();
            rest = &rest[i + 1..];
        }
    }

    let mut domain = "";
    if let Some(after) = rest.strip_prefix("//") {
        let end = after.find(['/', '?', '#']).unwrap_or(after.len());
        domain = &after[..end];
        rest = &after[end..];
    }

    let mut fragment = "";
    if let Some((before, frag)) = rest.split_once('#') {
        fragment = frag;
        rest = before;
    }

    let mut query = "";
    if let Some((before, q)) = rest.split_once('?') {
        query = q;
        rest = before;
    }

    let (path, params) = if SCHEMES_WITH_PARAMS.contains(&scheme.as_str()) {
        split_params(rest)
    } else {
        (rest, "")
    };

    ParsedUrl {
        scheme,
        domain: domain.to_string(),
        path: path.to_string(),
        params: params.to_string(),
        query: query.to_string(),
        fragment: fragment.to_string(),
    }
}

/// Splits `;params` off the last path segment at its first `;`.
fn split_params(path: &str) -> (&str, &str) {
    let last_segment_start = path.rfind('/').unwrap_or(0);
    match path[last_segment_start..].find(';') {
        Some(i) => {
            let at = last_segment_start + i;
            (&path[..at], &path[at + 1..])
        }
        None => (path, ""),
    }
}
