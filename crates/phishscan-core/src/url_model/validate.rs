//! Strict URL validation for callers that want to reject input up front.
//!
//! Feature extraction never calls this; it accepts any string.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InvalidUrl {
    #[error("not a URL: {input}: {source}")]
    Parse {
        input: String,
        #[source]
        source: url::ParseError,
    },
    #[error("unsupported scheme {scheme:?} (expected http or https): {input}")]
    Scheme { input: String, scheme: String },
    #[error("URL has no host: {input}")]
    MissingHost { input: String },
}

/// Accepts only absolute `http`/`https` URLs with a host.
pub fn validate_url(input: &str) -> Result<url::Url, InvalidUrl> {
    let parsed = url::Url::parse(input).map_err(|source| InvalidUrl::Parse {
        input: input.to_string(),
        source,
    })?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(InvalidUrl::Scheme {
            input: input.to_string(),
            scheme: parsed.scheme().to_string(),
        });
    }
    if parsed.host_str().map_or(true, str::is_empty) {
        return Err(InvalidUrl::MissingHost {
            input: input.to_string(),
        });
    }
    Ok(parsed)
}
