//! Target URL validation.
//!
//! Targets are stored as given (trimmed); only parseability and scheme
//! are checked. There is no canonicalization here: rewriting the target
//! would change what the redirect serves.

use url::Url;

/// Errors produced when a target URL is rejected.
#[derive(Debug, thiserror::Error)]
pub enum TargetUrlError {
    #[error("not an absolute URL: {0}")]
    InvalidFormat(String),

    #[error("only http and https URLs are allowed, got scheme '{0}'")]
    UnsupportedScheme(String),
}

/// Accepts iff `target` parses as an absolute URL with an `http` or
/// `https` scheme. Any parse failure or other scheme rejects.
pub fn validate_target(target: &str) -> Result<(), TargetUrlError> {
    let url = Url::parse(target).map_err(|e| TargetUrlError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(TargetUrlError::UnsupportedScheme(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http() {
        assert!(validate_target("http://example.com").is_ok());
    }

    #[test]
    fn test_accepts_https_with_path_and_query() {
        assert!(validate_target("https://example.com/a/b?q=1#frag").is_ok());
    }

    #[test]
    fn test_rejects_ftp() {
        let err = validate_target("ftp://x.com").unwrap_err();
        assert!(matches!(err, TargetUrlError::UnsupportedScheme(s) if s == "ftp"));
    }

    #[test]
    fn test_rejects_javascript_scheme() {
        assert!(validate_target("javascript:alert(1)").is_err());
    }

    #[test]
    fn test_rejects_data_scheme() {
        assert!(validate_target("data:text/html,hi").is_err());
    }

    #[test]
    fn test_rejects_relative_url() {
        assert!(matches!(
            validate_target("/just/a/path"),
            Err(TargetUrlError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_rejects_plain_text() {
        assert!(validate_target("not-a-url").is_err());
    }

    #[test]
    fn test_rejects_empty() {
        assert!(validate_target("").is_err());
    }
}
