//! Target URL validation
//!
//! Rejects dangerous schemes before anything reaches the store.

use url::Url;

use crate::errors::{MinilinkError, Result};

/// Schemes that must never be stored as redirect targets.
const BLOCKED_SCHEMES: &[&str] = &["javascript", "data", "file", "vbscript", "about", "blob"];

/// Validate a target URL.
///
/// The URL must be non-empty, parseable, and use http or https.
pub fn validate_url(raw: &str) -> Result<()> {
    let raw = raw.trim();

    if raw.is_empty() {
        return Err(MinilinkError::validation("URL cannot be empty"));
    }

    // Url::parse normalizes the scheme to lowercase
    let parsed =
        Url::parse(raw).map_err(|e| MinilinkError::validation(format!("Invalid URL: {}", e)))?;

    let scheme = parsed.scheme();
    if BLOCKED_SCHEMES.contains(&scheme) {
        return Err(MinilinkError::validation(format!(
            "URL scheme '{}' is not allowed",
            scheme
        )));
    }

    if scheme != "http" && scheme != "https" {
        return Err(MinilinkError::validation(format!(
            "Invalid scheme '{}'. Only http:// and https:// are allowed",
            scheme
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_urls() {
        assert!(validate_url("http://example.com").is_ok());
        assert!(validate_url("https://example.com").is_ok());
        assert!(validate_url("https://example.com/path?query=1").is_ok());
        assert!(validate_url("http://localhost:7777").is_ok());
    }

    #[test]
    fn test_blocked_schemes() {
        assert!(validate_url("javascript:alert(1)").is_err());
        assert!(validate_url("data:text/html,<script>alert(1)</script>").is_err());
        assert!(validate_url("file:///etc/passwd").is_err());
        assert!(validate_url("JAVASCRIPT:alert(1)").is_err());
    }

    #[test]
    fn test_non_http_schemes() {
        assert!(validate_url("ftp://example.com").is_err());
        assert!(validate_url("mailto:test@example.com").is_err());
    }

    #[test]
    fn test_empty_and_malformed() {
        assert!(validate_url("").is_err());
        assert!(validate_url("   ").is_err());
        assert!(validate_url("not a url").is_err());
        assert!(validate_url("example.com").is_err());
    }
}
