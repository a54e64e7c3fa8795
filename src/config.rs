//! Client configuration
//!
//! The session context threaded into every transport call, plus pagination
//! defaults used by callers that page through note lists. The token is
//! read-only for the lifetime of the session; no transport call mutates it.

// ===== Pagination Defaults =====

/// Default page size for note and history listings
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// First page number; the server's pager is 1-based
pub const FIRST_PAGE: u32 = 1;

/// Session context for the note synchronization API.
///
/// Passed explicitly into [`crate::api::client::NoteClient`] rather than
/// read from ambient globals, so the single-writer rule for session state
/// is visible at every call site.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API origin, e.g. `https://notes.example.com` (no trailing slash)
    pub api_origin: String,
    /// Bearer credential sent in the `Token` header
    pub token: String,
    /// Request origin sent in the `Domain` header
    pub domain: String,
    /// Client locale tag sent in the `Lang` header, e.g. `en-US`
    pub lang: String,
}

impl ClientConfig {
    pub fn new(api_origin: &str, token: &str, domain: &str, lang: &str) -> Self {
        Self {
            api_origin: api_origin.trim_end_matches('/').to_string(),
            token: token.to_string(),
            domain: domain.to_string(),
            lang: lang.to_string(),
        }
    }

    /// Absolute URL for an API route.
    pub(crate) fn endpoint(&self, route: &str) -> String {
        format!("{}{}", self.api_origin, route)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_stripped() {
        let config = ClientConfig::new("https://notes.example.com/", "t", "d", "en");
        assert_eq!(config.endpoint("/api/notes"), "https://notes.example.com/api/notes");
    }

    #[test]
    fn test_endpoint_joins_route() {
        let config = ClientConfig::new("http://127.0.0.1:8080", "t", "d", "en");
        assert_eq!(config.endpoint("/api/note"), "http://127.0.0.1:8080/api/note");
    }
}
