//! Error types for the vaultnotes client
//!
//! All errors use thiserror for structured error handling.
//! Every transport call resolves to either a typed value or one of these;
//! nothing panics past the client boundary.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Server returned HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("{message}")]
    Api { code: i64, message: String },

    #[error("Response decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Response envelope carried no data")]
    MissingData,
}

impl Error {
    /// Text suitable for direct user display.
    ///
    /// Application failures surface the server message verbatim (with any
    /// field-level details already appended); transport and decode failures
    /// collapse to a generic network message so raw error internals never
    /// reach the user.
    pub fn user_message(&self) -> String {
        match self {
            Error::Api { message, .. } => message.clone(),
            _ => "Network response was not ok".to_string(),
        }
    }

    /// True when the failure came from the application envelope rather than
    /// the transport or decoding.
    pub fn is_api(&self) -> bool {
        matches!(self, Error::Api { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_displays_server_message() {
        let err = Error::Api {
            code: 500,
            message: "vault not found".to_string(),
        };

        assert_eq!(err.user_message(), "vault not found");
        assert!(err.is_api());
    }

    #[test]
    fn test_status_error_displays_generic_message() {
        let err = Error::Status(reqwest::StatusCode::BAD_GATEWAY);

        assert_eq!(err.user_message(), "Network response was not ok");
        assert!(!err.is_api());
    }
}
