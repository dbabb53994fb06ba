//! Unified error types for kakaopack.
//!
//! Parsing itself never fails: malformed transcript lines degrade to
//! continuation folding or are dropped. Errors come from the edges of the
//! pipeline instead, such as reading the export from disk, writing output,
//! parsing filter dates, or rejecting a transcript that is too small to be
//! worth analyzing.

use std::io;

use thiserror::Error;

/// Minimum number of messages a transcript must contain to be accepted.
pub const MIN_MESSAGES: usize = 10;

/// A specialized [`Result`] type for kakaopack operations.
///
/// # Example
///
/// ```rust
/// use kakaopack::error::Result;
/// use kakaopack::ChatMessage;
///
/// fn my_function() -> Result<Vec<ChatMessage>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, KakaoError>;

/// The error type for all kakaopack operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum KakaoError {
    /// An I/O error occurred while reading the export or writing output.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The input bytes are not valid UTF-8.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Invalid date format in filter configuration.
    ///
    /// Date filters expect YYYY-MM-DD format.
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        /// The invalid date string that was provided
        input: String,
        /// Expected format description
        expected: &'static str,
    },

    /// A value does not match the expected structure (e.g. an unknown
    /// output format name).
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// The format that was expected
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// The transcript parsed, but holds too few messages to analyze.
    ///
    /// Usually means the input is not a KakaoTalk export at all.
    #[error(
        "Too few messages: found {found}, need at least {minimum}. Is this a KakaoTalk chat export?"
    )]
    TooFewMessages {
        /// Number of messages found
        found: usize,
        /// Minimum required
        minimum: usize,
    },

    /// No participant could be identified in the transcript.
    #[error("No participants found. Check the export file format.")]
    NoParticipants,

    /// The requested participant does not appear in the transcript.
    #[error("Participant '{name}' not found. Available: {available}")]
    UnknownParticipant {
        /// Name that was requested
        name: String,
        /// Comma-separated list of known participants
        available: String,
    },
}

impl From<std::string::FromUtf8Error> for KakaoError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        KakaoError::Utf8 {
            context: "input decoding".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl KakaoError {
    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        KakaoError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Creates an invalid date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        KakaoError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD",
        }
    }

    /// Creates a too-few-messages rejection using [`MIN_MESSAGES`].
    pub fn too_few_messages(found: usize) -> Self {
        KakaoError::TooFewMessages {
            found,
            minimum: MIN_MESSAGES,
        }
    }

    /// Creates an unknown participant error listing the known names.
    pub fn unknown_participant<'a>(
        name: impl Into<String>,
        available: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        KakaoError::UnknownParticipant {
            name: name.into(),
            available: available.into_iter().collect::<Vec<_>>().join(", "),
        }
    }

    /// Returns `true` if this is an I/O error.
    pub fn is_io(&self) -> bool {
        matches!(self, KakaoError::Io(_))
    }

    /// Returns `true` if this is an invalid date error.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, KakaoError::InvalidDate { .. })
    }

    /// Returns `true` if the transcript was rejected as unusable input.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            KakaoError::TooFewMessages { .. } | KakaoError::NoParticipants
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let err = KakaoError::from(io::Error::new(io::ErrorKind::NotFound, "missing.txt"));
        assert!(err.to_string().contains("IO error"));
        assert!(err.is_io());
        assert!(!err.is_rejection());
    }

    #[test]
    fn test_invalid_date_display() {
        let err = KakaoError::invalid_date("not-a-date");
        let display = err.to_string();
        assert!(display.contains("not-a-date"));
        assert!(display.contains("YYYY-MM-DD"));
        assert!(err.is_invalid_date());
    }

    #[test]
    fn test_too_few_messages() {
        let err = KakaoError::too_few_messages(3);
        let display = err.to_string();
        assert!(display.contains("found 3"));
        assert!(display.contains("at least 10"));
        assert!(err.is_rejection());
    }

    #[test]
    fn test_no_participants_is_rejection() {
        assert!(KakaoError::NoParticipants.is_rejection());
    }

    #[test]
    fn test_unknown_participant_lists_names() {
        let err = KakaoError::unknown_participant("영희", ["민수", "철수"]);
        let display = err.to_string();
        assert!(display.contains("'영희'"));
        assert!(display.contains("민수, 철수"));
    }

    #[test]
    fn test_from_utf8_error() {
        let utf8_err = String::from_utf8(vec![0xff, 0xfe]).unwrap_err();
        let err: KakaoError = utf8_err.into();
        assert!(err.to_string().contains("UTF-8"));
    }

    #[test]
    fn test_error_source_chain() {
        use std::error::Error;
        let err = KakaoError::from(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        assert!(err.source().is_some());
    }

    #[cfg(feature = "json-output")]
    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid").unwrap_err();
        let err: KakaoError = json_err.into();
        assert!(err.to_string().contains("JSON error"));
    }
}
