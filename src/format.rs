//! Output format selection.
//!
//! [`OutputFormat`] names every writer in [`core::output`](crate::core::output)
//! and dispatches to it, so callers (the CLI included) pick a format without
//! touching feature-gated functions directly.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() -> kakaopack::Result<()> {
//! use kakaopack::format::{OutputFormat, to_format_string};
//! use kakaopack::core::models::OutputConfig;
//! use kakaopack::parser::KakaoParser;
//!
//! let chat = KakaoParser::new().parse_str("[민수] [오후 3:22] 안녕하세요");
//! let csv = to_format_string(&chat, OutputFormat::Csv, &OutputConfig::new())?;
//! assert!(csv.contains("민수;안녕하세요"));
//!
//! let format = OutputFormat::from_path("chat.jsonl")?;
//! assert_eq!(format, OutputFormat::Jsonl);
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};

use crate::core::models::{OutputConfig, ParsedChat};
use crate::error::KakaoError;

/// Output format for a parsed chat.
///
/// - [`Json`](OutputFormat::Json) - the complete parse result
/// - [`Jsonl`](OutputFormat::Jsonl) - one message per line
/// - [`Csv`](OutputFormat::Csv) - semicolon-delimited messages
/// - [`Digest`](OutputFormat::Digest) - analysis request body for one participant
///
/// # Example
///
/// ```rust
/// use kakaopack::format::OutputFormat;
/// use std::str::FromStr;
///
/// let format = OutputFormat::from_str("digest").unwrap();
/// assert_eq!(format, OutputFormat::Digest);
/// assert_eq!(format.extension(), "json");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// Pretty-printed [`ParsedChat`]
    #[default]
    Json,

    /// JSON Lines, one message object per line
    Jsonl,

    /// CSV with semicolon delimiter
    Csv,

    /// `{userName, chatText, participantSummary}` for the analysis service
    Digest,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json | OutputFormat::Digest => "json",
            OutputFormat::Jsonl => "jsonl",
            OutputFormat::Csv => "csv",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["json", "jsonl", "ndjson", "csv", "digest"]
    }

    /// Returns all available formats.
    pub fn all() -> &'static [OutputFormat] {
        &[
            OutputFormat::Json,
            OutputFormat::Jsonl,
            OutputFormat::Csv,
            OutputFormat::Digest,
        ]
    }

    /// Returns the MIME type for this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputFormat::Json | OutputFormat::Digest => "application/json",
            OutputFormat::Jsonl => "application/x-ndjson",
            OutputFormat::Csv => "text/csv",
        }
    }

    /// Detects format from a file path based on extension.
    ///
    /// `.json` maps to [`Json`](OutputFormat::Json); the digest is never
    /// inferred from a path.
    pub fn from_path(path: &str) -> Result<Self, KakaoError> {
        let ext = path.rsplit('.').next().unwrap_or("").to_lowercase();

        match ext.as_str() {
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(KakaoError::invalid_format(
                "output",
                format!("Unknown file extension: '.{ext}'. Expected one of: json, jsonl, csv"),
            )),
        }
    }

    fn required_feature(self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv-output",
            OutputFormat::Json | OutputFormat::Jsonl | OutputFormat::Digest => "json-output",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Jsonl => write!(f, "JSONL"),
            OutputFormat::Csv => write!(f, "CSV"),
            OutputFormat::Digest => write!(f, "Digest"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            "csv" => Ok(OutputFormat::Csv),
            "digest" => Ok(OutputFormat::Digest),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                OutputFormat::all_names().join(", ")
            )),
        }
    }
}

fn missing_feature(format: OutputFormat) -> KakaoError {
    KakaoError::invalid_format(
        "output",
        format!(
            "Output format {format} requires the '{}' feature to be enabled",
            format.required_feature()
        ),
    )
}

/// Writes the chat to a file in the specified format.
///
/// # Errors
///
/// Returns an error if:
/// - The required feature for the format is not enabled
/// - [`Digest`](OutputFormat::Digest) is requested without a known `config.user`
/// - The file cannot be written
#[allow(unused_variables)]
pub fn write_to_format(
    chat: &ParsedChat,
    path: &str,
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<(), KakaoError> {
    match format {
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::write_json(chat, path),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::write_jsonl(chat, path, config),
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::write_csv(chat, path, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Digest => crate::core::output::write_digest(chat, path, config),
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature(format)),
    }
}

/// Converts the chat to a string in the specified format.
#[allow(unused_variables)]
pub fn to_format_string(
    chat: &ParsedChat,
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<String, KakaoError> {
    match format {
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::to_json(chat),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::to_jsonl(chat, config),
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::to_csv(chat, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Digest => crate::core::output::to_digest(chat, config),
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature(format)),
    }
}
