//! Output format writers.
//!
//! This module provides writers for different output formats:
//! - [`write_json`] / [`to_json`] - the whole [`ParsedChat`](crate::core::ParsedChat) as pretty JSON - requires `json-output` feature
//! - [`write_jsonl`] / [`to_jsonl`] - one message per line - requires `json-output` feature
//! - [`write_digest`] / [`to_digest`] - analysis request body for one participant - requires `json-output` feature
//! - [`write_csv`] / [`to_csv`] - CSV with semicolon delimiter - requires `csv-output` feature
//!
//! CSV, JSONL and digest writers honor [`OutputConfig::sample`](crate::core::OutputConfig::sample); the JSON
//! writer always emits the complete chat.
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> kakaopack::Result<()> {
//! use kakaopack::core::output::{write_csv, write_json, to_jsonl};
//! use kakaopack::core::models::OutputConfig;
//! use kakaopack::parser::KakaoParser;
//!
//! let chat = KakaoParser::new().parse("KakaoTalk_Chat.txt")?;
//! let config = OutputConfig::new().with_dates().with_times();
//!
//! write_json(&chat, "chat.json")?;
//! write_csv(&chat, "chat.csv", &config)?;
//! let lines = to_jsonl(&chat, &config)?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_digest, to_json, write_digest, write_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};

/// Messages a writer should emit: the sample if one is configured,
/// otherwise the full log.
#[cfg(any(feature = "csv-output", feature = "json-output"))]
fn selected_messages<'a>(
    chat: &'a crate::core::models::ParsedChat,
    config: &crate::core::models::OutputConfig,
) -> std::borrow::Cow<'a, [crate::ChatMessage]> {
    use std::borrow::Cow;

    use crate::core::sampler::sample_with_config;

    match config.sample {
        Some(ref sample) => sample_with_config(&chat.messages, sample),
        None => Cow::Borrowed(&chat.messages),
    }
}
