//! # kakaopack
//!
//! A Rust library for parsing KakaoTalk chat exports into structured,
//! analysis-ready data.
//!
//! ## Overview
//!
//! KakaoTalk's "export chat" feature produces a plain-text transcript whose
//! layout depends on the client. kakaopack understands the three grammars in
//! the wild:
//! - **Full date** - `2024년 3월 5일 오후 3:22, 민수 : 안녕하세요`
//! - **Dotted date** - `2024. 3. 5. 오후 3:22, 민수 : 안녕하세요`
//! - **Bracketed** - `[민수] [오후 3:22] 안녕하세요`, dated by
//!   `--------------- 2024년 3월 5일 화요일 ---------------` separators
//!
//! It rebuilds multi-line messages, drops platform noise (photos, join and
//! leave notices, deleted messages), computes per-participant statistics and
//! prepares a bounded sample of the conversation for downstream analysis.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use kakaopack::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let chat = KakaoParser::new().parse("KakaoTalk_Chat.txt")?;
//!     chat.validate()?;
//!
//!     for p in &chat.participants {
//!         println!("{}: {} messages", p.name, p.message_count);
//!     }
//!
//!     // Request body for the analysis service
//!     let digest = AnalysisDigest::build(&chat, "민수", &SampleConfig::default())?;
//!     println!("{}", digest.chat_text);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - [`KakaoParser`](parser::KakaoParser), the transcript assembler
//! - [`parsing`] - line classification and the KakaoTalk grammars
//! - [`config`] - [`KakaoConfig`](config::KakaoConfig),
//!   [`StatsConfig`](config::StatsConfig), [`SampleConfig`](config::SampleConfig)
//! - [`core`] - parsed chat model, statistics, sampling, filters, digests and
//!   output writers
//! - [`format`] - [`OutputFormat`](format::OutputFormat) dispatch
//! - [`cli`] - CLI arguments (feature `cli`)
//! - [`error`] - [`KakaoError`] and [`Result`]
//! - [`prelude`] - Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod message;
pub mod parser;
pub mod parsing;

// Re-export the main types at the crate root for convenience
pub use error::{KakaoError, Result};
pub use message::ChatMessage;

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use kakaopack::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use crate::ChatMessage;
    pub use crate::core::models::{OutputConfig, ParsedChat, ParticipantStats};

    // Error types
    pub use crate::error::{KakaoError, Result};

    // Parsing
    pub use crate::config::{KakaoConfig, SampleConfig, StatsConfig};
    pub use crate::parser::{KakaoParser, parse_kakao_chat};

    // Analysis
    pub use crate::core::digest::AnalysisDigest;
    pub use crate::core::filter::{FilterConfig, apply_filters};
    pub use crate::core::sampler::sample_messages;
    pub use crate::core::stats::compute_participants;

    // Output
    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{to_digest, to_json, to_jsonl, write_digest, write_json, write_jsonl};
    pub use crate::format::{OutputFormat, to_format_string, write_to_format};
}
