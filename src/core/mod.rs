//! Core processing logic for kakaopack.
//!
//! This module contains:
//! - [`models`] - Parsed chat, participant stats and output settings
//! - [`stats`] - Participant aggregation
//! - [`sampler`] - Bounded, representative message sampling
//! - [`filter`] - Message filtering by date and sender
//! - [`digest`] - Text blocks for the analysis request
//! - [`output`] - Format writers (JSON, JSONL, CSV, digest)
//!
//! # Quick Start
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() {
//! use kakaopack::core::{
//!     ParsedChat, OutputConfig, FilterConfig,
//!     compute_participants, sample_messages, apply_filters,
//!     write_csv, write_json, write_jsonl,
//! };
//! # }
//! ```

pub mod digest;
pub mod filter;
pub mod models;
pub mod output;
pub mod sampler;
pub mod stats;

// Re-export main types for convenience
pub use digest::{AnalysisDigest, chat_text, participant_summary};
pub use filter::{FilterConfig, apply_filters};
pub use models::{OutputConfig, ParsedChat, ParticipantStats};
pub use sampler::{sample_messages, sample_with_config};
pub use stats::{compute_participants, compute_participants_with};

pub use crate::ChatMessage;

// Conditionally re-export output writers
#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{to_digest, to_json, to_jsonl, write_digest, write_json, write_jsonl};
