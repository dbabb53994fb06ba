//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`OutputFormat`] - Output format options
//!
//! Every flag maps onto a library config type, so anything the binary does
//! can be reproduced with [`KakaoConfig`], [`FilterConfig`] and
//! [`OutputConfig`] directly.
//!
//! ```rust
//! use clap::Parser;
//! use kakaopack::cli::{Args, OutputFormat};
//!
//! let args = Args::parse_from(["kakaopack", "chat.txt", "-f", "digest", "--user", "민수"]);
//! assert_eq!(args.format, OutputFormat::Digest);
//! assert_eq!(args.output_path(), "kakao_chat.json");
//! ```

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::{KakaoConfig, SampleConfig};
use crate::core::filter::FilterConfig;
use crate::core::models::OutputConfig;
use crate::error::Result;

/// Default output file stem; the extension follows the format.
pub const DEFAULT_OUTPUT_STEM: &str = "kakao_chat";

/// Parse KakaoTalk chat exports into participant stats and
/// analysis-ready digests.
#[derive(Parser, Debug, Clone)]
#[command(name = "kakaopack")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    kakaopack KakaoTalk_Chat.txt
    kakaopack chat.txt -f csv --dates --times -o chat.csv
    kakaopack chat.txt --after 2024-01-01 --from 민수
    kakaopack chat.txt -f digest --user 민수 --max-sample 300")]
pub struct Args {
    /// Path to the exported .txt transcript
    pub input: String,

    /// Path to output file [default: kakao_chat.<format extension>]
    #[arg(short, long)]
    pub output: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Participant the digest is built for
    #[arg(long, value_name = "NAME")]
    pub user: Option<String>,

    /// Filter messages from specific sender
    #[arg(long, value_name = "NAME")]
    pub from: Option<String>,

    /// Filter messages on or after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub after: Option<String>,

    /// Filter messages on or before this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub before: Option<String>,

    /// Sample at most N messages (csv, jsonl, digest)
    #[arg(long, value_name = "N")]
    pub max_sample: Option<usize>,

    /// Include date-separator labels in csv/jsonl output
    #[arg(short = 'd', long)]
    pub dates: bool,

    /// Include message times in csv/jsonl output
    #[arg(short = 't', long)]
    pub times: bool,

    /// Keep photo, join/leave and other system messages
    #[arg(long)]
    pub keep_system: bool,

    /// Write output even if the transcript is too small to analyze
    #[arg(long)]
    pub no_validate: bool,
}

impl Args {
    /// The `-o` path, or `kakao_chat.<ext>` for the chosen format.
    pub fn output_path(&self) -> String {
        if let Some(ref output) = self.output {
            return output.clone();
        }
        let lib_format: crate::format::OutputFormat = self.format.into();
        format!("{DEFAULT_OUTPUT_STEM}.{}", lib_format.extension())
    }

    /// Parser configuration from the flags.
    pub fn kakao_config(&self) -> KakaoConfig {
        KakaoConfig::new().with_skip_system_messages(!self.keep_system)
    }

    /// Filter configuration from the flags.
    ///
    /// # Errors
    ///
    /// Fails if `--after` or `--before` is not `YYYY-MM-DD`.
    pub fn filter_config(&self) -> Result<FilterConfig> {
        let mut config = FilterConfig::new();
        if let Some(ref after) = self.after {
            config = config.with_date_from(after)?;
        }
        if let Some(ref before) = self.before {
            config = config.with_date_to(before)?;
        }
        if let Some(ref from) = self.from {
            config = config.with_sender(from.clone());
        }
        Ok(config)
    }

    /// Output configuration from the flags.
    pub fn output_config(&self) -> OutputConfig {
        let mut config = OutputConfig::new();
        if self.dates {
            config = config.with_dates();
        }
        if self.times {
            config = config.with_times();
        }
        if let Some(max) = self.max_sample {
            config = config.with_sample(SampleConfig::new().with_max_count(max));
        }
        if let Some(ref user) = self.user {
            config = config.with_user(user.clone());
        }
        config
    }
}

/// Output format options.
///
/// - [`Json`](OutputFormat::Json) - the full parse result
/// - [`Jsonl`](OutputFormat::Jsonl) - one message per line
/// - [`Csv`](OutputFormat::Csv) - semicolon-delimited messages
/// - [`Digest`](OutputFormat::Digest) - analysis request body, needs `--user`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Full parse result as pretty JSON (default)
    #[default]
    Json,

    /// JSON Lines - one message object per line
    #[value(alias = "ndjson")]
    Jsonl,

    /// CSV with semicolon delimiter
    Csv,

    /// `{userName, chatText, participantSummary}` for one participant
    Digest,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", crate::format::OutputFormat::from(*self))
    }
}

// Conversion to library format type
impl From<OutputFormat> for crate::format::OutputFormat {
    fn from(format: OutputFormat) -> crate::format::OutputFormat {
        match format {
            OutputFormat::Json => crate::format::OutputFormat::Json,
            OutputFormat::Jsonl => crate::format::OutputFormat::Jsonl,
            OutputFormat::Csv => crate::format::OutputFormat::Csv,
            OutputFormat::Digest => crate::format::OutputFormat::Digest,
        }
    }
}
