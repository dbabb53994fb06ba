//! Core data models: participant statistics, the parsed chat and output
//! settings.

use serde::{Deserialize, Serialize};

use crate::ChatMessage;
use crate::config::SampleConfig;
use crate::core::stats::compute_participants;
use crate::error::{KakaoError, MIN_MESSAGES, Result};

/// Aggregated statistics for one participant.
///
/// Always recomputed in full from a message log, never patched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantStats {
    /// Sender name exactly as it appears in the transcript.
    pub name: String,
    /// Number of messages sent.
    pub message_count: usize,
    /// Average body length in characters, rounded half up.
    pub avg_length: usize,
    /// Most frequent tokens, most frequent first.
    pub top_words: Vec<String>,
}

/// Result of parsing one transcript.
///
/// Serializes with camelCase keys (`roomName`, `totalMessages`, ...).
///
/// # Example
///
/// ```rust
/// use kakaopack::parser::KakaoParser;
///
/// let chat = KakaoParser::new().parse_str("[민수] [오후 3:22] 안녕하세요");
/// assert_eq!(chat.total_messages, 1);
/// assert_eq!(chat.participants[0].name, "민수");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedChat {
    /// Room name from the title line, or empty.
    pub room_name: String,
    /// Export date from the header, or empty.
    pub export_date: String,
    /// One entry per sender, most active first.
    pub participants: Vec<ParticipantStats>,
    /// All conversational messages in transcript order.
    pub messages: Vec<ChatMessage>,
    /// Always equal to `messages.len()`.
    pub total_messages: usize,
}

impl ParsedChat {
    /// Builds a chat from a message log, computing participants.
    pub fn from_messages(
        room_name: impl Into<String>,
        export_date: impl Into<String>,
        messages: Vec<ChatMessage>,
    ) -> Self {
        let participants = compute_participants(&messages);
        Self {
            room_name: room_name.into(),
            export_date: export_date.into(),
            total_messages: messages.len(),
            participants,
            messages,
        }
    }

    /// Checks that the chat is usable for analysis.
    ///
    /// Rejects transcripts with fewer than [`MIN_MESSAGES`] messages or no
    /// participants.
    pub fn validate(&self) -> Result<()> {
        if self.total_messages < MIN_MESSAGES {
            return Err(KakaoError::too_few_messages(self.total_messages));
        }
        if self.participants.is_empty() {
            return Err(KakaoError::NoParticipants);
        }
        Ok(())
    }

    /// Looks up a participant by exact name.
    pub fn participant(&self, name: &str) -> Option<&ParticipantStats> {
        self.participants.iter().find(|p| p.name == name)
    }

    /// Like [`participant`](Self::participant), but errors with the list of
    /// known names when missing.
    pub fn require_participant(&self, name: &str) -> Result<&ParticipantStats> {
        self.participant(name).ok_or_else(|| {
            KakaoError::unknown_participant(name, self.participant_names())
        })
    }

    /// Participant names, most active first.
    pub fn participant_names(&self) -> impl Iterator<Item = &str> {
        self.participants.iter().map(|p| p.name.as_str())
    }
}

/// Controls what the output writers emit.
///
/// CSV and JSONL writers honor every field. The JSON writer always emits the
/// whole [`ParsedChat`].
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    /// Include the date-separator label
    pub include_dates: bool,
    /// Include the raw time string
    pub include_times: bool,
    /// Write only the sampled messages instead of the full log
    pub sample: Option<SampleConfig>,
    /// Target participant for the analysis digest
    pub user: Option<String>,
}

impl OutputConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_dates(mut self) -> Self {
        self.include_dates = true;
        self
    }

    #[must_use]
    pub fn with_times(mut self) -> Self {
        self.include_times = true;
        self
    }

    #[must_use]
    pub fn with_sample(mut self, sample: SampleConfig) -> Self {
        self.sample = Some(sample);
        self
    }

    #[must_use]
    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }
}
