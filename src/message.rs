//! Chat message type produced by the transcript parser.
//!
//! # Examples
//!
//! ```
//! use kakaopack::ChatMessage;
//!
//! let msg = ChatMessage::new("민수", "오후 3:22", "안녕하세요")
//!     .with_date("2024년 3월 5일 화요일");
//! assert_eq!(msg.sender(), "민수");
//! assert_eq!(msg.message(), "안녕하세요");
//! assert!(msg.timestamp().is_some());
//! ```

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::parsing::kakao::{parse_kakao_timestamp, text_len};

/// A single message reconstructed from a KakaoTalk transcript.
///
/// | Field | Description |
/// |-------|-------------|
/// | `sender` | Display name exactly as it appears in the export |
/// | `time` | Raw time string, e.g. `2024년 3월 5일 오후 3:22` or `오후 3:22` |
/// | `message` | Body text; continuation lines are joined with `\n` |
/// | `date` | Label of the last date separator seen, or empty |
///
/// Times are kept as strings because the three export grammars disagree on
/// how much of the date they carry. Use [`timestamp`](Self::timestamp) to
/// resolve a concrete [`NaiveDateTime`] when one is available.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Display name of the message author.
    pub sender: String,

    /// Time string as written in the export.
    pub time: String,

    /// Text content of the message.
    ///
    /// May contain newlines for multiline messages.
    pub message: String,

    /// Most recent date-separator label before this message.
    #[serde(default)]
    pub date: String,
}

impl ChatMessage {
    /// Creates a new message with an empty date label.
    pub fn new(
        sender: impl Into<String>,
        time: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            sender: sender.into(),
            time: time.into(),
            message: message.into(),
            date: String::new(),
        }
    }

    /// Builder method to set the date label.
    #[must_use]
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    /// Returns the sender name.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Returns the raw time string.
    pub fn time(&self) -> &str {
        &self.time
    }

    /// Returns the message body.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the date-separator label.
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Resolves the message time to a calendar timestamp.
    ///
    /// Returns `None` when neither the time string nor the date label
    /// carries a usable calendar date.
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        parse_kakao_timestamp(&self.date, &self.time)
    }

    /// Length of the body in UTF-16 code units, including folded newlines.
    pub fn char_len(&self) -> usize {
        text_len(&self.message)
    }

    /// Appends a continuation line to the body.
    pub(crate) fn push_line(&mut self, line: &str) {
        self.message.push('\n');
        self.message.push_str(line);
    }
}
