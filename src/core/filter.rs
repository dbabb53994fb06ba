//! Filter messages by date range and sender.
//!
//! This module provides [`FilterConfig`] for defining filter criteria,
//! [`apply_filters`] for filtering a message log, and
//! [`ParsedChat::filtered`] for narrowing a whole chat with participant
//! stats recomputed afterwards.
//!
//! # Filter Types
//!
//! | Filter | Method | Description |
//! |--------|--------|-------------|
//! | Date from | [`with_date_from`](FilterConfig::with_date_from) | Messages on or after date |
//! | Date to | [`with_date_to`](FilterConfig::with_date_to) | Messages on or before date |
//! | Sender | [`with_sender`](FilterConfig::with_sender) | Messages from specific user |
//!
//! # Examples
//!
//! ```
//! use kakaopack::core::filter::{FilterConfig, apply_filters};
//! use kakaopack::ChatMessage;
//!
//! # fn main() -> kakaopack::Result<()> {
//! let messages = vec![
//!     ChatMessage::new("민수", "2024년 1월 1일 오후 12:00", "새해 복 많이 받아"),
//!     ChatMessage::new("민수", "2024년 6월 15일 오후 12:00", "여름이다"),
//! ];
//!
//! let config = FilterConfig::new()
//!     .with_date_from("2024-06-01")?
//!     .with_date_to("2024-12-31")?;
//!
//! let filtered = apply_filters(messages, &config);
//! assert_eq!(filtered.len(), 1);
//! assert_eq!(filtered[0].message, "여름이다");
//! # Ok(())
//! # }
//! ```
//!
//! # Behavior Notes
//!
//! - Timestamps are resolved with [`ChatMessage::timestamp`]; messages whose
//!   time cannot be resolved are **excluded** when date filters are active
//! - Sender matching is exact, like participant grouping
//! - Multiple filters are combined with AND logic

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use tracing::debug;

use crate::ChatMessage;
use crate::core::models::ParsedChat;
use crate::error::KakaoError;

/// Configuration for filtering messages by date and sender.
///
/// # Examples
///
/// ```
/// use kakaopack::core::filter::FilterConfig;
///
/// # fn main() -> kakaopack::Result<()> {
/// let combined = FilterConfig::new()
///     .with_sender("민수")
///     .with_date_from("2024-06-01")?;
/// assert!(combined.is_active());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    /// Include only messages on or after this timestamp.
    pub after: Option<NaiveDateTime>,

    /// Include only messages on or before this timestamp.
    pub before: Option<NaiveDateTime>,

    /// Include only messages from this sender.
    pub from: Option<String>,
}

impl FilterConfig {
    /// Creates a new empty filter configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the start date filter (inclusive). Date format: `YYYY-MM-DD`.
    pub fn with_date_from(mut self, date_str: &str) -> Result<Self, KakaoError> {
        let date = parse_date(date_str)?;
        self.after = Some(date.and_time(NaiveTime::MIN));
        Ok(self)
    }

    /// Sets the end date filter (inclusive, through 23:59:59).
    /// Date format: `YYYY-MM-DD`.
    pub fn with_date_to(mut self, date_str: &str) -> Result<Self, KakaoError> {
        let date = parse_date(date_str)?;
        let end_of_day = NaiveTime::from_hms_opt(23, 59, 59).unwrap_or(NaiveTime::MIN);
        self.before = Some(date.and_time(end_of_day));
        Ok(self)
    }

    /// Sets the sender filter.
    #[must_use]
    pub fn with_sender(mut self, sender: impl Into<String>) -> Self {
        self.from = Some(sender.into());
        self
    }

    /// Sets the start timestamp directly.
    #[must_use]
    pub fn with_after(mut self, dt: NaiveDateTime) -> Self {
        self.after = Some(dt);
        self
    }

    /// Sets the end timestamp directly.
    #[must_use]
    pub fn with_before(mut self, dt: NaiveDateTime) -> Self {
        self.before = Some(dt);
        self
    }

    /// Returns `true` if any filter is active.
    pub fn is_active(&self) -> bool {
        self.after.is_some() || self.before.is_some() || self.from.is_some()
    }

    /// Returns `true` if date filters are active.
    pub fn has_date_filter(&self) -> bool {
        self.after.is_some() || self.before.is_some()
    }

    /// Returns `true` if `msg` passes every active filter.
    pub fn matches(&self, msg: &ChatMessage) -> bool {
        if let Some(ref from) = self.from {
            if msg.sender != *from {
                return false;
            }
        }

        if self.has_date_filter() {
            let Some(ts) = msg.timestamp() else {
                return false;
            };
            if self.after.is_some_and(|after| ts < after) {
                return false;
            }
            if self.before.is_some_and(|before| ts > before) {
                return false;
            }
        }

        true
    }
}

fn parse_date(date_str: &str) -> Result<NaiveDate, KakaoError> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|_| KakaoError::invalid_date(date_str))
}

/// Filters a message log, keeping messages that match all active filters.
///
/// If no filters are active, returns the input unchanged.
pub fn apply_filters(messages: Vec<ChatMessage>, config: &FilterConfig) -> Vec<ChatMessage> {
    if !config.is_active() {
        return messages;
    }

    let before = messages.len();
    let filtered: Vec<ChatMessage> = messages
        .into_iter()
        .filter(|msg| config.matches(msg))
        .collect();
    debug!(before, after = filtered.len(), "applied message filters");
    filtered
}

impl ParsedChat {
    /// Returns a copy of this chat restricted by `config`.
    ///
    /// Participants and the message total are recomputed from the surviving
    /// messages; room name and export date carry over.
    pub fn filtered(&self, config: &FilterConfig) -> ParsedChat {
        if !config.is_active() {
            return self.clone();
        }
        let messages = apply_filters(self.messages.clone(), config);
        ParsedChat::from_messages(self.room_name.clone(), self.export_date.clone(), messages)
    }
}
