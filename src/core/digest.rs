//! Text digests handed to the external analysis service.
//!
//! The analysis request carries three pieces: the selected participant, the
//! sampled conversation as `"<sender>: <body>"` lines, and a participant
//! summary block. This module builds them; sending the request is the
//! caller's business.

use serde::{Deserialize, Serialize};

use crate::ChatMessage;
use crate::config::SampleConfig;
use crate::core::models::{ParsedChat, ParticipantStats};
use crate::core::sampler::sample_with_config;
use crate::error::Result;

/// Renders messages as `"<sender>: <body>"` lines joined by `\n`.
///
/// ```
/// use kakaopack::ChatMessage;
/// use kakaopack::core::digest::chat_text;
///
/// let messages = vec![
///     ChatMessage::new("민수", "오후 3:22", "안녕하세요"),
///     ChatMessage::new("철수", "오후 3:23", "반가워요"),
/// ];
/// assert_eq!(chat_text(&messages), "민수: 안녕하세요\n철수: 반가워요");
/// ```
pub fn chat_text(messages: &[ChatMessage]) -> String {
    messages
        .iter()
        .map(|m| format!("{}: {}", m.sender, m.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders one summary line per participant, most active first.
///
/// Line format: `- <name>: 메시지 <count>개, 평균 길이 <avg>자`.
pub fn participant_summary(participants: &[ParticipantStats]) -> String {
    participants
        .iter()
        .map(|p| {
            format!(
                "- {}: 메시지 {}개, 평균 길이 {}자",
                p.name, p.message_count, p.avg_length
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Payload for one analysis request.
///
/// Serializes as `{ "userName", "chatText", "participantSummary" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisDigest {
    /// Participant the analysis is about.
    pub user_name: String,
    /// Sampled conversation lines.
    pub chat_text: String,
    /// Participant summary block.
    pub participant_summary: String,
}

impl AnalysisDigest {
    /// Builds the digest for `user_name`, sampling the chat with `sample`.
    ///
    /// Fails with [`KakaoError::UnknownParticipant`](crate::KakaoError::UnknownParticipant)
    /// if nobody by that name spoke.
    pub fn build(chat: &ParsedChat, user_name: &str, sample: &SampleConfig) -> Result<Self> {
        chat.require_participant(user_name)?;
        let sampled = sample_with_config(&chat.messages, sample);
        Ok(Self {
            user_name: user_name.to_string(),
            chat_text: chat_text(&sampled),
            participant_summary: participant_summary(&chat.participants),
        })
    }
}
