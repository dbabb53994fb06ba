//! JSON output writers: the full chat and the analysis digest.

use std::fs::File;
use std::io::Write;

use crate::core::digest::AnalysisDigest;
use crate::core::models::{OutputConfig, ParsedChat};
use crate::error::{KakaoError, Result};

/// Writes the whole [`ParsedChat`] as pretty-printed JSON.
///
/// # Format
/// ```json
/// {
///   "roomName": "친구들",
///   "exportDate": "2024. 3. 10. 오후 9:15",
///   "participants": [{"name": "민수", "messageCount": 2, "avgLength": 8, "topWords": ["치킨"]}],
///   "messages": [{"sender": "민수", "time": "오후 3:22", "message": "치킨 어때", "date": "..."}],
///   "totalMessages": 2
/// }
/// ```
pub fn write_json(chat: &ParsedChat, output_path: &str) -> Result<()> {
    let json = to_json(chat)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts the chat to a pretty-printed JSON string.
///
/// Same format as [`write_json`], but returns a String instead of writing to file.
pub fn to_json(chat: &ParsedChat) -> Result<String> {
    Ok(serde_json::to_string_pretty(chat)?)
}

/// Writes the analysis request body for `config.user`.
///
/// See [`to_digest`].
pub fn write_digest(chat: &ParsedChat, output_path: &str, config: &OutputConfig) -> Result<()> {
    let json = to_digest(chat, config)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Builds the analysis request body `{userName, chatText, participantSummary}`.
///
/// Requires [`OutputConfig::user`]. The conversation is sampled with
/// [`OutputConfig::sample`], or the default sampling when unset.
pub fn to_digest(chat: &ParsedChat, config: &OutputConfig) -> Result<String> {
    let user = config.user.as_deref().ok_or_else(|| {
        KakaoError::invalid_format("digest", "a target participant is required (--user)")
    })?;
    let sample = config.sample.unwrap_or_default();
    let digest = AnalysisDigest::build(chat, user, &sample)?;
    Ok(serde_json::to_string_pretty(&digest)?)
}
