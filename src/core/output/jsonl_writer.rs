//! JSON Lines (JSONL) output writer.
//!
//! One message per line, handy for line-oriented tooling and for feeding
//! transcripts into retrieval pipelines.

use std::fs::File;
use std::io::{BufWriter, Write};

use serde::Serialize;

use crate::ChatMessage;
use crate::core::models::{OutputConfig, ParsedChat};
use crate::error::Result;

use super::selected_messages;

/// Message record for JSONL output.
/// Date and time are only present when enabled in `OutputConfig`.
#[derive(Serialize)]
struct JsonlMessage<'a> {
    sender: &'a str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    date: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    time: Option<&'a str>,
}

impl<'a> JsonlMessage<'a> {
    fn new(msg: &'a ChatMessage, config: &OutputConfig) -> Self {
        Self {
            sender: &msg.sender,
            message: &msg.message,
            date: config.include_dates.then_some(msg.date.as_str()),
            time: config.include_times.then_some(msg.time.as_str()),
        }
    }
}

/// Writes messages to JSONL (JSON Lines) format.
///
/// Each line is a valid JSON object:
/// ```jsonl
/// {"sender":"민수","message":"안녕하세요"}
/// {"sender":"철수","message":"반가워요"}
/// ```
pub fn write_jsonl(chat: &ParsedChat, output_path: &str, config: &OutputConfig) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);

    for msg in selected_messages(chat, config).iter() {
        let json = serde_json::to_string(&JsonlMessage::new(msg, config))?;
        writeln!(writer, "{json}")?;
    }

    writer.flush()?;
    Ok(())
}

/// Converts messages to a JSONL string.
///
/// Same format as [`write_jsonl`], but returns a String instead of writing to file.
pub fn to_jsonl(chat: &ParsedChat, config: &OutputConfig) -> Result<String> {
    let mut output = String::new();

    for msg in selected_messages(chat, config).iter() {
        output.push_str(&serde_json::to_string(&JsonlMessage::new(msg, config))?);
        output.push('\n');
    }

    Ok(output)
}
