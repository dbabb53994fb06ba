//! CSV output writer.

use std::fs::File;

use crate::ChatMessage;
use crate::core::models::{OutputConfig, ParsedChat};
use crate::error::{KakaoError, Result};

use super::selected_messages;

/// Writes messages to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: Depends on OutputConfig
///   - Basic: `Sender`, `Message`
///   - With dates: `Date`, `Sender`, `Message`
///   - With times: `Time`, `Sender`, `Message`
/// - Encoding: UTF-8
pub fn write_csv(chat: &ParsedChat, output_path: &str, config: &OutputConfig) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(file);

    write_records(&mut writer, chat, config)?;
    writer.flush()?;
    Ok(())
}

/// Converts messages to a CSV string.
///
/// Same format as [`write_csv`], but returns a String instead of writing to file.
pub fn to_csv(chat: &ParsedChat, config: &OutputConfig) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(Vec::new());

    write_records(&mut writer, chat, config)?;
    let bytes = writer
        .into_inner()
        .map_err(|e| KakaoError::Io(e.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}

fn write_records<W: std::io::Write>(
    writer: &mut csv::Writer<W>,
    chat: &ParsedChat,
    config: &OutputConfig,
) -> Result<()> {
    writer.write_record(build_header(config))?;
    for msg in selected_messages(chat, config).iter() {
        writer.write_record(build_record(msg, config))?;
    }
    Ok(())
}

/// Build CSV header based on output configuration.
fn build_header(config: &OutputConfig) -> Vec<&'static str> {
    let mut header = Vec::new();

    if config.include_dates {
        header.push("Date");
    }
    if config.include_times {
        header.push("Time");
    }

    header.push("Sender");
    header.push("Message");
    header
}

/// Build CSV record for a single message.
fn build_record<'a>(msg: &'a ChatMessage, config: &OutputConfig) -> Vec<&'a str> {
    let mut record = Vec::new();

    if config.include_dates {
        record.push(msg.date.as_str());
    }
    if config.include_times {
        record.push(msg.time.as_str());
    }

    record.push(msg.sender.as_str());
    record.push(msg.message.as_str());
    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SampleConfig;
    use tempfile::NamedTempFile;

    fn chat() -> ParsedChat {
        ParsedChat::from_messages(
            "친구들",
            "",
            vec![
                ChatMessage::new("민수", "오후 3:22", "안녕하세요").with_date("2024년 3월 5일 화요일"),
                ChatMessage::new("철수", "오후 3:23", "반가워요; 진짜로").with_date("2024년 3월 5일 화요일"),
            ],
        )
    }

    #[test]
    fn test_to_csv_basic() {
        let csv = to_csv(&chat(), &OutputConfig::new()).unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("Sender;Message"));
        assert_eq!(lines.next(), Some("민수;안녕하세요"));
        assert_eq!(lines.next(), Some("철수;\"반가워요; 진짜로\""));
    }

    #[test]
    fn test_to_csv_with_dates_and_times() {
        let config = OutputConfig::new().with_dates().with_times();
        let csv = to_csv(&chat(), &config).unwrap();
        assert!(csv.starts_with("Date;Time;Sender;Message\n"));
        assert!(csv.contains("2024년 3월 5일 화요일;오후 3:22;민수;안녕하세요"));
    }

    #[test]
    fn test_to_csv_sampled() {
        let config = OutputConfig::new().with_sample(SampleConfig::new().with_max_count(1));
        let csv = to_csv(&chat(), &config).unwrap();
        assert_eq!(csv.lines().count(), 2);
    }

    #[test]
    fn test_write_csv_file() {
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_str().unwrap();

        write_csv(&chat(), path, &OutputConfig::new()).unwrap();

        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.contains("민수;안녕하세요"));
    }
}
