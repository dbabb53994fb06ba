//! KakaoTalk transcript parser.
//!
//! [`KakaoParser`] turns a raw `.txt` export into a [`ParsedChat`]: header
//! lines become the room name and export date, dashed separators set the
//! date label of the messages that follow, message lines in any of the three
//! export grammars start new messages, and everything else is folded into the
//! previous message as a continuation line.
//!
//! # Example
//!
//! ```rust
//! use kakaopack::parser::KakaoParser;
//!
//! let transcript = "\
//! 친구들 님과 카카오톡 대화
//! 저장한 날짜 : 2024-03-10 21:15:00
//!
//! --------------- 2024년 3월 5일 화요일 ---------------
//! [민수] [오후 3:22] 안녕하세요
//! 잘 지내?
//! [철수] [오후 3:23] 사진
//! [철수] [오후 3:24] 응 잘 지내지
//! ";
//!
//! let chat = KakaoParser::new().parse_str(transcript);
//! assert_eq!(chat.room_name, "친구들");
//! assert_eq!(chat.total_messages, 2);
//! assert_eq!(chat.messages[0].message, "안녕하세요\n잘 지내?");
//! assert_eq!(chat.messages[1].date, "2024년 3월 5일 화요일");
//! ```

use std::fs;
use std::path::Path;

use tracing::{debug, trace};

use crate::ChatMessage;
use crate::config::KakaoConfig;
use crate::core::models::ParsedChat;
use crate::core::stats::compute_participants_with;
use crate::error::{KakaoError, Result};
use crate::parsing::kakao::{HeaderFlags, LineKind, RawMessage, classify_line, is_system_message};

/// Byte-order mark some editors prepend to exported files.
const BOM: char = '\u{feff}';

/// Parser for KakaoTalk text exports.
///
/// Parsing a string never fails; reading from a path can fail with an I/O or
/// UTF-8 error.
#[derive(Debug, Clone, Default)]
pub struct KakaoParser {
    config: KakaoConfig,
}

impl KakaoParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: KakaoConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &KakaoConfig {
        &self.config
    }

    /// Reads and parses an export file.
    ///
    /// # Errors
    ///
    /// Returns [`KakaoError::Io`] if the file cannot be read and
    /// [`KakaoError::Utf8`] if it is not valid UTF-8.
    pub fn parse(&self, path: impl AsRef<Path>) -> Result<ParsedChat> {
        let path = path.as_ref();
        let bytes = fs::read(path)?;
        let content = String::from_utf8(bytes).map_err(|source| KakaoError::Utf8 {
            context: path.display().to_string(),
            source,
        })?;
        Ok(self.parse_str(&content))
    }

    /// Parses a transcript held in memory.
    ///
    /// Lines are trimmed of whitespace and byte-order marks.
    pub fn parse_str(&self, content: &str) -> ParsedChat {
        let mut state = FoldState::default();

        for line in content.lines() {
            let line = line.trim_matches(|c: char| c.is_whitespace() || c == BOM);
            if line.is_empty() {
                continue;
            }
            state.feed(line, &self.config);
        }

        debug!(
            messages = state.messages.len(),
            dropped = state.dropped,
            room = %state.room_name,
            "parsed transcript"
        );

        let participants = compute_participants_with(&state.messages, &self.config.stats);
        ParsedChat {
            room_name: state.room_name,
            export_date: state.export_date,
            total_messages: state.messages.len(),
            participants,
            messages: state.messages,
        }
    }
}

/// Parses a transcript with the default configuration.
pub fn parse_kakao_chat(content: &str) -> ParsedChat {
    KakaoParser::new().parse_str(content)
}

/// Per-call assembly state.
#[derive(Default)]
struct FoldState {
    room_name: String,
    export_date: String,
    current_date: String,
    messages: Vec<ChatMessage>,
    dropped: usize,
}

impl FoldState {
    fn captured(&self) -> HeaderFlags {
        HeaderFlags {
            room_title: !self.room_name.is_empty(),
            export_date: !self.export_date.is_empty(),
        }
    }

    fn feed(&mut self, line: &str, config: &KakaoConfig) {
        match classify_line(line, self.captured()) {
            LineKind::RoomTitle(name) => self.room_name = name,
            LineKind::ExportDate(date) => self.export_date = date,
            LineKind::DateSeparator(label) => self.current_date = label,
            LineKind::Message(raw) => self.push_message(raw, config),
            LineKind::Unmatched => self.fold_continuation(line),
        }
    }

    fn push_message(&mut self, raw: RawMessage, config: &KakaoConfig) {
        if config.skip_system_messages && is_system_message(&raw.body) {
            trace!(sender = %raw.sender, body = %raw.body, "dropped system message");
            self.dropped += 1;
            return;
        }
        let msg = ChatMessage::new(raw.sender, raw.time, raw.body).with_date(self.current_date.as_str());
        self.messages.push(msg);
    }

    fn fold_continuation(&mut self, line: &str) {
        match self.messages.last_mut() {
            // Lines starting with '-' are never folded.
            Some(last) if !line.starts_with('-') => last.push_line(line),
            _ => {
                trace!(line, "dropped unmatched line");
                self.dropped += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headers_captured_once() {
        let chat = parse_kakao_chat(
            "친구들 님과 카카오톡 대화\n\
             저장한 날짜 : 2024-03-10\n\
             다른방 님과 카카오톡 대화\n\
             저장한 날짜 : 2025-01-01\n\
             [민수] [오후 3:22] 안녕하세요",
        );
        assert_eq!(chat.room_name, "친구들");
        assert_eq!(chat.export_date, "2024-03-10");
        // Later header lookalikes are neither headers nor bodies.
        assert_eq!(chat.messages[0].message, "안녕하세요");
    }

    #[test]
    fn test_empty_room_title_not_captured() {
        let chat = parse_kakao_chat("님과 카카오톡 대화\n단톡방 님과 카카오톡 대화");
        assert_eq!(chat.room_name, "단톡방");
    }

    #[test]
    fn test_orphan_lines_dropped() {
        let chat = parse_kakao_chat("아무 말\n[민수] [오후 3:22] 안녕하세요");
        assert_eq!(chat.total_messages, 1);
        assert_eq!(chat.messages[0].message, "안녕하세요");
    }

    #[test]
    fn test_dash_lines_not_folded() {
        let chat = parse_kakao_chat("[민수] [오후 3:22] 목록입니다\n- 첫째\n둘째");
        assert_eq!(chat.messages[0].message, "목록입니다\n둘째");
    }

    #[test]
    fn test_crlf_and_indentation() {
        let chat = parse_kakao_chat("  [민수] [오후 3:22] 안녕하세요  \r\n   잘 지내?\r\n");
        assert_eq!(chat.messages[0].message, "안녕하세요\n잘 지내?");
    }

    #[test]
    fn test_continuation_after_system_message_joins_previous() {
        let chat = parse_kakao_chat("[민수] [오후 3:22] 안녕하세요\n[철수] [오후 3:23] 사진\n잘 지내?");
        assert_eq!(chat.total_messages, 1);
        assert_eq!(chat.messages[0].message, "안녕하세요\n잘 지내?");
    }

    #[test]
    fn test_keep_system_messages() {
        let parser = KakaoParser::with_config(KakaoConfig::new().with_skip_system_messages(false));
        let chat = parser.parse_str("[민수] [오후 3:22] 사진\n[민수] [오후 3:23] ㅋ");
        assert_eq!(chat.total_messages, 2);
    }

    #[test]
    fn test_date_label_applies_forward() {
        let chat = parse_kakao_chat(
            "[민수] [오전 9:00] 날짜 전 메시지\n\
             --------------- 2024년 3월 5일 화요일 ---------------\n\
             [민수] [오후 3:22] 날짜 후 메시지",
        );
        assert_eq!(chat.messages[0].date, "");
        assert_eq!(chat.messages[1].date, "2024년 3월 5일 화요일");
    }

    #[test]
    fn test_empty_input() {
        let chat = parse_kakao_chat("");
        assert_eq!(chat, ParsedChat::default());
    }

    #[test]
    fn test_parse_missing_file() {
        let err = KakaoParser::new().parse("/nonexistent/KakaoTalk_Chat.txt").unwrap_err();
        assert!(err.is_io());
    }

    #[test]
    fn test_leading_bom_stripped() {
        let chat = parse_kakao_chat(
            "\u{feff}친구들 님과 카카오톡 대화\n저장한 날짜 : 2024-03-10\n[민수] [오후 3:22] 안녕하세요",
        );
        assert_eq!(chat.room_name, "친구들");
        assert_eq!(chat.export_date, "2024-03-10");

        let chat = parse_kakao_chat("\u{feff}저장한 날짜 : 2024-03-10\n[민수] [오후 3:22] 안녕하세요");
        assert_eq!(chat.export_date, "2024-03-10");
        assert_eq!(chat.total_messages, 1);
    }

    #[test]
    fn test_parse_file_with_bom() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let mut bytes = vec![0xef, 0xbb, 0xbf];
        bytes.extend_from_slice("친구들 님과 카카오톡 대화\r\n[민수] [오후 3:22] 안녕하세요\r\n".as_bytes());
        std::fs::write(file.path(), bytes).unwrap();

        let chat = KakaoParser::new().parse(file.path()).unwrap();
        assert_eq!(chat.room_name, "친구들");
        assert_eq!(chat.messages[0].message, "안녕하세요");
    }

    #[test]
    fn test_parse_invalid_utf8() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), [0xff, 0xfe, 0x00]).unwrap();
        let err = KakaoParser::new().parse(file.path()).unwrap_err();
        assert!(matches!(err, KakaoError::Utf8 { .. }));
    }
}
