//! KakaoTalk line grammars.
//!
//! KakaoTalk exports differ by platform and app version. Three message
//! grammars are recognized, tried in a fixed order:
//!
//! - Full date: `2024년 3월 5일 오후 3:22, 민수 : 안녕`
//! - Dotted date: `2024. 3. 5. 오후 3:22, 민수 : 안녕`
//! - Bracketed: `[민수] [오후 3:22] 안녕`
//!
//! Besides messages, a transcript carries a room title line, an export date
//! line and dashed date separators. [`classify_line`] sorts a trimmed line
//! into one of those kinds.

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;

/// Marker contained in the room title line ("KakaoTalk conversation").
pub const ROOM_TITLE_MARKER: &str = "카카오톡 대화";

/// Prefix of the export date line ("saved date").
pub const EXPORT_DATE_MARKER: &str = "저장한 날짜";

/// Bodies containing any of these are platform events, not conversation.
pub const SYSTEM_KEYWORDS: &[&str] = &[
    "사진",
    "동영상",
    "이모티콘",
    "보이스톡",
    "페이스톡",
    "님이 들어왔습니다",
    "님이 나갔습니다",
    "님을 초대했습니다",
    "삭제된 메시지입니다",
    "채팅방 관리자가",
    "Open Chat",
    ROOM_TITLE_MARKER,
    EXPORT_DATE_MARKER,
];

/// Bodies this short (in UTF-16 code units, after trimming) are treated as noise.
pub const MIN_BODY_CHARS: usize = 3;

/// Message line grammars, in matching order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageFormat {
    /// iOS export with Korean date words.
    /// Example: 2024년 3월 5일 오후 3:22, 민수 : 안녕
    FullDate,
    /// iOS export with dotted dates.
    /// Example: 2024. 3. 5. 오후 3:22, 민수 : 안녕
    DottedDate,
    /// Android export, date comes from the separator lines.
    /// Example: [민수] [오후 3:22] 안녕
    Bracketed,
}

impl MessageFormat {
    /// Returns the regex pattern for this grammar.
    ///
    /// All patterns run in dot-matches-newline mode so a logical record that
    /// already contains raw newlines still matches as one message.
    pub fn pattern(self) -> &'static str {
        match self {
            MessageFormat::FullDate => {
                r"(?s)^([0-9]{4}년\s*[0-9]{1,2}월\s*[0-9]{1,2}일\s*(?:오전|오후)\s*[0-9]{1,2}:[0-9]{2}),\s*(.+?)\s*:\s*(.+)$"
            }
            MessageFormat::DottedDate => {
                r"(?s)^([0-9]{4}\.\s*[0-9]{1,2}\.\s*[0-9]{1,2}\.\s*(?:오전|오후)\s*[0-9]{1,2}:[0-9]{2}),\s*(.+?)\s*:\s*(.+)$"
            }
            MessageFormat::Bracketed => r"(?s)^\[(.+?)\]\s*\[(오전|오후)\s*([0-9]{1,2}:[0-9]{2})\]\s*(.+)$",
        }
    }

    /// Returns all grammars in matching order.
    pub fn all() -> &'static [MessageFormat] {
        &[
            MessageFormat::FullDate,
            MessageFormat::DottedDate,
            MessageFormat::Bracketed,
        ]
    }

    fn regex(self) -> &'static Regex {
        &MESSAGE_REGEXES[self as usize]
    }

    /// Matches `line` against this grammar and extracts the message parts.
    pub fn extract(self, line: &str) -> Option<RawMessage> {
        let caps = self.regex().captures(line)?;
        let group = |i: usize| caps.get(i).map_or("", |m| m.as_str().trim());

        let (sender, time, body) = match self {
            MessageFormat::FullDate | MessageFormat::DottedDate => {
                (group(2).to_string(), group(1).to_string(), group(3))
            }
            MessageFormat::Bracketed => (
                group(1).to_string(),
                format!("{} {}", group(2), group(3)),
                group(4),
            ),
        };

        Some(RawMessage {
            format: self,
            sender,
            time,
            body: body.to_string(),
        })
    }
}

static MESSAGE_REGEXES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    MessageFormat::all()
        .iter()
        .map(|f| Regex::new(f.pattern()).expect("message grammar is a valid regex"))
        .collect()
});

static DATE_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-{3,}\s*(.+?)\s*-{3,}$").expect("valid regex"));

static ROOM_TITLE_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*님과\s*카카오톡\s*대화.*$").expect("valid regex"));

static EXPORT_DATE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^저장한\s*날짜\s*:\s*").expect("valid regex"));

static CALENDAR_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]{4})\s*[년.]\s*([0-9]{1,2})\s*[월.]\s*([0-9]{1,2})").expect("valid regex")
});

static CLOCK_TIME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(오전|오후)\s*([0-9]{1,2}):([0-9]{2})").expect("valid regex"));

/// A message line split into its parts, before system filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMessage {
    /// Grammar that matched.
    pub format: MessageFormat,
    /// Trimmed sender name.
    pub sender: String,
    /// Time string (`오후 3:22` for bracketed lines, full stamp otherwise).
    pub time: String,
    /// Trimmed body text.
    pub body: String,
}

/// Tries each grammar in order and returns the first match.
pub fn match_message(line: &str) -> Option<RawMessage> {
    MessageFormat::all().iter().find_map(|f| f.extract(line))
}

/// Which one-shot header lines have already been captured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeaderFlags {
    /// A room title is stored.
    pub room_title: bool,
    /// An export date is stored.
    pub export_date: bool,
}

/// Classification of one trimmed, non-empty transcript line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// Room title with the "님과 카카오톡 대화" suffix removed.
    RoomTitle(String),
    /// Export date value after the label.
    ExportDate(String),
    /// Interior label of a dashed date separator.
    DateSeparator(String),
    /// A structured message line.
    Message(RawMessage),
    /// Anything else; a candidate continuation line.
    Unmatched,
}

/// Classifies a trimmed line.
///
/// Priority: room title, export date, date separator, message. Header lines
/// are only recognized while their flag in `captured` is still unset.
pub fn classify_line(line: &str, captured: HeaderFlags) -> LineKind {
    if !captured.room_title && line.contains(ROOM_TITLE_MARKER) {
        let name = ROOM_TITLE_SUFFIX.replace(line, "");
        return LineKind::RoomTitle(name.trim().to_string());
    }

    if !captured.export_date && line.starts_with(EXPORT_DATE_MARKER) {
        let value = EXPORT_DATE_PREFIX.replace(line, "");
        return LineKind::ExportDate(value.trim().to_string());
    }

    if let Some(caps) = DATE_SEPARATOR.captures(line) {
        let label = caps.get(1).map_or("", |m| m.as_str().trim());
        return LineKind::DateSeparator(label.to_string());
    }

    match match_message(line) {
        Some(raw) => LineKind::Message(raw),
        None => LineKind::Unmatched,
    }
}

/// Text length in UTF-16 code units.
///
/// Emoji outside the BMP count as two, matching how the export's consumers
/// measure message length.
pub fn text_len(s: &str) -> usize {
    s.encode_utf16().count()
}

/// Checks whether a message body is a platform event rather than chat.
///
/// Short bodies (stray emoji, single punctuation) count as noise too.
pub fn is_system_message(body: &str) -> bool {
    let trimmed = body.trim();
    if text_len(trimmed) <= MIN_BODY_CHARS {
        return true;
    }
    SYSTEM_KEYWORDS.iter().any(|kw| trimmed.contains(kw))
}

/// Resolves a KakaoTalk time string to a timestamp.
///
/// Full-date and dotted-date times carry their own calendar date. Bracketed
/// times (`오후 3:22`) borrow it from `date_label`, the last separator seen.
pub fn parse_kakao_timestamp(date_label: &str, time: &str) -> Option<NaiveDateTime> {
    let date = parse_calendar_date(time).or_else(|| parse_calendar_date(date_label))?;

    let caps = CLOCK_TIME.captures(time)?;
    let hour: u32 = caps[2].parse().ok()?;
    let minute: u32 = caps[3].parse().ok()?;
    let hour = match (&caps[1], hour) {
        ("오전", 12) => 0,
        ("오후", h) if h < 12 => h + 12,
        (_, h) => h,
    };

    date.and_hms_opt(hour, minute, 0)
}

fn parse_calendar_date(s: &str) -> Option<NaiveDate> {
    let caps = CALENDAR_DATE.captures(s)?;
    NaiveDate::from_ymd_opt(
        caps[1].parse().ok()?,
        caps[2].parse().ok()?,
        caps[3].parse().ok()?,
    )
}
