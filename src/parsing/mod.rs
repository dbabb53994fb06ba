//! Line-level parsing utilities.
//!
//! This module holds the grammar layer used by [`KakaoParser`](crate::parser::KakaoParser):
//! line classification, the ordered message grammars, the system-message
//! filter and timestamp resolution.

pub mod kakao;

// Re-export commonly used items
pub use kakao::{
    HeaderFlags, LineKind, MessageFormat, RawMessage, classify_line, is_system_message,
    match_message, parse_kakao_timestamp, text_len,
};
