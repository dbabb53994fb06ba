//! Property-based tests for kakaopack.
//!
//! These tests generate random inputs to find edge cases.

use proptest::prelude::*;

use kakaopack::ChatMessage;
use kakaopack::config::SampleConfig;
use kakaopack::core::{
    FilterConfig, apply_filters, compute_participants, sample_messages, sample_with_config,
};
use kakaopack::parser::parse_kakao_chat;
use kakaopack::parsing::text_len;

/// Generate a random message using fast strategies (no regex!)
fn arb_message() -> impl Strategy<Value = ChatMessage> {
    (
        prop::sample::select(vec!["민수", "철수", "영희", "Jenny", "김 부장님", "🔥"]),
        prop::sample::select(vec![
            "안녕하세요",
            "오늘 저녁 뭐 먹지",
            "치킨 치킨 치킨",
            "ㅋㅋ",
            "",
            "   ",
            "세미콜론; 따옴표\" 줄바꿈\n포함",
            "🎉🔥💀 이모지",
        ]),
    )
        .prop_map(|(sender, body)| ChatMessage::new(sender, "오후 3:22", body))
}

/// Generate a vector of random messages
fn arb_messages(max_len: usize) -> impl Strategy<Value = Vec<ChatMessage>> {
    prop::collection::vec(arb_message(), 0..max_len)
}

/// Numbered messages so sampled positions can be recovered.
fn numbered(n: usize) -> Vec<ChatMessage> {
    (0..n)
        .map(|i| ChatMessage::new("민수", "오후 3:22", i.to_string()))
        .collect()
}

fn indices(messages: &[ChatMessage]) -> Vec<usize> {
    messages.iter().map(|m| m.message.parse().unwrap()).collect()
}

/// Lines that look like a KakaoTalk export, or almost do.
fn arb_line() -> impl Strategy<Value = String> {
    prop_oneof![
        (0u32..24, 0u32..60).prop_map(|(h, m)| format!("[민수] [오후 {h}:{m:02}] 메시지 본문입니다")),
        (1u32..13, 1u32..29).prop_map(|(mo, d)| format!("2024년 {mo}월 {d}일 오전 9:05, 철수 : 본문: 콜론 포함")),
        (1u32..13, 1u32..29).prop_map(|(mo, d)| format!("2024. {mo}. {d}. 오후 11:59, 영희 : 늦은 메시지")),
        (1u32..13, 1u32..29).prop_map(|(mo, d)| format!("--------------- 2024년 {mo}월 {d}일 ---------------")),
        Just("친구들 님과 카카오톡 대화".to_string()),
        Just("저장한 날짜 : 2024-03-10".to_string()),
        Just("- 대시로 시작하는 줄".to_string()),
        Just("[깨진] [시간] 줄".to_string()),
        Just(String::new()),
        "\\PC{0,40}",
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // ============================================
    // SAMPLER PROPERTIES
    // ============================================

    /// Sampling never exceeds the bound
    #[test]
    fn sample_respects_bound(n in 0usize..3000, max in 0usize..800) {
        let messages = numbered(n);
        prop_assert!(sample_messages(&messages, max).len() <= max);
    }

    /// Logs within the bound come back unchanged
    #[test]
    fn sample_identity_when_small(n in 0usize..700) {
        let messages = numbered(n);
        let max = n + 1;
        let sampled = sample_messages(&messages, max);
        prop_assert_eq!(sampled.as_ref(), messages.as_slice());
    }

    /// The recent tail is always kept verbatim
    #[test]
    fn sample_keeps_recent_tail(n in 601usize..5000) {
        let messages = numbered(n);
        let sample = sample_messages(&messages, 600);
        let recent = SampleConfig::new().with_max_count(600).recent_count();
        prop_assert_eq!(&sample[sample.len() - recent..], &messages[n - recent..]);
    }

    /// Sampled messages stay in transcript order
    #[test]
    fn sample_preserves_order(n in 0usize..3000, max in 1usize..700, cap in 0usize..400) {
        let messages = numbered(n);
        let config = SampleConfig::new().with_max_count(max).with_recent_cap(cap);
        let picked = indices(&sample_with_config(&messages, &config));
        prop_assert!(picked.windows(2).all(|w| w[0] < w[1]));
    }

    // ============================================
    // AGGREGATION PROPERTIES
    // ============================================

    /// Message counts add up to the log length
    #[test]
    fn participant_counts_sum_to_total(messages in arb_messages(50)) {
        let stats = compute_participants(&messages);
        let sum: usize = stats.iter().map(|p| p.message_count).sum();
        prop_assert_eq!(sum, messages.len());
    }

    /// Participants are sorted by count, descending
    #[test]
    fn participants_sorted_desc(messages in arb_messages(50)) {
        let stats = compute_participants(&messages);
        prop_assert!(stats.windows(2).all(|w| w[0].message_count >= w[1].message_count));
    }

    /// Aggregation is a pure function of the log
    #[test]
    fn aggregation_is_pure(messages in arb_messages(50)) {
        prop_assert_eq!(compute_participants(&messages), compute_participants(&messages));
    }

    /// Top words are bounded and never shorter than two characters
    #[test]
    fn top_words_bounded(messages in arb_messages(50)) {
        for p in compute_participants(&messages) {
            prop_assert!(p.top_words.len() <= 10);
            prop_assert!(p.top_words.iter().all(|w| text_len(w) >= 2));
        }
    }

    // ============================================
    // FILTER PROPERTIES
    // ============================================

    /// No filter means passthrough
    #[test]
    fn filter_no_config_passthrough(messages in arb_messages(20)) {
        let filtered = apply_filters(messages.clone(), &FilterConfig::new());
        prop_assert_eq!(filtered, messages);
    }

    /// Sender filter keeps only that sender
    #[test]
    fn filter_sender_exact(messages in arb_messages(30)) {
        let filtered = apply_filters(messages, &FilterConfig::new().with_sender("민수"));
        prop_assert!(filtered.iter().all(|m| m.sender == "민수"));
    }

    // ============================================
    // PARSER PROPERTIES
    // ============================================

    /// Parsing arbitrary line soup never panics and keeps its invariants
    #[test]
    fn parse_never_panics(lines in prop::collection::vec(arb_line(), 0..60)) {
        let chat = parse_kakao_chat(&lines.join("\n"));
        prop_assert_eq!(chat.total_messages, chat.messages.len());

        let sum: usize = chat.participants.iter().map(|p| p.message_count).sum();
        prop_assert_eq!(sum, chat.total_messages);

        for msg in &chat.messages {
            prop_assert!(text_len(&msg.message) > 3 || msg.message.contains('\n'));
        }
    }

    /// Parsing is deterministic
    #[test]
    fn parse_deterministic(lines in prop::collection::vec(arb_line(), 0..40)) {
        let text = lines.join("\n");
        prop_assert_eq!(parse_kakao_chat(&text), parse_kakao_chat(&text));
    }
}
