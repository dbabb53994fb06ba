//! Representative downsampling of long transcripts.
//!
//! The analysis collaborator only accepts a bounded amount of text. Recent
//! messages are kept verbatim; older history is thinned with a fixed stride.
//! The result is deterministic and preserves transcript order.
//!
//! # Example
//!
//! ```
//! use kakaopack::ChatMessage;
//! use kakaopack::core::sampler::sample_messages;
//!
//! let messages: Vec<ChatMessage> = (0..1000)
//!     .map(|i| ChatMessage::new("민수", "오후 3:22", format!("메시지 {i}")))
//!     .collect();
//!
//! let sample = sample_messages(&messages, 600);
//! assert!(sample.len() <= 600);
//! assert_eq!(sample[sample.len() - 250..], messages[750..]);
//! ```

use std::borrow::Cow;

use tracing::debug;

use crate::ChatMessage;
use crate::config::SampleConfig;

/// Default sample size.
pub const DEFAULT_MAX_COUNT: usize = 600;

/// Samples at most `max_count` messages using the default recent cap.
///
/// Logs no larger than `max_count` are returned as-is, borrowed.
pub fn sample_messages(messages: &[ChatMessage], max_count: usize) -> Cow<'_, [ChatMessage]> {
    sample_with_config(messages, &SampleConfig::new().with_max_count(max_count))
}

/// Samples a message log according to `config`.
///
/// When the log exceeds `config.max_count`:
/// - the last [`recent_count`](SampleConfig::recent_count) messages are kept;
/// - the remaining prefix is walked with stride
///   `max(1, ceil(prefix_len / (max_count - recent_count)))`, starting at 0;
/// - the result is the strided prefix followed by the recent tail.
pub fn sample_with_config<'a>(
    messages: &'a [ChatMessage],
    config: &SampleConfig,
) -> Cow<'a, [ChatMessage]> {
    if messages.len() <= config.max_count {
        return Cow::Borrowed(messages);
    }
    if config.max_count == 0 {
        return Cow::Owned(Vec::new());
    }

    let recent_count = config.recent_count();
    let sample_count = config.max_count - recent_count;
    let (rest, recent) = messages.split_at(messages.len() - recent_count);
    let step = rest.len().div_ceil(sample_count).max(1);

    let mut sampled: Vec<ChatMessage> = Vec::with_capacity(config.max_count);
    sampled.extend(rest.iter().step_by(step).cloned());
    sampled.extend_from_slice(recent);

    debug!(
        total = messages.len(),
        sampled = sampled.len(),
        step,
        recent = recent_count,
        "sampled message log"
    );

    Cow::Owned(sampled)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(n: usize) -> Vec<ChatMessage> {
        (0..n)
            .map(|i| ChatMessage::new("A", "오후 3:22", i.to_string()))
            .collect()
    }

    fn bodies(messages: &[ChatMessage]) -> Vec<usize> {
        messages.iter().map(|m| m.message.parse().unwrap()).collect()
    }

    #[test]
    fn test_identity_when_small() {
        let messages = numbered(600);
        let sample = sample_messages(&messages, DEFAULT_MAX_COUNT);
        assert!(matches!(sample, Cow::Borrowed(_)));
        assert_eq!(sample.as_ref(), messages.as_slice());
    }

    #[test]
    fn test_bound_and_tail_retention() {
        let messages = numbered(1000);
        let sample = sample_messages(&messages, 600);

        assert!(sample.len() <= 600);
        assert_eq!(sample[sample.len() - 250..], messages[750..]);
    }

    #[test]
    fn test_stride_over_prefix() {
        // prefix 750, budget 350 -> stride 3 -> 250 sampled + 250 recent
        let messages = numbered(1000);
        let sample = sample_messages(&messages, 600);

        assert_eq!(sample.len(), 500);
        let indices = bodies(&sample);
        assert_eq!(&indices[..4], &[0, 3, 6, 9]);
        assert_eq!(indices[249], 747);
        assert_eq!(indices[250], 750);
    }

    #[test]
    fn test_order_preserved() {
        let messages = numbered(5000);
        let indices = bodies(&sample_messages(&messages, 600));
        assert!(indices.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_small_max_count() {
        let messages = numbered(10);
        let sample = sample_messages(&messages, 5);
        // recent = min(250, 2) = 2, budget 3, prefix 8 -> stride 3
        assert_eq!(bodies(&sample), vec![0, 3, 6, 8, 9]);
    }

    #[test]
    fn test_max_count_one() {
        let messages = numbered(10);
        assert_eq!(bodies(&sample_messages(&messages, 1)), vec![0]);
    }

    #[test]
    fn test_max_count_zero() {
        let messages = numbered(3);
        assert!(sample_messages(&messages, 0).is_empty());
    }

    #[test]
    fn test_deterministic() {
        let messages = numbered(2000);
        assert_eq!(
            sample_messages(&messages, 600),
            sample_messages(&messages, 600)
        );
    }

    #[test]
    fn test_custom_recent_cap() {
        let messages = numbered(100);
        let config = SampleConfig::new().with_max_count(20).with_recent_cap(5);
        let sample = sample_with_config(&messages, &config);
        assert!(sample.len() <= 20);
        assert_eq!(bodies(&sample[sample.len() - 5..]), vec![95, 96, 97, 98, 99]);
    }
}
