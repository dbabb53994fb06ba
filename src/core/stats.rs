//! Participant aggregation.
//!
//! Groups a message log by sender and derives per-sender counts, average
//! body length and most frequent words. The result is a pure function of the
//! input: running it twice on the same log yields identical stats.
//!
//! # Example
//!
//! ```
//! use kakaopack::ChatMessage;
//! use kakaopack::core::stats::compute_participants;
//!
//! let messages = vec![
//!     ChatMessage::new("민수", "오후 3:22", "오늘 저녁 뭐 먹지"),
//!     ChatMessage::new("철수", "오후 3:23", "치킨 어때"),
//!     ChatMessage::new("민수", "오후 3:24", "치킨 좋아"),
//! ];
//!
//! let stats = compute_participants(&messages);
//! assert_eq!(stats[0].name, "민수");
//! assert_eq!(stats[0].message_count, 2);
//! assert_eq!(stats[1].top_words, vec!["치킨", "어때"]);
//! ```

use std::collections::HashMap;

use crate::ChatMessage;
use crate::config::StatsConfig;
use crate::core::models::ParticipantStats;
use crate::parsing::kakao::text_len;

/// Computes participant statistics with default settings.
pub fn compute_participants(messages: &[ChatMessage]) -> Vec<ParticipantStats> {
    compute_participants_with(messages, &StatsConfig::default())
}

/// Computes participant statistics.
///
/// Participants are ordered by message count, descending. Ties keep the
/// order in which senders first appear in `messages`.
pub fn compute_participants_with(
    messages: &[ChatMessage],
    config: &StatsConfig,
) -> Vec<ParticipantStats> {
    let mut tallies: Vec<Tally<'_>> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for msg in messages {
        let slot = match index.get(msg.sender.as_str()) {
            Some(&slot) => slot,
            None => {
                index.insert(&msg.sender, tallies.len());
                tallies.push(Tally::new(&msg.sender));
                tallies.len() - 1
            }
        };
        tallies[slot].add(msg, config.min_word_chars);
    }

    let mut participants: Vec<ParticipantStats> = tallies
        .into_iter()
        .map(|tally| tally.finish(config.top_words))
        .collect();

    // Stable: equal counts keep first-appearance order.
    participants.sort_by(|a, b| b.message_count.cmp(&a.message_count));
    participants
}

struct Tally<'a> {
    name: &'a str,
    count: usize,
    total_chars: usize,
    words: WordCounter,
}

impl<'a> Tally<'a> {
    fn new(name: &'a str) -> Self {
        Self {
            name,
            count: 0,
            total_chars: 0,
            words: WordCounter::default(),
        }
    }

    fn add(&mut self, msg: &ChatMessage, min_word_chars: usize) {
        self.count += 1;
        self.total_chars += msg.char_len();
        for word in msg.message.split_whitespace() {
            if text_len(word) >= min_word_chars {
                self.words.add(word);
            }
        }
    }

    fn finish(self, top_words: usize) -> ParticipantStats {
        ParticipantStats {
            name: self.name.to_string(),
            message_count: self.count,
            avg_length: rounded_average(self.total_chars, self.count),
            top_words: self.words.top(top_words),
        }
    }
}

/// Word frequencies that remember first-seen order for tie breaking.
#[derive(Default)]
struct WordCounter {
    counts: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl WordCounter {
    fn add(&mut self, word: &str) {
        match self.index.get(word) {
            Some(&i) => self.counts[i].1 += 1,
            None => {
                self.index.insert(word.to_string(), self.counts.len());
                self.counts.push((word.to_string(), 1));
            }
        }
    }

    fn top(mut self, n: usize) -> Vec<String> {
        self.counts.sort_by(|a, b| b.1.cmp(&a.1));
        self.counts.into_iter().take(n).map(|(w, _)| w).collect()
    }
}

/// `round(total / count)` with halves rounded up, in integer arithmetic.
fn rounded_average(total: usize, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    (2 * total + count) / (2 * count)
}
