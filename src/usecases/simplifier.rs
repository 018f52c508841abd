//! Simplified-text rendering. One line per textual message, for downstream
//! AI summarization.

use crate::domain::{Message, VOICE_TRANSCRIPT_MARKER};
use chrono::{Local, TimeZone};

/// How many textual messages the simplified text keeps.
///
/// The default keeps everything; `SampleOver(n)` uniformly downsamples
/// transcripts larger than `n`. Opt-in via CHAT_REPORT_KEEP_ALL_THRESHOLD.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimplifyPolicy {
    KeepAll,
    SampleOver(usize),
}

impl SimplifyPolicy {
    /// Indices of the messages to keep, in order.
    fn kept_indices(self, len: usize) -> Vec<usize> {
        match self {
            Self::KeepAll => (0..len).collect(),
            Self::SampleOver(limit) if len <= limit || limit == 0 => (0..len).collect(),
            Self::SampleOver(limit) => {
                let step = len.div_ceil(limit);
                (0..len).step_by(step).collect()
            }
        }
    }
}

/// Render the header block plus `[HH:MM] <name>: <content>` lines.
///
/// The voice-transcript marker prefix is stripped; content is otherwise kept
/// verbatim. `total_count` is the full message count, not just the textual
/// subset.
pub fn simplify_transcript(
    session_name: &str,
    date: &str,
    total_count: u64,
    text_messages: &[&Message],
    policy: SimplifyPolicy,
) -> String {
    let mut out = String::new();
    out.push_str(&format!("=== Group: {} ===\n", session_name));
    out.push_str(&format!("=== Date: {} ===\n", date));
    out.push_str(&format!(
        "=== Messages: {} (simplified text) ===\n\n",
        total_count
    ));

    for idx in policy.kept_indices(text_messages.len()) {
        let m = text_messages[idx];
        let time = Local
            .timestamp_opt(m.timestamp, 0)
            .single()
            .map(|dt| dt.format("%H:%M").to_string())
            .unwrap_or_else(|| "??:??".to_string());
        let content = m
            .content
            .strip_prefix(VOICE_TRANSCRIPT_MARKER)
            .unwrap_or(&m.content);
        out.push_str(&format!("[{}] {}: {}\n", time, m.display_name(), content));
    }

    out
}
