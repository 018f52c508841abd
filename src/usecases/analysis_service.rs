//! Analysis service. Orchestrates the transcript analysis pipeline.
//!
//! One synchronous pass: classify → aggregate → night owl → word cloud →
//! simplify, then both artifacts are written. Neither artifact depends on the
//! other's output.

use crate::domain::{
    classify_textual, ChatSession, ChatStats, DomainError, Message, StatsMeta, TalkerProfile,
};
use crate::ports::{ReportSink, SessionSource, Tokenizer};
use crate::shared::stopwords;
use crate::usecases::night_owl::{detect_night_owl, NightWindow};
use crate::usecases::simplifier::{simplify_transcript, SimplifyPolicy};
use crate::usecases::word_cloud::{build_word_cloud, rank_tokens, MAX_CLOUD_ITEMS};
use chrono::{DateTime, Local, TimeZone};
use rand::Rng;
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// How many top talkers the report names.
const TOP_TALKER_COUNT: usize = 3;

/// Common words kept per talker.
const COMMON_WORDS_PER_TALKER: usize = 5;

/// Service producing the stats artifact and the simplified-text artifact
/// from one exported chat session.
pub struct AnalysisService {
    tokenizer: Arc<dyn Tokenizer>,
    source: Arc<dyn SessionSource>,
    sink: Arc<dyn ReportSink>,
    night_window: NightWindow,
    policy: SimplifyPolicy,
}

impl AnalysisService {
    pub fn new(
        tokenizer: Arc<dyn Tokenizer>,
        source: Arc<dyn SessionSource>,
        sink: Arc<dyn ReportSink>,
        night_window: NightWindow,
        policy: SimplifyPolicy,
    ) -> Self {
        Self {
            tokenizer,
            source,
            sink,
            night_window,
            policy,
        }
    }

    /// Load the transcript, run the full analysis, write both artifacts.
    ///
    /// Input errors are fatal before anything is written; degenerate inputs
    /// (empty message list, missing names) produce well-formed fallbacks.
    pub async fn run(
        &self,
        input: &Path,
        stats_path: &Path,
        text_path: &Path,
    ) -> Result<ChatStats, DomainError> {
        let session = self.source.load(input).await?;
        info!(
            name = session.meta.display_name(),
            messages = session.messages.len(),
            members = session.member_lookup().len(),
            "transcript loaded"
        );

        let mut rng = rand::thread_rng();
        let (stats, text) =
            self.analyze(&session, &text_path.display().to_string(), &mut rng);

        self.sink.write_stats(stats_path, &stats).await?;
        self.sink.write_text(text_path, &text).await?;

        info!(
            stats = %stats_path.display(),
            text = %text_path.display(),
            "analysis complete"
        );
        Ok(stats)
    }

    /// Pure analysis pass. The rng only feeds word-cloud placement, so two
    /// runs on the same input differ at most in those placement fields.
    pub fn analyze(
        &self,
        session: &ChatSession,
        raw_text_path: &str,
        rng: &mut impl Rng,
    ) -> (ChatStats, String) {
        let messages = &session.messages;
        let textual = classify_textual(messages);

        let (date, time_range) = date_and_range(messages);
        let active_users: HashSet<&str> = messages.iter().map(|m| m.display_name()).collect();

        let top_talkers = self.top_talkers(messages, &textual);
        let night_owl = detect_night_owl(messages, self.night_window);

        let combined: String = textual
            .iter()
            .map(|m| m.content.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        let ranked = rank_tokens(
            &combined,
            self.tokenizer.as_ref(),
            &stopwords::general(),
            MAX_CLOUD_ITEMS,
        );
        let word_cloud = build_word_cloud(&ranked, rng);

        let text = simplify_transcript(
            session.meta.display_name(),
            &date,
            messages.len() as u64,
            &textual,
            self.policy,
        );

        let stats = ChatStats {
            meta: StatsMeta {
                name: session.meta.display_name().to_string(),
                date,
                total_count: messages.len() as u64,
                active_user_count: active_users.len() as u64,
                time_range,
            },
            top_talkers,
            night_owl,
            word_cloud,
            raw_text_path: raw_text_path.to_string(),
        };
        (stats, text)
    }

    /// Top-3 senders by message count over ALL messages, with their common
    /// words extracted from the textual subset. Ties keep first-encountered
    /// order (insertion-ordered counting, stable sort).
    fn top_talkers(&self, messages: &[Message], textual: &[&Message]) -> Vec<TalkerProfile> {
        let mut counts: Vec<(&str, u64)> = Vec::new();
        for m in messages {
            let name = m.display_name();
            match counts.iter_mut().find(|(n, _)| *n == name) {
                Some((_, c)) => *c += 1,
                None => counts.push((name, 1)),
            }
        }
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts.truncate(TOP_TALKER_COUNT);

        let talker_stop = stopwords::talker_extended();
        counts
            .into_iter()
            .enumerate()
            .map(|(i, (name, count))| {
                let combined: String = textual
                    .iter()
                    .filter(|m| m.display_name() == name)
                    .map(|m| m.content.as_str())
                    .collect::<Vec<_>>()
                    .join(" ");
                let common_words = rank_tokens(
                    &combined,
                    self.tokenizer.as_ref(),
                    &talker_stop,
                    COMMON_WORDS_PER_TALKER,
                )
                .into_iter()
                .map(|(word, _)| word)
                .collect();
                TalkerProfile {
                    rank: (i + 1) as u32,
                    name: name.to_string(),
                    count,
                    common_words,
                }
            })
            .collect()
    }
}

fn local_dt(ts: i64) -> Option<DateTime<Local>> {
    Local.timestamp_opt(ts, 0).single()
}

/// Report date and `HH:MM - HH:MM` range from min/max timestamps. An empty
/// session falls back to today and `N/A`.
fn date_and_range(messages: &[Message]) -> (String, String) {
    let min = messages.iter().map(|m| m.timestamp).min().and_then(local_dt);
    let max = messages.iter().map(|m| m.timestamp).max().and_then(local_dt);
    match (min, max) {
        (Some(start), Some(end)) => (
            start.format("%Y-%m-%d").to_string(),
            format!("{} - {}", start.format("%H:%M"), end.format("%H:%M")),
        ),
        _ => (
            Local::now().format("%Y-%m-%d").to_string(),
            "N/A".to_string(),
        ),
    }
}
