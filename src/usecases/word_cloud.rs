//! Word-frequency ranking and word-cloud item construction.
//!
//! Placement is a randomized placeholder, not a packing algorithm: the
//! renderer scatters items and only the value ranges are guaranteed. The rng
//! is injected so tests can seed it and assert ranges.

use crate::domain::{FontWeight, WordCloudItem};
use crate::ports::Tokenizer;
use rand::Rng;
use std::collections::{HashMap, HashSet};

/// Fixed palette the renderer styles items with.
pub const PALETTE: [&str; 8] = [
    "#07C160", "#576B95", "#FA5151", "#FFD200", "#333333", "#888888", "#1AAD19", "#2782D7",
];

/// How many ranked tokens the cloud keeps.
pub const MAX_CLOUD_ITEMS: usize = 60;

/// Tokenize `text` and rank surviving tokens by frequency, descending.
///
/// Single-character tokens and stopwords are dropped. Ties keep first-seen
/// order (insertion-ordered counting plus a stable sort). With the null
/// tokenizer this is simply empty.
pub fn rank_tokens(
    text: &str,
    tokenizer: &dyn Tokenizer,
    stopwords: &HashSet<&str>,
    top_n: usize,
) -> Vec<(String, u64)> {
    let mut counts: Vec<(String, u64)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for token in tokenizer.tokenize(text) {
        if token.chars().count() <= 1 || stopwords.contains(token.as_str()) {
            continue;
        }
        match index.get(&token) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(token.clone(), counts.len());
                counts.push((token, 1));
            }
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(top_n);
    counts
}

/// Convert a count-ranked token list into display items with randomized
/// placement. `size` interpolates [12, 40] against the top count; `weight` is
/// bold for anything above half the top count.
pub fn build_word_cloud(ranked: &[(String, u64)], rng: &mut impl Rng) -> Vec<WordCloudItem> {
    let Some(&(_, max_count)) = ranked.first() else {
        return Vec::new();
    };

    ranked
        .iter()
        .map(|(text, count)| {
            let ratio = *count as f64 / max_count as f64;
            let size = (10.0 + ratio * 30.0).clamp(12.0, 40.0) as u32;
            let weight = if *count * 2 > max_count {
                FontWeight::Bold
            } else {
                FontWeight::Normal
            };
            WordCloudItem {
                text: text.clone(),
                count: *count,
                size,
                color: PALETTE[rng.gen_range(0..PALETTE.len())].to_string(),
                left: rng.gen_range(5..=85),
                top: rng.gen_range(10..=280),
                rotate: rng.gen_range(-20..=20),
                weight,
            }
        })
        .collect()
}
