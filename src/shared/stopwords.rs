//! Stopword sets for word-frequency ranking.
//!
//! One general set for the word cloud and a larger superset for per-talker
//! common-word extraction, so the two call sites cannot drift apart.

use std::collections::HashSet;

/// Filler words and export artifacts ("[image]"-style placeholders) that carry
/// no signal in a frequency ranking.
const GENERAL: &[&str] = &[
    "的", "了", "我", "是", "你", "在", "他", "我们", "好", "去", "都", "就", "那", "有", "这",
    "也", "要", "吗", "啊", "吧", "呢", "哈", "哈哈", "哈哈哈", "图片", "表情", "动画表情",
];

/// Extra fillers filtered only when profiling an individual talker.
const TALKER_EXTRA: &[&str] = &[
    "一个", "这个", "那个", "什么", "怎么", "可以", "就是", "不是", "没有", "还有", "但是",
    "现在", "知道", "真的", "感觉", "觉得", "可能", "应该", "已经", "还是", "一下",
];

/// Stopwords for the word cloud.
pub fn general() -> HashSet<&'static str> {
    GENERAL.iter().copied().collect()
}

/// Stopwords for per-talker common words: the general set plus the talker
/// extension list.
pub fn talker_extended() -> HashSet<&'static str> {
    GENERAL.iter().chain(TALKER_EXTRA).copied().collect()
}
