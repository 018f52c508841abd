//! Derived report model. Serialized as the stats artifact consumed by the
//! downstream rendering collaborator.
//!
//! Produced once per run and immutable thereafter. The collaborator may merge
//! extra fields (e.g. AI-derived traits) into these records on its side.

use serde::Serialize;

/// The output root: everything the renderer needs for one report.
#[derive(Debug, Clone, Serialize)]
pub struct ChatStats {
    pub meta: StatsMeta,
    pub top_talkers: Vec<TalkerProfile>,
    /// `null` on quiet nights.
    pub night_owl: Option<NightOwl>,
    pub word_cloud: Vec<WordCloudItem>,
    /// Where the simplified-text artifact was written.
    pub raw_text_path: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatsMeta {
    pub name: String,
    /// `YYYY-MM-DD`, from the earliest message (today when there are none).
    pub date: String,
    pub total_count: u64,
    pub active_user_count: u64,
    /// `HH:MM - HH:MM` across all messages, or `N/A` for an empty session.
    pub time_range: String,
}

/// One of the top-3 most frequent senders.
#[derive(Debug, Clone, Serialize)]
pub struct TalkerProfile {
    /// 1-based, contiguous in sorted order.
    pub rank: u32,
    pub name: String,
    pub count: u64,
    /// Up to 5 tokens; empty when the tokenizer capability is unavailable.
    pub common_words: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NightOwl {
    pub name: String,
    /// Wall-clock `HH:MM` of the champion's latest night message.
    pub last_time: String,
    /// All night-window messages by the champion, not just the winning one.
    pub msg_count: u64,
    pub last_msg: String,
    pub title: NightOwlTitle,
}

/// Past ~04:00 earns the stronger title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NightOwlTitle {
    DeepNightGuardian,
    CultivationSect,
}

/// A ranked token with randomized placeholder placement. Positions are not
/// collision-free; only the declared ranges are guaranteed.
#[derive(Debug, Clone, Serialize)]
pub struct WordCloudItem {
    pub text: String,
    pub count: u64,
    /// Font size in px, [12, 40].
    pub size: u32,
    pub color: String,
    /// Percent of container width, [5, 85].
    pub left: u32,
    /// Pixels from container top, [10, 280].
    pub top: u32,
    /// Degrees, [-20, 20].
    pub rotate: i32,
    pub weight: FontWeight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Bold,
    Normal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_night_owl_title_serializes_as_token() {
        let json = serde_json::to_string(&NightOwlTitle::DeepNightGuardian).unwrap();
        assert_eq!(json, "\"DeepNightGuardian\"");
        let json = serde_json::to_string(&NightOwlTitle::CultivationSect).unwrap();
        assert_eq!(json, "\"CultivationSect\"");
    }

    #[test]
    fn test_font_weight_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&FontWeight::Bold).unwrap(), "\"bold\"");
        assert_eq!(serde_json::to_string(&FontWeight::Normal).unwrap(), "\"normal\"");
    }

    #[test]
    fn test_absent_night_owl_serializes_as_null() {
        let stats = ChatStats {
            meta: StatsMeta {
                name: "g".into(),
                date: "2024-01-01".into(),
                total_count: 0,
                active_user_count: 0,
                time_range: "N/A".into(),
            },
            top_talkers: vec![],
            night_owl: None,
            word_cloud: vec![],
            raw_text_path: "simplified_chat.txt".into(),
        };
        let value = serde_json::to_value(&stats).unwrap();
        assert!(value["night_owl"].is_null());
        assert_eq!(value["meta"]["time_range"], "N/A");
    }
}
