//! Domain entities. Pure data structures for the transcript input model.
//!
//! No I/O types here — the JSON adapter deserializes into these.

use serde::Deserialize;
use std::collections::HashMap;

/// Sentinel used when a sender has neither a group nickname nor an account name,
/// and when the session itself has no name.
pub const UNKNOWN_NAME: &str = "Unknown";

/// Prefix the export puts on voice messages that were transcribed to text.
/// Stripped before the simplified-text rendering.
pub const VOICE_TRANSCRIPT_MARKER: &str = "[voice-to-text] ";

/// The input root: one exported chat window.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatSession {
    #[serde(default)]
    pub meta: Meta,
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(default)]
    pub messages: Vec<Message>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Meta {
    pub name: Option<String>,
}

impl Meta {
    /// Session name with the `Unknown` fallback. A missing name is degenerate
    /// input, not an error.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(UNKNOWN_NAME)
    }
}

/// Roster entry. Only consumed to build the id→name lookup.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub platform_id: String,
    pub account_name: String,
}

/// A single message from the transcript.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Epoch seconds, interpreted as local wall-clock time downstream.
    pub timestamp: i64,
    #[serde(rename = "type")]
    pub kind: MessageKind,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub group_nickname: Option<String>,
    #[serde(default)]
    pub account_name: Option<String>,
}

/// Message type code from the export. 0 = plain text, 2 = voice-to-text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "i32")]
pub enum MessageKind {
    PlainText,
    VoiceTranscript,
    Other(i32),
}

impl From<i32> for MessageKind {
    fn from(code: i32) -> Self {
        match code {
            0 => Self::PlainText,
            2 => Self::VoiceTranscript,
            other => Self::Other(other),
        }
    }
}

impl MessageKind {
    /// Content-bearing kinds that participate in text-based analysis.
    pub fn is_textual(self) -> bool {
        matches!(self, Self::PlainText | Self::VoiceTranscript)
    }
}

impl Message {
    /// Resolved display identity: groupNickname → accountName → "Unknown".
    /// The single place the fallback chain lives; every consumer of a sender
    /// identity goes through here.
    pub fn display_name(&self) -> &str {
        self.group_nickname
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| self.account_name.as_deref().filter(|s| !s.is_empty()))
            .unwrap_or(UNKNOWN_NAME)
    }
}

impl ChatSession {
    /// platformId → accountName lookup from the roster.
    pub fn member_lookup(&self) -> HashMap<&str, &str> {
        self.members
            .iter()
            .map(|m| (m.platform_id.as_str(), m.account_name.as_str()))
            .collect()
    }
}

/// Classifier: the textual subset in original order. Non-textual messages are
/// excluded here but still count toward totals and active users.
pub fn classify_textual(messages: &[Message]) -> Vec<&Message> {
    messages.iter().filter(|m| m.kind.is_textual()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msg(kind: i32, nickname: Option<&str>, account: Option<&str>) -> Message {
        Message {
            timestamp: 1_700_000_000,
            kind: MessageKind::from(kind),
            content: "hi".to_string(),
            group_nickname: nickname.map(String::from),
            account_name: account.map(String::from),
        }
    }

    #[test]
    fn test_kind_mapping() {
        assert_eq!(MessageKind::from(0), MessageKind::PlainText);
        assert_eq!(MessageKind::from(2), MessageKind::VoiceTranscript);
        assert_eq!(MessageKind::from(47), MessageKind::Other(47));
        assert!(MessageKind::PlainText.is_textual());
        assert!(MessageKind::VoiceTranscript.is_textual());
        assert!(!MessageKind::Other(3).is_textual());
    }

    #[test]
    fn test_display_name_fallback_chain() {
        assert_eq!(msg(0, Some("Nick"), Some("acct")).display_name(), "Nick");
        assert_eq!(msg(0, None, Some("acct")).display_name(), "acct");
        assert_eq!(msg(0, Some(""), Some("acct")).display_name(), "acct");
        assert_eq!(msg(0, None, None).display_name(), UNKNOWN_NAME);
        assert_eq!(msg(0, Some(""), Some("")).display_name(), UNKNOWN_NAME);
    }

    #[test]
    fn test_classify_textual_preserves_order() {
        let messages = vec![
            msg(0, Some("a"), None),
            msg(3, Some("b"), None),
            msg(2, Some("c"), None),
        ];
        let textual = classify_textual(&messages);
        assert_eq!(textual.len(), 2);
        assert_eq!(textual[0].display_name(), "a");
        assert_eq!(textual[1].display_name(), "c");
    }

    #[test]
    fn test_meta_name_fallback() {
        assert_eq!(Meta { name: None }.display_name(), UNKNOWN_NAME);
        assert_eq!(Meta { name: Some(String::new()) }.display_name(), UNKNOWN_NAME);
        assert_eq!(Meta { name: Some("Team".into()) }.display_name(), "Team");
    }

    #[test]
    fn test_member_lookup() {
        let session = ChatSession {
            meta: Meta::default(),
            members: vec![Member {
                platform_id: "wxid_1".into(),
                account_name: "alice".into(),
            }],
            messages: vec![],
        };
        let lookup = session.member_lookup();
        assert_eq!(lookup.get("wxid_1"), Some(&"alice"));
    }

    #[test]
    fn test_session_deserializes_with_missing_fields() {
        let session: ChatSession = serde_json::from_str(r#"{"meta":{}}"#).unwrap();
        assert!(session.messages.is_empty());
        assert!(session.members.is_empty());
        assert_eq!(session.meta.display_name(), UNKNOWN_NAME);

        let session: ChatSession = serde_json::from_str(
            r#"{"meta":{"name":"g"},"messages":[{"timestamp":1700000000,"type":2,"content":"x","accountName":"bob"}]}"#,
        )
        .unwrap();
        assert_eq!(session.messages[0].kind, MessageKind::VoiceTranscript);
        assert_eq!(session.messages[0].display_name(), "bob");
    }
}
