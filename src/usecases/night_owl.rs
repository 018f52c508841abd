//! Night-window detection. Crowns the sender who spoke latest into the night.
//!
//! All time arithmetic is local wall-clock; the lateness scalar makes
//! timestamps comparable across the midnight boundary.

use crate::domain::{Message, NightOwl, NightOwlTitle};
use chrono::{Local, TimeZone, Timelike};

/// Lateness past which the champion earns the stronger title (~04:00 with the
/// default window).
const DEEP_NIGHT_LATENESS: u32 = 300;

/// Shown when the winning message has no text content.
const NON_TEXT_PLACEHOLDER: &str = "[non-text message]";

/// Late-night interval `[start, 24) ∪ [0, end)` in local hours.
#[derive(Debug, Clone, Copy)]
pub struct NightWindow {
    start_hour: u32,
    end_hour: u32,
}

impl Default for NightWindow {
    fn default() -> Self {
        Self::new(23, 6)
    }
}

impl NightWindow {
    pub fn new(start_hour: u32, end_hour: u32) -> Self {
        Self {
            start_hour,
            end_hour,
        }
    }

    /// Inclusive of the start hour, exclusive of the end hour.
    pub fn contains(&self, hour: u32) -> bool {
        hour >= self.start_hour || hour < self.end_hour
    }

    /// Minutes elapsed since the window start on a rolling scale. Strictly
    /// increasing as wall-clock time advances through the window:
    /// 23:00 → 0, 00:00 → 60, 05:59 → 419 (default window).
    pub fn lateness(&self, hour: u32, minute: u32) -> u32 {
        let hours = if hour >= self.start_hour {
            hour - self.start_hour
        } else {
            hour + 24 - self.start_hour
        };
        hours * 60 + minute
    }
}

struct Candidate {
    name: String,
    time: String,
    lateness: u32,
    content: String,
}

/// Find the night-owl champion among `messages`, or `None` on a quiet night.
///
/// The champion is the sender of the maximum-lateness message (ties keep the
/// first encountered); `msg_count` covers all their night-window messages.
pub fn detect_night_owl(messages: &[Message], window: NightWindow) -> Option<NightOwl> {
    let mut candidates: Vec<Candidate> = Vec::new();
    for m in messages {
        let Some(dt) = Local.timestamp_opt(m.timestamp, 0).single() else {
            continue;
        };
        let hour = dt.hour();
        if !window.contains(hour) {
            continue;
        }
        candidates.push(Candidate {
            name: m.display_name().to_string(),
            time: dt.format("%H:%M").to_string(),
            lateness: window.lateness(hour, dt.minute()),
            content: m.content.clone(),
        });
    }

    let champion = candidates
        .iter()
        .reduce(|best, c| if c.lateness > best.lateness { c } else { best })?;

    let msg_count = candidates
        .iter()
        .filter(|c| c.name == champion.name)
        .count() as u64;

    let title = if champion.lateness > DEEP_NIGHT_LATENESS {
        NightOwlTitle::DeepNightGuardian
    } else {
        NightOwlTitle::CultivationSect
    };

    Some(NightOwl {
        name: champion.name.clone(),
        last_time: champion.time.clone(),
        msg_count,
        last_msg: if champion.content.is_empty() {
            NON_TEXT_PLACEHOLDER.to_string()
        } else {
            champion.content.clone()
        },
        title,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MessageKind;

    // Timestamps are built through Local so the tests are timezone-independent.
    fn msg_at(hour: u32, minute: u32, name: &str, content: &str) -> Message {
        let ts = Local
            .with_ymd_and_hms(2024, 1, 15, hour, minute, 0)
            .unwrap()
            .timestamp();
        Message {
            timestamp: ts,
            kind: MessageKind::PlainText,
            content: content.to_string(),
            group_nickname: Some(name.to_string()),
            account_name: None,
        }
    }

    #[test]
    fn test_window_boundaries() {
        let w = NightWindow::default();
        assert!(w.contains(23));
        assert!(w.contains(0));
        assert!(w.contains(5));
        assert!(!w.contains(6));
        assert!(!w.contains(22));
    }

    #[test]
    fn test_lateness_monotonic_across_midnight() {
        let w = NightWindow::default();
        assert_eq!(w.lateness(23, 0), 0);
        assert_eq!(w.lateness(0, 0), 60);
        assert_eq!(w.lateness(0, 30), 90);
        assert_eq!(w.lateness(5, 0), 360);
        assert_eq!(w.lateness(5, 59), 419);
        let points = [(23, 0), (23, 59), (0, 0), (2, 15), (5, 59)];
        let scalars: Vec<u32> = points.iter().map(|&(h, m)| w.lateness(h, m)).collect();
        assert!(scalars.windows(2).all(|p| p[0] < p[1]));
    }

    #[test]
    fn test_champion_is_latest_into_the_night() {
        let messages = vec![
            msg_at(23, 10, "A", "still up"),
            msg_at(1, 0, "A", "late"),
            msg_at(4, 30, "B", "very late"),
            msg_at(12, 0, "C", "daytime"),
        ];
        let owl = detect_night_owl(&messages, NightWindow::default()).unwrap();
        assert_eq!(owl.name, "B");
        assert_eq!(owl.last_time, "04:30");
        assert_eq!(owl.msg_count, 1);
        // lateness 330 > 300
        assert_eq!(owl.title, NightOwlTitle::DeepNightGuardian);
    }

    #[test]
    fn test_msg_count_covers_all_champion_night_messages() {
        let messages = vec![
            msg_at(23, 5, "A", "one"),
            msg_at(23, 30, "B", "two"),
            msg_at(1, 15, "A", "three"),
        ];
        let owl = detect_night_owl(&messages, NightWindow::default()).unwrap();
        assert_eq!(owl.name, "A");
        assert_eq!(owl.last_time, "01:15");
        assert_eq!(owl.msg_count, 2);
        assert_eq!(owl.title, NightOwlTitle::CultivationSect);
    }

    #[test]
    fn test_quiet_night_yields_none() {
        let messages = vec![msg_at(9, 0, "A", "morning"), msg_at(21, 59, "B", "evening")];
        assert!(detect_night_owl(&messages, NightWindow::default()).is_none());
        assert!(detect_night_owl(&[], NightWindow::default()).is_none());
    }

    #[test]
    fn test_empty_content_gets_placeholder() {
        let messages = vec![msg_at(2, 0, "A", "")];
        let owl = detect_night_owl(&messages, NightWindow::default()).unwrap();
        assert_eq!(owl.last_msg, "[non-text message]");
    }

    #[test]
    fn test_lateness_tie_keeps_first_encountered() {
        let messages = vec![msg_at(3, 0, "First", "a"), msg_at(3, 0, "Second", "b")];
        let owl = detect_night_owl(&messages, NightWindow::default()).unwrap();
        assert_eq!(owl.name, "First");
    }
}
