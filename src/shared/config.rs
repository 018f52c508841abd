//! Application configuration. Night-window hours, simplify policy.

use serde::Deserialize;

/// Default night-window start hour (inclusive).
pub const DEFAULT_NIGHT_START_HOUR: u32 = 23;

/// Default night-window end hour (exclusive).
pub const DEFAULT_NIGHT_END_HOUR: u32 = 6;

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Night window start hour, inclusive. Read from CHAT_REPORT_NIGHT_START_HOUR.
    #[serde(default)]
    pub night_start_hour: Option<u32>,

    /// Night window end hour, exclusive. Read from CHAT_REPORT_NIGHT_END_HOUR.
    #[serde(default)]
    pub night_end_hour: Option<u32>,

    /// When set, transcripts with more textual messages than this are uniformly
    /// downsampled in the simplified text. Unset = keep every message.
    /// Read from CHAT_REPORT_KEEP_ALL_THRESHOLD.
    #[serde(default)]
    pub keep_all_threshold: Option<usize>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("CHAT_REPORT"));
        if let Ok(path) = std::env::var("CHAT_REPORT_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c.build()?.try_deserialize()
    }

    /// Night window start hour. Defaults to 23 if unset.
    pub fn night_start_hour_or_default(&self) -> u32 {
        self.night_start_hour.unwrap_or(DEFAULT_NIGHT_START_HOUR)
    }

    /// Night window end hour. Defaults to 6 if unset.
    pub fn night_end_hour_or_default(&self) -> u32 {
        self.night_end_hour.unwrap_or(DEFAULT_NIGHT_END_HOUR)
    }
}
