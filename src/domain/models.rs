use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const MASTER_DIR: &str = "master";
pub const PUBLISH_LOG_DIR: &str = "publish-log";
pub const METADATA_SUFFIX: &str = ".json";

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Debug, Clone, Serialize)]
pub struct Config {
    pub zebedee_root: String,
    pub check_published_previous_days: u32,
    pub slack_enabled: bool,
    pub slack: SlackConfig,
}

#[derive(Clone, Serialize)]
pub struct SlackConfig {
    #[serde(skip_serializing)]
    pub api_token: String,
    pub user_name: String,
    pub alarm_channel: String,
    pub alarm_emoji: String,
}

impl std::fmt::Debug for SlackConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlackConfig")
            .field("api_token", &"<redacted>")
            .field("user_name", &self.user_name)
            .field("alarm_channel", &self.alarm_channel)
            .field("alarm_emoji", &self.alarm_emoji)
            .finish()
    }
}

/// Final outcome of a completed run. `success` is true iff no
/// inconsistency was recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    pub success: bool,
    pub inconsistencies: Vec<String>,
}

/// Metadata record stored next to each collection as `<identifier>.json`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionMetadata {
    #[serde(default)]
    pub pending_deletes: Vec<PendingDelete>,
    #[serde(default)]
    pub publish_end_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
pub struct PendingDelete {
    pub root: PendingDeleteRoot,
}

#[derive(Debug, Deserialize)]
pub struct PendingDeleteRoot {
    pub uri: String,
}
