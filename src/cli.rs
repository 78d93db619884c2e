use crate::domain::models::{Config, SlackConfig};
use clap::Parser;

pub const DEFAULT_ZEBEDEE_ROOT: &str = "content";

#[derive(Parser, Debug)]
#[command(
    name = "integrity-checker",
    version,
    about = "Checks that recently published collections are still present in master"
)]
pub struct Cli {
    #[arg(long, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        env = "ZEBEDEE_ROOT",
        default_value = DEFAULT_ZEBEDEE_ROOT,
        help = "Directory holding the master and publish-log trees"
    )]
    pub zebedee_root: String,
    #[arg(
        long,
        env = "CHECK_PUBLISHED_PREVIOUS_DAYS",
        default_value_t = 1,
        help = "Check collections published this many days before today (UTC)"
    )]
    pub check_published_previous_days: u32,
    #[arg(long, env = "SLACK_ENABLED", help = "Send failed results to slack")]
    pub slack_enabled: bool,
    #[arg(long, env = "SLACK_API_TOKEN", default_value = "", hide_env_values = true)]
    pub slack_api_token: String,
    #[arg(long, env = "SLACK_USER_NAME", default_value = "Integrity Checker")]
    pub slack_user_name: String,
    #[arg(long, env = "SLACK_ALARM_CHANNEL", default_value = "#sandbox-alarm")]
    pub slack_alarm_channel: String,
    #[arg(long, env = "SLACK_ALARM_EMOJI", default_value = ":rotating_light:")]
    pub slack_alarm_emoji: String,
}

impl Cli {
    pub fn config(&self) -> Config {
        Config {
            zebedee_root: self.zebedee_root.clone(),
            check_published_previous_days: self.check_published_previous_days,
            slack_enabled: self.slack_enabled,
            slack: SlackConfig {
                api_token: self.slack_api_token.clone(),
                user_name: self.slack_user_name.clone(),
                alarm_channel: self.slack_alarm_channel.clone(),
                alarm_emoji: self.slack_alarm_emoji.clone(),
            },
        }
    }
}
