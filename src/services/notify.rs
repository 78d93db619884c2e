use crate::domain::error::NotificationError;
use crate::domain::models::{CheckResult, SlackConfig};
use serde::{Deserialize, Serialize};
use std::time::Duration;

const SLACK_POST_MESSAGE_URL: &str = "https://slack.com/api/chat.postMessage";

pub trait Notifier: Send + Sync {
    fn send_checker_result(&self, result: &CheckResult) -> Result<(), NotificationError>;
}

/// Discards every result.
#[derive(Debug, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn send_checker_result(&self, _result: &CheckResult) -> Result<(), NotificationError> {
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlackAttachment {
    pub pretext: String,
    pub text: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlackMessage {
    pub channel: String,
    pub username: String,
    pub icon_emoji: String,
    pub as_user: bool,
    pub attachments: Vec<SlackAttachment>,
}

pub trait SlackClient: Send + Sync {
    fn post_message(&self, message: &SlackMessage) -> Result<(), NotificationError>;
}

#[derive(Deserialize)]
struct SlackReply {
    ok: bool,
    #[serde(default)]
    error: Option<String>,
}

pub struct HttpSlackClient {
    token: String,
    url: String,
    http: reqwest::blocking::Client,
}

impl HttpSlackClient {
    pub fn new(token: impl Into<String>) -> Result<Self, NotificationError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self {
            token: token.into(),
            url: SLACK_POST_MESSAGE_URL.to_string(),
            http,
        })
    }
}

impl SlackClient for HttpSlackClient {
    fn post_message(&self, message: &SlackMessage) -> Result<(), NotificationError> {
        let reply: SlackReply = self
            .http
            .post(&self.url)
            .bearer_auth(&self.token)
            .json(message)
            .send()?
            .error_for_status()?
            .json()?;
        if !reply.ok {
            return Err(NotificationError::Api(
                reply.error.unwrap_or_else(|| "unknown_error".to_string()),
            ));
        }
        Ok(())
    }
}

pub struct SlackNotifier {
    config: SlackConfig,
    client: Box<dyn SlackClient>,
}

impl SlackNotifier {
    pub fn new(config: SlackConfig, client: Box<dyn SlackClient>) -> Self {
        Self { config, client }
    }

    pub fn from_config(config: SlackConfig) -> Result<Self, NotificationError> {
        let client = HttpSlackClient::new(config.api_token.clone())?;
        Ok(Self::new(config, Box::new(client)))
    }

    pub fn build_message(&self, result: &CheckResult) -> SlackMessage {
        let mut text = String::new();
        for inc in &result.inconsistencies {
            text.push_str("- ");
            text.push_str(inc);
            text.push('\n');
        }
        SlackMessage {
            channel: self.config.alarm_channel.clone(),
            username: self.config.user_name.clone(),
            icon_emoji: self.config.alarm_emoji.clone(),
            as_user: false,
            attachments: vec![SlackAttachment {
                pretext: format!(
                    "Found {} inconsistencies during integrity check\n",
                    result.inconsistencies.len()
                ),
                text,
                color: "danger".to_string(),
            }],
        }
    }
}

impl Notifier for SlackNotifier {
    fn send_checker_result(&self, result: &CheckResult) -> Result<(), NotificationError> {
        tracing::info!(channel = %self.config.alarm_channel, "sending slack notification for result");
        let message = self.build_message(result);
        if let Err(e) = self.client.post_message(&message) {
            tracing::error!(channel = %self.config.alarm_channel, error = %e, "unable to send message to slack api");
            return Err(e);
        }
        tracing::info!(channel = %self.config.alarm_channel, "slack notification successful");
        Ok(())
    }
}
