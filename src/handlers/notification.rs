use log::{error, warn};
use serde::Serialize;

use crate::models::birthday::BirthdayMatch;

const SEPARATOR_WIDTH: usize = 40;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationMessage {
    pub name: String,
    pub department: String,
    pub age: i32,
}

impl NotificationMessage {
    pub fn new(name: impl Into<String>, department: impl Into<String>, age: i32) -> Self {
        NotificationMessage {
            name: name.into(),
            department: department.into(),
            age,
        }
    }

    pub fn to_text(&self) -> String {
        render(&self.name, &self.department, self.age)
    }
}

impl From<&BirthdayMatch> for NotificationMessage {
    fn from(m: &BirthdayMatch) -> Self {
        NotificationMessage::new(m.full_name.clone(), m.department_name.clone(), m.age)
    }
}

pub fn render(full_name: &str, department_name: &str, age: i32) -> String {
    format!(
        "Congratulations to our colleague {} from {}! Today they turn {}.",
        full_name, department_name, age
    )
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct WebhookPayload {
    pub text: String,
    pub channel: String,
}

impl WebhookPayload {
    pub fn new(message: &NotificationMessage, channel: &str) -> Self {
        WebhookPayload {
            text: message.to_text(),
            channel: channel.to_string(),
        }
    }
}

/// Delivery boundary. Fire-and-forget: no acknowledgement, no retry.
pub trait NotificationSink {
    fn send(&self, payload: &WebhookPayload);
}

/// Logs the webhook body and prints a bordered block to stdout.
#[derive(Debug, Default)]
pub struct MockWebhookSink;

impl NotificationSink for MockWebhookSink {
    fn send(&self, payload: &WebhookPayload) {
        match serde_json::to_string(payload) {
            Ok(json) => warn!("WEBHOOK: {}", json),
            Err(err) => error!("Could not serialize webhook payload: {}", err),
        }
        println!("{}", console_block(payload));
    }
}

pub fn console_block(payload: &WebhookPayload) -> String {
    let sep = "-".repeat(SEPARATOR_WIDTH);
    format!(
        "{sep}\n[MOCK]\nSending message...\nChannel: {}\nText: {}\n{sep}",
        payload.channel, payload.text
    )
}
