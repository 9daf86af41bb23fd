//! Per-entity records written by the migration.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// SEO record attached to a post or page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SeoPost {
    pub post_id: u64,
    /// SEO title override.
    pub title: String,
    /// SEO description override.
    pub description: String,
    pub og_title: String,
    pub og_description: String,
    pub twitter_title: String,
    pub twitter_description: String,
    pub updated_at: Option<DateTime<Utc>>,
}

impl SeoPost {
    /// A blank record for a post that has none yet.
    pub fn new(post_id: u64) -> Self {
        Self {
            post_id,
            ..Self::default()
        }
    }
}

/// A single user meta row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserMeta {
    pub user_id: u64,
    pub key: String,
    pub value: String,
}

/// Severity of an admin notification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Success,
    #[default]
    Info,
    Warning,
    Error,
}

/// An admin notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// Unique slug.
    pub slug: String,
    /// Stable name used to deduplicate one-time notifications.
    pub name: String,
    pub title: String,
    /// HTML body.
    pub content: String,
    pub kind: NotificationKind,
    /// Audience levels, e.g. `["all"]`.
    pub level: Vec<String>,
    pub button1_label: String,
    pub button1_action: String,
    pub start: DateTime<Utc>,
}
