//! One-time notice about removed Open Graph settings.

use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use seoport_store::keys::{
    DEPRECATED_OPENGRAPH_NOTIFICATION, OG_DESCRIPTION_SHORTCODES, OG_GENERATE_DESCRIPTIONS,
    OG_TITLE_SHORTCODES,
};
use seoport_store::{Notification, NotificationKind, NotificationStore};

use crate::Context;
use crate::error::MigrationError;

pub const NOTICE_TITLE: &str = "Review Your Facebook Open Graph Titles and Descriptions";

const DOCS_PATH: &str = "docs/deprecated-opengraph-settings";

/// Removed settings and the labels shown for them.
const REMOVED_SETTINGS: [(&str, &str); 3] = [
    (
        OG_GENERATE_DESCRIPTIONS,
        "Use Content for Autogenerated Descriptions",
    ),
    (OG_DESCRIPTION_SHORTCODES, "Run Shortcodes in Description"),
    (OG_TITLE_SHORTCODES, "Run Shortcodes in Title"),
];

/// HTML body listing the removed settings that were in use.
pub fn compose_notice_content(labels: &[&str]) -> String {
    let items: String = labels
        .iter()
        .map(|label| format!("<li><strong>{label}</strong></li>"))
        .collect();
    format!(
        "Due to some changes in how our Open Graph integration works, your Facebook Titles and \
         Descriptions may have changed. You were using the following options that have been \
         removed:<ul>{items}</ul>"
    )
}

/// Add the notice if a removed setting was on and it does not exist yet.
pub(crate) fn maybe_add<N: NotificationStore + ?Sized>(
    ctx: &Context<'_>,
    store: &mut N,
) -> Result<bool, MigrationError> {
    let labels: Vec<&str> = REMOVED_SETTINGS
        .iter()
        .filter(|(key, _)| ctx.og.flag(key))
        .map(|(_, label)| *label)
        .collect();
    if labels.is_empty() {
        return Ok(false);
    }

    if store
        .notification_by_name(DEPRECATED_OPENGRAPH_NOTIFICATION)?
        .is_some()
    {
        debug!(name = DEPRECATED_OPENGRAPH_NOTIFICATION, "notice already exists");
        return Ok(false);
    }

    store.add_notification(Notification {
        slug: Uuid::new_v4().simple().to_string(),
        name: DEPRECATED_OPENGRAPH_NOTIFICATION.to_string(),
        title: NOTICE_TITLE.to_string(),
        content: compose_notice_content(&labels),
        kind: NotificationKind::Warning,
        level: vec!["all".to_string()],
        button1_label: "Learn More".to_string(),
        button1_action: ctx.urls.utm_url(
            DOCS_PATH,
            "notifications-center",
            DEPRECATED_OPENGRAPH_NOTIFICATION,
        ),
        start: Utc::now(),
    })?;
    info!(removed = labels.len(), "added deprecated Open Graph settings notice");
    Ok(true)
}
