//! Author profile links in user meta.

use std::collections::BTreeMap;

use tracing::{debug, info};

use seoport_store::UserMetaStore;
use seoport_store::keys::{USER_AIOSEO_FACEBOOK, USER_AIOSEO_TWITTER, USER_FACEBOOK, USER_TWITTER};

use crate::Context;
use crate::changes::ChangeLog;
use crate::error::MigrationError;
use crate::sanitize::Sanitizer;

/// Copy every user's legacy profile links to the new keys. Legacy rows are kept.
///
/// Rows already holding the cleaned value are not rewritten. Returns the
/// number of rows written.
pub(crate) fn migrate<U: UserMetaStore + ?Sized>(
    ctx: &Context<'_>,
    store: &mut U,
    changes: &mut ChangeLog,
) -> Result<usize, MigrationError> {
    let sources: [(&str, &str, fn(&dyn Sanitizer, &str) -> String); 2] = [
        (USER_FACEBOOK, USER_AIOSEO_FACEBOOK, |s, v| s.esc_url(v)),
        (USER_TWITTER, USER_AIOSEO_TWITTER, |s, v| s.sanitize_text_field(v)),
    ];

    let mut written = 0;
    for (legacy_key, new_key, clean) in sources {
        let existing: BTreeMap<u64, String> = store
            .user_meta_by_key(new_key)?
            .into_iter()
            .map(|row| (row.user_id, row.value))
            .collect();

        for row in store.user_meta_by_key(legacy_key)? {
            if row.user_id == 0 || row.value.is_empty() {
                continue;
            }
            let value = clean(ctx.sanitizer, &row.value);
            if value.is_empty() {
                debug!(user_id = row.user_id, key = legacy_key, "profile link sanitized away");
                continue;
            }
            let before = existing.get(&row.user_id).map(String::as_str).unwrap_or("");
            if before == value {
                continue;
            }
            store.update_user_meta(row.user_id, new_key, &value)?;
            changes.record(&format!("user:{}.{new_key}", row.user_id), before, &value);
            written += 1;
        }
    }

    if written > 0 {
        info!(rows = written, "migrated author profile links");
    }
    Ok(written)
}
