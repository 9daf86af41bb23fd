//! Twitter profile URL and card type.

use tracing::{debug, info};

use seoport_store::SocialOptions;
use seoport_store::keys::{OG_DEFAULT_CARD, OG_TWITTER_SITE};

use crate::Context;
use crate::changes::ChangeLog;

/// Build the profile URL from the legacy site handle.
///
/// Only fills an empty profile URL; a URL set in the new schema always wins.
pub(crate) fn migrate_username(
    ctx: &Context<'_>,
    options: &mut SocialOptions,
    changes: &mut ChangeLog,
) {
    let Some(handle) = ctx.og.text(OG_TWITTER_SITE) else {
        return;
    };
    let urls = &mut options.social.profiles.urls;
    if !urls.twitter_url.is_empty() {
        debug!(existing = %urls.twitter_url, "twitter profile URL already set, keeping it");
        return;
    }

    let username = handle.trim_start_matches('@');
    let username = ctx
        .sanitizer
        .prepare_username(&ctx.sanitizer.sanitize_option(username));
    if username.is_empty() {
        return;
    }

    let url = ctx.sanitizer.esc_url(&format!("https://twitter.com/{username}"));
    info!(url = %url, "migrated twitter profile URL");
    changes.set_text("social.profiles.urls.twitterUrl", &mut urls.twitter_url, url);
}

pub(crate) fn migrate_card_type(
    ctx: &Context<'_>,
    options: &mut SocialOptions,
    changes: &mut ChangeLog,
) {
    let Some(card) = ctx.og.text(OG_DEFAULT_CARD) else {
        return;
    };
    let card = ctx.sanitizer.sanitize_option(&card);
    let twitter = &mut options.social.twitter;
    changes.set_text(
        "social.twitter.general.defaultCardType",
        &mut twitter.general.default_card_type,
        card.clone(),
    );
    changes.set_text(
        "social.twitter.homePage.cardType",
        &mut twitter.home_page.card_type,
        card,
    );
}
