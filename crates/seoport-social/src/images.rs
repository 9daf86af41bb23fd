//! Default and homepage image settings.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use seoport_store::SocialOptions;
use seoport_store::keys::{
    OG_DEFAULT_IMAGE, OG_DEFAULT_IMAGE_HEIGHT, OG_DEFAULT_IMAGE_SOURCE, OG_DEFAULT_IMAGE_WIDTH,
    OG_HOME_IMAGE, OG_META_KEY,
};

use crate::Context;
use crate::changes::ChangeLog;

/// The legacy plugin's bundled fallback image, which the new schema does not ship.
static PLACEHOLDER_IMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"default-user-image\.png$").unwrap());

/// Migrate the homepage and default image settings.
///
/// An absent `aiosp_opengraph_dimg` leaves the default image untouched rather
/// than clearing it, so an unset legacy value never blanks an existing one.
/// Only the bundled placeholder image clears the field.
pub(crate) fn migrate(ctx: &Context<'_>, options: &mut SocialOptions, changes: &mut ChangeLog) {
    let og = ctx.og;
    let facebook = &mut options.social.facebook.general;
    let twitter = &mut options.social.twitter.general;

    if let Some(image) = og.text(OG_HOME_IMAGE) {
        let url = ctx.sanitizer.esc_url(&ctx.sanitizer.strip_all_tags(&image));
        changes.set_text(
            "social.facebook.homePage.image",
            &mut options.social.facebook.home_page.image,
            url.clone(),
        );
        changes.set_text(
            "social.twitter.homePage.image",
            &mut options.social.twitter.home_page.image,
            url,
        );
    }

    if let Some(source) = og.text(OG_DEFAULT_IMAGE_SOURCE) {
        let source = ctx.sanitizer.sanitize_option(&source);
        changes.set_text(
            "social.facebook.general.defaultImageSourcePosts",
            &mut facebook.default_image_source_posts,
            source.clone(),
        );
        changes.set_text(
            "social.twitter.general.defaultImageSourcePosts",
            &mut twitter.default_image_source_posts,
            source,
        );
    }

    match og.text(OG_DEFAULT_IMAGE) {
        Some(image) if PLACEHOLDER_IMAGE_RE.is_match(&image) => {
            debug!(image = %image, "dropping placeholder default image");
            changes.clear_text(
                "social.facebook.general.defaultImagePosts",
                &mut facebook.default_image_posts,
            );
            changes.clear_text(
                "social.twitter.general.defaultImagePosts",
                &mut twitter.default_image_posts,
            );
        }
        Some(image) => {
            let url = ctx.sanitizer.esc_url(&ctx.sanitizer.strip_all_tags(&image));
            changes.set_text(
                "social.facebook.general.defaultImagePosts",
                &mut facebook.default_image_posts,
                url.clone(),
            );
            changes.set_text(
                "social.twitter.general.defaultImagePosts",
                &mut twitter.default_image_posts,
                url,
            );
        }
        None => {}
    }

    if og.flag(OG_DEFAULT_IMAGE_WIDTH) || og.flag(OG_DEFAULT_IMAGE_HEIGHT) {
        changes.set_text(
            "social.facebook.general.defaultImageWidthPosts",
            &mut facebook.default_image_width_posts,
            ctx.sanitizer.sanitize_option(&og.raw_text(OG_DEFAULT_IMAGE_WIDTH)),
        );
        changes.set_text(
            "social.facebook.general.defaultImageHeightPosts",
            &mut facebook.default_image_height_posts,
            ctx.sanitizer.sanitize_option(&og.raw_text(OG_DEFAULT_IMAGE_HEIGHT)),
        );
    }

    if let Some(key) = og.text(OG_META_KEY) {
        let key = ctx.sanitizer.sanitize_option(&key);
        changes.set_text(
            "social.facebook.general.customFieldImagePosts",
            &mut facebook.custom_field_image_posts,
            key.clone(),
        );
        changes.set_text(
            "social.twitter.general.customFieldImagePosts",
            &mut twitter.custom_field_image_posts,
            key,
        );
    }
}
