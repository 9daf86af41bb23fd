//! Facebook advanced settings.

use seoport_store::SocialOptions;
use seoport_store::keys::{
    OG_ADMIN_KEY, OG_APP_ID, OG_GEN_CATEGORIES, OG_GEN_KEYWORDS, OG_GEN_POST_TAGS, OG_GEN_TAGS,
};

use crate::Context;
use crate::changes::ChangeLog;

/// Copy admin/app ids and the article tag toggles.
///
/// Unlike every other migrator the four toggles are always written, `false`
/// when the legacy key is unset. The section is enabled iff any id or toggle
/// was set.
pub(crate) fn migrate(ctx: &Context<'_>, options: &mut SocialOptions, changes: &mut ChangeLog) {
    let og = ctx.og;
    let advanced = &mut options.social.facebook.advanced;
    let mut enabled = false;

    if let Some(admin_id) = og.text(OG_ADMIN_KEY) {
        enabled = true;
        changes.set_text(
            "social.facebook.advanced.adminId",
            &mut advanced.admin_id,
            ctx.sanitizer.sanitize_option(&admin_id),
        );
    }

    if let Some(app_id) = og.text(OG_APP_ID) {
        enabled = true;
        changes.set_text(
            "social.facebook.advanced.appId",
            &mut advanced.app_id,
            ctx.sanitizer.sanitize_option(&app_id),
        );
    }

    let toggles: [(&str, &str, &mut bool); 4] = [
        (
            OG_GEN_TAGS,
            "social.facebook.advanced.generateArticleTags",
            &mut advanced.generate_article_tags,
        ),
        (
            OG_GEN_KEYWORDS,
            "social.facebook.advanced.useKeywordsInTags",
            &mut advanced.use_keywords_in_tags,
        ),
        (
            OG_GEN_CATEGORIES,
            "social.facebook.advanced.useCategoriesInTags",
            &mut advanced.use_categories_in_tags,
        ),
        (
            OG_GEN_POST_TAGS,
            "social.facebook.advanced.usePostTagsInTags",
            &mut advanced.use_post_tags_in_tags,
        ),
    ];
    for (key, path, field) in toggles {
        let on = og.flag(key);
        enabled |= on;
        changes.set_flag(path, field, on);
    }

    changes.set_flag("social.facebook.advanced.enable", &mut advanced.enable, enabled);
}
