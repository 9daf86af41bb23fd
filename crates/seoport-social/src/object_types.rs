//! Default Open Graph object type per content type.

use tracing::debug;

use seoport_store::SocialOptions;
use seoport_store::keys::og_object_type;

use crate::Context;
use crate::changes::ChangeLog;

pub(crate) fn migrate(ctx: &Context<'_>, options: &mut SocialOptions, changes: &mut ChangeLog) {
    for post_type in &ctx.site.public_post_types {
        let key = og_object_type(post_type);
        let Some(object_type) = ctx.og.text(&key) else {
            continue;
        };
        let object_type = ctx.sanitizer.sanitize_option(&object_type);
        let facebook = &mut options.social.facebook;

        match facebook.general.dynamic.post_types.get_mut(post_type) {
            Some(settings) => changes.set_text(
                &format!("social.facebook.general.dynamic.postTypes.{post_type}.objectType"),
                &mut settings.object_type,
                object_type.clone(),
            ),
            None => debug!(post_type = %post_type, "post type has no dynamic settings entry"),
        }

        // Posts and the homepage shared one default in the legacy schema.
        if post_type == "post" {
            changes.set_text(
                "social.facebook.homePage.objectType",
                &mut facebook.home_page.object_type,
                object_type,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sanitize::DefaultSanitizer;
    use crate::site::{FrontPage, SiteConfig};
    use crate::urls::MarketingUrls;
    use seoport_store::{LegacyOptions, PostTypeSettings};
    use serde_json::json;

    #[test]
    fn test_object_types() {
        let legacy = LegacyOptions::from_value(json!({"modules": {"aiosp_opengraph_options": {
            "aiosp_opengraph_post_fb_object_type": "article",
            "aiosp_opengraph_page_fb_object_type": "website",
            "aiosp_opengraph_product_fb_object_type": "product",
            "aiosp_opengraph_private_fb_object_type": "book",
        }}}))
        .unwrap();
        let site = SiteConfig::new(
            FrontPage::LatestPosts,
            vec!["post".into(), "page".into(), "product".into()],
        )
        .unwrap();
        let ctx = Context {
            legacy: &legacy,
            og: legacy.open_graph().unwrap(),
            site: &site,
            sanitizer: &DefaultSanitizer,
            urls: &MarketingUrls::default(),
        };

        let mut options = SocialOptions::default();
        let dynamic = &mut options.social.facebook.general.dynamic.post_types;
        dynamic.insert("post".into(), PostTypeSettings::default());
        dynamic.insert("page".into(), PostTypeSettings::default());

        migrate(&ctx, &mut options, &mut ChangeLog::default());

        let dynamic = &options.social.facebook.general.dynamic;
        assert_eq!(dynamic.post_types["post"].object_type, "article");
        assert_eq!(dynamic.post_types["page"].object_type, "website");
        assert!(!dynamic.has("product"));
        assert!(!dynamic.has("private"));
        assert_eq!(options.social.facebook.home_page.object_type, "article");
    }
}
