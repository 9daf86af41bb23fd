//! Homepage title and description resolution.
//!
//! Where the homepage social title (description) comes from depends on what
//! the front page shows:
//!
//! - **Latest posts**: the value lands in the `homePage` options of both
//!   networks, resolved from the legacy format, the legacy OG homepage value
//!   or the global search appearance value.
//! - **Static page**: the value lands on the page's own SEO record, resolved
//!   through a precedence chain over legacy options and the page's legacy
//!   custom fields.
//!
//! Title and description follow the same rules over different keys; see
//! [`HomePageField`].

use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use seoport_store::keys::{
    DESCRIPTION_FORMAT, HOME_DESCRIPTION, HOME_PAGE_TITLE_FORMAT, HOME_TITLE, OG_DESCRIPTION,
    OG_HOME_TITLE, OG_SET_META, POST_OG_SETTINGS, POST_OG_SETTINGS_DESC, POST_OG_SETTINGS_TITLE,
    POST_SEO_DESCRIPTION, POST_SEO_TITLE, USE_STATIC_HOME_INFO,
};
use seoport_store::{LegacySection, PostStore, SeoPost, SocialOptions, is_present_str, serialized};

use crate::Context;
use crate::changes::ChangeLog;
use crate::error::MigrationError;
use crate::site::FrontPage;

/// Which homepage value is being resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomePageField {
    Title,
    Description,
}

impl HomePageField {
    pub fn label(self) -> &'static str {
        match self {
            HomePageField::Title => "title",
            HomePageField::Description => "description",
        }
    }

    /// Legacy format option used when nothing more specific is set.
    fn format_key(self) -> &'static str {
        match self {
            HomePageField::Title => HOME_PAGE_TITLE_FORMAT,
            HomePageField::Description => DESCRIPTION_FORMAT,
        }
    }

    /// Macro in the format that stands for the value itself, and its smart tag.
    fn format_substitution(self) -> (&'static str, &'static str) {
        match self {
            HomePageField::Title => ("%page_title%", "#site_title"),
            HomePageField::Description => ("%description%", "#tagline"),
        }
    }

    /// Legacy Open Graph module option for the homepage value.
    fn og_home_key(self) -> &'static str {
        match self {
            HomePageField::Title => OG_HOME_TITLE,
            HomePageField::Description => OG_DESCRIPTION,
        }
    }

    /// Legacy top-level homepage override.
    fn home_override_key(self) -> &'static str {
        match self {
            HomePageField::Title => HOME_TITLE,
            HomePageField::Description => HOME_DESCRIPTION,
        }
    }

    /// Key inside the page's serialized Open Graph settings.
    fn og_settings_key(self) -> &'static str {
        match self {
            HomePageField::Title => POST_OG_SETTINGS_TITLE,
            HomePageField::Description => POST_OG_SETTINGS_DESC,
        }
    }

    /// Legacy SEO custom field on the page.
    fn seo_meta_key(self) -> &'static str {
        match self {
            HomePageField::Title => POST_SEO_TITLE,
            HomePageField::Description => POST_SEO_DESCRIPTION,
        }
    }

    fn global_value(self, options: &SocialOptions) -> &str {
        let global = &options.search_appearance.global;
        match self {
            HomePageField::Title => &global.site_title,
            HomePageField::Description => &global.meta_description,
        }
    }

    fn post_value(self, post: &SeoPost) -> &str {
        match self {
            HomePageField::Title => &post.title,
            HomePageField::Description => &post.description,
        }
    }

    fn write_options(self, options: &mut SocialOptions, value: String, changes: &mut ChangeLog) {
        let social = &mut options.social;
        match self {
            HomePageField::Title => {
                changes.set_text(
                    "social.facebook.homePage.title",
                    &mut social.facebook.home_page.title,
                    value.clone(),
                );
                changes.set_text(
                    "social.twitter.homePage.title",
                    &mut social.twitter.home_page.title,
                    value,
                );
            }
            HomePageField::Description => {
                changes.set_text(
                    "social.facebook.homePage.description",
                    &mut social.facebook.home_page.description,
                    value.clone(),
                );
                changes.set_text(
                    "social.twitter.homePage.description",
                    &mut social.twitter.home_page.description,
                    value,
                );
            }
        }
    }

    /// Write both network fields of the post. Returns whether anything changed.
    fn write_post(self, post: &mut SeoPost, value: &str, changes: &mut ChangeLog) -> bool {
        let id = post.post_id;
        let (og, twitter) = match self {
            HomePageField::Title => (&mut post.og_title, &mut post.twitter_title),
            HomePageField::Description => (&mut post.og_description, &mut post.twitter_description),
        };
        let mut changed = false;
        for (name, field) in [("og", og), ("twitter", twitter)] {
            if field != value {
                changes.record(&format!("post:{id}.{name}_{}", self.label()), field, value);
                *field = value.to_string();
                changed = true;
            }
        }
        changed
    }
}

/// Resolve the homepage value when the front page lists the latest posts.
///
/// The legacy format, with its self-referencing macro swapped for a smart tag,
/// is the default. With homepage meta mode off an explicit legacy OG homepage
/// value wins; with it on the global search appearance value wins.
pub fn resolve_latest_posts(
    field: HomePageField,
    root: LegacySection<'_>,
    og: LegacySection<'_>,
    options: &SocialOptions,
) -> String {
    let (token, tag) = field.format_substitution();
    let default = root.raw_text(field.format_key()).replace(token, tag);

    if !og.flag(OG_SET_META) {
        return og.text(field.og_home_key()).unwrap_or(default);
    }

    match field.global_value(options) {
        "" => default,
        global => global.to_string(),
    }
}

/// Inputs to the static front page precedence chain.
///
/// Every `Option` is `Some` only for present, non-empty legacy values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticHomeSources {
    /// Legacy `aiosp_opengraph_setmeta`.
    pub use_home_page_meta: bool,
    /// Legacy `aiosp_use_static_home_info`.
    pub use_static_home_info: bool,
    /// Legacy `aiosp_home_title` / `aiosp_home_description`.
    pub home_override: Option<String>,
    /// Legacy OG module homepage value.
    pub og_home_setting: Option<String>,
    /// The page's own legacy OG title/description.
    pub og_settings_value: Option<String>,
    /// The page's legacy SEO title/description custom field.
    pub seo_value: Option<String>,
    /// Value already on the page's SEO record.
    pub prior: String,
}

/// Resolve the homepage value for a static front page.
///
/// The four combinations of homepage meta mode and "use static home info"
/// each have their own order:
///
/// | meta | static info | order (later wins)                                         |
/// |------|-------------|------------------------------------------------------------|
/// | off  | set         | nothing                                                    |
/// | off  | unset       | home override, OG home setting, then page OG value, else the SEO field if the value is still empty or no OG home setting exists |
/// | on   | unset       | prior value, page OG value, home override, SEO field       |
/// | on   | set         | SEO field                                                  |
pub fn resolve_static_home(sources: &StaticHomeSources) -> String {
    match (sources.use_home_page_meta, sources.use_static_home_info) {
        (false, true) => String::new(),
        (false, false) => {
            let mut value = sources.home_override.clone().unwrap_or_default();
            if let Some(og_home) = &sources.og_home_setting {
                value = og_home.clone();
            }
            if let Some(og_value) = &sources.og_settings_value {
                value = og_value.clone();
            } else if let Some(seo) = &sources.seo_value
                && (value.is_empty() || sources.og_home_setting.is_none())
            {
                value = seo.clone();
            }
            value
        }
        (true, false) => {
            let mut value = sources.prior.clone();
            if let Some(og_value) = &sources.og_settings_value {
                value = og_value.clone();
            }
            if let Some(home) = &sources.home_override {
                value = home.clone();
            }
            if let Some(seo) = &sources.seo_value {
                value = seo.clone();
            }
            value
        }
        (true, true) => sources.seo_value.clone().unwrap_or_default(),
    }
}

/// Decode the page's stored Open Graph settings.
///
/// The value is a PHP-serialized array as written by the legacy plugin, or a
/// JSON object from an export. Anything else decodes to no settings; the page
/// still counts as having legacy OG metadata.
fn decode_og_settings(post_id: u64, raw: &str) -> Map<String, Value> {
    let decoded =
        serde_json::from_str::<Value>(raw).or_else(|_| serialized::unserialize(raw));
    match decoded {
        Ok(Value::Object(map)) => map,
        Ok(_) => {
            warn!(post_id, "legacy Open Graph settings are not an array, ignoring sub-settings");
            Map::new()
        }
        Err(e) => {
            warn!(
                post_id,
                error = %e,
                "unreadable legacy Open Graph settings, ignoring sub-settings"
            );
            Map::new()
        }
    }
}

/// Migrate one homepage value. Returns whether a post record was saved.
pub(crate) fn migrate<P: PostStore + ?Sized>(
    ctx: &Context<'_>,
    field: HomePageField,
    options: &mut SocialOptions,
    store: &mut P,
    changes: &mut ChangeLog,
) -> Result<bool, MigrationError> {
    match ctx.site.front_page {
        FrontPage::LatestPosts => {
            let resolved = resolve_latest_posts(field, ctx.legacy.root(), ctx.og, options);
            let value = ctx.clean(&resolved);
            debug!(field = field.label(), value = %value, "resolved latest posts homepage value");
            field.write_options(options, value, changes);
            Ok(false)
        }
        FrontPage::StaticPage(page_id) => migrate_static_page(ctx, field, page_id, store, changes),
        FrontPage::Unassigned => {
            debug!(field = field.label(), "no static front page selected, skipping");
            Ok(false)
        }
    }
}

fn migrate_static_page<P: PostStore + ?Sized>(
    ctx: &Context<'_>,
    field: HomePageField,
    page_id: u64,
    store: &mut P,
    changes: &mut ChangeLog,
) -> Result<bool, MigrationError> {
    if !store.post_exists(page_id)? {
        warn!(page_id, "front page does not exist, skipping homepage {}", field.label());
        return Ok(false);
    }

    let Some(raw) = store
        .legacy_meta(page_id, POST_OG_SETTINGS)?
        .filter(|raw| is_present_str(raw))
    else {
        debug!(page_id, "front page has no legacy Open Graph settings");
        return Ok(false);
    };

    let og_settings = decode_og_settings(page_id, &raw);
    let page_og = LegacySection::new(&og_settings);
    let root = ctx.legacy.root();
    let mut post = store.get_post(page_id)?;

    let sources = StaticHomeSources {
        use_home_page_meta: ctx.og.flag(OG_SET_META),
        use_static_home_info: root.flag(USE_STATIC_HOME_INFO),
        home_override: root.text(field.home_override_key()),
        og_home_setting: ctx.og.text(field.og_home_key()),
        og_settings_value: page_og.text(field.og_settings_key()),
        seo_value: store
            .legacy_meta(page_id, field.seo_meta_key())?
            .filter(|v| is_present_str(v)),
        prior: field.post_value(&post).to_string(),
    };

    let value = ctx.clean(&resolve_static_home(&sources));
    if value.is_empty() {
        debug!(page_id, field = field.label(), "nothing resolved for static front page");
        return Ok(false);
    }

    if !field.write_post(&mut post, &value, changes) {
        return Ok(false);
    }
    store.save_post(&post)?;
    info!(page_id, field = field.label(), "migrated static front page social {}", field.label());
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    fn some(s: &str) -> Option<String> {
        Some(s.to_string())
    }

    #[test]
    fn test_latest_posts_meta_off_prefers_og_home_title() {
        let root = object(json!({"aiosp_home_page_title_format": "%page_title% - Example"}));
        let og = object(json!({"aiosp_opengraph_hometitle": "Custom Title"}));
        let value = resolve_latest_posts(
            HomePageField::Title,
            LegacySection::new(&root),
            LegacySection::new(&og),
            &SocialOptions::default(),
        );
        assert_eq!(value, "Custom Title");
    }

    #[test]
    fn test_latest_posts_meta_off_falls_back_to_format() {
        let root = object(json!({"aiosp_home_page_title_format": "%page_title% - Example"}));
        let og = object(json!({"aiosp_opengraph_hometitle": ""}));
        let value = resolve_latest_posts(
            HomePageField::Title,
            LegacySection::new(&root),
            LegacySection::new(&og),
            &SocialOptions::default(),
        );
        assert_eq!(value, "#site_title - Example");
    }

    #[test]
    fn test_latest_posts_meta_on_prefers_global() {
        let root = object(json!({"aiosp_description_format": "%description% | More"}));
        let og = object(json!({
            "aiosp_opengraph_setmeta": "on",
            "aiosp_opengraph_description": "Ignored",
        }));
        let mut options = SocialOptions::default();

        let value = resolve_latest_posts(
            HomePageField::Description,
            LegacySection::new(&root),
            LegacySection::new(&og),
            &options,
        );
        assert_eq!(value, "#tagline | More");

        options.search_appearance.global.meta_description = "Global".to_string();
        let value = resolve_latest_posts(
            HomePageField::Description,
            LegacySection::new(&root),
            LegacySection::new(&og),
            &options,
        );
        assert_eq!(value, "Global");
    }

    #[test]
    fn test_static_meta_off_static_info_set_resolves_nothing() {
        let sources = StaticHomeSources {
            use_static_home_info: true,
            home_override: some("Home"),
            og_home_setting: some("OG Home"),
            og_settings_value: some("Page OG"),
            seo_value: some("SEO"),
            prior: "Prior".to_string(),
            ..Default::default()
        };
        assert_eq!(resolve_static_home(&sources), "");
    }

    #[test]
    fn test_static_meta_off_chain() {
        let base = StaticHomeSources {
            home_override: some("Home"),
            ..Default::default()
        };
        assert_eq!(resolve_static_home(&base), "Home");

        let with_og_home = StaticHomeSources {
            og_home_setting: some("OG Home"),
            ..base.clone()
        };
        assert_eq!(resolve_static_home(&with_og_home), "OG Home");

        let with_page_og = StaticHomeSources {
            og_settings_value: some("Page OG"),
            seo_value: some("SEO"),
            ..with_og_home.clone()
        };
        assert_eq!(resolve_static_home(&with_page_og), "Page OG");

        // OG home setting present and the value non-empty: SEO field loses.
        let seo_loses = StaticHomeSources {
            seo_value: some("SEO"),
            ..with_og_home.clone()
        };
        assert_eq!(resolve_static_home(&seo_loses), "OG Home");

        // No OG home setting: SEO field beats the home override.
        let seo_wins = StaticHomeSources {
            seo_value: some("SEO"),
            ..base.clone()
        };
        assert_eq!(resolve_static_home(&seo_wins), "SEO");

        // Nothing else set: SEO field fills the empty value.
        let only_seo = StaticHomeSources {
            seo_value: some("SEO"),
            ..Default::default()
        };
        assert_eq!(resolve_static_home(&only_seo), "SEO");
    }

    #[test]
    fn test_static_meta_on_chain() {
        let sources = StaticHomeSources {
            use_home_page_meta: true,
            prior: "Prior".to_string(),
            ..Default::default()
        };
        assert_eq!(resolve_static_home(&sources), "Prior");

        let sources = StaticHomeSources {
            og_settings_value: some("Page OG"),
            og_home_setting: some("OG Home"),
            ..sources
        };
        assert_eq!(resolve_static_home(&sources), "Page OG");

        let sources = StaticHomeSources {
            home_override: some("Home"),
            ..sources
        };
        assert_eq!(resolve_static_home(&sources), "Home");

        let sources = StaticHomeSources {
            seo_value: some("SEO"),
            ..sources
        };
        assert_eq!(resolve_static_home(&sources), "SEO");
    }

    #[test]
    fn test_static_meta_on_static_info_set_uses_seo_only() {
        let sources = StaticHomeSources {
            use_home_page_meta: true,
            use_static_home_info: true,
            home_override: some("Home"),
            og_settings_value: some("Page OG"),
            prior: "Prior".to_string(),
            ..Default::default()
        };
        assert_eq!(resolve_static_home(&sources), "");

        let sources = StaticHomeSources {
            seo_value: some("SEO"),
            ..sources
        };
        assert_eq!(resolve_static_home(&sources), "SEO");
    }

    #[test]
    fn test_decode_og_settings() {
        let map = decode_og_settings(1, r#"{"aioseop_opengraph_settings_title": "T"}"#);
        assert_eq!(LegacySection::new(&map).text(POST_OG_SETTINGS_TITLE), some("T"));
        let map = decode_og_settings(
            1,
            r#"a:2:{s:32:"aioseop_opengraph_settings_title";s:7:"Page OG";s:31:"aioseop_opengraph_settings_desc";s:0:"";}"#,
        );
        let section = LegacySection::new(&map);
        assert_eq!(section.text(POST_OG_SETTINGS_TITLE), some("Page OG"));
        assert_eq!(section.text(POST_OG_SETTINGS_DESC), None);
        assert!(decode_og_settings(1, "a:0:{}").is_empty());
        assert!(decode_og_settings(1, "[1,2]").is_empty());
        assert!(decode_og_settings(1, "a:1:{s:3:\"key\"").is_empty());
        assert!(decode_og_settings(1, "on").is_empty());
    }
}
