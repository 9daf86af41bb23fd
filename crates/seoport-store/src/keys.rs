//! Key constants for legacy options, post meta and user meta.

/// Module namespace holding every legacy Open Graph option.
pub const OPENGRAPH_MODULE: &str = "aiosp_opengraph_options";

/// Top-level legacy key for the module array.
pub const MODULES: &str = "modules";

// Top-level legacy options.

/// Legacy homepage title format, e.g. `%page_title% | %blog_title%`.
pub const HOME_PAGE_TITLE_FORMAT: &str = "aiosp_home_page_title_format";

/// Legacy description format, e.g. `%description%`.
pub const DESCRIPTION_FORMAT: &str = "aiosp_description_format";

/// Legacy homepage title override.
pub const HOME_TITLE: &str = "aiosp_home_title";

/// Legacy homepage description override.
pub const HOME_DESCRIPTION: &str = "aiosp_home_description";

/// Use the static front page's own SEO fields for the homepage.
pub const USE_STATIC_HOME_INFO: &str = "aiosp_use_static_home_info";

// Open Graph module options.

pub const OG_SET_META: &str = "aiosp_opengraph_setmeta";
pub const OG_HOME_TITLE: &str = "aiosp_opengraph_hometitle";
pub const OG_DESCRIPTION: &str = "aiosp_opengraph_description";
pub const OG_HOME_IMAGE: &str = "aiosp_opengraph_homeimage";
pub const OG_DEFAULT_IMAGE_SOURCE: &str = "aiosp_opengraph_defimg";
pub const OG_DEFAULT_IMAGE: &str = "aiosp_opengraph_dimg";
pub const OG_DEFAULT_IMAGE_WIDTH: &str = "aiosp_opengraph_dimgwidth";
pub const OG_DEFAULT_IMAGE_HEIGHT: &str = "aiosp_opengraph_dimgheight";
pub const OG_META_KEY: &str = "aiosp_opengraph_meta_key";
pub const OG_TWITTER_SITE: &str = "aiosp_opengraph_twitter_site";
pub const OG_DEFAULT_CARD: &str = "aiosp_opengraph_defcard";
pub const OG_ADMIN_KEY: &str = "aiosp_opengraph_key";
pub const OG_APP_ID: &str = "aiosp_opengraph_appid";
pub const OG_GEN_TAGS: &str = "aiosp_opengraph_gen_tags";
pub const OG_GEN_KEYWORDS: &str = "aiosp_opengraph_gen_keywords";
pub const OG_GEN_CATEGORIES: &str = "aiosp_opengraph_gen_categories";
pub const OG_GEN_POST_TAGS: &str = "aiosp_opengraph_gen_post_tags";
pub const OG_SITE_NAME: &str = "aiosp_opengraph_sitename";
pub const OG_FACEBOOK_AUTHOR: &str = "aiosp_opengraph_facebook_author";
pub const OG_TWITTER_CREATOR: &str = "aiosp_opengraph_twitter_creator";
pub const OG_GENERATE_DESCRIPTIONS: &str = "aiosp_opengraph_generate_descriptions";
pub const OG_DESCRIPTION_SHORTCODES: &str = "aiosp_opengraph_description_shortcodes";
pub const OG_TITLE_SHORTCODES: &str = "aiosp_opengraph_title_shortcodes";

/// Legacy per post type object type key, e.g. `aiosp_opengraph_post_fb_object_type`.
pub fn og_object_type(post_type: &str) -> String {
    format!("aiosp_opengraph_{post_type}_fb_object_type")
}

// Legacy post meta.

pub const POST_SEO_TITLE: &str = "_aioseop_title";
pub const POST_SEO_DESCRIPTION: &str = "_aioseop_description";

/// Serialized per post Open Graph settings.
pub const POST_OG_SETTINGS: &str = "_aioseop_opengraph_settings";

pub const POST_OG_SETTINGS_TITLE: &str = "aioseop_opengraph_settings_title";
pub const POST_OG_SETTINGS_DESC: &str = "aioseop_opengraph_settings_desc";

// User meta.

pub const USER_FACEBOOK: &str = "facebook";
pub const USER_TWITTER: &str = "twitter";
pub const USER_AIOSEO_FACEBOOK: &str = "aioseo_facebook";
pub const USER_AIOSEO_TWITTER: &str = "aioseo_twitter";

/// Stable name of the deprecated Open Graph settings notification.
pub const DEPRECATED_OPENGRAPH_NOTIFICATION: &str = "v3-migration-deprecated-opengraph";
