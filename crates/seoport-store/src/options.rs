//! Structured target options.
//!
//! Field names serialize in camelCase so a dotted path such as
//! `social.facebook.homePage.title` addresses the same setting in JSON and in
//! [`SocialOptions::get_path`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::StoreError;

/// The target option tree touched by the social meta migration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SocialOptions {
    pub social: Social,
    pub search_appearance: SearchAppearance,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchAppearance {
    pub global: SearchGlobal,
}

/// Global search appearance settings read when homepage meta mode is on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchGlobal {
    pub site_title: String,
    pub meta_description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Social {
    pub profiles: Profiles,
    pub facebook: Facebook,
    pub twitter: Twitter,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profiles {
    pub urls: ProfileUrls,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileUrls {
    pub facebook_page_url: String,
    pub twitter_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Facebook {
    pub general: FacebookGeneral,
    pub home_page: FacebookHomePage,
    pub advanced: FacebookAdvanced,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FacebookGeneral {
    pub site_name: String,
    pub show_author: bool,
    pub default_image_source_posts: String,
    pub custom_field_image_posts: String,
    pub default_image_posts: String,
    pub default_image_width_posts: String,
    pub default_image_height_posts: String,
    pub dynamic: DynamicSettings,
}

/// Settings that exist once per registered content type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DynamicSettings {
    pub post_types: BTreeMap<String, PostTypeSettings>,
}

impl DynamicSettings {
    /// Whether `post_type` is a registered dynamic entry.
    pub fn has(&self, post_type: &str) -> bool {
        self.post_types.contains_key(post_type)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PostTypeSettings {
    pub object_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FacebookHomePage {
    pub image: String,
    pub title: String,
    pub description: String,
    pub object_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FacebookAdvanced {
    pub enable: bool,
    pub admin_id: String,
    pub app_id: String,
    pub generate_article_tags: bool,
    pub use_keywords_in_tags: bool,
    pub use_categories_in_tags: bool,
    pub use_post_tags_in_tags: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Twitter {
    pub general: TwitterGeneral,
    pub home_page: TwitterHomePage,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TwitterGeneral {
    pub show_author: bool,
    pub default_card_type: String,
    pub default_image_source_posts: String,
    pub custom_field_image_posts: String,
    pub default_image_posts: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TwitterHomePage {
    pub image: String,
    pub title: String,
    pub description: String,
    pub card_type: String,
}

impl SocialOptions {
    /// Parse and validate an option tree.
    pub fn from_value(value: Value) -> Result<Self, StoreError> {
        let options: Self = serde_json::from_value(value)?;
        options.validate()?;
        Ok(options)
    }

    /// Check structural invariants that serde cannot express.
    pub fn validate(&self) -> Result<(), StoreError> {
        for name in self.social.facebook.general.dynamic.post_types.keys() {
            let valid = !name.is_empty()
                && name
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-');
            if !valid {
                return Err(StoreError::InvalidOptions(format!(
                    "invalid dynamic post type name: {name:?}"
                )));
            }
        }

        let urls = &self.social.profiles.urls;
        for (field, url) in [
            ("facebookPageUrl", &urls.facebook_page_url),
            ("twitterUrl", &urls.twitter_url),
        ] {
            if !url.is_empty() && !(url.starts_with("https://") || url.starts_with("http://")) {
                return Err(StoreError::InvalidOptions(format!(
                    "{field} must be an http(s) URL, got {url:?}"
                )));
            }
        }

        Ok(())
    }

    /// Look up a setting by dotted camelCase path.
    ///
    /// ```
    /// use seoport_store::SocialOptions;
    ///
    /// let mut options = SocialOptions::default();
    /// options.social.twitter.home_page.title = "Home".to_string();
    /// let value = options.get_path("social.twitter.homePage.title").unwrap();
    /// assert_eq!(value, "Home");
    /// ```
    pub fn get_path(&self, path: &str) -> Option<Value> {
        let tree = serde_json::to_value(self).ok()?;
        let mut node = &tree;
        for segment in path.split('.') {
            node = node.get(segment)?;
        }
        Some(node.clone())
    }
}
