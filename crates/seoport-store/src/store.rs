//! Store traits and the in-memory site store.

use std::collections::BTreeMap;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::StoreError;
use crate::legacy::LegacyOptions;
use crate::options::SocialOptions;
use crate::records::{Notification, SeoPost, UserMeta};

/// Read-only source of the legacy option array.
pub trait LegacyOptionsSource {
    fn legacy_options(&self) -> Result<LegacyOptions, StoreError>;
}

/// Reads and writes the structured target options.
pub trait OptionsStore {
    fn load_options(&self) -> Result<SocialOptions, StoreError>;
    fn save_options(&mut self, options: &SocialOptions) -> Result<(), StoreError>;
}

/// Post lookups, legacy custom fields and SEO records.
pub trait PostStore {
    fn post_exists(&self, post_id: u64) -> Result<bool, StoreError>;

    /// A legacy custom field for the post, if set.
    fn legacy_meta(&self, post_id: u64, key: &str) -> Result<Option<String>, StoreError>;

    /// The SEO record for the post, or a blank one if none was saved yet.
    fn get_post(&self, post_id: u64) -> Result<SeoPost, StoreError>;

    fn save_post(&mut self, post: &SeoPost) -> Result<(), StoreError>;
}

/// Bulk user meta access.
pub trait UserMetaStore {
    /// All rows with the given key.
    fn user_meta_by_key(&self, key: &str) -> Result<Vec<UserMeta>, StoreError>;

    /// Insert or replace the row for `user_id` and `key`.
    fn update_user_meta(&mut self, user_id: u64, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Admin notification storage.
pub trait NotificationStore {
    fn notification_by_name(&self, name: &str) -> Result<Option<Notification>, StoreError>;
    fn add_notification(&mut self, notification: Notification) -> Result<(), StoreError>;
}

/// Everything the social meta migration touches.
pub trait SiteStore:
    LegacyOptionsSource + OptionsStore + PostStore + UserMetaStore + NotificationStore
{
}

impl<T> SiteStore for T where
    T: LegacyOptionsSource + OptionsStore + PostStore + UserMetaStore + NotificationStore
{
}

/// A post known to the site: its legacy custom fields and SEO record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PostEntry {
    pub meta: BTreeMap<String, String>,
    pub seo: Option<SeoPost>,
}

/// Count of writes per store, for assertions and reporting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteCounts {
    pub options: usize,
    pub posts: usize,
    pub user_meta: usize,
    pub notifications: usize,
}

impl WriteCounts {
    pub fn total(&self) -> usize {
        self.options + self.posts + self.user_meta + self.notifications
    }
}

/// In-memory site data, also the shape of a snapshot file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MemoryStore {
    pub legacy_options: LegacyOptions,
    pub options: SocialOptions,
    pub posts: BTreeMap<u64, PostEntry>,
    pub user_meta: Vec<UserMeta>,
    pub notifications: Vec<Notification>,
    #[serde(skip)]
    writes: WriteCounts,
}

impl MemoryStore {
    pub fn new(legacy_options: LegacyOptions, options: SocialOptions) -> Self {
        Self {
            legacy_options,
            options,
            ..Self::default()
        }
    }

    /// Register a post with its legacy custom fields.
    pub fn with_post<I, K, V>(mut self, post_id: u64, meta: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let entry = self.posts.entry(post_id).or_default();
        entry
            .meta
            .extend(meta.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Add a user meta row without counting it as a write.
    pub fn with_user_meta(mut self, user_id: u64, key: &str, value: &str) -> Self {
        self.user_meta.push(UserMeta {
            user_id,
            key: key.to_string(),
            value: value.to_string(),
        });
        self
    }

    /// Saved SEO record for a post, if any.
    pub fn seo_post(&self, post_id: u64) -> Option<&SeoPost> {
        self.posts.get(&post_id).and_then(|entry| entry.seo.as_ref())
    }

    /// Value of one user meta row.
    pub fn user_meta_value(&self, user_id: u64, key: &str) -> Option<&str> {
        self.user_meta
            .iter()
            .find(|row| row.user_id == user_id && row.key == key)
            .map(|row| row.value.as_str())
    }

    pub fn writes(&self) -> WriteCounts {
        self.writes
    }
}

impl LegacyOptionsSource for MemoryStore {
    fn legacy_options(&self) -> Result<LegacyOptions, StoreError> {
        Ok(self.legacy_options.clone())
    }
}

impl OptionsStore for MemoryStore {
    fn load_options(&self) -> Result<SocialOptions, StoreError> {
        Ok(self.options.clone())
    }

    fn save_options(&mut self, options: &SocialOptions) -> Result<(), StoreError> {
        options.validate()?;
        self.options = options.clone();
        self.writes.options += 1;
        Ok(())
    }
}

impl PostStore for MemoryStore {
    fn post_exists(&self, post_id: u64) -> Result<bool, StoreError> {
        Ok(self.posts.contains_key(&post_id))
    }

    fn legacy_meta(&self, post_id: u64, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self
            .posts
            .get(&post_id)
            .and_then(|entry| entry.meta.get(key))
            .cloned())
    }

    fn get_post(&self, post_id: u64) -> Result<SeoPost, StoreError> {
        Ok(self
            .seo_post(post_id)
            .cloned()
            .unwrap_or_else(|| SeoPost::new(post_id)))
    }

    fn save_post(&mut self, post: &SeoPost) -> Result<(), StoreError> {
        let entry = self
            .posts
            .get_mut(&post.post_id)
            .ok_or_else(|| StoreError::NotFound {
                kind: "post",
                id: post.post_id.to_string(),
            })?;
        let mut post = post.clone();
        post.updated_at = Some(Utc::now());
        entry.seo = Some(post);
        self.writes.posts += 1;
        Ok(())
    }
}

impl UserMetaStore for MemoryStore {
    fn user_meta_by_key(&self, key: &str) -> Result<Vec<UserMeta>, StoreError> {
        Ok(self
            .user_meta
            .iter()
            .filter(|row| row.key == key)
            .cloned()
            .collect())
    }

    fn update_user_meta(&mut self, user_id: u64, key: &str, value: &str) -> Result<(), StoreError> {
        match self
            .user_meta
            .iter_mut()
            .find(|row| row.user_id == user_id && row.key == key)
        {
            Some(row) => row.value = value.to_string(),
            None => self.user_meta.push(UserMeta {
                user_id,
                key: key.to_string(),
                value: value.to_string(),
            }),
        }
        self.writes.user_meta += 1;
        debug!(user_id, key, "updated user meta");
        Ok(())
    }
}

impl NotificationStore for MemoryStore {
    fn notification_by_name(&self, name: &str) -> Result<Option<Notification>, StoreError> {
        Ok(self
            .notifications
            .iter()
            .find(|n| n.name == name)
            .cloned())
    }

    fn add_notification(&mut self, notification: Notification) -> Result<(), StoreError> {
        self.notifications.push(notification);
        self.writes.notifications += 1;
        Ok(())
    }
}
