//! Option models and site stores for seoport.
//!
//! This crate holds everything the social meta migration reads and writes:
//!
//! - **Legacy options**: a read-only view over the old nested option array
//! - **Social options**: the structured target schema, grouped by network and scope
//! - **Records**: per-post SEO records, user meta rows and notifications
//! - **Serialized meta**: a decoder for PHP-serialized legacy post meta
//! - **Stores**: the traits the migration is written against, plus an
//!   in-memory implementation and a JSON snapshot file format

mod error;
pub mod keys;
mod legacy;
mod options;
mod records;
pub mod serialized;
pub mod snapshot;
mod store;

pub use error::StoreError;
pub use legacy::{LegacyOptions, LegacySection, is_present, is_present_str, value_text};
pub use options::{
    DynamicSettings, Facebook, FacebookAdvanced, FacebookGeneral, FacebookHomePage, ProfileUrls,
    Profiles, PostTypeSettings, SearchAppearance, SearchGlobal, Social, SocialOptions, Twitter,
    TwitterGeneral, TwitterHomePage,
};
pub use records::{Notification, NotificationKind, SeoPost, UserMeta};
pub use store::{
    LegacyOptionsSource, MemoryStore, NotificationStore, OptionsStore, PostEntry, PostStore,
    SiteStore, UserMetaStore, WriteCounts,
};
