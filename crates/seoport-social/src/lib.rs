//! Migration of legacy Open Graph settings into the social options schema.
//!
//! The migration reads the legacy `aiosp_opengraph_options` module block and
//! resolves every new social setting from it:
//!
//! - homepage titles and descriptions, including the static front page chain
//! - default images, Twitter handle and card type
//! - per post type object types and Facebook advanced settings
//! - author profile links stored in user meta
//! - a one-time notice for settings that no longer exist
//!
//! Stores, sanitization and URL building are injected, see
//! [`SocialMetaMigration::new`].

mod advanced;
mod changes;
mod error;
pub mod homepage;
mod images;
pub mod mapping;
mod migration;
mod notices;
mod object_types;
mod profiles;
pub mod sanitize;
mod site;
pub mod smart_tags;
mod twitter;
mod urls;

pub use changes::{Change, ChangeLog};
pub use error::MigrationError;
pub use migration::{MigrationReport, SocialMetaMigration};
pub use notices::{NOTICE_TITLE, compose_notice_content};
pub use sanitize::{DefaultSanitizer, Sanitizer};
pub use site::{FrontPage, SiteConfig};
pub use urls::{MarketingUrls, UrlBuilder};

use seoport_store::{LegacyOptions, LegacySection};

/// Shared inputs handed to every migrator.
pub(crate) struct Context<'a> {
    pub legacy: &'a LegacyOptions,
    pub og: LegacySection<'a>,
    pub site: &'a SiteConfig,
    pub sanitizer: &'a dyn Sanitizer,
    pub urls: &'a dyn UrlBuilder,
}

impl Context<'_> {
    /// Translate legacy macros to smart tags, then sanitize.
    pub fn clean(&self, value: &str) -> String {
        self.sanitizer
            .sanitize_option(&smart_tags::macros_to_smart_tags(value))
    }
}
