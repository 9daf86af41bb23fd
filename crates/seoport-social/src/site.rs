//! Site settings the migration depends on.

use crate::error::MigrationError;

/// What the site shows on its front page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontPage {
    /// The latest posts feed.
    LatestPosts,
    /// A static page.
    StaticPage(u64),
    /// No usable static page: `page` mode without an id, or an unknown mode.
    Unassigned,
}

impl FrontPage {
    /// Build from the raw `show_on_front` / `page_on_front` pair.
    ///
    /// Only `page` with a non-zero id selects a static page. Any other mode,
    /// or a leftover id outside `page` mode, is [`FrontPage::Unassigned`].
    pub fn from_settings(show_on_front: &str, page_on_front: u64) -> Self {
        match (show_on_front, page_on_front) {
            ("posts", _) => FrontPage::LatestPosts,
            ("page", id) if id != 0 => FrontPage::StaticPage(id),
            _ => FrontPage::Unassigned,
        }
    }
}

/// Site level inputs: front page mode and the public content types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub front_page: FrontPage,
    pub public_post_types: Vec<String>,
}

impl SiteConfig {
    pub fn new(
        front_page: FrontPage,
        public_post_types: Vec<String>,
    ) -> Result<Self, MigrationError> {
        for post_type in &public_post_types {
            if post_type.is_empty() || post_type.chars().any(char::is_whitespace) {
                return Err(MigrationError::Config(format!(
                    "invalid post type name: {post_type:?}"
                )));
            }
        }
        Ok(Self {
            front_page,
            public_post_types,
        })
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            front_page: FrontPage::LatestPosts,
            public_post_types: vec![
                "post".to_string(),
                "page".to_string(),
                "attachment".to_string(),
            ],
        }
    }
}
