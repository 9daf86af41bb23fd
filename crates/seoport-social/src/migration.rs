//! Entry point for the social meta migration.

use tracing::{debug, info};

use seoport_store::{LegacyOptionsSource, SiteStore};

use crate::changes::ChangeLog;
use crate::error::MigrationError;
use crate::homepage::{self, HomePageField};
use crate::mapping::{OPEN_GRAPH_SETTINGS, map_old_to_new};
use crate::sanitize::Sanitizer;
use crate::site::SiteConfig;
use crate::urls::UrlBuilder;
use crate::{Context, advanced, images, notices, object_types, profiles, twitter};

/// Outcome of one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MigrationReport {
    pub changes: ChangeLog,
    /// The legacy Open Graph block was missing or empty.
    pub skipped: bool,
    pub options_saved: bool,
    pub posts_saved: usize,
    pub user_meta_written: usize,
    pub notice_created: bool,
}

/// Moves legacy Open Graph settings into the social options schema.
pub struct SocialMetaMigration<'a> {
    site: &'a SiteConfig,
    sanitizer: &'a dyn Sanitizer,
    urls: &'a dyn UrlBuilder,
}

impl<'a> SocialMetaMigration<'a> {
    pub fn new(site: &'a SiteConfig, sanitizer: &'a dyn Sanitizer, urls: &'a dyn UrlBuilder) -> Self {
        Self {
            site,
            sanitizer,
            urls,
        }
    }

    /// Whether the legacy Open Graph block exists and holds anything.
    pub fn needs_migration<S: LegacyOptionsSource + ?Sized>(
        &self,
        store: &S,
    ) -> Result<bool, MigrationError> {
        Ok(store.legacy_options()?.open_graph().is_some())
    }

    /// Run every migrator against `store`.
    ///
    /// Options are saved once, and only if something changed. The notice is
    /// handled last.
    #[tracing::instrument(skip_all)]
    pub fn run<S: SiteStore + ?Sized>(&self, store: &mut S) -> Result<MigrationReport, MigrationError> {
        let legacy = store.legacy_options()?;
        let Some(og) = legacy.open_graph() else {
            debug!("no legacy Open Graph settings, nothing to migrate");
            return Ok(MigrationReport {
                skipped: true,
                ..MigrationReport::default()
            });
        };

        let ctx = Context {
            legacy: &legacy,
            og,
            site: self.site,
            sanitizer: self.sanitizer,
            urls: self.urls,
        };
        let original = store.load_options()?;
        let mut options = original.clone();
        let mut report = MigrationReport::default();
        let changes = &mut report.changes;

        for field in [HomePageField::Title, HomePageField::Description] {
            if homepage::migrate(&ctx, field, &mut options, &mut *store, changes)? {
                report.posts_saved += 1;
            }
        }
        twitter::migrate_username(&ctx, &mut options, changes);
        twitter::migrate_card_type(&ctx, &mut options, changes);
        images::migrate(&ctx, &mut options, changes);
        object_types::migrate(&ctx, &mut options, changes);
        advanced::migrate(&ctx, &mut options, changes);
        report.user_meta_written = profiles::migrate(&ctx, &mut *store, changes)?;
        map_old_to_new(OPEN_GRAPH_SETTINGS, og, self.sanitizer, &mut options, changes);

        if options != original {
            store.save_options(&options)?;
            report.options_saved = true;
        }

        report.notice_created = notices::maybe_add(&ctx, store)?;

        info!(
            changes = report.changes.len(),
            options_saved = report.options_saved,
            posts_saved = report.posts_saved,
            user_meta_written = report.user_meta_written,
            notice_created = report.notice_created,
            "social meta migration finished"
        );
        Ok(report)
    }
}
