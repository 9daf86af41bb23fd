//! Migration framework for seoport settings transformations.
//!
//! This module provides a small migration framework that supports:
//! - `--dry-run` mode to preview changes without applying them
//! - Multiple named migrations that can be run independently
//! - `--all` to run every migration that still has work to do
//!
//! Migrations run against a [`MemoryStore`] loaded from a snapshot file. A
//! dry run works on a clone, so nothing is written until a real run saves the
//! snapshot back.

use std::path::Path;

use miette::Result;
use tracing::info;

use seoport_social::{
    DefaultSanitizer, MarketingUrls, MigrationReport, SiteConfig, SocialMetaMigration,
};
use seoport_store::{MemoryStore, snapshot};

// =============================================================================
// Migration Framework Types
// =============================================================================

/// Site settings shared by every migration.
pub struct MigrationConfig {
    pub site: SiteConfig,
    pub urls: MarketingUrls,
}

/// Preview of what a migration would change.
pub struct MigrationPreview {
    /// Number of records that would be written.
    pub records_to_update: usize,
    /// Human-readable descriptions of changes.
    pub changes: Vec<String>,
}

/// Result of applying a migration.
pub struct MigrationResult {
    /// Number of records that were written.
    pub records_updated: usize,
    /// Number of individual values that changed.
    pub values_changed: usize,
}

/// A migration that can be applied to a site store.
pub trait Migration {
    /// Unique name for this migration.
    fn name(&self) -> &'static str;

    /// Human-readable description.
    fn description(&self) -> &'static str;

    /// Check if this migration still has work to do.
    fn needs_migration(&self, store: &MemoryStore) -> Result<bool>;

    /// Preview what would change (dry-run).
    fn preview(&self, store: &MemoryStore) -> Result<MigrationPreview>;

    /// Apply the migration.
    fn apply(&self, store: &mut MemoryStore) -> Result<MigrationResult>;
}

// =============================================================================
// Migration: Legacy Open Graph settings to social options
// =============================================================================

/// Migration: Move legacy Open Graph module settings into the social options.
struct SocialMeta<'a> {
    config: &'a MigrationConfig,
}

impl SocialMeta<'_> {
    fn run(&self, store: &mut MemoryStore) -> Result<MigrationReport> {
        SocialMetaMigration::new(&self.config.site, &DefaultSanitizer, &self.config.urls)
            .run(store)
            .map_err(|e| miette::miette!("{}", e))
    }
}

/// Records written by one run: the option tree counts once.
fn records_written(report: &MigrationReport) -> usize {
    usize::from(report.options_saved)
        + report.posts_saved
        + report.user_meta_written
        + usize::from(report.notice_created)
}

impl Migration for SocialMeta<'_> {
    fn name(&self) -> &'static str {
        "social-meta"
    }

    fn description(&self) -> &'static str {
        "Move legacy Open Graph settings into the Facebook and Twitter social options"
    }

    fn needs_migration(&self, store: &MemoryStore) -> Result<bool> {
        let migration =
            SocialMetaMigration::new(&self.config.site, &DefaultSanitizer, &self.config.urls);
        if !migration
            .needs_migration(store)
            .map_err(|e| miette::miette!("{}", e))?
        {
            return Ok(false);
        }
        Ok(self.preview(store)?.records_to_update > 0)
    }

    fn preview(&self, store: &MemoryStore) -> Result<MigrationPreview> {
        let mut scratch = store.clone();
        let report = self.run(&mut scratch)?;
        let mut changes: Vec<String> = report
            .changes
            .entries()
            .iter()
            .map(ToString::to_string)
            .collect();
        if report.notice_created {
            changes.push("notification: add deprecated Open Graph settings notice".to_string());
        }
        Ok(MigrationPreview {
            records_to_update: records_written(&report),
            changes,
        })
    }

    fn apply(&self, store: &mut MemoryStore) -> Result<MigrationResult> {
        let report = self.run(store)?;
        Ok(MigrationResult {
            records_updated: records_written(&report),
            values_changed: report.changes.len(),
        })
    }
}

/// Get all available migrations.
pub fn available_migrations(config: &MigrationConfig) -> Vec<Box<dyn Migration + '_>> {
    vec![Box::new(SocialMeta { config })]
}

// =============================================================================
// Command Handler
// =============================================================================

/// Run the migrate command with the given options.
pub fn run_migrate_command(
    snapshot_path: &Path,
    config: &MigrationConfig,
    migration_name: Option<&str>,
    list: bool,
    dry_run: bool,
    all: bool,
) -> Result<()> {
    let mut store = snapshot::load(snapshot_path).map_err(|e| miette::miette!("{}", e))?;
    let migrations = available_migrations(config);

    if list {
        println!("Available migrations:\n");
        for m in &migrations {
            let needs = m.needs_migration(&store).unwrap_or(false);
            let status = if needs { "[PENDING]" } else { "[APPLIED]" };
            println!("  {} {}", status, m.name());
            println!("      {}\n", m.description());
        }
        return Ok(());
    }

    let to_run: Vec<_> = if all {
        // Run all pending migrations
        let mut pending = Vec::new();
        for m in migrations {
            if m.needs_migration(&store)? {
                pending.push(m);
            }
        }
        pending
    } else if let Some(name) = migration_name {
        // Run specific migration
        let m = migrations
            .into_iter()
            .find(|m| m.name() == name)
            .ok_or_else(|| miette::miette!("Unknown migration: {}", name))?;
        vec![m]
    } else {
        return Err(miette::miette!(
            "Specify a migration name, --all, or --list"
        ));
    };

    if to_run.is_empty() {
        println!("No pending migrations to run.");
        return Ok(());
    }

    let mut updated = 0;
    for m in to_run {
        println!("\n=== {} ===", m.name());
        println!("{}\n", m.description());

        if dry_run {
            let preview = m.preview(&store)?;
            println!(
                "Dry-run: {} record(s) would be updated",
                preview.records_to_update
            );
            if !preview.changes.is_empty() {
                println!("\nChanges:");
                for change in &preview.changes {
                    println!("  - {}", change);
                }
            }
        } else {
            let result = m.apply(&mut store)?;
            println!(
                "Applied: {} record(s) updated, {} value(s) changed",
                result.records_updated, result.values_changed
            );
            updated += result.records_updated;
        }
    }

    if updated > 0 {
        snapshot::save(&store, snapshot_path).map_err(|e| miette::miette!("{}", e))?;
        info!(path = %snapshot_path.display(), records = updated, "snapshot updated");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use seoport_social::FrontPage;
    use seoport_store::{LegacyOptions, SocialOptions};
    use serde_json::json;

    fn config() -> MigrationConfig {
        MigrationConfig {
            site: SiteConfig::new(FrontPage::LatestPosts, vec!["post".to_string()]).unwrap(),
            urls: MarketingUrls::default(),
        }
    }

    fn legacy_store() -> MemoryStore {
        let legacy = LegacyOptions::from_value(json!({
            "modules": {"aiosp_opengraph_options": {
                "aiosp_opengraph_hometitle": "Custom Title",
                "aiosp_opengraph_title_shortcodes": "on",
            }},
        }))
        .unwrap();
        MemoryStore::new(legacy, SocialOptions::default())
    }

    #[test]
    fn test_preview_leaves_store_untouched() {
        let config = config();
        let migration = SocialMeta { config: &config };
        let store = legacy_store();

        let preview = migration.preview(&store).unwrap();

        assert_eq!(preview.records_to_update, 2);
        assert!(preview.changes.contains(
            &"social.facebook.homePage.title: \"\" -> \"Custom Title\"".to_string()
        ));
        assert_eq!(store.writes().total(), 0);
        assert_eq!(store.options.social.facebook.home_page.title, "");
    }

    #[test]
    fn test_needs_migration_clears_after_apply() {
        let config = config();
        let migration = SocialMeta { config: &config };
        let mut store = legacy_store();

        assert!(migration.needs_migration(&store).unwrap());
        let result = migration.apply(&mut store).unwrap();
        assert_eq!(result.records_updated, 2);
        assert!(!migration.needs_migration(&store).unwrap());
        assert!(!migration.needs_migration(&MemoryStore::default()).unwrap());
    }

    #[test]
    fn test_command_dry_run_then_apply() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.json");
        snapshot::save(&legacy_store(), &path).unwrap();
        let config = config();

        run_migrate_command(&path, &config, Some("social-meta"), false, true, false).unwrap();
        let after_dry_run = snapshot::load(&path).unwrap();
        assert_eq!(after_dry_run.options, SocialOptions::default());

        run_migrate_command(&path, &config, None, false, false, true).unwrap();
        let applied = snapshot::load(&path).unwrap();
        assert_eq!(applied.options.social.twitter.home_page.title, "Custom Title");
        assert_eq!(applied.notifications.len(), 1);
    }

    #[test]
    fn test_command_rejects_unknown_migration() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.json");
        snapshot::save(&legacy_store(), &path).unwrap();

        assert!(run_migrate_command(&path, &config(), Some("nope"), false, false, false).is_err());
        assert!(run_migrate_command(&path, &config(), None, false, false, false).is_err());
    }
}
