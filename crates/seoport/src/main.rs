//! seoport: settings migrations for SEO plugin data
//!
//! Main binary with subcommands:
//! - `migrate`: list, preview or apply named migrations against a snapshot
//! - `show`: print the structured options held by a snapshot

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use miette::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use seoport_social::{FrontPage, MarketingUrls, SiteConfig};

mod migrate;

/// Parse boolean from environment variable, accepting common truthy values.
/// Accepts "1", "true", "yes", "on" (case-insensitive) as true.
/// Accepts "0", "false", "no", "off", "" (case-insensitive) as false.
fn parse_bool_env(s: &str) -> Result<bool, String> {
    match s.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(format!(
            "invalid boolean value '{}', expected 1/true/yes/on or 0/false/no/off",
            s
        )),
    }
}

#[derive(Parser)]
#[command(name = "seoport")]
#[command(about = "Migrate legacy SEO plugin settings", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run settings migrations
    Migrate {
        /// Snapshot file to migrate
        #[arg(long, env = "SEOPORT_SNAPSHOT")]
        snapshot: PathBuf,

        /// What the front page shows: "posts" or "page"
        #[arg(long, env = "SEOPORT_SHOW_ON_FRONT", default_value = "posts")]
        show_on_front: String,

        /// Static front page id (0 when unassigned)
        #[arg(long, env = "SEOPORT_PAGE_ON_FRONT", default_value = "0")]
        page_on_front: u64,

        /// Public post types, comma separated
        #[arg(
            long,
            env = "SEOPORT_POST_TYPES",
            value_delimiter = ',',
            default_value = "post,page,attachment"
        )]
        post_types: Vec<String>,

        /// Base URL for tracked documentation links
        #[arg(long, env = "SEOPORT_MARKETING_URL", default_value = "https://aioseo.com/")]
        marketing_url: String,

        /// Migration name to run
        #[arg(value_name = "MIGRATION")]
        migration: Option<String>,

        /// List available migrations
        #[arg(long)]
        list: bool,

        /// Preview changes without applying (dry-run).
        /// Accepts "1", "true", "yes", or "on" from the environment.
        #[arg(
            long,
            env = "SEOPORT_DRY_RUN",
            value_parser = parse_bool_env,
            default_value = "false",
            num_args = 0..=1,
            require_equals = true,
            default_missing_value = "true"
        )]
        dry_run: bool,

        /// Run all pending migrations
        #[arg(long)]
        all: bool,
    },

    /// Print the structured options of a snapshot
    Show {
        /// Snapshot file to read
        #[arg(long, env = "SEOPORT_SNAPSHOT")]
        snapshot: PathBuf,

        /// Dotted option path, e.g. social.twitter.homePage.title
        #[arg(value_name = "PATH")]
        path: Option<String>,
    },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "seoport=info".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Migrate {
            snapshot,
            show_on_front,
            page_on_front,
            post_types,
            marketing_url,
            migration,
            list,
            dry_run,
            all,
        } => {
            let site = SiteConfig::new(
                FrontPage::from_settings(&show_on_front, page_on_front),
                post_types
                    .into_iter()
                    .map(|t| t.trim().to_string())
                    .filter(|t| !t.is_empty())
                    .collect(),
            )
            .map_err(|e| miette::miette!("{}", e))?;
            let config = migrate::MigrationConfig {
                site,
                urls: MarketingUrls::new(&marketing_url, "liteplugin"),
            };
            migrate::run_migrate_command(
                &snapshot,
                &config,
                migration.as_deref(),
                list,
                dry_run,
                all,
            )
        }

        Commands::Show { snapshot, path } => show(&snapshot, path.as_deref()),
    }
}

fn show(snapshot: &std::path::Path, path: Option<&str>) -> Result<()> {
    let store = seoport_store::snapshot::load(snapshot).map_err(|e| miette::miette!("{}", e))?;
    let value = match path {
        Some(path) => store
            .options
            .get_path(path)
            .ok_or_else(|| miette::miette!("No option at path: {}", path))?,
        None => serde_json::to_value(&store.options).map_err(|e| miette::miette!("{}", e))?,
    };
    let rendered = serde_json::to_string_pretty(&value).map_err(|e| miette::miette!("{}", e))?;
    println!("{}", rendered);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_bool_env() {
        assert_eq!(parse_bool_env("on"), Ok(true));
        assert_eq!(parse_bool_env(" 1 "), Ok(true));
        assert_eq!(parse_bool_env(""), Ok(false));
        assert_eq!(parse_bool_env("OFF"), Ok(false));
        assert!(parse_bool_env("maybe").is_err());
    }

    #[test]
    fn test_cli_parses_migrate() {
        let cli = Cli::try_parse_from([
            "seoport",
            "migrate",
            "--snapshot",
            "site.json",
            "--post-types",
            "post,product",
            "--dry-run",
            "social-meta",
        ])
        .unwrap();
        match cli.command {
            Commands::Migrate {
                post_types,
                dry_run,
                migration,
                list,
                ..
            } => {
                assert_eq!(post_types, vec!["post".to_string(), "product".to_string()]);
                assert!(dry_run);
                assert!(!list);
                assert_eq!(migration.as_deref(), Some("social-meta"));
            }
            Commands::Show { .. } => panic!("expected migrate"),
        }
    }

    proptest! {
        #[test]
        fn parse_bool_env_ignores_case(
            word in prop_oneof![Just("true"), Just("yes"), Just("on"), Just("false"), Just("no"), Just("off")],
            upper in proptest::collection::vec(any::<bool>(), 5),
        ) {
            let mixed: String = word
                .chars()
                .zip(upper.iter().cycle())
                .map(|(c, up)| if *up { c.to_ascii_uppercase() } else { c })
                .collect();
            prop_assert_eq!(parse_bool_env(&mixed), parse_bool_env(word));
        }
    }
}
