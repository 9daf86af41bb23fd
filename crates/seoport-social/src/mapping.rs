//! Declarative legacy-to-new setting maps.
//!
//! Settings that copy one legacy key into one target field without any
//! branching are listed in a table instead of getting their own migrator.

use seoport_store::keys::{OG_FACEBOOK_AUTHOR, OG_SITE_NAME, OG_TWITTER_CREATOR};
use seoport_store::{LegacySection, SocialOptions};

use crate::changes::ChangeLog;
use crate::sanitize::Sanitizer;

/// A mutable target field in the option tree.
pub enum Slot<'a> {
    /// Boolean target: the legacy value is truthy-cast.
    Flag(&'a mut bool),
    /// Text target: the legacy value is sanitized and copied when non-empty.
    Text(&'a mut String),
}

/// One legacy key and the field it maps onto.
pub struct SettingMap {
    pub legacy_key: &'static str,
    pub path: &'static str,
    pub slot: for<'a> fn(&'a mut SocialOptions) -> Slot<'a>,
}

fn facebook_site_name(options: &mut SocialOptions) -> Slot<'_> {
    Slot::Text(&mut options.social.facebook.general.site_name)
}

fn facebook_show_author(options: &mut SocialOptions) -> Slot<'_> {
    Slot::Flag(&mut options.social.facebook.general.show_author)
}

fn twitter_show_author(options: &mut SocialOptions) -> Slot<'_> {
    Slot::Flag(&mut options.social.twitter.general.show_author)
}

/// Direct Open Graph module mappings.
pub static OPEN_GRAPH_SETTINGS: &[SettingMap] = &[
    SettingMap {
        legacy_key: OG_SITE_NAME,
        path: "social.facebook.general.siteName",
        slot: facebook_site_name,
    },
    SettingMap {
        legacy_key: OG_FACEBOOK_AUTHOR,
        path: "social.facebook.general.showAuthor",
        slot: facebook_show_author,
    },
    SettingMap {
        legacy_key: OG_TWITTER_CREATOR,
        path: "social.twitter.general.showAuthor",
        slot: twitter_show_author,
    },
];

/// Apply a mapping table.
///
/// A flag is written whenever its legacy key exists, so an explicit legacy
/// `false` turns the new setting off. Text is only written when the legacy
/// value is present and non-empty.
pub fn map_old_to_new(
    settings: &[SettingMap],
    section: LegacySection<'_>,
    sanitizer: &dyn Sanitizer,
    options: &mut SocialOptions,
    changes: &mut ChangeLog,
) {
    for setting in settings {
        match (setting.slot)(options) {
            Slot::Flag(field) => {
                if section.contains(setting.legacy_key) {
                    changes.set_flag(setting.path, field, section.flag(setting.legacy_key));
                }
            }
            Slot::Text(field) => {
                if let Some(value) = section.text(setting.legacy_key) {
                    changes.set_text(setting.path, field, sanitizer.sanitize_option(&value));
                }
            }
        }
    }
}
