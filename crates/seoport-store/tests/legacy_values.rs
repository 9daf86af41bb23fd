//! Property tests for legacy value handling and option snapshots.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use serde_json::{Map, Value, json};

use seoport_store::{
    LegacyOptions, LegacySection, MemoryStore, PostTypeSettings, SocialOptions, is_present,
    is_present_str, serialized, snapshot, value_text,
};

// Strategy for loosely typed legacy scalars
fn legacy_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(|n| json!(n)),
        ".{0,12}".prop_map(Value::String),
    ]
}

proptest! {
    #[test]
    fn present_values_have_text(value in legacy_scalar()) {
        let mut map = Map::new();
        map.insert("key".to_string(), value.clone());
        let section = LegacySection::new(&map);

        prop_assert_eq!(section.flag("key"), is_present(&value));
        match section.text("key") {
            Some(text) => {
                prop_assert!(!text.is_empty());
                prop_assert_eq!(text, value_text(&value));
            }
            None => prop_assert!(!is_present(&value)),
        }
    }

    #[test]
    fn string_presence_matches_value_presence(
        text in prop_oneof![Just("0".to_string()), ".{0,4}"],
    ) {
        prop_assert_eq!(is_present_str(&text), is_present(&Value::String(text.clone())));
    }

    #[test]
    fn serialized_strings_use_byte_lengths(key in "[a-z_]{1,32}", text in "\\PC{0,24}") {
        let raw = format!(
            "a:1:{{s:{}:\"{}\";s:{}:\"{}\";}}",
            key.len(),
            key,
            text.len(),
            text
        );
        let value = serialized::unserialize(&raw).unwrap();
        prop_assert_eq!(value_text(&value[key.as_str()]), text);
    }

    #[test]
    fn missing_keys_are_absent(key in "[a-z_]{1,20}") {
        let legacy = LegacyOptions::default();
        prop_assert!(!legacy.root().flag(&key));
        prop_assert_eq!(legacy.root().text(&key), None);
        prop_assert_eq!(legacy.root().raw_text(&key), "");
    }

    #[test]
    fn dynamic_post_type_names_validated(name in "[A-Za-z0-9 _-]{0,12}") {
        let mut options = SocialOptions::default();
        options
            .social
            .facebook
            .general
            .dynamic
            .post_types
            .insert(name.clone(), PostTypeSettings::default());

        let valid = !name.is_empty()
            && name
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-');
        prop_assert_eq!(options.validate().is_ok(), valid);
    }
}

#[test]
fn test_snapshot_keeps_options_and_records() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("site.json");

    let mut options = SocialOptions::default();
    options.social.facebook.general.site_name = "Example".to_string();
    options
        .social
        .facebook
        .general
        .dynamic
        .post_types
        .insert("post".to_string(), PostTypeSettings::default());
    let legacy = LegacyOptions::from_value(json!({
        "modules": {"aiosp_opengraph_options": {"aiosp_opengraph_setmeta": "on"}},
    }))
    .unwrap();
    let store = MemoryStore::new(legacy, options.clone()).with_post(3, [("_aioseop_title", "T")]);

    snapshot::save(&store, &path).unwrap();
    let loaded = snapshot::load(&path).unwrap();

    assert_eq!(loaded.options, options);
    assert_eq!(loaded.posts, store.posts);
    assert!(loaded.legacy_options.open_graph().unwrap().flag("aiosp_opengraph_setmeta"));

    let raw: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(
        raw["options"]["social"]["facebook"]["general"]["siteName"],
        json!("Example")
    );
}
