//! Read-only view over the legacy option array.
//!
//! Legacy values were loosely typed: a flag may be stored as `true`, `"on"`,
//! `1` or `"1"`, and an unset flag as `false`, `""`, `0`, `"0"` or not at all.
//! Every read goes through [`is_present`] so the distinction between "false"
//! and "absent" is decided in one place.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::StoreError;
use crate::keys::{MODULES, OPENGRAPH_MODULE};

/// Whether a legacy value is present and non-empty.
///
/// `null`, `false`, `0`, `""`, `"0"` and empty arrays/objects count as absent.
pub fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => is_present_str(s),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// [`is_present`] for a raw string, such as a post meta value.
pub fn is_present_str(value: &str) -> bool {
    !value.is_empty() && value != "0"
}

/// Render a scalar legacy value as text.
///
/// Booleans follow the old string cast (`true` is `"1"`, `false` is empty).
/// Arrays and objects have no text form and render as empty.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(true) => "1".to_string(),
        Value::Bool(false) | Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}

/// A borrowed map of legacy keys to loosely typed values.
#[derive(Debug, Clone, Copy)]
pub struct LegacySection<'a> {
    map: &'a Map<String, Value>,
}

impl<'a> LegacySection<'a> {
    /// Wrap a JSON object.
    pub fn new(map: &'a Map<String, Value>) -> Self {
        Self { map }
    }

    /// Raw value for a key.
    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.map.get(key)
    }

    /// Whether the key exists at all, regardless of its value.
    pub fn contains(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    /// Truthy cast of a flag.
    pub fn flag(&self, key: &str) -> bool {
        self.get(key).is_some_and(is_present)
    }

    /// Text of a value that is present and non-empty.
    pub fn text(&self, key: &str) -> Option<String> {
        self.get(key)
            .filter(|value| is_present(value))
            .map(value_text)
    }

    /// Text of a value, empty when the key is missing.
    pub fn raw_text(&self, key: &str) -> String {
        self.get(key).map(value_text).unwrap_or_default()
    }

    /// Nested section, if the key holds a non-empty object.
    pub fn section(&self, key: &str) -> Option<LegacySection<'a>> {
        match self.get(key) {
            Some(Value::Object(map)) if !map.is_empty() => Some(LegacySection::new(map)),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// The complete legacy option array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LegacyOptions(Map<String, Value>);

impl LegacyOptions {
    /// Build from a JSON value, which must be an object.
    pub fn from_value(value: Value) -> Result<Self, StoreError> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            Value::Null => Ok(Self::default()),
            other => Err(StoreError::InvalidLegacy(format!(
                "expected an object, got {}",
                type_name(&other)
            ))),
        }
    }

    /// Top-level options.
    pub fn root(&self) -> LegacySection<'_> {
        LegacySection::new(&self.0)
    }

    /// The Open Graph module options, if the block exists and is non-empty.
    pub fn open_graph(&self) -> Option<LegacySection<'_>> {
        self.root().section(MODULES)?.section(OPENGRAPH_MODULE)
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_present_scalars() {
        assert!(!is_present(&json!(null)));
        assert!(!is_present(&json!(false)));
        assert!(!is_present(&json!(0)));
        assert!(!is_present(&json!("")));
        assert!(!is_present(&json!("0")));
        assert!(!is_present(&json!([])));
        assert!(!is_present(&json!({})));

        assert!(is_present(&json!(true)));
        assert!(is_present(&json!(1)));
        assert!(is_present(&json!("on")));
        assert!(is_present(&json!(" ")));
        assert!(is_present(&json!(["a"])));
    }

    #[test]
    fn test_is_present_str() {
        assert!(is_present_str("Title"));
        assert!(is_present_str("00"));
        assert!(is_present_str(" "));
        assert!(!is_present_str(""));
        assert!(!is_present_str("0"));
    }

    #[test]
    fn test_value_text() {
        assert_eq!(value_text(&json!("abc")), "abc");
        assert_eq!(value_text(&json!(1200)), "1200");
        assert_eq!(value_text(&json!(true)), "1");
        assert_eq!(value_text(&json!(false)), "");
        assert_eq!(value_text(&json!({"a": 1})), "");
    }

    #[test]
    fn test_open_graph_requires_non_empty_block() {
        let legacy = LegacyOptions::from_value(json!({"modules": {}})).unwrap();
        assert!(legacy.open_graph().is_none());

        let legacy =
            LegacyOptions::from_value(json!({"modules": {"aiosp_opengraph_options": {}}})).unwrap();
        assert!(legacy.open_graph().is_none());

        let legacy = LegacyOptions::from_value(json!({
            "modules": {"aiosp_opengraph_options": {"aiosp_opengraph_setmeta": "on"}}
        }))
        .unwrap();
        let og = legacy.open_graph().unwrap();
        assert!(og.flag("aiosp_opengraph_setmeta"));
    }

    #[test]
    fn test_text_skips_empty() {
        let legacy = LegacyOptions::from_value(json!({
            "aiosp_home_title": "",
            "aiosp_home_description": "Welcome",
        }))
        .unwrap();
        let root = legacy.root();
        assert_eq!(root.text("aiosp_home_title"), None);
        assert!(root.contains("aiosp_home_title"));
        assert_eq!(root.text("aiosp_home_description").as_deref(), Some("Welcome"));
        assert_eq!(root.raw_text("missing"), "");
    }

    #[test]
    fn test_from_value_rejects_scalars() {
        let err = LegacyOptions::from_value(json!("nope")).unwrap_err();
        assert!(matches!(err, StoreError::InvalidLegacy(_)));
        assert!(LegacyOptions::from_value(json!(null)).unwrap().root().is_empty());
    }
}
