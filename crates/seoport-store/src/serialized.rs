//! Decoder for PHP `serialize()` output stored in legacy post meta.
//!
//! Covers the value forms legacy settings use: arrays, strings, integers,
//! floats, booleans and null. Arrays decode to JSON objects keyed by the
//! stringified array key, so list and map arrays read the same way through
//! [`LegacySection`](crate::LegacySection). Objects (`O:`) and references are
//! rejected.

use serde_json::{Map, Number, Value};

use crate::error::StoreError;

/// Decode one serialized value. Surrounding whitespace is ignored, anything
/// else after the value is an error.
///
/// ```
/// use seoport_store::serialized::unserialize;
///
/// let value = unserialize(r#"a:1:{s:5:"title";s:7:"Page OG";}"#).unwrap();
/// assert_eq!(value["title"], "Page OG");
/// ```
pub fn unserialize(raw: &str) -> Result<Value, StoreError> {
    let mut reader = Reader {
        input: raw.trim().as_bytes(),
        pos: 0,
    };
    let value = reader.value()?;
    if reader.pos != reader.input.len() {
        return Err(reader.error("trailing data after value"));
    }
    Ok(value)
}

struct Reader<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn value(&mut self) -> Result<Value, StoreError> {
        let tag = self.byte()?;
        if tag == b'N' {
            self.expect(b';')?;
            return Ok(Value::Null);
        }
        self.expect(b':')?;

        match tag {
            b'b' => match self.until(b';')? {
                "0" => Ok(Value::Bool(false)),
                "1" => Ok(Value::Bool(true)),
                other => Err(self.error(&format!("invalid boolean {other:?}"))),
            },
            b'i' => {
                let text = self.until(b';')?;
                text.parse::<i64>()
                    .map(Value::from)
                    .map_err(|_| self.error(&format!("invalid integer {text:?}")))
            }
            b'd' => {
                let text = self.until(b';')?;
                let number = text
                    .parse::<f64>()
                    .map_err(|_| self.error(&format!("invalid float {text:?}")))?;
                // INF and NAN have no JSON form
                Ok(Number::from_f64(number).map_or(Value::Null, Value::Number))
            }
            b's' => {
                let len = self.length()?;
                self.expect(b'"')?;
                let bytes = self.take(len)?;
                self.expect(b'"')?;
                self.expect(b';')?;
                Ok(Value::String(String::from_utf8_lossy(bytes).into_owned()))
            }
            b'a' => {
                let count = self.length()?;
                self.expect(b'{')?;
                let mut map = Map::new();
                for _ in 0..count {
                    let key = match self.value()? {
                        Value::String(s) => s,
                        Value::Number(n) => n.to_string(),
                        _ => return Err(self.error("array keys must be strings or integers")),
                    };
                    let item = self.value()?;
                    map.insert(key, item);
                }
                self.expect(b'}')?;
                Ok(Value::Object(map))
            }
            other => Err(self.error(&format!("unsupported type '{}'", other as char))),
        }
    }

    /// A `<digits>:` length prefix.
    fn length(&mut self) -> Result<usize, StoreError> {
        let text = self.until(b':')?;
        text.parse::<usize>()
            .map_err(|_| self.error(&format!("invalid length {text:?}")))
    }

    fn byte(&mut self) -> Result<u8, StoreError> {
        let byte = *self
            .input
            .get(self.pos)
            .ok_or_else(|| self.error("unexpected end of input"))?;
        self.pos += 1;
        Ok(byte)
    }

    fn expect(&mut self, expected: u8) -> Result<(), StoreError> {
        let at = self.pos;
        let found = self.byte()?;
        if found != expected {
            self.pos = at;
            return Err(self.error(&format!("expected '{}'", expected as char)));
        }
        Ok(())
    }

    /// Text up to `end`, consuming the terminator.
    fn until(&mut self, end: u8) -> Result<&'a str, StoreError> {
        let input = self.input;
        let rest = &input[self.pos..];
        let offset = rest
            .iter()
            .position(|b| *b == end)
            .ok_or_else(|| self.error(&format!("missing '{}'", end as char)))?;
        let text = std::str::from_utf8(&rest[..offset])
            .map_err(|_| self.error("non-UTF-8 scalar"))?;
        self.pos += offset + 1;
        Ok(text)
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8], StoreError> {
        let input = self.input;
        let bytes = self
            .pos
            .checked_add(len)
            .and_then(|end| input.get(self.pos..end))
            .ok_or_else(|| self.error("string runs past end of input"))?;
        self.pos += len;
        Ok(bytes)
    }

    fn error(&self, message: &str) -> StoreError {
        StoreError::InvalidSerialized {
            offset: self.pos,
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_og_settings_array() {
        let raw = r#"a:2:{s:32:"aioseop_opengraph_settings_title";s:7:"Page OG";s:31:"aioseop_opengraph_settings_desc";s:0:"";}"#;
        assert_eq!(
            unserialize(raw).unwrap(),
            json!({
                "aioseop_opengraph_settings_title": "Page OG",
                "aioseop_opengraph_settings_desc": "",
            })
        );
    }

    #[test]
    fn test_scalars_and_nesting() {
        let raw = r#"a:6:{i:0;b:1;i:1;i:-7;i:2;d:0.5;i:3;N;s:4:"list";a:1:{i:0;s:1:"x";}s:5:"empty";a:0:{}}"#;
        assert_eq!(
            unserialize(raw).unwrap(),
            json!({
                "0": true,
                "1": -7,
                "2": 0.5,
                "3": null,
                "list": {"0": "x"},
                "empty": {},
            })
        );
        assert_eq!(unserialize("b:0;").unwrap(), json!(false));
        assert_eq!(unserialize(" N; ").unwrap(), Value::Null);
    }

    #[test]
    fn test_string_length_counts_bytes() {
        assert_eq!(unserialize(r#"s:6:"Café!";"#).unwrap(), json!("Café!"));
        // quotes inside the payload are covered by the length prefix
        assert_eq!(unserialize(r#"s:4:"a";b";"#).unwrap(), json!("a\";b"));
    }

    #[test]
    fn test_rejects_malformed_input() {
        for raw in [
            "",
            "s:3:\"ab\";",
            "s:1:\"ab\";",
            "a:2:{i:0;i:1;}",
            "i:12",
            "i:x;",
            "b:2;",
            "O:8:\"stdClass\":0:{}",
            "a:1:{a:0:{}i:1;}",
            "i:1;i:2;",
            "{\"json\": true}",
        ] {
            assert!(
                matches!(unserialize(raw), Err(StoreError::InvalidSerialized { .. })),
                "accepted {raw:?}"
            );
        }
    }
}
