//! Payload types shared by both button families.

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// Marker for Bot API fields that only ever carry `true`.
///
/// Serializes as JSON `true` and refuses to deserialize anything else, so a
/// `{"pay": false}` record is rejected instead of silently becoming a pay button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct True;

impl Serialize for True {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bool(true)
    }
}

impl<'de> Deserialize<'de> for True {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if bool::deserialize(deserializer)? {
            Ok(True)
        } else {
            Err(D::Error::custom("expected `true`"))
        }
    }
}

/// Web App launched by a button.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WebAppInfo {
    /// HTTPS URL of the Web App
    pub url: String,
}

impl WebAppInfo {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// Placeholder payload of a game button. Always serialized as `{}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CallbackGame {}

/// Splits a raw button object into its label and at most one action entry.
pub(crate) fn split_button(
    mut fields: Map<String, Value>,
) -> Result<(String, Option<(String, Value)>), String> {
    let text = match fields.remove("text") {
        Some(Value::String(text)) => text,
        Some(_) => return Err("`text` must be a string".to_string()),
        None => return Err("missing field `text`".to_string()),
    };

    if fields.len() > 1 {
        let keys: Vec<&str> = fields.keys().map(String::as_str).collect();
        return Err(format!("button has more than one action: {}", keys.join(", ")));
    }

    Ok((text, fields.into_iter().next()))
}

/// Decodes a single `key: payload` entry as an externally tagged action enum.
pub(crate) fn decode_action<T: DeserializeOwned>(
    (key, value): (String, Value),
) -> Result<T, String> {
    let mut entry = Map::new();
    entry.insert(key, value);
    serde_json::from_value(Value::Object(entry)).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_true_roundtrips_only_true() {
        assert_eq!(serde_json::to_value(True).unwrap(), json!(true));
        assert_eq!(serde_json::from_value::<True>(json!(true)).unwrap(), True);
        assert!(serde_json::from_value::<True>(json!(false)).is_err());
    }

    #[test]
    fn test_split_button_rejects_two_actions() {
        let fields = json!({ "text": "x", "url": "https://a", "pay": true });
        let Value::Object(fields) = fields else { unreachable!() };

        let err = split_button(fields).unwrap_err();
        assert!(err.contains("more than one action"), "{}", err);
    }

    #[test]
    fn test_split_button_requires_string_text() {
        let Value::Object(missing) = json!({ "pay": true }) else { unreachable!() };
        let Value::Object(number) = json!({ "text": 1 }) else { unreachable!() };

        assert!(split_button(missing).is_err());
        assert!(split_button(number).is_err());
    }

    #[test]
    fn test_callback_game_is_empty_object() {
        assert_eq!(serde_json::to_value(CallbackGame {}).unwrap(), json!({}));
    }
}
