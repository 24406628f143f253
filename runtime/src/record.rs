//! Wire records for hand-decoded actions.
//!
//! Derived adjacently tagged enums reject a payload on unit variants and
//! accept exactly one payload shape per tag. Action types that must be more
//! lenient decode an [`ActionRecord`] first and pick the variant themselves:
//!
//! ```ignore
//! impl<'de> Deserialize<'de> for TodoAction {
//!     fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
//!         let record = ActionRecord::deserialize(deserializer)?;
//!         match record.tag() {
//!             "readInput" => record.payload().map(Self::ReadInput),
//!             "clearInput" => Ok(Self::ClearInput),
//!             _ => Err(record.unknown(Self::ACTION_TYPES)),
//!         }
//!     }
//! }
//! ```

use serde::Deserialize;
use serde::de::{DeserializeOwned, Error};
use serde_json::Value;

/// A `{type, payload}` record split into its tag and raw payload
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ActionRecord {
    #[serde(rename = "type")]
    tag: String,
    #[serde(default)]
    payload: Option<Value>,
}

impl ActionRecord {
    /// The action tag
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Decode the payload as `T`
    ///
    /// A missing payload decodes like JSON `null`.
    ///
    /// # Errors
    ///
    /// Returns `E` when the payload does not fit `T`.
    pub fn payload<T, E>(&self) -> Result<T, E>
    where
        T: DeserializeOwned,
        E: Error,
    {
        serde_json::from_value(self.payload.clone().unwrap_or_default())
            .map_err(|error| E::custom(format_args!("invalid payload for {}: {error}", self.tag)))
    }

    /// Error for a tag outside `expected`
    #[must_use]
    pub fn unknown<E: Error>(&self, expected: &'static [&'static str]) -> E {
        E::unknown_variant(&self.tag, expected)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn record(json: &str) -> ActionRecord {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_payload_is_optional() {
        let payload = |json| {
            record(json)
                .payload::<Option<String>, serde_json::Error>()
                .unwrap()
        };

        assert_eq!(record(r#"{"type":"clearInput"}"#).tag(), "clearInput");
        assert_eq!(payload(r#"{"type":"clearInput"}"#), None);
        assert_eq!(payload(r#"{"type":"clearInput","payload":null}"#), None);
        assert_eq!(payload(r#"{"type":"clearInput","payload":""}"#), Some(String::new()));
    }

    #[test]
    fn test_payload_decodes_into_target_type() {
        let toggle = record(r#"{"type":"toggleItem","payload":3}"#);
        let index: usize = toggle.payload::<_, serde_json::Error>().unwrap();
        assert_eq!(index, 3);

        let error = toggle.payload::<String, serde_json::Error>().unwrap_err();
        assert!(error.to_string().contains("invalid payload for toggleItem"));
    }

    #[test]
    fn test_missing_payload_fails_required_types() {
        let bare = record(r#"{"type":"readInput"}"#);
        assert!(bare.payload::<String, serde_json::Error>().is_err());
    }

    #[test]
    fn test_unknown_names_the_tag() {
        let error: serde_json::Error =
            record(r#"{"type":"removeItem","payload":1}"#).unknown(&["addItem", "toggleItem"]);
        let message = error.to_string();
        assert!(message.contains("removeItem"));
        assert!(message.contains("addItem"));
    }

    #[test]
    fn test_record_without_type_is_rejected() {
        assert!(serde_json::from_str::<ActionRecord>(r#"{"payload":1}"#).is_err());
    }
}
