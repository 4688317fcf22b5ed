//! Common types shared across FutureBox crates.
//!
//! Object identifiers and addresses are validated at the parse boundary
//! so that malformed remote input never travels further than the serde
//! layer.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Vote count reported for a capsule whose `votes_num` field is not a
/// parseable integer. Sorts after every real count.
pub const VOTE_SENTINEL: i64 = -1;

/// Errors from parsing object ids and addresses.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IdError {
    #[error("missing 0x prefix in '{0}'")]
    MissingPrefix(String),
    #[error("invalid hex digit in '{0}'")]
    InvalidHex(String),
    #[error("id too long ({0} hex chars, max 64)")]
    TooLong(usize),
    #[error("empty id")]
    Empty,
}

/// Normalizes a `0x`-prefixed hex id to its full 64-digit lowercase form.
fn normalize_hex_id(s: &str) -> Result<String, IdError> {
    let s = s.trim();
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .ok_or_else(|| IdError::MissingPrefix(s.to_string()))?;
    if digits.is_empty() {
        return Err(IdError::Empty);
    }
    if digits.len() > 64 {
        return Err(IdError::TooLong(digits.len()));
    }
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(IdError::InvalidHex(s.to_string()));
    }
    Ok(format!("0x{:0>64}", digits.to_ascii_lowercase()))
}

macro_rules! hex_id_type {
    ($name:ident, $expecting:literal) => {
        impl $name {
            /// Parse from a compiled-in constant.
            ///
            /// # Panics
            /// Panics if `s` is not a valid id. Intended only for constants
            /// known valid at build time.
            pub fn from_static(s: &'static str) -> Self {
                s.parse().expect("valid compiled-in id")
            }

            /// The normalized `0x`-prefixed 64-hex-digit form.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Abbreviated `0x1234…abcd` form for display in tight spaces.
            pub fn short(&self) -> String {
                format!("{}…{}", &self.0[..6], &self.0[self.0.len() - 4..])
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = IdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(normalize_hex_id(s)?))
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&self.0)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                struct IdVisitor;

                impl<'de> Visitor<'de> for IdVisitor {
                    type Value = $name;

                    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                        formatter.write_str($expecting)
                    }

                    fn visit_str<E: de::Error>(self, v: &str) -> Result<$name, E> {
                        v.parse().map_err(E::custom)
                    }
                }

                deserializer.deserialize_str(IdVisitor)
            }
        }
    };
}

/// A Sui object identifier, normalized to 32 bytes of lowercase hex.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(String);

hex_id_type!(ObjectId, "a 0x-prefixed hex Sui object id");

/// A Sui account address, normalized to 32 bytes of lowercase hex.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SuiAddress(String);

hex_id_type!(SuiAddress, "a 0x-prefixed hex Sui address");

/// A user-submitted capsule content record, as projected out of an
/// on-chain object.
///
/// `image_url` and `text_content` are empty strings when absent, matching
/// the on-chain representation. `votes_num` stays string-encoded; use
/// [`Capsule::votes`] for the numeric value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capsule {
    /// Unique object id, nested as `{"id": {"id": "0x..."}}` on the wire.
    #[serde(with = "uid_field")]
    pub id: ObjectId,
    /// Title.
    pub name: String,
    /// Optional image URL (empty when absent).
    #[serde(default)]
    pub image_url: String,
    /// Optional text body (empty when absent).
    #[serde(default)]
    pub text_content: String,
    /// String-encoded vote count.
    #[serde(deserialize_with = "de_string_or_number")]
    pub votes_num: String,
    /// Address of the submitting account.
    #[serde(default)]
    pub owner_address: String,
}

impl Capsule {
    /// Numeric vote count, or [`VOTE_SENTINEL`] when `votes_num` does not
    /// parse as an integer.
    pub fn votes(&self) -> i64 {
        self.votes_num.trim().parse().unwrap_or(VOTE_SENTINEL)
    }

    /// Whether this capsule carries an image URL.
    pub fn has_image(&self) -> bool {
        !self.image_url.trim().is_empty()
    }

    /// Whether this capsule carries a text body.
    pub fn has_text(&self) -> bool {
        !self.text_content.trim().is_empty()
    }
}

/// Codec for Move's `UID` field shape: `{"id": "0x..."}`.
mod uid_field {
    use super::ObjectId;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize, Deserialize)]
    struct Uid {
        id: ObjectId,
    }

    pub fn serialize<S: Serializer>(id: &ObjectId, serializer: S) -> Result<S::Ok, S::Error> {
        Uid { id: id.clone() }.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<ObjectId, D::Error> {
        Ok(Uid::deserialize(deserializer)?.id)
    }
}

/// Accepts either a JSON string or a JSON integer and yields a string.
///
/// Fullnodes encode u64 fields as strings, but older content snapshots
/// use bare numbers.
fn de_string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    struct StringOrNumber;

    impl<'de> Visitor<'de> for StringOrNumber {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or an integer")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
            Ok(v.to_string())
        }
    }

    deserializer.deserialize_any(StringOrNumber)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_ids_are_zero_padded() {
        let id: ObjectId = "0x2".parse().unwrap();
        assert_eq!(id.as_str().len(), 66);
        assert!(id.as_str().ends_with("02"));
        assert!(id.as_str().starts_with("0x0000"));
    }

    #[test]
    fn uppercase_hex_normalized() {
        let a: ObjectId = "0xABCD".parse().unwrap();
        let b: ObjectId = "0xabcd".parse().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn missing_prefix_rejected() {
        assert!(matches!(
            "abcd".parse::<ObjectId>(),
            Err(IdError::MissingPrefix(_))
        ));
    }

    #[test]
    fn invalid_hex_rejected() {
        assert!(matches!(
            "0xzz".parse::<ObjectId>(),
            Err(IdError::InvalidHex(_))
        ));
    }

    #[test]
    fn overlong_rejected() {
        let s = format!("0x{}", "a".repeat(65));
        assert!(matches!(s.parse::<ObjectId>(), Err(IdError::TooLong(65))));
    }

    #[test]
    fn empty_rejected() {
        assert_eq!("0x".parse::<ObjectId>(), Err(IdError::Empty));
    }

    #[test]
    fn short_display_form() {
        let id: ObjectId = "0xabcd".parse().unwrap();
        let short = id.short();
        assert!(short.starts_with("0x0000"));
        assert!(short.ends_with("abcd"));
    }

    #[test]
    fn serde_roundtrip() {
        let id: ObjectId = "0x1a2b".parse().unwrap();
        let json = serde_json::to_string(&id).unwrap();
        let back: ObjectId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }

    #[test]
    fn capsule_parses_wire_shape() {
        let json = r#"{
            "id": {"id": "0x7"},
            "name": "hello",
            "image_url": "https://img.example/x.png",
            "text_content": "body",
            "votes_num": "42",
            "owner_address": "0xaa"
        }"#;
        let capsule: Capsule = serde_json::from_str(json).unwrap();
        assert_eq!(capsule.name, "hello");
        assert_eq!(capsule.votes(), 42);
        assert!(capsule.has_image());
        assert!(capsule.has_text());
    }

    #[test]
    fn capsule_votes_accepts_bare_number() {
        let json = r#"{"id": {"id": "0x7"}, "name": "n", "votes_num": 7}"#;
        let capsule: Capsule = serde_json::from_str(json).unwrap();
        assert_eq!(capsule.votes(), 7);
    }

    #[test]
    fn capsule_missing_optionals_default_empty() {
        let json = r#"{"id": {"id": "0x7"}, "name": "n", "votes_num": "0"}"#;
        let capsule: Capsule = serde_json::from_str(json).unwrap();
        assert!(!capsule.has_image());
        assert!(!capsule.has_text());
        assert!(capsule.owner_address.is_empty());
    }

    #[test]
    fn non_numeric_votes_hit_sentinel() {
        let json = r#"{"id": {"id": "0x7"}, "name": "n", "votes_num": "many"}"#;
        let capsule: Capsule = serde_json::from_str(json).unwrap();
        assert_eq!(capsule.votes(), VOTE_SENTINEL);
    }

    #[test]
    fn capsule_serializes_nested_uid() {
        let json = r#"{"id": {"id": "0x7"}, "name": "n", "votes_num": "1"}"#;
        let capsule: Capsule = serde_json::from_str(json).unwrap();
        let out = serde_json::to_value(&capsule).unwrap();
        assert!(out["id"]["id"].as_str().unwrap().starts_with("0x"));
    }
}
