//! Serde mirrors of the Sui JSON-RPC surface this client consumes.
//!
//! Only the fields the application reads are modeled; everything else in
//! the node's responses is ignored during deserialization.

use futurebox_core::types::ObjectId;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response envelope of `sui_getObject`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectResponse {
    /// Present when the object was found.
    #[serde(default)]
    pub data: Option<ObjectData>,
    /// Node-reported error (deleted, not found, ...).
    #[serde(default)]
    pub error: Option<Value>,
}

/// The object payload inside an [`ObjectResponse`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectData {
    /// Object identifier.
    pub object_id: ObjectId,
    /// Object version (string-encoded u64).
    #[serde(default)]
    pub version: Option<String>,
    /// Object digest.
    #[serde(default)]
    pub digest: Option<String>,
    /// Parsed content, present because every read requests `showContent`.
    #[serde(default)]
    pub content: Option<MoveObjectContent>,
}

/// Parsed Move object content.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveObjectContent {
    /// `"moveObject"` for everything this client touches; packages report
    /// `"package"`.
    pub data_type: String,
    /// Fully qualified struct type.
    #[serde(rename = "type", default)]
    pub type_: Option<String>,
    /// Whether the object is publicly transferable.
    #[serde(default)]
    pub has_public_transfer: bool,
    /// The struct's fields as loose JSON.
    #[serde(default)]
    pub fields: Value,
}

/// One page of `suix_getDynamicFields` results.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DynamicFieldPage {
    /// Field entries in node order.
    #[serde(default)]
    pub data: Vec<DynamicFieldInfo>,
    /// Cursor for the next page, when one exists.
    #[serde(default)]
    pub next_cursor: Option<Value>,
    /// Whether more entries exist beyond this page.
    #[serde(default)]
    pub has_next_page: bool,
}

/// A single dynamic-field entry under a parent object.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DynamicFieldInfo {
    /// Id of the field object itself (the thing to fetch).
    pub object_id: ObjectId,
    /// Struct type of the field object.
    #[serde(default)]
    pub object_type: Option<String>,
    /// The field's name value (shape depends on the key type).
    #[serde(default)]
    pub name: Option<Value>,
}

/// One page of `suix_getOwnedObjects` results.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnedObjectPage {
    /// Owned-object entries in node order.
    #[serde(default)]
    pub data: Vec<OwnedObjectEntry>,
    /// Cursor for the next page, when one exists.
    #[serde(default)]
    pub next_cursor: Option<Value>,
    /// Whether more entries exist beyond this page.
    #[serde(default)]
    pub has_next_page: bool,
}

/// An entry in an owned-objects page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwnedObjectEntry {
    /// Object reference; absent when the node reports a per-entry error.
    #[serde(default)]
    pub data: Option<ObjectData>,
}

impl ObjectData {
    /// The content's `fields`, if this is a parsed Move object.
    pub fn move_fields(&self) -> Option<&Value> {
        let content = self.content.as_ref()?;
        if content.data_type != "moveObject" {
            return None;
        }
        Some(&content.fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_response_parses() {
        let json = r#"{
            "data": {
                "objectId": "0x11",
                "version": "5",
                "digest": "9Wq",
                "content": {
                    "dataType": "moveObject",
                    "type": "0x2::kiosk::Kiosk",
                    "hasPublicTransfer": false,
                    "fields": {"x": 1}
                }
            }
        }"#;
        let response: ObjectResponse = serde_json::from_str(json).unwrap();
        let data = response.data.unwrap();
        assert_eq!(data.move_fields().unwrap()["x"], 1);
    }

    #[test]
    fn error_response_has_no_data() {
        let json = r#"{"error": {"code": "notExists", "object_id": "0x11"}}"#;
        let response: ObjectResponse = serde_json::from_str(json).unwrap();
        assert!(response.data.is_none());
        assert!(response.error.is_some());
    }

    #[test]
    fn package_content_yields_no_fields() {
        let json = r#"{
            "data": {
                "objectId": "0x11",
                "content": {"dataType": "package", "fields": {}}
            }
        }"#;
        let response: ObjectResponse = serde_json::from_str(json).unwrap();
        assert!(response.data.unwrap().move_fields().is_none());
    }

    #[test]
    fn dynamic_field_page_parses() {
        let json = r#"{
            "data": [
                {"objectId": "0x21", "objectType": "0x2::dynamic_field::Field", "name": {"type": "u64", "value": "0"}},
                {"objectId": "0x22"}
            ],
            "nextCursor": "0x22",
            "hasNextPage": false
        }"#;
        let page: DynamicFieldPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.data.len(), 2);
        assert!(!page.has_next_page);
    }

    #[test]
    fn owned_object_page_tolerates_missing_data() {
        let json = r#"{"data": [{"data": {"objectId": "0x31"}}, {}], "hasNextPage": false}"#;
        let page: OwnedObjectPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.data.len(), 2);
        assert!(page.data[0].data.is_some());
        assert!(page.data[1].data.is_none());
    }
}
