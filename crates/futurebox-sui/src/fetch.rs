//! Data-fetch adapters.
//!
//! Both adapters follow the same pipeline: enumerate object ids, fetch
//! every referenced object's content in parallel, and project each into
//! a flat [`Capsule`] record.
//!
//! Partial-result policy: a single object that fails to fetch or does
//! not have the expected shape is logged and skipped, so the output
//! length equals the number of entries that resolved to well-formed
//! content. Only a failure of the top-level enumeration call itself is
//! returned as an error.

use futures::future::join_all;
use thiserror::Error;
use tracing::{debug, warn};

use futurebox_core::types::{Capsule, ObjectId, SuiAddress};

use crate::client::{ClientError, SuiClient};
use crate::rpc::ObjectResponse;

/// Why one fetched object could not be projected into a capsule.
#[derive(Debug, Error)]
pub enum ShapeError {
    #[error("object has no content (node error: {0:?})")]
    NoContent(Option<serde_json::Value>),
    #[error("content is not a Move object")]
    NotAMoveObject,
    #[error("dynamic field entry has no value fields")]
    MissingValue,
    #[error("capsule fields did not decode: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Project a dynamic-field object into a capsule.
///
/// The capsule sits nested inside the field wrapper as
/// `fields.value.fields`.
pub fn capsule_from_dynamic_field(response: &ObjectResponse) -> Result<Capsule, ShapeError> {
    let data = response
        .data
        .as_ref()
        .ok_or_else(|| ShapeError::NoContent(response.error.clone()))?;
    let fields = data.move_fields().ok_or(ShapeError::NotAMoveObject)?;
    let value_fields = fields
        .get("value")
        .and_then(|value| value.get("fields"))
        .ok_or(ShapeError::MissingValue)?;
    Ok(serde_json::from_value(value_fields.clone())?)
}

/// Project a directly-owned NFT object into a capsule.
///
/// Owned objects carry the capsule shape at the content root.
pub fn capsule_from_owned(response: &ObjectResponse) -> Result<Capsule, ShapeError> {
    let data = response
        .data
        .as_ref()
        .ok_or_else(|| ShapeError::NoContent(response.error.clone()))?;
    let fields = data.move_fields().ok_or(ShapeError::NotAMoveObject)?;
    Ok(serde_json::from_value(fields.clone())?)
}

/// Apply the skip-and-log policy over a batch of fetched objects.
fn sift_capsules(
    ids: &[ObjectId],
    responses: Vec<Result<ObjectResponse, ClientError>>,
    project: fn(&ObjectResponse) -> Result<Capsule, ShapeError>,
) -> Vec<Capsule> {
    let mut capsules = Vec::with_capacity(responses.len());
    for (id, response) in ids.iter().zip(responses) {
        match response {
            Ok(object) => match project(&object) {
                Ok(capsule) => capsules.push(capsule),
                Err(err) => warn!(object = %id, %err, "skipping malformed object"),
            },
            Err(err) => warn!(object = %id, %err, "skipping unfetchable object"),
        }
    }
    capsules
}

/// Fetch every capsule in the registry.
///
/// Enumerates the registry's dynamic fields, then fetches all referenced
/// objects in parallel. Ordering is the node's enumeration order.
pub async fn fetch_capsules(
    client: &SuiClient,
    registry: &ObjectId,
) -> Result<Vec<Capsule>, ClientError> {
    let page = client.get_dynamic_fields(registry).await?;
    if page.has_next_page {
        debug!(registry = %registry, "registry has further pages; serving the first");
    }
    let ids: Vec<ObjectId> = page.data.into_iter().map(|entry| entry.object_id).collect();

    let responses = join_all(ids.iter().map(|id| client.get_object(id))).await;
    let capsules = sift_capsules(&ids, responses, capsule_from_dynamic_field);
    debug!(total = ids.len(), kept = capsules.len(), "fetched capsules");
    Ok(capsules)
}

/// Fetch the FutureBox NFTs owned by `owner`.
///
/// Lists owned objects filtered by struct type, then fetches each
/// object's content in parallel.
pub async fn fetch_owned_nfts(
    client: &SuiClient,
    owner: &SuiAddress,
    struct_type: &str,
) -> Result<Vec<Capsule>, ClientError> {
    let page = client.get_owned_objects(owner, struct_type).await?;
    let ids: Vec<ObjectId> = page
        .data
        .into_iter()
        .filter_map(|entry| entry.data.map(|data| data.object_id))
        .collect();

    let responses = join_all(ids.iter().map(|id| client.get_object(id))).await;
    let capsules = sift_capsules(&ids, responses, capsule_from_owned);
    debug!(owner = %owner, total = ids.len(), kept = capsules.len(), "fetched owned NFTs");
    Ok(capsules)
}
