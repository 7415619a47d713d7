use super::{BlockIdentifier, NetworkIdentifier};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Fetches a sequence of [`BlockEvent`]s describing which blocks were added
/// to and removed from storage to reach the current state.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct EventsBlocksRequest {
    pub network_identifier: NetworkIdentifier,
    /// Offset into the event stream. When absent, the last `limit` events
    /// before the tip are returned. `Some(0)` starts from the beginning.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    /// Maximum number of events to return. Fewer may be returned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
}

impl EventsBlocksRequest {
    /// Requests the most recent `limit` events, counting back from the tip.
    pub fn from_tip(network_identifier: NetworkIdentifier, limit: Option<i64>) -> Self {
        EventsBlocksRequest {
            network_identifier,
            offset: None,
            limit,
        }
    }

    pub fn from_offset(
        network_identifier: NetworkIdentifier,
        offset: i64,
        limit: Option<i64>,
    ) -> Self {
        EventsBlocksRequest {
            network_identifier,
            offset: Some(offset),
            limit,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BlockEventType {
    BlockAdded,
    BlockRemoved,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct BlockEvent {
    pub sequence: i64,
    pub block_identifier: BlockIdentifier,
    #[serde(rename = "type")]
    pub kind: BlockEventType,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct EventsBlocksResponse {
    pub max_sequence: i64,
    pub events: Vec<BlockEvent>,
}

impl EventsBlocksResponse {
    /// Errors if the response holds more events than the request allowed.
    pub fn check_limit(&self, request: &EventsBlocksRequest) -> Result<()> {
        match request.limit {
            Some(limit) if self.events.len() as i64 > limit => Err(Error::LimitExceeded {
                got: self.events.len(),
                limit,
            }),
            _ => Ok(()),
        }
    }
}
