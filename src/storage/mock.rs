use std::sync::Mutex;

use async_trait::async_trait;

use super::BlockStorageHelper;
use crate::context::Context;
use crate::types::{BlockResponse, PartialBlockIdentifier};
use crate::{Error, Result};

type Responder =
    dyn Fn(&Context, Option<&PartialBlockIdentifier>) -> Result<BlockResponse> + Send + Sync;

/// A [`BlockStorageHelper`] which answers every call with a closure and
/// records the identifiers it was called with.
pub struct MockBlockStorage {
    respond: Box<Responder>,
    calls: Mutex<Vec<Option<PartialBlockIdentifier>>>,
}

impl MockBlockStorage {
    pub fn new<F>(respond: F) -> Self
    where
        F: Fn(&Context, Option<&PartialBlockIdentifier>) -> Result<BlockResponse>
            + Send
            + Sync
            + 'static,
    {
        MockBlockStorage {
            respond: Box::new(respond),
            calls: Mutex::new(vec![]),
        }
    }

    /// A mock which answers every call with a clone of `response`.
    pub fn returning(response: BlockResponse) -> Self {
        Self::new(move |_, _| Ok(response.clone()))
    }

    pub fn calls(&self) -> Vec<Option<PartialBlockIdentifier>> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl BlockStorageHelper for MockBlockStorage {
    async fn get_block_lazy(
        &self,
        ctx: &Context,
        block: Option<&PartialBlockIdentifier>,
    ) -> Result<BlockResponse> {
        self.calls
            .lock()
            .map_err(|_| Error::Storage("Mock call log poisoned".into()))?
            .push(block.cloned());

        (self.respond)(ctx, block)
    }
}
