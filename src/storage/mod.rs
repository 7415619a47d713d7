//! Access to locally stored blocks.

use crate::context::Context;
use crate::types::{BlockIdentifier, BlockResponse, PartialBlockIdentifier};
use crate::utils::at_tip;
use crate::{Error, Result};
use async_trait::async_trait;
use log::{debug, info};

pub mod mock;
pub use mock::MockBlockStorage;

/// Reads blocks from local storage.
#[async_trait]
pub trait BlockStorageHelper: Send + Sync {
    /// Returns the block identified by `block`, or the current head block
    /// when `block` is `None` or identifies the tip. Fails with
    /// [`Error::HeadBlockNotFound`] if storage holds no blocks yet. Only the
    /// block is read; transactions listed in `other_transactions` are not
    /// fetched.
    async fn get_block_lazy(
        &self,
        ctx: &Context,
        block: Option<&PartialBlockIdentifier>,
    ) -> Result<BlockResponse>;
}

/// Checks whether the head of local storage is at the network tip, meaning
/// its timestamp is no more than `tip_delay` seconds old.
///
/// Returns `(false, None)` when storage is empty, and otherwise the head
/// block identifier along with whether it is at tip.
pub async fn check_storage_tip<H: BlockStorageHelper + ?Sized>(
    ctx: &Context,
    tip_delay: u64,
    helper: &H,
) -> Result<(bool, Option<BlockIdentifier>)> {
    let response = match helper.get_block_lazy(ctx, None).await {
        Ok(response) => response,
        Err(Error::HeadBlockNotFound) => {
            debug!("No head block in storage");
            return Ok((false, None));
        }
        Err(err) => return Err(err),
    };

    let block = response
        .block
        .ok_or_else(|| Error::Storage("Head block response is missing its block".into()))?;

    let is_tip = at_tip(tip_delay, block.timestamp);
    if is_tip {
        info!("Storage head {} is at tip", block.block_identifier.index);
    }

    Ok((is_tip, Some(block.block_identifier)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Block;
    use crate::utils::milliseconds;

    fn head(timestamp: i64) -> BlockResponse {
        Block {
            block_identifier: BlockIdentifier::new(100, "head"),
            parent_block_identifier: BlockIdentifier::new(99, "parent"),
            timestamp,
            transactions: vec![],
            metadata: None,
        }
        .into()
    }

    #[tokio::test]
    async fn recent_head_is_at_tip() -> Result<()> {
        let now = milliseconds();
        let storage = MockBlockStorage::new(move |_, _| Ok(head(now)));

        let (is_tip, block) = check_storage_tip(&Context::background(), 60, &storage).await?;
        assert!(is_tip);
        assert_eq!(block, Some(BlockIdentifier::new(100, "head")));
        assert_eq!(storage.calls(), vec![None]);
        Ok(())
    }

    #[tokio::test]
    async fn stale_head_is_not_at_tip() -> Result<()> {
        let stale = milliseconds() - 3_600_000;
        let storage = MockBlockStorage::new(move |_, _| Ok(head(stale)));

        let (is_tip, block) = check_storage_tip(&Context::background(), 60, &storage).await?;
        assert!(!is_tip);
        assert_eq!(block, Some(BlockIdentifier::new(100, "head")));
        Ok(())
    }

    #[tokio::test]
    async fn empty_storage() -> Result<()> {
        let storage = MockBlockStorage::new(|_, _| Err(Error::HeadBlockNotFound));

        let (is_tip, block) = check_storage_tip(&Context::background(), 60, &storage).await?;
        assert!(!is_tip);
        assert!(block.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn storage_errors_propagate() {
        let storage = MockBlockStorage::new(|_, _| Err(Error::Storage("corrupt".into())));

        let res = check_storage_tip(&Context::background(), 60, &storage).await;
        assert!(matches!(res, Err(Error::Storage(_))));
    }
}
