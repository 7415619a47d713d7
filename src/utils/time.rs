use crate::context::Context;
use crate::Result;
use std::time::Duration;

/// 2000-01-01T00:00:00Z in milliseconds. Timestamps before this are not
/// plausible block times.
pub const MIN_UNIX_EPOCH: i64 = 946_713_600_000;

/// 2100-01-01T00:00:00Z in milliseconds.
pub const MAX_UNIX_EPOCH: i64 = 4_102_444_800_000;

pub const MILLISECONDS_IN_SECOND: i64 = 1_000;

/// Current unix time in milliseconds.
pub fn milliseconds() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Returns true if a block with the given timestamp (ms) is no more than
/// `tip_delay` seconds old.
pub fn at_tip(tip_delay: u64, block_timestamp: i64) -> bool {
    let delay = i64::try_from(tip_delay)
        .unwrap_or(i64::MAX)
        .saturating_mul(MILLISECONDS_IN_SECOND);
    let cutoff = milliseconds().saturating_sub(delay);

    block_timestamp >= cutoff
}

/// Estimates how long syncing from `last_synced_index` to `tip_index` takes
/// at the given rate.
pub fn time_to_tip(blocks_per_second: f64, last_synced_index: i64, tip_index: i64) -> Duration {
    let remaining = tip_index.saturating_sub(last_synced_index).max(0);
    if remaining == 0 || !(blocks_per_second > 0.0) {
        return Duration::ZERO;
    }

    Duration::from_secs((remaining as f64 / blocks_per_second) as u64)
}

/// Sleeps for `duration`, returning early with the context's error if it is
/// cancelled or its deadline passes first.
pub async fn context_sleep(ctx: &Context, duration: Duration) -> Result<()> {
    ctx.err()?;

    tokio::select! {
        err = ctx.done() => Err(err),
        _ = tokio::time::sleep(duration) => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use std::time::Instant;

    #[test]
    fn milliseconds_in_range() {
        let now = milliseconds();
        assert!(now > MIN_UNIX_EPOCH);
        assert!(now < MAX_UNIX_EPOCH);
    }

    #[test]
    fn tip() {
        let now = milliseconds();
        assert!(at_tip(60, now));
        assert!(at_tip(60, now - 30_000));
        assert!(!at_tip(60, now - 120_000));
        assert!(at_tip(u64::MAX, 0));
    }

    #[test]
    fn estimate_time_to_tip() {
        assert_eq!(time_to_tip(10.0, 100, 200), Duration::from_secs(10));
        assert_eq!(time_to_tip(3.0, 0, 10), Duration::from_secs(3));
        assert_eq!(time_to_tip(10.0, 300, 200), Duration::ZERO);
        assert_eq!(time_to_tip(0.0, 0, 200), Duration::ZERO);
    }

    #[tokio::test]
    async fn sleep_completes() -> Result<()> {
        let start = Instant::now();
        context_sleep(&Context::background(), Duration::from_millis(10)).await?;
        assert!(start.elapsed() >= Duration::from_millis(10));
        Ok(())
    }

    #[tokio::test]
    async fn sleep_cancelled() {
        let ctx = Context::background();
        ctx.cancel();
        let res = context_sleep(&ctx, Duration::from_secs(60)).await;
        assert!(matches!(res, Err(Error::Cancelled)));
    }

    #[tokio::test]
    async fn sleep_deadline() {
        let ctx = Context::background().with_timeout(Duration::from_millis(10));
        let res = context_sleep(&ctx, Duration::from_secs(60)).await;
        assert!(matches!(res, Err(Error::DeadlineExceeded)));
    }
}
