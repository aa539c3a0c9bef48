//! Helpers for deferred computations, the asynchronous counterpart of the
//! `xeq` sequence toolkit. They follow the same conventions: inputs are
//! taken as-is, outputs are fresh values, and nothing here panics.
//!
//! The sequence crate itself stays synchronous; everything that needs a
//! runtime lives here instead.

use std::future::Future;
use std::time::Duration;

/// A future that resolves with the unit value once `duration` has passed.
///
/// Under the tokio test clock this completes without real waiting.
pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

/// Drive a deferred computation to completion and report how long it took.
///
/// The measured wall-clock time is handed to `report` right after the
/// future resolves; the output is returned unchanged.
pub async fn elapsed<T, F, Fut>(report: F, fut: Fut) -> T
where
    F: FnOnce(Duration),
    Fut: Future<Output = T>,
{
    let start = tokio::time::Instant::now();
    let output = fut.await;
    report(start.elapsed());
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_sleep_resolves_after_the_duration() {
        let before = tokio::time::Instant::now();
        sleep(Duration::from_millis(10)).await;
        assert_eq!(before.elapsed(), Duration::from_millis(10));
    }

    #[tokio::test(start_paused = true)]
    async fn test_elapsed_returns_the_output() {
        let out = elapsed(|_| {}, async { 7 }).await;
        assert_eq!(out, 7);
    }

    #[tokio::test(start_paused = true)]
    async fn test_elapsed_reports_the_wait() {
        let mut reported = None;
        let out = elapsed(
            |d| reported = Some(d),
            async {
                sleep(Duration::from_millis(25)).await;
                "done"
            },
        )
        .await;
        assert_eq!(out, "done");
        assert_eq!(reported, Some(Duration::from_millis(25)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_elapsed_on_an_immediate_computation() {
        let mut reported = None;
        elapsed(|d| reported = Some(d), async {}).await;
        assert_eq!(reported, Some(Duration::ZERO));
    }
}
