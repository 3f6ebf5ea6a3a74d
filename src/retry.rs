//! Retry combinator for fallible async operations
//!
//! Keeps retry policy out of the fetch logic: callers hand in an async
//! closure and get back the first success, or the last error once the
//! attempt budget is spent. Delay doubles after each failed attempt.

use std::future::Future;
use std::time::Duration;
use tracing::debug;

/// Run `op` up to `max_attempts` times with doubling backoff
///
/// Stops on the first `Ok`. Sleeps `initial_delay` after the first failure,
/// doubling before every subsequent attempt. Returns the last error when
/// all attempts fail.
pub async fn with_backoff<T, E, F, Fut>(
    max_attempts: u32,
    initial_delay: Duration,
    mut op: F,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    debug_assert!(max_attempts > 0);

    let mut delay = initial_delay;
    let mut attempt = 1;

    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(err) if attempt < max_attempts => {
                debug!(
                    "attempt {}/{} failed, retrying in {:?}: {}",
                    attempt, max_attempts, delay, err
                );
                tokio::time::sleep(delay).await;
                delay *= 2;
                attempt += 1;
            }
            Err(err) => return Err(err),
        }
    }
}
