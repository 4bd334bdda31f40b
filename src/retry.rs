//! Fixed-delay retry of GitHub API calls that hit a rate limit.
use std::{future::Future, time::Duration};

use log::*;

use crate::error::ApiResult;

/// Default wait after a rate limit: one minute past GitHub's hourly window.
pub const DEFAULT_RATE_LIMIT_WAIT: Duration = Duration::from_secs(61 * 60);

/// Retries an operation for as long as it reports a rate limit
/// ([`ApiError::RateLimited`](crate::error::ApiError::RateLimited)), sleeping
/// a fixed interval between attempts. Any other error is returned immediately.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    wait: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_RATE_LIMIT_WAIT)
    }
}

impl RetryPolicy {
    pub fn new(wait: Duration) -> Self {
        Self { wait }
    }

    pub fn wait(&self) -> Duration {
        self.wait
    }

    /// Run `op` until it succeeds or fails with a non-rate-limit error.
    /// `what` names the call in log output.
    pub async fn call<T, F, Fut>(&self, what: &str, mut op: F) -> ApiResult<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = ApiResult<T>>,
    {
        loop {
            match op().await {
                Ok(value) => return Ok(value),
                Err(err) if err.is_rate_limited() => {
                    warn!(
                        "GitHub rate limit reached while {what}: waiting {} minutes",
                        self.wait.as_secs() / 60
                    );
                    tokio::time::sleep(self.wait).await;
                }
                Err(err) => {
                    error!("problem {what}: {err}");
                    return Err(err);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use tokio::time::Instant;

    use super::*;
    use crate::error::ApiError;

    #[tokio::test(start_paused = true)]
    async fn retries_rate_limit_until_success() {
        let policy = RetryPolicy::new(Duration::from_secs(60));
        let calls = Cell::new(0);
        let start = Instant::now();

        let result = policy
            .call("listing forks", || {
                calls.set(calls.get() + 1);
                let attempt = calls.get();
                async move {
                    if attempt <= 2 {
                        Err(ApiError::RateLimited)
                    } else {
                        Ok(attempt)
                    }
                }
            })
            .await;

        assert_eq!(result, Ok(3));
        assert_eq!(calls.get(), 3);
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_secs(120));
        assert!(elapsed < Duration::from_secs(121));
    }

    #[tokio::test(start_paused = true)]
    async fn fatal_error_is_not_retried() {
        let policy = RetryPolicy::default();
        let calls = Cell::new(0);
        let start = Instant::now();

        let result: ApiResult<()> = policy
            .call("listing branches", || {
                calls.set(calls.get() + 1);
                async { Err(ApiError::other("Not Found")) }
            })
            .await;

        assert_eq!(result, Err(ApiError::other("Not Found")));
        assert_eq!(calls.get(), 1);
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn success_returns_without_waiting() {
        let policy = RetryPolicy::default();
        let start = Instant::now();

        let result = policy.call("fetching repo", || async { Ok("ok") }).await;

        assert_eq!(result, Ok("ok"));
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[test]
    fn default_wait_exceeds_rate_limit_window() {
        assert_eq!(RetryPolicy::default().wait(), Duration::from_secs(3660));
    }
}
