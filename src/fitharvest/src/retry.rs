use std::{
    future::Future,
    sync::atomic::{AtomicUsize, Ordering},
    time::Duration,
};

use crate::FitbitError;

/// How the fetcher sits out a backoff period.
pub trait WaitStrategy {
    fn wait(&self, duration: Duration) -> impl Future<Output = ()>;
}

/// Blocks the task for the whole backoff.
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioWait;

impl WaitStrategy for TokioWait {
    async fn wait(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Returns immediately and counts how often it was asked to wait.
#[derive(Debug, Default)]
pub struct NoWait {
    waits: AtomicUsize,
}

impl NoWait {
    pub fn waits(&self) -> usize {
        self.waits.load(Ordering::Relaxed)
    }
}

impl WaitStrategy for NoWait {
    async fn wait(&self, _duration: Duration) {
        self.waits.fetch_add(1, Ordering::Relaxed);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            backoff: Duration::from_secs(3600),
        }
    }
}

/// Runs an API call again after a fixed wait whenever it fails.
///
/// Every failure is treated as the rate limit, there is no distinction between
/// transient and permanent errors. Once `max_attempts` calls have failed the
/// last error is returned wrapped in [`FitbitError::RetryExhausted`].
pub struct RetryingFetcher<W> {
    policy: RetryPolicy,
    wait: W,
}

impl<W: WaitStrategy> RetryingFetcher<W> {
    pub fn new(policy: RetryPolicy, wait: W) -> Self {
        Self { policy, wait }
    }

    pub fn policy(&self) -> RetryPolicy {
        self.policy
    }

    pub fn wait_strategy(&self) -> &W {
        &self.wait
    }

    pub async fn call<T, F, Fut>(&self, mut operation: F) -> Result<T, FitbitError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, FitbitError>>,
    {
        let max_attempts = self.policy.max_attempts.max(1);
        let mut attempt = 1;

        loop {
            match operation().await {
                Ok(response) => return Ok(response),
                Err(error) if attempt >= max_attempts => {
                    error!("attempt {attempt}/{max_attempts} failed: {error}");
                    return Err(FitbitError::RetryExhausted {
                        attempts: attempt,
                        source: Box::new(error),
                    });
                }
                Err(error) => {
                    let backoff = self.policy.backoff.as_secs();
                    if error.is_rate_limit() {
                        warn!(
                            "Hit rate limit, waiting {backoff}s before attempt {}/{max_attempts}",
                            attempt + 1,
                        );
                    } else {
                        warn!(
                            "request failed ({error}), waiting {backoff}s before attempt {}/{max_attempts}",
                            attempt + 1,
                        );
                    }
                    self.wait.wait(self.policy.backoff).await;
                    attempt += 1;
                }
            }
        }
    }
}

impl Default for RetryingFetcher<TokioWait> {
    fn default() -> Self {
        Self::new(RetryPolicy::default(), TokioWait)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicU32;

    use reqwest::StatusCode;

    use super::*;

    fn rate_limited() -> FitbitError {
        FitbitError::Status {
            status: StatusCode::TOO_MANY_REQUESTS,
            body: String::new(),
        }
    }

    /// Fails `failures` times, then answers with the attempt number.
    async fn flaky(calls: &AtomicU32, failures: u32) -> Result<u32, FitbitError> {
        let call = calls.fetch_add(1, Ordering::Relaxed) + 1;
        if call <= failures {
            Err(rate_limited())
        } else {
            Ok(call)
        }
    }

    #[tokio::test]
    async fn success_needs_no_wait() {
        let fetcher = RetryingFetcher::new(RetryPolicy::default(), NoWait::default());
        let calls = AtomicU32::new(0);

        let result = fetcher.call(|| flaky(&calls, 0)).await.unwrap();

        assert_eq!(result, 1);
        assert_eq!(fetcher.wait_strategy().waits(), 0);
    }

    #[tokio::test]
    async fn waits_once_per_failure_before_success() {
        for failures in 1..5 {
            let fetcher = RetryingFetcher::new(RetryPolicy::default(), NoWait::default());
            let calls = AtomicU32::new(0);

            let result = fetcher.call(|| flaky(&calls, failures)).await.unwrap();

            assert_eq!(result, failures + 1);
            assert_eq!(fetcher.wait_strategy().waits(), failures as usize);
        }
    }

    #[tokio::test]
    async fn always_failing_call_is_exhausted_after_five_attempts() {
        let fetcher = RetryingFetcher::new(RetryPolicy::default(), NoWait::default());
        let calls = AtomicU32::new(0);

        let err = fetcher.call(|| flaky(&calls, u32::MAX)).await.unwrap_err();

        assert_eq!(calls.load(Ordering::Relaxed), 5);
        // no wait after the final attempt
        assert_eq!(fetcher.wait_strategy().waits(), 4);
        match err {
            FitbitError::RetryExhausted { attempts, source } => {
                assert_eq!(attempts, 5);
                assert!(source.is_rate_limit());
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn zero_attempts_still_calls_once() {
        let policy = RetryPolicy {
            max_attempts: 0,
            backoff: Duration::ZERO,
        };
        let fetcher = RetryingFetcher::new(policy, NoWait::default());
        let calls = AtomicU32::new(0);

        assert!(fetcher.call(|| flaky(&calls, 1)).await.is_err());
        assert_eq!(calls.load(Ordering::Relaxed), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn tokio_wait_sleeps_for_backoff() {
        let started = tokio::time::Instant::now();
        TokioWait.wait(Duration::from_secs(3600)).await;
        assert!(started.elapsed() >= Duration::from_secs(3600));
    }

    #[test]
    fn default_policy() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_attempts, 5);
        assert_eq!(policy.backoff, Duration::from_secs(3600));
    }
}
