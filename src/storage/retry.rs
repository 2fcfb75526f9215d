use crate::storage::{ProposeError, ReadAtError, TruncatePrefixError};
use std::fmt::Debug;
use std::future::Future;
use tokio::time::Duration;

/// Errors that may clear up on their own and are worth retrying locally
/// before being surfaced to the client.
pub(crate) trait Transient {
    fn is_transient(&self) -> bool;
}

impl Transient for ProposeError {
    fn is_transient(&self) -> bool {
        matches!(self, ProposeError::Unavailable(_))
    }
}

impl Transient for ReadAtError {
    fn is_transient(&self) -> bool {
        matches!(self, ReadAtError::Unavailable(_))
    }
}

impl Transient for TruncatePrefixError {
    fn is_transient(&self) -> bool {
        matches!(self, TruncatePrefixError::Unavailable(_))
    }
}

/// Calls `operation` up to `attempts` times, sleeping `delay` between
/// attempts, retrying only transient errors. The final error is returned
/// as-is; non-transient errors are never retried.
pub(crate) async fn with_retries<T, E, F, Fut>(
    logger: &slog::Logger,
    operation_name: &str,
    attempts: u32,
    delay: Duration,
    mut operation: F,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Transient + Debug,
{
    let mut remaining = attempts.max(1);
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(e) if e.is_transient() && remaining > 1 => {
                remaining -= 1;
                slog::warn!(
                    logger,
                    "Transient {} failure ({} attempts left): {:?}",
                    operation_name,
                    remaining,
                    e
                );
                tokio::time::sleep(delay).await;
            }
            Err(e) => return Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn test_logger() -> slog::Logger {
        slog::Logger::root(slog::Discard, slog::o!())
    }

    #[tokio::test]
    async fn transient_errors_are_retried_until_success() {
        let calls = AtomicU32::new(0);

        let result: Result<u32, ReadAtError> = with_retries(
            &test_logger(),
            "ReadAt",
            3,
            Duration::from_millis(1),
            || {
                let attempt = calls.fetch_add(1, Ordering::SeqCst);
                async move {
                    if attempt < 2 {
                        Err(ReadAtError::Unavailable("disk busy".to_string()))
                    } else {
                        Ok(42)
                    }
                }
            },
        )
        .await;

        assert_eq!(result.unwrap(), 42);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn non_transient_errors_surface_immediately() {
        let calls = AtomicU32::new(0);

        let result: Result<u32, ProposeError> = with_retries(
            &test_logger(),
            "Propose",
            3,
            Duration::from_millis(1),
            || {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Err(ProposeError::Full) }
            },
        )
        .await;

        assert!(matches!(result, Err(ProposeError::Full)));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn attempts_are_bounded() {
        let calls = AtomicU32::new(0);

        let result: Result<u32, ReadAtError> = with_retries(
            &test_logger(),
            "ReadAt",
            3,
            Duration::from_millis(1),
            || {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Err(ReadAtError::Unavailable("still down".to_string())) }
            },
        )
        .await;

        assert!(matches!(result, Err(ReadAtError::Unavailable(_))));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }
}
