use std::convert::TryFrom;
use tokio::time::Duration;

/// Tuning knobs for a log server. All fields are optional; defaults are
/// applied and validated during server creation.
#[derive(Clone, Default)]
pub struct LogOptions {
    /// High-water mark of in-flight proposal batches per Append stream.
    /// When reached, the server stops reading further requests and lets
    /// transport flow-control push back on the client.
    pub append_pipeline_depth: Option<usize>,
    /// Maximum entries packed into one Read reply.
    pub read_batch_limit: Option<u64>,
    /// Deadline applied to the unary RPCs (Discard, Info).
    pub unary_deadline: Option<Duration>,
    /// Attempts per storage call for transient failures.
    pub storage_retry_attempts: Option<u32>,
    /// Sleep between storage retry attempts.
    pub storage_retry_delay: Option<Duration>,
}

#[derive(Copy, Clone)]
pub(crate) struct LogOptionsValidated {
    pub(crate) append_pipeline_depth: usize,
    pub(crate) read_batch_limit: u64,
    pub(crate) unary_deadline: Duration,
    pub(crate) storage_retry_attempts: u32,
    pub(crate) storage_retry_delay: Duration,
}

impl LogOptionsValidated {
    fn validate(&self) -> Result<(), &'static str> {
        if self.append_pipeline_depth == 0 {
            return Err("Append pipeline depth must be at least 1");
        }
        if self.read_batch_limit == 0 {
            return Err("Read batch limit must be at least 1");
        }
        if self.unary_deadline.is_zero() {
            return Err("Unary deadline must be non-zero");
        }
        if self.storage_retry_attempts == 0 {
            return Err("Storage retry attempts must be at least 1");
        }

        Ok(())
    }
}

impl TryFrom<LogOptions> for LogOptionsValidated {
    type Error = &'static str;

    fn try_from(options: LogOptions) -> Result<Self, Self::Error> {
        let values = LogOptionsValidated {
            append_pipeline_depth: options.append_pipeline_depth.unwrap_or(8),
            read_batch_limit: options.read_batch_limit.unwrap_or(1024),
            unary_deadline: options.unary_deadline.unwrap_or(Duration::from_secs(5)),
            storage_retry_attempts: options.storage_retry_attempts.unwrap_or(3),
            storage_retry_delay: options.storage_retry_delay.unwrap_or(Duration::from_millis(10)),
        };

        values.validate()?;
        Ok(values)
    }
}
