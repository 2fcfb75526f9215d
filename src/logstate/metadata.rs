use crate::storage::LogSnapshot;

/// LogMetadata is the metadata triple the log state owns exclusively:
/// inclusive index bounds plus approximate capacity counters.
///
/// An empty log has `last_index == first_index - 1`. Both bounds only move
/// forward over the lifetime of the log.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct LogMetadata {
    pub(crate) first_index: u64,
    pub(crate) last_index: u64,
    pub(crate) bytes_used: u64,
    pub(crate) bytes_total: u64,
}

impl LogMetadata {
    #[cfg(test)]
    pub(crate) fn new_empty(bytes_total: u64) -> Self {
        LogMetadata {
            first_index: 1,
            last_index: 0,
            bytes_used: 0,
            bytes_total,
        }
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.last_index + 1 == self.first_index
    }
}

// ------- Conversions --------

impl From<LogSnapshot> for LogMetadata {
    fn from(snapshot: LogSnapshot) -> Self {
        LogMetadata {
            first_index: snapshot.first_index,
            last_index: snapshot.last_index,
            bytes_used: snapshot.bytes_used,
            bytes_total: snapshot.bytes_total,
        }
    }
}
