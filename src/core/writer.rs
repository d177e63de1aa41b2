//! Writer trait for record routing overrides

use super::record::Record;
use std::sync::Arc;

/// A routing destination that replaces per-sink fan-out when installed on a
/// registry. The asynchronous pipeline is the canonical implementation.
pub trait Writer: Send + Sync {
    fn write(&self, record: Arc<Record>);
}
