//! Call-site record builder
//!
//! A builder is created per logging statement, accumulates the message body,
//! and emits exactly one record exactly once: either through an explicit
//! `finish()` or implicitly when it goes out of scope. Moving a builder moves
//! the in-progress record with it, so double emission is unrepresentable.

use super::record::Record;
use super::registry::Registry;
use std::fmt;
use std::sync::Arc;

pub struct RecordBuilder<'a> {
    registry: &'a Registry,
    record: Option<Record>,
}

impl<'a> RecordBuilder<'a> {
    pub(crate) fn new(registry: &'a Registry, record: Record) -> Self {
        Self {
            registry,
            record: Some(record),
        }
    }

    /// Append any printable value to the message body.
    pub fn append(mut self, value: impl fmt::Display) -> Self {
        if let Some(record) = self.record.as_mut() {
            record.append_message(value);
        }
        self
    }

    /// Emit the record now instead of at end of scope.
    pub fn finish(mut self) {
        self.emit();
    }

    fn emit(&mut self) {
        if let Some(record) = self.record.take() {
            // Delivery failures here come from the synchronous fan-out path;
            // they are reported out-of-band rather than recursed through the
            // logger itself.
            if let Err(e) = self.registry.write(Arc::new(record)) {
                eprintln!("[fanlog] record delivery failed: {}", e);
            }
        }
    }
}

impl Drop for RecordBuilder<'_> {
    fn drop(&mut self) {
        self.emit();
    }
}
