//! Sink registry and record routing

use super::builder::RecordBuilder;
use super::error::Result;
use super::level::Level;
use super::record::Record;
use super::sink::Sink;
use super::writer::Writer;
use parking_lot::RwLock;
use std::sync::Arc;

/// Shared handle to the registry's sink list.
///
/// The asynchronous drain thread holds a clone of this so it always fans out
/// to the sinks currently registered, without keeping the registry alive.
pub(crate) type SinkList = Arc<RwLock<Vec<Arc<dyn Sink>>>>;

/// Routing table from sink name to sink, plus at most one override writer.
///
/// Construct one explicitly and pass it (usually as `Arc<Registry>`) to the
/// components that log; at most one instance is conceptually active per
/// process. Sink registration is a start-of-day operation: adding or removing
/// sinks is not meant to interleave with concurrent steady-state writes.
pub struct Registry {
    sinks: SinkList,
    writer: RwLock<Option<Arc<dyn Writer>>>,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            sinks: Arc::new(RwLock::new(Vec::new())),
            writer: RwLock::new(None),
        }
    }

    /// Insert a sink, or replace the existing sink with the same name.
    ///
    /// Replacement keeps the original registration position, so fan-out order
    /// is stable across reconfiguration.
    pub fn add(&self, sink: Arc<dyn Sink>) {
        let mut sinks = self.sinks.write();
        match sinks.iter_mut().find(|s| s.name() == sink.name()) {
            Some(slot) => *slot = sink,
            None => sinks.push(sink),
        }
    }

    /// Remove the sink registered under `name`, if any.
    pub fn remove(&self, name: &str) -> Option<Arc<dyn Sink>> {
        let mut sinks = self.sinks.write();
        let idx = sinks.iter().position(|s| s.name() == name)?;
        Some(sinks.remove(idx))
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Sink>> {
        self.sinks.read().iter().find(|s| s.name() == name).cloned()
    }

    /// Install a single override writer, or clear it with `None` to restore
    /// direct per-sink fan-out.
    pub fn set_writer(&self, writer: Option<Arc<dyn Writer>>) {
        *self.writer.write() = writer;
    }

    /// Set the minimum level on every registered sink.
    pub fn set_level(&self, level: Level) {
        for sink in self.sinks.read().iter() {
            sink.set_level(level);
        }
    }

    /// Route one record: to the override writer when installed, otherwise
    /// synchronously to every registered sink in registration order.
    ///
    /// Fan-out continues past a failing sink; the first error is returned
    /// after every sink has been offered the record.
    pub fn write(&self, record: Arc<Record>) -> Result<()> {
        let writer = self.writer.read().clone();
        if let Some(writer) = writer {
            writer.write(record);
            return Ok(());
        }

        let mut first_err = None;
        for sink in self.sinks.read().iter() {
            if let Err(e) = sink.write(&record) {
                first_err.get_or_insert(e);
            }
        }
        match first_err {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    pub fn flush(&self) -> Result<()> {
        for sink in self.sinks.read().iter() {
            sink.flush()?;
        }
        Ok(())
    }

    /// Start a record at a call site. Prefer the level macros, which capture
    /// the source location automatically.
    pub fn record(
        &self,
        level: Level,
        file: &'static str,
        line: u32,
        module_path: &'static str,
    ) -> RecordBuilder<'_> {
        RecordBuilder::new(self, Record::new(level, file, line, module_path))
    }

    pub(crate) fn shared_sinks(&self) -> SinkList {
        Arc::clone(&self.sinks)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
