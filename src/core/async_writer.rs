//! Asynchronous record pipeline
//!
//! Producers hand records to an unbounded queue and return immediately; one
//! dedicated drain thread pops them in FIFO order and performs the same
//! per-sink fan-out the registry would have done synchronously. The queue is
//! deliberately unbounded: a record accepted by `write` is never dropped,
//! at the cost of unbounded memory growth if producers outrun the drain
//! thread for long enough (see `DeliveryStats::pending`).

use super::metrics::DeliveryStats;
use super::record::Record;
use super::registry::{Registry, SinkList};
use super::writer::Writer;
use crossbeam_channel::{unbounded, Sender};
use parking_lot::{Mutex, RwLock};
use std::sync::Arc;
use std::thread;

pub struct AsyncWriter {
    /// `None` once shutdown has begun; later writes become no-ops.
    sender: RwLock<Option<Sender<Arc<Record>>>>,
    handle: Mutex<Option<thread::JoinHandle<()>>>,
    stats: Arc<DeliveryStats>,
}

impl AsyncWriter {
    /// Start the drain thread against the given registry's sinks.
    ///
    /// The writer keeps a handle to the registry's live sink list, not to the
    /// registry itself, so records are always fanned out to the sinks
    /// registered at drain time and installing the writer on the registry
    /// creates no reference cycle.
    pub fn new(registry: &Registry) -> Arc<Self> {
        let (sender, receiver) = unbounded::<Arc<Record>>();
        let sinks: SinkList = registry.shared_sinks();
        let stats = Arc::new(DeliveryStats::new());
        let drain_stats = Arc::clone(&stats);

        let handle = thread::spawn(move || {
            // recv keeps returning queued records after the sender is
            // dropped, so closing the channel doubles as the stop signal
            // and guarantees the queue is empty when the loop exits.
            while let Ok(record) = receiver.recv() {
                for sink in sinks.read().iter() {
                    if let Err(e) = sink.write(&record) {
                        // A sink's failure must not stop delivery to the
                        // remaining sinks or crash the drain thread.
                        drain_stats.record_sink_error();
                        eprintln!("[fanlog] sink '{}' write failed: {}", sink.name(), e);
                    }
                }
                drain_stats.record_delivered();
            }

            for sink in sinks.read().iter() {
                if let Err(e) = sink.flush() {
                    eprintln!("[fanlog] sink '{}' flush failed: {}", sink.name(), e);
                }
            }
        });

        Arc::new(Self {
            sender: RwLock::new(Some(sender)),
            handle: Mutex::new(Some(handle)),
            stats,
        })
    }

    /// Stop accepting records, drain everything already queued, and join the
    /// drain thread. On return every record accepted before this call has
    /// been offered to every registered sink and all sinks are flushed.
    ///
    /// Safe to call more than once; later calls are no-ops.
    pub fn shutdown(&self) {
        let sender = self.sender.write().take();
        drop(sender);

        if let Some(handle) = self.handle.lock().take() {
            if let Err(e) = handle.join() {
                eprintln!("[fanlog] drain thread panicked during shutdown: {:?}", e);
            }
        }
    }

    pub fn stats(&self) -> &DeliveryStats {
        &self.stats
    }
}

impl Writer for AsyncWriter {
    fn write(&self, record: Arc<Record>) {
        if let Some(sender) = self.sender.read().as_ref() {
            // An unbounded send only fails once the drain thread is gone;
            // by then shutdown has already begun and the record is dropped
            // on purpose.
            if sender.send(record).is_ok() {
                self.stats.record_enqueued();
            }
        }
    }
}

impl Drop for AsyncWriter {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::level::Level;

    #[test]
    fn test_shutdown_is_idempotent() {
        let registry = Registry::new();
        let writer = AsyncWriter::new(&registry);
        writer.shutdown();
        writer.shutdown();
    }

    #[test]
    fn test_write_after_shutdown_is_noop() {
        let registry = Registry::new();
        let writer = AsyncWriter::new(&registry);
        writer.shutdown();

        let record = Record::new(Level::Info, file!(), line!(), module_path!());
        writer.write(Arc::new(record));
        assert_eq!(writer.stats().enqueued(), 0);
    }

    #[test]
    fn test_stats_balance_after_shutdown() {
        let registry = Registry::new();
        let writer = AsyncWriter::new(&registry);

        for i in 0..25 {
            let mut record = Record::new(Level::Info, file!(), line!(), module_path!());
            record.append_message(i);
            writer.write(Arc::new(record));
        }
        writer.shutdown();

        assert_eq!(writer.stats().enqueued(), 25);
        assert_eq!(writer.stats().delivered(), 25);
        assert_eq!(writer.stats().pending(), 0);
    }
}
