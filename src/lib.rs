//! # Fanlog
//!
//! In-process logging with named sinks and an asynchronous drain pipeline.
//!
//! Call sites emit leveled, timestamped records through short-lived builders;
//! a [`Registry`] fans each record out to its registered sinks (console,
//! file), or to a single override [`Writer`]. Installing an [`AsyncWriter`]
//! as the override moves all sink I/O onto one dedicated drain thread:
//! producers only pay for an enqueue, records are delivered in enqueue order,
//! and `shutdown()` drains everything still queued before returning.
//!
//! ```no_run
//! use fanlog::prelude::*;
//! use fanlog::info;
//! use std::sync::Arc;
//!
//! let registry = Arc::new(Registry::new());
//! registry.add(Arc::new(ConsoleSink::new("console")));
//! registry.add(Arc::new(FileSink::new("file", "app.log").with_level(Level::Warn)));
//!
//! let writer = AsyncWriter::new(&registry);
//! registry.set_writer(Some(writer.clone()));
//!
//! info!(registry, "listening on port {}", 8080);
//!
//! writer.shutdown();
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        AsyncWriter, DeliveryStats, Level, LogError, Record, RecordBuilder, Registry, Result,
        Sink, Writer, DEFAULT_TIME_FORMAT,
    };
    pub use crate::sinks::{ConsoleSink, FileSink};
}

pub use crate::core::{
    AsyncWriter, DeliveryStats, Level, LogError, Record, RecordBuilder, Registry, Result, Sink,
    Writer, DEFAULT_TIME_FORMAT,
};
pub use crate::sinks::{ConsoleSink, FileSink};
