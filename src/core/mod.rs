//! Core logging types and traits

pub mod async_writer;
pub mod builder;
pub mod error;
pub mod level;
pub mod metrics;
pub mod record;
pub mod registry;
pub mod sink;
pub mod writer;

pub use async_writer::AsyncWriter;
pub use builder::RecordBuilder;
pub use error::{LogError, Result};
pub use level::Level;
pub use metrics::DeliveryStats;
pub use record::{Record, DEFAULT_TIME_FORMAT};
pub use registry::Registry;
pub use sink::Sink;
pub use writer::Writer;
