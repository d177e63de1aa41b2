//! Sink trait for record destinations
//!
//! A sink owns its own minimum level and time format, so filtering happens
//! at the destination rather than at the routing layer. Implementations use
//! interior mutability: the registry shares sinks as `Arc<dyn Sink>` and the
//! drain thread is the only writer during steady-state async logging.

use super::{error::Result, level::Level, record::Record};

pub trait Sink: Send + Sync {
    /// Unique key under which this sink is registered.
    fn name(&self) -> &str;

    fn level(&self) -> Level;

    fn set_level(&self, level: Level);

    fn time_format(&self) -> String;

    fn set_time_format(&self, format: &str);

    /// Render and write one record, or discard it without I/O when its level
    /// is below this sink's minimum.
    fn write(&self, record: &Record) -> Result<()>;

    fn flush(&self) -> Result<()>;
}
