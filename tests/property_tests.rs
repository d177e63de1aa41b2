//! Property-based tests for fanlog using proptest

use fanlog::prelude::*;
use parking_lot::{Mutex, RwLock};
use proptest::prelude::*;
use std::sync::Arc;

fn any_level() -> impl Strategy<Value = Level> {
    prop_oneof![
        Just(Level::Trace),
        Just(Level::Debug),
        Just(Level::Info),
        Just(Level::Warn),
        Just(Level::Error),
        Just(Level::Fatal),
    ]
}

// ============================================================================
// Level Tests
// ============================================================================

proptest! {
    /// Level string conversions roundtrip correctly
    #[test]
    fn test_level_str_roundtrip(level in any_level()) {
        let as_str = level.as_str();
        let parsed: Level = as_str.parse().unwrap();
        prop_assert_eq!(level, parsed);
    }

    /// Level ordering is consistent with the numeric discriminants
    #[test]
    fn test_level_ordering(level1 in any_level(), level2 in any_level()) {
        let val1 = level1 as u8;
        let val2 = level2 as u8;

        prop_assert_eq!(level1 <= level2, val1 <= val2);
        prop_assert_eq!(level1 < level2, val1 < val2);
        prop_assert_eq!(level1 >= level2, val1 >= val2);
        prop_assert_eq!(level1 > level2, val1 > val2);
    }

    /// Display matches as_str
    #[test]
    fn test_level_display(level in any_level()) {
        prop_assert_eq!(format!("{}", level), level.as_str());
    }
}

// ============================================================================
// Record Rendering Tests
// ============================================================================

struct MemorySink {
    level: RwLock<Level>,
    messages: Mutex<Vec<String>>,
}

impl MemorySink {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            level: RwLock::new(Level::Trace),
            messages: Mutex::new(Vec::new()),
        })
    }
}

impl Sink for MemorySink {
    fn name(&self) -> &str {
        "memory"
    }
    fn level(&self) -> Level {
        *self.level.read()
    }
    fn set_level(&self, level: Level) {
        *self.level.write() = level;
    }
    fn time_format(&self) -> String {
        DEFAULT_TIME_FORMAT.to_string()
    }
    fn set_time_format(&self, _format: &str) {}
    fn write(&self, record: &Record) -> Result<()> {
        if record.level < *self.level.read() {
            return Ok(());
        }
        self.messages.lock().push(record.message.clone());
        Ok(())
    }
    fn flush(&self) -> Result<()> {
        Ok(())
    }
}

proptest! {
    /// Any appended message renders as a single line (injection hardening)
    #[test]
    fn test_message_stays_single_line(message in ".*") {
        let registry = Registry::new();
        let sink = MemorySink::new();
        registry.add(sink.clone());

        registry
            .record(Level::Info, file!(), line!(), module_path!())
            .append(&message)
            .finish();

        let messages = sink.messages.lock();
        prop_assert_eq!(messages.len(), 1);
        prop_assert!(!messages[0].contains('\n'), "unsanitized newline in {:?}", messages[0]);
        prop_assert!(!messages[0].contains('\r'));
    }

    /// A sink observes exactly the records at or above its minimum level
    #[test]
    fn test_filtering_matches_threshold(
        min in any_level(),
        levels in prop::collection::vec(any_level(), 0..64),
    ) {
        let registry = Registry::new();
        let sink = MemorySink::new();
        sink.set_level(min);
        registry.add(sink.clone());

        for level in &levels {
            registry
                .record(*level, file!(), line!(), module_path!())
                .append(level.as_str())
                .finish();
        }

        let expected = levels.iter().filter(|l| **l >= min).count();
        prop_assert_eq!(sink.messages.lock().len(), expected);
    }

    /// Synchronous fan-out preserves emission order for any message sequence
    #[test]
    fn test_fan_out_preserves_order(messages in prop::collection::vec("[a-z0-9]{0,16}", 0..32)) {
        let registry = Registry::new();
        let sink = MemorySink::new();
        registry.add(sink.clone());

        for message in &messages {
            registry
                .record(Level::Info, file!(), line!(), module_path!())
                .append(message)
                .finish();
        }

        prop_assert_eq!(sink.messages.lock().clone(), messages);
    }
}
