//! Logging macros for ergonomic call sites.
//!
//! Each level macro captures the source file, line, and module path
//! automatically and formats its arguments like `println!`.
//!
//! # Examples
//!
//! ```
//! use fanlog::prelude::*;
//! use fanlog::info;
//!
//! let registry = Registry::new();
//!
//! // Basic logging
//! info!(registry, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(registry, "Server listening on port {}", port);
//! ```

/// Log a message at an explicit level with automatic source capture.
///
/// # Examples
///
/// ```
/// # use fanlog::prelude::*;
/// # let registry = Registry::new();
/// use fanlog::log_at;
/// log_at!(registry, Level::Info, "Simple message");
/// log_at!(registry, Level::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log_at {
    ($registry:expr, $level:expr, $($arg:tt)+) => {
        $registry
            .record($level, file!(), line!(), module_path!())
            .append(format_args!($($arg)+))
            .finish()
    };
}

/// Log a trace-level message.
#[macro_export]
macro_rules! trace {
    ($registry:expr, $($arg:tt)+) => {
        $crate::log_at!($registry, $crate::Level::Trace, $($arg)+)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($registry:expr, $($arg:tt)+) => {
        $crate::log_at!($registry, $crate::Level::Debug, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use fanlog::prelude::*;
/// # let registry = Registry::new();
/// use fanlog::info;
/// info!(registry, "Application started");
/// info!(registry, "Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($registry:expr, $($arg:tt)+) => {
        $crate::log_at!($registry, $crate::Level::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($registry:expr, $($arg:tt)+) => {
        $crate::log_at!($registry, $crate::Level::Warn, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($registry:expr, $($arg:tt)+) => {
        $crate::log_at!($registry, $crate::Level::Error, $($arg)+)
    };
}

/// Log a fatal-level message.
#[macro_export]
macro_rules! fatal {
    ($registry:expr, $($arg:tt)+) => {
        $crate::log_at!($registry, $crate::Level::Fatal, $($arg)+)
    };
}
