//! Leveled logging macros for the global logger and for explicit `Logger` instances.
//!
//! ```rust
//! use rustylog::{log_info, logger_warn, Logger, SharedBuffer};
//!
//! log_info!("listening on port {}", 8080);
//!
//! let out = SharedBuffer::new();
//! let logger = Logger::with_sink(out.clone());
//! logger.enable_timestamp(false);
//! logger_warn!(logger, "retry {} of {}", 1, 3);
//! assert_eq!(out.contents(), "[WARN] retry 1 of 3\n");
//! ```
//!
//! Every argument goes through [`LogArg::from`](crate::LogArg), so anything with a
//! `From` impl can be passed directly; wrap other `Display` types in
//! [`LogArg::display`](crate::LogArg::display). Write errors from the sink are
//! discarded; call [`Logger::log`](crate::Logger::log) to observe them.
//!
//! # Feature Flags
//! specific log levels are controlled by cargo features:
//! `log-trace`, `log-debug`, `log-info`, `log-warn`, `log-error`, `log-fatal`.
//!
//! If a feature is disabled, the corresponding macros expand to `()`, removing
//! all formatting and allocation overhead at compile time.

// ============================================================================
// 1. GENERIC INTERNAL MACROS (The "Workers")
// ============================================================================
// These remain available so the enabled macros below can use them.
// They are not feature-gated.

#[macro_export]
macro_rules! logger_log {
    ($logger:expr, $lvl:expr, $fmt:expr $(, $arg:expr)* $(,)?) => {{
        let __logger = &$logger;
        let __lvl = $lvl;
        // Skip argument conversion entirely when the record would be filtered.
        if __logger.enabled(__lvl) {
            let _ = __logger.log(__lvl, $fmt, &[$($crate::LogArg::from($arg)),*]);
        }
    }};
}

#[macro_export]
macro_rules! global_log {
    ($lvl:expr, $fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::logger_log!($crate::Logger::global(), $lvl, $fmt $(, $arg)*)
    };
}

/// Emits through the global logger at a level chosen at runtime.
#[macro_export]
macro_rules! log {
    ($lvl:expr, $($arg:tt)*) => {
        $crate::global_log!($lvl, $($arg)*)
    };
}

// ============================================================================
// 2. LEVEL-SPECIFIC MACROS (Feature Gated)
// ============================================================================

// ---------------------- TRACE ----------------------
#[cfg(feature = "log-trace")]
#[macro_export]
macro_rules! log_trace    { ($($arg:tt)*)                => { $crate::global_log!($crate::LogLevel::Trace, $($arg)*) } }
#[cfg(feature = "log-trace")]
#[macro_export]
macro_rules! logger_trace { ($logger:expr, $($arg:tt)*) => { $crate::logger_log!($logger, $crate::LogLevel::Trace, $($arg)*) } }

#[cfg(not(feature = "log-trace"))]
#[macro_export]
macro_rules! log_trace {
    ($($arg:tt)*) => {
        ()
    };
}
#[cfg(not(feature = "log-trace"))]
#[macro_export]
macro_rules! logger_trace {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- DEBUG ----------------------
#[cfg(feature = "log-debug")]
#[macro_export]
macro_rules! log_debug    { ($($arg:tt)*)                => { $crate::global_log!($crate::LogLevel::Debug, $($arg)*) } }
#[cfg(feature = "log-debug")]
#[macro_export]
macro_rules! logger_debug { ($logger:expr, $($arg:tt)*) => { $crate::logger_log!($logger, $crate::LogLevel::Debug, $($arg)*) } }

#[cfg(not(feature = "log-debug"))]
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        ()
    };
}
#[cfg(not(feature = "log-debug"))]
#[macro_export]
macro_rules! logger_debug {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- INFO ----------------------
#[cfg(feature = "log-info")]
#[macro_export]
macro_rules! log_info    { ($($arg:tt)*)                => { $crate::global_log!($crate::LogLevel::Info, $($arg)*) } }
#[cfg(feature = "log-info")]
#[macro_export]
macro_rules! logger_info { ($logger:expr, $($arg:tt)*) => { $crate::logger_log!($logger, $crate::LogLevel::Info, $($arg)*) } }

#[cfg(not(feature = "log-info"))]
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        ()
    };
}
#[cfg(not(feature = "log-info"))]
#[macro_export]
macro_rules! logger_info {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- WARN ----------------------
#[cfg(feature = "log-warn")]
#[macro_export]
macro_rules! log_warn    { ($($arg:tt)*)                => { $crate::global_log!($crate::LogLevel::Warn, $($arg)*) } }
#[cfg(feature = "log-warn")]
#[macro_export]
macro_rules! logger_warn { ($logger:expr, $($arg:tt)*) => { $crate::logger_log!($logger, $crate::LogLevel::Warn, $($arg)*) } }

#[cfg(not(feature = "log-warn"))]
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        ()
    };
}
#[cfg(not(feature = "log-warn"))]
#[macro_export]
macro_rules! logger_warn {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- ERROR ----------------------
// Generally always enabled, but consistent structure allows user to disable if really needed.
#[cfg(feature = "log-error")]
#[macro_export]
macro_rules! log_error    { ($($arg:tt)*)                => { $crate::global_log!($crate::LogLevel::Error, $($arg)*) } }
#[cfg(feature = "log-error")]
#[macro_export]
macro_rules! logger_error { ($logger:expr, $($arg:tt)*) => { $crate::logger_log!($logger, $crate::LogLevel::Error, $($arg)*) } }

#[cfg(not(feature = "log-error"))]
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        ()
    };
}
#[cfg(not(feature = "log-error"))]
#[macro_export]
macro_rules! logger_error {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- FATAL ----------------------
#[cfg(feature = "log-fatal")]
#[macro_export]
macro_rules! log_fatal    { ($($arg:tt)*)                => { $crate::global_log!($crate::LogLevel::Fatal, $($arg)*) } }
#[cfg(feature = "log-fatal")]
#[macro_export]
macro_rules! logger_fatal { ($logger:expr, $($arg:tt)*) => { $crate::logger_log!($logger, $crate::LogLevel::Fatal, $($arg)*) } }

#[cfg(not(feature = "log-fatal"))]
#[macro_export]
macro_rules! log_fatal {
    ($($arg:tt)*) => {
        ()
    };
}
#[cfg(not(feature = "log-fatal"))]
#[macro_export]
macro_rules! logger_fatal {
    ($($arg:tt)*) => {
        ()
    };
}
