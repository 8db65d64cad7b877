//! Optional structured logging.
//!
//! With the `tracing` feature enabled, `trace_event!` forwards to the matching
//! `tracing` macro. Without it the arguments are never evaluated.

macro_rules! trace_event {
    ($level:ident, $($arg:tt)+) => {{
        #[cfg(feature = "tracing")]
        {
            ::tracing::$level!($($arg)+);
        }
    }};
}

pub(crate) use trace_event;
