//! Event and log callback system.
//!
//! Hosts install a sink once; the engine and trigger controller report state
//! transitions through it. Nothing is emitted while no callback is set.

use std::sync::{Arc, Mutex, OnceLock};

/// Log level for debug callbacks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

/// Event names emitted by the animation core.
pub mod names {
    /// A scramble run began.
    pub const START: &str = "decrypt.start";
    /// A run completed on its own and the literal text is shown.
    pub const SETTLE: &str = "decrypt.settle";
    /// A run was cancelled (stop, reconfiguration, teardown).
    pub const STOP: &str = "decrypt.stop";
    /// The once-only visibility latch fired.
    pub const LATCH: &str = "decrypt.latch";
}

type EventCallback = Arc<dyn Fn(&str, &str) + Send + Sync + 'static>;
type LogCallback = Arc<dyn Fn(LogLevel, &str) + Send + Sync + 'static>;

fn event_callback() -> &'static Mutex<Option<EventCallback>> {
    static CALLBACK: OnceLock<Mutex<Option<EventCallback>>> = OnceLock::new();
    CALLBACK.get_or_init(|| Mutex::new(None))
}

fn log_callback() -> &'static Mutex<Option<LogCallback>> {
    static CALLBACK: OnceLock<Mutex<Option<LogCallback>>> = OnceLock::new();
    CALLBACK.get_or_init(|| Mutex::new(None))
}

/// Set the global event callback.
pub fn set_event_callback<F>(callback: F)
where
    F: Fn(&str, &str) + Send + Sync + 'static,
{
    if let Ok(mut guard) = event_callback().lock() {
        *guard = Some(Arc::new(callback));
    }
}

/// Remove the global event callback.
pub fn clear_event_callback() {
    if let Ok(mut guard) = event_callback().lock() {
        *guard = None;
    }
}

/// Emit an event to the registered callback.
///
/// The callback runs without the registry lock held, so it may emit or
/// replace callbacks itself.
pub fn emit_event(name: &str, data: &str) {
    let callback = event_callback()
        .lock()
        .ok()
        .and_then(|guard| guard.as_ref().map(Arc::clone));
    if let Some(callback) = callback {
        callback(name, data);
    }
}

/// Set the global log callback.
pub fn set_log_callback<F>(callback: F)
where
    F: Fn(LogLevel, &str) + Send + Sync + 'static,
{
    if let Ok(mut guard) = log_callback().lock() {
        *guard = Some(Arc::new(callback));
    }
}

/// Remove the global log callback.
pub fn clear_log_callback() {
    if let Ok(mut guard) = log_callback().lock() {
        *guard = None;
    }
}

/// Emit a log event. Like [`emit_event`], the callback runs unlocked.
pub fn emit_log(level: LogLevel, message: &str) {
    let callback = log_callback()
        .lock()
        .ok()
        .and_then(|guard| guard.as_ref().map(Arc::clone));
    if let Some(callback) = callback {
        callback(level, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    // Both callbacks are process-wide, so a single test exercises them to
    // avoid cross-test interference.
    #[test]
    fn test_callbacks_roundtrip() {
        let events = Arc::new(AtomicUsize::new(0));
        let events_clone = Arc::clone(&events);
        set_event_callback(move |name, _data| {
            if name == "test.event" {
                events_clone.fetch_add(1, Ordering::SeqCst);
            }
        });
        emit_event("test.event", "{}");
        emit_event("other", "{}");
        assert_eq!(events.load(Ordering::SeqCst), 1);
        clear_event_callback();
        emit_event("test.event", "{}");
        assert_eq!(events.load(Ordering::SeqCst), 1);

        let logs = Arc::new(AtomicUsize::new(0));
        let logs_clone = Arc::clone(&logs);
        set_log_callback(move |level, msg| {
            if level == LogLevel::Info && msg == "hello" {
                logs_clone.fetch_add(1, Ordering::SeqCst);
            }
        });
        emit_log(LogLevel::Info, "hello");
        clear_log_callback();
        emit_log(LogLevel::Info, "hello");
        assert_eq!(logs.load(Ordering::SeqCst), 1);

        // A callback that emits from inside itself must not deadlock.
        let nested = Arc::new(AtomicUsize::new(0));
        let nested_clone = Arc::clone(&nested);
        set_event_callback(move |name, _data| {
            if name == "test.outer" {
                emit_log(LogLevel::Debug, "forwarded");
                emit_event("test.inner", "{}");
            } else if name == "test.inner" {
                nested_clone.fetch_add(1, Ordering::SeqCst);
            }
        });
        let forwarded = Arc::new(AtomicUsize::new(0));
        let forwarded_clone = Arc::clone(&forwarded);
        set_log_callback(move |_level, msg| {
            if msg == "forwarded" {
                forwarded_clone.fetch_add(1, Ordering::SeqCst);
                emit_log(LogLevel::Debug, "second hop");
            }
        });
        emit_event("test.outer", "{}");
        clear_event_callback();
        clear_log_callback();
        assert_eq!(nested.load(Ordering::SeqCst), 1);
        assert_eq!(forwarded.load(Ordering::SeqCst), 1);
    }
}
