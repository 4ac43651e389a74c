//! Logging interface used by the workflow and the submitter.
//!
//! Callers inject a [`FormLogger`] instead of reaching for a global. The
//! production implementation, [`TracingLogger`], forwards to `tracing`; debug
//! and performance lines only go out when the configured level is `debug`.

use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::config::LogLevel;

/// Leveled log sink.
pub trait FormLogger {
    fn debug(&self, message: &str);
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    /// Record how long a named operation took.
    fn performance(&self, operation: &str, duration: Duration);
}

impl<L: FormLogger + ?Sized> FormLogger for &L {
    fn debug(&self, message: &str) {
        (**self).debug(message)
    }
    fn info(&self, message: &str) {
        (**self).info(message)
    }
    fn warn(&self, message: &str) {
        (**self).warn(message)
    }
    fn error(&self, message: &str) {
        (**self).error(message)
    }
    fn performance(&self, operation: &str, duration: Duration) {
        (**self).performance(operation, duration)
    }
}

/// Forwards to the `tracing` macros.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingLogger {
    level: LogLevel,
}

impl TracingLogger {
    pub fn new(level: LogLevel) -> Self {
        Self { level }
    }

    fn verbose(&self) -> bool {
        self.level == LogLevel::Debug
    }
}

impl FormLogger for TracingLogger {
    fn debug(&self, message: &str) {
        if self.verbose() {
            tracing::debug!("{message}");
        }
    }

    fn info(&self, message: &str) {
        tracing::info!("{message}");
    }

    fn warn(&self, message: &str) {
        tracing::warn!("{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!("{message}");
    }

    fn performance(&self, operation: &str, duration: Duration) {
        if self.verbose() {
            tracing::debug!(
                operation,
                elapsed_ms = duration.as_secs_f64() * 1000.0,
                "{operation} took {:.2}ms",
                duration.as_secs_f64() * 1000.0
            );
        }
    }
}

/// Wall-clock time since `started`, clamped at zero.
pub fn elapsed_since(started: DateTime<Utc>) -> Duration {
    (Utc::now() - started).to_std().unwrap_or_default()
}

/// Discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopLogger;

impl FormLogger for NoopLogger {
    fn debug(&self, _message: &str) {}
    fn info(&self, _message: &str) {}
    fn warn(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
    fn performance(&self, _operation: &str, _duration: Duration) {}
}

#[cfg(test)]
pub(crate) use recording::RecordingLogger;

#[cfg(test)]
mod recording {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    use super::FormLogger;

    /// Keeps every line as `"<level>: <message>"` for assertions.
    #[derive(Clone, Debug, Default)]
    pub(crate) struct RecordingLogger {
        lines: Rc<RefCell<Vec<String>>>,
    }

    impl RecordingLogger {
        pub(crate) fn lines(&self) -> Vec<String> {
            self.lines.borrow().clone()
        }

        pub(crate) fn has(&self, prefix: &str) -> bool {
            self.lines.borrow().iter().any(|line| line.starts_with(prefix))
        }

        fn push(&self, level: &str, message: &str) {
            self.lines.borrow_mut().push(format!("{level}: {message}"));
        }
    }

    impl FormLogger for RecordingLogger {
        fn debug(&self, message: &str) {
            self.push("debug", message)
        }
        fn info(&self, message: &str) {
            self.push("info", message)
        }
        fn warn(&self, message: &str) {
            self.push("warn", message)
        }
        fn error(&self, message: &str) {
            self.push("error", message)
        }
        fn performance(&self, operation: &str, _duration: Duration) {
            self.push("perf", operation)
        }
    }
}
