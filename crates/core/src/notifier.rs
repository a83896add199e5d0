//! Alert delivery.
//!
//! [`AlertNotifier`] is the single-message send interface the checker pushes alerts through.
//! [`ConsoleNotifier`] writes each message as one line to stdout (or any writer).

use crate::{VitalsError, VitalsResult};
use std::io::Write;
use std::sync::Mutex;

/// Delivers free-text alert messages.
pub trait AlertNotifier: Send + Sync {
    /// Delivers `message`.
    ///
    /// # Errors
    ///
    /// Returns [`VitalsError::NotifierDelivery`] if the message could not be delivered.
    fn send(&self, message: &str) -> VitalsResult<()>;
}

/// Writes alerts line by line to a writer, stdout by default.
pub struct ConsoleNotifier {
    out: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self::with_writer(std::io::stdout())
    }

    pub fn with_writer(writer: impl Write + Send + 'static) -> Self {
        Self {
            out: Mutex::new(Box::new(writer)),
        }
    }
}

impl Default for ConsoleNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ConsoleNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsoleNotifier").finish_non_exhaustive()
    }
}

impl AlertNotifier for ConsoleNotifier {
    fn send(&self, message: &str) -> VitalsResult<()> {
        let mut out = self
            .out
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        writeln!(out, "{message}")
            .and_then(|()| out.flush())
            .map_err(|e| VitalsError::NotifierDelivery(e.to_string()))?;

        tracing::info!("alert sent to console: {}", message);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn writes_one_line_per_message() {
        let buffer = SharedBuffer::default();
        let notifier = ConsoleNotifier::with_writer(buffer.clone());

        notifier.send("first").unwrap();
        notifier.send("second").unwrap();

        let written = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
        assert_eq!(written, "first\nsecond\n");
    }

    #[test]
    fn write_failure_is_a_delivery_error() {
        let notifier = ConsoleNotifier::with_writer(BrokenPipe);

        let err = notifier.send("lost").expect_err("write should fail");
        assert!(matches!(err, VitalsError::NotifierDelivery(ref msg) if msg.contains("pipe closed")));
    }
}
