use std::io;
use std::sync::{Condvar, Mutex, MutexGuard};

use super::buffer::TeeBuffer;
use super::Destination;

/// Output-stream facade over a [`TeeBuffer`].
///
/// Implements `io::Write`, so `write!`/`writeln!` work against it and it
/// can be boxed as an `env_logger` pipe target. All mutable state sits
/// behind a single lock, so a shared `TeeStream` can take writes and
/// forced messages from several threads.
pub struct TeeStream {
    buffer: Mutex<TeeBuffer>,
    force_drained: Condvar,
}

impl TeeStream {
    /// Tees output to the two supplied destinations, timestamps disabled.
    pub fn new(
        dest1: Box<dyn io::Write + Send + 'static>,
        dest2: Box<dyn io::Write + Send + 'static>,
    ) -> Self {
        TeeStream {
            buffer: Mutex::new(TeeBuffer::new(dest1, dest2)),
            force_drained: Condvar::new(),
        }
    }

    /// Same as [`TeeStream::new`], with the initial timestamp flag set
    /// per destination.
    pub fn with_timestamps(
        dest1: Box<dyn io::Write + Send + 'static>,
        dest2: Box<dyn io::Write + Send + 'static>,
        enable1: bool,
        enable2: bool,
    ) -> Self {
        let mut buffer = TeeBuffer::new(dest1, dest2);
        buffer.set_timestamp(Destination::First, enable1);
        buffer.set_timestamp(Destination::Second, enable2);

        TeeStream {
            buffer: Mutex::new(buffer),
            force_drained: Condvar::new(),
        }
    }

    /// Takes effect at the next line start; the current line is left
    /// undecorated.
    pub fn enable_timestamp(&self, dest: Destination) {
        let Ok(mut buffer) = self.buffer.lock() else { return };
        buffer.set_timestamp(dest, true);
    }

    pub fn disable_timestamp(&self, dest: Destination) {
        let Ok(mut buffer) = self.buffer.lock() else { return };
        buffer.set_timestamp(dest, false);
    }

    /// The most recently rendered timestamp, empty before the first one.
    pub fn last_timestamp(&self) -> String {
        let Ok(buffer) = self.buffer.lock() else {
            return String::new();
        };
        buffer.last_timestamp().to_string()
    }

    /// Writes `message` as its own line to both destinations, timestamped
    /// like any other line, and returns once it has been handed to both.
    ///
    /// The message is armed in the forced-message slot and a single
    /// newline is pushed through the buffer to trigger emission; the
    /// trigger drains the slot before the lock is released.
    pub fn force_message(&self, message: &str) -> io::Result<()> {
        let mut message = message.to_string();
        message.push('\n');

        let mut buffer = self.lock()?;
        buffer.set_forced(message);
        buffer.write_byte(b'\n')?;
        self.force_drained.notify_all();

        let _buffer = self
            .force_drained
            .wait_while(buffer, |buffer| buffer.force_pending())
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;
        Ok(())
    }

    fn lock(&self) -> io::Result<MutexGuard<'_, TeeBuffer>> {
        self.buffer
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))
    }
}

impl io::Write for TeeStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut buffer = self.lock()?;
        let had_pending = buffer.force_pending();

        for &byte in buf {
            buffer.write_byte(byte)?;
        }

        if had_pending && !buffer.force_pending() {
            self.force_drained.notify_all();
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.lock()?.flush()
    }
}

impl Into<Box<dyn io::Write + Send>> for TeeStream {
    fn into(self) -> Box<dyn io::Write + Send> {
        Box::new(self)
    }
}
