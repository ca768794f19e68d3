use std::io;
use std::time::Instant;

use super::Destination;

/// Timestamps are left-justified into this many output columns, so the
/// text after them lines up from one line to the next.
const TIMESTAMP_WIDTH: usize = 32;

/// Character fan-out engine.
///
/// Every byte written is forwarded, unbuffered, to both destinations.
/// When a new line begins, the buffer can decorate it with a timestamp
/// (per destination) and drain a pending forced message before the
/// triggering byte is emitted.
pub struct TeeBuffer {
    dest1: Box<dyn io::Write + Send + 'static>,
    dest2: Box<dyn io::Write + Send + 'static>,
    timestamp1: bool,
    timestamp2: bool,
    last_timestamp: String,
    forced: Option<String>,
    line_start: bool,
    clock_origin: Option<Instant>,
}

impl TeeBuffer {
    pub fn new(
        dest1: Box<dyn io::Write + Send + 'static>,
        dest2: Box<dyn io::Write + Send + 'static>,
    ) -> Self {
        TeeBuffer {
            dest1,
            dest2,
            timestamp1: false,
            timestamp2: false,
            last_timestamp: String::new(),
            forced: None,
            line_start: true,
            clock_origin: None,
        }
    }

    pub fn set_timestamp(&mut self, dest: Destination, enabled: bool) {
        match dest {
            Destination::First => self.timestamp1 = enabled,
            Destination::Second => self.timestamp2 = enabled,
        }
    }

    /// The most recently rendered timestamp, empty before the first one.
    pub fn last_timestamp(&self) -> &str {
        &self.last_timestamp
    }

    /// Arms the single forced-message slot. A previously pending message
    /// is overwritten.
    pub fn set_forced(&mut self, message: String) {
        self.forced = Some(message);
    }

    pub fn force_pending(&self) -> bool {
        self.forced.is_some()
    }

    /// Forwards one byte to both destinations, decorating the start of a
    /// new line with a timestamp and/or a pending forced message.
    pub fn write_byte(&mut self, byte: u8) -> io::Result<()> {
        let mut byte = byte;

        if self.forced.is_some() {
            // The forced message must start on its own line.
            self.fan_out(b"\n")?;
            self.line_start = true;
        }

        if self.line_start {
            if self.timestamp1 || self.timestamp2 {
                let stamp = self.render_timestamp();
                let padded = format!("{:<width$}", stamp, width = TIMESTAMP_WIDTH);

                if self.timestamp1 {
                    self.dest1.write_all(padded.as_bytes())?;
                }
                if self.timestamp2 {
                    self.dest2.write_all(padded.as_bytes())?;
                }
            }

            if let Some(message) = self.forced.take() {
                self.fan_out(message.as_bytes())?;
                // The triggering byte becomes the line terminator of the
                // forced line.
                byte = b'\n';
            }
        }

        self.line_start = byte == b'\n';

        let result1 = self.dest1.write_all(&[byte]);
        let result2 = self.dest2.write_all(&[byte]);
        result1.and(result2)
    }

    fn fan_out(&mut self, bytes: &[u8]) -> io::Result<()> {
        let result1 = self.dest1.write_all(bytes);
        let result2 = self.dest2.write_all(bytes);
        result1.and(result2)
    }

    // The clock starts on the first timestamp rendered, so the elapsed
    // field counts from the first decorated line of the run.
    fn render_timestamp(&mut self) -> String {
        let origin = *self.clock_origin.get_or_insert_with(Instant::now);
        let elapsed = origin.elapsed().as_secs_f64();

        let now = chrono::Local::now();
        let stamp = format!(
            "[{}|{:.6}] ",
            now.format("%Y-%-m-%-d|%-H:%-M:%-S"),
            elapsed
        );

        self.last_timestamp = stamp.clone();
        stamp
    }
}

impl io::Write for TeeBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        for &byte in buf {
            self.write_byte(byte)?;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        let result1 = self.dest1.flush();
        let result2 = self.dest2.flush();
        result1.and(result2)
    }
}
