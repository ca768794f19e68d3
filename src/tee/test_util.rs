use std::io;
use std::sync::{Arc, Mutex};

/// In-memory sink that stays readable after the tee takes ownership of
/// its boxed clone.
#[derive(Clone, Default)]
pub struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    pub fn sink(&self) -> Box<dyn io::Write + Send> {
        Box::new(self.clone())
    }

    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Checks the `[year-month-day|hour:minute:second|elapsed] ` shape.
pub fn assert_timestamp_format(stamp: &str) {
    assert!(stamp.starts_with('['), "no opening bracket: {:?}", stamp);
    assert!(stamp.ends_with("] "), "no closing bracket: {:?}", stamp);

    let inner = &stamp[1..stamp.len() - 2];
    let fields: Vec<&str> = inner.split('|').collect();
    assert_eq!(fields.len(), 3, "bad field count: {:?}", stamp);

    let date: Vec<&str> = fields[0].split('-').collect();
    assert_eq!(date.len(), 3);
    assert_eq!(date[0].len(), 4, "year must have four digits");
    for part in &date {
        part.parse::<u32>().unwrap();
    }

    let time: Vec<&str> = fields[1].split(':').collect();
    assert_eq!(time.len(), 3);
    for part in &time {
        part.parse::<u32>().unwrap();
    }

    let elapsed = fields[2].parse::<f64>().unwrap();
    assert!(elapsed >= 0.0);
}

/// Pulls the elapsed-seconds field out of a rendered timestamp.
pub fn elapsed_of(stamp: &str) -> f64 {
    let inner = &stamp[1..stamp.len() - 2];
    inner.split('|').nth(2).unwrap().parse().unwrap()
}
