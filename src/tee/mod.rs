pub mod buffer;
pub mod stream;
#[cfg(test)]
pub mod test_util;

pub use buffer::TeeBuffer;
pub use stream::TeeStream;

pub type Error = Box<dyn std::error::Error>;
pub type Result<T> = anyhow::Result<T, Error>;

/// Selects one of the two destinations of a tee.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Destination {
    First,
    Second,
}
