//! Loggable values for statistics loggers

/// A value that can be logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Loggable {
    /// A sample from a distrbution over 0 .. (size-1)
    IndexSample { value: usize, size: usize },
}
