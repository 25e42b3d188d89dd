//! Common error types for hex codec operations

/// A common error type for hex codec operations.
///
/// This enum defines the set of errors that can occur when converting
/// between byte buffers and hex text. It is designed to be simple and
/// portable for `no_std` environments.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// The input held an odd number of hex digits.
    InvalidLength,
    /// A byte at the given offset was not a hex digit.
    InvalidEncoding(usize),
    /// The output buffer cannot hold the full result.
    BufferTooSmall,
}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::InvalidLength => defmt::write!(f, "InvalidLength"),
            Error::InvalidEncoding(at) => defmt::write!(f, "InvalidEncoding({})", at),
            Error::BufferTooSmall => defmt::write!(f, "BufferTooSmall"),
        }
    }
}
