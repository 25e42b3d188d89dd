//! Common error types for word-list operations

/// A common error type for word-list operations.
///
/// This enum defines the set of errors that can occur when slicing,
/// cleaning or sampling word lists. It is designed to be simple and
/// portable for `no_std` environments.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// A token is longer than a word slot can hold.
    ///
    /// Over-long words are always rejected, never truncated.
    WordTooLong,
    /// The word list held no tokens at all.
    EmptyWordList,
    /// The output cannot hold the requested number of words.
    BufferTooSmall,
}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::WordTooLong => defmt::write!(f, "WordTooLong"),
            Error::EmptyWordList => defmt::write!(f, "EmptyWordList"),
            Error::BufferTooSmall => defmt::write!(f, "BufferTooSmall"),
        }
    }
}
