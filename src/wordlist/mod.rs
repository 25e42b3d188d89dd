//! Word-list slicing, cleanup and random selection.
//!
//! A word list is a delimited text blob, one word per whitespace-separated
//! token (a mnemonic dictionary, or words pasted in by a user). This
//! module slices such blobs into fixed-capacity slots, strips formatting
//! characters from pasted input, and draws uniformly random words for
//! mnemonic generation.
//!
//! Random selection can feed key material, so it is only reachable
//! through a [`CryptoRng`] bound; a plain PRNG does not compile.
//!
//! # Usage Examples
//!
//! ```rust
//! use libvaultutil::wordlist;
//!
//! let cleaned = wordlist::strip_format_chars::<16>("ab andon\r\n").unwrap();
//! assert_eq!(cleaned.as_str(), "abandon");
//!
//! let words = wordlist::slice::<24>("zoo zebra wrap")?;
//! assert_eq!(words.len(), 3);
//! assert_eq!(words[2].as_str(), "wrap");
//! # Ok::<(), libvaultutil::wordlist::Error>(())
//! ```

use rand_core::{CryptoRng, RngCore};

pub mod error;

pub use error::Error;

/// Maximum number of characters a word slot can hold.
///
/// Longer tokens are rejected with [`Error::WordTooLong`]; the longest
/// word in the BIP-39 English list is 8 characters, so real dictionaries
/// always fit.
pub const WORD_MAX_LEN: usize = 9;

/// A single fixed-capacity word slot.
pub type Word = heapless::String<WORD_MAX_LEN>;

/// Characters stripped by [`strip_format_chars`]: space, tab, carriage
/// return, line feed.
pub const FORMAT_CHARS: [char; 4] = [' ', '\t', '\r', '\n'];

fn fill_slot(token: &str) -> Result<Word, Error> {
    let mut slot = Word::new();
    slot.push_str(token).map_err(|_| Error::WordTooLong)?;
    Ok(slot)
}

/// Splits `words` on whitespace into up to `N` fixed-capacity slots.
///
/// Returns the extracted words; the vector length is the number of words
/// actually found, which is less than `N` when the input runs out first.
/// Tokens beyond the first `N` are ignored.
///
/// # Errors
///
/// Returns [`Error::WordTooLong`] if any extracted token exceeds
/// [`WORD_MAX_LEN`]. The whole call fails; nothing is ever truncated.
pub fn slice<const N: usize>(words: &str) -> Result<heapless::Vec<Word, N>, Error> {
    let mut out = heapless::Vec::new();
    for token in words.split_whitespace() {
        if out.is_full() {
            break;
        }
        out.push(fill_slot(token)?).map_err(|_| Error::BufferTooSmall)?;
    }
    Ok(out)
}

/// Returns `s` with all formatting characters removed.
///
/// Exactly the characters in [`FORMAT_CHARS`] are stripped; everything
/// else, including other Unicode whitespace, is kept as-is.
///
/// # Errors
///
/// Returns [`Error::BufferTooSmall`] if the cleaned text exceeds the
/// capacity `N`.
pub fn strip_format_chars<const N: usize>(s: &str) -> Result<heapless::String<N>, Error> {
    let mut out = heapless::String::new();
    for c in s.chars() {
        if FORMAT_CHARS.contains(&c) {
            continue;
        }
        out.push(c).map_err(|_| Error::BufferTooSmall)?;
    }
    Ok(out)
}

/// Draws `count` uniformly random words from `words`, with replacement.
///
/// Each draw is independent and every token in `words` is equiprobable;
/// index selection uses rejection sampling, so there is no modulo bias.
/// The generator must be cryptographically secure because selections can
/// become mnemonic material.
///
/// # Errors
///
/// - [`Error::EmptyWordList`] if `words` holds no tokens.
/// - [`Error::WordTooLong`] if any token in the vocabulary exceeds
///   [`WORD_MAX_LEN`]; the vocabulary is validated before anything is
///   drawn, so failure does not depend on the generator.
/// - [`Error::BufferTooSmall`] if `count > N`.
pub fn pick_random<R, const N: usize>(
    rng: &mut R,
    words: &str,
    count: usize,
) -> Result<heapless::Vec<Word, N>, Error>
where
    R: RngCore + CryptoRng,
{
    if count > N {
        return Err(Error::BufferTooSmall);
    }
    let mut vocab_len: u32 = 0;
    for token in words.split_whitespace() {
        if token.len() > WORD_MAX_LEN {
            return Err(Error::WordTooLong);
        }
        vocab_len += 1;
    }
    if vocab_len == 0 {
        return Err(Error::EmptyWordList);
    }
    let mut out = heapless::Vec::new();
    for _ in 0..count {
        let idx = uniform_index(rng, vocab_len) as usize;
        let token = words
            .split_whitespace()
            .nth(idx)
            .ok_or(Error::EmptyWordList)?;
        out.push(fill_slot(token)?).map_err(|_| Error::BufferTooSmall)?;
    }
    Ok(out)
}

// Uniform in [0, n) via fixed-width buckets; values past the last full
// bucket are redrawn.
fn uniform_index<R: RngCore>(rng: &mut R, n: u32) -> u32 {
    if n == 1 {
        return 0;
    }
    let bucket = u32::MAX / n;
    let cap = bucket * n;
    loop {
        let v = rng.next_u32();
        if v < cap {
            return v / bucket;
        }
    }
}
