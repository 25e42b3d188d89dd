//! Hex codec for byte buffers.
//!
//! This module converts between raw byte buffers and their textual hex
//! representation without allocating. Both directions validate every
//! length and capacity up front, so a call either completes in full or
//! fails with a typed [`Error`] before touching the output buffer.
//!
//! # Conventions
//!
//! - Decoding accepts upper- and lower-case digits.
//! - Encoding emits lower-case digits, two characters per byte.
//! - An empty input is valid in both directions and produces empty output.
//!
//! # Usage Examples
//!
//! ```rust
//! use libvaultutil::hex;
//!
//! let mut seed = [0u8; 2];
//! assert_eq!(hex::decode("Ff00", &mut seed), Ok(2));
//! assert_eq!(seed, [0xFF, 0x00]);
//!
//! let text = hex::encode_string::<4>(&seed).unwrap();
//! assert_eq!(text.as_str(), "ff00");
//! ```

pub mod error;

pub use error::Error;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

fn nibble(digit: u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'a'..=b'f' => Some(digit - b'a' + 10),
        b'A'..=b'F' => Some(digit - b'A' + 10),
        _ => None,
    }
}

/// Parses a hex string into `dst` and returns the number of bytes written.
///
/// `src` must hold an even number of hex digits; each pair becomes one
/// output byte. The output length is always `src.len() / 2`.
///
/// # Errors
///
/// - [`Error::InvalidLength`] if `src` holds an odd number of characters.
/// - [`Error::InvalidEncoding`] with the offending offset if any character
///   is not a hex digit.
/// - [`Error::BufferTooSmall`] if `dst` is shorter than `src.len() / 2`.
///
/// No bytes are written unless the whole input validates.
pub fn decode(src: &str, dst: &mut [u8]) -> Result<usize, Error> {
    let digits = src.as_bytes();
    if digits.len() % 2 != 0 {
        return Err(Error::InvalidLength);
    }
    let out_len = digits.len() / 2;
    if dst.len() < out_len {
        return Err(Error::BufferTooSmall);
    }
    if let Some(at) = digits.iter().position(|&d| nibble(d).is_none()) {
        return Err(Error::InvalidEncoding(at));
    }
    for (i, pair) in digits.chunks_exact(2).enumerate() {
        // every digit validated above
        let hi = nibble(pair[0]).unwrap_or(0);
        let lo = nibble(pair[1]).unwrap_or(0);
        dst[i] = (hi << 4) | lo;
    }
    Ok(out_len)
}

/// Encodes `src` as lower-case hex into `dst` and returns the number of
/// characters written, always `2 * src.len()`.
///
/// # Errors
///
/// Returns [`Error::BufferTooSmall`] if `dst` is shorter than
/// `2 * src.len()`; in that case `dst` is left untouched.
pub fn encode(src: &[u8], dst: &mut [u8]) -> Result<usize, Error> {
    let out_len = src.len() * 2;
    if dst.len() < out_len {
        return Err(Error::BufferTooSmall);
    }
    for (i, byte) in src.iter().enumerate() {
        dst[2 * i] = HEX_DIGITS[(byte >> 4) as usize];
        dst[2 * i + 1] = HEX_DIGITS[(byte & 0x0F) as usize];
    }
    Ok(out_len)
}

/// Encodes `src` as lower-case hex into an owned fixed-capacity string.
///
/// # Errors
///
/// Returns [`Error::BufferTooSmall`] if the capacity `N` is less than
/// `2 * src.len()`.
pub fn encode_string<const N: usize>(src: &[u8]) -> Result<heapless::String<N>, Error> {
    if N < src.len() * 2 {
        return Err(Error::BufferTooSmall);
    }
    let mut out = heapless::String::new();
    for byte in src {
        out.push(HEX_DIGITS[(byte >> 4) as usize] as char)
            .map_err(|_| Error::BufferTooSmall)?;
        out.push(HEX_DIGITS[(byte & 0x0F) as usize] as char)
            .map_err(|_| Error::BufferTooSmall)?;
    }
    Ok(out)
}
