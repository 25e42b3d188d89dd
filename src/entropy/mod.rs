//! Pattern and randomness checks over byte buffers.
//!
//! These predicates vet buffers before the firmware interprets them:
//! erased flash reads back as all `0xFF`, blank RAM as all `0x00`, and
//! candidate seed material has to look at least superficially random
//! before it is accepted. None of the functions mutate their input or
//! hold state between calls.
//!
//! The randomness check is a fixed heuristic, not an entropy estimator;
//! see [`check_entropy`] for the exact rules it applies.

/// Returns `true` if every byte in `buf` is `0x00`.
///
/// An empty buffer is vacuously all-zero.
pub fn all_zero(buf: &[u8]) -> bool {
    buf.iter().all(|&b| b == 0x00)
}

/// Returns `true` if every byte in `buf` is `0xFF`.
///
/// An empty buffer is vacuously all-`0xFF`.
pub fn all_ff(buf: &[u8]) -> bool {
    buf.iter().all(|&b| b == 0xFF)
}

/// Returns `true` if `buf` passes a fixed randomness heuristic.
///
/// The heuristic rejects trivially patterned buffers, nothing more. A
/// buffer passes iff all of the following hold:
///
/// 1. it is non-empty;
/// 2. not every byte equals the first byte (this covers all-zero,
///    all-`0xFF` and any other constant fill);
/// 3. for buffers of 8 bytes or more, at least `len / 4` distinct byte
///    values occur, with the floor capped at 128.
///
/// Rule 3 rejects short repeating fills such as `55 AA 55 AA ...` that
/// rule 2 misses. A genuinely random 32-byte seed produces around 28
/// distinct values, so the `len / 4` floor fails it with negligible
/// probability. The cap at 128 keeps the floor well under the
/// distinct-value plateau of uniform random data, which approaches 256
/// from below as the buffer grows, so large random buffers still pass.
pub fn check_entropy(buf: &[u8]) -> bool {
    let Some(&first) = buf.first() else {
        return false;
    };
    if buf.iter().all(|&b| b == first) {
        return false;
    }
    if buf.len() < 8 {
        return true;
    }
    let mut seen = [false; 256];
    let mut distinct = 0usize;
    for &b in buf {
        if !seen[b as usize] {
            seen[b as usize] = true;
            distinct += 1;
        }
    }
    distinct >= (buf.len() / 4).min(128)
}
