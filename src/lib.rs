//! # libvaultutil - wallet firmware utilities
//!
//! A small Rust library of byte, hex and word-list utilities plus build
//! version metadata for a Bitcoin-only hardware wallet firmware. This
//! library is designed for embedded systems and supports `no_std`
//! environments.
//!
//! ## Features
//!
//! ### Hex Codec
//! - **Decode**: parse case-insensitive hex text into caller-owned buffers
//! - **Encode**: render byte buffers as lowercase hex, borrowed or owned
//! - Typed errors instead of silent truncation
//!
//! ### Buffer Checks
//! - All-zero and all-`0xFF` predicates for erased-flash style detection
//! - A documented randomness heuristic for candidate seed material
//!
//! ### Word Lists
//! - Slicing delimited word blobs into fixed-capacity slots
//! - Formatting-character stripping for pasted mnemonic input
//! - Uniform random word selection behind a CSPRNG-only seam
//!
//! ### Version Metadata
//! - Packed version code and Bitcoin-only variant, const-folded from the
//!   package version at build time
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! libvaultutil = "1.1.0"
//! ```
//!
//! ### Hex Round-Trip Example
//!
//! ```rust
//! use libvaultutil::hex;
//!
//! let mut bytes = [0u8; 4];
//! let written = hex::decode("DEADBEEF", &mut bytes)?;
//! assert_eq!(written, 4);
//! assert_eq!(bytes, [0xDE, 0xAD, 0xBE, 0xEF]);
//!
//! let mut text = [0u8; 8];
//! let chars = hex::encode(&bytes, &mut text)?;
//! assert_eq!(&text[..chars], b"deadbeef");
//! # Ok::<(), libvaultutil::hex::Error>(())
//! ```
//!
//! ### Word-List Example
//!
//! ```rust
//! use libvaultutil::wordlist;
//!
//! let words = wordlist::slice::<12>("abandon ability able about above\nabsent")?;
//! assert_eq!(words.len(), 6);
//! assert_eq!(words[0].as_str(), "abandon");
//! # Ok::<(), libvaultutil::wordlist::Error>(())
//! ```
//!
//! ## Platform Support
//!
//! This library is designed to work on:
//! - Embedded microcontrollers (ARM Cortex-M, RISC-V, etc.)
//! - Host-side tooling built against the same firmware contracts
//! - Any platform supporting Rust's `core` library
//!
//! ## Optional Features
//!
//! - `std`: Enable standard library support (default: disabled)
//! - `defmt`: Enable defmt logging support for embedded debugging

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![warn(missing_debug_implementations)]

/// Hex codec between byte buffers and textual hex strings.
///
/// Decoding accepts upper- and lower-case digits; encoding always emits
/// lower case. All length and encoding failures surface as typed errors.
pub mod hex;

/// Pattern and randomness checks over byte buffers.
///
/// Predicates used to vet candidate seed material and to detect erased or
/// blank storage content before it is interpreted.
pub mod entropy;

/// Word-list slicing, cleanup and random selection.
///
/// Operates on delimited word blobs (e.g., a mnemonic dictionary) using
/// fixed-capacity slots so that no input can overrun a buffer.
pub mod wordlist;

/// Build version metadata for the Bitcoin-only firmware variant.
pub mod version;
