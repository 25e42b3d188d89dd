//! Build version metadata for the Bitcoin-only firmware variant.
//!
//! The version triple is parsed out of the package version at compile
//! time and packed into a single integer, `major * 10000 + minor * 100 +
//! build`, for display and compatibility checks. The Bitcoin-only build
//! variant is encoded by prepending the digit `1` to the major number
//! (so major `1` becomes `11`) and carries the [`VERSION_SUFFIX`] label.
//!
//! Everything here is const-folded; there are no runtime inputs and no
//! failure modes.

use core::fmt;

use serde::Serialize;

const fn parse_int(s: &str) -> u32 {
    let bytes = s.as_bytes();
    let mut v = 0;
    let mut i = 0;
    while i < bytes.len() {
        assert!(bytes[i].is_ascii_digit(), "invalid digit in version");
        v = v * 10 + (bytes[i] - b'0') as u32;
        i += 1;
    }
    v
}

const fn pack(major: u32, minor: u32, build: u32) -> u32 {
    major * 10000 + minor * 100 + build
}

// Decimal digit concatenation: 1 prepended to `major` (1 -> 11, 12 -> 112).
const fn prepend_one(major: u32) -> u32 {
    let mut scale = 10;
    while scale <= major {
        scale *= 10;
    }
    scale + major
}

/// Major version number of this build.
pub const MAJOR: u32 = parse_int(env!("CARGO_PKG_VERSION_MAJOR"));
/// Minor version number of this build.
pub const MINOR: u32 = parse_int(env!("CARGO_PKG_VERSION_MINOR"));
/// Build (patch) number of this build.
pub const BUILD: u32 = parse_int(env!("CARGO_PKG_VERSION_PATCH"));

/// Packed version code, `major * 10000 + minor * 100 + build`.
pub const VERSION_CODE: u32 = pack(MAJOR, MINOR, BUILD);

/// Major number of the Bitcoin-only variant: [`MAJOR`] with the digit `1`
/// prepended.
pub const BTC_ONLY_MAJOR: u32 = prepend_one(MAJOR);

/// Packed version code of the Bitcoin-only variant.
pub const BTC_ONLY_VERSION_CODE: u32 = pack(BTC_ONLY_MAJOR, MINOR, BUILD);

/// Human-readable label identifying the Bitcoin-only build variant.
pub const VERSION_SUFFIX: &str = " - BTC";

/// Capacity of a [`VersionInfo::label`] string: three ten-digit `u32`
/// components, two separating dots, and the variant suffix.
pub const LABEL_CAPACITY: usize = 3 * 10 + 2 + VERSION_SUFFIX.len();

/// A firmware version triple, serializable for device-info reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VersionInfo {
    /// Major version number.
    pub major: u32,
    /// Minor version number.
    pub minor: u32,
    /// Build (patch) number.
    pub build: u32,
}

impl VersionInfo {
    /// The version triple this library was built with.
    pub const fn firmware() -> Self {
        Self {
            major: MAJOR,
            minor: MINOR,
            build: BUILD,
        }
    }

    /// Packs this triple into a single version code.
    pub const fn code(&self) -> u32 {
        pack(self.major, self.minor, self.build)
    }

    /// Renders `"major.minor.build"` plus the variant suffix, e.g.
    /// `"1.1.0 - BTC"`.
    pub fn label(&self) -> heapless::String<LABEL_CAPACITY> {
        use core::fmt::Write;
        let mut out = heapless::String::new();
        let wrote = write!(out, "{}{}", self, VERSION_SUFFIX);
        debug_assert!(wrote.is_ok(), "label exceeded LABEL_CAPACITY");
        out
    }

    /// Serializes this triple as a JSON device-info payload.
    pub fn to_json(&self) -> Result<heapless::String<64>, serde_json_core::ser::Error> {
        serde_json_core::to_string(self)
    }
}

impl fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.build)
    }
}
