//! Four character codes of pixel formats.
//!
//! Both the Linux direct rendering manager (KMS/DRM) and the video capture subsystem (V4L2) name
//! pixel formats by a 32-bit code built from four ASCII characters. The two namespaces overlap
//! but do not agree: `RG16` is 16-bit RGB565 to DRM and a 16-bit Bayer format to V4L2. The
//! constants are therefore split into the [`drm`] and [`v4l2`] modules.
//!
//! ```
//! use pixutils_fourcc::{drm, FourCC};
//!
//! let code: FourCC = "XR24".parse()?;
//! assert_eq!(code, drm::XRGB8888);
//! assert_eq!(code.to_string(), "XR24");
//! # Ok::<(), pixutils_fourcc::FourCCError>(())
//! ```
#![no_std]
#![deny(unsafe_code)]

use core::fmt;
use core::str::FromStr;

pub mod drm;
pub mod v4l2;

/// A 4CC format identifier.
///
/// This exist to define the common formats as constants and to typify the conversion and
/// representation of values involved. The code is always stored as little endian, the first
/// character occupying the least significant byte, as the kernel's `fourcc_code` macro does.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FourCC(u32);

/// An error parsing a string into a [`FourCC`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FourCCError {
    /// The string was not exactly four bytes long.
    #[error("a fourcc has exactly four characters, got {0} bytes")]
    Length(usize),
    /// One of the characters was not ASCII.
    #[error("a fourcc consists of ASCII characters only")]
    NotAscii,
}

impl FourCC {
    /// The constant denoting an invalid format, e.g. signalling a missing format.
    pub const INVALID: Self = FourCC(0);

    /// Create a code from its four characters.
    pub const fn new(arr: [u8; 4]) -> Self {
        FourCC(u32::from_le_bytes(arr))
    }

    /// Wrap a raw code as found in a kernel structure.
    pub const fn from_u32(code: u32) -> Self {
        FourCC(code)
    }

    /// The raw code, as passed to the kernel.
    pub const fn to_u32(self) -> u32 {
        self.0
    }

    /// The four characters of the code, first character first.
    pub const fn to_bytes(self) -> [u8; 4] {
        self.0.to_le_bytes()
    }

    /// Check if this is the invalid (all zero) code.
    pub const fn is_invalid(self) -> bool {
        self.0 == 0
    }
}

impl FromStr for FourCC {
    type Err = FourCCError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes: [u8; 4] = s
            .as_bytes()
            .try_into()
            .map_err(|_| FourCCError::Length(s.len()))?;

        if !bytes.is_ascii() {
            return Err(FourCCError::NotAscii);
        }

        Ok(FourCC::new(bytes))
    }
}

impl From<u32> for FourCC {
    fn from(code: u32) -> Self {
        FourCC(code)
    }
}

impl From<FourCC> for u32 {
    fn from(code: FourCC) -> Self {
        code.0
    }
}

impl fmt::Display for FourCC {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use fmt::Write as _;
        for ch in self.to_bytes() {
            // Codes coming from a device are not guaranteed to be printable.
            let ch = if ch.is_ascii_graphic() || ch == b' ' {
                char::from(ch)
            } else {
                '.'
            };
            f.write_char(ch)?;
        }
        Ok(())
    }
}

impl fmt::Debug for FourCC {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "FourCC(\"{}\" = {:#010x})", self, self.0)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;
    use std::string::ToString;

    use super::*;

    #[test]
    fn kernel_encoding() {
        // DRM_FORMAT_XRGB8888 from `drm_fourcc.h`.
        assert_eq!(drm::XRGB8888.to_u32(), 0x3432_5258);
        // V4L2_PIX_FMT_YUYV from `videodev2.h`.
        assert_eq!(v4l2::YUYV.to_u32(), 0x5659_5559);
        assert_eq!(FourCC::from_u32(0x3231_564e), drm::NV12);
    }

    #[test]
    fn string_round_trip() {
        for name in ["XR24", "NV12", "pRAA", "C8  ", "Y16 "] {
            let code: FourCC = name.parse().unwrap();
            assert_eq!(code.to_string(), name);
        }
    }

    #[test]
    fn bad_strings() {
        assert_eq!("XR2".parse::<FourCC>(), Err(FourCCError::Length(3)));
        assert_eq!("XR245".parse::<FourCC>(), Err(FourCCError::Length(5)));
        assert_eq!("".parse::<FourCC>(), Err(FourCCError::Length(0)));
        // The umlaut takes two bytes in UTF-8, so this is four bytes long.
        assert_eq!("XRä".parse::<FourCC>(), Err(FourCCError::NotAscii));
    }

    #[test]
    fn unprintable_display() {
        assert_eq!(FourCC::from_u32(0x0000_4142).to_string(), "BA..");
        assert!(FourCC::INVALID.is_invalid());
    }
}
