//! Formats of V4L2 metadata buffers.
//!
//! Metadata such as sensor embedded data or ISP statistics travels in buffers that have a width
//! and height but no color. Their lines are made of groups of pixels just like raw image data.
use core::fmt;

use pixutils_fourcc::{v4l2, FourCC};

use crate::Error;

/// The description of a metadata format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MetaFormat {
    name: &'static str,
    v4l2: FourCC,
    pixels_per_group: u8,
    bytes_per_group: u8,
}

const fn meta(name: &'static str, v4l2: FourCC, pixels: u8, bytes: u8) -> MetaFormat {
    MetaFormat {
        name,
        v4l2,
        pixels_per_group: pixels,
        bytes_per_group: bytes,
    }
}

pub const GENERIC_8: MetaFormat = meta("GENERIC_8", v4l2::META_GENERIC_8, 2, 2);
/// CSI-2 packed 10 bit data, 4 pixels in 5 bytes.
pub const GENERIC_CSI2_10: MetaFormat = meta("GENERIC_CSI2_10", v4l2::META_GENERIC_CSI2_10, 4, 5);
/// CSI-2 packed 12 bit data, 2 pixels in 3 bytes.
pub const GENERIC_CSI2_12: MetaFormat = meta("GENERIC_CSI2_12", v4l2::META_GENERIC_CSI2_12, 2, 3);
/// Configuration of the Raspberry Pi PiSP front end.
pub const RPI_FE_CFG: MetaFormat = meta("RPI_FE_CFG", v4l2::META_RPI_FE_CFG, 1, 1);
/// Statistics of the Raspberry Pi PiSP front end.
pub const RPI_FE_STATS: MetaFormat = meta("RPI_FE_STATS", v4l2::META_RPI_FE_STATS, 1, 1);

static META_FORMATS: [MetaFormat; 5] = [
    GENERIC_8,
    GENERIC_CSI2_10,
    GENERIC_CSI2_12,
    RPI_FE_CFG,
    RPI_FE_STATS,
];

/// All metadata formats.
pub fn list() -> &'static [MetaFormat] {
    &META_FORMATS
}

/// Find a metadata format by its V4L2 code.
pub fn lookup(code: FourCC) -> Result<&'static MetaFormat, Error> {
    META_FORMATS
        .iter()
        .find(|format| format.v4l2 == code)
        .ok_or(Error::UnknownFormat(code))
}

/// Find a metadata format by its name, such as `GENERIC_CSI2_10`.
pub fn from_name(name: &str) -> Result<&'static MetaFormat, Error> {
    META_FORMATS
        .iter()
        .find(|format| format.name == name)
        .ok_or(Error::UnknownFormatName)
}

impl MetaFormat {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn v4l2(&self) -> FourCC {
        self.v4l2
    }

    pub fn pixels_per_group(&self) -> u8 {
        self.pixels_per_group
    }

    pub fn bytes_per_group(&self) -> u8 {
        self.bytes_per_group
    }

    /// The bytes of a line of `width` pixels, rounded up to `alignment`.
    pub fn stride(&self, width: u32, alignment: u32) -> Result<usize, Error> {
        if width == 0 {
            return Err(Error::InvalidDimensions { width, height: 1 });
        }

        if !alignment.is_power_of_two() {
            return Err(Error::InvalidAlignment(alignment));
        }

        let groups = width.div_ceil(u32::from(self.pixels_per_group));
        let bytes = u64::from(groups) * u64::from(self.bytes_per_group);
        let align = u64::from(alignment);
        let stride = bytes.div_ceil(align) * align;

        usize::try_from(stride).map_err(|_| Error::InvalidDimensions { width, height: 1 })
    }

    /// The bytes of a buffer of `height` lines.
    pub fn buffer_size(&self, width: u32, height: u32, alignment: u32) -> Result<usize, Error> {
        if height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }

        self.stride(width, alignment)?
            .checked_mul(height as usize)
            .ok_or(Error::InvalidDimensions { width, height })
    }
}

impl fmt::Display for MetaFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strides() -> Result<(), Error> {
        assert_eq!(GENERIC_8.stride(1920, 1)?, 1920);
        assert_eq!(GENERIC_8.stride(3, 1)?, 4);
        assert_eq!(GENERIC_CSI2_10.stride(1920, 1)?, 2400);
        assert_eq!(GENERIC_CSI2_10.stride(5, 1)?, 10);
        assert_eq!(GENERIC_CSI2_12.stride(1920, 1)?, 2880);
        assert_eq!(GENERIC_CSI2_12.stride(1920, 256)?, 3072);
        assert_eq!(RPI_FE_STATS.buffer_size(4096, 2, 1)?, 8192);
        Ok(())
    }

    #[test]
    fn lookups() {
        let code = FourCC::new(*b"MC1A");
        assert_eq!(lookup(code), Ok(&GENERIC_CSI2_10));
        assert_eq!(from_name("RPI_FE_CFG").map(MetaFormat::v4l2), Ok(v4l2::META_RPI_FE_CFG));
        assert_eq!(lookup(v4l2::NV12), Err(Error::UnknownFormat(v4l2::NV12)));
        assert_eq!(from_name("NV12"), Err(Error::UnknownFormatName));
    }

    #[test]
    fn rejects_arguments() {
        assert_eq!(GENERIC_8.stride(0, 1), Err(Error::InvalidDimensions { width: 0, height: 1 }));
        assert_eq!(GENERIC_8.stride(16, 6), Err(Error::InvalidAlignment(6)));
        assert_eq!(
            GENERIC_8.buffer_size(16, 0, 1),
            Err(Error::InvalidDimensions { width: 16, height: 0 })
        );
    }
}
