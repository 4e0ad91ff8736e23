use pixutils_fourcc::FourCC;

use crate::format::Format;

/// Errors of format lookup, layout computation, buffer access and conversion.
///
/// All of these are local conditions caused by the arguments of a call. None of them leave any
/// state behind, retrying with the same arguments fails the same way.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    #[error("unknown pixel format {0}")]
    UnknownFormat(FourCC),

    #[error("unknown pixel format name")]
    UnknownFormatName,

    #[error("invalid image dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("alignment {0} is not a power of two")]
    InvalidAlignment(u32),

    #[error("buffer too small: need {needed} bytes, got {actual}")]
    BufferTooSmall { needed: usize, actual: usize },

    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("layout is for format {actual}, expected {expected}")]
    FormatMismatch { expected: Format, actual: Format },

    #[error(
        "dimension mismatch: {src_width}x{src_height} can not be converted to {dst_width}x{dst_height}"
    )]
    DimensionMismatch {
        src_width: u32,
        src_height: u32,
        dst_width: u32,
        dst_height: u32,
    },

    #[error("conversion from {from} to {to} is not supported")]
    UnsupportedConversion { from: Format, to: Format },

    #[error("format has {expected} planes, got {actual}")]
    PlaneCount { expected: usize, actual: usize },

    #[error("stride {stride} of plane {plane} is below the minimum of {min} bytes")]
    InvalidStride {
        plane: usize,
        stride: usize,
        min: usize,
    },

    #[error("plane {plane} overlaps the preceding plane")]
    OverlappingPlanes { plane: usize },
}
