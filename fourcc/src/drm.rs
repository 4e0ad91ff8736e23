//! Codes of the direct rendering manager.
//!
//! Relevant formats according to the Linux header `uapi/drm/drm_fourcc.h`. The bit layout in the
//! documentation of each code is that of a little endian word, most significant bits first.
use crate::FourCC;

/// Flag or-ed into a code to denote big endian words instead of little endian ones.
pub const BIG_ENDIAN: u32 = 1 << 31;

/// Indexed color, 8 bits per pixel.
pub const C8: FourCC = FourCC::new(*b"C8  ");

/* 16 bpp rgb */
/// `[15:0] x:R:G:B 4:4:4:4`
pub const XRGB4444: FourCC = FourCC::new(*b"XR12");
/// `[15:0] R:G:B:x 4:4:4:4`
pub const RGBX4444: FourCC = FourCC::new(*b"RX12");
/// `[15:0] A:R:G:B 4:4:4:4`
pub const ARGB4444: FourCC = FourCC::new(*b"AR12");
/// `[15:0] R:G:B:A 4:4:4:4`
pub const RGBA4444: FourCC = FourCC::new(*b"RA12");
/// `[15:0] x:R:G:B 1:5:5:5`
pub const XRGB1555: FourCC = FourCC::new(*b"XR15");
/// `[15:0] A:R:G:B 1:5:5:5`
pub const ARGB1555: FourCC = FourCC::new(*b"AR15");
/// `[15:0] R:G:B 5:6:5`
pub const RGB565: FourCC = FourCC::new(*b"RG16");
/// `[15:0] B:G:R 5:6:5`
pub const BGR565: FourCC = FourCC::new(*b"BG16");

/* 24 bpp rgb */
/// `[23:0] R:G:B`, i.e. bytes in order blue, green, red.
pub const RGB888: FourCC = FourCC::new(*b"RG24");
/// `[23:0] B:G:R`, i.e. bytes in order red, green, blue.
pub const BGR888: FourCC = FourCC::new(*b"BG24");

/* 32 bpp rgb */
pub const XRGB8888: FourCC = FourCC::new(*b"XR24");
pub const XBGR8888: FourCC = FourCC::new(*b"XB24");
pub const RGBX8888: FourCC = FourCC::new(*b"RX24");
pub const BGRX8888: FourCC = FourCC::new(*b"BX24");

pub const ARGB8888: FourCC = FourCC::new(*b"AR24");
pub const ABGR8888: FourCC = FourCC::new(*b"AB24");
pub const RGBA8888: FourCC = FourCC::new(*b"RA24");
pub const BGRA8888: FourCC = FourCC::new(*b"BA24");

pub const XRGB2101010: FourCC = FourCC::new(*b"XR30");
pub const XBGR2101010: FourCC = FourCC::new(*b"XB30");
pub const ARGB2101010: FourCC = FourCC::new(*b"AR30");

/* Packed YCbCr */
/// `[31:0] Cr0:Y1:Cb0:Y0 8:8:8:8`
pub const YUYV: FourCC = FourCC::new(*b"YUYV");
/// `[31:0] Cb0:Y1:Cr0:Y0 8:8:8:8`
pub const YVYU: FourCC = FourCC::new(*b"YVYU");
/// `[31:0] Y1:Cr0:Y0:Cb0 8:8:8:8`
pub const UYVY: FourCC = FourCC::new(*b"UYVY");
/// `[31:0] Y1:Cb0:Y0:Cr0 8:8:8:8`
pub const VYUY: FourCC = FourCC::new(*b"VYUY");

/// `[31:0] A:Y:Cb:Cr 8:8:8:8`
pub const AYUV: FourCC = FourCC::new(*b"AYUV");
/// `[31:0] X:Y:Cb:Cr 8:8:8:8`
pub const XYUV8888: FourCC = FourCC::new(*b"XYUV");
/// `[23:0] Cr:Cb:Y 8:8:8`
pub const VUY888: FourCC = FourCC::new(*b"VU24");
/// `[31:0] X:Cr:Cb:Y 8:8:8:8`
pub const XVUY8888: FourCC = FourCC::new(*b"XVUY");

/* 2 plane YCbCr */
/// Y plane and interleaved Cb:Cr plane, 2×2 subsampled.
pub const NV12: FourCC = FourCC::new(*b"NV12");
/// Y plane and interleaved Cr:Cb plane, 2×2 subsampled.
pub const NV21: FourCC = FourCC::new(*b"NV21");
/// Y plane and interleaved Cb:Cr plane, 2×1 subsampled.
pub const NV16: FourCC = FourCC::new(*b"NV16");
/// Y plane and interleaved Cr:Cb plane, 2×1 subsampled.
pub const NV61: FourCC = FourCC::new(*b"NV61");
/// Y plane and interleaved Cb:Cr plane, not subsampled.
pub const NV24: FourCC = FourCC::new(*b"NV24");
/// Y plane and interleaved Cr:Cb plane, not subsampled.
pub const NV42: FourCC = FourCC::new(*b"NV42");

/* 3 plane YCbCr */
/// Y, Cb, Cr planes with 4×4 subsampled chroma.
pub const YUV410: FourCC = FourCC::new(*b"YUV9");
/// Y, Cb, Cr planes with 4×1 subsampled chroma.
pub const YUV411: FourCC = FourCC::new(*b"YU11");
/// Y, Cb, Cr planes with 2×2 subsampled chroma.
pub const YUV420: FourCC = FourCC::new(*b"YU12");
/// Y, Cr, Cb planes with 2×2 subsampled chroma.
pub const YVU420: FourCC = FourCC::new(*b"YV12");
/// Y, Cb, Cr planes with 2×1 subsampled chroma.
pub const YUV422: FourCC = FourCC::new(*b"YU16");
/// Y, Cr, Cb planes with 2×1 subsampled chroma.
pub const YVU422: FourCC = FourCC::new(*b"YV16");
/// Y, Cb, Cr planes without subsampling.
pub const YUV444: FourCC = FourCC::new(*b"YU24");
/// Y, Cr, Cb planes without subsampling.
pub const YVU444: FourCC = FourCC::new(*b"YV24");
