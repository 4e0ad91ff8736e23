//! Codes of the video capture subsystem.
//!
//! Relevant formats according to the Linux header `uapi/linux/videodev2.h`. The names follow the
//! `V4L2_PIX_FMT_*` and `V4L2_META_FMT_*` macros with the prefix removed. Note that V4L2 names
//! RGB formats by byte order while DRM names them by word order, hence `BGR24` here is `RGB888`
//! there.
use crate::FourCC;

/* RGB */
pub const RGB565: FourCC = FourCC::new(*b"RGBP");
/// RGB565 stored big endian.
pub const RGB565X: FourCC = FourCC::new(*b"RGBR");
pub const BGR24: FourCC = FourCC::new(*b"BGR3");
pub const RGB24: FourCC = FourCC::new(*b"RGB3");
pub const XBGR32: FourCC = FourCC::new(*b"XR24");
pub const RGBX32: FourCC = FourCC::new(*b"XB24");
pub const BGRX32: FourCC = FourCC::new(*b"RX24");
pub const XRGB32: FourCC = FourCC::new(*b"BX24");
pub const ABGR32: FourCC = FourCC::new(*b"AR24");
pub const RGBA32: FourCC = FourCC::new(*b"AB24");
pub const BGRA32: FourCC = FourCC::new(*b"RA24");
pub const ARGB32: FourCC = FourCC::new(*b"BA24");
pub const RGBX1010102: FourCC = FourCC::new(*b"RX30");

/* Greyscale */
pub const GREY: FourCC = FourCC::new(*b"GREY");
pub const Y16: FourCC = FourCC::new(*b"Y16 ");

/* Packed YUV */
pub const YUYV: FourCC = FourCC::new(*b"YUYV");
pub const YVYU: FourCC = FourCC::new(*b"YVYU");
pub const UYVY: FourCC = FourCC::new(*b"UYVY");
pub const VYUY: FourCC = FourCC::new(*b"VYUY");
pub const YUV24: FourCC = FourCC::new(*b"YUV3");
pub const YUVX32: FourCC = FourCC::new(*b"YUVX");

/* Semi-planar YUV, contiguous and multi-planar variants */
pub const NV12: FourCC = FourCC::new(*b"NV12");
pub const NV21: FourCC = FourCC::new(*b"NV21");
pub const NV16: FourCC = FourCC::new(*b"NV16");
pub const NV61: FourCC = FourCC::new(*b"NV61");
pub const NV24: FourCC = FourCC::new(*b"NV24");
pub const NV42: FourCC = FourCC::new(*b"NV42");
pub const NV12M: FourCC = FourCC::new(*b"NM12");
pub const NV21M: FourCC = FourCC::new(*b"NM21");
pub const NV16M: FourCC = FourCC::new(*b"NM16");
pub const NV61M: FourCC = FourCC::new(*b"NM61");

/* Planar YUV */
pub const YUV410: FourCC = FourCC::new(*b"YUV9");
pub const YUV411P: FourCC = FourCC::new(*b"411P");
pub const YUV420: FourCC = FourCC::new(*b"YU12");
pub const YVU420: FourCC = FourCC::new(*b"YV12");
pub const YUV422M: FourCC = FourCC::new(*b"YM16");
pub const YVU422M: FourCC = FourCC::new(*b"YM61");
pub const YUV444M: FourCC = FourCC::new(*b"YM24");
pub const YVU444M: FourCC = FourCC::new(*b"YM42");

/* Bayer, 8 bit */
pub const SBGGR8: FourCC = FourCC::new(*b"BA81");
pub const SGBRG8: FourCC = FourCC::new(*b"GBRG");
pub const SGRBG8: FourCC = FourCC::new(*b"GRBG");
pub const SRGGB8: FourCC = FourCC::new(*b"RGGB");

/* Bayer, 10 bit in 16 bit little endian words */
pub const SBGGR10: FourCC = FourCC::new(*b"BG10");
pub const SGBRG10: FourCC = FourCC::new(*b"GB10");
pub const SGRBG10: FourCC = FourCC::new(*b"BA10");
pub const SRGGB10: FourCC = FourCC::new(*b"RG10");

/* Bayer, 10 bit MIPI CSI-2 packed, 4 pixels in 5 bytes */
pub const SBGGR10P: FourCC = FourCC::new(*b"pBAA");
pub const SGBRG10P: FourCC = FourCC::new(*b"pGAA");
pub const SGRBG10P: FourCC = FourCC::new(*b"pgAA");
pub const SRGGB10P: FourCC = FourCC::new(*b"pRAA");

/* Bayer, 12 bit in 16 bit little endian words */
pub const SBGGR12: FourCC = FourCC::new(*b"BG12");
pub const SGBRG12: FourCC = FourCC::new(*b"GB12");
pub const SGRBG12: FourCC = FourCC::new(*b"BA12");
pub const SRGGB12: FourCC = FourCC::new(*b"RG12");

/* Bayer, 12 bit MIPI CSI-2 packed, 2 pixels in 3 bytes */
pub const SBGGR12P: FourCC = FourCC::new(*b"pBCC");
pub const SGBRG12P: FourCC = FourCC::new(*b"pGCC");
pub const SGRBG12P: FourCC = FourCC::new(*b"pgCC");
pub const SRGGB12P: FourCC = FourCC::new(*b"pRCC");

/* Bayer, 16 bit */
pub const SBGGR16: FourCC = FourCC::new(*b"BYR2");
pub const SGBRG16: FourCC = FourCC::new(*b"GB16");
pub const SGRBG16: FourCC = FourCC::new(*b"GR16");
pub const SRGGB16: FourCC = FourCC::new(*b"RG16");

/* Metadata */
pub const META_GENERIC_8: FourCC = FourCC::new(*b"MET8");
pub const META_GENERIC_CSI2_10: FourCC = FourCC::new(*b"MC1A");
pub const META_GENERIC_CSI2_12: FourCC = FourCC::new(*b"MC1C");
pub const META_RPI_FE_CFG: FourCC = FourCC::new(*b"RPFC");
pub const META_RPI_FE_STATS: FourCC = FourCC::new(*b"RPFS");
