// Distributed under The MIT License (MIT)
//
// Copyright (c) 2024 The `pixutils` developers
//! The catalog of known pixel formats.
//!
//! Every format is a variant of the closed [`Format`] enumeration, backed by one entry in a static
//! table of [`PixelFormat`] descriptors. The table is compiled in, nothing initializes it at
//! runtime and nothing can modify it, so it is shared freely between threads.
//!
//! The format information describes the byte layout of pixels of that particular type. It is
//! modelled after the `drm_format_info` of the Linux kernel rendering subsystem and the V4L2
//! format descriptions, merged into one descriptor carrying both codes where they exist.
use core::fmt;

use pixutils_fourcc::{drm, v4l2, FourCC};

use crate::Error;

/// The maximum number of planes of any format.
pub const MAX_PLANES: usize = 4;

/// How the sample values of a format relate to color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorModel {
    /// Red, green and blue intensities.
    Rgb,
    /// Digital luma and chroma differences, YCbCr.
    Yuv,
    /// A single luminance value.
    Grey,
    /// Indices into a palette that is not part of the buffer.
    Indexed,
    /// Unprocessed sensor samples behind a color filter array.
    Raw,
}

/// The order of bytes in multi-byte pixel words.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    Little,
    Big,
}

/// A channel carried by a component of a plane.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
    Alpha,
    /// Bits without meaning, the `X` of format names.
    Padding,
    Luma,
    Cb,
    Cr,
    Index,
    /// A sensor sample, its color given by the Bayer pattern.
    Raw,
}

/// One bit field of a pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Component {
    pub channel: Channel,
    pub bits: u8,
}

/// The arrangement of color filters over a 2×2 block of sensor pixels, named in row-major order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BayerPattern {
    Bggr,
    Gbrg,
    Grbg,
    Rggb,
}

/// Ratios of the full image resolution to the resolution of some samples.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Subsampling {
    pub horizontal: u8,
    pub vertical: u8,
}

/// The description of one plane of a format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PlaneDescriptor {
    /// The components of a pixel, from least to most significant bits of the pixel word.
    ///
    /// For formats that share chroma between a pair of pixels within one plane (`YUYV` and the
    /// likes) these are the components of the whole pair. For bit-packed formats only one pixel
    /// is described, the packing is a property of the format.
    components: &'static [Component],
    /// The number of bits of storage for each pixel of the plane.
    bits_per_pixel: u8,
    /// Pixels that form one indivisible group of bytes.
    group_width: u8,
    /// Resolution of this plane relative to the image.
    subsampling: Subsampling,
}

/// A direct rendering manager or video capture format info.
///
/// Equality of descriptors is equality of their [`Format`].
#[derive(Clone, Copy, Debug)]
pub struct PixelFormat {
    format: Format,
    name: &'static str,
    drm: Option<FourCC>,
    v4l2: Option<FourCC>,
    color: ColorModel,
    chroma: Subsampling,
    byte_order: ByteOrder,
    /// Pixels are bit-packed across byte boundaries (MIPI CSI-2 packing).
    packed: bool,
    bayer: Option<BayerPattern>,
    planes: &'static [PlaneDescriptor],
}

macro_rules! comps {
    ($($ch:ident: $bits:literal),* $(,)?) => {
        &[$(Component { channel: Channel::$ch, bits: $bits }),*]
    };
}

macro_rules! formats {
    (
        $(
            $(#[$attr:meta])*
            $variant:ident => $ctor:ident($($arg:expr),* $(,)?) $(.$modifier:ident($($marg:expr),*))*;
        )*
    ) => {
        /// A pixel format known to the catalog.
        ///
        /// The variants are declared in catalog order, which is also the order of [`list`].
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[non_exhaustive]
        pub enum Format {
            $($(#[$attr])* $variant,)*
        }

        const COUNT: usize = [$(stringify!($variant)),*].len();

        static FORMATS: [PixelFormat; COUNT] = [
            $($ctor(Format::$variant, $($arg),*) $(.$modifier($($marg),*))*,)*
        ];
    };
}

const fn sub(horizontal: u8, vertical: u8) -> Subsampling {
    Subsampling {
        horizontal,
        vertical,
    }
}

/// A plane of whole pixels, each pixel one word made of all components.
const fn packed(components: &'static [Component]) -> PlaneDescriptor {
    let mut bits = 0;
    let mut idx = 0;
    while idx < components.len() {
        bits += components[idx].bits;
        idx += 1;
    }

    PlaneDescriptor {
        components,
        bits_per_pixel: bits,
        group_width: 1,
        subsampling: sub(1, 1),
    }
}

const fn plane(
    components: &'static [Component],
    bits_per_pixel: u8,
    group_width: u8,
    subsampling: Subsampling,
) -> PlaneDescriptor {
    PlaneDescriptor {
        components,
        bits_per_pixel,
        group_width,
        subsampling,
    }
}

const fn entry(
    format: Format,
    name: &'static str,
    drm: Option<FourCC>,
    v4l2: Option<FourCC>,
    color: ColorModel,
    planes: &'static [PlaneDescriptor],
) -> PixelFormat {
    PixelFormat {
        format,
        name,
        drm,
        v4l2,
        color,
        chroma: sub(1, 1),
        byte_order: ByteOrder::Little,
        packed: false,
        bayer: None,
        planes,
    }
}

impl PixelFormat {
    const fn chroma(self, horizontal: u8, vertical: u8) -> Self {
        PixelFormat {
            chroma: sub(horizontal, vertical),
            ..self
        }
    }

    const fn big_endian(self) -> Self {
        PixelFormat {
            byte_order: ByteOrder::Big,
            ..self
        }
    }

    const fn bayer(self, pattern: BayerPattern) -> Self {
        PixelFormat {
            bayer: Some(pattern),
            ..self
        }
    }

    const fn bit_packed(self) -> Self {
        PixelFormat {
            packed: true,
            ..self
        }
    }
}

/* Single plane rgb. */
const RGB565: &[PlaneDescriptor] = &[packed(comps![Blue: 5, Green: 6, Red: 5])];
const BGR565: &[PlaneDescriptor] = &[packed(comps![Red: 5, Green: 6, Blue: 5])];
const XRGB1555: &[PlaneDescriptor] =
    &[packed(comps![Blue: 5, Green: 5, Red: 5, Padding: 1])];
const ARGB1555: &[PlaneDescriptor] = &[packed(comps![Blue: 5, Green: 5, Red: 5, Alpha: 1])];
const XRGB4444: &[PlaneDescriptor] =
    &[packed(comps![Blue: 4, Green: 4, Red: 4, Padding: 4])];
const ARGB4444: &[PlaneDescriptor] = &[packed(comps![Blue: 4, Green: 4, Red: 4, Alpha: 4])];
const RGBX4444: &[PlaneDescriptor] =
    &[packed(comps![Padding: 4, Blue: 4, Green: 4, Red: 4])];
const RGBA4444: &[PlaneDescriptor] = &[packed(comps![Alpha: 4, Blue: 4, Green: 4, Red: 4])];
const RGB888: &[PlaneDescriptor] = &[packed(comps![Blue: 8, Green: 8, Red: 8])];
const BGR888: &[PlaneDescriptor] = &[packed(comps![Red: 8, Green: 8, Blue: 8])];
const XRGB8888: &[PlaneDescriptor] =
    &[packed(comps![Blue: 8, Green: 8, Red: 8, Padding: 8])];
const XBGR8888: &[PlaneDescriptor] =
    &[packed(comps![Red: 8, Green: 8, Blue: 8, Padding: 8])];
const RGBX8888: &[PlaneDescriptor] =
    &[packed(comps![Padding: 8, Blue: 8, Green: 8, Red: 8])];
const BGRX8888: &[PlaneDescriptor] =
    &[packed(comps![Padding: 8, Red: 8, Green: 8, Blue: 8])];
const ARGB8888: &[PlaneDescriptor] = &[packed(comps![Blue: 8, Green: 8, Red: 8, Alpha: 8])];
const ABGR8888: &[PlaneDescriptor] = &[packed(comps![Red: 8, Green: 8, Blue: 8, Alpha: 8])];
const RGBA8888: &[PlaneDescriptor] = &[packed(comps![Alpha: 8, Blue: 8, Green: 8, Red: 8])];
const BGRA8888: &[PlaneDescriptor] = &[packed(comps![Alpha: 8, Red: 8, Green: 8, Blue: 8])];
const XRGB2101010: &[PlaneDescriptor] =
    &[packed(comps![Blue: 10, Green: 10, Red: 10, Padding: 2])];
const XBGR2101010: &[PlaneDescriptor] =
    &[packed(comps![Red: 10, Green: 10, Blue: 10, Padding: 2])];
const ARGB2101010: &[PlaneDescriptor] =
    &[packed(comps![Blue: 10, Green: 10, Red: 10, Alpha: 2])];

/* Single channel. */
const C8: &[PlaneDescriptor] = &[packed(comps![Index: 8])];
const Y8: &[PlaneDescriptor] = &[packed(comps![Luma: 8])];
const Y16: &[PlaneDescriptor] = &[packed(comps![Luma: 16])];

/* Packed yuv, a pair of pixels shares chroma. */
const YUYV: &[PlaneDescriptor] = &[plane(comps![Luma: 8, Cb: 8, Luma: 8, Cr: 8], 16, 2, sub(1, 1))];
const YVYU: &[PlaneDescriptor] = &[plane(comps![Luma: 8, Cr: 8, Luma: 8, Cb: 8], 16, 2, sub(1, 1))];
const UYVY: &[PlaneDescriptor] = &[plane(comps![Cb: 8, Luma: 8, Cr: 8, Luma: 8], 16, 2, sub(1, 1))];
const VYUY: &[PlaneDescriptor] = &[plane(comps![Cr: 8, Luma: 8, Cb: 8, Luma: 8], 16, 2, sub(1, 1))];

/* Packed yuv without subsampling. */
const VUY888: &[PlaneDescriptor] = &[packed(comps![Luma: 8, Cb: 8, Cr: 8])];
const XVUY8888: &[PlaneDescriptor] = &[packed(comps![Luma: 8, Cb: 8, Cr: 8, Padding: 8])];
const AYUV: &[PlaneDescriptor] = &[packed(comps![Cr: 8, Cb: 8, Luma: 8, Alpha: 8])];
const XYUV8888: &[PlaneDescriptor] = &[packed(comps![Cr: 8, Cb: 8, Luma: 8, Padding: 8])];

/* Planes of multi-planar yuv. */
const LUMA: PlaneDescriptor = packed(comps![Luma: 8]);
const CBCR_420: PlaneDescriptor = plane(comps![Cb: 8, Cr: 8], 16, 1, sub(2, 2));
const CRCB_420: PlaneDescriptor = plane(comps![Cr: 8, Cb: 8], 16, 1, sub(2, 2));
const CBCR_422: PlaneDescriptor = plane(comps![Cb: 8, Cr: 8], 16, 1, sub(2, 1));
const CRCB_422: PlaneDescriptor = plane(comps![Cr: 8, Cb: 8], 16, 1, sub(2, 1));
const CBCR_444: PlaneDescriptor = plane(comps![Cb: 8, Cr: 8], 16, 1, sub(1, 1));
const CRCB_444: PlaneDescriptor = plane(comps![Cr: 8, Cb: 8], 16, 1, sub(1, 1));
const CB_410: PlaneDescriptor = plane(comps![Cb: 8], 8, 1, sub(4, 4));
const CR_410: PlaneDescriptor = plane(comps![Cr: 8], 8, 1, sub(4, 4));
const CB_411: PlaneDescriptor = plane(comps![Cb: 8], 8, 1, sub(4, 1));
const CR_411: PlaneDescriptor = plane(comps![Cr: 8], 8, 1, sub(4, 1));
const CB_420: PlaneDescriptor = plane(comps![Cb: 8], 8, 1, sub(2, 2));
const CR_420: PlaneDescriptor = plane(comps![Cr: 8], 8, 1, sub(2, 2));
const CB_422: PlaneDescriptor = plane(comps![Cb: 8], 8, 1, sub(2, 1));
const CR_422: PlaneDescriptor = plane(comps![Cr: 8], 8, 1, sub(2, 1));
const CB_444: PlaneDescriptor = plane(comps![Cb: 8], 8, 1, sub(1, 1));
const CR_444: PlaneDescriptor = plane(comps![Cr: 8], 8, 1, sub(1, 1));

const NV12: &[PlaneDescriptor] = &[LUMA, CBCR_420];
const NV21: &[PlaneDescriptor] = &[LUMA, CRCB_420];
const NV16: &[PlaneDescriptor] = &[LUMA, CBCR_422];
const NV61: &[PlaneDescriptor] = &[LUMA, CRCB_422];
const NV24: &[PlaneDescriptor] = &[LUMA, CBCR_444];
const NV42: &[PlaneDescriptor] = &[LUMA, CRCB_444];
const YUV410: &[PlaneDescriptor] = &[LUMA, CB_410, CR_410];
const YUV411: &[PlaneDescriptor] = &[LUMA, CB_411, CR_411];
const YUV420: &[PlaneDescriptor] = &[LUMA, CB_420, CR_420];
const YVU420: &[PlaneDescriptor] = &[LUMA, CR_420, CB_420];
const YUV422: &[PlaneDescriptor] = &[LUMA, CB_422, CR_422];
const YVU422: &[PlaneDescriptor] = &[LUMA, CR_422, CB_422];
const YUV444: &[PlaneDescriptor] = &[LUMA, CB_444, CR_444];
const YVU444: &[PlaneDescriptor] = &[LUMA, CR_444, CB_444];

/* Raw sensor data. */
const RAW8: &[PlaneDescriptor] = &[packed(comps![Raw: 8])];
const RAW10: &[PlaneDescriptor] = &[packed(comps![Raw: 10, Padding: 6])];
const RAW12: &[PlaneDescriptor] = &[packed(comps![Raw: 12, Padding: 4])];
const RAW16: &[PlaneDescriptor] = &[packed(comps![Raw: 16])];
const RAW10P: &[PlaneDescriptor] = &[plane(comps![Raw: 10], 10, 4, sub(1, 1))];
const RAW12P: &[PlaneDescriptor] = &[plane(comps![Raw: 12], 12, 2, sub(1, 1))];

use BayerPattern::{Bggr, Gbrg, Grbg, Rggb};
use ColorModel::{Grey, Indexed, Raw, Rgb, Yuv};

formats! {
    /* RGB 16-bit */
    Rgb565 => entry("RGB565", Some(drm::RGB565), Some(v4l2::RGB565), Rgb, RGB565);
    Rgb565X => entry("RGB565X", None, Some(v4l2::RGB565X), Rgb, RGB565).big_endian();
    Bgr565 => entry("BGR565", Some(drm::BGR565), None, Rgb, BGR565);
    Xrgb1555 => entry("XRGB1555", Some(drm::XRGB1555), None, Rgb, XRGB1555);
    Argb1555 => entry("ARGB1555", Some(drm::ARGB1555), None, Rgb, ARGB1555);
    Xrgb4444 => entry("XRGB4444", Some(drm::XRGB4444), None, Rgb, XRGB4444);
    Argb4444 => entry("ARGB4444", Some(drm::ARGB4444), None, Rgb, ARGB4444);
    Rgbx4444 => entry("RGBX4444", Some(drm::RGBX4444), None, Rgb, RGBX4444);
    Rgba4444 => entry("RGBA4444", Some(drm::RGBA4444), None, Rgb, RGBA4444);

    /* RGB 24-bit */
    Rgb888 => entry("RGB888", Some(drm::RGB888), Some(v4l2::BGR24), Rgb, RGB888);
    Bgr888 => entry("BGR888", Some(drm::BGR888), Some(v4l2::RGB24), Rgb, BGR888);

    /* RGB 32-bit */
    Xrgb8888 => entry("XRGB8888", Some(drm::XRGB8888), Some(v4l2::XBGR32), Rgb, XRGB8888);
    Xbgr8888 => entry("XBGR8888", Some(drm::XBGR8888), Some(v4l2::RGBX32), Rgb, XBGR8888);
    Rgbx8888 => entry("RGBX8888", Some(drm::RGBX8888), Some(v4l2::BGRX32), Rgb, RGBX8888);
    Bgrx8888 => entry("BGRX8888", Some(drm::BGRX8888), Some(v4l2::XRGB32), Rgb, BGRX8888);
    Argb8888 => entry("ARGB8888", Some(drm::ARGB8888), Some(v4l2::ABGR32), Rgb, ARGB8888);
    Abgr8888 => entry("ABGR8888", Some(drm::ABGR8888), Some(v4l2::RGBA32), Rgb, ABGR8888);
    Rgba8888 => entry("RGBA8888", Some(drm::RGBA8888), Some(v4l2::BGRA32), Rgb, RGBA8888);
    Bgra8888 => entry("BGRA8888", Some(drm::BGRA8888), Some(v4l2::ARGB32), Rgb, BGRA8888);
    Xrgb2101010 => entry("XRGB2101010", Some(drm::XRGB2101010), None, Rgb, XRGB2101010);
    Xbgr2101010 => entry(
        "XBGR2101010",
        Some(drm::XBGR2101010),
        Some(v4l2::RGBX1010102),
        Rgb,
        XBGR2101010,
    );
    Argb2101010 => entry("ARGB2101010", Some(drm::ARGB2101010), None, Rgb, ARGB2101010);

    /* Single channel */
    C8 => entry("C8", Some(drm::C8), None, Indexed, C8);
    Y8 => entry("Y8", None, Some(v4l2::GREY), Grey, Y8);
    Y16 => entry("Y16", None, Some(v4l2::Y16), Grey, Y16);

    /* YUV 4:2:2 packed */
    Yuyv => entry("YUYV", Some(drm::YUYV), Some(v4l2::YUYV), Yuv, YUYV).chroma(2, 1);
    Yvyu => entry("YVYU", Some(drm::YVYU), Some(v4l2::YVYU), Yuv, YVYU).chroma(2, 1);
    Uyvy => entry("UYVY", Some(drm::UYVY), Some(v4l2::UYVY), Yuv, UYVY).chroma(2, 1);
    Vyuy => entry("VYUY", Some(drm::VYUY), Some(v4l2::VYUY), Yuv, VYUY).chroma(2, 1);

    /* YUV 4:4:4 packed */
    Vuy888 => entry("VUY888", Some(drm::VUY888), Some(v4l2::YUV24), Yuv, VUY888);
    Xvuy8888 => entry("XVUY8888", Some(drm::XVUY8888), Some(v4l2::YUVX32), Yuv, XVUY8888);
    Ayuv => entry("AYUV", Some(drm::AYUV), None, Yuv, AYUV);
    Xyuv8888 => entry("XYUV8888", Some(drm::XYUV8888), None, Yuv, XYUV8888);

    /* YUV semi-planar */
    Nv12 => entry("NV12", Some(drm::NV12), Some(v4l2::NV12M), Yuv, NV12).chroma(2, 2);
    Nv21 => entry("NV21", Some(drm::NV21), Some(v4l2::NV21M), Yuv, NV21).chroma(2, 2);
    Nv16 => entry("NV16", Some(drm::NV16), Some(v4l2::NV16M), Yuv, NV16).chroma(2, 1);
    Nv61 => entry("NV61", Some(drm::NV61), Some(v4l2::NV61M), Yuv, NV61).chroma(2, 1);
    Nv24 => entry("NV24", Some(drm::NV24), Some(v4l2::NV24), Yuv, NV24);
    Nv42 => entry("NV42", Some(drm::NV42), Some(v4l2::NV42), Yuv, NV42);

    /* YUV planar */
    Yuv410 => entry("YUV410", Some(drm::YUV410), Some(v4l2::YUV410), Yuv, YUV410).chroma(4, 4);
    Yuv411 => entry("YUV411", Some(drm::YUV411), Some(v4l2::YUV411P), Yuv, YUV411).chroma(4, 1);
    Yuv420 => entry("YUV420", Some(drm::YUV420), Some(v4l2::YUV420), Yuv, YUV420).chroma(2, 2);
    Yvu420 => entry("YVU420", Some(drm::YVU420), Some(v4l2::YVU420), Yuv, YVU420).chroma(2, 2);
    Yuv422 => entry("YUV422", Some(drm::YUV422), Some(v4l2::YUV422M), Yuv, YUV422).chroma(2, 1);
    Yvu422 => entry("YVU422", Some(drm::YVU422), Some(v4l2::YVU422M), Yuv, YVU422).chroma(2, 1);
    Yuv444 => entry("YUV444", Some(drm::YUV444), Some(v4l2::YUV444M), Yuv, YUV444);
    Yvu444 => entry("YVU444", Some(drm::YVU444), Some(v4l2::YVU444M), Yuv, YVU444);

    /* Raw 8-bit */
    Sbggr8 => entry("SBGGR8", None, Some(v4l2::SBGGR8), Raw, RAW8).bayer(Bggr);
    Sgbrg8 => entry("SGBRG8", None, Some(v4l2::SGBRG8), Raw, RAW8).bayer(Gbrg);
    Sgrbg8 => entry("SGRBG8", None, Some(v4l2::SGRBG8), Raw, RAW8).bayer(Grbg);
    Srggb8 => entry("SRGGB8", None, Some(v4l2::SRGGB8), Raw, RAW8).bayer(Rggb);

    /* Raw 10-bit */
    Sbggr10 => entry("SBGGR10", None, Some(v4l2::SBGGR10), Raw, RAW10).bayer(Bggr);
    Sgbrg10 => entry("SGBRG10", None, Some(v4l2::SGBRG10), Raw, RAW10).bayer(Gbrg);
    Sgrbg10 => entry("SGRBG10", None, Some(v4l2::SGRBG10), Raw, RAW10).bayer(Grbg);
    Srggb10 => entry("SRGGB10", None, Some(v4l2::SRGGB10), Raw, RAW10).bayer(Rggb);
    Sbggr10P => entry("SBGGR10P", None, Some(v4l2::SBGGR10P), Raw, RAW10P).bayer(Bggr).bit_packed();
    Sgbrg10P => entry("SGBRG10P", None, Some(v4l2::SGBRG10P), Raw, RAW10P).bayer(Gbrg).bit_packed();
    Sgrbg10P => entry("SGRBG10P", None, Some(v4l2::SGRBG10P), Raw, RAW10P).bayer(Grbg).bit_packed();
    Srggb10P => entry("SRGGB10P", None, Some(v4l2::SRGGB10P), Raw, RAW10P).bayer(Rggb).bit_packed();

    /* Raw 12-bit */
    Sbggr12 => entry("SBGGR12", None, Some(v4l2::SBGGR12), Raw, RAW12).bayer(Bggr);
    Sgbrg12 => entry("SGBRG12", None, Some(v4l2::SGBRG12), Raw, RAW12).bayer(Gbrg);
    Sgrbg12 => entry("SGRBG12", None, Some(v4l2::SGRBG12), Raw, RAW12).bayer(Grbg);
    Srggb12 => entry("SRGGB12", None, Some(v4l2::SRGGB12), Raw, RAW12).bayer(Rggb);
    Sbggr12P => entry("SBGGR12P", None, Some(v4l2::SBGGR12P), Raw, RAW12P).bayer(Bggr).bit_packed();
    Sgbrg12P => entry("SGBRG12P", None, Some(v4l2::SGBRG12P), Raw, RAW12P).bayer(Gbrg).bit_packed();
    Sgrbg12P => entry("SGRBG12P", None, Some(v4l2::SGRBG12P), Raw, RAW12P).bayer(Grbg).bit_packed();
    Srggb12P => entry("SRGGB12P", None, Some(v4l2::SRGGB12P), Raw, RAW12P).bayer(Rggb).bit_packed();

    /* Raw 16-bit */
    Sbggr16 => entry("SBGGR16", None, Some(v4l2::SBGGR16), Raw, RAW16).bayer(Bggr);
    Sgbrg16 => entry("SGBRG16", None, Some(v4l2::SGBRG16), Raw, RAW16).bayer(Gbrg);
    Sgrbg16 => entry("SGRBG16", None, Some(v4l2::SGRBG16), Raw, RAW16).bayer(Grbg);
    Srggb16 => entry("SRGGB16", None, Some(v4l2::SRGGB16), Raw, RAW16).bayer(Rggb);
}

/// Find a format by its code.
///
/// The DRM codes are searched first, then the V4L2 codes. The namespaces overlap (`RG16` is
/// `RGB565` to DRM but `SRGGB16` to V4L2), use [`Format::from_drm`] or [`Format::from_v4l2`]
/// when the origin of the code is known.
pub fn lookup(code: FourCC) -> Result<&'static PixelFormat, Error> {
    Format::from_drm(code)
        .or_else(|_| Format::from_v4l2(code))
        .map(Format::info)
}

/// All formats of the catalog, in declaration order.
pub fn list() -> &'static [PixelFormat] {
    &FORMATS
}

impl Format {
    /// The catalog entry of this format.
    pub fn info(self) -> &'static PixelFormat {
        // The table is generated in declaration order of the variants.
        &FORMATS[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.info().name
    }

    /// Find the format with this DRM code.
    pub fn from_drm(code: FourCC) -> Result<Self, Error> {
        FORMATS
            .iter()
            .find(|info| info.drm == Some(code))
            .map(|info| info.format)
            .ok_or(Error::UnknownFormat(code))
    }

    /// Find the format with this V4L2 code.
    pub fn from_v4l2(code: FourCC) -> Result<Self, Error> {
        FORMATS
            .iter()
            .find(|info| info.v4l2 == Some(code))
            .map(|info| info.format)
            .ok_or(Error::UnknownFormat(code))
    }

    /// Find a format by its name, such as `XRGB8888` or `SRGGB10P`.
    pub fn from_name(name: &str) -> Result<Self, Error> {
        FORMATS
            .iter()
            .find(|info| info.name == name)
            .map(|info| info.format)
            .ok_or(Error::UnknownFormatName)
    }
}

impl PixelFormat {
    pub fn format(&self) -> Format {
        self.format
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The DRM code, if the format exists for display buffers.
    pub fn drm(&self) -> Option<FourCC> {
        self.drm
    }

    /// The V4L2 code, if the format exists for capture buffers.
    pub fn v4l2(&self) -> Option<FourCC> {
        self.v4l2
    }

    pub fn color(&self) -> ColorModel {
        self.color
    }

    /// The subsampling of chroma relative to luma, `1×1` for formats without.
    pub fn chroma_subsampling(&self) -> Subsampling {
        self.chroma
    }

    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    /// Whether pixels are bit-packed across byte boundaries.
    pub fn is_packed(&self) -> bool {
        self.packed
    }

    pub fn bayer_pattern(&self) -> Option<BayerPattern> {
        self.bayer
    }

    pub fn planes(&self) -> &'static [PlaneDescriptor] {
        self.planes
    }

    pub fn num_planes(&self) -> usize {
        self.planes.len()
    }

    pub fn plane(&self, idx: usize) -> Result<&'static PlaneDescriptor, Error> {
        self.planes.get(idx).ok_or(Error::IndexOutOfRange {
            index: idx,
            len: self.planes.len(),
        })
    }

    pub fn has_alpha(&self) -> bool {
        self.planes
            .iter()
            .flat_map(|plane| plane.components)
            .any(|comp| comp.channel == Channel::Alpha)
    }

    /// The number of bits of storage per pixel of the image, averaged over subsampled planes.
    pub fn average_bits_per_pixel(&self) -> f32 {
        self.planes
            .iter()
            .map(|plane| {
                let area = plane.subsampling.horizontal * plane.subsampling.vertical;
                f32::from(plane.bits_per_pixel) / f32::from(area)
            })
            .sum()
    }
}

impl PlaneDescriptor {
    pub fn components(&self) -> &'static [Component] {
        self.components
    }

    pub fn bits_per_pixel(&self) -> u8 {
        self.bits_per_pixel
    }

    /// The number of pixels sharing one indivisible group of bytes.
    pub fn group_width(&self) -> u8 {
        self.group_width
    }

    pub fn subsampling(&self) -> Subsampling {
        self.subsampling
    }

    /// Whether the plane interleaves several channels.
    pub fn is_packed(&self) -> bool {
        let mut channels = self
            .components
            .iter()
            .map(|comp| comp.channel)
            .filter(|&ch| ch != Channel::Padding);
        let first = channels.next();
        channels.any(|ch| Some(ch) != first)
    }

    /// Check whether the plane carries a channel.
    pub fn carries(&self, channel: Channel) -> bool {
        self.components.iter().any(|comp| comp.channel == channel)
    }
}

impl BayerPattern {
    /// The color filter over the sensor pixel at these coordinates.
    pub fn channel_at(self, x: u32, y: u32) -> Channel {
        use Channel::{Blue as B, Green as G, Red as R};
        let block = match self {
            Bggr => [B, G, G, R],
            Gbrg => [G, B, R, G],
            Grbg => [G, R, B, G],
            Rggb => [R, G, G, B],
        };
        block[((y % 2) * 2 + x % 2) as usize]
    }
}

impl PartialEq for PixelFormat {
    fn eq(&self, other: &Self) -> bool {
        self.format == other.format
    }
}

impl Eq for PixelFormat {}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name)
    }
}

#[test]
fn table_in_declaration_order() {
    for (idx, info) in list().iter().enumerate() {
        assert_eq!(info.format as usize, idx, "{} out of order", info.name);
        assert_eq!(info.format.info(), info);
    }
}

#[test]
fn codes_are_unique() {
    for (idx, a) in list().iter().enumerate() {
        for b in &list()[idx + 1..] {
            assert!(a.drm.is_none() || a.drm != b.drm, "{a} and {b}");
            assert!(a.v4l2.is_none() || a.v4l2 != b.v4l2, "{a} and {b}");
            assert_ne!(a.name, b.name);
        }
    }
}

#[test]
fn plane_invariants() {
    for info in list() {
        assert!((1..=MAX_PLANES).contains(&info.num_planes()), "{info}");
        for plane in info.planes() {
            assert!(plane.subsampling.horizontal > 0 && plane.subsampling.vertical > 0);
            assert!(plane.group_width > 0);
            if !info.is_packed() {
                let bits: u32 = plane.components.iter().map(|c| u32::from(c.bits)).sum();
                let group = u32::from(plane.bits_per_pixel) * u32::from(plane.group_width);
                assert_eq!(bits, group, "{info}");
            }
        }
    }
}

#[test]
fn lookup_codes() {
    assert_eq!(lookup(drm::XRGB8888).unwrap().format(), Format::Xrgb8888);
    assert_eq!(lookup(v4l2::GREY).unwrap().format(), Format::Y8);
    // The DRM meaning wins for an ambiguous code.
    assert_eq!(lookup(drm::RGB565).unwrap().format(), Format::Rgb565);
    assert_eq!(Format::from_v4l2(v4l2::SRGGB16), Ok(Format::Srggb16));
    assert_eq!(Format::from_name("SRGGB10P"), Ok(Format::Srggb10P));

    let unknown = FourCC::new(*b"ZZZZ");
    assert_eq!(lookup(unknown), Err(Error::UnknownFormat(unknown)));
    assert_eq!(lookup(FourCC::INVALID), Err(Error::UnknownFormat(FourCC::INVALID)));
    assert_eq!(Format::from_name("ZZZZ"), Err(Error::UnknownFormatName));
}

#[test]
fn average_bits() {
    assert_eq!(Format::Nv12.info().average_bits_per_pixel(), 12.0);
    assert_eq!(Format::Yuv420.info().average_bits_per_pixel(), 12.0);
    assert_eq!(Format::Yuv410.info().average_bits_per_pixel(), 9.0);
    assert_eq!(Format::Nv16.info().average_bits_per_pixel(), 16.0);
    assert_eq!(Format::Yuyv.info().average_bits_per_pixel(), 16.0);
    assert_eq!(Format::Xrgb8888.info().average_bits_per_pixel(), 32.0);
    assert_eq!(Format::Srggb10P.info().average_bits_per_pixel(), 10.0);
}

#[test]
fn channel_layout() {
    let yuyv = Format::Yuyv.info();
    assert!(yuyv.plane(0).unwrap().is_packed());
    assert!(yuyv.plane(1).is_err());

    let nv12 = Format::Nv12.info();
    assert!(!nv12.plane(0).unwrap().is_packed());
    assert!(nv12.plane(1).unwrap().is_packed());
    assert!(nv12.plane(1).unwrap().carries(Channel::Cr));

    assert!(Format::Argb8888.info().has_alpha());
    assert!(!Format::Xrgb8888.info().has_alpha());
    assert!(!Format::Srggb10.info().plane(0).unwrap().is_packed());
}

#[test]
fn bayer_patterns() {
    assert_eq!(BayerPattern::Rggb.channel_at(0, 0), Channel::Red);
    assert_eq!(BayerPattern::Rggb.channel_at(1, 1), Channel::Blue);
    assert_eq!(BayerPattern::Bggr.channel_at(2, 0), Channel::Blue);
    assert_eq!(BayerPattern::Grbg.channel_at(1, 0), Channel::Red);
    assert_eq!(BayerPattern::Gbrg.channel_at(0, 3), Channel::Red);
}
