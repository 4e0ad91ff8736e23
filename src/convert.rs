// Distributed under The MIT License (MIT)
//
// Copyright (c) 2024 The `pixutils` developers
//! Conversion of pixel data between formats.
//!
//! Pixels travel with 16 bits per sample from a decoder of the source format, through a color
//! transform, to an encoder of the destination format. Samples keep their depth between formats
//! of one color model, the color matrices work on the high 8 bits. Which pairs are supported is
//! decided by an explicit table over color models, see [`is_supported`].
//!
//! | from \ to | RGB | YUV | Grey |
//! |-----------|-----|-----|------|
//! | RGB       | copy | matrix | luma row |
//! | YUV       | matrix | copy | matrix, luma row |
//! | Grey      | replicate | replicate, matrix | copy |
//! | Raw Bayer | demosaic | demosaic, matrix | demosaic, luma row |
//!
//! Indexed formats can not be converted in either direction and raw formats can not be encoded.
mod codec;
mod csc;
mod demosaic;

use tracing::debug;

use self::codec::{expand, reduce, Pixel, Reader, Writer};
use self::csc::Csc;
use self::demosaic::Mosaic;
use crate::format::{list, ColorModel, Format};
use crate::view::{BufferView, BufferViewMut};
use crate::Error;

pub use self::csc::{ColorEncoding, ColorRange, ConvertOptions};

/// The source side of a conversion.
enum Decoder<'data> {
    Words(Reader<'data>),
    Bayer(Mosaic<'data>),
}

/// Convert a buffer, YCbCr being BT.601 with limited range.
pub fn convert(
    source: &BufferView<'_>,
    source_format: Format,
    dest: &mut BufferViewMut<'_>,
    dest_format: Format,
) -> Result<(), Error> {
    convert_with(source, source_format, dest, dest_format, &ConvertOptions::default())
}

/// Convert a buffer with an explicit choice of YCbCr encoding and range.
///
/// Every pixel of the destination is written. When the destination subsamples chroma, the chroma
/// of each block is taken from its top-left pixel. When the source subsamples chroma, all pixels
/// of a block share its chroma sample.
///
/// Padding bits, the `X` of format names, are not carried over. They are written as ones, so a
/// round trip through any format only reproduces buffers whose padding is already all ones.
pub fn convert_with(
    source: &BufferView<'_>,
    source_format: Format,
    dest: &mut BufferViewMut<'_>,
    dest_format: Format,
    options: &ConvertOptions,
) -> Result<(), Error> {
    let src_layout = *source.layout();
    let dst_layout = *dest.layout();

    if src_layout.format() != source_format {
        return Err(Error::FormatMismatch {
            expected: source_format,
            actual: src_layout.format(),
        });
    }

    if dst_layout.format() != dest_format {
        return Err(Error::FormatMismatch {
            expected: dest_format,
            actual: dst_layout.format(),
        });
    }

    let (width, height) = (src_layout.width(), src_layout.height());
    if (width, height) != (dst_layout.width(), dst_layout.height()) {
        return Err(Error::DimensionMismatch {
            src_width: width,
            src_height: height,
            dst_width: dst_layout.width(),
            dst_height: dst_layout.height(),
        });
    }

    if !is_supported(source_format, dest_format) {
        debug!(from = %source_format, to = %dest_format, "unsupported conversion");
        return Err(Error::UnsupportedConversion {
            from: source_format,
            to: dest_format,
        });
    }

    debug!(
        from = %source_format,
        to = %dest_format,
        width,
        height,
        encoding = ?options.encoding,
        range = ?options.range,
        "converting"
    );

    let from = source_format.info().color();
    let to = dest_format.info().color();
    let csc = Csc::new(options);

    let decoder = match source_format.info().bayer_pattern() {
        Some(pattern) => Decoder::Bayer(Mosaic::new(source, pattern)?),
        None => Decoder::Words(Reader::new(source)),
    };

    let writer = Writer::new(dest_format.info());
    let mut planes = dest.split_planes();

    for y in 0..height {
        for x in 0..width {
            let pixel = match &decoder {
                Decoder::Words(reader) => reader.read(x, y)?,
                Decoder::Bayer(mosaic) => mosaic.read(x, y)?,
            };

            writer.write(&mut planes, x, y, transform(pixel, from, to, &csc))?;
        }
    }

    Ok(())
}

/// Check whether a conversion between two formats is supported.
pub fn is_supported(from: Format, to: Format) -> bool {
    decodable(from) && encodable(to) && models(from.info().color(), to.info().color())
}

/// All supported pairs of source and destination formats.
pub fn supported_conversions() -> impl Iterator<Item = (Format, Format)> {
    list()
        .iter()
        .flat_map(|from| list().iter().map(move |to| (from.format(), to.format())))
        .filter(|&(from, to)| is_supported(from, to))
}

fn decodable(format: Format) -> bool {
    format.info().color() != ColorModel::Indexed
}

fn encodable(format: Format) -> bool {
    !matches!(format.info().color(), ColorModel::Indexed | ColorModel::Raw)
}

fn models(from: ColorModel, to: ColorModel) -> bool {
    use ColorModel::*;
    matches!((from, to), (Rgb | Yuv | Grey | Raw, Rgb | Yuv | Grey))
}

fn transform(pixel: Pixel, from: ColorModel, to: ColorModel, csc: &Csc) -> Pixel {
    if from == to {
        return pixel;
    }

    let rgb = match from {
        ColorModel::Yuv => expand(csc.yuv_to_rgb(reduce(pixel.samples))),
        ColorModel::Grey => [pixel.samples[0]; 3],
        ColorModel::Rgb | ColorModel::Raw | ColorModel::Indexed => pixel.samples,
    };

    let samples = match to {
        ColorModel::Yuv => expand(csc.rgb_to_yuv(reduce(rgb))),
        ColorModel::Grey => expand([csc.rgb_to_grey(reduce(rgb)), 0, 0]),
        ColorModel::Rgb | ColorModel::Raw | ColorModel::Indexed => rgb,
    };

    Pixel {
        samples,
        alpha: pixel.alpha,
    }
}

#[test]
fn conversion_table() {
    assert!(is_supported(Format::Nv12, Format::Xrgb8888));
    assert!(is_supported(Format::Xrgb8888, Format::Nv12));
    assert!(is_supported(Format::Srggb10P, Format::Bgr888));
    assert!(is_supported(Format::Y8, Format::Yuyv));
    assert!(!is_supported(Format::Xrgb8888, Format::Srggb8));
    assert!(!is_supported(Format::C8, Format::Xrgb8888));
    assert!(!is_supported(Format::Xrgb8888, Format::C8));

    let pairs = supported_conversions().count();
    let sources = list().iter().filter(|info| decodable(info.format())).count();
    let targets = list().iter().filter(|info| encodable(info.format())).count();
    assert_eq!(pairs, sources * targets);
}
