//! Integer color space conversion between RGB and YCbCr.
use crate::math::roundf;

/// The YCbCr matrix coefficients, a choice of luma weights `Kr` and `Kb`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorEncoding {
    /// ITU-R BT.601, standard definition video.
    #[default]
    Bt601,
    /// ITU-R BT.709, high definition video.
    Bt709,
    /// ITU-R BT.2020, non-constant luminance.
    Bt2020,
}

/// The quantization of YCbCr samples.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorRange {
    /// Luma in `16..=235`, chroma in `16..=240`.
    #[default]
    Limited,
    /// All samples use `0..=255`.
    Full,
}

/// Parameters of a conversion.
///
/// The default is BT.601 with limited range, the convention of most capture hardware.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ConvertOptions {
    pub encoding: ColorEncoding,
    pub range: ColorRange,
}

impl ColorEncoding {
    /// The luma weights of red and blue.
    fn weights(self) -> (f32, f32) {
        match self {
            ColorEncoding::Bt601 => (0.299, 0.114),
            ColorEncoding::Bt709 => (0.2126, 0.0722),
            ColorEncoding::Bt2020 => (0.2627, 0.0593),
        }
    }
}

/// Fixed point matrices with 8 fractional bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Csc {
    /// Rows for Y, Cb and Cr, each applied to R, G and B.
    encode: [[i32; 3]; 3],
    /// The full range luma row, for grey output.
    luma: [i32; 3],
    /// Factors for Y, Cr in R, Cb in G, Cr in G and Cb in B.
    decode: [i32; 5],
    y_offset: i32,
}

const ONE: f32 = 256.0;

fn fixed(value: f32) -> i32 {
    roundf(value * ONE) as i32
}

/// Round away the fraction and clamp into a sample.
fn clamp(value: i32) -> u8 {
    ((value + 128) >> 8).clamp(0, 255) as u8
}

/// A row of weights for R and B, with G chosen so the row sums to exactly `total`.
fn row(r: f32, b: f32, total: i32) -> [i32; 3] {
    let (r, b) = (fixed(r), fixed(b));
    [r, total - r - b, b]
}

fn dot(row: [i32; 3], [r, g, b]: [u8; 3]) -> i32 {
    row[0] * i32::from(r) + row[1] * i32::from(g) + row[2] * i32::from(b)
}

impl Csc {
    pub(crate) fn new(options: &ConvertOptions) -> Self {
        let (kr, kb) = options.encoding.weights();
        let kg = 1.0 - kr - kb;

        let (y_scale, c_scale, y_offset) = match options.range {
            ColorRange::Limited => (219.0 / 255.0, 224.0 / 255.0, 16),
            ColorRange::Full => (1.0, 1.0, 0),
        };

        let cb_r = -kr / (2.0 * (1.0 - kb));
        let cr_b = -kb / (2.0 * (1.0 - kr));

        let encode = [
            row(kr * y_scale, kb * y_scale, fixed(y_scale)),
            row(cb_r * c_scale, 0.5 * c_scale, 0),
            row(0.5 * c_scale, cr_b * c_scale, 0),
        ];

        let decode = [
            fixed(1.0 / y_scale),
            fixed(2.0 * (1.0 - kr) / c_scale),
            fixed(-2.0 * (1.0 - kb) * kb / kg / c_scale),
            fixed(-2.0 * (1.0 - kr) * kr / kg / c_scale),
            fixed(2.0 * (1.0 - kb) / c_scale),
        ];

        Csc {
            encode,
            luma: row(kr, kb, fixed(1.0)),
            decode,
            y_offset,
        }
    }

    pub(crate) fn yuv_to_rgb(&self, [y, cb, cr]: [u8; 3]) -> [u8; 3] {
        let y = (i32::from(y) - self.y_offset) * self.decode[0];
        let cb = i32::from(cb) - 128;
        let cr = i32::from(cr) - 128;

        [
            clamp(y + self.decode[1] * cr),
            clamp(y + self.decode[2] * cb + self.decode[3] * cr),
            clamp(y + self.decode[4] * cb),
        ]
    }

    pub(crate) fn rgb_to_yuv(&self, rgb: [u8; 3]) -> [u8; 3] {
        let [y, cb, cr] = self.encode;
        [
            clamp(dot(y, rgb) + (self.y_offset << 8)),
            clamp(dot(cb, rgb) + (128 << 8)),
            clamp(dot(cr, rgb) + (128 << 8)),
        ]
    }

    pub(crate) fn rgb_to_grey(&self, rgb: [u8; 3]) -> u8 {
        clamp(dot(self.luma, rgb))
    }
}
