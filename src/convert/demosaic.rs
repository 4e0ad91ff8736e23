//! Raw Bayer sensor data to RGB.
use crate::format::{BayerPattern, Channel, PixelFormat};
use crate::view::{BufferView, PlaneView};
use crate::Error;

use super::codec::{widen, Pixel};

/// Reconstructs RGB from a color filter array.
///
/// Each color of a pixel is the average of the samples of that color in the 3×3 window centered
/// on it, clipped at the image borders. A flat field stays flat.
pub(crate) struct Mosaic<'data> {
    plane: PlaneView<'data>,
    pattern: BayerPattern,
    bits: u8,
    /// Bytes of a bit packed group, `None` for samples in whole bytes or words.
    packed_group: Option<(usize, u32)>,
    width: u32,
    height: u32,
}

fn byte_at(row: &[u8], idx: usize) -> Result<u8, Error> {
    row.get(idx).copied().ok_or(Error::IndexOutOfRange {
        index: idx,
        len: row.len(),
    })
}

impl<'data> Mosaic<'data> {
    pub(crate) fn new(source: &BufferView<'data>, pattern: BayerPattern) -> Result<Self, Error> {
        let info: &PixelFormat = source.layout().info();
        let plane = source.plane(0)?;
        let descriptor = info.plane(0)?;
        let bits = descriptor
            .components()
            .iter()
            .find(|comp| comp.channel == Channel::Raw)
            .map_or(descriptor.bits_per_pixel(), |comp| comp.bits);

        let packed_group = info.is_packed().then(|| {
            let group = descriptor.group_width();
            let len = usize::from(group) * usize::from(descriptor.bits_per_pixel()) / 8;
            (len, u32::from(group))
        });

        Ok(Mosaic {
            plane,
            pattern,
            bits,
            packed_group,
            width: source.layout().width(),
            height: source.layout().height(),
        })
    }

    /// The sample at a sensor position, at the depth of the format.
    fn sample(&self, x: u32, y: u32) -> Result<u16, Error> {
        let row = self.plane.row(y)?;

        if let Some((len, group)) = self.packed_group {
            // CSI-2 packing stores the high 8 bits of each pixel in its own byte, the low bits of
            // the whole group follow in one byte, first pixel in the least significant bits.
            let start = (x / group) as usize * len;
            let position = x % group;
            let high = u16::from(byte_at(row, start + position as usize)?);
            let low = u16::from(byte_at(row, start + group as usize)?);

            let low_bits = u32::from(self.bits - 8);
            let low = low >> (low_bits * position) & ((1 << low_bits) - 1);
            return Ok(high << low_bits | low);
        }

        if self.bits == 8 {
            return byte_at(row, x as usize).map(u16::from);
        }

        let idx = 2 * x as usize;
        let word = u16::from_le_bytes([byte_at(row, idx)?, byte_at(row, idx + 1)?]);
        Ok((u32::from(word) & ((1u32 << self.bits) - 1)) as u16)
    }

    /// Interpolate the pixel at a sensor position.
    ///
    /// Averages are taken at the depth of the format and only then scaled.
    pub(crate) fn read(&self, x: u32, y: u32) -> Result<Pixel, Error> {
        let mut sum = [0u32; 3];
        let mut count = [0u32; 3];

        let rows = y.saturating_sub(1)..=(y + 1).min(self.height - 1);
        for ny in rows {
            let columns = x.saturating_sub(1)..=(x + 1).min(self.width - 1);
            for nx in columns {
                let idx = match self.pattern.channel_at(nx, ny) {
                    Channel::Red => 0,
                    Channel::Green => 1,
                    _ => 2,
                };
                sum[idx] += u32::from(self.sample(nx, ny)?);
                count[idx] += 1;
            }
        }

        let mut samples = [0u16; 3];
        for ((sample, sum), count) in samples.iter_mut().zip(sum).zip(count) {
            *sample = widen(sum.checked_div(count).unwrap_or(0), self.bits);
        }

        Ok(Pixel::new(samples))
    }
}
