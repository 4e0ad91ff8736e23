//! Reading and writing single pixels through the plane descriptors of a format.
//!
//! Every plane is a sequence of groups of bytes. A group is loaded as one word in the byte order of
//! the format and its components are taken from the least significant bits upwards. This covers
//! all formats whose groups fit into 32 bits, which is every format of the catalog except the bit
//! packed raw formats.
use crate::format::{ByteOrder, Channel, Component, PixelFormat, PlaneDescriptor, MAX_PLANES};
use crate::view::{BufferView, PlaneView, Planes};
use crate::Error;

/// One pixel with 16 bits per sample.
///
/// The meaning of the samples depends on the color model: R, G, B for RGB, Y, Cb, Cr for YUV and
/// only the first sample for grey or indexed formats. Every field of the catalog fits, so a pixel
/// moves between formats of one color model without losing bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Pixel {
    pub(crate) samples: [u16; 3],
    pub(crate) alpha: u16,
}

impl Pixel {
    pub(crate) const fn new(samples: [u16; 3]) -> Self {
        Pixel {
            samples,
            alpha: 0xffff,
        }
    }
}

/// Decodes pixels from the planes of a source buffer.
pub(crate) struct Reader<'data> {
    info: &'static PixelFormat,
    planes: [Option<PlaneView<'data>>; MAX_PLANES],
}

/// Encodes pixels into the planes of a destination buffer.
pub(crate) struct Writer {
    info: &'static PixelFormat,
}

/// The sample slot of a channel, `None` for channels not carried in samples.
fn slot(channel: Channel) -> Option<usize> {
    match channel {
        Channel::Red | Channel::Luma | Channel::Index | Channel::Raw => Some(0),
        Channel::Green | Channel::Cb => Some(1),
        Channel::Blue | Channel::Cr => Some(2),
        Channel::Alpha | Channel::Padding => None,
    }
}

fn mask(bits: u8) -> u32 {
    (1u32 << bits) - 1
}

/// Scale a field to 16 bits, replicating its bits into the low end.
pub(crate) fn widen(value: u32, bits: u8) -> u16 {
    match bits {
        0 => 0,
        16 => value as u16,
        17..=u8::MAX => (value >> (bits - 16)) as u16,
        _ => {
            let mut word = 0u32;
            let mut filled = 0;
            while filled < 16 {
                word = word << bits | value;
                filled += bits;
            }
            (word >> (filled - 16)) as u16
        }
    }
}

/// Scale a 16 bit sample to a field, keeping its high bits.
pub(crate) fn narrow(value: u16, bits: u8) -> u32 {
    let value = u32::from(value);
    match bits {
        0..=16 => value >> (16 - bits),
        _ => value << (bits - 16),
    }
}

/// The 8 bit samples the color matrices work with.
pub(crate) fn reduce(samples: [u16; 3]) -> [u8; 3] {
    samples.map(|sample| (sample >> 8) as u8)
}

/// 8 bit samples back at full scale, `0xff` becoming `0xffff`.
pub(crate) fn expand(samples: [u8; 3]) -> [u16; 3] {
    samples.map(|sample| u16::from(sample) * 0x101)
}

fn load(bytes: &[u8], order: ByteOrder) -> u32 {
    match order {
        ByteOrder::Little => bytes.iter().rev().fold(0, |word, &b| word << 8 | u32::from(b)),
        ByteOrder::Big => bytes.iter().fold(0, |word, &b| word << 8 | u32::from(b)),
    }
}

fn store(word: u32, bytes: &mut [u8], order: ByteOrder) {
    let len = bytes.len();
    for (idx, byte) in bytes.iter_mut().enumerate() {
        let shift = match order {
            ByteOrder::Little => idx,
            ByteOrder::Big => len - 1 - idx,
        };
        *byte = (word >> (8 * shift)) as u8;
    }
}

/// Where the pixel at some image coordinate lives within one plane.
struct Site {
    row: u32,
    /// The byte range of the group in its row.
    bytes: core::ops::Range<usize>,
    /// The position of the pixel within its group.
    position: u32,
}

impl Site {
    fn new(plane: &PlaneDescriptor, x: u32, y: u32) -> Self {
        let sub = plane.subsampling();
        let x = x / u32::from(sub.horizontal);
        let group = u32::from(plane.group_width());
        let len = usize::from(plane.group_width()) * usize::from(plane.bits_per_pixel()) / 8;
        let start = (x / group) as usize * len;

        Site {
            row: y / u32::from(sub.vertical),
            bytes: start..start + len,
            position: x % group,
        }
    }
}

fn group<'row>(row: &'row [u8], site: &Site) -> Result<&'row [u8], Error> {
    row.get(site.bytes.clone()).ok_or(Error::IndexOutOfRange {
        index: site.bytes.end,
        len: row.len(),
    })
}

fn group_mut<'row>(row: &'row mut [u8], site: &Site) -> Result<&'row mut [u8], Error> {
    let len = row.len();
    row.get_mut(site.bytes.clone()).ok_or(Error::IndexOutOfRange {
        index: site.bytes.end,
        len,
    })
}

/// The components of a group with their bit offsets in the word.
fn fields(components: &[Component]) -> impl Iterator<Item = (u8, Component)> + '_ {
    components.iter().scan(0u8, |shift, &comp| {
        let at = *shift;
        *shift += comp.bits;
        Some((at, comp))
    })
}

impl<'data> Reader<'data> {
    pub(crate) fn new(source: &BufferView<'data>) -> Self {
        let mut planes = [None; MAX_PLANES];
        for (slot, plane) in planes.iter_mut().zip(source.planes()) {
            *slot = Some(plane);
        }

        Reader {
            info: source.layout().info(),
            planes,
        }
    }

    pub(crate) fn read(&self, x: u32, y: u32) -> Result<Pixel, Error> {
        let order = self.info.byte_order();
        let mut pixel = Pixel::new([0; 3]);

        for (plane, descriptor) in self.planes.iter().flatten().zip(self.info.planes()) {
            let site = Site::new(descriptor, x, y);
            let word = load(group(plane.row(site.row)?, &site)?, order);

            let mut luma = 0;
            for (shift, comp) in fields(descriptor.components()) {
                let value = widen(word >> shift & mask(comp.bits), comp.bits);
                match comp.channel {
                    Channel::Luma => {
                        if luma == site.position {
                            pixel.samples[0] = value;
                        }
                        luma += 1;
                    }
                    Channel::Alpha => pixel.alpha = value,
                    Channel::Padding => {}
                    channel => {
                        if let Some(idx) = slot(channel) {
                            pixel.samples[idx] = value;
                        }
                    }
                }
            }
        }

        Ok(pixel)
    }
}

impl Writer {
    pub(crate) fn new(info: &'static PixelFormat) -> Self {
        Writer { info }
    }

    /// Write a pixel, chroma only for the top-left pixel of each chroma block.
    ///
    /// Groups are updated in place, fields belonging to other pixels of the group keep their value.
    pub(crate) fn write(
        &self,
        planes: &mut Planes<'_>,
        x: u32,
        y: u32,
        pixel: Pixel,
    ) -> Result<(), Error> {
        let order = self.info.byte_order();
        let chroma = self.info.chroma_subsampling();
        let sited = x % u32::from(chroma.horizontal) == 0 && y % u32::from(chroma.vertical) == 0;

        for (idx, descriptor) in self.info.planes().iter().enumerate() {
            let sub = descriptor.subsampling();
            if x % u32::from(sub.horizontal) != 0 || y % u32::from(sub.vertical) != 0 {
                continue;
            }

            let site = Site::new(descriptor, x, y);
            let plane = planes.get_mut(idx)?;
            let bytes = group_mut(plane.row_mut(site.row)?, &site)?;
            let mut word = load(bytes, order);

            let mut luma = 0;
            for (shift, comp) in fields(descriptor.components()) {
                let value = match comp.channel {
                    Channel::Luma => {
                        luma += 1;
                        if luma - 1 != site.position {
                            continue;
                        }
                        narrow(pixel.samples[0], comp.bits)
                    }
                    Channel::Cb | Channel::Cr if !sited => continue,
                    Channel::Alpha => narrow(pixel.alpha, comp.bits),
                    Channel::Padding => mask(comp.bits),
                    channel => match slot(channel) {
                        Some(idx) => narrow(pixel.samples[idx], comp.bits),
                        None => continue,
                    },
                };

                let field = mask(comp.bits) << shift;
                word = word & !field | value << shift & field;
            }

            store(word, bytes, order);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widening() {
        assert_eq!(widen(0x1f, 5), 0xffff);
        assert_eq!(widen(0x10, 5), 0x8421);
        assert_eq!(widen(1, 1), 0xffff);
        assert_eq!(widen(0b10, 2), 0xaaaa);
        assert_eq!(widen(0xab, 8), 0xabab);
        assert_eq!(widen(0x3ff, 10), 0xffff);
        assert_eq!(widen(0x200, 10), 0x8020);
        assert_eq!(widen(0x1234, 16), 0x1234);
    }

    #[test]
    fn narrowing() {
        assert_eq!(narrow(0xffff, 5), 0x1f);
        assert_eq!(narrow(0x8421, 5), 0x10);
        assert_eq!(narrow(0xabab, 8), 0xab);
        assert_eq!(narrow(0x8020, 10), 0x200);
        assert_eq!(narrow(0x1234, 16), 0x1234);
        for bits in 1..=16 {
            for value in 0..(1u32 << bits) {
                assert_eq!(narrow(widen(value, bits), bits), value);
            }
        }
    }

    #[test]
    fn matrix_depth() {
        assert_eq!(reduce([0xffff, 0x8020, 0x00ff]), [0xff, 0x80, 0x00]);
        assert_eq!(expand([0xff, 0x80, 0x00]), [0xffff, 0x8080, 0x0000]);
        for value in 0..=u8::MAX {
            assert_eq!(reduce(expand([value; 3])), [value; 3]);
            assert_eq!(expand([value; 3])[0], widen(u32::from(value), 8));
        }
    }

    #[test]
    fn byte_orders() {
        let mut bytes = [0u8; 2];
        store(0xf800, &mut bytes, ByteOrder::Little);
        assert_eq!(bytes, [0x00, 0xf8]);
        assert_eq!(load(&bytes, ByteOrder::Little), 0xf800);
        store(0xf800, &mut bytes, ByteOrder::Big);
        assert_eq!(bytes, [0xf8, 0x00]);
        assert_eq!(load(&bytes, ByteOrder::Big), 0xf800);
        assert_eq!(load(&[1, 2, 3], ByteOrder::Little), 0x030201);
    }
}
