//! Plane geometry of a format at particular image dimensions.
use core::ops::Range;

use tracing::trace;

use crate::format::{Format, PixelFormat, PlaneDescriptor, MAX_PLANES};
use crate::Error;

/// The placement of one plane within a buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PlaneLayout {
    offset: usize,
    stride: usize,
    width: u32,
    height: u32,
    row_bytes: usize,
}

/// An externally chosen placement of a plane, such as the `bytesperline` of V4L2 or the
/// `pitches` and `offsets` of a DRM framebuffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PlaneSpec {
    pub offset: usize,
    pub stride: usize,
}

/// The complete layout of one image of some format in a single buffer.
///
/// A layout is a plain value. Its planes are ordered, do not overlap, and every row fits into the
/// stride of its plane. These are checked once on construction, views rely on them afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BufferLayout {
    format: Format,
    width: u32,
    height: u32,
    planes: [PlaneLayout; MAX_PLANES],
    num_planes: u8,
    total_size: usize,
}

/// Arguments for a `DRM_IOCTL_MODE_CREATE_DUMB` request of a single plane.
///
/// The kernel allocates `width × height × bpp / 8` bytes. Formats with groups of pixels are
/// described as an image of groups, one group being one wide 'pixel'.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DumbSize {
    pub width: u32,
    pub height: u32,
    pub bpp: u32,
}

/// Compute the tightly packed layout of a format, rows aligned to `alignment` bytes.
pub fn compute_layout(
    format: Format,
    width: u32,
    height: u32,
    alignment: u32,
) -> Result<BufferLayout, Error> {
    BufferLayout::new(format, width, height, alignment)
}

/// The stride of a plane of a format, its raw row size rounded up to `alignment`.
pub fn stride(format: Format, width: u32, plane: usize, alignment: u32) -> Result<usize, Error> {
    // The stride does not depend on the height, any valid height will do.
    let layout = BufferLayout::new(format, width, 1, alignment)?;
    Ok(layout.plane(plane)?.stride)
}

/// The number of bytes a plane occupies in a buffer of the format.
pub fn plane_size(
    format: Format,
    width: u32,
    height: u32,
    plane: usize,
    alignment: u32,
) -> Result<usize, Error> {
    let layout = BufferLayout::new(format, width, height, alignment)?;
    Ok(layout.plane(plane)?.size())
}

/// The number of bytes of a buffer holding one image of the format.
pub fn frame_size(format: Format, width: u32, height: u32, alignment: u32) -> Result<usize, Error> {
    Ok(BufferLayout::new(format, width, height, alignment)?.total_size)
}

fn round_up_div(dimension: u32, div: u8) -> u32 {
    let div = u32::from(div);
    dimension / div + if dimension % div == 0 { 0 } else { 1 }
}

fn round_up(value: usize, alignment: usize) -> Option<usize> {
    debug_assert!(alignment.is_power_of_two());
    Some(value.checked_add(alignment - 1)? & !(alignment - 1))
}

fn check_dimensions(width: u32, height: u32) -> Result<(), Error> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimensions { width, height });
    }

    Ok(())
}

fn check_alignment(alignment: u32) -> Result<usize, Error> {
    if !alignment.is_power_of_two() {
        return Err(Error::InvalidAlignment(alignment));
    }

    usize::try_from(alignment).map_err(|_| Error::InvalidAlignment(alignment))
}

impl PlaneDescriptor {
    /// The dimensions of this plane in samples and the bytes of one of its rows, unaligned.
    fn extent(&self, width: u32, height: u32) -> Option<(u32, u32, usize)> {
        let subsampling = self.subsampling();
        let plane_width = round_up_div(width, subsampling.horizontal);
        let plane_height = round_up_div(height, subsampling.vertical);

        // A row always holds whole groups of pixels.
        let groups = round_up_div(plane_width, self.group_width());
        let bits = u64::from(groups)
            * u64::from(self.group_width())
            * u64::from(self.bits_per_pixel());
        let row_bytes = usize::try_from(bits.div_ceil(8)).ok()?;

        Some((plane_width, plane_height, row_bytes))
    }
}

impl PixelFormat {
    /// The arguments for allocating one plane of this format as a dumb buffer.
    ///
    /// The product of the three values, divided by eight, equals the unaligned size of the plane.
    pub fn dumb_size(&self, width: u32, height: u32, plane: usize) -> Result<DumbSize, Error> {
        check_dimensions(width, height)?;
        let descriptor = self.plane(plane)?;
        let (plane_width, plane_height, _) = descriptor
            .extent(width, height)
            .ok_or(Error::InvalidDimensions { width, height })?;

        Ok(DumbSize {
            width: round_up_div(plane_width, descriptor.group_width()),
            height: plane_height,
            bpp: u32::from(descriptor.group_width()) * u32::from(descriptor.bits_per_pixel()),
        })
    }
}

impl BufferLayout {
    /// Lay out all planes consecutively, each row padded to a multiple of `alignment`.
    pub fn new(format: Format, width: u32, height: u32, alignment: u32) -> Result<Self, Error> {
        check_dimensions(width, height)?;
        let alignment = check_alignment(alignment)?;
        let overflow = || Error::InvalidDimensions { width, height };

        let info = format.info();
        let mut planes = [PlaneLayout::default(); MAX_PLANES];
        let mut offset: usize = 0;

        for (plane, descriptor) in planes.iter_mut().zip(info.planes()) {
            let (plane_width, plane_height, row_bytes) =
                descriptor.extent(width, height).ok_or_else(overflow)?;
            let stride = round_up(row_bytes, alignment).ok_or_else(overflow)?;

            *plane = PlaneLayout {
                offset,
                stride,
                width: plane_width,
                height: plane_height,
                row_bytes,
            };

            offset = plane.end().ok_or_else(overflow)?;
        }

        let layout = BufferLayout {
            format,
            width,
            height,
            planes,
            num_planes: info.num_planes() as u8,
            total_size: offset,
        };

        trace!(%format, width, height, total_size = offset, "computed layout");
        Ok(layout)
    }

    /// Validate the layout of a buffer allocated elsewhere.
    ///
    /// The planes must be given in format order. Strides may be larger than the row of their
    /// plane but not smaller, and each plane must start at or after the end of its predecessor.
    pub fn with_planes(
        format: Format,
        width: u32,
        height: u32,
        specs: &[PlaneSpec],
    ) -> Result<Self, Error> {
        check_dimensions(width, height)?;
        let overflow = || Error::InvalidDimensions { width, height };

        let info = format.info();
        if specs.len() != info.num_planes() {
            return Err(Error::PlaneCount {
                expected: info.num_planes(),
                actual: specs.len(),
            });
        }

        let mut planes = [PlaneLayout::default(); MAX_PLANES];
        let mut last_plane_end = 0;

        let described = info.planes().iter().zip(specs).enumerate();
        for ((idx, (descriptor, spec)), plane) in described.zip(&mut planes) {
            if spec.offset < last_plane_end {
                return Err(Error::OverlappingPlanes { plane: idx });
            }

            let (plane_width, plane_height, row_bytes) =
                descriptor.extent(width, height).ok_or_else(overflow)?;

            if spec.stride < row_bytes {
                return Err(Error::InvalidStride {
                    plane: idx,
                    stride: spec.stride,
                    min: row_bytes,
                });
            }

            *plane = PlaneLayout {
                offset: spec.offset,
                stride: spec.stride,
                width: plane_width,
                height: plane_height,
                row_bytes,
            };

            last_plane_end = plane.end().ok_or_else(overflow)?;
        }

        let layout = BufferLayout {
            format,
            width,
            height,
            planes,
            num_planes: info.num_planes() as u8,
            total_size: last_plane_end,
        };

        trace!(%format, width, height, total_size = last_plane_end, "validated layout");
        Ok(layout)
    }

    pub fn format(&self) -> Format {
        self.format
    }

    pub fn info(&self) -> &'static PixelFormat {
        self.format.info()
    }

    /// The width of the image in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// The height of the image in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn num_planes(&self) -> usize {
        usize::from(self.num_planes)
    }

    pub fn planes(&self) -> &[PlaneLayout] {
        &self.planes[..self.num_planes()]
    }

    pub fn plane(&self, idx: usize) -> Result<&PlaneLayout, Error> {
        self.planes().get(idx).ok_or(Error::IndexOutOfRange {
            index: idx,
            len: self.num_planes(),
        })
    }

    /// The number of bytes a buffer needs to hold the image.
    pub fn total_size(&self) -> usize {
        self.total_size
    }
}

impl PlaneLayout {
    /// The offset of the first row from the start of the buffer.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The distance between the starts of consecutive rows.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// The width of the plane in samples.
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The bytes of a row that hold pixel data, the rest of the stride is padding.
    pub fn row_bytes(&self) -> usize {
        self.row_bytes
    }

    pub fn size(&self) -> usize {
        self.stride * self.height as usize
    }

    /// The bytes of the buffer covered by this plane.
    pub fn byte_range(&self) -> Range<usize> {
        self.offset..self.offset + self.size()
    }

    fn end(&self) -> Option<usize> {
        let size = self.stride.checked_mul(usize::try_from(self.height).ok()?)?;
        self.offset.checked_add(size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: u32 = 1920;
    const H: u32 = 1080;

    #[test]
    fn common_strides() -> Result<(), Error> {
        let table: &[(Format, &[usize])] = &[
            (Format::Xrgb8888, &[7680]),
            (Format::Rgb888, &[5760]),
            (Format::Rgb565, &[3840]),
            (Format::Yuyv, &[3840]),
            (Format::Nv12, &[1920, 1920]),
            (Format::Nv16, &[1920, 1920]),
            (Format::Yuv420, &[1920, 960, 960]),
            (Format::Sbggr8, &[1920]),
            (Format::Srggb10, &[3840]),
            (Format::Srggb10P, &[2400]),
            (Format::Srggb12P, &[2880]),
        ];

        for &(format, strides) in table {
            let layout = compute_layout(format, W, H, 1)?;
            let actual: Vec<_> = layout.planes().iter().map(PlaneLayout::stride).collect();
            assert_eq!(actual, strides, "{format}");
        }

        Ok(())
    }

    #[test]
    fn semi_planar_sizes() -> Result<(), Error> {
        assert_eq!(plane_size(Format::Nv12, W, H, 0, 1)?, 1920 * 1080);
        assert_eq!(plane_size(Format::Nv12, W, H, 1, 1)?, 1920 * 540);
        assert_eq!(plane_size(Format::Nv16, W, H, 1, 1)?, 1920 * 1080);
        assert_eq!(frame_size(Format::Nv12, W, H, 1)?, 1920 * 1080 * 3 / 2);
        assert_eq!(
            plane_size(Format::Nv12, W, H, 2, 1),
            Err(Error::IndexOutOfRange { index: 2, len: 2 })
        );
        Ok(())
    }

    #[test]
    fn dumb_sizes_match_planes() -> Result<(), Error> {
        for info in crate::list() {
            for plane in 0..info.num_planes() {
                let dumb = info.dumb_size(W, H, plane)?;
                let bits = u64::from(dumb.width) * u64::from(dumb.height) * u64::from(dumb.bpp);
                let size = plane_size(info.format(), W, H, plane, 1)?;
                assert_eq!(bits / 8, size as u64, "{info} plane {plane}");
            }
        }

        let yuyv = Format::Yuyv.info().dumb_size(W, H, 0)?;
        assert_eq!(yuyv, DumbSize { width: 960, height: 1080, bpp: 32 });
        Ok(())
    }

    #[test]
    fn aligned_strides() -> Result<(), Error> {
        assert_eq!(stride(Format::Rgb888, 3, 0, 1)?, 9);
        assert_eq!(stride(Format::Rgb888, 3, 0, 4)?, 12);
        assert_eq!(stride(Format::Rgb888, 3, 0, 64)?, 64);
        assert_eq!(stride(Format::Yuv420, 5, 1, 1)?, 3);
        // A partial group still occupies all of its bytes.
        assert_eq!(stride(Format::Srggb10P, 5, 0, 1)?, 10);
        assert_eq!(stride(Format::Yuyv, 3, 0, 1)?, 8);
        Ok(())
    }

    #[test]
    fn rejects_arguments() {
        assert_eq!(
            compute_layout(Format::Nv12, 0, 4, 1),
            Err(Error::InvalidDimensions { width: 0, height: 4 })
        );
        assert_eq!(
            compute_layout(Format::Nv12, 4, 0, 1),
            Err(Error::InvalidDimensions { width: 4, height: 0 })
        );
        assert_eq!(compute_layout(Format::Nv12, 4, 4, 0), Err(Error::InvalidAlignment(0)));
        assert_eq!(compute_layout(Format::Nv12, 4, 4, 3), Err(Error::InvalidAlignment(3)));
    }

    #[test]
    fn overflowing_layout() {
        assert_eq!(
            compute_layout(Format::Xrgb8888, u32::MAX, u32::MAX, 1),
            Err(Error::InvalidDimensions { width: u32::MAX, height: u32::MAX })
        );
    }
}
