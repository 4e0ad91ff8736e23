// Distributed under The MIT License (MIT)
//
// Copyright (c) 2024 The `pixutils` developers
//! Borrowed views of caller memory interpreted through a layout.
//!
//! Views never own their bytes. The buffer may be a mapped kernel buffer, a plain allocation or a
//! test fixture, the view only ties it to a [`BufferLayout`] for the lifetime of the borrow. Any
//! number of shared views may alias one region while a mutable view is exclusive, so a conversion
//! can not write into the buffer it reads from.
use core::mem;

use bytemuck::Pod;

use crate::format::MAX_PLANES;
use crate::layout::{BufferLayout, PlaneLayout};
use crate::Error;

/// A shared view of a buffer holding one image.
#[derive(Clone, Copy, Debug)]
pub struct BufferView<'data> {
    data: &'data [u8],
    layout: BufferLayout,
}

/// An exclusive view of a buffer holding one image.
#[derive(Debug)]
pub struct BufferViewMut<'data> {
    data: &'data mut [u8],
    layout: BufferLayout,
}

/// The rows of one plane of a buffer.
#[derive(Clone, Copy, Debug)]
pub struct PlaneView<'data> {
    data: &'data [u8],
    layout: PlaneLayout,
}

/// The rows of one plane of a buffer, writable.
#[derive(Debug)]
pub struct PlaneViewMut<'data> {
    data: &'data mut [u8],
    layout: PlaneLayout,
}

/// The disjoint planes of one mutable buffer, see [`BufferViewMut::split_planes`].
#[derive(Debug, Default)]
pub struct Planes<'data> {
    planes: [Option<PlaneViewMut<'data>>; MAX_PLANES],
    len: usize,
}

/// Wrap a region, failing when it is smaller than the layout.
pub fn wrap(region: &[u8], layout: BufferLayout) -> Result<BufferView<'_>, Error> {
    BufferView::new(region, layout)
}

/// Wrap a mutable region, failing when it is smaller than the layout.
pub fn wrap_mut(region: &mut [u8], layout: BufferLayout) -> Result<BufferViewMut<'_>, Error> {
    BufferViewMut::new(region, layout)
}

fn check_size(len: usize, layout: &BufferLayout) -> Result<(), Error> {
    if len < layout.total_size() {
        return Err(Error::BufferTooSmall {
            needed: layout.total_size(),
            actual: len,
        });
    }

    Ok(())
}

fn row_range(layout: &PlaneLayout, y: u32) -> Result<core::ops::Range<usize>, Error> {
    if y >= layout.height() {
        return Err(Error::IndexOutOfRange {
            index: y as usize,
            len: layout.height() as usize,
        });
    }

    let start = y as usize * layout.stride();
    Ok(start..start + layout.stride())
}

/// The byte range of texel `x` of type `T` within a row.
fn texel_range<T>(layout: &PlaneLayout, x: u32) -> Result<core::ops::Range<usize>, Error> {
    let size = mem::size_of::<T>();
    let len = layout.row_bytes() / size.max(1);
    if x as usize >= len {
        return Err(Error::IndexOutOfRange {
            index: x as usize,
            len,
        });
    }

    let start = x as usize * size;
    Ok(start..start + size)
}

impl<'data> BufferView<'data> {
    pub fn new(data: &'data [u8], layout: BufferLayout) -> Result<Self, Error> {
        check_size(data.len(), &layout)?;
        Ok(BufferView { data, layout })
    }

    pub fn layout(&self) -> &BufferLayout {
        &self.layout
    }

    /// The complete wrapped region, including any bytes beyond the layout.
    pub fn as_bytes(&self) -> &'data [u8] {
        self.data
    }

    pub fn plane(&self, idx: usize) -> Result<PlaneView<'data>, Error> {
        let layout = *self.layout.plane(idx)?;
        Ok(PlaneView {
            data: &self.data[layout.byte_range()],
            layout,
        })
    }

    /// All planes in format order.
    pub fn planes(&self) -> impl Iterator<Item = PlaneView<'data>> + '_ {
        let data = self.data;
        self.layout.planes().iter().map(move |&layout| PlaneView {
            data: &data[layout.byte_range()],
            layout,
        })
    }
}

impl<'data> BufferViewMut<'data> {
    pub fn new(data: &'data mut [u8], layout: BufferLayout) -> Result<Self, Error> {
        check_size(data.len(), &layout)?;
        Ok(BufferViewMut { data, layout })
    }

    pub fn layout(&self) -> &BufferLayout {
        &self.layout
    }

    /// Reborrow as a shared view.
    pub fn as_view(&self) -> BufferView<'_> {
        BufferView {
            data: &*self.data,
            layout: self.layout,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &*self.data
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut *self.data
    }

    pub fn plane(&self, idx: usize) -> Result<PlaneView<'_>, Error> {
        let layout = *self.layout.plane(idx)?;
        Ok(PlaneView {
            data: &self.data[layout.byte_range()],
            layout,
        })
    }

    pub fn plane_mut(&mut self, idx: usize) -> Result<PlaneViewMut<'_>, Error> {
        let layout = *self.layout.plane(idx)?;
        Ok(PlaneViewMut {
            data: &mut self.data[layout.byte_range()],
            layout,
        })
    }

    /// Borrow all planes mutably at once.
    ///
    /// Planes of a layout are ordered and disjoint, so the region is split between them without
    /// any aliasing.
    pub fn split_planes(&mut self) -> Planes<'_> {
        let mut planes = Planes::default();
        let mut rest: &mut [u8] = &mut *self.data;
        let mut consumed = 0;

        for (slot, layout) in planes.planes.iter_mut().zip(self.layout.planes()) {
            let tail = mem::take(&mut rest);
            let (_, tail) = tail.split_at_mut(layout.offset() - consumed);
            let (data, tail) = tail.split_at_mut(layout.size());
            consumed = layout.byte_range().end;
            rest = tail;

            *slot = Some(PlaneViewMut {
                data,
                layout: *layout,
            });
            planes.len += 1;
        }

        planes
    }
}

impl<'data> PlaneView<'data> {
    pub fn layout(&self) -> &PlaneLayout {
        &self.layout
    }

    /// The bytes of the plane, `stride × height` of them.
    pub fn as_bytes(&self) -> &'data [u8] {
        self.data
    }

    /// A full row including the padding up to the stride.
    pub fn row(&self, y: u32) -> Result<&'data [u8], Error> {
        Ok(&self.data[row_range(&self.layout, y)?])
    }

    /// The bytes of a row that hold pixels.
    pub fn row_pixels(&self, y: u32) -> Result<&'data [u8], Error> {
        Ok(&self.row(y)?[..self.layout.row_bytes()])
    }

    pub fn rows(&self) -> impl Iterator<Item = &'data [u8]> {
        self.data.chunks_exact(self.layout.stride())
    }

    /// Read the `x`-th value of type `T` in row `y`.
    ///
    /// The index counts values of `T`, not pixels. Only the pixel bytes of a row are accessible.
    pub fn read_texel<T: Pod>(&self, x: u32, y: u32) -> Result<T, Error> {
        let row = self.row(y)?;
        Ok(bytemuck::pod_read_unaligned(&row[texel_range::<T>(&self.layout, x)?]))
    }
}

impl<'data> PlaneViewMut<'data> {
    pub fn layout(&self) -> &PlaneLayout {
        &self.layout
    }

    pub fn as_view(&self) -> PlaneView<'_> {
        PlaneView {
            data: &*self.data,
            layout: self.layout,
        }
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut *self.data
    }

    pub fn row(&self, y: u32) -> Result<&[u8], Error> {
        Ok(&self.data[row_range(&self.layout, y)?])
    }

    pub fn row_mut(&mut self, y: u32) -> Result<&mut [u8], Error> {
        Ok(&mut self.data[row_range(&self.layout, y)?])
    }

    pub fn row_pixels_mut(&mut self, y: u32) -> Result<&mut [u8], Error> {
        let row_bytes = self.layout.row_bytes();
        Ok(&mut self.row_mut(y)?[..row_bytes])
    }

    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [u8]> {
        self.data.chunks_exact_mut(self.layout.stride())
    }

    pub fn read_texel<T: Pod>(&self, x: u32, y: u32) -> Result<T, Error> {
        self.as_view().read_texel(x, y)
    }

    /// Overwrite the `x`-th value of type `T` in row `y`.
    pub fn write_texel<T: Pod>(&mut self, x: u32, y: u32, value: T) -> Result<(), Error> {
        let range = texel_range::<T>(&self.layout, x)?;
        let row = self.row_mut(y)?;
        row[range].copy_from_slice(bytemuck::bytes_of(&value));
        Ok(())
    }
}

impl<'data> Planes<'data> {
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn get(&self, idx: usize) -> Result<&PlaneViewMut<'data>, Error> {
        let len = self.len;
        self.planes
            .get(idx)
            .and_then(Option::as_ref)
            .ok_or(Error::IndexOutOfRange { index: idx, len })
    }

    pub fn get_mut(&mut self, idx: usize) -> Result<&mut PlaneViewMut<'data>, Error> {
        let len = self.len;
        self.planes
            .get_mut(idx)
            .and_then(Option::as_mut)
            .ok_or(Error::IndexOutOfRange { index: idx, len })
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut PlaneViewMut<'data>> {
        self.planes.iter_mut().flatten()
    }
}
