// Distributed under The MIT License (MIT)
//
// Copyright (c) 2024 The `pixutils` developers
//! # Pixutils
//!
//! Pixel formats of the Linux display (KMS/DRM) and video capture (V4L2) subsystems, the memory
//! layout of buffers in those formats, and conversions between them.
//!
//! ## Usage
//!
//! ```
//! use pixutils::{compute_layout, convert, lookup, wrap, wrap_mut, Format, FourCC};
//!
//! let nv12 = lookup(FourCC::new(*b"NV12"))?.format();
//! let source = compute_layout(nv12, 4, 4, 1)?;
//! let target = compute_layout(Format::Xrgb8888, 4, 4, 1)?;
//! assert_eq!(source.total_size(), 24);
//!
//! // Limited range white.
//! let mut frame = vec![235u8; 16];
//! frame.resize(source.total_size(), 128);
//! let mut rgb = vec![0u8; target.total_size()];
//!
//! let source = wrap(&frame, source)?;
//! let mut target = wrap_mut(&mut rgb, target)?;
//! convert(&source, nv12, &mut target, Format::Xrgb8888)?;
//! assert!(rgb.iter().all(|&b| b == 0xff));
//! # Ok::<_, pixutils::Error>(())
//! ```
#![deny(unsafe_code)]

mod convert;
mod error;
mod format;
mod layout;
mod math;
pub mod meta;
mod view;

pub use pixutils_fourcc::{drm, v4l2, FourCC, FourCCError};

pub use self::convert::{
    convert, convert_with, is_supported, supported_conversions, ColorEncoding, ColorRange,
    ConvertOptions,
};
pub use self::error::Error;
pub use self::format::{
    list, lookup, BayerPattern, ByteOrder, Channel, ColorModel, Component, Format, PixelFormat,
    PlaneDescriptor, Subsampling, MAX_PLANES,
};
pub use self::layout::{
    compute_layout, frame_size, plane_size, stride, BufferLayout, DumbSize, PlaneLayout, PlaneSpec,
};
pub use self::view::{
    wrap, wrap_mut, BufferView, BufferViewMut, PlaneView, PlaneViewMut, Planes,
};
