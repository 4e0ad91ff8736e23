use pixutils::{
    compute_layout, convert, convert_with, wrap, wrap_mut, BufferLayout, ColorRange,
    ConvertOptions, Error, Format,
};

/// Deterministic bytes without structure.
fn noise(len: usize) -> Vec<u8> {
    let mut state: u64 = 0x853c_49e6_748f_ea9b;
    (0..len)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            (state >> 33) as u8
        })
        .collect()
}

fn convert_to(
    data: &[u8],
    layout: BufferLayout,
    to: Format,
    options: &ConvertOptions,
) -> Result<Vec<u8>, Error> {
    let target = compute_layout(to, layout.width(), layout.height(), 1)?;
    let mut output = vec![0; target.total_size()];

    let source = wrap(data, layout)?;
    let mut dest = wrap_mut(&mut output, target)?;
    convert_with(&source, layout.format(), &mut dest, to, options)?;
    Ok(output)
}

fn round_trip(
    format: Format,
    via: Format,
    data: &[u8],
    width: u32,
    height: u32,
) -> Result<(), Error> {
    let options = ConvertOptions::default();
    let layout = compute_layout(format, width, height, 1)?;
    let there = convert_to(data, layout, via, &options)?;
    let back = convert_to(&there, compute_layout(via, width, height, 1)?, format, &options)?;
    assert_eq!(back, data, "{format} via {via}");
    Ok(())
}

#[test]
fn white_yuv_is_white_rgb() -> Result<(), Error> {
    let frames: &[(Format, Vec<u8>)] = &[
        (Format::Nv12, [&[235u8; 4][..], &[128; 2][..]].concat()),
        (Format::Nv21, [&[235u8; 4][..], &[128; 2][..]].concat()),
        (Format::Yuv420, [&[235u8; 4][..], &[128; 2][..]].concat()),
        (Format::Nv16, [&[235u8; 4][..], &[128; 4][..]].concat()),
        (Format::Nv24, [&[235u8; 4][..], &[128; 8][..]].concat()),
        (Format::Yuv444, [&[235u8; 4][..], &[128; 8][..]].concat()),
        (Format::Yuyv, [235u8, 128, 235, 128].repeat(2)),
        (Format::Uyvy, [128u8, 235, 128, 235].repeat(2)),
        (Format::Vuy888, [235u8, 128, 128].repeat(4)),
        (Format::Xyuv8888, [128u8, 128, 235, 0].repeat(4)),
    ];

    for (format, data) in frames {
        let layout = compute_layout(*format, 2, 2, 1)?;
        assert_eq!(layout.total_size(), data.len(), "{format}");

        for to in [Format::Xrgb8888, Format::Rgb888, Format::Bgr888, Format::Rgb565] {
            let rgb = convert_to(data, layout, to, &ConvertOptions::default())?;
            assert!(rgb.iter().all(|&b| b == 0xff), "{format} to {to}: {rgb:?}");
        }
    }

    Ok(())
}

#[test]
fn bt601_levels() -> Result<(), Error> {
    let options = ConvertOptions::default();
    let layout = compute_layout(Format::Xrgb8888, 2, 2, 1)?;

    for (level, luma) in [(0u8, 16u8), (128, 126), (255, 235)] {
        let rgb = [level, level, level, 0xff].repeat(4);
        let yuv = convert_to(&rgb, layout, Format::Nv12, &options)?;
        assert_eq!(&yuv[..4], &[luma; 4]);
        assert_eq!(&yuv[4..], &[128, 128]);

        let nv12 = compute_layout(Format::Nv12, 2, 2, 1)?;
        let back = convert_to(&yuv, nv12, Format::Xrgb8888, &options)?;
        assert_eq!(back, rgb);
    }

    // Pure red, limited range.
    let red = [0u8, 0, 0xff, 0xff].repeat(4);
    let yuv = convert_to(&red, layout, Format::Yuv444, &options)?;
    assert_eq!(yuv, [[82u8; 4], [90; 4], [240; 4]].concat());

    Ok(())
}

#[test]
fn full_range() -> Result<(), Error> {
    let full = ConvertOptions {
        range: ColorRange::Full,
        ..ConvertOptions::default()
    };
    let layout = compute_layout(Format::Vuy888, 1, 1, 1)?;

    assert_eq!(convert_to(&[255, 128, 128], layout, Format::Bgr888, &full)?, [255, 255, 255]);
    assert_eq!(convert_to(&[0, 128, 128], layout, Format::Bgr888, &full)?, [0, 0, 0]);
    assert_eq!(convert_to(&[100, 128, 128], layout, Format::Bgr888, &full)?, [100, 100, 100]);

    // Limited range clamps the same values instead.
    let limited = ConvertOptions::default();
    assert_eq!(convert_to(&[255, 128, 128], layout, Format::Bgr888, &limited)?, [255, 255, 255]);
    assert_eq!(convert_to(&[0, 128, 128], layout, Format::Bgr888, &limited)?, [0, 0, 0]);
    Ok(())
}

#[test]
fn lossless_round_trips() -> Result<(), Error> {
    let (width, height) = (8, 6);

    let mut xrgb = noise(width as usize * height as usize * 4);
    // Padding is written as ones, start from it.
    xrgb.iter_mut().skip(3).step_by(4).for_each(|x| *x = 0xff);
    round_trip(Format::Xrgb8888, Format::Bgr888, &xrgb, width, height)?;
    round_trip(Format::Xrgb8888, Format::Rgbx8888, &xrgb, width, height)?;

    let abgr = noise(width as usize * height as usize * 4);
    round_trip(Format::Abgr8888, Format::Argb8888, &abgr, width, height)?;
    round_trip(Format::Abgr8888, Format::Rgba8888, &abgr, width, height)?;

    let rgb565 = noise(width as usize * height as usize * 2);
    round_trip(Format::Rgb565, Format::Rgb888, &rgb565, width, height)?;
    round_trip(Format::Rgb565, Format::Rgb565X, &rgb565, width, height)?;

    let nv12 = noise(compute_layout(Format::Nv12, width, height, 1)?.total_size());
    round_trip(Format::Nv12, Format::Yuv420, &nv12, width, height)?;
    round_trip(Format::Nv12, Format::Nv21, &nv12, width, height)?;

    let yuyv = noise(width as usize * height as usize * 2);
    round_trip(Format::Yuyv, Format::Uyvy, &yuyv, width, height)?;
    round_trip(Format::Yuyv, Format::Nv16, &yuyv, width, height)?;

    let vuy = noise(width as usize * height as usize * 3);
    round_trip(Format::Vuy888, Format::Yuv444, &vuy, width, height)?;

    let grey = noise(width as usize * height as usize);
    round_trip(Format::Y8, Format::Y16, &grey, width, height)?;
    round_trip(Format::Y8, Format::Xrgb8888, &grey, width, height)?;
    Ok(())
}

#[test]
fn chroma_of_block_origin() -> Result<(), Error> {
    let options = ConvertOptions::default();
    let layout = compute_layout(Format::Xrgb8888, 2, 2, 1)?;

    let red = [0u8, 0, 0xff, 0xff];
    let blue = [0xffu8, 0, 0, 0xff];
    let mixed = [red, blue, blue, blue].concat();
    let all_red = red.repeat(4);

    let mixed = convert_to(&mixed, layout, Format::Nv12, &options)?;
    let all_red = convert_to(&all_red, layout, Format::Nv12, &options)?;
    assert_eq!(&mixed[4..], &all_red[4..]);
    assert_eq!(mixed[0], all_red[0]);
    assert_ne!(mixed[1], all_red[1]);
    Ok(())
}

#[test]
fn alpha() -> Result<(), Error> {
    let options = ConvertOptions::default();
    let layout = compute_layout(Format::Argb8888, 1, 1, 1)?;

    // Bytes of ARGB8888 are B, G, R, A and of RGBA8888 they are A, B, G, R.
    let rgba = convert_to(&[1, 2, 3, 0x40], layout, Format::Rgba8888, &options)?;
    assert_eq!(rgba, [0x40, 1, 2, 3]);

    let layout = compute_layout(Format::Xrgb8888, 1, 1, 1)?;
    let argb = convert_to(&[1, 2, 3, 0], layout, Format::Argb8888, &options)?;
    assert_eq!(argb, [1, 2, 3, 0xff]);

    let argb1555 = convert_to(&[1, 2, 3, 0], layout, Format::Argb1555, &options)?;
    assert_eq!(argb1555[1] & 0x80, 0x80);

    // Padding is not carried over, it becomes all ones.
    let xbgr = convert_to(&[1, 2, 3, 0], layout, Format::Xbgr8888, &options)?;
    assert_eq!(xbgr, [3, 2, 1, 0xff]);
    Ok(())
}

#[test]
fn deep_samples_keep_their_bits() -> Result<(), Error> {
    let options = ConvertOptions::default();

    let layout = compute_layout(Format::Y16, 1, 1, 1)?;
    assert_eq!(convert_to(&[0x34, 0x12], layout, Format::Y16, &options)?, [0x34, 0x12]);

    let (width, height) = (8, 6);
    let y16 = noise(width as usize * height as usize * 2);
    round_trip(Format::Y16, Format::Y16, &y16, width, height)?;

    // The two top bits are padding or alpha, both come back as ones.
    let mut words = noise(width as usize * height as usize * 4);
    words.iter_mut().skip(3).step_by(4).for_each(|x| *x |= 0xc0);
    round_trip(Format::Xrgb2101010, Format::Xbgr2101010, &words, width, height)?;
    round_trip(Format::Xbgr2101010, Format::Xrgb2101010, &words, width, height)?;
    round_trip(Format::Argb2101010, Format::Xbgr2101010, &words, width, height)?;

    let xrgb = compute_layout(Format::Xrgb2101010, 1, 1, 1)?;
    let xbgr = compute_layout(Format::Xbgr2101010, 1, 1, 1)?;
    let word = 0xffef_fbfeu32.to_le_bytes();
    let there = convert_to(&word, xrgb, Format::Xbgr2101010, &options)?;
    assert_eq!(convert_to(&there, xbgr, Format::Xrgb2101010, &options)?, word);
    Ok(())
}

#[test]
fn grey() -> Result<(), Error> {
    let options = ConvertOptions::default();
    let layout = compute_layout(Format::Y8, 2, 1, 1)?;

    let rgb = convert_to(&[7, 200], layout, Format::Bgr888, &options)?;
    assert_eq!(rgb, [7, 7, 7, 200, 200, 200]);

    let layout = compute_layout(Format::Bgr888, 2, 1, 1)?;
    assert_eq!(convert_to(&rgb, layout, Format::Y8, &options)?, [7, 200]);
    // Luma weights of red in full range.
    assert_eq!(convert_to(&[255, 0, 0, 0, 0, 0], layout, Format::Y8, &options)?, [77, 0]);
    Ok(())
}

#[test]
fn bayer_flat_field() -> Result<(), Error> {
    let options = ConvertOptions::default();

    let packed = compute_layout(Format::Srggb10P, 4, 2, 1)?;
    let data = [0x80u8, 0x80, 0x80, 0x80, 0x00].repeat(2);
    let rgb = convert_to(&data, packed, Format::Bgr888, &options)?;
    assert!(rgb.iter().all(|&b| b == 0x80));

    let wide = compute_layout(Format::Sgbrg16, 4, 4, 1)?;
    let data = 0x8000u16.to_le_bytes().repeat(16);
    let rgb = convert_to(&data, wide, Format::Bgr888, &options)?;
    assert!(rgb.iter().all(|&b| b == 0x80));
    Ok(())
}

#[test]
fn bayer_averages_before_scaling() -> Result<(), Error> {
    // Greens of 3 and 5 at 10 bits average to 4, which is 1 at 8 bits.
    let layout = compute_layout(Format::Srggb10, 2, 2, 1)?;
    let data = [0u16, 3, 5, 0].map(u16::to_le_bytes).concat();

    let rgb = convert_to(&data, layout, Format::Bgr888, &ConvertOptions::default())?;
    assert_eq!(rgb, [0u8, 1, 0].repeat(4));
    Ok(())
}

#[test]
fn bayer_colors() -> Result<(), Error> {
    let layout = compute_layout(Format::Srggb8, 4, 4, 1)?;
    let cell = [[200u8, 100], [100, 50]];
    let data: Vec<u8> = (0..4)
        .flat_map(|y| (0..4).map(move |x| cell[y % 2][x % 2]))
        .collect();

    let rgb = convert_to(&data, layout, Format::Xrgb8888, &ConvertOptions::default())?;
    assert_eq!(rgb, [50u8, 100, 200, 0xff].repeat(16));
    Ok(())
}

#[test]
fn rejected() -> Result<(), Error> {
    let nv12 = compute_layout(Format::Nv12, 4, 4, 1)?;
    let xrgb = compute_layout(Format::Xrgb8888, 4, 4, 1)?;
    let small = compute_layout(Format::Xrgb8888, 4, 2, 1)?;
    let raw = compute_layout(Format::Srggb8, 4, 4, 1)?;

    let data = vec![0u8; 64];
    let mut output = vec![0u8; 64];
    let source = wrap(&data, nv12)?;

    let mut dest = wrap_mut(&mut output, xrgb)?;
    assert_eq!(
        convert(&source, Format::Yuv420, &mut dest, Format::Xrgb8888),
        Err(Error::FormatMismatch {
            expected: Format::Yuv420,
            actual: Format::Nv12
        })
    );
    assert_eq!(
        convert(&source, Format::Nv12, &mut dest, Format::Argb8888),
        Err(Error::FormatMismatch {
            expected: Format::Argb8888,
            actual: Format::Xrgb8888
        })
    );

    let mut dest = wrap_mut(&mut output, small)?;
    assert_eq!(
        convert(&source, Format::Nv12, &mut dest, Format::Xrgb8888),
        Err(Error::DimensionMismatch {
            src_width: 4,
            src_height: 4,
            dst_width: 4,
            dst_height: 2
        })
    );

    let mut dest = wrap_mut(&mut output, raw)?;
    assert_eq!(
        convert(&source, Format::Nv12, &mut dest, Format::Srggb8),
        Err(Error::UnsupportedConversion {
            from: Format::Nv12,
            to: Format::Srggb8
        })
    );

    // Nothing was written by rejected conversions.
    assert!(output.iter().all(|&b| b == 0));
    Ok(())
}
