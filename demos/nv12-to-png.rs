use pixutils::{compute_layout, convert, wrap, wrap_mut, Error, Format};

const SZ_W: u32 = 1920;
const SZ_H: u32 = 1080;

/// Converts a synthetic NV12 capture frame into RGB and saves it.
///
/// The frame is a luma ramp with a blue and a red quadrant in the chroma plane. Set
/// `PIXUTILS_SKIP_IO` to only run the conversion, for instance under `perf`.
fn main() -> Result<(), Error> {
    let skip_io = std::env::var_os("PIXUTILS_SKIP_IO").is_some();

    let layout = compute_layout(Format::Nv12, SZ_W, SZ_H, 64)?;
    let mut frame = vec![0u8; layout.total_size()];

    {
        let mut view = wrap_mut(&mut frame, layout)?;
        let mut planes = view.split_planes();

        for row in planes.get_mut(0)?.rows_mut() {
            for (x, luma) in row.iter_mut().enumerate() {
                *luma = (16 + x * 219 / SZ_W as usize) as u8;
            }
        }

        let chroma = planes.get_mut(1)?;
        let (width, height) = (chroma.layout().width(), chroma.layout().height());
        for y in 0..height {
            let row = chroma.row_pixels_mut(y)?;
            for (x, pair) in (0..).zip(row.chunks_exact_mut(2)) {
                let cbcr = match (x >= width / 2, y >= height / 2) {
                    (false, false) => [0xc0, 0x80],
                    (true, true) => [0x80, 0xc0],
                    _ => [0x80, 0x80],
                };
                pair.copy_from_slice(&cbcr);
            }
        }
    }

    // `image::save` expects tightly packed RGB, allocate one.
    let target = compute_layout(Format::Bgr888, SZ_W, SZ_H, 1)?;
    let mut output = vec![0u8; target.total_size()];

    let source = wrap(&frame, layout)?;
    let mut dest = wrap_mut(&mut output, target)?;
    convert(&source, Format::Nv12, &mut dest, Format::Bgr888)?;

    if !skip_io {
        // The bytes of BGR888 are R, G, B in memory.
        let image = image::RgbImage::from_raw(SZ_W, SZ_H, output).unwrap();
        let output = concat!(env!("CARGO_MANIFEST_DIR"), "/nv12.png");
        image.save(output).unwrap();
    }

    Ok(())
}
