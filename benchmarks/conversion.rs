use brunch::Bench;

use pixutils::{compute_layout, convert_with, wrap, wrap_mut, ConvertOptions, Error, Format};

#[derive(Debug)]
struct Convert {
    from: Format,
    into: Format,
    sz: u32,
}

impl Convert {
    fn name(&self) -> String {
        format!("convert({}, {}, {})", self.from, self.into, self.sz)
    }

    fn prepare(&self) -> Result<impl FnMut(), Error> {
        let (from, into) = (self.from, self.into);
        let source = compute_layout(from, self.sz, self.sz, 64)?;
        let target = compute_layout(into, self.sz, self.sz, 64)?;

        let input = vec![0x80u8; source.total_size()];
        let mut output = vec![0u8; target.total_size()];
        let options = ConvertOptions::default();

        Ok(move || {
            let source = wrap(&input, source).unwrap();
            let mut dest = wrap_mut(&mut output, target).unwrap();
            convert_with(&source, from, &mut dest, into, &options).unwrap();
        })
    }
}

fn main() {
    let tests = [
        /* yuv to rgb, the display path */
        Convert {
            from: Format::Nv12,
            into: Format::Xrgb8888,
            sz: 256,
        },
        Convert {
            from: Format::Yuyv,
            into: Format::Xrgb8888,
            sz: 256,
        },
        Convert {
            from: Format::Yuv420,
            into: Format::Rgb888,
            sz: 256,
        },
        /* rgb to yuv, the capture path */
        Convert {
            from: Format::Xrgb8888,
            into: Format::Nv12,
            sz: 256,
        },
        /* Mainly component shuffling */
        Convert {
            from: Format::Xrgb8888,
            into: Format::Abgr8888,
            sz: 256,
        },
        Convert {
            from: Format::Rgb565,
            into: Format::Xrgb8888,
            sz: 256,
        },
        Convert {
            from: Format::Xrgb2101010,
            into: Format::Bgr888,
            sz: 256,
        },
        /* raw sensor data */
        Convert {
            from: Format::Srggb10P,
            into: Format::Xrgb8888,
            sz: 256,
        },
        Convert {
            from: Format::Sbggr16,
            into: Format::Bgr888,
            sz: 256,
        },
    ];

    let mut benches = brunch::Benches::default();
    benches.extend(tests.map(|convert| {
        let bench = match convert.prepare() {
            Ok(bench) => bench,
            Err(err) => panic!("Failed to setup benchmark {:?}: {:?}", convert, err),
        };

        Bench::new(format!("pixutils::conversion::main::{}", convert.name())).run(bench)
    }));
    benches.finish();
}
