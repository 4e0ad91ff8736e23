use pixutils::{compute_layout, list, BufferLayout, Error, Format, PlaneSpec};

const SIZES: &[(u32, u32)] = &[
    (1, 1),
    (1, 7),
    (7, 1),
    (2, 2),
    (3, 5),
    (17, 9),
    (640, 480),
    (1921, 1081),
];
const ALIGNMENTS: &[u32] = &[1, 2, 4, 16, 64, 256];

#[test]
fn planes_are_consecutive() -> Result<(), Error> {
    for info in list() {
        for &(width, height) in SIZES {
            for &alignment in ALIGNMENTS {
                let layout = compute_layout(info.format(), width, height, alignment)?;
                assert_eq!(layout.num_planes(), info.num_planes());

                let mut end = 0;
                for plane in layout.planes() {
                    assert_eq!(plane.offset(), end, "{info} {width}x{height}");
                    assert_eq!(plane.stride() % alignment as usize, 0);
                    assert!(plane.stride() >= plane.row_bytes());
                    assert!(plane.stride() < plane.row_bytes() + alignment as usize);
                    end = plane.offset() + plane.stride() * plane.height() as usize;
                }

                assert_eq!(layout.total_size(), end, "{info} {width}x{height}");
            }
        }
    }

    Ok(())
}

#[test]
fn unaligned_strides_are_row_bytes() -> Result<(), Error> {
    for info in list() {
        let layout = compute_layout(info.format(), 1, 1, 1)?;
        for plane in layout.planes() {
            assert_eq!(plane.stride(), plane.row_bytes());
            assert_eq!(plane.height(), 1);
            assert!(plane.stride() > 0);
        }
    }

    Ok(())
}

#[test]
fn three_plane_420() -> Result<(), Error> {
    let layout = compute_layout(Format::Yuv420, 4, 4, 1)?;
    let planes: Vec<_> = layout
        .planes()
        .iter()
        .map(|plane| (plane.offset(), plane.stride(), plane.height()))
        .collect();

    assert_eq!(planes, [(0, 4, 4), (16, 2, 2), (20, 2, 2)]);
    assert_eq!(layout.total_size(), 24);
    Ok(())
}

#[test]
fn odd_dimensions_round_up() -> Result<(), Error> {
    let layout = compute_layout(Format::Nv12, 5, 3, 1)?;
    let chroma = layout.plane(1)?;
    assert_eq!((chroma.width(), chroma.height()), (3, 2));
    assert_eq!(chroma.stride(), 6);
    assert_eq!(layout.total_size(), 15 + 12);

    let layout = compute_layout(Format::Yuv410, 5, 5, 1)?;
    assert_eq!(layout.plane(2)?.width(), 2);
    assert_eq!(layout.plane(2)?.height(), 2);
    Ok(())
}

#[test]
fn deterministic() -> Result<(), Error> {
    let a = compute_layout(Format::Nv16, 1280, 720, 64)?;
    let b = compute_layout(Format::Nv16, 1280, 720, 64)?;
    assert_eq!(a, b);
    Ok(())
}

#[test]
fn external_layouts() -> Result<(), Error> {
    let computed = compute_layout(Format::Nv12, 64, 32, 128)?;
    let specs: Vec<_> = computed
        .planes()
        .iter()
        .map(|plane| PlaneSpec {
            offset: plane.offset(),
            stride: plane.stride(),
        })
        .collect();
    assert_eq!(BufferLayout::with_planes(Format::Nv12, 64, 32, &specs)?, computed);

    // Planes in separate regions of one allocation, with gaps between them.
    let spaced = [
        PlaneSpec { offset: 0, stride: 64 },
        PlaneSpec { offset: 4096, stride: 96 },
    ];
    let layout = BufferLayout::with_planes(Format::Nv12, 64, 32, &spaced)?;
    assert_eq!(layout.total_size(), 4096 + 96 * 16);
    Ok(())
}

#[test]
fn external_layouts_rejected() {
    let short = [
        PlaneSpec { offset: 0, stride: 63 },
        PlaneSpec { offset: 4096, stride: 64 },
    ];
    assert_eq!(
        BufferLayout::with_planes(Format::Nv12, 64, 32, &short),
        Err(Error::InvalidStride { plane: 0, stride: 63, min: 64 })
    );

    let overlapping = [
        PlaneSpec { offset: 0, stride: 64 },
        PlaneSpec { offset: 64 * 31, stride: 64 },
    ];
    assert_eq!(
        BufferLayout::with_planes(Format::Nv12, 64, 32, &overlapping),
        Err(Error::OverlappingPlanes { plane: 1 })
    );

    assert_eq!(
        BufferLayout::with_planes(Format::Nv12, 64, 32, &overlapping[..1]),
        Err(Error::PlaneCount { expected: 2, actual: 1 })
    );
}
