use brunch::Bench;

use pixutils::{compute_layout, list, lookup, FourCC};

fn main() {
    let codes = [*b"NV12", *b"XR24", *b"pRAA", *b"ZZZZ"].map(FourCC::new);

    let mut benches = brunch::Benches::default();
    benches.extend([
        Bench::new("pixutils::layout::main::compute_layout(all, 1920x1080)").run(|| {
            list()
                .iter()
                .filter_map(|info| compute_layout(info.format(), 1920, 1080, 64).ok())
                .map(|layout| layout.total_size())
                .sum::<usize>()
        }),
        Bench::new("pixutils::layout::main::lookup(4 codes)")
            .run(|| codes.iter().filter(|&&code| lookup(code).is_ok()).count()),
    ]);
    benches.finish();
}
