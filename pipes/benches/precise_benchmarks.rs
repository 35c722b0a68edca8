use gungraun::{Dhat, LibraryBenchmarkConfig, library_benchmark, library_benchmark_group, main};
use pipes::{HeightProfile, harness, level_sweep, monotonic_stack};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::hint::black_box;

// Same profile for both algorithms so the instruction counts compare directly
fn setup_profile(width: usize) -> HeightProfile {
    harness::random_profile(&mut ChaCha8Rng::seed_from_u64(0x5EED), width, 100)
}

#[library_benchmark]
#[bench::narrow(setup_profile(100))]
#[bench::wide(setup_profile(5_000))]
fn bench_level_sweep(profile: HeightProfile) {
    black_box(level_sweep::compute(black_box(profile.as_slice())));
}

#[library_benchmark]
#[bench::narrow(setup_profile(100))]
#[bench::wide(setup_profile(5_000))]
fn bench_monotonic_stack(profile: HeightProfile) {
    black_box(monotonic_stack::compute(black_box(profile.as_slice())));
}

library_benchmark_group!(
    name = water_group;
    benchmarks = bench_level_sweep, bench_monotonic_stack
);

main!(
    config = LibraryBenchmarkConfig::default()
        .tool(Dhat::default());
    library_benchmark_groups = water_group
);
