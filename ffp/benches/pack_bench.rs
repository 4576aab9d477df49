use std::path::Path;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use drawer_pack::io::import::import;
use ffp::config::FFPConfig;
use ffp::io;
use ffp::opt::packer::pack_container;

criterion_main!(benches);
criterion_group!(benches, pack_bench);

const SCAN_STEPS: [u32; 2] = [1, 5];

/// Benchmark a complete pack (all default strategies, filler pass, dedup) of the big drawer at different scan steps.
fn pack_bench(c: &mut Criterion) {
    let ext_instance = io::read_instance(Path::new("../assets/pax_drawers.json"))
        .expect("could not read bundled catalog");
    let instance = import(&ext_instance).expect("bundled catalog is invalid");
    let container = instance.container(0);

    let mut group = c.benchmark_group("pack_big_drawer");
    for scan_step in SCAN_STEPS {
        let config = FFPConfig {
            scan_step,
            ..FFPConfig::default()
        };
        group.bench_function(BenchmarkId::from_parameter(scan_step), |b| {
            b.iter(|| pack_container(container, &instance.catalog, &config))
        });
    }
    group.finish();
}
