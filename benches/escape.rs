#[macro_use]
extern crate criterion;
extern crate juliaplane;
extern crate num;

use criterion::Criterion;
use juliaplane::{EscapeConfig, GridSpec, JuliaPlane};
use num::Complex;

fn sweep(c: &mut Criterion) {
    let spec = GridSpec::new(-2.0, 2.0, 200, -2.0, 2.0, 200).unwrap();
    let escape = EscapeConfig::new(Complex::new(-1.037, 0.17), 100);
    c.bench_function("generate 200x200", move |b| {
        b.iter(|| JuliaPlane::new(spec, escape))
    });
    c.bench_function("generate 200x200 threaded", move |b| {
        b.iter(|| JuliaPlane::with_threads(spec, escape, 4))
    });
}

criterion_group!(benches, sweep);
criterion_main!(benches);
