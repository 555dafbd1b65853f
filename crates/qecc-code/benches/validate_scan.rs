use criterion::{criterion_group, criterion_main, Criterion};
use qecc_code::{validate, CodeParameters, RandomCode};
use qecc_core::RngHandle;

fn bench_validate(c: &mut Criterion) {
    let params = CodeParameters::new(64, 8, 16).unwrap();
    let code = RandomCode::generate(params, &mut RngHandle::from_seed(7)).unwrap();

    c.bench_function("validate_scan", |b| {
        b.iter(|| validate::validate(&code).unwrap())
    });
}

criterion_group!(benches, bench_validate);
criterion_main!(benches);
