use criterion::Criterion;

use bench_util::{bench_binary, bench_unary, configure_criterion, gen_pairs, gen_range};

use brisk_math::{fast, quick, strict};

fn bench_sqrt_cbrt(c: &mut Criterion) {
    let inputs = gen_range(1024, 0.0, 1e6, 0x0f0f);
    let signed = gen_range(1024, -1e6, 1e6, 0x1f1f);

    let sqrt: [(&str, fn(f64) -> f64); 4] = [
        ("fast", fast::sqrt),
        ("strict", strict::sqrt),
        ("quick", quick::sqrt_quick),
        ("std", f64::sqrt),
    ];
    let cbrt: [(&str, fn(f64) -> f64); 3] =
        [("fast", fast::cbrt), ("strict", strict::cbrt), ("std", f64::cbrt)];

    let mut group = c.benchmark_group("sqrt/common");
    bench_unary(&mut group, &inputs, &sqrt);
    group.finish();

    let mut group = c.benchmark_group("cbrt/common");
    bench_unary(&mut group, &signed, &cbrt);
    group.finish();
}

fn inv_sqrt_std(x: f64) -> f64 {
    1.0 / x.sqrt()
}

fn bench_inv_sqrt(c: &mut Criterion) {
    let inputs = gen_range(1024, 1e-6, 1e6, 0x2f2f);
    let impls: [(&str, fn(f64) -> f64); 2] =
        [("quick", quick::inv_sqrt_quick), ("std", inv_sqrt_std)];
    let mut group = c.benchmark_group("inv_sqrt/common");
    bench_unary(&mut group, &inputs, &impls);
    group.finish();
}

fn bench_hypot(c: &mut Criterion) {
    let pairs = gen_pairs(1024, (-1e3, 1e3), (-1e3, 1e3), 0x3f3f);
    let hypot: [(&str, fn(f64, f64) -> f64); 3] =
        [("fast", fast::hypot), ("strict", strict::hypot), ("std", f64::hypot)];
    let mut group = c.benchmark_group("hypot/common");
    bench_binary(&mut group, &pairs, &hypot);
    group.finish();
}

fn main() {
    let mut c = configure_criterion();
    bench_sqrt_cbrt(&mut c);
    bench_inv_sqrt(&mut c);
    bench_hypot(&mut c);
    c.final_summary();
}
