use criterion::Criterion;

use bench_util::{bench_unary, configure_criterion, gen_range};

use brisk_math::{fast, quick, strict};

fn bench_exp(c: &mut Criterion) {
    let common = gen_range(1024, -20.0, 20.0, 0x1111);
    let wide = gen_range(1024, -700.0, 700.0, 0x2222);
    let tiny = gen_range(1024, -1e-3, 1e-3, 0x3333);

    let exp: [(&str, fn(f64) -> f64); 4] = [
        ("fast", fast::exp),
        ("strict", strict::exp),
        ("quick", quick::exp_quick),
        ("std", f64::exp),
    ];
    let expm1: [(&str, fn(f64) -> f64); 3] =
        [("fast", fast::expm1), ("strict", strict::expm1), ("std", f64::exp_m1)];

    for (name, inputs) in [("common", &common), ("wide", &wide)] {
        let mut group = c.benchmark_group(format!("exp/{name}"));
        bench_unary(&mut group, inputs, &exp);
        group.finish();
    }

    let mut group = c.benchmark_group("expm1/tiny");
    bench_unary(&mut group, &tiny, &expm1);
    group.finish();
}

fn bench_log(c: &mut Criterion) {
    let common = gen_range(1024, 1e-3, 1e3, 0x4444);
    let near_one = gen_range(1024, 0.9, 1.1, 0x5555);
    let small = gen_range(1024, -0.5, 0.5, 0x6666);

    let ln: [(&str, fn(f64) -> f64); 4] = [
        ("fast", fast::ln),
        ("strict", strict::ln),
        ("quick", quick::log_quick),
        ("std", f64::ln),
    ];
    let log10: [(&str, fn(f64) -> f64); 3] =
        [("fast", fast::log10), ("strict", strict::log10), ("std", f64::log10)];
    let log1p: [(&str, fn(f64) -> f64); 3] =
        [("fast", fast::log1p), ("strict", strict::log1p), ("std", f64::ln_1p)];

    for (name, inputs) in [("common", &common), ("near_one", &near_one)] {
        let mut group = c.benchmark_group(format!("ln/{name}"));
        bench_unary(&mut group, inputs, &ln);
        group.finish();
    }

    let mut group = c.benchmark_group("log10/common");
    bench_unary(&mut group, &common, &log10);
    group.finish();

    let mut group = c.benchmark_group("log1p/small");
    bench_unary(&mut group, &small, &log1p);
    group.finish();
}

fn bench_hyperbolic(c: &mut Criterion) {
    let inputs = gen_range(1024, -20.0, 20.0, 0x7777);
    let sinh: [(&str, fn(f64) -> f64); 3] =
        [("fast", fast::sinh), ("strict", strict::sinh), ("std", f64::sinh)];
    let cosh: [(&str, fn(f64) -> f64); 3] =
        [("fast", fast::cosh), ("strict", strict::cosh), ("std", f64::cosh)];
    let tanh: [(&str, fn(f64) -> f64); 3] =
        [("fast", fast::tanh), ("strict", strict::tanh), ("std", f64::tanh)];

    for (name, impls) in [("sinh", &sinh), ("cosh", &cosh), ("tanh", &tanh)] {
        let mut group = c.benchmark_group(format!("{name}/common"));
        bench_unary(&mut group, &inputs, impls);
        group.finish();
    }
}

fn main() {
    let mut c = configure_criterion();
    bench_exp(&mut c);
    bench_log(&mut c);
    bench_hyperbolic(&mut c);
    c.final_summary();
}
