use criterion::Criterion;

use bench_util::{bench_unary, configure_criterion, gen_range};

use brisk_math::reduce;

fn reduced_value(x: f64) -> f64 {
    reduce::rem_pio2(x).value()
}

fn bench_normalize(c: &mut Criterion) {
    let medium = gen_range(1024, -1e5, 1e5, 0xa1a1);
    let huge = gen_range(1024, -1e200, 1e200, 0xb2b2);

    let minus_pi_pi: [(&str, fn(f64) -> f64); 2] = [
        ("accurate", reduce::normalize_minus_pi_pi),
        ("fast", reduce::normalize_minus_pi_pi_fast),
    ];
    let zero_two_pi: [(&str, fn(f64) -> f64); 2] = [
        ("accurate", reduce::normalize_zero_two_pi),
        ("fast", reduce::normalize_zero_two_pi_fast),
    ];
    let half_pi: [(&str, fn(f64) -> f64); 2] = [
        ("accurate", reduce::normalize_minus_half_pi_half_pi),
        ("fast", reduce::normalize_minus_half_pi_half_pi_fast),
    ];

    for (name, impls) in [
        ("minus_pi_pi", &minus_pi_pi),
        ("zero_two_pi", &zero_two_pi),
        ("minus_half_pi_half_pi", &half_pi),
    ] {
        let mut group = c.benchmark_group(format!("normalize/{name}"));
        bench_unary(&mut group, &medium, impls);
        group.finish();
    }

    let remainders: [(&str, fn(f64) -> f64); 3] = [
        ("two_pi", reduce::remainder_two_pi),
        ("pi", reduce::remainder_pi),
        ("pi_o2", reduce::remainder_pi_o2),
    ];
    let mut group = c.benchmark_group("remainder/medium");
    bench_unary(&mut group, &medium, &remainders);
    group.finish();

    // Payne-Hanek path
    let mut group = c.benchmark_group("rem_pio2/huge");
    bench_unary(&mut group, &huge, &[("rem_pio2", reduced_value as fn(f64) -> f64)]);
    group.finish();
}

fn main() {
    let mut c = configure_criterion();
    bench_normalize(&mut c);
    c.final_summary();
}
