#[inline(always)]
pub(crate) fn fma_hw(a: f64, b: f64, c: f64) -> f64 {
    let out: f64;
    // SAFETY: fmadd only reads and writes the named FP registers.
    unsafe {
        core::arch::asm!(
            "fmadd {out:d}, {a:d}, {b:d}, {c:d}",
            out = out(vreg) out,
            a = in(vreg) a,
            b = in(vreg) b,
            c = in(vreg) c,
            options(pure, nomem, nostack)
        );
    }
    out
}

#[inline(always)]
pub(crate) fn sqrt_hw(x: f64) -> f64 {
    let out: f64;
    // SAFETY: fsqrt only reads and writes the named FP registers.
    unsafe {
        core::arch::asm!(
            "fsqrt {out:d}, {x:d}",
            out = out(vreg) out,
            x = in(vreg) x,
            options(pure, nomem, nostack)
        );
    }
    out
}
