use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use vlblas::{axpy2v, scal2v, Complex, Conj, Context, BACKEND_NAME};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

const SIZES: [usize; 3] = [64, 1024, 16384];

fn vec_f64(len: usize, seed: f64) -> Vec<Complex<f64>> {
    (0..len).map(|i| Complex::new((i as f64 + seed).sin(), (i as f64 * 0.5 - seed).cos())).collect()
}

fn vec_f32(len: usize, seed: f32) -> Vec<Complex<f32>> {
    (0..len).map(|i| Complex::new((i as f32 + seed).sin(), (i as f32 * 0.5 - seed).cos())).collect()
}

// ---------------------------------------------------------------------------
// scal2v
// ---------------------------------------------------------------------------

fn zscal2v(c: &mut Criterion) {
    let mut g = c.benchmark_group(format!("zscal2v/{BACKEND_NAME}"));
    let cntx = Context::new();
    let alpha = Complex::new(0.75, -1.25);

    for &n in &SIZES {
        g.throughput(Throughput::Elements(n as u64));

        let x = vec_f64(n, 0.1);
        let mut y = vec![Complex::new(0.0, 0.0); n];
        g.bench_with_input(BenchmarkId::new("contiguous", n), &n, |b, &n| {
            b.iter(|| {
                scal2v(Conj::NoConjugate, n as isize, &alpha, std::hint::black_box(&x), 1, &mut y, 1, &cntx)
            })
        });

        let xs = vec_f64(2 * n, 0.2);
        let mut ys = vec![Complex::new(0.0, 0.0); 3 * n];
        g.bench_with_input(BenchmarkId::new("strided", n), &n, |b, &n| {
            b.iter(|| {
                scal2v(Conj::Conjugate, n as isize, &alpha, std::hint::black_box(&xs), 2, &mut ys, -3, &cntx)
            })
        });
    }

    g.finish();
}

fn cscal2v(c: &mut Criterion) {
    let mut g = c.benchmark_group(format!("cscal2v/{BACKEND_NAME}"));
    let cntx = Context::new();
    let alpha = Complex::new(0.75_f32, -1.25);

    for &n in &SIZES {
        g.throughput(Throughput::Elements(n as u64));

        let x = vec_f32(n, 0.1);
        let mut y = vec![Complex::new(0.0, 0.0); n];
        g.bench_with_input(BenchmarkId::new("contiguous", n), &n, |b, &n| {
            b.iter(|| {
                scal2v(Conj::NoConjugate, n as isize, &alpha, std::hint::black_box(&x), 1, &mut y, 1, &cntx)
            })
        });
    }

    g.finish();
}

// ---------------------------------------------------------------------------
// axpy2v
// ---------------------------------------------------------------------------

fn zaxpy2v(c: &mut Criterion) {
    let mut g = c.benchmark_group(format!("zaxpy2v/{BACKEND_NAME}"));
    let cntx = Context::new();
    let alphax = Complex::new(0.5, 0.25);
    let alphay = Complex::new(-1.0, 2.0);

    for &n in &SIZES {
        g.throughput(Throughput::Elements(n as u64));

        let x = vec_f64(n, 0.1);
        let y = vec_f64(n, 0.7);
        let mut z = vec_f64(n, 1.3);
        g.bench_with_input(BenchmarkId::new("contiguous", n), &n, |b, &n| {
            b.iter(|| {
                axpy2v(
                    Conj::NoConjugate,
                    Conj::Conjugate,
                    n as isize,
                    &alphax,
                    &alphay,
                    std::hint::black_box(&x),
                    1,
                    std::hint::black_box(&y),
                    1,
                    &mut z,
                    1,
                    &cntx,
                )
            })
        });

        let xs = vec_f64(2 * n, 0.1);
        let mut zs = vec_f64(2 * n, 1.3);
        g.bench_with_input(BenchmarkId::new("strided", n), &n, |b, &n| {
            b.iter(|| {
                axpy2v(
                    Conj::Conjugate,
                    Conj::NoConjugate,
                    n as isize,
                    &alphax,
                    &alphay,
                    std::hint::black_box(&xs),
                    2,
                    std::hint::black_box(&y),
                    -1,
                    &mut zs,
                    2,
                    &cntx,
                )
            })
        });
    }

    g.finish();
}

fn caxpy2v(c: &mut Criterion) {
    let mut g = c.benchmark_group(format!("caxpy2v/{BACKEND_NAME}"));
    let cntx = Context::new();
    let alphax = Complex::new(0.5_f32, 0.25);
    let alphay = Complex::new(-1.0_f32, 2.0);

    for &n in &SIZES {
        g.throughput(Throughput::Elements(n as u64));

        let x = vec_f32(n, 0.1);
        let y = vec_f32(n, 0.7);
        let mut z = vec_f32(n, 1.3);
        g.bench_with_input(BenchmarkId::new("contiguous", n), &n, |b, &n| {
            b.iter(|| {
                axpy2v(
                    Conj::NoConjugate,
                    Conj::NoConjugate,
                    n as isize,
                    &alphax,
                    &alphay,
                    std::hint::black_box(&x),
                    1,
                    std::hint::black_box(&y),
                    1,
                    &mut z,
                    1,
                    &cntx,
                )
            })
        });
    }

    g.finish();
}

// ---------------------------------------------------------------------------

criterion_group!(benches, zscal2v, cscal2v, zaxpy2v, caxpy2v);
criterion_main!(benches);
