use bezier_raster::{
    evaluate_decasteljau, evaluate_naive, rasterize_antialiased, rasterize_decasteljau,
    rasterize_naive, FilterMode, RasterConfig, Rasterizer, Surface,
};
use criterion::{black_box, Criterion};

use crate::common::samples::CURVES;

pub fn eval(c: &mut Criterion) {
    c.bench_function("eval naive", |b| {
        for points in CURVES.iter() {
            b.iter(|| black_box(evaluate_naive(points, 0.5)))
        }
    });
    c.bench_function("eval castlejau", |b| {
        for points in CURVES.iter() {
            b.iter(|| black_box(evaluate_decasteljau(points, 0.5)))
        }
    });
}

pub fn passes(c: &mut Criterion) {
    let mut surface = Surface::new(700, 700);
    c.bench_function("naive pass", |b| {
        for points in CURVES.iter() {
            b.iter(|| black_box(rasterize_naive(points, &mut surface)))
        }
    });
    c.bench_function("castlejau pass", |b| {
        for points in CURVES.iter() {
            b.iter(|| black_box(rasterize_decasteljau(points, &mut surface)))
        }
    });
}

pub fn antialias(c: &mut Criterion) {
    let mut surface = Surface::new(700, 700);
    c.bench_function("supersampled", |b| {
        let points = &CURVES[0];
        b.iter(|| black_box(rasterize_antialiased(points, &mut surface)))
    });

    let compatible = Rasterizer::new(RasterConfig {
        filter: FilterMode::Compatible,
        ..RasterConfig::default()
    });
    c.bench_function("compatible", |b| {
        let points = &CURVES[0];
        b.iter(|| black_box(compatible.antialiased(points, &mut surface)))
    });
}

pub fn all(c: &mut Criterion) {
    eval(c);
    passes(c);
    antialias(c);
}
