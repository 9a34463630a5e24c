use criterion::{black_box, criterion_group, criterion_main, Criterion};
use keel::{Cell, Sheet};

fn numbered(rows: usize, cols: usize) -> Sheet {
    let mut sheet = Sheet::with_dims(rows, cols).unwrap();
    for r in 0..rows {
        for c in 0..cols {
            sheet[(r, c)] = Cell::Int((r * cols + c) as i64);
        }
    }
    sheet
}

fn bench_mirrors(c: &mut Criterion) {
    let mut group = c.benchmark_group("mirrors");
    let base = numbered(64, 64);

    group.bench_function("mirror_h_64x64", |b| {
        b.iter(|| {
            let mut sheet = base.clone();
            sheet.mirror_h();
            black_box(sheet);
        });
    });

    group.bench_function("mirror_v_64x64", |b| {
        b.iter(|| {
            let mut sheet = base.clone();
            sheet.mirror_v();
            black_box(sheet);
        });
    });

    group.bench_function("mirror_d_64x64", |b| {
        b.iter(|| {
            let mut sheet = base.clone();
            sheet.mirror_d().unwrap();
            black_box(sheet);
        });
    });

    group.finish();
}

fn bench_rotate(c: &mut Criterion) {
    let mut group = c.benchmark_group("rotate");
    let base = numbered(64, 64);

    group.bench_function("rotate_cw_64x64", |b| {
        b.iter(|| {
            let mut sheet = base.clone();
            sheet.rotate(black_box(1)).unwrap();
            black_box(sheet);
        });
    });

    group.bench_function("rotate_half_64x64", |b| {
        b.iter(|| {
            let mut sheet = base.clone();
            sheet.rotate(black_box(2)).unwrap();
            black_box(sheet);
        });
    });

    group.finish();
}

fn bench_slice_and_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("slice_and_render");
    let base = numbered(64, 64);
    let rows: Vec<usize> = (0..64).step_by(2).collect();
    let cols: Vec<usize> = (0..64).step_by(4).collect();

    group.bench_function("slice_every_other_row", |b| {
        b.iter(|| {
            let sliced = base.slice(black_box(&rows), black_box(&cols)).unwrap();
            black_box(sliced);
        });
    });

    group.bench_function("display_16x16", |b| {
        let small = numbered(16, 16);
        b.iter(|| {
            let rendered = small.to_string();
            black_box(rendered);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_mirrors, bench_rotate, bench_slice_and_render);
criterion_main!(benches);
