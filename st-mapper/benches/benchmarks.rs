use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use st_mapper::index::SuffixTree;
use st_mapper::map;

fn make_reference(len: usize) -> Vec<u8> {
    let bases = [b'A', b'C', b'G', b'T'];
    let mut seq = Vec::with_capacity(len);
    let mut x: u32 = 42;
    for _ in 0..len {
        x = x.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        seq.push(bases[(x >> 16) as usize % 4]);
    }
    seq
}

fn bench_build_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_tree");
    for len in [250usize, 500, 750, 1000, 1250, 1500, 1750] {
        let reference = make_reference(len);
        group.bench_with_input(BenchmarkId::from_parameter(len), &reference, |b, r| {
            b.iter(|| black_box(SuffixTree::build(black_box(r))));
        });
    }
    group.finish();
}

fn bench_locate_read(c: &mut Criterion) {
    let reference = make_reference(1_000);
    let tree = SuffixTree::build(&reference).expect("non-empty reference");
    let mut group = c.benchmark_group("locate_read_1k");
    for read_len in [10usize, 20, 30, 40, 50] {
        let read = reference[100..100 + read_len].to_vec();
        group.bench_with_input(BenchmarkId::from_parameter(read_len), &read, |b, q| {
            b.iter(|| black_box(map::locate(&tree, black_box(q))));
        });
    }
    group.finish();
}

fn bench_map_occurrences(c: &mut Criterion) {
    let reference = make_reference(1_000);
    let read = reference[500..520].to_vec();

    c.bench_function("map_occurrences_1k_20bp", |b| {
        b.iter(|| black_box(map::map_occurrences(black_box(&reference), black_box(&read))));
    });
}

criterion_group!(benches, bench_build_tree, bench_locate_read, bench_map_occurrences);
criterion_main!(benches);
