use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use md5_stream::{md5_digest, Md5Session};

fn generate_input(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 31 + 7) as u8).collect()
}

fn bench_one_shot(c: &mut Criterion) {
    let mut group = c.benchmark_group("md5 one-shot");
    for size in [64usize, 1024, 64 * 1024, 1024 * 1024] {
        let input = generate_input(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &input, |b, input| {
            b.iter(|| md5_digest(black_box(input)))
        });
    }
    group.finish();
}

fn bench_chunked(c: &mut Criterion) {
    let mut group = c.benchmark_group("md5 chunked 1MiB");
    let input = generate_input(1024 * 1024);
    group.throughput(Throughput::Bytes(input.len() as u64));
    for chunk in [1usize, 17, 64, 4096] {
        group.bench_with_input(BenchmarkId::from_parameter(chunk), &chunk, |b, &chunk| {
            b.iter(|| {
                let mut session = Md5Session::new();
                for piece in input.chunks(chunk) {
                    session.write(black_box(piece)).unwrap();
                }
                session.finalize().unwrap()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_one_shot, bench_chunked);
criterion_main!(benches);
