// Copyright 2024-2025 Shangmi Developers

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use rand::{rngs::StdRng, RngCore, SeedableRng};
use shangmi_sm3::{digest, digest::Digest, digest_batch, Sm3};
use shangmi_utils::{rayon::adjust_thread_pool, tracing::init_tracing};

fn bench_sm3(c: &mut Criterion) {
	let mut group = c.benchmark_group("SM3");
	let mut rng = StdRng::seed_from_u64(0);

	const N: usize = 1 << 16;
	let mut data = vec![0u8; N];
	rng.fill_bytes(&mut data);

	group.throughput(Throughput::Bytes(N as u64));
	group.bench_function("one-shot", |bench| bench.iter(|| digest(&data)));
	group.bench_function("streaming", |bench| bench.iter(|| <Sm3 as Digest>::digest(&data)));
	group.bench_function("SM3-RustCrypto", |bench| {
		bench.iter(|| <sm3_reference::Sm3 as Digest>::digest(&data))
	});

	group.finish()
}

fn bench_sm3_batch(c: &mut Criterion) {
	let mut group = c.benchmark_group("SM3 batch");
	let mut rng = StdRng::seed_from_u64(1);

	const MESSAGES: usize = 1 << 10;
	const LEN: usize = 1 << 10;
	let messages: Vec<Vec<u8>> = (0..MESSAGES)
		.map(|_| {
			let mut message = vec![0u8; LEN];
			rng.fill_bytes(&mut message);
			message
		})
		.collect();

	group.throughput(Throughput::Bytes((MESSAGES * LEN) as u64));
	group.bench_function("serial", |bench| {
		bench.iter(|| messages.iter().map(|m| digest(m)).collect::<Vec<_>>())
	});
	group.bench_function("parallel", |bench| bench.iter(|| digest_batch(&messages)));

	group.finish()
}

fn setup(c: &mut Criterion) {
	init_tracing();
	let _ = adjust_thread_pool();
	bench_sm3(c);
	bench_sm3_batch(c);
}

criterion_group!(hash, setup);
criterion_main!(hash);
