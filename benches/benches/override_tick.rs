//! Benchmark suite for the per-frame override path
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use mmjumps_benches::{IDLE, installed_engine, prepared_rdram, scripted_session, synthetic_payloads};
use mmjumps_engine::{clips::HeapClips, machine::PlayerSignals};
use mmjumps_types::{
	anim::{AnimTableEntry, constants::HEAP_SIZE},
	heap::Heap,
	select::{SelectionMode, SelectionWeights, SequenceState, select_next},
};
use rand::{SeedableRng, rngs::SmallRng};
use std::hint::black_box;

/// Benchmark jump selection in both modes
fn bench_selection(c: &mut Criterion) {
	let mut group = c.benchmark_group("select_next");
	let weights = SelectionWeights::new(20, 30, 50).unwrap();
	let sequence = SequenceState::new();

	for mode in [SelectionMode::Random, SelectionMode::Sequential] {
		let mut rng = SmallRng::seed_from_u64(0x4A55_4D50);
		group.bench_function(BenchmarkId::from_parameter(format!("{mode:?}")), |b| {
			b.iter(|| black_box(select_next(black_box(&weights), mode, &sequence, &mut rng)));
		});
	}

	group.finish();
}

/// Benchmark entry encoding and decoding
fn bench_entry_codec(c: &mut Criterion) {
	let mut group = c.benchmark_group("table_entry");
	let entry = AnimTableEntry::new(0x8060_0588, 0x0D, 0x80);
	let bytes = entry.to_bytes();

	group.bench_function("encode", |b| b.iter(|| black_box(black_box(entry).to_bytes())));
	group.bench_function("decode", |b| b.iter(|| black_box(AnimTableEntry::from(black_box(bytes)))));

	group.finish();
}

/// Benchmark a grounded tick with nothing to do
fn bench_idle_tick(c: &mut Criterion) {
	let mut group = c.benchmark_group("tick");
	let mut ram = prepared_rdram();
	let mut engine = installed_engine(&mut ram, SelectionMode::Random);
	let mut rng = SmallRng::seed_from_u64(1);
	let idle = PlayerSignals::playing(IDLE);
	engine.on_tick(&mut ram, &idle, &mut rng);

	group.bench_function("idle", |b| {
		b.iter(|| black_box(engine.on_tick(&mut ram, black_box(&idle), &mut rng)));
	});

	group.finish();
}

/// Benchmark a scripted session, frame by frame
fn bench_session(c: &mut Criterion) {
	let mut group = c.benchmark_group("session");

	for cycles in [10usize, 100] {
		let frames = scripted_session(cycles);
		group.throughput(Throughput::Elements(frames.len() as u64));

		for mode in [SelectionMode::Random, SelectionMode::Sequential] {
			group.bench_with_input(BenchmarkId::new(format!("{mode:?}"), cycles), &frames, |b, frames| {
				b.iter_batched(
					|| {
						let mut ram = prepared_rdram();
						let engine = installed_engine(&mut ram, mode);
						(ram, engine, SmallRng::seed_from_u64(cycles as u64))
					},
					|(mut ram, mut engine, mut rng)| {
						let mut fired = 0usize;
						for signals in frames {
							fired += engine.on_tick(&mut ram, signals, &mut rng).len();
						}
						black_box(fired)
					},
					criterion::BatchSize::LargeInput,
				);
			});
		}
	}

	group.finish();
}

/// Benchmark copying the payloads into a fresh heap
fn bench_install(c: &mut Criterion) {
	let mut group = c.benchmark_group("install");
	let payloads = synthetic_payloads();
	let mut ram = prepared_rdram();
	group.throughput(Throughput::Bytes(payloads.total_len() as u64));

	group.bench_function("place_clips", |b| {
		b.iter(|| {
			let mut heap = Heap::new(mmjumps_benches::HEAP_BASE, HEAP_SIZE);
			black_box(HeapClips::place(&mut heap, &mut ram, black_box(&payloads)))
		});
	});

	group.finish();
}

criterion_group!(benches, bench_selection, bench_entry_codec, bench_idle_tick, bench_session, bench_install);

criterion_main!(benches);
