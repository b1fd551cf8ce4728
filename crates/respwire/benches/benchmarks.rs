//! Performance benchmarks for the RESP encoder

use std::hint::black_box;

use bytes::BytesMut;
use criterion::Criterion;
use criterion::Throughput;
use criterion::criterion_group;
use criterion::criterion_main;
use respwire::RespEncoder;
use respwire::RespValue;
use respwire::StringMode;
use serde_json::json;

fn bench_encode_simple_string(c: &mut Criterion) {
	let mut group = c.benchmark_group("encode_simple_string");
	let value = RespValue::from("OK");

	group.bench_function("simple_string", |b| {
		b.iter(|| black_box(&value).encode().unwrap())
	});
	group.finish();
}

fn bench_encode_bulk_string(c: &mut Criterion) {
	let mut group = c.benchmark_group("encode_bulk_string");
	let value = RespValue::from("hello world");

	group.bench_function("bulk_string", |b| {
		b.iter(|| black_box(&value).encode_with(StringMode::Bulk).unwrap())
	});
	group.finish();
}

fn bench_encode_array(c: &mut Criterion) {
	let mut group = c.benchmark_group("encode_array");
	let value = RespValue::from(vec!["SET", "key", "value"]);

	group.bench_function("array_set_command", |b| {
		b.iter(|| black_box(&value).encode_with(StringMode::Bulk).unwrap())
	});
	group.finish();
}

fn bench_encode_large_array(c: &mut Criterion) {
	let mut group = c.benchmark_group("encode_large_array");
	let value = RespValue::array((0..100).map(|i| RespValue::from(format!("{i:03}"))));
	let size = value.encode_with(StringMode::Bulk).unwrap().len();

	group.throughput(Throughput::Bytes(size as u64));
	group.bench_function("array_100_items", |b| {
		let mut buf = BytesMut::with_capacity(size);
		b.iter(|| {
			buf.clear();
			black_box(&value)
				.encode_to(&mut buf, StringMode::Bulk)
				.unwrap()
		})
	});
	group.finish();
}

fn bench_encode_json(c: &mut Criterion) {
	let mut group = c.benchmark_group("encode_json");
	let value = json!(["SET", "key", "value", 42, null]);

	group.bench_function("json_command", |b| {
		b.iter(|| respwire::encode_json(black_box(&value), StringMode::Bulk).unwrap())
	});
	group.finish();
}

criterion_group!(
	benches,
	bench_encode_simple_string,
	bench_encode_bulk_string,
	bench_encode_array,
	bench_encode_large_array,
	bench_encode_json,
);

criterion_main!(benches);
