use criterion::{black_box, criterion_group, criterion_main, Criterion};
use libecc::*;

const DATA_BITS: usize = 247;
const N_LOOP: usize = 10;

fn setup_bench(c: &mut Criterion) {
  c.bench_function("hamming_setup", |b| {
    b.iter(|| HammingCode::new(black_box(DATA_BITS)).unwrap())
  });
}

fn enc_bench(c: &mut Criterion) {
  let message: Vec<BitVector> = vec![BitVector::new(DATA_BITS); N_LOOP];
  let hamming = HammingCode::new(DATA_BITS).unwrap();

  c.bench_function("hamming_enc", |b| {
    b.iter(|| {
      message
        .iter()
        .map(|v| hamming.encode(black_box(v)))
        .collect::<Vec<_>>()
    })
  });
}

fn dec_bench(c: &mut Criterion) {
  let message: Vec<BitVector> = vec![BitVector::new(DATA_BITS); N_LOOP];
  let hamming = HammingCode::new(DATA_BITS).unwrap();

  let encs = message
    .iter()
    .enumerate()
    .map(|(i, v)| {
      let mut encoded = hamming.encode(v);
      encoded.flip(i);
      encoded
    })
    .collect::<Vec<BitVector>>();

  c.bench_function("hamming_dec", |b| {
    b.iter(|| {
      encs
        .iter()
        .map(|v| hamming.decode(black_box(v)))
        .collect::<Vec<_>>()
    })
  });
}

criterion_group!(benches, setup_bench, enc_bench, dec_bench);
criterion_main!(benches);
