use charstat_engine::processor::process_bytes;
use charstat_engine::stats::FrequencyTable;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn benchmark_process_bytes(c: &mut Criterion) {
    let text = "The quick brown fox jumps over the lazy dog. 日本語のテキスト\n".repeat(2_000);
    let mut binary = text.clone().into_bytes();
    binary.iter_mut().step_by(7).for_each(|b| *b |= 0x80);

    c.bench_function("process_bytes_text", |b| {
        b.iter(|| {
            let mut table = FrequencyTable::new();
            black_box(process_bytes(black_box(text.as_bytes()), &mut table));
            black_box(table);
        })
    });

    c.bench_function("process_bytes_binary", |b| {
        b.iter(|| {
            let mut table = FrequencyTable::new();
            black_box(process_bytes(black_box(&binary), &mut table));
            black_box(table);
        })
    });
}

criterion_group!(benches, benchmark_process_bytes);
criterion_main!(benches);
