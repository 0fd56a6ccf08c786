//! Tokenizer benchmarks for `fd_tokenizer`.
//!
//! Measures tokenization throughput over synthetic definition lines with and
//! without the slash pre-pass.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fd_tokenizer::{tokenize_with, TokenizeOptions};

/// Generate one definition line with N translations.
fn generate_line(n: usize) -> String {
    (0..n)
        .map(|i| format!("word{i} (note {i}) {{m}} [zool.] /ABBR{i}/"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn bench_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize/throughput");

    for translations in [1, 10, 100, 1000] {
        let line = generate_line(translations);
        let bytes = line.len() as u64;
        group.throughput(Throughput::Bytes(bytes));

        for parse_slash in [false, true] {
            let options = TokenizeOptions::default().with_slash(parse_slash);
            let id = format!("slash={parse_slash}");
            group.bench_with_input(BenchmarkId::new(id, translations), &line, |b, line| {
                b.iter(|| black_box(tokenize_with(black_box(line), options)));
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_throughput);
criterion_main!(benches);
