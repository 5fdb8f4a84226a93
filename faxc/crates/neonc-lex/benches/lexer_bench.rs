//! Lexer benchmarks. Run with `cargo bench --package neonc-lex`.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use neonc_lex::Lexer;

fn token_count(source: &str) -> usize {
    Lexer::new(source).count()
}

fn bench_lexer_small_program(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");

    let source = "let x = 42\nlet y = x + 1";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("simple_let", |b| {
        b.iter(|| token_count(black_box("let x = 42")))
    });

    group.bench_function("two_lets_with_addition", |b| {
        b.iter(|| token_count(black_box(source)))
    });

    group.finish();
}

fn bench_lexer_function_def(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_function");

    let source = r#"
        fun fibonacci(n: Int) -> Int {
            if(n <= 1) n else fibonacci(n - 1) + fibonacci(n - 2)
        }
    "#;
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("fibonacci_def", |b| b.iter(|| token_count(black_box(source))));

    group.finish();
}

fn bench_lexer_strings(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_strings");

    group.bench_function("short_string", |b| {
        b.iter(|| token_count(black_box("let s = \"hello\"")))
    });

    group.bench_function("long_string", |b| {
        let source =
            "let s = \"This is a longer string literal used for benchmarking the lexer.\"";
        b.iter(|| token_count(black_box(source)))
    });

    group.finish();
}

fn bench_lexer_numbers(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_numbers");

    group.bench_function("integer", |b| b.iter(|| token_count(black_box("let x = 123456"))));

    group.bench_function("double_with_exponent", |b| {
        b.iter(|| token_count(black_box("let x = 3.14159e10")))
    });

    group.finish();
}

fn bench_lexer_operators(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_operators");

    let source = "a <- b && c || d == e != f <= g >= h -> i => j :: k";
    group.bench_function("mixed_operators", |b| b.iter(|| token_count(black_box(source))));

    group.finish();
}

criterion_group!(
    benches,
    bench_lexer_small_program,
    bench_lexer_function_def,
    bench_lexer_strings,
    bench_lexer_numbers,
    bench_lexer_operators
);
criterion_main!(benches);
