//! Parser benchmarks. Run with `cargo bench --package neonc-parse`.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use neonc_parse::{parse_expression, parse_program};

fn bench_parser_simple(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser_simple");

    let source = "let x = 42";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("let_statement", |b| b.iter(|| parse_program(black_box(source))));

    group.finish();
}

fn bench_parser_functions(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser_functions");

    let source = r#"
        fun fib(n: Int) -> Int {
            if(n <= 1) n else fib(n - 1) + fib(n - 2)
        }

        fun main() -> Int {
            let x = 42
            let y = x + 1
            y
        }
    "#;
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("functions", |b| b.iter(|| parse_program(black_box(source))));

    group.finish();
}

fn bench_parser_namespaces_and_typeclasses(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser_namespaces");

    let source = r#"
        namespace geometry {
            type Point = (Int & Int)

            typeclass Show {
                fun show(a: Self) -> String
            }

            fun origin() -> Point { (0, 0) }
        }

        import geometry::Point
        import typeclass geometry::Show for Point
    "#;
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("namespaces_typeclasses_imports", |b| {
        b.iter(|| parse_program(black_box(source)))
    });

    group.finish();
}

fn bench_parser_expressions(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser_expressions");

    group.bench_function("arithmetic_chain", |b| {
        b.iter(|| parse_expression(black_box("a + b * c - d / e % f")))
    });

    group.bench_function("lambda_with_typed_params", |b| {
        b.iter(|| parse_expression(black_box("(a: Int, b: Int) -> Int => a + b")))
    });

    group.bench_function("nested_if_expression", |b| {
        b.iter(|| parse_expression(black_box("if(a) b elif(c) d elif(e) f else g")))
    });

    group.finish();
}

fn bench_parser_blocks_and_for(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser_blocks_and_for");

    let block = "{ let x = 1; let y = 2; let z = x + y; => z * 2 }";
    group.bench_function("block_with_statements", |b| b.iter(|| parse_expression(black_box(block))));

    let for_expr = "for { x <- xs; y <- ys; z = x + y } z";
    group.bench_function("for_comprehension", |b| b.iter(|| parse_expression(black_box(for_expr))));

    group.finish();
}

criterion_group!(
    benches,
    bench_parser_simple,
    bench_parser_functions,
    bench_parser_namespaces_and_typeclasses,
    bench_parser_expressions,
    bench_parser_blocks_and_for
);
criterion_main!(benches);
