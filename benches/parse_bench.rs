use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sexpr_reader::{parse, Scanner};

const PROGRAM: &str = r#"
    (define (fib n)
      (if (< n 2)
          n
          (+ (fib (- n 1)) (fib (- n 2)))))
    (print "fib:" (fib 30) 3.14159265358979323846)
"#;

fn scanner_benchmark(c: &mut Criterion) {
    c.bench_function("scan small program", |b| {
        b.iter(|| {
            let mut scanner = Scanner::new(black_box(PROGRAM.as_bytes()));
            scanner.scan_tokens().unwrap()
        })
    });
}

fn parser_benchmark(c: &mut Criterion) {
    c.bench_function("parse small program", |b| {
        b.iter(|| parse(black_box(PROGRAM)).unwrap())
    });

    let nested = format!("{}x{}", "(".repeat(500), ")".repeat(500));
    c.bench_function("parse nested lists", |b| {
        b.iter(|| parse(black_box(&nested)).unwrap())
    });

    let wide = format!("({})", (0..2000).map(|i| i.to_string()).collect::<Vec<_>>().join(" "));
    c.bench_function("parse wide list of numbers", |b| {
        b.iter(|| parse(black_box(&wide)).unwrap())
    });
}

criterion_group!(benches, scanner_benchmark, parser_benchmark);
criterion_main!(benches);
