// Criterion benchmark suite for the Matcher cursor.
//
// Run: cargo bench
// Specific group: cargo bench -- log_lines
// HTML report: target/criterion/report/index.html

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use text_matcher::prelude::*;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn make_log_line(i: usize) -> String {
    let level = ["INFO", "WARN", "DEBUG"][i % 3];
    format!(
        "2025-06-{:02} {} worker[{}] op=read key=k{:x} duration={}ms\n",
        (i % 28) + 1,
        level,
        i % 16,
        i * 31,
        (i * 17) % 900,
    )
}

fn make_log_text(num_lines: usize) -> String {
    let mut text = String::new();
    for i in 0..num_lines {
        text.push_str(&make_log_line(i));
    }
    text
}

// Sum the `duration=` field of every line.
fn total_duration(text: &str) -> i64 {
    let mut m = Matcher::new(text);
    let mut total = 0;
    while !m.is_at_end() {
        m.skip_to_str("duration=");
        if !m.match_str("duration=") {
            break;
        }
        if m.match_dec() {
            total += m.result_long().unwrap_or(0);
        }
        m.skip_to_char('\n');
        m.skip_char('\n');
    }
    total
}

// Parse each line field by field.
fn parse_lines(text: &str) -> usize {
    let mut m = Matcher::new(text);
    let mut fields = 0;
    while !m.is_at_end() {
        let ok = m.match_dec_bounded(4, 4)
            && m.match_char('-')
            && m.match_dec_bounded(2, 2)
            && m.match_char('-')
            && m.match_dec_bounded(2, 2);
        if !ok {
            break;
        }
        m.skip_while(CharClass::BLANK);
        if m.match_while(CharClass::UPPER) {
            fields += m.result_len();
        }
        loop {
            m.skip_while(CharClass::BLANK);
            if !m.match_while(CharClass::WORD) {
                break;
            }
            if m.match_char('=') {
                m.skip_while(CharClass::GRAPH);
                fields += 1;
            } else if m.match_char('[') && m.match_dec() {
                fields += m.result_int().unwrap_or(0) as usize;
                m.skip_char(']');
            }
        }
        m.skip_char('\n');
    }
    fields
}

// ---------------------------------------------------------------------------
// 1. skip_to -- memchr/memmem scanning
// ---------------------------------------------------------------------------

fn bench_skip_to(c: &mut Criterion) {
    let text = make_log_text(800); // ~50KB
    let needles: &[(&str, &str)] = &[
        ("char", "\u{a7}"),
        ("short_str", "zq"),
        ("long_str", "CRITICAL_ERROR"),
    ];

    let mut group = c.benchmark_group("skip_to");
    for (name, needle) in needles {
        group.bench_with_input(BenchmarkId::new("miss", name), needle, |b, needle| {
            b.iter(|| {
                let mut m = Matcher::new(&text);
                m.skip_to_str(black_box(needle));
                black_box(m.index());
            });
        });
    }
    group.bench_function("fields_50k", |b| {
        b.iter(|| black_box(total_duration(black_box(&text))));
    });
    group.finish();
}

// ---------------------------------------------------------------------------
// 2. predicates -- closures vs CharClass vs CharSet
// ---------------------------------------------------------------------------

fn bench_predicates(c: &mut Criterion) {
    let text = "abcdefghij_0123456789".repeat(200) + "!";
    let set = CharSet::new("abcdefghijklmnopqrstuvwxyz_0123456789");

    let mut group = c.benchmark_group("predicates");
    group.bench_function("closure", |b| {
        b.iter(|| {
            let mut m = Matcher::new(black_box(&text));
            m.match_while(|c: char| c.is_ascii_alphanumeric() || c == '_');
            black_box(m.index());
        });
    });
    group.bench_function("char_class", |b| {
        b.iter(|| {
            let mut m = Matcher::new(black_box(&text));
            m.match_while(CharClass::WORD);
            black_box(m.index());
        });
    });
    group.bench_function("char_set", |b| {
        b.iter(|| {
            let mut m = Matcher::new(black_box(&text));
            m.match_while(&set);
            black_box(m.index());
        });
    });
    group.bench_function("any_of", |b| {
        b.iter(|| {
            let mut m = Matcher::new(black_box(&text));
            m.skip_any_of("abcdefghijklmnopqrstuvwxyz_0123456789");
            black_box(m.index());
        });
    });
    group.finish();
}

// ---------------------------------------------------------------------------
// 3. numbers -- decimal and hex conversion
// ---------------------------------------------------------------------------

fn bench_numbers(c: &mut Criterion) {
    let cases: &[(&str, &str)] = &[
        ("dec_short", "42"),
        ("dec_i64_max", "9223372036854775807"),
        ("hex_u64_max", "ffffffffffffffff"),
    ];

    let mut group = c.benchmark_group("numbers");
    for (name, digits) in cases {
        group.bench_with_input(BenchmarkId::new("match_convert", name), digits, |b, digits| {
            b.iter(|| {
                let mut m = Matcher::new(black_box(digits));
                let value = if m.match_dec() && m.is_at_end() {
                    m.result_long().unwrap_or(0) as u64
                } else {
                    m.revert();
                    m.match_hex();
                    m.result_hex_long().unwrap_or(0)
                };
                black_box(value);
            });
        });
    }
    group.finish();
}

// ---------------------------------------------------------------------------
// 4. log_lines -- field-by-field parse of generated logs
// ---------------------------------------------------------------------------

fn bench_log_lines(c: &mut Criterion) {
    let text_10k = make_log_text(160); // ~10KB
    let text_50k = make_log_text(800); // ~50KB

    let mut group = c.benchmark_group("log_lines");
    group.bench_with_input(BenchmarkId::new("parse", "10k"), &text_10k, |b, text| {
        b.iter(|| black_box(parse_lines(black_box(text))));
    });
    group.bench_with_input(BenchmarkId::new("parse", "50k"), &text_50k, |b, text| {
        b.iter(|| black_box(parse_lines(black_box(text))));
    });
    group.finish();
}

// ---------------------------------------------------------------------------
// Criterion harness
// ---------------------------------------------------------------------------

criterion_group!(
    benches,
    bench_skip_to,
    bench_predicates,
    bench_numbers,
    bench_log_lines,
);
criterion_main!(benches);
