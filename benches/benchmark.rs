//! Benchmarks for cc_input performance testing.
//!
//! Run with: cargo bench

use cc_input::{
    apply_edit, detect, extract_digits, format, CardDateField, CardNumberField, DateFormat,
    DisplayState, Edit, NumberFormat,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

// Test card numbers
const VISA_16: &str = "4242424242424242";
const VISA_16_DISPLAY: &str = "4242 4242 4242 4242";
const AMEX: &str = "378282246310005";
const UNIONPAY_19: &str = "6212345678901234567";

/// Benchmark the pure helpers
fn bench_helpers(c: &mut Criterion) {
    let mut group = c.benchmark_group("helpers");

    group.bench_function("extract_digits", |b| {
        b.iter(|| extract_digits(black_box(VISA_16_DISPLAY)))
    });

    group.bench_function("classify_str", |b| {
        b.iter(|| detect::classify_str(black_box(AMEX)))
    });

    group.bench_function("format_card_number", |b| {
        b.iter(|| format::format_card_number(black_box(VISA_16)))
    });

    group.bench_function("format_expiry", |b| {
        b.iter(|| format::format_expiry(black_box("1225")))
    });

    group.finish();
}

/// Benchmark single edits at interesting cursor positions
fn bench_single_edit(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_edit");
    let format = NumberFormat::new();
    let partial = DisplayState::new("4242 1110 2222", 14);
    let after_separator = DisplayState::new("4242 1110 2", 10);

    group.bench_function("insert_at_end", |b| {
        b.iter(|| apply_edit(&format, black_box(&partial), &Edit::insert(14, '3')))
    });

    group.bench_function("insert_in_middle", |b| {
        b.iter(|| apply_edit(&format, black_box(&partial), &Edit::insert(9, '3')))
    });

    group.bench_function("backspace_over_separator", |b| {
        b.iter(|| apply_edit(&format, black_box(&after_separator), &Edit::delete_backward(10)))
    });

    group.bench_function("date_insert", |b| {
        let state = DisplayState::new("01/2", 4);
        b.iter(|| apply_edit(&DateFormat::new(), black_box(&state), &Edit::insert(4, '5')))
    });

    group.finish();
}

/// Benchmark typing a whole number key by key
fn bench_typing(c: &mut Criterion) {
    let mut group = c.benchmark_group("typing");

    for card in [AMEX, VISA_16, UNIONPAY_19] {
        group.throughput(Throughput::Elements(card.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(card.len()), card, |b, card| {
            b.iter(|| {
                let mut field = CardNumberField::number();
                for ch in card.chars() {
                    field.apply(&Edit::insert(field.cursor(), ch));
                }
                field
            })
        });
    }

    group.bench_function("date", |b| {
        b.iter(|| {
            let mut field = CardDateField::date();
            for ch in black_box("0199").chars() {
                field.apply(&Edit::insert(field.cursor(), ch));
            }
            field
        })
    });

    group.finish();
}

/// Benchmark paste with and without truncation
fn bench_paste(c: &mut Criterion) {
    let mut group = c.benchmark_group("paste");
    let format = NumberFormat::new();
    let one_digit = DisplayState::new("4", 1);

    group.bench_function("paste_fits", |b| {
        b.iter(|| apply_edit(&format, &DisplayState::empty(), &Edit::paste(0, black_box(VISA_16))))
    });

    group.bench_function("paste_truncated", |b| {
        b.iter(|| {
            apply_edit(
                &format,
                &one_digit,
                &Edit::paste(1, black_box("2421110222255549")),
            )
        })
    });

    group.bench_function("replace_all_formatted", |b| {
        b.iter(|| apply_edit(&format, &one_digit, &Edit::replace_all(black_box("4242-4242-4242-4242"))))
    });

    group.finish();
}

/// Benchmark listener dispatch overhead
fn bench_listeners(c: &mut Criterion) {
    let mut group = c.benchmark_group("listeners");

    for count in [0usize, 1, 8] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| {
                let mut field = CardNumberField::number();
                for _ in 0..count {
                    field.add_listener(|card| {
                        black_box(card.brand);
                    });
                }
                field.set_text(black_box(VISA_16));
                field
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_helpers,
    bench_single_edit,
    bench_typing,
    bench_paste,
    bench_listeners,
);

criterion_main!(benches);
