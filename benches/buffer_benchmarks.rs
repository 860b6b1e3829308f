//! Benchmarks for text buffer operations.
//!
//! Run with: cargo bench

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use textlite_buffer::{History, TextBuffer};

/// Generates a large text string for benchmarking.
fn generate_large_text(lines: usize) -> String {
    (0..lines)
        .map(|i| format!("Line {}: This is a sample line of text for benchmarking purposes.\n", i))
        .collect()
}

/// The lines a text widget would report for `text`.
fn widget_lines(text: &str) -> Vec<String> {
    TextBuffer::from(text).widget_lines()
}

/// Benchmarks buffer creation.
fn bench_buffer_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("buffer_creation");

    for size in [100, 1000, 10000, 100000].iter() {
        let text = generate_large_text(*size);

        group.bench_with_input(BenchmarkId::new("from_string", size), &text, |b, text| {
            b.iter(|| {
                let buffer = TextBuffer::from(black_box(text.as_str()));
                black_box(buffer)
            })
        });
    }

    group.finish();
}

/// Benchmarks folding one widget keystroke back into the buffer.
fn bench_reconcile(c: &mut Criterion) {
    let mut group = c.benchmark_group("reconcile");

    for size in [1000, 10000].iter() {
        let text = generate_large_text(*size);

        let mut at_end = widget_lines(&text);
        if let Some(last) = at_end.last_mut() {
            last.push('x');
        }
        group.bench_with_input(BenchmarkId::new("type_at_end", size), &at_end, |b, lines| {
            b.iter_with_setup(
                || TextBuffer::from(text.as_str()),
                |mut buffer| {
                    buffer.reconcile(black_box(lines), "\n").unwrap();
                    black_box(buffer)
                },
            )
        });

        let mut in_middle = widget_lines(&text);
        let mid = in_middle.len() / 2;
        in_middle[mid].insert(0, 'x');
        group.bench_with_input(BenchmarkId::new("type_in_middle", size), &in_middle, |b, lines| {
            b.iter_with_setup(
                || TextBuffer::from(text.as_str()),
                |mut buffer| {
                    buffer.reconcile(black_box(lines), "\n").unwrap();
                    black_box(buffer)
                },
            )
        });

        let unchanged = widget_lines(&text);
        let buffer = TextBuffer::from(text.as_str());
        group.bench_with_input(BenchmarkId::new("no_change", size), &unchanged, |b, lines| {
            b.iter_with_setup(
                || buffer.clone(),
                |mut buffer| black_box(buffer.reconcile(black_box(lines), "\n").unwrap()),
            )
        });
    }

    group.finish();
}

/// Benchmarks insertion at various positions.
fn bench_insertion(c: &mut Criterion) {
    let mut group = c.benchmark_group("insertion");

    let base_text = generate_large_text(10000);

    group.bench_function("insert_at_start", |b| {
        b.iter_with_setup(
            || TextBuffer::from(base_text.as_str()),
            |mut buffer| {
                buffer.insert(0, black_box("inserted text")).unwrap();
                black_box(buffer)
            },
        )
    });

    group.bench_function("insert_at_end", |b| {
        b.iter_with_setup(
            || TextBuffer::from(base_text.as_str()),
            |mut buffer| {
                let end = buffer.len_chars();
                buffer.insert(end, black_box("inserted text")).unwrap();
                black_box(buffer)
            },
        )
    });

    group.finish();
}

/// Benchmarks undo/redo operations.
fn bench_undo_redo(c: &mut Criterion) {
    let mut group = c.benchmark_group("undo_redo");

    group.bench_function("undo_single", |b| {
        b.iter_with_setup(
            || {
                let mut buffer = TextBuffer::new();
                buffer.insert(0, "test").unwrap();
                buffer
            },
            |mut buffer| {
                buffer.undo().unwrap();
                black_box(buffer)
            },
        )
    });

    group.bench_function("undo_redo_100_operations", |b| {
        b.iter_with_setup(
            || {
                let mut buffer = TextBuffer::with_history(History::without_coalescing(1000));
                for i in 0..100 {
                    buffer.insert(i * 5, "test ").unwrap();
                }
                buffer
            },
            |mut buffer| {
                for _ in 0..100 {
                    buffer.undo().unwrap();
                }
                for _ in 0..100 {
                    buffer.redo().unwrap();
                }
                black_box(buffer)
            },
        )
    });

    group.finish();
}

/// Benchmarks line access.
fn bench_line_access(c: &mut Criterion) {
    let mut group = c.benchmark_group("line_access");

    let text = generate_large_text(100000);
    let buffer = TextBuffer::from(text.as_str());

    group.bench_function("line_content", |b| {
        b.iter(|| {
            let line = buffer.line_content(black_box(50000)).unwrap();
            black_box(line)
        })
    });

    group.bench_function("position_round_trip", |b| {
        b.iter(|| {
            let position = buffer.char_idx_to_position(black_box(3_000_000)).unwrap();
            black_box(buffer.position_to_char_idx(position).unwrap())
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_buffer_creation,
    bench_reconcile,
    bench_insertion,
    bench_undo_redo,
    bench_line_access,
);

criterion_main!(benches);
