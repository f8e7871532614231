use std::io::Cursor;

use common::{selection::select_family_minima, table::Table};
use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use rand::Rng;

// (rows, columns)
const BENCH_SHAPES: [(usize, usize); 3] = [(64, 9), (1024, 9), (4096, 8)];

fn random_rows(rows: usize, columns: usize) -> Vec<Vec<u64>> {
    let mut rng = rand::rng();
    (0..rows)
        .map(|i| {
            let mut row = vec![16 << (i % 8), (i % 64) as u64];
            // roughly one timing in five is left unmeasured
            row.extend((2..columns).map(|_| {
                if rng.random_range(0..5) == 0 {
                    0
                } else {
                    rng.random_range(1_000..1_000_000)
                }
            }));
            row
        })
        .collect()
}

fn load_bench(c: &mut Criterion) {
    for (rows, columns) in BENCH_SHAPES {
        let text: String = random_rows(rows, columns)
            .iter()
            .map(|row| {
                let fields: Vec<String> = row.iter().map(u64::to_string).collect();
                fields.join("\t") + "\n"
            })
            .collect();

        c.bench_function(
            &format!("(rows: {}, columns: {}) | Table: parse", rows, columns),
            |b| {
                b.iter_batched(
                    || Cursor::new(text.clone()),
                    |reader| Table::from_reader(reader, "bench").unwrap(),
                    BatchSize::SmallInput,
                )
            },
        );
    }
}

fn select_bench(c: &mut Criterion) {
    for (rows, columns) in BENCH_SHAPES {
        let table = Table::from_rows(&random_rows(rows, columns)).unwrap();
        let first: Vec<usize> = (2..columns).step_by(2).collect();
        let second: Vec<usize> = (3..columns).step_by(2).collect();

        c.bench_function(
            &format!("(rows: {}, columns: {}) | Selection: two groups", rows, columns),
            |b| b.iter(|| select_family_minima(&table, &first, &second).unwrap()),
        );
    }
}

criterion_group!(benches, load_bench, select_bench);
criterion_main!(benches);
