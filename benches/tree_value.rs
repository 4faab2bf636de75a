use criterion::{black_box, criterion_group, criterion_main, Criterion};

use hackenbush::{random_position, random_tree, Color, PositionRng};

fn bench_tree_value(c: &mut Criterion) {
    let graph = random_tree(&mut PositionRng::new(42), 48, 0.5);

    c.bench_function("tree_value_48", |b| {
        b.iter(|| {
            let tree = black_box(&graph).to_tree().unwrap();
            tree.value()
        })
    });
}

fn bench_move_with_cascade(c: &mut Criterion) {
    let graph = random_position(&mut PositionRng::new(7), 64, 160, 0.5);
    let (i, j) = graph.legal_moves(Color::Red).first().copied().unwrap_or((0, 0));

    c.bench_function("move_cascade_64", |b| {
        b.iter(|| {
            let mut next = graph.clone();
            next.apply_move(Color::Red, black_box(i), black_box(j))
        })
    });
}

fn bench_is_tree(c: &mut Criterion) {
    let graph = random_tree(&mut PositionRng::new(3), 128, 0.5);
    c.bench_function("is_tree_128", |b| b.iter(|| black_box(&graph).is_tree()));
}

criterion_group!(benches, bench_tree_value, bench_move_with_cascade, bench_is_tree);
criterion_main!(benches);
