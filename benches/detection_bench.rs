use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use kyoen::{find_new_circles, hint_points, Board, Circle, GridPoint};
use std::hint::black_box;

/// Deterministische, kollisionsfreie Punktfolge auf einem 20×20-Gitter.
fn synthetic_selection(count: usize) -> Vec<GridPoint> {
    let mut points = Vec::with_capacity(count);
    let mut index = 0i32;
    while points.len() < count {
        let point = GridPoint::new((index * 7) % 20, (index * 13 + index / 20) % 20);
        if !points.contains(&point) {
            points.push(point);
        }
        index += 1;
    }
    points
}

fn build_board(selection: &[GridPoint]) -> Board {
    let mut board = Board::new(20);
    for &point in selection {
        board.select(point);
    }
    board
}

fn bench_circle_detection(c: &mut Criterion) {
    let mut group = c.benchmark_group("circle_detection");

    for &selected in &[20usize, 40, 60] {
        let selection = synthetic_selection(selected + 1);
        let (newest, prior_points) = selection.split_last().expect("Punkte erwartet");
        let board = build_board(prior_points);
        let known: Vec<Circle> = Vec::new();

        group.bench_with_input(
            BenchmarkId::new("find_new_circles", selected),
            &board,
            |b, board| {
                b.iter(|| {
                    let found =
                        find_new_circles(board.selection_set(), black_box(*newest), &known);
                    black_box(found.len())
                })
            },
        );
    }

    group.finish();
}

fn bench_hint_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("hint_scan");

    for &selected in &[6usize, 10, 14] {
        let board = build_board(&synthetic_selection(selected));

        group.bench_with_input(BenchmarkId::new("hint_points", selected), &board, |b, board| {
            b.iter(|| {
                let hints = hint_points(black_box(board));
                black_box(hints.len())
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_circle_detection, bench_hint_scan);
criterion_main!(benches);
