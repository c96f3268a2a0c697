use tsp_brute_force::solve;
use tsp_core::{generate, path_distance, DistanceMatrix};

fn factorial(n: u64) -> u64 {
    (1..=n).product()
}

#[test]
fn complete_graph_visits_every_cycle() {
    let m = generate(6, 100, 4);
    let outcome = solve(&m, 0);
    assert_eq!(outcome.feasible, factorial(5));
    assert_eq!(outcome.evaluated, factorial(5));
}

#[test]
fn finds_the_obvious_ring() {
    // Ring 0 -> 1 -> 2 -> 3 -> 0 costs 1 per hop, everything else is expensive.
    let m: DistanceMatrix = serde_json::from_str(
        "[[0, 1, 50, 50], [50, 0, 1, 50], [50, 50, 0, 1], [1, 50, 50, 0]]",
    )
    .unwrap();
    let best = solve(&m, 0).best.unwrap();
    assert_eq!(best.path, vec![0, 1, 2, 3]);
    assert_eq!(best.distance, 4);
}

#[test]
fn dead_end_city_means_no_solution() {
    let mut rows: Vec<Vec<i32>> = (0..5)
        .map(|i| (0..5).map(|j| if i == j { 0 } else { 3 }).collect())
        .collect();
    for j in 0..5 {
        if j != 2 {
            rows[2][j] = -1;
        }
    }
    let m = DistanceMatrix::from_rows(rows).unwrap();
    let outcome = solve(&m, 0);
    assert_eq!(outcome.best, None);
    assert_eq!(outcome.feasible, 0);
}

#[test]
fn best_distance_is_consistent_with_its_path() {
    for seed in 0..6 {
        let m = generate(8, 60, seed);
        if let Some(best) = solve(&m, 0).best {
            assert_eq!(path_distance(&m, &best.path), Some(best.distance));
            assert_eq!(best.path[0], 0);
        }
    }
}

#[test]
fn start_city_does_not_change_the_optimum() {
    let m = generate(7, 70, 21);
    let from_zero = solve(&m, 0).best.map(|b| b.distance);
    let from_three = solve(&m, 3).best.map(|b| b.distance);
    assert_eq!(from_zero, from_three);
}
