//! Coverage and termination properties of the prefix protocol.

use tsp_core::DistanceMatrix;
use tsp_distributed::{solve, SolveConfig, SolveError};

fn uniform(n: usize, weight: i32) -> Vec<Vec<i32>> {
    (0..n)
        .map(|i| (0..n).map(|j| if i == j { 0 } else { weight }).collect())
        .collect()
}

#[test]
fn complete_graph_is_covered_exactly_once() {
    let matrix = DistanceMatrix::from_rows(uniform(5, 1)).unwrap();
    for prefix_len in 1..5 {
        let config = SolveConfig { workers: 2, pool_size: 2, prefix_len, start_city: 0 };
        let solution = solve(&matrix, &config).unwrap();
        assert_eq!(solution.stats.search.evaluated, 24, "prefix length {prefix_len}");
        assert_eq!(solution.stats.search.feasible, 24, "prefix length {prefix_len}");
        assert_eq!(solution.stats.search.prefixes, solution.stats.prefixes_served);
        assert_eq!(solution.best.map(|b| b.distance), Some(5));
    }
}

#[test]
fn one_done_per_lane() {
    let matrix = DistanceMatrix::from_rows(uniform(6, 2)).unwrap();
    for (workers, pool_size) in [(1, 1), (1, 2), (3, 2), (4, 3)] {
        let config = SolveConfig { workers, pool_size, prefix_len: 2, start_city: 0 };
        let solution = solve(&matrix, &config).unwrap();
        assert_eq!(solution.stats.done_replies, config.total_lanes() as u64);
        assert_eq!(solution.stats.prefixes_served, 5);
    }
}

#[test]
fn more_lanes_than_prefixes() {
    let matrix = DistanceMatrix::from_rows(uniform(4, 3)).unwrap();
    let config = SolveConfig { workers: 5, pool_size: 2, prefix_len: 1, start_city: 0 };
    let solution = solve(&matrix, &config).unwrap();
    assert_eq!(solution.stats.prefixes_served, 1);
    assert_eq!(solution.stats.done_replies, 10);
    assert_eq!(solution.stats.search.feasible, 6);
    assert_eq!(solution.best.map(|b| b.distance), Some(12));
}

#[test]
fn dead_end_city_reports_no_solution() {
    let mut rows = uniform(6, 4);
    for (j, cell) in rows[3].iter_mut().enumerate() {
        if j != 3 {
            *cell = -1;
        }
    }
    let matrix = DistanceMatrix::from_rows(rows).unwrap();
    let config = SolveConfig { workers: 2, pool_size: 2, prefix_len: 2, start_city: 0 };
    let solution = solve(&matrix, &config).unwrap();
    assert_eq!(solution.best, None);
    assert_eq!(solution.stats.search.feasible, 0);
    assert_eq!(solution.stats.done_replies, 4);
}

#[test]
fn unreachable_start_serves_nothing() {
    let mut rows = uniform(5, 1);
    for (j, cell) in rows[0].iter_mut().enumerate() {
        if j != 0 {
            *cell = -1;
        }
    }
    let matrix = DistanceMatrix::from_rows(rows).unwrap();
    let config = SolveConfig { workers: 2, pool_size: 2, prefix_len: 3, start_city: 0 };
    let solution = solve(&matrix, &config).unwrap();
    assert_eq!(solution.best, None);
    assert_eq!(solution.stats.prefixes_served, 0);
    assert_eq!(solution.stats.done_replies, 4);
}

#[test]
fn invalid_config_is_rejected_before_spawning() {
    let matrix = DistanceMatrix::from_rows(uniform(4, 1)).unwrap();
    let config = SolveConfig { workers: 1, pool_size: 1, prefix_len: 4, start_city: 0 };
    assert!(matches!(solve(&matrix, &config), Err(SolveError::Config(_))));
}
