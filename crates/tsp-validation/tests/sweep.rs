use tsp_core::GraphSpec;
use tsp_distributed::{ConfigError, SolveConfig, SolveError};
use tsp_validation::{cross_check, CrossCheckRow};

#[test]
fn small_sweep_agrees() {
    let config = SolveConfig { workers: 2, pool_size: 2, prefix_len: 3, start_city: 0 };
    for seed in 0..5 {
        let graph = GraphSpec { cities: 7, edge_percent: 50, seed };
        let row = cross_check(graph, config).unwrap();
        assert!(row.agree, "{row:?}");
    }
}

#[test]
fn row_serializes_as_one_json_object() {
    let config = SolveConfig { workers: 1, pool_size: 2, prefix_len: 2, start_city: 0 };
    let row = cross_check(GraphSpec { cities: 5, edge_percent: 100, seed: 1 }, config).unwrap();
    let json = serde_json::to_string(&row).unwrap();
    assert!(!json.contains('\n'));

    let back: CrossCheckRow = serde_json::from_str(&json).unwrap();
    assert_eq!(back, row);
    assert_eq!(back.serial_feasible, 24);
}

#[test]
fn invalid_config_surfaces_as_error() {
    let config = SolveConfig { workers: 1, pool_size: 1, prefix_len: 5, start_city: 0 };
    assert!(cross_check(GraphSpec { cities: 5, edge_percent: 50, seed: 0 }, config).is_err());
}

#[test]
fn out_of_range_start_city_is_an_error() {
    let config = SolveConfig { workers: 1, pool_size: 2, prefix_len: 2, start_city: 9 };
    let err = cross_check(GraphSpec { cities: 5, edge_percent: 50, seed: 0 }, config).unwrap_err();
    assert!(matches!(
        err,
        SolveError::Config(ConfigError::StartCity { start_city: 9, cities: 5 })
    ));
}

#[test]
fn graph_without_cities_is_an_error() {
    let config = SolveConfig { workers: 1, pool_size: 1, prefix_len: 1, start_city: 0 };
    let err = cross_check(GraphSpec { cities: 0, edge_percent: 50, seed: 0 }, config).unwrap_err();
    assert!(matches!(err, SolveError::Config(ConfigError::TooFewCities(0))));
}
