use thiserror::Error;

#[derive(Debug, Error)]
pub enum MatrixError {
    #[error("distance matrix has no cities")]
    Empty,
    #[error("distance matrix is not square: {cells} cells for {n} cities")]
    NotSquare { n: usize, cells: usize },
    #[error("row {row} has {len} entries, expected {n}")]
    RaggedRow { row: usize, len: usize, n: usize },
    #[error("diagonal entry ({city}, {city}) is {value}, expected 0")]
    NonZeroDiagonal { city: usize, value: i32 },
    #[error("edge ({from}, {to}) has weight {value}; weights are -1 or 1..=99")]
    WeightOutOfRange { from: usize, to: usize, value: i32 },
    #[error("malformed matrix json: {0}")]
    Json(#[from] serde_json::Error),
}
