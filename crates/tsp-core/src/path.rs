use std::fmt;

use serde::{Deserialize, Serialize};

use crate::matrix::DistanceMatrix;
use crate::City;

/// A complete feasible tour and its length.
///
/// Infeasible tours never become candidates, so "no candidate" (`None`) is the
/// only representation of infeasibility and it can never win a comparison.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub path: Vec<City>,
    pub distance: u32,
}

impl Candidate {
    /// Scores `path`, returning `None` if any edge (closing edge included) is missing.
    pub fn evaluate(matrix: &DistanceMatrix, path: &[City]) -> Option<Self> {
        path_distance(matrix, path).map(|distance| Self { path: path.to_vec(), distance })
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for city in &self.path {
            write!(f, "{city}, ")?;
        }
        write!(f, "], with distance: {}", self.distance)
    }
}

/// Sum of the edges along `path` plus the edge from the last city back to the
/// first. `None` when an edge is absent.
#[inline]
pub fn path_distance(matrix: &DistanceMatrix, path: &[City]) -> Option<u32> {
    let (&first, _) = path.split_first()?;
    let mut total = 0u32;
    for pair in path.windows(2) {
        total += matrix.edge(pair[0], pair[1])?;
    }
    let &last = path.last()?;
    if path.len() > 1 {
        total += matrix.edge(last, first)?;
    }
    Some(total)
}

/// Whether `challenger` should replace `incumbent`.
///
/// Strict: ties keep the incumbent, and a missing challenger never wins.
#[inline]
pub fn better(challenger: Option<&Candidate>, incumbent: Option<&Candidate>) -> bool {
    match (challenger, incumbent) {
        (None, _) => false,
        (Some(_), None) => true,
        (Some(c), Some(i)) => c.distance < i.distance,
    }
}

/// Folds a sequence of per-scope bests into one, keeping the first of equals.
pub fn reduce<I>(bests: I) -> Option<Candidate>
where
    I: IntoIterator<Item = Option<Candidate>>,
{
    bests.into_iter().fold(None, |best, next| {
        if better(next.as_ref(), best.as_ref()) {
            next
        } else {
            best
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> DistanceMatrix {
        DistanceMatrix::from_rows(vec![vec![0, 1, 9], vec![-1, 0, 2], vec![3, 4, 0]]).unwrap()
    }

    #[test]
    fn distance_includes_closing_edge() {
        assert_eq!(path_distance(&triangle(), &[0, 1, 2]), Some(1 + 2 + 3));
    }

    #[test]
    fn missing_edge_is_infeasible() {
        // 1 -> 0 is absent
        assert_eq!(path_distance(&triangle(), &[0, 2, 1]), None);
        assert!(Candidate::evaluate(&triangle(), &[0, 2, 1]).is_none());
    }

    #[test]
    fn infeasible_never_wins() {
        let feasible = Candidate { path: vec![0, 1, 2], distance: 50 };
        assert!(!better(None, Some(&feasible)));
        assert!(better(Some(&feasible), None));
        assert!(!better(None, None));
    }

    #[test]
    fn reduce_keeps_first_of_ties() {
        let a = Candidate { path: vec![0, 1, 2], distance: 6 };
        let b = Candidate { path: vec![0, 2, 1], distance: 6 };
        let best = reduce([None, Some(a.clone()), None, Some(b)]);
        assert_eq!(best, Some(a));
        assert_eq!(reduce([None, None]), None);
    }

    #[test]
    fn display_matches_report_format() {
        let c = Candidate { path: vec![0, 2, 1], distance: 17 };
        assert_eq!(c.to_string(), "[0, 2, 1, ], with distance: 17");
    }
}
