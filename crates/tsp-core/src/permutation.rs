//! Window-constrained permutation generator.
//!
//! A path is enumerated in lexicographic order one window at a time: the
//! coordinator walks positions `[1, K)` of the prefix, workers walk `[K, N)` of
//! the suffix, and the serial solver walks `[1, N)`. Positions outside the
//! window are read-only context; position `lo - 1` supplies the incoming edge
//! for the first position of the window.
//!
//! Advancing checks adjacency only for the position that was incremented. The
//! positions to its right are refilled with the smallest unused cities without
//! looking at the matrix, and get validated when the next call increments them
//! or when the full path is scored.

use std::ops::Range;

use crate::matrix::DistanceMatrix;
use crate::City;

/// Half-open range of path positions a generator may rewrite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchWindow {
    pub lo: usize,
    pub hi: usize,
}

impl SearchWindow {
    pub fn new(lo: usize, hi: usize) -> Self {
        debug_assert!(lo >= 1, "position 0 holds the start city and is never rewritten");
        debug_assert!(lo <= hi);
        Self { lo, hi }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lo >= self.hi
    }

    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.lo..self.hi
    }
}

/// Moves `path` to the next assignment of `window` in lexicographic order.
///
/// `used` must mark exactly the cities currently in `path`. Returns `false`
/// once the window is exhausted; the buffers are then left partially rewritten
/// and must not be advanced again.
pub fn advance(
    matrix: &DistanceMatrix,
    path: &mut [City],
    used: &mut [bool],
    window: SearchWindow,
) -> bool {
    let SearchWindow { lo, hi } = window;
    if window.is_empty() {
        return false;
    }
    debug_assert!(lo >= 1 && hi <= path.len());

    let n = matrix.len();
    let mut i = hi - 1;

    loop {
        let prev = path[i - 1];
        used[path[i]] = false;

        let next = (path[i] + 1..n).find(|&city| !used[city] && matrix.has_edge(prev, city));
        if let Some(city) = next {
            path[i] = city;
            used[city] = true;
            break;
        }

        if i == lo {
            return false;
        }
        i -= 1;
    }

    // Every city below `cursor` is in use, so one forward scan serves the whole refill.
    let mut cursor = 0;
    for slot in &mut path[i + 1..hi] {
        while used[cursor] {
            cursor += 1;
        }
        *slot = cursor;
        used[cursor] = true;
    }

    true
}

/// Path buffer plus its used-city markers, owned by one generator instance.
#[derive(Clone, Debug)]
pub struct SearchBuffer {
    path: Vec<City>,
    used: Vec<bool>,
}

impl SearchBuffer {
    /// A buffer of `len` positions over `n` cities: `start` at position 0, the
    /// rest the smallest remaining cities in ascending order.
    ///
    /// # Panics
    /// If `start >= n` or `len` is zero or larger than `n`.
    pub fn seeded(n: usize, start: City, len: usize) -> Self {
        assert!(start < n, "start city {start} out of range for {n} cities");
        assert!((1..=n).contains(&len), "path length {len} out of range for {n} cities");

        let mut buffer = Self { path: vec![start; len], used: vec![false; n] };
        buffer.used[start] = true;
        buffer.fill_ascending(1);
        buffer
    }

    /// Replaces the buffer contents with `prefix` completed by the smallest
    /// unused cities in ascending order. The buffer keeps its length.
    pub fn reset_from_prefix(&mut self, prefix: &[City]) {
        debug_assert!(prefix.len() <= self.path.len());
        self.used.fill(false);
        for (slot, &city) in self.path.iter_mut().zip(prefix) {
            *slot = city;
            self.used[city] = true;
        }
        self.fill_ascending(prefix.len());
    }

    fn fill_ascending(&mut self, from: usize) {
        let mut cursor = 0;
        for slot in &mut self.path[from..] {
            while self.used[cursor] {
                cursor += 1;
            }
            *slot = cursor;
            self.used[cursor] = true;
        }
    }

    #[inline]
    pub fn advance(&mut self, matrix: &DistanceMatrix, window: SearchWindow) -> bool {
        advance(matrix, &mut self.path, &mut self.used, window)
    }

    /// Whether every edge between consecutive positions below `hi` exists.
    pub fn edges_feasible(&self, matrix: &DistanceMatrix, hi: usize) -> bool {
        self.path[..hi].windows(2).all(|pair| matrix.has_edge(pair[0], pair[1]))
    }

    #[inline]
    pub fn path(&self) -> &[City] {
        &self.path
    }

}
