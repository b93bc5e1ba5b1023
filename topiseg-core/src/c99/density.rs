//! Prefix-sum table over a ranked matrix
//!
//! `sum(a, b)` is the total rank mass of the square region spanning units
//! `a..=b`. The table is filled by span length so every entry only depends
//! on shorter spans, which makes construction O(n^2) and each query O(1).

use crate::similarity::SimilarityMatrix;

/// Region sums for every `[start, end]` span of a ranked matrix
#[derive(Debug, Clone)]
pub struct DensityTable {
    size: usize,
    // sums[end * size + start] for start <= end
    sums: Vec<f64>,
}

impl DensityTable {
    /// Build the table from a rank-transformed matrix
    pub fn build(rank: &SimilarityMatrix) -> Self {
        let n = rank.len();
        let mut table = Self {
            size: n,
            sums: vec![0.0; n * n],
        };

        for i in 0..n {
            table.put(i, i, rank.get(i, i));
        }
        for i in 0..n.saturating_sub(1) {
            let value = 2.0 * rank.get(i + 1, i) + table.at(i, i) + table.at(i + 1, i + 1);
            table.put(i + 1, i, value);
        }
        for k in 2..n {
            for i in 0..n - k {
                let value = 2.0 * rank.get(i + k, i) + table.at(i + k - 1, i)
                    + table.at(i + k, i + 1)
                    - table.at(i + k - 1, i + 1);
                table.put(i + k, i, value);
            }
        }

        log::debug!("density table built for {n} units");
        table
    }

    #[inline]
    fn at(&self, end: usize, start: usize) -> f64 {
        self.sums[end * self.size + start]
    }

    #[inline]
    fn put(&mut self, end: usize, start: usize, value: f64) {
        self.sums[end * self.size + start] = value;
    }

    /// Number of units covered
    pub fn len(&self) -> usize {
        self.size
    }

    /// Whether the table covers no units
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Rank mass of the region between `a` and `b` (inclusive, either order)
    #[inline]
    pub fn region_sum(&self, a: usize, b: usize) -> f64 {
        let (start, end) = if a <= b { (a, b) } else { (b, a) };
        self.at(end, start)
    }

    /// Cell count of the region between `a` and `b`
    #[inline]
    pub fn area(a: usize, b: usize) -> f64 {
        let side = a.abs_diff(b) + 1;
        (side * side) as f64
    }

    /// Mean rank of the region between `a` and `b`
    pub fn density(&self, a: usize, b: usize) -> f64 {
        self.region_sum(a, b) / Self::area(a, b)
    }
}
