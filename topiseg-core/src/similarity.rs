//! Unit-by-unit cosine similarity matrices

use crate::error::{Result, SegmentError};
use crate::vector::{cosine, TermVector, WeightVector};

/// Dense symmetric `n x n` matrix stored row-major
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    size: usize,
    cells: Vec<f64>,
}

impl SimilarityMatrix {
    /// All-zero matrix of the given size
    pub fn zeros(size: usize) -> Self {
        Self {
            size,
            cells: vec![0.0; size * size],
        }
    }

    /// Build the cosine matrix of `vectors`, optionally inverse-frequency weighted.
    ///
    /// Only the upper triangle is computed; the lower triangle mirrors it.
    pub fn build(vectors: &[TermVector], weights: Option<&WeightVector>) -> Self {
        let n = vectors.len();
        let mut matrix = Self::zeros(n);
        for i in 0..n {
            for j in i..n {
                matrix.set_symmetric(i, j, cosine(&vectors[i], &vectors[j], weights));
            }
        }
        log::debug!("built {n}x{n} similarity matrix (weighted: {})", weights.is_some());
        matrix
    }

    /// Same result as [`SimilarityMatrix::build`], with rows computed on the rayon pool
    #[cfg(feature = "parallel")]
    pub fn build_parallel(vectors: &[TermVector], weights: Option<&WeightVector>) -> Self {
        use rayon::prelude::*;

        let n = vectors.len();
        let upper: Vec<Vec<f64>> = (0..n)
            .into_par_iter()
            .map(|i| {
                (i..n)
                    .map(|j| cosine(&vectors[i], &vectors[j], weights))
                    .collect()
            })
            .collect();

        let mut matrix = Self::zeros(n);
        for (i, row) in upper.into_iter().enumerate() {
            for (offset, value) in row.into_iter().enumerate() {
                matrix.set_symmetric(i, i + offset, value);
            }
        }
        log::debug!("built {n}x{n} similarity matrix in parallel");
        matrix
    }

    /// Wrap caller-supplied rows, rejecting non-square or NaN input
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(SegmentError::MalformedMatrix {
                    reason: format!("row {i} has {} columns, expected {size}", row.len()),
                });
            }
            if let Some(j) = row.iter().position(|v| v.is_nan()) {
                return Err(SegmentError::MalformedMatrix {
                    reason: format!("NaN at ({i}, {j})"),
                });
            }
            cells.extend(row);
        }
        Ok(Self { size, cells })
    }

    /// Number of rows (and columns)
    pub fn len(&self) -> usize {
        self.size
    }

    /// Whether the matrix is `0 x 0`
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Value at `(i, j)`
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.cells[i * self.size + j]
    }

    /// One row as a slice
    pub fn row(&self, i: usize) -> &[f64] {
        &self.cells[i * self.size..(i + 1) * self.size]
    }

    /// Whether `m[i][j] == m[j][i]` everywhere
    pub fn is_symmetric(&self) -> bool {
        (0..self.size).all(|i| (0..i).all(|j| self.get(i, j) == self.get(j, i)))
    }

    #[inline]
    pub(crate) fn set_symmetric(&mut self, i: usize, j: usize, value: f64) {
        self.cells[i * self.size + j] = value;
        self.cells[j * self.size + i] = value;
    }
}
