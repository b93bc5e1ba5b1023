//! Local rank transform of a similarity matrix
//!
//! Each cell is replaced by the fraction of its neighbours (inside a square
//! mask centred on it and clipped to the matrix) whose similarity is strictly
//! lower. Absolute similarity values are unreliable between short units;
//! their rank inside a neighbourhood is not.

use crate::similarity::SimilarityMatrix;

/// Rank of cell `(i, j)` within its clipped `(2 * radius + 1)^2` neighbourhood
fn rank_cell(sim: &SimilarityMatrix, i: usize, j: usize, radius: usize) -> f64 {
    let n = sim.len();
    let rows = i.saturating_sub(radius)..=(i + radius).min(n - 1);
    let cols = j.saturating_sub(radius)..=(j + radius).min(n - 1);

    let cells = rows.clone().count() * cols.clone().count();
    if cells <= 1 {
        return 0.0;
    }

    let value = sim.get(i, j);
    let lower = rows
        .flat_map(|r| cols.clone().map(move |c| (r, c)))
        .filter(|&(r, c)| sim.get(r, c) < value)
        .count();

    lower as f64 / (cells - 1) as f64
}

/// Rank-transform `sim` with a square mask of side `mask_size`.
///
/// The caller validates `mask_size` (odd, at least 3). The result is
/// symmetric: each unordered pair is ranked once and mirrored.
pub fn rank_transform(sim: &SimilarityMatrix, mask_size: usize) -> SimilarityMatrix {
    let n = sim.len();
    let radius = mask_size / 2;
    let mut ranked = SimilarityMatrix::zeros(n);
    for i in 0..n {
        for j in 0..=i {
            ranked.set_symmetric(i, j, rank_cell(sim, i, j, radius));
        }
    }
    log::debug!("rank transform over {n}x{n} matrix with mask {mask_size}");
    ranked
}

/// Same result as [`rank_transform`], with rows ranked on the rayon pool
#[cfg(feature = "parallel")]
pub fn rank_transform_parallel(sim: &SimilarityMatrix, mask_size: usize) -> SimilarityMatrix {
    use rayon::prelude::*;

    let n = sim.len();
    let radius = mask_size / 2;
    let lower: Vec<Vec<f64>> = (0..n)
        .into_par_iter()
        .map(|i| (0..=i).map(|j| rank_cell(sim, i, j, radius)).collect())
        .collect();

    let mut ranked = SimilarityMatrix::zeros(n);
    for (i, row) in lower.into_iter().enumerate() {
        for (j, value) in row.into_iter().enumerate() {
            ranked.set_symmetric(i, j, value);
        }
    }
    log::debug!("parallel rank transform over {n}x{n} matrix with mask {mask_size}");
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block_matrix() -> SimilarityMatrix {
        SimilarityMatrix::from_rows(vec![
            vec![1.0, 1.0, 0.0, 0.0],
            vec![1.0, 1.0, 0.0, 0.0],
            vec![0.0, 0.0, 1.0, 1.0],
            vec![0.0, 0.0, 1.0, 1.0],
        ])
        .unwrap()
    }

    #[test]
    fn test_rank_block_matrix() {
        let ranked = rank_transform(&block_matrix(), 3);

        // Corner: 2x2 neighbourhood of equal values
        assert_eq!(ranked.get(0, 0), 0.0);
        // (1,0): 3x2 neighbourhood, two zeros below 1.0
        assert!((ranked.get(1, 0) - 0.4).abs() < 1e-12);
        // (1,1): full 3x3 neighbourhood, four zeros below 1.0
        assert!((ranked.get(1, 1) - 0.5).abs() < 1e-12);
        // Zero cells have nothing strictly below them
        assert_eq!(ranked.get(2, 0), 0.0);
        assert!((ranked.get(3, 2) - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_rank_symmetric_and_bounded() {
        let sim = SimilarityMatrix::from_rows(vec![
            vec![1.0, 0.3, 0.1, 0.7, 0.2],
            vec![0.3, 1.0, 0.5, 0.4, 0.0],
            vec![0.1, 0.5, 1.0, 0.9, 0.6],
            vec![0.7, 0.4, 0.9, 1.0, 0.8],
            vec![0.2, 0.0, 0.6, 0.8, 1.0],
        ])
        .unwrap();

        for mask in [3, 5, 11] {
            let ranked = rank_transform(&sim, mask);
            assert!(ranked.is_symmetric());
            for i in 0..5 {
                for &v in ranked.row(i) {
                    assert!((0.0..=1.0).contains(&v));
                }
            }
        }
    }

    #[test]
    fn test_single_cell_ranks_zero() {
        let sim = SimilarityMatrix::from_rows(vec![vec![1.0]]).unwrap();
        assert_eq!(rank_transform(&sim, 3).get(0, 0), 0.0);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        let sim = block_matrix();
        assert_eq!(rank_transform(&sim, 3), rank_transform_parallel(&sim, 3));
    }
}
