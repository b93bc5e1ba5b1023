//! Divisive clustering over a density table
//!
//! The document starts as a single region. At every step the region whose
//! best internal split raises the overall density the most is split in two,
//! and the density gain is recorded. Regions live in an arena and refer to
//! their children by index.

use super::density::DensityTable;
use crate::stats;

/// Smoothing kernel applied to the density gains before thresholding
pub const GAIN_KERNEL: [f64; 7] = [1.0, 2.0, 4.0, 8.0, 4.0, 2.0, 1.0];

/// Standard deviations above the mean a smoothed gain must exceed
pub const GAIN_THRESHOLD_FACTOR: f64 = 1.2;

type RegionId = usize;

/// A square region of the ranked matrix covering units `start..=end`
#[derive(Debug, Clone)]
pub struct Region {
    /// First unit
    pub start: usize,
    /// Last unit (inclusive)
    pub end: usize,
    /// Cell count, `(end - start + 1)^2`
    pub area: f64,
    /// Rank mass
    pub sum: f64,
    children: Option<(RegionId, RegionId)>,
}

impl Region {
    /// Whether the region has an interior split point
    pub fn is_splittable(&self) -> bool {
        self.start < self.end
    }
}

/// One accepted split
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Split {
    /// Index of the first unit of the right-hand child
    pub boundary: usize,
    /// Overall density after the split
    pub density: f64,
    /// Density increase caused by the split
    pub gain: f64,
}

/// Region arena plus the list of regions currently tiling the document
#[derive(Debug)]
pub struct DivisiveClusterer<'t> {
    table: &'t DensityTable,
    arena: Vec<Region>,
    active: Vec<RegionId>,
    total_sum: f64,
    total_area: f64,
}

impl<'t> DivisiveClusterer<'t> {
    /// Start from one region spanning the whole table
    pub fn new(table: &'t DensityTable) -> Self {
        let mut clusterer = Self {
            table,
            arena: Vec::new(),
            active: Vec::new(),
            total_sum: 0.0,
            total_area: 0.0,
        };
        if !table.is_empty() {
            let root = clusterer.alloc(0, table.len() - 1);
            clusterer.prepare(root);
            clusterer.active.push(root);
            clusterer.total_sum = clusterer.arena[root].sum;
            clusterer.total_area = clusterer.arena[root].area;
        }
        clusterer
    }

    fn alloc(&mut self, start: usize, end: usize) -> RegionId {
        self.arena.push(Region {
            start,
            end,
            area: DensityTable::area(start, end),
            sum: self.table.region_sum(start, end),
            children: None,
        });
        self.arena.len() - 1
    }

    /// Attach the best split's children to a splittable region
    fn prepare(&mut self, id: RegionId) {
        let region = &self.arena[id];
        if !region.is_splittable() || region.children.is_some() {
            return;
        }
        let (start, end) = (region.start, region.end);
        let b = best_split(self.table, start, end);
        let left = self.alloc(start, b);
        let right = self.alloc(b + 1, end);
        self.arena[id].children = Some((left, right));
    }

    /// Overall density of the current tiling
    pub fn density(&self) -> f64 {
        if self.total_area == 0.0 {
            0.0
        } else {
            self.total_sum / self.total_area
        }
    }

    /// Regions currently tiling the document, in document order
    pub fn regions(&self) -> impl Iterator<Item = &Region> {
        self.active.iter().map(|&id| &self.arena[id])
    }

    /// Perform the most profitable split, or `None` when every region is a single unit
    pub fn step(&mut self) -> Option<Split> {
        let mut chosen: Option<(usize, f64)> = None;

        for (pos, &id) in self.active.iter().enumerate() {
            let region = &self.arena[id];
            let Some((l, r)) = region.children else {
                continue;
            };
            let (left, right) = (&self.arena[l], &self.arena[r]);
            let sum = self.total_sum - region.sum + left.sum + right.sum;
            let area = self.total_area - region.area + left.area + right.area;
            let density = sum / area;
            if chosen.map_or(true, |(_, best)| density > best) {
                chosen = Some((pos, density));
            }
        }

        let (pos, density) = chosen?;
        let id = self.active[pos];
        let (l, r) = self.arena[id].children?;

        let gain = density - self.density();
        let (parent_sum, parent_area) = (self.arena[id].sum, self.arena[id].area);
        self.total_sum += self.arena[l].sum + self.arena[r].sum - parent_sum;
        self.total_area += self.arena[l].area + self.arena[r].area - parent_area;

        self.prepare(l);
        self.prepare(r);
        self.active[pos] = l;
        self.active.insert(pos + 1, r);

        let split = Split {
            boundary: self.arena[r].start,
            density,
            gain,
        };
        log::trace!(
            "split at {} (density {:.6}, gain {:.6})",
            split.boundary,
            split.density,
            split.gain
        );
        Some(split)
    }

    /// Split up to `limit` times, returning the splits in the order they were made
    pub fn run(&mut self, limit: usize) -> Vec<Split> {
        let mut splits = Vec::with_capacity(limit);
        while splits.len() < limit {
            match self.step() {
                Some(split) => splits.push(split),
                None => break,
            }
        }
        splits
    }
}

/// Best interior split point `b` of `[start, end]`, the left part being `start..=b`.
///
/// Candidates are scanned from `end - 1` down to `start` and only a strictly
/// greater density replaces the current best, so among equal maxima the
/// right-most split point wins.
pub fn best_split(table: &DensityTable, start: usize, end: usize) -> usize {
    debug_assert!(start < end);
    let mut best = end - 1;
    let mut max = f64::NEG_INFINITY;
    for b in (start..end).rev() {
        let left = (b - start + 1) as f64;
        let right = (end - b) as f64;
        let inside = table.region_sum(start, b) + table.region_sum(b + 1, end);
        let density = inside / (left * left + right * right);
        if density > max {
            max = density;
            best = b;
        }
    }
    best
}

/// Outcome of the automatic segment-count rule
#[derive(Debug, Clone, PartialEq)]
pub struct GainSelection {
    /// Gains after smoothing with [`GAIN_KERNEL`]
    pub smoothed: Vec<f64>,
    /// `mean + 1.2 * stddev` of the smoothed gains
    pub threshold: f64,
    /// Number of leading splits whose smoothed gain exceeds the threshold
    pub accepted: usize,
}

/// Decide how many of the splits, in production order, to keep
///
/// Gains are smoothed with the `[1, 2, 4, 8, 4, 2, 1]` kernel. Near either end
/// the taps that fall outside the sequence are dropped and the result is
/// divided by the sum of the remaining taps, so the first and last gains are
/// not pulled towards zero.
pub fn select_by_gain(gains: &[f64]) -> GainSelection {
    let smoothed = stats::convolve(gains, &GAIN_KERNEL);
    let threshold = stats::mean(&smoothed) + GAIN_THRESHOLD_FACTOR * stats::std_dev(&smoothed);
    let accepted = smoothed.iter().take_while(|&&g| g > threshold).count();
    GainSelection {
        smoothed,
        threshold,
        accepted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::similarity::SimilarityMatrix;

    fn table(rows: Vec<Vec<f64>>) -> DensityTable {
        DensityTable::build(&SimilarityMatrix::from_rows(rows).unwrap())
    }

    fn two_blocks() -> DensityTable {
        // Rank matrix of two 2x2 blocks with a 3x3 mask
        table(vec![
            vec![0.0, 0.4, 0.0, 0.0],
            vec![0.4, 0.5, 0.0, 0.0],
            vec![0.0, 0.0, 0.5, 0.4],
            vec![0.0, 0.0, 0.4, 0.0],
        ])
    }

    #[test]
    fn test_best_split_between_blocks() {
        assert_eq!(best_split(&two_blocks(), 0, 3), 1);
    }

    #[test]
    fn test_best_split_ties_pick_rightmost() {
        let flat = table(vec![vec![1.0; 4]; 4]);
        // Every split of a uniform region has density 1; the first scanned wins.
        assert_eq!(best_split(&flat, 0, 3), 2);

        let zero = table(vec![vec![0.0; 3]; 3]);
        // All candidates score 0; the first one scanned (end - 1) is kept.
        assert_eq!(best_split(&zero, 0, 2), 1);
    }

    #[test]
    fn test_step_records_boundary_and_gain() {
        let t = two_blocks();
        let mut clusterer = DivisiveClusterer::new(&t);
        let before = clusterer.density();

        let split = clusterer.step().unwrap();
        assert_eq!(split.boundary, 2);
        assert!((split.gain - (split.density - before)).abs() < 1e-12);
        assert!(split.gain > 0.0);

        let spans: Vec<_> = clusterer.regions().map(|r| (r.start, r.end)).collect();
        assert_eq!(spans, vec![(0, 1), (2, 3)]);
    }

    #[test]
    fn test_step_ties_split_earliest_region() {
        // Four uniform 2x2 blocks; integer sums keep mirrored regions exactly equal
        let rows: Vec<Vec<f64>> = (0..8)
            .map(|i| (0..8).map(|j| if i / 2 == j / 2 { 1.0 } else { 0.0 }).collect())
            .collect();
        let t = table(rows);
        let mut clusterer = DivisiveClusterer::new(&t);

        assert_eq!(clusterer.step().map(|s| s.boundary), Some(4));
        // [0, 3] and [4, 7] score the same; the left one is split first
        assert_eq!(clusterer.step().map(|s| s.boundary), Some(2));
        assert_eq!(clusterer.step().map(|s| s.boundary), Some(6));
        // Four identical blocks remain; the first one goes next
        assert_eq!(clusterer.step().map(|s| s.boundary), Some(1));

        let starts: Vec<_> = clusterer.regions().map(|r| r.start).collect();
        assert_eq!(starts, vec![0, 1, 2, 4, 6]);
    }

    #[test]
    fn test_run_exhausts_all_boundaries() {
        let t = two_blocks();
        let mut clusterer = DivisiveClusterer::new(&t);
        let splits = clusterer.run(10);
        assert_eq!(splits.len(), 3);
        let mut boundaries: Vec<_> = splits.iter().map(|s| s.boundary).collect();
        boundaries.sort_unstable();
        assert_eq!(boundaries, vec![1, 2, 3]);
        assert!(clusterer.step().is_none());
    }

    #[test]
    fn test_single_unit_never_splits() {
        let t = table(vec![vec![0.0]]);
        let mut clusterer = DivisiveClusterer::new(&t);
        assert!(clusterer.step().is_none());
    }

    #[test]
    fn test_select_by_gain_keeps_leading_run() {
        let gains = [0.9, 0.8, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0];
        let selection = select_by_gain(&gains);
        assert_eq!(selection.smoothed.len(), gains.len());
        assert!(selection.accepted >= 1);
        assert!(selection.accepted < gains.len());
        for g in &selection.smoothed[..selection.accepted] {
            assert!(*g > selection.threshold);
        }
    }

    #[test]
    fn test_select_by_gain_renormalizes_at_the_ends() {
        // A constant sequence stays constant only if the edge taps are renormalized
        let selection = select_by_gain(&[0.5; 4]);
        for g in &selection.smoothed {
            assert!((g - 0.5).abs() < 1e-12);
        }

        // First gain sees taps 8, 4, 2, 1 only
        let selection = select_by_gain(&[1.0, 0.0, 0.0, 0.0]);
        assert!((selection.smoothed[0] - 8.0 / 15.0).abs() < 1e-12);
        assert!((selection.smoothed[3] - 1.0 / 15.0).abs() < 1e-12);
    }

    #[test]
    fn test_select_by_gain_flat_accepts_nothing() {
        let selection = select_by_gain(&[1.0; 6]);
        assert_eq!(selection.accepted, 0);
        assert!(select_by_gain(&[]).smoothed.is_empty());
    }
}
