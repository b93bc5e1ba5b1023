//! Depth scoring and boundary selection

use crate::stats;

/// Neighbourhood radius used for local-maximum suppression
pub const SUPPRESSION_RADIUS: usize = 3;

/// Depth of every valley in a similarity sequence.
///
/// For each index the nearest peak on either side is found by climbing while
/// the values do not decrease; the depth is the sum of both climbs.
pub fn depth_scores(similarities: &[f64]) -> Vec<f64> {
    (0..similarities.len())
        .map(|i| {
            let here = similarities[i];

            let mut l = i;
            while l > 0 && similarities[l - 1] >= similarities[l] {
                l -= 1;
            }
            let mut r = i;
            while r + 1 < similarities.len() && similarities[r + 1] >= similarities[r] {
                r += 1;
            }

            (similarities[l] - here) + (similarities[r] - here)
        })
        .collect()
}

/// Cut-off for candidate boundaries: `mean - stddev / 2`
pub fn depth_threshold(depths: &[f64]) -> f64 {
    stats::mean(depths) - stats::std_dev(depths) / 2.0
}

/// Indices whose depth reaches `threshold` and is not beaten within the suppression radius.
///
/// The threshold may be negative, in which case zero-depth positions far
/// enough from any deeper valley are selected as well.
pub fn select_candidates(depths: &[f64], threshold: f64) -> Vec<usize> {
    (0..depths.len())
        .filter(|&i| {
            let depth = depths[i];
            if depth < threshold {
                return false;
            }
            let lo = i.saturating_sub(SUPPRESSION_RADIUS);
            let hi = (i + SUPPRESSION_RADIUS).min(depths.len() - 1);
            !depths[lo..=hi].iter().any(|&d| d > depth)
        })
        .collect()
}

/// Nearest true boundary to a token `position`.
///
/// `unit_offsets` holds the token offset at which each unit starts (plus the
/// total, as returned by `Document::unit_offsets`). Only interior units
/// `1..n` are eligible. Ties go to the smallest unit index.
pub fn snap_to_unit(position: usize, unit_offsets: &[usize]) -> Option<usize> {
    let n = unit_offsets.len().saturating_sub(1);
    let mut best: Option<(usize, usize)> = None;
    for k in (1..n).rev() {
        let distance = unit_offsets[k].abs_diff(position);
        if best.map_or(true, |(_, smallest)| distance <= smallest) {
            best = Some((k, distance));
        }
    }
    best.map(|(k, _)| k)
}
