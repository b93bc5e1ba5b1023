//! TextTiling: sliding-window lexical cohesion with depth scoring
//!
//! Two adjacent token windows slide over the document. Their cosine
//! similarity is sampled every `step` tokens and smoothed; deep valleys in
//! the resulting curve mark topic shifts, which are then snapped to the
//! nearest unit boundary.

pub mod depth;
pub mod window;

use crate::document::Document;
use crate::error::{Result, SegmentError};
use crate::lexicon::Lexicon;
use crate::segment::{Segmentation, Trace};

pub use depth::{depth_scores, depth_threshold, select_candidates, snap_to_unit};
pub use window::{score_windows, WindowScores};

/// Default window size in tokens
pub const DEFAULT_WINDOW_SIZE: usize = 20;

/// Default sampling step in tokens
pub const DEFAULT_STEP_SIZE: usize = 10;

/// TextTiling parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextTilingParams {
    /// Tokens per window
    pub window_size: usize,
    /// Tokens between samples
    pub step_size: usize,
}

impl Default for TextTilingParams {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            step_size: DEFAULT_STEP_SIZE,
        }
    }
}

impl TextTilingParams {
    /// Create parameters with the given window and step
    pub fn new(window_size: usize, step_size: usize) -> Self {
        Self {
            window_size,
            step_size,
        }
    }

    /// Check that window and step are positive
    pub fn validate(&self) -> Result<()> {
        if self.window_size == 0 {
            return Err(SegmentError::invalid("window_size", "must be positive"));
        }
        if self.step_size == 0 {
            return Err(SegmentError::invalid("step_size", "must be positive"));
        }
        Ok(())
    }
}

/// TextTiling diagnostics
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextTilingTrace {
    /// Token positions of the smoothed samples
    pub positions: Vec<usize>,
    /// Raw window similarities
    pub similarities: Vec<f64>,
    /// Smoothed similarities
    pub smoothed: Vec<f64>,
    /// Depth score of each smoothed sample
    pub depths: Vec<f64>,
    /// Depth cut-off
    pub threshold: f64,
    /// Token positions of the selected pseudo-boundaries
    pub pseudo_boundaries: Vec<usize>,
}

/// Turn raw window similarities into unit boundaries.
///
/// `positions[k]` is the token position of `similarities[k]`; `unit_offsets`
/// is the unit start table from `Document::unit_offsets`.
pub fn select_boundaries(
    similarities: &[f64],
    positions: &[usize],
    unit_offsets: &[usize],
) -> (Vec<usize>, TextTilingTrace) {
    let raw = WindowScores {
        positions: positions.to_vec(),
        similarities: similarities.to_vec(),
    };
    let smoothed = raw.smoothed();
    let depths = depth_scores(&smoothed.similarities);
    let threshold = depth_threshold(&depths);
    let candidates = select_candidates(&depths, threshold);

    let pseudo_boundaries: Vec<usize> = candidates.iter().map(|&i| smoothed.positions[i]).collect();
    let mut boundaries: Vec<usize> = pseudo_boundaries
        .iter()
        .filter_map(|&p| snap_to_unit(p, unit_offsets))
        .collect();
    boundaries.sort_unstable();
    boundaries.dedup();

    let trace = TextTilingTrace {
        positions: smoothed.positions,
        similarities: raw.similarities,
        smoothed: smoothed.similarities,
        depths,
        threshold,
        pseudo_boundaries,
    };
    (boundaries, trace)
}

/// Segment a document with TextTiling
pub fn segment(
    document: &Document,
    lexicon: &Lexicon<'_>,
    params: &TextTilingParams,
) -> Result<Segmentation> {
    params.validate()?;
    let n = document.len();
    let tokens = document.token_count();
    if n < 2 || tokens <= params.window_size.saturating_mul(2) {
        log::debug!(
            "document too short for TextTiling ({n} units, {tokens} tokens, w={})",
            params.window_size
        );
        return Ok(Segmentation::whole(n));
    }

    let terms: Vec<Option<String>> = document.tokens().map(|t| lexicon.term(t)).collect();
    let scores = score_windows(&terms, params.window_size, params.step_size);
    let (boundaries, trace) =
        select_boundaries(&scores.similarities, &scores.positions, &document.unit_offsets());

    log::debug!(
        "TextTiling selected {} boundaries from {} samples",
        boundaries.len(),
        scores.len()
    );
    Ok(Segmentation::from_boundaries(
        n,
        boundaries,
        Trace::TextTiling(trace),
    ))
}
