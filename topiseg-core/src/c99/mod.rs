//! C99: divisive clustering over a rank-transformed similarity matrix
//!
//! Pipeline: per-unit term vectors -> cosine similarity matrix -> local
//! rank transform -> density sum table -> divisive clustering. With no
//! target segment count, every possible split is produced and the leading
//! run of splits with an unusually high (smoothed) density gain is kept.

pub mod cluster;
pub mod density;
pub mod rank;

use crate::document::Document;
use crate::error::{Result, SegmentError};
use crate::lexicon::Lexicon;
use crate::segment::{Segmentation, Trace};
use crate::similarity::SimilarityMatrix;
use crate::vector::{TermVector, WeightVector};

pub use cluster::{best_split, select_by_gain, DivisiveClusterer, GainSelection, Region, Split};
pub use density::DensityTable;
pub use rank::rank_transform;

/// Default rank mask side
pub const DEFAULT_MASK_SIZE: usize = 11;

/// C99 parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct C99Params {
    /// Requested number of segments (None = automatic)
    pub segment_count: Option<usize>,
    /// Side of the square rank mask (odd, at least 3)
    pub mask_size: usize,
    /// Weight cosine terms by inverse document-wide frequency
    pub weighted: bool,
    /// Build the similarity and rank matrices on the rayon pool
    pub parallel: bool,
}

impl Default for C99Params {
    fn default() -> Self {
        Self {
            segment_count: None,
            mask_size: DEFAULT_MASK_SIZE,
            weighted: false,
            parallel: false,
        }
    }
}

impl C99Params {
    /// Request an exact number of segments
    pub fn with_segment_count(mut self, count: usize) -> Self {
        self.segment_count = Some(count);
        self
    }

    /// Set the rank mask side
    pub fn with_mask_size(mut self, mask_size: usize) -> Self {
        self.mask_size = mask_size;
        self
    }

    /// Enable or disable inverse-frequency weighting
    pub fn with_weighting(mut self, weighted: bool) -> Self {
        self.weighted = weighted;
        self
    }

    /// Enable or disable parallel matrix construction
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Check parameters that do not depend on the document
    pub fn validate(&self) -> Result<()> {
        if self.mask_size < 3 {
            return Err(SegmentError::invalid(
                "mask_size",
                format!("must be at least 3, got {}", self.mask_size),
            ));
        }
        if self.mask_size % 2 == 0 {
            return Err(SegmentError::invalid(
                "mask_size",
                format!("must be odd, got {}", self.mask_size),
            ));
        }
        if self.segment_count == Some(0) {
            return Err(SegmentError::invalid("segment_count", "must be positive"));
        }
        Ok(())
    }

    /// Check parameters against a document of `unit_count` units
    pub fn validate_for(&self, unit_count: usize) -> Result<()> {
        self.validate()?;
        match self.segment_count {
            Some(k) if k > 1 && k >= unit_count => Err(SegmentError::invalid(
                "segment_count",
                format!("{k} segments requested for a document of {unit_count} units"),
            )),
            _ => Ok(()),
        }
    }
}

/// C99 diagnostics
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct C99Trace {
    /// Boundaries in the order the clusterer produced them
    pub split_order: Vec<usize>,
    /// Density gain of each split
    pub gains: Vec<f64>,
    /// Smoothed gains (automatic mode only)
    pub smoothed_gains: Vec<f64>,
    /// Gain threshold (automatic mode only)
    pub threshold: Option<f64>,
}

/// Segment a document with C99
pub fn segment(
    document: &Document,
    lexicon: &Lexicon<'_>,
    params: &C99Params,
) -> Result<Segmentation> {
    let n = document.len();
    params.validate_for(n)?;
    if n < 2 {
        return Ok(Segmentation::whole(n));
    }
    if params.segment_count == Some(1) {
        return Ok(unsplit(n));
    }

    let vectors = TermVector::per_unit(document, lexicon);
    let weights = params
        .weighted
        .then(|| WeightVector::from_term_vector(&TermVector::global(document, lexicon)));
    let sim = build_similarity(&vectors, weights.as_ref(), params.parallel);

    segment_matrix(&sim, params)
}

/// Segment from a precomputed similarity matrix
pub fn segment_matrix(sim: &SimilarityMatrix, params: &C99Params) -> Result<Segmentation> {
    let n = sim.len();
    params.validate_for(n)?;
    if n < 2 {
        return Ok(Segmentation::whole(n));
    }
    if params.segment_count == Some(1) {
        return Ok(unsplit(n));
    }

    let ranked = rank_matrix(sim, params.mask_size, params.parallel);
    let table = DensityTable::build(&ranked);
    let mut clusterer = DivisiveClusterer::new(&table);

    let limit = params.segment_count.map_or(n - 1, |k| k - 1);
    let splits = clusterer.run(limit);

    let mut trace = C99Trace {
        split_order: splits.iter().map(|s| s.boundary).collect(),
        gains: splits.iter().map(|s| s.gain).collect(),
        ..Default::default()
    };

    let keep = match params.segment_count {
        Some(_) => splits.len(),
        None => {
            let selection = select_by_gain(&trace.gains);
            log::debug!(
                "automatic selection kept {} of {} splits (threshold {:.6})",
                selection.accepted,
                splits.len(),
                selection.threshold
            );
            trace.threshold = Some(selection.threshold);
            trace.smoothed_gains = selection.smoothed;
            selection.accepted
        }
    };

    let boundaries = trace.split_order[..keep].to_vec();
    Ok(Segmentation::from_boundaries(n, boundaries, Trace::C99(trace)))
}

/// A single segment chosen by the caller, not forced by a short document
fn unsplit(n: usize) -> Segmentation {
    Segmentation::from_boundaries(n, Vec::new(), Trace::C99(C99Trace::default()))
}

fn build_similarity(
    vectors: &[TermVector],
    weights: Option<&WeightVector>,
    parallel: bool,
) -> SimilarityMatrix {
    #[cfg(feature = "parallel")]
    {
        if parallel {
            return SimilarityMatrix::build_parallel(vectors, weights);
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;
    SimilarityMatrix::build(vectors, weights)
}

fn rank_matrix(sim: &SimilarityMatrix, mask_size: usize, parallel: bool) -> SimilarityMatrix {
    #[cfg(feature = "parallel")]
    {
        if parallel {
            return rank::rank_transform_parallel(sim, mask_size);
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;
    rank_transform(sim, mask_size)
}
