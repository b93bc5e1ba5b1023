//! Segmentation results

use crate::c99::C99Trace;
use crate::texttiling::TextTilingTrace;

/// Half-open range of unit indices `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    /// First unit of the segment
    pub start: usize,
    /// One past the last unit of the segment
    pub end: usize,
}

impl Segment {
    /// Create a segment covering `start..end`
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    /// Number of units in the segment
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the segment covers no units
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether `unit` falls inside the segment
    pub fn contains(&self, unit: usize) -> bool {
        (self.start..self.end).contains(&unit)
    }
}

/// Intermediate values produced by the algorithm that ran
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Trace {
    /// Input was too short to run either algorithm
    #[default]
    Trivial,
    /// Divisive clustering diagnostics
    C99(C99Trace),
    /// Sliding-window diagnostics
    TextTiling(TextTilingTrace),
}

/// Boundaries and the segments they induce over a document of `unit_count` units
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segmentation {
    /// Number of units in the segmented document
    pub unit_count: usize,
    /// Strictly increasing segment starts, each in `(0, unit_count)`
    pub boundaries: Vec<usize>,
    /// Contiguous segments covering `[0, unit_count)` in order
    pub segments: Vec<Segment>,
    /// Algorithm diagnostics
    pub trace: Trace,
}

impl Segmentation {
    /// Build from boundary indices; they are sorted, deduplicated and clipped to `(0, unit_count)`
    pub fn from_boundaries(unit_count: usize, mut boundaries: Vec<usize>, trace: Trace) -> Self {
        boundaries.sort_unstable();
        boundaries.dedup();
        boundaries.retain(|&b| b > 0 && b < unit_count);

        let mut segments = Vec::with_capacity(boundaries.len() + 1);
        if unit_count > 0 {
            let mut start = 0;
            for &b in &boundaries {
                segments.push(Segment::new(start, b));
                start = b;
            }
            segments.push(Segment::new(start, unit_count));
        }

        Self {
            unit_count,
            boundaries,
            segments,
            trace,
        }
    }

    /// One segment spanning the whole document
    pub fn whole(unit_count: usize) -> Self {
        Self::from_boundaries(unit_count, Vec::new(), Trace::Trivial)
    }

    /// Number of segments
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether there are no segments (empty document)
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Index of the segment containing `unit`
    pub fn segment_of(&self, unit: usize) -> Option<usize> {
        if unit >= self.unit_count {
            return None;
        }
        Some(self.boundaries.partition_point(|&b| b <= unit))
    }

    /// Whether the segments exactly partition `[0, unit_count)`
    pub fn is_partition(&self) -> bool {
        let mut expected = 0;
        for segment in &self.segments {
            if segment.start != expected || segment.is_empty() {
                return false;
            }
            expected = segment.end;
        }
        expected == self.unit_count
    }
}
