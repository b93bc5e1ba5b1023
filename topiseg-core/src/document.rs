//! Tokenized documents

/// An ordered sequence of elementary units, each an ordered token sequence.
///
/// Units are usually sentences. The document is immutable once built; the
/// segmentation algorithms only ever read it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Document {
    units: Vec<Vec<String>>,
}

impl Document {
    /// Build a document from already tokenized units
    pub fn from_units<U, T>(units: impl IntoIterator<Item = U>) -> Self
    where
        U: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            units: units
                .into_iter()
                .map(|unit| unit.into_iter().map(Into::into).collect())
                .collect(),
        }
    }

    /// Number of elementary units
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Whether the document has no units at all
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// All units in document order
    pub fn units(&self) -> &[Vec<String>] {
        &self.units
    }

    /// Tokens of one unit
    pub fn unit(&self, index: usize) -> Option<&[String]> {
        self.units.get(index).map(Vec::as_slice)
    }

    /// Total number of tokens over all units
    pub fn token_count(&self) -> usize {
        self.units.iter().map(Vec::len).sum()
    }

    /// Flattened token stream in document order
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.units.iter().flatten().map(String::as_str)
    }

    /// Token offset at which each unit starts, followed by the total token count.
    ///
    /// The returned vector has `len() + 1` entries; entry `k` for `0 < k < len()`
    /// is the token position of the true boundary before unit `k`.
    pub fn unit_offsets(&self) -> Vec<usize> {
        let mut offsets = Vec::with_capacity(self.units.len() + 1);
        let mut position = 0;
        offsets.push(position);
        for unit in &self.units {
            position += unit.len();
            offsets.push(position);
        }
        offsets
    }
}
