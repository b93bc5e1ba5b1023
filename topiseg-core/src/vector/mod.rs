//! Term-frequency and term-weight vectors

pub mod term;
pub mod weight;

pub use term::TermVector;
pub use weight::{TermWeight, WeightVector};

/// Cosine similarity between two term vectors.
///
/// The dot product walks the smaller vector's terms. With `weights`, every
/// cross and squared term is scaled by the square of the term's inverse
/// frequency. Zero-magnitude vectors yield 0, and the result is clamped to
/// `[0, 1]`.
pub fn cosine(a: &TermVector, b: &TermVector, weights: Option<&WeightVector>) -> f64 {
    let factor = |term: &str| match weights {
        Some(w) => {
            let iw = w.inverse_weight(term);
            iw * iw
        }
        None => 1.0,
    };

    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    let mut dot = 0.0;
    for (term, count) in small.iter() {
        let other = large.frequency(term);
        if other > 0 {
            dot += (count * other) as f64 * factor(term);
        }
    }
    if dot == 0.0 {
        return 0.0;
    }

    let squares = |v: &TermVector| -> f64 {
        v.iter()
            .map(|(term, count)| (count * count) as f64 * factor(term))
            .sum()
    };
    let sf_a = squares(a);
    let sf_b = squares(b);
    if sf_a == 0.0 || sf_b == 0.0 {
        return 0.0;
    }

    (dot / (sf_a * sf_b).sqrt()).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vector(pairs: &[(&str, usize)]) -> TermVector {
        let mut v = TermVector::new();
        for &(term, count) in pairs {
            v.increment(term, count);
        }
        v
    }

    #[test]
    fn test_cosine_worked_example() {
        let a = vector(&[("cat", 2), ("dog", 1)]);
        let b = vector(&[("cat", 1), ("dog", 2)]);
        assert!((cosine(&a, &b, None) - 0.8).abs() < 1e-12);
        assert_eq!(cosine(&a, &b, None), cosine(&b, &a, None));
    }

    #[test]
    fn test_cosine_disjoint_is_exactly_zero() {
        let a = vector(&[("cat", 1)]);
        let b = vector(&[("rocket", 3)]);
        let sim = cosine(&a, &b, None);
        assert_eq!(sim, 0.0);
        assert!(!sim.is_nan());
    }

    #[test]
    fn test_cosine_empty_vectors() {
        let empty = TermVector::new();
        let a = vector(&[("cat", 1)]);
        assert_eq!(cosine(&empty, &a, None), 0.0);
        assert_eq!(cosine(&empty, &empty, None), 0.0);
    }

    #[test]
    fn test_cosine_self_is_one() {
        let a = vector(&[("cat", 3), ("dog", 1), ("eel", 7)]);
        assert!((cosine(&a, &a, None) - 1.0).abs() < 1e-12);
        assert!(cosine(&a, &a, None) <= 1.0);
    }

    #[test]
    fn test_weighted_cosine_discounts_common_terms() {
        let mut global = TermVector::new();
        global.increment("common", 10);
        global.increment("rare", 1);
        global.increment("other", 1);
        let weights = WeightVector::from_term_vector(&global);

        let a = vector(&[("common", 1), ("rare", 1)]);
        let b = vector(&[("common", 1), ("other", 1)]);

        let plain = cosine(&a, &b, None);
        let weighted = cosine(&a, &b, Some(&weights));
        assert!((plain - 0.5).abs() < 1e-12);
        assert!(weighted < plain);
    }

    #[test]
    fn test_weighted_cosine_unseen_terms_contribute_nothing() {
        let weights = WeightVector::from_term_vector(&TermVector::new());
        let a = vector(&[("cat", 1)]);
        assert_eq!(cosine(&a, &a, Some(&weights)), 0.0);
    }
}
