//! Small numeric helpers shared by both algorithms

/// Arithmetic mean; 0 for an empty slice
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation; 0 for an empty slice
pub fn std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    let variance = values.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Centered convolution with an odd-length kernel.
///
/// Kernel taps falling outside `values` are dropped and each output is
/// divided by the total weight of the taps that were used, so the ends of
/// the sequence keep the same scale as the middle.
pub fn convolve(values: &[f64], kernel: &[f64]) -> Vec<f64> {
    debug_assert!(kernel.len() % 2 == 1, "kernel length must be odd");
    let half = kernel.len() / 2;

    (0..values.len())
        .map(|i| {
            let mut acc = 0.0;
            let mut weight = 0.0;
            for (k, &tap) in kernel.iter().enumerate() {
                // Position i + k - half, skipped when out of range
                let Some(j) = (i + k).checked_sub(half) else {
                    continue;
                };
                if let Some(&v) = values.get(j) {
                    acc += tap * v;
                    weight += tap;
                }
            }
            if weight == 0.0 {
                0.0
            } else {
                acc / weight
            }
        })
        .collect()
}

/// Centered 3-point moving average; drops the first and last point
pub fn moving_average3(values: &[f64]) -> Vec<f64> {
    values
        .windows(3)
        .map(|w| (w[0] + w[1] + w[2]) / 3.0)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_and_std_dev() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!((mean(&values) - 5.0).abs() < 1e-12);
        assert!((std_dev(&values) - 2.0).abs() < 1e-12);
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(std_dev(&[]), 0.0);
    }

    #[test]
    fn test_convolve_constant_is_unchanged() {
        let kernel = [1.0, 2.0, 4.0, 8.0, 4.0, 2.0, 1.0];
        let values = [3.0; 5];
        for v in convolve(&values, &kernel) {
            assert!((v - 3.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_convolve_impulse() {
        let kernel = [1.0, 2.0, 1.0];
        let out = convolve(&[0.0, 4.0, 0.0], &kernel);
        assert!((out[0] - 4.0 / 3.0).abs() < 1e-12);
        assert!((out[1] - 2.0).abs() < 1e-12);
        assert!((out[2] - 4.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_moving_average3() {
        let out = moving_average3(&[0.0, 3.0, 6.0, 9.0]);
        assert_eq!(out, vec![3.0, 6.0]);
        assert!(moving_average3(&[1.0, 2.0]).is_empty());
    }
}
