//! Pure statistics over sample slices.
//!
//! All functions here are pure and testable without any I/O or images.
//! Every spread measure is the *population* form (divide by `n`, not `n - 1`).

/// Arithmetic mean. Returns `0.0` for an empty slice.
///
/// # Examples
/// ```
/// # use image_advisor::imaging::calculations::mean;
/// assert_eq!(mean(&[0.0, 255.0]), 127.5);
/// assert_eq!(mean(&[]), 0.0);
/// ```
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population variance (two-pass). Returns `0.0` for an empty slice.
pub fn variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mu = mean(values);
    values.iter().map(|&v| (v - mu).powi(2)).sum::<f64>() / values.len() as f64
}

/// Population standard deviation.
///
/// # Examples
/// ```
/// # use image_advisor::imaging::calculations::std_dev;
/// assert_eq!(std_dev(&[90.0, 170.0]), 40.0);
/// ```
pub fn std_dev(values: &[f64]) -> f64 {
    variance(values).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // mean tests
    // =========================================================================

    #[test]
    fn mean_of_constant_is_exact() {
        let values = vec![128.0; 10_000];
        assert_eq!(mean(&values), 128.0);
    }

    #[test]
    fn mean_of_mixed_values() {
        assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0]), 2.5);
    }

    #[test]
    fn mean_empty_is_zero() {
        assert_eq!(mean(&[]), 0.0);
    }

    // =========================================================================
    // variance / std_dev tests
    // =========================================================================

    #[test]
    fn variance_of_constant_is_zero() {
        assert_eq!(variance(&[42.0; 17]), 0.0);
        assert_eq!(std_dev(&[42.0; 17]), 0.0);
    }

    #[test]
    fn variance_is_population_form() {
        // Sample variance would be 32/7; population is 32/8 = 4
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_eq!(variance(&values), 4.0);
        assert_eq!(std_dev(&values), 2.0);
    }

    #[test]
    fn variance_handles_negative_samples() {
        assert_eq!(variance(&[-36.0, 18.0, 18.0, 18.0, 18.0, 0.0, 0.0, 0.0, 0.0]), 272.0);
    }

    #[test]
    fn variance_empty_is_zero() {
        assert_eq!(variance(&[]), 0.0);
    }
}
