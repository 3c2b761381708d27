//! Shared test utilities for band-ta tests.

use band_ta::indicators::Bound;

/// Approximate equality check for floating-point values.
///
/// Two NaN values are considered equal for testing purposes.
#[allow(dead_code)]
pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    if a.is_nan() && b.is_nan() {
        return true;
    }
    if a.is_nan() || b.is_nan() {
        return false;
    }
    (a - b).abs() < eps
}

/// Standard epsilon for high-precision comparisons.
#[allow(dead_code)]
pub const EPSILON: f64 = 1e-10;

/// A deterministic, positive price series with a gentle trend and oscillation.
#[allow(dead_code)]
pub fn sample_prices(len: usize) -> Vec<f64> {
    (0..len)
        .map(|i| {
            let t = i as f64;
            100.0 + t * 0.05 + (t * 0.4).sin() * 3.0 + (t * 1.7).cos()
        })
        .collect()
}

/// Count the leading empty bounds of a band.
#[allow(dead_code)]
pub fn count_empty_prefix(band: &[Bound<f64>]) -> usize {
    band.iter().take_while(|b| b.is_empty()).count()
}

/// Verify two bounds agree component-wise within `eps`.
#[allow(dead_code)]
pub fn bounds_close(a: &Bound<f64>, b: &Bound<f64>, eps: f64) -> bool {
    approx_eq(a.lower, b.lower, eps)
        && approx_eq(a.midpoint, b.midpoint, eps)
        && approx_eq(a.upper, b.upper, eps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approx_eq_basic() {
        assert!(approx_eq(1.0, 1.0, EPSILON));
        assert!(approx_eq(1.0, 1.0 + 1e-11, EPSILON));
        assert!(!approx_eq(1.0, 2.0, EPSILON));
    }

    #[test]
    fn test_sample_prices_positive() {
        assert!(sample_prices(500).iter().all(|&p| p > 0.0));
    }
}
