//! Decides whether a measurement uncertainty is large enough to surface.

/// Relative uncertainty at or above which a value is flagged.
pub const DEFAULT_RELATIVE_THRESHOLD: f64 = 1e-3;

/// [`is_significant_uncertainty_with_threshold`] at [`DEFAULT_RELATIVE_THRESHOLD`].
pub fn is_significant_uncertainty(value: f64, sigma: Option<f64>) -> bool {
    is_significant_uncertainty_with_threshold(value, sigma, DEFAULT_RELATIVE_THRESHOLD)
}

/// True when `|sigma / value| >= relative_threshold`.
///
/// A missing or zero sigma is never significant. A zero value with a
/// non-zero sigma always is.
pub fn is_significant_uncertainty_with_threshold(
    value: f64,
    sigma: Option<f64>,
    relative_threshold: f64,
) -> bool {
    let sigma = match sigma {
        Some(s) if s != 0.0 => s,
        _ => return false,
    };
    if value == 0.0 {
        return true;
    }
    (sigma / value).abs() >= relative_threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_or_zero_sigma_is_never_significant() {
        assert!(!is_significant_uncertainty(220.0, None));
        assert!(!is_significant_uncertainty(220.0, Some(0.0)));
        assert!(!is_significant_uncertainty(0.0, None));
        assert!(!is_significant_uncertainty(0.0, Some(-0.0)));
    }

    #[test]
    fn zero_value_with_sigma_is_significant() {
        assert!(is_significant_uncertainty(0.0, Some(1e-12)));
        assert!(is_significant_uncertainty_with_threshold(0.0, Some(1.0), 1e9));
    }

    #[test]
    fn threshold_boundary_is_inclusive() {
        assert!(is_significant_uncertainty_with_threshold(100.0, Some(25.0), 0.25));
        assert!(!is_significant_uncertainty_with_threshold(100.0, Some(24.999), 0.25));
        assert!(is_significant_uncertainty_with_threshold(8.0, Some(1.0), 0.125));
    }

    #[test]
    fn sign_is_ignored() {
        assert!(is_significant_uncertainty(-220.0, Some(15.0)));
        assert!(is_significant_uncertainty(220.0, Some(-15.0)));
        assert!(!is_significant_uncertainty(-1000.0, Some(-0.5)));
    }

    #[test]
    fn reference_frame_uncertainties() {
        assert!(is_significant_uncertainty(220.0, Some(15.0)));
        // 0.11 / 369.82 ≈ 3e-4
        assert!(!is_significant_uncertainty(369.82, Some(0.11)));
        assert!(is_significant_uncertainty(620.0, Some(15.0)));
    }
}
