//! Compounding primitives
//!
//! Closed-form future-value building blocks used by every higher-level
//! calculator. Both functions are total: zero rates and non-positive horizons
//! reduce to identity growth or an empty accumulation, never a panic or NaN.

/// Future value of a lump sum after `years` of annual compounding.
///
/// `years <= 0` returns the principal unchanged; a zero rate is identity
/// growth.
pub fn future_value(principal: f64, annual_rate: f64, years: i32) -> f64 {
    if years <= 0 {
        return principal;
    }
    principal * (1.0 + annual_rate).powi(years)
}

/// Future value of an ordinary annuity: `contribution` paid at the end of each
/// year for `years` years, compounding at `annual_rate`.
///
/// A zero rate falls back to `contribution * years` rather than dividing by
/// the rate. `years <= 0` yields 0. Monotonically non-decreasing in `years`
/// for contribution >= 0 and rate >= -1.
pub fn future_value_annuity(contribution: f64, annual_rate: f64, years: i32) -> f64 {
    if years <= 0 {
        return 0.0;
    }
    if annual_rate == 0.0 {
        return contribution * years as f64;
    }
    contribution * ((1.0 + annual_rate).powi(years) - 1.0) / annual_rate
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_future_value_grows() {
        assert_relative_eq!(future_value(1000.0, 0.05, 1), 1050.0);
        assert_relative_eq!(future_value(1000.0, 0.05, 10), 1000.0 * 1.05f64.powi(10));
    }

    #[test]
    fn test_future_value_never_below_principal_for_nonnegative_rate() {
        for years in 0..50 {
            for rate in [0.0, 0.01, 0.025, 0.08] {
                assert!(future_value(5000.0, rate, years) >= 5000.0);
            }
        }
    }

    #[test]
    fn test_future_value_zero_horizon_is_identity() {
        assert_eq!(future_value(1234.5, 0.07, 0), 1234.5);
        assert_eq!(future_value(1234.5, 0.07, -3), 1234.5);
    }

    #[test]
    fn test_annuity_zero_rate_is_exact_multiple() {
        for years in 0..40 {
            assert_eq!(
                future_value_annuity(6000.0, 0.0, years),
                6000.0 * years.max(0) as f64
            );
        }
    }

    #[test]
    fn test_annuity_matches_manual_accumulation() {
        // 3 end-of-year payments at 4%: c*(1.04^2 + 1.04 + 1)
        let expected = 1000.0 * (1.04f64.powi(2) + 1.04 + 1.0);
        assert_relative_eq!(future_value_annuity(1000.0, 0.04, 3), expected, max_relative = 1e-12);
    }

    #[test]
    fn test_annuity_monotonic_in_years() {
        let mut prev = 0.0;
        for years in 0..60 {
            let fv = future_value_annuity(500.0, 0.03, years);
            assert!(fv >= prev);
            prev = fv;
        }
    }
}
