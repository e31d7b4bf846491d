//! Insurance coverage gap evaluation
//!
//! Aggregates each coverage category across the policy ledger and compares it
//! against formulaic required thresholds. The gap is kept signed internally
//! (negative = surplus); reporting floors it via [`CategoryAssessment::shortfall`].

use serde::{Deserialize, Serialize};

use crate::assumptions::ProtectionAssumptions;
use crate::snapshot::InsurancePolicy;

/// Assessment of one coverage category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryAssessment {
    /// Aggregated coverage across all policies
    pub current: f64,

    /// Required coverage: 12 x monthly income x replacement years
    pub required: f64,

    pub is_met: bool,

    /// `required - current`, signed; negative means surplus
    pub gap: f64,
}

impl CategoryAssessment {
    fn assess(current: f64, required: f64) -> Self {
        Self {
            current,
            required,
            is_met: current >= required,
            gap: required - current,
        }
    }

    /// Gap floored at zero, for display.
    pub fn shortfall(&self) -> f64 {
        self.gap.max(0.0)
    }
}

/// Complete coverage review across the four protection categories.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoverageReport {
    pub death: CategoryAssessment,
    pub disability: CategoryAssessment,
    pub ci_early: CategoryAssessment,
    pub ci_late: CategoryAssessment,

    /// Total annual premiums paid from cash
    pub annual_premiums_cash: f64,

    /// Total annual premiums funded from retirement savings
    pub annual_premiums_retirement: f64,
}

impl CoverageReport {
    /// True when every category meets its required threshold.
    pub fn fully_covered(&self) -> bool {
        self.death.is_met && self.disability.is_met && self.ci_early.is_met && self.ci_late.is_met
    }
}

/// Evaluate the ledger against required thresholds. Each policy contributes
/// to each category exactly once; aggregation is a plain sum.
pub fn evaluate_coverage(
    policies: &[InsurancePolicy],
    monthly_income: f64,
    protection: &ProtectionAssumptions,
) -> CoverageReport {
    let annual_income = 12.0 * monthly_income;

    let death: f64 = policies.iter().map(|p| p.coverage.death).sum();
    let disability: f64 = policies.iter().map(|p| p.coverage.disability).sum();
    let ci_early: f64 = policies.iter().map(|p| p.coverage.ci_early).sum();
    let ci_late: f64 = policies.iter().map(|p| p.coverage.ci_late).sum();

    CoverageReport {
        death: CategoryAssessment::assess(death, annual_income * protection.death_replacement_years),
        disability: CategoryAssessment::assess(
            disability,
            annual_income * protection.disability_replacement_years,
        ),
        ci_early: CategoryAssessment::assess(
            ci_early,
            annual_income * protection.ci_early_replacement_years,
        ),
        ci_late: CategoryAssessment::assess(
            ci_late,
            annual_income * protection.ci_late_replacement_years,
        ),
        annual_premiums_cash: policies.iter().map(|p| p.annual_premium_cash).sum(),
        annual_premiums_retirement: policies.iter().map(|p| p.annual_premium_retirement).sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::CoverageAmounts;
    use approx::assert_relative_eq;

    fn policy(death: f64, disability: f64, ci_early: f64, ci_late: f64) -> InsurancePolicy {
        InsurancePolicy {
            name: "term".into(),
            coverage: CoverageAmounts { death, disability, ci_early, ci_late },
            annual_premium_cash: 1200.0,
            annual_premium_retirement: 600.0,
        }
    }

    #[test]
    fn test_empty_ledger_gap_equals_required() {
        let report = evaluate_coverage(&[], 5000.0, &ProtectionAssumptions::default());

        // 12 * 5000 * 10 years of replacement
        assert_relative_eq!(report.death.required, 600_000.0);
        assert_eq!(report.death.current, 0.0);
        assert!(!report.death.is_met);
        assert_relative_eq!(report.death.gap, report.death.required);
        assert!(!report.fully_covered());
    }

    #[test]
    fn test_aggregation_sums_across_policies() {
        let ledger = vec![
            policy(300_000.0, 200_000.0, 50_000.0, 100_000.0),
            policy(400_000.0, 100_000.0, 25_000.0, 50_000.0),
        ];
        let report = evaluate_coverage(&ledger, 5000.0, &ProtectionAssumptions::default());

        assert_relative_eq!(report.death.current, 700_000.0);
        assert_relative_eq!(report.disability.current, 300_000.0);
        assert_relative_eq!(report.annual_premiums_cash, 2400.0);
        assert_relative_eq!(report.annual_premiums_retirement, 1200.0);
    }

    #[test]
    fn test_surplus_keeps_negative_gap_internally() {
        let ledger = vec![policy(1_000_000.0, 0.0, 0.0, 0.0)];
        let report = evaluate_coverage(&ledger, 5000.0, &ProtectionAssumptions::default());

        assert!(report.death.is_met);
        assert_relative_eq!(report.death.gap, -400_000.0);
        assert_eq!(report.death.shortfall(), 0.0);
    }

    #[test]
    fn test_thresholds_follow_assumptions_not_constants() {
        let custom = ProtectionAssumptions {
            death_replacement_years: 5.0,
            ..ProtectionAssumptions::default()
        };
        let report = evaluate_coverage(&[], 4000.0, &custom);
        assert_relative_eq!(report.death.required, 12.0 * 4000.0 * 5.0);
    }

    #[test]
    fn test_exact_coverage_is_met() {
        let required = 12.0 * 5000.0 * 10.0;
        let ledger = vec![policy(required, 0.0, 0.0, 0.0)];
        let report = evaluate_coverage(&ledger, 5000.0, &ProtectionAssumptions::default());
        assert!(report.death.is_met);
        assert_eq!(report.death.gap, 0.0);
    }
}
