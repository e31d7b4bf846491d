//! Policy replacement comparison
//!
//! Computes whether replacing an existing policy with a proposed one is
//! net-favorable. The headline net-savings figure combines two distinct
//! benefits (ongoing premium savings and the one-time surrender value), so
//! both stay separately addressable; coverage reductions are surfaced as
//! signed deltas, never hidden.

use serde::{Deserialize, Serialize};

use crate::snapshot::CoverageAmounts;

/// The policy currently in force.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExistingPlan {
    pub annual_premium: f64,

    /// Age at which premium payments end
    pub payment_term_age: u8,

    pub coverage: CoverageAmounts,

    /// Cash value released if the policy is surrendered
    pub surrender_value: f64,
}

/// The candidate replacement policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProposedPlan {
    pub annual_premium: f64,

    /// Age at which premium payments end
    pub payment_term_age: u8,

    pub coverage: CoverageAmounts,
}

/// Outcome of comparing an existing plan against a proposed replacement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplacementComparison {
    pub years_remaining_existing: f64,
    pub years_remaining_proposed: f64,

    pub total_cost_existing: f64,
    pub total_cost_proposed: f64,

    /// Ongoing benefit: existing cost minus proposed cost
    pub premium_savings: f64,

    /// One-time benefit: capital unlocked by surrendering
    pub surrender_value: f64,

    /// Headline figure: premium savings plus surrender value
    pub net_savings: f64,

    /// Years the surrender value alone funds the proposed premium
    /// (0 when the proposed premium is 0)
    pub premium_free_years: f64,

    /// Signed per-category change; negative entries are coverage reductions
    pub coverage_delta: CoverageAmounts,
}

impl ReplacementComparison {
    /// True when any coverage category would shrink under the proposal.
    pub fn reduces_coverage(&self) -> bool {
        let d = &self.coverage_delta;
        d.death < 0.0 || d.disability < 0.0 || d.ci_early < 0.0 || d.ci_late < 0.0
    }
}

/// Compare the pair at the client's current age.
pub fn compare_plans(
    existing: &ExistingPlan,
    proposed: &ProposedPlan,
    current_age: u8,
) -> ReplacementComparison {
    let years_remaining_existing = existing.payment_term_age.saturating_sub(current_age) as f64;
    let years_remaining_proposed = proposed.payment_term_age.saturating_sub(current_age) as f64;

    let total_cost_existing = existing.annual_premium * years_remaining_existing;
    let total_cost_proposed = proposed.annual_premium * years_remaining_proposed;

    let premium_savings = total_cost_existing - total_cost_proposed;

    let premium_free_years = if proposed.annual_premium > 0.0 {
        existing.surrender_value / proposed.annual_premium
    } else {
        0.0
    };

    ReplacementComparison {
        years_remaining_existing,
        years_remaining_proposed,
        total_cost_existing,
        total_cost_proposed,
        premium_savings,
        surrender_value: existing.surrender_value,
        net_savings: premium_savings + existing.surrender_value,
        premium_free_years,
        coverage_delta: CoverageAmounts {
            death: proposed.coverage.death - existing.coverage.death,
            disability: proposed.coverage.disability - existing.coverage.disability,
            ci_early: proposed.coverage.ci_early - existing.coverage.ci_early,
            ci_late: proposed.coverage.ci_late - existing.coverage.ci_late,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn existing() -> ExistingPlan {
        ExistingPlan {
            annual_premium: 3000.0,
            payment_term_age: 65,
            coverage: CoverageAmounts {
                death: 500_000.0,
                disability: 300_000.0,
                ci_early: 50_000.0,
                ci_late: 100_000.0,
            },
            surrender_value: 20_000.0,
        }
    }

    fn proposed() -> ProposedPlan {
        ProposedPlan {
            annual_premium: 2000.0,
            payment_term_age: 65,
            coverage: CoverageAmounts {
                death: 600_000.0,
                disability: 300_000.0,
                ci_early: 40_000.0,
                ci_late: 120_000.0,
            },
        }
    }

    #[test]
    fn test_cost_and_savings_components() {
        let comparison = compare_plans(&existing(), &proposed(), 45);

        assert_relative_eq!(comparison.years_remaining_existing, 20.0);
        assert_relative_eq!(comparison.total_cost_existing, 60_000.0);
        assert_relative_eq!(comparison.total_cost_proposed, 40_000.0);
        // Both components survive separately under the headline number
        assert_relative_eq!(comparison.premium_savings, 20_000.0);
        assert_relative_eq!(comparison.surrender_value, 20_000.0);
        assert_relative_eq!(comparison.net_savings, 40_000.0);
    }

    #[test]
    fn test_premium_free_years() {
        let comparison = compare_plans(&existing(), &proposed(), 45);
        assert_relative_eq!(comparison.premium_free_years, 10.0);
    }

    #[test]
    fn test_zero_proposed_premium_gives_zero_free_years() {
        let mut fully_paid = proposed();
        fully_paid.annual_premium = 0.0;
        let comparison = compare_plans(&existing(), &fully_paid, 45);

        assert_eq!(comparison.premium_free_years, 0.0);
        assert!(comparison.premium_free_years.is_finite());
    }

    #[test]
    fn test_past_term_age_clamps_to_zero_years() {
        let comparison = compare_plans(&existing(), &proposed(), 70);
        assert_eq!(comparison.years_remaining_existing, 0.0);
        assert_eq!(comparison.total_cost_existing, 0.0);
        // Only the surrender value remains on the table
        assert_relative_eq!(comparison.net_savings, 20_000.0);
    }

    #[test]
    fn test_coverage_reduction_is_surfaced() {
        let comparison = compare_plans(&existing(), &proposed(), 45);

        assert_relative_eq!(comparison.coverage_delta.death, 100_000.0);
        assert_relative_eq!(comparison.coverage_delta.ci_early, -10_000.0);
        assert!(comparison.reduces_coverage());
    }

    #[test]
    fn test_no_reduction_when_all_deltas_nonnegative() {
        let mut better = proposed();
        better.coverage.ci_early = 50_000.0;
        let comparison = compare_plans(&existing(), &better, 45);
        assert!(!comparison.reduces_coverage());
    }
}
