//! Segmented retirement-account accrual model
//!
//! Yearly state machine: each simulated year grows every sub-account by its
//! own rate, then credits the allocation-derived contribution into segments
//! that are still inflow-eligible. The full per-age series is exposed because
//! consumers plot trajectories, not just endpoints.

use serde::{Deserialize, Serialize};

use crate::assumptions::ContributionAllocation;
use crate::snapshot::{AccountSegment, SegmentedAccount};
use crate::timeline::MAX_PROJECTION_AGE;

/// Balances of every segment at one simulated age.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccrualPoint {
    pub age: u8,
    /// One balance per segment, same order as the account definition
    pub balances: Vec<f64>,
    pub total: f64,
}

impl AccrualPoint {
    fn new(age: u8, balances: Vec<f64>) -> Self {
        let total = balances.iter().sum();
        Self { age, balances, total }
    }
}

/// Accrual simulator over a segmented account.
pub struct AccrualModel<'a> {
    allocation: &'a ContributionAllocation,
}

impl<'a> AccrualModel<'a> {
    pub fn new(allocation: &'a ContributionAllocation) -> Self {
        Self { allocation }
    }

    /// Advance balances by one simulated year lived at `age`.
    ///
    /// Growth applies first, then the year's contribution; a segment whose
    /// cutoff age has been reached receives no new inflow but keeps growing.
    pub fn step(
        &self,
        segments: &[AccountSegment],
        balances: &mut [f64],
        monthly_income: f64,
        age: u8,
    ) {
        let contributions =
            self.allocation
                .annual_contributions(monthly_income, age, segments.len());

        for (i, segment) in segments.iter().enumerate() {
            balances[i] *= 1.0 + segment.annual_rate;

            let past_cutoff = segment
                .contribution_cutoff_age
                .is_some_and(|cutoff| age >= cutoff);
            if !past_cutoff {
                balances[i] += contributions[i];
            }
        }
    }

    /// Project the account from `current_age` to `horizon_age` inclusive.
    ///
    /// The first point is the input balances unchanged; `current_age >=
    /// horizon_age` yields exactly that single point. The horizon is clamped
    /// to [`MAX_PROJECTION_AGE`].
    pub fn project(
        &self,
        account: &SegmentedAccount,
        monthly_income: f64,
        current_age: u8,
        horizon_age: u8,
    ) -> Vec<AccrualPoint> {
        let horizon = horizon_age.min(MAX_PROJECTION_AGE);
        let mut balances: Vec<f64> = account.segments.iter().map(|s| s.balance).collect();

        let mut series = Vec::with_capacity(horizon.saturating_sub(current_age) as usize + 1);
        series.push(AccrualPoint::new(current_age, balances.clone()));

        for age in current_age..horizon {
            self.step(&account.segments, &mut balances, monthly_income, age);
            series.push(AccrualPoint::new(age + 1, balances.clone()));
        }

        series
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::growth::{future_value, future_value_annuity};
    use approx::assert_relative_eq;

    fn single_segment_account(balance: f64, rate: f64, cutoff: Option<u8>) -> SegmentedAccount {
        SegmentedAccount {
            segments: vec![AccountSegment {
                name: "ordinary".into(),
                balance,
                annual_rate: rate,
                contribution_cutoff_age: cutoff,
            }],
        }
    }

    #[test]
    fn test_zero_horizon_is_single_unchanged_point() {
        let allocation = ContributionAllocation::FixedMonthly { amounts: vec![500.0] };
        let model = AccrualModel::new(&allocation);
        let account = single_segment_account(50_000.0, 0.025, None);

        let series = model.project(&account, 5000.0, 40, 40);
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].age, 40);
        assert_eq!(series[0].balances, vec![50_000.0]);

        // Inverted range degrades the same way
        let inverted = model.project(&account, 5000.0, 70, 65);
        assert_eq!(inverted.len(), 1);
        assert_eq!(inverted[0].total, 50_000.0);
    }

    #[test]
    fn test_growth_then_contribution_ordering() {
        let allocation = ContributionAllocation::FixedMonthly { amounts: vec![100.0] };
        let model = AccrualModel::new(&allocation);
        let account = single_segment_account(1000.0, 0.10, None);

        let series = model.project(&account, 0.0, 30, 31);
        // 1000 * 1.10 + 1200, not (1000 + 1200) * 1.10
        assert_relative_eq!(series[1].balances[0], 2300.0);
    }

    #[test]
    fn test_cutoff_stops_inflows_but_not_growth() {
        let allocation = ContributionAllocation::FixedMonthly { amounts: vec![500.0] };
        let model = AccrualModel::new(&allocation);
        let account = single_segment_account(10_000.0, 0.03, Some(55));

        let series = model.project(&account, 0.0, 54, 56);
        // Year lived at 54: growth + contribution. Year lived at 55: growth only.
        let at_55 = 10_000.0 * 1.03 + 6000.0;
        let at_56 = at_55 * 1.03;
        assert_relative_eq!(series[1].balances[0], at_55, max_relative = 1e-12);
        assert_relative_eq!(series[2].balances[0], at_56, max_relative = 1e-12);
    }

    #[test]
    fn test_thirty_five_year_run_matches_closed_form() {
        // $50k at 2.5%/yr with $500/month eligible to age 55 only, projected
        // from 30 to 65: contributions accrue for 25 years, then the balance
        // compounds alone for the last 10.
        let allocation = ContributionAllocation::FixedMonthly { amounts: vec![500.0] };
        let model = AccrualModel::new(&allocation);
        let account = single_segment_account(50_000.0, 0.025, Some(55));

        let series = model.project(&account, 0.0, 30, 65);
        assert_eq!(series.len(), 36);
        assert_eq!(series.last().unwrap().age, 65);

        let contributions_at_55 = future_value_annuity(6000.0, 0.025, 25);
        let expected = future_value(50_000.0, 0.025, 35)
            + future_value(contributions_at_55, 0.025, 10);
        assert_relative_eq!(
            series.last().unwrap().balances[0],
            expected,
            max_relative = 1e-6
        );
    }

    #[test]
    fn test_horizon_clamped_to_maximum_age() {
        let allocation = ContributionAllocation::FixedMonthly { amounts: vec![0.0] };
        let model = AccrualModel::new(&allocation);
        let account = single_segment_account(1000.0, 0.0, None);

        let series = model.project(&account, 0.0, 118, u8::MAX);
        assert_eq!(series.last().unwrap().age, MAX_PROJECTION_AGE);
    }

    #[test]
    fn test_segments_grow_independently() {
        let allocation = ContributionAllocation::FixedMonthly { amounts: vec![0.0, 0.0] };
        let model = AccrualModel::new(&allocation);
        let account = SegmentedAccount {
            segments: vec![
                AccountSegment {
                    name: "ordinary".into(),
                    balance: 1000.0,
                    annual_rate: 0.025,
                    contribution_cutoff_age: None,
                },
                AccountSegment {
                    name: "special".into(),
                    balance: 1000.0,
                    annual_rate: 0.04,
                    contribution_cutoff_age: None,
                },
            ],
        };

        let series = model.project(&account, 0.0, 40, 41);
        assert_relative_eq!(series[1].balances[0], 1025.0);
        assert_relative_eq!(series[1].balances[1], 1040.0);
    }
}
