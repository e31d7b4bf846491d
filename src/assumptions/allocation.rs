//! Contribution allocation model for segmented retirement accounts
//!
//! Allocation is a pure function of (income, age) -> per-segment annual
//! contribution, supplied by the caller. Nothing here is hard-coded into the
//! accrual engine; swap the whole model to represent a different statutory
//! scheme or a voluntary top-up plan.

use serde::{Deserialize, Serialize};

/// One age band of income-fraction allocation rates.
///
/// `segment_rates[i]` is the fraction of capped monthly income flowing into
/// segment `i` each month while the member's age falls in `[min_age, max_age]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationBand {
    pub min_age: u8,
    /// Inclusive upper bound
    pub max_age: u8,
    pub segment_rates: Vec<f64>,
}

/// How contributions into a segmented account are derived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ContributionAllocation {
    /// Fraction of (capped) monthly income per segment, banded by age.
    /// Ages outside every band contribute nothing.
    IncomeFraction {
        /// Monthly income above this amount attracts no contribution
        monthly_income_cap: f64,
        bands: Vec<AllocationBand>,
    },

    /// Fixed monthly dollar amount per segment, independent of income and age.
    FixedMonthly { amounts: Vec<f64> },
}

impl ContributionAllocation {
    /// Baseline statutory-style allocation: total contribution tapering with
    /// age, split across (ordinary, special, health) segments, subject to a
    /// monthly wage ceiling. Every number here is overridable via the CSV
    /// loader or by constructing the variant directly.
    pub fn default_statutory() -> Self {
        Self::IncomeFraction {
            monthly_income_cap: 7400.0,
            bands: vec![
                AllocationBand { min_age: 0, max_age: 35, segment_rates: vec![0.23, 0.06, 0.08] },
                AllocationBand { min_age: 36, max_age: 45, segment_rates: vec![0.21, 0.07, 0.09] },
                AllocationBand { min_age: 46, max_age: 55, segment_rates: vec![0.15, 0.115, 0.105] },
                AllocationBand { min_age: 56, max_age: 60, segment_rates: vec![0.12, 0.095, 0.08] },
                AllocationBand { min_age: 61, max_age: 65, segment_rates: vec![0.035, 0.085, 0.065] },
            ],
        }
    }

    /// Annual contribution for each of `n_segments` segments at the given age.
    ///
    /// Missing bands or short rate vectors yield 0 for the affected segments;
    /// the result always has exactly `n_segments` entries.
    pub fn annual_contributions(&self, monthly_income: f64, age: u8, n_segments: usize) -> Vec<f64> {
        let mut out = vec![0.0; n_segments];

        match self {
            Self::IncomeFraction { monthly_income_cap, bands } => {
                let capped = monthly_income.max(0.0).min(*monthly_income_cap);
                if let Some(band) = bands.iter().find(|b| age >= b.min_age && age <= b.max_age) {
                    for (i, slot) in out.iter_mut().enumerate() {
                        let rate = band.segment_rates.get(i).copied().unwrap_or(0.0);
                        *slot = capped * rate * 12.0;
                    }
                }
            }
            Self::FixedMonthly { amounts } => {
                for (i, slot) in out.iter_mut().enumerate() {
                    *slot = amounts.get(i).copied().unwrap_or(0.0) * 12.0;
                }
            }
        }

        out
    }
}
