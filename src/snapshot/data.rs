//! Normalized client snapshot data model
//!
//! Everything here is a plain value object assembled fresh per review. The
//! engine never retains or persists any of it; the persistence layer hands a
//! raw snapshot over, normalization happens once (see [`super::raw`]), and
//! every calculation downstream assumes fully typed input.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::timeline::AgeAnchor;

/// Gender of a client or child, used only for age-gated assumptions
/// (university start ages).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

/// Core profile for the person under review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientProfile {
    pub name: String,

    pub gender: Option<Gender>,

    /// Missing birth date makes every age-dependent calculation report
    /// "unavailable" instead of guessing.
    pub birth_date: Option<NaiveDate>,

    /// Monthly take-home income
    pub monthly_income: f64,

    /// Monthly cash savings while working
    pub monthly_savings: f64,

    /// Monthly investment contribution while working
    pub monthly_investment: f64,

    /// Current monthly living expenses (today's dollars)
    pub monthly_expenses: f64,

    /// Age at which active income and inflows stop
    pub retirement_age: u8,

    /// Projection horizon for retirement adequacy
    pub life_expectancy: u8,
}

impl ClientProfile {
    /// Age anchor at the review date; `None` when the birth date is absent.
    pub fn age_at(&self, as_of: NaiveDate) -> Option<AgeAnchor> {
        self.birth_date.and_then(|birth| AgeAnchor::at(birth, as_of))
    }
}

/// One sub-account of a segmented retirement account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountSegment {
    pub name: String,

    /// Current balance
    pub balance: f64,

    /// This segment's own annual growth rate
    pub annual_rate: f64,

    /// Age from which this segment stops receiving new inflows. `None` means
    /// contributions continue as long as the allocation model supplies them.
    pub contribution_cutoff_age: Option<u8>,
}

/// A retirement account composed of independently growing sub-accounts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentedAccount {
    pub segments: Vec<AccountSegment>,
}

impl SegmentedAccount {
    /// Sum of all segment balances.
    pub fn total(&self) -> f64 {
        self.segments.iter().map(|s| s.balance).sum()
    }
}

/// Recurring contribution frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Frequency {
    Monthly,
    Quarterly,
    HalfYearly,
    Yearly,
    LumpSum,
}

impl Frequency {
    /// Number of contributions made over `elapsed_months` completed months,
    /// counting the contribution in the inception month itself.
    pub fn periods_elapsed(&self, elapsed_months: u32) -> u32 {
        match self {
            Frequency::Monthly => elapsed_months + 1,
            Frequency::Quarterly => elapsed_months / 3 + 1,
            Frequency::HalfYearly => elapsed_months / 6 + 1,
            Frequency::Yearly => elapsed_months / 12 + 1,
            Frequency::LumpSum => 1,
        }
    }
}

/// A recurring contribution into an investment holding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContributionSchedule {
    /// Amount per contribution
    pub amount: f64,

    pub frequency: Frequency,

    /// Date of the first contribution; `None` means the schedule cannot be
    /// used to derive cost basis.
    pub inception: Option<NaiveDate>,
}

/// An investment holding under review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentHolding {
    pub name: String,

    /// Current market value
    pub current_value: f64,

    pub schedule: ContributionSchedule,

    /// Manually entered total-invested figure. When present and positive it
    /// strictly supersedes the schedule-derived cost basis everywhere.
    pub cost_basis_override: Option<f64>,
}

/// Named coverage amounts carried by a policy (or compared across plans).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CoverageAmounts {
    pub death: f64,
    pub disability: f64,
    pub ci_early: f64,
    pub ci_late: f64,
}

/// One in-force insurance policy in the client's ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsurancePolicy {
    pub name: String,

    pub coverage: CoverageAmounts,

    /// Annual premium paid from cash
    pub annual_premium_cash: f64,

    /// Annual premium funded from retirement-account savings
    pub annual_premium_retirement: f64,
}

/// A dependent child, carried for education goal projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Child {
    pub name: String,

    pub gender: Gender,

    /// Missing birth date makes the education projection unavailable.
    pub birth_date: Option<NaiveDate>,

    /// Total education cost in today's dollars
    pub education_cost_today: f64,
}

/// Complete client snapshot consumed by the review calculations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientSnapshot {
    pub profile: ClientProfile,

    /// Segmented retirement account (statutory scheme or similar)
    pub retirement_account: SegmentedAccount,

    /// Cash savings balance
    pub cash_balance: f64,

    /// Aggregate invested balance used by the wealth projection
    pub investment_balance: f64,

    /// Individual holdings, reconciled one by one for performance reporting
    pub holdings: Vec<InvestmentHolding>,

    /// In-force insurance policies
    pub policies: Vec<InsurancePolicy>,

    pub children: Vec<Child>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_periods_elapsed_counts_inception_month() {
        assert_eq!(Frequency::Monthly.periods_elapsed(0), 1);
        assert_eq!(Frequency::Monthly.periods_elapsed(11), 12);
        assert_eq!(Frequency::Quarterly.periods_elapsed(7), 3);
        assert_eq!(Frequency::HalfYearly.periods_elapsed(11), 2);
        assert_eq!(Frequency::Yearly.periods_elapsed(35), 3);
        assert_eq!(Frequency::LumpSum.periods_elapsed(240), 1);
    }

    #[test]
    fn test_segmented_account_total() {
        let account = SegmentedAccount {
            segments: vec![
                AccountSegment {
                    name: "ordinary".into(),
                    balance: 30_000.0,
                    annual_rate: 0.025,
                    contribution_cutoff_age: None,
                },
                AccountSegment {
                    name: "special".into(),
                    balance: 20_000.0,
                    annual_rate: 0.04,
                    contribution_cutoff_age: Some(55),
                },
            ],
        };
        assert_eq!(account.total(), 50_000.0);
    }

    #[test]
    fn test_age_unavailable_without_birth_date() {
        let profile = ClientProfile {
            name: "test".into(),
            gender: None,
            birth_date: None,
            monthly_income: 5000.0,
            monthly_savings: 500.0,
            monthly_investment: 300.0,
            monthly_expenses: 2500.0,
            retirement_age: 65,
            life_expectancy: 90,
        };
        let as_of = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert!(profile.age_at(as_of).is_none());
    }
}
