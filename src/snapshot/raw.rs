//! Raw snapshot records and the single normalization boundary
//!
//! The persistence layer stores free-text fields (users type "$1,200" into
//! amount boxes, dates arrive as strings, anything can be blank). All of that
//! tolerance lives here: [`RawClientSnapshot::normalize`] coerces every field
//! exactly once, so no downstream calculation ever falls back to 0 at its own
//! use site.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::money::parse_optional_amount;

use super::data::{
    AccountSegment, Child, ClientProfile, ClientSnapshot, ContributionSchedule, CoverageAmounts,
    Frequency, Gender, InsurancePolicy, InvestmentHolding, SegmentedAccount,
};

fn parse_date(raw: &Option<String>) -> Option<NaiveDate> {
    raw.as_deref()
        .and_then(|s| NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok())
}

fn money(raw: &Option<String>) -> f64 {
    parse_optional_amount(raw.as_deref(), 0.0)
}

/// Raw profile record as stored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawProfile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub birth_date: Option<String>,
    #[serde(default)]
    pub monthly_income: Option<String>,
    #[serde(default)]
    pub monthly_savings: Option<String>,
    #[serde(default)]
    pub monthly_investment: Option<String>,
    #[serde(default)]
    pub monthly_expenses: Option<String>,
    #[serde(default)]
    pub retirement_age: Option<u8>,
    #[serde(default)]
    pub life_expectancy: Option<u8>,
}

/// Raw retirement-account segment record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawSegment {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub balance: Option<String>,
    #[serde(default)]
    pub annual_rate: Option<f64>,
    #[serde(default)]
    pub contribution_cutoff_age: Option<u8>,
}

/// Raw investment holding record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawHolding {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub current_value: Option<String>,
    #[serde(default)]
    pub contribution_amount: Option<String>,
    #[serde(default)]
    pub frequency: Option<Frequency>,
    #[serde(default)]
    pub inception: Option<String>,
    #[serde(default)]
    pub cost_basis_override: Option<String>,
}

/// Raw insurance policy record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawPolicy {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub death: Option<String>,
    #[serde(default)]
    pub disability: Option<String>,
    #[serde(default)]
    pub ci_early: Option<String>,
    #[serde(default)]
    pub ci_late: Option<String>,
    #[serde(default)]
    pub annual_premium_cash: Option<String>,
    #[serde(default)]
    pub annual_premium_retirement: Option<String>,
}

/// Raw child record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawChild {
    #[serde(default)]
    pub name: String,
    pub gender: Gender,
    #[serde(default)]
    pub birth_date: Option<String>,
    #[serde(default)]
    pub education_cost_today: Option<String>,
}

/// Complete raw snapshot, shaped the way the persistence layer supplies it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawClientSnapshot {
    pub profile: RawProfile,
    #[serde(default)]
    pub retirement_segments: Vec<RawSegment>,
    #[serde(default)]
    pub cash_balance: Option<String>,
    #[serde(default)]
    pub investment_balance: Option<String>,
    #[serde(default)]
    pub holdings: Vec<RawHolding>,
    #[serde(default)]
    pub policies: Vec<RawPolicy>,
    #[serde(default)]
    pub children: Vec<RawChild>,
}

impl RawClientSnapshot {
    /// Normalize every field in one pass: tolerant money parsing with a 0
    /// default, dates that fail to parse become `None` (unavailable, never a
    /// guess), and a cost-basis override only survives when positive.
    pub fn normalize(&self) -> ClientSnapshot {
        let profile = ClientProfile {
            name: self.profile.name.clone(),
            gender: self.profile.gender,
            birth_date: parse_date(&self.profile.birth_date),
            monthly_income: money(&self.profile.monthly_income),
            monthly_savings: money(&self.profile.monthly_savings),
            monthly_investment: money(&self.profile.monthly_investment),
            monthly_expenses: money(&self.profile.monthly_expenses),
            retirement_age: self.profile.retirement_age.unwrap_or(65),
            life_expectancy: self.profile.life_expectancy.unwrap_or(90),
        };

        let segments = self
            .retirement_segments
            .iter()
            .map(|raw| AccountSegment {
                name: raw.name.clone(),
                balance: money(&raw.balance),
                annual_rate: raw.annual_rate.unwrap_or(0.0),
                contribution_cutoff_age: raw.contribution_cutoff_age,
            })
            .collect();

        let holdings = self
            .holdings
            .iter()
            .map(|raw| {
                let override_amount = money(&raw.cost_basis_override);
                InvestmentHolding {
                    name: raw.name.clone(),
                    current_value: money(&raw.current_value),
                    schedule: ContributionSchedule {
                        amount: money(&raw.contribution_amount),
                        frequency: raw.frequency.unwrap_or(Frequency::Monthly),
                        inception: parse_date(&raw.inception),
                    },
                    cost_basis_override: (override_amount > 0.0).then_some(override_amount),
                }
            })
            .collect();

        let policies = self
            .policies
            .iter()
            .map(|raw| InsurancePolicy {
                name: raw.name.clone(),
                coverage: CoverageAmounts {
                    death: money(&raw.death),
                    disability: money(&raw.disability),
                    ci_early: money(&raw.ci_early),
                    ci_late: money(&raw.ci_late),
                },
                annual_premium_cash: money(&raw.annual_premium_cash),
                annual_premium_retirement: money(&raw.annual_premium_retirement),
            })
            .collect();

        let children = self
            .children
            .iter()
            .map(|raw| Child {
                name: raw.name.clone(),
                gender: raw.gender,
                birth_date: parse_date(&raw.birth_date),
                education_cost_today: money(&raw.education_cost_today),
            })
            .collect();

        ClientSnapshot {
            profile,
            retirement_account: SegmentedAccount { segments },
            cash_balance: money(&self.cash_balance),
            investment_balance: money(&self.investment_balance),
            holdings,
            policies,
            children,
        }
    }
}
