//! Cost-basis and performance reconciliation for investment holdings
//!
//! Total invested capital comes from the contribution schedule unless the
//! client supplied an explicit override, which strictly supersedes the
//! schedule for every downstream figure. All outputs are defined over the
//! whole input domain: zero invested capital yields 0% returns, never NaN.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::snapshot::InvestmentHolding;
use crate::timeline::{elapsed_whole_months, elapsed_years_fractional};

/// Where the invested-capital figure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BasisSource {
    /// Manually entered total, taking priority over the schedule
    Override,
    /// Derived from the contribution schedule and elapsed time
    Schedule,
}

/// Reconciled performance figures for one holding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceReport {
    pub invested: f64,
    pub current_value: f64,
    pub profit_loss: f64,
    /// Simple percent return on invested capital (0 when invested <= 0)
    pub profit_loss_pct: f64,
    /// Compound annual growth rate; simple return when held under a year
    pub annualized_return_pct: f64,
    pub basis_source: BasisSource,
}

/// Reconcile a holding as of the review date.
///
/// Returns `None` only when invested capital cannot be determined at all: no
/// positive override and no inception date to derive from. With an override
/// but no inception date the annualized figure falls back to the simple
/// return.
pub fn reconcile(holding: &InvestmentHolding, as_of: NaiveDate) -> Option<PerformanceReport> {
    let override_basis = holding.cost_basis_override.filter(|v| *v > 0.0);

    let (invested, basis_source) = match override_basis {
        Some(amount) => (amount, BasisSource::Override),
        None => {
            let inception = holding.schedule.inception?;
            let months = elapsed_whole_months(inception, as_of)?;
            let periods = holding.schedule.frequency.periods_elapsed(months);
            (periods as f64 * holding.schedule.amount, BasisSource::Schedule)
        }
    };

    let current = holding.current_value;
    let profit_loss = current - invested;
    let profit_loss_pct = if invested > 0.0 {
        profit_loss / invested * 100.0
    } else {
        0.0
    };

    let elapsed_years = holding
        .schedule
        .inception
        .and_then(|inception| elapsed_years_fractional(inception, as_of));
    let annualized_return_pct = annualized_return(invested, current, elapsed_years);

    Some(PerformanceReport {
        invested,
        current_value: current,
        profit_loss,
        profit_loss_pct,
        annualized_return_pct,
        basis_source,
    })
}

/// CAGR in percent, with the documented fallbacks: 0 when either side is
/// non-positive, simple return when the holding period is under a year or
/// unknown.
fn annualized_return(invested: f64, current: f64, elapsed_years: Option<f64>) -> f64 {
    if invested <= 0.0 || current <= 0.0 {
        return 0.0;
    }

    match elapsed_years {
        Some(years) if years >= 1.0 => ((current / invested).powf(1.0 / years) - 1.0) * 100.0,
        _ => (current - invested) / invested * 100.0,
    }
}
