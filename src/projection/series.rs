//! Per-age output rows for wealth projections

use serde::{Deserialize, Serialize};

/// One simulated age of a wealth projection.
///
/// `total_net_worth` is always the literal sum of the sub-balances; balances
/// never go negative — any unmet retirement expense is reported in
/// `shortfall` instead of being silently clipped away.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WealthRow {
    pub age: u8,

    pub cash: f64,

    pub investments: f64,

    /// Retirement segment balances, same order as the account definition
    pub retirement_balances: Vec<f64>,

    pub retirement_total: f64,

    pub total_net_worth: f64,

    /// Inflation-adjusted annual living expense at this age
    pub annual_expense: f64,

    /// Expense amount this year that no balance could cover (0 while funded)
    pub shortfall: f64,
}

/// Complete wealth projection for one client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WealthProjection {
    pub rows: Vec<WealthRow>,
}

impl WealthProjection {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    pub fn add_row(&mut self, row: WealthRow) {
        self.rows.push(row);
    }

    /// Summary statistics for headline reporting.
    pub fn summary(&self) -> WealthSummary {
        let final_net_worth = self.rows.last().map(|r| r.total_net_worth).unwrap_or(0.0);
        let peak_net_worth = self
            .rows
            .iter()
            .map(|r| r.total_net_worth)
            .fold(0.0_f64, f64::max);
        let first_shortfall_age = self
            .rows
            .iter()
            .find(|r| r.shortfall > 0.0)
            .map(|r| r.age);
        let total_shortfall = self.rows.iter().map(|r| r.shortfall).sum();

        WealthSummary {
            ages_simulated: self.rows.len() as u32,
            final_age: self.rows.last().map(|r| r.age).unwrap_or(0),
            final_net_worth,
            peak_net_worth,
            first_shortfall_age,
            total_shortfall,
        }
    }
}

impl Default for WealthProjection {
    fn default() -> Self {
        Self::new()
    }
}

/// Headline figures derived from a projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WealthSummary {
    pub ages_simulated: u32,
    pub final_age: u8,
    pub final_net_worth: f64,
    pub peak_net_worth: f64,
    /// First age at which expenses could not be met, if any
    pub first_shortfall_age: Option<u8>,
    pub total_shortfall: f64,
}
