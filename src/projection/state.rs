//! Working state for a wealth projection run

use crate::snapshot::ClientSnapshot;

/// Mutable balances threaded through the projection loop. Never exposed to
/// callers; each simulated age is copied out into an immutable series row.
#[derive(Debug, Clone)]
pub struct WealthState {
    /// Age the state currently represents
    pub age: u8,

    /// Cash savings balance
    pub cash: f64,

    /// Invested balance
    pub investments: f64,

    /// Retirement-account segment balances, in account declaration order
    pub retirement: Vec<f64>,
}

impl WealthState {
    /// Initialize state from a snapshot at projection start.
    pub fn from_snapshot(snapshot: &ClientSnapshot, current_age: u8) -> Self {
        Self {
            age: current_age,
            cash: snapshot.cash_balance,
            investments: snapshot.investment_balance,
            retirement: snapshot
                .retirement_account
                .segments
                .iter()
                .map(|s| s.balance)
                .collect(),
        }
    }

    /// Sum of retirement segment balances.
    pub fn retirement_total(&self) -> f64 {
        self.retirement.iter().sum()
    }

    /// Total net worth: the literal sum of every sub-balance.
    pub fn total(&self) -> f64 {
        self.cash + self.investments + self.retirement_total()
    }
}
