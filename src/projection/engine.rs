//! Comprehensive wealth projector
//!
//! Drives a single age-indexed loop combining the retirement-account accrual
//! model, cash savings, and investment contributions into a total-net-worth
//! series. From retirement age on, active-income inflows cease and an
//! inflation-compounded annual expense is withdrawn under an explicit
//! withdrawal-order policy.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::assumptions::AssumptionSet;
use crate::growth::future_value;
use crate::projection::accrual::AccrualModel;
use crate::projection::series::{WealthProjection, WealthRow};
use crate::projection::state::WealthState;
use crate::snapshot::ClientSnapshot;
use crate::timeline::MAX_PROJECTION_AGE;

/// Order in which balances fund retirement expenses once inflows stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WithdrawalOrder {
    /// Drain cash first, then investments, then retirement segments in
    /// account declaration order. Liquid money goes first so growth assets
    /// keep compounding as long as possible.
    CashFirst,

    /// Withdraw from every balance proportionally to its share of total net
    /// worth.
    ProRata,
}

/// Configuration for a wealth projection run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionConfig {
    /// Horizon override; defaults to the later of life expectancy and
    /// retirement age from the profile.
    pub horizon_age: Option<u8>,

    pub withdrawal_order: WithdrawalOrder,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            horizon_age: None,
            withdrawal_order: WithdrawalOrder::CashFirst,
        }
    }
}

/// Main wealth projection engine.
pub struct WealthProjector<'a> {
    assumptions: &'a AssumptionSet,
    config: ProjectionConfig,
}

impl<'a> WealthProjector<'a> {
    pub fn new(assumptions: &'a AssumptionSet, config: ProjectionConfig) -> Self {
        Self { assumptions, config }
    }

    /// Project total wealth from `current_age` to the horizon, one row per
    /// simulated age (first row is the unmodified snapshot).
    ///
    /// `current_age >= horizon` degrades to a single-point series.
    pub fn project(&self, snapshot: &ClientSnapshot, current_age: u8) -> WealthProjection {
        let profile = &snapshot.profile;
        let requested_horizon = self
            .config
            .horizon_age
            .unwrap_or_else(|| profile.life_expectancy.max(profile.retirement_age));
        let horizon = requested_horizon.min(MAX_PROJECTION_AGE);
        if horizon < requested_horizon {
            warn!(
                "projection horizon {} clamped to {}",
                requested_horizon, MAX_PROJECTION_AGE
            );
        }

        debug!(
            "projecting {} from age {} to {} ({:?})",
            profile.name, current_age, horizon, self.config.withdrawal_order
        );

        let rates = &self.assumptions.rates;
        let accrual = AccrualModel::new(&self.assumptions.allocation);
        let segments = &snapshot.retirement_account.segments;

        let annual_expense_today = profile.monthly_expenses * 12.0;
        let expense_at =
            |age: u8| future_value(annual_expense_today, rates.inflation, age as i32 - current_age as i32);

        let mut state = WealthState::from_snapshot(snapshot, current_age);
        let mut projection = WealthProjection::new();
        projection.add_row(Self::row_from_state(&state, expense_at(current_age), 0.0));

        for age in current_age..horizon {
            let retired = age >= profile.retirement_age;
            let income = if retired { 0.0 } else { profile.monthly_income };

            // Retirement account advances one year under its own rules
            accrual.step(segments, &mut state.retirement, income, age);

            // Cash and investments grow, then receive inflows while working
            state.cash *= 1.0 + rates.cash;
            state.investments *= 1.0 + rates.investment;
            if !retired {
                state.cash += profile.monthly_savings * 12.0;
                state.investments += profile.monthly_investment * 12.0;
            }

            let shortfall = if retired {
                self.withdraw(&mut state, expense_at(age))
            } else {
                0.0
            };

            state.age = age + 1;
            projection.add_row(Self::row_from_state(&state, expense_at(age + 1), shortfall));
        }

        projection
    }

    /// Withdraw `amount` under the configured order, flooring balances at 0.
    /// Returns the unmet portion.
    fn withdraw(&self, state: &mut WealthState, amount: f64) -> f64 {
        match self.config.withdrawal_order {
            WithdrawalOrder::CashFirst => {
                let mut remaining = amount;
                remaining = drain(&mut state.cash, remaining);
                remaining = drain(&mut state.investments, remaining);
                for balance in &mut state.retirement {
                    remaining = drain(balance, remaining);
                }
                remaining
            }
            WithdrawalOrder::ProRata => {
                let total = state.total();
                if total <= amount {
                    state.cash = 0.0;
                    state.investments = 0.0;
                    state.retirement.iter_mut().for_each(|b| *b = 0.0);
                    amount - total
                } else {
                    let keep = 1.0 - amount / total;
                    state.cash *= keep;
                    state.investments *= keep;
                    state.retirement.iter_mut().for_each(|b| *b *= keep);
                    0.0
                }
            }
        }
    }

    fn row_from_state(state: &WealthState, annual_expense: f64, shortfall: f64) -> WealthRow {
        WealthRow {
            age: state.age,
            cash: state.cash,
            investments: state.investments,
            retirement_balances: state.retirement.clone(),
            retirement_total: state.retirement_total(),
            total_net_worth: state.total(),
            annual_expense,
            shortfall,
        }
    }
}

/// Take up to `remaining` out of `balance`; returns what is still owed.
fn drain(balance: &mut f64, remaining: f64) -> f64 {
    if remaining <= 0.0 {
        return 0.0;
    }
    let taken = balance.min(remaining);
    *balance -= taken;
    remaining - taken
}
