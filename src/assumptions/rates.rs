//! Named annual growth-rate assumptions
//!
//! Rates are decimal fractions (0.025 = 2.5%/yr). A rate of 0.0 is a valid,
//! meaningful assumption; there is no "unset" state.

use serde::{Deserialize, Serialize};

/// Bundle of annual growth rates applied across a projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateSet {
    /// Growth on cash savings balances
    pub cash: f64,

    /// Growth on invested balances
    pub investment: f64,

    /// General price inflation, applied to retirement expenses
    pub inflation: f64,

    /// Education cost inflation, applied to future tuition goals
    pub education_inflation: f64,
}

impl Default for RateSet {
    fn default() -> Self {
        // Advisory baseline: near-zero cash yield, moderate balanced-portfolio
        // return, long-run CPI, tuition inflating faster than CPI.
        Self {
            cash: 0.0005,
            investment: 0.04,
            inflation: 0.03,
            education_inflation: 0.05,
        }
    }
}
