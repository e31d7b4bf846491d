//! Age-indexed projection engines: segmented-account accrual and the
//! comprehensive wealth projector

pub mod accrual;
pub mod engine;
pub mod series;
pub mod state;

pub use accrual::{AccrualModel, AccrualPoint};
pub use engine::{ProjectionConfig, WealthProjector, WithdrawalOrder};
pub use series::{WealthProjection, WealthRow, WealthSummary};
pub use state::WealthState;
