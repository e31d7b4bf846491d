//! Advisory Engine - Deterministic projection and gap analysis for client reviews
//!
//! This library provides:
//! - Multi-account wealth projection over an age-indexed yearly loop
//! - Segmented retirement-account accrual with pluggable contribution allocation
//! - Cost-basis reconciliation and annualized-return reporting per holding
//! - Insurance coverage gap evaluation and policy replacement comparison
//! - Education goal projection for dependent children
//!
//! Every calculation is a pure, synchronous function over an immutable client
//! snapshot; missing temporal anchors surface as explicit unavailable markers
//! rather than guessed values.

pub mod analysis;
pub mod assumptions;
pub mod growth;
pub mod money;
pub mod projection;
pub mod scenario;
pub mod snapshot;
pub mod timeline;

// Re-export commonly used types
pub use assumptions::AssumptionSet;
pub use projection::{ProjectionConfig, WealthProjection, WealthProjector, WealthRow};
pub use scenario::{ClientReview, ScenarioRunner};
pub use snapshot::ClientSnapshot;
