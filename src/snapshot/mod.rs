//! Client snapshot: the data crossing the boundary into the engine

mod data;
pub mod loader;
pub mod raw;

pub use data::{
    AccountSegment, Child, ClientProfile, ClientSnapshot, ContributionSchedule, CoverageAmounts,
    Frequency, Gender, InsurancePolicy, InvestmentHolding, SegmentedAccount,
};
pub use loader::{load_block, load_snapshot, SnapshotError};
pub use raw::RawClientSnapshot;
