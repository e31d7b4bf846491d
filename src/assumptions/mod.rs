//! Advisory assumptions: growth rates, contribution allocation, protection
//! multipliers, and education planning parameters

mod allocation;
mod protection;
mod rates;
pub mod loader;

pub use allocation::{AllocationBand, ContributionAllocation};
pub use loader::AssumptionError;
pub use protection::{EducationAssumptions, ProtectionAssumptions};
pub use rates::RateSet;

use std::path::Path;

/// Container for every assumption feeding a client review.
///
/// Each calculation receives this set explicitly; no multiplier or rate is
/// hard-coded at a use site, so every number in a report traces back to a
/// named, overridable entry here.
#[derive(Debug, Clone, PartialEq)]
pub struct AssumptionSet {
    pub rates: RateSet,
    pub allocation: ContributionAllocation,
    pub protection: ProtectionAssumptions,
    pub education: EducationAssumptions,
}

impl AssumptionSet {
    /// Create assumptions with the documented advisory defaults.
    pub fn default_advisory() -> Self {
        Self {
            rates: RateSet::default(),
            allocation: ContributionAllocation::default_statutory(),
            protection: ProtectionAssumptions::default(),
            education: EducationAssumptions::default(),
        }
    }

    /// Load assumptions from CSV files in the default location
    /// (`data/assumptions/`).
    pub fn from_csv() -> Result<Self, AssumptionError> {
        Self::from_csv_path(Path::new(loader::DEFAULT_ASSUMPTIONS_PATH))
    }

    /// Load assumptions from CSV files in a specific directory.
    pub fn from_csv_path(path: &Path) -> Result<Self, AssumptionError> {
        let rates = loader::load_rates(path)?;
        let allocation = loader::load_allocation(path)?;
        let (protection, education) = loader::load_protection(path)?;

        Ok(Self { rates, allocation, protection, education })
    }
}

impl Default for AssumptionSet {
    fn default() -> Self {
        Self::default_advisory()
    }
}
