//! Protection and education planning assumptions
//!
//! Every multiplier that used to hide inside a formula lives here with a
//! documented default, so each number in a report traces back to a named,
//! overridable assumption.

use crate::snapshot::Gender;
use serde::{Deserialize, Serialize};

/// Income-replacement horizons backing the required-coverage thresholds.
///
/// Required coverage per category = 12 x monthly take-home income x the
/// category's replacement years.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProtectionAssumptions {
    /// Years of income a death benefit should replace
    pub death_replacement_years: f64,

    /// Years of income disability coverage should replace
    pub disability_replacement_years: f64,

    /// Years of income early-stage critical-illness coverage should replace
    pub ci_early_replacement_years: f64,

    /// Years of income late-stage critical-illness coverage should replace
    pub ci_late_replacement_years: f64,
}

impl Default for ProtectionAssumptions {
    fn default() -> Self {
        // Common advisory rules of thumb: 10x annual income at death, longer
        // for permanent disability, shorter for CI treatment windows.
        Self {
            death_replacement_years: 10.0,
            disability_replacement_years: 15.0,
            ci_early_replacement_years: 2.0,
            ci_late_replacement_years: 4.0,
        }
    }
}

/// Assumptions for projecting a child's future education cost.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EducationAssumptions {
    /// Age at university entry for male children (national service delays it)
    pub start_age_male: u8,

    /// Age at university entry for female children
    pub start_age_female: u8,
}

impl Default for EducationAssumptions {
    fn default() -> Self {
        Self {
            start_age_male: 21,
            start_age_female: 19,
        }
    }
}

impl EducationAssumptions {
    /// University start age for a child of the given gender.
    pub fn start_age(&self, gender: Gender) -> u8 {
        match gender {
            Gender::Male => self.start_age_male,
            Gender::Female => self.start_age_female,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_replacement_years() {
        let p = ProtectionAssumptions::default();
        assert_eq!(p.death_replacement_years, 10.0);
        assert!(p.disability_replacement_years > p.death_replacement_years);
    }

    #[test]
    fn test_start_age_by_gender() {
        let e = EducationAssumptions::default();
        assert_eq!(e.start_age(Gender::Male), 21);
        assert_eq!(e.start_age(Gender::Female), 19);
    }
}
