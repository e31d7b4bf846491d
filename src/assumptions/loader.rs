//! CSV-based assumption loader
//!
//! Loads overridable advisory assumptions from CSV files in
//! `data/assumptions/`. Malformed files are reported as errors rather than
//! silently patched, since a half-loaded assumption table is worse than none.

use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

use super::allocation::{AllocationBand, ContributionAllocation};
use super::protection::{EducationAssumptions, ProtectionAssumptions};
use super::rates::RateSet;

/// Default path to the assumptions directory
pub const DEFAULT_ASSUMPTIONS_PATH: &str = "data/assumptions";

/// Errors raised while loading assumption tables.
#[derive(Debug, thiserror::Error)]
pub enum AssumptionError {
    #[error("failed to open assumption file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed assumption CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("unparsable numeric value in {file}: {value:?}")]
    BadNumber { file: &'static str, value: String },

    #[error("missing required assumption key: {0}")]
    MissingKey(String),
}

fn parse_f64(file: &'static str, value: &str) -> Result<f64, AssumptionError> {
    value.trim().parse().map_err(|_| AssumptionError::BadNumber {
        file,
        value: value.to_string(),
    })
}

fn parse_u8(file: &'static str, value: &str) -> Result<u8, AssumptionError> {
    value.trim().parse().map_err(|_| AssumptionError::BadNumber {
        file,
        value: value.to_string(),
    })
}

/// Load a two-column `name,value` CSV into a map.
fn load_named_values(
    path: &Path,
    file: &'static str,
) -> Result<HashMap<String, f64>, AssumptionError> {
    let reader = File::open(path.join(file))?;
    let mut csv_reader = csv::Reader::from_reader(reader);

    let mut values = HashMap::new();
    for result in csv_reader.records() {
        let record = result?;
        let name = record[0].trim().to_string();
        let value = parse_f64(file, &record[1])?;
        values.insert(name, value);
    }

    Ok(values)
}

fn require(map: &HashMap<String, f64>, key: &str) -> Result<f64, AssumptionError> {
    map.get(key)
        .copied()
        .ok_or_else(|| AssumptionError::MissingKey(key.to_string()))
}

/// Load growth rates from `rates.csv` (columns: name,value).
pub fn load_rates(path: &Path) -> Result<RateSet, AssumptionError> {
    let values = load_named_values(path, "rates.csv")?;

    Ok(RateSet {
        cash: require(&values, "cash")?,
        investment: require(&values, "investment")?,
        inflation: require(&values, "inflation")?,
        education_inflation: require(&values, "education_inflation")?,
    })
}

/// Load the contribution allocation model from `allocation_bands.csv`
/// (columns: min_age, max_age, then one rate column per segment), with the
/// wage ceiling taken from `rates.csv` key `monthly_income_cap`.
pub fn load_allocation(path: &Path) -> Result<ContributionAllocation, AssumptionError> {
    let values = load_named_values(path, "rates.csv")?;
    let monthly_income_cap = require(&values, "monthly_income_cap")?;

    let reader = File::open(path.join("allocation_bands.csv"))?;
    let mut csv_reader = csv::Reader::from_reader(reader);

    let mut bands = Vec::new();
    for result in csv_reader.records() {
        let record = result?;
        let min_age = parse_u8("allocation_bands.csv", &record[0])?;
        let max_age = parse_u8("allocation_bands.csv", &record[1])?;

        let mut segment_rates = Vec::with_capacity(record.len().saturating_sub(2));
        for field in record.iter().skip(2) {
            segment_rates.push(parse_f64("allocation_bands.csv", field)?);
        }

        bands.push(AllocationBand { min_age, max_age, segment_rates });
    }

    Ok(ContributionAllocation::IncomeFraction { monthly_income_cap, bands })
}

/// Load protection and education assumptions from `protection.csv`
/// (columns: name,value).
pub fn load_protection(
    path: &Path,
) -> Result<(ProtectionAssumptions, EducationAssumptions), AssumptionError> {
    let values = load_named_values(path, "protection.csv")?;

    let protection = ProtectionAssumptions {
        death_replacement_years: require(&values, "death_replacement_years")?,
        disability_replacement_years: require(&values, "disability_replacement_years")?,
        ci_early_replacement_years: require(&values, "ci_early_replacement_years")?,
        ci_late_replacement_years: require(&values, "ci_late_replacement_years")?,
    };

    let education = EducationAssumptions {
        start_age_male: require(&values, "university_start_age_male")? as u8,
        start_age_female: require(&values, "university_start_age_female")? as u8,
    };

    Ok((protection, education))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_default_assumption_files() {
        let path = Path::new(DEFAULT_ASSUMPTIONS_PATH);

        let rates = load_rates(path).expect("rates.csv should load");
        assert!(rates.inflation > 0.0);

        let allocation = load_allocation(path).expect("allocation_bands.csv should load");
        match allocation {
            ContributionAllocation::IncomeFraction { monthly_income_cap, bands } => {
                assert!(monthly_income_cap > 0.0);
                assert!(!bands.is_empty());
            }
            _ => panic!("CSV loader always builds an income-fraction model"),
        }

        let (protection, education) = load_protection(path).expect("protection.csv should load");
        assert!(protection.death_replacement_years > 0.0);
        assert!(education.start_age_male >= 18);
    }
}
