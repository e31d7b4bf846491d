//! JSON snapshot loader
//!
//! Reads raw snapshots as the persistence layer exports them and runs the
//! normalization boundary before anything else sees the data.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use super::data::ClientSnapshot;
use super::raw::RawClientSnapshot;

/// Errors raised while loading snapshot files.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("failed to read snapshot file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Load and normalize a single client snapshot from a JSON file.
pub fn load_snapshot(path: &Path) -> Result<ClientSnapshot, SnapshotError> {
    let reader = BufReader::new(File::open(path)?);
    let raw: RawClientSnapshot = serde_json::from_reader(reader)?;
    Ok(raw.normalize())
}

/// Load and normalize a JSON array of client snapshots (one file per advisory
/// block).
pub fn load_block(path: &Path) -> Result<Vec<ClientSnapshot>, SnapshotError> {
    let reader = BufReader::new(File::open(path)?);
    let raw: Vec<RawClientSnapshot> = serde_json::from_reader(reader)?;
    Ok(raw.iter().map(RawClientSnapshot::normalize).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_minimal_snapshot_json() {
        let json = r#"{
            "profile": {
                "name": "sample",
                "birth_date": "1985-03-02",
                "monthly_income": "6,000",
                "retirement_age": 62
            },
            "cash_balance": "25000"
        }"#;

        let raw: RawClientSnapshot = serde_json::from_str(json).unwrap();
        let snapshot = raw.normalize();
        assert_eq!(snapshot.profile.monthly_income, 6000.0);
        assert_eq!(snapshot.profile.retirement_age, 62);
        assert_eq!(snapshot.cash_balance, 25_000.0);
        assert!(snapshot.holdings.is_empty());
    }
}
