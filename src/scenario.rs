//! Review runner for efficient batch client reviews
//!
//! Pre-loads assumptions once, then runs any number of full client reviews
//! (wealth projection + coverage gaps + holding performance + education
//! goals) without re-reading assumption files.

use chrono::NaiveDate;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::{
    evaluate_coverage, project_education_goal, reconcile, CoverageReport, EducationGoal,
    PerformanceReport,
};
use crate::assumptions::{AssumptionError, AssumptionSet};
use crate::projection::{ProjectionConfig, WealthProjection, WealthProjector};
use crate::snapshot::ClientSnapshot;

/// Full review output for one client.
///
/// Unavailable entries (`None`) mean a required temporal anchor was missing,
/// never that a computation failed: the presentation layer renders those as
/// prompt states.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientReview {
    pub as_of: NaiveDate,

    /// Current age; `None` when the profile has no usable birth date
    pub current_age: Option<u8>,

    /// Wealth projection; unavailable without a current age
    pub projection: Option<WealthProjection>,

    pub coverage: CoverageReport,

    /// One entry per holding, in snapshot order; `None` where cost basis
    /// could not be determined
    pub holdings: Vec<Option<PerformanceReport>>,

    /// One entry per child, in snapshot order; `None` where the child's
    /// birth date is missing
    pub education_goals: Vec<Option<EducationGoal>>,
}

/// Pre-loaded review runner.
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    assumptions: AssumptionSet,
}

impl ScenarioRunner {
    /// Create a runner with the built-in advisory defaults.
    pub fn new() -> Self {
        Self {
            assumptions: AssumptionSet::default_advisory(),
        }
    }

    /// Create a runner by loading assumptions from CSV files.
    pub fn from_csv() -> Result<Self, AssumptionError> {
        Ok(Self {
            assumptions: AssumptionSet::from_csv()?,
        })
    }

    /// Create a runner from a specific assumptions directory.
    pub fn from_csv_path(path: &std::path::Path) -> Result<Self, AssumptionError> {
        Ok(Self {
            assumptions: AssumptionSet::from_csv_path(path)?,
        })
    }

    /// Create a runner with pre-built assumptions.
    pub fn with_assumptions(assumptions: AssumptionSet) -> Self {
        Self { assumptions }
    }

    /// Run a full review of one client as of the given date.
    pub fn review(
        &self,
        snapshot: &ClientSnapshot,
        as_of: NaiveDate,
        config: ProjectionConfig,
    ) -> ClientReview {
        debug!("reviewing client {} as of {}", snapshot.profile.name, as_of);

        let current_age = snapshot.profile.age_at(as_of).map(|anchor| anchor.years);

        let projection = current_age.map(|age| {
            WealthProjector::new(&self.assumptions, config).project(snapshot, age)
        });

        let coverage = evaluate_coverage(
            &snapshot.policies,
            snapshot.profile.monthly_income,
            &self.assumptions.protection,
        );

        let holdings = snapshot
            .holdings
            .iter()
            .map(|holding| reconcile(holding, as_of))
            .collect();

        let education_goals = snapshot
            .children
            .iter()
            .map(|child| {
                project_education_goal(
                    child,
                    snapshot.profile.birth_date,
                    &self.assumptions.education,
                    self.assumptions.rates.education_inflation,
                    as_of,
                )
            })
            .collect();

        ClientReview {
            as_of,
            current_age,
            projection,
            coverage,
            holdings,
            education_goals,
        }
    }

    /// Review multiple clients with the same config.
    pub fn review_batch(
        &self,
        snapshots: &[ClientSnapshot],
        as_of: NaiveDate,
        config: ProjectionConfig,
    ) -> Vec<ClientReview> {
        snapshots
            .iter()
            .map(|snapshot| self.review(snapshot, as_of, config))
            .collect()
    }

    /// Get a reference to the loaded assumptions for inspection.
    pub fn assumptions(&self) -> &AssumptionSet {
        &self.assumptions
    }

    /// Get a mutable reference for per-scenario customization.
    pub fn assumptions_mut(&mut self) -> &mut AssumptionSet {
        &mut self.assumptions
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}
