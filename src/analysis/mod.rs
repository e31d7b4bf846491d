//! Point-in-time analyses: holding performance, coverage gaps, policy
//! replacement, and education goals

pub mod coverage;
pub mod education;
pub mod performance;
pub mod replacement;

pub use coverage::{evaluate_coverage, CategoryAssessment, CoverageReport};
pub use education::{project_education_goal, EducationGoal};
pub use performance::{reconcile, BasisSource, PerformanceReport};
pub use replacement::{compare_plans, ExistingPlan, ProposedPlan, ReplacementComparison};
