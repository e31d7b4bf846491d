//! Education goal projection for dependent children
//!
//! Projects today's education cost forward to the child's university start
//! age under education-cost inflation. A missing child birth date makes the
//! whole goal unavailable; a missing parent birth date suppresses only the
//! parent-age cross-check rather than assuming an average age.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::assumptions::EducationAssumptions;
use crate::growth::future_value;
use crate::snapshot::Child;
use crate::timeline::AgeAnchor;

/// Projected education funding goal for one child.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationGoal {
    pub child_name: String,

    pub child_age: u8,

    /// University start age from the assumption set
    pub start_age: u8,

    /// Whole years until university entry (0 if already at or past start age)
    pub years_until_start: u8,

    /// Today's cost compounded at education inflation to the start year
    pub future_cost: f64,

    /// Parent's age when the child starts university; `None` when the parent
    /// birth date is unknown
    pub parent_age_at_start: Option<u8>,
}

/// Project one child's goal as of the review date. `None` when the child's
/// birth date is missing.
pub fn project_education_goal(
    child: &Child,
    parent_birth_date: Option<NaiveDate>,
    education: &EducationAssumptions,
    education_inflation: f64,
    as_of: NaiveDate,
) -> Option<EducationGoal> {
    let child_age = AgeAnchor::at(child.birth_date?, as_of)?.years;
    let start_age = education.start_age(child.gender);
    let years_until_start = start_age.saturating_sub(child_age);

    let future_cost = future_value(
        child.education_cost_today,
        education_inflation,
        years_until_start as i32,
    );

    let parent_age_at_start = parent_birth_date
        .and_then(|birth| AgeAnchor::at(birth, as_of))
        .map(|anchor| anchor.years.saturating_add(years_until_start));

    Some(EducationGoal {
        child_name: child.name.clone(),
        child_age,
        start_age,
        years_until_start,
        future_cost,
        parent_age_at_start,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::Gender;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn child(name: &str, birth: Option<NaiveDate>) -> Child {
        Child {
            name: name.into(),
            gender: Gender::Female,
            birth_date: birth,
            education_cost_today: 100_000.0,
        }
    }

    #[test]
    fn test_younger_sibling_costs_strictly_more() {
        let education = EducationAssumptions::default();
        let as_of = d(2025, 6, 1);

        let first = project_education_goal(
            &child("first", Some(d(2015, 6, 1))),
            None,
            &education,
            0.05,
            as_of,
        )
        .unwrap();
        let second = project_education_goal(
            &child("second", Some(d(2020, 6, 1))),
            None,
            &education,
            0.05,
            as_of,
        )
        .unwrap();

        // Born 5 years apart with identical assumptions: 5 extra years of
        // inflation compounding
        assert_eq!(second.years_until_start, first.years_until_start + 5);
        assert!(second.future_cost > first.future_cost);
    }

    #[test]
    fn test_missing_child_birth_date_is_unavailable() {
        let education = EducationAssumptions::default();
        assert!(project_education_goal(
            &child("unknown", None),
            Some(d(1985, 1, 1)),
            &education,
            0.05,
            d(2025, 6, 1),
        )
        .is_none());
    }

    #[test]
    fn test_missing_parent_birth_suppresses_only_cross_check() {
        let education = EducationAssumptions::default();
        let goal = project_education_goal(
            &child("kid", Some(d(2018, 1, 1))),
            None,
            &education,
            0.05,
            d(2025, 6, 1),
        )
        .unwrap();

        assert!(goal.parent_age_at_start.is_none());
        assert!(goal.future_cost > 100_000.0);
    }

    #[test]
    fn test_parent_age_cross_check() {
        let education = EducationAssumptions::default();
        let goal = project_education_goal(
            &child("kid", Some(d(2018, 1, 1))),
            Some(d(1988, 1, 1)),
            &education,
            0.05,
            d(2025, 6, 1),
        )
        .unwrap();

        // Child is 7, starts at 19 in 12 years; parent is 37 now
        assert_eq!(goal.years_until_start, 12);
        assert_eq!(goal.parent_age_at_start, Some(49));
    }

    #[test]
    fn test_child_at_or_past_start_age_pays_todays_cost() {
        let education = EducationAssumptions::default();
        let goal = project_education_goal(
            &child("adult", Some(d(2000, 1, 1))),
            None,
            &education,
            0.05,
            d(2025, 6, 1),
        )
        .unwrap();

        assert_eq!(goal.years_until_start, 0);
        assert_eq!(goal.future_cost, 100_000.0);
    }
}
