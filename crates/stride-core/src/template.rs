//! Loading pasted plan templates.

use std::collections::HashSet;

use jiff::civil::Date;

use crate::{
    error::{PlannerError, Result},
    models::ActionPlan,
    schedule::{parse_iso_date, reflow},
};

/// Starter plan offered to users: four weeks keyed by weekday names.
pub const TEMPLATE_JSON: &str = include_str!("../assets/template.json");

/// Parse the bundled template.
///
/// # Errors
///
/// Only fails if the bundled template itself is broken.
pub fn template_plan() -> Result<ActionPlan> {
    parse_plan(TEMPLATE_JSON)
}

/// Parse and validate plan JSON.
///
/// No partial plan is ever returned: any malformed field rejects the whole
/// document.
///
/// # Errors
///
/// Returns `PlannerError::InvalidPlan` when the text is not valid JSON, does
/// not have the plan shape, or has missing or duplicate week numbers.
pub fn parse_plan(json: &str) -> Result<ActionPlan> {
    let plan: ActionPlan = serde_json::from_str(json).map_err(|e| PlannerError::InvalidPlan {
        reason: format!("Invalid JSON. Please check your input. ({e})"),
    })?;
    validate_plan(&plan)?;
    Ok(plan)
}

/// Check invariants serde cannot express.
///
/// # Errors
///
/// Returns `PlannerError::InvalidPlan` on a zero or repeated week number.
pub fn validate_plan(plan: &ActionPlan) -> Result<()> {
    let mut seen = HashSet::new();
    for week in &plan.weeks {
        if week.week_number == 0 {
            return Err(PlannerError::InvalidPlan {
                reason: "weekNumber must be a positive integer".to_string(),
            });
        }
        if !seen.insert(week.week_number) {
            return Err(PlannerError::InvalidPlan {
                reason: format!("weekNumber {} appears more than once", week.week_number),
            });
        }
    }
    Ok(())
}

/// Parse plan JSON and, when a start date is given, anchor it to the
/// calendar.
///
/// # Errors
///
/// See [`parse_plan`].
pub fn load_plan(json: &str, start: Option<Date>) -> Result<ActionPlan> {
    let plan = parse_plan(json)?;
    Ok(match start {
        Some(start) => reflow(&plan, start),
        None => plan,
    })
}

/// Parse a user-supplied start date in `yyyy-MM-dd` form.
///
/// # Errors
///
/// Returns `PlannerError::InvalidInput` for anything else.
pub fn parse_start_date(text: &str) -> Result<Date> {
    parse_iso_date(text.trim()).ok_or_else(|| {
        PlannerError::invalid_input("start_date")
            .with_reason(format!("'{text}' is not a valid date (expected YYYY-MM-DD)"))
    })
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::models::{Intensity, OneOrMany};

    #[test]
    fn test_template_is_valid_four_week_plan() {
        let plan = template_plan().expect("bundled template must parse");

        assert_eq!(plan.weeks.len(), 4);
        assert_eq!(plan.week_numbers().collect::<Vec<_>>(), [1, 2, 3, 4]);
        let monday = plan.weeks[0].days.get("Monday").unwrap();
        assert_eq!(monday[0].intensity, Some(Intensity::Zone3));
        assert_eq!(
            monday[1].details,
            Some(OneOrMany::Single("Additional details here".to_string()))
        );
    }

    #[test]
    fn test_template_reflows_without_leftover_weekday_keys() {
        let plan = load_plan(TEMPLATE_JSON, Some(date(2024, 3, 4))).unwrap();

        let first: Vec<_> = plan.weeks[0].days.keys().collect();
        assert_eq!(first, ["2024-03-04", "2024-03-06", "2024-03-08", "2024-03-10"]);
        let second: Vec<_> = plan.weeks[1].days.keys().collect();
        assert_eq!(second[0], "2024-03-11");
    }

    #[test]
    fn test_parse_plan_preserves_day_order() {
        let json = r#"{
            "title": "Order",
            "weeks": [{
                "weekNumber": 1,
                "theme": "t",
                "days": {
                    "Friday": [{"activity": "Bike"}],
                    "Monday": [{"activity": "Run"}],
                    "Wednesday": [{"activity": "Swim"}]
                },
                "dailyTasks": []
            }]
        }"#;

        let plan = parse_plan(json).unwrap();

        let keys: Vec<_> = plan.weeks[0].days.keys().collect();
        assert_eq!(keys, ["Friday", "Monday", "Wednesday"]);
    }

    #[test]
    fn test_parse_plan_rejects_malformed_json() {
        let err = parse_plan("{ \"title\": ").unwrap_err();
        assert!(matches!(err, PlannerError::InvalidPlan { .. }));
        assert!(err.to_string().contains("Invalid JSON"));
    }

    #[test]
    fn test_parse_plan_requires_activity_field() {
        let json = r#"{"title": "t", "weeks": [{"weekNumber": 1, "theme": "", "days": {"Monday": [{"duration": "5 minutes"}]}, "dailyTasks": []}]}"#;

        assert!(matches!(
            parse_plan(json),
            Err(PlannerError::InvalidPlan { .. })
        ));
    }

    #[test]
    fn test_parse_plan_rejects_unknown_intensity() {
        let json = r#"{"title": "t", "weeks": [{"weekNumber": 1, "theme": "", "days": {"Monday": [{"activity": "Run", "intensity": "moderate"}]}, "dailyTasks": []}]}"#;

        assert!(parse_plan(json).is_err());
    }

    #[test]
    fn test_parse_plan_accepts_numeric_and_empty_intensity() {
        let json = r#"{"title": "t", "weeks": [{"weekNumber": 1, "theme": "", "days": {"Monday": [
            {"activity": "Run", "intensity": 5},
            {"activity": "Walk", "intensity": ""},
            {"activity": "Swim", "intensity": null}
        ]}, "dailyTasks": []}]}"#;

        let plan = parse_plan(json).unwrap();
        let monday = plan.weeks[0].days.get("Monday").unwrap();
        assert_eq!(monday[0].intensity, Some(Intensity::Zone5));
        assert_eq!(monday[1].intensity, None);
        assert_eq!(monday[2].intensity, None);
    }

    #[test]
    fn test_parse_plan_rejects_duplicate_and_zero_week_numbers() {
        let duplicate = r#"{"title": "t", "weeks": [{"weekNumber": 1}, {"weekNumber": 1}]}"#;
        let zero = r#"{"title": "t", "weeks": [{"weekNumber": 0}]}"#;

        assert!(parse_plan(duplicate)
            .unwrap_err()
            .to_string()
            .contains("more than once"));
        assert!(parse_plan(zero).is_err());
    }

    #[test]
    fn test_load_plan_without_start_keeps_weekday_keys() {
        let plan = load_plan(TEMPLATE_JSON, None).unwrap();

        assert_eq!(plan.weeks[0].days.keys().next(), Some("Monday"));
    }

    #[test]
    fn test_plan_json_round_trips_shape() {
        let plan = template_plan().unwrap();

        let value = serde_json::to_value(&plan).unwrap();

        assert_eq!(value["weeks"][0]["weekNumber"], 1);
        assert_eq!(value["weeks"][0]["dailyTasks"][0], "Daily task 1");
        assert_eq!(value["weeks"][0]["days"]["Monday"][0]["intensity"], "3");
        assert!(value["weeks"][0]["days"]["Sunday"][0].get("duration").is_none());
        assert_eq!(serde_json::from_value::<ActionPlan>(value).unwrap(), plan);
    }

    #[test]
    fn test_parse_start_date() {
        assert_eq!(parse_start_date("2024-03-04").unwrap(), date(2024, 3, 4));
        assert!(matches!(
            parse_start_date("March 4"),
            Err(PlannerError::InvalidInput { .. })
        ));
    }
}
