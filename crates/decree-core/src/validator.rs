//! Field-level validation of case records.
//!
//! The engine assumes these invariants hold; every caller that accepts
//! external input (CLI files, piped JSON, store imports) must pass records
//! through here first.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::DecreeError;
use crate::types::CaseRecord;
use crate::DecreeResult;

/// A single validation failure, bound to the field path that caused it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub field: String,
    pub reason: String,
}

impl ValidationIssue {
    fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Check a case record against the invariants the engine assumes.
///
/// All failures are collected, not just the first one.
pub fn validate_case(case: &CaseRecord) -> Result<(), Vec<ValidationIssue>> {
    let mut issues: Vec<ValidationIssue> = Vec::new();

    require(&mut issues, "court_name", &case.court_name);
    require(&mut issues, "party_a", &case.party_a);
    require(&mut issues, "party_b", &case.party_b);
    require(&mut issues, "cms_no", &case.cms_no);

    if case.end_date <= case.start_date {
        issues.push(ValidationIssue::new(
            "end_date",
            "end date must be after the start date",
        ));
    }

    if case.recipients.is_empty() {
        issues.push(ValidationIssue::new(
            "recipients",
            "at least one recipient is required",
        ));
    }
    for (i, recipient) in case.recipients.iter().enumerate() {
        if recipient.name.trim().is_empty() {
            issues.push(ValidationIssue::new(
                format!("recipients[{i}].name"),
                "must not be empty",
            ));
        }
        if recipient.relationship.trim().is_empty() {
            issues.push(ValidationIssue::new(
                format!("recipients[{i}].relationship"),
                "must not be empty",
            ));
        }
        if recipient.amount <= Decimal::ZERO {
            issues.push(ValidationIssue::new(
                format!("recipients[{i}].amount"),
                "amount must be greater than 0",
            ));
        }
    }

    if case.yearly_increase < Decimal::ZERO {
        issues.push(ValidationIssue::new(
            "yearly_increase",
            "must not be negative",
        ));
    }

    if case.partially_satisfied {
        match case.partial_satisfaction_date {
            None => issues.push(ValidationIssue::new(
                "partial_satisfaction_date",
                "required when the decree is partially satisfied",
            )),
            Some(date) => {
                if date <= case.start_date || date >= case.end_date {
                    issues.push(ValidationIssue::new(
                        "partial_satisfaction_date",
                        "must lie strictly between the start and end dates",
                    ));
                }
            }
        }
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(issues)
    }
}

/// Hard-error variant for callers that stop at the first problem.
pub fn ensure_valid(case: &CaseRecord) -> DecreeResult<()> {
    validate_case(case).map_err(|issues| DecreeError::InvalidInput {
        field: issues[0].field.clone(),
        reason: issues[0].reason.clone(),
    })
}

fn require(issues: &mut Vec<ValidationIssue>, field: &str, value: &str) {
    if value.trim().is_empty() {
        issues.push(ValidationIssue::new(field, "must not be empty"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{IncreaseType, Recipient, ReportRole};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn valid_case() -> CaseRecord {
        CaseRecord {
            court_name: "Family Court Lahore".into(),
            party_a: "Mst. Ayesha Bibi".into(),
            party_b: "Muhammad Imran".into(),
            cms_no: "CMS-1042/2020".into(),
            report_generator: ReportRole::DecreeHolder,
            counsel_name: None,
            start_date: d(2020, 1, 1),
            end_date: d(2022, 12, 31),
            recipients: vec![Recipient {
                name: "Ali".into(),
                relationship: "Son".into(),
                amount: dec!(10000),
            }],
            yearly_increase: dec!(10),
            increase_type: IncreaseType::Progressive,
            other_amounts: vec![],
            payments: vec![],
            partially_satisfied: false,
            partial_satisfaction_date: None,
        }
    }

    fn field_flagged(issues: &[ValidationIssue], field: &str) -> bool {
        issues.iter().any(|i| i.field == field)
    }

    #[test]
    fn test_valid_case_passes() {
        assert!(validate_case(&valid_case()).is_ok());
    }

    #[test]
    fn test_missing_required_strings() {
        let mut case = valid_case();
        case.court_name = "  ".into();
        case.cms_no = String::new();
        let issues = validate_case(&case).unwrap_err();
        assert!(field_flagged(&issues, "court_name"));
        assert!(field_flagged(&issues, "cms_no"));
    }

    #[test]
    fn test_end_before_start() {
        let mut case = valid_case();
        case.end_date = d(2019, 12, 31);
        let issues = validate_case(&case).unwrap_err();
        assert!(field_flagged(&issues, "end_date"));
    }

    #[test]
    fn test_end_equal_to_start_rejected() {
        let mut case = valid_case();
        case.end_date = case.start_date;
        let issues = validate_case(&case).unwrap_err();
        assert!(field_flagged(&issues, "end_date"));
    }

    #[test]
    fn test_empty_recipient_list() {
        let mut case = valid_case();
        case.recipients.clear();
        let issues = validate_case(&case).unwrap_err();
        assert!(field_flagged(&issues, "recipients"));
    }

    #[test]
    fn test_nonpositive_recipient_amount_has_indexed_path() {
        let mut case = valid_case();
        case.recipients.push(Recipient {
            name: "Sara".into(),
            relationship: "Daughter".into(),
            amount: dec!(0),
        });
        let issues = validate_case(&case).unwrap_err();
        assert!(field_flagged(&issues, "recipients[1].amount"));
        assert!(!field_flagged(&issues, "recipients[0].amount"));
    }

    #[test]
    fn test_partial_satisfaction_date_required() {
        let mut case = valid_case();
        case.partially_satisfied = true;
        let issues = validate_case(&case).unwrap_err();
        assert!(field_flagged(&issues, "partial_satisfaction_date"));
    }

    #[test]
    fn test_partial_satisfaction_date_out_of_range() {
        let mut case = valid_case();
        case.partially_satisfied = true;
        case.partial_satisfaction_date = Some(d(2023, 6, 1));
        let issues = validate_case(&case).unwrap_err();
        assert!(field_flagged(&issues, "partial_satisfaction_date"));

        // Boundary dates are also out of range (strictly between)
        case.partial_satisfaction_date = Some(case.start_date);
        assert!(validate_case(&case).is_err());
        case.partial_satisfaction_date = Some(case.end_date);
        assert!(validate_case(&case).is_err());
    }

    #[test]
    fn test_partial_satisfaction_date_in_range_passes() {
        let mut case = valid_case();
        case.partially_satisfied = true;
        case.partial_satisfaction_date = Some(d(2021, 6, 30));
        assert!(validate_case(&case).is_ok());
    }

    #[test]
    fn test_negative_yearly_increase() {
        let mut case = valid_case();
        case.yearly_increase = dec!(-5);
        let issues = validate_case(&case).unwrap_err();
        assert!(field_flagged(&issues, "yearly_increase"));
    }

    #[test]
    fn test_ensure_valid_maps_first_issue() {
        let mut case = valid_case();
        case.court_name = String::new();
        let err = ensure_valid(&case).unwrap_err();
        match err {
            DecreeError::InvalidInput { field, .. } => assert_eq!(field, "court_name"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
