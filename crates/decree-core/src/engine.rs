//! The decree calculation engine.
//!
//! A pure transform from a validated [`CaseRecord`] to a
//! [`CalculatedReport`]: per-recipient yearly breakdowns segmented by
//! decree anniversaries, escalated rates, and the outstanding-balance
//! summary. No I/O, no shared state; business edge cases (empty recipient
//! list, period ending before the effective start) produce defined
//! zero-valued outputs rather than errors.

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::dates::{add_years, duration_display, months_fraction};
use crate::error::DecreeError;
use crate::types::{
    with_metadata, CaseRecord, ComputationOutput, IncreaseType, Money, OtherAmount, Payment,
    Percent, Recipient, ReportRole,
};
use crate::DecreeResult;

/// Periods longer than this are treated as data-entry mistakes.
const MAX_PERIOD_YEARS: i32 = 200;

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

/// One anniversary-bounded segment of a recipient's schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearlyBreakdown {
    /// Ordinal label ("سال 1", "سال 2", ...).
    pub year: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub basic_amount: Money,
    /// Monthly rate in effect during this segment.
    pub increased_amount: Money,
    pub duration_display: String,
    pub total_period: Money,
}

/// Full schedule and totals for one recipient.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipientCalculation {
    pub name: String,
    pub relationship: String,
    pub base_amount: Money,
    pub increase_type: IncreaseType,
    pub yearly_increase: Percent,
    pub total_recipient_amount: Money,
    /// Rate after the final escalation; the present-day monthly amount.
    pub current_month_amount: Money,
    pub yearly_breakdown: Vec<YearlyBreakdown>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseDetails {
    pub court_name: String,
    pub party_a: String,
    pub party_b: String,
    pub cms_no: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportGenerator {
    pub generated_by: ReportRole,
    pub counsel_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodSummary {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub period_display: String,
}

/// Present when the decree was partially satisfied before the period end.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartialSatisfaction {
    pub date: NaiveDate,
    pub effective_start_date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecreeSummary {
    pub grand_total_maintenance: Money,
    pub total_other_amounts: Money,
    pub total_decretal_before_payments: Money,
    pub total_payments: Money,
    /// May be negative: an overpayment is a reportable condition, not an error.
    pub final_outstanding_amount: Money,
}

/// The computed report handed to presentation and storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculatedReport {
    pub case_details: CaseDetails,
    pub report_generator: ReportGenerator,
    pub period: PeriodSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partial_satisfaction: Option<PartialSatisfaction>,
    pub recipient_calculations: Vec<RecipientCalculation>,
    pub other_amounts: Vec<OtherAmount>,
    pub payments: Vec<Payment>,
    pub summary: DecreeSummary,
}

// ---------------------------------------------------------------------------
// Core function
// ---------------------------------------------------------------------------

/// Compute the full decree report for a validated case record.
pub fn calculate(case: &CaseRecord) -> DecreeResult<ComputationOutput<CalculatedReport>> {
    let start_timer = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    if case.end_date > add_years(case.start_date, MAX_PERIOD_YEARS) {
        return Err(DecreeError::InvalidInput {
            field: "end_date".into(),
            reason: format!("calculation period exceeds {MAX_PERIOD_YEARS} years"),
        });
    }

    let effective_start = effective_start_date(case);
    let increase = case.yearly_increase / dec!(100);

    if case.recipients.is_empty() {
        warnings.push("no recipients: maintenance totals are zero".into());
    }

    let mut grand_total_maintenance = Decimal::ZERO;
    let mut recipient_calculations = Vec::with_capacity(case.recipients.len());

    for recipient in &case.recipients {
        let calc = calculate_recipient(recipient, case, effective_start, increase);
        grand_total_maintenance += calc.total_recipient_amount;
        recipient_calculations.push(calc);
    }

    let other_amounts = filtered_other_amounts(&case.other_amounts);
    let total_other_amounts: Money = other_amounts.iter().map(|oa| oa.amount).sum();

    let payments = filtered_payments(&case.payments);
    let total_payments: Money = payments.iter().map(|p| p.amount).sum();

    let total_decretal_before_payments = grand_total_maintenance + total_other_amounts;
    let final_outstanding_amount = total_decretal_before_payments - total_payments;

    let partial_satisfaction = match (case.partially_satisfied, case.partial_satisfaction_date) {
        (true, Some(date)) => Some(PartialSatisfaction {
            date,
            effective_start_date: effective_start,
        }),
        _ => None,
    };

    let report = CalculatedReport {
        case_details: CaseDetails {
            court_name: case.court_name.clone(),
            party_a: case.party_a.clone(),
            party_b: case.party_b.clone(),
            cms_no: case.cms_no.clone(),
        },
        report_generator: ReportGenerator {
            generated_by: case.report_generator,
            counsel_name: case.counsel_name.clone().unwrap_or_default(),
        },
        period: PeriodSummary {
            start_date: case.start_date,
            end_date: case.end_date,
            period_display: duration_display(case.start_date, case.end_date),
        },
        partial_satisfaction,
        recipient_calculations,
        other_amounts,
        payments,
        summary: DecreeSummary {
            grand_total_maintenance,
            total_other_amounts,
            total_decretal_before_payments,
            total_payments,
            final_outstanding_amount,
        },
    };

    let elapsed = start_timer.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Maintenance decree schedule (anniversary-segmented escalation)",
        &serde_json::json!({
            "start_date": case.start_date,
            "end_date": case.end_date,
            "effective_start_date": effective_start,
            "increase_type": case.increase_type,
            "yearly_increase_pct": case.yearly_increase.to_string(),
            "recipients": case.recipients.len(),
            "partially_satisfied": case.partially_satisfied,
        }),
        warnings,
        elapsed,
        report,
    ))
}

// ---------------------------------------------------------------------------
// Per-recipient escalation walk
// ---------------------------------------------------------------------------

/// The day after the satisfaction date when partial satisfaction applies and
/// falls after the nominal start; otherwise the nominal start.
fn effective_start_date(case: &CaseRecord) -> NaiveDate {
    match (case.partially_satisfied, case.partial_satisfaction_date) {
        (true, Some(date)) if date > case.start_date => date + Duration::days(1),
        _ => case.start_date,
    }
}

fn escalate(rate: Money, base: Money, increase: Decimal, increase_type: IncreaseType) -> Money {
    match increase_type {
        IncreaseType::Progressive => rate * (Decimal::ONE + increase),
        // Flat addition of a constant share of the original base, never the
        // current rate. Preserved original-base policy.
        IncreaseType::Fixed => rate + base * increase,
    }
}

/// Rate in effect when the effective period begins: one escalation per whole
/// anniversary year elapsed between the nominal start and the satisfaction
/// date.
fn fast_forward_rate(base: Money, case: &CaseRecord, increase: Decimal, until: NaiveDate) -> Money {
    let mut rate = base;
    let mut k = 1;
    while add_years(case.start_date, k) <= until {
        rate = escalate(rate, base, increase, case.increase_type);
        k += 1;
    }
    rate
}

fn calculate_recipient(
    recipient: &Recipient,
    case: &CaseRecord,
    effective_start: NaiveDate,
    increase: Decimal,
) -> RecipientCalculation {
    let base = recipient.amount;

    let mut current_rate = match (case.partially_satisfied, case.partial_satisfaction_date) {
        (true, Some(date)) => fast_forward_rate(base, case, increase, date),
        _ => base,
    };

    // Anniversaries stay anchored to the nominal start date, so escalation
    // timing is unaffected by a partial-satisfaction shift.
    let mut k = 1;
    while add_years(case.start_date, k) <= effective_start {
        k += 1;
    }

    let mut yearly_breakdown: Vec<YearlyBreakdown> = Vec::new();
    let mut total_recipient_amount = Decimal::ZERO;
    let mut position = effective_start;

    while position <= case.end_date {
        let next_anniversary = add_years(case.start_date, k);
        let segment_end = std::cmp::min(next_anniversary - Duration::days(1), case.end_date);

        let total_period = current_rate * months_fraction(position, segment_end);
        yearly_breakdown.push(YearlyBreakdown {
            year: format!("سال {}", yearly_breakdown.len() + 1),
            start_date: position,
            end_date: segment_end,
            basic_amount: base,
            increased_amount: current_rate,
            duration_display: duration_display(position, segment_end),
            total_period,
        });
        total_recipient_amount += total_period;

        position = segment_end + Duration::days(1);
        k += 1;
        if position <= case.end_date {
            current_rate = escalate(current_rate, base, increase, case.increase_type);
        }
    }

    RecipientCalculation {
        name: recipient.name.clone(),
        relationship: recipient.relationship.clone(),
        base_amount: base,
        increase_type: case.increase_type,
        yearly_increase: case.yearly_increase,
        total_recipient_amount,
        current_month_amount: current_rate,
        yearly_breakdown,
    }
}

// ---------------------------------------------------------------------------
// Filters
// ---------------------------------------------------------------------------

/// Only positive amounts with a description are counted.
fn filtered_other_amounts(items: &[OtherAmount]) -> Vec<OtherAmount> {
    items
        .iter()
        .filter(|oa| !oa.description.trim().is_empty() && oa.amount > Decimal::ZERO)
        .cloned()
        .collect()
}

/// Only positive amounts are counted; dates are mandatory in the typed model.
fn filtered_payments(items: &[Payment]) -> Vec<Payment> {
    items
        .iter()
        .filter(|p| p.amount > Decimal::ZERO)
        .cloned()
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PaymentReceiver;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    /// Three full calendar years, one recipient, 10% progressive increase.
    fn base_case() -> CaseRecord {
        CaseRecord {
            court_name: "Family Court Lahore".into(),
            party_a: "Mst. Ayesha Bibi".into(),
            party_b: "Muhammad Imran".into(),
            cms_no: "CMS-1042/2020".into(),
            report_generator: ReportRole::DecreeHolder,
            counsel_name: Some("Rana Asad Advocate".into()),
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

    fn first_recipient(output: &ComputationOutput<CalculatedReport>) -> &RecipientCalculation {
        &output.result.recipient_calculations[0]
    }

    // ---------------------------------------------------------------
    // 1. Progressive escalation over three full years
    // ---------------------------------------------------------------
    #[test]
    fn test_progressive_three_full_years() {
        let result = calculate(&base_case()).unwrap();
        let rec = first_recipient(&result);

        assert_eq!(rec.yearly_breakdown.len(), 3);
        let rates: Vec<Money> = rec
            .yearly_breakdown
            .iter()
            .map(|y| y.increased_amount)
            .collect();
        assert_eq!(rates, vec![dec!(10000), dec!(11000), dec!(12100)]);

        // Each segment is exactly 12 calendar months
        for y in &rec.yearly_breakdown {
            assert_eq!(y.duration_display, "12 مہینے");
        }
        assert_eq!(
            rec.total_recipient_amount,
            dec!(120000) + dec!(132000) + dec!(145200)
        );
    }

    // ---------------------------------------------------------------
    // 2. Fixed escalation adds a share of the original base each year
    // ---------------------------------------------------------------
    #[test]
    fn test_fixed_increase_uses_original_base() {
        let mut case = base_case();
        case.increase_type = IncreaseType::Fixed;
        let result = calculate(&case).unwrap();
        let rec = first_recipient(&result);

        let rates: Vec<Money> = rec
            .yearly_breakdown
            .iter()
            .map(|y| y.increased_amount)
            .collect();
        // 10000, +1000, +1000 (never 10% of the escalated rate)
        assert_eq!(rates, vec![dec!(10000), dec!(11000), dec!(12000)]);
    }

    // ---------------------------------------------------------------
    // 3. Progressive rate at segment k = base * (1 + p/100)^k
    // ---------------------------------------------------------------
    #[test]
    fn test_progressive_rate_formula() {
        let mut case = base_case();
        case.end_date = d(2025, 12, 31); // six segments
        let result = calculate(&case).unwrap();
        let rec = first_recipient(&result);

        let mut expected = dec!(10000);
        for y in &rec.yearly_breakdown {
            assert_eq!(y.increased_amount, expected);
            expected *= dec!(1.1);
        }
    }

    // ---------------------------------------------------------------
    // 4. Fixed rate at segment k = base * (1 + k * p/100)
    // ---------------------------------------------------------------
    #[test]
    fn test_fixed_rate_formula() {
        let mut case = base_case();
        case.increase_type = IncreaseType::Fixed;
        case.end_date = d(2025, 12, 31);
        let result = calculate(&case).unwrap();
        let rec = first_recipient(&result);

        for (k, y) in rec.yearly_breakdown.iter().enumerate() {
            let expected = dec!(10000) * (Decimal::ONE + Decimal::from(k as i64) * dec!(0.1));
            assert_eq!(y.increased_amount, expected);
        }
    }

    // ---------------------------------------------------------------
    // 5. Recipient total equals the sum of its segment subtotals
    // ---------------------------------------------------------------
    #[test]
    fn test_recipient_total_reaggregates() {
        let mut case = base_case();
        case.end_date = d(2023, 7, 18); // ends mid-anniversary-year
        let result = calculate(&case).unwrap();
        let rec = first_recipient(&result);

        let summed: Money = rec.yearly_breakdown.iter().map(|y| y.total_period).sum();
        assert_eq!(rec.total_recipient_amount, summed);
    }

    // ---------------------------------------------------------------
    // 6. Summary identity: final = gross + other - payments, exactly
    // ---------------------------------------------------------------
    #[test]
    fn test_summary_identity() {
        let mut case = base_case();
        case.other_amounts = vec![OtherAmount {
            description: "Dowry".into(),
            amount: dec!(50000),
        }];
        case.payments = vec![Payment {
            date: d(2021, 5, 10),
            amount: dec!(20000),
            received_by: None,
        }];
        let result = calculate(&case).unwrap();
        let s = &result.result.summary;

        assert_eq!(s.total_other_amounts, dec!(50000));
        assert_eq!(s.total_payments, dec!(20000));
        assert_eq!(
            s.total_decretal_before_payments,
            s.grand_total_maintenance + s.total_other_amounts
        );
        assert_eq!(
            s.final_outstanding_amount,
            s.total_decretal_before_payments - s.total_payments
        );
    }

    // ---------------------------------------------------------------
    // 7. Spec scenario: 10k base, 10% progressive, 2020-2022
    // ---------------------------------------------------------------
    #[test]
    fn test_three_year_scenario_total() {
        let result = calculate(&base_case()).unwrap();
        let s = &result.result.summary;

        // Exact calendar months: 12 * (10000 + 11000 + 12100)
        assert_eq!(s.grand_total_maintenance, dec!(397200));
        assert_eq!(s.final_outstanding_amount, dec!(397200));
    }

    // ---------------------------------------------------------------
    // 8. Empty other-amounts/payments leave the gross as the balance
    // ---------------------------------------------------------------
    #[test]
    fn test_empty_side_lists() {
        let result = calculate(&base_case()).unwrap();
        let s = &result.result.summary;
        assert_eq!(s.total_other_amounts, Decimal::ZERO);
        assert_eq!(s.total_payments, Decimal::ZERO);
        assert_eq!(s.final_outstanding_amount, s.grand_total_maintenance);
    }

    // ---------------------------------------------------------------
    // 9. Overpayment produces a negative balance, not a clamped zero
    // ---------------------------------------------------------------
    #[test]
    fn test_overpayment_goes_negative() {
        let mut case = base_case();
        case.payments = vec![Payment {
            date: d(2022, 1, 1),
            amount: dec!(500000),
            received_by: None,
        }];
        let result = calculate(&case).unwrap();
        assert_eq!(
            result.result.summary.final_outstanding_amount,
            dec!(397200) - dec!(500000)
        );
    }

    // ---------------------------------------------------------------
    // 10. Filters drop zero amounts and empty descriptions
    // ---------------------------------------------------------------
    #[test]
    fn test_filters_drop_invalid_entries() {
        let mut case = base_case();
        case.other_amounts = vec![
            OtherAmount {
                description: "Dowry".into(),
                amount: dec!(50000),
            },
            OtherAmount {
                description: "".into(),
                amount: dec!(9999),
            },
            OtherAmount {
                description: "Costs".into(),
                amount: dec!(0),
            },
        ];
        case.payments = vec![
            Payment {
                date: d(2021, 1, 1),
                amount: dec!(0),
                received_by: None,
            },
            Payment {
                date: d(2021, 2, 1),
                amount: dec!(1000),
                received_by: Some(PaymentReceiver::Representative),
            },
        ];
        let result = calculate(&case).unwrap();

        assert_eq!(result.result.other_amounts.len(), 1);
        assert_eq!(result.result.summary.total_other_amounts, dec!(50000));
        assert_eq!(result.result.payments.len(), 1);
        assert_eq!(result.result.summary.total_payments, dec!(1000));
    }

    // ---------------------------------------------------------------
    // 11. Partial satisfaction shifts the effective start by one day
    // ---------------------------------------------------------------
    #[test]
    fn test_partial_satisfaction_effective_start() {
        let mut case = base_case();
        case.partially_satisfied = true;
        case.partial_satisfaction_date = Some(d(2021, 6, 30));
        let result = calculate(&case).unwrap();

        let ps = result.result.partial_satisfaction.as_ref().unwrap();
        assert_eq!(ps.date, d(2021, 6, 30));
        assert_eq!(ps.effective_start_date, d(2021, 7, 1));
        assert_eq!(
            first_recipient(&result).yearly_breakdown[0].start_date,
            d(2021, 7, 1)
        );
    }

    // ---------------------------------------------------------------
    // 12. Partial satisfaction fast-forwards the rate, not the schedule
    // ---------------------------------------------------------------
    #[test]
    fn test_partial_satisfaction_rate_fast_forward() {
        let mut case = base_case();
        case.partially_satisfied = true;
        case.partial_satisfaction_date = Some(d(2021, 6, 30));
        let result = calculate(&case).unwrap();
        let rec = first_recipient(&result);

        // One whole anniversary (2021-01-01) elapsed before satisfaction:
        // the first segment already runs at the escalated 11000 rate.
        assert_eq!(rec.yearly_breakdown[0].increased_amount, dec!(11000));
        // First segment ends the day before the 2022 anniversary
        assert_eq!(rec.yearly_breakdown[0].end_date, d(2021, 12, 31));
        assert_eq!(rec.yearly_breakdown[0].duration_display, "6 مہینے");
        // Second segment escalates again on the nominal anniversary
        assert_eq!(rec.yearly_breakdown[1].increased_amount, dec!(12100));
        assert_eq!(rec.yearly_breakdown[1].start_date, d(2022, 1, 1));

        assert_eq!(
            rec.total_recipient_amount,
            dec!(11000) * dec!(6) + dec!(12100) * dec!(12)
        );
    }

    // ---------------------------------------------------------------
    // 13. Anniversaries stay anchored to the nominal start date
    // ---------------------------------------------------------------
    #[test]
    fn test_anniversary_anchored_to_nominal_start() {
        let mut case = base_case();
        case.partially_satisfied = true;
        // Satisfaction inside the first anniversary year: no escalation yet,
        // but the first segment must still end at the nominal anniversary.
        case.partial_satisfaction_date = Some(d(2020, 3, 15));
        let result = calculate(&case).unwrap();
        let rec = first_recipient(&result);

        assert_eq!(rec.yearly_breakdown[0].increased_amount, dec!(10000));
        assert_eq!(rec.yearly_breakdown[0].start_date, d(2020, 3, 16));
        assert_eq!(rec.yearly_breakdown[0].end_date, d(2020, 12, 31));
        assert_eq!(rec.yearly_breakdown[1].start_date, d(2021, 1, 1));
        assert_eq!(rec.yearly_breakdown[1].increased_amount, dec!(11000));
    }

    // ---------------------------------------------------------------
    // 14. End before effective start: empty breakdown, zero total
    // ---------------------------------------------------------------
    #[test]
    fn test_end_before_effective_start_is_defined() {
        let mut case = base_case();
        case.end_date = d(2021, 12, 31);
        case.partially_satisfied = true;
        // Effective start 2022-01-01 is past the end date
        case.partial_satisfaction_date = Some(d(2021, 12, 31));
        let result = calculate(&case).unwrap();
        let rec = first_recipient(&result);

        assert!(rec.yearly_breakdown.is_empty());
        assert_eq!(rec.total_recipient_amount, Decimal::ZERO);
        assert_eq!(result.result.summary.grand_total_maintenance, Decimal::ZERO);
    }

    // ---------------------------------------------------------------
    // 15. Empty recipient list: zero report with a warning
    // ---------------------------------------------------------------
    #[test]
    fn test_empty_recipients_zero_report() {
        let mut case = base_case();
        case.recipients.clear();
        let result = calculate(&case).unwrap();

        assert!(result.result.recipient_calculations.is_empty());
        assert_eq!(result.result.summary.grand_total_maintenance, Decimal::ZERO);
        assert!(!result.warnings.is_empty());
    }

    // ---------------------------------------------------------------
    // 16. Multiple recipients are computed independently and summed
    // ---------------------------------------------------------------
    #[test]
    fn test_multiple_recipients_sum() {
        let mut case = base_case();
        case.recipients.push(Recipient {
            name: "Sara".into(),
            relationship: "Daughter".into(),
            amount: dec!(5000),
        });
        let result = calculate(&case).unwrap();

        let totals: Vec<Money> = result
            .result
            .recipient_calculations
            .iter()
            .map(|r| r.total_recipient_amount)
            .collect();
        assert_eq!(totals[0], dec!(397200));
        assert_eq!(totals[1], dec!(198600)); // half the base, same percentages
        assert_eq!(
            result.result.summary.grand_total_maintenance,
            totals[0] + totals[1]
        );
    }

    // ---------------------------------------------------------------
    // 17. Zero increase keeps the rate flat across segments
    // ---------------------------------------------------------------
    #[test]
    fn test_zero_increase_flat_rate() {
        let mut case = base_case();
        case.yearly_increase = Decimal::ZERO;
        let result = calculate(&case).unwrap();
        let rec = first_recipient(&result);

        for y in &rec.yearly_breakdown {
            assert_eq!(y.increased_amount, dec!(10000));
        }
        assert_eq!(rec.total_recipient_amount, dec!(360000));
    }

    // ---------------------------------------------------------------
    // 18. Final partial segment is charged by the month fraction
    // ---------------------------------------------------------------
    #[test]
    fn test_final_partial_segment_fraction() {
        let mut case = base_case();
        case.end_date = d(2020, 7, 15); // 6 months + 15/31 of July
        let result = calculate(&case).unwrap();
        let rec = first_recipient(&result);

        assert_eq!(rec.yearly_breakdown.len(), 1);
        let expected = dec!(10000) * (dec!(6) + dec!(15) / dec!(31));
        assert_eq!(rec.yearly_breakdown[0].total_period, expected);
        assert_eq!(rec.yearly_breakdown[0].duration_display, "6 مہینے, 15 دن");
    }

    // ---------------------------------------------------------------
    // 19. current_month_amount reports the last escalated rate
    // ---------------------------------------------------------------
    #[test]
    fn test_current_month_amount() {
        let result = calculate(&base_case()).unwrap();
        let rec = first_recipient(&result);
        assert_eq!(rec.current_month_amount, dec!(12100));
    }

    // ---------------------------------------------------------------
    // 20. Pathological period length is rejected
    // ---------------------------------------------------------------
    #[test]
    fn test_period_cap() {
        let mut case = base_case();
        case.end_date = d(2921, 1, 1);
        let err = calculate(&case).unwrap_err();
        match err {
            DecreeError::InvalidInput { field, .. } => assert_eq!(field, "end_date"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    // ---------------------------------------------------------------
    // 21. Period display covers the nominal period, not the effective one
    // ---------------------------------------------------------------
    #[test]
    fn test_period_display_nominal() {
        let mut case = base_case();
        case.partially_satisfied = true;
        case.partial_satisfaction_date = Some(d(2021, 6, 30));
        let result = calculate(&case).unwrap();
        assert_eq!(result.result.period.period_display, "36 مہینے");
    }

    // ---------------------------------------------------------------
    // 22. Mid-year decree start segments at the anniversary, not Jan 1
    // ---------------------------------------------------------------
    #[test]
    fn test_mid_year_start_anniversaries() {
        let mut case = base_case();
        case.start_date = d(2020, 7, 15);
        case.end_date = d(2022, 7, 14);
        let result = calculate(&case).unwrap();
        let rec = first_recipient(&result);

        assert_eq!(rec.yearly_breakdown.len(), 2);
        assert_eq!(rec.yearly_breakdown[0].end_date, d(2021, 7, 14));
        assert_eq!(rec.yearly_breakdown[1].start_date, d(2021, 7, 15));
        assert_eq!(rec.yearly_breakdown[1].end_date, d(2022, 7, 14));
        assert_eq!(rec.total_recipient_amount, dec!(120000) + dec!(132000));
    }

    // ---------------------------------------------------------------
    // 23. Determinism: identical inputs produce identical reports
    // ---------------------------------------------------------------
    #[test]
    fn test_deterministic() {
        let case = base_case();
        let a = calculate(&case).unwrap();
        let b = calculate(&case).unwrap();
        assert_eq!(
            serde_json::to_value(&a.result).unwrap(),
            serde_json::to_value(&b.result).unwrap()
        );
    }
}
