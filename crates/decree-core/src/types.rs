use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Percentages as whole numbers (10 = 10%), as written in decree orders.
pub type Percent = Decimal;

/// Which party the report is being drafted for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportRole {
    DecreeHolder,
    JudgmentDebtor,
}

/// How the yearly increase is applied to a recipient's monthly rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IncreaseType {
    /// Compounding: each year's rate grows from the prior year's rate.
    Progressive,
    /// Flat: a constant percentage of the original base is added each year.
    Fixed,
}

/// Who accepted a payment on the decree holder's behalf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentReceiver {
    DecreeHolder,
    Representative,
}

/// A person the decree awards monthly maintenance to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipient {
    pub name: String,
    pub relationship: String,
    /// Monthly base amount at the decree date.
    pub amount: Money,
}

/// One-off decretal amount (dowry, litigation costs, etc.).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OtherAmount {
    pub description: String,
    pub amount: Money,
}

/// An amount already received against the decree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    pub date: NaiveDate,
    pub amount: Money,
    /// Only meaningful when the report is generated by the judgment debtor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub received_by: Option<PaymentReceiver>,
}

/// Full description of a maintenance-decree case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseRecord {
    pub court_name: String,
    pub party_a: String,
    pub party_b: String,
    pub cms_no: String,
    pub report_generator: ReportRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub counsel_name: Option<String>,
    pub start_date: NaiveDate,
    /// Inclusive end of the calculation period.
    pub end_date: NaiveDate,
    pub recipients: Vec<Recipient>,
    /// Annual increase percentage (10 = 10%). Zero when the decree is flat.
    #[serde(default)]
    pub yearly_increase: Percent,
    pub increase_type: IncreaseType,
    #[serde(default)]
    pub other_amounts: Vec<OtherAmount>,
    #[serde(default)]
    pub payments: Vec<Payment>,
    #[serde(default)]
    pub partially_satisfied: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partial_satisfaction_date: Option<NaiveDate>,
}

/// A case record as persisted by the report store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredReport {
    pub id: String,
    pub created_at: String,
    #[serde(flatten)]
    pub case: CaseRecord,
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}
