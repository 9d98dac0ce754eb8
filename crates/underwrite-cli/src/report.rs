use std::collections::BTreeMap;

use serde::Serialize;

use underwrite_core::assumptions::{Assumptions, ExpenseLine, ScenarioRecord};
use underwrite_core::expenses::PercentCategory;
use underwrite_core::metrics::FinanceMetrics;
use underwrite_core::projection::{MonthlyCashFlowPoint, SensitivityMatrix};
use underwrite_core::types::{ComputationOutput, Money, Percent};

/// Everything a command can hand back for rendering. Untagged so the
/// JSON renderer emits the payload itself rather than a variant wrapper.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Report {
    Underwriting(ComputationOutput<FinanceMetrics>),
    Assumptions(Assumptions),
    Monthly(Vec<MonthlyCashFlowPoint>),
    Sensitivity(ComputationOutput<SensitivityMatrix>),
    Expenses(ExpenseReport),
    Scenario(ScenarioRecord),
    ScenarioList(Vec<ScenarioSummary>),
    Message(String),
}

/// Percent view of the expense map, plus the reconciled dollar lines
/// when an edit actually moved something.
#[derive(Debug, Serialize)]
pub struct ExpenseReport {
    pub annual_gross_rent: Money,
    pub percentages: BTreeMap<PercentCategory, Percent>,
    pub edited: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_lines: Option<Vec<ExpenseLine>>,
}

/// One row of `scenario list`.
#[derive(Debug, Serialize)]
pub struct ScenarioSummary {
    pub id: String,
    pub name: String,
    pub created_at: String,
}
