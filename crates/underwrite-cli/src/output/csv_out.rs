use std::io;

use underwrite_core::assumptions::{Assumptions, ScenarioRecord};
use underwrite_core::metrics::FinanceMetrics;
use underwrite_core::projection::{MonthlyCashFlowPoint, SensitivityMatrix};

use crate::report::{ExpenseReport, Report, ScenarioSummary};

/// Write the report as CSV to stdout. Numbers are raw decimals; grids
/// and series become one row per line item.
pub fn print_csv(report: &Report) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    match report {
        Report::Underwriting(output) => write_metrics(&mut wtr, &output.result),
        Report::Assumptions(assumptions) => write_assumptions(&mut wtr, assumptions),
        Report::Monthly(points) => write_monthly(&mut wtr, points),
        Report::Sensitivity(output) => write_matrix(&mut wtr, &output.result),
        Report::Expenses(expenses) => write_expenses(&mut wtr, expenses),
        Report::Scenario(record) => write_scenario(&mut wtr, record),
        Report::ScenarioList(summaries) => write_scenario_list(&mut wtr, summaries),
        Report::Message(message) => {
            let _ = wtr.write_record([message.as_str()]);
        }
    }

    let _ = wtr.flush();
}

type Writer<'a> = csv::Writer<io::StdoutLock<'a>>;

fn write_metrics(wtr: &mut Writer<'_>, metrics: &FinanceMetrics) {
    let _ = wtr.write_record(["field", "value"]);
    let rows = [
        ("noi", metrics.noi),
        ("noi_ongoing", metrics.noi_ongoing),
        ("cash_flow", metrics.cash_flow),
        ("cash_on_cash", metrics.cash_on_cash),
        ("dscr", metrics.dscr),
        ("cap_rate", metrics.cap_rate),
        ("gross_rent_annual", metrics.gross_rent_annual),
        ("other_income_annual", metrics.other_income_annual),
        ("operating_expenses_annual", metrics.operating_expenses_annual),
        ("operating_expenses_year1", metrics.operating_expenses_year1),
        ("total_income_annual", metrics.total_income_annual),
        ("debt_service_annual", metrics.debt_service_annual),
        ("monthly_debt_service", metrics.monthly_debt_service),
        ("equity_required", metrics.equity_required),
        ("total_equity_requirement", metrics.total_equity_requirement),
        ("total_loan", metrics.total_loan),
    ];
    for (field, value) in rows {
        let _ = wtr.write_record([field, &value.to_string()]);
    }
}

fn write_assumptions(wtr: &mut Writer<'_>, assumptions: &Assumptions) {
    let _ = wtr.write_record(["field", "value"]);
    let _ = wtr.write_record(["purchase_price", &assumptions.purchase_price.to_string()]);
    let _ = wtr.write_record(["broker_fee", &assumptions.broker_fee.to_string()]);
    let _ = wtr.write_record([
        "deposit_pct",
        &assumptions.deposit_pct.map(|d| d.to_string()).unwrap_or_default(),
    ]);
    let _ = wtr.write_record([
        "loan_to_value",
        &assumptions.loan_to_value.map(|l| l.to_string()).unwrap_or_default(),
    ]);
    let _ = wtr.write_record([
        "loan_amount",
        &assumptions.loan_amount.map(|l| l.to_string()).unwrap_or_default(),
    ]);
    let _ = wtr.write_record(["contingency_pct", &assumptions.contingency_pct.to_string()]);
    let _ = wtr.write_record(["interest_rate", &assumptions.interest_rate.to_string()]);
    let _ = wtr.write_record(["amort_years", &assumptions.amort_years.to_string()]);
    let _ = wtr.write_record(["premium_rate", &assumptions.premium_rate.to_string()]);
    let _ = wtr.write_record([
        "operating_expense_total",
        &assumptions
            .operating_expense_total
            .map(|t| t.to_string())
            .unwrap_or_default(),
    ]);
    let _ = wtr.write_record([
        "unit_mix",
        &serde_json::to_string(&assumptions.unit_mix).unwrap_or_default(),
    ]);
    let _ = wtr.write_record([
        "other_income_items",
        &serde_json::to_string(&assumptions.other_income_items).unwrap_or_default(),
    ]);
    let _ = wtr.write_record([
        "operating_expenses",
        &serde_json::to_string(&assumptions.operating_expenses).unwrap_or_default(),
    ]);
}

fn write_monthly(wtr: &mut Writer<'_>, points: &[MonthlyCashFlowPoint]) {
    let _ = wtr.write_record([
        "month",
        "gross_rent",
        "other_income",
        "operating_expenses",
        "debt_service",
        "net_cash_flow",
    ]);
    for point in points {
        let _ = wtr.write_record([
            point.month.to_string(),
            point.gross_rent.to_string(),
            point.other_income.to_string(),
            point.operating_expenses.to_string(),
            point.debt_service.to_string(),
            point.net_cash_flow.to_string(),
        ]);
    }
}

fn write_matrix(wtr: &mut Writer<'_>, matrix: &SensitivityMatrix) {
    // First column is the rate axis; remaining headers are rent shifts
    let mut header = vec!["rate_shift_bps".to_string()];
    header.extend(matrix.rent_shifts_pct.iter().map(|shift| shift.to_string()));
    let _ = wtr.write_record(&header);

    for (row_index, row) in matrix.cells.iter().enumerate() {
        let mut record = vec![matrix.rate_shifts_bps[row_index].to_string()];
        record.extend(row.iter().map(|cell| cell.to_string()));
        let _ = wtr.write_record(&record);
    }
}

fn write_expenses(wtr: &mut Writer<'_>, report: &ExpenseReport) {
    let _ = wtr.write_record(["category", "percent"]);
    for (category, percent) in &report.percentages {
        let _ = wtr.write_record([category.key(), &percent.to_string()]);
    }
    if let Some(lines) = &report.updated_lines {
        let _ = wtr.write_record(["label", "annual_amount"]);
        for line in lines {
            let _ = wtr.write_record([line.label.as_str(), &line.annual_amount.to_string()]);
        }
    }
}

fn write_scenario(wtr: &mut Writer<'_>, record: &ScenarioRecord) {
    let _ = wtr.write_record(["field", "value"]);
    let _ = wtr.write_record(["id", record.id.as_str()]);
    let _ = wtr.write_record(["name", record.name.as_str()]);
    let _ = wtr.write_record(["created_at", &record.created_at.to_rfc3339()]);
    let _ = wtr.write_record([
        "assumptions",
        &serde_json::to_string(&record.assumptions).unwrap_or_default(),
    ]);
}

fn write_scenario_list(wtr: &mut Writer<'_>, summaries: &[ScenarioSummary]) {
    let _ = wtr.write_record(["id", "name", "created_at"]);
    for summary in summaries {
        let _ = wtr.write_record([
            summary.id.as_str(),
            summary.name.as_str(),
            summary.created_at.as_str(),
        ]);
    }
}
