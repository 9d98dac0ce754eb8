use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tabled::{builder::Builder, Table};

use underwrite_core::assumptions::{Assumptions, ExpenseLine, ScenarioRecord};
use underwrite_core::metrics::FinanceMetrics;
use underwrite_core::projection::{MetricField, MonthlyCashFlowPoint, SensitivityMatrix};
use underwrite_core::types::ComputationOutput;

use crate::report::{ExpenseReport, Report, ScenarioSummary};

/// Render the report as tables using the tabled crate.
pub fn print_table(report: &Report) {
    match report {
        Report::Underwriting(output) => print_underwriting(output),
        Report::Assumptions(assumptions) => print_assumptions(assumptions),
        Report::Monthly(points) => print_monthly(points),
        Report::Sensitivity(output) => print_sensitivity(output),
        Report::Expenses(expenses) => print_expenses(expenses),
        Report::Scenario(record) => print_scenario(record),
        Report::ScenarioList(summaries) => print_scenario_list(summaries),
        Report::Message(message) => println!("{}", message),
    }
}

fn print_underwriting(output: &ComputationOutput<FinanceMetrics>) {
    let metrics = &output.result;
    let mut builder = Builder::default();
    builder.push_record(["Metric", "Value"]);
    builder.push_record(["Gross Rent (Annual)", &money(metrics.gross_rent_annual)]);
    builder.push_record(["Other Income (Annual)", &money(metrics.other_income_annual)]);
    builder.push_record(["Total Income (Annual)", &money(metrics.total_income_annual)]);
    builder.push_record([
        "Operating Expenses (Ongoing)",
        &money(metrics.operating_expenses_annual),
    ]);
    builder.push_record([
        "Operating Expenses (Year 1)",
        &money(metrics.operating_expenses_year1),
    ]);
    builder.push_record(["NOI (Year 1)", &money(metrics.noi)]);
    builder.push_record(["NOI (Ongoing)", &money(metrics.noi_ongoing)]);
    builder.push_record(["Monthly Debt Service", &money(metrics.monthly_debt_service)]);
    builder.push_record(["Annual Debt Service", &money(metrics.debt_service_annual)]);
    builder.push_record(["Annual Cash Flow", &money(metrics.cash_flow)]);
    builder.push_record(["Cash-on-Cash Return", &percent(metrics.cash_on_cash)]);
    builder.push_record(["DSCR", &ratio(metrics.dscr)]);
    builder.push_record(["Cap Rate", &percent(metrics.cap_rate)]);
    builder.push_record(["Equity Required", &money(metrics.equity_required)]);
    builder.push_record([
        "Total Equity Requirement",
        &money(metrics.total_equity_requirement),
    ]);
    builder.push_record(["Total Loan", &money(metrics.total_loan)]);
    println!("{}", Table::from(builder));

    print_warnings(&output.warnings);
    println!("\nMethodology: {}", output.methodology);
}

fn print_assumptions(assumptions: &Assumptions) {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    builder.push_record(["Purchase Price", &money(assumptions.purchase_price)]);
    builder.push_record(["Broker Fee", &money(assumptions.broker_fee)]);
    builder.push_record(["Deposit", &percent(assumptions.resolved_deposit_pct())]);
    builder.push_record(["Loan-to-Value", &percent(assumptions.resolved_loan_to_value())]);
    if let Some(loan) = assumptions.loan_amount {
        builder.push_record(["Loan Amount Override", &money(loan)]);
    }
    builder.push_record(["Contingency", &percent(assumptions.contingency_pct)]);
    builder.push_record(["Interest Rate", &percent(assumptions.interest_rate)]);
    builder.push_record(["Amortization", &format!("{} years", assumptions.amort_years)]);
    builder.push_record(["Insurance Premium", &percent(assumptions.premium_rate)]);
    if let Some(total) = assumptions.operating_expense_total {
        builder.push_record(["Expense Total Override", &money(total)]);
    }
    println!("{}", Table::from(builder));

    if !assumptions.unit_mix.is_empty() {
        println!("\nUnit Mix:");
        let mut builder = Builder::default();
        builder.push_record(["Name", "Units", "Bedrooms", "Monthly Rent"]);
        for unit in &assumptions.unit_mix {
            builder.push_record([
                unit.name.as_str(),
                &unit.units.to_string(),
                &unit.bedrooms.to_string(),
                &money(unit.monthly_rent),
            ]);
        }
        println!("{}", Table::from(builder));
    }

    if !assumptions.other_income_items.is_empty() {
        println!("\nOther Income:");
        let mut builder = Builder::default();
        builder.push_record(["Name", "Units", "Usage", "Monthly Amount"]);
        for item in &assumptions.other_income_items {
            builder.push_record([
                item.name.as_str(),
                &item.units.to_string(),
                &percent(item.usage),
                &money(item.monthly_amount),
            ]);
        }
        println!("{}", Table::from(builder));
    }

    if !assumptions.operating_expenses.is_empty() {
        println!("\nOperating Expenses:");
        print_expense_lines(&assumptions.operating_expenses);
    }
}

fn print_expense_lines(lines: &[ExpenseLine]) {
    let mut builder = Builder::default();
    builder.push_record(["Label", "Annual Amount"]);
    for line in lines {
        builder.push_record([line.label.as_str(), &money(line.annual_amount)]);
    }
    println!("{}", Table::from(builder));
}

fn print_monthly(points: &[MonthlyCashFlowPoint]) {
    let mut builder = Builder::default();
    builder.push_record([
        "Month",
        "Gross Rent",
        "Other Income",
        "Operating Expenses",
        "Debt Service",
        "Net Cash Flow",
    ]);
    for point in points {
        builder.push_record([
            point.month.to_string(),
            money(point.gross_rent),
            money(point.other_income),
            money(point.operating_expenses),
            money(point.debt_service),
            money(point.net_cash_flow),
        ]);
    }
    println!("{}", Table::from(builder));
}

fn print_sensitivity(output: &ComputationOutput<SensitivityMatrix>) {
    let matrix = &output.result;
    println!(
        "{} sensitivity (base: {})",
        matrix.metric.display_name(),
        metric_value(matrix.metric, matrix.base_value)
    );

    let mut builder = Builder::default();
    let mut header = vec!["Rate \\ Rent".to_string()];
    header.extend(matrix.rent_shifts_pct.iter().map(|shift| format!("{}%", signed(*shift))));
    builder.push_record(header);

    for (row_index, row) in matrix.cells.iter().enumerate() {
        let mut record = vec![format!("{} bps", signed(matrix.rate_shifts_bps[row_index]))];
        record.extend(row.iter().map(|cell| metric_value(matrix.metric, *cell)));
        builder.push_record(record);
    }
    println!("{}", Table::from(builder));

    print_warnings(&output.warnings);
}

fn print_expenses(report: &ExpenseReport) {
    println!("Annual gross rent: {}", money(report.annual_gross_rent));

    if report.percentages.is_empty() {
        println!("(no percent-denominated expense lines)");
    } else {
        let mut builder = Builder::default();
        builder.push_record(["Category", "Percent", "Annual Dollars"]);
        for (category, percent_value) in &report.percentages {
            let dollars = *percent_value / dec!(100) * report.annual_gross_rent;
            builder.push_record([
                category.display_name(),
                &format!("{:.2}%", percent_value),
                &money(dollars),
            ]);
        }
        println!("{}", Table::from(builder));
    }

    match &report.updated_lines {
        Some(lines) => {
            println!("\nReconciled expense lines:");
            print_expense_lines(lines);
        }
        None if report.edited => {
            println!("\nNo expense line moved by more than a cent.");
        }
        None => {}
    }
}

fn print_scenario(record: &ScenarioRecord) {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    builder.push_record(["Id", record.id.as_str()]);
    builder.push_record(["Name", record.name.as_str()]);
    builder.push_record(["Created", &record.created_at.to_rfc3339()]);
    println!("{}", Table::from(builder));
    println!();
    print_assumptions(&record.assumptions);
}

fn print_scenario_list(summaries: &[ScenarioSummary]) {
    if summaries.is_empty() {
        println!("(no saved scenarios)");
        return;
    }
    let mut builder = Builder::default();
    builder.push_record(["Id", "Name", "Created"]);
    for summary in summaries {
        builder.push_record([
            summary.id.as_str(),
            summary.name.as_str(),
            summary.created_at.as_str(),
        ]);
    }
    println!("{}", Table::from(builder));
}

fn print_warnings(warnings: &[String]) {
    if warnings.is_empty() {
        return;
    }
    println!("\nWarnings:");
    for warning in warnings {
        println!("  - {}", warning);
    }
}

/// Currency with thousands separators, e.g. "-$6,394.36"
fn money(value: Decimal) -> String {
    let rounded = value.round_dp(2);
    let negative = rounded < Decimal::ZERO;
    let text = format!("{:.2}", rounded.abs());
    let (whole, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (index, digit) in whole.chars().enumerate() {
        if index > 0 && (whole.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    if negative {
        format!("-${}.{}", grouped, cents)
    } else {
        format!("${}.{}", grouped, cents)
    }
}

/// Rate rendered as a percentage, e.g. "7.44%"
fn percent(value: Decimal) -> String {
    format!("{:.2}%", value * dec!(100))
}

fn ratio(value: Decimal) -> String {
    format!("{:.2}x", value)
}

fn signed(value: Decimal) -> String {
    if value > Decimal::ZERO {
        format!("+{}", value)
    } else {
        value.to_string()
    }
}

fn metric_value(metric: MetricField, value: Decimal) -> String {
    match metric {
        MetricField::Noi | MetricField::NoiOngoing | MetricField::CashFlow => money(value),
        MetricField::CashOnCash | MetricField::CapRate => percent(value),
        MetricField::Dscr => ratio(value),
    }
}
