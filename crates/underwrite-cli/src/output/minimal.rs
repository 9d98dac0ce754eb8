use crate::report::Report;

/// Print just the headline value for each report shape: the figure a
/// script would want to capture.
pub fn print_minimal(report: &Report) {
    match report {
        Report::Underwriting(output) => println!("{}", output.result.cash_flow),
        Report::Assumptions(assumptions) => println!("{}", assumptions.purchase_price),
        Report::Monthly(points) => {
            println!("{}", points.first().map(|p| p.net_cash_flow).unwrap_or_default())
        }
        Report::Sensitivity(output) => println!("{}", output.result.base_value),
        Report::Expenses(expenses) => {
            for (category, percent) in &expenses.percentages {
                println!("{}={}", category.key(), percent);
            }
        }
        Report::Scenario(record) => println!("{}", record.id),
        Report::ScenarioList(summaries) => {
            for summary in summaries {
                println!("{}", summary.id);
            }
        }
        Report::Message(message) => println!("{}", message),
    }
}
