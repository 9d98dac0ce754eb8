use clap::Args;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use underwrite_core::expenses::{
    derive_expense_percentages, reconcile_dollars_from_percentages, PercentCategory,
};
use underwrite_core::{UnderwriteError, UnderwriteResult};

use super::common::{print_stderr_warnings, AssumptionArgs};
use crate::report::{ExpenseReport, Report};

/// Arguments for the expenses command
#[derive(Args)]
pub struct ExpensesArgs {
    #[command(flatten)]
    pub assumptions: AssumptionArgs,

    /// Set a category's percentage and reconcile the dollar lines,
    /// e.g. --set management-salaries=6.5 (repeatable)
    #[arg(long = "set", value_name = "CATEGORY=PERCENT")]
    pub set: Vec<String>,
}

fn parse_set(spec: &str) -> UnderwriteResult<(PercentCategory, Decimal)> {
    let (raw_category, raw_percent) =
        spec.split_once('=').ok_or_else(|| UnderwriteError::InvalidInput {
            field: "set".to_string(),
            reason: format!("expected CATEGORY=PERCENT, got '{}'", spec),
        })?;

    let normalized = raw_category.trim().to_lowercase().replace('-', "_");
    let category = PercentCategory::ALL
        .into_iter()
        .find(|category| category.key() == normalized)
        .ok_or_else(|| UnderwriteError::InvalidInput {
            field: "set".to_string(),
            reason: format!(
                "unknown category '{}'. Available categories: management-salaries, \
                 vacancy-bad-debt",
                raw_category
            ),
        })?;

    let percent: Decimal =
        raw_percent.trim().parse().map_err(|_| UnderwriteError::InvalidInput {
            field: "set".to_string(),
            reason: format!("'{}' is not a number", raw_percent),
        })?;

    Ok((category, percent))
}

pub fn run_expenses(args: ExpensesArgs) -> UnderwriteResult<Report> {
    let (assumptions, shape_warnings) = args.assumptions.resolve()?;
    print_stderr_warnings(&shape_warnings);

    let mut percentages = derive_expense_percentages(&assumptions);
    let edited = !args.set.is_empty();
    for spec in &args.set {
        let (category, percent) = parse_set(spec)?;
        percentages.insert(category, percent);
    }

    let updated_lines = if edited {
        reconcile_dollars_from_percentages(&assumptions, &percentages)
    } else {
        None
    };

    Ok(Report::Expenses(ExpenseReport {
        annual_gross_rent: assumptions.gross_scheduled_rent_monthly() * dec!(12),
        percentages,
        edited,
        updated_lines,
    }))
}
