use clap::Args;
use colored::Colorize;
use rust_decimal::Decimal;

use underwrite_core::assumptions::{load_baseline, shape_issues, Assumptions, PartialAssumptions};
use underwrite_core::UnderwriteResult;

use crate::input;

/// Source document plus the dashboard-style override flags shared by
/// every command that underwrites a deal.
#[derive(Args)]
pub struct AssumptionArgs {
    /// Path to a JSON or YAML assumptions document; partial documents
    /// are merged onto the baseline (defaults to piped stdin, then the
    /// built-in baseline)
    #[arg(long)]
    pub input: Option<String>,

    /// Override the purchase price
    #[arg(long)]
    pub purchase_price: Option<Decimal>,

    /// Override the annual interest rate (e.g. 0.045)
    #[arg(long, allow_hyphen_values = true)]
    pub interest_rate: Option<Decimal>,

    /// Override the loan-to-value ratio (e.g. 0.75); the deposit moves
    /// to its complement
    #[arg(long)]
    pub ltv: Option<Decimal>,

    /// Scale every unit rent by this factor (e.g. 1.05)
    #[arg(long)]
    pub rent_scale: Option<Decimal>,

    /// Rescale the expense lines proportionally to hit this annual total
    #[arg(long)]
    pub opex_total: Option<Decimal>,
}

impl AssumptionArgs {
    /// Loads the document, merges it onto the baseline, applies the
    /// override flags and returns the working copy plus any shape
    /// warnings.
    pub fn resolve(&self) -> UnderwriteResult<(Assumptions, Vec<String>)> {
        let payload = match &self.input {
            Some(path) => Some(input::file::read_document::<PartialAssumptions>(path)?),
            None => input::stdin::read_piped::<PartialAssumptions>()?,
        };

        let baseline = load_baseline();
        let mut assumptions = match &payload {
            Some(partial) => partial.merge_into(&baseline),
            None => baseline,
        };

        if let Some(price) = self.purchase_price {
            assumptions.purchase_price = price;
        }
        if let Some(rate) = self.interest_rate {
            assumptions.interest_rate = rate;
        }
        if let Some(ltv) = self.ltv {
            assumptions.loan_to_value = Some(ltv);
            assumptions.deposit_pct = Some(Decimal::ONE - ltv);
        }
        if let Some(factor) = self.rent_scale {
            for unit in &mut assumptions.unit_mix {
                unit.monthly_rent *= factor;
            }
        }
        if let Some(target) = self.opex_total {
            apply_expense_total(&mut assumptions, target);
        }

        let warnings = shape_issues(&assumptions);
        Ok((assumptions, warnings))
    }
}

/// Rescales the expense lines proportionally to hit the target total,
/// the way the source dashboard's expense slider moved every line at
/// once. With nothing to scale the target becomes the flat override.
fn apply_expense_total(assumptions: &mut Assumptions, target: Decimal) {
    let current: Decimal = assumptions
        .operating_expenses
        .iter()
        .map(|line| line.annual_amount)
        .sum();
    if current > Decimal::ZERO {
        let factor = target / current;
        for line in &mut assumptions.operating_expenses {
            line.annual_amount *= factor;
        }
        assumptions.operating_expense_total = None;
    } else {
        assumptions.operating_expense_total = Some(target);
    }
}

/// Shape warnings go to stderr so piped stdout stays clean.
pub fn print_stderr_warnings(warnings: &[String]) {
    for warning in warnings {
        eprintln!("{}: {}", "warning".yellow().bold(), warning);
    }
}
