use clap::Args;

use underwrite_core::projection::project_monthly_cash_flows;
use underwrite_core::UnderwriteResult;

use super::common::{print_stderr_warnings, AssumptionArgs};
use crate::report::Report;

/// Arguments for the monthly projection command
#[derive(Args)]
pub struct MonthlyArgs {
    #[command(flatten)]
    pub assumptions: AssumptionArgs,
}

pub fn run_monthly(args: MonthlyArgs) -> UnderwriteResult<Report> {
    let (assumptions, warnings) = args.assumptions.resolve()?;
    print_stderr_warnings(&warnings);
    Ok(Report::Monthly(project_monthly_cash_flows(&assumptions)))
}
