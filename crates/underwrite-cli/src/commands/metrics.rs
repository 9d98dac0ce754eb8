use clap::Args;

use underwrite_core::metrics::underwrite;
use underwrite_core::UnderwriteResult;

use super::common::AssumptionArgs;
use crate::report::Report;

/// Arguments for the metrics command
#[derive(Args)]
pub struct MetricsArgs {
    #[command(flatten)]
    pub assumptions: AssumptionArgs,
}

pub fn run_metrics(args: MetricsArgs) -> UnderwriteResult<Report> {
    let (assumptions, shape_warnings) = args.assumptions.resolve()?;
    let mut output = underwrite(&assumptions);

    // Shape problems lead; they often explain odd advisory readings
    let mut warnings = shape_warnings;
    warnings.append(&mut output.warnings);
    output.warnings = warnings;

    Ok(Report::Underwriting(output))
}
