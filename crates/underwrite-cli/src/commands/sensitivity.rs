use std::time::Instant;

use clap::Args;
use rust_decimal::Decimal;

use underwrite_core::projection::{build_sensitivity_matrix, MetricField, SensitivitySpec};
use underwrite_core::types::with_metadata;
use underwrite_core::{UnderwriteError, UnderwriteResult};

use super::common::AssumptionArgs;
use crate::report::Report;

/// Arguments for the sensitivity command
#[derive(Args)]
pub struct SensitivityArgs {
    #[command(flatten)]
    pub assumptions: AssumptionArgs,

    /// Metric to sweep: noi, noi-ongoing, cash-flow, cash-on-cash,
    /// dscr, cap-rate
    #[arg(long, default_value = "cash-flow")]
    pub metric: String,

    /// Rent shock per grid step, in percent
    #[arg(long, default_value = "2.5")]
    pub rent_step: Decimal,

    /// Interest shock per grid step, in basis points
    #[arg(long, default_value = "25")]
    pub rate_step: Decimal,

    /// Grid edge length (odd, at least 3)
    #[arg(long, default_value = "5")]
    pub grid: usize,
}

fn parse_metric(raw: &str) -> UnderwriteResult<MetricField> {
    let normalized = raw.trim().to_lowercase().replace('-', "_");
    MetricField::ALL
        .into_iter()
        .find(|metric| metric.key() == normalized)
        .ok_or_else(|| UnderwriteError::InvalidInput {
            field: "metric".to_string(),
            reason: format!(
                "unknown metric '{}'. Available metrics: noi, noi-ongoing, cash-flow, \
                 cash-on-cash, dscr, cap-rate",
                raw
            ),
        })
}

pub fn run_sensitivity(args: SensitivityArgs) -> UnderwriteResult<Report> {
    let metric = parse_metric(&args.metric)?;
    let (assumptions, shape_warnings) = args.assumptions.resolve()?;

    let raw_spec = SensitivitySpec {
        metric,
        rent_step_pct: args.rent_step,
        rate_step_bps: args.rate_step,
        grid_size: args.grid,
    };
    let (spec, spec_warnings) = raw_spec.normalized();

    let start = Instant::now();
    let matrix = build_sensitivity_matrix(&assumptions, &spec);

    let mut warnings = shape_warnings;
    warnings.extend(spec_warnings);
    let output = with_metadata(
        "2-Way Sensitivity (Rent x Interest Rate)",
        &assumptions,
        warnings,
        start.elapsed().as_micros() as u64,
        matrix,
    );
    Ok(Report::Sensitivity(output))
}
