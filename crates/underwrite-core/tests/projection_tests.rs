use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use underwrite_core::assumptions::load_baseline;
use underwrite_core::metrics::calculate_metrics;
use underwrite_core::projection::{
    build_sensitivity_matrix, project_monthly_cash_flows, MetricField, SensitivitySpec,
};

#[test]
fn test_monthly_series_is_flat_and_sums_to_annual() {
    let baseline = load_baseline();
    let annual = calculate_metrics(&baseline).cash_flow;
    let points = project_monthly_cash_flows(&baseline);

    assert_eq!(points.len(), 12);
    assert_eq!(points.first().map(|p| p.month), Some(1));
    assert_eq!(points.last().map(|p| p.month), Some(12));
    assert!(points.windows(2).all(|w| w[0].net_cash_flow == w[1].net_cash_flow));

    let total: Decimal = points.iter().map(|p| p.net_cash_flow).sum();
    assert!(
        (total - annual).abs() < dec!(0.01),
        "monthly total {total} vs annual {annual}"
    );
}

#[test]
fn test_monthly_rows_divide_the_annual_figures() {
    let baseline = load_baseline();
    let metrics = calculate_metrics(&baseline);
    let first = &project_monthly_cash_flows(&baseline)[0];

    assert_eq!(first.gross_rent, metrics.gross_rent_annual / dec!(12));
    assert_eq!(first.other_income, metrics.other_income_annual / dec!(12));
    assert_eq!(first.operating_expenses, metrics.operating_expenses_annual / dec!(12));
    assert_eq!(first.debt_service, metrics.monthly_debt_service);
}

#[test]
fn test_default_sweep_centers_on_the_unshocked_deal() {
    let baseline = load_baseline();
    let spec = SensitivitySpec::default();
    let matrix = build_sensitivity_matrix(&baseline, &spec);

    let unshocked = calculate_metrics(&baseline).cash_flow;
    assert_eq!(matrix.base_position, (2, 2));
    assert_eq!(matrix.base_value, unshocked);
    assert_eq!(matrix.cells[2][2], unshocked);
    assert_eq!(matrix.rate_shifts_bps[2], Decimal::ZERO);
    assert_eq!(matrix.rent_shifts_pct[2], Decimal::ZERO);
}

#[test]
fn test_sweep_over_every_metric_field() {
    let baseline = load_baseline();
    let reference = calculate_metrics(&baseline);

    for metric in MetricField::ALL {
        let spec = SensitivitySpec { metric, grid_size: 3, ..Default::default() };
        let matrix = build_sensitivity_matrix(&baseline, &spec);
        assert_eq!(matrix.cells[1][1], metric.select(&reference), "center for {metric:?}");
    }
}

#[test]
fn test_normalized_spec_feeds_the_builder() {
    let raw = SensitivitySpec {
        metric: MetricField::Dscr,
        rent_step_pct: Decimal::ZERO,
        rate_step_bps: dec!(-10),
        grid_size: 4,
    };
    let (spec, warnings) = raw.normalized();
    assert_eq!(warnings.len(), 3);

    let matrix = build_sensitivity_matrix(&load_baseline(), &spec);
    assert_eq!(matrix.cells.len(), 5);
    assert_eq!(matrix.base_position, (2, 2));
}

#[test]
fn test_dscr_sweep_improves_as_rates_drop() {
    let matrix = build_sensitivity_matrix(
        &load_baseline(),
        &SensitivitySpec { metric: MetricField::Dscr, ..Default::default() },
    );
    let center_column = matrix.base_position.1;
    // Rows are ordered from the largest rate cut to the largest hike
    for i in 0..matrix.cells.len() - 1 {
        assert!(matrix.cells[i][center_column] > matrix.cells[i + 1][center_column]);
    }
}
