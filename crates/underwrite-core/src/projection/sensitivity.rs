use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::assumptions::Assumptions;
use crate::metrics::{calculate_metrics, FinanceMetrics};

pub const DEFAULT_RENT_STEP_PCT: Decimal = dec!(2.5);
pub const DEFAULT_RATE_STEP_BPS: Decimal = dec!(25);
pub const DEFAULT_GRID_SIZE: usize = 5;

/// Which calculator output a sensitivity sweep records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricField {
    Noi,
    NoiOngoing,
    CashFlow,
    CashOnCash,
    Dscr,
    CapRate,
}

impl MetricField {
    pub const ALL: [MetricField; 6] = [
        MetricField::Noi,
        MetricField::NoiOngoing,
        MetricField::CashFlow,
        MetricField::CashOnCash,
        MetricField::Dscr,
        MetricField::CapRate,
    ];

    pub fn select(&self, metrics: &FinanceMetrics) -> Decimal {
        match self {
            MetricField::Noi => metrics.noi,
            MetricField::NoiOngoing => metrics.noi_ongoing,
            MetricField::CashFlow => metrics.cash_flow,
            MetricField::CashOnCash => metrics.cash_on_cash,
            MetricField::Dscr => metrics.dscr,
            MetricField::CapRate => metrics.cap_rate,
        }
    }

    /// Stable machine key, matching the serde representation
    pub fn key(&self) -> &'static str {
        match self {
            MetricField::Noi => "noi",
            MetricField::NoiOngoing => "noi_ongoing",
            MetricField::CashFlow => "cash_flow",
            MetricField::CashOnCash => "cash_on_cash",
            MetricField::Dscr => "dscr",
            MetricField::CapRate => "cap_rate",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MetricField::Noi => "NOI (Year 1)",
            MetricField::NoiOngoing => "NOI (Ongoing)",
            MetricField::CashFlow => "Annual Cash Flow",
            MetricField::CashOnCash => "Cash-on-Cash Return",
            MetricField::Dscr => "DSCR",
            MetricField::CapRate => "Cap Rate",
        }
    }
}

/// Sweep parameters: step sizes for the two shock axes and the grid edge
/// length. [`build_sensitivity_matrix`] assumes strictly positive steps
/// and an odd grid of at least 3; callers clean raw input through
/// [`SensitivitySpec::normalized`] first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensitivitySpec {
    pub metric: MetricField,
    /// Rent shock per grid step, in percent (2.5 means 2.5%)
    pub rent_step_pct: Decimal,
    /// Interest shock per grid step, in basis points
    pub rate_step_bps: Decimal,
    pub grid_size: usize,
}

impl Default for SensitivitySpec {
    fn default() -> Self {
        Self {
            metric: MetricField::CashFlow,
            rent_step_pct: DEFAULT_RENT_STEP_PCT,
            rate_step_bps: DEFAULT_RATE_STEP_BPS,
            grid_size: DEFAULT_GRID_SIZE,
        }
    }
}

impl SensitivitySpec {
    /// Replaces unusable parameters with workable ones: non-positive
    /// steps fall back to the defaults, and the grid is bumped to the
    /// next odd size >= 3 so a center cell exists. Each substitution is
    /// reported as a warning string for the output envelope.
    pub fn normalized(&self) -> (Self, Vec<String>) {
        let mut spec = self.clone();
        let mut warnings = Vec::new();

        if spec.rent_step_pct <= Decimal::ZERO {
            warnings.push(format!(
                "Rent step of {}% is not positive; using {}%",
                spec.rent_step_pct, DEFAULT_RENT_STEP_PCT
            ));
            spec.rent_step_pct = DEFAULT_RENT_STEP_PCT;
        }
        if spec.rate_step_bps <= Decimal::ZERO {
            warnings.push(format!(
                "Rate step of {} bps is not positive; using {} bps",
                spec.rate_step_bps, DEFAULT_RATE_STEP_BPS
            ));
            spec.rate_step_bps = DEFAULT_RATE_STEP_BPS;
        }
        if spec.grid_size < 3 {
            warnings.push(format!("Grid size {} is too small; using 3", spec.grid_size));
            spec.grid_size = 3;
        } else if spec.grid_size % 2 == 0 {
            warnings.push(format!(
                "Grid size {} has no center cell; using {}",
                spec.grid_size,
                spec.grid_size + 1
            ));
            spec.grid_size += 1;
        }

        (spec, warnings)
    }
}

/// Two-way sensitivity table. Rows follow the interest-rate axis
/// (`rate_shifts_bps`), columns the rent axis (`rent_shifts_pct`); both
/// shock vectors are symmetric around zero. `cells[base_position.0]
/// [base_position.1]` is the unshocked evaluation, repeated in
/// `base_value` for convenience.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensitivityMatrix {
    pub metric: MetricField,
    pub rate_shifts_bps: Vec<Decimal>,
    pub rent_shifts_pct: Vec<Decimal>,
    pub cells: Vec<Vec<Decimal>>,
    pub base_value: Decimal,
    pub base_position: (usize, usize),
}

/// Evaluates the metric over an N x N grid of shocked assumption copies.
/// Each cell scales every unit rent by `(1 + rent_shift/100)` and adds
/// `rate_shift/10000` to the interest rate, then runs the full
/// calculator. The cells are independent evaluations of private clones;
/// nothing is shared between them.
pub fn build_sensitivity_matrix(
    assumptions: &Assumptions,
    spec: &SensitivitySpec,
) -> SensitivityMatrix {
    debug_assert!(spec.rent_step_pct > Decimal::ZERO);
    debug_assert!(spec.rate_step_bps > Decimal::ZERO);
    debug_assert!(spec.grid_size >= 3 && spec.grid_size % 2 == 1);

    let size = spec.grid_size;
    let half = (size / 2) as i64;
    let rate_shifts_bps: Vec<Decimal> = (0..size)
        .map(|i| Decimal::from(i as i64 - half) * spec.rate_step_bps)
        .collect();
    let rent_shifts_pct: Vec<Decimal> = (0..size)
        .map(|j| Decimal::from(j as i64 - half) * spec.rent_step_pct)
        .collect();

    let mut cells = Vec::with_capacity(size);
    for rate_shift in &rate_shifts_bps {
        let mut row = Vec::with_capacity(size);
        for rent_shift in &rent_shifts_pct {
            let mut shocked = assumptions.clone();
            let rent_factor = Decimal::ONE + *rent_shift / dec!(100);
            for unit in &mut shocked.unit_mix {
                unit.monthly_rent *= rent_factor;
            }
            shocked.interest_rate += *rate_shift / dec!(10000);
            row.push(spec.metric.select(&calculate_metrics(&shocked)));
        }
        cells.push(row);
    }

    let base_position = (size / 2, size / 2);
    let base_value = cells[base_position.0][base_position.1];

    SensitivityMatrix {
        metric: spec.metric,
        rate_shifts_bps,
        rent_shifts_pct,
        cells,
        base_value,
        base_position,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assumptions::load_baseline;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_spec_normalizes_clean() {
        let (spec, warnings) = SensitivitySpec::default().normalized();
        assert_eq!(spec, SensitivitySpec::default());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_bad_steps_fall_back_to_defaults() {
        let raw = SensitivitySpec {
            rent_step_pct: dec!(-1),
            rate_step_bps: Decimal::ZERO,
            ..Default::default()
        };
        let (spec, warnings) = raw.normalized();
        assert_eq!(spec.rent_step_pct, DEFAULT_RENT_STEP_PCT);
        assert_eq!(spec.rate_step_bps, DEFAULT_RATE_STEP_BPS);
        assert_eq!(warnings.len(), 2);
    }

    #[test]
    fn test_grid_size_becomes_odd_and_at_least_three() {
        let tiny = SensitivitySpec { grid_size: 0, ..Default::default() };
        assert_eq!(tiny.normalized().0.grid_size, 3);

        let even = SensitivitySpec { grid_size: 4, ..Default::default() };
        let (spec, warnings) = even.normalized();
        assert_eq!(spec.grid_size, 5);
        assert!(warnings[0].contains("no center cell"));
    }

    #[test]
    fn test_matrix_shape_and_shift_vectors() {
        let matrix = build_sensitivity_matrix(&load_baseline(), &SensitivitySpec::default());
        assert_eq!(matrix.cells.len(), 5);
        assert!(matrix.cells.iter().all(|row| row.len() == 5));
        assert_eq!(matrix.rate_shifts_bps, vec![dec!(-50), dec!(-25), dec!(0), dec!(25), dec!(50)]);
        assert_eq!(
            matrix.rent_shifts_pct,
            vec![dec!(-5.0), dec!(-2.5), dec!(0), dec!(2.5), dec!(5.0)]
        );
        assert_eq!(matrix.base_position, (2, 2));
    }

    #[test]
    fn test_center_cell_equals_unshocked_metric() {
        let baseline = load_baseline();
        let spec = SensitivitySpec::default();
        let matrix = build_sensitivity_matrix(&baseline, &spec);
        let unshocked = spec.metric.select(&calculate_metrics(&baseline));
        assert_eq!(matrix.cells[2][2], unshocked);
        assert_eq!(matrix.base_value, unshocked);
    }

    #[test]
    fn test_cash_flow_moves_with_the_axes() {
        let matrix = build_sensitivity_matrix(&load_baseline(), &SensitivitySpec::default());
        // More rent, more cash flow: strictly increasing along each row
        for row in &matrix.cells {
            for pair in row.windows(2) {
                assert!(pair[0] < pair[1]);
            }
        }
        // More interest, less cash flow: strictly decreasing down each column
        for column in 0..5 {
            for i in 0..4 {
                assert!(matrix.cells[i][column] > matrix.cells[i + 1][column]);
            }
        }
    }

    #[test]
    fn test_metric_selection() {
        let metrics = calculate_metrics(&load_baseline());
        assert_eq!(MetricField::Noi.select(&metrics), metrics.noi);
        assert_eq!(MetricField::Dscr.select(&metrics), metrics.dscr);
        assert_eq!(MetricField::CapRate.select(&metrics), metrics.cap_rate);
    }
}
