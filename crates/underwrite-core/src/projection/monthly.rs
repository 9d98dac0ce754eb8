use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::assumptions::Assumptions;
use crate::metrics::calculate_metrics;
use crate::types::Money;

/// One row of the 12-month cash-flow series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyCashFlowPoint {
    /// 1 through 12
    pub month: u32,
    pub gross_rent: Money,
    pub other_income: Money,
    pub operating_expenses: Money,
    pub debt_service: Money,
    pub net_cash_flow: Money,
}

/// Flattens the annual snapshot into twelve identical monthly rows. The
/// series is intentionally flat: no seasonality, no ramp-up, each annual
/// figure simply divided by 12. The twelve `net_cash_flow` values sum
/// back to the annual cash flow (to within division rounding).
pub fn project_monthly_cash_flows(assumptions: &Assumptions) -> Vec<MonthlyCashFlowPoint> {
    let metrics = calculate_metrics(assumptions);
    let months = dec!(12);

    let gross_rent = metrics.gross_rent_annual / months;
    let other_income = metrics.other_income_annual / months;
    let operating_expenses = metrics.operating_expenses_annual / months;
    let debt_service = metrics.debt_service_annual / months;
    let net_cash_flow = gross_rent + other_income - operating_expenses - debt_service;

    (1..=12)
        .map(|month| MonthlyCashFlowPoint {
            month,
            gross_rent,
            other_income,
            operating_expenses,
            debt_service,
            net_cash_flow,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assumptions::load_baseline;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn test_twelve_identical_rows() {
        let points = project_monthly_cash_flows(&load_baseline());
        assert_eq!(points.len(), 12);
        for (index, point) in points.iter().enumerate() {
            assert_eq!(point.month, index as u32 + 1);
            assert_eq!(point.gross_rent, points[0].gross_rent);
            assert_eq!(point.net_cash_flow, points[0].net_cash_flow);
        }
    }

    #[test]
    fn test_rows_net_their_own_components() {
        let points = project_monthly_cash_flows(&load_baseline());
        let first = &points[0];
        assert_eq!(
            first.net_cash_flow,
            first.gross_rent + first.other_income - first.operating_expenses - first.debt_service
        );
    }

    #[test]
    fn test_sum_reproduces_annual_cash_flow() {
        let baseline = load_baseline();
        let annual = calculate_metrics(&baseline).cash_flow;
        let total: Decimal = project_monthly_cash_flows(&baseline)
            .iter()
            .map(|point| point.net_cash_flow)
            .sum();
        assert!((total - annual).abs() < dec!(0.01), "total {total} vs annual {annual}");
    }

    #[test]
    fn test_unlevered_projection_has_no_debt_service() {
        let mut assumptions = load_baseline();
        assumptions.deposit_pct = Some(dec!(1));
        assumptions.loan_to_value = Some(Decimal::ZERO);
        let points = project_monthly_cash_flows(&assumptions);
        assert_eq!(points[0].debt_service, Decimal::ZERO);
        assert_eq!(
            points[0].net_cash_flow,
            points[0].gross_rent + points[0].other_income - points[0].operating_expenses
        );
    }
}
