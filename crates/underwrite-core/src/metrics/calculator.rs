use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::loan::monthly_payment;
use crate::assumptions::Assumptions;
use crate::expenses::{category_total, PercentCategory};
use crate::types::{Money, Rate};

/// One stabilized-year underwriting snapshot. Every field is recomputed
/// from scratch on each call and every value is finite; see
/// [`calculate_metrics`] for the guard rules.
///
/// Two NOI figures are carried deliberately. `noi` is the Year-1 basis
/// (management and salaries excluded, the owner-operator convention the
/// source workbook used) and feeds the cap rate; `noi_ongoing` includes
/// every expense line and feeds cash flow and DSCR.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinanceMetrics {
    pub noi: Money,
    pub noi_ongoing: Money,
    pub cash_flow: Money,
    pub cash_on_cash: Rate,
    pub dscr: Decimal,
    pub cap_rate: Rate,
    pub gross_rent_annual: Money,
    pub other_income_annual: Money,
    pub operating_expenses_annual: Money,
    pub operating_expenses_year1: Money,
    pub total_income_annual: Money,
    pub debt_service_annual: Money,
    pub monthly_debt_service: Money,
    pub equity_required: Money,
    pub total_equity_requirement: Money,
    pub total_loan: Money,
}

/// Computes the full metric set for one assumption snapshot.
///
/// Pure and infallible: malformed numeric input is clamped or treated as
/// zero at point of use, and every division guards its denominator
/// (`Decimal` panics on zero division, so the guards are load-bearing).
/// Callers may rely on the result never containing a non-finite value.
pub fn calculate_metrics(assumptions: &Assumptions) -> FinanceMetrics {
    let deposit_pct = assumptions.resolved_deposit_pct();

    let gross_rent_annual = assumptions.gross_scheduled_rent_monthly() * dec!(12);
    let other_income_annual = assumptions.other_income_monthly() * dec!(12);
    let total_income_annual = gross_rent_annual + other_income_annual;

    let operating_expenses_annual = assumptions.ongoing_operating_expenses();
    let management_amount = category_total(
        &assumptions.operating_expenses,
        PercentCategory::ManagementSalaries,
    );
    let operating_expenses_year1 = operating_expenses_annual - management_amount;

    let noi_ongoing = total_income_annual - operating_expenses_annual;
    let noi = total_income_annual - operating_expenses_year1;

    let cost_basis = assumptions.purchase_price + assumptions.broker_fee;
    let equity_required = cost_basis * deposit_pct;
    let total_equity_requirement = cost_basis * (deposit_pct + assumptions.contingency_pct);
    let effective_loan = assumptions
        .loan_amount
        .unwrap_or(cost_basis - equity_required)
        .max(Decimal::ZERO);
    let total_loan = effective_loan * (Decimal::ONE + assumptions.premium_rate.max(Decimal::ZERO));

    // The rate is deliberately not clamped below zero here; sensitivity
    // shocks may push it negative and the payment stays finite.
    let monthly_rate = assumptions.interest_rate / dec!(12);
    let periods = assumptions.amort_years.saturating_mul(12);
    let monthly_debt_service = monthly_payment(total_loan, monthly_rate, periods);
    let debt_service_annual = monthly_debt_service * dec!(12);

    let cash_flow = noi_ongoing - debt_service_annual;

    let cash_on_cash = if equity_required > Decimal::ZERO {
        cash_flow / equity_required
    } else {
        Decimal::ZERO
    };
    let dscr = if debt_service_annual > Decimal::ZERO {
        noi_ongoing / debt_service_annual
    } else {
        Decimal::ZERO
    };
    let cap_rate = if assumptions.purchase_price > Decimal::ZERO {
        noi / assumptions.purchase_price
    } else {
        Decimal::ZERO
    };

    FinanceMetrics {
        noi,
        noi_ongoing,
        cash_flow,
        cash_on_cash,
        dscr,
        cap_rate,
        gross_rent_annual,
        other_income_annual,
        operating_expenses_annual,
        operating_expenses_year1,
        total_income_annual,
        debt_service_annual,
        monthly_debt_service,
        equity_required,
        total_equity_requirement,
        total_loan,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assumptions::load_baseline;
    use rust_decimal_macros::dec;

    #[test]
    fn test_baseline_income_and_expense_lines() {
        let metrics = calculate_metrics(&load_baseline());
        assert_eq!(metrics.gross_rent_annual, dec!(211200));
        assert_eq!(metrics.other_income_annual, dec!(1920));
        assert_eq!(metrics.total_income_annual, dec!(213120));
        assert_eq!(metrics.operating_expenses_annual, dec!(63696));
        assert_eq!(metrics.operating_expenses_year1, dec!(53136));
        assert_eq!(metrics.noi, dec!(159984));
        assert_eq!(metrics.noi_ongoing, dec!(149424));
    }

    #[test]
    fn test_baseline_capital_stack() {
        let metrics = calculate_metrics(&load_baseline());
        assert_eq!(metrics.equity_required, dec!(325725.00));
        assert_eq!(metrics.total_equity_requirement, dec!(369155.00));
        // (2,171,500 - 325,725) grossed up by the 3.1% premium
        assert_eq!(metrics.total_loan, dec!(1902994.02500));
    }

    #[test]
    fn test_loan_amount_override_wins() {
        let mut assumptions = load_baseline();
        assumptions.loan_amount = Some(dec!(1000000));
        assumptions.premium_rate = Decimal::ZERO;
        let metrics = calculate_metrics(&assumptions);
        assert_eq!(metrics.total_loan, dec!(1000000));
    }

    #[test]
    fn test_negative_derived_loan_floors_at_zero() {
        let mut assumptions = load_baseline();
        assumptions.deposit_pct = Some(dec!(1));
        assumptions.loan_to_value = Some(Decimal::ZERO);
        let metrics = calculate_metrics(&assumptions);
        assert_eq!(metrics.total_loan, Decimal::ZERO);
        assert_eq!(metrics.monthly_debt_service, Decimal::ZERO);
        assert_eq!(metrics.dscr, Decimal::ZERO);
    }

    #[test]
    fn test_negative_premium_is_ignored() {
        let mut assumptions = load_baseline();
        assumptions.premium_rate = dec!(-0.5);
        let metrics = calculate_metrics(&assumptions);
        assert_eq!(metrics.total_loan, dec!(1845775.00));
    }

    #[test]
    fn test_zero_equity_cash_on_cash_is_zero() {
        let mut assumptions = load_baseline();
        assumptions.deposit_pct = None;
        assumptions.loan_to_value = Some(dec!(1));
        let metrics = calculate_metrics(&assumptions);
        assert_eq!(metrics.equity_required, Decimal::ZERO);
        assert_eq!(metrics.cash_on_cash, Decimal::ZERO);
    }

    #[test]
    fn test_zero_price_cap_rate_is_zero() {
        let mut assumptions = load_baseline();
        assumptions.purchase_price = Decimal::ZERO;
        assumptions.loan_amount = Some(dec!(500000));
        let metrics = calculate_metrics(&assumptions);
        assert_eq!(metrics.cap_rate, Decimal::ZERO);
    }

    #[test]
    fn test_expense_total_override_keeps_management_split() {
        let mut assumptions = load_baseline();
        assumptions.operating_expense_total = Some(dec!(70000));
        let metrics = calculate_metrics(&assumptions);
        assert_eq!(metrics.operating_expenses_annual, dec!(70000));
        // Year-1 still subtracts the management line's own dollars
        assert_eq!(metrics.operating_expenses_year1, dec!(59440));
    }

    #[test]
    fn test_zero_amortization_years() {
        let mut assumptions = load_baseline();
        assumptions.amort_years = 0;
        let metrics = calculate_metrics(&assumptions);
        assert_eq!(metrics.monthly_debt_service, Decimal::ZERO);
        assert_eq!(metrics.cash_flow, metrics.noi_ongoing);
        assert_eq!(metrics.dscr, Decimal::ZERO);
    }
}
