use std::time::Instant;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::calculator::{calculate_metrics, FinanceMetrics};
use crate::assumptions::Assumptions;
use crate::types::{with_metadata, ComputationOutput};

/// Runs the calculator and wraps the result in the standard output
/// envelope: methodology, echoed assumptions, advisory warnings and
/// timing metadata. The warnings never change the numbers; they flag
/// readings a lender or buyer would question.
pub fn underwrite(assumptions: &Assumptions) -> ComputationOutput<FinanceMetrics> {
    let start = Instant::now();
    let metrics = calculate_metrics(assumptions);
    let warnings = advisory_warnings(assumptions, &metrics);
    with_metadata(
        "Stabilized-Year Underwriting (NOI / DSCR / Cash-on-Cash)",
        assumptions,
        warnings,
        start.elapsed().as_micros() as u64,
        metrics,
    )
}

fn advisory_warnings(assumptions: &Assumptions, metrics: &FinanceMetrics) -> Vec<String> {
    let mut warnings = Vec::new();

    if metrics.dscr > Decimal::ZERO && metrics.dscr < dec!(1.2) {
        warnings.push(format!(
            "DSCR of {:.2} is below 1.20x — lender covenant risk",
            metrics.dscr
        ));
    }

    let ltv = assumptions.resolved_loan_to_value();
    if ltv > dec!(0.80) && assumptions.premium_rate <= Decimal::ZERO {
        warnings.push(format!(
            "LTV of {:.1}% exceeds 80% without an insurance premium — most lenders will require default insurance",
            ltv * dec!(100)
        ));
    }

    if assumptions.purchase_price > Decimal::ZERO
        && (metrics.cap_rate < dec!(0.03) || metrics.cap_rate > dec!(0.12))
    {
        warnings.push(format!(
            "Cap rate of {:.2}% is outside the typical 3% to 12% band — check price and income inputs",
            metrics.cap_rate * dec!(100)
        ));
    }

    if metrics.cash_flow < Decimal::ZERO {
        warnings.push(format!(
            "Negative annual cash flow of {:.2} — income does not cover debt service",
            metrics.cash_flow
        ));
    }

    warnings
}
