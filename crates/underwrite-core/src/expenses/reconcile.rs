use std::collections::BTreeMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::labels::{category_for, category_total, PercentCategory};
use crate::assumptions::{Assumptions, ExpenseLine};
use crate::types::Percent;

/// Minimum absolute dollar movement before a reconciled line is written
/// back. Anything smaller is treated as converged, which keeps a
/// percent-edit/dollar-recompute loop from oscillating on rounding noise.
const RECONCILE_THRESHOLD: Decimal = dec!(0.01);

/// Percent view of the percent-denominated expense categories:
/// `category -> dollars / annual gross rent * 100`. A category is present
/// only when at least one expense line matches it, and the whole map is
/// empty when gross rent is non-positive (there is nothing meaningful to
/// divide by, so callers keep their own defaults).
pub fn derive_expense_percentages(assumptions: &Assumptions) -> BTreeMap<PercentCategory, Percent> {
    let annual_rent = assumptions.gross_scheduled_rent_monthly() * dec!(12);
    let mut percentages = BTreeMap::new();
    if annual_rent <= Decimal::ZERO {
        return percentages;
    }

    for category in PercentCategory::ALL {
        let has_line = assumptions
            .operating_expenses
            .iter()
            .any(|line| category_for(&line.label) == Some(category));
        if has_line {
            let dollars = category_total(&assumptions.operating_expenses, category);
            percentages.insert(category, dollars / annual_rent * dec!(100));
        }
    }

    percentages
}

/// Pushes an edited percent view back into dollar space: every expense
/// line matching a category in the map is recomputed as
/// `percent / 100 * annual gross rent`. A line is only rewritten when it
/// moves by more than [`RECONCILE_THRESHOLD`]; if nothing moves, returns
/// `None` (repeated application with unchanged rent and percentages is a
/// no-op).
pub fn reconcile_dollars_from_percentages(
    assumptions: &Assumptions,
    percentages: &BTreeMap<PercentCategory, Percent>,
) -> Option<Vec<ExpenseLine>> {
    let annual_rent = assumptions.gross_scheduled_rent_monthly() * dec!(12);
    if annual_rent <= Decimal::ZERO {
        return None;
    }

    let mut lines = assumptions.operating_expenses.clone();
    let mut changed = false;
    for line in &mut lines {
        let Some(category) = category_for(&line.label) else {
            continue;
        };
        let Some(percent) = percentages.get(&category) else {
            continue;
        };
        let target = *percent / dec!(100) * annual_rent;
        if (target - line.annual_amount).abs() > RECONCILE_THRESHOLD {
            line.annual_amount = target;
            changed = true;
        }
    }

    if changed {
        Some(lines)
    } else {
        None
    }
}
