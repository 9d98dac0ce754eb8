use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::model::{Assumptions, ExpenseLine, OtherIncomeItem, UnitAssumption};
use crate::types::{Money, Rate};

/// Tolerance for the deposit/LTV complement check
const COMPLEMENT_TOLERANCE: Decimal = dec!(0.0001);

/// An assumption document where any subset of fields may be present
/// (scenario files, piped payloads, extracted screenshots). Filled out
/// against a known-good baseline via [`PartialAssumptions::merge_into`]
/// before the calculator ever sees it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialAssumptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_price: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub broker_fee: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deposit_pct: Option<Rate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loan_to_value: Option<Rate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loan_amount: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contingency_pct: Option<Rate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interest_rate: Option<Rate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amort_years: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub premium_rate: Option<Rate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operating_expenses: Option<Vec<ExpenseLine>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operating_expense_total: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_mix: Option<Vec<UnitAssumption>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_income_items: Option<Vec<OtherIncomeItem>>,
}

impl PartialAssumptions {
    /// Fills gaps from the baseline, field by field. Two wrinkles:
    ///
    /// * `deposit_pct` and `loan_to_value` move as a pair. If the payload
    ///   sets either one, the baseline's values for both are discarded so
    ///   the absent half is re-derived as the complement instead of being
    ///   paired with a stale figure.
    /// * An empty `unit_mix` counts as absent; the merged result always
    ///   carries at least the baseline's rent roll.
    pub fn merge_into(&self, baseline: &Assumptions) -> Assumptions {
        let (deposit_pct, loan_to_value) =
            if self.deposit_pct.is_some() || self.loan_to_value.is_some() {
                (self.deposit_pct, self.loan_to_value)
            } else {
                (baseline.deposit_pct, baseline.loan_to_value)
            };

        let unit_mix = match &self.unit_mix {
            Some(mix) if !mix.is_empty() => mix.clone(),
            _ => baseline.unit_mix.clone(),
        };

        Assumptions {
            purchase_price: self.purchase_price.unwrap_or(baseline.purchase_price),
            broker_fee: self.broker_fee.unwrap_or(baseline.broker_fee),
            deposit_pct,
            loan_to_value,
            loan_amount: self.loan_amount.or(baseline.loan_amount),
            contingency_pct: self.contingency_pct.unwrap_or(baseline.contingency_pct),
            interest_rate: self.interest_rate.unwrap_or(baseline.interest_rate),
            amort_years: self.amort_years.unwrap_or(baseline.amort_years),
            premium_rate: self.premium_rate.unwrap_or(baseline.premium_rate),
            operating_expenses: self
                .operating_expenses
                .clone()
                .unwrap_or_else(|| baseline.operating_expenses.clone()),
            operating_expense_total: self
                .operating_expense_total
                .or(baseline.operating_expense_total),
            unit_mix,
            other_income_items: self
                .other_income_items
                .clone()
                .unwrap_or_else(|| baseline.other_income_items.clone()),
        }
    }
}

/// Basic shape checks on a merged assumption set. Returns advisory
/// warnings; nothing here rejects the input, since the calculator clamps
/// out-of-range values at point of use anyway.
pub fn shape_issues(assumptions: &Assumptions) -> Vec<String> {
    let mut issues = Vec::new();

    if assumptions.purchase_price < Decimal::ZERO {
        issues.push(format!(
            "Purchase price is negative ({})",
            assumptions.purchase_price
        ));
    }
    if assumptions.broker_fee < Decimal::ZERO {
        issues.push(format!("Broker fee is negative ({})", assumptions.broker_fee));
    }
    if let Some(loan) = assumptions.loan_amount {
        if loan < Decimal::ZERO {
            issues.push(format!("Loan amount override is negative ({})", loan));
        }
    }
    if assumptions.contingency_pct < Decimal::ZERO {
        issues.push(format!(
            "Contingency percentage is negative ({})",
            assumptions.contingency_pct
        ));
    }
    if let Some(deposit) = assumptions.deposit_pct {
        if deposit < Decimal::ZERO || deposit > Decimal::ONE {
            issues.push(format!("Deposit fraction {} is outside 0 to 1", deposit));
        }
    }
    if let Some(ltv) = assumptions.loan_to_value {
        if ltv < Decimal::ZERO || ltv > Decimal::ONE {
            issues.push(format!("Loan-to-value {} is outside 0 to 1", ltv));
        }
    }
    if let (Some(deposit), Some(ltv)) = (assumptions.deposit_pct, assumptions.loan_to_value) {
        if (deposit + ltv - Decimal::ONE).abs() > COMPLEMENT_TOLERANCE {
            issues.push(format!(
                "Deposit fraction ({}) and loan-to-value ({}) do not sum to 1",
                deposit, ltv
            ));
        }
    }
    if let Some(total) = assumptions.operating_expense_total {
        if total < Decimal::ZERO {
            issues.push(format!(
                "Operating expense total override is negative ({})",
                total
            ));
        }
    }
    for line in &assumptions.operating_expenses {
        if line.annual_amount < Decimal::ZERO {
            issues.push(format!(
                "Expense line '{}' has a negative annual amount ({})",
                line.label, line.annual_amount
            ));
        }
    }
    if assumptions.unit_mix.is_empty() {
        issues.push("Unit mix is empty; scheduled rent will be zero".to_string());
    }
    for unit in &assumptions.unit_mix {
        if unit.monthly_rent < Decimal::ZERO {
            issues.push(format!(
                "Unit type '{}' has a negative monthly rent ({})",
                unit.name, unit.monthly_rent
            ));
        }
    }
    for item in &assumptions.other_income_items {
        if item.monthly_amount < Decimal::ZERO {
            issues.push(format!(
                "Income line '{}' has a negative monthly amount ({})",
                item.name, item.monthly_amount
            ));
        }
        if item.usage < Decimal::ZERO || item.usage > Decimal::ONE {
            issues.push(format!(
                "Income line '{}' has usage factor {} outside 0 to 1",
                item.name, item.usage
            ));
        }
    }

    issues
}
