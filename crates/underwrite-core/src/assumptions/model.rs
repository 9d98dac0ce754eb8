use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{Money, Rate};

/// One rent-roll line: a group of identical units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitAssumption {
    /// Display name (e.g. "3 Bed Upper")
    pub name: String,
    /// Number of units of this type
    pub units: u32,
    /// Scheduled rent per unit per month
    pub monthly_rent: Money,
    /// Bedrooms per unit
    pub bedrooms: u32,
}

/// A secondary monthly income line (laundry, parking, pet fees).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OtherIncomeItem {
    pub name: String,
    /// Number of units the line applies to
    pub units: u32,
    /// Expected take-up across those units, 0 to 1
    pub usage: Rate,
    /// Amount per participating unit per month
    pub monthly_amount: Money,
}

/// One labeled annual operating expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseLine {
    pub label: String,
    pub annual_amount: Money,
}

/// Complete assumption set for one property. This is the aggregate the
/// calculator, projections and scenario store all operate on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assumptions {
    /// Acquisition price
    pub purchase_price: Money,
    /// Broker / acquisition fee added to the cost basis
    pub broker_fee: Money,
    /// Deposit as a fraction of the cost basis. Complement of
    /// `loan_to_value`; when both are present each keeps its explicit
    /// value and the merge layer flags any mismatch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deposit_pct: Option<Rate>,
    /// Loan-to-value ratio. Complement of `deposit_pct`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loan_to_value: Option<Rate>,
    /// Explicit loan amount, overriding the derived cost-basis split
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loan_amount: Option<Money>,
    /// Closing contingency as a fraction of the cost basis, held on top
    /// of the deposit
    pub contingency_pct: Rate,
    /// Annual mortgage interest rate
    pub interest_rate: Rate,
    /// Amortization period in years
    pub amort_years: u32,
    /// Loan-insurance premium capitalized into the amortized principal
    /// (e.g. 0.031 for a 3.1% insured-mortgage premium)
    pub premium_rate: Rate,
    /// Annual operating expense lines, in presentation order
    pub operating_expenses: Vec<ExpenseLine>,
    /// Positive value replaces the summed expense lines
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operating_expense_total: Option<Money>,
    /// Rent roll
    pub unit_mix: Vec<UnitAssumption>,
    /// Secondary income lines
    pub other_income_items: Vec<OtherIncomeItem>,
}

impl Assumptions {
    /// Deposit fraction: the explicit value when given, else the
    /// complement of the explicit LTV, else zero (fully levered).
    /// Clamped to [0, 1].
    pub fn resolved_deposit_pct(&self) -> Rate {
        self.deposit_pct
            .unwrap_or_else(|| Decimal::ONE - self.loan_to_value.unwrap_or(Decimal::ONE))
            .clamp(Decimal::ZERO, Decimal::ONE)
    }

    /// Loan-to-value: the explicit value when given, else the complement
    /// of the explicit deposit, else one (fully levered). Clamped to [0, 1].
    pub fn resolved_loan_to_value(&self) -> Rate {
        self.loan_to_value
            .unwrap_or_else(|| Decimal::ONE - self.deposit_pct.unwrap_or(Decimal::ZERO))
            .clamp(Decimal::ZERO, Decimal::ONE)
    }

    /// Scheduled rent per month across the whole mix. Each line
    /// contributes max(0, units × rent).
    pub fn gross_scheduled_rent_monthly(&self) -> Money {
        self.unit_mix
            .iter()
            .map(|unit| (Decimal::from(unit.units) * unit.monthly_rent).max(Decimal::ZERO))
            .sum()
    }

    /// Secondary income per month. Usage factors are clamped to [0, 1]
    /// and each line contributes max(0, units × usage × amount).
    pub fn other_income_monthly(&self) -> Money {
        self.other_income_items
            .iter()
            .map(|item| {
                let usage = item.usage.clamp(Decimal::ZERO, Decimal::ONE);
                (Decimal::from(item.units) * usage * item.monthly_amount).max(Decimal::ZERO)
            })
            .sum()
    }

    /// Ongoing annual operating expenses: the positive total override when
    /// present, otherwise the summed lines (empty list sums to zero).
    pub fn ongoing_operating_expenses(&self) -> Money {
        match self.operating_expense_total {
            Some(total) if total > Decimal::ZERO => total,
            _ => self
                .operating_expenses
                .iter()
                .map(|line| line.annual_amount)
                .sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn bare() -> Assumptions {
        Assumptions {
            purchase_price: dec!(1000000),
            broker_fee: dec!(10000),
            deposit_pct: None,
            loan_to_value: None,
            loan_amount: None,
            contingency_pct: Decimal::ZERO,
            interest_rate: dec!(0.05),
            amort_years: 25,
            premium_rate: Decimal::ZERO,
            operating_expenses: Vec::new(),
            operating_expense_total: None,
            unit_mix: Vec::new(),
            other_income_items: Vec::new(),
        }
    }

    #[test]
    fn test_deposit_explicit_wins() {
        let mut a = bare();
        a.deposit_pct = Some(dec!(0.25));
        a.loan_to_value = Some(dec!(0.85)); // inconsistent on purpose
        assert_eq!(a.resolved_deposit_pct(), dec!(0.25));
        assert_eq!(a.resolved_loan_to_value(), dec!(0.85));
    }

    #[test]
    fn test_deposit_derived_from_ltv() {
        let mut a = bare();
        a.loan_to_value = Some(dec!(0.80));
        assert_eq!(a.resolved_deposit_pct(), dec!(0.20));
    }

    #[test]
    fn test_ltv_derived_from_deposit() {
        let mut a = bare();
        a.deposit_pct = Some(dec!(0.30));
        assert_eq!(a.resolved_loan_to_value(), dec!(0.70));
    }

    #[test]
    fn test_neither_supplied_is_fully_levered() {
        let a = bare();
        assert_eq!(a.resolved_deposit_pct(), Decimal::ZERO);
        assert_eq!(a.resolved_loan_to_value(), Decimal::ONE);
    }

    #[test]
    fn test_resolution_clamps_out_of_range() {
        let mut a = bare();
        a.deposit_pct = Some(dec!(1.4));
        a.loan_to_value = Some(dec!(-0.2));
        assert_eq!(a.resolved_deposit_pct(), Decimal::ONE);
        assert_eq!(a.resolved_loan_to_value(), Decimal::ZERO);
    }

    #[test]
    fn test_negative_rent_line_contributes_zero() {
        let mut a = bare();
        a.unit_mix = vec![
            UnitAssumption {
                name: "Good".into(),
                units: 4,
                monthly_rent: dec!(1000),
                bedrooms: 2,
            },
            UnitAssumption {
                name: "Bad".into(),
                units: 2,
                monthly_rent: dec!(-500),
                bedrooms: 1,
            },
        ];
        assert_eq!(a.gross_scheduled_rent_monthly(), dec!(4000));
    }

    #[test]
    fn test_usage_is_clamped() {
        let mut a = bare();
        a.other_income_items = vec![
            OtherIncomeItem {
                name: "Laundry".into(),
                units: 10,
                usage: dec!(1.5), // clamps to 1
                monthly_amount: dec!(20),
            },
            OtherIncomeItem {
                name: "Parking".into(),
                units: 10,
                usage: dec!(-0.5), // clamps to 0
                monthly_amount: dec!(50),
            },
        ];
        assert_eq!(a.other_income_monthly(), dec!(200));
    }

    #[test]
    fn test_expense_total_override_must_be_positive() {
        let mut a = bare();
        a.operating_expenses = vec![ExpenseLine {
            label: "Taxes".into(),
            annual_amount: dec!(12000),
        }];
        a.operating_expense_total = Some(Decimal::ZERO);
        assert_eq!(a.ongoing_operating_expenses(), dec!(12000));

        a.operating_expense_total = Some(dec!(20000));
        assert_eq!(a.ongoing_operating_expenses(), dec!(20000));
    }
}
