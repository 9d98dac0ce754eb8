use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::model::{Assumptions, ExpenseLine, OtherIncomeItem, UnitAssumption};

/// Returns the fixed reference scenario: an eight-unit residential
/// building with an 85% LTV insured mortgage. Constructed fresh on every
/// call so callers can mutate their copy freely.
///
/// The two percent-denominated expense lines carry dollar figures that are
/// exactly 5% and 3% of annual gross scheduled rent ($211,200).
pub fn load_baseline() -> Assumptions {
    Assumptions {
        purchase_price: dec!(2150000),
        broker_fee: dec!(21500),
        deposit_pct: Some(dec!(0.15)),
        loan_to_value: Some(dec!(0.85)),
        loan_amount: None,
        contingency_pct: dec!(0.02),
        interest_rate: dec!(0.041),
        amort_years: 30,
        premium_rate: dec!(0.031),
        operating_expenses: vec![
            expense("Property Taxes", dec!(24000)),
            expense("Insurance", dec!(7200)),
            expense("Utilities", dec!(5400)),
            expense("Repairs & Maintenance", dec!(4800)),
            expense("Water & Sewer", dec!(3600)),
            expense("Snow Removal & Lawn Care", dec!(1800)),
            expense("Management & Salaries @5%", dec!(10560)),
            expense("Vacancy & Bad Debt @3%", dec!(6336)),
        ],
        operating_expense_total: None,
        unit_mix: vec![
            UnitAssumption {
                name: "3 Bed Upper".to_string(),
                units: 4,
                monthly_rent: dec!(2300),
                bedrooms: 3,
            },
            UnitAssumption {
                name: "2 Bed Lower".to_string(),
                units: 4,
                monthly_rent: dec!(2100),
                bedrooms: 2,
            },
        ],
        other_income_items: vec![
            OtherIncomeItem {
                name: "Misc / Laundry".to_string(),
                units: 8,
                usage: dec!(0.5),
                monthly_amount: dec!(25),
            },
            OtherIncomeItem {
                name: "Pet Income".to_string(),
                units: 8,
                usage: dec!(0.25),
                monthly_amount: dec!(30),
            },
        ],
    }
}

fn expense(label: &str, annual_amount: Decimal) -> ExpenseLine {
    ExpenseLine {
        label: label.to_string(),
        annual_amount,
    }
}
