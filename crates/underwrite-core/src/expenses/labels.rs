use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::assumptions::ExpenseLine;
use crate::types::Money;

/// The fixed set of percent-denominated expense categories. These are the
/// only lines the percentage view tracks; everything else is flat-dollar.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum PercentCategory {
    ManagementSalaries,
    VacancyBadDebt,
}

impl PercentCategory {
    pub const ALL: [PercentCategory; 2] =
        [PercentCategory::ManagementSalaries, PercentCategory::VacancyBadDebt];

    /// Stable machine key, matching the serde representation
    pub fn key(&self) -> &'static str {
        match self {
            PercentCategory::ManagementSalaries => "management_salaries",
            PercentCategory::VacancyBadDebt => "vacancy_bad_debt",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PercentCategory::ManagementSalaries => "Management & Salaries",
            PercentCategory::VacancyBadDebt => "Vacancy & Bad Debt",
        }
    }

    /// Tests a normalized label (see [`normalize_label`]) against this
    /// category's match words.
    pub fn matches(&self, normalized: &str) -> bool {
        match self {
            PercentCategory::ManagementSalaries => {
                normalized.contains("management") || normalized.contains("salaries")
            }
            PercentCategory::VacancyBadDebt => {
                normalized.contains("vacancy") || normalized.contains("bad debt")
            }
        }
    }
}

/// Canonical form used for category matching: anything from the first `@`
/// on is dropped (labels like "Management & Salaries @5%" carry their
/// percentage inline), the rest is lowercased and whitespace-collapsed.
pub fn normalize_label(label: &str) -> String {
    let stem = label.split('@').next().unwrap_or(label);
    stem.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// First category whose match words appear in the label, if any.
pub fn category_for(label: &str) -> Option<PercentCategory> {
    let normalized = normalize_label(label);
    PercentCategory::ALL
        .into_iter()
        .find(|category| category.matches(&normalized))
}

/// Sum of every expense line resolving to the category via
/// [`category_for`]. A label that hits several categories' match words
/// counts toward its first match only, so the percent view and the
/// reconcile pass attribute each line the same way. Zero when no line
/// matches.
pub fn category_total(lines: &[ExpenseLine], category: PercentCategory) -> Money {
    lines
        .iter()
        .filter(|line| category_for(&line.label) == Some(category))
        .map(|line| line.annual_amount)
        .sum::<Decimal>()
}
