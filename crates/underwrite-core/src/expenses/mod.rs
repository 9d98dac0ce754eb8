pub mod labels;
pub mod reconcile;

pub use labels::{category_for, category_total, normalize_label, PercentCategory};
pub use reconcile::{derive_expense_percentages, reconcile_dollars_from_percentages};
