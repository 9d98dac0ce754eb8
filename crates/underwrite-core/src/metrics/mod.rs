pub mod calculator;
pub mod loan;
pub mod underwriting;

pub use calculator::{calculate_metrics, FinanceMetrics};
pub use loan::monthly_payment;
pub use underwriting::underwrite;
