pub mod monthly;
pub mod sensitivity;

pub use monthly::{project_monthly_cash_flows, MonthlyCashFlowPoint};
pub use sensitivity::{
    build_sensitivity_matrix, MetricField, SensitivityMatrix, SensitivitySpec,
};
