pub mod baseline;
pub mod merge;
pub mod model;
pub mod scenario;

pub use baseline::load_baseline;
pub use merge::{shape_issues, PartialAssumptions};
pub use model::{Assumptions, ExpenseLine, OtherIncomeItem, UnitAssumption};
pub use scenario::{slugify, ScenarioRecord};
