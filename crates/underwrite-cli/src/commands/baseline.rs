use underwrite_core::assumptions::load_baseline;
use underwrite_core::UnderwriteResult;

use crate::report::Report;

/// Dump the built-in reference scenario, typically as the seed for an
/// edited assumptions document.
pub fn run_baseline() -> UnderwriteResult<Report> {
    Ok(Report::Assumptions(load_baseline()))
}
