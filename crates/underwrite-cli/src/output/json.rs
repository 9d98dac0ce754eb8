use crate::report::Report;

/// Pretty-print the report to stdout.
pub fn print_json(report: &Report) {
    match serde_json::to_string_pretty(report) {
        Ok(s) => println!("{}", s),
        Err(e) => eprintln!("JSON serialization error: {}", e),
    }
}
