use clap::{Args, Subcommand};

use underwrite_core::assumptions::ScenarioRecord;
use underwrite_core::UnderwriteResult;

use super::common::{print_stderr_warnings, AssumptionArgs};
use crate::report::{Report, ScenarioSummary};
use crate::store::ScenarioStore;

#[derive(Subcommand)]
pub enum ScenarioCommand {
    /// Save an assumption set under a name
    Save(SaveArgs),
    /// List saved scenarios
    List(DirArgs),
    /// Show one saved scenario
    Show(NameArgs),
    /// Delete a saved scenario
    Delete(NameArgs),
}

#[derive(Args)]
pub struct SaveArgs {
    /// Human-readable scenario name; the storage key is its slug
    pub name: String,

    #[command(flatten)]
    pub assumptions: AssumptionArgs,

    /// Directory holding scenario documents
    #[arg(long, default_value = "./scenarios")]
    pub dir: String,
}

#[derive(Args)]
pub struct DirArgs {
    /// Directory holding scenario documents
    #[arg(long, default_value = "./scenarios")]
    pub dir: String,
}

#[derive(Args)]
pub struct NameArgs {
    /// Scenario name or slug id
    pub name: String,

    /// Directory holding scenario documents
    #[arg(long, default_value = "./scenarios")]
    pub dir: String,
}

pub fn run_scenario(command: ScenarioCommand) -> UnderwriteResult<Report> {
    match command {
        ScenarioCommand::Save(args) => {
            let (assumptions, warnings) = args.assumptions.resolve()?;
            print_stderr_warnings(&warnings);
            let record = ScenarioRecord::new(args.name, assumptions);
            let path = ScenarioStore::new(&args.dir).save(&record)?;
            Ok(Report::Message(format!(
                "Saved scenario '{}' to {}",
                record.id,
                path.display()
            )))
        }
        ScenarioCommand::List(args) => {
            let records = ScenarioStore::new(&args.dir).list()?;
            let summaries = records
                .into_iter()
                .map(|record| ScenarioSummary {
                    id: record.id,
                    name: record.name,
                    created_at: record.created_at.to_rfc3339(),
                })
                .collect();
            Ok(Report::ScenarioList(summaries))
        }
        ScenarioCommand::Show(args) => {
            let record = ScenarioStore::new(&args.dir).load(&args.name)?;
            Ok(Report::Scenario(record))
        }
        ScenarioCommand::Delete(args) => {
            let path = ScenarioStore::new(&args.dir).delete(&args.name)?;
            Ok(Report::Message(format!("Deleted {}", path.display())))
        }
    }
}
