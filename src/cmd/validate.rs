use crate::reports;
use clap::Args;
use seatforge::api;
use seatforge::error::SfResult;
use seatforge::problem::{Problem, SeatingPlan};
use seatforge::scorer::Objective;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct ValidateArgs {
    #[arg(short = 'm', long = "mode", value_enum, default_value_t = Objective::Hybrid)]
    pub objective: Objective,

    /// Existing seating plan (JSON) to score against the problem
    #[arg(short, long)]
    pub plan: Option<String>,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: ValidateArgs, problem: &Problem) -> SfResult<()> {
    problem.validate()?;
    info!("✅ Problem is consistent");

    let Some(path) = &args.plan else {
        reports::print_problem_overview(problem);
        return Ok(());
    };

    info!("📂 Loading seating plan: {}", path);
    let plan = SeatingPlan::load_from_file(path)?;
    let evaluation = api::evaluate(problem, args.objective, &plan)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&evaluation)?);
    } else {
        reports::print_problem_overview(problem);
        reports::print_headline(&evaluation.summary);
        reports::print_tables(&evaluation.tables);
        println!("\nScore: {:.2}", evaluation.score);
    }

    Ok(())
}
