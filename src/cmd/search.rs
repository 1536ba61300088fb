use crate::reports;
use clap::{ArgMatches, Args};
use seatforge::api;
use seatforge::config::SearchParams;
use seatforge::error::SfResult;
use seatforge::optimizer::{AnnealOptions, ProgressCallback, RoundReport};
use seatforge::problem::Problem;
use std::fs::File;
use tracing::{debug, info};

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    #[command(flatten)]
    pub params: SearchParams,

    /// JSON preset for the search parameters; typed flags still win
    #[arg(long)]
    pub config: Option<String>,

    /// Print the solution as JSON instead of tables
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Also write the seating to a CSV file
    #[arg(long)]
    pub export: Option<String>,
}

struct LogProgress {
    total_rounds: usize,
}

impl ProgressCallback for LogProgress {
    fn on_round(&self, r: &RoundReport) {
        if r.round % 10 == 0 {
            debug!(
                "Round {:4}/{} | T {:.6} | Cold: {:.1} | Best: {:.1}",
                r.round, self.total_rounds, r.base_temperature, r.coldest_score, r.best_score
            );
        }
    }
}

pub fn run(args: SearchArgs, matches: Option<&ArgMatches>, problem: &Problem) -> SfResult<()> {
    let params = match &args.config {
        Some(path) => {
            info!("📂 Loading search preset: {}", path);
            let mut preset = SearchParams::load_from_file(path)?;
            if let Some(m) = matches {
                preset.merge_from_cli(&args.params, m);
            }
            preset
        }
        None => args.params.clone(),
    };

    let options = AnnealOptions::from(&params);
    options.validate()?;
    let total_rounds = options.round_count();
    info!(
        "🔥 {} annealers, {} rounds of {} iterations ({} objective)",
        options.ladder_size, total_rounds, options.internal_iterations, params.objective
    );

    let solution = api::solve(problem, params.objective, options, LogProgress { total_rounds })?;

    if let Some(path) = &args.export {
        info!("💾 Writing seating to {}", path);
        api::write_csv(File::create(path)?, &solution.tables)?;
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&solution)?);
    } else {
        reports::print_headline(&solution.summary);
        reports::print_tables(&solution.tables);
        println!("\nScore: {:.2}", solution.score);
    }

    Ok(())
}
