use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use seatforge::problem::Problem;
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Problem description (people, tables, plusOnes)
    #[arg(global = true, short = 'f', long, default_value = "input.json")]
    file: String,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Search for a seating that satisfies as many preferences as possible
    Solve(cmd::search::SearchArgs),
    /// Check a problem file, optionally scoring an existing seating plan
    Validate(cmd::validate::ValidateArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    info!("📂 Loading problem: {}", cli.file);
    let problem = Problem::load_from_file(&cli.file).unwrap_or_else(|e| {
        error!("{}", e);
        process::exit(1);
    });

    let sub_matches = matches.subcommand().map(|(_, m)| m);
    let outcome = match cli.command {
        Commands::Solve(args) => cmd::search::run(args, sub_matches, &problem),
        Commands::Validate(args) => cmd::validate::run(args, &problem),
    };

    if let Err(e) = outcome {
        error!("❌ {}", e);
        process::exit(1);
    }
}
