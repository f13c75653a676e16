//! Koan practice runner.
//!
//! Discovers the built-in lesson groups, runs their steps in order, and
//! stops at the first unmet expectation so the learner always sees exactly
//! one thing to fix.

use anyhow::Result;
use clap::{Parser, Subcommand};

use koans::executor::execute;
use koans::lessons::all_groups;
use koans::plan::RunPlan;
use koans::{exit_codes, logging, report};

#[derive(Parser)]
#[command(name = "koans", version, about = "Fail-fast koan practice runner")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run every koan in order, stopping at the first unmet expectation.
    Run {
        /// Print a JSON summary instead of the text report.
        #[arg(long)]
        json: bool,
    },
    /// Print the resolved execution order without running anything.
    List,
}

fn main() {
    logging::init();
    let code = match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{:#}", err);
            exit_codes::INVALID
        }
    };
    std::process::exit(code);
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    let plan = RunPlan::build(all_groups())?;
    match cli.command.unwrap_or(Command::Run { json: false }) {
        Command::Run { json } => {
            let result = execute(&plan);
            if json {
                print!("{}", report::render_json(&result)?);
            } else {
                println!("{}", report::render(&result));
            }
            Ok(report::exit_code(&result))
        }
        Command::List => {
            for planned in plan.steps() {
                println!("{} / {}", planned.group, planned.step.display_name());
            }
            Ok(exit_codes::OK)
        }
    }
}
