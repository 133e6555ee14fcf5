//! `arbsat`: one-shot feasibility check for a two-hop arbitrage.
//!
//! With no flags this builds the default constraint model, runs a
//! single unbounded satisfiability query against an auto-detected
//! solver, and prints the verdict (plus the witness when feasible).

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use arbsat_oracle::report::{print_report, JsonReport};
use arbsat_oracle::{ArbitrageModel, Feasibility, OwnershipCheck};
use arbsat_solver::{CliSolver, SolverConfig, SolverError, SolverKind};

#[derive(Parser, Debug)]
#[command(name = "arbsat", version, about = "Two-hop arbitrage feasibility oracle")]
struct Cli {
    /// Assert the only_owner access-control predicate instead of
    /// leaving it advisory
    #[arg(long)]
    enforce_owner: bool,

    /// Solver timeout in milliseconds (0 = unbounded)
    #[arg(long, default_value_t = 0)]
    timeout_ms: u64,

    /// Decision procedure to use
    #[arg(long, default_value = "z3")]
    solver: SolverKind,

    /// Print the generated SMT-LIB2 script before solving
    #[arg(long)]
    dump_smt: bool,

    /// Emit the report as JSON instead of the console format
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(outcome) => {
            if cli.json {
                match serde_json::to_string_pretty(&JsonReport::from_outcome(&outcome)) {
                    Ok(json) => println!("{json}"),
                    Err(e) => {
                        eprintln!("error: failed to serialize report: {e}");
                        return ExitCode::FAILURE;
                    }
                }
            } else {
                print_report(&outcome);
            }
            // Undetermined is neither confirmation nor refutation;
            // distinguish it for scripted callers.
            if outcome.is_undetermined() {
                ExitCode::from(2)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<Feasibility, SolverError> {
    let ownership = if cli.enforce_owner {
        OwnershipCheck::Enforced
    } else {
        OwnershipCheck::AdvisoryOnly
    };

    let model = ArbitrageModel::new(ownership);

    if cli.dump_smt {
        print!("{}", model.script());
    }

    let config = SolverConfig::auto_detect_for(cli.solver)?.with_timeout(cli.timeout_ms);
    tracing::debug!(path = %config.solver_path.display(), "Solver detected");
    let solver = CliSolver::new(config);

    model.check(&solver)
}
