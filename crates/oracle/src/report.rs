//! Console and JSON reporting of the feasibility outcome.
//!
//! Output format:
//! ```text
//!   [SAT]     arbitrage feasible
//!             amount = 0
//!             amountReceived2 = 100
//!             ...
//! ```
//! or `[UNSAT] arbitrage not feasible`, or `[UNKNOWN]` with the
//! engine's reason plus a hint to bound integer ranges or configure a
//! timeout.

use std::collections::BTreeMap;

use colored::Colorize;
use serde::Serialize;

use crate::model::Feasibility;

/// Print the outcome report with color-coded status tags.
pub fn print_report(outcome: &Feasibility) {
    match outcome {
        Feasibility::Feasible(witness) => {
            println!("  {}  arbitrage feasible", "[SAT]".green().bold());
            for (name, value) in witness.iter() {
                println!("          {name} = {value}");
            }
        }
        Feasibility::Infeasible => {
            println!("  {}  arbitrage not feasible", "[UNSAT]".red().bold());
        }
        Feasibility::Undetermined(reason) => {
            println!(
                "  {}  arbitrage feasibility undetermined ({reason})",
                "[UNKNOWN]".yellow().bold()
            );
            println!("          consider bounding integer ranges or adding a timeout");
        }
    }
}

/// Machine-readable form of the outcome, for `--json`.
#[derive(Debug, Serialize)]
pub struct JsonReport {
    pub outcome: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub witness: Option<BTreeMap<String, String>>,
}

impl JsonReport {
    pub fn from_outcome(outcome: &Feasibility) -> Self {
        match outcome {
            Feasibility::Feasible(witness) => Self {
                outcome: "feasible",
                reason: None,
                witness: Some(
                    witness
                        .iter()
                        .map(|(n, v)| (n.to_string(), v.to_string()))
                        .collect(),
                ),
            },
            Feasibility::Infeasible => Self {
                outcome: "infeasible",
                reason: None,
                witness: None,
            },
            Feasibility::Undetermined(reason) => Self {
                outcome: "undetermined",
                reason: Some(reason.clone()),
                witness: None,
            },
        }
    }
}
