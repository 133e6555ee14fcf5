//! # arbsat-solver
//!
//! SMT solver interface for the arbsat feasibility oracle.
//!
//! The oracle needs exactly one capability from a decision procedure:
//! hand it an SMT-LIB2 script, get back satisfiable-with-model,
//! unsatisfiable, or unknown. This crate provides that by spawning a
//! solver binary (Z3 or CVC5) as a subprocess and speaking SMT-LIB2
//! text over stdin/stdout.
//!
//! ```no_run
//! use arbsat_solver::{CliSolver, SolverResult};
//!
//! let solver = CliSolver::with_default_config().unwrap();
//! let result = solver.check_sat_raw("
//!     (declare-const amount Int)
//!     (assert (> amount 0))
//!     (check-sat)
//!     (get-model)
//! ").unwrap();
//!
//! match result {
//!     SolverResult::Sat(model) => println!("SAT: {model:?}"),
//!     SolverResult::Unsat => println!("UNSAT"),
//!     SolverResult::Unknown(reason) => println!("unknown: {reason}"),
//! }
//! ```

pub mod backend;
pub mod config;
pub mod error;
pub mod model;
mod parser;
pub mod result;
pub mod solver;

pub use backend::{create_backend, SolverBackend};
pub use config::{SolverConfig, SolverKind};
pub use error::SolverError;
pub use model::Model;
pub use result::SolverResult;
pub use solver::CliSolver;
