//! Abstraction over SMT solver backends.
//!
//! The oracle consumes exactly one capability: check satisfiability of
//! a script and report sat-with-model, unsat, or unknown. The
//! [`SolverBackend`] trait pins that seam so nothing engine-specific
//! leaks into the constraint model.

use arbsat_smtlib::script::Script;

use crate::config::SolverConfig;
use crate::error::SolverError;
use crate::result::SolverResult;
use crate::solver::CliSolver;

/// Trait abstracting over SMT solver backends.
pub trait SolverBackend {
    /// Check satisfiability of the given SMT script.
    ///
    /// Returns:
    /// - `Ok(SolverResult::Sat(model))` if satisfiable
    /// - `Ok(SolverResult::Unsat)` if unsatisfiable
    /// - `Ok(SolverResult::Unknown(reason))` if the engine couldn't decide
    /// - `Err(SolverError)` if the invocation itself failed
    fn check_sat(&self, script: &Script) -> Result<SolverResult, SolverError>;
}

impl SolverBackend for CliSolver {
    fn check_sat(&self, script: &Script) -> Result<SolverResult, SolverError> {
        self.check_sat(script)
    }
}

/// Create a subprocess backend from a configuration.
pub fn create_backend(config: SolverConfig) -> Box<dyn SolverBackend> {
    tracing::debug!("Using {} subprocess backend", config.kind);
    Box::new(CliSolver::new(config))
}
