use std::io::Write;
use std::process::{Command, Stdio};

use arbsat_smtlib::command::Command as SmtCmd;
use arbsat_smtlib::script::Script;

use crate::config::{SolverConfig, SolverKind};
use crate::error::SolverError;
use crate::parser::parse_solver_output;
use crate::result::SolverResult;

/// Subprocess-based SMT solver interface.
///
/// Spawns the configured solver binary (Z3 or CVC5) and pipes SMT-LIB2
/// text through stdin/stdout. One process per query; the oracle never
/// re-queries a session.
#[derive(Debug)]
pub struct CliSolver {
    config: SolverConfig,
}

impl CliSolver {
    /// Create a new `CliSolver` with the given configuration.
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Create a `CliSolver` with auto-detected Z3 and default settings.
    pub fn with_default_config() -> Result<Self, SolverError> {
        let config = SolverConfig::auto_detect()?;
        Ok(Self { config })
    }

    /// Create a `CliSolver` with auto-detection for the given kind.
    pub fn with_default_config_for(kind: SolverKind) -> Result<Self, SolverError> {
        let config = SolverConfig::auto_detect_for(kind)?;
        Ok(Self { config })
    }

    /// Get a reference to the solver configuration.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Check satisfiability of a script.
    ///
    /// Formats the script to SMT-LIB2 text, appends `(check-sat)` and
    /// `(get-model)` when the script doesn't already contain them, and
    /// runs the solver.
    pub fn check_sat(&self, script: &Script) -> Result<SolverResult, SolverError> {
        let mut smtlib = script.to_string();

        if !script.has_check_sat() {
            smtlib.push_str(&format!("{}\n", SmtCmd::CheckSat));
        }
        if !script.has_get_model() {
            smtlib.push_str(&format!("{}\n", SmtCmd::GetModel));
        }

        self.check_sat_raw(&smtlib)
    }

    /// Check satisfiability from a raw SMT-LIB2 string.
    ///
    /// Nothing is appended here; callers own the full text.
    pub fn check_sat_raw(&self, smtlib: &str) -> Result<SolverResult, SolverError> {
        self.config.validate()?;

        let args = self.config.build_args();
        tracing::debug!(
            solver = %self.config.kind,
            timeout_ms = self.config.timeout_ms,
            "Invoking decision procedure"
        );

        let mut child = Command::new(&self.config.solver_path)
            .args(&args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                SolverError::ProcessError(format!(
                    "Failed to start {}: {e}",
                    self.config.kind
                ))
            })?;

        {
            let stdin = child.stdin.as_mut().ok_or_else(|| {
                SolverError::ProcessError("Failed to open solver stdin".to_string())
            })?;
            stdin.write_all(smtlib.as_bytes()).map_err(|e| {
                SolverError::ProcessError(format!("Failed to write to solver stdin: {e}"))
            })?;
        }

        let output = child.wait_with_output().map_err(|e| {
            SolverError::ProcessError(format!("Failed to wait for solver: {e}"))
        })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);

        parse_solver_output(&stdout, &stderr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arbsat_smtlib::sort::Sort;
    use arbsat_smtlib::term::Term;
    use std::path::PathBuf;

    #[test]
    fn missing_binary_is_not_found_error() {
        let config = SolverConfig::new(SolverKind::Z3, PathBuf::from("/nonexistent/z3"));
        let solver = CliSolver::new(config);
        let err = solver.check_sat_raw("(check-sat)").unwrap_err();
        assert_eq!(
            err,
            SolverError::NotFound(SolverKind::Z3, PathBuf::from("/nonexistent/z3"))
        );
    }

    #[test]
    fn config_accessor() {
        let config = SolverConfig::new(SolverKind::Cvc5, PathBuf::from("/usr/bin/cvc5"));
        let solver = CliSolver::new(config);
        assert_eq!(solver.config().kind, SolverKind::Cvc5);
    }

    // Formatting-side behavior of check_sat is observable without a
    // solver binary: build the text the same way check_sat does.
    #[test]
    fn check_sat_appends_check_sat_and_get_model() {
        let mut script = Script::new();
        script.push(SmtCmd::DeclareConst("amount".to_string(), Sort::Int));
        script.push(SmtCmd::Assert(Term::ge(Term::var("amount"), Term::int(0))));

        let mut smtlib = script.to_string();
        if !script.has_check_sat() {
            smtlib.push_str(&format!("{}\n", SmtCmd::CheckSat));
        }
        if !script.has_get_model() {
            smtlib.push_str(&format!("{}\n", SmtCmd::GetModel));
        }

        assert!(smtlib.ends_with("(check-sat)\n(get-model)\n"));
    }

    #[test]
    fn check_sat_does_not_duplicate_commands() {
        let mut script = Script::new();
        script.push(SmtCmd::CheckSat);
        script.push(SmtCmd::GetModel);
        assert!(script.has_check_sat());
        assert!(script.has_get_model());
    }
}
