use crate::model::Model;

/// Result from the SMT solver.
///
/// The third variant matters: linear arithmetic over unbounded integers
/// with uninterpreted functions can legitimately come back `unknown`
/// (timeout, incomplete tactic), and callers must branch on it rather
/// than assume a sat/unsat binary.
#[derive(Debug, Clone, PartialEq)]
pub enum SolverResult {
    /// Formula is satisfiable; the witness model if one was printed.
    Sat(Option<Model>),
    /// Formula is unsatisfiable.
    Unsat,
    /// Solver couldn't decide (timeout, resource limit, incompleteness).
    Unknown(String),
}

impl SolverResult {
    /// Returns `true` if the result is `Sat`.
    pub fn is_sat(&self) -> bool {
        matches!(self, SolverResult::Sat(_))
    }

    /// Returns `true` if the result is `Unsat`.
    pub fn is_unsat(&self) -> bool {
        matches!(self, SolverResult::Unsat)
    }

    /// Returns `true` if the result is `Unknown`.
    pub fn is_unknown(&self) -> bool {
        matches!(self, SolverResult::Unknown(_))
    }

    /// Returns the model if the result is `Sat` with a model.
    pub fn model(&self) -> Option<&Model> {
        match self {
            SolverResult::Sat(Some(model)) => Some(model),
            _ => None,
        }
    }
}
