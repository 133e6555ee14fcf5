//! The arbitrage constraint model and its single feasibility query.
//!
//! `ArbitrageModel` assembles a fixed conjunction of predicates over
//! the symbolic entities in [`crate::entities`]:
//!
//! - ownership invariant: `owner = initial_owner`
//! - `only_owner` access control: `caller = owner`, asserted or
//!   advisory depending on [`OwnershipCheck`]
//! - allowance sufficiency for both swaps, each a disjunction with the
//!   unlimited-approval sentinel
//! - gas accounting: `gasSpent = gasOnStart - gasLeft`
//! - profitability: `amountReceived2 - gasSpent > amount`
//!
//! The model is queried exactly once; there is no incremental
//! assertion or retraction after `check`.

use arbsat_smtlib::command::Command;
use arbsat_smtlib::script::Script;
use arbsat_smtlib::sort::Sort;
use arbsat_smtlib::term::Term;
use arbsat_solver::{Model, SolverBackend, SolverError, SolverResult};

use crate::entities;

/// Whether the `only_owner` access-control predicate is part of the
/// asserted conjunction.
///
/// The contract this models documents an owner-only entry point but
/// the original feasibility check never enforced it. `AdvisoryOnly`
/// reproduces that split (the predicate appears in the emitted script
/// as a comment, keeping the gap visible); `Enforced` asserts it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OwnershipCheck {
    /// Assert `caller = owner`.
    Enforced,
    /// Document the predicate without asserting it.
    #[default]
    AdvisoryOnly,
}

/// Outcome of the feasibility query.
#[derive(Debug, Clone, PartialEq)]
pub enum Feasibility {
    /// A satisfying assignment exists; the witness gives concrete
    /// values for every declared entity.
    Feasible(Model),
    /// No satisfying assignment exists under the asserted constraints.
    Infeasible,
    /// The decision procedure answered `unknown` (timeout, resource
    /// limit, incomplete tactic).
    Undetermined(String),
}

impl Feasibility {
    pub fn is_feasible(&self) -> bool {
        matches!(self, Feasibility::Feasible(_))
    }

    pub fn is_infeasible(&self) -> bool {
        matches!(self, Feasibility::Infeasible)
    }

    pub fn is_undetermined(&self) -> bool {
        matches!(self, Feasibility::Undetermined(_))
    }

    /// The witness assignment, when feasible.
    pub fn witness(&self) -> Option<&Model> {
        match self {
            Feasibility::Feasible(model) => Some(model),
            _ => None,
        }
    }
}

/// The two-hop arbitrage constraint model.
///
/// Lifecycle: build (`new`), optionally add scenario assumptions
/// (`assume`), query once (`check`), discard.
#[derive(Debug, Clone)]
pub struct ArbitrageModel {
    script: Script,
}

impl ArbitrageModel {
    /// Declare all entities and assert the core conjunction.
    pub fn new(ownership: OwnershipCheck) -> Self {
        let mut script = Script::new();

        declare_entities(&mut script);

        // Ownership is set at deployment and never reassigned.
        script.push(Command::Comment(
            "ownership invariant: owner never changes after deployment".to_string(),
        ));
        script.push(Command::Assert(Term::eq(
            Term::var(entities::OWNER),
            Term::var(entities::INITIAL_OWNER),
        )));

        let only_owner = Term::eq(Term::var(entities::CALLER), Term::var(entities::OWNER));
        match ownership {
            OwnershipCheck::Enforced => {
                script.push(Command::Assert(only_owner));
            }
            OwnershipCheck::AdvisoryOnly => {
                script.push(Command::Comment(format!(
                    "only_owner is advisory and not asserted: {only_owner}"
                )));
            }
        }

        // Bind the two queried allowance lookups to named constants so
        // they appear in the witness.
        script.push(Command::Assert(Term::eq(
            Term::var(entities::ALLOWANCE1),
            allowance_lookup(entities::TOKEN1, entities::ROUTER1),
        )));
        script.push(Command::Assert(Term::eq(
            Term::var(entities::ALLOWANCE2),
            allowance_lookup(entities::TOKEN2, entities::ROUTER2),
        )));

        let sentinel = Term::big(entities::infinite_approval());

        // Swap 1 needs the allowance to cover the input amount, unless
        // an unlimited approval is already in place.
        script.push(Command::Assert(Term::or(vec![
            Term::ge(Term::var(entities::ALLOWANCE1), Term::var(entities::AMOUNT)),
            Term::eq(Term::var(entities::ALLOWANCE1), sentinel.clone()),
        ])));

        // Swap 2's requirement isn't known at approval time; demand
        // headroom for double the first swap's output.
        script.push(Command::Assert(Term::or(vec![
            Term::ge(
                Term::var(entities::ALLOWANCE2),
                Term::mul(Term::int(2), Term::var(entities::AMOUNT_RECEIVED_1)),
            ),
            Term::eq(Term::var(entities::ALLOWANCE2), sentinel),
        ])));

        // Gas accounting: realize the derived spend explicitly.
        script.push(Command::Assert(Term::eq(
            Term::var(entities::GAS_SPENT),
            Term::sub(
                Term::var(entities::GAS_ON_START),
                Term::var(entities::GAS_LEFT),
            ),
        )));

        // The central business rule: output of the second swap, net of
        // gas, must strictly exceed the committed capital.
        script.push(Command::Assert(Term::gt(
            Term::sub(
                Term::var(entities::AMOUNT_RECEIVED_2),
                Term::var(entities::GAS_SPENT),
            ),
            Term::var(entities::AMOUNT),
        )));

        Self { script }
    }

    /// Add a scenario-specific assumption to the conjunction. Must be
    /// called before `check`; the constraint may only reference the
    /// declared entities.
    pub fn assume(&mut self, constraint: Term) {
        self.script.push(Command::Assert(constraint));
    }

    /// The assembled SMT script (no `check-sat` yet; the backend
    /// appends the query commands).
    pub fn script(&self) -> &Script {
        &self.script
    }

    /// Run the single feasibility query.
    pub fn check(&self, backend: &dyn SolverBackend) -> Result<Feasibility, SolverError> {
        tracing::info!(
            assertions = self
                .script
                .commands()
                .iter()
                .filter(|c| matches!(c, Command::Assert(_)))
                .count(),
            "Checking arbitrage feasibility"
        );

        let outcome = match backend.check_sat(&self.script)? {
            SolverResult::Sat(Some(model)) => Feasibility::Feasible(model),
            SolverResult::Sat(None) => {
                // Engine said sat but printed no assignments; report
                // feasible with an empty witness rather than failing.
                tracing::warn!("SAT verdict without a model dump");
                Feasibility::Feasible(Model::new())
            }
            SolverResult::Unsat => Feasibility::Infeasible,
            SolverResult::Unknown(reason) => Feasibility::Undetermined(reason),
        };
        Ok(outcome)
    }
}

impl Default for ArbitrageModel {
    fn default() -> Self {
        Self::new(OwnershipCheck::default())
    }
}

/// Declare every entity before any predicate references it.
fn declare_entities(script: &mut Script) {
    for name in [
        entities::OWNER,
        entities::CALLER,
        entities::INITIAL_OWNER,
        entities::TOKEN1,
        entities::TOKEN2,
        entities::ROUTER1,
        entities::ROUTER2,
    ] {
        script.push(Command::DeclareConst(name.to_string(), Sort::String));
    }

    for name in [
        entities::AMOUNT,
        entities::AMOUNT_RECEIVED_1,
        entities::AMOUNT_RECEIVED_2,
        entities::GAS_ON_START,
        entities::GAS_LEFT,
        entities::GAS_SPENT,
        entities::ALLOWANCE1,
        entities::ALLOWANCE2,
    ] {
        script.push(Command::DeclareConst(name.to_string(), Sort::Int));
    }

    // balances[token][account] -- declared but unconstrained here.
    script.push(Command::DeclareFun(
        entities::BALANCES.to_string(),
        vec![Sort::String, Sort::String],
        Sort::Int,
    ));
    // allowances[token][owner_account][spender]
    script.push(Command::DeclareFun(
        entities::ALLOWANCES.to_string(),
        vec![Sort::String, Sort::String, Sort::String],
        Sort::Int,
    ));
}

/// `(allowances token "contract" router)`
fn allowance_lookup(token: &str, router: &str) -> Term {
    Term::app(
        entities::ALLOWANCES.to_string(),
        vec![
            Term::var(token),
            Term::str_lit(entities::CONTRACT_ACCOUNT),
            Term::var(router),
        ],
    )
}
