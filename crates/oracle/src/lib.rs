//! # arbsat-oracle
//!
//! Feasibility oracle for a single abstract two-hop token swap.
//!
//! The oracle asks one question: does any assignment of symbolic
//! amounts, allowances, and gas satisfy the preconditions of a
//! profitable arbitrage? It builds a fixed conjunction of constraints
//! over unbound entities (ownership, allowance sufficiency, gas
//! accounting, profitability), hands the conjunction to an SMT solver,
//! and reports feasible (with one witness assignment), infeasible, or
//! undetermined.
//!
//! It is not a simulator: swap outputs are symbolic placeholders, and
//! no pool pricing curve is modeled.

pub mod entities;
pub mod model;
pub mod report;
pub mod value;

pub use model::{ArbitrageModel, Feasibility, OwnershipCheck};
