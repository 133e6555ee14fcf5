//! # arbsat-smtlib
//!
//! SMT-LIB2 abstract syntax for the arbsat feasibility oracle.
//!
//! This crate models the small slice of SMT-LIB2 the oracle needs:
//! `Bool`, `Int`, and `String` sorts, boolean connectives, linear
//! integer arithmetic, uninterpreted total functions, and
//! arbitrary-precision integer literals (ERC-20 amounts exceed `i128`).
//!
//! Scripts format to solver-ready SMT-LIB2 text via `Display`:
//!
//! ```
//! use arbsat_smtlib::command::Command;
//! use arbsat_smtlib::script::Script;
//! use arbsat_smtlib::sort::Sort;
//! use arbsat_smtlib::term::Term;
//!
//! let mut script = Script::new();
//! script.push(Command::DeclareConst("amount".to_string(), Sort::Int));
//! script.push(Command::Assert(Term::ge(Term::var("amount"), Term::int(0))));
//! assert_eq!(
//!     script.to_string(),
//!     "(declare-const amount Int)\n(assert (>= amount 0))\n"
//! );
//! ```

pub mod command;
pub mod formatter;
pub mod script;
pub mod sort;
pub mod term;

pub use command::Command;
pub use script::Script;
pub use sort::Sort;
pub use term::Term;
