//! SMT-LIB2 text formatting for AST types.
//!
//! Implements `Display` for [`Sort`], [`Term`], [`Command`], and
//! [`Script`], producing valid SMT-LIB2 output that can be parsed by
//! solvers such as Z3 and CVC5.

use std::fmt;

use num_bigint::Sign;

use crate::command::Command;
use crate::script::Script;
use crate::sort::Sort;
use crate::term::Term;

// ---------------------------------------------------------------------------
// Sort
// ---------------------------------------------------------------------------

impl fmt::Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sort::Bool => write!(f, "Bool"),
            Sort::Int => write!(f, "Int"),
            Sort::String => write!(f, "String"),
            Sort::Uninterpreted(name) => write!(f, "{name}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Term
// ---------------------------------------------------------------------------

/// Write a binary SMT-LIB operator: `(op lhs rhs)`.
fn fmt_binop(op: &str, lhs: &Term, rhs: &Term, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "({op} {lhs} {rhs})")
}

/// Write an n-ary SMT-LIB operator: `(op t1 t2 ...)`.
fn fmt_nary(op: &str, terms: &[Term], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "({op}")?;
    for term in terms {
        write!(f, " {term}")?;
    }
    write!(f, ")")
}

/// Write a string literal. SMT-LIB escapes a double quote by doubling it.
fn fmt_str_lit(value: &str, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "\"{}\"", value.replace('"', "\"\""))
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::BoolLit(true) => write!(f, "true"),
            Term::BoolLit(false) => write!(f, "false"),
            Term::IntLit(n) => {
                if *n < 0 {
                    write!(f, "(- {})", n.unsigned_abs())
                } else {
                    write!(f, "{n}")
                }
            }
            Term::BigIntLit(n) => {
                // SMT-LIB has no negative numerals; wrap in unary minus.
                if n.sign() == Sign::Minus {
                    write!(f, "(- {})", n.magnitude())
                } else {
                    write!(f, "{n}")
                }
            }
            Term::StrLit(s) => fmt_str_lit(s, f),
            Term::Const(name) => write!(f, "{name}"),
            Term::Not(t) => write!(f, "(not {t})"),
            Term::And(ts) => fmt_nary("and", ts, f),
            Term::Or(ts) => fmt_nary("or", ts, f),
            Term::Implies(a, b) => fmt_binop("=>", a, b, f),
            Term::Eq(a, b) => fmt_binop("=", a, b, f),
            Term::Distinct(ts) => fmt_nary("distinct", ts, f),
            Term::Ite(c, t, e) => write!(f, "(ite {c} {t} {e})"),
            Term::IntAdd(a, b) => fmt_binop("+", a, b, f),
            Term::IntSub(a, b) => fmt_binop("-", a, b, f),
            Term::IntMul(a, b) => fmt_binop("*", a, b, f),
            Term::IntNeg(a) => write!(f, "(- {a})"),
            Term::IntLt(a, b) => fmt_binop("<", a, b, f),
            Term::IntLe(a, b) => fmt_binop("<=", a, b, f),
            Term::IntGt(a, b) => fmt_binop(">", a, b, f),
            Term::IntGe(a, b) => fmt_binop(">=", a, b, f),
            Term::App(func, args) => fmt_nary(func, args, f),
        }
    }
}

// ---------------------------------------------------------------------------
// Command
// ---------------------------------------------------------------------------

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::SetLogic(logic) => write!(f, "(set-logic {logic})"),
            Command::SetOption(key, value) => write!(f, "(set-option :{key} {value})"),
            Command::DeclareConst(name, sort) => write!(f, "(declare-const {name} {sort})"),
            Command::DeclareFun(name, params, ret) => {
                write!(f, "(declare-fun {name} (")?;
                for (i, sort) in params.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{sort}")?;
                }
                write!(f, ") {ret})")
            }
            Command::Assert(term) => write!(f, "(assert {term})"),
            Command::CheckSat => write!(f, "(check-sat)"),
            Command::GetModel => write!(f, "(get-model)"),
            Command::Comment(text) => write!(f, "; {text}"),
            Command::Exit => write!(f, "(exit)"),
        }
    }
}

// ---------------------------------------------------------------------------
// Script
// ---------------------------------------------------------------------------

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cmd in self.commands() {
            writeln!(f, "{cmd}")?;
        }
        Ok(())
    }
}
