use num_bigint::BigInt;

/// SMT-LIB term (expression) representation.
///
/// Covers the theories the oracle's constraint model draws on: boolean
/// connectives, linear integer arithmetic, string and integer literals,
/// and applications of uninterpreted functions.
#[derive(Debug, Clone, PartialEq)]
pub enum Term {
    // === Literals ===
    /// Boolean literal
    BoolLit(bool),
    /// Integer literal
    IntLit(i128),
    /// Arbitrary-precision integer literal, for values past `i128`
    /// (e.g. the `2^256 - 1` unlimited-approval sentinel)
    BigIntLit(BigInt),
    /// String literal: `"..."`
    StrLit(String),

    // === Variables ===
    /// Named constant/variable reference
    Const(String),

    // === Boolean operations ===
    /// Logical NOT
    Not(Box<Term>),
    /// Logical AND (n-ary)
    And(Vec<Term>),
    /// Logical OR (n-ary)
    Or(Vec<Term>),
    /// Logical implication: `(=> a b)`
    Implies(Box<Term>, Box<Term>),

    // === Core ===
    /// Equality: `(= a b)`
    Eq(Box<Term>, Box<Term>),
    /// Distinct: `(distinct a b ...)`
    Distinct(Vec<Term>),
    /// If-then-else: `(ite cond then else)`
    Ite(Box<Term>, Box<Term>, Box<Term>),

    // === Integer arithmetic ===
    /// `(+ a b)`
    IntAdd(Box<Term>, Box<Term>),
    /// `(- a b)`
    IntSub(Box<Term>, Box<Term>),
    /// `(* a b)`
    IntMul(Box<Term>, Box<Term>),
    /// `(- a)`, integer negation
    IntNeg(Box<Term>),
    /// `(< a b)`
    IntLt(Box<Term>, Box<Term>),
    /// `(<= a b)`
    IntLe(Box<Term>, Box<Term>),
    /// `(> a b)`
    IntGt(Box<Term>, Box<Term>),
    /// `(>= a b)`
    IntGe(Box<Term>, Box<Term>),

    // === Function application ===
    /// `(f arg1 arg2 ...)`: uninterpreted function application
    App(String, Vec<Term>),
}

/// Constructor shorthands. The boxed-enum form gets unwieldy when a
/// constraint references three or four entities, so model-building code
/// goes through these.
impl Term {
    pub fn var(name: impl Into<String>) -> Term {
        Term::Const(name.into())
    }

    pub fn int(value: i128) -> Term {
        Term::IntLit(value)
    }

    pub fn big(value: BigInt) -> Term {
        Term::BigIntLit(value)
    }

    pub fn str_lit(value: impl Into<String>) -> Term {
        Term::StrLit(value.into())
    }

    pub fn not(term: Term) -> Term {
        Term::Not(Box::new(term))
    }

    pub fn and(terms: Vec<Term>) -> Term {
        Term::And(terms)
    }

    pub fn or(terms: Vec<Term>) -> Term {
        Term::Or(terms)
    }

    pub fn implies(lhs: Term, rhs: Term) -> Term {
        Term::Implies(Box::new(lhs), Box::new(rhs))
    }

    pub fn eq(lhs: Term, rhs: Term) -> Term {
        Term::Eq(Box::new(lhs), Box::new(rhs))
    }

    pub fn add(lhs: Term, rhs: Term) -> Term {
        Term::IntAdd(Box::new(lhs), Box::new(rhs))
    }

    pub fn sub(lhs: Term, rhs: Term) -> Term {
        Term::IntSub(Box::new(lhs), Box::new(rhs))
    }

    pub fn mul(lhs: Term, rhs: Term) -> Term {
        Term::IntMul(Box::new(lhs), Box::new(rhs))
    }

    pub fn neg(term: Term) -> Term {
        Term::IntNeg(Box::new(term))
    }

    pub fn lt(lhs: Term, rhs: Term) -> Term {
        Term::IntLt(Box::new(lhs), Box::new(rhs))
    }

    pub fn le(lhs: Term, rhs: Term) -> Term {
        Term::IntLe(Box::new(lhs), Box::new(rhs))
    }

    pub fn gt(lhs: Term, rhs: Term) -> Term {
        Term::IntGt(Box::new(lhs), Box::new(rhs))
    }

    pub fn ge(lhs: Term, rhs: Term) -> Term {
        Term::IntGe(Box::new(lhs), Box::new(rhs))
    }

    pub fn app(func: impl Into<String>, args: Vec<Term>) -> Term {
        Term::App(func.into(), args)
    }
}
