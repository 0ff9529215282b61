//! The propositional expression tree and its CNF-recognition helpers.

pub mod builder;
pub mod display;
pub mod symbols;

pub use symbols::{set_symbol_style, symbol_style, SymbolStyle};

use crate::cnf::{Clause, Cnf};
use crate::error::Error;
use crate::literal::Literal;
use crate::var::Var;

/// A propositional formula.
///
/// `And` and `Or` are n-ary and flattened on construction (nested `And`s merge into
/// their parent, likewise for `Or`) rather than kept strictly binary, so a formula
/// built from a long conjunction doesn't grow a deep right-leaning chain of wrapper
/// nodes. `Not` collapses double negation at construction time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    Var(Var),
    Not(Box<Expr>),
    And(Vec<Expr>),
    Or(Vec<Expr>),
    Implies(Box<Expr>, Box<Expr>),
    Equivalent(Box<Expr>, Box<Expr>),
}

/// Binding strength used by `Display` to decide when a subexpression needs
/// parenthesizing. Higher binds tighter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum Precedence {
    Equivalent,
    Implies,
    Or,
    And,
    Not,
    Atom,
}

impl Expr {
    pub(crate) fn precedence(&self) -> Precedence {
        match self {
            Expr::Var(_) => Precedence::Atom,
            Expr::Not(_) => Precedence::Not,
            Expr::And(_) => Precedence::And,
            Expr::Or(_) => Precedence::Or,
            Expr::Implies(_, _) => Precedence::Implies,
            Expr::Equivalent(_, _) => Precedence::Equivalent,
        }
    }

    /// True if this expression is an atom (`Var`) or its negation.
    pub fn is_literal(&self) -> bool {
        matches!(self, Expr::Var(_)) || matches!(self, Expr::Not(inner) if matches!(**inner, Expr::Var(_)))
    }

    fn is_clause(&self) -> bool {
        match self {
            Expr::Or(children) => children.iter().all(Expr::is_literal),
            other => other.is_literal(),
        }
    }

    /// True if this expression is a conjunction of clauses (or is itself a single
    /// clause, or a single literal) — i.e. `to_cnf` will succeed on it.
    pub fn is_cnf(&self) -> bool {
        match self {
            Expr::And(children) => children.iter().all(Expr::is_clause),
            other => other.is_clause(),
        }
    }

    /// View this expression as a single literal, if it is one.
    pub fn to_literal(&self) -> Result<Literal, Error> {
        match self {
            Expr::Var(v) => Ok(Literal::positive(v.clone())),
            Expr::Not(inner) => match &**inner {
                Expr::Var(v) => Ok(Literal::negative(v.clone())),
                _ => Err(Error::StructuralInvariant(format!("not a literal: {self}"))),
            },
            _ => Err(Error::StructuralInvariant(format!("not a literal: {self}"))),
        }
    }

    fn clause(&self) -> Result<Clause, Error> {
        match self {
            Expr::Or(children) => Ok(Clause::new(
                children.iter().map(Expr::to_literal).collect::<Result<Vec<_>, _>>()?,
            )),
            other => Ok(Clause::new(vec![other.to_literal()?])),
        }
    }

    /// Convert a CNF-shaped expression into the flat [`Cnf`] representation used by
    /// the clause index and solver. Fails with [`Error::StructuralInvariant`] if
    /// `self` is not CNF-shaped.
    pub fn to_cnf(&self) -> Result<Cnf, Error> {
        if !self.is_cnf() {
            return Err(Error::StructuralInvariant(format!(
                "expression is not in conjunctive normal form: {self}"
            )));
        }
        let clauses = match self {
            Expr::And(children) => children.iter().map(Expr::clause).collect::<Result<Vec<_>, _>>()?,
            other => vec![other.clause()?],
        };
        Ok(Cnf::new(clauses))
    }
}

impl std::ops::Not for Expr {
    type Output = Expr;
    fn not(self) -> Expr {
        builder::not(self)
    }
}

impl std::ops::BitAnd for Expr {
    type Output = Expr;
    fn bitand(self, rhs: Expr) -> Expr {
        builder::and(self, rhs)
    }
}

impl std::ops::BitOr for Expr {
    type Output = Expr;
    fn bitor(self, rhs: Expr) -> Expr {
        builder::or(self, rhs)
    }
}
