//! Free functions for building expressions, with associative flattening and
//! double-negation collapse baked into construction rather than left to a
//! separate normalization pass.

use crate::error::Error;
use crate::var::Var;

use super::Expr;

/// A single named variable.
pub fn var(name: impl Into<String>) -> Expr {
    Expr::Var(Var::named(name))
}

/// One variable per whitespace-separated name in `text`, e.g. `vars("x y z")`.
/// Fails if no names are found.
pub fn vars(text: &str) -> Result<Vec<Expr>, Error> {
    let names: Vec<&str> = text.split_whitespace().collect();
    if names.is_empty() {
        return Err(Error::Type(format!("no variable names found splitting {text:?} on whitespace")));
    }
    Ok(names_to_vars(&names))
}

/// Splits `text` on `sep` and builds one variable per non-empty piece.
pub fn vars_sep(text: &str, sep: char) -> Result<Vec<Expr>, Error> {
    let names: Vec<&str> = text.split(sep).filter(|s| !s.is_empty()).collect();
    if names.is_empty() {
        return Err(Error::Type(format!("no variable names found splitting {text:?} on {sep:?}")));
    }
    Ok(names_to_vars(&names))
}

/// One variable per name. Both callers above have already filtered out empty
/// tokens, so this is a plain map rather than a second fallible pass.
fn names_to_vars(names: &[&str]) -> Vec<Expr> {
    names.iter().map(|name| var(*name)).collect()
}

/// Negation, collapsing `not(not(e))` back to `e`.
pub fn not(e: Expr) -> Expr {
    match e {
        Expr::Not(inner) => *inner,
        other => Expr::Not(Box::new(other)),
    }
}

fn flatten(exprs: Vec<Expr>, unwrap: impl Fn(Expr) -> Option<Vec<Expr>>) -> Vec<Expr> {
    let mut flat = Vec::with_capacity(exprs.len());
    for e in exprs {
        match unwrap(e) {
            Some(children) => flat.extend(children),
            None => {}
        }
    }
    flat
}

/// Conjunction of two formulas. Flattens nested `And`s: `and(and(a, b), c)` is the
/// same three-child `And` as `and_many(vec![a, b, c])`.
pub fn and(a: Expr, b: Expr) -> Expr {
    and_many(vec![a, b])
}

/// N-ary conjunction with flattening of nested `And` children.
pub fn and_many(exprs: Vec<Expr>) -> Expr {
    let flat = flatten(exprs, |e| match e {
        Expr::And(children) => Some(children),
        other => Some(vec![other]),
    });
    Expr::And(flat)
}

/// Disjunction of two formulas, flattened the same way as [`and`].
pub fn or(a: Expr, b: Expr) -> Expr {
    or_many(vec![a, b])
}

/// N-ary disjunction with flattening of nested `Or` children.
pub fn or_many(exprs: Vec<Expr>) -> Expr {
    let flat = flatten(exprs, |e| match e {
        Expr::Or(children) => Some(children),
        other => Some(vec![other]),
    });
    Expr::Or(flat)
}

/// Material implication `a -> b`.
pub fn implies(a: Expr, b: Expr) -> Expr {
    Expr::Implies(Box::new(a), Box::new(b))
}

/// Biconditional `a <-> b`.
pub fn equivalent(a: Expr, b: Expr) -> Expr {
    Expr::Equivalent(Box::new(a), Box::new(b))
}
