//! Tseitin transformation: rewriting an arbitrary propositional formula into an
//! equisatisfiable CNF formula whose size is linear in the size of the input tree,
//! by naming every non-literal subexpression with a fresh variable and recording
//! the equivalence between the name and what it names.

pub mod names;

use std::collections::HashMap;

use crate::error::Error;
use crate::expr::Expr;
use crate::cnf::{Clause, Cnf};
use crate::literal::Literal;
use crate::var::Var;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Connective {
    And,
    Or,
}

/// The right-hand side of one introduced equivalence `x <-> rhs`.
#[derive(Debug, Clone)]
enum EquivRhs {
    Not(Literal),
    And(Literal, Literal),
    Or(Literal, Literal),
    Implies(Literal, Literal),
}

#[derive(Debug, Clone)]
struct Equivalence {
    lhs: Var,
    rhs: EquivRhs,
}

/// Drives the rewrite and caches its result so `transform` can be called more than
/// once (e.g. once sorted, once not) without repeating the subexpression walk.
pub struct Tseitin<G: Iterator<Item = String>> {
    expr: Expr,
    rename_vars: bool,
    name_gen: G,
    renames: HashMap<Var, Var>,
    equivalences: Vec<Equivalence>,
    root: Option<Literal>,
}

impl<G: Iterator<Item = String>> Tseitin<G> {
    /// `rename_vars` controls whether variables already appearing in `expr` are
    /// themselves replaced by fresh names drawn from `name_gen` (useful when the
    /// caller's own variable names must not leak into solver output) or left as
    /// they are, with `name_gen` supplying only the auxiliary variables the
    /// rewrite introduces.
    pub fn new(expr: Expr, rename_vars: bool, name_gen: G) -> Self {
        Tseitin { expr, rename_vars, name_gen, renames: HashMap::new(), equivalences: Vec::new(), root: None }
    }

    /// Run the rewrite (if it hasn't already run) and return the resulting CNF.
    /// When `sort` is true, the introduced equivalences are emitted in order of
    /// their auxiliary variable's name, giving deterministic clause order across
    /// runs; unsorted output reflects the order subexpressions were visited in.
    pub fn transform(&mut self, sort: bool) -> Result<Cnf, Error> {
        if self.root.is_none() {
            let expr = self.expr.clone();
            let root = self.rewrite(&expr)?;
            self.root = Some(root);
        }
        let mut equivalences: Vec<&Equivalence> = self.equivalences.iter().collect();
        if sort {
            equivalences.sort_by(|a, b| a.lhs.name().cmp(b.lhs.name()));
        }
        let mut clauses = vec![Clause::new(vec![self.root.clone().expect("computed above")])];
        for eq in equivalences {
            clauses.extend(equivalence_clauses(eq)?);
        }
        Ok(Cnf::new(clauses))
    }

    fn fresh(&mut self) -> Result<Var, Error> {
        let name = self
            .name_gen
            .next()
            .ok_or_else(|| Error::StructuralInvariant("name generator exhausted".into()))?;
        Ok(Var::generated(name))
    }

    fn lookup(&mut self, v: &Var) -> Result<Var, Error> {
        if !self.rename_vars {
            return Ok(v.clone());
        }
        if let Some(renamed) = self.renames.get(v) {
            return Ok(renamed.clone());
        }
        let renamed = self.fresh()?;
        self.renames.insert(v.clone(), renamed.clone());
        Ok(renamed)
    }

    fn emit(&mut self, lhs: Var, rhs: EquivRhs) -> Literal {
        self.equivalences.push(Equivalence { lhs: lhs.clone(), rhs });
        Literal::positive(lhs)
    }

    /// Rewrite `expr`, returning the literal that stands in for it: the renamed
    /// variable itself for a bare `Var`, its negation for `Not(Var)`, or a fresh
    /// auxiliary variable for anything with more structure.
    fn rewrite(&mut self, expr: &Expr) -> Result<Literal, Error> {
        match expr {
            Expr::Var(v) => Ok(Literal::positive(self.lookup(v)?)),
            Expr::Not(inner) if matches!(**inner, Expr::Var(_)) => {
                let Expr::Var(v) = &**inner else { unreachable!() };
                Ok(Literal::negative(self.lookup(v)?))
            }
            Expr::Not(inner) => {
                let l = self.rewrite(inner)?;
                let x = self.fresh()?;
                Ok(self.emit(x, EquivRhs::Not(l)))
            }
            Expr::And(children) => self.rewrite_nary(children, Connective::And),
            Expr::Or(children) => self.rewrite_nary(children, Connective::Or),
            Expr::Implies(p, q) => {
                let l = self.rewrite(p)?;
                let r = self.rewrite(q)?;
                let x = self.fresh()?;
                Ok(self.emit(x, EquivRhs::Implies(l, r)))
            }
            // An `Equivalent` node rewritten in place, rather than pre-expanded
            // into two `Implies`, would need a fifth clause schema this
            // transformer doesn't have (see `equivalence_clauses`): the schema
            // table only covers `Not`/`And`/`Or`/`Implies` right-hand sides. A
            // top-level `Equivalent` is still a legal formula to hand in (it's
            // just the root literal in that case); what's unsupported is an
            // `Equivalent` buried as a non-root subexpression.
            Expr::Equivalent(p, q) => {
                let expanded = crate::expr::builder::and(
                    crate::expr::builder::implies((**p).clone(), (**q).clone()),
                    crate::expr::builder::implies((**q).clone(), (**p).clone()),
                );
                self.rewrite(&expanded)
            }
        }
    }

    fn rewrite_nary(&mut self, children: &[Expr], conn: Connective) -> Result<Literal, Error> {
        match children {
            [] => Err(Error::StructuralInvariant(format!(
                "empty {} has no literal representation",
                match conn {
                    Connective::And => "conjunction",
                    Connective::Or => "disjunction",
                }
            ))),
            [single] => self.rewrite(single),
            _ => {
                let (init, last) = children.split_at(children.len() - 1);
                let last = &last[0];
                let l_init = if init.len() == 1 {
                    self.rewrite(&init[0])?
                } else {
                    let node = match conn {
                        Connective::And => Expr::And(init.to_vec()),
                        Connective::Or => Expr::Or(init.to_vec()),
                    };
                    self.rewrite(&node)?
                };
                let l_last = self.rewrite(last)?;
                let x = self.fresh()?;
                let rhs = match conn {
                    Connective::And => EquivRhs::And(l_init, l_last),
                    Connective::Or => EquivRhs::Or(l_init, l_last),
                };
                Ok(self.emit(x, rhs))
            }
        }
    }
}

fn equivalence_clauses(equiv: &Equivalence) -> Result<Vec<Clause>, Error> {
    let a = Literal::positive(equiv.lhs.clone());
    let not_a = a.negate();
    match &equiv.rhs {
        EquivRhs::Not(b) => Ok(vec![
            Clause::new(vec![not_a.clone(), b.negate()]),
            Clause::new(vec![a.clone(), b.clone()]),
        ]),
        EquivRhs::And(b, c) => Ok(vec![
            Clause::new(vec![not_a.clone(), b.clone()]),
            Clause::new(vec![not_a.clone(), c.clone()]),
            Clause::new(vec![a.clone(), b.negate(), c.negate()]),
        ]),
        EquivRhs::Or(b, c) => Ok(vec![
            Clause::new(vec![not_a.clone(), b.clone(), c.clone()]),
            Clause::new(vec![a.clone(), b.negate()]),
            Clause::new(vec![a.clone(), c.negate()]),
        ]),
        EquivRhs::Implies(b, c) => Ok(vec![
            Clause::new(vec![not_a.clone(), b.negate(), c.clone()]),
            Clause::new(vec![a.clone(), b.clone()]),
            Clause::new(vec![a.clone(), c.negate()]),
        ]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::builder::*;
    use names::PrefixNames;

    #[test]
    fn a_bare_literal_needs_no_auxiliary_variables() {
        let mut t = Tseitin::new(var("p"), false, PrefixNames::new("t"));
        let cnf = t.transform(false).unwrap();
        assert_eq!(cnf.len(), 1);
        assert_eq!(cnf.clauses()[0].len(), 1);
    }

    #[test]
    fn conjunction_introduces_one_equivalence() {
        let formula = and(var("p"), var("q"));
        let mut t = Tseitin::new(formula, false, PrefixNames::new("t"));
        let cnf = t.transform(false).unwrap();
        // root unit clause + 3 clauses for the AND schema
        assert_eq!(cnf.len(), 4);
    }

    #[test]
    fn transform_is_deterministic_when_sorted() {
        let formula = implies(and(var("p"), var("q")), or(var("r"), not(var("p"))));
        let mut t1 = Tseitin::new(formula.clone(), false, PrefixNames::new("t"));
        let mut t2 = Tseitin::new(formula, false, PrefixNames::new("t"));
        assert_eq!(t1.transform(true).unwrap(), t2.transform(true).unwrap());
    }

    #[test]
    fn nested_equivalent_is_expanded_before_rewriting() {
        // p <-> (q <-> r), buried under a negation so it is not the formula's root.
        let formula = not(equivalent(var("p"), equivalent(var("q"), var("r"))));
        let mut t = Tseitin::new(formula, false, PrefixNames::new("t"));
        assert!(t.transform(false).is_ok());
    }

    #[test]
    fn renaming_replaces_user_variables_with_generated_ones() {
        let mut t = Tseitin::new(var("secret"), true, PrefixNames::new("t"));
        let cnf = t.transform(false).unwrap();
        let lit = &cnf.clauses()[0].literals()[0];
        assert!(lit.atom().is_generated());
        assert_ne!(lit.atom().name(), "secret");
    }
}
