//! The DPLL search itself: unit propagation to a fixpoint, then branch on a
//! chosen literal, backtracking on conflict. Driven by an explicit work stack
//! rather than native recursion, so the search depth isn't bounded by the host
//! call stack — the natural bound here is the number of variables, which for the
//! formulas this crate targets can still run into the thousands once Tseitin
//! auxiliaries are counted.

pub mod choice;

use crate::assignment::Assignments;
use crate::cnf::{Clause, Cnf};
use crate::index::ClauseIndex;
use crate::literal::Literal;
use crate::var::Var;

use std::collections::HashMap;

/// A DPLL search over a fixed CNF formula, parameterized by the literal-choice
/// strategy used to pick the next branch.
pub struct Solver<F: Fn(&Cnf) -> Literal> {
    index: ClauseIndex,
    assignments: Assignments,
    choose_lit: F,
}

impl<F: Fn(&Cnf) -> Literal> Solver<F> {
    pub fn new(cnf: &Cnf, choose_lit: F) -> Self {
        Solver { index: ClauseIndex::new(cnf), assignments: Assignments::new(), choose_lit }
    }

    pub fn assignments(&self) -> &Assignments {
        &self.assignments
    }

    /// Read back the model's value for `var`, if the search assigned it. Fresh
    /// Tseitin auxiliaries are assigned just like any other variable, so a caller
    /// reading off a model for its own variables should filter by
    /// `!var.is_generated()`.
    pub fn value_of(&self, var: &Var) -> Option<bool> {
        self.assignments.get(var)
    }

    /// Run the search to completion. Returns whether the formula is satisfiable;
    /// on `true`, [`Solver::assignments`] holds a satisfying assignment for every
    /// variable the search actually touched.
    pub fn check(&mut self) -> bool {
        self.propagate_units();
        if self.has_empty_clause() {
            return false;
        }
        if self.index.is_empty_active() {
            return true;
        }

        // `pending[d]` is the negation of the literal currently committed to at
        // depth `d + 1`, kept around in case that branch fails and needs to be
        // retried with the opposite polarity. Popping `pending` and closing a
        // layer together is exactly backtracking one level.
        let mut pending: Vec<Literal> = Vec::new();

        loop {
            let lit = self.choose();
            log::debug!("branching on {lit}");
            self.open_layer();
            pending.push(lit.negate());
            if !self.commit(&lit) {
                if self.index.is_empty_active() {
                    return true;
                }
                continue;
            }

            loop {
                self.close_layer();
                match pending.pop() {
                    None => return false,
                    Some(neg_lit) => {
                        log::debug!("backtracking to {neg_lit}");
                        self.open_layer();
                        if !self.commit(&neg_lit) {
                            if self.index.is_empty_active() {
                                return true;
                            }
                            break;
                        }
                    }
                }
            }
        }
    }

    /// Propagate `lit` and run unit propagation to a fixpoint. Returns `true` if
    /// this branch is now unsatisfiable (some active clause has live-size 0).
    fn commit(&mut self, lit: &Literal) -> bool {
        self.propagate_literal(lit);
        self.propagate_units();
        self.has_empty_clause()
    }

    fn open_layer(&mut self) {
        self.index.push_layer();
        self.assignments.push();
    }

    fn close_layer(&mut self) {
        self.index.pop_layer().expect("search closes exactly the layers it opens");
        self.assignments.pop().expect("search closes exactly the layers it opens");
    }

    fn has_empty_clause(&self) -> bool {
        !self.index.with_count(0).is_empty()
    }

    fn choose(&self) -> Literal {
        (self.choose_lit)(&self.live_view())
    }

    fn live_view(&self) -> Cnf {
        let clauses = self
            .index
            .active_ids()
            .map(|id| Clause::new(self.index.clause(id).live_literals().iter().cloned().collect()))
            .collect();
        Cnf::new(clauses)
    }

    /// Propagate `lit`: assign its atom, deactivate every clause it now satisfies,
    /// and shrink every clause whose negation it falsifies.
    ///
    /// Assigning a conflicting value here would mean the search committed to two
    /// incompatible literals over the same atom without the index ever surfacing
    /// an empty clause in between — that can't happen by construction, since
    /// `commit`/`check` always check `has_empty_clause` before choosing the next
    /// literal to propagate. An `Err` here is therefore a bug in the search driver
    /// itself, not a reachable runtime outcome.
    fn propagate_literal(&mut self, lit: &Literal) {
        match self.assignments.assign(lit) {
            Ok(()) => {}
            Err(_) => unreachable!("the search never re-propagates an atom already committed to the opposite value"),
        }
        let satisfied: Vec<usize> = self.index.with_lit(lit).into_iter().collect();
        for id in satisfied {
            self.index.deactivate_clause(id);
        }
        let falsified_lit = lit.negate();
        let shrunk: Vec<usize> = self.index.with_lit(&falsified_lit).into_iter().collect();
        for id in shrunk {
            self.index.remove_literal_from_clause(id, &falsified_lit);
        }
        log::trace!("propagated {lit}");
    }

    /// Unit propagation to a fixpoint. At most one literal per atom is collected
    /// per pass — if two unit clauses disagree on an atom's polarity, the second
    /// one is left for the next pass (or, if none of its neighbors clear first, to
    /// surface as an empty clause), rather than propagating both polarities in the
    /// same pass and reporting a spurious immediate conflict.
    fn propagate_units(&mut self) {
        loop {
            let units = self.find_units();
            if units.is_empty() {
                return;
            }
            for lit in units {
                self.propagate_literal(&lit);
            }
        }
    }

    fn find_units(&self) -> Vec<Literal> {
        let mut by_atom: HashMap<Var, Literal> = HashMap::new();
        for id in self.index.with_count(1) {
            if let Some(lit) = self.index.clause(id).live_literals().iter().next() {
                by_atom.entry(lit.atom().clone()).or_insert_with(|| lit.clone());
            }
        }
        by_atom.into_values().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::builder::*;
    use choice::{common_lit, first_lit};

    fn lit(name: &str, polarity: bool) -> Literal {
        let v = Var::named(name);
        if polarity { Literal::positive(v) } else { Literal::negative(v) }
    }

    #[test]
    fn unit_clause_forces_its_literal() {
        let cnf = Cnf::new(vec![
            Clause::new(vec![lit("x", true)]),
            Clause::new(vec![lit("x", false), lit("y", true)]),
        ]);
        let mut solver = Solver::new(&cnf, first_lit);
        assert!(solver.check());
        assert_eq!(solver.value_of(&Var::named("x")), Some(true));
        assert_eq!(solver.value_of(&Var::named("y")), Some(true));
    }

    #[test]
    fn contradictory_units_are_unsat() {
        let cnf = Cnf::new(vec![Clause::new(vec![lit("x", true)]), Clause::new(vec![lit("x", false)])]);
        let mut solver = Solver::new(&cnf, first_lit);
        assert!(!solver.check());
    }

    #[test]
    fn empty_formula_is_trivially_satisfiable() {
        let cnf = Cnf::new(vec![]);
        let mut solver = Solver::new(&cnf, first_lit);
        assert!(solver.check());
    }

    #[test]
    fn pigeonhole_two_into_one_is_unsat() {
        // Two pigeons (p1, p2), one hole: at least one of each, and not both.
        let formula = and_many(vec![
            var("p1"),
            var("p2"),
            not(and(var("p1"), var("p2"))),
        ]);
        let cnf = formula.to_cnf().unwrap();
        let mut solver = Solver::new(&cnf, common_lit);
        assert!(!solver.check());
    }

    #[test]
    fn brute_force_oracle_agrees_on_small_random_formulas() {
        // A small fixed battery standing in for a property test: each formula
        // below is checked against exhaustive enumeration over its own variables.
        let non_cnf_formulas = vec![
            or_many(vec![
                and(var("a"), var("b")),
                and(not(var("a")), var("c")),
                and(var("b"), not(var("d"))),
            ]),
            implies(equivalent(var("a"), var("b")), or(var("c"), and(var("d"), not(var("a"))))),
        ];

        for formula in non_cnf_formulas {
            let original = formula.clone();
            let mut t = crate::tseitin::Tseitin::new(formula, false, crate::tseitin::names::PrefixNames::new("aux"));
            let cnf = t.transform(false).unwrap();
            let mut solver = Solver::new(&cnf, common_lit);
            let solver_says_sat = solver.check();
            let brute_force_says_sat = brute_force_sat_on_expr(&original);
            assert_eq!(solver_says_sat, brute_force_says_sat);
        }
    }

    fn collect_vars(expr: &crate::expr::Expr, out: &mut Vec<Var>) {
        use crate::expr::Expr;
        match expr {
            Expr::Var(v) => out.push(v.clone()),
            Expr::Not(inner) => collect_vars(inner, out),
            Expr::And(children) | Expr::Or(children) => children.iter().for_each(|c| collect_vars(c, out)),
            Expr::Implies(p, q) | Expr::Equivalent(p, q) => {
                collect_vars(p, out);
                collect_vars(q, out);
            }
        }
    }

    fn eval(expr: &crate::expr::Expr, values: &HashMap<&Var, bool>) -> bool {
        use crate::expr::Expr;
        match expr {
            Expr::Var(v) => values[v],
            Expr::Not(inner) => !eval(inner, values),
            Expr::And(children) => children.iter().all(|c| eval(c, values)),
            Expr::Or(children) => children.iter().any(|c| eval(c, values)),
            Expr::Implies(p, q) => !eval(p, values) || eval(q, values),
            Expr::Equivalent(p, q) => eval(p, values) == eval(q, values),
        }
    }

    fn brute_force_sat_on_expr(expr: &crate::expr::Expr) -> bool {
        let mut atoms = Vec::new();
        collect_vars(expr, &mut atoms);
        atoms.sort();
        atoms.dedup();
        let n = atoms.len();
        (0u32..(1 << n)).any(|bits| {
            let values: HashMap<&Var, bool> =
                atoms.iter().enumerate().map(|(i, v)| (v, (bits >> i) & 1 == 1)).collect();
            eval(expr, &values)
        })
    }
}
