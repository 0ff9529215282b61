//! Literal-choice strategies: given the currently live view of the formula, pick
//! the next literal to branch on. Any `Fn(&Cnf) -> Literal` is acceptable, so a
//! caller can plug in their own; these four are the ones the search ships with.

use std::cell::RefCell;
use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::cnf::Cnf;
use crate::literal::Literal;

/// A boxed chooser, the shape [`crate::config::Config`] hands to [`crate::solve::Solver`].
pub type ChooseLit = Box<dyn Fn(&Cnf) -> Literal>;

/// The literal occurring in the most live clauses, ties broken by iteration order.
pub fn common_lit(cnf: &Cnf) -> Literal {
    let mut counts: HashMap<&Literal, usize> = HashMap::new();
    for clause in cnf.clauses() {
        for lit in clause.literals() {
            *counts.entry(lit).or_insert(0) += 1;
        }
    }
    counts
        .into_iter()
        .max_by_key(|(_, count)| *count)
        .map(|(lit, _)| lit.clone())
        .expect("cnf passed to a chooser always has at least one live clause")
}

/// The first literal of the first clause.
pub fn first_lit(cnf: &Cnf) -> Literal {
    cnf.clauses()
        .first()
        .and_then(|c| c.literals().first())
        .cloned()
        .expect("cnf passed to a chooser always has at least one live clause")
}

/// The last literal of the last clause.
pub fn last_lit(cnf: &Cnf) -> Literal {
    cnf.clauses()
        .last()
        .and_then(|c| c.literals().last())
        .cloned()
        .expect("cnf passed to a chooser always has at least one live clause")
}

/// A uniformly random literal, seeded so a run can be reproduced. Passing `None`
/// draws a fresh seed from the system RNG once, at construction time.
pub fn random_lit(seed: Option<u64>) -> ChooseLit {
    let seed = seed.unwrap_or_else(rand::random);
    let rng = RefCell::new(StdRng::seed_from_u64(seed));
    Box::new(move |cnf: &Cnf| {
        let mut rng = rng.borrow_mut();
        let clause_idx = rng.gen_range(0..cnf.len());
        let clause = &cnf.clauses()[clause_idx];
        let lit_idx = rng.gen_range(0..clause.len());
        clause.literals()[lit_idx].clone()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cnf::Clause;
    use crate::var::Var;

    fn lit(name: &str) -> Literal {
        Literal::positive(Var::named(name))
    }

    #[test]
    fn common_lit_prefers_the_most_frequent_literal() {
        let cnf = Cnf::new(vec![
            Clause::new(vec![lit("x"), lit("y")]),
            Clause::new(vec![lit("x"), lit("z")]),
        ]);
        assert_eq!(common_lit(&cnf), lit("x"));
    }

    #[test]
    fn first_and_last_pick_opposite_ends() {
        let cnf = Cnf::new(vec![Clause::new(vec![lit("a"), lit("b")]), Clause::new(vec![lit("c")])]);
        assert_eq!(first_lit(&cnf), lit("a"));
        assert_eq!(last_lit(&cnf), lit("c"));
    }

    #[test]
    fn random_lit_is_reproducible_given_a_seed() {
        let cnf = Cnf::new(vec![Clause::new(vec![lit("a"), lit("b"), lit("c")])]);
        let chooser_a = random_lit(Some(7));
        let chooser_b = random_lit(Some(7));
        assert_eq!(chooser_a(&cnf), chooser_b(&cnf));
    }
}
