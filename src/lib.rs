/*!
A small Boolean satisfiability toolkit: build a propositional formula, rewrite it
to an equisatisfiable CNF formula with the Tseitin transformation, and decide it
with an indexed DPLL search.

```
use dpll_sat::expr::builder::*;
use dpll_sat::solve::Solver;
use dpll_sat::solve::choice::first_lit;
use dpll_sat::tseitin::{names::PrefixNames, Tseitin};

// p -> (q & ~p)
let formula = implies(var("p"), and(var("q"), not(var("p"))));
let mut tseitin = Tseitin::new(formula, false, PrefixNames::new("t"));
let cnf = tseitin.transform(true).unwrap();

let mut solver = Solver::new(&cnf, first_lit);
assert!(solver.check());
```

The pieces compose but don't have to be used together: an already-CNF-shaped
[`expr::Expr`] can skip the Tseitin step via [`expr::Expr::to_cnf`], and
[`solve::Solver`] only ever needs a [`cnf::Cnf`] and a chooser.
*/

pub mod assignment;
pub mod cnf;
pub mod config;
pub mod demos;
pub mod error;
pub mod expr;
pub mod generic;
pub mod index;
pub mod literal;
pub mod solve;
pub mod tseitin;
pub mod var;

pub use error::Error;
