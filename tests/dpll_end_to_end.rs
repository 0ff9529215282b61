use dpll_sat::expr::builder::*;
use dpll_sat::solve::choice::{common_lit, first_lit, last_lit, random_lit};
use dpll_sat::solve::Solver;
use dpll_sat::tseitin::names::PrefixNames;
use dpll_sat::tseitin::Tseitin;
use dpll_sat::var::Var;

fn to_cnf(formula: dpll_sat::expr::Expr) -> dpll_sat::cnf::Cnf {
    let mut t = Tseitin::new(formula, false, PrefixNames::new("t"));
    t.transform(false).unwrap()
}

#[test]
fn satisfiable_formula_is_accepted_by_every_chooser() {
    let formula = and(or(var("a"), var("b")), or(not(var("a")), var("c")));
    let cnf = to_cnf(formula);

    assert!(Solver::new(&cnf, common_lit).check());
    assert!(Solver::new(&cnf, first_lit).check());
    assert!(Solver::new(&cnf, last_lit).check());
    assert!(Solver::new(&cnf, random_lit(Some(1))).check());
}

#[test]
fn unsatisfiable_formula_is_rejected() {
    // a & !a & (b | c), the contradiction should dominate regardless of
    // what else is in the formula.
    let formula = and_many(vec![var("a"), not(var("a")), or(var("b"), var("c"))]);
    let cnf = to_cnf(formula);
    assert!(!Solver::new(&cnf, common_lit).check());
}

#[test]
fn tautology_is_satisfiable_and_leaves_a_model() {
    let formula = or(var("a"), not(var("a")));
    let cnf = to_cnf(formula);
    let mut solver = Solver::new(&cnf, first_lit);
    assert!(solver.check());
    assert!(solver.value_of(&Var::named("a")).is_some());
}

#[test]
fn three_coloring_of_a_triangle_is_unsatisfiable() {
    // Each vertex picks exactly one of three colors; no edge may share a color.
    // A triangle needs three distinct colors among three vertices — impossible
    // with only two colors available.
    let colors = ["r", "g"];
    let vertex = |v: &str| -> Vec<dpll_sat::expr::Expr> { colors.iter().map(|c| var(format!("{v}_{c}"))).collect() };
    let exactly_one = |vars: Vec<dpll_sat::expr::Expr>| -> dpll_sat::expr::Expr {
        let at_least_one = or_many(vars.clone());
        let mut pairs = Vec::new();
        for i in 0..vars.len() {
            for j in (i + 1)..vars.len() {
                pairs.push(not(and(vars[i].clone(), vars[j].clone())));
            }
        }
        and(at_least_one, and_many(pairs))
    };
    let differ = |v1: &str, v2: &str| -> dpll_sat::expr::Expr {
        and_many(colors.iter().map(|c| not(and(var(format!("{v1}_{c}")), var(format!("{v2}_{c}"))))).collect())
    };

    let formula = and_many(vec![
        exactly_one(vertex("a")),
        exactly_one(vertex("b")),
        exactly_one(vertex("c")),
        differ("a", "b"),
        differ("b", "c"),
        differ("a", "c"),
    ]);
    let cnf = to_cnf(formula);
    assert!(!Solver::new(&cnf, common_lit).check());
}

#[test]
fn three_coloring_of_a_triangle_with_three_colors_is_satisfiable() {
    let colors = ["r", "g", "b"];
    let vertex = |v: &str| -> Vec<dpll_sat::expr::Expr> { colors.iter().map(|c| var(format!("{v}_{c}"))).collect() };
    let exactly_one = |vars: Vec<dpll_sat::expr::Expr>| -> dpll_sat::expr::Expr {
        let at_least_one = or_many(vars.clone());
        let mut pairs = Vec::new();
        for i in 0..vars.len() {
            for j in (i + 1)..vars.len() {
                pairs.push(not(and(vars[i].clone(), vars[j].clone())));
            }
        }
        and(at_least_one, and_many(pairs))
    };
    let differ = |v1: &str, v2: &str| -> dpll_sat::expr::Expr {
        and_many(colors.iter().map(|c| not(and(var(format!("{v1}_{c}")), var(format!("{v2}_{c}"))))).collect())
    };

    let formula = and_many(vec![
        exactly_one(vertex("a")),
        exactly_one(vertex("b")),
        exactly_one(vertex("c")),
        differ("a", "b"),
        differ("b", "c"),
        differ("a", "c"),
    ]);
    let cnf = to_cnf(formula);
    assert!(Solver::new(&cnf, common_lit).check());
}

#[test]
fn empty_cnf_is_satisfiable() {
    let cnf = dpll_sat::cnf::Cnf::new(vec![]);
    assert!(Solver::new(&cnf, first_lit).check());
}
