//! Two-level index over a fixed clause arena: clauses never move, but each one
//! tracks which of its literals are still "live" (not yet falsified) and the index
//! keeps side-tables — by literal, by live-count — so unit propagation and
//! conflict detection don't have to scan every clause on every step.

use std::collections::{HashMap, HashSet};

use crate::cnf::{Clause, Cnf};
use crate::error::Error;
use crate::generic::layered::{LayeredSet, UndoMode};
use crate::literal::Literal;

/// One clause's mutable state: which of its original literals are still live.
#[derive(Debug, Clone)]
pub struct IndexedClause {
    live: LayeredSet<Literal>,
}

impl IndexedClause {
    fn new(clause: &Clause) -> Self {
        let live: HashSet<Literal> = clause.literals().iter().cloned().collect();
        IndexedClause { live: LayeredSet::new(UndoMode::RemoveWithUndo, live) }
    }

    pub fn live_literals(&self) -> &HashSet<Literal> {
        self.live.as_set()
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }
}

/// The clause database, indexed by literal and by live-count.
#[derive(Debug, Clone)]
pub struct ClauseIndex {
    clauses: Vec<IndexedClause>,
    active: LayeredSet<usize>,
    by_lit: HashMap<Literal, HashSet<usize>>,
    by_count: HashMap<usize, HashSet<usize>>,
    /// Per-layer record of `(clause id, old count, new count)` moves, so popping a
    /// layer can restore `by_count` in lockstep with each clause's own undo.
    count_moves: Vec<Vec<(usize, usize, usize)>>,
}

impl ClauseIndex {
    pub fn new(cnf: &Cnf) -> Self {
        let mut clauses = Vec::with_capacity(cnf.len());
        let mut by_lit: HashMap<Literal, HashSet<usize>> = HashMap::new();
        let mut by_count: HashMap<usize, HashSet<usize>> = HashMap::new();
        for (id, clause) in cnf.clauses().iter().enumerate() {
            let indexed = IndexedClause::new(clause);
            by_count.entry(indexed.live_count()).or_default().insert(id);
            for lit in clause.literals() {
                by_lit.entry(lit.clone()).or_default().insert(id);
            }
            clauses.push(indexed);
        }
        let active = LayeredSet::new(UndoMode::RemoveWithUndo, (0..clauses.len()).collect());
        ClauseIndex { clauses, active, by_lit, by_count, count_moves: vec![Vec::new()] }
    }

    pub fn clause(&self, id: usize) -> &IndexedClause {
        &self.clauses[id]
    }

    pub fn num_clauses(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty_active(&self) -> bool {
        self.active.is_empty()
    }

    pub fn active_ids(&self) -> impl Iterator<Item = usize> + '_ {
        self.active.as_set().iter().copied()
    }

    /// Active clauses in which `lit` currently appears live.
    pub fn with_lit(&self, lit: &Literal) -> HashSet<usize> {
        self.by_lit
            .get(lit)
            .into_iter()
            .flatten()
            .filter(|id| self.active.contains(id) && self.clauses[**id].live.contains(lit))
            .copied()
            .collect()
    }

    /// Active clauses whose current live-literal count is exactly `k`.
    pub fn with_count(&self, k: usize) -> HashSet<usize> {
        self.by_count
            .get(&k)
            .into_iter()
            .flatten()
            .filter(|id| self.active.contains(id))
            .copied()
            .collect()
    }

    /// Mark a clause satisfied: remove it from the active set.
    pub fn deactivate_clause(&mut self, id: usize) {
        self.active.modify([id]);
    }

    /// Remove a falsified literal from a clause's live set, moving the clause
    /// between `by_count` buckets if its count changes.
    pub fn remove_literal_from_clause(&mut self, id: usize, lit: &Literal) {
        let old = self.clauses[id].live_count();
        self.clauses[id].live.modify([lit.clone()]);
        let new = self.clauses[id].live_count();
        if old != new {
            self.move_count(id, old, new);
        }
    }

    fn move_count(&mut self, id: usize, old: usize, new: usize) {
        if let Some(set) = self.by_count.get_mut(&old) {
            set.remove(&id);
        }
        self.by_count.entry(new).or_default().insert(id);
        self.count_moves.last_mut().expect("base layer always present").push((id, old, new));
    }

    pub fn push_layer(&mut self) {
        self.active.push_layer();
        for clause in &mut self.clauses {
            clause.live.push_layer();
        }
        self.count_moves.push(Vec::new());
    }

    pub fn pop_layer(&mut self) -> Result<(), Error> {
        if self.count_moves.len() <= 1 {
            return Err(Error::IndexUnderflow);
        }
        self.active.pop_layer()?;
        for clause in &mut self.clauses {
            clause.live.pop_layer()?;
        }
        let moves = self.count_moves.pop().expect("checked len above");
        for (id, old, new) in moves.into_iter().rev() {
            if let Some(set) = self.by_count.get_mut(&new) {
                set.remove(&id);
            }
            self.by_count.entry(old).or_default().insert(id);
        }
        Ok(())
    }
}
