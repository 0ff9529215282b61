//! Layered log of variable assignments. This is a witness of what the search has
//! decided, kept separate from the clause index's own bookkeeping — nothing in the
//! solver's control flow reads it back to decide where to branch next.

use std::collections::HashMap;

use crate::error::Error;
use crate::literal::Literal;
use crate::var::Var;

#[derive(Debug, Clone, Default)]
pub struct Assignments {
    /// `layers[0]` is the base layer (never popped). Each entry is the set of
    /// `Var`s this layer assigned, so `pop` knows which cache entries to evict.
    layers: Vec<HashMap<Var, bool>>,
    /// Flattened view: the value currently in effect for each assigned variable.
    cache: HashMap<Var, bool>,
}

impl Assignments {
    pub fn new() -> Self {
        Assignments { layers: vec![HashMap::new()], cache: HashMap::new() }
    }

    pub fn get(&self, var: &Var) -> Option<bool> {
        self.cache.get(var).copied()
    }

    pub fn depth(&self) -> usize {
        self.layers.len() - 1
    }

    /// Assign `var` to `value` in the current layer.
    ///
    /// Re-asserting the same value is a no-op. Asserting the opposite value of an
    /// existing assignment fails with [`Error::Conflict`] rather than overwriting it.
    pub fn set(&mut self, var: &Var, value: bool) -> Result<(), Error> {
        if let Some(existing) = self.cache.get(var) {
            if *existing != value {
                return Err(Error::Conflict(var.clone()));
            }
            return Ok(());
        }
        self.cache.insert(var.clone(), value);
        self.layers.last_mut().expect("base layer always present").insert(var.clone(), value);
        Ok(())
    }

    /// Assign the variable underlying `lit` so that `lit` is satisfied.
    pub fn assign(&mut self, lit: &Literal) -> Result<(), Error> {
        self.set(lit.atom(), lit.polarity())
    }

    pub fn push(&mut self) {
        self.layers.push(HashMap::new());
    }

    /// Undo every assignment made since the matching `push` and close that layer.
    pub fn pop(&mut self) -> Result<(), Error> {
        if self.layers.len() <= 1 {
            return Err(Error::IndexUnderflow);
        }
        let layer = self.layers.pop().expect("checked len above");
        for var in layer.keys() {
            self.cache.remove(var);
        }
        Ok(())
    }
}
