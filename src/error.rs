/*!
Error types used across the crate.

The taxonomy mirrors the four failure classes named by the design: a malformed builder
input, a conflicting variable assignment, popping past the base layer of a layered
structure, and a structural invariant violated by a caller (or, in one documented case,
by the transformer itself).
*/

use std::fmt;

use crate::var::Var;

/// A union of the error kinds raised anywhere in the crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A malformed builder input, e.g. an empty name in a bulk variable parse.
    Type(String),

    /// An attempt to assign a variable to a value incompatible with its existing
    /// assignment.
    Conflict(Var),

    /// An attempt to pop the base layer of a layered set or an assignment stack.
    IndexUnderflow,

    /// A CNF-shaped operation was invoked on a non-CNF expression, or an
    /// equivalence-to-clause rewrite was invoked on a malformed equivalence.
    StructuralInvariant(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Type(msg) => write!(f, "type error: {msg}"),
            Error::Conflict(var) => write!(f, "conflicting assignment for variable '{var}'"),
            Error::IndexUnderflow => write!(f, "attempted to pop the base layer"),
            Error::StructuralInvariant(msg) => write!(f, "structural invariant violated: {msg}"),
        }
    }
}

impl std::error::Error for Error {}
