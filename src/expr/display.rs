use std::fmt;

use super::{symbol_style, Expr, Precedence};

fn write_child(f: &mut fmt::Formatter<'_>, parent: Precedence, child: &Expr) -> fmt::Result {
    if child.precedence() <= parent {
        write!(f, "({child})")
    } else {
        write!(f, "{child}")
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let style = symbol_style();
        match self {
            Expr::Var(v) => write!(f, "{v}"),
            Expr::Not(inner) => {
                write!(f, "{}", style.not())?;
                write_child(f, Precedence::Not, inner)
            }
            Expr::And(children) => {
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        write!(f, " {} ", style.and())?;
                    }
                    write_child(f, Precedence::And, child)?;
                }
                Ok(())
            }
            Expr::Or(children) => {
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        write!(f, " {} ", style.or())?;
                    }
                    write_child(f, Precedence::Or, child)?;
                }
                Ok(())
            }
            Expr::Implies(a, b) => {
                write_child(f, Precedence::Implies, a)?;
                write!(f, " {} ", style.implies())?;
                write_child(f, Precedence::Implies, b)
            }
            Expr::Equivalent(a, b) => {
                write_child(f, Precedence::Equivalent, a)?;
                write!(f, " {} ", style.equivalent())?;
                write_child(f, Precedence::Equivalent, b)
            }
        }
    }
}
