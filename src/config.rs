//! Runtime configuration shared by the library's entry points and the `queens`
//! binary: which chooser to branch with, which symbol table to print with, and an
//! optional RNG seed for the random chooser.

use crate::expr::SymbolStyle;
use crate::solve::choice::{common_lit, first_lit, last_lit, random_lit, ChooseLit};

/// Which built-in literal-choice strategy to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chooser {
    Common,
    First,
    Last,
    Random,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub chooser: Chooser,
    pub symbol_style: SymbolStyle,
    /// Seed for `Chooser::Random`. `None` draws a fresh seed each time
    /// `choose_fn` is called.
    pub random_seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config { chooser: Chooser::Common, symbol_style: SymbolStyle::Ascii, random_seed: None }
    }
}

impl Config {
    /// Build the boxed chooser this config describes.
    pub fn choose_fn(&self) -> ChooseLit {
        match self.chooser {
            Chooser::Common => Box::new(common_lit),
            Chooser::First => Box::new(first_lit),
            Chooser::Last => Box::new(last_lit),
            Chooser::Random => random_lit(self.random_seed),
        }
    }
}
