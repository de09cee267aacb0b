use std::collections::{BTreeMap, BTreeSet};

/// What each symbol means to a turtle, independently of the rewriting rules.
///
/// A symbol can sit in any number of these tables at once; the turtle checks
/// each one separately. Symbols that appear in none of them are simply ignored
/// when walking. Nothing here is validated against the rule alphabet.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SymbolSemantics {
    /// Symbols that move the turtle, and how far.
    pub forward: BTreeMap<char, f64>,
    /// Forward symbols that move without drawing (for that one move only).
    pub lift: BTreeSet<char>,
    pub left: BTreeSet<char>,
    pub right: BTreeSet<char>,
    pub push: BTreeSet<char>,
    pub pop: BTreeSet<char>,
}

impl SymbolSemantics {
    pub fn distance(&self, symbol: char) -> Option<f64> {
        self.forward.get(&symbol).copied()
    }

    pub fn is_lift(&self, symbol: char) -> bool {
        self.lift.contains(&symbol)
    }

    pub fn is_left(&self, symbol: char) -> bool {
        self.left.contains(&symbol)
    }

    pub fn is_right(&self, symbol: char) -> bool {
        self.right.contains(&symbol)
    }

    pub fn is_push(&self, symbol: char) -> bool {
        self.push.contains(&symbol)
    }

    pub fn is_pop(&self, symbol: char) -> bool {
        self.pop.contains(&symbol)
    }
}
