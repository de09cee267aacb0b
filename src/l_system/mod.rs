//! The l_system module provides a simple Lindenmayer fractal generator. An
//! [`LSystem`] carries both its rewriting rules and the [`SymbolSemantics`]
//! telling a turtle what each symbol means, since those meanings vary from one
//! fractal to the next.

use std::collections::BTreeMap;
use std::fmt;

use tracing::debug;

use crate::errors::LSystemError;

mod semantics;
pub use semantics::SymbolSemantics;

/// Past this many symbols, [`LSystem::details`] reports the length of the
/// current axiom instead of the axiom itself.
pub const DETAILS_AXIOM_LIMIT: usize = 10_000;

/// # LSystem
///
/// What it says on the box; a simple L-system for turtle based fractal art.
///
/// # Example
///
/// ```rust
/// use aoer_fractal_rs::l_system::LSystem;
///
/// let mut tree = LSystem::new("0", 45.0);
/// tree.add_rule('1', "11");
/// tree.add_rule('0', "1[0]0");
/// tree.add_forward_char('1', 10.0);
/// tree.add_forward_char('0', 5.0);
/// tree.add_push_char('[');
/// tree.add_pop_char(']');
///
/// tree.apply_rules();
/// assert_eq!(tree.axiom, "1[0]0");
/// tree.apply_rules();
/// assert_eq!(tree.axiom, "11[1[0]0]1[0]0");
/// assert_eq!(tree.original_axiom(), "0");
/// ```
#[derive(Clone, Debug)]
pub struct LSystem {
    /// The current generation. Replaced wholesale by [`LSystem::apply_rules`].
    pub axiom: String,
    original_axiom: String,
    /// Turn increment in degrees for left/right symbols.
    pub angle: f64,
    pub rules: BTreeMap<char, String>,
    pub semantics: SymbolSemantics,
}

impl LSystem {
    pub fn new(axiom: &str, angle: f64) -> LSystem {
        LSystem {
            axiom: axiom.to_string(),
            original_axiom: axiom.to_string(),
            angle,
            rules: BTreeMap::new(),
            semantics: SymbolSemantics::default(),
        }
    }

    /// The axiom this system was created with, before any rewriting.
    pub fn original_axiom(&self) -> &str {
        &self.original_axiom
    }

    /// Registers (or overwrites) the replacement for `symbol`.
    pub fn add_rule(&mut self, symbol: char, replacement: &str) {
        self.rules.insert(symbol, replacement.to_string());
    }

    pub fn add_forward_char(&mut self, symbol: char, distance: f64) {
        self.semantics.forward.insert(symbol, distance);
    }

    pub fn add_lift_char(&mut self, symbol: char) {
        self.semantics.lift.insert(symbol);
    }

    pub fn add_left_char(&mut self, symbol: char) {
        self.semantics.left.insert(symbol);
    }

    pub fn add_right_char(&mut self, symbol: char) {
        self.semantics.right.insert(symbol);
    }

    pub fn add_push_char(&mut self, symbol: char) {
        self.semantics.push.insert(symbol);
    }

    pub fn add_pop_char(&mut self, symbol: char) {
        self.semantics.pop.insert(symbol);
    }

    fn rewrite(&self, state: &str) -> String {
        state
            .chars()
            .map(|c| match self.rules.get(&c) {
                Some(replacement) => replacement.clone(),
                None => String::from(c),
            })
            .collect()
    }

    fn recur(&self, state: String, order: u32) -> String {
        if order == 0 {
            state
        } else {
            let new_state = self.rewrite(&state);
            self.recur(new_state, order - 1)
        }
    }

    /// Rewrites the current axiom once, replacing it with the next generation.
    pub fn apply_rules(&mut self) {
        self.axiom = self.rewrite(&self.axiom);
    }

    /// Applies `stage` generations, refusing anything above `max_stage` before
    /// doing any work. Output grows exponentially with the stage, so every
    /// caller has to pick a ceiling.
    pub fn apply_stages(&mut self, stage: u32, max_stage: u32) -> Result<(), LSystemError> {
        if stage > max_stage {
            return Err(LSystemError::InvalidStage {
                stage,
                max: max_stage,
            });
        }
        for _ in 0..stage {
            self.apply_rules();
        }
        debug!(stage, symbols = self.axiom.chars().count(), "Expanded L-system");
        Ok(())
    }

    /// #expand
    ///
    /// Returns the axiom after `order` generations without touching this
    /// system's state.
    pub fn expand(&self, order: u32) -> String {
        self.recur(self.axiom.clone(), order)
    }

    /// Human readable dump of the system: categories, rules, and the current
    /// axiom (or just its length once it gets large).
    pub fn details(&self) -> String {
        let mut lines = vec![
            format!("Axiom: {}", self.original_axiom),
            format!("Angle: {}", self.angle),
        ];
        let sem = &self.semantics;
        lines.extend(sem.forward.keys().map(|c| format!("Forward: {}", c)));
        lines.extend(sem.lift.iter().map(|c| format!("Lift: {}", c)));
        lines.extend(sem.left.iter().map(|c| format!("Left: {}", c)));
        lines.extend(sem.right.iter().map(|c| format!("Right: {}", c)));
        lines.extend(sem.push.iter().map(|c| format!("Push: {}", c)));
        lines.extend(sem.pop.iter().map(|c| format!("Pop: {}", c)));
        lines.extend(
            self.rules
                .iter()
                .map(|(c, replacement)| format!("{} --> {}", c, replacement)),
        );

        let length = self.axiom.chars().count();
        if length < DETAILS_AXIOM_LIMIT {
            lines.push(format!("Current string:\n{}", self.axiom));
        } else {
            lines.push(format!("Current string length: {}", length));
        }
        lines.join("\n")
    }
}

impl fmt::Display for LSystem {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.details())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_expand_simple() {
        let mut system = LSystem::new("A", 0.0);
        system.add_rule('A', "AB");
        system.add_rule('B', "A");
        assert!(system.expand(2) == "ABA".to_string());
        assert!(system.expand(5) == "ABAABABAABAAB".to_string());
        // expand leaves the system alone
        assert_eq!(system.axiom, "A");
    }

    #[test]
    fn test_binary_tree_stage_one() {
        let mut system = LSystem::new("0", 45.0);
        system.add_rule('0', "1[0]0");
        system.add_rule('1', "11");
        system.apply_rules();
        assert_eq!(system.axiom, "1[0]0");
    }

    #[test]
    fn test_cantor_stage_two() {
        let mut system = LSystem::new("A", 0.0);
        system.add_rule('A', "ABA");
        system.add_rule('B', "BBB");
        system.apply_stages(2, 6).unwrap();
        assert_eq!(system.axiom, "ABABBBABA");
        assert_eq!(system.expand(0), system.axiom);
    }

    #[test]
    fn test_stage_zero_is_original() {
        let mut system = LSystem::new("F-G-G", 120.0);
        system.add_rule('F', "F-G+F+G-F");
        system.add_rule('G', "GG");
        system.apply_stages(0, 7).unwrap();
        assert_eq!(system.axiom, system.original_axiom());
    }

    #[test]
    fn test_undefined_symbols_are_terminal() {
        let mut system = LSystem::new("X", 0.0);
        system.add_rule('X', "XqY");
        system.apply_rules();
        system.apply_rules();
        assert_eq!(system.axiom, "XqYqY");
    }

    #[test]
    fn test_rule_overwrite() {
        let mut system = LSystem::new("A", 0.0);
        system.add_rule('A', "AA");
        system.add_rule('A', "B");
        system.apply_rules();
        assert_eq!(system.axiom, "B");
    }

    #[test]
    fn test_stage_above_max() {
        let mut system = LSystem::new("F", 90.0);
        system.add_rule('F', "F+F-F-F+F");
        let err = system.apply_stages(6, 5).unwrap_err();
        assert_eq!(err, LSystemError::InvalidStage { stage: 6, max: 5 });
        assert_eq!(system.axiom, "F");
    }

    #[test]
    fn test_rewrite_deterministic() {
        let alphabet = ['F', 'G', '+', '-', '[', ']', 'X'];
        let mut rng = SmallRng::seed_from_u64(0x5eed);
        for _ in 0..50 {
            let mut pick = |len: usize| -> String {
                (0..len)
                    .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
                    .collect()
            };
            let axiom = pick(4);
            let f_rule = pick(5);
            let g_rule = pick(3);
            let build = || {
                let mut system = LSystem::new(&axiom, 30.0);
                system.add_rule('F', &f_rule);
                system.add_rule('G', &g_rule);
                system
            };
            let mut a = build();
            let mut b = build();
            a.apply_stages(3, 3).unwrap();
            b.apply_stages(3, 3).unwrap();
            assert_eq!(a.axiom, b.axiom);
            assert_eq!(a.axiom, build().expand(3));
        }
    }

    #[test]
    fn test_length_non_decreasing() {
        let mut system = LSystem::new("-X", 25.0);
        system.add_rule('X', "F+[[X]-X]-F[-FX]+X");
        system.add_rule('F', "FF");
        let mut last = system.axiom.len();
        for _ in 0..5 {
            system.apply_rules();
            assert!(system.axiom.len() >= last);
            last = system.axiom.len();
        }
    }

    #[test]
    fn test_details() {
        let mut system = LSystem::new("A", 0.0);
        system.add_rule('A', "ABA");
        system.add_rule('B', "BBB");
        system.add_forward_char('A', 10.0);
        system.add_forward_char('B', 10.0);
        system.add_lift_char('B');
        system.apply_rules();
        let details = system.details();
        assert_eq!(
            details,
            "Axiom: A\nAngle: 0\nForward: A\nForward: B\nLift: B\n\
             A --> ABA\nB --> BBB\nCurrent string:\nABA"
        );
        assert_eq!(details, format!("{}", system));
    }

    #[test]
    fn test_details_long_axiom() {
        let mut system = LSystem::new("A", 0.0);
        system.add_rule('A', "AA");
        system.apply_stages(14, 14).unwrap();
        let details = system.details();
        assert!(details.ends_with("Current string length: 16384"));
        assert!(!details.contains("Current string:\n"));
    }
}
