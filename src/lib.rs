//! ArmyOfEvilRobots L-system fractal tools
//!
//! Rewrite an axiom through a handful of rules, walk the result with a turtle,
//! and fit the line work to a viewport (or an SVG document). The pieces are
//! small and separate, so a host app can drive them from whatever event loop
//! it likes; [`app::AppState`] is one such driver.
//!
//! ```rust
//! use aoer_fractal_rs::prelude::*;
//!
//! let mut koch = LSystem::new("F", 90.0);
//! koch.add_rule('F', "F+F-F-F+F");
//! koch.add_forward_char('F', 10.0);
//! koch.add_left_char('+');
//! koch.add_right_char('-');
//! koch.apply_stages(3, 5).unwrap();
//!
//! let out = render(&koch, &Viewport::new(800.0, 600.0), &FitOptions::oriented(90.0)).unwrap();
//! assert_eq!(out.segments.len(), 125);
//! ```

/// Errors shared by rewriting, walking and fitting.
pub mod errors;

/// Geometry helpers: affine matrices and SVG output.
pub mod geo_types;

/// Turtle graphics, plus the dry-run turtle that measures bounds.
pub mod turtle;

/// L-system implementation, with rewriting and symbol semantics
pub mod l_system;

/// Fit a walked system into a viewport and draw it there.
pub mod render;

/// RON-loadable render settings.
pub mod config;

/// The built-in fractal collection.
pub mod gallery;

/// Viewer state driven by a host event loop.
pub mod app;

/// One stop shopping for the common bits.
pub mod prelude {
    pub use crate::errors::LSystemError;
    pub use crate::l_system::{LSystem, SymbolSemantics};
    pub use crate::render::{render, DegeneratePolicy, FitOptions, Viewport};
    pub use crate::turtle::{bounds_for, Bounds, Turtle, TurtleTrait};
}
