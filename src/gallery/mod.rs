//! The built-in fractals. Each definition knows how to build its L-system for a
//! given stage and turn angle, how far it may be expanded, and how it prefers
//! to be oriented on screen.
//!
//! ```rust
//! use aoer_fractal_rs::gallery::GALLERY;
//!
//! let cantor = &GALLERY[1];
//! let system = cantor.build(2, cantor.default_angle).unwrap();
//! assert_eq!(system.axiom, "ABABBBABA");
//! assert!(cantor.build(cantor.max_stage + 1, 0.0).is_err());
//! ```

use crate::errors::LSystemError;
use crate::l_system::LSystem;

/// Canvas width the forward distances were tuned against.
const CANVAS_WIDTH: f64 = 800.0;

pub struct FractalDefinition {
    pub name: &'static str,
    pub default_angle: f64,
    pub max_stage: u32,
    pub stroke_weight: f64,
    /// Builds the unexpanded system, with forward distances for `stage`.
    configure: fn(stage: u32, angle: f64) -> LSystem,
    orientation: fn(stage: u32) -> f64,
}

impl FractalDefinition {
    /// The system for `stage`, already rewritten `stage` times.
    pub fn build(&self, stage: u32, angle: f64) -> Result<LSystem, LSystemError> {
        if stage > self.max_stage {
            return Err(LSystemError::InvalidStage {
                stage,
                max: self.max_stage,
            });
        }
        let mut system = (self.configure)(stage, angle);
        system.apply_stages(stage, self.max_stage)?;
        Ok(system)
    }

    /// Rotation, in degrees, to present the fractal at.
    pub fn orientation(&self, stage: u32) -> f64 {
        (self.orientation)(stage)
    }
}

fn upright(_stage: u32) -> f64 {
    0.0
}

fn quarter_turn(_stage: u32) -> f64 {
    90.0
}

fn back_quarter_turn(_stage: u32) -> f64 {
    -90.0
}

fn binary_tree(stage: u32, angle: f64) -> LSystem {
    let mut s = LSystem::new("0", angle);
    s.add_rule('1', "11");
    s.add_rule('0', "1[0]0");
    let distance = 600.0 / 2f64.powi(stage as i32);
    s.add_forward_char('1', distance);
    s.add_forward_char('0', distance / 2.0);
    s.add_push_char('[');
    s.add_pop_char(']');
    s.add_left_char('[');
    s.add_right_char(']');
    s
}

fn cantor_dust(stage: u32, angle: f64) -> LSystem {
    let mut s = LSystem::new("A", angle);
    s.add_rule('A', "ABA");
    s.add_rule('B', "BBB");
    let distance = CANVAS_WIDTH * 3.0 / 3f64.powi(stage as i32);
    s.add_forward_char('A', distance);
    s.add_forward_char('B', distance);
    s.add_lift_char('B');
    s
}

fn koch_curve(stage: u32, angle: f64) -> LSystem {
    // At 120 degrees this turns into a rather nice Sierpinski triangle.
    let mut s = LSystem::new("F", angle);
    s.add_rule('F', "F+F-F-F+F");
    s.add_forward_char('F', 200.0 / 3f64.powi(stage as i32));
    s.add_left_char('+');
    s.add_right_char('-');
    s
}

fn sierpinski_triangle(stage: u32, angle: f64) -> LSystem {
    let mut s = LSystem::new("F-G-G", angle);
    s.add_rule('F', "F-G+F+G-F");
    s.add_rule('G', "GG");
    let distance = 650.0 / 2f64.powi(stage as i32);
    s.add_forward_char('F', distance);
    s.add_forward_char('G', distance);
    s.add_left_char('+');
    s.add_right_char('-');
    s
}

fn dragon_curve(stage: u32, angle: f64) -> LSystem {
    let mut s = LSystem::new("F", angle);
    s.add_rule('F', "F+G");
    s.add_rule('G', "F-G");
    let distance = 500.0 / 2f64.sqrt().powi(stage as i32);
    s.add_forward_char('F', distance);
    s.add_forward_char('G', distance);
    s.add_left_char('-');
    s.add_right_char('+');
    s
}

/// Every stage turns the dragon a further 45 degrees, so counter that.
fn dragon_orientation(stage: u32) -> f64 {
    90.0 - 45.0 * (stage % 8) as f64
}

fn fractal_plant(stage: u32, angle: f64) -> LSystem {
    let mut s = LSystem::new("-X", angle);
    s.add_rule('X', "F+[[X]-X]-F[-FX]+X");
    s.add_rule('F', "FF");
    let distance = 250.0 / 2f64.powi(stage as i32);
    s.add_forward_char('X', distance);
    s.add_forward_char('F', distance);
    s.add_left_char('+');
    s.add_right_char('-');
    s.add_push_char('[');
    s.add_pop_char(']');
    s
}

fn hilbert_curve(stage: u32, angle: f64) -> LSystem {
    let mut s = LSystem::new("A", angle);
    s.add_rule('A', "+BF-AFA-FB+");
    s.add_rule('B', "-AF+BFB+FA-");
    let cells = (2f64.powi(stage as i32) - 1.0).max(1.0);
    s.add_forward_char('F', 580.0 / cells);
    s.add_left_char('+');
    s.add_right_char('-');
    s
}

/// Spin this one both ways with the angle keys.
fn branching_weed(stage: u32, angle: f64) -> LSystem {
    let mut s = LSystem::new("F", angle);
    s.add_rule('F', "F[+G][-G]");
    s.add_rule('G', "FG[+F][-F]F");
    let distance = CANVAS_WIDTH / 2f64.powi(stage as i32);
    s.add_forward_char('F', distance);
    s.add_forward_char('G', distance / 4.0);
    s.add_left_char('+');
    s.add_right_char('-');
    s.add_push_char('[');
    s.add_pop_char(']');
    s
}

pub static GALLERY: [FractalDefinition; 8] = [
    FractalDefinition {
        name: "binary tree",
        default_angle: 45.0,
        max_stage: 10,
        stroke_weight: 0.4,
        configure: binary_tree,
        orientation: upright,
    },
    FractalDefinition {
        name: "cantor dust",
        default_angle: 0.0,
        max_stage: 6,
        stroke_weight: 2.0,
        configure: cantor_dust,
        orientation: quarter_turn,
    },
    FractalDefinition {
        name: "koch curve",
        default_angle: 90.0,
        max_stage: 5,
        stroke_weight: 0.4,
        configure: koch_curve,
        orientation: quarter_turn,
    },
    FractalDefinition {
        name: "sierpinski triangle",
        default_angle: 120.0,
        max_stage: 7,
        stroke_weight: 1.0,
        configure: sierpinski_triangle,
        orientation: back_quarter_turn,
    },
    FractalDefinition {
        name: "dragon curve",
        default_angle: 90.0,
        max_stage: 15,
        stroke_weight: 1.0,
        configure: dragon_curve,
        orientation: dragon_orientation,
    },
    FractalDefinition {
        name: "fractal plant",
        default_angle: 25.0,
        max_stage: 6,
        stroke_weight: 0.2,
        configure: fractal_plant,
        orientation: upright,
    },
    FractalDefinition {
        name: "hilbert curve",
        default_angle: 90.0,
        max_stage: 7,
        stroke_weight: 1.0,
        configure: hilbert_curve,
        orientation: back_quarter_turn,
    },
    FractalDefinition {
        name: "branching weed",
        default_angle: 90.0,
        max_stage: 7,
        stroke_weight: 0.4,
        configure: branching_weed,
        orientation: upright,
    },
];
