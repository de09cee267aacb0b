use geo_types::{coord, Line, LineString, MultiLineString, Point};
use nalgebra::Affine2;

use crate::errors::LSystemError;
use crate::geo_types::matrix::{unit_matrix, xform_coord};
use crate::l_system::LSystem;

mod bounds;
pub use bounds::{bounds_for, Bounds, BoundsTurtle};

/// Heading (in degrees) every walk starts from. Headings follow screen space,
/// where y grows downward, so -90 points "up".
pub const INITIAL_HEADING: f64 = -90.0;

/// Helper function to convert degrees to radians
pub fn degrees(deg: f64) -> f64 {
    std::f64::consts::PI * (deg / 180.0)
}

/// Where a turtle is and which way it faces. This is exactly what push/pop
/// save and restore.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TurtleState {
    pub position: Point<f64>,
    /// Degrees, see [`INITIAL_HEADING`].
    pub heading: f64,
}

impl Default for TurtleState {
    fn default() -> Self {
        TurtleState {
            position: Point::new(0.0, 0.0),
            heading: INITIAL_HEADING,
        }
    }
}

impl TurtleState {
    /// The point `distance` ahead along the current heading.
    pub fn ahead(&self, distance: f64) -> Point<f64> {
        let h = degrees(self.heading);
        self.position + Point::new(distance * h.cos(), distance * h.sin())
    }
}

/// TurtleTrait provides the logo-style moves shared by every turtle, plus
/// [`TurtleTrait::walk_lsystem`] which drives them from an [`LSystem`].
///
/// Both the drawing [`Turtle`] and the [`BoundsTurtle`] go through the same
/// walk, so the box one computes always matches what the other draws.
///
/// # Example
///
/// ```
/// use aoer_fractal_rs::turtle::{Turtle, TurtleTrait};
/// let t = Turtle::new()
///     .fwd(100.0)
///     .right(90.0)
///     .fwd(100.0)
///     .right(90.0)
///     .fwd(100.0);
/// assert_eq!(t.segments().len(), 3);
/// ```
pub trait TurtleTrait: Sized {
    fn fwd(self, distance: f64) -> Self;
    /// Turn counter-clockwise on screen: heading decreases.
    fn left(self, angle: f64) -> Self;
    /// Turn clockwise on screen: heading increases.
    fn right(self, angle: f64) -> Self;
    fn pen_up(self) -> Self;
    fn pen_down(self) -> Self;
    fn push(self) -> Self;
    fn pop(self) -> Result<Self, LSystemError>;

    /// Walks the system's current axiom one symbol at a time. Every symbol
    /// goes through each check in order: forward, push, pop, left, right.
    fn walk_lsystem(mut self, system: &LSystem) -> Result<Self, LSystemError> {
        let sem = &system.semantics;
        for c in system.axiom.chars() {
            if let Some(distance) = sem.distance(c) {
                if sem.is_lift(c) {
                    self = self.pen_up();
                }
                self = self.fwd(distance).pen_down();
            }
            if sem.is_push(c) {
                self = self.push();
            }
            if sem.is_pop(c) {
                self = self.pop()?;
            }
            // A symbol registered as both turns left then right.
            if sem.is_left(c) {
                self = self.left(system.angle);
            }
            if sem.is_right(c) {
                self = self.right(system.angle);
            }
        }
        Ok(self)
    }
}

/// # Turtle
///
/// The drawing turtle. Emits a [`Line`] for every pen-down move, with both
/// endpoints run through its affine transform so they land directly in the
/// target coordinate space.
#[derive(Clone, Debug)]
pub struct Turtle {
    stack: Vec<TurtleState>,
    state: TurtleState,
    pen: bool,
    transform: Affine2<f64>,
    segments: Vec<Line<f64>>,
}

impl Default for Turtle {
    fn default() -> Self {
        Turtle::new()
    }
}

impl Turtle {
    /// Fresh turtle at the origin, facing [`INITIAL_HEADING`], pen down.
    pub fn new() -> Turtle {
        Turtle::with_transform(unit_matrix())
    }

    pub fn with_transform(transform: Affine2<f64>) -> Turtle {
        Turtle {
            stack: vec![],
            state: TurtleState::default(),
            pen: true,
            transform,
            segments: vec![],
        }
    }

    pub fn state(&self) -> TurtleState {
        self.state
    }

    pub fn is_pen_down(&self) -> bool {
        self.pen
    }

    pub fn segments(&self) -> &[Line<f64>] {
        &self.segments
    }

    pub fn into_segments(self) -> Vec<Line<f64>> {
        self.segments
    }

    /// Joins runs of connected segments into linestrings.
    pub fn to_multiline(&self) -> MultiLineString<f64> {
        segments_to_multiline(&self.segments)
    }
}

/// Chains segments whose start matches the previous end into one linestring,
/// which keeps a plotter's pen down across a continuous curve.
pub fn segments_to_multiline(segments: &[Line<f64>]) -> MultiLineString<f64> {
    let mut lines: Vec<Vec<geo_types::Coord<f64>>> = vec![];
    for segment in segments {
        let connected = lines.last().and_then(|line| line.last()) == Some(&segment.start);
        match lines.last_mut() {
            Some(line) if connected => line.push(segment.end),
            _ => lines.push(vec![segment.start, segment.end]),
        }
    }
    lines.into_iter().map(LineString::from).collect()
}

impl TurtleTrait for Turtle {
    fn fwd(mut self, distance: f64) -> Self {
        let pos = self.state.ahead(distance);
        if self.pen {
            let from = self.state.position;
            self.segments.push(Line::new(
                xform_coord(&coord! {x: from.x(), y: from.y()}, &self.transform),
                xform_coord(&coord! {x: pos.x(), y: pos.y()}, &self.transform),
            ));
        }
        self.state.position = pos;
        self
    }

    fn left(mut self, angle: f64) -> Self {
        self.state.heading -= angle;
        self
    }

    fn right(mut self, angle: f64) -> Self {
        self.state.heading += angle;
        self
    }

    fn pen_up(mut self) -> Self {
        self.pen = false;
        self
    }

    fn pen_down(mut self) -> Self {
        self.pen = true;
        self
    }

    fn push(mut self) -> Self {
        self.stack.push(self.state);
        self
    }

    fn pop(mut self) -> Result<Self, LSystemError> {
        self.state = self.stack.pop().ok_or(LSystemError::UnbalancedStack)?;
        Ok(self)
    }
}
