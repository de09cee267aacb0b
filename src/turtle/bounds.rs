use geo_types::{coord, Point, Rect};

use super::{TurtleState, TurtleTrait};
use crate::errors::LSystemError;
use crate::l_system::LSystem;

/// Axis aligned box around everything a walk visits. Starts as the single
/// point at the origin, since that's where every walk begins.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn center(&self) -> Point<f64> {
        Point::new(
            self.min_x + self.width() / 2.0,
            self.min_y + self.height() / 2.0,
        )
    }

    pub fn include(&mut self, p: Point<f64>) {
        self.min_x = self.min_x.min(p.x());
        self.max_x = self.max_x.max(p.x());
        self.min_y = self.min_y.min(p.y());
        self.max_y = self.max_y.max(p.y());
    }

    pub fn contains(&self, p: Point<f64>, tolerance: f64) -> bool {
        p.x() >= self.min_x - tolerance
            && p.x() <= self.max_x + tolerance
            && p.y() >= self.min_y - tolerance
            && p.y() <= self.max_y + tolerance
    }

    pub fn to_rect(&self) -> Rect<f64> {
        Rect::new(
            coord! {x: self.min_x, y: self.min_y},
            coord! {x: self.max_x, y: self.max_y},
        )
    }
}

/// A turtle that never draws; it only grows a [`Bounds`] after every forward
/// move, lifted or not.
#[derive(Clone, Debug, Default)]
pub struct BoundsTurtle {
    stack: Vec<TurtleState>,
    state: TurtleState,
    bounds: Bounds,
}

impl BoundsTurtle {
    pub fn new() -> BoundsTurtle {
        BoundsTurtle::default()
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }
}

impl TurtleTrait for BoundsTurtle {
    fn fwd(mut self, distance: f64) -> Self {
        self.state.position = self.state.ahead(distance);
        self.bounds.include(self.state.position);
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

    fn pen_up(self) -> Self {
        self
    }

    fn pen_down(self) -> Self {
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

/// Dry-runs the system's current axiom and returns the box it covers.
pub fn bounds_for(system: &LSystem) -> Result<Bounds, LSystemError> {
    Ok(BoundsTurtle::new().walk_lsystem(system)?.bounds())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::turtle::Turtle;
    use geo::BoundingRect;

    fn plant(stage: u32) -> LSystem {
        let mut system = LSystem::new("-X", 25.0);
        system.add_rule('X', "F+[[X]-X]-F[-FX]+X");
        system.add_rule('F', "FF");
        system.add_forward_char('X', 4.0);
        system.add_forward_char('F', 4.0);
        system.add_left_char('+');
        system.add_right_char('-');
        system.add_push_char('[');
        system.add_pop_char(']');
        system.apply_stages(stage, 6).unwrap();
        system
    }

    #[test]
    fn test_straight_line_is_flat() {
        let mut system = LSystem::new("FF", 0.0);
        system.add_forward_char('F', 10.0);
        let b = bounds_for(&system).unwrap();
        assert!(b.width().abs() < 1e-9);
        assert!((b.height() - 20.0).abs() < 1e-9);
        assert!((b.min_y + 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_bounds_contain_drawing() {
        for stage in 0..5 {
            let system = plant(stage);
            let b = bounds_for(&system).unwrap();
            let t = Turtle::new().walk_lsystem(&system).unwrap();
            for seg in t.segments() {
                assert!(b.contains(seg.start.into(), 1e-9));
                assert!(b.contains(seg.end.into(), 1e-9));
            }
        }
    }

    #[test]
    fn test_bounds_match_drawn_rect() {
        // With no lifted moves the drawn lines reach every edge of the box
        let system = plant(4);
        let b = bounds_for(&system).unwrap();
        let drawn = Turtle::new()
            .walk_lsystem(&system)
            .unwrap()
            .to_multiline()
            .bounding_rect()
            .unwrap();
        let r = b.to_rect();
        assert!((r.min().x - drawn.min().x).abs() < 1e-9);
        assert!((r.max().x - drawn.max().x).abs() < 1e-9);
        assert!((r.min().y - drawn.min().y).abs() < 1e-9);
        assert!((r.max().y - drawn.max().y).abs() < 1e-9);
    }

    #[test]
    fn test_lifted_moves_count() {
        let mut system = LSystem::new("AB", 0.0);
        system.add_forward_char('A', 1.0);
        system.add_forward_char('B', 5.0);
        system.add_lift_char('B');
        let b = bounds_for(&system).unwrap();
        assert!((b.min_y + 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_unbalanced() {
        let mut system = LSystem::new("F]", 0.0);
        system.add_forward_char('F', 1.0);
        system.add_pop_char(']');
        assert_eq!(bounds_for(&system), Err(LSystemError::UnbalancedStack));
    }
}
