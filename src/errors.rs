use std::fmt;

/// Everything that can go wrong while rewriting, walking or fitting an L-system.
#[derive(Debug, Clone, PartialEq)]
pub enum LSystemError {
    /// A pop symbol was reached with nothing saved on the turtle stack.
    UnbalancedStack,
    /// The walked geometry has no extent along at least one axis, so it can't
    /// be scaled to fit a viewport.
    DegenerateGeometry { width: f64, height: f64 },
    /// The requested stage is above the maximum configured for the fractal.
    InvalidStage { stage: u32, max: u32 },
    /// A fit margin outside `[0, 0.5)` leaves no room for the drawing.
    InvalidMargin(f64),
}

impl std::error::Error for LSystemError {}

impl fmt::Display for LSystemError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LSystemError::UnbalancedStack => {
                write!(f, "Unbalanced push/pop: popped an empty turtle stack.")
            }
            LSystemError::DegenerateGeometry { width, height } => write!(
                f,
                "Degenerate geometry ({}x{}), can't fit it to a viewport",
                width, height
            ),
            LSystemError::InvalidStage { stage, max } => {
                write!(f, "Stage {} is above the maximum of {}", stage, max)
            }
            LSystemError::InvalidMargin(margin) => {
                write!(f, "Margin {} must be at least 0 and below 0.5", margin)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::LSystemError;

    #[test]
    fn test_messages() {
        assert_eq!(
            LSystemError::InvalidStage { stage: 11, max: 10 }.to_string(),
            "Stage 11 is above the maximum of 10"
        );
        assert!(LSystemError::UnbalancedStack
            .to_string()
            .contains("Unbalanced"));
        assert!(LSystemError::DegenerateGeometry {
            width: 0.0,
            height: 20.0
        }
        .to_string()
        .contains("0x20"));
        assert_eq!(
            LSystemError::InvalidMargin(0.5).to_string(),
            "Margin 0.5 must be at least 0 and below 0.5"
        );
    }
}
