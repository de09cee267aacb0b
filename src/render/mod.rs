//! Fit a walked L-system into a viewport and draw it there.
//!
//! The box from [`bounds_for`] decides a uniform scale; the composed affine
//! then moves the box center to the origin, scales, rotates by the requested
//! orientation and finally re-centers on the viewport middle. The drawing
//! turtle walks under that transform, so segments come out in viewport
//! coordinates.

use geo_types::{Line, MultiLineString};
use nalgebra::Affine2;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::LSystemError;
use crate::geo_types::matrix::{rotate_matrix, scale_matrix, translate_matrix};
use crate::l_system::LSystem;
use crate::turtle::{bounds_for, degrees, segments_to_multiline, Bounds, Turtle, TurtleTrait};

/// Fraction of the viewport kept clear on every side.
pub const DEFAULT_MARGIN: f64 = 0.05;

/// What to do when the walked geometry is flat along an axis (or a single point).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq)]
pub enum DegeneratePolicy {
    /// Fail with [`LSystemError::DegenerateGeometry`].
    #[default]
    Reject,
    /// Draw at scale 1.0 with the turtle's origin at the viewport center.
    UnitScale,
    /// Fit along whichever axis has extent. A single point falls back to
    /// [`DegeneratePolicy::UnitScale`].
    FitLongestAxis,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Viewport {
        Viewport { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitOptions {
    /// Extra rotation in degrees, applied about the viewport center.
    pub orientation: f64,
    pub margin: f64,
    pub degenerate: DegeneratePolicy,
}

impl Default for FitOptions {
    fn default() -> Self {
        FitOptions {
            orientation: 0.0,
            margin: DEFAULT_MARGIN,
            degenerate: DegeneratePolicy::Reject,
        }
    }
}

impl FitOptions {
    pub fn oriented(orientation: f64) -> FitOptions {
        FitOptions {
            orientation,
            ..FitOptions::default()
        }
    }
}

/// A fitted transform along with the uniform scale baked into it.
#[derive(Debug, Clone, Copy)]
pub struct Fit {
    pub transform: Affine2<f64>,
    pub scale: f64,
}

/// Relative tolerance below which an extent counts as zero. Trig leaves
/// residue like 6e-16 on a straight vertical walk.
const FLAT_TOLERANCE: f64 = 1e-9;

fn is_flat(extent: f64, other: f64) -> bool {
    !(extent > FLAT_TOLERANCE * extent.max(other))
}

/// A margin has to leave something of the viewport to draw in.
pub fn check_margin(margin: f64) -> Result<(), LSystemError> {
    if (0.0..0.5).contains(&margin) {
        Ok(())
    } else {
        Err(LSystemError::InvalidMargin(margin))
    }
}

/// Works out the composed transform that centers `bounds` in `viewport` and
/// fills it, less the margin.
pub fn fit_transform(
    bounds: &Bounds,
    viewport: &Viewport,
    options: &FitOptions,
) -> Result<Fit, LSystemError> {
    check_margin(options.margin)?;
    let (w, h) = (bounds.width(), bounds.height());
    let fill = 1.0 - 2.0 * options.margin;
    let center = bounds.center();
    let has_width = !is_flat(w, h);
    let has_height = !is_flat(h, w);

    let (scale, (cx, cy)) = if has_width && has_height {
        (
            fill * (viewport.width / w).min(viewport.height / h),
            (center.x(), center.y()),
        )
    } else {
        let err = LSystemError::DegenerateGeometry {
            width: w,
            height: h,
        };
        match options.degenerate {
            DegeneratePolicy::Reject => return Err(err),
            DegeneratePolicy::UnitScale => {
                warn!(%err, "Drawing at unit scale");
                (1.0, (0.0, 0.0))
            }
            DegeneratePolicy::FitLongestAxis if has_width => {
                warn!(%err, "Fitting to width only");
                (fill * viewport.width / w, (center.x(), center.y()))
            }
            DegeneratePolicy::FitLongestAxis if has_height => {
                warn!(%err, "Fitting to height only");
                (fill * viewport.height / h, (center.x(), center.y()))
            }
            DegeneratePolicy::FitLongestAxis => {
                warn!(%err, "Single point, drawing at unit scale");
                (1.0, (0.0, 0.0))
            }
        }
    };

    let transform = translate_matrix(viewport.width / 2.0, viewport.height / 2.0)
        * rotate_matrix(degrees(options.orientation))
        * scale_matrix(scale, scale)
        * translate_matrix(-cx, -cy);
    Ok(Fit { transform, scale })
}

/// The output of one render pass.
#[derive(Debug, Clone)]
pub struct Rendering {
    pub segments: Vec<Line<f64>>,
    /// Box of the untransformed walk.
    pub bounds: Bounds,
    pub scale: f64,
}

impl Rendering {
    pub fn to_multiline(&self) -> MultiLineString<f64> {
        segments_to_multiline(&self.segments)
    }
}

/// Bounds, fit, then walk the system under the fitted transform.
pub fn render(
    system: &LSystem,
    viewport: &Viewport,
    options: &FitOptions,
) -> Result<Rendering, LSystemError> {
    let bounds = bounds_for(system)?;
    let fit = fit_transform(&bounds, viewport, options)?;
    let segments = Turtle::with_transform(fit.transform)
        .walk_lsystem(system)?
        .into_segments();
    debug!(
        segments = segments.len(),
        scale = fit.scale,
        orientation = options.orientation,
        "Rendered L-system"
    );
    Ok(Rendering {
        segments,
        bounds,
        scale: fit.scale,
    })
}
