/// Affine helpers (scale/translate/rotate) and single coordinate transforms.
pub mod matrix;

/// Turn fitted line work into an SVG document.
pub mod svg;

#[cfg(test)]
pub(crate) use distance::PointDistance;
