use geo::coord;
use geo::Coord;
use geo_types::CoordNum;
use nalgebra::Matrix3;
use nalgebra::{Affine2, Point2 as NPoint2, RealField};
use num_traits::Float;

/// Helper to create a scaling matrix
pub fn scale_matrix<T>(sx: T, sy: T) -> Affine2<T>
where
    T: RealField,
    T: Float,
{
    Affine2::from_matrix_unchecked(Matrix3::<T>::new(
        sx,
        T::zero(),
        T::zero(),
        T::zero(),
        sy,
        T::zero(),
        T::zero(),
        T::zero(),
        T::one(),
    ))
}

/// Helper to create a translation matrix
pub fn translate_matrix<T>(tx: T, ty: T) -> Affine2<T>
where
    T: RealField,
    T: Float,
{
    Affine2::from_matrix_unchecked(Matrix3::<T>::new(
        T::one(),
        T::zero(),
        tx,
        T::zero(),
        T::one(),
        ty,
        T::zero(),
        T::zero(),
        T::one(),
    ))
}

/// Rotation by `radians`. With y pointing down (screen/SVG space) a positive
/// angle turns clockwise on screen, same as the turtle's right turn.
pub fn rotate_matrix<T>(radians: T) -> Affine2<T>
where
    T: RealField,
    T: Float,
{
    Affine2::from_matrix_unchecked(Matrix3::<T>::new(
        Float::cos(radians),
        Float::sin(radians).neg(),
        T::zero(),
        Float::sin(radians),
        Float::cos(radians),
        T::zero(),
        T::zero(),
        T::zero(),
        T::one(),
    ))
}

/// Unit matrix. Basically a no-op
pub fn unit_matrix() -> Affine2<f64> {
    Affine2::from_matrix_unchecked(Matrix3::new(1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0))
}

/// Run a single coordinate through an affine transform.
pub fn xform_coord<T>(xy: &Coord<T>, affine: &Affine2<T>) -> Coord<T>
where
    T: CoordNum,
    T: RealField,
    T: Float,
{
    let out = affine * NPoint2::new(xy.x, xy.y);
    coord!(x: out.x, y: out.y)
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use super::*;

    fn near(a: Coord<f64>, b: Coord<f64>) -> bool {
        (a.x - b.x).abs() < 1e-8 && (a.y - b.y).abs() < 1e-8
    }

    #[test]
    fn test_translate() {
        let tx = translate_matrix(10., 5.);
        let out = xform_coord(&coord! {x: 25., y: 25.}, &tx);
        assert!(near(out, coord! {x: 35., y: 30.}));
    }

    #[test]
    fn test_scale_then_translate() {
        let affine = translate_matrix(100.0, 50.0) * scale_matrix(2.0, 2.0);
        assert!(near(
            xform_coord(&coord! {x: 1.0, y: 1.0}, &affine),
            coord! {x: 102.0, y: 52.0}
        ));
        assert!(near(
            xform_coord(&coord! {x: -3.0, y: 0.5}, &affine),
            coord! {x: 94.0, y: 51.0}
        ));
    }

    #[test]
    fn test_unit_is_noop() {
        let c = coord! {x: 3.5, y: -7.25};
        assert_eq!(xform_coord(&c, &unit_matrix()), c);
    }

    #[test]
    fn test_simple_rotate() {
        for (radians, source, destination) in vec![
            (PI / 2., coord! {x: 1., y: 0.}, coord! {x: 0., y: 1.}),
            (PI, coord! {x: 1., y: 0.}, coord! {x: -1., y: 0.}),
            (PI / 2., coord! {x: 0., y: 1.}, coord! {x: -1., y: 0.}),
            (
                PI / 4.,
                coord! {x: 1., y: 0.},
                coord! {x: 0.7071067811865476, y: 0.7071067811865476},
            ),
            (
                -PI / 4.,
                coord! {x: 1., y: 0.},
                coord! {x: 0.7071067811865476, y: -0.7071067811865476},
            ),
        ] {
            let rotation_matrix = rotate_matrix(radians);
            assert!(near(xform_coord(&source, &rotation_matrix), destination));
        }
    }
}
