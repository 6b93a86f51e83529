//! Geometric predicates.
//!
//! With feature `robust` (default): uses the adaptive-precision predicates of [robust], i.e. the
//! sign of every result is exact while the magnitude is an approximation.
//!
//! Without it: plain `f64` evaluation, subject to floating-point rounding.

use crate::utils::types::Vertex2;

#[cfg(feature = "robust")]
mod imp {
    use super::*;
    use robust::{incircle, orient2d, Coord};

    #[inline]
    fn coord2(p: &Vertex2) -> Coord<f64> {
        Coord { x: p[0], y: p[1] }
    }

    #[inline]
    pub fn orient_2d(a: &Vertex2, b: &Vertex2, c: &Vertex2) -> f64 {
        orient2d(coord2(a), coord2(b), coord2(c))
    }

    #[inline]
    pub fn in_circle(a: &Vertex2, b: &Vertex2, c: &Vertex2, d: &Vertex2) -> f64 {
        incircle(coord2(a), coord2(b), coord2(c), coord2(d))
    }
}

#[cfg(not(feature = "robust"))]
mod imp {
    use super::*;
    use nalgebra::Matrix3;

    #[inline]
    pub fn orient_2d(a: &Vertex2, b: &Vertex2, c: &Vertex2) -> f64 {
        let x1 = b[0] - a[0];
        let y1 = b[1] - a[1];
        let x2 = c[0] - a[0];
        let y2 = c[1] - a[1];
        x1 * y2 - x2 * y1
    }

    #[inline]
    pub fn in_circle(a: &Vertex2, b: &Vertex2, c: &Vertex2, d: &Vertex2) -> f64 {
        // lifted rows relative to d; the third column differs from |p - d|^2 only by a
        // combination of the first two, so the determinant is the classic in-circle one
        let row = |p: &Vertex2| {
            [
                p[0] - d[0],
                p[1] - d[1],
                (p[0] * p[0] - d[0] * d[0]) + (p[1] * p[1] - d[1] * d[1]),
            ]
        };
        let [ra, rb, rc] = [row(a), row(b), row(c)];

        Matrix3::new(
            ra[0], ra[1], ra[2], //
            rb[0], rb[1], rb[2], //
            rc[0], rc[1], rc[2],
        )
        .determinant()
    }
}

/// Twice the signed area of the triangle `abc`, i.e. the z-component of `(b - a) x (c - a)`.
///
/// Positive if `c` lies left of the directed line `a -> b` (ccw turn), negative if it lies right (cw turn)
/// and zero if the three vertices are collinear.
pub use imp::orient_2d;

/// The in-circle determinant of `d` w.r.t. the circle through `a`, `b` and `c`.
///
/// For `a, b, c` in ccw order it is positive iff `d` lies strictly inside the circle, negative iff it lies
/// strictly outside and zero if the four vertices are cocircular. A cw triangle flips the sign.
pub use imp::in_circle;

/// The Delaunay legality test.
///
/// Returns `true` (legal) iff `d` does not lie strictly inside the circle through `a`, `b` and `c`, and
/// `false` (illegal) iff it does, i.e. the edge opposite of `d` has to be flipped.
///
/// For `a, b, c` in ccw order, which is how the merge step calls it, this is exactly `in_circle(a, b, c, d) <= 0`.
/// A cw triangle is handled by interpreting the determinant through the orientation, a collinear one has no
/// circle and is always legal.
pub fn in_circle_legal(a: &Vertex2, b: &Vertex2, c: &Vertex2, d: &Vertex2) -> bool {
    let orientation = orient_2d(a, b, c);
    if orientation == 0.0 {
        return true;
    }

    let det = in_circle(a, b, c, d);
    !(det > 0.0 && orientation > 0.0 || det < 0.0 && orientation < 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orient_2d_sign() {
        let a = [0.0, 0.0];
        let b = [1.0, 0.0];

        assert!(orient_2d(&a, &b, &[0.0, 1.0]) > 0.0);
        assert!(orient_2d(&a, &b, &[0.0, -1.0]) < 0.0);
        assert_eq!(orient_2d(&a, &b, &[3.0, 0.0]), 0.0);
        assert_eq!(orient_2d(&a, &b, &[-2.0, 0.0]), 0.0);
    }

    #[test]
    fn test_orient_2d_is_twice_the_area() {
        let area2 = orient_2d(&[0.0, 0.0], &[4.0, 0.0], &[0.0, 3.0]);
        assert_eq!(area2, 12.0);
        assert_eq!(orient_2d(&[0.0, 0.0], &[0.0, 3.0], &[4.0, 0.0]), -12.0);
    }

    #[test]
    fn test_in_circle_unit_circle() {
        let a = [0.0, 1.0];
        let b = [1.0, 0.0];
        let c = [0.0, -1.0];

        // cw triangle on the unit circle
        assert!(!in_circle_legal(&a, &b, &c, &[0.0, 0.0]));
        assert!(in_circle_legal(&a, &b, &c, &[5.0, 5.0]));

        // same circle, ccw
        assert!(!in_circle_legal(&c, &b, &a, &[0.0, 0.0]));
        assert!(in_circle_legal(&c, &b, &a, &[5.0, 5.0]));
    }

    #[test]
    fn test_in_circle_ccw_matches_determinant() {
        let a = [0.0, -1.0];
        let b = [1.0, 0.0];
        let c = [0.0, 1.0];

        assert!(in_circle(&a, &b, &c, &[0.1, 0.2]) > 0.0);
        assert!(in_circle(&a, &b, &c, &[2.0, 0.0]) < 0.0);
        assert_eq!(in_circle(&a, &b, &c, &[-1.0, 0.0]), 0.0);
    }

    #[test]
    fn test_in_circle_cocircular_is_legal() {
        // the fourth corner of a square lies on the circle of the other three
        assert!(in_circle_legal(
            &[0.0, 0.0],
            &[1.0, 0.0],
            &[1.0, 1.0],
            &[0.0, 1.0]
        ));
    }

    #[test]
    fn test_in_circle_collinear_is_legal() {
        assert!(in_circle_legal(
            &[0.0, 0.0],
            &[1.0, 0.0],
            &[2.0, 0.0],
            &[1.0, 0.1]
        ));
    }
}
