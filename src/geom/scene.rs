//! Conversion between the simulation axes and the renderer axes.
//!
//! The simulation uses right-handed coordinates with x pointing right,
//! y forward and z up. The renderer uses x right, y up and z toward the
//! viewer. The two are related by a fixed permutation with one sign flip:
//! `(x, y, z) -> (x, z, -y)`. The permutation is exact, so the round trip
//! is bit-identical.

use crate::Point;
use crate::Vector;

/// Converts a simulation-space vector to renderer axes.
pub fn vector_to_scene(v: Vector) -> Vector {
    Vector::new(v.dx, v.dz, -v.dy)
}

/// Inverse of [`vector_to_scene`].
pub fn vector_from_scene(v: Vector) -> Vector {
    Vector::new(v.dx, -v.dz, v.dy)
}

/// Converts a simulation-space point to renderer axes.
pub fn point_to_scene(p: Point) -> Point {
    Point::new(p.x, p.z, -p.y)
}

/// Inverse of [`point_to_scene`].
pub fn point_from_scene(p: Point) -> Point {
    Point::new(p.x, -p.z, p.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_mapping() {
        // Simulation up (+z) is renderer up (+y)
        assert_eq!(
            vector_to_scene(Vector::new(0., 0., 1.)),
            Vector::new(0., 1., 0.)
        );
        // Simulation forward (+y) points away from the viewer (-z)
        assert_eq!(
            vector_to_scene(Vector::new(0., 1., 0.)),
            Vector::new(0., 0., -1.)
        );
    }

    #[test]
    fn test_round_trip_is_exact() {
        let cases = [
            Vector::new(1., 2., 3.),
            Vector::new(-0.3, 0.7, -1.9),
            Vector::new(0.1, -0.1, 1.0).normalized(),
            Vector::zero(),
        ];
        for v in cases {
            assert_eq!(vector_from_scene(vector_to_scene(v)), v);
            assert_eq!(vector_to_scene(vector_from_scene(v)), v);
        }
        let p = Point::new(4., -5., 6.);
        assert_eq!(point_from_scene(point_to_scene(p)), p);
    }
}
