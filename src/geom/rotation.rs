use crate::Point;
use crate::Vector;
use crate::geom::IsClose;
use ndarray as nd;

/// Calculate rotation matrix for a unit vector `u` and angle `phi`.
///
/// A rotation in 3D can be described with an axis and angle around that axis.
/// The axis is described with a unit vector `u` `(ux**2 + uy**2 + uz**2 == 1)`
/// and an angle `phi` (in radians).
///
/// Uses the Rodrigues rotation formula, which is numerically stable:
/// https://en.wikipedia.org/wiki/Rodrigues%27_rotation_formula
pub fn rotation_matrix(u: &Vector, phi: f64) -> nd::Array2<f64> {
    if !u.length().is_close(1.) {
        panic!("rotation_matrix() requires u to be a unit vector");
    }

    let w: nd::Array2<f64> = nd::arr2(&[[0., -u.dz, u.dy], [u.dz, 0., -u.dx], [-u.dy, u.dx, 0.]]);

    nd::Array::eye(3) + phi.sin() * &w + (2. * (phi / 2.).sin().powi(2)) * w.dot(&w)
}

/// Rotate points using the rotation matrix `rot`
pub fn rotate_points(pts: &[Point], rot: &nd::ArrayView2<f64>) -> Vec<Point> {
    let pts = points_to_array(pts);
    let pts = pts.dot(rot);

    array_to_points(pts)
}

/// Rotate points around the unit vector `u` with the angle `phi` (radians).
///
/// Arguments:
/// - pts: list of points to be rotated
/// - u: normal vector of the rotation axis
/// - phi: rotation angle in radians
///
/// Returns:
/// rotated points
pub fn rotate_points_around_vector(pts: &[Point], u: &Vector, phi: f64) -> Vec<Point> {
    if u.length().is_close(0.) || phi.abs().is_close(0.) {
        // No need to rotate
        return pts.to_vec();
    }
    let rot = rotation_matrix(u, phi);

    rotate_points(pts, &rot.t())
}

/// Rotate a vector around the unit vector `u` with the angle `phi` (radians).
///
/// Vectors rotate the same way as points about the origin.
pub fn rotate_vector_around_vector(v: Vector, u: &Vector, phi: f64) -> Vector {
    let pt = Point::new(v.dx, v.dy, v.dz);
    let rotated = rotate_points_around_vector(&[pt], u, phi);
    Vector::from_a_point(rotated[0])
}

fn points_to_array(points: &[Point]) -> nd::Array2<f64> {
    let mut arr = nd::Array2::from_elem((points.len(), 3), 0.);

    for (i, p) in points.iter().enumerate() {
        arr[[i, 0]] = p.x;
        arr[[i, 1]] = p.y;
        arr[[i, 2]] = p.z;
    }

    arr
}

fn array_to_points(arr: nd::Array2<f64>) -> Vec<Point> {
    let mut pts: Vec<Point> = Vec::new();
    let num_pts = arr.shape()[0];

    for i in 0..num_pts {
        let (x, y, z) = (arr[[i, 0]], arr[[i, 1]], arr[[i, 2]]);
        pts.push(Point::new(x, y, z));
    }

    pts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotate_points_around_vector() {
        let p0 = Point::new(1.0, 0.0, 0.0);
        let p1 = Point::new(0.0, 1.0, 0.0);
        let p2 = Point::new(0.0, 0.0, 0.0);
        let u = Vector::new(0., 1., 0.);
        let phi = -std::f64::consts::PI / 2.;

        let rotated_points = rotate_points_around_vector(&[p0, p1, p2], &u, phi);

        assert!(rotated_points[0].is_close(&Point::new(0.0, 0.0, 1.0)));
        assert!(rotated_points[1].is_close(&Point::new(0.0, 1.0, 0.0)));
        assert!(rotated_points[2].is_close(&Point::new(0.0, 0.0, 0.0)));
    }

    #[test]
    fn test_zero_axis_or_angle_is_identity() {
        let pts = [Point::new(1., 2., 3.)];
        let rotated = rotate_points_around_vector(&pts, &Vector::zero(), 1.0);
        assert!(rotated[0].is_close(&pts[0]));
        let rotated = rotate_points_around_vector(&pts, &Vector::new(0., 0., 1.), 0.0);
        assert!(rotated[0].is_close(&pts[0]));
    }

    #[test]
    fn test_rotate_vector_around_vector() {
        let v = Vector::new(1., 0., 0.);
        let u = Vector::new(0., 0., 1.);
        let rotated = rotate_vector_around_vector(v, &u, std::f64::consts::PI / 2.);
        assert!(rotated.is_close(&Vector::new(0., 1., 0.)));
    }
}
