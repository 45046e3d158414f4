//! Camera poses and the primary/overlay view synchronization.
//!
//! The axis-triad overlay is rendered with its own camera. To keep the two
//! perspectives aligned, the overlay pose is a one-directional value copy
//! of the primary pose, refreshed every frame after camera movement. There
//! is no shared camera state between the views.

use crate::Point;
use crate::Vector;
use crate::geom::rotation::{rotate_points_around_vector, rotate_vector_around_vector};

/// Position and orientation of a camera, in simulation coordinates.
#[derive(Debug, Clone, Copy)]
pub struct CameraPose {
    pub position: Point,
    pub forward: Vector,
    pub up: Vector,
}

impl CameraPose {
    /// Head-on view: camera on the -y side looking forward, z up.
    pub fn front(distance: f64) -> Self {
        Self {
            position: Point::new(0., -distance, 0.),
            forward: Vector::new(0., 1., 0.),
            up: Vector::new(0., 0., 1.),
        }
    }

    /// Home view: the front pose tilted -45° around x, then swung 45°
    /// around z.
    pub fn isometric(distance: f64) -> Self {
        Self::front(distance)
            .rotated(Vector::new(1., 0., 0.), -45_f64.to_radians())
            .rotated(Vector::new(0., 0., 1.), 45_f64.to_radians())
    }

    /// The point one unit ahead of the camera.
    pub fn target(&self) -> Point {
        self.position + self.forward
    }

    /// Rotates the pose around the unit axis `u` through the origin.
    pub fn rotated(&self, u: Vector, phi: f64) -> Self {
        let position = rotate_points_around_vector(&[self.position], &u, phi)[0];
        Self {
            position,
            forward: rotate_vector_around_vector(self.forward, &u, phi),
            up: rotate_vector_around_vector(self.up, &u, phi),
        }
    }

    /// Locks this (overlay) pose to the primary pose. Runs once per frame,
    /// after the primary camera has moved.
    pub fn sync_to(&mut self, primary: &CameraPose) {
        self.position = primary.position;
        self.forward = primary.forward;
        self.up = primary.up;
    }
}
