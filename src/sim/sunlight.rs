use crate::Vector;
use std::fmt;

/// Directional sunlight, described by an intensity magnitude (W per unit
/// area) and a unit direction the light travels in.
///
/// The direction is normalized at construction and both fields stay fixed
/// for the lifetime of a simulation run. The magnitude is stored as given
/// and not range-checked.
#[derive(Debug, Clone, Copy)]
pub struct Sunlight {
    pub magnitude: f64,
    pub direction: Vector,
}

impl Sunlight {
    pub fn new(magnitude: f64, direction: Vector) -> Self {
        Self {
            magnitude,
            direction: direction.normalized(),
        }
    }
}

impl Default for Sunlight {
    /// No light at all (a new moon): zero magnitude, zero direction.
    ///
    /// The zero direction survives normalization unchanged, and every
    /// downstream computation accepts it (the dot product with any normal
    /// is 0, so the panel collects 0 W).
    fn default() -> Self {
        Self::new(0., Vector::zero())
    }
}

impl fmt::Display for Sunlight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sunlight(magnitude={}, direction={})",
            self.magnitude, self.direction
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::IsClose;

    #[test]
    fn test_direction_is_normalized() {
        let sun = Sunlight::new(10., Vector::new(3., 0., -4.));
        assert!(sun.direction.length().is_close(1.));
        assert!(sun.direction.is_close(&Vector::new(0.6, 0., -0.8)));
        assert_eq!(sun.magnitude, 10.);
    }

    #[test]
    fn test_default_is_new_moon() {
        let sun = Sunlight::default();
        assert_eq!(sun.magnitude, 0.);
        assert_eq!(sun.direction, Vector::zero());
    }
}
