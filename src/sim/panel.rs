use crate::Vector;
use crate::geom::EPS;
use std::f64::consts::PI;
use std::fmt;

/// Panel face geometry. The set of shapes is closed, so every dispatch on
/// it is an exhaustive `match` and no fallback geometry exists.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelShape {
    Rectangle { length: f64, width: f64 },
    Circle { radius: f64 },
}

/// A flat or disk-shaped solar panel.
///
/// The collecting area is derived from the shape at construction and never
/// mutated afterwards. The surface normal is normalized at construction and
/// is only written through [`crate::sim::orientation`], which renormalizes
/// after every edit. Efficiency is a plain pass-through multiplier; values
/// outside `[0, 1]` are accepted and propagate into the power figure.
#[derive(Debug, Clone, Copy)]
pub struct SolarPanel {
    pub shape: PanelShape,
    pub height: f64,
    pub efficiency: f64,
    area: f64,
    surface_normal: Vector,
}

impl SolarPanel {
    /// Creates a rectangular panel with `area = length * width`.
    pub fn rectangle(
        length: f64,
        width: f64,
        height: f64,
        surface_vector: Vector,
        efficiency: f64,
    ) -> Self {
        Self {
            shape: PanelShape::Rectangle { length, width },
            height,
            efficiency,
            area: length * width,
            surface_normal: surface_vector.normalized(),
        }
    }

    /// Creates a square panel, a rectangle with equal sides.
    pub fn square(side: f64, height: f64, surface_vector: Vector, efficiency: f64) -> Self {
        Self::rectangle(side, side, height, surface_vector, efficiency)
    }

    /// Creates a disk-shaped panel with `area = pi * radius^2`.
    pub fn circle(radius: f64, height: f64, surface_vector: Vector, efficiency: f64) -> Self {
        Self {
            shape: PanelShape::Circle { radius },
            height,
            efficiency,
            area: PI * radius.powi(2),
            surface_normal: surface_vector.normalized(),
        }
    }

    /// Collecting area in m², derived from the shape at construction.
    pub fn area(&self) -> f64 {
        self.area
    }

    /// Unit vector perpendicular to the collecting face.
    pub fn surface_normal(&self) -> Vector {
        self.surface_normal
    }

    /// A rectangle with equal sides reports itself as "Square".
    pub fn shape_name(&self) -> &'static str {
        match self.shape {
            PanelShape::Rectangle { length, width } => {
                if (length - width).abs() < EPS {
                    "Square"
                } else {
                    "Rectangle"
                }
            }
            PanelShape::Circle { .. } => "Circle",
        }
    }

    // Orientation updates go through sim::orientation, which renormalizes
    // before calling this.
    pub(crate) fn set_surface_normal(&mut self, normal: Vector) {
        self.surface_normal = normal;
    }
}

impl fmt::Display for SolarPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}(area={:.2} m², normal={})",
            self.shape_name(),
            self.area,
            self.surface_normal
        )
    }
}
