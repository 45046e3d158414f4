//! Per-axis orientation updates for the panel surface normal.
//!
//! An update writes a raw component into the current normal, renormalizes,
//! and reports the incremental axis-angle rotation between the previous and
//! the new normal. The renderer applies that delta to its mesh transform,
//! so the visual plane stays aligned with the normal without ever
//! recomputing an absolute orientation (which would be ambiguous for a
//! plane). Deltas accumulate floating-point drift over a long session;
//! orientation state is not persisted, so this is acceptable.

use crate::Vector;
use crate::sim::panel::SolarPanel;

/// Rotation axes selectable from the orientation controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Rotation axes below this length have no defined direction; the matching
/// delta must be treated as a no-op by the renderer.
const AXIS_EPS: f64 = 1e-6;

/// Incremental rigid rotation taking the previous surface normal onto the
/// current one: rotate by `angle` radians around `axis` (unnormalized cross
/// product of the two normals), about the world origin.
#[derive(Debug, Clone, Copy)]
pub struct RotationDelta {
    pub axis: Vector,
    pub angle: f64,
}

impl RotationDelta {
    /// True when the previous and current normals are parallel, antiparallel
    /// or degenerate, leaving the rotation axis undefined. Callers apply no
    /// rotation in that case.
    pub fn is_negligible(&self) -> bool {
        self.axis.length() <= AXIS_EPS
    }
}

/// Writes `value` into one component of the panel's surface normal,
/// renormalizes, and returns the rotation delta from the previous normal.
///
/// The component is written into the raw (pre-normalization) vector, so the
/// value keeps the meaning it has on the control: a point on the unit-ish
/// slider scale, not an angle. If the raw vector ends up exactly zero it is
/// kept as the zero vector (see [`Vector::normalized`]); controls should
/// not drive the normal there, since later deltas degrade to no-ops.
pub fn set_axis_component(panel: &mut SolarPanel, axis: Axis, value: f64) -> RotationDelta {
    let previous = panel.surface_normal();
    let mut raw = previous;
    match axis {
        Axis::X => raw.dx = value,
        Axis::Y => raw.dy = value,
        Axis::Z => raw.dz = value,
    }
    retarget(panel, previous, raw)
}

/// Points the panel at a previously saved normal and returns the rotation
/// delta from the current one. Used by the "reset orientation" control with
/// the normal saved at simulation start.
pub fn reset_orientation(panel: &mut SolarPanel, saved: Vector) -> RotationDelta {
    retarget(panel, panel.surface_normal(), saved)
}

/// Rotation delta taking one orientation onto another, touching no panel
/// state. The renderer also uses it directly, to align a freshly built
/// mesh (flat, facing +z) with the panel's starting normal.
pub fn delta_between(from: Vector, to: Vector) -> RotationDelta {
    RotationDelta {
        axis: from.cross(to),
        angle: from.angle_to(&to),
    }
}

fn retarget(panel: &mut SolarPanel, previous: Vector, raw: Vector) -> RotationDelta {
    let current = raw.normalized();
    panel.set_surface_normal(current);
    delta_between(previous, current)
}
