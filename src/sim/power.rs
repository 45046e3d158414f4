use crate::sim::panel::SolarPanel;
use crate::sim::sunlight::Sunlight;
use std::fmt;

/// Electrical output of a panel under a given light, computed fresh from
/// the current state whenever requested. Nothing here is stored between
/// orientation updates.
#[derive(Debug, Clone, Copy)]
pub struct PowerReading {
    /// Cosine of the angle between light direction and surface normal,
    /// clamped to `[-1, 1]`. Negative when the panel faces the light.
    pub dot_product: f64,
    /// Angle of incidence in `[0, pi]`.
    pub angle_radians: f64,
    /// Collected power, clamped at zero from below.
    pub electricity_watts: f64,
}

impl PowerReading {
    /// Computes the reading for the given light/panel pair.
    ///
    /// Total for all well-formed inputs: the dot product is clamped before
    /// `acos` (floating-point noise can push it past ±1), and a raw power
    /// that comes out negative — light behind the panel — is an unphysical
    /// configuration reported as exactly 0 W, not an error.
    pub fn compute(sunlight: &Sunlight, panel: &SolarPanel) -> Self {
        let dot_product = sunlight
            .direction
            .dot(panel.surface_normal())
            .clamp(-1.0, 1.0);
        let raw = -(sunlight.magnitude * panel.area()) * dot_product * panel.efficiency;

        Self {
            dot_product,
            angle_radians: dot_product.acos(),
            electricity_watts: raw.max(0.),
        }
    }

    pub fn angle_degrees(&self) -> f64 {
        self.angle_radians.to_degrees()
    }
}

impl fmt::Display for PowerReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Electricity: {:.2} W (incidence {:.1}°)",
            self.electricity_watts,
            self.angle_degrees()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Vector;
    use crate::geom::IsClose;
    use std::f64::consts::PI;

    #[test]
    fn test_panel_facing_the_light() {
        // Sun points straight down, panel faces straight up
        let sun = Sunlight::new(10., Vector::new(0., 0., -1.));
        let panel = SolarPanel::rectangle(10., 10., 0.25, Vector::new(0., 0., 1.), 1.);
        let reading = PowerReading::compute(&sun, &panel);

        assert!(reading.dot_product.is_close(-1.));
        assert!(reading.angle_degrees().is_close(180.));
        assert!(reading.electricity_watts.is_close(1000.));
    }

    #[test]
    fn test_panel_facing_away_collects_nothing() {
        let sun = Sunlight::new(10., Vector::new(0., 0., -1.));
        let panel = SolarPanel::rectangle(10., 10., 0.25, Vector::new(0., 0., -1.), 1.);
        let reading = PowerReading::compute(&sun, &panel);

        assert!(reading.dot_product.is_close(1.));
        assert_eq!(reading.electricity_watts, 0.);
    }

    #[test]
    fn test_new_moon() {
        let sun = Sunlight::default();
        let panel = SolarPanel::circle(5., 0.25, Vector::new(0., 0., 1.), 1.);
        let reading = PowerReading::compute(&sun, &panel);

        assert_eq!(reading.electricity_watts, 0.);
        assert!(reading.angle_radians.is_close(PI / 2.));
    }

    #[test]
    fn test_efficiency_scales_output() {
        let sun = Sunlight::new(10., Vector::new(0., 0., -1.));
        let panel = SolarPanel::rectangle(10., 10., 0.25, Vector::new(0., 0., 1.), 0.2);
        let reading = PowerReading::compute(&sun, &panel);
        assert!(reading.electricity_watts.is_close(200.));
    }

    #[test]
    fn test_watts_never_negative_and_angle_in_range() {
        let sun = Sunlight::new(10., Vector::new(1., 0.5, 1.));
        let normals = [
            Vector::new(0., 0., 1.),
            Vector::new(1., 0., 0.),
            Vector::new(-1., -1., -1.),
            Vector::new(0.3, -0.7, 0.1),
            Vector::zero(),
        ];
        for normal in normals {
            let panel = SolarPanel::rectangle(10., 10., 0.25, normal, 1.);
            let reading = PowerReading::compute(&sun, &panel);
            assert!(reading.electricity_watts >= 0.);
            assert!((0. ..=PI).contains(&reading.angle_radians));
        }
    }
}
