use crate::Vector;
use crate::sim::orientation::{self, Axis, RotationDelta};
use crate::sim::panel::SolarPanel;
use crate::sim::power::PowerReading;
use crate::sim::sunlight::Sunlight;

/// Everything needed to (re)build a simulation run.
///
/// The render loop keeps the config around so a restart is a plain
/// teardown-and-reconstruct of the [`Simulation`], not a process restart.
#[derive(Debug, Clone)]
pub struct ScenarioConfig {
    pub label: String,
    pub sunlight: Sunlight,
    pub panel: SolarPanel,
}

impl ScenarioConfig {
    pub fn new(label: &str, sunlight: Sunlight, panel: SolarPanel) -> Self {
        Self {
            label: label.to_string(),
            sunlight,
            panel,
        }
    }
}

/// One simulation run: a fixed sunlight vector and a panel whose surface
/// normal the user steers.
///
/// Owns both entities for the lifetime of the run. The panel normal is
/// only mutated through [`set_axis_component`](Self::set_axis_component)
/// and [`reset_orientation`](Self::reset_orientation); power readings are
/// recomputed from the current state on demand. Everything runs on one
/// thread: input callbacks execute between frames, so updates never
/// overlap.
#[derive(Debug, Clone)]
pub struct Simulation {
    sunlight: Sunlight,
    panel: SolarPanel,
    original_normal: Vector,
    stop: bool,
    restart: bool,
}

impl Simulation {
    pub fn new(sunlight: Sunlight, panel: SolarPanel) -> Self {
        let original_normal = panel.surface_normal();
        Self {
            sunlight,
            panel,
            original_normal,
            stop: false,
            restart: false,
        }
    }

    pub fn from_config(config: &ScenarioConfig) -> Self {
        Self::new(config.sunlight, config.panel)
    }

    pub fn sunlight(&self) -> &Sunlight {
        &self.sunlight
    }

    pub fn panel(&self) -> &SolarPanel {
        &self.panel
    }

    /// The surface normal the panel was constructed with, kept for the
    /// "reset orientation" control.
    pub fn original_normal(&self) -> Vector {
        self.original_normal
    }

    /// Writes one component of the panel normal and returns the rotation
    /// delta for the renderer to apply to the panel mesh.
    pub fn set_axis_component(&mut self, axis: Axis, value: f64) -> RotationDelta {
        orientation::set_axis_component(&mut self.panel, axis, value)
    }

    /// Points the panel back at its original normal.
    pub fn reset_orientation(&mut self) -> RotationDelta {
        orientation::reset_orientation(&mut self.panel, self.original_normal)
    }

    /// Current power reading, computed fresh from sunlight and panel state.
    pub fn power(&self) -> PowerReading {
        PowerReading::compute(&self.sunlight, &self.panel)
    }

    /// Cooperative termination: a UI callback sets the flag, the frame
    /// loop polls it once per tick and exits cleanly.
    pub fn request_stop(&mut self) {
        self.stop = true;
    }

    pub fn should_stop(&self) -> bool {
        self.stop
    }

    /// Asks the frame loop to rebuild the run from its scenario config.
    pub fn request_restart(&mut self) {
        self.restart = true;
    }

    pub fn restart_requested(&self) -> bool {
        self.restart
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::IsClose;

    fn scenario() -> ScenarioConfig {
        ScenarioConfig::new(
            "test",
            Sunlight::new(10., Vector::new(0., 0., -1.)),
            SolarPanel::rectangle(10., 10., 0.25, Vector::new(0., 0., 1.), 1.),
        )
    }

    #[test]
    fn test_power_follows_orientation() {
        let mut sim = Simulation::from_config(&scenario());
        assert!(sim.power().electricity_watts.is_close(1000.));

        // Tilting the panel away from the sun reduces the output
        sim.set_axis_component(Axis::X, 1.);
        let tilted = sim.power().electricity_watts;
        assert!(tilted < 1000.);
        assert!(tilted > 0.);

        // Resetting restores the original reading
        sim.reset_orientation();
        assert!(sim.panel().surface_normal().is_close(&sim.original_normal()));
        assert!(sim.power().electricity_watts.is_close(1000.));
    }

    #[test]
    fn test_stop_and_restart_flags() {
        let config = scenario();
        let mut sim = Simulation::from_config(&config);
        assert!(!sim.should_stop());
        assert!(!sim.restart_requested());

        sim.set_axis_component(Axis::Y, 0.4);
        sim.request_restart();
        assert!(sim.restart_requested());

        // Teardown-and-reconstruct brings back the initial state
        sim = Simulation::from_config(&config);
        assert!(!sim.restart_requested());
        assert!(sim.panel().surface_normal().is_close(&Vector::new(0., 0., 1.)));

        sim.request_stop();
        assert!(sim.should_stop());
    }
}
