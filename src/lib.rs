pub mod draw;
pub mod geom;
pub mod sim;

// Prelude
pub use geom::point::Point;
pub use geom::vector::Vector;
pub use sim::orientation::{Axis, RotationDelta};
pub use sim::panel::{PanelShape, SolarPanel};
pub use sim::power::PowerReading;
pub use sim::simulation::{ScenarioConfig, Simulation};
pub use sim::sunlight::Sunlight;
pub use sim::view::CameraPose;
// Drawing utility
pub use draw::config::SceneConfig;
pub use draw::draw_simulation;
