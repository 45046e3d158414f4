use anyhow::{Result, anyhow};
use solar3d::{ScenarioConfig, SceneConfig, SolarPanel, Sunlight, Vector, draw_simulation};

/// Built-in scenarios, selected by the first CLI argument.
fn scenario(number: u32) -> Result<ScenarioConfig> {
    let sun_down = Sunlight::new(10., Vector::new(0., 0., -1.));

    let config = match number {
        // Sun overhead, slightly tilted square panel
        1 => ScenarioConfig::new(
            "sun overhead, tilted panel",
            sun_down,
            SolarPanel::rectangle(10., 10., 0.25, Vector::new(0.1, 0.1, 1.), 1.),
        ),
        // Long rectangular panel under a low sun
        2 => ScenarioConfig::new(
            "long panel, low sun",
            Sunlight::new(10., Vector::new(1., 0., -1.)),
            SolarPanel::rectangle(20., 5., 0.25, Vector::new(0.1, 1., 1.), 1.),
        ),
        // Circular panel
        3 => ScenarioConfig::new(
            "circular panel",
            sun_down,
            SolarPanel::circle(5., 0.25, Vector::new(0.1, -0.1, 1.), 1.),
        ),
        // Horizontal light: tilting the panel in x changes the output
        4 => ScenarioConfig::new(
            "horizontal light",
            Sunlight::new(10., Vector::new(1., 0., 0.)),
            SolarPanel::rectangle(10., 10., 0.25, Vector::new(0., 1., 1.), 1.),
        ),
        // The textbook case: sun straight down, panel straight up
        5 => ScenarioConfig::new(
            "sun overhead, flat panel",
            sun_down,
            SolarPanel::rectangle(10., 10., 0.25, Vector::new(0., 0., 1.), 1.),
        ),
        // Panel edge-on to the sun
        6 => ScenarioConfig::new(
            "edge-on panel",
            sun_down,
            SolarPanel::rectangle(10., 10., 0.25, Vector::new(0.1, 1., 0.), 1.),
        ),
        // Light from below: unphysical, collects nothing
        7 => ScenarioConfig::new(
            "light from below",
            Sunlight::new(10., Vector::new(-1., 0.5, 1.)),
            SolarPanel::rectangle(10., 10., 0.25, Vector::new(0., 0., 1.), 1.),
        ),
        // New moon: no light at all
        8 => ScenarioConfig::new(
            "new moon",
            Sunlight::default(),
            SolarPanel::square(10., 0.25, Vector::new(0., 0., 1.), 1.),
        ),
        n => return Err(anyhow!("Unknown scenario: {n} (expected 1-8)")),
    };
    Ok(config)
}

fn main() -> Result<()> {
    let number = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => 1,
    };
    let scenario = scenario(number)?;

    println!("Scenario {number}: {}", scenario.label);
    draw_simulation(&scenario, &SceneConfig::new())
}
