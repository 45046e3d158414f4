/// RGBA color tuple (red, green, blue, alpha) with values in 0.0..=1.0.
pub type Rgba = (f32, f32, f32, f32);

/// Configuration for the interactive scene.
///
/// Controls window setup, default colors/sizes for the panel, sun and
/// arrows, the stepper increment for orientation keys, and the axis-triad
/// overlay.
#[derive(Debug, Clone)]
pub struct SceneConfig {
    // Window
    pub window_title: String,
    pub window_size: (u32, u32),
    pub background: Rgba,

    // Panel
    pub panel_color: Rgba,
    /// Scale from panel meters to scene units.
    pub panel_scale: f64,

    // Sun
    pub sun_color: Rgba,
    /// Distance from the origin to the sun sphere, in scene units.
    pub sun_distance: f64,
    /// Radii and opacities of the sun core and its two glow shells.
    pub sun_shells: [(f64, f32); 3],

    // Arrows
    pub sun_arrow_color: Rgba,
    pub normal_arrow_color: Rgba,
    pub arrow_length: f64,
    pub arrow_radius: f64,

    // Controls
    /// Increment applied to a normal component per stepper key press.
    pub axis_step: f64,
    pub camera_distance: f64,

    // Axis-triad overlay
    pub overlay_size: u32,
    pub overlay_axis_length: f64,
    pub axis_x_color: Rgba,
    pub axis_y_color: Rgba,
    pub axis_z_color: Rgba,
}

impl SceneConfig {
    pub fn new() -> Self {
        Self {
            window_title: "solar3d".to_string(),
            window_size: (1000, 800),
            background: (0.0, 0.0, 0.0, 1.0),

            panel_color: (0.1, 0.1, 0.18, 1.0),
            panel_scale: 0.25,

            sun_color: (1.0, 0.9, 0.0, 1.0),
            sun_distance: 6.0,
            sun_shells: [(0.2, 1.0), (0.3, 0.6), (0.5, 0.1)],

            sun_arrow_color: (1.0, 0.9, 0.0, 1.0),
            normal_arrow_color: (1.0, 1.0, 1.0, 1.0),
            arrow_length: 0.9,
            arrow_radius: 0.04,

            axis_step: 0.05,
            camera_distance: 8.0,

            overlay_size: 200,
            overlay_axis_length: 3.0,
            axis_x_color: (1.0, 0.0, 0.0, 1.0),
            axis_y_color: (0.0, 0.0, 1.0, 1.0),
            axis_z_color: (0.0, 1.0, 0.0, 1.0),
        }
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SceneConfig::new();
        assert_eq!(config.window_title, "solar3d");
        assert_eq!(config.window_size, (1000, 800));
        assert_eq!(config.axis_step, 0.05);
        assert_eq!(config.sun_shells[0], (0.2, 1.0));
    }

    #[test]
    fn test_default_trait() {
        let config = SceneConfig::default();
        assert_eq!(config.sun_distance, 6.0);
    }
}
