use anyhow::Result;
use three_d::Blend;
use three_d::Camera;
use three_d::ColorMaterial;
use three_d::CpuMesh;
use three_d::Gm;
use three_d::Mesh;
use three_d::Object;
use three_d::RenderStates;
use three_d::Srgba;
use three_d::Viewport;
use three_d::WriteMask;
use three_d::control::OrbitControl;
use three_d::degrees;
use three_d::radians;
use three_d::vec3;
use three_d::{ClearState, DepthTest, Event, FrameOutput, InnerSpace, Key, Mat4, Quat, Vec3};
use three_d::{Window, WindowSettings};

use crate::draw::config::{Rgba, SceneConfig};
use crate::geom::point::Point;
use crate::geom::scene::{point_from_scene, point_to_scene, vector_from_scene, vector_to_scene};
use crate::geom::vector::Vector;
use crate::sim::orientation::{self, Axis};
use crate::sim::panel::{PanelShape, SolarPanel};
use crate::sim::simulation::{ScenarioConfig, Simulation};
use crate::sim::view::CameraPose;

pub mod config;

fn to_srgba(c: Rgba) -> Srgba {
    Srgba::new(
        (c.0 * 255.0) as u8,
        (c.1 * 255.0) as u8,
        (c.2 * 255.0) as u8,
        (c.3 * 255.0) as u8,
    )
}

fn point_of(v: Vec3) -> Point {
    Point::new(v.x as f64, v.y as f64, v.z as f64)
}

fn vector_of(v: Vec3) -> Vector {
    Vector::new(v.x as f64, v.y as f64, v.z as f64)
}

/// Simulation-space point to renderer-space Vec3.
fn scene_pos(p: Point) -> Vec3 {
    let p = point_to_scene(p);
    vec3(p.x as f32, p.y as f32, p.z as f32)
}

/// Simulation-space vector to renderer-space Vec3.
fn scene_dir(v: Vector) -> Vec3 {
    let v = vector_to_scene(v);
    vec3(v.dx as f32, v.dy as f32, v.dz as f32)
}

/// A shaft-plus-head arrow, re-aimable by setting mesh transforms.
struct Arrow {
    shaft: Gm<Mesh, ColorMaterial>,
    head: Gm<Mesh, ColorMaterial>,
}

impl Arrow {
    /// Builds an arrow from a unit cylinder and cone (both along +x in
    /// `[0, 1]`). `on_top` disables the depth test, for overlay widgets.
    fn new(context: &three_d::Context, color: Srgba, on_top: bool) -> Self {
        let render_states = if on_top {
            RenderStates {
                depth_test: DepthTest::Always,
                write_mask: WriteMask::COLOR,
                ..Default::default()
            }
        } else {
            RenderStates::default()
        };
        let material = ColorMaterial {
            color,
            render_states,
            ..Default::default()
        };
        Self {
            shaft: Gm::new(Mesh::new(context, &CpuMesh::cylinder(16)), material.clone()),
            head: Gm::new(Mesh::new(context, &CpuMesh::cone(16)), material),
        }
    }

    /// Points the arrow from `pos` along `dir`. A degenerate direction
    /// collapses the arrow instead of leaving it dangling.
    fn aim(&mut self, pos: Vec3, dir: Vec3, length: f32, radius: f32) {
        if dir.magnitude() < 1e-6 || length < 1e-6 {
            self.shaft.set_transformation(Mat4::from_scale(0.0));
            self.head.set_transformation(Mat4::from_scale(0.0));
            return;
        }
        let dir = dir.normalize();
        let rot: Mat4 = Quat::from_arc(vec3(1.0, 0.0, 0.0), dir, None).into();
        let head_len = (length * 0.2).min(0.25);
        let shaft_len = length - head_len;
        self.shaft.set_transformation(
            Mat4::from_translation(pos)
                * rot
                * Mat4::from_nonuniform_scale(shaft_len, radius, radius),
        );
        self.head.set_transformation(
            Mat4::from_translation(pos + dir * shaft_len)
                * rot
                * Mat4::from_nonuniform_scale(head_len, radius * 2.5, radius * 2.5),
        );
    }

    fn objects(&self) -> impl Iterator<Item = &dyn Object> {
        self.shaft.into_iter().chain(&self.head)
    }
}

/// Base mesh and transform for the panel, sized in scene units. The panel
/// lies flat at the origin: length along x, width along y, thickness along
/// z (simulation axes).
fn panel_mesh(panel: &SolarPanel, scale: f64) -> (CpuMesh, Mat4) {
    match panel.shape {
        PanelShape::Rectangle { length, width } => {
            // Cube spans [-1, 1]; simulation y maps to scene -z
            let transform = Mat4::from_nonuniform_scale(
                (scale * length / 2.0) as f32,
                (scale * panel.height / 2.0) as f32,
                (scale * width / 2.0) as f32,
            );
            (CpuMesh::cube(), transform)
        }
        PanelShape::Circle { radius } => {
            // Cylinder along x in [0, 1]; center it, then stand it upright
            let thickness = (scale * panel.height) as f32;
            let transform = Mat4::from_angle_z(degrees(90.0))
                * Mat4::from_translation(vec3(-thickness / 2.0, 0.0, 0.0))
                * Mat4::from_nonuniform_scale(
                    thickness,
                    (scale * radius) as f32,
                    (scale * radius) as f32,
                );
            (CpuMesh::cylinder(32), transform)
        }
    }
}

/// Rotation aligning the freshly built mesh (flat, facing simulation +z)
/// with the panel's current surface normal. Identity when the two are
/// parallel or antiparallel (a flat mesh already looks right either way).
fn aligned_rotation(normal: Vector) -> Mat4 {
    let delta = orientation::delta_between(Vector::new(0.0, 0.0, 1.0), normal);
    if delta.is_negligible() {
        Mat4::from_scale(1.0)
    } else {
        Mat4::from_axis_angle(
            scene_dir(delta.axis).normalize(),
            radians(delta.angle as f32),
        )
    }
}

fn camera_pose(camera: &Camera) -> CameraPose {
    let position = point_from_scene(point_of(*camera.position()));
    let target = point_from_scene(point_of(*camera.target()));
    CameraPose {
        position,
        forward: Vector::from_points(position, target).normalized(),
        up: vector_from_scene(vector_of(*camera.up())),
    }
}

fn apply_pose(camera: &mut Camera, pose: &CameraPose) {
    camera.set_view(
        scene_pos(pose.position),
        scene_pos(pose.target()),
        scene_dir(pose.up),
    );
}

/// Opens a window and runs the interactive simulation until the user quits.
///
/// X/Y/Z step the matching component of the panel's surface normal up
/// (down with Shift); R resets the orientation, V the view; N rebuilds the
/// run from the scenario; Escape or Q quits. The power readout is printed
/// whenever the orientation changes.
pub fn draw_simulation(scenario: &ScenarioConfig, config: &SceneConfig) -> Result<()> {
    let scenario = scenario.clone();
    let config = config.clone();

    let window = Window::new(WindowSettings {
        title: format!("{} - {}", config.window_title, scenario.label),
        max_size: Some(config.window_size),
        ..Default::default()
    })?;
    let context = window.gl();

    let mut sim = Simulation::from_config(&scenario);
    println!("{}", sim.sunlight());
    println!("{}", sim.panel());
    println!("{}", sim.power());
    println!("Controls: X/Y/Z step the surface normal (with Shift: step down),");
    println!("  R resets orientation, V resets the view, N restarts, Esc quits.");
    println!("  Drag with the mouse to orbit the camera.");

    // Panel mesh; orientation deltas accumulate in `panel_rotation`
    let (panel_cpu, base_transform) = panel_mesh(sim.panel(), config.panel_scale);
    let mut panel_gm = Gm::new(
        Mesh::new(&context, &panel_cpu),
        ColorMaterial {
            color: to_srgba(config.panel_color),
            ..Default::default()
        },
    );
    let mut panel_rotation = aligned_rotation(sim.panel().surface_normal());
    panel_gm.set_transformation(panel_rotation * base_transform);

    // Sun: a core sphere with two translucent glow shells
    let sun_pos = scene_pos(Point::origin() + -sim.sunlight().direction * config.sun_distance);
    let (sr, sg, sb, _) = config.sun_color;
    let mut sun_shells = Vec::new();
    for (radius, alpha) in config.sun_shells {
        let mut shell = Gm::new(
            Mesh::new(&context, &CpuMesh::sphere(16)),
            ColorMaterial {
                color: to_srgba((sr, sg, sb, alpha)),
                render_states: RenderStates {
                    write_mask: WriteMask::COLOR,
                    blend: Blend::TRANSPARENCY,
                    ..Default::default()
                },
                is_transparent: true,
                ..Default::default()
            },
        );
        shell.set_transformation(Mat4::from_translation(sun_pos) * Mat4::from_scale(radius as f32));
        sun_shells.push(shell);
    }

    // Arrows for the light direction and the panel surface normal
    let mut sun_arrow = Arrow::new(&context, to_srgba(config.sun_arrow_color), false);
    sun_arrow.aim(
        sun_pos,
        scene_dir(sim.sunlight().direction),
        config.arrow_length as f32,
        config.arrow_radius as f32,
    );
    let mut normal_arrow = Arrow::new(&context, to_srgba(config.normal_arrow_color), false);
    normal_arrow.aim(
        vec3(0.0, 0.0, 0.0),
        scene_dir(sim.panel().surface_normal()),
        config.arrow_length as f32,
        config.arrow_radius as f32,
    );

    // Axis triad shown in the overlay viewport (x red, y blue, z up green)
    let triad = [
        (Vector::new(1.0, 0.0, 0.0), config.axis_x_color),
        (Vector::new(0.0, 1.0, 0.0), config.axis_y_color),
        (Vector::new(0.0, 0.0, 1.0), config.axis_z_color),
    ];
    let mut axis_arrows = Vec::new();
    for (axis, color) in triad {
        let mut arrow = Arrow::new(&context, to_srgba(color), true);
        arrow.aim(
            vec3(0.0, 0.0, 0.0),
            scene_dir(axis),
            config.overlay_axis_length as f32,
            (config.arrow_radius * 1.5) as f32,
        );
        axis_arrows.push(arrow);
    }

    // Primary camera starts at the home (isometric) pose; the overlay
    // camera is locked to it every frame
    let initial_pose = CameraPose::isometric(config.camera_distance);
    let mut camera = Camera::new_perspective(
        window.viewport(),
        scene_pos(initial_pose.position),
        scene_pos(initial_pose.target()),
        scene_dir(initial_pose.up),
        degrees(45.0),
        0.1,
        1000.0,
    );
    let mut overlay_camera = Camera::new_perspective(
        Viewport {
            x: 10,
            y: 10,
            width: config.overlay_size,
            height: config.overlay_size,
        },
        scene_pos(initial_pose.position),
        scene_pos(initial_pose.target()),
        scene_dir(initial_pose.up),
        degrees(45.0),
        0.1,
        1000.0,
    );
    let mut overlay_pose = initial_pose;
    let mut control = OrbitControl::new(vec3(0.0, 0.0, 0.0), 0.5, 100.0);

    window.render_loop(move |mut frame_input| {
        camera.set_viewport(frame_input.viewport);
        control.handle_events(&mut camera, &mut frame_input.events);

        for event in frame_input.events.iter() {
            if let Event::KeyPress {
                kind, modifiers, ..
            } = event
            {
                let step = if modifiers.shift {
                    -config.axis_step
                } else {
                    config.axis_step
                };
                let normal = sim.panel().surface_normal();
                let delta = match *kind {
                    Key::X => {
                        Some(sim.set_axis_component(Axis::X, (normal.dx + step).clamp(-1.0, 1.0)))
                    }
                    Key::Y => {
                        Some(sim.set_axis_component(Axis::Y, (normal.dy + step).clamp(-1.0, 1.0)))
                    }
                    Key::Z => {
                        Some(sim.set_axis_component(Axis::Z, (normal.dz + step).clamp(-1.0, 1.0)))
                    }
                    Key::R => Some(sim.reset_orientation()),
                    Key::V => {
                        apply_pose(&mut camera, &CameraPose::front(config.camera_distance));
                        None
                    }
                    Key::N => {
                        sim.request_restart();
                        None
                    }
                    Key::Escape | Key::Q => {
                        sim.request_stop();
                        None
                    }
                    _ => None,
                };

                if let Some(delta) = delta {
                    if !delta.is_negligible() {
                        let axis = scene_dir(delta.axis).normalize();
                        panel_rotation =
                            Mat4::from_axis_angle(axis, radians(delta.angle as f32))
                                * panel_rotation;
                        panel_gm.set_transformation(panel_rotation * base_transform);
                    }
                    let normal = sim.panel().surface_normal();
                    normal_arrow.aim(
                        vec3(0.0, 0.0, 0.0),
                        scene_dir(normal),
                        config.arrow_length as f32,
                        config.arrow_radius as f32,
                    );
                    println!(
                        "Normal: ({:.2}, {:.2}, {:.2})  {}",
                        normal.dx,
                        normal.dy,
                        normal.dz,
                        sim.power()
                    );
                }
            }
        }

        // Restart: tear the run down and rebuild it from the scenario
        if sim.restart_requested() {
            sim = Simulation::from_config(&scenario);
            panel_rotation = aligned_rotation(sim.panel().surface_normal());
            panel_gm.set_transformation(panel_rotation * base_transform);
            normal_arrow.aim(
                vec3(0.0, 0.0, 0.0),
                scene_dir(sim.panel().surface_normal()),
                config.arrow_length as f32,
                config.arrow_radius as f32,
            );
            println!("Restarted: {}", sim.power());
        }

        // Lock the overlay camera to the primary one, after any movement
        overlay_pose.sync_to(&camera_pose(&camera));
        apply_pose(&mut overlay_camera, &overlay_pose);

        let (br, bg, bb, ba) = config.background;
        frame_input
            .screen()
            .clear(ClearState::color_and_depth(br, bg, bb, ba, 1.0))
            .render(
                &camera,
                panel_gm
                    .into_iter()
                    .chain(sun_arrow.objects())
                    .chain(normal_arrow.objects())
                    .chain(&sun_shells[0])
                    .chain(&sun_shells[1])
                    .chain(&sun_shells[2]),
                &[],
            )
            .render(
                &overlay_camera,
                axis_arrows[0]
                    .objects()
                    .chain(axis_arrows[1].objects())
                    .chain(axis_arrows[2].objects()),
                &[],
            );

        FrameOutput {
            exit: sim.should_stop(),
            ..Default::default()
        }
    });
    Ok(())
}
