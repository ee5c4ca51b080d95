use drape::{GridConfig, InputFrame, Simulation, SolverConfig, Vec2, Vec3, ViewConfig};

fn default_sim() -> Simulation<f32> {
    Simulation::new(&GridConfig::default(), SolverConfig::new(), ViewConfig::new()).unwrap()
}

#[test]
fn node_on_view_axis_projects_to_viewport_center() {
    let sim = default_sim();
    let proj = sim.projector();
    let on_axis = Vec3::new(0.0, 0.0, 2.0);
    assert_eq!(proj.project(on_axis, sim.camera()), Vec2::new(320.0, 240.0));
    assert_eq!(proj.center::<f32>(), Vec2::new(320.0, 240.0));
}

#[test]
fn dragging_pulls_selected_nodes_along_the_cursor() {
    let mut sim = default_sim();
    let mut idle = default_sim();

    // Grab the middle of the cloth, then drag right for a while.
    let mut x = 320;
    sim.tick(&InputFrame::dragging(16, (x, 240)));
    idle.tick(&InputFrame::idle(16));
    for _ in 0..30 {
        x += 4;
        sim.tick(&InputFrame::dragging(16, (x, 240)));
        idle.tick(&InputFrame::idle(16));
    }

    let grid = sim.grid();
    let centre = grid.index(8, 8);
    let dragged = grid.node(centre).pos();
    let resting = idle.grid().node(centre).pos();
    assert!(
        dragged.x > resting.x,
        "dragged node x {} should exceed undisturbed x {}",
        dragged.x,
        resting.x
    );
}

#[test]
fn first_tick_of_a_press_does_not_move_the_cloth_sideways() {
    let mut pressed = default_sim();
    let mut idle = default_sim();
    pressed.tick(&InputFrame::dragging(16, (320, 240)));
    idle.tick(&InputFrame::idle(16));
    assert_eq!(pressed.positions(), idle.positions());
}

#[test]
fn identical_inputs_give_identical_cloth() {
    let script: Vec<InputFrame> = (0..120)
        .map(|i| InputFrame {
            elapsed_ms: 16,
            rotate_left: i % 30 < 5,
            forward: i % 50 == 0,
            interact: (20..80).contains(&i),
            cursor: (300 + i, 200 + i / 2),
            ..InputFrame::default()
        })
        .collect();

    let results: Vec<Vec<Vec3<f32>>> = (0..3)
        .map(|_| {
            let mut sim = default_sim();
            for frame in &script {
                sim.tick(frame);
            }
            sim.positions()
        })
        .collect();

    for r in &results[1..] {
        assert_eq!(&results[0], r);
    }
}

#[test]
fn render_frame_covers_every_node_and_edge() {
    let mut sim = default_sim();
    sim.tick(&InputFrame::idle(16));
    let frame = sim.render_frame();

    assert_eq!(frame.points.len(), 17 * 17);
    assert_eq!(frame.segments.len(), 2 * 16 * 17);
    assert_eq!(frame.points.iter().filter(|p| p.fixed).count(), 17);
    assert_eq!(frame.flat_points().len(), 2 * 17 * 17);
    assert_eq!(frame.flat_segments().len(), 4 * 2 * 16 * 17);

    let screen = sim.screen_positions();
    assert_eq!(frame.points[5].screen, screen[5]);
}

#[test]
fn camera_keys_change_the_projection() {
    let mut sim = default_sim();
    let before = sim.screen_positions().to_vec();
    sim.tick(&InputFrame { rotate_left: true, ..InputFrame::idle(16) });
    assert!((sim.camera().yaw - 0.05).abs() < 1e-6);

    // Fixed nodes never move, so any change in their projection is the camera.
    assert_ne!(sim.screen_positions()[0], before[0]);
}

#[test]
fn frame_rate_tracks_elapsed_time() {
    let mut sim = default_sim();
    assert_eq!(sim.frame_rate(), None);
    sim.tick(&InputFrame::idle(20));
    assert_eq!(sim.frame_rate(), Some(50));
    sim.tick(&InputFrame::idle(0));
    assert_eq!(sim.frame_rate(), None);
    assert_eq!(sim.ticks(), 2);
}

#[test]
fn bad_configuration_fails_before_the_first_tick() {
    let grid = GridConfig::<f32> { cols: 1, ..GridConfig::default() };
    assert!(Simulation::new(&grid, SolverConfig::new(), ViewConfig::new()).is_err());

    let view = ViewConfig::<f32>::new().with_viewport(640, 0);
    assert!(Simulation::new(&GridConfig::default(), SolverConfig::new(), view).is_err());
}
