//! The per-tick simulation loop.

use crate::camera::{Camera, Projector};
use crate::config::{SolverConfig, ViewConfig};
use crate::error::ClothError;
use crate::float::Float;
use crate::force::CursorForce;
use crate::grid::{ClothGrid, GridConfig};
use crate::input::InputFrame;
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::proximity::Selection;
use crate::render::RenderFrame;
use crate::vec::{Vec2, Vec3};
use alloc::vec::Vec as AllocVec;

/// All mutable state of a running cloth: grid, camera, cursor history,
/// selection and the projected screen positions.
///
/// A tick reads input, moves the camera, updates the cursor selection, runs
/// the solver and reprojects every node, strictly in that order.
///
/// The physics step is fixed per tick. `elapsed_ms` only drives the frame
/// rate diagnostic, so the cloth falls faster at higher frame rates.
pub struct Simulation<F: Float> {
    grid: ClothGrid<F>,
    camera: Camera<F>,
    projector: Projector,
    cursor: CursorForce<F>,
    selection: Selection<F>,
    screen: AllocVec<Vec2<F>>,
    solver: SolverConfig<F>,
    view: ViewConfig<F>,
    frame_rate: Option<u32>,
    ticks: u64,
}

impl<F: Float> Simulation<F> {
    /// Validate the configuration, build the grid and project it once so the
    /// first tick can select nodes.
    pub fn new(
        grid: &GridConfig<F>,
        solver: SolverConfig<F>,
        view: ViewConfig<F>,
    ) -> Result<Self, ClothError> {
        solver.validate()?;
        view.validate()?;
        let grid = ClothGrid::new(grid)?;

        let mut sim = Simulation {
            camera: Camera::new(view.camera_position, view.camera_yaw),
            projector: Projector::new(view.width, view.height),
            cursor: CursorForce::new(),
            selection: Selection::new(),
            screen: AllocVec::with_capacity(grid.node_count()),
            grid,
            solver,
            view,
            frame_rate: None,
            ticks: 0,
        };
        sim.project();
        log::debug!(
            "simulation ready: {} nodes, {} edges, {}x{} viewport",
            sim.grid.node_count(),
            sim.grid.edge_count(),
            sim.view.width,
            sim.view.height
        );
        Ok(sim)
    }

    /// Advance one tick.
    pub fn tick(&mut self, input: &InputFrame) {
        self.tick_observed(input, &mut NoOpStepObserver);
    }

    /// Advance one tick, reporting solver phases to `observer`.
    pub fn tick_observed<O: StepObserver>(&mut self, input: &InputFrame, observer: &mut O) {
        self.ticks += 1;
        self.frame_rate = frame_rate(input.elapsed_ms);
        if let Some(fps) = self.frame_rate {
            log::trace!("tick {}: {} fps", self.ticks, fps);
        }

        self.camera.apply_input(input, self.view.speed, self.view.yaw_step);

        let cursor = Vec2::from_pixel(input.cursor.0, input.cursor.1);
        if input.interact {
            // Uses the projection from the end of the previous tick.
            self.selection.rebuild(cursor, &self.screen, self.view.proximity_radius);
            observer.on_selection(self.selection.len());
            log::trace!("{} nodes under cursor", self.selection.len());
        } else {
            self.selection.clear();
        }
        let pull = self.cursor.sample(input.interact, cursor);

        self.grid.step(pull, &self.selection, &self.solver, observer);
        self.project();
    }

    /// Recompute screen positions for the current camera.
    pub fn project(&mut self) {
        self.projector.project_nodes(self.grid.nodes(), &self.camera, &mut self.screen);
    }

    /// Points and segments to draw for the current state.
    pub fn render_frame(&self) -> RenderFrame<F> {
        RenderFrame::build(&self.grid, &self.screen)
    }

    /// Screen position of every node, as of the last projection.
    pub fn screen_positions(&self) -> &[Vec2<F>] { &self.screen }

    pub fn positions(&self) -> AllocVec<Vec3<F>> { self.grid.positions() }
    pub fn grid(&self) -> &ClothGrid<F> { &self.grid }
    pub fn camera(&self) -> &Camera<F> { &self.camera }
    pub fn projector(&self) -> &Projector { &self.projector }
    pub fn selection(&self) -> &Selection<F> { &self.selection }
    pub fn solver_config(&self) -> &SolverConfig<F> { &self.solver }

    /// Frames per second derived from the last tick's elapsed time, `None`
    /// when no time elapsed.
    pub fn frame_rate(&self) -> Option<u32> { self.frame_rate }

    pub fn ticks(&self) -> u64 { self.ticks }
}

fn frame_rate(elapsed_ms: u32) -> Option<u32> {
    if elapsed_ms == 0 {
        return None;
    }
    Some(Float::round(1000.0f32 / elapsed_ms as f32) as u32)
}
