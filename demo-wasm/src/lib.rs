use drape::{GridConfig, InputFrame, Simulation, SolverConfig, ViewConfig};
use wasm_bindgen::prelude::*;

// ---- Cloth Demo ----

/// Browser front end for the cloth: JS collects keys and the cursor each
/// animation frame, calls `update`, then draws `points` and `segments`.
#[wasm_bindgen]
pub struct ClothDemo {
    sim: Simulation<f32>,
    input: InputFrame,
}

#[wasm_bindgen]
impl ClothDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(cols: usize, rows: usize, width: u32, height: u32) -> Result<ClothDemo, JsError> {
        let grid = GridConfig { cols, rows, ..GridConfig::default() };
        let view = ViewConfig::new().with_viewport(width, height);
        let sim = Simulation::new(&grid, SolverConfig::new(), view)?;
        Ok(ClothDemo { sim, input: InputFrame::default() })
    }

    /// Arrow keys: up/down move the camera, left/right rotate it.
    pub fn set_keys(&mut self, up: bool, down: bool, left: bool, right: bool) {
        self.input.forward = up;
        self.input.backward = down;
        self.input.rotate_left = left;
        self.input.rotate_right = right;
    }

    /// Space bar state and cursor position in canvas pixels.
    pub fn set_pointer(&mut self, grabbing: bool, x: i32, y: i32) {
        self.input.interact = grabbing;
        self.input.cursor = (x, y);
    }

    pub fn update(&mut self, elapsed_ms: u32) {
        self.input.elapsed_ms = elapsed_ms;
        self.sim.tick(&self.input);
    }

    /// Returns flat [x0, y0, x1, y1, ...] screen positions in row-major order
    pub fn points(&self) -> Vec<f32> {
        self.sim.render_frame().flat_points()
    }

    /// Returns 1 for pinned nodes, 0 otherwise, in the same order as `points`
    pub fn fixed_mask(&self) -> Vec<u8> {
        self.sim.grid().nodes().iter().map(|n| n.is_fixed() as u8).collect()
    }

    /// Returns flat [ax, ay, bx, by, ...], one quadruple per edge
    pub fn segments(&self) -> Vec<f32> {
        self.sim.render_frame().flat_segments()
    }

    pub fn frame_rate(&self) -> Option<u32> {
        self.sim.frame_rate()
    }

    pub fn cols(&self) -> usize {
        self.sim.grid().cols()
    }
    pub fn rows(&self) -> usize {
        self.sim.grid().rows()
    }
}
