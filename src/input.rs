//! Per-tick input supplied by the presentation layer.

/// Keyboard and cursor state sampled once per tick.
///
/// The simulation never polls devices itself; whatever drives the window
/// fills one of these and hands it to [`Simulation::tick`](crate::Simulation::tick).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct InputFrame {
    /// Milliseconds since the previous tick.
    pub elapsed_ms: u32,
    /// Move the camera along its view direction.
    pub forward: bool,
    /// Move the camera against its view direction.
    pub backward: bool,
    /// Increase yaw.
    pub rotate_left: bool,
    /// Decrease yaw.
    pub rotate_right: bool,
    /// Interaction modifier held: the cursor grabs nearby nodes.
    pub interact: bool,
    /// Cursor position in pixels.
    pub cursor: (i32, i32),
}

impl InputFrame {
    /// A frame with no keys held.
    pub fn idle(elapsed_ms: u32) -> Self {
        InputFrame { elapsed_ms, ..Self::default() }
    }

    /// A frame with only the interaction modifier held at `cursor`.
    pub fn dragging(elapsed_ms: u32, cursor: (i32, i32)) -> Self {
        InputFrame { elapsed_ms, interact: true, cursor, ..Self::default() }
    }
}
