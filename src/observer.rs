//! Step observer trait for monitoring cloth ticks.

/// Hooks called by the solver and simulation loop.
///
/// All methods default to no-ops; implement only what you need (counters
/// in tests, profiling spans, debug overlays).
pub trait StepObserver {
    /// Called after gravity has been added to every free node.
    fn on_gravity(&mut self) {}

    /// Called after each relaxation pass over the edges.
    fn on_relaxation_pass(&mut self, _pass: usize) {}

    /// Called once the solver step is complete.
    fn on_step_complete(&mut self) {}

    /// Called by the simulation loop after the proximity set was rebuilt.
    fn on_selection(&mut self, _selected: usize) {}
}

/// Observer that ignores every hook.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}
