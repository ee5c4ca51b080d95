//! Configuration types for the solver and the view.

use crate::error::ClothError;
use crate::float::Float;
use crate::vec::Vec3;

/// Tuning constants for the constraint solver.
///
/// # Builder Pattern
/// ```
/// use drape::config::SolverConfig;
///
/// let config: SolverConfig<f32> = SolverConfig::new()
///     .with_spacing(0.1)
///     .with_gravity(9.82e-4)
///     .with_line_force(1.0)
///     .with_mouse_power(5e-5);
/// assert_eq!(config.passes, 1);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SolverConfig<F: Float> {
    /// Rest length every edge relaxes toward. Default: 0.1.
    pub spacing: F,
    /// Stiffness multiplier applied to each correction. Default: 1.0.
    pub line_force: F,
    /// Downward `y` increment added to free nodes once per tick. Default: 9.82e-4.
    pub gravity: F,
    /// Scale applied to the cursor pull. Default: 5e-5.
    pub mouse_power: F,
    /// Relaxation passes per tick. Default: 1.
    ///
    /// A single pass leaves edges visibly stretched under load; more passes
    /// stiffen the cloth at linear cost.
    pub passes: usize,
}

impl<F: Float> SolverConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        SolverConfig {
            spacing: F::from_f32(0.1),
            line_force: F::one(),
            gravity: F::from_f32(9.82e-4),
            mouse_power: F::from_f32(5e-5),
            passes: 1,
        }
    }

    /// Set the rest spacing.
    pub fn with_spacing(mut self, spacing: F) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set the stiffness multiplier.
    pub fn with_line_force(mut self, line_force: F) -> Self {
        self.line_force = line_force;
        self
    }

    /// Set the per-tick gravity increment.
    pub fn with_gravity(mut self, gravity: F) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set the cursor pull scale.
    pub fn with_mouse_power(mut self, mouse_power: F) -> Self {
        self.mouse_power = mouse_power;
        self
    }

    /// Set the number of relaxation passes (at least 1).
    pub fn with_passes(mut self, passes: usize) -> Self {
        self.passes = passes.max(1);
        self
    }

    /// Reject values that would let the solver divide by zero.
    pub fn validate(&self) -> Result<(), ClothError> {
        if !self.spacing.is_finite() || self.spacing <= F::zero() {
            return Err(ClothError::InvalidSpacing);
        }
        Ok(())
    }
}

impl<F: Float> Default for SolverConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Viewport, camera and interaction constants.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewConfig<F: Float> {
    /// Viewport width in pixels. Default: 640.
    pub width: u32,
    /// Viewport height in pixels, also the focal length. Default: 480.
    pub height: u32,
    /// Initial camera position. Default: (0, 0, -3.001).
    pub camera_position: Vec3<F>,
    /// Initial camera yaw in radians. Default: 0.
    pub camera_yaw: F,
    /// Distance moved per tick while a move key is held. Default: 0.5.
    pub speed: F,
    /// Yaw change per tick while a rotate key is held. Default: 0.05.
    pub yaw_step: F,
    /// Screen-space radius of the cursor selection. Default: 100.
    pub proximity_radius: F,
}

impl<F: Float> ViewConfig<F> {
    pub fn new() -> Self {
        ViewConfig {
            width: 640,
            height: 480,
            camera_position: Vec3::new(F::zero(), F::zero(), F::from_f32(-3.001)),
            camera_yaw: F::zero(),
            speed: F::half(),
            yaw_step: F::from_f32(0.05),
            proximity_radius: F::from_f32(100.0),
        }
    }

    pub fn with_viewport(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_camera(mut self, position: Vec3<F>, yaw: F) -> Self {
        self.camera_position = position;
        self.camera_yaw = yaw;
        self
    }

    pub fn with_speed(mut self, speed: F) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_yaw_step(mut self, yaw_step: F) -> Self {
        self.yaw_step = yaw_step;
        self
    }

    pub fn with_proximity_radius(mut self, radius: F) -> Self {
        self.proximity_radius = radius;
        self
    }

    pub fn validate(&self) -> Result<(), ClothError> {
        if self.width == 0 || self.height == 0 {
            return Err(ClothError::InvalidViewport { width: self.width, height: self.height });
        }
        Ok(())
    }
}

impl<F: Float> Default for ViewConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
