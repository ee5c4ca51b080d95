//! Pull force derived from cursor motion.

use crate::float::Float;
use crate::vec::{Vec, Vec2, Vec3};

/// Turns consecutive cursor samples into a pull force.
///
/// The force is the cursor displacement since the previous sample, in
/// pixels, with zero depth. The first sample of every press yields zero so
/// that grabbing never causes a jump.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct CursorForce<F: Float> {
    previous: Vec2<F>,
    current: Vec2<F>,
    pressed: bool,
}

impl<F: Float> CursorForce<F> {
    pub fn new() -> Self {
        CursorForce { previous: Vec2::zero(), current: Vec2::zero(), pressed: false }
    }

    /// Feed one tick of input and return the resulting pull.
    pub fn sample(&mut self, pressed: bool, cursor: Vec2<F>) -> Vec3<F> {
        if !pressed {
            self.pressed = false;
            return Vec3::zero();
        }
        if !self.pressed {
            self.pressed = true;
            self.current = cursor;
            self.previous = cursor;
            return Vec3::zero();
        }
        self.previous = self.current;
        self.current = cursor;
        (self.current - self.previous).extend()
    }

    /// True while a press is in progress.
    pub fn is_pressed(&self) -> bool { self.pressed }

    /// Most recent cursor sample of the current or last press.
    pub fn cursor(&self) -> Vec2<F> { self.current }
}
