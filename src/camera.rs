//! Camera state and the perspective projector.

use crate::float::Float;
use crate::input::InputFrame;
use crate::node::Node;
use crate::vec::{Vec, Vec2, Vec3};
use alloc::vec::Vec as AllocVec;

/// Camera position and yaw (rotation about the vertical axis).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Camera<F: Float> {
    pub position: Vec3<F>,
    pub yaw: F,
}

impl<F: Float> Camera<F> {
    pub fn new(position: Vec3<F>, yaw: F) -> Self {
        Camera { position, yaw }
    }

    /// Unit view direction in world space.
    pub fn forward(&self) -> Vec3<F> {
        Vec3::new(F::zero(), F::zero(), F::one()).unrotate_yaw(self.yaw)
    }

    /// Apply one tick of movement and rotation keys.
    ///
    /// Movement uses the yaw held before this tick's rotation keys are read.
    pub fn apply_input(&mut self, input: &InputFrame, speed: F, yaw_step: F) {
        let step = self.forward().scale(speed);
        if input.forward {
            self.position = self.position + step;
        }
        if input.backward {
            self.position = self.position - step;
        }
        if input.rotate_right {
            self.yaw = self.yaw - yaw_step;
        }
        if input.rotate_left {
            self.yaw = self.yaw + yaw_step;
        }
    }
}

/// Pinhole projector with the focal length equal to the viewport height.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Projector {
    pub width: u32,
    pub height: u32,
}

impl Projector {
    pub fn new(width: u32, height: u32) -> Self {
        Projector { width, height }
    }

    /// Screen-space coordinate of a world-space point.
    ///
    /// Points on the camera plane (camera-relative depth 0) are a singularity
    /// of the perspective divide: the result is infinite or NaN. Callers that
    /// draw must discard coordinates that are not finite or fall outside the
    /// viewport.
    pub fn project<F: Float>(&self, pos: Vec3<F>, camera: &Camera<F>) -> Vec2<F> {
        let f = F::from_usize(self.height as usize);
        let half_w = F::from_usize((self.width / 2) as usize);
        let half_h = F::from_usize((self.height / 2) as usize);

        let p = (pos - camera.position).rotate_yaw(camera.yaw);
        Vec2::new(f * p.x / p.z + half_w, f * p.y / p.z + half_h)
    }

    /// Project every node into `out`, replacing its previous contents.
    ///
    /// `out[i]` is the screen position of `nodes[i]`.
    pub fn project_nodes<F: Float>(
        &self,
        nodes: &[Node<F>],
        camera: &Camera<F>,
        out: &mut AllocVec<Vec2<F>>,
    ) {
        out.clear();
        out.extend(nodes.iter().map(|n| self.project(n.pos(), camera)));
    }

    pub fn center<F: Float>(&self) -> Vec2<F> {
        Vec2::new(
            F::from_usize((self.width / 2) as usize),
            F::from_usize((self.height / 2) as usize),
        )
    }
}
