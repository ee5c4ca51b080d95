//! Cloth nodes: point masses linked to lattice neighbors.

use crate::float::Float;
use crate::vec::Vec3;
use alloc::vec::Vec as AllocVec;

/// A point mass in the cloth.
///
/// Neighbors are ids into the owning node slice, not references, so the
/// solver can mutate both ends of an edge through one `&mut [Node]`.
#[derive(Clone, Debug, PartialEq)]
pub struct Node<F: Float> {
    id: usize,
    pub(crate) pos: Vec3<F>,
    fixed: bool,
    neighbors: AllocVec<usize>,
}

impl<F: Float> Node<F> {
    pub fn new(id: usize, pos: Vec3<F>, fixed: bool, neighbors: AllocVec<usize>) -> Self {
        Node { id, pos, fixed, neighbors }
    }

    pub fn id(&self) -> usize { self.id }
    pub fn pos(&self) -> Vec3<F> { self.pos }
    pub fn is_fixed(&self) -> bool { self.fixed }
    pub fn neighbors(&self) -> &[usize] { &self.neighbors }

    /// Move a free node by `delta`. Fixed nodes ignore the call.
    pub(crate) fn displace(&mut self, delta: Vec3<F>) {
        if !self.fixed {
            self.pos = self.pos + delta;
        }
    }
}
