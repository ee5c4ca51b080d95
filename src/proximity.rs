//! Cursor proximity selection in screen space.

use crate::float::Float;
use crate::vec::{Vec, Vec2};
use alloc::vec::Vec as AllocVec;

/// Nodes within the grab radius, each with its screen distance to the cursor
/// at the time of selection.
///
/// Entries are kept in ascending id order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Selection<F: Float> {
    entries: AllocVec<(usize, F)>,
}

impl<F: Float> Selection<F> {
    pub fn new() -> Self {
        Selection { entries: AllocVec::new() }
    }

    /// Replace the selection with every node whose screen position is
    /// strictly closer than `radius` to `cursor`.
    ///
    /// `screen[i]` is the projected position of node `i`. Any previous
    /// selection is discarded.
    pub fn rebuild(&mut self, cursor: Vec2<F>, screen: &[Vec2<F>], radius: F) {
        self.entries.clear();
        for (id, &pos) in screen.iter().enumerate() {
            let dist = pos.distance(cursor);
            if dist < radius {
                self.entries.push((id, dist));
            }
        }
    }

    /// Build a fresh selection. See [`rebuild`](Self::rebuild).
    pub fn within(cursor: Vec2<F>, screen: &[Vec2<F>], radius: F) -> Self {
        let mut selection = Self::new();
        selection.rebuild(cursor, screen, radius);
        selection
    }

    /// Screen distance recorded for `id`, if it is selected.
    pub fn distance_of(&self, id: usize) -> Option<F> {
        self.entries
            .binary_search_by_key(&id, |&(node, _)| node)
            .ok()
            .map(|i| self.entries[i].1)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[(usize, F)] { &self.entries }
    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn threshold_is_strict() {
        let cursor = Vec2::new(200.0f32, 200.0);
        let screen = vec![
            Vec2::new(299.999, 200.0), // 99.999 away
            Vec2::new(300.0, 200.0),   // exactly 100 away
            Vec2::new(200.0, 200.0),   // under the cursor
        ];
        let sel = Selection::within(cursor, &screen, 100.0);
        assert_eq!(sel.len(), 2);
        assert!(sel.distance_of(0).is_some());
        assert_eq!(sel.distance_of(1), None);
        assert_eq!(sel.distance_of(2), Some(0.0));
    }

    #[test]
    fn distances_are_exact() {
        let sel = Selection::within(
            Vec2::new(0.0f64, 0.0),
            &[Vec2::new(30.0, 40.0), Vec2::new(-6.0, 8.0)],
            100.0,
        );
        assert_eq!(sel.entries(), &[(0, 50.0), (1, 10.0)]);
    }

    #[test]
    fn rebuild_discards_stale_entries() {
        let screen = [Vec2::new(0.0f32, 0.0), Vec2::new(500.0, 0.0)];
        let mut sel = Selection::within(Vec2::new(0.0, 0.0), &screen, 100.0);
        assert_eq!(sel.entries(), &[(0, 0.0)]);

        sel.rebuild(Vec2::new(500.0, 0.0), &screen, 100.0);
        assert_eq!(sel.entries(), &[(1, 0.0)]);
    }

    #[test]
    fn non_finite_positions_are_never_selected() {
        let screen = [Vec2::new(f32::INFINITY, 0.0), Vec2::new(f32::NAN, f32::NAN)];
        let sel = Selection::within(Vec2::new(0.0, 0.0), &screen, 100.0);
        assert!(sel.is_empty());
    }
}
