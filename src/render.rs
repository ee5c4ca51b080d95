//! Render output handed to the presentation layer.

use crate::float::Float;
use crate::grid::ClothGrid;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// A projected node.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RenderPoint<F: Float> {
    pub screen: Vec2<F>,
    pub fixed: bool,
}

/// A projected edge between two nodes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Segment<F: Float> {
    pub from: Vec2<F>,
    pub to: Vec2<F>,
}

/// Everything needed to draw one frame.
///
/// Coordinates are raw projector output: they may lie outside the viewport or
/// be non-finite for nodes on the camera plane. Clipping is the drawer's job.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderFrame<F: Float> {
    pub points: AllocVec<RenderPoint<F>>,
    pub segments: AllocVec<Segment<F>>,
}

impl<F: Float> RenderFrame<F> {
    /// Pair the grid with its projected positions (`screen[i]` for node `i`).
    pub fn build(grid: &ClothGrid<F>, screen: &[Vec2<F>]) -> Self {
        let points = grid
            .nodes()
            .iter()
            .zip(screen)
            .map(|(n, &s)| RenderPoint { screen: s, fixed: n.is_fixed() })
            .collect();
        let segments = grid
            .edges()
            .map(|(a, b)| Segment { from: screen[a], to: screen[b] })
            .collect();
        RenderFrame { points, segments }
    }

    /// Points as flat `[x0, y0, x1, y1, ...]`.
    pub fn flat_points(&self) -> AllocVec<f32> {
        let mut out = AllocVec::with_capacity(self.points.len() * 2);
        for p in &self.points {
            out.push(p.screen.x.to_f32());
            out.push(p.screen.y.to_f32());
        }
        out
    }

    /// Segments as flat `[x0, y0, x1, y1, ...]`, four values per segment.
    pub fn flat_segments(&self) -> AllocVec<f32> {
        let mut out = AllocVec::with_capacity(self.segments.len() * 4);
        for s in &self.segments {
            out.extend_from_slice(&[
                s.from.x.to_f32(),
                s.from.y.to_f32(),
                s.to.x.to_f32(),
                s.to.y.to_f32(),
            ]);
        }
        out
    }
}
