//! Cloth grid: a 4-connected lattice of nodes with a pinned top row.

use crate::config::SolverConfig;
use crate::error::ClothError;
use crate::float::Float;
use crate::node::Node;
use crate::observer::StepObserver;
use crate::proximity::Selection;
use crate::solver;
use crate::vec::Vec3;
use alloc::vec::Vec as AllocVec;

/// Extents and node counts of a cloth grid.
#[derive(Clone, Debug, PartialEq)]
pub struct GridConfig<F: Float> {
    pub cols: usize,
    pub rows: usize,
    pub start_x: F,
    pub stop_x: F,
    pub start_y: F,
    pub stop_y: F,
}

impl<F: Float> Default for GridConfig<F> {
    /// 17 x 17 nodes spread over [-1, 1] on both axes.
    fn default() -> Self {
        GridConfig {
            cols: 17,
            rows: 17,
            start_x: -F::one(),
            stop_x: F::one(),
            start_y: -F::one(),
            stop_y: F::one(),
        }
    }
}

/// A rectangular cloth of nodes addressed by `col + row * cols`.
///
/// Built once; the node count and adjacency never change afterwards.
#[derive(Clone, Debug)]
pub struct ClothGrid<F: Float> {
    nodes: AllocVec<Node<F>>,
    cols: usize,
    rows: usize,
}

impl<F: Float> ClothGrid<F> {
    /// Build the lattice.
    ///
    /// Nodes are spaced evenly between the start and stop extents with depth
    /// zero. Row 0 is fixed. Each node links to its left, right, upper and
    /// lower neighbor, in that order, where those exist.
    pub fn new(config: &GridConfig<F>) -> Result<Self, ClothError> {
        let cols = config.cols;
        let rows = config.rows;
        if cols < 2 || rows < 2 {
            return Err(ClothError::InvalidGridDimensions { cols, rows });
        }

        let x_step = (config.stop_x - config.start_x) / F::from_usize(cols - 1);
        let y_step = (config.stop_y - config.start_y) / F::from_usize(rows - 1);
        let mut nodes = AllocVec::with_capacity(cols * rows);

        for row in 0..rows {
            let y = config.start_y + y_step * F::from_usize(row);
            for col in 0..cols {
                let x = config.start_x + x_step * F::from_usize(col);
                let id = col + row * cols;

                let mut neighbors = AllocVec::with_capacity(4);
                if col != 0 {
                    neighbors.push(id - 1);
                }
                if col != cols - 1 {
                    neighbors.push(id + 1);
                }
                if row != 0 {
                    neighbors.push(id - cols);
                }
                if row != rows - 1 {
                    neighbors.push(id + cols);
                }

                nodes.push(Node::new(id, Vec3::new(x, y, F::zero()), row == 0, neighbors));
            }
        }

        log::debug!("built {}x{} cloth grid ({} nodes)", cols, rows, nodes.len());
        Ok(ClothGrid { nodes, cols, rows })
    }

    pub fn index(&self, col: usize, row: usize) -> usize {
        row * self.cols + col
    }

    /// Advance the cloth by one tick. See [`solver::step`].
    ///
    /// `config` must have passed [`SolverConfig::validate`].
    pub fn step<O: StepObserver>(
        &mut self,
        pull: Vec3<F>,
        selection: &Selection<F>,
        config: &SolverConfig<F>,
        observer: &mut O,
    ) {
        solver::step(&mut self.nodes, pull, selection, config, observer);
    }

    /// Undirected edges as `(a, b)` with `a < b`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.nodes.iter().flat_map(|n| {
            let a = n.id();
            n.neighbors().iter().filter(move |&&b| a < b).map(move |&b| (a, b))
        })
    }

    pub fn positions(&self) -> AllocVec<Vec3<F>> {
        self.nodes.iter().map(|n| n.pos()).collect()
    }

    pub fn position_at(&self, col: usize, row: usize) -> Vec3<F> {
        self.nodes[self.index(col, row)].pos()
    }

    pub fn node(&self, id: usize) -> &Node<F> { &self.nodes[id] }
    pub fn nodes(&self) -> &[Node<F>] { &self.nodes }
    pub fn cols(&self) -> usize { self.cols }
    pub fn rows(&self) -> usize { self.rows }
    pub fn node_count(&self) -> usize { self.nodes.len() }

    /// Number of undirected edges: `(cols - 1) * rows + cols * (rows - 1)`.
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.neighbors().len()).sum::<usize>() / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> GridConfig<f32> {
        GridConfig { cols: 4, rows: 3, start_x: 0.0, stop_x: 0.3, start_y: 0.0, stop_y: 0.2 }
    }

    #[test]
    fn correct_node_count() {
        let grid = ClothGrid::new(&test_config()).unwrap();
        assert_eq!(grid.node_count(), 12);
    }

    #[test]
    fn edge_count_matches_lattice() {
        let grid = ClothGrid::new(&test_config()).unwrap();
        // Horizontal: 3 * 3 = 9, vertical: 4 * 2 = 8
        assert_eq!(grid.edge_count(), 17);
        assert_eq!(grid.edges().count(), 17);
    }

    #[test]
    fn neighbor_order_is_left_right_up_down() {
        let grid = ClothGrid::new(&test_config()).unwrap();
        let id = grid.index(1, 1);
        assert_eq!(grid.node(id).neighbors(), &[4, 6, 1, 9]);
    }

    #[test]
    fn extents_are_hit_exactly_at_corners() {
        let grid = ClothGrid::new(&test_config()).unwrap();
        assert_eq!(grid.position_at(0, 0), Vec3::new(0.0, 0.0, 0.0));
        let far = grid.position_at(3, 2);
        assert!((far.x - 0.3).abs() < 1e-6);
        assert!((far.y - 0.2).abs() < 1e-6);
        assert_eq!(far.z, 0.0);
    }

    #[test]
    fn single_row_is_rejected() {
        let config = GridConfig { rows: 1, ..test_config() };
        assert_eq!(
            ClothGrid::new(&config).unwrap_err(),
            ClothError::InvalidGridDimensions { cols: 4, rows: 1 }
        );
    }
}
