use drape::{ClothError, ClothGrid, GridConfig, NoOpStepObserver, Selection, SolverConfig, Vec3};

fn config(cols: usize, rows: usize) -> GridConfig<f32> {
    GridConfig { cols, rows, start_x: -1.0, stop_x: 1.0, start_y: -1.0, stop_y: 1.0 }
}

#[test]
fn lattice_shape_for_many_sizes() {
    for cols in 2..8 {
        for rows in 2..8 {
            let grid = ClothGrid::new(&config(cols, rows)).unwrap();
            assert_eq!(grid.node_count(), cols * rows);

            for row in 0..rows {
                for col in 0..cols {
                    let node = grid.node(grid.index(col, row));
                    let on_x_edge = col == 0 || col == cols - 1;
                    let on_y_edge = row == 0 || row == rows - 1;
                    let expected = match (on_x_edge, on_y_edge) {
                        (true, true) => 2,
                        (true, false) | (false, true) => 3,
                        (false, false) => 4,
                    };
                    assert_eq!(
                        node.neighbors().len(),
                        expected,
                        "node ({}, {}) in {}x{} grid",
                        col,
                        row,
                        cols,
                        rows
                    );
                    assert_eq!(node.is_fixed(), row == 0);
                    assert_eq!(node.id(), col + row * cols);
                }
            }
        }
    }
}

#[test]
fn adjacency_is_symmetric() {
    let grid = ClothGrid::new(&config(5, 4)).unwrap();
    for node in grid.nodes() {
        for &n in node.neighbors() {
            assert!(n < grid.node_count());
            assert!(grid.node(n).neighbors().contains(&node.id()));
        }
    }
}

#[test]
fn degenerate_counts_are_rejected() {
    for (cols, rows) in [(0, 5), (1, 5), (5, 1), (1, 1)] {
        assert_eq!(
            ClothGrid::new(&config(cols, rows)).unwrap_err(),
            ClothError::InvalidGridDimensions { cols, rows }
        );
    }
}

#[test]
fn pinned_top_row_drapes_under_gravity() {
    let mut grid = ClothGrid::new(&GridConfig {
        cols: 5,
        rows: 5,
        start_x: 0.0,
        stop_x: 0.4,
        start_y: 0.0,
        stop_y: 0.4,
    })
    .unwrap();

    let top_initial: Vec<Vec3<f32>> = (0..grid.cols()).map(|c| grid.position_at(c, 0)).collect();
    let bottom_row = grid.rows() - 1;
    let bottom_initial: Vec<Vec3<f32>> =
        (0..grid.cols()).map(|c| grid.position_at(c, bottom_row)).collect();

    let solver = SolverConfig::new().with_spacing(0.1).with_gravity(1e-3);
    let selection = Selection::new();
    for _ in 0..120 {
        grid.step(Vec3::new(0.0, 0.0, 0.0), &selection, &solver, &mut NoOpStepObserver);
    }

    for col in 0..grid.cols() {
        assert_eq!(grid.position_at(col, 0), top_initial[col], "top row col {} moved", col);
    }

    // y grows downward, so a draped cloth has larger y at the bottom.
    for col in 0..grid.cols() {
        let pos = grid.position_at(col, bottom_row);
        assert!(
            pos.y > bottom_initial[col].y,
            "bottom row col {} should have dropped below {}, but y is {}",
            col,
            bottom_initial[col].y,
            pos.y
        );
    }
}
