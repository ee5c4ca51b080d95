//! Draped cloth on a 4-connected node grid.
//!
//! `drape` hangs a rectangular lattice of point masses from its top row and
//! keeps lattice neighbors near a rest spacing with position-based
//! relaxation. A cursor can grab the nodes it hovers over and drag them.
//! Everything outside the physics (windows, input devices, drawing) stays
//! with the caller, who feeds an [`InputFrame`] per tick and draws the
//! resulting [`RenderFrame`].
//!
//! # Features
//!
//! - **Grid builder**: evenly spaced nodes, pinned top row, id-indexed adjacency
//! - **Relaxation solver**: gravity plus one in-place pass over every directed edge
//! - **Cursor pull**: displacement-driven force on nodes within a screen radius
//! - **Perspective projector**: yaw camera, focal length equal to viewport height
//! - **Observable**: monitor solver phases via the `StepObserver` trait
//! - **`no_std` compatible**: needs only `alloc`
//!
//! ```
//! use drape::{GridConfig, InputFrame, Simulation, SolverConfig, ViewConfig};
//!
//! let mut sim: Simulation<f32> =
//!     Simulation::new(&GridConfig::default(), SolverConfig::new(), ViewConfig::new())?;
//! sim.tick(&InputFrame::dragging(16, (320, 240)));
//! let frame = sim.render_frame();
//! assert_eq!(frame.points.len(), 17 * 17);
//! # Ok::<(), drape::ClothError>(())
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod node;
pub mod grid;
pub mod camera;
pub mod proximity;
pub mod force;
pub mod solver;
pub mod input;
pub mod render;
pub mod simulation;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::{Vec, Vec2, Vec3};
pub use node::Node;
pub use grid::{ClothGrid, GridConfig};
pub use camera::{Camera, Projector};
pub use proximity::Selection;
pub use force::CursorForce;
pub use input::InputFrame;
pub use render::{RenderFrame, RenderPoint, Segment};
pub use simulation::Simulation;
pub use config::{SolverConfig, ViewConfig};
pub use observer::{StepObserver, NoOpStepObserver};
pub use error::ClothError;
