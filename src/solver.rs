//! Gravity and distance-constraint relaxation for cloth nodes.
//!
//! One tick is:
//!
//! 1. add `gravity` to `y` of every free node,
//! 2. for each pass (1 by default), walk every node in id order and every
//!    neighbor of that node, pulling over-stretched edges back toward the
//!    rest spacing and injecting the cursor pull into selected nodes.
//!
//! Edges are walked from both endpoints, so each edge is corrected twice per
//! pass. Corrections are applied in place: later edges see the positions left
//! by earlier ones. A single pass does not converge; heavy loads leave the
//! cloth stretched, and [`SolverConfig::passes`] trades time for stiffness.

use crate::config::SolverConfig;
use crate::float::Float;
use crate::node::Node;
use crate::observer::StepObserver;
use crate::proximity::Selection;
use crate::vec::{Vec, Vec3};

/// Run one full tick over `nodes`: gravity once, then `config.passes`
/// relaxation passes.
///
/// Neighbor ids must index into `nodes`, and `config` must have passed
/// [`SolverConfig::validate`]; [`Simulation::new`](crate::Simulation::new)
/// checks this for you.
pub fn step<F: Float, O: StepObserver>(
    nodes: &mut [Node<F>],
    pull: Vec3<F>,
    selection: &Selection<F>,
    config: &SolverConfig<F>,
    observer: &mut O,
) {
    apply_gravity(nodes, config.gravity);
    observer.on_gravity();

    for pass in 0..config.passes.max(1) {
        relax(nodes, pull, selection, config);
        observer.on_relaxation_pass(pass);
    }

    observer.on_step_complete();
}

/// Add `gravity` to the `y` component of every free node.
pub fn apply_gravity<F: Float>(nodes: &mut [Node<F>], gravity: F) {
    for node in nodes.iter_mut() {
        node.displace(Vec3::new(F::zero(), gravity, F::zero()));
    }
}

/// One relaxation pass over every directed edge.
///
/// An edge longer than `config.spacing` at distance `d` moves each free
/// endpoint toward the other by `((d - spacing) / d)^2 * line_force * d`.
/// Edges at or under the rest spacing are left alone, which also keeps `d`
/// away from zero.
///
/// When the first endpoint of a corrected edge is free and selected, it is
/// additionally moved by `pull * mouse_power * distance`, where `distance` is
/// its screen distance to the cursor at selection time. Nodes farther from
/// the cursor are therefore pulled harder.
///
/// `config` must have passed [`SolverConfig::validate`]. Coincident endpoints
/// are skipped regardless, so an unchecked spacing cannot produce NaN.
pub fn relax<F: Float>(
    nodes: &mut [Node<F>],
    pull: Vec3<F>,
    selection: &Selection<F>,
    config: &SolverConfig<F>,
) {
    let spacing = config.spacing;

    for a in 0..nodes.len() {
        for k in 0..nodes[a].neighbors().len() {
            let b = nodes[a].neighbors()[k];
            let a_pos = nodes[a].pos;
            let b_pos = nodes[b].pos;

            let dist = a_pos.distance(b_pos);
            if dist <= spacing || dist <= F::zero() {
                continue;
            }

            let diff = (spacing - dist) / dist;
            let line = diff * config.line_force * (F::one() - spacing / dist);
            let correction = (a_pos - b_pos).scale(line);

            nodes[a].displace(correction);
            nodes[b].displace(-correction);

            if let Some(cursor_dist) = selection.distance_of(nodes[a].id()) {
                nodes[a].displace(pull.scale(config.mouse_power * cursor_dist));
            }
        }
    }
}
