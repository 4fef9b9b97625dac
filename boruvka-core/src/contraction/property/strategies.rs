//! Graph generators for the contraction property suites.
//!
//! Each shape draws its vertex count, density and weights from a seeded
//! `SmallRng`, so a failing case is reproducible from `(shape, seed)`.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::types::{GraphFixture, GraphShape};

const MIN_VERTICES: usize = 2;
const MAX_VERTICES: usize = 48;
const DENSE_MAX_VERTICES: usize = 24;

pub(super) fn fixture_strategy() -> impl Strategy<Value = GraphFixture> {
    (any::<GraphShape>(), any::<u64>()).prop_map(|(shape, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(shape, &mut rng)
    })
}

pub(super) fn generate_fixture(shape: GraphShape, rng: &mut SmallRng) -> GraphFixture {
    let (vertex_count, edges) = match shape {
        GraphShape::Unique => random_pairs(rng, MAX_VERTICES, 0.15..0.5, continuous),
        GraphShape::ManyIdentical => {
            let pool: Vec<f64> = (0..rng.gen_range(1..=3))
                .map(|_| f64::from(rng.gen_range(1_u8..=6)))
                .collect();
            random_pairs(rng, MAX_VERTICES, 0.3..0.7, move |r| {
                pool[r.gen_range(0..pool.len())]
            })
        }
        GraphShape::Sparse => sparse(rng),
        GraphShape::Dense => random_pairs(rng, DENSE_MAX_VERTICES, 0.7..0.95, continuous),
        GraphShape::Disconnected => islands(rng),
        GraphShape::Multigraph => multigraph(rng),
    };
    GraphFixture {
        vertex_count,
        edges,
        shape,
    }
}

fn continuous(rng: &mut SmallRng) -> f64 {
    rng.gen_range(0.1..100.0)
}

/// Adds each unordered pair with a sampled probability.
fn random_pairs(
    rng: &mut SmallRng,
    max_vertices: usize,
    density: std::ops::Range<f64>,
    mut weight: impl FnMut(&mut SmallRng) -> f64,
) -> (usize, Vec<(usize, usize, f64)>) {
    let vertex_count = rng.gen_range(MIN_VERTICES..=max_vertices);
    let probability = rng.gen_range(density);
    let mut edges = Vec::new();
    for low in 0..vertex_count {
        for high in (low + 1)..vertex_count {
            if rng.gen_bool(probability) {
                let w = weight(rng);
                edges.push(orient(rng, low, high, w));
            }
        }
    }
    (vertex_count, edges)
}

/// A shuffled spanning path keeps the graph connected; extra chords add
/// cycles.
fn sparse(rng: &mut SmallRng) -> (usize, Vec<(usize, usize, f64)>) {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let mut order: Vec<usize> = (0..vertex_count).collect();
    for index in (1..order.len()).rev() {
        order.swap(index, rng.gen_range(0..=index));
    }

    let mut edges: Vec<_> = order
        .windows(2)
        .map(|pair| (pair[0], pair[1], rng.gen_range(-50.0..50.0)))
        .collect();
    for _ in 0..rng.gen_range(0..=vertex_count) {
        let source = rng.gen_range(0..vertex_count);
        let target = rng.gen_range(0..vertex_count);
        if source != target {
            edges.push((source, target, rng.gen_range(-50.0..50.0)));
        }
    }
    (vertex_count, edges)
}

/// Two to five islands, each internally random, including isolated vertices.
fn islands(rng: &mut SmallRng) -> (usize, Vec<(usize, usize, f64)>) {
    let mut edges = Vec::new();
    let mut offset = 0;
    for _ in 0..rng.gen_range(2..=5) {
        let size = rng.gen_range(1..=10);
        let probability = rng.gen_range(0.3..0.8);
        for low in offset..offset + size {
            for high in (low + 1)..offset + size {
                if rng.gen_bool(probability) {
                    let w = continuous(rng);
                    edges.push(orient(rng, low, high, w));
                }
            }
        }
        offset += size;
    }
    (offset, edges)
}

/// Random pairs drawn with replacement, so the same pair recurs in both
/// orientations, and occasional self-edges.
fn multigraph(rng: &mut SmallRng) -> (usize, Vec<(usize, usize, f64)>) {
    let vertex_count = rng.gen_range(MIN_VERTICES..=16);
    let edge_count = rng.gen_range(vertex_count..=vertex_count * 6);
    let edges = (0..edge_count)
        .map(|_| {
            let source = rng.gen_range(0..vertex_count);
            let target = if rng.gen_bool(0.1) {
                source
            } else {
                rng.gen_range(0..vertex_count)
            };
            (source, target, f64::from(rng.gen_range(0_u8..8)))
        })
        .collect();
    (vertex_count, edges)
}

fn orient(rng: &mut SmallRng, low: usize, high: usize, weight: f64) -> (usize, usize, f64) {
    if rng.gen_bool(0.5) {
        (low, high, weight)
    } else {
        (high, low, weight)
    }
}
