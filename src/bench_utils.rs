//! Deterministic graph generators for benchmarks and property tests.

use ahash::AHashSet;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::graph::Graph;

#[derive(Clone, Debug)]
pub enum GraphShape {
    Line,
    Star,
    Grid2D { width: usize, height: usize },
    RandomErdosRenyi { edges: usize },
    ScaleFree { m: usize },
}

/// Builds a graph with `vertex_count` vertices (payload = index) and edges
/// determined by `shape`. Edges are sorted before insertion so the same seed
/// always produces the same adjacency order.
pub fn generate_graph(shape: GraphShape, vertex_count: usize, seed: u64) -> Graph {
    assert!(vertex_count > 1, "vertex_count must exceed 1");
    let mut pairs = match shape {
        GraphShape::Line => generate_line_pairs(vertex_count),
        GraphShape::Star => generate_star_pairs(vertex_count),
        GraphShape::Grid2D { width, height } => generate_grid_pairs(width, height, vertex_count),
        GraphShape::RandomErdosRenyi { edges } => {
            generate_random_pairs(vertex_count, edges, seed)
        }
        GraphShape::ScaleFree { m } => generate_scale_free_pairs(vertex_count, m, seed),
    };
    pairs.sort_unstable();
    let mut graph = Graph::new();
    for index in 0..vertex_count {
        graph.add_vertex(index as i32);
    }
    for (from, to) in pairs {
        graph
            .add_edge(from, to, (from + to) as i32)
            .expect("generated edge endpoints in range");
    }
    graph
}

fn generate_line_pairs(count: usize) -> Vec<(usize, usize)> {
    (0..count - 1).map(|idx| (idx, idx + 1)).collect()
}

fn generate_star_pairs(count: usize) -> Vec<(usize, usize)> {
    (1..count).map(|leaf| (0, leaf)).collect()
}

fn generate_grid_pairs(width: usize, height: usize, vertex_count: usize) -> Vec<(usize, usize)> {
    assert_eq!(
        width * height,
        vertex_count,
        "grid dimensions must match vertex count"
    );
    let mut pairs = Vec::with_capacity(width * height * 2);
    for y in 0..height {
        for x in 0..width {
            let base = y * width + x;
            if x + 1 < width {
                pairs.push((base, base + 1));
            }
            if y + 1 < height {
                pairs.push((base, base + width));
            }
        }
    }
    pairs
}

fn generate_random_pairs(
    vertex_count: usize,
    edge_count: usize,
    seed: u64,
) -> Vec<(usize, usize)> {
    let total_pairs = pair_count(vertex_count);
    assert!(
        edge_count as u128 <= total_pairs,
        "edge_count exceeds possible pairs"
    );
    let mut rng = StdRng::seed_from_u64(seed);
    let mut pairs = Vec::with_capacity(edge_count);
    let mut idx = 0u64;
    let mut remaining_edges = edge_count as u64;
    while remaining_edges > 0 && idx < total_pairs as u64 {
        let remaining_pairs = total_pairs as u64 - idx;
        let p = remaining_edges as f64 / remaining_pairs as f64;
        let skip = sample_geometric(&mut rng, p);
        idx += skip;
        if idx >= total_pairs as u64 {
            break;
        }
        let (from, to) = pair_from_index(idx, vertex_count as u64);
        pairs.push((from as usize, to as usize));
        idx += 1;
        remaining_edges -= 1;
    }
    pairs
}

fn generate_scale_free_pairs(vertex_count: usize, m: usize, seed: u64) -> Vec<(usize, usize)> {
    assert!(m > 0, "m must be positive");
    assert!(vertex_count > m + 1, "vertex_count must exceed m + 1");
    let mut rng = StdRng::seed_from_u64(seed);
    let mut degrees = vec![0usize; vertex_count];
    let mut pairs = Vec::new();
    let seed_nodes = m + 1;
    for u in 0..seed_nodes {
        for v in (u + 1)..seed_nodes {
            pairs.push((u, v));
            degrees[u] += 1;
            degrees[v] += 1;
        }
    }
    let mut total_degree: usize = degrees.iter().sum();
    for new_node in seed_nodes..vertex_count {
        let mut targets = AHashSet::with_capacity(m);
        while targets.len() < m {
            let pick = rng.gen_range(0..total_degree);
            let mut cumulative = 0usize;
            for candidate in 0..new_node {
                cumulative += degrees[candidate];
                if pick < cumulative {
                    targets.insert(candidate);
                    break;
                }
            }
        }
        let mut targets: Vec<usize> = targets.into_iter().collect();
        targets.sort_unstable();
        for target in targets {
            pairs.push((target, new_node));
            degrees[target] += 1;
            degrees[new_node] += 1;
            total_degree += 2;
        }
    }
    pairs
}

fn pair_count(vertices: usize) -> u128 {
    let n = vertices as u128;
    n * (n - 1) / 2
}

fn sample_geometric(rng: &mut StdRng, p: f64) -> u64 {
    let u = rng.r#gen::<f64>().max(f64::MIN_POSITIVE);
    ((u.ln() / (1.0 - p).ln()).floor().max(0.0)) as u64
}

fn pair_from_index(idx: u64, vertices: u64) -> (u64, u64) {
    let mut left = 0;
    let mut start = 0u64;
    while left < vertices - 1 {
        let remaining = vertices - left - 1;
        if idx < start + remaining {
            return (left, left + 1 + (idx - start));
        }
        start += remaining;
        left += 1;
    }
    (vertices - 2, vertices - 1)
}
