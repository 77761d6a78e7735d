//! Directed weighted graph over a dense index space, with breadth-first
//! shortest-path queries and a compact binary on-disk layout.
//! Run Criterion benchmarks with `cargo bench` to inspect reports under `target/criterion`.

pub mod bench_utils;
pub mod bfs;
pub mod cli;
pub mod errors;
pub mod graph;
pub mod grid;
pub mod storage;

pub use crate::errors::GraphError;
pub use crate::graph::{Edge, Graph, Vertex};
