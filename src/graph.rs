use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::errors::GraphError;

/// A directed edge stored in its origin vertex's adjacency list. The weight
/// is a label carried through serialization; traversal ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub origin: usize,
    pub destination: usize,
    pub weight: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vertex {
    pub value: i32,
    pub edges: Vec<Edge>,
}

/// Dense, index-addressed vertex store. Vertex indices are assigned in
/// insertion order; removing a vertex shifts every later vertex down one
/// index, so no stable identity survives a removal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph {
    vertices: Vec<Vertex>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Appends a vertex with the given payload and returns its index.
    pub fn add_vertex(&mut self, value: i32) -> usize {
        self.vertices.push(Vertex {
            value,
            edges: Vec::new(),
        });
        self.vertices.len() - 1
    }

    /// Appends a directed edge to `origin`'s adjacency list. Duplicates are
    /// allowed; no reverse edge is created.
    pub fn add_edge(
        &mut self,
        origin: usize,
        destination: usize,
        weight: i32,
    ) -> Result<(), GraphError> {
        let count = self.vertices.len();
        if origin >= count {
            return Err(GraphError::out_of_range(format!(
                "edge origin {origin} (vertex count {count})"
            )));
        }
        if destination >= count {
            return Err(GraphError::out_of_range(format!(
                "edge destination {destination} (vertex count {count})"
            )));
        }
        self.vertices[origin].edges.push(Edge {
            origin,
            destination,
            weight,
        });
        Ok(())
    }

    /// Removes the first vertex whose payload equals `value` and returns the
    /// index it occupied. Later vertices shift down one index. Edges in other
    /// vertices' lists are not repaired; references to the removed index or
    /// to shifted indices go stale (traversal reports them as out of range).
    pub fn remove_vertex(&mut self, value: i32) -> Result<usize, GraphError> {
        let index = self
            .vertices
            .iter()
            .position(|vertex| vertex.value == value)
            .ok_or_else(|| GraphError::not_found(format!("vertex with value {value}")))?;
        self.vertices.remove(index);
        Ok(index)
    }

    /// Unlinks the first edge in `origin`'s list whose destination matches.
    pub fn remove_edge(&mut self, origin: usize, destination: usize) -> Result<(), GraphError> {
        let count = self.vertices.len();
        if origin >= count {
            return Err(GraphError::out_of_range(format!(
                "edge origin {origin} (vertex count {count})"
            )));
        }
        let edges = &mut self.vertices[origin].edges;
        let position = edges
            .iter()
            .position(|edge| edge.destination == destination)
            .ok_or_else(|| {
                GraphError::not_found(format!("edge from {origin} to {destination}"))
            })?;
        edges.remove(position);
        Ok(())
    }

    pub fn value(&self, index: usize) -> Result<i32, GraphError> {
        self.vertices
            .get(index)
            .map(|vertex| vertex.value)
            .ok_or_else(|| self.index_error(index))
    }

    pub fn edges(&self, index: usize) -> Result<&[Edge], GraphError> {
        self.vertices
            .get(index)
            .map(|vertex| vertex.edges.as_slice())
            .ok_or_else(|| self.index_error(index))
    }

    pub fn vertex(&self, index: usize) -> Option<&Vertex> {
        self.vertices.get(index)
    }

    /// Human-oriented listing: one line per vertex, one indented line per
    /// edge rendered as `origin_value + destination_value = weight`. Edges
    /// whose endpoints no longer resolve (stale after a removal) are skipped.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        for (index, vertex) in self.vertices.iter().enumerate() {
            let _ = writeln!(out, "Vertex {index}: {}", vertex.value);
            for edge in &vertex.edges {
                let origin = self.vertices.get(edge.origin).map(|v| v.value);
                let destination = self.vertices.get(edge.destination).map(|v| v.value);
                if let (Some(from), Some(to)) = (origin, destination) {
                    let _ = writeln!(out, "   Edge: {from} + {to} = {}", edge.weight);
                }
            }
        }
        out
    }

    pub(crate) fn from_vertices(vertices: Vec<Vertex>) -> Self {
        Self { vertices }
    }

    fn index_error(&self, index: usize) -> GraphError {
        GraphError::out_of_range(format!(
            "vertex {index} (vertex count {})",
            self.vertices.len()
        ))
    }
}

impl std::fmt::Display for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.dump())
    }
}
