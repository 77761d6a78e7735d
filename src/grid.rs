use std::fs;
use std::path::Path;

use crate::{errors::GraphError, graph::Graph};

/// Reads a square numeric matrix from a text file: one row per line, cells
/// separated by `;`.
pub fn load_matrix<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<i32>>, GraphError> {
    let text = fs::read_to_string(path).map_err(|e| GraphError::io(e.to_string()))?;
    parse_matrix(&text)
}

pub fn parse_matrix(text: &str) -> Result<Vec<Vec<i32>>, GraphError> {
    let mut rows = Vec::new();
    for (line_no, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let mut row = Vec::new();
        for cell in line.split(';') {
            let cell = cell.trim();
            if cell.is_empty() {
                // tolerate trailing separators
                continue;
            }
            let value: i32 = cell.parse().map_err(|_| {
                GraphError::invalid_input(format!("bad cell {cell:?} on line {}", line_no + 1))
            })?;
            row.push(value);
        }
        rows.push(row);
    }
    if rows.is_empty() {
        return Err(GraphError::invalid_input("matrix is empty"));
    }
    let dim = rows.len();
    for (line_no, row) in rows.iter().enumerate() {
        if row.len() != dim {
            return Err(GraphError::invalid_input(format!(
                "matrix is not square: row {} has {} cells, expected {dim}",
                line_no + 1,
                row.len()
            )));
        }
    }
    Ok(rows)
}

/// Builds the grid graph: one vertex per cell in row-major order, and a
/// directed edge from every cell to every other cell sharing its row or its
/// column. Edge weight is the sum of the two cell payloads.
pub fn build_graph(matrix: &[Vec<i32>]) -> Result<Graph, GraphError> {
    let dim = matrix.len();
    if dim == 0 || matrix.iter().any(|row| row.len() != dim) {
        return Err(GraphError::invalid_input("matrix must be square"));
    }
    let mut graph = Graph::new();
    for row in matrix {
        for &value in row {
            graph.add_vertex(value);
        }
    }
    for row in 0..dim {
        for col in 0..dim {
            let origin = row * dim + col;
            for k in 0..dim {
                if k != col {
                    graph.add_edge(origin, row * dim + k, matrix[row][col] + matrix[row][k])?;
                }
            }
            for k in 0..dim {
                if k != row {
                    graph.add_edge(origin, k * dim + col, matrix[row][col] + matrix[k][col])?;
                }
            }
        }
    }
    Ok(graph)
}
