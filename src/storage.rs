use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::{
    errors::GraphError,
    graph::{Edge, Graph, Vertex},
};

/// Marks the end of a vertex's edge records. Each vertex record is
/// self-delimiting; there is no end-of-file marker beyond the leading count.
const EDGE_LIST_END: i32 = -1;

/// Writes the graph as little-endian i32 records: vertex count, then per
/// vertex its value, each edge as origin/destination/weight, and the `-1`
/// sentinel closing the edge list.
pub fn save_binary<P: AsRef<Path>>(graph: &Graph, path: P) -> Result<(), GraphError> {
    let file = File::create(path).map_err(|e| GraphError::io(e.to_string()))?;
    let mut out = BufWriter::new(file);
    write_i32(&mut out, graph.vertex_count() as i32)?;
    for index in 0..graph.vertex_count() {
        write_i32(&mut out, graph.value(index)?)?;
        for edge in graph.edges(index)? {
            write_i32(&mut out, edge.origin as i32)?;
            write_i32(&mut out, edge.destination as i32)?;
            write_i32(&mut out, edge.weight)?;
        }
        write_i32(&mut out, EDGE_LIST_END)?;
    }
    out.flush().map_err(|e| GraphError::io(e.to_string()))
}

/// Reads a graph written by [`save_binary`]. Edge indices are restored
/// verbatim, including references left stale by removals before the save;
/// bounds are the traversal's concern, not the codec's.
pub fn load_binary<P: AsRef<Path>>(path: P) -> Result<Graph, GraphError> {
    let file = File::open(path).map_err(|e| GraphError::io(e.to_string()))?;
    let mut input = BufReader::new(file);
    let vertex_count = read_i32(&mut input)?;
    if vertex_count < 0 {
        return Err(GraphError::invalid_input(format!(
            "negative vertex count {vertex_count}"
        )));
    }
    let mut vertices = Vec::with_capacity(vertex_count as usize);
    for _ in 0..vertex_count {
        let value = read_i32(&mut input)?;
        let mut edges = Vec::new();
        loop {
            let origin = read_i32(&mut input)?;
            if origin == EDGE_LIST_END {
                break;
            }
            let destination = read_i32(&mut input)?;
            let weight = read_i32(&mut input)?;
            if origin < 0 || destination < 0 {
                return Err(GraphError::invalid_input(format!(
                    "negative edge index {origin} -> {destination}"
                )));
            }
            edges.push(Edge {
                origin: origin as usize,
                destination: destination as usize,
                weight,
            });
        }
        vertices.push(Vertex { value, edges });
    }
    Ok(Graph::from_vertices(vertices))
}

fn write_i32<W: Write>(out: &mut W, value: i32) -> Result<(), GraphError> {
    out.write_all(&value.to_le_bytes())
        .map_err(|e| GraphError::io(e.to_string()))
}

fn read_i32<R: Read>(input: &mut R) -> Result<i32, GraphError> {
    let mut buf = [0u8; 4];
    input
        .read_exact(&mut buf)
        .map_err(|e| GraphError::io(e.to_string()))?;
    Ok(i32::from_le_bytes(buf))
}
