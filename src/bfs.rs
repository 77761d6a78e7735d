use std::collections::VecDeque;

use crate::{errors::GraphError, graph::Graph};

/// Shortest path by hop count from `start` to `goal`, both endpoints
/// inclusive. `Ok(None)` means `goal` is unreachable; that is a result, not
/// an error. Ties are broken by edge insertion order.
pub fn shortest_path(
    graph: &Graph,
    start: usize,
    goal: usize,
) -> Result<Option<Vec<usize>>, GraphError> {
    let Some(predecessors) = run_search(graph, start, goal)? else {
        return Ok(None);
    };
    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(index) = current {
        path.push(index);
        current = predecessors[index];
    }
    path.reverse();
    Ok(Some(path))
}

/// Sum of vertex payloads along the shortest path from `start` to `goal`,
/// both endpoints inclusive. Edge weights play no part. `Ok(None)` means
/// unreachable, so a legitimate negative sum is never ambiguous.
pub fn path_value_sum(
    graph: &Graph,
    start: usize,
    goal: usize,
) -> Result<Option<i64>, GraphError> {
    let Some(predecessors) = run_search(graph, start, goal)? else {
        return Ok(None);
    };
    let mut sum = 0i64;
    let mut current = Some(goal);
    while let Some(index) = current {
        sum += i64::from(graph.value(index)?);
        current = predecessors[index];
    }
    Ok(Some(sum))
}

/// Level-order traversal shared by both queries. Visitation is recorded at
/// enqueue time, so each vertex enqueues at most once and the queue never
/// exceeds the vertex count. Stops as soon as `goal` is dequeued.
///
/// Returns the predecessor links when `goal` was reached, `None` when the
/// queue drained first. An edge whose destination is no longer a valid index
/// (stale after a vertex removal) fails the traversal with `OutOfRange`.
fn run_search(
    graph: &Graph,
    start: usize,
    goal: usize,
) -> Result<Option<Vec<Option<usize>>>, GraphError> {
    let count = graph.vertex_count();
    if start >= count {
        return Err(GraphError::out_of_range(format!(
            "start vertex {start} (vertex count {count})"
        )));
    }
    if goal >= count {
        return Err(GraphError::out_of_range(format!(
            "goal vertex {goal} (vertex count {count})"
        )));
    }

    let mut visited = vec![false; count];
    let mut predecessors: Vec<Option<usize>> = vec![None; count];
    let mut queue = VecDeque::with_capacity(count);

    visited[start] = true;
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        if current == goal {
            return Ok(Some(predecessors));
        }
        for edge in graph.edges(current)? {
            let next = edge.destination;
            if next >= count {
                return Err(GraphError::out_of_range(format!(
                    "stale edge from {current} to {next} (vertex count {count})"
                )));
            }
            if !visited[next] {
                visited[next] = true;
                predecessors[next] = Some(current);
                queue.push_back(next);
            }
        }
    }

    Ok(None)
}
