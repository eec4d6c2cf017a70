use crate::error::CycleError;
use crate::graph::{Path, ReducedGraph, Segment};
use ahash::AHashSet;

struct Frame<'g> {
    node: &'g str,
    next: usize,
}

/// Enumerates every start-to-end path of the reduced graph.
///
/// Depth first, taking the segments of a node in ascending `flow_order`,
/// so sibling branches come out in the diagram's declared order and the
/// whole enumeration is deterministic. A path is recorded the moment an
/// end node is reached.
///
/// The traversal keeps its own frame stack instead of recursing, so a
/// diagram with deeply nested decisions cannot overflow the call stack;
/// the output order is exactly what recursion would give.
///
/// Fails with [`CycleError`] when a segment targets a node that is
/// already on the active path. Reconvergence is fine: a node may appear
/// on any number of different paths, just not twice on one.
pub fn enumerate_paths(graph: &ReducedGraph) -> Result<Vec<Path>, CycleError> {
    let mut paths: Vec<Path> = Vec::new();
    let mut trail: Vec<Segment> = Vec::new();
    let mut on_path: AHashSet<&str> = AHashSet::new();
    let mut frames: Vec<Frame> = vec![Frame {
        node: graph.start_id(),
        next: 0,
    }];
    on_path.insert(graph.start_id());

    loop {
        let (node, next) = match frames.last_mut() {
            Some(frame) => {
                let state = (frame.node, frame.next);
                frame.next += 1;
                state
            }
            None => break,
        };

        match graph.outgoing(node).get(next) {
            Some(segment) if graph.is_end(&segment.target) => {
                let mut segments = trail.clone();
                segments.push(segment.clone());
                paths.push(Path::new(segments));
            }
            Some(segment) => {
                if !on_path.insert(segment.target.as_str()) {
                    return Err(CycleError::Revisited {
                        node_id: segment.target.clone(),
                    });
                }
                trail.push(segment.clone());
                frames.push(Frame {
                    node: segment.target.as_str(),
                    next: 0,
                });
            }
            None => {
                // this node is exhausted: backtrack
                frames.pop();
                on_path.remove(node);
                if !frames.is_empty() {
                    trail.pop();
                }
            }
        }
    }

    Ok(paths)
}
