use crate::process::Phrase;
use ahash::AHashMap;
use std::fmt;

/// The kinds of node that survive reduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Start,
    End,
    ExclusiveChoice,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Start => write!(f, "startEvent"),
            NodeKind::End => write!(f, "endEvent"),
            NodeKind::ExclusiveChoice => write!(f, "exclusiveGateway"),
        }
    }
}

/// The guard carried by a flow leaving an exclusive choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Guard {
    Yes,
    No,
}

impl Guard {
    /// Parses a flow label into a guard. Anything but an exact `Yes` or
    /// `No` (after trimming) is rejected.
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim() {
            "Yes" => Some(Guard::Yes),
            "No" => Some(Guard::No),
            _ => None,
        }
    }

    /// The truth value this guard asserts about its gateway's predicate.
    pub fn as_bool(&self) -> bool {
        matches!(self, Guard::Yes)
    }
}

impl fmt::Display for Guard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Guard::Yes => write!(f, "Yes"),
            Guard::No => write!(f, "No"),
        }
    }
}

/// A node of the reduced graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecisionNode {
    pub id: String,
    pub kind: NodeKind,
    /// The raw diagram label, kept for listings.
    pub label: Option<String>,
    /// The label split into actor and predicate. Present on every exclusive
    /// choice; start and end labels are annotations and are not parsed.
    pub phrase: Option<Phrase>,
}

/// A reduced edge: one decision-to-decision step carrying everything that
/// was collapsed along the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub source: String,
    pub target: String,
    /// Guard of the originating flow, present exactly when `source` is an
    /// exclusive choice.
    pub guard: Option<Guard>,
    /// The source gateway's split label, present exactly when `guard` is.
    pub phrase: Option<Phrase>,
    /// Split labels of the tasks folded into this segment, in traversal
    /// order. Parallel branches contribute in declared branch order.
    pub actions: Vec<Phrase>,
    /// Position of the originating flow among its sibling flows in the
    /// unreduced diagram. Determinism anchor for everything downstream.
    pub flow_order: usize,
    /// Ids of the sequence flows this segment collapsed, for listings.
    pub via_flows: Vec<String>,
}

/// An ordered start-to-end walk over reduced segments.
///
/// Paths own their segments, so the graph they were enumerated from can be
/// dropped once enumeration finishes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Path {
    pub segments: Vec<Segment>,
}

impl Path {
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }
}

/// The decision skeleton of a process.
///
/// Only start, end and exclusive choice nodes survive; every task chain and
/// parallel block between two surviving nodes is folded into the connecting
/// [`Segment`]. Adjacency lists are sorted by ascending `flow_order` at
/// construction, so traversal order never depends on map iteration order.
#[derive(Debug, Clone)]
pub struct ReducedGraph {
    nodes: AHashMap<String, DecisionNode>,
    outgoing: AHashMap<String, Vec<Segment>>,
    start_id: String,
}

impl ReducedGraph {
    pub(crate) fn new(nodes: Vec<DecisionNode>, segments: Vec<Segment>, start_id: String) -> Self {
        let nodes: AHashMap<String, DecisionNode> =
            nodes.into_iter().map(|n| (n.id.clone(), n)).collect();
        let mut outgoing: AHashMap<String, Vec<Segment>> = AHashMap::new();
        for segment in segments {
            outgoing
                .entry(segment.source.clone())
                .or_default()
                .push(segment);
        }
        for list in outgoing.values_mut() {
            list.sort_by_key(|s| s.flow_order);
        }
        Self {
            nodes,
            outgoing,
            start_id,
        }
    }

    /// Id of the unique start node.
    pub fn start_id(&self) -> &str {
        &self.start_id
    }

    pub fn node(&self, id: &str) -> Option<&DecisionNode> {
        self.nodes.get(id)
    }

    /// Segments leaving `id`, ordered by ascending `flow_order`.
    pub fn outgoing(&self, id: &str) -> &[Segment] {
        self.outgoing.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_end(&self, id: &str) -> bool {
        self.nodes
            .get(id)
            .is_some_and(|n| n.kind == NodeKind::End)
    }

    /// All surviving nodes, in no particular order.
    pub fn nodes(&self) -> impl Iterator<Item = &DecisionNode> {
        self.nodes.values()
    }

    /// All segments, grouped by source node, each group ordered by
    /// ascending `flow_order`.
    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        self.outgoing.values().flatten()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn segment_count(&self) -> usize {
        self.outgoing.values().map(Vec::len).sum()
    }
}
