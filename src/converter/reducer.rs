use crate::error::{ConvertError, LabelFormatError, StructuralError};
use crate::graph::{DecisionNode, Guard, NodeKind, ReducedGraph, Segment};
use crate::process::{ElementDefinition, ElementKind, FlowDefinition, Phrase, ProcessDefinition};
use ahash::{AHashMap, AHashSet};
use std::collections::VecDeque;

/// Reduces a process definition to its decision skeleton.
///
/// Task chains fold into segment actions; a parallel block folds into a
/// single segment with the branch actions concatenated in declared branch
/// order. Structural defects and malformed labels abort the conversion
/// before anything downstream runs.
pub fn reduce(process: &ProcessDefinition) -> Result<ReducedGraph, ConvertError> {
    Reducer::new(process)?.run()
}

fn note_step<'a>(
    element: &'a ElementDefinition,
    lineage: &mut AHashSet<&'a str>,
    consumed: &mut AHashSet<&'a str>,
) -> Result<(), StructuralError> {
    if !lineage.insert(element.id.as_str()) {
        return Err(StructuralError::CollapseLoop {
            element_id: element.id.clone(),
        });
    }
    consumed.insert(element.id.as_str());
    Ok(())
}

fn task_phrase(element: &ElementDefinition) -> Result<Phrase, LabelFormatError> {
    let label = element
        .label
        .as_deref()
        .ok_or_else(|| LabelFormatError::Missing {
            element_id: element.id.clone(),
        })?;
    Phrase::split(&element.id, label)
}

/// Walks the raw diagram from each surviving node, folding everything in
/// between into segments.
struct Reducer<'a> {
    process: &'a ProcessDefinition,
    elements: AHashMap<&'a str, &'a ElementDefinition>,
    outgoing: AHashMap<&'a str, Vec<&'a FlowDefinition>>,
    incoming: AHashMap<&'a str, usize>,
    start: &'a ElementDefinition,
}

impl<'a> Reducer<'a> {
    fn new(process: &'a ProcessDefinition) -> Result<Self, StructuralError> {
        let mut elements: AHashMap<&str, &ElementDefinition> = AHashMap::new();
        for element in &process.elements {
            elements.insert(element.id.as_str(), element);
        }

        let mut outgoing: AHashMap<&str, Vec<&FlowDefinition>> = AHashMap::new();
        let mut incoming: AHashMap<&str, usize> = AHashMap::new();
        for flow in &process.flows {
            for end in [flow.source.as_str(), flow.target.as_str()] {
                if !elements.contains_key(end) {
                    return Err(StructuralError::UnknownElement {
                        flow_id: flow.id.clone(),
                        element_id: end.to_string(),
                    });
                }
            }
            outgoing.entry(flow.source.as_str()).or_default().push(flow);
            *incoming.entry(flow.target.as_str()).or_default() += 1;
        }

        let starts: Vec<&ElementDefinition> = process
            .elements
            .iter()
            .filter(|e| e.kind == ElementKind::Start)
            .collect();
        let start = match starts.as_slice() {
            [] => return Err(StructuralError::MissingStart),
            [only] => *only,
            more => {
                return Err(StructuralError::DuplicateStart { count: more.len() });
            }
        };
        if !process.elements.iter().any(|e| e.kind == ElementKind::End) {
            return Err(StructuralError::MissingEnd);
        }

        let reducer = Self {
            process,
            elements,
            outgoing,
            incoming,
            start,
        };
        reducer.check_degrees()?;
        Ok(reducer)
    }

    /// Every element kind has a fixed fan-out contract; anything else has
    /// no defined collapse semantics.
    fn check_degrees(&self) -> Result<(), StructuralError> {
        for element in &self.process.elements {
            let out = self.outgoing(&element.id).len();
            match element.kind {
                ElementKind::Start | ElementKind::Task => {
                    if out == 0 {
                        return Err(StructuralError::DanglingBranch {
                            element_id: element.id.clone(),
                        });
                    }
                    if out > 1 {
                        return Err(StructuralError::AmbiguousCollapse {
                            element_id: element.id.clone(),
                            out_degree: out,
                        });
                    }
                }
                ElementKind::End => {
                    if out > 0 {
                        return Err(StructuralError::OutgoingFromEnd {
                            element_id: element.id.clone(),
                        });
                    }
                }
                ElementKind::ExclusiveGateway | ElementKind::ParallelGateway => {
                    if out == 0 {
                        return Err(StructuralError::DanglingBranch {
                            element_id: element.id.clone(),
                        });
                    }
                }
            }
        }
        Ok(())
    }

    fn run(self) -> Result<ReducedGraph, ConvertError> {
        let mut nodes: Vec<DecisionNode> = Vec::new();
        let mut segments: Vec<Segment> = Vec::new();
        let mut consumed: AHashSet<&'a str> = AHashSet::new();
        let mut discovered: AHashSet<&'a str> = AHashSet::new();
        let mut queue: VecDeque<&'a ElementDefinition> = VecDeque::new();

        discovered.insert(self.start.id.as_str());
        queue.push_back(self.start);

        while let Some(element) = queue.pop_front() {
            consumed.insert(element.id.as_str());
            let node = self.decision_node(element)?;
            let phrase = node.phrase.clone();
            nodes.push(node);
            if element.kind == ElementKind::End {
                continue;
            }
            for (order, &flow) in self.outgoing(&element.id).iter().enumerate() {
                let guard = self.guard_for(element, flow)?;
                let (segment, target) =
                    self.walk_chain(element, flow, order, guard, phrase.clone(), &mut consumed)?;
                segments.push(segment);
                if discovered.insert(target.id.as_str()) {
                    queue.push_back(target);
                }
            }
        }

        for element in &self.process.elements {
            if !consumed.contains(element.id.as_str()) {
                return Err(StructuralError::Unreachable {
                    element_id: element.id.clone(),
                }
                .into());
            }
        }

        Ok(ReducedGraph::new(nodes, segments, self.start.id.clone()))
    }

    /// Walks from `source` along `entry` until the next surviving node,
    /// accumulating the actions of everything folded along the way.
    fn walk_chain(
        &self,
        source: &'a ElementDefinition,
        entry: &'a FlowDefinition,
        flow_order: usize,
        guard: Option<Guard>,
        phrase: Option<Phrase>,
        consumed: &mut AHashSet<&'a str>,
    ) -> Result<(Segment, &'a ElementDefinition), ConvertError> {
        let mut actions: Vec<Phrase> = Vec::new();
        let mut via_flows: Vec<String> = vec![entry.id.clone()];
        let mut lineage: AHashSet<&'a str> = AHashSet::new();
        let mut flow = entry;

        loop {
            let element = self.element_of_target(flow)?;
            match element.kind {
                ElementKind::Start | ElementKind::End | ElementKind::ExclusiveGateway => {
                    let segment = Segment {
                        source: source.id.clone(),
                        target: element.id.clone(),
                        guard,
                        phrase,
                        actions,
                        flow_order,
                        via_flows,
                    };
                    return Ok((segment, element));
                }
                ElementKind::Task => {
                    note_step(element, &mut lineage, consumed)?;
                    actions.push(task_phrase(element)?);
                    flow = self.single_outgoing(element)?;
                    via_flows.push(flow.id.clone());
                }
                ElementKind::ParallelGateway => {
                    note_step(element, &mut lineage, consumed)?;
                    let outs = self.outgoing(&element.id);
                    if outs.len() == 1 {
                        // pass-through, or a merge shared by exclusive branches
                        flow = outs[0];
                        via_flows.push(flow.id.clone());
                    } else {
                        flow = self.collapse_parallel(
                            element,
                            &lineage,
                            &mut actions,
                            &mut via_flows,
                            consumed,
                        )?;
                    }
                }
            }
        }
    }

    /// Folds a parallel fork: every branch is walked to the common join,
    /// actions concatenated in declared branch order, and the walk resumes
    /// past the join.
    fn collapse_parallel(
        &self,
        fork: &'a ElementDefinition,
        lineage: &AHashSet<&'a str>,
        actions: &mut Vec<Phrase>,
        via_flows: &mut Vec<String>,
        consumed: &mut AHashSet<&'a str>,
    ) -> Result<&'a FlowDefinition, ConvertError> {
        let mut join: Option<&'a ElementDefinition> = None;

        for &branch in self.outgoing(&fork.id) {
            via_flows.push(branch.id.clone());
            let branch_join =
                self.walk_parallel_branch(fork, branch, lineage.clone(), actions, via_flows, consumed)?;
            match join {
                None => join = Some(branch_join),
                Some(known) if known.id == branch_join.id => {}
                Some(_) => {
                    return Err(StructuralError::UnbalancedParallel {
                        gateway_id: fork.id.clone(),
                    }
                    .into());
                }
            }
        }

        let join = join.ok_or_else(|| StructuralError::DanglingBranch {
            element_id: fork.id.clone(),
        })?;
        if lineage.contains(join.id.as_str()) {
            return Err(StructuralError::CollapseLoop {
                element_id: join.id.clone(),
            }
            .into());
        }
        consumed.insert(join.id.as_str());

        match self.outgoing(&join.id) {
            [] => Err(StructuralError::DanglingBranch {
                element_id: join.id.clone(),
            }
            .into()),
            [only] => {
                via_flows.push(only.id.clone());
                Ok(*only)
            }
            _ => {
                // the join immediately fans out again: a combined join-fork
                let mut lineage = lineage.clone();
                lineage.insert(join.id.as_str());
                self.collapse_parallel(join, &lineage, actions, via_flows, consumed)
            }
        }
    }

    /// Walks one branch of a parallel fork until the join that merges the
    /// block. A branch that reaches a surviving node has escaped its block,
    /// which leaves the fork without defined collapse semantics.
    fn walk_parallel_branch(
        &self,
        fork: &'a ElementDefinition,
        entry: &'a FlowDefinition,
        mut lineage: AHashSet<&'a str>,
        actions: &mut Vec<Phrase>,
        via_flows: &mut Vec<String>,
        consumed: &mut AHashSet<&'a str>,
    ) -> Result<&'a ElementDefinition, ConvertError> {
        let mut flow = entry;
        loop {
            let element = self.element_of_target(flow)?;
            match element.kind {
                ElementKind::Start | ElementKind::End | ElementKind::ExclusiveGateway => {
                    return Err(StructuralError::UnbalancedParallel {
                        gateway_id: fork.id.clone(),
                    }
                    .into());
                }
                ElementKind::Task => {
                    note_step(element, &mut lineage, consumed)?;
                    actions.push(task_phrase(element)?);
                    flow = self.single_outgoing(element)?;
                    via_flows.push(flow.id.clone());
                }
                ElementKind::ParallelGateway => {
                    if self.incoming(&element.id) > 1 {
                        // the join; the caller resumes past it
                        return Ok(element);
                    }
                    note_step(element, &mut lineage, consumed)?;
                    let outs = self.outgoing(&element.id);
                    if outs.len() == 1 {
                        flow = outs[0];
                        via_flows.push(flow.id.clone());
                    } else {
                        flow = self.collapse_parallel(
                            element,
                            &lineage,
                            actions,
                            via_flows,
                            consumed,
                        )?;
                    }
                }
            }
        }
    }

    fn decision_node(&self, element: &ElementDefinition) -> Result<DecisionNode, LabelFormatError> {
        let (kind, phrase) = match element.kind {
            ElementKind::Start => (NodeKind::Start, None),
            ElementKind::End => (NodeKind::End, None),
            // the worklist only ever carries surviving elements
            _ => {
                let label =
                    element
                        .label
                        .as_deref()
                        .ok_or_else(|| LabelFormatError::Missing {
                            element_id: element.id.clone(),
                        })?;
                (
                    NodeKind::ExclusiveChoice,
                    Some(Phrase::split(&element.id, label)?),
                )
            }
        };
        Ok(DecisionNode {
            id: element.id.clone(),
            kind,
            label: element.label.clone(),
            phrase,
        })
    }

    fn guard_for(
        &self,
        source: &ElementDefinition,
        flow: &FlowDefinition,
    ) -> Result<Option<Guard>, StructuralError> {
        if source.kind != ElementKind::ExclusiveGateway {
            return Ok(None);
        }
        match flow.label.as_deref().and_then(Guard::parse) {
            Some(guard) => Ok(Some(guard)),
            None => Err(StructuralError::InvalidGuard {
                gateway_id: source.id.clone(),
                flow_id: flow.id.clone(),
                label: flow.label.clone(),
            }),
        }
    }

    fn element_of_target(
        &self,
        flow: &FlowDefinition,
    ) -> Result<&'a ElementDefinition, StructuralError> {
        self.elements
            .get(flow.target.as_str())
            .copied()
            .ok_or_else(|| StructuralError::UnknownElement {
                flow_id: flow.id.clone(),
                element_id: flow.target.clone(),
            })
    }

    fn single_outgoing(
        &self,
        element: &ElementDefinition,
    ) -> Result<&'a FlowDefinition, StructuralError> {
        self.outgoing(&element.id)
            .first()
            .copied()
            .ok_or_else(|| StructuralError::DanglingBranch {
                element_id: element.id.clone(),
            })
    }

    fn outgoing(&self, id: &str) -> &[&'a FlowDefinition] {
        self.outgoing.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    fn incoming(&self, id: &str) -> usize {
        self.incoming.get(id).copied().unwrap_or(0)
    }
}
