//! Plain-text listing of a conversion's stages: the reduced nodes and
//! edges, every start-to-end path, and the resulting rules with their
//! superiority chain. Meant for eyeballing a diagram's translation before
//! trusting the exported documents.

use crate::converter::RuleSet;
use crate::export::DdlExporter;
use crate::graph::{DecisionNode, Path, ReducedGraph, Segment};
use itertools::Itertools;

pub struct ConversionReport;

impl ConversionReport {
    fn guard_text(segment: &Segment) -> String {
        segment
            .guard
            .map(|g| format!(" [{}]", g))
            .unwrap_or_default()
    }

    fn task_text(segment: &Segment) -> String {
        if segment.actions.is_empty() {
            "(no tasks)".to_string()
        } else {
            segment
                .actions
                .iter()
                .map(|p| format!("{} {}", p.actor, p.text))
                .join(", ")
        }
    }

    fn node_line(node: &DecisionNode) -> String {
        format!(
            "- {:<18} | {:<16} | {}",
            node.id,
            node.kind.to_string(),
            node.label.as_deref().unwrap_or("")
        )
    }

    fn edge_line(graph: &ReducedGraph, segment: &Segment) -> String {
        let name_of = |id: &str| -> String {
            graph
                .node(id)
                .and_then(|n| n.label.as_deref())
                .unwrap_or("")
                .to_string()
        };
        let flows = if segment.via_flows.is_empty() {
            "(none)".to_string()
        } else {
            segment.via_flows.join(", ")
        };
        format!(
            "{}{} -> {} | src='{}' dst='{}' | tasks: {} | via_flows: {}",
            segment.source,
            Self::guard_text(segment),
            segment.target,
            name_of(&segment.source),
            name_of(&segment.target),
            Self::task_text(segment),
            flows
        )
    }

    fn path_block(path: &Path, index: usize) -> String {
        let mut lines = vec![format!("Path {}:", index)];
        for segment in &path.segments {
            lines.push(format!(
                "  {}{} -> {} | tasks: {}",
                segment.source,
                Self::guard_text(segment),
                segment.target,
                Self::task_text(segment)
            ));
        }
        lines.join("\n")
    }

    /// Renders the whole listing. Nodes are sorted by id and edges by
    /// source and declared flow order, so two runs over the same diagram
    /// produce identical text.
    pub fn render(graph: &ReducedGraph, paths: &[Path], rule_set: &RuleSet) -> String {
        let mut lines: Vec<String> = vec!["=== REDUCED NODES ===".to_string()];
        let mut nodes: Vec<&DecisionNode> = graph.nodes().collect();
        nodes.sort_by(|a, b| a.id.cmp(&b.id));
        for node in nodes {
            lines.push(Self::node_line(node));
        }

        lines.push("\n=== REDUCED EDGES ===".to_string());
        let mut segments: Vec<&Segment> = graph.segments().collect();
        segments.sort_by(|a, b| (&a.source, a.flow_order).cmp(&(&b.source, b.flow_order)));
        for segment in segments {
            lines.push(Self::edge_line(graph, segment));
        }

        lines.push(format!("\n=== START → END PATHS ({}) ===\n", paths.len()));
        for (idx, path) in paths.iter().enumerate() {
            lines.push(Self::path_block(path, idx + 1));
            lines.push(String::new());
        }

        lines.push("% RULES".to_string());
        for rule in &rule_set.rules {
            lines.push(DdlExporter::rule_line(rule));
        }
        lines.push("\n% SUPERIORITY".to_string());
        for (over, under) in &rule_set.superiority {
            lines.push(format!("{} > {}.", over, under));
        }

        let mut out = lines.join("\n").trim_end().to_string();
        out.push('\n');
        out
    }
}
