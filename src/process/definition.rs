/// The complete, canonical definition of a process diagram, ready for conversion.
/// This is the target structure for any custom diagram format conversion.
#[derive(Debug, Clone, Default)]
pub struct ProcessDefinition {
    pub elements: Vec<ElementDefinition>,
    pub flows: Vec<FlowDefinition>,
}

/// Defines a single element (event, task or gateway) in the diagram.
#[derive(Debug, Clone)]
pub struct ElementDefinition {
    pub id: String,
    pub kind: ElementKind,
    pub label: Option<String>,
}

/// The closed set of element kinds the conversion understands.
///
/// Task flavors (user task, service task and so on) are folded into
/// [`ElementKind::Task`] by the import layer; the conversion does not
/// distinguish who performs a step, only that it is performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Start,
    End,
    Task,
    ExclusiveGateway,
    ParallelGateway,
}

impl ElementKind {
    /// Whether this kind survives reduction as a decision node.
    pub fn is_decision(&self) -> bool {
        matches!(self, Self::Start | Self::End | Self::ExclusiveGateway)
    }
}

/// Defines a directed sequence flow between two elements.
///
/// Sibling order is positional: among flows sharing a `source`, the order
/// of appearance in [`ProcessDefinition::flows`] is the declared branch
/// order of the diagram.
#[derive(Debug, Clone)]
pub struct FlowDefinition {
    pub id: String,
    pub source: String,
    pub target: String,
    pub label: Option<String>,
}
