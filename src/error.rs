use thiserror::Error;

/// Errors that can occur while reducing a diagram to its decision skeleton.
#[derive(Error, Debug, Clone)]
pub enum StructuralError {
    #[error("Expected exactly one start event, found none")]
    MissingStart,

    #[error("Expected exactly one start event, found {count}")]
    DuplicateStart { count: usize },

    #[error("Expected at least one end event, found none")]
    MissingEnd,

    #[error(
        "Flow '{flow_id}' leaving gateway '{gateway_id}' must be labeled 'Yes' or 'No', found {label:?}"
    )]
    InvalidGuard {
        gateway_id: String,
        flow_id: String,
        label: Option<String>,
    },

    #[error(
        "Element '{element_id}' has {out_degree} outgoing flows, but only an exclusive or parallel gateway may branch"
    )]
    AmbiguousCollapse {
        element_id: String,
        out_degree: usize,
    },

    #[error("Flow '{flow_id}' references unknown element '{element_id}'")]
    UnknownElement {
        flow_id: String,
        element_id: String,
    },

    #[error("Element '{element_id}' is not reachable from the start event")]
    Unreachable { element_id: String },

    #[error("Element '{element_id}' has no outgoing flow and is not an end event")]
    DanglingBranch { element_id: String },

    #[error("End event '{element_id}' must not have outgoing flows")]
    OutgoingFromEnd { element_id: String },

    #[error("Parallel branches of gateway '{gateway_id}' do not converge on a single join")]
    UnbalancedParallel { gateway_id: String },

    #[error("Collapse walk revisited element '{element_id}' without reaching a decision node")]
    CollapseLoop { element_id: String },
}

/// Error raised when path enumeration meets a cycle between decision nodes.
#[derive(Error, Debug, Clone)]
pub enum CycleError {
    #[error("Node '{node_id}' is visited twice on the same start-to-end path")]
    Revisited { node_id: String },
}

/// Errors that can occur while splitting an element label into an actor and a predicate.
#[derive(Error, Debug, Clone)]
pub enum LabelFormatError {
    #[error("Element '{element_id}' has no label to derive an actor and predicate from")]
    Missing { element_id: String },

    #[error("Label '{label}' on element '{element_id}' does not split into an actor and a predicate")]
    Unsplittable { element_id: String, label: String },
}

/// Errors that can occur while importing a BPMN 2.0 XML document.
#[derive(Error, Debug, Clone)]
pub enum BpmnImportError {
    #[error("Failed to parse BPMN XML: {0}")]
    XmlParseError(String),

    #[error("No <bpmn:process> element found in the document")]
    NoProcess,

    #[error(transparent)]
    Convert(#[from] ProcessConversionError),
}

/// Errors that can occur when converting a custom diagram format into a kisoku `ProcessDefinition`.
#[derive(Error, Debug, Clone)]
pub enum ProcessConversionError {
    #[error("Invalid diagram data: {0}")]
    ValidationError(String),
}

/// Errors that can occur while saving or loading a compiled rule artifact.
#[derive(Error, Debug, Clone)]
pub enum ArtifactError {
    #[error("Artifact error: {0}")]
    Generic(String),
}

/// Any error the conversion pipeline itself can produce.
///
/// The phases stay distinguishable: structural defects and label defects
/// surface during reduction, cycles during enumeration. Rule building
/// cannot fail.
#[derive(Error, Debug, Clone)]
pub enum ConvertError {
    #[error(transparent)]
    Structural(#[from] StructuralError),

    #[error(transparent)]
    Cycle(#[from] CycleError),

    #[error(transparent)]
    Label(#[from] LabelFormatError),
}
