//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and functions from the kisoku crate.
//! Import this module to get access to the core functionality without having to import
//! each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! // Use the prelude to get easy access to all the core types.
//! use kisoku::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! // Parse a BPMN diagram into the canonical process model
//! let xml = std::fs::read_to_string("path/to/process.bpmn")?;
//! let process = parse_bpmn(&xml)?;
//!
//! // Convert it into formal rules
//! let rule_set = Converter::builder(process).build().convert()?;
//!
//! // Render whichever output grammar you need
//! println!("{}", DdlExporter::export(&rule_set));
//! println!("{}", PrologExporter::export(&rule_set));
//! # Ok(())
//! # }
//! ```

// Core conversion pipeline
pub use crate::converter::{
    build_rules, convert, enumerate_paths, reduce, Converter, ConverterBuilder, RuleSet,
};

// Process model and BPMN front end
pub use crate::bpmn::{parse_bpmn, BpmnModel};
pub use crate::process::{
    ElementDefinition, ElementKind, FlowDefinition, IntoProcess, Phrase, ProcessDefinition,
};

// Reduced graph types
pub use crate::graph::{DecisionNode, Guard, NodeKind, Path, ReducedGraph, Segment};

// Rule types
pub use crate::rule::{Action, Condition, DisplayRule, RelationAtom, RuleIR};

// Exporters
pub use crate::export::{
    enhance, DdlExporter, ExecutableExporter, ExecutableRule, JenaExporter, JsonExporter,
    LegalRuleMlExporter, PrologExporter, SwrlExporter,
};

// Listings
pub use crate::report::ConversionReport;

// Error types
pub use crate::error::{
    BpmnImportError, ConvertError, CycleError, LabelFormatError, StructuralError,
};

// Hash map used throughout this crate
pub use ahash::AHashMap;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
