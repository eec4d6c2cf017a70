//! The conversion pipeline: graph reduction, path enumeration and rule
//! building.
//!
//! [`Converter`] runs all three phases in order. The phase functions are
//! public for callers that want the intermediate stages, for example to
//! render a listing of the reduced graph before committing to rules.

mod artifact;
pub mod builder;
pub mod enumerator;
pub mod reducer;

pub use builder::build_rules;
pub use enumerator::enumerate_paths;
pub use reducer::reduce;

use crate::error::ConvertError;
use crate::process::ProcessDefinition;
use crate::rule::RuleIR;
use serde::{Deserialize, Serialize};

/// Default ontology IRI used by the RDF-producing exporters.
pub const DEFAULT_BASE_IRI: &str = "http://example.org/bpmn2rules";

/// Default name of the property that carries obligations.
pub const DEFAULT_TASK_PREDICATE: &str = "task";

/// The complete result of one conversion run: the rules in enumeration
/// order, the superiority chain over their ids, and the export settings
/// they were built with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleSet {
    pub rules: Vec<RuleIR>,
    /// `(over, under)` pairs. Every rule defeats its immediate successor,
    /// so earlier branches win when obligations conflict.
    pub superiority: Vec<(String, String)>,
    pub base_iri: String,
    pub task_predicate: String,
}

impl RuleSet {
    pub fn new(rules: Vec<RuleIR>, base_iri: String, task_predicate: String) -> Self {
        let superiority = rules
            .windows(2)
            .map(|pair| (pair[0].rid.clone(), pair[1].rid.clone()))
            .collect();
        Self {
            rules,
            superiority,
            base_iri,
            task_predicate,
        }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Converts one process definition into a [`RuleSet`].
///
/// Construct through [`Converter::builder`] to override export settings:
///
/// ```rust
/// use kisoku::prelude::*;
///
/// fn run(process: ProcessDefinition) -> Result<RuleSet> {
///     let rule_set = Converter::builder(process)
///         .with_base_iri("http://example.org/aiact")
///         .build()
///         .convert()?;
///     Ok(rule_set)
/// }
/// ```
pub struct Converter {
    process: ProcessDefinition,
    base_iri: String,
    task_predicate: String,
}

/// Builder for [`Converter`].
pub struct ConverterBuilder {
    process: ProcessDefinition,
    base_iri: String,
    task_predicate: String,
}

impl ConverterBuilder {
    pub fn new(process: ProcessDefinition) -> Self {
        Self {
            process,
            base_iri: DEFAULT_BASE_IRI.to_string(),
            task_predicate: DEFAULT_TASK_PREDICATE.to_string(),
        }
    }

    /// Overrides the ontology IRI the RDF exporters emit.
    pub fn with_base_iri(mut self, base_iri: &str) -> Self {
        self.base_iri = base_iri.to_string();
        self
    }

    /// Overrides the property name used for obligation atoms.
    pub fn with_task_predicate(mut self, task_predicate: &str) -> Self {
        self.task_predicate = task_predicate.to_string();
        self
    }

    pub fn build(self) -> Converter {
        Converter {
            process: self.process,
            base_iri: self.base_iri,
            task_predicate: self.task_predicate,
        }
    }
}

impl Converter {
    pub fn builder(process: ProcessDefinition) -> ConverterBuilder {
        ConverterBuilder::new(process)
    }

    /// Runs the full pipeline, consuming the converter.
    pub fn convert(self) -> Result<RuleSet, ConvertError> {
        let paths = {
            // the reduced graph is only needed to enumerate
            let graph = reduce(&self.process)?;
            enumerate_paths(&graph)?
        };
        let rules = build_rules(&paths);
        Ok(RuleSet::new(rules, self.base_iri, self.task_predicate))
    }
}

/// One-shot conversion with default settings, returning just the rules.
pub fn convert(process: &ProcessDefinition) -> Result<Vec<RuleIR>, ConvertError> {
    let graph = reduce(process)?;
    let paths = enumerate_paths(&graph)?;
    Ok(build_rules(&paths))
}
