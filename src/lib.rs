//! # Kisoku - BPMN to Formal Rules Compilation Engine
//!
//! **Kisoku** extracts the conditional obligations encoded in a BPMN process
//! diagram and compiles them into formal rule documents: Defeasible Deontic
//! Logic, SWRL/OWL ontologies, Jena rules, Prolog clauses, LegalRuleML and
//! JSON. A diagram's decision structure is reduced to a small graph, every
//! start-to-end path becomes one rule, and earlier branches defeat later
//! ones through an explicit superiority chain.
//!
//! ## Core Workflow
//!
//! The engine is format-agnostic. It operates on a canonical internal model
//! of a "process definition." The primary workflow is:
//!
//! 1.  **Load Your Diagram**: Parse your process format into your own Rust structs, or use the built-in BPMN 2.0 XML front end ([`bpmn::parse_bpmn`]).
//! 2.  **Convert to Kisoku's Model**: Implement the [`process::IntoProcess`] trait for your structs to provide a translation layer into [`process::ProcessDefinition`].
//! 3.  **Convert**: Use [`converter::Converter::builder`] to run the pipeline. Reduction folds tasks and parallel blocks into decision-to-decision segments, enumeration walks every start-to-end path, and the rule builder emits one immutable rule per path.
//! 4.  **Export**: Feed the resulting [`converter::RuleSet`] to any exporter in [`export`], render a human-readable listing with [`report::ConversionReport`], or persist it with [`converter::RuleSet::save`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use kisoku::prelude::*;
//!
//! fn main() -> Result<()> {
//!     // 1. Parse a diagram. Any type implementing `IntoProcess` works;
//!     //    BPMN 2.0 XML is supported out of the box.
//!     let xml = std::fs::read_to_string("process.bpmn")?;
//!     let process = parse_bpmn(&xml)?;
//!
//!     // 2. Run the conversion pipeline.
//!     let rule_set = Converter::builder(process)
//!         .with_base_iri("http://example.org/aiact")
//!         .build()
//!         .convert()?;
//!
//!     for rule in &rule_set.rules {
//!         println!(
//!             "{}: {}",
//!             rule.rid,
//!             DisplayRule { rule, task_predicate: &rule_set.task_predicate }
//!         );
//!     }
//!
//!     // 3. Export to the grammar you need.
//!     std::fs::write("rules.ddl", DdlExporter::export(&rule_set))?;
//!     std::fs::write("rules.owl", SwrlExporter::export(&rule_set))?;
//!     std::fs::write("rules.pl", ExecutableExporter::to_prolog(&rule_set))?;
//!
//!     Ok(())
//! }
//! ```

pub mod bpmn;
pub mod converter;
pub mod error;
pub mod export;
pub mod graph;
pub mod prelude;
pub mod process;
pub mod report;
pub mod rule;
