//! Serializers from a [`RuleSet`](crate::converter::RuleSet) to the
//! supported rule grammars.
//!
//! Every exporter is a pure string producer; writing files is the
//! caller's business. The executable variants run the rules through the
//! closure pass in [`executable`] first, so a reasoner can bind every
//! actor the consequents mention.

pub mod ddl;
pub mod executable;
pub mod jena;
pub mod json;
pub mod legalruleml;
pub mod prolog;
pub mod swrl;

pub use ddl::DdlExporter;
pub use executable::{enhance, enhance_with, ExecutableExporter, ExecutableRule};
pub use jena::JenaExporter;
pub use json::JsonExporter;
pub use legalruleml::LegalRuleMlExporter;
pub use prolog::PrologExporter;
pub use swrl::SwrlExporter;

use crate::rule::RelationAtom;
use itertools::Itertools;
use std::borrow::Cow;

pub(crate) const NO_RELATIONS: &[RelationAtom] = &[];

/// Collapses free text into a DDL-safe symbol: punctuation dropped,
/// whitespace runs become single underscores.
pub fn to_symbol(text: &str) -> String {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect();
    let symbol: String = cleaned.split_whitespace().join("_");
    if symbol.is_empty() {
        "unnamed".to_string()
    } else {
        symbol
    }
}

/// XML-escapes text content and attribute values.
pub(crate) fn escape_xml(raw: &str) -> Cow<'_, str> {
    quick_xml::escape::escape(raw)
}

/// Prefixes every non-blank line of `text` with `pad` spaces.
pub(crate) fn indent(text: &str, pad: usize) -> String {
    let pad = " ".repeat(pad);
    text.lines()
        .map(|line| {
            if line.trim().is_empty() {
                line.to_string()
            } else {
                format!("{}{}", pad, line)
            }
        })
        .join("\n")
}
