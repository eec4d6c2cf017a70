use crate::converter::RuleSet;
use crate::rule::RuleIR;
use serde::Serialize;

/// Renders the rule set as pretty-printed JSON, with the rule count up
/// front so downstream tooling can sanity-check a document cheaply.
pub struct JsonExporter;

#[derive(Serialize)]
struct Document<'a> {
    num_rules: usize,
    base_iri: &'a str,
    task_predicate: &'a str,
    rules: &'a [RuleIR],
    superiority: &'a [(String, String)],
}

impl JsonExporter {
    pub fn export(rule_set: &RuleSet) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&Document {
            num_rules: rule_set.rules.len(),
            base_iri: &rule_set.base_iri,
            task_predicate: &rule_set.task_predicate,
            rules: &rule_set.rules,
            superiority: &rule_set.superiority,
        })
    }
}
