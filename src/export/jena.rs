use super::{ExecutableRule, NO_RELATIONS};
use crate::converter::RuleSet;
use crate::rule::{RelationAtom, RuleIR};
use itertools::Itertools;

/// Prefix the generated rules bind to the rule set's ontology IRI.
const PREFIX: &str = "rules";

/// Renders rules in Apache Jena's rule syntax.
///
/// Conditions become `(?actor rules:predicate 'true')` triples, negated
/// ones are wrapped in `noValue`, and obligations assert the task
/// property on the actor. Relationship atoms from the executable closure
/// lead the body.
pub struct JenaExporter;

impl JenaExporter {
    /// One bracketed rule.
    pub fn rule_block(rule: &RuleIR, relations: &[RelationAtom], task_predicate: &str) -> String {
        let mut body: Vec<String> = Vec::new();
        for rel in relations {
            body.push(format!(
                "    (?{} {}:{} ?{})",
                rel.subject, PREFIX, rel.predicate, rel.object
            ));
        }
        for c in &rule.conditions {
            let triple = format!("(?{} {}:{} 'true')", c.actor, PREFIX, c.predicate);
            body.push(if c.value {
                format!("    {}", triple)
            } else {
                format!("    noValue{}", triple)
            });
        }
        let head = rule
            .actions
            .iter()
            .map(|a| format!("    (?{} {}:{} '{}')", a.actor, PREFIX, task_predicate, a.name))
            .join(",\n");
        format!("[{}:\n{}\n  ->\n{}\n]", rule.rid, body.join(",\n"), head)
    }

    /// The rules exactly as built.
    pub fn export(rule_set: &RuleSet) -> String {
        let items: Vec<(&RuleIR, &[RelationAtom])> =
            rule_set.rules.iter().map(|r| (r, NO_RELATIONS)).collect();
        Self::render(rule_set, &items)
    }

    /// The closure-enhanced rules.
    pub fn export_executable(rule_set: &RuleSet, rules: &[ExecutableRule]) -> String {
        let items: Vec<(&RuleIR, &[RelationAtom])> = rules
            .iter()
            .map(|er| (&er.rule, er.relations.as_slice()))
            .collect();
        Self::render(rule_set, &items)
    }

    fn render(rule_set: &RuleSet, items: &[(&RuleIR, &[RelationAtom])]) -> String {
        let blocks = items
            .iter()
            .map(|(rule, relations)| Self::rule_block(rule, relations, &rule_set.task_predicate))
            .join("\n\n");
        format!(
            "# Jena rules generated from a BPMN process\n\n@prefix {}: <{}#> .\n\n{}\n",
            PREFIX, rule_set.base_iri, blocks
        )
    }
}
