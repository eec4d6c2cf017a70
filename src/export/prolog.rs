use super::{ExecutableRule, NO_RELATIONS};
use crate::converter::RuleSet;
use crate::rule::{Action, Condition, RelationAtom, RuleIR};
use itertools::Itertools;

/// Renders rules as Prolog clauses.
///
/// Actors become variables, the obligations form the clause head and the
/// conditions the body; negated conditions use negation as failure. A
/// rule with no conditions and no relationship atoms becomes a fact.
pub struct PrologExporter;

impl PrologExporter {
    /// Actors are lower camel case; Prolog variables must start upper.
    fn variable(actor: &str) -> String {
        let mut chars = actor.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => "X".to_string(),
        }
    }

    fn condition_atom(c: &Condition) -> String {
        let atom = format!("{}({})", c.predicate, Self::variable(&c.actor));
        if c.value {
            atom
        } else {
            format!("\\+ {}", atom)
        }
    }

    fn action_atom(task_predicate: &str, a: &Action) -> String {
        format!("{}({}, '{}')", task_predicate, Self::variable(&a.actor), a.name)
    }

    fn relation_atom(rel: &RelationAtom) -> String {
        format!(
            "{}({}, {})",
            rel.predicate,
            Self::variable(&rel.subject),
            Self::variable(&rel.object)
        )
    }

    /// One clause per rule; several obligations become a parenthesized
    /// conjunction so the clause stays a single head.
    pub fn clause(rule: &RuleIR, relations: &[RelationAtom], task_predicate: &str) -> String {
        let head = match rule.actions.as_slice() {
            [] => "true".to_string(),
            [only] => Self::action_atom(task_predicate, only),
            many => format!(
                "({})",
                many.iter()
                    .map(|a| Self::action_atom(task_predicate, a))
                    .join(", ")
            ),
        };
        let body: Vec<String> = relations
            .iter()
            .map(Self::relation_atom)
            .chain(rule.conditions.iter().map(Self::condition_atom))
            .collect();
        if body.is_empty() {
            format!("{}.", head)
        } else {
            format!("{} :- {}.", head, body.join(", "))
        }
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
        let mut out = String::from("% Prolog rules generated from a BPMN process\n\n");
        for (rule, relations) in items {
            out.push_str(&format!("% {}\n", rule.rid));
            out.push_str(&Self::clause(rule, relations, &rule_set.task_predicate));
            out.push_str("\n\n");
        }
        out
    }
}
