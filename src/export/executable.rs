use super::{JenaExporter, PrologExporter, SwrlExporter};
use crate::converter::RuleSet;
use crate::rule::{RelationAtom, RuleIR};
use ahash::AHashSet;

/// Default predicate used to bind a consequent-only actor to the
/// antecedent.
pub const DEFAULT_RELATION_PREDICATE: &str = "providesAISystem";

/// A rule plus the relationship atoms that make it executable.
///
/// A rule whose consequent mentions an actor the antecedent never binds
/// is valid SWRL but useless to a reasoner: the variable is free. The
/// closure pass synthesizes one relationship atom per such actor,
/// connecting it to the first antecedent actor; the exporters prepend
/// the atoms to the body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutableRule {
    pub rule: RuleIR,
    pub relations: Vec<RelationAtom>,
}

/// Closes every rule of the set over its unbound consequent actors.
pub fn enhance(rule_set: &RuleSet) -> Vec<ExecutableRule> {
    enhance_with(rule_set, DEFAULT_RELATION_PREDICATE)
}

/// Like [`enhance`] with a custom relationship predicate.
pub fn enhance_with(rule_set: &RuleSet, relation_predicate: &str) -> Vec<ExecutableRule> {
    rule_set
        .rules
        .iter()
        .map(|rule| {
            let bound: AHashSet<&str> = rule.conditions.iter().map(|c| c.actor.as_str()).collect();
            let mut relations: Vec<RelationAtom> = Vec::new();
            // unconditional rules have no anchor to connect to
            if let Some(anchor) = rule.conditions.first().map(|c| c.actor.as_str()) {
                let mut added: AHashSet<&str> = AHashSet::new();
                for action in &rule.actions {
                    let actor = action.actor.as_str();
                    if !bound.contains(actor) && added.insert(actor) {
                        relations.push(RelationAtom {
                            predicate: relation_predicate.to_string(),
                            subject: actor.to_string(),
                            object: anchor.to_string(),
                        });
                    }
                }
            }
            ExecutableRule {
                rule: rule.clone(),
                relations,
            }
        })
        .collect()
}

/// One-stop access to the executable renditions of a rule set.
pub struct ExecutableExporter;

impl ExecutableExporter {
    /// SWRL ontology with the closure applied.
    pub fn to_owl(rule_set: &RuleSet) -> String {
        SwrlExporter::export_executable(rule_set, &enhance(rule_set))
    }

    /// Jena rules with the closure applied.
    pub fn to_jena(rule_set: &RuleSet) -> String {
        JenaExporter::export_executable(rule_set, &enhance(rule_set))
    }

    /// Prolog clauses with the closure applied.
    pub fn to_prolog(rule_set: &RuleSet) -> String {
        PrologExporter::export_executable(rule_set, &enhance(rule_set))
    }
}
