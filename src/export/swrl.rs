use super::{escape_xml, indent, ExecutableRule, NO_RELATIONS};
use crate::converter::RuleSet;
use crate::rule::{DisplayRule, RelationAtom, RuleIR};
use itertools::Itertools;
use std::collections::BTreeSet;

const RDF_NIL: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#nil";
const XSD_BOOL: &str = "http://www.w3.org/2001/XMLSchema#boolean";
const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";

/// Renders rules as a SWRL ontology in RDF/XML, structured the way
/// Protégé's SWRL tooling expects: property and variable declarations
/// first, then one `swrl:Imp` per rule with body and head as proper RDF
/// atom lists.
pub struct SwrlExporter;

fn var_iri(base_iri: &str, actor: &str) -> String {
    format!("{}#var_{}", base_iri, actor)
}

fn prop_iri(base_iri: &str, name: &str) -> String {
    format!("{}#{}", base_iri, name)
}

fn bool_atom(predicate_iri: &str, variable_iri: &str, value: bool) -> String {
    format!(
        "<swrl:DatavaluedPropertyAtom>\n  <swrl:propertyPredicate rdf:resource=\"{}\"/>\n  <swrl:argument1 rdf:resource=\"{}\"/>\n  <swrl:argument2 rdf:datatype=\"{}\">{}</swrl:argument2>\n</swrl:DatavaluedPropertyAtom>",
        escape_xml(predicate_iri),
        escape_xml(variable_iri),
        XSD_BOOL,
        value
    )
}

fn task_atom(predicate_iri: &str, variable_iri: &str, name: &str) -> String {
    format!(
        "<swrl:DatavaluedPropertyAtom>\n  <swrl:propertyPredicate rdf:resource=\"{}\"/>\n  <swrl:argument1 rdf:resource=\"{}\"/>\n  <swrl:argument2 rdf:datatype=\"{}\">{}</swrl:argument2>\n</swrl:DatavaluedPropertyAtom>",
        escape_xml(predicate_iri),
        escape_xml(variable_iri),
        XSD_STRING,
        escape_xml(name)
    )
}

fn individual_atom(predicate_iri: &str, subject_iri: &str, object_iri: &str) -> String {
    format!(
        "<swrl:IndividualPropertyAtom>\n  <swrl:propertyPredicate rdf:resource=\"{}\"/>\n  <swrl:argument1 rdf:resource=\"{}\"/>\n  <swrl:argument2 rdf:resource=\"{}\"/>\n</swrl:IndividualPropertyAtom>",
        escape_xml(predicate_iri),
        escape_xml(subject_iri),
        escape_xml(object_iri)
    )
}

/// Serializes atoms as the nested `swrl:AtomList` structure; an empty
/// list collapses to a reference to `rdf:nil`.
fn atom_list(atoms: &[String], pad: usize) -> String {
    let p = " ".repeat(pad);
    match atoms {
        [] => format!("{p}<rdf:Description rdf:about=\"{RDF_NIL}\"/>"),
        [first, rest @ ..] => {
            let first_xml = indent(first, pad + 4);
            let rest_xml = if rest.is_empty() {
                format!("{p}  <rdf:rest rdf:resource=\"{RDF_NIL}\"/>")
            } else {
                format!(
                    "{p}  <rdf:rest>\n{}\n{p}  </rdf:rest>",
                    atom_list(rest, pad + 4)
                )
            };
            format!(
                "{p}<swrl:AtomList>\n{p}  <rdf:first>\n{first_xml}\n{p}  </rdf:first>\n{rest_xml}\n{p}</swrl:AtomList>"
            )
        }
    }
}

impl SwrlExporter {
    fn rule_imp(
        rule: &RuleIR,
        relations: &[RelationAtom],
        base_iri: &str,
        task_predicate: &str,
    ) -> String {
        let mut body: Vec<String> = Vec::new();
        for rel in relations {
            body.push(individual_atom(
                &prop_iri(base_iri, &rel.predicate),
                &var_iri(base_iri, &rel.subject),
                &var_iri(base_iri, &rel.object),
            ));
        }
        for c in &rule.conditions {
            body.push(bool_atom(
                &prop_iri(base_iri, &c.predicate),
                &var_iri(base_iri, &c.actor),
                c.value,
            ));
        }
        let task_iri = prop_iri(base_iri, task_predicate);
        let head: Vec<String> = rule
            .actions
            .iter()
            .map(|a| task_atom(&task_iri, &var_iri(base_iri, &a.actor), &a.name))
            .collect();

        format!(
            "<swrl:Imp rdf:about=\"{about}\">\n  <swrl:body>\n{body}\n  </swrl:body>\n  <swrl:head>\n{head}\n  </swrl:head>\n</swrl:Imp>",
            about = escape_xml(&format!("{}#{}", base_iri, rule.rid)),
            body = atom_list(&body, 4),
            head = atom_list(&head, 4),
        )
    }

    fn document(base_iri: &str, task_predicate: &str, items: &[(&RuleIR, &[RelationAtom])]) -> String {
        let mut actors: BTreeSet<&str> = BTreeSet::new();
        let mut data_properties: BTreeSet<&str> = BTreeSet::new();
        let mut object_properties: BTreeSet<&str> = BTreeSet::new();
        for (rule, relations) in items {
            for c in &rule.conditions {
                actors.insert(&c.actor);
                data_properties.insert(&c.predicate);
            }
            for a in &rule.actions {
                actors.insert(&a.actor);
            }
            for rel in relations.iter() {
                actors.insert(&rel.subject);
                actors.insert(&rel.object);
                object_properties.insert(&rel.predicate);
            }
        }
        data_properties.insert(task_predicate);

        let mut declarations: Vec<String> = Vec::new();
        for prop in &data_properties {
            declarations.push(format!(
                "  <owl:DatatypeProperty rdf:about=\"{}\"/>",
                escape_xml(&prop_iri(base_iri, prop))
            ));
        }
        for prop in &object_properties {
            declarations.push(format!(
                "  <owl:ObjectProperty rdf:about=\"{}\"/>",
                escape_xml(&prop_iri(base_iri, prop))
            ));
        }
        for actor in &actors {
            declarations.push(format!(
                "  <swrl:Variable rdf:about=\"{}\"/>",
                escape_xml(&var_iri(base_iri, actor))
            ));
        }

        let rules = items
            .iter()
            .map(|(rule, relations)| Self::rule_imp(rule, relations, base_iri, task_predicate))
            .join("\n\n");

        format!(
            "<?xml version=\"1.0\"?>\n<rdf:RDF\n  xmlns:rdf=\"http://www.w3.org/1999/02/22-rdf-syntax-ns#\"\n  xmlns:owl=\"http://www.w3.org/2002/07/owl#\"\n  xmlns:xsd=\"http://www.w3.org/2001/XMLSchema#\"\n  xmlns:rdfs=\"http://www.w3.org/2000/01/rdf-schema#\"\n  xmlns:swrl=\"http://www.w3.org/2003/11/swrl#\"\n  xmlns:swrlb=\"http://www.w3.org/2003/11/swrlb#\"\n  xmlns:ruleml=\"http://www.w3.org/2003/11/ruleml#\"\n  xml:base=\"{base}\">\n\n  <owl:Ontology rdf:about=\"{base}\"/>\n\n{declarations}\n\n  <!-- SWRL Rules -->\n{rules}\n\n</rdf:RDF>\n",
            base = escape_xml(base_iri),
            declarations = declarations.join("\n"),
            rules = indent(&rules, 2),
        )
    }

    /// The ontology for the rules exactly as built.
    pub fn export(rule_set: &RuleSet) -> String {
        let items: Vec<(&RuleIR, &[RelationAtom])> =
            rule_set.rules.iter().map(|r| (r, NO_RELATIONS)).collect();
        Self::document(&rule_set.base_iri, &rule_set.task_predicate, &items)
    }

    /// The ontology for closure-enhanced rules; relationship atoms lead
    /// each body and their predicates are declared as object properties.
    pub fn export_executable(rule_set: &RuleSet, rules: &[ExecutableRule]) -> String {
        let items: Vec<(&RuleIR, &[RelationAtom])> = rules
            .iter()
            .map(|er| (&er.rule, er.relations.as_slice()))
            .collect();
        Self::document(&rule_set.base_iri, &rule_set.task_predicate, &items)
    }

    /// Human-readable SWRL, one implication per line.
    pub fn rules_text(rule_set: &RuleSet) -> String {
        let mut out = String::from("// SWRL rules generated from a BPMN process\n");
        out.push_str(&format!("// {} rules\n\n", rule_set.rules.len()));
        for rule in &rule_set.rules {
            out.push_str(&format!("// {}\n", rule.rid));
            out.push_str(&format!(
                "{}\n\n",
                DisplayRule {
                    rule,
                    task_predicate: &rule_set.task_predicate,
                }
            ));
        }
        out
    }
}
