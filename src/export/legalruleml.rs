use super::{escape_xml, indent};
use crate::converter::RuleSet;
use crate::rule::RuleIR;
use itertools::Itertools;

/// Renders rules as a LegalRuleML document: one prescriptive statement
/// per rule and one override statement per superiority pair.
pub struct LegalRuleMlExporter;

/// XML ids allow a narrower character set than rule text; everything
/// else becomes an underscore.
fn xml_id(raw: &str) -> String {
    let cleaned: String = raw
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect();
    if cleaned.is_empty() {
        "unnamed".to_string()
    } else {
        cleaned
    }
}

fn atom(rel: &str, var: &str, data: &str, data_type: &str) -> String {
    format!(
        "<ruleml:Atom>\n  <ruleml:Rel>{}</ruleml:Rel>\n  <ruleml:Var>{}</ruleml:Var>\n  <ruleml:Data xsi:type=\"{}\">{}</ruleml:Data>\n</ruleml:Atom>",
        escape_xml(rel),
        escape_xml(var),
        escape_xml(data_type),
        escape_xml(data)
    )
}

fn and_atoms(atoms: &[String]) -> String {
    match atoms {
        [] => String::new(),
        [single] => single.clone(),
        _ => format!(
            "<ruleml:And>\n{}\n</ruleml:And>",
            atoms.iter().map(|a| indent(a, 2)).join("\n")
        ),
    }
}

impl LegalRuleMlExporter {
    /// The `lrml:PrescriptiveStatement` block for one rule.
    pub fn statement(rule: &RuleIR, task_predicate: &str) -> String {
        let key = xml_id(&rule.rid);
        let if_atoms: Vec<String> = rule
            .conditions
            .iter()
            .map(|c| {
                atom(
                    &c.predicate,
                    &c.actor,
                    if c.value { "true" } else { "false" },
                    "xs:boolean",
                )
            })
            .collect();
        let then_atoms: Vec<String> = rule
            .actions
            .iter()
            .map(|a| atom(task_predicate, &a.actor, &a.name, "xs:string"))
            .collect();

        let mut inner = String::new();
        if !if_atoms.is_empty() {
            let block = format!("<ruleml:if>\n{}\n</ruleml:if>", indent(&and_atoms(&if_atoms), 2));
            inner.push_str(&indent(&block, 4));
            inner.push('\n');
        }
        if !then_atoms.is_empty() {
            let block = format!(
                "<ruleml:then>\n{}\n</ruleml:then>",
                indent(&and_atoms(&then_atoms), 2)
            );
            inner.push_str(&indent(&block, 4));
            inner.push('\n');
        }

        format!(
            "<lrml:PrescriptiveStatement key=\"{key}\">\n  <ruleml:Rule key=\"{key}\">\n{inner}  </ruleml:Rule>\n</lrml:PrescriptiveStatement>",
            key = escape_xml(&key),
            inner = inner,
        )
    }

    /// The full document, statements first, then the override chain.
    pub fn export(rule_set: &RuleSet) -> String {
        let statements = rule_set
            .rules
            .iter()
            .map(|r| Self::statement(r, &rule_set.task_predicate))
            .join("\n\n");
        let overrides = rule_set
            .superiority
            .iter()
            .map(|(over, under)| {
                format!(
                    "<lrml:OverrideStatement>\n  <lrml:Override over=\"#{}\" under=\"#{}\"/>\n</lrml:OverrideStatement>",
                    escape_xml(&xml_id(over)),
                    escape_xml(&xml_id(under))
                )
            })
            .join("\n\n");

        let mut body = indent(&statements, 4);
        if !overrides.is_empty() {
            body.push_str("\n\n");
            body.push_str(&indent(&overrides, 4));
        }

        format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<lrml:LegalRuleML\n  xmlns:lrml=\"http://docs.oasis-open.org/legalruleml/ns/v1.0/\"\n  xmlns:ruleml=\"http://ruleml.org/spec\"\n  xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\">\n\n  <lrml:Statements>\n{}\n  </lrml:Statements>\n\n</lrml:LegalRuleML>\n",
            body
        )
    }
}
