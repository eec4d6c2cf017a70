use super::to_symbol;
use crate::converter::RuleSet;
use crate::rule::RuleIR;
use itertools::Itertools;

/// Renders rules as Defeasible Deontic Logic text.
///
/// Conditions become propositional symbols built from actor and
/// predicate, obligations are wrapped in the `O(..)` deontic operator,
/// and the superiority chain follows the rule block.
pub struct DdlExporter;

impl DdlExporter {
    /// One line per rule: `rid: antecedent => O(..) & O(..).`
    ///
    /// An empty antecedent renders as `true`, an empty consequent as
    /// `O(none)`, so every line stays parseable.
    pub fn rule_line(rule: &RuleIR) -> String {
        let antecedent = if rule.conditions.is_empty() {
            "true".to_string()
        } else {
            rule.conditions
                .iter()
                .map(|c| {
                    let symbol = to_symbol(&format!("{} {}", c.actor, c.predicate));
                    if c.value {
                        symbol
                    } else {
                        format!("not {}", symbol)
                    }
                })
                .join(", ")
        };
        let consequent = if rule.actions.is_empty() {
            "O(none)".to_string()
        } else {
            rule.actions
                .iter()
                .map(|a| format!("O({})", to_symbol(&format!("{} {}", a.actor, a.name))))
                .join(" & ")
        };
        format!("{}: {} => {}.", rule.rid, antecedent, consequent)
    }

    /// The full document: the rule block and the superiority chain.
    pub fn export(rule_set: &RuleSet) -> String {
        let mut lines: Vec<String> = vec!["% RULES".to_string()];
        for rule in &rule_set.rules {
            lines.push(Self::rule_line(rule));
        }
        lines.push(String::new());
        lines.push("% SUPERIORITY".to_string());
        for (over, under) in &rule_set.superiority {
            lines.push(format!("{} > {}.", over, under));
        }
        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}
