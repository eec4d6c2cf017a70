use crate::rule::RuleIR;
use itertools::Itertools;
use std::fmt;

/// A wrapper to display a rule as a human-readable SWRL-style implication.
/// Useful for logging and for the generated rule listings.
pub struct DisplayRule<'a> {
    pub rule: &'a RuleIR,
    pub task_predicate: &'a str,
}

impl fmt::Display for DisplayRule<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rule.conditions.is_empty() {
            write!(f, "true")?;
        } else {
            let body = self
                .rule
                .conditions
                .iter()
                .map(|c| format!("{}(?{}, {})", c.predicate, c.actor, c.value))
                .join(" ^ ");
            write!(f, "{}", body)?;
        }
        write!(f, " -> ")?;
        if self.rule.actions.is_empty() {
            write!(f, "true")
        } else {
            let head = self
                .rule
                .actions
                .iter()
                .map(|a| format!("{}(?{}, \"{}\")", self.task_predicate, a.actor, a.name))
                .join(" ^ ");
            write!(f, "{}", head)
        }
    }
}
