use crate::graph::Path;
use crate::rule::{Action, Condition, RuleIR};

/// Builds one rule per enumerated path, in enumeration order.
///
/// Infallible by construction: reduction already validated every guard
/// and split every label. Conditions and actions are concatenated in
/// path order with no deduplication, and `rid` comes from the path's
/// position, so the rule sequence carries the diagram's branch priority.
pub fn build_rules(paths: &[Path]) -> Vec<RuleIR> {
    paths
        .iter()
        .enumerate()
        .map(|(sequence_index, path)| {
            let mut conditions: Vec<Condition> = Vec::new();
            let mut actions: Vec<Action> = Vec::new();
            for segment in &path.segments {
                if let (Some(guard), Some(phrase)) = (segment.guard, &segment.phrase) {
                    conditions.push(Condition {
                        actor: phrase.actor.clone(),
                        predicate: phrase.text.clone(),
                        value: guard.as_bool(),
                    });
                }
                for task in &segment.actions {
                    actions.push(Action {
                        actor: task.actor.clone(),
                        name: task.text.clone(),
                    });
                }
            }
            RuleIR {
                rid: format!("r{}", sequence_index + 1),
                conditions,
                actions,
                sequence_index,
            }
        })
        .collect()
}
