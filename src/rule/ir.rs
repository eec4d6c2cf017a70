use serde::{Deserialize, Serialize};

/// One boolean guard of a rule: `predicate(?actor, value)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    pub actor: String,
    pub predicate: String,
    pub value: bool,
}

/// One obligation of a rule: the named task `actor` must perform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub actor: String,
    pub name: String,
}

/// A binary atom connecting two actors, `predicate(?subject, ?object)`.
///
/// Synthesized by the executable closure to bind consequent-only actors;
/// never produced by the rule builder itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationAtom {
    pub predicate: String,
    pub subject: String,
    pub object: String,
}

/// One immutable rule: a conjunction of conditions implying a set of
/// obligations.
///
/// `rid` is `"r"` followed by the one-based path number; `sequence_index`
/// is the same position zero-based, kept numeric so callers can order
/// rules without parsing ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleIR {
    pub rid: String,
    pub conditions: Vec<Condition>,
    pub actions: Vec<Action>,
    pub sequence_index: usize,
}

impl RuleIR {
    /// An empty condition list means the rule fires unconditionally.
    pub fn is_unconditional(&self) -> bool {
        self.conditions.is_empty()
    }
}
