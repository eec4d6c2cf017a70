//! Unit tests for core kisoku functionality.
mod common;
use kisoku::error::{CycleError, LabelFormatError, StructuralError};
use kisoku::export::to_symbol;
use kisoku::prelude::*;

#[test]
fn test_phrase_split_basic() {
    let phrase = Phrase::split("t1", "AIprovider hasMarkingObligation").unwrap();
    assert_eq!(phrase.actor, "AIprovider");
    assert_eq!(phrase.text, "hasMarkingObligation");
}

#[test]
fn test_phrase_split_strips_trailing_question_mark() {
    let phrase = Phrase::split("gw1", "AIsystem generatesSyntheticContent?").unwrap();
    assert_eq!(phrase.actor, "AIsystem");
    assert_eq!(phrase.text, "generatesSyntheticContent");
}

#[test]
fn test_phrase_split_joins_remainder_without_spaces() {
    let phrase = Phrase::split("t1", "AIsystem informs the user").unwrap();
    assert_eq!(phrase.actor, "AIsystem");
    assert_eq!(phrase.text, "informstheuser");
}

#[test]
fn test_phrase_split_trims_surrounding_whitespace() {
    let phrase = Phrase::split("t1", "  Provider  registersSystem  ").unwrap();
    assert_eq!(phrase.actor, "Provider");
    assert_eq!(phrase.text, "registersSystem");
}

#[test]
fn test_phrase_split_rejects_single_token() {
    let err = Phrase::split("gw1", "Decide?").unwrap_err();
    assert!(matches!(
        err,
        LabelFormatError::Unsplittable { ref element_id, .. } if element_id == "gw1"
    ));
    assert!(err.to_string().contains("Decide?"));
}

#[test]
fn test_phrase_split_rejects_blank_label() {
    let err = Phrase::split("t9", "   ").unwrap_err();
    assert!(matches!(
        err,
        LabelFormatError::Missing { ref element_id } if element_id == "t9"
    ));
}

#[test]
fn test_guard_parse() {
    assert_eq!(Guard::parse("Yes"), Some(Guard::Yes));
    assert_eq!(Guard::parse("No"), Some(Guard::No));
    assert_eq!(Guard::parse("  Yes "), Some(Guard::Yes));
    assert_eq!(Guard::parse("yes"), None);
    assert_eq!(Guard::parse("Maybe"), None);
    assert_eq!(Guard::parse(""), None);
}

#[test]
fn test_guard_as_bool_and_display() {
    assert!(Guard::Yes.as_bool());
    assert!(!Guard::No.as_bool());
    assert_eq!(format!("{}", Guard::Yes), "Yes");
    assert_eq!(format!("{}", Guard::No), "No");
}

#[test]
fn test_node_kind_display() {
    assert_eq!(format!("{}", NodeKind::Start), "startEvent");
    assert_eq!(format!("{}", NodeKind::End), "endEvent");
    assert_eq!(format!("{}", NodeKind::ExclusiveChoice), "exclusiveGateway");
}

#[test]
fn test_to_symbol() {
    assert_eq!(to_symbol("AIprovider hasMarkingObligation"), "AIprovider_hasMarkingObligation");
    assert_eq!(to_symbol("  spaced   out  "), "spaced_out");
    assert_eq!(to_symbol("keep_under-scores!"), "keep_underscores");
    assert_eq!(to_symbol("???"), "unnamed");
    assert_eq!(to_symbol(""), "unnamed");
}

#[test]
fn test_display_rule_formats_implication() {
    let rule = RuleIR {
        rid: "r1".to_string(),
        conditions: vec![
            Condition {
                actor: "AIsystem".to_string(),
                predicate: "generatesSyntheticContent".to_string(),
                value: true,
            },
            Condition {
                actor: "Provider".to_string(),
                predicate: "sellsInUnion".to_string(),
                value: false,
            },
        ],
        actions: vec![Action {
            actor: "AIprovider".to_string(),
            name: "hasMarkingObligation".to_string(),
        }],
        sequence_index: 0,
    };
    let text = format!(
        "{}",
        DisplayRule {
            rule: &rule,
            task_predicate: "task",
        }
    );
    assert_eq!(
        text,
        "generatesSyntheticContent(?AIsystem, true) ^ sellsInUnion(?Provider, false) -> task(?AIprovider, \"hasMarkingObligation\")"
    );
}

#[test]
fn test_display_rule_unconditional_body_is_true() {
    let rule = RuleIR {
        rid: "r1".to_string(),
        conditions: vec![],
        actions: vec![Action {
            actor: "AIprovider".to_string(),
            name: "registersSystem".to_string(),
        }],
        sequence_index: 0,
    };
    let text = format!(
        "{}",
        DisplayRule {
            rule: &rule,
            task_predicate: "task",
        }
    );
    assert_eq!(text, "true -> task(?AIprovider, \"registersSystem\")");
    assert!(rule.is_unconditional());
}

#[test]
fn test_error_display() {
    let err = StructuralError::InvalidGuard {
        gateway_id: "gw1".to_string(),
        flow_id: "f2".to_string(),
        label: Some("Maybe".to_string()),
    };
    assert!(err.to_string().contains("gw1"));
    assert!(err.to_string().contains("f2"));
    assert!(err.to_string().contains("Maybe"));

    let cycle_err = CycleError::Revisited {
        node_id: "gw1".to_string(),
    };
    assert!(cycle_err.to_string().contains("gw1"));
    assert!(cycle_err.to_string().contains("twice"));

    let structural = StructuralError::DuplicateStart { count: 3 };
    assert!(structural.to_string().contains('3'));
}
