//! Integration tests for Kisoku
//!
//! End-to-end tests that take a BPMN 2.0 XML document through parsing,
//! conversion and every export surface.
//!
mod common;
use common::*;
use kisoku::prelude::*;
use std::fs;

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn test_bpmn_xml_to_rules_end_to_end() {
        let model = BpmnModel::from_xml(MARKING_BPMN_XML).expect("Failed to parse BPMN XML");
        assert_eq!(model.process_id(), "Process_Marking");

        let process = model.into_process().expect("Failed to convert model");
        assert_eq!(process.elements.len(), 5);
        assert_eq!(process.flows.len(), 5);

        let rule_set = Converter::builder(process)
            .build()
            .convert()
            .expect("Failed to convert process");

        assert_eq!(rule_set.len(), 2);
        println!("Converted {} rules", rule_set.len());
        for rule in &rule_set.rules {
            println!(
                "  - {} ({} conditions, {} obligations)",
                rule.rid,
                rule.conditions.len(),
                rule.actions.len()
            );
        }

        // the gateway declares Yes before No, so r1 is the marking branch
        let r1 = &rule_set.rules[0];
        assert_eq!(r1.conditions.len(), 1);
        assert_eq!(r1.conditions[0].actor, "AIsystem");
        assert_eq!(r1.conditions[0].predicate, "generatesSyntheticContent");
        assert!(r1.conditions[0].value);
        assert_eq!(r1.actions.len(), 1);
        assert_eq!(r1.actions[0].actor, "AIprovider");
        assert_eq!(r1.actions[0].name, "hasMarkingObligation");

        let r2 = &rule_set.rules[1];
        assert!(!r2.conditions[0].value);
        assert_eq!(r2.actions[0].name, "noObligation");
    }

    #[test]
    fn test_declared_outgoing_order_beats_document_order() {
        let process = parse_bpmn(MARKING_BPMN_XML).expect("Failed to parse BPMN XML");

        // the document lists f_no before f_yes; the gateway's <outgoing>
        // children declare f_yes first and that order must win
        let yes_pos = process.flows.iter().position(|f| f.id == "f_yes");
        let no_pos = process.flows.iter().position(|f| f.id == "f_no");
        assert!(yes_pos.expect("f_yes parsed") < no_pos.expect("f_no parsed"));
    }

    #[test]
    fn test_task_flavors_fold_into_plain_tasks() {
        let process = parse_bpmn(MARKING_BPMN_XML).expect("Failed to parse BPMN XML");

        let mark = process
            .elements
            .iter()
            .find(|e| e.id == "task_mark")
            .expect("userTask parsed");
        assert_eq!(mark.kind, ElementKind::Task);
        assert_eq!(mark.label.as_deref(), Some("AIprovider hasMarkingObligation"));

        let none = process
            .elements
            .iter()
            .find(|e| e.id == "task_none")
            .expect("task parsed");
        assert_eq!(none.kind, ElementKind::Task);
    }

    #[test]
    fn test_custom_settings_flow_into_every_export() {
        let process = parse_bpmn(MARKING_BPMN_XML).expect("Failed to parse BPMN XML");
        let rule_set = Converter::builder(process)
            .with_base_iri("http://example.org/aiact")
            .with_task_predicate("obligation")
            .build()
            .convert()
            .expect("Failed to convert process");

        let owl = SwrlExporter::export(&rule_set);
        assert!(owl.contains("<swrl:Imp rdf:about=\"http://example.org/aiact#r1\">"));
        assert!(owl.contains("<owl:DatatypeProperty rdf:about=\"http://example.org/aiact#obligation\"/>"));

        let jena = JenaExporter::export(&rule_set);
        assert!(jena.contains("@prefix rules: <http://example.org/aiact#> ."));
        assert!(jena.contains("rules:obligation 'hasMarkingObligation'"));

        let prolog = PrologExporter::export(&rule_set);
        assert!(prolog.contains("obligation(AIprovider, 'hasMarkingObligation')"));
    }

    #[test]
    fn test_rule_set_artifact_roundtrip() {
        let test_dir = std::env::temp_dir().join("kisoku_integration_artifact");

        // Create a temporary directory for this test
        fs::create_dir_all(&test_dir).expect("Failed to create test directory");
        let artifact_path = test_dir.join("rules.bin");
        let artifact_path = artifact_path.to_str().expect("Path is valid UTF-8");

        let process = parse_bpmn(MARKING_BPMN_XML).expect("Failed to parse BPMN XML");
        let rule_set = Converter::builder(process)
            .build()
            .convert()
            .expect("Failed to convert process");

        rule_set.save(artifact_path).expect("Failed to save artifact");
        let loaded = RuleSet::from_file(artifact_path).expect("Failed to load artifact");

        assert_eq!(loaded.rules, rule_set.rules);
        assert_eq!(loaded.superiority, rule_set.superiority);
        assert_eq!(loaded.base_iri, rule_set.base_iri);
        assert_eq!(loaded.task_predicate, rule_set.task_predicate);
        println!("Artifact roundtrip preserved {} rules", loaded.len());

        // Clean up
        let _ = fs::remove_dir_all(&test_dir);
    }

    #[test]
    fn test_conversion_report_lists_graph_paths_and_rules() {
        let process = parse_bpmn(MARKING_BPMN_XML).expect("Failed to parse BPMN XML");
        let graph = kisoku::converter::reduce(&process).expect("Failed to reduce process");
        let paths =
            kisoku::converter::enumerate_paths(&graph).expect("Failed to enumerate paths");
        let rules = kisoku::converter::build_rules(&paths);
        let rule_set = RuleSet::new(
            rules,
            "http://example.org/bpmn2rules".to_string(),
            "task".to_string(),
        );

        let report = ConversionReport::render(&graph, &paths, &rule_set);
        assert!(report.contains("=== REDUCED NODES ==="));
        assert!(report.contains("=== REDUCED EDGES ==="));
        assert!(report.contains("=== START → END PATHS (2) ==="));
        assert!(report.contains("exclusiveGateway"));
        assert!(report.contains("% RULES"));
        assert!(report.contains("% SUPERIORITY"));
        println!("Report:\n{}", report);
    }

    #[test]
    fn test_conversion_is_deterministic() {
        let run = || {
            let process = parse_bpmn(MARKING_BPMN_XML).expect("Failed to parse BPMN XML");
            let rule_set = Converter::builder(process)
                .build()
                .convert()
                .expect("Failed to convert process");
            DdlExporter::export(&rule_set)
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn test_convert_function_returns_bare_rules() {
        let process = parse_bpmn(MARKING_BPMN_XML).expect("Failed to parse BPMN XML");
        let rules = convert(&process).expect("Failed to convert process");
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].rid, "r1");
    }

    #[test]
    fn test_error_handling_integration() {
        // Not XML at all
        let result = BpmnModel::from_xml("this is not xml");
        assert!(result.is_err());
        if let Err(error) = result {
            println!("Correctly rejected malformed XML: {}", error);
        }

        // Valid XML without any process
        let empty = r#"<?xml version="1.0" encoding="UTF-8"?>
<bpmn:definitions xmlns:bpmn="http://www.omg.org/spec/BPMN/20100524/MODEL" id="Definitions_1">
</bpmn:definitions>
"#;
        let result = BpmnModel::from_xml(empty);
        assert!(matches!(result, Err(BpmnImportError::NoProcess)));

        // A structurally broken diagram surfaces a conversion error
        let mut process = marking_process();
        process.elements.remove(0);
        process.flows.remove(0);
        let result = Converter::builder(process).build().convert();
        assert!(matches!(
            result,
            Err(ConvertError::Structural(StructuralError::MissingStart))
        ));
    }

    #[test]
    fn test_prelude_import_completeness() {
        // Verify that the prelude exports work correctly
        let _converter: Option<Converter> = None;
        let _rule_set: Option<RuleSet> = None;
        let _graph: Option<ReducedGraph> = None;
        let _rule: Option<RuleIR> = None;
        let _hashmap: AHashMap<String, usize> = AHashMap::new();

        // Test Result alias
        let _result: Result<String> = Ok("test".to_string());

        println!("All prelude types are accessible");
    }
}
