//! Common test utilities for building process definitions and diagrams.
use kisoku::prelude::*;

/// Shorthand for an element definition.
#[allow(dead_code)]
pub fn element(id: &str, kind: ElementKind, label: Option<&str>) -> ElementDefinition {
    ElementDefinition {
        id: id.to_string(),
        kind,
        label: label.map(str::to_string),
    }
}

/// Shorthand for a sequence flow definition.
#[allow(dead_code)]
pub fn flow(id: &str, source: &str, target: &str, label: Option<&str>) -> FlowDefinition {
    FlowDefinition {
        id: id.to_string(),
        source: source.to_string(),
        target: target.to_string(),
        label: label.map(str::to_string),
    }
}

/// The marking scenario: one decision with a Yes and a No branch.
///
/// ```text
/// start -> gw1 "AIsystem generatesSyntheticContent?"
///   [Yes] -> task_mark "AIprovider hasMarkingObligation" -> end
///   [No]  -> task_none "AIprovider noObligation"         -> end
/// ```
#[allow(dead_code)]
pub fn marking_process() -> ProcessDefinition {
    ProcessDefinition {
        elements: vec![
            element("start", ElementKind::Start, None),
            element(
                "gw1",
                ElementKind::ExclusiveGateway,
                Some("AIsystem generatesSyntheticContent?"),
            ),
            element(
                "task_mark",
                ElementKind::Task,
                Some("AIprovider hasMarkingObligation"),
            ),
            element(
                "task_none",
                ElementKind::Task,
                Some("AIprovider noObligation"),
            ),
            element("end", ElementKind::End, None),
        ],
        flows: vec![
            flow("f1", "start", "gw1", None),
            flow("f2", "gw1", "task_mark", Some("Yes")),
            flow("f3", "gw1", "task_none", Some("No")),
            flow("f4", "task_mark", "end", None),
            flow("f5", "task_none", "end", None),
        ],
    }
}

/// A diagram without any decision: one task between start and end.
///
/// ```text
/// start -> task_reg "AIprovider registersSystem" -> end
/// ```
#[allow(dead_code)]
pub fn unconditional_process() -> ProcessDefinition {
    ProcessDefinition {
        elements: vec![
            element("start", ElementKind::Start, None),
            element(
                "task_reg",
                ElementKind::Task,
                Some("AIprovider registersSystem"),
            ),
            element("end", ElementKind::End, None),
        ],
        flows: vec![
            flow("f1", "start", "task_reg", None),
            flow("f2", "task_reg", "end", None),
        ],
    }
}

/// Two nested decisions; the inner No branch carries no task at all.
///
/// ```text
/// start -> gw1 "Provider sellsInUnion?"
///   [Yes] -> gw2 "AIsystem generatesSyntheticContent?"
///             [Yes] -> t1 "AIprovider hasMarkingObligation" -> end
///             [No]  -> end
///   [No]  -> t2 "Provider documentsExemption" -> end
/// ```
#[allow(dead_code)]
pub fn nested_process() -> ProcessDefinition {
    ProcessDefinition {
        elements: vec![
            element("start", ElementKind::Start, None),
            element("gw1", ElementKind::ExclusiveGateway, Some("Provider sellsInUnion?")),
            element(
                "gw2",
                ElementKind::ExclusiveGateway,
                Some("AIsystem generatesSyntheticContent?"),
            ),
            element(
                "t1",
                ElementKind::Task,
                Some("AIprovider hasMarkingObligation"),
            ),
            element("t2", ElementKind::Task, Some("Provider documentsExemption")),
            element("end", ElementKind::End, None),
        ],
        flows: vec![
            flow("f1", "start", "gw1", None),
            flow("f2", "gw1", "gw2", Some("Yes")),
            flow("f3", "gw1", "t2", Some("No")),
            flow("f4", "gw2", "t1", Some("Yes")),
            flow("f5", "gw2", "end", Some("No")),
            flow("f6", "t1", "end", None),
            flow("f7", "t2", "end", None),
        ],
    }
}

/// A balanced parallel block between start and end.
///
/// ```text
/// start -> fork ==> tA "Provider documentsSystem" ==> join -> end
///               ==> tB "Provider registersSystem" ==>
/// ```
#[allow(dead_code)]
pub fn parallel_process() -> ProcessDefinition {
    ProcessDefinition {
        elements: vec![
            element("start", ElementKind::Start, None),
            element("fork", ElementKind::ParallelGateway, None),
            element("tA", ElementKind::Task, Some("Provider documentsSystem")),
            element("tB", ElementKind::Task, Some("Provider registersSystem")),
            element("join", ElementKind::ParallelGateway, None),
            element("end", ElementKind::End, None),
        ],
        flows: vec![
            flow("f1", "start", "fork", None),
            flow("f2", "fork", "tA", None),
            flow("f3", "fork", "tB", None),
            flow("f4", "tA", "join", None),
            flow("f5", "tB", "join", None),
            flow("f6", "join", "end", None),
        ],
    }
}

/// A retry loop: the Yes branch walks back into the gateway.
///
/// ```text
/// start -> gw1 "User retriesProcess?"
///   [Yes] -> t1 "User resubmitsForm" -> gw1
///   [No]  -> end
/// ```
#[allow(dead_code)]
pub fn cyclic_process() -> ProcessDefinition {
    ProcessDefinition {
        elements: vec![
            element("start", ElementKind::Start, None),
            element("gw1", ElementKind::ExclusiveGateway, Some("User retriesProcess?")),
            element("t1", ElementKind::Task, Some("User resubmitsForm")),
            element("end", ElementKind::End, None),
        ],
        flows: vec![
            flow("f1", "start", "gw1", None),
            flow("f2", "gw1", "t1", Some("Yes")),
            flow("f3", "t1", "gw1", None),
            flow("f4", "gw1", "end", Some("No")),
        ],
    }
}

/// The marking scenario as Camunda-style BPMN 2.0 XML.
///
/// The sequence flows are deliberately NOT in branch order in the document;
/// the gateway's `<bpmn:outgoing>` children declare Yes before No, which is
/// the order that must win. The `<bpmn:incoming>` children exist only to be
/// skipped.
#[allow(dead_code)]
pub const MARKING_BPMN_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<bpmn:definitions xmlns:bpmn="http://www.omg.org/spec/BPMN/20100524/MODEL" id="Definitions_1">
  <bpmn:process id="Process_Marking" isExecutable="false">
    <bpmn:startEvent id="start">
      <bpmn:outgoing>f1</bpmn:outgoing>
    </bpmn:startEvent>
    <bpmn:exclusiveGateway id="gw1" name="AIsystem generatesSyntheticContent?">
      <bpmn:incoming>f1</bpmn:incoming>
      <bpmn:outgoing>f_yes</bpmn:outgoing>
      <bpmn:outgoing>f_no</bpmn:outgoing>
    </bpmn:exclusiveGateway>
    <bpmn:userTask id="task_mark" name="AIprovider hasMarkingObligation">
      <bpmn:incoming>f_yes</bpmn:incoming>
      <bpmn:outgoing>f3</bpmn:outgoing>
    </bpmn:userTask>
    <bpmn:task id="task_none" name="AIprovider noObligation">
      <bpmn:incoming>f_no</bpmn:incoming>
      <bpmn:outgoing>f4</bpmn:outgoing>
    </bpmn:task>
    <bpmn:endEvent id="end">
      <bpmn:incoming>f3</bpmn:incoming>
      <bpmn:incoming>f4</bpmn:incoming>
    </bpmn:endEvent>
    <bpmn:sequenceFlow id="f1" sourceRef="start" targetRef="gw1" />
    <bpmn:sequenceFlow id="f_no" name="No" sourceRef="gw1" targetRef="task_none" />
    <bpmn:sequenceFlow id="f_yes" name="Yes" sourceRef="gw1" targetRef="task_mark" />
    <bpmn:sequenceFlow id="f3" sourceRef="task_mark" targetRef="end" />
    <bpmn:sequenceFlow id="f4" sourceRef="task_none" targetRef="end" />
  </bpmn:process>
</bpmn:definitions>
"#;
