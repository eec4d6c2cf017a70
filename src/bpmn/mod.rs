//! BPMN 2.0 XML import.
//!
//! Deserializes a `.bpmn` document (Camunda Modeler style) and converts the
//! first `<process>` into the canonical [`ProcessDefinition`]. Task flavors
//! (user task, service task, ...) all fold into [`ElementKind::Task`];
//! everything the conversion does not consume (pools, lanes, diagram
//! interchange) is skipped by the deserializer.

mod types;

use crate::error::{BpmnImportError, ProcessConversionError};
use crate::process::{ElementDefinition, ElementKind, FlowDefinition, IntoProcess, ProcessDefinition};
use ahash::AHashMap;
use types::{BpmnProcess, BpmnXml};

/// A parsed BPMN document, holding the first process of the file.
#[derive(Debug)]
pub struct BpmnModel {
    process: BpmnProcess,
}

impl BpmnModel {
    /// Parses a BPMN 2.0 XML string.
    pub fn from_xml(xml: &str) -> Result<Self, BpmnImportError> {
        let doc: BpmnXml = quick_xml::de::from_str(xml)
            .map_err(|e| BpmnImportError::XmlParseError(e.to_string()))?;
        let process = doc
            .processes
            .into_iter()
            .next()
            .ok_or(BpmnImportError::NoProcess)?;
        Ok(Self { process })
    }

    /// Id of the process this model was built from.
    pub fn process_id(&self) -> &str {
        &self.process.id
    }
}

impl IntoProcess for BpmnModel {
    fn into_process(self) -> Result<ProcessDefinition, ProcessConversionError> {
        Ok(definition_from(self.process))
    }
}

/// Parses a BPMN 2.0 XML string straight into a [`ProcessDefinition`].
pub fn parse_bpmn(xml: &str) -> Result<ProcessDefinition, BpmnImportError> {
    let model = BpmnModel::from_xml(xml)?;
    Ok(model.into_process()?)
}

fn definition_from(process: BpmnProcess) -> ProcessDefinition {
    let mut elements = Vec::new();
    // Element id -> its <outgoing> flow ids in XML child order. This is the
    // diagram's declared branch order for gateways.
    let mut declared: AHashMap<String, Vec<String>> = AHashMap::new();

    macro_rules! fold {
        ($list:expr, $kind:expr) => {
            for element in $list {
                declared.insert(element.id.clone(), element.outgoing);
                elements.push(ElementDefinition {
                    id: element.id,
                    kind: $kind,
                    label: element.name,
                });
            }
        };
    }

    fold!(process.start_events, ElementKind::Start);
    fold!(process.end_events, ElementKind::End);
    fold!(process.tasks, ElementKind::Task);
    fold!(process.send_tasks, ElementKind::Task);
    fold!(process.receive_tasks, ElementKind::Task);
    fold!(process.user_tasks, ElementKind::Task);
    fold!(process.service_tasks, ElementKind::Task);
    fold!(process.manual_tasks, ElementKind::Task);
    fold!(process.business_rule_tasks, ElementKind::Task);
    fold!(process.script_tasks, ElementKind::Task);
    fold!(process.exclusive_gateways, ElementKind::ExclusiveGateway);
    fold!(process.parallel_gateways, ElementKind::ParallelGateway);

    // Sibling flow order in the definition is positional, so sort the flows
    // to match each source element's declared order. Flows the source does
    // not list keep their document order, after any declared ones.
    let mut keyed: Vec<((u8, usize), FlowDefinition)> = process
        .sequence_flows
        .into_iter()
        .enumerate()
        .map(|(doc_idx, flow)| {
            let key = declared
                .get(&flow.source_ref)
                .and_then(|ids| ids.iter().position(|fid| *fid == flow.id))
                .map_or((1, doc_idx), |pos| (0, pos));
            let flow = FlowDefinition {
                id: flow.id,
                source: flow.source_ref,
                target: flow.target_ref,
                label: flow.name,
            };
            (key, flow)
        })
        .collect();
    keyed.sort_by_key(|(key, _)| *key);

    ProcessDefinition {
        elements,
        flows: keyed.into_iter().map(|(_, flow)| flow).collect(),
    }
}
