use serde::Deserialize;

/// Every flavor of flow node carries the same three things we care about:
/// its id, an optional label and the declared order of its outgoing flows.
/// This macro generates the structs for them.
///
/// The `alias` attributes accept documents that keep the `bpmn:` prefix
/// (Camunda exports) as well as documents using a default namespace.
macro_rules! def_bpmn_struct {
    ($($name:ident),* $(,)?) => {$(
        #[derive(Debug, Deserialize)]
        pub(crate) struct $name {
            #[serde(rename = "@id")]
            pub(crate) id: String,
            #[serde(rename = "@name")]
            pub(crate) name: Option<String>,
            #[serde(rename = "outgoing", alias = "bpmn:outgoing", default)]
            pub(crate) outgoing: Vec<String>,
        }
    )*};
}

def_bpmn_struct!(
    StartEvent,
    EndEvent,
    Task,
    SendTask,
    ReceiveTask,
    UserTask,
    ServiceTask,
    ManualTask,
    BusinessRuleTask,
    ScriptTask,
    ExclusiveGateway,
    ParallelGateway,
);

/// A sequence flow connects a source element to a target element. The
/// label, when present, carries the guard of a gateway branch.
#[derive(Debug, Deserialize)]
pub(crate) struct SequenceFlow {
    #[serde(rename = "@id")]
    pub(crate) id: String,
    #[serde(rename = "@name")]
    pub(crate) name: Option<String>,
    #[serde(rename = "@sourceRef")]
    pub(crate) source_ref: String,
    #[serde(rename = "@targetRef")]
    pub(crate) target_ref: String,
}

/// A BPMN process: the flow nodes grouped by tag, plus the sequence flows
/// in document order.
#[derive(Debug, Deserialize)]
pub(crate) struct BpmnProcess {
    #[serde(rename = "@id")]
    pub(crate) id: String,
    #[serde(rename = "startEvent", alias = "bpmn:startEvent", default)]
    pub(crate) start_events: Vec<StartEvent>,
    #[serde(rename = "endEvent", alias = "bpmn:endEvent", default)]
    pub(crate) end_events: Vec<EndEvent>,
    #[serde(rename = "task", alias = "bpmn:task", default)]
    pub(crate) tasks: Vec<Task>,
    #[serde(rename = "sendTask", alias = "bpmn:sendTask", default)]
    pub(crate) send_tasks: Vec<SendTask>,
    #[serde(rename = "receiveTask", alias = "bpmn:receiveTask", default)]
    pub(crate) receive_tasks: Vec<ReceiveTask>,
    #[serde(rename = "userTask", alias = "bpmn:userTask", default)]
    pub(crate) user_tasks: Vec<UserTask>,
    #[serde(rename = "serviceTask", alias = "bpmn:serviceTask", default)]
    pub(crate) service_tasks: Vec<ServiceTask>,
    #[serde(rename = "manualTask", alias = "bpmn:manualTask", default)]
    pub(crate) manual_tasks: Vec<ManualTask>,
    #[serde(rename = "businessRuleTask", alias = "bpmn:businessRuleTask", default)]
    pub(crate) business_rule_tasks: Vec<BusinessRuleTask>,
    #[serde(rename = "scriptTask", alias = "bpmn:scriptTask", default)]
    pub(crate) script_tasks: Vec<ScriptTask>,
    #[serde(rename = "exclusiveGateway", alias = "bpmn:exclusiveGateway", default)]
    pub(crate) exclusive_gateways: Vec<ExclusiveGateway>,
    #[serde(rename = "parallelGateway", alias = "bpmn:parallelGateway", default)]
    pub(crate) parallel_gateways: Vec<ParallelGateway>,
    #[serde(rename = "sequenceFlow", alias = "bpmn:sequenceFlow", default)]
    pub(crate) sequence_flows: Vec<SequenceFlow>,
}

/// The root `<definitions>` element of a BPMN 2.0 XML file.
#[derive(Debug, Deserialize)]
pub(crate) struct BpmnXml {
    #[serde(rename = "process", alias = "bpmn:process", default)]
    pub(crate) processes: Vec<BpmnProcess>,
}
