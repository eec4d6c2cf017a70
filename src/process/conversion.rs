use super::definition::ProcessDefinition;
use crate::error::ProcessConversionError;

/// A trait for custom diagram models that can be converted into a kisoku `ProcessDefinition`.
///
/// This is the primary extension point for making kisoku format-agnostic. The bundled
/// BPMN 2.0 XML importer goes through this trait, and by implementing it on your own
/// diagram structs you provide a translation layer that lets the converter process any
/// element/flow shaped model.
///
/// # Example
///
/// ```rust,no_run
/// use kisoku::prelude::*;
/// use kisoku::error::ProcessConversionError;
///
/// // 1. Define your custom structs for parsing your format.
/// struct MyCustomElement { id: String, kind: String, name: String }
/// struct MyCustomDiagram { elements: Vec<MyCustomElement> }
///
/// // 2. Implement `IntoProcess` for your top-level struct.
/// impl IntoProcess for MyCustomDiagram {
///     fn into_process(self) -> std::result::Result<ProcessDefinition, ProcessConversionError> {
///         let mut elements = Vec::new();
///         for element in self.elements {
///             // Your logic to map your element taxonomy onto `ElementKind`
///             let kind = match element.kind.as_str() {
///                 "startEvent" => ElementKind::Start,
///                 "endEvent" => ElementKind::End,
///                 "exclusiveGateway" => ElementKind::ExclusiveGateway,
///                 "parallelGateway" => ElementKind::ParallelGateway,
///                 _ => ElementKind::Task,
///             };
///             elements.push(ElementDefinition {
///                 id: element.id,
///                 kind,
///                 label: Some(element.name),
///             });
///         }
///
///         Ok(ProcessDefinition {
///             elements,
///             flows: vec![], // Convert your sequence flows here as well
///         })
///     }
/// }
/// ```
pub trait IntoProcess {
    /// Consumes the object and converts it into a kisoku-compatible process definition.
    fn into_process(self) -> Result<ProcessDefinition, ProcessConversionError>;
}
