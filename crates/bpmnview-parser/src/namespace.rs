//! Namespace handling.
//!
//! BPMN files bind the standard namespaces to whatever prefixes the modeler
//! chose (`semantic:`, `bpmn2:`, the default namespace, ...). Element type
//! names are normalised here to the canonical prefixes so the rest of the
//! pipeline can match on `bpmn:Task` or `bpmndi:BPMNShape` directly.
//!
//! The model schema serialises its types in lower camel case (`<bpmn:task>`,
//! `<bpmn:startEvent>`); the type names are the upper camel case form
//! (`bpmn:Task`, `bpmn:StartEvent`).

use roxmltree::Node;

/// BPMN 2.0 semantic model.
pub const MODEL_NS: &str = "http://www.omg.org/spec/BPMN/20100524/MODEL";
/// BPMN diagram interchange.
pub const BPMN_DI_NS: &str = "http://www.omg.org/spec/BPMN/20100524/DI";
/// Diagram definition common types (`Bounds`, `Point`).
pub const DC_NS: &str = "http://www.omg.org/spec/DD/20100524/DC";
/// Diagram definition interchange (`waypoint`).
pub const DI_NS: &str = "http://www.omg.org/spec/DD/20100524/DI";

/// Returns the canonical prefix for one of the standard BPMN namespaces.
pub fn canonical_prefix(uri: &str) -> Option<&'static str> {
    match uri {
        MODEL_NS => Some("bpmn"),
        BPMN_DI_NS => Some("bpmndi"),
        DC_NS => Some("dc"),
        DI_NS => Some("di"),
        _ => None,
    }
}

/// Returns the element's type name, e.g. `bpmn:Task` for `<bpmn:task>`.
///
/// Standard namespaces use their canonical prefix, and model elements get
/// their type name's leading capital. Other namespaces keep the prefix the
/// document bound them to; unqualified elements keep their bare local name.
pub fn qualified_name(node: Node<'_, '_>) -> String {
    let tag = node.tag_name();
    let local = if tag.namespace() == Some(MODEL_NS) {
        capitalize(tag.name())
    } else {
        tag.name().to_string()
    };

    let prefix = match tag.namespace() {
        Some(uri) => match canonical_prefix(uri) {
            Some(canonical) => Some(canonical),
            None => node.lookup_prefix(uri),
        },
        None => None,
    };

    match prefix {
        Some(prefix) if !prefix.is_empty() => format!("{prefix}:{local}"),
        _ => local,
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Checks whether `node` is the element `local` in namespace `uri`.
pub fn is_element(node: Node<'_, '_>, uri: &str, local: &str) -> bool {
    node.is_element() && node.tag_name().namespace() == Some(uri) && node.tag_name().name() == local
}
