use indexmap::IndexMap;

use super::node::Node;
use crate::error::UpdateError;

/// Returns the members of `section`, appending it as an empty object when the
/// document does not have it yet.
pub fn ensure_section<'a>(
    document: &'a mut Node,
    section: &str,
) -> Result<&'a mut IndexMap<String, Node>, UpdateError> {
    let kind = document.kind();
    let Node::Object(sections) = document else {
        return Err(UpdateError::DocumentNotAnObject { kind });
    };

    match sections.entry(section.to_string()).or_insert_with(Node::object) {
        Node::Object(entries) => Ok(entries),
        other => Err(UpdateError::SectionNotAnObject {
            section: section.to_string(),
            kind: other.kind(),
        }),
    }
}

/// Sets `key` to the string `value`. An existing key keeps its position.
pub fn set_entry(entries: &mut IndexMap<String, Node>, key: &str, value: &str) -> Option<Node> {
    entries.insert(key.to_string(), Node::from(value.to_string()))
}
