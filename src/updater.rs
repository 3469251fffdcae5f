use std::{fs::File, path::Path};

use byte_unit::Byte;
use tracing::{debug, info};

use crate::{
    app::config::Config,
    container::{
        node::Node,
        section::{ensure_section, set_entry},
    },
    error::{LoadError, UpdateError},
};

/// Sets `document[section][key] = value` in the JSON file at `file_path`,
/// creating the section when missing, and rewrites the whole file.
///
/// The document is formatted before the file is reopened for writing, so load,
/// type and formatting errors leave the file as it was. The write itself is a
/// plain truncate-and-rewrite.
pub fn update(
    file_path: &Path,
    section: &str,
    key: &str,
    value: &str,
    config: &Config,
) -> Result<(), UpdateError> {
    let mut document = load(file_path, config.max_file_size)?;

    let entries = ensure_section(&mut document, section)?;
    match set_entry(entries, key, value) {
        Some(previous) => debug!(section, key, previous = previous.kind(), "overwrote entry"),
        None => debug!(section, key, "added entry"),
    }

    let content = document.to_string_pretty(config.indent)?;
    std::fs::write(file_path, &content).map_err(UpdateError::Write)?;
    info!(path = %file_path.display(), bytes = content.len(), "document written");

    Ok(())
}

fn load(file_path: &Path, limit: Option<Byte>) -> Result<Node, LoadError> {
    let file = File::open(file_path)?;
    let size = Byte::from_u64(file.metadata()?.len());
    if let Some(limit) = limit.filter(|limit| size.as_u64() > limit.as_u64()) {
        return Err(LoadError::FileTooLarge { size, limit });
    }

    debug!(path = %file_path.display(), bytes = size.as_u64(), "loading document");
    Node::load(file)
}
