//! Write generated entity sources to disk

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::EntityGenError;
use crate::model::EntityModel;

use super::render_entity;

/// UTF-8 byte order mark; Visual Studio tooling expects it on C# sources
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Render an entity and write it under `project_root`.
///
/// Missing directories are created. An existing file is overwritten.
/// Returns the absolute path written.
pub fn write_entity_file(project_root: &Path, entity: &EntityModel) -> Result<PathBuf, EntityGenError> {
    let full_path = project_root.join(entity.file_path());
    let content = render_entity(entity);
    write_with_bom(&full_path, &content)?;
    Ok(full_path)
}

fn write_with_bom(path: &Path, content: &str) -> Result<(), EntityGenError> {
    let write_error = |source| EntityGenError::EntityWriteError {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(write_error)?;
    }

    let mut bytes = Vec::with_capacity(UTF8_BOM.len() + content.len());
    bytes.extend_from_slice(UTF8_BOM);
    bytes.extend_from_slice(content.as_bytes());
    fs::write(path, bytes).map_err(write_error)
}
