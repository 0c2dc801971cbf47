//! entity-generator: EF Core entity classes from an Excel table-definition workbook
//!
//! Each worksheet describes one table. Its title carries the folder, module
//! and description (`Bga_Material(料件項目)`), and its rows list the columns.
//! The library turns every worksheet into an [`model::EntityModel`], then
//! either renders C# entity sources or exports the models as JSON.

pub mod codegen;
pub mod error;
pub mod export;
pub mod model;
pub mod parser;
pub mod util;
pub mod workbook;

use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::{debug, info, warn};

pub use error::EntityGenError;

use model::{EntityCatalog, EntityModel};
use workbook::Workbook;

/// Options for generating entity source files
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Path to the table-definition workbook
    pub workbook_path: PathBuf,
    /// Solution root; sources go under `NET_Core_API/Entity_Model/Entity`
    pub project_root: PathBuf,
}

/// Options for exporting the schema as JSON
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Path to the table-definition workbook
    pub workbook_path: PathBuf,
    /// Write JSON here instead of returning it for stdout
    pub output_path: Option<PathBuf>,
}

/// Summary of a generation run
#[derive(Debug, Clone, Default)]
pub struct GenerateReport {
    /// Files written, in worksheet order
    pub written: Vec<PathBuf>,
    /// Number of worksheets skipped for unparseable titles
    pub skipped: usize,
    /// DbSet declarations to paste into the persistence context
    pub registration_block: String,
}

/// Read every worksheet of a workbook into an entity catalog.
///
/// Title anomalies are logged as warnings and kept in the catalog's
/// diagnostics. Read failures abort.
pub fn read_catalog(workbook_path: &Path) -> Result<EntityCatalog> {
    info!(path = %workbook_path.display(), "Reading workbook");

    let mut catalog = EntityCatalog::new();
    for sheet in Workbook::open(workbook_path)? {
        let sheet = sheet?;
        let reported = catalog.diagnostics.len();
        catalog.add_worksheet(&sheet);

        for diagnostic in &catalog.diagnostics[reported..] {
            warn!(sheet = %diagnostic.sheet_name, "{}", diagnostic);
        }
    }

    info!(entities = catalog.len(), "Parsed worksheets");
    Ok(catalog)
}

/// Generate entity sources for every worksheet in the workbook
pub fn generate_entities(options: GenerateOptions) -> Result<GenerateReport> {
    let catalog = read_catalog(&options.workbook_path)?;
    let skipped = catalog.diagnostics.iter().filter(|d| d.is_skip()).count();

    let mut report = write_entities(&options.project_root, &catalog.entities)?;
    report.skipped = skipped;
    Ok(report)
}

/// Write one source file per entity under `project_root`.
///
/// Stops at the first write failure; files already written stay in place.
pub fn write_entities(project_root: &Path, entities: &[EntityModel]) -> Result<GenerateReport> {
    debug!(root = %project_root.display(), "Generating entity files");

    let mut written = Vec::with_capacity(entities.len());
    for entity in entities {
        log_entity(entity);
        let path = codegen::write_entity_file(project_root, entity)?;
        info!(class = %entity.class_name(), path = %entity.file_path(), "Generated entity");
        written.push(path);
    }

    info!(count = written.len(), "All entities generated");

    Ok(GenerateReport {
        written,
        skipped: 0,
        registration_block: codegen::render_registration_block(entities),
    })
}

/// Export the workbook's schema as JSON.
///
/// Returns the JSON text. When an output path is set the text is also
/// written there.
pub fn export_schema(options: ExportOptions) -> Result<String> {
    let catalog = read_catalog(&options.workbook_path)?;
    let json = export::export_schema_json(&catalog.entities)?;

    if let Some(output_path) = &options.output_path {
        export::write_json(&json, output_path)?;
        info!(
            path = %output_path.display(),
            entities = catalog.len(),
            "JSON written"
        );
    }

    Ok(json)
}

fn log_entity(entity: &EntityModel) {
    debug!(
        sheet = %entity.sheet_name,
        folder = %entity.folder_name,
        module = %entity.module_name,
        detail = entity.detail_name.as_deref().unwrap_or(""),
        prefix = %entity.prefix,
        table = %entity.table_name(),
        "Analyzing entity: {}",
        entity.description
    );

    if let Some(key) = entity.primary_key_field() {
        debug!(field = %key.name, clr_type = %key.resolved_type, "Primary key");
    }
    if let Some(fk) = entity.foreign_key_field() {
        debug!(field = %fk.name, parent = %entity.parent_class_name(), "Foreign key");
    }

    let members = entity
        .business_fields()
        .into_iter()
        .chain(entity.creator_fields())
        .chain(entity.editor_fields());
    for field in members {
        debug!(
            field = %field.name,
            clr_type = %field.resolved_type,
            nullable = field.is_nullable,
            "{}",
            field.comment
        );
    }
}
