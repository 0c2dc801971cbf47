//! DbSet registration snippet for the persistence context
//!
//! The output is meant to be pasted into `CEntityContext.cs` by hand. Entities
//! are grouped into one `#region` per folder, folders in first-seen order.

use std::fmt::{self, Write};

use crate::model::EntityModel;

use super::csharp::write_doc_summary;

const INDENT: &str = "    ";

/// Render the `DbSet<...>` declarations for every entity
pub fn render_registration_block(entities: &[EntityModel]) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_registration_block(&mut out, entities);
    out
}

pub fn write_registration_block<W: Write>(w: &mut W, entities: &[EntityModel]) -> fmt::Result {
    for (folder, members) in group_by_folder(entities) {
        writeln!(w, "{}#region {}相關", INDENT, folder)?;
        writeln!(w)?;

        for entity in members {
            let class_name = entity.class_name();
            write_doc_summary(w, INDENT, &entity.description)?;
            writeln!(
                w,
                "{}public DbSet<{}> {} {{ get; set; }}",
                INDENT, class_name, class_name
            )?;
            writeln!(w)?;
        }

        writeln!(w, "{}#endregion", INDENT)?;
        writeln!(w)?;
    }
    Ok(())
}

/// Group entities by folder, keeping both folder and entity discovery order
fn group_by_folder(entities: &[EntityModel]) -> Vec<(&str, Vec<&EntityModel>)> {
    let mut groups: Vec<(&str, Vec<&EntityModel>)> = Vec::new();
    for entity in entities {
        match groups
            .iter()
            .position(|(folder, _)| *folder == entity.folder_name)
        {
            Some(index) => groups[index].1.push(entity),
            None => groups.push((entity.folder_name.as_str(), vec![entity])),
        }
    }
    groups
}
