//! Render an entity model as an EF Core entity class

use std::fmt::{self, Write};

use crate::model::{EntityModel, FieldDescriptor};
use crate::util::escape_csharp_string;

use super::csharp::write_doc_summary;

const CLASS_INDENT: &str = "    ";
const MEMBER_INDENT: &str = "        ";

const BASE_USINGS: [&str; 4] = [
    "Microsoft.EntityFrameworkCore",
    "Project_Model",
    "System.ComponentModel.DataAnnotations",
    "System.ComponentModel.DataAnnotations.Schema",
];

/// Only needed for the `[JsonIgnore]` on a detail table's navigation property
const JSON_USING: &str = "System.Text.Json.Serialization";

/// Render the full source text of an entity class
pub fn render_entity(entity: &EntityModel) -> String {
    let mut out = String::with_capacity(1024 + entity.fields.len() * 320);
    // Writing into a String cannot fail
    let _ = write_entity(&mut out, entity);
    out
}

/// Write the source text of an entity class
pub fn write_entity<W: Write>(w: &mut W, entity: &EntityModel) -> fmt::Result {
    let foreign_key = entity.foreign_key_field();

    for using in BASE_USINGS {
        writeln!(w, "using {};", using)?;
    }
    if foreign_key.is_some() {
        writeln!(w, "using {};", JSON_USING)?;
    }
    writeln!(w)?;

    writeln!(w, "namespace {}", entity.namespace_path())?;
    writeln!(w, "{{")?;

    write_doc_summary(w, CLASS_INDENT, &entity.description)?;
    writeln!(w, "{}[Table(\"{}\")]", CLASS_INDENT, escape_csharp_string(&entity.table_name()))?;
    writeln!(w, "{}[Comment(\"{}\")]", CLASS_INDENT, escape_csharp_string(&entity.description))?;
    writeln!(w, "{}public class {}", CLASS_INDENT, entity.class_name())?;
    writeln!(w, "{}{{", CLASS_INDENT)?;

    if let Some(fk) = foreign_key {
        write_relation_region(w, entity, fk)?;
        writeln!(w)?;
    }

    let mut first = true;
    if let Some(key) = entity.primary_key_field() {
        write_field(w, key, true)?;
        first = false;
    }

    let members = entity
        .business_fields()
        .into_iter()
        .chain(entity.creator_fields())
        .chain(entity.editor_fields());
    for field in members {
        if !first {
            writeln!(w)?;
        }
        write_field(w, field, false)?;
        first = false;
    }

    writeln!(w, "{}}}", CLASS_INDENT)?;
    writeln!(w, "}}")
}

/// Navigation property from a detail table to its master
fn write_relation_region<W: Write>(
    w: &mut W,
    entity: &EntityModel,
    foreign_key: &FieldDescriptor,
) -> fmt::Result {
    let parent = entity.parent_class_name();

    writeln!(w, "{}#region 資料庫關聯", MEMBER_INDENT)?;
    writeln!(w)?;
    writeln!(
        w,
        "{}#region 外來鍵，[ForeignKey(\"外來鍵參照欄位\")]，若沒設定ForeignKey Code First會自動生成欄位",
        MEMBER_INDENT
    )?;
    writeln!(w)?;
    write_doc_summary(
        w,
        MEMBER_INDENT,
        &format!("{}{}", entity.folder_name, entity.module_name),
    )?;
    writeln!(
        w,
        "{}[ForeignKey(\"{}\")]",
        MEMBER_INDENT,
        escape_csharp_string(&foreign_key.name)
    )?;
    writeln!(w, "{}[JsonIgnore]", MEMBER_INDENT)?;
    writeln!(
        w,
        "{}public virtual {} {} {{ get; set; }}",
        MEMBER_INDENT, parent, parent
    )?;
    writeln!(w)?;
    writeln!(w, "{}#endregion", MEMBER_INDENT)?;
    writeln!(w)?;
    writeln!(w, "{}#endregion", MEMBER_INDENT)
}

fn write_field<W: Write>(w: &mut W, field: &FieldDescriptor, is_key: bool) -> fmt::Result {
    write_doc_summary(w, MEMBER_INDENT, &field.comment)?;
    if let Some(example) = field.example.as_deref().filter(|e| !e.is_empty()) {
        writeln!(
            w,
            "{}/// <example>{}</example>",
            MEMBER_INDENT,
            single_line(example)
        )?;
    }

    if is_key {
        writeln!(w, "{}[Key]", MEMBER_INDENT)?;
        writeln!(
            w,
            "{}[DatabaseGenerated(DatabaseGeneratedOption.None)]",
            MEMBER_INDENT
        )?;
    }

    writeln!(
        w,
        "{}[Column(\"{}\", TypeName = {})]",
        MEMBER_INDENT,
        escape_csharp_string(&field.name),
        field.storage_descriptor
    )?;
    writeln!(
        w,
        "{}[Comment(\"{}\")]",
        MEMBER_INDENT,
        escape_csharp_string(&field.comment_text())
    )?;

    let nullable = if field.is_nullable { "?" } else { "" };
    writeln!(
        w,
        "{}public {}{} {} {{ get; set; }}{}",
        MEMBER_INDENT,
        field.resolved_type,
        nullable,
        field.name,
        default_initializer(field)
    )
}

/// Required strings start out empty so the non-nullable property is never null
fn default_initializer(field: &FieldDescriptor) -> &'static str {
    if field.resolved_type == crate::model::ClrType::String && !field.is_nullable {
        " = string.Empty;"
    } else {
        ""
    }
}

fn single_line(text: &str) -> String {
    text.lines().map(str::trim).collect::<Vec<_>>().join(" ")
}
