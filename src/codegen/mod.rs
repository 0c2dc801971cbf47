//! C# entity source generation

mod csharp;
mod entity_writer;
mod file_writer;
mod registration;

pub use entity_writer::{render_entity, write_entity};
pub use file_writer::write_entity_file;
pub use registration::{render_registration_block, write_registration_block};
