//! C# text helpers

use std::fmt::{self, Write};

/// Write a `/// <summary>` block. Multi-line text gets one `///` line each.
pub fn write_doc_summary<W: Write>(w: &mut W, indent: &str, text: &str) -> fmt::Result {
    writeln!(w, "{}/// <summary>", indent)?;
    let mut lines = text.lines().peekable();
    if lines.peek().is_none() {
        writeln!(w, "{}/// ", indent)?;
    }
    for line in lines {
        writeln!(w, "{}/// {}", indent, line.trim_end())?;
    }
    writeln!(w, "{}/// </summary>", indent)
}
