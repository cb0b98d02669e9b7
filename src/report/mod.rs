use std::io::{self, Write};

use crate::compare::Comparison;

pub const NO_DIFFERENCES: &str = "No differences found between the two API endpoints.";

/// Writes the values unique to each side under a heading naming its source.
///
/// When neither side has unique values a single [`NO_DIFFERENCES`] line is
/// written instead of the two sections.
pub fn write_report<W: Write>(
    out: &mut W,
    first_label: &str,
    second_label: &str,
    comparison: &Comparison,
) -> io::Result<()> {
    if comparison.is_empty() {
        return writeln!(out, "{NO_DIFFERENCES}");
    }

    write_section(out, first_label, &comparison.only_in_first)?;
    writeln!(out)?;
    write_section(out, second_label, &comparison.only_in_second)
}

fn write_section<W: Write>(out: &mut W, label: &str, values: &[String]) -> io::Result<()> {
    writeln!(out, "Data only in {label}:")?;
    for value in values {
        writeln!(out, "  - {value}")?;
    }
    Ok(())
}
