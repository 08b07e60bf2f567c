//! JSON encoding of the definition catalog.

use std::io::Write;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::Result;
use crate::models::DiagnosisCatalog;

/// Write the catalog as indented JSON followed by a newline
///
/// Non-ASCII characters are written as-is.
pub fn write_catalog<W: Write>(catalog: &DiagnosisCatalog, writer: W, indent: usize) -> Result<()> {
    let indent = vec![b' '; indent];
    let mut serializer = Serializer::with_formatter(writer, PrettyFormatter::with_indent(&indent));

    catalog.serialize(&mut serializer)?;

    let mut writer = serializer.into_inner();
    writer.write_all(b"\n")?;
    Ok(())
}

/// Encode the whole catalog in memory
pub fn to_json_string(catalog: &DiagnosisCatalog, indent: usize) -> Result<String> {
    let mut buffer = Vec::new();
    write_catalog(catalog, &mut buffer, indent)?;

    String::from_utf8(buffer).map_err(|err| err.utf8_error().into())
}
