//! Serialization of a [`Catalog`] back to TS 2.1 XML.
//!
//! The output follows the layout Qt's own tooling emits: an XML
//! declaration, `<!DOCTYPE TS>`, 2-space indent steps, self-closing
//! `<location>` tags and a `type` attribute on non-finished
//! translations. Reparsing the output yields an identical catalog;
//! location lists, status flags and multi-line text all survive.

use std::{fs, path::Path};

use anyhow::{Context as _, Result};
use quick_xml::escape::{escape, partial_escape};

use crate::catalog::{Catalog, Message};

/// Render the catalog in canonical TS layout.
pub fn to_ts_string(catalog: &Catalog) -> String {
    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
    out.push_str("<!DOCTYPE TS>\n");

    out.push_str("<TS version=\"");
    out.push_str(&escape(catalog.version()));
    out.push('"');
    if let Some(language) = catalog.language() {
        out.push_str(" language=\"");
        out.push_str(&escape(language));
        out.push('"');
    }
    if let Some(source_language) = catalog.source_language() {
        out.push_str(" sourcelanguage=\"");
        out.push_str(&escape(source_language));
        out.push('"');
    }
    out.push_str(">\n");

    for context in catalog.contexts() {
        out.push_str("  <context>\n");
        out.push_str("    <name>");
        out.push_str(&partial_escape(&context.name));
        out.push_str("</name>\n");
        for message in &context.messages {
            write_message(&mut out, message);
        }
        out.push_str("  </context>\n");
    }

    out.push_str("</TS>\n");
    out
}

fn write_message(out: &mut String, message: &Message) {
    out.push_str("    <message>\n");
    for location in &message.locations {
        out.push_str("      <location filename=\"");
        out.push_str(&escape(&location.filename));
        out.push_str("\" line=\"");
        out.push_str(&location.line.to_string());
        out.push_str("\"/>\n");
    }
    out.push_str("      <source>");
    out.push_str(&partial_escape(&message.source));
    out.push_str("</source>\n");
    match message.status.type_attr() {
        Some(ty) => {
            out.push_str("      <translation type=\"");
            out.push_str(ty);
            out.push_str("\">");
        }
        None => out.push_str("      <translation>"),
    }
    out.push_str(&partial_escape(&message.translation));
    out.push_str("</translation>\n");
    out.push_str("    </message>\n");
}

/// Write the catalog to disk in canonical layout.
pub fn write_ts_file(path: &Path, catalog: &Catalog) -> Result<()> {
    fs::write(path, to_ts_string(catalog))
        .with_context(|| format!("Failed to write translation file: {}", path.display()))
}
