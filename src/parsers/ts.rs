//! Parser for Qt Linguist translation source files (TS format 2.1).
//!
//! The format is XML:
//!
//! ```text
//! <TS version="2.1" language="ja" sourcelanguage="en">
//!   <context>
//!     <name>ContextIdentifier</name>
//!     <message>
//!       <location filename="../../Command.cpp" line="510"/>  (repeatable)
//!       <source>Original text</source>
//!       <translation type="unfinished">Localized text</translation>
//!     </message>
//!   </context>
//! </TS>
//! ```
//!
//! Text content is never trimmed: multi-line strings and trailing
//! newlines inside `<source>`/`<translation>` are part of the payload.
//! Unknown elements (e.g. `numerusform`, translator comments) are
//! skipped; a message without a `<source>` is a hard error.

use std::{fs, path::Path};

use anyhow::{Context as _, Result, bail};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::catalog::{Catalog, Context, Location, Message, TranslationStatus};

/// Parse a `.ts` file from disk.
pub fn parse_ts_file(path: &Path) -> Result<Catalog> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read translation file: {}", path.display()))?;
    parse_ts_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

/// What the current text events belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TextTarget {
    None,
    ContextName,
    Source,
    Translation,
}

#[derive(Default)]
struct MessageBuilder {
    locations: Vec<Location>,
    source: Option<String>,
    translation: Option<String>,
    status: TranslationStatus,
    ts_line: u32,
}

/// Parse TS XML from a string.
pub fn parse_ts_str(content: &str) -> Result<Catalog> {
    let line_index = build_line_index(content);
    let mut reader = Reader::from_str(content);

    let mut saw_root = false;
    let mut version = String::from("2.1");
    let mut language = None;
    let mut source_language = None;
    let mut contexts = Vec::new();

    let mut current_context: Option<Context> = None;
    let mut current_message: Option<MessageBuilder> = None;
    let mut text_target = TextTarget::None;
    let mut text_buf = String::new();

    loop {
        let pos = reader.buffer_position() as usize;
        let event = match reader.read_event() {
            Ok(event) => event,
            Err(e) => bail!("XML error at line {}: {}", offset_to_line(&line_index, pos), e),
        };
        let line = offset_to_line(&line_index, reader.buffer_position() as usize);

        match event {
            Event::Start(e) | Event::Empty(e) if e.name().as_ref() == b"TS" => {
                saw_root = true;
                if let Some(v) = attr_string(&e, "version")? {
                    version = v;
                }
                language = attr_string(&e, "language")?;
                source_language = attr_string(&e, "sourcelanguage")?;
            }
            Event::Start(e) => match e.name().as_ref() {
                b"context" if current_context.is_none() => {
                    current_context = Some(Context::new(String::new()));
                }
                b"name" if current_context.is_some() && current_message.is_none() => {
                    text_target = TextTarget::ContextName;
                    text_buf.clear();
                }
                b"message" if current_context.is_some() => {
                    current_message = Some(MessageBuilder {
                        ts_line: line as u32,
                        ..MessageBuilder::default()
                    });
                }
                b"location" => {
                    if let Some(message) = current_message.as_mut() {
                        message.locations.push(read_location(&e, line)?);
                    }
                }
                b"source" if current_message.is_some() => {
                    text_target = TextTarget::Source;
                    text_buf.clear();
                }
                b"translation" if current_message.is_some() => {
                    if let Some(message) = current_message.as_mut() {
                        message.status = read_status(&e, line)?;
                    }
                    text_target = TextTarget::Translation;
                    text_buf.clear();
                }
                _ => {
                    // Translator comments, numerusform blocks and other
                    // tooling metadata are not part of the lookup table.
                    let end = e.to_end().into_owned();
                    if reader.read_to_end(end.name()).is_err() {
                        bail!("unclosed <{}> at line {}", String::from_utf8_lossy(e.name().as_ref()), line);
                    }
                }
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"location" => {
                    if let Some(message) = current_message.as_mut() {
                        message.locations.push(read_location(&e, line)?);
                    }
                }
                b"source" => {
                    if let Some(message) = current_message.as_mut() {
                        message.source = Some(String::new());
                    }
                }
                b"translation" => {
                    if let Some(message) = current_message.as_mut() {
                        message.status = read_status(&e, line)?;
                        message.translation = Some(String::new());
                    }
                }
                _ => {}
            },
            Event::Text(e) => {
                if text_target != TextTarget::None {
                    let text = e
                        .unescape()
                        .map_err(|e| anyhow::anyhow!("bad entity at line {}: {}", line, e))?;
                    text_buf.push_str(&text);
                }
            }
            Event::CData(e) => {
                if text_target != TextTarget::None {
                    text_buf.push_str(&String::from_utf8_lossy(&e.into_inner()));
                }
            }
            Event::End(e) => match e.name().as_ref() {
                b"name" if text_target == TextTarget::ContextName => {
                    if let Some(context) = current_context.as_mut() {
                        context.name = std::mem::take(&mut text_buf);
                    }
                    text_target = TextTarget::None;
                }
                b"source" if text_target == TextTarget::Source => {
                    if let Some(message) = current_message.as_mut() {
                        message.source = Some(std::mem::take(&mut text_buf));
                    }
                    text_target = TextTarget::None;
                }
                b"translation" if text_target == TextTarget::Translation => {
                    if let Some(message) = current_message.as_mut() {
                        message.translation = Some(std::mem::take(&mut text_buf));
                    }
                    text_target = TextTarget::None;
                }
                b"message" => {
                    let builder = match current_message.take() {
                        Some(builder) => builder,
                        None => bail!("stray </message> at line {}", line),
                    };
                    let context = current_context
                        .as_mut()
                        .ok_or_else(|| anyhow::anyhow!("<message> outside <context> at line {}", line))?;
                    let Some(source) = builder.source else {
                        bail!(
                            "<message> at line {} is missing its <source>",
                            builder.ts_line
                        );
                    };
                    context.messages.push(Message {
                        locations: builder.locations,
                        source,
                        translation: builder.translation.unwrap_or_default(),
                        status: builder.status,
                        ts_line: builder.ts_line,
                    });
                }
                b"context" => {
                    let context = match current_context.take() {
                        Some(context) => context,
                        None => bail!("stray </context> at line {}", line),
                    };
                    if context.name.is_empty() {
                        bail!("<context> ending at line {} has no <name>", line);
                    }
                    contexts.push(context);
                }
                _ => {}
            },
            Event::Eof => {
                if current_message.is_some() || current_context.is_some() {
                    bail!("unexpected end of file at line {}", line);
                }
                break;
            }
            // XML declaration, <!DOCTYPE TS>, comments, processing
            // instructions: structural noise for the table.
            Event::Decl(_) | Event::DocType(_) | Event::Comment(_) | Event::PI(_) => {}
        }
    }

    if !saw_root {
        bail!("not a Qt Linguist TS resource: no <TS> root element");
    }

    Ok(Catalog::new(version, language, source_language, contexts))
}

fn attr_string(e: &BytesStart<'_>, name: &str) -> Result<Option<String>> {
    e.try_get_attribute(name)
        .with_context(|| format!("malformed {} attribute", name))?
        .map(|a| {
            a.unescape_value()
                .map(|v| v.into_owned())
                .with_context(|| format!("bad entity in {} attribute", name))
        })
        .transpose()
}

fn read_location(e: &BytesStart<'_>, line: usize) -> Result<Location> {
    let filename = attr_string(e, "filename")?
        .ok_or_else(|| anyhow::anyhow!("<location> at line {} has no filename", line))?;
    let line_attr = attr_string(e, "line")?
        .ok_or_else(|| anyhow::anyhow!("<location> at line {} has no line", line))?;
    let line_no = line_attr
        .parse()
        .with_context(|| format!("<location> at line {} has a non-numeric line \"{}\"", line, line_attr))?;
    Ok(Location::new(filename, line_no))
}

fn read_status(e: &BytesStart<'_>, line: usize) -> Result<TranslationStatus> {
    match attr_string(e, "type")?.as_deref() {
        None => Ok(TranslationStatus::Finished),
        Some("unfinished") => Ok(TranslationStatus::Unfinished),
        Some("vanished") => Ok(TranslationStatus::Vanished),
        Some("obsolete") => Ok(TranslationStatus::Obsolete),
        Some(other) => bail!("unknown translation type \"{}\" at line {}", other, line),
    }
}

/// Build an index of line start byte offsets for O(log n) line lookups.
fn build_line_index(content: &str) -> Vec<usize> {
    let mut offsets = vec![0];
    for (i, c) in content.char_indices() {
        if c == '\n' {
            offsets.push(i + 1);
        }
    }
    offsets
}

/// 1-based line number for a byte offset.
fn offset_to_line(line_index: &[usize], offset: usize) -> usize {
    match line_index.binary_search(&offset) {
        Ok(line) => line + 1,
        Err(line) => line,
    }
}
