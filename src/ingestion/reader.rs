use super::types::DocumentKind;

use anyhow::{bail, Context, Result};
use scraper::Html;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;
use xml::reader::{ParserConfig, XmlEvent};

/// Named entities of XHTML pages that a bare XML parser does not know.
const HTML_ENTITIES: &[(&str, &str)] = &[
    ("nbsp", " "),
    ("copy", "©"),
    ("reg", "®"),
    ("trade", "™"),
    ("mdash", "—"),
    ("ndash", "–"),
    ("hellip", "…"),
    ("lsquo", "‘"),
    ("rsquo", "’"),
    ("ldquo", "“"),
    ("rdquo", "”"),
    ("times", "×"),
    ("minus", "−"),
    ("le", "≤"),
    ("ge", "≥"),
    ("ne", "≠"),
];

/// Extracts the indexable text of `path`.
pub fn read_document(path: &Path, kind: DocumentKind) -> Result<String> {
    match kind {
        DocumentKind::Markup => read_markup(path),
        DocumentKind::Html => read_html(path),
        DocumentKind::PlainText => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
    }
}

/// Concatenates the character data of an XML document.
///
/// Text nodes are separated by a space so adjacent elements such as
/// `<b>Name</b><b>2.0</b>` do not merge into a single term. A parse error
/// stops the reading but keeps the text collected so far; only a document
/// that fails before yielding any text is an error.
pub fn read_markup(path: &Path) -> Result<String> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;

    let config = HTML_ENTITIES
        .iter()
        .fold(ParserConfig::new(), |config, (name, value)| {
            config.add_entity(*name, *value)
        });
    let parser = config.create_reader(BufReader::new(file));
    let mut content = String::new();

    for event in parser {
        match event {
            Ok(XmlEvent::Characters(text) | XmlEvent::CData(text)) => {
                content.push_str(&text);
                content.push(' ');
            }
            Ok(XmlEvent::EndDocument) => break,
            Ok(_) => {}
            Err(err) if content.trim().is_empty() => {
                bail!("malformed markup in {}: {}", path.display(), err);
            }
            Err(err) => {
                tracing::warn!(
                    "Stopped reading {} at a markup error, keeping text read so far: {}",
                    path.display(),
                    err
                );
                break;
            }
        }
    }

    Ok(content)
}

/// Concatenates the text nodes of an HTML document, outside `<script>` and
/// `<style>`.
pub fn read_html(path: &Path) -> Result<String> {
    let source =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let document = Html::parse_document(&source);
    let mut content = String::new();

    for node in document.root_element().descendants() {
        let Some(text) = node.value().as_text() else {
            continue;
        };

        let in_code = node
            .parent()
            .and_then(|parent| parent.value().as_element())
            .is_some_and(|element| matches!(element.name(), "script" | "style"));
        if in_code {
            continue;
        }

        content.push_str(text);
        content.push(' ');
    }

    Ok(content)
}
