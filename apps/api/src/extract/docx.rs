use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;

use super::ExtractError;

/// The main document part inside the OOXML container.
const DOCUMENT_ENTRY: &str = "word/document.xml";

/// Pulls the character data out of `word/document.xml`, one line per `w:p`
/// paragraph — the same paragraphs-joined-by-newline shape a word processor
/// would show.
pub(super) fn extract(bytes: &[u8]) -> Result<String, ExtractError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;
    let mut xml = String::new();
    archive.by_name(DOCUMENT_ENTRY)?.read_to_string(&mut xml)?;

    let mut reader = Reader::from_str(&xml);
    let mut paragraphs: Vec<String> = Vec::new();
    let mut current = String::new();

    loop {
        match reader.read_event()? {
            Event::Text(t) => current.push_str(&t.unescape()?),
            Event::End(e) if e.name().as_ref() == b"w:p" => {
                paragraphs.push(std::mem::take(&mut current));
            }
            Event::Eof => break,
            _ => {}
        }
    }
    // Text outside any closed paragraph still counts.
    if !current.is_empty() {
        paragraphs.push(current);
    }

    Ok(paragraphs.join("\n"))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    /// Builds a minimal DOCX: a zip holding only the main document part.
    fn docx_bytes(paragraphs: &[&str]) -> Vec<u8> {
        let runs: String = paragraphs
            .iter()
            .map(|p| format!("<w:p><w:r><w:t>{p}</w:t></w:r></w:p>"))
            .collect();
        let xml = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{runs}</w:body></w:document>"#
        );

        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file(DOCUMENT_ENTRY, zip::write::SimpleFileOptions::default())
            .unwrap();
        writer.write_all(xml.as_bytes()).unwrap();
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn test_extracts_one_line_per_paragraph() {
        let bytes = docx_bytes(&["Dear Program Director,", "An outstanding clinician."]);
        let text = extract(&bytes).unwrap();
        assert_eq!(text, "Dear Program Director,\nAn outstanding clinician.");
    }

    #[test]
    fn test_empty_document_yields_empty_string() {
        let bytes = docx_bytes(&[]);
        assert_eq!(extract(&bytes).unwrap(), "");
    }

    #[test]
    fn test_xml_entities_are_unescaped() {
        let bytes = docx_bytes(&["Smith &amp; Jones"]);
        assert_eq!(extract(&bytes).unwrap(), "Smith & Jones");
    }

    #[test]
    fn test_missing_document_entry_is_an_error() {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("word/other.xml", zip::write::SimpleFileOptions::default())
            .unwrap();
        writer.write_all(b"<doc/>").unwrap();
        let bytes = writer.finish().unwrap().into_inner();

        assert!(matches!(
            extract(&bytes),
            Err(ExtractError::DocxArchive(_))
        ));
    }
}
