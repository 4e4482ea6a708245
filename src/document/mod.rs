//! Plain-text extraction from resume and job-description files.
//!
//! Supported kinds, chosen by file extension (case-insensitive):
//!
//! - `.txt` - read as UTF-8
//! - `.docx` - text runs of `word/document.xml`, one line per paragraph
//! - `.pdf` - text layer via `pdf-extract`

mod error;

pub use error::DocumentError;

use std::borrow::Cow;
use std::fs;
use std::io::Read;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, instrument};

/// Archive member holding the body of a `.docx` document.
const DOCX_BODY: &str = "word/document.xml";

/// Text runs, paragraph ends, tabs and line breaks (with or without
/// attributes, e.g. `<w:br w:type="page"/>`) in WordprocessingML.
#[allow(clippy::expect_used)]
static DOCX_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<w:t(?:\s[^>]*)?>([^<]*)</w:t>|</w:p>|<w:(tab|br|cr)\b[^>]*/>")
        .expect("valid regex") // Static pattern, safe to panic
});

/// Predefined XML entities and decimal or hex character references.
#[allow(clippy::expect_used)]
static XML_ENTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(?:#([0-9]+)|#[xX]([0-9a-fA-F]+)|(lt|gt|quot|apos|amp));")
        .expect("valid regex") // Static pattern, safe to panic
});

/// Document formats understood by [`extract_text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    PlainText,
    Docx,
    Pdf,
}

impl DocumentKind {
    /// Detects the kind from the file extension.
    ///
    /// # Errors
    /// Returns [`DocumentError::UnsupportedFileType`] for any other extension.
    pub fn from_path(path: &Path) -> Result<Self, DocumentError> {
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        match extension.as_str() {
            "txt" => Ok(Self::PlainText),
            "docx" => Ok(Self::Docx),
            "pdf" => Ok(Self::Pdf),
            _ => Err(DocumentError::UnsupportedFileType {
                path: path.to_path_buf(),
                extension,
            }),
        }
    }
}

/// Reads `path` and returns its plain text.
///
/// # Errors
/// Returns error if the extension is unsupported, the file cannot be read,
/// or its content cannot be decoded.
#[instrument(fields(path = %path.display()))]
pub fn extract_text(path: &Path) -> Result<String, DocumentError> {
    let kind = DocumentKind::from_path(path)?;
    let bytes = fs::read(path).map_err(|source| DocumentError::io(path, source))?;

    let text = match kind {
        DocumentKind::PlainText => {
            String::from_utf8(bytes).map_err(|e| DocumentError::decode(path, e))?
        }
        DocumentKind::Docx => docx_text(path, &bytes)?,
        DocumentKind::Pdf => {
            pdf_extract::extract_text_from_mem(&bytes).map_err(|e| DocumentError::decode(path, e))?
        }
    };

    debug!(kind = ?kind, chars = text.len(), "Document text extracted");
    Ok(text)
}

fn docx_text(path: &Path, bytes: &[u8]) -> Result<String, DocumentError> {
    let mut archive = zip::ZipArchive::new(std::io::Cursor::new(bytes))
        .map_err(|e| DocumentError::decode(path, e))?;
    let mut member = archive
        .by_name(DOCX_BODY)
        .map_err(|e| DocumentError::decode(path, format!("{DOCX_BODY}: {e}")))?;
    let mut xml = String::new();
    member
        .read_to_string(&mut xml)
        .map_err(|e| DocumentError::decode(path, e))?;
    Ok(docx_xml_to_text(&xml))
}

/// Flattens WordprocessingML body XML to text, one line per paragraph.
fn docx_xml_to_text(xml: &str) -> String {
    let mut text = String::new();
    for caps in DOCX_TOKEN.captures_iter(xml) {
        if let Some(run) = caps.get(1) {
            text.push_str(&decode_entities(run.as_str()));
            continue;
        }
        match caps.get(2).map(|m| m.as_str()) {
            Some("tab") => text.push('\t'),
            _ => text.push('\n'),
        }
    }
    text.trim_end().to_string()
}

/// Decodes entities in one pass; unknown or invalid references stay as written.
fn decode_entities(raw: &str) -> Cow<'_, str> {
    XML_ENTITY.replace_all(raw, |caps: &regex::Captures<'_>| {
        let decoded = if let Some(decimal) = caps.get(1) {
            decimal.as_str().parse::<u32>().ok().and_then(char::from_u32)
        } else if let Some(hex) = caps.get(2) {
            u32::from_str_radix(hex.as_str(), 16)
                .ok()
                .and_then(char::from_u32)
        } else {
            match caps.get(3).map(|m| m.as_str()) {
                Some("lt") => Some('<'),
                Some("gt") => Some('>'),
                Some("quot") => Some('"'),
                Some("apos") => Some('\''),
                Some("amp") => Some('&'),
                _ => None,
            }
        };
        decoded.map_or_else(|| caps[0].to_string(), String::from)
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_kind_from_extension_is_case_insensitive() {
        assert_eq!(
            DocumentKind::from_path(Path::new("cv.TXT")).unwrap(),
            DocumentKind::PlainText
        );
        assert_eq!(
            DocumentKind::from_path(Path::new("cv.Docx")).unwrap(),
            DocumentKind::Docx
        );
        assert_eq!(
            DocumentKind::from_path(Path::new("cv.pdf")).unwrap(),
            DocumentKind::Pdf
        );
    }

    #[test]
    fn test_unknown_extension_is_unsupported() {
        let err = DocumentKind::from_path(Path::new("cv.rtf")).unwrap_err();
        assert!(matches!(
            err,
            DocumentError::UnsupportedFileType { ref extension, .. } if extension == "rtf"
        ));

        let err = DocumentKind::from_path(&PathBuf::from("README")).unwrap_err();
        assert!(matches!(
            err,
            DocumentError::UnsupportedFileType { ref extension, .. } if extension.is_empty()
        ));
    }

    #[test]
    fn test_docx_xml_paragraphs_become_lines() {
        let xml = r#"<w:document><w:body><w:p><w:r><w:t>Rust</w:t></w:r><w:r><w:t xml:space="preserve"> developer</w:t></w:r></w:p><w:p><w:r><w:t>SQL &amp; Python</w:t></w:r></w:p></w:body></w:document>"#;
        assert_eq!(docx_xml_to_text(xml), "Rust developer\nSQL & Python");
    }

    #[test]
    fn test_docx_xml_tabs_and_breaks() {
        let xml = "<w:p><w:r><w:t>a</w:t><w:tab/><w:t>b</w:t><w:br/><w:t>c</w:t></w:r></w:p>";
        assert_eq!(docx_xml_to_text(xml), "a\tb\nc");
    }

    #[test]
    fn test_tbl_and_tab_are_not_text_runs() {
        let xml = "<w:tbl><w:tr><w:tc><w:p><w:r><w:t>cell</w:t></w:r></w:p></w:tc></w:tr></w:tbl>";
        assert_eq!(docx_xml_to_text(xml), "cell");
    }

    #[test]
    fn test_entities_decoded_once() {
        assert_eq!(decode_entities("&amp;lt;"), "&lt;");
        assert_eq!(decode_entities("C&lt;T&gt;"), "C<T>");
        assert_eq!(decode_entities("plain"), "plain");
    }

    #[test]
    fn test_numeric_character_references() {
        assert_eq!(decode_entities("team&#8217;s"), "team\u{2019}s");
        assert_eq!(decode_entities("caf&#xE9; &#X2013; bar"), "caf\u{e9} \u{2013} bar");
        assert_eq!(decode_entities("&#1114112; &#xD800;"), "&#1114112; &#xD800;");
        assert_eq!(decode_entities("&nbsp;"), "&nbsp;");
    }

    #[test]
    fn test_docx_xml_breaks_with_attributes_and_carriage_returns() {
        let xml = r#"<w:p><w:r><w:t>Summary</w:t><w:br w:type="page"/><w:t>Skills</w:t><w:cr/><w:t>Rust</w:t><w:tab w:val="left"/><w:t>SQL</w:t></w:r></w:p>"#;
        assert_eq!(docx_xml_to_text(xml), "Summary\nSkills\nRust\tSQL");
    }

    #[test]
    fn test_docx_xml_ignores_lookalike_elements() {
        let xml = "<w:p><w:pPr><w:tabs></w:tabs></w:pPr><w:r><w:t>a</w:t><w:bookmarkStart w:id=\"0\"/><w:t>b</w:t></w:r></w:p>";
        assert_eq!(docx_xml_to_text(xml), "ab");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = extract_text(Path::new("/nonexistent/resume.txt")).unwrap_err();
        assert!(matches!(err, DocumentError::Io { .. }));
    }
}
