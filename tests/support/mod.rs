//! Shared fixtures for integration tests.
//!
//! Writes small documents and a miniature WordNet dictionary into a
//! `TempDir`, which must be kept alive for the returned paths to stay valid.

#![allow(dead_code)]

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// `data.noun` with a license header and a few synsets linking the words
/// used by the end-to-end scenarios.
pub const NOUN_DATA: &str = "  1 This software and database is being provided to you, the LICENSEE, by\n  2 Princeton University under the following license.\n00908492 04 n 02 programming 0 scheduling 0 001 @ 00907919 n 0000 | setting an order and time for planned events\n06581410 10 n 04 programming 1 programing 0 computer_programming 0 coding 0 000 | creating a sequence of instructions\n01202184 04 n 02 teamwork 0 collaboration 0 000 | cooperative work done by a team\n06282651 10 n 02 communication 0 communicating 0 000 | the activity of communicating\n05637558 09 n 02 skill 0 accomplishment 0 000 | an ability that has been acquired by training\n";

/// `data.verb` with one synset.
pub const VERB_DATA: &str = "00593852 31 v 03 code 0 encode 0 cipher 0 000 | convert ordinary language into code\n";

/// Creates a directory holding `data.noun` and `data.verb`.
pub fn wordnet_fixture() -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(dir.path().join("data.noun"), NOUN_DATA).expect("Failed to write data.noun");
    fs::write(dir.path().join("data.verb"), VERB_DATA).expect("Failed to write data.verb");
    dir
}

/// Writes `content` to `dir/name` and returns the path.
pub fn write_file(dir: &Path, name: &str, content: impl AsRef<[u8]>) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("Failed to write fixture file");
    path
}

/// Writes a minimal `.docx` with one paragraph per entry of `paragraphs`.
pub fn write_docx(dir: &Path, name: &str, paragraphs: &[&str]) -> PathBuf {
    let body: String = paragraphs
        .iter()
        .map(|text| format!("<w:p><w:r><w:t xml:space=\"preserve\">{text}</w:t></w:r></w:p>"))
        .collect();
    let xml = format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
         <w:document xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">\
         <w:body>{body}</w:body></w:document>"
    );

    let path = dir.join(name);
    let file = File::create(&path).expect("Failed to create docx");
    let mut writer = zip::ZipWriter::new(file);
    let options = zip::write::SimpleFileOptions::default();
    writer
        .start_file("[Content_Types].xml", options)
        .expect("Failed to start content types entry");
    writer
        .write_all(b"<?xml version=\"1.0\"?><Types/>")
        .expect("Failed to write content types");
    writer
        .start_file("word/document.xml", options)
        .expect("Failed to start document entry");
    writer
        .write_all(xml.as_bytes())
        .expect("Failed to write document body");
    writer.finish().expect("Failed to finish docx");
    path
}

/// Job description from the reference scenario.
pub const SCENARIO_JOB: &str = "Looking for strong Python programming and SQL database skills with excellent communication and teamwork abilities";

/// Resume from the reference scenario.
pub const SCENARIO_RESUME: &str = "Experienced in coding, SQL, and leadership";
