use crate::error::{ExtractionError, IciError, Result};
use lopdf::Document;
use once_cell::sync::Lazy;
use quick_xml::events::Event;
use quick_xml::Reader;
use regex::Regex;
use std::fmt::Display;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;
use zip::ZipArchive;

const TEXT_EXTENSIONS: [&str; 3] = ["txt", "text", "md"];
const DOCX_BODY: &str = "word/document.xml";
const SECTION_BREAK: &str = "\n\n";

static BLANK_RUNS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n{3,}").expect("blank-line pattern must compile"));
static SPACE_RUNS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[ \t]{2,}").expect("space pattern must compile"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    PlainText,
    Pdf,
    Docx,
}

impl DocumentKind {
    /// Files without an extension are read as plain text.
    pub fn of(path: &Path) -> Option<Self> {
        let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
            return Some(DocumentKind::PlainText);
        };
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(DocumentKind::Pdf),
            "docx" => Some(DocumentKind::Docx),
            ext if TEXT_EXTENSIONS.contains(&ext) => Some(DocumentKind::PlainText),
            _ => None,
        }
    }
}

/// Reads the text of a plain-text, PDF or DOCX document. PDF pages and DOCX
/// paragraphs are joined with a blank line; empty ones are dropped.
pub fn extract(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(IciError::PathNotFound(path.display().to_string()));
    }
    let Some(kind) = DocumentKind::of(path) else {
        let format = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        return Err(ExtractionError::Unsupported {
            path: path.display().to_string(),
            format,
        }
        .into());
    };

    match kind {
        DocumentKind::PlainText => read_plain_text(path),
        DocumentKind::Pdf => read_pdf(path),
        DocumentKind::Docx => read_docx(path),
    }
}

fn corrupt(path: &Path, reason: impl Display) -> IciError {
    ExtractionError::Corrupt {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
    .into()
}

fn read_plain_text(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)?;
    String::from_utf8(bytes).map_err(|e| corrupt(path, e))
}

fn read_pdf(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)?;
    let document = Document::load_mem(&bytes).map_err(|e| corrupt(path, e))?;
    let pages = document
        .get_pages()
        .into_keys()
        // a page whose text cannot be decoded contributes nothing
        .map(|number| document.extract_text(&[number]).unwrap_or_default())
        .filter(|page| !page.trim().is_empty())
        .collect::<Vec<_>>();
    Ok(pages.join(SECTION_BREAK))
}

fn read_docx(path: &Path) -> Result<String> {
    let mut archive = ZipArchive::new(File::open(path)?).map_err(|e| corrupt(path, e))?;
    let mut xml = String::new();
    archive
        .by_name(DOCX_BODY)
        .map_err(|e| corrupt(path, format!("{DOCX_BODY}: {e}")))?
        .read_to_string(&mut xml)
        .map_err(|e| corrupt(path, e))?;
    let paragraphs = docx_paragraphs(&xml).map_err(|e| corrupt(path, e))?;
    Ok(paragraphs.join(SECTION_BREAK))
}

/// Non-blank `w:p` paragraphs of a WordprocessingML body, in document order.
fn docx_paragraphs(xml: &str) -> std::result::Result<Vec<String>, quick_xml::Error> {
    let mut reader = Reader::from_str(xml);
    let mut paragraphs = Vec::new();
    let mut current = String::new();
    let mut in_run = false;
    let mut in_text = false;

    loop {
        match reader.read_event()? {
            Event::Start(tag) => match tag.name().as_ref() {
                b"w:r" => in_run = true,
                b"w:t" => in_text = true,
                _ => {}
            },
            Event::Empty(tag) if in_run => match tag.name().as_ref() {
                b"w:tab" => current.push('\t'),
                b"w:br" | b"w:cr" => current.push('\n'),
                _ => {}
            },
            Event::Text(text) if in_text => current.push_str(&text.unescape()?),
            Event::End(tag) => match tag.name().as_ref() {
                b"w:r" => in_run = false,
                b"w:t" => in_text = false,
                b"w:p" => {
                    let paragraph = std::mem::take(&mut current);
                    if !paragraph.trim().is_empty() {
                        paragraphs.push(paragraph);
                    }
                }
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(paragraphs)
}

/// Every file below `root`, sorted so batch output is stable.
pub fn list_documents(root: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.path().to_path_buf())
        .collect();
    files.sort();
    files
}

pub fn clean_text(text: &str) -> String {
    let unix = text.replace("\r\n", "\n");
    let paragraphs = BLANK_RUNS.replace_all(&unix, "\n\n");
    SPACE_RUNS.replace_all(&paragraphs, " ").trim().to_string()
}
