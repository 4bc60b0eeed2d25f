// Document readers: turn a resume file on disk into plain text.
// The extraction pipeline only ever sees the resulting string.
use std::any::Any;
use std::fs::{self, File};
use std::io::Read;
use std::panic;
use std::path::Path;

use docx_rs::{DocumentChild, InsertChild, Paragraph, ParagraphChild, Run, RunChild};
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{ParseError, Result};

pub const SUPPORTED_EXTENSIONS: [&str; 4] = ["pdf", "docx", "txt", "md"];

/// Text pulled out of a resume file, plus where it came from.
#[derive(Debug, Clone, Serialize)]
pub struct RawDocument {
    pub text: String,
    pub extension: String,
}

impl RawDocument {
    pub fn new(text: impl Into<String>, extension: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            extension: extension.into(),
        }
    }

    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn byte_len(&self) -> usize {
        self.text.len()
    }
}

/// Lower-cased extension of `path`, or an empty string when it has none.
pub fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase()
}

pub fn is_supported(path: &Path) -> bool {
    SUPPORTED_EXTENSIONS.contains(&extension_of(path).as_str())
}

/// Reads a resume file into a [`RawDocument`].
///
/// Input is validated before the file is touched: an empty path is
/// `MissingInput`, an unknown extension is `UnsupportedFormat`.
pub fn read_document(path: &Path) -> Result<RawDocument> {
    if path.as_os_str().is_empty() {
        return Err(ParseError::MissingInput);
    }

    let ext = extension_of(path);
    let text = match ext.as_str() {
        "pdf" => read_pdf(path)?,
        "docx" => read_docx(path)?,
        "txt" | "md" => read_text_file(path)?,
        _ => return Err(ParseError::UnsupportedFormat(ext)),
    };

    debug!(path = %path.display(), ext = %ext, bytes = text.len(), "read document");
    Ok(RawDocument::new(text, ext))
}

fn io_error(path: &Path, source: std::io::Error) -> ParseError {
    ParseError::Io {
        path: path.to_path_buf(),
        source,
    }
}

fn read_text_file(p: &Path) -> Result<String> {
    let mut s = String::new();
    let mut f = File::open(p).map_err(|e| io_error(p, e))?;
    f.read_to_string(&mut s).map_err(|e| io_error(p, e))?;
    Ok(s)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string())
}

fn read_pdf(p: &Path) -> Result<String> {
    // open first so a missing file is Io, not Pdf
    File::open(p).map_err(|e| io_error(p, e))?;
    // pdf-extract panics on some malformed documents (undeclared fonts,
    // broken encodings) instead of returning an error
    match panic::catch_unwind(|| pdf_extract::extract_text(p)) {
        Ok(extracted) => extracted.map_err(|e| ParseError::Pdf(e.to_string())),
        Err(payload) => {
            let msg = panic_message(payload.as_ref());
            warn!(path = %p.display(), panic = %msg, "pdf reader panicked");
            Err(ParseError::Pdf(msg))
        }
    }
}

fn read_docx(p: &Path) -> Result<String> {
    let bytes = fs::read(p).map_err(|e| io_error(p, e))?;
    let docx = docx_rs::read_docx(&bytes).map_err(|e| ParseError::Docx(format!("{:?}", e)))?;

    let lines: Vec<String> = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(para) => Some(paragraph_text(para)),
            _ => None,
        })
        .collect();
    Ok(lines.join("\n"))
}

/// Visible text of one paragraph. Field instructions and deleted runs are
/// left out; hyperlinks and tracked insertions contribute their runs.
fn paragraph_text(para: &Paragraph) -> String {
    let mut out = String::new();
    for child in &para.children {
        push_paragraph_child(child, &mut out);
    }
    out
}

fn push_paragraph_child(child: &ParagraphChild, out: &mut String) {
    match child {
        ParagraphChild::Run(run) => push_run(run, out),
        ParagraphChild::Hyperlink(link) => {
            for c in &link.children {
                push_paragraph_child(c, out);
            }
        }
        ParagraphChild::Insert(ins) => {
            for c in &ins.children {
                if let InsertChild::Run(run) = c {
                    push_run(run, out);
                }
            }
        }
        _ => {}
    }
}

fn push_run(run: &Run, out: &mut String) {
    for rc in &run.children {
        match rc {
            RunChild::Text(t) => out.push_str(&t.text),
            RunChild::Tab(_) => out.push('\t'),
            RunChild::Break(_) => out.push('\n'),
            _ => {}
        }
    }
}
