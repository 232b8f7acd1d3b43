//! Client review export
//!
//! Copies a fixed projection of the profile (name, date, the first ten
//! priorities and the first three options) into a one-page PDF and writes it
//! to the export directory. Longer lists are truncated without notice.

mod pdf;

pub use pdf::PdfDocument;

use crate::error::ExportError;
use crate::state::ClientProfile;
use std::fs;
use std::path::{Path, PathBuf};

pub const MAX_PRIORITIES: usize = 10;
pub const MAX_OPTIONS: usize = 3;

/// One option as it appears on the review
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSummary {
    pub name: String,
    pub risk: String,
    pub score: u8,
}

/// The part of the profile that reaches the exported document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewSummary {
    pub name: String,
    pub date: String,
    pub priorities: Vec<String>,
    pub options: Vec<OptionSummary>,
}

impl ReviewSummary {
    pub fn from_profile(profile: &ClientProfile) -> Self {
        Self {
            name: profile.name.clone().unwrap_or_default(),
            date: profile.date.clone().unwrap_or_default(),
            priorities: profile
                .priorities
                .iter()
                .take(MAX_PRIORITIES)
                .cloned()
                .collect(),
            options: profile
                .options
                .iter()
                .take(MAX_OPTIONS)
                .map(|o| OptionSummary {
                    name: o.name.clone(),
                    risk: o.risk.label().to_string(),
                    score: o.score.get(),
                })
                .collect(),
        }
    }

    pub fn priorities_line(&self) -> String {
        if self.priorities.is_empty() {
            "—".to_string()
        } else {
            self.priorities.join(", ")
        }
    }

    pub fn option_lines(&self) -> Vec<String> {
        self.options
            .iter()
            .enumerate()
            .map(|(i, o)| {
                format!(
                    "{}. {} — Risk: {} — Score: {}",
                    i + 1,
                    o.name,
                    o.risk,
                    o.score
                )
            })
            .collect()
    }

    /// Lay the summary out at its fixed positions
    pub fn to_document(&self, brand: &str) -> PdfDocument {
        let mut doc = PdfDocument::new();
        doc.set_font_size(18.0);
        doc.text(format!("{brand} — Client Review"), 14.0, 18.0);
        doc.set_font_size(12.0);
        doc.text(format!("Client: {}", self.name), 14.0, 28.0);
        doc.text(format!("Date: {}", self.date), 14.0, 34.0);
        doc.text("Priorities:", 14.0, 44.0);
        doc.text(self.priorities_line(), 14.0, 50.0);
        doc.text("Options:", 14.0, 60.0);
        for (i, line) in self.option_lines().into_iter().enumerate() {
            doc.text(line, 14.0, 66.0 + i as f32 * 8.0);
        }
        doc
    }
}

/// Characters no file name on any platform may carry
const RESERVED: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// `Client_Review_<name>.pdf`, whitespace runs becoming `_` and path
/// separators or reserved characters each becoming `_`; `Client` when unnamed
pub fn export_file_name(name: Option<&str>) -> String {
    let base = match name {
        Some(n) if !n.is_empty() => n,
        _ => "Client",
    };
    let mut cleaned = String::with_capacity(base.len());
    let mut in_whitespace = false;
    for ch in base.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                cleaned.push('_');
            }
            in_whitespace = true;
        } else if ch.is_control() || RESERVED.contains(&ch) {
            cleaned.push('_');
            in_whitespace = false;
        } else {
            cleaned.push(ch);
            in_whitespace = false;
        }
    }
    format!("Client_Review_{cleaned}.pdf")
}

/// A rendered review ready to be written out
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewExport {
    pub file_name: String,
    pub document: PdfDocument,
}

impl ReviewExport {
    /// Render the review for `profile`; reads the profile only
    pub fn render(profile: &ClientProfile, brand: &str) -> Self {
        Self {
            file_name: export_file_name(profile.name.as_deref()),
            document: ReviewSummary::from_profile(profile).to_document(brand),
        }
    }

    /// Write the document into `dir`, returning the full path
    pub fn save_to(&self, dir: &Path) -> Result<PathBuf, ExportError> {
        let path = dir.join(&self.file_name);
        fs::create_dir_all(dir)
            .and_then(|_| fs::write(&path, self.document.to_bytes()))
            .map_err(|source| ExportError::Write {
                path: path.clone(),
                source,
            })?;
        tracing::info!(path = %path.display(), "exported client review");
        Ok(path)
    }
}
