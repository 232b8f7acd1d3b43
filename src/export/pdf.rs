//! Minimal PDF writer for text-only documents
//!
//! Positions are given in millimetres from the top-left corner of an A4 page
//! and text is set in Helvetica with WinAnsi encoding, which covers Latin-1
//! plus typographic dashes.

use std::fmt::Write as _;

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const PT_PER_MM: f32 = 72.0 / 25.4;
const DEFAULT_FONT_SIZE: f32 = 16.0;

/// One line of text placed on a page
#[derive(Debug, Clone, PartialEq)]
pub struct TextItem {
    pub text: String,
    pub x_mm: f32,
    pub y_mm: f32,
    pub font_size: f32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub items: Vec<TextItem>,
}

/// A paginated text document
#[derive(Debug, Clone, PartialEq)]
pub struct PdfDocument {
    pages: Vec<Page>,
    font_size: f32,
}

impl Default for PdfDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfDocument {
    /// A document with one empty page
    pub fn new() -> Self {
        Self {
            pages: vec![Page::default()],
            font_size: DEFAULT_FONT_SIZE,
        }
    }

    pub fn set_font_size(&mut self, size: f32) {
        self.font_size = size;
    }

    /// Place a line of text on the current page at the given baseline
    pub fn text(&mut self, text: impl Into<String>, x_mm: f32, y_mm: f32) {
        let item = TextItem {
            text: text.into(),
            x_mm,
            y_mm,
            font_size: self.font_size,
        };
        if let Some(page) = self.pages.last_mut() {
            page.items.push(item);
        }
    }

    #[cfg(test)]
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Every line of text in page order
    #[cfg(test)]
    pub fn text_lines(&self) -> Vec<&str> {
        self.pages
            .iter()
            .flat_map(|p| p.items.iter().map(|i| i.text.as_str()))
            .collect()
    }

    /// Serialize to PDF 1.4 bytes
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out: Vec<u8> = Vec::new();
        let mut offsets: Vec<usize> = Vec::new();

        out.extend_from_slice(b"%PDF-1.4\n%\xE2\xE3\xCF\xD3\n");

        let page_ids: Vec<usize> = (0..self.pages.len()).map(|i| 4 + 2 * i).collect();
        let kids = page_ids
            .iter()
            .map(|id| format!("{id} 0 R"))
            .collect::<Vec<_>>()
            .join(" ");

        push_object(
            &mut out,
            &mut offsets,
            b"<< /Type /Catalog /Pages 2 0 R >>".to_vec(),
        );
        push_object(
            &mut out,
            &mut offsets,
            format!(
                "<< /Type /Pages /Kids [{kids}] /Count {} >>",
                self.pages.len()
            )
            .into_bytes(),
        );
        push_object(
            &mut out,
            &mut offsets,
            b"<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>"
                .to_vec(),
        );

        for (page, page_id) in self.pages.iter().zip(&page_ids) {
            let content_id = page_id + 1;
            push_object(
                &mut out,
                &mut offsets,
                format!(
                    "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {:.2} {:.2}] \
                     /Resources << /Font << /F1 3 0 R >> >> /Contents {content_id} 0 R >>",
                    PAGE_WIDTH_MM * PT_PER_MM,
                    PAGE_HEIGHT_MM * PT_PER_MM
                )
                .into_bytes(),
            );

            let stream = content_stream(page);
            let mut body = format!("<< /Length {} >>\nstream\n", stream.len()).into_bytes();
            body.extend_from_slice(&stream);
            body.extend_from_slice(b"\nendstream");
            push_object(&mut out, &mut offsets, body);
        }

        let xref_offset = out.len();
        let mut xref = format!("xref\n0 {}\n0000000000 65535 f \n", offsets.len() + 1);
        for offset in &offsets {
            let _ = writeln!(xref, "{offset:010} 00000 n ");
        }
        let _ = write!(
            xref,
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_offset}\n%%EOF\n",
            offsets.len() + 1
        );
        out.extend_from_slice(xref.as_bytes());
        out
    }
}

fn push_object(out: &mut Vec<u8>, offsets: &mut Vec<usize>, body: Vec<u8>) {
    offsets.push(out.len());
    let id = offsets.len();
    out.extend_from_slice(format!("{id} 0 obj\n").as_bytes());
    out.extend_from_slice(&body);
    out.extend_from_slice(b"\nendobj\n");
}

fn content_stream(page: &Page) -> Vec<u8> {
    let mut stream = Vec::new();
    for item in &page.items {
        let x = item.x_mm * PT_PER_MM;
        let y = (PAGE_HEIGHT_MM - item.y_mm) * PT_PER_MM;
        stream.extend_from_slice(
            format!("BT /F1 {:.1} Tf {x:.2} {y:.2} Td (", item.font_size).as_bytes(),
        );
        stream.extend_from_slice(&encode_literal(&item.text));
        stream.extend_from_slice(b") Tj ET\n");
    }
    stream
}

/// WinAnsi-encode `text` for a PDF literal string, escaping delimiters
pub fn encode_literal(text: &str) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(text.len());
    for ch in text.chars() {
        let byte = match ch {
            '\\' | '(' | ')' => {
                bytes.push(b'\\');
                ch as u8
            }
            '\u{2013}' => 0x96,
            '\u{2014}' => 0x97,
            '\u{2018}' => 0x91,
            '\u{2019}' => 0x92,
            '\u{201C}' => 0x93,
            '\u{201D}' => 0x94,
            '\u{2022}' => 0x95,
            '\u{20AC}' => 0x80,
            c if (c as u32) < 0x20 => b' ',
            c if (c as u32) < 0x80 || (0xA0..=0xFF).contains(&(c as u32)) => c as u32 as u8,
            _ => b'?',
        };
        bytes.push(byte);
    }
    bytes
}
