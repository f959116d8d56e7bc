//! Minimal single-font-family PDF writer for plain text tables.
//!
//! Layout works top-down in points like a canvas; coordinates are flipped to
//! PDF user space when the text operators are written.

use std::mem;

const PAGE_WIDTH: i32 = 595;
const PAGE_HEIGHT: i32 = 842;
const MARGIN_LEFT: i32 = 32;
const MARGIN_RIGHT: i32 = 32;
const MARGIN_TOP: i32 = 40;
const MARGIN_BOTTOM: i32 = 40;

const TITLE_SIZE: i32 = 18;
const HEADER_SIZE: i32 = 12;
const CELL_SIZE: i32 = 12;
const LINE_HEIGHT: i32 = 20;
const MAX_CELL_CHARS: usize = 64;

const REGULAR: &str = "F1";
const BOLD: &str = "F2";

struct Canvas {
    finished: Vec<String>,
    current: String,
    y: i32,
}

impl Canvas {
    fn new() -> Self {
        Self {
            finished: Vec::new(),
            current: String::new(),
            y: MARGIN_TOP,
        }
    }

    fn new_page(&mut self) {
        self.finished.push(mem::take(&mut self.current));
        self.y = MARGIN_TOP;
    }

    fn text(&mut self, font: &str, size: i32, x: i32, text: &str) {
        self.current.push_str(&format!(
            "BT /{} {} Tf {} {} Td ({}) Tj ET\n",
            font,
            size,
            x,
            PAGE_HEIGHT - self.y,
            escape_text(text)
        ));
    }

    fn rule(&mut self, from_x: i32, to_x: i32) {
        let y = PAGE_HEIGHT - self.y;
        self.current
            .push_str(&format!("{} {} m {} {} l S\n", from_x, y, to_x, y));
    }

    fn finish(mut self) -> Vec<String> {
        self.finished.push(self.current);
        self.finished
    }
}

/// Renders a titled table onto as many A4 portrait pages as the rows need.
/// Cells longer than 64 characters are clipped.
pub fn build_simple_table_pdf(title: &str, headers: &[String], rows: &[Vec<String>]) -> Vec<u8> {
    let usable_width = PAGE_WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let col_width = usable_width / i32::try_from(headers.len().max(1)).unwrap_or(i32::MAX);
    let column_x = |idx: usize| MARGIN_LEFT + i32::try_from(idx).unwrap_or(0) * col_width;

    let mut canvas = Canvas::new();
    canvas.text(BOLD, TITLE_SIZE, MARGIN_LEFT, title);
    canvas.y += LINE_HEIGHT + 6;

    for (idx, header) in headers.iter().enumerate() {
        canvas.text(BOLD, HEADER_SIZE, column_x(idx), header);
    }
    canvas.y += LINE_HEIGHT;

    canvas.rule(MARGIN_LEFT, PAGE_WIDTH - MARGIN_RIGHT);
    canvas.y += 10;

    for row in rows {
        if canvas.y + LINE_HEIGHT > PAGE_HEIGHT - MARGIN_BOTTOM {
            canvas.new_page();
        }
        for (idx, cell) in row.iter().enumerate() {
            let clipped: String = cell.chars().take(MAX_CELL_CHARS).collect();
            canvas.text(REGULAR, CELL_SIZE, column_x(idx), &clipped);
        }
        canvas.y += LINE_HEIGHT;
    }

    let pages = canvas.finish();
    tracing::debug!(title, rows = rows.len(), pages = pages.len(), "Rendered PDF table");
    write_document(&pages)
}

/// Escapes a PDF literal string in WinAnsi encoding. Characters outside it
/// become `?`.
fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' | '(' | ')' => {
                out.push('\\');
                out.push(ch);
            }
            '\t' => out.push(' '),
            ' '..='~' => out.push(ch),
            '\u{2022}' => out.push_str("\\225"),
            '\u{2013}' => out.push_str("\\226"),
            '\u{2014}' => out.push_str("\\227"),
            '\u{a0}'..='\u{ff}' => out.push_str(&format!("\\{:03o}", u32::from(ch))),
            _ => out.push('?'),
        }
    }
    out
}

fn font_object(base: &str) -> String {
    format!(
        "<< /Type /Font /Subtype /Type1 /BaseFont /{} /Encoding /WinAnsiEncoding >>",
        base
    )
}

fn write_document(pages: &[String]) -> Vec<u8> {
    // 1 catalog, 2 page tree, 3-4 fonts, then a page/content pair per page
    let page_id = |idx: usize| 5 + idx * 2;
    let kids = (0..pages.len())
        .map(|idx| format!("{} 0 R", page_id(idx)))
        .collect::<Vec<_>>()
        .join(" ");

    let mut objects = vec![
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        format!("<< /Type /Pages /Kids [{}] /Count {} >>", kids, pages.len()),
        font_object("Helvetica"),
        font_object("Helvetica-Bold"),
    ];
    for (idx, content) in pages.iter().enumerate() {
        objects.push(format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {} {}] \
             /Resources << /Font << /{} 3 0 R /{} 4 0 R >> >> /Contents {} 0 R >>",
            PAGE_WIDTH,
            PAGE_HEIGHT,
            REGULAR,
            BOLD,
            page_id(idx) + 1
        ));
        objects.push(format!(
            "<< /Length {} >>\nstream\n{}\nendstream",
            content.len(),
            content
        ));
    }

    let mut out: Vec<u8> = b"%PDF-1.4\n".to_vec();
    let mut offsets = Vec::with_capacity(objects.len());
    for (idx, body) in objects.iter().enumerate() {
        offsets.push(out.len());
        out.extend_from_slice(format!("{} 0 obj\n{}\nendobj\n", idx + 1, body).as_bytes());
    }

    let xref_at = out.len();
    let mut xref = format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1);
    for offset in offsets {
        xref.push_str(&format!("{:010} 00000 n \n", offset));
    }
    xref.push_str(&format!(
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
        objects.len() + 1,
        xref_at
    ));
    out.extend_from_slice(xref.as_bytes());
    out
}
