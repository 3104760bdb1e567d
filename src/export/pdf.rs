use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// A4 portrait, in points.
const PAGE_W: f32 = 595.0;
const PAGE_H: f32 = 842.0;
const MARGIN: f32 = 50.0;
const ROW_H: f32 = 18.0;
/// Average Helvetica glyph width relative to the font size.
const GLYPH_RATIO: f32 = 0.55;

/// Minimal multi-page table writer on top of `pdf-writer`.
pub struct PdfTable {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    font_id: Ref,
    next_id: i32,
    page_refs: Vec<Ref>,

    font_size: f32,
    header_font_size: f32,
    title_font_size: f32,
}

impl Default for PdfTable {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfTable {
    pub fn new() -> Self {
        let mut pdf = Pdf::new();

        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);

        pdf.type1_font(font_id)
            .base_font(Name(b"Helvetica"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            font_id,
            next_id: 4,
            page_refs: Vec::new(),

            font_size: 9.0,
            header_font_size: 10.0,
            title_font_size: 14.0,
        }
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    /// Register a page and return the id its content stream must use.
    fn add_page(&mut self) -> Ref {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();
        self.page_refs.push(page_id);

        let mut page = self.pdf.page(page_id);
        page.parent(self.pages_id)
            .media_box(Rect::new(0.0, 0.0, PAGE_W, PAGE_H))
            .contents(content_id);
        page.resources().fonts().pair(Name(b"F1"), self.font_id);

        content_id
    }

    fn draw_text(content: &mut Content, x: f32, y: f32, size: f32, text: &str) {
        let bytes = win_ansi(text);
        content.begin_text();
        content.set_font(Name(b"F1"), size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(Str(&bytes));
        content.end_text();
    }

    fn fill_band(content: &mut Content, y: f32, width: f32, grey: f32) {
        content.save_state();
        content.set_fill_rgb(grey, grey, grey);
        content.rect(MARGIN, y, width, ROW_H);
        content.fill_nonzero();
        content.restore_state();
    }

    fn draw_row(&self, content: &mut Content, y: f32, widths: &[f32], row: &[String], size: f32) {
        let mut x = MARGIN;
        for (text, w) in row.iter().zip(widths) {
            let max_chars = ((w - 8.0) / (size * GLYPH_RATIO)).max(1.0) as usize;
            Self::draw_text(content, x + 4.0, y + 5.0, size, &fit(text, max_chars));

            content.save_state();
            content.set_stroke_rgb(0.7, 0.7, 0.7);
            content.rect(x, y, *w, ROW_H);
            content.stroke();
            content.restore_state();

            x += w;
        }
    }

    /// Column widths proportional to content, scaled down to the page.
    fn column_widths(&self, headers: &[&str], rows: &[Vec<String>]) -> Vec<f32> {
        let char_w = self.font_size * GLYPH_RATIO;
        let mut widths: Vec<f32> = headers
            .iter()
            .map(|h| h.chars().count() as f32 * char_w + 10.0)
            .collect();

        for row in rows {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = w.max(cell.chars().count() as f32 * char_w + 10.0);
            }
        }

        let available = PAGE_W - 2.0 * MARGIN;
        let total: f32 = widths.iter().sum();
        if total > available {
            let scale = available / total;
            widths.iter_mut().for_each(|w| *w *= scale);
        }
        widths
    }

    /// Lay out `rows` under a repeated header, as many pages as needed.
    /// An empty table still produces one page with title and header.
    pub fn write_table(&mut self, title: &str, headers: &[&str], rows: &[Vec<String>]) {
        let widths = self.column_widths(headers, rows);
        let table_w: f32 = widths.iter().sum();
        let header_row: Vec<String> = headers.iter().map(|h| h.to_string()).collect();

        let top = PAGE_H - MARGIN - 30.0;
        let per_page = (((top - MARGIN) / ROW_H) as usize).saturating_sub(1).max(1);

        let chunks: Vec<&[Vec<String>]> = if rows.is_empty() {
            vec![rows]
        } else {
            rows.chunks(per_page).collect()
        };
        let page_count = chunks.len();

        for (page_idx, chunk) in chunks.into_iter().enumerate() {
            let content_id = self.add_page();
            let mut content = Content::new();

            Self::draw_text(&mut content, MARGIN, PAGE_H - MARGIN + 10.0, self.title_font_size, title);
            Self::draw_text(
                &mut content,
                PAGE_W - MARGIN - 70.0,
                MARGIN - 30.0,
                self.font_size,
                &format!("Page {} / {}", page_idx + 1, page_count),
            );

            let mut y = top;
            Self::fill_band(&mut content, y, table_w, 0.82);
            self.draw_row(&mut content, y, &widths, &header_row, self.header_font_size);
            y -= ROW_H;

            for (i, row) in chunk.iter().enumerate() {
                if i % 2 == 0 {
                    Self::fill_band(&mut content, y, table_w, 0.95);
                }
                self.draw_row(&mut content, y, &widths, row, self.font_size);
                y -= ROW_H;
            }

            self.pdf.stream(content_id, &content.finish());
        }
    }

    pub fn save(mut self, path: &Path) -> std::io::Result<()> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        let count = self.page_refs.len() as i32;
        self.pdf
            .pages(self.pages_id)
            .count(count)
            .kids(self.page_refs.iter().copied());

        let bytes = self.pdf.finish();
        let mut f = File::create(path)?;
        f.write_all(&bytes)?;
        Ok(())
    }
}

/// Shorten `text` to `max_chars` characters, marking the cut with "..".
fn fit(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let keep = max_chars.saturating_sub(2);
    let mut out: String = text.chars().take(keep).collect();
    out.push_str("..");
    out
}

/// Encode for the WinAnsi font encoding: Latin-1 passes through,
/// everything else becomes '?'.
fn win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c as u32 {
            0x20..=0x7E | 0xA0..=0xFF => c as u32 as u8,
            _ => b'?',
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_win_ansi() {
        assert_eq!(win_ansi("Beyoncé"), b"Beyonc\xe9".to_vec());
        assert_eq!(win_ansi("夜に"), b"??".to_vec());
    }

    #[test]
    fn test_fit() {
        assert_eq!(fit("Song A", 10), "Song A");
        assert_eq!(fit("Stairway to Heaven", 8), "Stairw..");
    }
}
