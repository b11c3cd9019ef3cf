//! PDF encoder.
//!
//! Draws a fixed-width table with the standard Helvetica fonts. The header
//! row is repeated at the top of every page; a page ends as soon as the next
//! row would cross [`PdfLayout::page_break_at`].

use std::ops::Range;

use kitroute_shared::PdfLayout;
use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, ObjectId, Stream, dictionary};

use super::error::ExportError;
use super::layout::{Column, RowShading, Table, TableRow};
use crate::reports::format::truncate;

const TITLE_SIZE: f32 = 14.0;
const TITLE_GAP: f32 = 30.0;
const CELL_PADDING: f32 = 4.0;
const HEADER_GRAY: f32 = 0.85;
const STRIPE_GRAY: f32 = 0.95;

/// Encodes a table as a paginated PDF document.
pub fn encode(table: &Table, layout: &PdfLayout) -> Result<Vec<u8>, ExportError> {
    let columns = table.layout.columns;
    let shade_alternate = table.layout.shading == RowShading::Alternate;

    let mut pages = Vec::new();
    for (page_index, range) in page_ranges(table.rows.len(), layout).into_iter().enumerate() {
        let mut page = PageWriter::new(layout);
        if page_index == 0 {
            page.title(&table.title);
        }
        page.header(columns);
        for index in range {
            page.row(columns, &table.rows[index], shade_alternate && index % 2 == 1);
        }
        pages.push(page.into_operations());
    }

    write_document(pages, layout)
}

/// Splits `row_count` rows into pages.
///
/// Always yields at least one page so an empty report still shows its
/// header.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn page_ranges(row_count: usize, layout: &PdfLayout) -> Vec<Range<usize>> {
    let capacity = |rows_top: f32| -> usize {
        let fit = ((layout.page_break_at - rows_top) / layout.row_height).floor();
        if fit.is_finite() && fit >= 1.0 { fit as usize } else { 1 }
    };
    let first = capacity(layout.margin + TITLE_GAP + layout.row_height);
    let rest = capacity(layout.margin + layout.row_height);

    let mut ranges = vec![0..first.min(row_count)];
    let mut start = first;
    while start < row_count {
        let end = (start + rest).min(row_count);
        ranges.push(start..end);
        start = end;
    }
    ranges
}

/// Accumulates drawing operations for one page.
struct PageWriter<'a> {
    layout: &'a PdfLayout,
    /// Distance from the top edge to the top of the next row.
    cursor: f32,
    operations: Vec<Operation>,
}

impl<'a> PageWriter<'a> {
    fn new(layout: &'a PdfLayout) -> Self {
        Self {
            layout,
            cursor: layout.margin,
            operations: Vec::new(),
        }
    }

    fn title(&mut self, title: &str) {
        let baseline = self.layout.page_height - self.cursor - TITLE_SIZE;
        self.text("F2", TITLE_SIZE, self.layout.margin, baseline, title);
        self.cursor += TITLE_GAP;
    }

    fn header(&mut self, columns: &[Column]) {
        self.fill_row(HEADER_GRAY, columns);
        let mut x = self.layout.margin;
        for column in columns {
            let baseline = self.baseline();
            self.text("F2", self.layout.font_size, x + CELL_PADDING, baseline, column.header);
            x += column.width;
        }
        self.cursor += self.layout.row_height;
    }

    fn row(&mut self, columns: &[Column], row: &TableRow, shaded: bool) {
        if shaded {
            self.fill_row(STRIPE_GRAY, columns);
        }
        let mut x = self.layout.margin;
        for (column, cell) in columns.iter().zip(&row.cells) {
            let mut value = cell.to_text();
            if column.is_name() {
                value = truncate(&value, self.layout.truncate_names_at);
            }
            let baseline = self.baseline();
            self.text("F1", self.layout.font_size, x + CELL_PADDING, baseline, &value);
            x += column.width;
        }
        self.cursor += self.layout.row_height;
    }

    fn baseline(&self) -> f32 {
        let row_bottom = self.layout.page_height - self.cursor - self.layout.row_height;
        row_bottom + (self.layout.row_height - self.layout.font_size) / 2.0 + 1.0
    }

    fn fill_row(&mut self, gray: f32, columns: &[Column]) {
        let width: f32 = columns.iter().map(|c| c.width).sum();
        let bottom = self.layout.page_height - self.cursor - self.layout.row_height;
        self.operations.extend([
            Operation::new("g", vec![gray.into()]),
            Operation::new(
                "re",
                vec![
                    self.layout.margin.into(),
                    bottom.into(),
                    width.into(),
                    self.layout.row_height.into(),
                ],
            ),
            Operation::new("f", vec![]),
            Operation::new("g", vec![0.0f32.into()]),
        ]);
    }

    fn text(&mut self, font: &str, size: f32, x: f32, y: f32, value: &str) {
        self.operations.extend([
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec![font.into(), size.into()]),
            Operation::new("Td", vec![x.into(), y.into()]),
            Operation::new("Tj", vec![Object::string_literal(win_ansi(value))]),
            Operation::new("ET", vec![]),
        ]);
    }

    fn into_operations(self) -> Vec<Operation> {
        self.operations
    }
}

/// Maps text to single-byte WinAnsi; characters outside Latin-1 become `?`.
fn win_ansi(value: &str) -> Vec<u8> {
    value
        .chars()
        .map(|ch| u8::try_from(u32::from(ch)).unwrap_or(b'?'))
        .collect()
}

fn font(base: &str) -> lopdf::Dictionary {
    dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => base,
        "Encoding" => "WinAnsiEncoding",
    }
}

fn write_document(pages: Vec<Vec<Operation>>, layout: &PdfLayout) -> Result<Vec<u8>, ExportError> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let regular_id = doc.add_object(font("Helvetica"));
    let bold_id = doc.add_object(font("Helvetica-Bold"));
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => regular_id,
            "F2" => bold_id,
        },
    });

    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
    for operations in pages {
        let content = Content { operations }
            .encode()
            .map_err(|e| ExportError::Pdf(e.to_string()))?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, content));
        let page_id: ObjectId = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let count = i64::try_from(kids.len()).map_err(|e| ExportError::Pdf(e.to_string()))?;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "Resources" => resources_id,
            "MediaBox" => vec![
                0.into(),
                0.into(),
                layout.page_width.into(),
                layout.page_height.into(),
            ],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer)
        .map_err(|e| ExportError::Pdf(e.to_string()))?;
    Ok(buffer)
}
