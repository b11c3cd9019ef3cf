//! Excel (xlsx) encoder.

use rust_xlsxwriter::{Color, Format, FormatBorder, Workbook};

use super::error::ExportError;
use super::layout::{Cell, RowShading, Table, TableRow};

const HEADER_FILL: Color = Color::RGB(0x00D9_E1F2);
const GROUP_FILLS: [Color; 2] = [Color::RGB(0x00FF_FFFF), Color::RGB(0x00EE_F3FA)];
const MONEY_FORMAT: &str = "\"R$ \"#,##0.00";

/// Sheet names are capped at 31 characters by Excel.
const MAX_SHEET_NAME: usize = 31;

/// Encodes a table as a single-sheet workbook.
pub fn encode(table: &Table) -> Result<Vec<u8>, ExportError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    let sheet_name: String = table.layout.title.chars().take(MAX_SHEET_NAME).collect();
    sheet.set_name(sheet_name)?;

    let header_format = Format::new()
        .set_bold()
        .set_background_color(HEADER_FILL)
        .set_border(FormatBorder::Thin);

    for (col, column) in (0u16..).zip(table.layout.columns) {
        sheet.set_column_width(col, f64::from(column.width))?;
        sheet.write_string_with_format(0, col, column.header, &header_format)?;
    }
    sheet.set_freeze_panes(1, 0)?;

    let fills = row_fills(table.layout.shading, &table.rows);

    for ((row_num, row), fill) in (1u32..).zip(&table.rows).zip(fills) {
        for (col, cell) in (0u16..).zip(&row.cells) {
            match cell {
                Cell::Text(text) => {
                    sheet.write_string_with_format(row_num, col, text, &cell_format(fill, false))?;
                }
                Cell::Money(money) => {
                    sheet.write_number_with_format(
                        row_num,
                        col,
                        money.to_f64(),
                        &cell_format(fill, true),
                    )?;
                }
            }
        }
    }

    Ok(workbook.save_to_buffer()?)
}

fn cell_format(fill: Option<Color>, money: bool) -> Format {
    let mut format = Format::new().set_border(FormatBorder::Thin);
    if let Some(color) = fill {
        format = format.set_background_color(color);
    }
    if money {
        format = format.set_num_format(MONEY_FORMAT);
    }
    format
}

fn row_fills(shading: RowShading, rows: &[TableRow]) -> Vec<Option<Color>> {
    match shading {
        RowShading::OrderGroups => group_bands(rows)
            .into_iter()
            .map(|band| Some(GROUP_FILLS[band]))
            .collect(),
        RowShading::Alternate => (0..rows.len())
            .map(|i| Some(GROUP_FILLS[i % 2]))
            .collect(),
        RowShading::None => vec![None; rows.len()],
    }
}

/// Assigns band 0 or 1 to each row, flipping whenever the group key differs
/// from the previous row's.
pub(crate) fn group_bands(rows: &[TableRow]) -> Vec<usize> {
    let mut band = 0;
    let mut previous: Option<&str> = None;

    rows.iter()
        .map(|row| {
            if previous.is_some_and(|p| p != row.group) {
                band = 1 - band;
            }
            previous = Some(row.group.as_str());
            band
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::layout::{Table, layout_for};
    use crate::reports::types::{ExportFormat, KitReportRow, ReportRows, ReportType};

    fn row(group: &str) -> TableRow {
        TableRow {
            cells: Vec::new(),
            group: group.to_string(),
        }
    }

    #[test]
    fn test_group_bands_flip_on_order_change() {
        let rows = vec![
            row("KR25-0001"),
            row("KR25-0001"),
            row("KR25-0002"),
            row("KR25-0003"),
            row("KR25-0003"),
            row("KR25-0003"),
        ];
        assert_eq!(group_bands(&rows), vec![0, 0, 1, 0, 0, 0]);
    }

    #[test]
    fn test_group_bands_empty() {
        assert!(group_bands(&[]).is_empty());
    }

    #[test]
    fn test_encode_produces_xlsx_archive() {
        let kit = KitReportRow {
            order_number: "KR25-0001".to_string(),
            athlete_name: "Ana".to_string(),
            cpf: "123.456.789-01".to_string(),
            shirt_size: "P".to_string(),
            product_label: "[Retirada do Kit] Corrida".to_string(),
            customer_name: "Carlos".to_string(),
            delivery_address: "Rua A, 1 - Centro, JP/PB".to_string(),
        };
        let layout = layout_for(ReportType::Kits, ExportFormat::Excel).unwrap();
        let table = Table::build(layout, &ReportRows::Kits(vec![kit.clone(), kit]), "Corrida");

        let bytes = encode(&table).unwrap();

        // xlsx files are zip archives
        assert!(bytes.starts_with(b"PK"));
    }
}
