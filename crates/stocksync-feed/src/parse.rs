//! Stock report parsing.

use std::path::Path;

use calamine::{Data, Range, Reader, open_workbook_auto};
use stocksync_types::StockRecord;

use crate::FeedError;

/// Zero-based row holding the column names; the rows above it are a title block.
pub const DEFAULT_HEADER_ROW: u32 = 17;

/// Header names of the columns stocksync reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedColumns {
    /// Product code column.
    pub code: String,
    /// Quantity column.
    pub quantity: String,
    /// Price column.
    pub price: String,
}

impl Default for FeedColumns {
    fn default() -> Self {
        Self {
            code: "Код".to_string(),
            quantity: "Количество".to_string(),
            price: "Цена".to_string(),
        }
    }
}

/// Reads stock records from the first worksheet of a spreadsheet file.
///
/// # Errors
///
/// Returns an error if the file cannot be opened as a spreadsheet, has no
/// worksheet, or the header does not contain the configured columns.
pub fn parse_stock_sheet(
    path: &Path,
    header_row: u32,
    columns: &FeedColumns,
) -> Result<Vec<StockRecord>, FeedError> {
    let mut workbook = open_workbook_auto(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(FeedError::NoWorksheet)??;
    records_from_range(&range, header_row, columns)
}

/// Converts a worksheet range into stock records.
///
/// `header_row` is an absolute sheet row. Cells missing from a row read as
/// empty strings; rows with no data at all are skipped.
///
/// # Errors
///
/// Returns an error if the sheet ends before the header row or the header
/// lacks a configured column.
pub fn records_from_range(
    range: &Range<Data>,
    header_row: u32,
    columns: &FeedColumns,
) -> Result<Vec<StockRecord>, FeedError> {
    let not_found = || FeedError::HeaderNotFound { row: header_row };

    // Ranges start at the first used cell, not at A1.
    let first_row = range.start().map_or(0, |(row, _)| row);
    let skip = header_row.checked_sub(first_row).ok_or_else(not_found)? as usize;

    let mut rows = range.rows().skip(skip);
    let header = rows.next().ok_or_else(not_found)?;

    let code = column_index(header, &columns.code)?;
    let quantity = column_index(header, &columns.quantity)?;
    let price = column_index(header, &columns.price)?;

    let records: Vec<StockRecord> = rows
        .map(|row| StockRecord {
            code: cell_at(row, code),
            quantity: cell_at(row, quantity),
            price: cell_at(row, price),
        })
        .filter(|record| !record.is_blank())
        .collect();

    tracing::debug!(count = records.len(), "parsed stock records");
    Ok(records)
}

fn column_index(header: &[Data], name: &str) -> Result<usize, FeedError> {
    header
        .iter()
        .position(|cell| cell_text(cell).trim() == name)
        .ok_or_else(|| FeedError::MissingColumn(name.to_string()))
}

fn cell_at(row: &[Data], index: usize) -> String {
    row.get(index).map(cell_text).unwrap_or_default()
}

/// Renders a cell the way the spreadsheet displays it.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::stock_report_workbook;

    fn header_cells(range: &mut Range<Data>, row: u32) {
        range.set_value((row, 0), Data::String("№".to_string()));
        range.set_value((row, 1), Data::String("Код".to_string()));
        range.set_value((row, 2), Data::String("Наименование".to_string()));
        range.set_value((row, 3), Data::String("Количество".to_string()));
        range.set_value((row, 4), Data::String("Цена".to_string()));
    }

    /// Sheet with a title at A1, header at row 17 and three data rows.
    fn sample_range() -> Range<Data> {
        let mut range = Range::new((0, 0), (21, 4));
        range.set_value((0, 0), Data::String("Остатки на складе".to_string()));
        header_cells(&mut range, 17);

        range.set_value((18, 1), Data::Float(123.0));
        range.set_value((18, 2), Data::String("Casio A158WA".to_string()));
        range.set_value((18, 3), Data::String(">10".to_string()));
        range.set_value((18, 4), Data::String("5'990.00 руб.".to_string()));

        range.set_value((19, 1), Data::String("456".to_string()));
        range.set_value((19, 3), Data::Int(1));

        // Row 20 left empty.

        range.set_value((21, 1), Data::String("789".to_string()));
        range.set_value((21, 3), Data::Float(4.0));
        range.set_value((21, 4), Data::String("7'500.50 руб.".to_string()));
        range
    }

    #[test]
    fn test_records_after_header() {
        let records = records_from_range(&sample_range(), 17, &FeedColumns::default()).unwrap();

        assert_eq!(
            records,
            vec![
                StockRecord::new("123", ">10", "5'990.00 руб."),
                StockRecord::new("456", "1", ""),
                StockRecord::new("789", "4", "7'500.50 руб."),
            ]
        );
    }

    #[test]
    fn test_range_not_starting_at_a1() {
        let mut range = Range::new((17, 0), (18, 4));
        header_cells(&mut range, 17);
        range.set_value((18, 1), Data::String("A-1".to_string()));
        range.set_value((18, 3), Data::String("2".to_string()));

        let records = records_from_range(&range, 17, &FeedColumns::default()).unwrap();

        assert_eq!(records, vec![StockRecord::new("A-1", "2", "")]);
    }

    #[test]
    fn test_header_beyond_sheet() {
        let range = sample_range();
        let result = records_from_range(&range, 40, &FeedColumns::default());
        assert!(matches!(result, Err(FeedError::HeaderNotFound { row: 40 })));
    }

    #[test]
    fn test_header_above_used_range() {
        let mut range = Range::new((20, 0), (21, 4));
        header_cells(&mut range, 20);
        let result = records_from_range(&range, 17, &FeedColumns::default());
        assert!(matches!(result, Err(FeedError::HeaderNotFound { row: 17 })));
    }

    #[test]
    fn test_missing_column() {
        let columns = FeedColumns {
            price: "Стоимость".to_string(),
            ..Default::default()
        };
        let result = records_from_range(&sample_range(), 17, &columns);
        assert!(matches!(result, Err(FeedError::MissingColumn(name)) if name == "Стоимость"));
    }

    #[test]
    fn test_cell_text() {
        assert_eq!(cell_text(&Data::Empty), "");
        assert_eq!(cell_text(&Data::Int(42)), "42");
        assert_eq!(cell_text(&Data::Float(123.0)), "123");
        assert_eq!(cell_text(&Data::Float(12.5)), "12.5");
        assert_eq!(cell_text(&Data::String(">10".to_string())), ">10");
    }

    #[test]
    fn test_parse_stock_sheet_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ostatki.xlsx");
        std::fs::write(&path, stock_report_workbook()).unwrap();

        let records =
            parse_stock_sheet(&path, DEFAULT_HEADER_ROW, &FeedColumns::default()).unwrap();

        assert_eq!(
            records,
            vec![
                StockRecord::new("123", ">10", "5'990.00 руб."),
                StockRecord::new("456", "1", "7'500.50 руб."),
                StockRecord::new("789", "3", ""),
            ]
        );
    }
}
