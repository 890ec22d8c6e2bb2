//! Archive and workbook builders shared by the unit tests.

use std::fmt::Write as _;
use std::io::{Cursor, Write};

use zip::ZipWriter;
use zip::write::FileOptions;

/// One worksheet cell.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Cell {
    Text(&'static str),
    Number(f64),
}

/// Zips `entries` in memory.
pub(crate) fn zip_archive(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, data) in entries {
        writer.start_file(*name, FileOptions::default()).unwrap();
        writer.write_all(data).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

/// Builds a single-sheet xlsx workbook.
///
/// Rows are one-based sheet rows; cells fill columns from `A`.
pub(crate) fn xlsx_workbook(rows: &[(u32, Vec<Cell>)]) -> Vec<u8> {
    let mut sheet_data = String::new();
    for (row, cells) in rows {
        write!(sheet_data, r#"<row r="{row}">"#).unwrap();
        for (column, cell) in (b'A'..).zip(cells.iter()) {
            let reference = format!("{}{row}", column as char);
            match cell {
                Cell::Text(text) => write!(
                    sheet_data,
                    r#"<c r="{reference}" t="inlineStr"><is><t>{}</t></is></c>"#,
                    escape(text)
                ),
                Cell::Number(value) => {
                    write!(sheet_data, r#"<c r="{reference}"><v>{value}</v></c>"#)
                }
            }
            .unwrap();
        }
        sheet_data.push_str("</row>");
    }

    let sheet = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><sheetData>{sheet_data}</sheetData></worksheet>"#
    );

    zip_archive(&[
        ("[Content_Types].xml", CONTENT_TYPES.as_bytes()),
        ("_rels/.rels", ROOT_RELS.as_bytes()),
        ("xl/workbook.xml", WORKBOOK.as_bytes()),
        ("xl/_rels/workbook.xml.rels", WORKBOOK_RELS.as_bytes()),
        ("xl/worksheets/sheet1.xml", sheet.as_bytes()),
    ])
}

/// Supplier report laid out like the real feed: a title, the header on
/// sheet row 18 and three stock rows around a blank one.
pub(crate) fn stock_report_workbook() -> Vec<u8> {
    use Cell::{Number, Text};

    xlsx_workbook(&[
        (1, vec![Text("Остатки на складе")]),
        (
            18,
            vec![
                Text("№"),
                Text("Код"),
                Text("Наименование"),
                Text("Количество"),
                Text("Цена"),
            ],
        ),
        (
            19,
            vec![
                Number(1.0),
                Number(123.0),
                Text("Casio A158WA"),
                Text(">10"),
                Text("5'990.00 руб."),
            ],
        ),
        (
            20,
            vec![
                Number(2.0),
                Text("456"),
                Text("Casio F-91W"),
                Number(1.0),
                Text("7'500.50 руб."),
            ],
        ),
        (22, vec![Number(3.0), Text("789"), Text("Orient"), Text("3")]),
    ])
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/><Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/></Types>"#;

const ROOT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/></Relationships>"#;

const WORKBOOK: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><sheets><sheet name="TDSheet" sheetId="1" r:id="rId1"/></sheets></workbook>"#;

const WORKBOOK_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/></Relationships>"#;
