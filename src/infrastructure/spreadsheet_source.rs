// Spreadsheet panel source - First worksheet of a workbook asset
use crate::application::asset_fetcher::AssetFetcher;
use crate::application::panel_source::PanelSource;
use crate::application::source_error::SourceError;
use crate::domain::cell::{CellValue, RawRow};
use async_trait::async_trait;
use calamine::{open_workbook_auto_from_rs, Data, Reader};
use std::collections::HashSet;
use std::io::Cursor;
use std::sync::Arc;

#[derive(Clone)]
pub struct SpreadsheetSource {
    fetcher: Arc<dyn AssetFetcher>,
    path: String,
}

impl SpreadsheetSource {
    pub fn new(fetcher: Arc<dyn AssetFetcher>, path: String) -> Self {
        Self { fetcher, path }
    }
}

#[async_trait]
impl PanelSource for SpreadsheetSource {
    fn name(&self) -> &str {
        "spreadsheet"
    }

    async fn load_rows(&self) -> Result<Vec<RawRow>, SourceError> {
        let body = self.fetcher.fetch(&self.path).await?;
        read_first_sheet(body.to_vec())
    }
}

/// Decode a workbook (xlsx, xls, xlsb or ods) and turn its first sheet into
/// rows keyed by the header row.
pub fn read_first_sheet(workbook_bytes: Vec<u8>) -> Result<Vec<RawRow>, SourceError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(workbook_bytes))?;

    let Some(range) = workbook.worksheet_range_at(0) else {
        return Ok(Vec::new());
    };
    let range = range?;

    let mut rows = range.rows();
    let Some(header_row) = rows.next() else {
        return Ok(Vec::new());
    };
    let headers = unique_headers(header_row.iter().map(header_text).collect());

    let records = rows
        .filter_map(|cells| {
            let row: RawRow = headers
                .iter()
                .zip(cells)
                .filter_map(|(header, cell)| Some((header.clone()?, cell_value(cell)?)))
                .collect();
            // Blank lines in the sheet are not panels
            (!row.is_empty()).then_some(row)
        })
        .collect();

    Ok(records)
}

/// Repeated header names keep the first column under the plain name and
/// suffix later ones with `_1`, `_2`, ...
fn unique_headers(headers: Vec<Option<String>>) -> Vec<Option<String>> {
    let mut seen: HashSet<String> = HashSet::new();
    headers
        .into_iter()
        .map(|header| {
            let header = header?;
            let mut unique = header.clone();
            let mut counter = 0;
            while seen.contains(&unique) {
                counter += 1;
                unique = format!("{}_{}", header, counter);
            }
            seen.insert(unique.clone());
            Some(unique)
        })
        .collect()
}

fn header_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        other => Some(other.to_string()).filter(|text| !text.is_empty()),
    }
}

fn cell_value(cell: &Data) -> Option<CellValue> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::Int(v) => Some(CellValue::Number(*v as f64)),
        Data::Float(v) => Some(CellValue::Number(*v)),
        Data::Bool(v) => Some(CellValue::Bool(*v)),
        Data::String(v) => Some(CellValue::Text(v.clone())),
        Data::DateTime(v) => Some(CellValue::Number(v.as_f64())),
        Data::DateTimeIso(v) | Data::DurationIso(v) => Some(CellValue::Text(v.clone())),
    }
}
