// Shared fixtures for unit tests
use crate::application::asset_fetcher::AssetFetcher;
use crate::application::source_error::SourceError;
use async_trait::async_trait;
use bytes::Bytes;
use rust_xlsxwriter::Workbook;
use std::collections::HashMap;

/// In-memory asset store; paths that were never added are missing.
#[derive(Debug, Clone, Default)]
pub struct MemoryAssetFetcher {
    assets: HashMap<String, Bytes>,
}

impl MemoryAssetFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_asset(mut self, path: &str, body: impl Into<Bytes>) -> Self {
        self.assets.insert(path.to_string(), body.into());
        self
    }
}

#[async_trait]
impl AssetFetcher for MemoryAssetFetcher {
    async fn fetch(&self, path: &str) -> Result<Bytes, SourceError> {
        self.assets
            .get(path)
            .cloned()
            .ok_or_else(|| SourceError::MissingAsset(path.to_string()))
    }
}

#[derive(Debug, Clone, Copy)]
pub enum SheetCell<'a> {
    Text(&'a str),
    Number(f64),
    Bool(bool),
    Blank,
}

/// Build an xlsx workbook whose first sheet holds `rows`.
pub fn xlsx_bytes(rows: &[Vec<SheetCell>]) -> Vec<u8> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (r, row) in rows.iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            let (r, c) = (r as u32, c as u16);
            match *cell {
                SheetCell::Text(s) => {
                    worksheet.write_string(r, c, s).unwrap();
                }
                SheetCell::Number(n) => {
                    worksheet.write_number(r, c, n).unwrap();
                }
                SheetCell::Bool(b) => {
                    worksheet.write_boolean(r, c, b).unwrap();
                }
                SheetCell::Blank => {}
            }
        }
    }

    workbook.save_to_buffer().unwrap()
}
