// Delimited-text panel source - Header row plus comma separated lines
use crate::application::asset_fetcher::AssetFetcher;
use crate::application::panel_source::PanelSource;
use crate::application::source_error::SourceError;
use crate::domain::cell::RawRow;
use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;

/// How commas inside a field are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextDialect {
    /// Every comma separates cells. A value containing a comma shifts the
    /// rest of its line one column to the right.
    #[default]
    Plain,
    /// Double-quoted fields may contain commas, quotes and line breaks.
    Quoted,
}

#[derive(Clone)]
pub struct DelimitedTextSource {
    fetcher: Arc<dyn AssetFetcher>,
    path: String,
    dialect: TextDialect,
}

impl DelimitedTextSource {
    pub fn new(fetcher: Arc<dyn AssetFetcher>, path: String, dialect: TextDialect) -> Self {
        Self {
            fetcher,
            path,
            dialect,
        }
    }
}

#[async_trait]
impl PanelSource for DelimitedTextSource {
    fn name(&self) -> &str {
        "delimited-text"
    }

    async fn load_rows(&self) -> Result<Vec<RawRow>, SourceError> {
        let body = self.fetcher.fetch(&self.path).await?;
        let text = String::from_utf8_lossy(&body);
        parse_delimited_text(&text, self.dialect)
    }
}

pub fn parse_delimited_text(text: &str, dialect: TextDialect) -> Result<Vec<RawRow>, SourceError> {
    match dialect {
        TextDialect::Plain => Ok(parse_plain(text)),
        TextDialect::Quoted => Ok(parse_quoted(text)?),
    }
}

/// Trim surrounding whitespace and byte-order marks, as spreadsheet exports
/// often start with U+FEFF.
fn trim_text(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Split on line breaks and bare commas. The first line names the columns;
/// cells are trimmed and missing trailing cells become empty strings.
pub fn parse_plain(text: &str) -> Vec<RawRow> {
    let mut lines = trim_text(text)
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line));

    let Some(header_line) = lines.next() else {
        return Vec::new();
    };
    let headers: Vec<&str> = header_line.split(',').map(str::trim).collect();

    lines
        .map(|line| {
            let values: Vec<&str> = line.split(',').collect();
            headers
                .iter()
                .enumerate()
                .map(|(i, header)| (*header, values.get(i).map_or("", |v| v.trim())))
                .collect::<RawRow>()
        })
        .collect()
}

fn parse_quoted(text: &str) -> Result<Vec<RawRow>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(trim_text(text).as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row: RawRow = headers
            .iter()
            .enumerate()
            .map(|(i, header)| (header.as_str(), record.get(i).unwrap_or("")))
            .collect();
        rows.push(row);
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cell::CellValue;
    use crate::domain::panel::PanelPage;
    use crate::test_support::MemoryAssetFetcher;

    fn cell(s: &str) -> CellValue {
        CellValue::from(s)
    }

    #[test]
    fn test_single_data_line() {
        let rows = parse_plain("name,resX\nPanelA,100");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].len(), 2);
        assert_eq!(rows[0].field("name"), Some(&cell("PanelA")));
        assert_eq!(rows[0].field("resX"), Some(&cell("100")));
    }

    #[test]
    fn test_missing_trailing_cells_are_empty() {
        let rows = parse_plain("name,resX,resY\nPanelA,100");
        assert_eq!(rows[0].field("resY"), Some(&cell("")));
    }

    #[test]
    fn test_crlf_and_padding() {
        let rows = parse_plain("  name , ResX \r\n PanelA , 100 \r\nPanelB,200\r\n\r\n");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].field("name"), Some(&cell("PanelA")));
        assert_eq!(rows[0].field("resX"), Some(&cell("100")));
        assert_eq!(rows[1].field("resX"), Some(&cell("200")));
    }

    #[test]
    fn test_leading_byte_order_mark_is_dropped() {
        let rows = parse_plain("\u{feff}name,resX\nPanelA,100");
        assert_eq!(rows[0].field("name"), Some(&cell("PanelA")));

        let rows =
            parse_delimited_text("\u{feff}name,resX\nPanelA,100", TextDialect::Quoted).unwrap();
        assert_eq!(rows[0].field("name"), Some(&cell("PanelA")));
    }

    #[test]
    fn test_header_only_and_empty_text() {
        assert!(parse_plain("name,resX").is_empty());
        assert!(parse_plain("").is_empty());
        assert!(parse_plain("   \n  ").is_empty());
    }

    #[test]
    fn test_plain_dialect_shifts_on_embedded_comma() {
        let rows = parse_plain("name,resX\n\"Panel, curved\",100");
        assert_eq!(rows[0].field("name"), Some(&cell("\"Panel")));
        assert_eq!(rows[0].field("resX"), Some(&cell("curved\"")));
    }

    #[test]
    fn test_quoted_dialect_keeps_embedded_comma() {
        let rows =
            parse_delimited_text("name,resX,resY\n\"Panel, curved\",100", TextDialect::Quoted)
                .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].field("name"), Some(&cell("Panel, curved")));
        assert_eq!(rows[0].field("resX"), Some(&cell("100")));
        assert_eq!(rows[0].field("resY"), Some(&cell("")));
    }

    #[tokio::test]
    async fn test_source_reads_through_fetcher() {
        let fetcher = MemoryAssetFetcher::new()
            .with_asset("/panels.csv", "Name,ResX\nPanelA,100\nPanelB,abc");
        let source = DelimitedTextSource::new(
            Arc::new(fetcher),
            "/panels.csv".to_string(),
            TextDialect::Plain,
        );

        let rows = source.load_rows().await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].field("resX"), Some(&cell("abc")));
    }

    #[tokio::test]
    async fn test_excel_export_with_byte_order_mark() {
        let mut body = vec![0xEF, 0xBB, 0xBF];
        body.extend_from_slice(b"name,resX\r\nPanelA,100\r\n");
        let fetcher = MemoryAssetFetcher::new().with_asset("/panels.csv", body);
        let source = DelimitedTextSource::new(
            Arc::new(fetcher),
            "/panels.csv".to_string(),
            TextDialect::Plain,
        );

        let page = PanelPage::from_rows(&source.load_rows().await.unwrap());
        assert_eq!(page.panels[0].name, "PanelA");
        assert_eq!(page.panels[0].res_x, 100.0);
    }
}
