// Untyped source rows as produced by the spreadsheet, text and bundled sources
use std::collections::HashMap;

/// A single cell value before normalization.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    List(Vec<CellValue>),
}

impl CellValue {
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

impl From<serde_json::Value> for CellValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => CellValue::Null,
            serde_json::Value::Bool(b) => CellValue::Bool(b),
            serde_json::Value::Number(n) => {
                n.as_f64().map(CellValue::Number).unwrap_or(CellValue::Null)
            }
            serde_json::Value::String(s) => CellValue::Text(s),
            serde_json::Value::Array(items) => {
                CellValue::List(items.into_iter().map(CellValue::from).collect())
            }
            // Nested objects carry no panel semantics
            serde_json::Value::Object(_) => CellValue::Null,
        }
    }
}

/// One header-keyed row from any source.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow {
    cells: HashMap<String, CellValue>,
}

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<CellValue>) {
        self.cells.insert(key.into(), value.into());
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Look a field up by its camelCase name, falling back to the PascalCase
    /// spelling. A null or missing camelCase entry defers to PascalCase; any
    /// other value (including an empty string) wins.
    pub fn field(&self, camel: &str) -> Option<&CellValue> {
        self.cells
            .get(camel)
            .filter(|v| !v.is_null())
            .or_else(|| self.cells.get(&pascal_case(camel)))
            .filter(|v| !v.is_null())
    }
}

impl<K: Into<String>, V: Into<CellValue>> FromIterator<(K, V)> for RawRow {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = RawRow::new();
        for (k, v) in iter {
            row.insert(k, v);
        }
        row
    }
}

fn pascal_case(camel: &str) -> String {
    let mut chars = camel.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pascal_case() {
        assert_eq!(pascal_case("resX"), "ResX");
        assert_eq!(pascal_case("bendAngleMinDeg"), "BendAngleMinDeg");
        assert_eq!(pascal_case(""), "");
    }

    #[test]
    fn test_field_prefers_camel_case() {
        let row: RawRow = [("resX", "100"), ("ResX", "200")].into_iter().collect();
        assert_eq!(row.field("resX"), Some(&CellValue::from("100")));
    }

    #[test]
    fn test_field_falls_back_to_pascal_case() {
        let row: RawRow = [("ResX", "200")].into_iter().collect();
        assert_eq!(row.field("resX"), Some(&CellValue::from("200")));
    }

    #[test]
    fn test_empty_string_shadows_pascal_case() {
        let row: RawRow = [("resX", ""), ("ResX", "200")].into_iter().collect();
        assert_eq!(row.field("resX"), Some(&CellValue::from("")));
    }

    #[test]
    fn test_null_defers_to_pascal_case() {
        let mut row = RawRow::new();
        row.insert("resX", CellValue::Null);
        row.insert("ResX", 5.0);
        assert_eq!(row.field("resX"), Some(&CellValue::Number(5.0)));
    }

    #[test]
    fn test_json_conversion() {
        let value = serde_json::json!([10, "20", null, true]);
        assert_eq!(
            CellValue::from(value),
            CellValue::List(vec![
                CellValue::Number(10.0),
                CellValue::from("20"),
                CellValue::Null,
                CellValue::Bool(true),
            ])
        );
    }
}
