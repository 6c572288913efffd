// Bundled panel source - Dataset compiled into the binary
use crate::application::panel_source::PanelSource;
use crate::application::source_error::SourceError;
use crate::domain::cell::{CellValue, RawRow};
use async_trait::async_trait;
use serde_json::{Map, Value};

const BUNDLED_PANELS: &str = include_str!("../../assets/panels.json");

#[derive(Debug, Clone)]
pub struct BundledSource {
    json: &'static str,
}

impl BundledSource {
    pub fn new(json: &'static str) -> Self {
        Self { json }
    }
}

impl Default for BundledSource {
    fn default() -> Self {
        Self::new(BUNDLED_PANELS)
    }
}

#[async_trait]
impl PanelSource for BundledSource {
    fn name(&self) -> &str {
        "bundled"
    }

    async fn load_rows(&self) -> Result<Vec<RawRow>, SourceError> {
        let objects: Vec<Map<String, Value>> = serde_json::from_str(self.json)
            .inspect_err(|e| tracing::error!("Bundled panel dataset is malformed: {}", e))?;

        Ok(objects
            .into_iter()
            .map(|object| {
                object
                    .into_iter()
                    .map(|(key, value)| (key, CellValue::from(value)))
                    .collect::<RawRow>()
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::coerce::NumberOrList;
    use crate::domain::panel::PanelPage;

    #[tokio::test]
    async fn test_bundled_dataset_normalizes() {
        let rows = BundledSource::default().load_rows().await.unwrap();
        let page = PanelPage::from_rows(&rows);

        assert!(!page.panels.is_empty());
        for panel in &page.panels {
            assert!(!panel.name.is_empty());
            assert!(panel.res_x > 0.0 && panel.res_y > 0.0);
            assert!(panel.width_m.is_finite() && panel.height_m.is_finite());
            assert!(panel.power.is_finite() && panel.weight_kg.is_finite());
            if panel.bend_angle_text.is_some() {
                assert_eq!(panel.bend_angle_deg, None);
                assert_eq!(panel.bend_angle_min_deg, None);
                assert_eq!(panel.bend_angle_max_deg, None);
            }
        }
    }

    #[tokio::test]
    async fn test_array_ranges_survive() {
        let source = BundledSource::new(
            r#"[{"name": "C", "bendAngleMinDeg": [-10, "x", -5], "bendAngleMaxDeg": [10]}]"#,
        );
        let rows = source.load_rows().await.unwrap();
        let page = PanelPage::from_rows(&rows);

        assert_eq!(
            page.panels[0].bend_angle_min_deg,
            Some(NumberOrList::Many(vec![-10.0, -5.0]))
        );
        assert_eq!(page.panels[0].bend_angle_max_deg, Some(NumberOrList::Single(10.0)));
    }

    #[tokio::test]
    async fn test_malformed_dataset_is_error() {
        let source = BundledSource::new("{ not json");
        assert!(matches!(
            source.load_rows().await,
            Err(SourceError::Bundled(_))
        ));
    }
}
