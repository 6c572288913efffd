// Panel domain model
use super::cell::RawRow;
use super::coerce::{
    is_bend_sentinel, parse_maybe_array, text_value, to_number, to_number_or_null, NumberOrList,
    NOT_BENDABLE,
};
use serde::{Deserialize, Serialize};

/// A normalized display panel, ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelRecord {
    pub name: String,
    pub res_x: f64,
    pub res_y: f64,
    pub width_m: f64,
    pub height_m: f64,
    pub power: f64,
    pub weight_kg: f64,
    pub depth_m: Option<f64>,
    pub bend_angle_deg: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bend_angle_min_deg: Option<NumberOrList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bend_angle_max_deg: Option<NumberOrList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bend_angle_text: Option<String>,
    pub frame_height_m: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame_height_min_m: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame_height_max_m: Option<f64>,
}

impl PanelRecord {
    /// Build a record from one raw row. Never fails: every field has a
    /// fallback.
    pub fn from_row(row: &RawRow) -> Self {
        let bend_deg = row.field("bendAngleDeg");
        let bend_min = row.field("bendAngleMinDeg");
        let bend_max = row.field("bendAngleMaxDeg");

        let not_bendable = [bend_deg, bend_min, bend_max]
            .into_iter()
            .any(is_bend_sentinel);

        let (bend_angle_deg, bend_angle_min_deg, bend_angle_max_deg, bend_angle_text) =
            if not_bendable {
                (None, None, None, Some(NOT_BENDABLE.to_string()))
            } else {
                (
                    to_number_or_null(bend_deg),
                    parse_maybe_array(bend_min),
                    parse_maybe_array(bend_max),
                    None,
                )
            };

        Self {
            name: text_value(row.field("name")),
            res_x: to_number(row.field("resX"), 0.0),
            res_y: to_number(row.field("resY"), 0.0),
            width_m: to_number(row.field("widthM"), 0.0),
            height_m: to_number(row.field("heightM"), 0.0),
            power: to_number(row.field("power"), 0.0),
            weight_kg: to_number(row.field("weightKg"), 0.0),
            depth_m: to_number_or_null(row.field("depthM")),
            bend_angle_deg,
            bend_angle_min_deg,
            bend_angle_max_deg,
            bend_angle_text,
            frame_height_m: to_number_or_null(row.field("frameHeightM")),
            frame_height_min_m: to_number_or_null(row.field("frameHeightMinM")),
            frame_height_max_m: to_number_or_null(row.field("frameHeightMaxM")),
        }
    }
}

/// The data handed to the page: one ordered list of panels.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PanelPage {
    pub panels: Vec<PanelRecord>,
}

impl PanelPage {
    pub fn new(panels: Vec<PanelRecord>) -> Self {
        Self { panels }
    }

    pub fn from_rows(rows: &[RawRow]) -> Self {
        Self::new(rows.iter().map(PanelRecord::from_row).collect())
    }

    pub fn empty() -> Self {
        Self::default()
    }
}
