use serde::Serialize;

use crate::model::record::ScoredRecord;
use crate::model::weights::WeightVector;
use crate::pipeline::rank::SortKey;
use crate::report::ViewMode;
use crate::report::series::{BarSeries, RadarSeries, ScatterSeries};

/// JSON report envelope: session state (weights, sort key, view) plus the
/// payload the active view would render. Consumed by external renderers.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub tool: &'static str,
    pub version: &'static str,
    pub weights: &'a WeightVector,
    pub sort_by: SortKey,
    pub view: ViewMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<&'a [ScoredRecord]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bars: Option<&'a BarSeries>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scatter: Option<&'a ScatterSeries>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radar: Option<&'a RadarSeries>,
}

impl<'a> JsonReport<'a> {
    pub fn new(weights: &'a WeightVector, sort_by: SortKey, view: ViewMode) -> Self {
        Self {
            tool: "modelrank",
            version: env!("CARGO_PKG_VERSION"),
            weights,
            sort_by,
            view,
            rows: None,
            bars: None,
            scatter: None,
            radar: None,
        }
    }

    pub fn render(&self) -> String {
        // Serialization of these plain structs cannot fail.
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("{{\"error\":\"{e}\"}}"))
    }
}
