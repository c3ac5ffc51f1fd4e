pub mod json;
pub mod series;
pub mod text;

use clap::ValueEnum;
use serde::Serialize;

use crate::model::criterion::Criterion;
use crate::model::record::ScoredRecord;

/// How the ranked sequence is rendered. Owned by the presentation layer;
/// the scoring pipeline never sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Table,
    Bars,
    Scatter,
    Radar,
}

/// Scatter-plot axis: a raw criterion or the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Privacy,
    Efficiency,
    Openness,
    Qsar,
    Composite,
}

impl Axis {
    pub fn value_of(self, record: &ScoredRecord) -> f64 {
        match self {
            Axis::Privacy => record.privacy,
            Axis::Efficiency => record.efficiency,
            Axis::Openness => record.openness,
            Axis::Qsar => record.qsar,
            Axis::Composite => record.composite,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Axis::Privacy => Criterion::Privacy.label(),
            Axis::Efficiency => Criterion::Efficiency.label(),
            Axis::Openness => Criterion::Openness.label(),
            Axis::Qsar => Criterion::Qsar.label(),
            Axis::Composite => "Composite Score",
        }
    }
}

impl std::fmt::Display for ViewMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let token = match self {
            ViewMode::Table => "table",
            ViewMode::Bars => "bars",
            ViewMode::Scatter => "scatter",
            ViewMode::Radar => "radar",
        };
        f.write_str(token)
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let token = match self {
            Axis::Privacy => "privacy",
            Axis::Efficiency => "efficiency",
            Axis::Openness => "openness",
            Axis::Qsar => "qsar",
            Axis::Composite => "composite",
        };
        f.write_str(token)
    }
}

pub fn format_score(v: f64) -> String {
    format!("{v:.1}")
}
