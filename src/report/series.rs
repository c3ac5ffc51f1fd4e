use serde::Serialize;

use crate::model::criterion::Criterion;
use crate::model::record::ScoredRecord;
use crate::pipeline::rank::top_n;
use crate::report::Axis;

/// How many ranked entries the bar view shows.
pub const BAR_TOP: usize = 10;
/// How many ranked entries the radar view compares.
pub const RADAR_TOP: usize = 5;

/// Chart-ready data for an external renderer. These structs carry plain
/// values only; nothing here knows how the series are drawn.
#[derive(Debug, Clone, Serialize)]
pub struct BarEntry {
    pub label: String,
    pub name: String,
    pub composite: f64,
    pub privacy: f64,
    pub efficiency: f64,
    pub openness: f64,
    pub qsar: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct BarSeries {
    pub entries: Vec<BarEntry>,
}

pub fn bar_series(ranked: &[ScoredRecord]) -> BarSeries {
    let entries = top_n(ranked, BAR_TOP)
        .iter()
        .map(|r| BarEntry {
            label: r.label.clone(),
            name: r.name.clone(),
            composite: r.composite,
            privacy: r.privacy,
            efficiency: r.efficiency,
            openness: r.openness,
            qsar: r.qsar,
        })
        .collect();
    BarSeries { entries }
}

#[derive(Debug, Clone, Serialize)]
pub struct ScatterPoint {
    /// Full name, for tooltips.
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub composite: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScatterSeries {
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub points: Vec<ScatterPoint>,
}

pub fn scatter_series(ranked: &[ScoredRecord], x_axis: Axis, y_axis: Axis) -> ScatterSeries {
    let points = ranked
        .iter()
        .map(|r| ScatterPoint {
            name: r.name.clone(),
            x: x_axis.value_of(r),
            y: y_axis.value_of(r),
            composite: r.composite,
        })
        .collect();
    ScatterSeries {
        x_axis,
        y_axis,
        points,
    }
}

/// One spoke of the radar: a criterion and the top models' scores on it,
/// keyed by truncated label.
#[derive(Debug, Clone, Serialize)]
pub struct RadarRow {
    pub criterion: Criterion,
    pub values: Vec<RadarValue>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RadarValue {
    pub label: String,
    pub score: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RadarSeries {
    pub rows: Vec<RadarRow>,
}

pub fn radar_series(ranked: &[ScoredRecord]) -> RadarSeries {
    let top = top_n(ranked, RADAR_TOP);
    let rows = Criterion::ALL
        .into_iter()
        .map(|criterion| RadarRow {
            criterion,
            values: top
                .iter()
                .map(|r| RadarValue {
                    label: r.label.clone(),
                    score: r.score(criterion),
                })
                .collect(),
        })
        .collect();
    RadarSeries { rows }
}
