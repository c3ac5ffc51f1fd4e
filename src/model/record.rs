use serde::{Deserialize, Serialize};

use crate::model::criterion::Criterion;
use crate::model::weights::WeightVector;

/// Names longer than this many characters are shortened for chart axes.
pub const LABEL_MAX_CHARS: usize = 20;
const LABEL_KEEP_CHARS: usize = 17;
const ELLIPSIS: &str = "...";

/// One evaluated model: a unique name plus the four criterion scores,
/// each in [0, 100]. Loaded once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub privacy: f64,
    pub efficiency: f64,
    pub openness: f64,
    pub qsar: f64,
}

impl Record {
    pub fn score(&self, criterion: Criterion) -> f64 {
        match criterion {
            Criterion::Privacy => self.privacy,
            Criterion::Efficiency => self.efficiency,
            Criterion::Openness => self.openness,
            Criterion::Qsar => self.qsar,
        }
    }
}

/// A record annotated with its weighted composite score and a
/// space-constrained display label. Derived, never mutated: the scoring
/// pipeline rebuilds these from scratch whenever weights or sort key
/// change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredRecord {
    pub name: String,
    /// Shortened name for chart axes; the full `name` stays available for
    /// lookups and tooltips.
    pub label: String,
    pub privacy: f64,
    pub efficiency: f64,
    pub openness: f64,
    pub qsar: f64,
    /// Weighted sum of the four criterion scores, rounded to two decimals.
    pub composite: f64,
}

impl ScoredRecord {
    pub fn from_record(record: &Record, weights: &WeightVector) -> Self {
        let composite = Criterion::ALL
            .into_iter()
            .map(|c| record.score(c) * weights.get(c))
            .sum::<f64>();
        Self {
            name: record.name.clone(),
            label: display_label(&record.name),
            privacy: record.privacy,
            efficiency: record.efficiency,
            openness: record.openness,
            qsar: record.qsar,
            composite: round2(composite),
        }
    }

    pub fn score(&self, criterion: Criterion) -> f64 {
        match criterion {
            Criterion::Privacy => self.privacy,
            Criterion::Efficiency => self.efficiency,
            Criterion::Openness => self.openness,
            Criterion::Qsar => self.qsar,
        }
    }
}

/// Round to two decimal places, half away from zero (`f64::round` of the
/// value scaled by 100). All scores in play are non-negative, where this
/// matches plain half-up rounding.
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Names of at most [`LABEL_MAX_CHARS`] characters pass through; longer
/// ones keep their first 17 characters and gain a `...` marker. Lengths
/// are counted in characters, not bytes.
pub fn display_label(name: &str) -> String {
    if name.chars().count() > LABEL_MAX_CHARS {
        let mut label: String = name.chars().take(LABEL_KEEP_CHARS).collect();
        label.push_str(ELLIPSIS);
        label
    } else {
        name.to_string()
    }
}
