use clap::ValueEnum;
use serde::Serialize;
use tracing::debug;

use crate::model::criterion::Criterion;
use crate::model::record::{Record, ScoredRecord};
use crate::model::weights::WeightVector;
use crate::pipeline::project::project;

/// Key the ranked view is ordered by, always descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Composite,
    Privacy,
    Efficiency,
    Openness,
    Qsar,
}

impl SortKey {
    fn value_of(self, record: &ScoredRecord) -> f64 {
        match self {
            SortKey::Composite => record.composite,
            SortKey::Privacy => record.privacy,
            SortKey::Efficiency => record.efficiency,
            SortKey::Openness => record.openness,
            SortKey::Qsar => record.qsar,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Composite => "Composite Score",
            SortKey::Privacy => Criterion::Privacy.label(),
            SortKey::Efficiency => Criterion::Efficiency.label(),
            SortKey::Openness => Criterion::Openness.label(),
            SortKey::Qsar => Criterion::Qsar.label(),
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let token = match self {
            SortKey::Composite => "composite",
            SortKey::Privacy => "privacy",
            SortKey::Efficiency => "efficiency",
            SortKey::Openness => "openness",
            SortKey::Qsar => "qsar",
        };
        f.write_str(token)
    }
}

/// Order descending by `key`. `sort_by` is stable, so records with equal
/// keys keep their relative input order; there is no secondary tie-break.
pub fn sort_ranked(mut records: Vec<ScoredRecord>, key: SortKey) -> Vec<ScoredRecord> {
    records.sort_by(|a, b| key.value_of(b).total_cmp(&key.value_of(a)));
    records
}

/// Prefix of the already-sorted sequence; used to pick the participants of
/// the top-5 radar view and the top-10 bar view.
pub fn top_n(records: &[ScoredRecord], n: usize) -> &[ScoredRecord] {
    &records[..n.min(records.len())]
}

/// Memoized projection + sort, keyed on `(weights, sort key)`.
///
/// Recomputation is idempotent and side-effect free, so this is purely an
/// optimization: view-state changes that leave weights and sort key alone
/// (axis choice, view mode) reuse the cached ranking.
#[derive(Debug, Default)]
pub struct RankingCache {
    cached: Option<(WeightVector, SortKey, Vec<ScoredRecord>)>,
}

impl RankingCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ranked(
        &mut self,
        records: &[Record],
        weights: &WeightVector,
        key: SortKey,
    ) -> &[ScoredRecord] {
        let stale = match &self.cached {
            Some((w, k, _)) => w != weights || *k != key,
            None => true,
        };
        if stale {
            debug!(?key, sum = weights.sum(), "recomputing ranked view");
            let ranked = sort_ranked(project(records, weights), key);
            self.cached = Some((*weights, key, ranked));
        }
        match &self.cached {
            Some((_, _, ranked)) => ranked,
            None => unreachable!("cache filled above"),
        }
    }
}
