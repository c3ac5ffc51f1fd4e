// Public library surface for integration tests (and potential reuse).

pub mod input;
pub mod model;
pub mod pipeline;
pub mod report;

pub use model::{Criterion, Record, ScoredRecord, WeightVector};
pub use pipeline::{RankingCache, SortKey, project, sort_ranked, top_n};
