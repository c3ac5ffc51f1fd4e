pub mod criterion;
pub mod record;
pub mod weights;

pub use criterion::Criterion;
pub use record::{Record, ScoredRecord};
pub use weights::WeightVector;
