pub mod project;
pub mod rank;

pub use project::project;
pub use rank::{RankingCache, SortKey, sort_ranked, top_n};
