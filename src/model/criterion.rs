use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// One of the four evaluation axes. Every record carries a score in
/// [0, 100] for each criterion, and the weight vector assigns each one
/// a share of the composite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Criterion {
    Privacy,
    Efficiency,
    Openness,
    Qsar,
}

impl Criterion {
    /// Fixed iteration order used everywhere scores or weights are
    /// enumerated (table columns, radar rows, JSON keys).
    pub const ALL: [Criterion; 4] = [
        Criterion::Privacy,
        Criterion::Efficiency,
        Criterion::Openness,
        Criterion::Qsar,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Criterion::Privacy => "Privacy",
            Criterion::Efficiency => "Efficiency",
            Criterion::Openness => "Openness",
            Criterion::Qsar => "QSAR",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Criterion::Privacy => "privacy",
            Criterion::Efficiency => "efficiency",
            Criterion::Openness => "openness",
            Criterion::Qsar => "qsar",
        }
    }
}

impl std::fmt::Display for Criterion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for Criterion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "privacy" => Ok(Criterion::Privacy),
            "efficiency" => Ok(Criterion::Efficiency),
            "openness" => Ok(Criterion::Openness),
            "qsar" => Ok(Criterion::Qsar),
            other => Err(format!(
                "unknown criterion: {other} (use privacy|efficiency|openness|qsar)"
            )),
        }
    }
}
