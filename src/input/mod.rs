use std::collections::HashSet;
use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::model::record::Record;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("dataset is empty")]
    Empty,
    #[error("duplicate record name: {0}")]
    DuplicateName(String),
    #[error("record {name}: {criterion} score {value} outside [0, 100]")]
    ScoreOutOfRange {
        name: String,
        criterion: &'static str,
        value: f64,
    },
}

/// Load records from a JSON array of `{name, privacy, efficiency,
/// openness, qsar}` objects. Shape validation happens here, at the
/// boundary: the scoring core assumes every record it sees is well-formed.
pub fn load_records(path: &Path) -> Result<Vec<Record>, DatasetError> {
    let text = std::fs::read_to_string(path)?;
    let records: Vec<Record> = serde_json::from_str(&text)?;
    validate(&records)?;
    info!(n = records.len(), path = %path.display(), "loaded dataset");
    Ok(records)
}

fn validate(records: &[Record]) -> Result<(), DatasetError> {
    if records.is_empty() {
        return Err(DatasetError::Empty);
    }
    let mut seen = HashSet::new();
    for record in records {
        if !seen.insert(record.name.as_str()) {
            return Err(DatasetError::DuplicateName(record.name.clone()));
        }
        for (criterion, value) in [
            ("privacy", record.privacy),
            ("efficiency", record.efficiency),
            ("openness", record.openness),
            ("qsar", record.qsar),
        ] {
            if !value.is_finite() || !(0.0..=100.0).contains(&value) {
                return Err(DatasetError::ScoreOutOfRange {
                    name: record.name.clone(),
                    criterion,
                    value,
                });
            }
        }
    }
    Ok(())
}

/// The built-in 20-model evaluation table.
pub fn builtin_records() -> Vec<Record> {
    const TABLE: [(&str, f64, f64, f64, f64); 20] = [
        ("OLMoE-1B-7B-0125-Instruct", 57.5, 100.0, 100.0, 60.4),
        ("Qwen2.5-7B-Instruct", 91.6, 93.5, 22.2, 75.7),
        ("OLMo-2-0325-32B-Instruct", 59.4, 28.9, 100.0, 92.0),
        ("Falcon3-7B-Instruct", 79.1, 84.1, 27.8, 77.6),
        ("Falcon3-10B-Instruct", 85.3, 63.5, 27.8, 83.2),
        ("Llama-3.1-Tulu-3.1-8B", 35.8, 79.5, 44.5, 90.5),
        ("Phi-4 (14B)", 100.0, 58.6, 27.8, 58.9),
        ("Llama-3.1-8B-Instruct", 74.0, 79.3, 0.0, 74.5),
        ("Mistral-7B-Instruct-v0.3", 40.9, 71.2, 27.8, 36.3),
        ("Gemma-3-27b-it", 22.8, 40.8, 11.2, 100.0),
        ("Qwen3-8B", 71.2, 58.6, 16.8, 26.8),
        ("Qwen2.5-32B-Instruct", 25.2, 38.2, 22.2, 87.3),
        ("Mistral-Small-3.1-24B-Instruct", 10.1, 46.9, 27.8, 84.4),
        ("vicuna-13b-v1.5", 83.2, 51.7, 27.8, 5.4),
        ("DeepSeek-R1-Distill-Qwen-14B", 63.2, 45.8, 22.2, 25.8),
        ("Yi-1.5-34B-Chat", 32.0, 29.3, 33.4, 55.5),
        ("salamandra-7b-instruct", 33.9, 76.3, 33.4, 4.4),
        ("Lucie-7B-Instruct-v1.1", 0.0, 87.0, 33.4, 0.0),
        ("Poro-34B-chat", 35.6, 0.0, 72.3, 2.7),
        ("Qwen3-30B-A3B", 51.0, 5.4, 16.8, 25.3),
    ];

    TABLE
        .iter()
        .map(|&(name, privacy, efficiency, openness, qsar)| Record {
            name: name.to_string(),
            privacy,
            efficiency,
            openness,
            qsar,
        })
        .collect()
}
