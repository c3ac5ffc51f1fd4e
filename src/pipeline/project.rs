use crate::model::record::{Record, ScoredRecord};
use crate::model::weights::WeightVector;

/// Derive scored records from raw records under the current weights.
///
/// Pure map: composite = Σ score(c) * weight(c) over the four criteria,
/// rounded to two decimals, plus the truncated display label. Deterministic
/// given identical inputs; the input slice is untouched.
pub fn project(records: &[Record], weights: &WeightVector) -> Vec<ScoredRecord> {
    records
        .iter()
        .map(|r| ScoredRecord::from_record(r, weights))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Criterion;

    fn sample() -> Vec<Record> {
        vec![
            Record {
                name: "alpha".to_string(),
                privacy: 80.0,
                efficiency: 20.0,
                openness: 50.0,
                qsar: 10.0,
            },
            Record {
                name: "beta".to_string(),
                privacy: 10.0,
                efficiency: 90.0,
                openness: 40.0,
                qsar: 70.0,
            },
        ]
    }

    #[test]
    fn test_project_is_deterministic() {
        let records = sample();
        let weights = WeightVector::uniform();
        let a = project(&records, &weights);
        let b = project(&records, &weights);
        assert_eq!(a, b);
    }

    #[test]
    fn test_project_preserves_input_order_and_length() {
        let records = sample();
        let scored = project(&records, &WeightVector::uniform());
        assert_eq!(scored.len(), 2);
        assert_eq!(scored[0].name, "alpha");
        assert_eq!(scored[1].name, "beta");
    }

    #[test]
    fn test_single_weight_picks_single_criterion() {
        let records = sample();
        let mut weights = WeightVector::uniform();
        weights.set(Criterion::Efficiency, 1.0);
        let scored = project(&records, &weights);
        assert_eq!(scored[0].composite, 20.0);
        assert_eq!(scored[1].composite, 90.0);
    }
}
