use serde::Serialize;

use crate::model::criterion::Criterion;

/// Tolerance for the sum-to-one invariant. The renormalization rule keeps
/// the drift well below this; exact equality on f64 is never checked.
pub const SUM_TOLERANCE: f64 = 1e-9;

/// The four criterion weights. Invariant: each weight is in [0, 1] and the
/// four sum to 1.0 within [`SUM_TOLERANCE`], before and after every update.
///
/// Mutated only through [`WeightVector::set`], which reassigns the full
/// vector. Callers treat a successful `set` as the trigger to re-derive
/// ranked scores; nothing cached here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeightVector {
    pub privacy: f64,
    pub efficiency: f64,
    pub openness: f64,
    pub qsar: f64,
}

impl Default for WeightVector {
    fn default() -> Self {
        Self::uniform()
    }
}

impl WeightVector {
    /// Uniform starting point, 0.25 per criterion.
    pub fn uniform() -> Self {
        Self {
            privacy: 0.25,
            efficiency: 0.25,
            openness: 0.25,
            qsar: 0.25,
        }
    }

    pub fn get(&self, criterion: Criterion) -> f64 {
        match criterion {
            Criterion::Privacy => self.privacy,
            Criterion::Efficiency => self.efficiency,
            Criterion::Openness => self.openness,
            Criterion::Qsar => self.qsar,
        }
    }

    fn get_mut(&mut self, criterion: Criterion) -> &mut f64 {
        match criterion {
            Criterion::Privacy => &mut self.privacy,
            Criterion::Efficiency => &mut self.efficiency,
            Criterion::Openness => &mut self.openness,
            Criterion::Qsar => &mut self.qsar,
        }
    }

    pub fn sum(&self) -> f64 {
        self.privacy + self.efficiency + self.openness + self.qsar
    }

    pub fn is_normalized(&self) -> bool {
        (self.sum() - 1.0).abs() < SUM_TOLERANCE
    }

    /// Set one weight and renormalize the other three.
    ///
    /// `raw` is clamped to [0, 1] first (NaN counts as 0), so `remaining`
    /// below can never go negative. The mass left over, `1 - raw`, is
    /// redistributed over the three untouched criteria in proportion to
    /// their current weights; if all three are currently zero it is split
    /// equally. Cannot fail: invalid input is absorbed by the clamp, never
    /// reported.
    pub fn set(&mut self, criterion: Criterion, raw: f64) {
        let value = clamp01(raw);
        let remaining = 1.0 - value;

        let others: Vec<Criterion> = Criterion::ALL
            .into_iter()
            .filter(|&c| c != criterion)
            .collect();
        let other_sum: f64 = others.iter().map(|&c| self.get(c)).sum();

        if other_sum > 0.0 {
            for &other in &others {
                let share = self.get(other) / other_sum;
                *self.get_mut(other) = share * remaining;
            }
        } else {
            let equal = remaining / others.len() as f64;
            for &other in &others {
                *self.get_mut(other) = equal;
            }
        }

        *self.get_mut(criterion) = value;
    }
}

/// Clamp to [0, 1]; NaN maps to 0.
fn clamp01(x: f64) -> f64 {
    if x.is_nan() || x < 0.0 {
        0.0
    } else if x > 1.0 {
        1.0
    } else {
        x
    }
}
