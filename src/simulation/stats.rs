//! Summary statistics over many simulated turns.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::turn::TurnOutcome;

/// Aggregate of a batch of turn outcomes.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TurnStats {
    /// Number of turns.
    pub turns: usize,

    /// Mean score.
    pub mean: f64,

    /// Population standard deviation of the score.
    pub std_dev: f64,

    /// Median score (mean of the middle two for an even count).
    pub median: f64,

    /// Most frequent score; the smallest one on ties.
    pub mode: u32,

    /// Lowest score.
    pub min: u32,

    /// Highest score.
    pub max: u32,

    /// Turns that ended in a bust.
    pub busts: usize,

    /// Mean number of rolls per turn.
    pub mean_rolls: f64,

    /// Score → number of turns with that score.
    pub histogram: FxHashMap<u32, u32>,
}

impl TurnStats {
    /// Summarize a batch. An empty batch gives all-zero stats.
    #[must_use]
    pub fn from_outcomes(outcomes: &[TurnOutcome]) -> Self {
        if outcomes.is_empty() {
            return Self::default();
        }

        let n = outcomes.len() as f64;
        let mut scores: Vec<u32> = outcomes.iter().map(|o| o.score).collect();
        scores.sort_unstable();

        let mean = scores.iter().map(|&s| s as f64).sum::<f64>() / n;
        let variance = scores
            .iter()
            .map(|&s| (s as f64 - mean).powi(2))
            .sum::<f64>()
            / n;

        let mid = scores.len() / 2;
        let median = if scores.len() % 2 == 0 {
            (scores[mid - 1] as f64 + scores[mid] as f64) / 2.0
        } else {
            scores[mid] as f64
        };

        let mut histogram = FxHashMap::default();
        for &score in &scores {
            *histogram.entry(score).or_insert(0u32) += 1;
        }

        let mode = histogram
            .iter()
            .max_by(|(sa, ca), (sb, cb)| ca.cmp(cb).then(sb.cmp(sa)))
            .map(|(&score, _)| score)
            .unwrap_or(0);

        Self {
            turns: outcomes.len(),
            mean,
            std_dev: variance.sqrt(),
            median,
            mode,
            min: scores[0],
            max: scores[scores.len() - 1],
            busts: outcomes.iter().filter(|o| o.is_bust()).count(),
            mean_rolls: outcomes.iter().map(|o| o.rolls as f64).sum::<f64>() / n,
            histogram,
        }
    }

    /// Fraction of turns that ended in a bust.
    #[must_use]
    pub fn bust_rate(&self) -> f64 {
        if self.turns == 0 {
            0.0
        } else {
            self.busts as f64 / self.turns as f64
        }
    }

    /// Fraction of turns that scored nothing.
    #[must_use]
    pub fn zero_rate(&self) -> f64 {
        if self.turns == 0 {
            0.0
        } else {
            self.histogram.get(&0).copied().unwrap_or(0) as f64 / self.turns as f64
        }
    }
}
