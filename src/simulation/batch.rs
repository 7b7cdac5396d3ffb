//! Parallel batches of independent turns.

use std::time::Instant;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::{ConfigError, DiceRng, DiceRngState, SimulationConfig};
use crate::turn::{TurnEngine, TurnObserver, TurnOutcome};

use super::stats::TurnStats;

/// Result of a simulated batch.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimulationReport {
    /// The configuration that produced this report.
    pub config: SimulationConfig,
    /// Outcome of every turn, in turn-index order.
    pub outcomes: Vec<TurnOutcome>,
    /// Die-source state each turn started from, in turn-index order.
    pub starts: Vec<DiceRngState>,
    /// Summary of `outcomes`.
    pub stats: TurnStats,
    /// Wall-clock time spent simulating (microseconds).
    pub time_us: u64,
}

impl SimulationReport {
    /// Scores of every turn, in turn-index order.
    #[must_use]
    pub fn scores(&self) -> Vec<u32> {
        self.outcomes.iter().map(|o| o.score).collect()
    }

    /// Play turn `index` again from its recorded start, reporting every roll
    /// to `observer`.
    ///
    /// Returns `None` if the batch has no such turn.
    pub fn replay_turn<O: TurnObserver + ?Sized>(
        &self,
        index: usize,
        observer: &mut O,
    ) -> Option<TurnOutcome> {
        let start = self.starts.get(index)?;
        let mut rng = DiceRng::from_state(start);
        Some(TurnEngine::new(self.config.turn).play(&mut rng, observer))
    }
}

/// Expected performance of one cutoff.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    /// Cutoff used (0 = none).
    pub cutoff: u32,
    /// Summary of the batch run with that cutoff.
    pub stats: TurnStats,
}

/// Play `config.turns` independent turns in parallel.
///
/// Turn `i` rolls from `DiceRng::new(config.seed).for_turn(i)`, so the
/// report is the same whatever the thread count.
pub fn simulate_batch(config: &SimulationConfig) -> Result<SimulationReport, ConfigError> {
    config.validate()?;

    let start = Instant::now();
    let (starts, outcomes): (Vec<_>, Vec<_>) = play_turns(config).into_iter().unzip();
    let time_us = start.elapsed().as_micros() as u64;

    let stats = TurnStats::from_outcomes(&outcomes);
    Ok(SimulationReport {
        config: config.clone(),
        outcomes,
        starts,
        stats,
        time_us,
    })
}

/// Run one batch per cutoff, all from the same seed.
pub fn sweep_cutoffs(
    config: &SimulationConfig,
    cutoffs: &[u32],
) -> Result<Vec<SweepPoint>, ConfigError> {
    config.validate()?;

    Ok(cutoffs
        .iter()
        .map(|&cutoff| {
            let batch = config.clone().with_cutoff(cutoff);
            let outcomes: Vec<TurnOutcome> =
                play_turns(&batch).into_iter().map(|(_, o)| o).collect();
            SweepPoint {
                cutoff,
                stats: TurnStats::from_outcomes(&outcomes),
            }
        })
        .collect())
}

fn play_turns(config: &SimulationConfig) -> Vec<(DiceRngState, TurnOutcome)> {
    let base = DiceRng::new(config.seed);
    let engine = TurnEngine::new(config.turn);

    (0..config.turns)
        .into_par_iter()
        .map(|i| {
            let mut rng = base.for_turn(i as u64);
            (rng.state(), engine.play_quiet(&mut rng))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_size() {
        let config = SimulationConfig::default().with_turns(200);
        let report = simulate_batch(&config).unwrap();

        assert_eq!(report.outcomes.len(), 200);
        assert_eq!(report.starts.len(), 200);
        assert_eq!(report.stats.turns, 200);
        assert_eq!(report.scores().len(), 200);
    }

    #[test]
    fn test_batch_is_deterministic() {
        let config = SimulationConfig::default().with_turns(300).with_seed(11);
        let a = simulate_batch(&config).unwrap();
        let b = simulate_batch(&config).unwrap();

        assert_eq!(a.outcomes, b.outcomes);
        assert_eq!(a.stats, b.stats);
    }

    #[test]
    fn test_batch_matches_sequential_play() {
        let config = SimulationConfig::default().with_turns(50).with_seed(3).with_cutoff(400);
        let report = simulate_batch(&config).unwrap();

        let base = DiceRng::new(3);
        let engine = TurnEngine::new(config.turn);
        for (i, outcome) in report.outcomes.iter().enumerate() {
            assert_eq!(*outcome, engine.play_quiet(&mut base.for_turn(i as u64)));
        }
    }

    #[test]
    fn test_replay_turn() {
        let config = SimulationConfig::default().with_turns(40).with_seed(8).with_cutoff(300);
        let report = simulate_batch(&config).unwrap();

        for index in [0, 17, 39] {
            let mut log = crate::turn::RollLog::new();
            let replayed = report.replay_turn(index, &mut log).unwrap();

            assert_eq!(replayed, report.outcomes[index]);
            assert_eq!(log.rolls.len() as u32, replayed.rolls);
            assert_eq!(log.outcome, Some(replayed));
        }
        assert!(report.replay_turn(40, &mut ()).is_none());
    }

    #[test]
    fn test_empty_batch_rejected() {
        let config = SimulationConfig::default().with_turns(0);
        assert_eq!(simulate_batch(&config).unwrap_err(), ConfigError::NoTurns);
        assert!(sweep_cutoffs(&config, &[100]).is_err());
    }

    #[test]
    fn test_sweep() {
        let config = SimulationConfig::default().with_turns(100);
        let points = sweep_cutoffs(&config, &[0, 300, 1000]).unwrap();

        assert_eq!(points.len(), 3);
        assert_eq!(points[1].cutoff, 300);
        for point in &points {
            assert_eq!(point.stats.turns, 100);
        }
        // Every turn under a cutoff either busts to 0 or passes the cutoff.
        for (&score, _) in &points[1].stats.histogram {
            assert!(score == 0 || score > 300, "score {score}");
        }
    }
}
