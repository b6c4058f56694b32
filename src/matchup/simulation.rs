use std::path::PathBuf;

use rand::Rng;
use tracing::{Level, event, trace_span};

use crate::core::{Deck, HandEvaluator, RankEvaluator};

use super::refine::{Anomaly, refine_same_rank_category};
use super::{CategoryKey, Deal, MAX_PER_CATEGORY, MatchupError, MatchupStore, normalize_winner_first};

/// File name of the store inside the output directory.
pub const STORE_FILE: &str = "matchups.json";
/// File name of the generated manifest inside the output directory.
pub const MANIFEST_FILE: &str = "hand-categories.ts";

/// Settings for a batch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationConfig {
    /// How many showdowns to simulate.
    pub runs: usize,
    /// Samples kept per category.
    pub cap: usize,
    /// Where the store and manifest live.
    pub output_dir: PathBuf,
    /// Seed for a reproducible run.
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            runs: 1,
            cap: MAX_PER_CATEGORY,
            output_dir: PathBuf::from("output"),
            seed: None,
        }
    }
}

impl SimulationConfig {
    pub fn store_path(&self) -> PathBuf {
        self.output_dir.join(STORE_FILE)
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.output_dir.join(MANIFEST_FILE)
    }
}

/// One classified showdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Showdown {
    pub key: CategoryKey,
    pub deal: Deal,
    pub is_tie: bool,
    pub anomaly: Option<Anomaly>,
}

/// Counters for a batch of showdowns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub showdowns: usize,
    pub ties: usize,
    /// Deals added to the store.
    pub inserted: usize,
    /// Deals dropped because their category was full.
    pub discarded: usize,
    /// Same type matchups that had a winner but no deciding card.
    pub anomalies: usize,
}

/// Deals random heads up showdowns and classifies them.
#[derive(Debug)]
pub struct ShowdownSimulator<E, R> {
    evaluator: E,
    rng: R,
}

impl<R: Rng> ShowdownSimulator<RankEvaluator, R> {
    pub fn new(rng: R) -> Self {
        Self::with_evaluator(RankEvaluator, rng)
    }
}

impl<E: HandEvaluator, R: Rng> ShowdownSimulator<E, R> {
    pub fn with_evaluator(evaluator: E, rng: R) -> Self {
        Self { evaluator, rng }
    }

    /// Shuffle a fresh deck, deal the board and two hands, then work
    /// out the category of the showdown.
    pub fn simulate_one(&mut self) -> Result<Showdown, MatchupError> {
        let mut deck = Deck::shuffled(&mut self.rng);
        let board = deck.deal::<5>()?;
        let player1 = deck.deal::<2>()?;
        let player2 = deck.deal::<2>()?;

        let hand1 = self.evaluator.evaluate(&board, &player1)?;
        let hand2 = self.evaluator.evaluate(&board, &player2)?;

        let norm = normalize_winner_first(&self.evaluator, &hand1, &hand2, player1, player2);
        let refined =
            refine_same_rank_category(norm.key, &norm.winner, &norm.loser, norm.is_tie, &board);

        event!(
            Level::TRACE,
            key = %refined.key,
            tie = norm.is_tie,
            "Classified showdown"
        );

        Ok(Showdown {
            key: refined.key,
            deal: Deal {
                board,
                p1: norm.p1,
                p2: norm.p2,
            },
            is_tie: norm.is_tie,
            anomaly: refined.anomaly,
        })
    }

    /// Simulate `runs` showdowns one after another, adding each to the
    /// store unless its category already holds `cap` deals.
    pub fn run(
        &mut self,
        store: &mut MatchupStore,
        runs: usize,
        cap: usize,
    ) -> Result<BatchSummary, MatchupError> {
        let span = trace_span!("showdown_batch", runs, cap);
        let _enter = span.enter();

        let mut summary = BatchSummary::default();
        for _ in 0..runs {
            let showdown = self.simulate_one()?;
            summary.showdowns += 1;
            if showdown.is_tie {
                summary.ties += 1;
            }
            if showdown.anomaly.is_some() {
                summary.anomalies += 1;
            }
            if store.insert(showdown.key, showdown.deal, cap) {
                summary.inserted += 1;
            } else {
                summary.discarded += 1;
            }
        }

        event!(
            Level::INFO,
            showdowns = summary.showdowns,
            ties = summary.ties,
            inserted = summary.inserted,
            discarded = summary.discarded,
            anomalies = summary.anomalies,
            "Finished showdown batch"
        );
        Ok(summary)
    }
}
