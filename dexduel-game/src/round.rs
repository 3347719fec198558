//! Round lifecycle controller: the menu / playing / revealing / game-over
//! state machine, its guarded transitions, and the timed reveal sequence.

use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::ScoreStore;
use crate::config::{GameConfig, RevealTiming};
use crate::constants::MIN_POOL_FOR_START;
use crate::dex::{Dex, pick, pick_excluding};
use crate::highscore::HighScoreTable;
use crate::species::Species;
use crate::timer::TimerQueue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    #[default]
    Menu,
    Playing,
    Revealing,
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guess {
    Higher,
    Lower,
}

/// Delayed transitions the controller posts to its timer queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerTask {
    /// Reveal hold elapsed; resolve the recorded guess.
    Resolve { correct: bool },
    /// Settle window elapsed; re-enable input.
    Settle,
}

/// Owns game phase, score, and the current/next candidate pair, and
/// orchestrates the timed reveal/advance/terminate sequence.
///
/// Invalid calls are silent no-ops: guessing outside the
/// playing phase, starting with a pool below two candidates, or touching
/// the config mid-run all leave state untouched. The environment drives
/// time through [`advance`](Self::advance).
pub struct RoundController<S: ScoreStore> {
    dex: Dex,
    config: GameConfig,
    timing: RevealTiming,
    store: S,
    high_scores: HighScoreTable,
    rng: SmallRng,
    timers: TimerQueue<TimerTask>,
    phase: GamePhase,
    score: u32,
    current: Option<Species>,
    next: Option<Species>,
    last_guess_correct: Option<bool>,
    transitioning: bool,
    new_record: bool,
}

impl<S: ScoreStore> RoundController<S> {
    /// Construct a controller. The high-score table is read from the
    /// store exactly once, here.
    #[must_use]
    pub fn new(dex: Dex, config: GameConfig, store: S) -> Self {
        Self::with_seed(dex, config, store, rand::random())
    }

    /// Construct with a fixed RNG seed for deterministic candidate draws.
    #[must_use]
    pub fn with_seed(dex: Dex, config: GameConfig, store: S, seed: u64) -> Self {
        let high_scores = HighScoreTable::load(&store);
        Self {
            dex,
            config,
            timing: RevealTiming::default(),
            store,
            high_scores,
            rng: SmallRng::seed_from_u64(seed),
            timers: TimerQueue::new(),
            phase: GamePhase::Menu,
            score: 0,
            current: None,
            next: None,
            last_guess_correct: None,
            transitioning: false,
            new_record: false,
        }
    }

    /// Override the reveal delays (the two-stage structure is fixed).
    pub fn set_timing(&mut self, timing: RevealTiming) {
        self.timing = timing;
    }

    /// Swap in a new configuration. Only honored in the menu; the config
    /// is read-only to a run in progress.
    pub fn set_config(&mut self, config: GameConfig) {
        if self.phase == GamePhase::Menu {
            self.config = config;
        }
    }

    // --- read surface for rendering --------------------------------------

    #[must_use]
    pub const fn phase(&self) -> GamePhase {
        self.phase
    }

    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub const fn current(&self) -> Option<&Species> {
        self.current.as_ref()
    }

    #[must_use]
    pub const fn next(&self) -> Option<&Species> {
        self.next.as_ref()
    }

    #[must_use]
    pub const fn last_guess_correct(&self) -> Option<bool> {
        self.last_guess_correct
    }

    #[must_use]
    pub const fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    /// Best stored score for the active mode.
    #[must_use]
    pub fn high_score(&self) -> u32 {
        self.high_scores.best(self.config.mode)
    }

    #[must_use]
    pub const fn high_scores(&self) -> &HighScoreTable {
        &self.high_scores
    }

    /// True when the run that just ended set a new record.
    #[must_use]
    pub const fn is_new_record(&self) -> bool {
        self.new_record
    }

    /// Candidates eligible under the current configuration.
    #[must_use]
    pub fn pool_size(&self) -> usize {
        self.dex.eligible(&self.config).len()
    }

    /// Start gate: callers check this before offering the start action.
    #[must_use]
    pub fn can_start(&self) -> bool {
        self.pool_size() >= MIN_POOL_FOR_START
    }

    /// Epoch stamp of the timer queue; environment callbacks compare it
    /// before forwarding elapsed time so a stale timeout is a no-op.
    #[must_use]
    pub const fn timer_epoch(&self) -> u64 {
        self.timers.epoch()
    }

    /// Delay until the next pending transition, if one is scheduled.
    #[must_use]
    pub fn next_timer_delay(&self) -> Option<u64> {
        self.timers.next_due_in()
    }

    // --- operations -------------------------------------------------------

    /// Begin a run: reset score, draw two distinct candidates, enter
    /// playing. No-op unless [`can_start`](Self::can_start) holds.
    pub fn start_game(&mut self) {
        if !self.can_start() {
            return;
        }
        self.timers.cancel_all();
        let pool = self.dex.eligible(&self.config);
        let Some(first) = pick(&pool, &mut self.rng).cloned() else {
            return;
        };
        let Some(second) = pick_excluding(&pool, first.id, &mut self.rng).cloned() else {
            return;
        };
        log::debug!(
            "round start: mode={} pool={} first={} second={}",
            self.config.mode.key(),
            pool.len(),
            first.name,
            second.name
        );
        self.score = 0;
        self.last_guess_correct = None;
        self.transitioning = false;
        self.new_record = false;
        self.current = Some(first);
        self.next = Some(second);
        self.phase = GamePhase::Playing;
    }

    /// Judge a guess and enter the reveal. Ties count as correct for
    /// both directions. No-op outside the playing phase, while the
    /// settle window is open, or without a full candidate pair.
    pub fn make_guess(&mut self, guess: Guess) {
        if self.phase != GamePhase::Playing || self.transitioning {
            return;
        }
        let (Some(current), Some(next)) = (&self.current, &self.next) else {
            return;
        };
        let current_value = self.config.mode.value_of(current);
        let next_value = self.config.mode.value_of(next);
        let correct = match guess {
            Guess::Higher => next_value >= current_value,
            Guess::Lower => next_value <= current_value,
        };
        log::debug!(
            "guess {guess:?}: {current_value} vs {next_value} -> {}",
            if correct { "correct" } else { "incorrect" }
        );
        self.last_guess_correct = Some(correct);
        self.phase = GamePhase::Revealing;
        let delay = if correct {
            self.timing.reveal_correct_ms
        } else {
            self.timing.reveal_incorrect_ms
        };
        self.timers.schedule(delay, TimerTask::Resolve { correct });
    }

    /// Return to the menu from any phase, discarding the candidate pair
    /// and any pending timed transition.
    pub fn go_to_menu(&mut self) {
        self.timers.cancel_all();
        self.phase = GamePhase::Menu;
        self.current = None;
        self.next = None;
        self.last_guess_correct = None;
        self.transitioning = false;
    }

    /// Drive the controller's clock. Fires every transition that came
    /// due within `elapsed_ms`.
    pub fn advance(&mut self, elapsed_ms: u64) {
        for task in self.timers.advance(elapsed_ms) {
            self.apply(task);
        }
    }

    fn apply(&mut self, task: TimerTask) {
        match task {
            TimerTask::Resolve { correct: true } => self.resolve_correct(),
            TimerTask::Resolve { correct: false } => self.resolve_incorrect(),
            TimerTask::Settle => self.transitioning = false,
        }
    }

    fn resolve_correct(&mut self) {
        if self.phase != GamePhase::Revealing {
            return;
        }
        let Some(promoted) = self.next.clone() else {
            return;
        };
        let pool = self.dex.eligible(&self.config);
        let Some(replacement) = pick_excluding(&pool, promoted.id, &mut self.rng).cloned() else {
            // The pool shrank underneath the run; keep the pair on screen
            // unchanged. Unreachable while the start gate held a pool >= 2.
            self.score += 1;
            self.finish_swap();
            return;
        };
        self.score += 1;
        self.current = Some(promoted);
        self.next = Some(replacement);
        self.finish_swap();
    }

    fn finish_swap(&mut self) {
        self.phase = GamePhase::Playing;
        self.last_guess_correct = None;
        self.transitioning = true;
        self.timers.schedule(self.timing.settle_ms, TimerTask::Settle);
    }

    fn resolve_incorrect(&mut self) {
        if self.phase != GamePhase::Revealing {
            return;
        }
        self.new_record = self.high_scores.record(self.config.mode, self.score);
        if self.new_record {
            if let Err(err) = self.high_scores.save(&self.store) {
                log::warn!("high score not persisted: {err}");
            }
        }
        log::debug!(
            "run over: mode={} score={} best={}",
            self.config.mode.key(),
            self.score,
            self.high_score()
        );
        self.phase = GamePhase::GameOver;
        self.current = None;
        self.next = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::HIGH_SCORE_STORAGE_KEY;
    use crate::mode::GuessMode;
    use crate::species::BaseStats;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::convert::Infallible;

    #[derive(Default)]
    struct MemoryStore {
        slots: RefCell<HashMap<String, String>>,
    }

    impl ScoreStore for MemoryStore {
        type Error = Infallible;

        fn read(&self, key: &str) -> Result<Option<String>, Self::Error> {
            Ok(self.slots.borrow().get(key).cloned())
        }

        fn write(&self, key: &str, value: &str) -> Result<(), Self::Error> {
            self.slots
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    fn species(id: u16, weight_kg: f32) -> Species {
        Species {
            id,
            name: format!("species-{id}"),
            gen: 1,
            weight_kg,
            base_stats: BaseStats::default(),
            has_evolutions: false,
            forme: false,
        }
    }

    fn controller(weights: &[(u16, f32)]) -> RoundController<MemoryStore> {
        let dex = Dex::from_species(
            weights
                .iter()
                .map(|&(id, weight)| species(id, weight))
                .collect(),
        );
        let mut controller =
            RoundController::with_seed(dex, GameConfig::default(), MemoryStore::default(), 42);
        controller.set_timing(RevealTiming::default());
        controller
    }

    fn guess_correctly(controller: &mut RoundController<MemoryStore>) {
        let mode = controller.config().mode;
        let current = mode.value_of(controller.current().unwrap());
        let next = mode.value_of(controller.next().unwrap());
        controller.make_guess(if next >= current {
            Guess::Higher
        } else {
            Guess::Lower
        });
    }

    #[test]
    fn initial_state_is_menu_with_empty_pair() {
        let controller = controller(&[(1, 10.0), (2, 20.0)]);
        assert_eq!(controller.phase(), GamePhase::Menu);
        assert_eq!(controller.score(), 0);
        assert!(controller.current().is_none());
        assert!(controller.next().is_none());
        assert!(controller.last_guess_correct().is_none());
    }

    #[test]
    fn start_requires_two_candidates() {
        let mut lone = controller(&[(1, 10.0)]);
        assert!(!lone.can_start());
        lone.start_game();
        assert_eq!(lone.phase(), GamePhase::Menu);

        let mut pair = controller(&[(1, 10.0), (2, 20.0)]);
        assert!(pair.can_start());
        pair.start_game();
        assert_eq!(pair.phase(), GamePhase::Playing);
        assert_eq!(pair.score(), 0);
        let (current, next) = (pair.current().unwrap(), pair.next().unwrap());
        assert_ne!(current.id, next.id);
    }

    #[test]
    fn guess_moves_to_revealing_and_records_correctness() {
        let mut controller = controller(&[(1, 10.0), (2, 20.0), (3, 30.0)]);
        controller.start_game();
        guess_correctly(&mut controller);
        assert_eq!(controller.phase(), GamePhase::Revealing);
        assert_eq!(controller.last_guess_correct(), Some(true));
    }

    #[test]
    fn ties_are_correct_in_both_directions() {
        let mut controller = controller(&[(1, 15.0), (2, 15.0)]);
        controller.start_game();
        controller.make_guess(Guess::Higher);
        assert_eq!(controller.last_guess_correct(), Some(true));

        let mut controller = self::controller(&[(1, 15.0), (2, 15.0)]);
        controller.start_game();
        controller.make_guess(Guess::Lower);
        assert_eq!(controller.last_guess_correct(), Some(true));
    }

    #[test]
    fn correct_guess_rotates_pair_after_reveal_and_settle() {
        let mut controller = controller(&[(1, 10.0), (2, 20.0), (3, 30.0)]);
        controller.start_game();
        let old_next_id = controller.next().unwrap().id;
        guess_correctly(&mut controller);

        controller.advance(1_500);
        assert_eq!(controller.phase(), GamePhase::Playing);
        assert_eq!(controller.score(), 1);
        assert_eq!(controller.current().unwrap().id, old_next_id);
        assert_ne!(controller.next().unwrap().id, old_next_id);
        assert!(controller.last_guess_correct().is_none());
        assert!(controller.is_transitioning());

        controller.advance(300);
        assert!(!controller.is_transitioning());
    }

    #[test]
    fn guesses_are_rejected_while_revealing_and_settling() {
        let mut controller = controller(&[(1, 10.0), (2, 20.0), (3, 30.0)]);
        controller.start_game();
        guess_correctly(&mut controller);

        // Double-fired input during the reveal window changes nothing.
        controller.make_guess(Guess::Higher);
        controller.make_guess(Guess::Lower);
        assert_eq!(controller.phase(), GamePhase::Revealing);

        controller.advance(1_500);
        assert!(controller.is_transitioning());
        let score_before = controller.score();
        controller.make_guess(Guess::Higher);
        assert_eq!(controller.phase(), GamePhase::Playing);
        assert_eq!(controller.score(), score_before);
    }

    #[test]
    fn incorrect_guess_ends_run_and_persists_record() {
        let mut controller = controller(&[(1, 10.0), (2, 20.0), (3, 30.0)]);
        controller.start_game();
        guess_correctly(&mut controller);
        controller.advance(1_800);

        // Deliberately wrong direction.
        let mode = controller.config().mode;
        let current = mode.value_of(controller.current().unwrap());
        let next = mode.value_of(controller.next().unwrap());
        controller.make_guess(if next >= current {
            Guess::Lower
        } else {
            Guess::Higher
        });
        assert_eq!(controller.last_guess_correct(), Some(false));

        controller.advance(2_000);
        assert_eq!(controller.phase(), GamePhase::GameOver);
        assert!(controller.current().is_none());
        assert!(controller.next().is_none());
        assert_eq!(controller.high_score(), 1);
        assert!(controller.is_new_record());
        let raw = controller
            .store
            .read(HIGH_SCORE_STORAGE_KEY)
            .unwrap()
            .expect("record written");
        assert!(raw.contains("weight"));
    }

    #[test]
    fn losing_below_the_record_does_not_write() {
        let store = MemoryStore::default();
        let mut table = HighScoreTable::default();
        table.record(GuessMode::Weight, 50);
        table.save(&store).unwrap();

        let dex = Dex::from_species(vec![species(1, 10.0), species(2, 20.0)]);
        let mut controller = RoundController::with_seed(dex, GameConfig::default(), store, 9);
        controller.start_game();
        let mode = controller.config().mode;
        let current = mode.value_of(controller.current().unwrap());
        let next = mode.value_of(controller.next().unwrap());
        controller.make_guess(if next >= current {
            Guess::Lower
        } else {
            Guess::Higher
        });
        controller.advance(2_000);
        assert_eq!(controller.phase(), GamePhase::GameOver);
        assert!(!controller.is_new_record());
        assert_eq!(controller.high_score(), 50);
    }

    #[test]
    fn go_to_menu_clears_pair_from_any_phase() {
        let mut controller = controller(&[(1, 10.0), (2, 20.0)]);
        controller.start_game();
        controller.go_to_menu();
        assert_eq!(controller.phase(), GamePhase::Menu);
        assert!(controller.current().is_none());
        assert!(controller.next().is_none());
        assert!(controller.last_guess_correct().is_none());

        controller.start_game();
        guess_correctly(&mut controller);
        assert_eq!(controller.phase(), GamePhase::Revealing);
        controller.go_to_menu();
        assert!(controller.last_guess_correct().is_none());
        // The pending reveal was torn down with the run.
        controller.advance(10_000);
        assert_eq!(controller.phase(), GamePhase::Menu);
        assert!(controller.current().is_none());
    }

    #[test]
    fn config_changes_are_ignored_mid_run() {
        let mut controller = controller(&[(1, 10.0), (2, 20.0)]);
        controller.start_game();
        let mid_run = GameConfig {
            mode: GuessMode::Bst,
            ..GameConfig::default()
        };
        controller.set_config(mid_run);
        assert_eq!(controller.config().mode, GuessMode::Weight);

        controller.go_to_menu();
        controller.set_config(mid_run);
        assert_eq!(controller.config().mode, GuessMode::Bst);
    }

    #[test]
    fn timer_epoch_advances_on_teardown() {
        let mut controller = controller(&[(1, 10.0), (2, 20.0)]);
        controller.start_game();
        guess_correctly(&mut controller);
        let epoch = controller.timer_epoch();
        assert!(controller.next_timer_delay().is_some());
        controller.go_to_menu();
        assert!(controller.timer_epoch() > epoch);
        assert!(controller.next_timer_delay().is_none());
    }
}
