//! The game session state machine.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::event::{SessionEvent, SessionObserver};
use super::state::{Outcome, SessionState};
use crate::cards::{Board, CardId};
use crate::core::{GameRng, GameRngState, Result, SessionConfig};
use crate::schedule::{ScheduleToken, Timeline};

/// Countdown cadence.
pub const TICK_INTERVAL_MS: u64 = 1_000;

/// Timed work pending on the session's timeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionTask {
    /// One second of countdown.
    Tick,
    /// Commit the outcome of a revealed pair.
    Settle {
        first: CardId,
        second: CardId,
        matched: bool,
        /// This pair completed the board; settling announces the win.
        final_pair: bool,
    },
}

/// Read-only view of a session for a renderer.
///
/// Cheap to take: the board shares structure with the live session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub state: SessionState,
    pub board: Board,
    pub selection: Vec<CardId>,
    pub matched_pairs: usize,
    pub total_pairs: usize,
    pub time_left: u32,
}

/// One memory-match game.
///
/// Owns the board, selection, score, countdown, and a timeline of pending
/// timed work. Nothing here is global; any number of sessions can coexist.
///
/// ## Driving a session
///
/// - Input: `select_card`, `pause`, `resume`, `start`/`reset`/`replay`
/// - Time: `advance(ms)` fires due countdown ticks and settle entries in
///   order. `tick()` can also be called directly to step the countdown
///   without touching the clock.
///
/// Invalid or stale input (unknown card, third card, clicks while paused,
/// double pause) is ignored, never an error.
pub struct GameSession {
    config: Option<SessionConfig>,
    state: SessionState,
    board: Board,
    selection: SmallVec<[CardId; 2]>,
    matched_pairs: usize,
    time_left: u32,
    timeline: Timeline<SessionTask>,
    countdown: Option<ScheduleToken>,
    locked_until: Option<u64>,
    rng: GameRng,
    observers: Vec<Box<dyn SessionObserver>>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(GameRng::from_entropy())
    }
}

impl std::fmt::Debug for GameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("state", &self.state)
            .field("matched_pairs", &self.matched_pairs)
            .field("time_left", &self.time_left)
            .field("selection", &self.selection)
            .field("now", &self.timeline.now())
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl GameSession {
    /// Create an idle session shuffling with `rng`.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self {
            config: None,
            state: SessionState::Idle,
            board: Board::default(),
            selection: SmallVec::new(),
            matched_pairs: 0,
            time_left: 0,
            timeline: Timeline::new(),
            countdown: None,
            locked_until: None,
            rng,
            observers: Vec::new(),
        }
    }

    /// Create an idle session with a seeded RNG.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::new(GameRng::new(seed))
    }

    /// Register an observer. Observers live as long as the session and
    /// survive restarts.
    pub fn subscribe(&mut self, observer: Box<dyn SessionObserver>) {
        self.observers.push(observer);
    }

    // === Accessors ===

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Cards currently face-up and awaiting evaluation.
    #[must_use]
    pub fn selection(&self) -> &[CardId] {
        &self.selection
    }

    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        self.matched_pairs
    }

    #[must_use]
    pub fn total_pairs(&self) -> usize {
        self.board.total_pairs()
    }

    /// Whole seconds left on the countdown.
    #[must_use]
    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    /// Config of the current (or last) session.
    #[must_use]
    pub fn config(&self) -> Option<&SessionConfig> {
        self.config.as_ref()
    }

    /// Logical time in milliseconds.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.timeline.now()
    }

    /// Is the countdown currently scheduled?
    #[must_use]
    pub fn is_countdown_running(&self) -> bool {
        self.countdown.is_some_and(|token| self.timeline.is_scheduled(token))
    }

    /// Pending timed work, in firing order.
    pub fn pending_tasks(&self) -> impl Iterator<Item = (u64, &SessionTask)> + '_ {
        self.timeline.pending()
    }

    /// RNG state, for reproducing the next board.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Take a read-only view for rendering.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            state: self.state,
            board: self.board.clone(),
            selection: self.selection.to_vec(),
            matched_pairs: self.matched_pairs,
            total_pairs: self.total_pairs(),
            time_left: self.time_left,
        }
    }

    // === Commands ===

    /// Start a new session, discarding any live one.
    ///
    /// Fails with `InvalidConfig` when the board cannot be fully paired;
    /// the previous session is left untouched in that case.
    pub fn start(&mut self, config: SessionConfig) -> Result<()> {
        config.validate()?;
        // Each game shuffles from its own stream, derived only from the seed
        // and how many games came before
        let board = Board::generate(&config, &mut self.rng.fork())?;

        // Nothing from the previous session may fire on the new board
        self.timeline.clear();

        tracing::info!(
            rows = config.rows,
            columns = config.columns,
            time_limit_secs = config.time_limit_secs,
            theme = %config.theme,
            "starting session"
        );

        self.board = board;
        self.selection.clear();
        self.matched_pairs = 0;
        self.time_left = config.time_limit_secs;
        self.locked_until = None;
        self.config = Some(config);

        self.start_countdown();
        self.set_state(SessionState::Playing);
        Ok(())
    }

    /// End any live session and start another with `config`.
    pub fn reset(&mut self, config: SessionConfig) -> Result<()> {
        tracing::debug!(state = %self.state, "resetting session");
        self.start(config)
    }

    /// Start again with the current config. No-op before the first start.
    pub fn replay(&mut self) -> Result<()> {
        match self.config.clone() {
            Some(config) => self.reset(config),
            None => Ok(()),
        }
    }

    /// Flip a card.
    ///
    /// Ignored unless the session is `Playing`, the card exists and is
    /// face-down and unmatched, fewer than two cards are selected, and no
    /// selection cooldown is active. The second card moves the session to
    /// `Evaluating` and schedules the settle.
    pub fn select_card(&mut self, card: CardId) {
        if self.state != SessionState::Playing {
            tracing::trace!(%card, state = %self.state, "selection ignored");
            return;
        }

        if self.locked_until.is_some_and(|until| self.timeline.now() < until) {
            tracing::trace!(%card, "selection ignored during cooldown");
            return;
        }

        if self.selection.len() >= 2 {
            return;
        }

        match self.board.get(card) {
            Some(c) if c.is_selectable() => {}
            _ => {
                tracing::trace!(%card, "selection ignored: unknown or already revealed");
                return;
            }
        }

        self.board.set_face_up(card, true);
        self.selection.push(card);
        self.emit(SessionEvent::CardChanged {
            card,
            is_face_up: true,
            is_matched: false,
        });

        let cooldown = self.settings().1;
        if cooldown > 0 {
            self.locked_until = Some(self.timeline.now().saturating_add(cooldown));
        }

        if self.selection.len() == 2 {
            self.evaluate();
        }
    }

    /// One second of countdown.
    ///
    /// Runs while `Playing` or `Evaluating`. Reaching zero with pairs left
    /// ends the session as `TimedOut`.
    pub fn tick(&mut self) {
        if !self.state.is_running() || self.time_left == 0 {
            return;
        }

        self.time_left -= 1;
        self.emit(SessionEvent::TimerTick {
            seconds_left: self.time_left,
        });

        if self.time_left == 0 && self.matched_pairs < self.total_pairs() {
            self.end(Outcome::TimedOut);
        }
    }

    /// Freeze the countdown. Pending settles still fire while paused.
    pub fn pause(&mut self) {
        if !self.state.is_running() {
            return;
        }

        self.stop_countdown();
        self.set_state(SessionState::Paused);
    }

    /// Restart the countdown; the next tick is a full second away.
    pub fn resume(&mut self) {
        if self.state != SessionState::Paused {
            return;
        }

        self.start_countdown();
        let next = if self.selection.len() == 2 {
            SessionState::Evaluating
        } else {
            SessionState::Playing
        };
        self.set_state(next);
    }

    /// Advance logical time by `ms`, firing everything that comes due.
    ///
    /// Returns the number of entries fired.
    pub fn advance(&mut self, ms: u64) -> usize {
        let deadline = self.timeline.now().saturating_add(ms);
        let mut fired = 0;

        while let Some(entry) = self.timeline.pop_due(deadline) {
            fired += 1;
            self.run_task(entry.token, entry.event);
        }

        self.timeline.advance_to(deadline);
        fired
    }

    // === Transitions ===

    fn evaluate(&mut self) {
        let (first, second) = (self.selection[0], self.selection[1]);
        let matched = match (self.board.get(first), self.board.get(second)) {
            (Some(a), Some(b)) => a.pairs_with(b),
            _ => false,
        };

        self.set_state(SessionState::Evaluating);

        let mut final_pair = false;
        if matched {
            self.matched_pairs += 1;
            tracing::debug!(%first, %second, matched_pairs = self.matched_pairs, "pair matched");

            if self.matched_pairs == self.total_pairs() {
                // Won now; observers hear about it once the pair settles
                final_pair = true;
                self.stop_countdown();
                self.state = SessionState::Ended(Outcome::Won);
                tracing::info!(time_left = self.time_left, "all pairs matched");
            }
        } else {
            tracing::debug!(%first, %second, "mismatch");
        }

        let settle_delay = self.settings().0;
        self.timeline.schedule(
            settle_delay,
            SessionTask::Settle {
                first,
                second,
                matched,
                final_pair,
            },
        );
    }

    fn settle(&mut self, first: CardId, second: CardId, matched: bool, final_pair: bool) {
        for card in [first, second] {
            if matched {
                self.board.set_matched(card);
            } else {
                self.board.set_face_up(card, false);
            }
            self.emit(SessionEvent::CardChanged {
                card,
                is_face_up: matched,
                is_matched: matched,
            });
        }
        self.selection.clear();

        if final_pair {
            self.emit(SessionEvent::StateChanged(self.state));
            return;
        }

        // A settle during a pause leaves the session paused
        if self.state == SessionState::Evaluating {
            self.set_state(SessionState::Playing);
        }
    }

    fn end(&mut self, outcome: Outcome) {
        self.timeline.clear();
        self.countdown = None;
        tracing::info!(
            %outcome,
            matched_pairs = self.matched_pairs,
            total_pairs = self.total_pairs(),
            "session ended"
        );
        self.set_state(SessionState::Ended(outcome));
    }

    fn run_task(&mut self, token: ScheduleToken, task: SessionTask) {
        match task {
            SessionTask::Tick => {
                if self.countdown == Some(token) {
                    self.countdown = None;
                }
                self.tick();
                if self.state.is_running() {
                    self.start_countdown();
                }
            }
            SessionTask::Settle {
                first,
                second,
                matched,
                final_pair,
            } => self.settle(first, second, matched, final_pair),
        }
    }

    fn start_countdown(&mut self) {
        self.stop_countdown();
        self.countdown = Some(self.timeline.schedule(TICK_INTERVAL_MS, SessionTask::Tick));
    }

    fn stop_countdown(&mut self) {
        if let Some(token) = self.countdown.take() {
            self.timeline.cancel(token);
        }
    }

    fn set_state(&mut self, state: SessionState) {
        if self.state == state {
            return;
        }
        tracing::debug!(from = %self.state, to = %state, "transition");
        self.state = state;
        self.emit(SessionEvent::StateChanged(state));
    }

    fn emit(&mut self, event: SessionEvent) {
        for observer in &mut self.observers {
            event.dispatch(observer.as_mut());
        }
    }

    /// Settle delay and selection cooldown of the live config.
    fn settings(&self) -> (u64, u64) {
        self.config
            .as_ref()
            .map(|c| (c.settle_delay_ms, c.selection_cooldown_ms))
            .unwrap_or((crate::core::DEFAULT_SETTLE_DELAY_MS, 0))
    }
}
