//! Game state machine - orchestrates phases and owns all session state.
//!
//! `GameEngine` is driven from exactly two directions: discrete inputs
//! (clicks, key presses, hint/undo, capture failures, the late-arriving
//! victory text) and `tick(elapsed_ms)`. Every timer in the system is an
//! engine-owned millisecond countdown advanced by `tick`, so teardown
//! (reset, capture error, session end) cancels everything deterministically
//! by zeroing fields - no background timer can mutate state afterwards.
//!
//! Side effects that need collaborators (persisting the leaderboard,
//! requesting victory text, releasing the video source) are emitted as
//! `EngineEvent`s and consumed by the caller after each input or tick.

use crate::core::grid::Grid;
use crate::core::history::MoveHistory;
use crate::core::leaderboard::{epoch_ms, Leaderboard, ScoreEntry};
use crate::core::rng::SimpleRng;
use crate::core::scoring::calculate_score;
use crate::core::session::{TimedSession, TimedStats};
use crate::core::shuffle::{self, ShuffleScript};
use crate::core::snapshot::{RenderSnapshot, SessionSnapshot, TransitionSnapshot};
use crate::core::transition::Transition;
use crate::input::mapper::{move_focus, pointer_to_index};
use crate::types::{
    CaptureFailure, FocusDirection, GameMode, GamePhase, GridSize, COUNTDOWN_TICKS,
    COUNTDOWN_TICK_MS, GO_FLOURISH_MS, HINT_WINDOW_MS, SESSION_TICK_MS, SHUFFLE_SWAP_MS,
    STAGE_CLEARED_PAUSE_MS, SWAP_DURATION_MS,
};

/// Numeric context handed to the victory-text collaborator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FeedbackContext {
    Classic {
        size: GridSize,
        score: u32,
        moves: u32,
        elapsed_ms: u64,
    },
    Timed {
        stats: TimedStats,
    },
}

/// Effects for the caller to dispatch to collaborators.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    /// The leaderboard changed; write it through the storage collaborator.
    PersistLeaderboard,
    /// Fire-and-forget request for celebratory text. The result must be fed
    /// back via `victory_text` with the same generation; stale generations
    /// are discarded.
    VictoryTextRequest {
        generation: u32,
        context: FeedbackContext,
    },
    /// The video source is no longer needed.
    ReleaseVideo,
    /// Hint requested at zero budget: show a non-consuming feedback pulse.
    HintDenied,
    /// The timed session ended; show the summary.
    SessionEnded { stats: TimedStats },
}

#[derive(Debug, Clone)]
pub struct GameEngine {
    phase: GamePhase,
    mode: GameMode,
    size: GridSize,
    grid: Grid,
    rng: SimpleRng,

    transition: Option<Transition>,
    shuffle: Option<ShuffleScript>,

    selected: Option<usize>,
    focused: usize,

    history: MoveHistory,
    move_count: u32,
    hint_budget: u8,
    hint_ghost_ms: u32,

    countdown_ticks_left: u8,
    countdown_timer_ms: u32,
    go_flourish_ms: u32,
    stage_cleared_ms: u32,

    session: Option<TimedSession>,
    session_timer_ms: u32,
    timed_minutes: u32,
    last_timed_stats: Option<TimedStats>,

    elapsed_play_ms: u64,
    leaderboard: Leaderboard,
    last_score: Option<ScoreEntry>,

    victory_message: Option<String>,
    feedback_generation: u32,
    error_message: Option<&'static str>,

    events: Vec<EngineEvent>,
}

impl GameEngine {
    pub fn new(seed: u32) -> Self {
        Self {
            phase: GamePhase::Idle,
            mode: GameMode::Classic,
            size: GridSize::Three,
            grid: Grid::new(GridSize::Three),
            rng: SimpleRng::new(seed),
            transition: None,
            shuffle: None,
            selected: None,
            focused: 0,
            history: MoveHistory::new(),
            move_count: 0,
            hint_budget: 0,
            hint_ghost_ms: 0,
            countdown_ticks_left: 0,
            countdown_timer_ms: 0,
            go_flourish_ms: 0,
            stage_cleared_ms: 0,
            session: None,
            session_timer_ms: 0,
            timed_minutes: crate::types::DEFAULT_TIMED_MINUTES,
            last_timed_stats: None,
            elapsed_play_ms: 0,
            leaderboard: Leaderboard::default(),
            last_score: None,
            victory_message: None,
            feedback_generation: 0,
            error_message: None,
            events: Vec::new(),
        }
    }

    // --- accessors ---

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn hint_budget(&self) -> u8 {
        self.hint_budget
    }

    pub fn hint_ghost_active(&self) -> bool {
        self.hint_ghost_ms > 0
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn focused(&self) -> usize {
        self.focused
    }

    pub fn is_shuffling(&self) -> bool {
        self.shuffle.is_some()
    }

    pub fn transition(&self) -> Option<&Transition> {
        self.transition.as_ref()
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_play_ms
    }

    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    pub fn last_score(&self) -> Option<&ScoreEntry> {
        self.last_score.as_ref()
    }

    pub fn last_timed_stats(&self) -> Option<&TimedStats> {
        self.last_timed_stats.as_ref()
    }

    pub fn session(&self) -> Option<&TimedSession> {
        self.session.as_ref()
    }

    pub fn victory_message(&self) -> Option<&str> {
        self.victory_message.as_deref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message
    }

    pub fn feedback_generation(&self) -> u32 {
        self.feedback_generation
    }

    /// Replace the leaderboard (normally with one loaded from storage).
    pub fn set_leaderboard(&mut self, leaderboard: Leaderboard) {
        self.leaderboard = leaderboard;
    }

    /// Drain events emitted since the last call.
    pub fn take_events(&mut self) -> Vec<EngineEvent> {
        std::mem::take(&mut self.events)
    }

    // --- start / teardown ---

    /// Begin a classic game. The caller must have acquired the video source
    /// first; acquisition failures go through `capture_failed` instead.
    pub fn start_classic(&mut self, size: GridSize) {
        self.begin(GameMode::Classic, size, crate::types::DEFAULT_TIMED_MINUTES);
    }

    /// Begin a timed-challenge session of the given duration.
    pub fn start_timed(&mut self, size: GridSize, minutes: u32) {
        self.begin(GameMode::Timed, size, minutes.max(1));
    }

    fn begin(&mut self, mode: GameMode, size: GridSize, minutes: u32) {
        if self.phase != GamePhase::Idle {
            return;
        }
        self.mode = mode;
        self.size = size;
        self.timed_minutes = minutes;
        self.grid = Grid::new(size);
        self.session = None;
        self.last_score = None;
        self.last_timed_stats = None;
        self.victory_message = None;
        self.error_message = None;

        self.phase = GamePhase::Countdown;
        self.countdown_ticks_left = COUNTDOWN_TICKS;
        self.countdown_timer_ms = 0;
        self.go_flourish_ms = 0;
    }

    /// Capture failure from the video collaborator. Reachable from any
    /// phase; recoverable only via `reset`.
    pub fn capture_failed(&mut self, reason: CaptureFailure) {
        self.cancel_timers();
        self.session = None;
        self.phase = GamePhase::Error;
        self.error_message = Some(reason.user_message());
        self.feedback_generation = self.feedback_generation.wrapping_add(1);
        self.events.push(EngineEvent::ReleaseVideo);
    }

    /// Explicit reset back to idle from any phase.
    pub fn reset(&mut self) {
        self.cancel_timers();
        self.phase = GamePhase::Idle;
        self.grid = Grid::new(self.size);
        self.selected = None;
        self.focused = 0;
        self.history.clear();
        self.move_count = 0;
        self.hint_budget = 0;
        self.session = None;
        self.error_message = None;
        self.victory_message = None;
        self.feedback_generation = self.feedback_generation.wrapping_add(1);
        self.events.push(EngineEvent::ReleaseVideo);
    }

    /// Zero every outstanding timer and discard the in-flight transition.
    /// After this no tick-driven activity remains.
    fn cancel_timers(&mut self) {
        self.transition = None;
        self.shuffle = None;
        self.countdown_ticks_left = 0;
        self.countdown_timer_ms = 0;
        self.go_flourish_ms = 0;
        self.stage_cleared_ms = 0;
        self.hint_ghost_ms = 0;
        self.session_timer_ms = 0;
    }

    // --- input ---

    fn interaction_allowed(&self) -> bool {
        self.phase == GamePhase::Playing && self.transition.is_none() && self.shuffle.is_none()
    }

    /// Pointer click in surface pixels. The surface dimensions come from the
    /// render collaborator.
    pub fn pointer_click(&mut self, x: f32, y: f32, surface_w: f32, surface_h: f32) {
        if !self.interaction_allowed() {
            return;
        }
        let Some(index) = pointer_to_index(x, y, surface_w, surface_h, self.grid.n()) else {
            return;
        };
        self.focused = index;
        self.interact(index);
    }

    /// Arrow-key focus movement, clamped at the grid edges.
    pub fn focus_move(&mut self, dir: FocusDirection) {
        if !self.interaction_allowed() {
            return;
        }
        self.focused = move_focus(self.focused, self.grid.n(), dir);
    }

    /// Enter/Space: interact with the focused tile.
    pub fn activate(&mut self) {
        if !self.interaction_allowed() {
            return;
        }
        self.interact(self.focused);
    }

    /// Two-tap selection protocol: first tap selects, second tap on another
    /// tile begins the swap, second tap on the same tile deselects.
    fn interact(&mut self, index: usize) {
        match self.selected {
            None => self.selected = Some(index),
            Some(sel) if sel == index => self.selected = None,
            Some(sel) => {
                self.history.push(sel, index);
                self.move_count += 1;
                self.transition = Some(Transition::new(sel, index, SWAP_DURATION_MS));
                self.selected = None;
            }
        }
    }

    /// Spend a hint: show the solved-image ghost for a fixed window. The
    /// window restarts if a hint is already active. At zero budget this is a
    /// non-consuming feedback pulse.
    pub fn hint(&mut self) {
        if !self.interaction_allowed() {
            return;
        }
        if self.hint_budget == 0 {
            self.events.push(EngineEvent::HintDenied);
            return;
        }
        self.hint_budget -= 1;
        self.hint_ghost_ms = HINT_WINDOW_MS;
    }

    /// Undo the most recent move with an immediate, non-animated inverse
    /// swap. No-op on empty history; move count floors at zero.
    pub fn undo(&mut self) {
        if !self.interaction_allowed() {
            return;
        }
        let Some((a, b)) = self.history.pop() else {
            return;
        };
        self.grid.swap(a, b);
        self.move_count = self.move_count.saturating_sub(1);
    }

    /// Late-arriving victory text from the text-generation collaborator.
    /// Ignored unless the generation still matches and a result screen is
    /// still showing.
    pub fn victory_text(&mut self, generation: u32, text: String) {
        if generation != self.feedback_generation {
            return;
        }
        if matches!(self.phase, GamePhase::Won | GamePhase::TimesUp) {
            self.victory_message = Some(text);
        }
    }

    // --- tick ---

    /// Advance all engine timers by one tick delta. Within a tick the
    /// transition is committed before any win/score evaluation, so solve
    /// detection never observes a grid mid-swap.
    pub fn tick(&mut self, elapsed_ms: u32) {
        match self.phase {
            GamePhase::Countdown => self.tick_countdown(elapsed_ms),
            GamePhase::Playing => self.tick_playing(elapsed_ms),
            GamePhase::StageCleared => self.tick_stage_cleared(elapsed_ms),
            GamePhase::Idle | GamePhase::Won | GamePhase::TimesUp | GamePhase::Error => {}
        }
    }

    fn tick_countdown(&mut self, elapsed_ms: u32) {
        if self.countdown_ticks_left > 0 {
            self.countdown_timer_ms += elapsed_ms;
            while self.countdown_timer_ms >= COUNTDOWN_TICK_MS && self.countdown_ticks_left > 0 {
                self.countdown_timer_ms -= COUNTDOWN_TICK_MS;
                self.countdown_ticks_left -= 1;
            }
            if self.countdown_ticks_left == 0 {
                self.go_flourish_ms = GO_FLOURISH_MS;
            }
            return;
        }
        self.go_flourish_ms = self.go_flourish_ms.saturating_sub(elapsed_ms);
        if self.go_flourish_ms == 0 {
            self.begin_puzzle();
        }
    }

    fn tick_playing(&mut self, elapsed_ms: u32) {
        self.advance_transition(elapsed_ms);
        if self.phase != GamePhase::Playing {
            // The commit above may have ended the puzzle.
            self.tick_session(elapsed_ms);
            return;
        }

        self.advance_shuffle(elapsed_ms);
        self.hint_ghost_ms = self.hint_ghost_ms.saturating_sub(elapsed_ms);
        if self.shuffle.is_none() {
            self.elapsed_play_ms += elapsed_ms as u64;
        }
        self.tick_session(elapsed_ms);
    }

    fn tick_stage_cleared(&mut self, elapsed_ms: u32) {
        self.stage_cleared_ms = self.stage_cleared_ms.saturating_sub(elapsed_ms);
        if self.stage_cleared_ms == 0 {
            self.begin_puzzle();
        }
        // The session clock keeps running through the pause.
        self.tick_session(elapsed_ms);
    }

    fn advance_transition(&mut self, elapsed_ms: u32) {
        let Some(transition) = &mut self.transition else {
            return;
        };
        if !transition.tick(elapsed_ms) {
            return;
        }
        let (a, b) = transition.positions();
        self.transition = None;

        if self.shuffle.is_some() {
            // Scripted swaps are illustrative only; the committed grid was
            // fixed when the shuffle was generated.
            return;
        }
        self.grid.swap(a, b);
        self.check_win();
    }

    fn advance_shuffle(&mut self, elapsed_ms: u32) {
        let Some(script) = &mut self.shuffle else {
            return;
        };
        if self.transition.is_some() {
            return;
        }
        if let Some((a, b)) = script.poll(elapsed_ms) {
            self.transition = Some(Transition::new(a, b, SHUFFLE_SWAP_MS));
        } else if script.is_exhausted() {
            self.shuffle = None;
        }
    }

    fn tick_session(&mut self, elapsed_ms: u32) {
        if self.session.is_none() {
            return;
        }
        if !matches!(self.phase, GamePhase::Playing | GamePhase::StageCleared) {
            return;
        }
        self.session_timer_ms += elapsed_ms;
        while self.session_timer_ms >= SESSION_TICK_MS {
            self.session_timer_ms -= SESSION_TICK_MS;
            let expired = match &mut self.session {
                Some(session) => session.tick_second(),
                None => return,
            };
            if expired {
                self.times_up();
                return;
            }
        }
    }

    // --- internal transitions ---

    /// (Re)initialize and shuffle a fresh puzzle, entering `playing`.
    fn begin_puzzle(&mut self) {
        let plan = shuffle::generate(&mut self.rng, self.size);
        self.grid = Grid::from_tiles(self.size, plan.tiles);
        self.shuffle = Some(ShuffleScript::new(plan.script));
        self.transition = None;
        self.selected = None;
        self.focused = 0;
        self.history.clear();
        self.move_count = 0;
        self.hint_budget = self.size.hint_budget();
        self.hint_ghost_ms = 0;
        self.elapsed_play_ms = 0;
        self.phase = GamePhase::Playing;

        if self.mode == GameMode::Timed && self.session.is_none() {
            self.session = Some(TimedSession::new(self.timed_minutes, self.size));
            self.session_timer_ms = 0;
        }
    }

    /// Evaluate the win condition after a committed swap.
    fn check_win(&mut self) {
        if !self.grid.is_solved() {
            return;
        }
        match self.mode {
            GameMode::Classic => self.won(),
            GameMode::Timed => self.stage_cleared(),
        }
    }

    fn won(&mut self) {
        self.phase = GamePhase::Won;
        let entry = ScoreEntry {
            score: calculate_score(self.size, self.move_count, self.elapsed_play_ms),
            moves: self.move_count,
            time: self.elapsed_play_ms,
            date: epoch_ms(),
        };
        self.last_score = Some(entry);
        self.leaderboard.insert(self.size, entry);
        self.victory_message = Some(crate::collab::textgen::FALLBACK_VICTORY_TEXT.to_string());
        self.events.push(EngineEvent::PersistLeaderboard);
        self.events.push(EngineEvent::VictoryTextRequest {
            generation: self.feedback_generation,
            context: FeedbackContext::Classic {
                size: self.size,
                score: entry.score,
                moves: entry.moves,
                elapsed_ms: entry.time,
            },
        });
    }

    fn stage_cleared(&mut self) {
        if let Some(session) = &mut self.session {
            session.record_solve(self.move_count);
        }
        self.phase = GamePhase::StageCleared;
        self.stage_cleared_ms = STAGE_CLEARED_PAUSE_MS;
        self.selected = None;
    }

    fn times_up(&mut self) {
        let stats = match self.session.take() {
            Some(session) => session.finalize(),
            None => return,
        };
        self.transition = None;
        self.shuffle = None;
        self.stage_cleared_ms = 0;
        self.hint_ghost_ms = 0;
        self.phase = GamePhase::TimesUp;
        self.last_timed_stats = Some(stats);
        self.victory_message = Some(crate::collab::textgen::FALLBACK_VICTORY_TEXT.to_string());
        self.events.push(EngineEvent::SessionEnded { stats });
        self.events.push(EngineEvent::VictoryTextRequest {
            generation: self.feedback_generation,
            context: FeedbackContext::Timed { stats },
        });
    }

    // --- snapshot ---

    pub fn snapshot_into(&self, out: &mut RenderSnapshot) {
        out.clear();
        out.n = self.grid.n() as u8;
        out.tile_count = self.grid.tile_count() as u8;
        for (i, &t) in self.grid.tiles().iter().enumerate() {
            out.tiles[i] = t;
        }
        out.phase = self.phase;
        out.mode = self.mode;
        out.selected = self.selected.map(|s| s as u8);
        out.focused = self.focused as u8;
        out.ghost_hint = self.hint_ghost_ms > 0;
        out.is_shuffling = self.shuffle.is_some();
        out.transition = self.transition.map(|t| {
            let (a, b) = t.positions();
            TransitionSnapshot {
                a: a as u8,
                b: b as u8,
                progress: t.progress(),
            }
        });
        out.countdown = match self.phase {
            GamePhase::Countdown => Some(self.countdown_ticks_left),
            _ => None,
        };
        out.move_count = self.move_count;
        out.hint_budget = self.hint_budget;
        out.elapsed_ms = self.elapsed_play_ms;
        out.score = self.last_score.map(|s| s.score);
        out.session = self.session.as_ref().map(|s| SessionSnapshot {
            remaining_ms: s.remaining_ms(),
            puzzles_cleared: s.puzzles_cleared(),
            total_moves: s.total_moves(),
        });
        out.timed_stats = match self.phase {
            GamePhase::TimesUp => self.last_timed_stats,
            _ => None,
        };
    }

    pub fn snapshot(&self) -> RenderSnapshot {
        let mut s = RenderSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
