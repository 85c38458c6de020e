use std::collections::HashSet;
use std::rc::Rc;
use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};

use crate::session::error::SessionError;
use crate::session::item::{Item, ItemSet};
use crate::session::pool::ItemPool;
use crate::session::result::SessionSummary;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Learning,
    Quiz,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Learning => "learning",
            Mode::Quiz => "quiz",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_ascii_lowercase().as_str() {
            "learning" | "learn" => Some(Mode::Learning),
            "quiz" => Some(Mode::Quiz),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Welcome,
    Active,
    Complete,
}

/// Receives the key of every content set a player finishes. Recording the
/// same key twice must have no further effect.
pub trait CompletionSink {
    fn record_completed(&self, set_key: &str);
}

/// Result of one answer submission. Display timing is up to the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Feedback {
    pub correct: bool,
    pub display: String,
    pub expected: String,
    pub given: String,
}

struct SessionState {
    set: ItemSet,
    mode: Mode,
    phase: Phase,
    total_unique: usize,
    mastered: HashSet<String>,
    pool: ItemPool,
    current: Option<Item>,
    cursor: usize,
    attempts: usize,
    mistakes: usize,
    started_at: Instant,
    finished_at: Option<Instant>,
}

impl SessionState {
    fn elapsed_secs(&self) -> f64 {
        match self.finished_at {
            Some(end) => end.duration_since(self.started_at).as_secs_f64(),
            None => self.started_at.elapsed().as_secs_f64(),
        }
    }
}

/// Drives one learning or quiz session. Instantiate one per activity; it
/// holds no global state.
pub struct SessionController {
    rng: SmallRng,
    sink: Option<Rc<dyn CompletionSink>>,
    state: Option<SessionState>,
    last_feedback: Option<Feedback>,
}

impl Default for SessionController {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionController {
    pub fn new() -> Self {
        Self::with_rng(SmallRng::from_entropy())
    }

    pub fn with_rng(rng: SmallRng) -> Self {
        Self {
            rng,
            sink: None,
            state: None,
            last_feedback: None,
        }
    }

    pub fn with_completion_sink(mut self, sink: Rc<dyn CompletionSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    fn invalid(&self, op: &'static str) -> SessionError {
        SessionError::InvalidState {
            op,
            phase: self.phase(),
            mode: self.mode(),
        }
    }

    pub fn start(&mut self, set: ItemSet, mode: Mode) -> Result<(), SessionError> {
        if self.state.is_some() {
            return Err(self.invalid("start"));
        }
        if set.is_empty() {
            return Err(SessionError::EmptySet);
        }

        let total_unique = set.unique_count();
        let (pool, current) = match mode {
            Mode::Quiz => {
                let pool = ItemPool::initialize(&set)?;
                let first = pool.draw(&mut self.rng)?.clone();
                (pool, first)
            }
            Mode::Learning => {
                let first = set.get(0).cloned().ok_or(SessionError::EmptySet)?;
                (ItemPool::default(), first)
            }
        };

        tracing::info!(set = %set.key, mode = mode.as_str(), total_unique, "session started");

        self.last_feedback = None;
        self.state = Some(SessionState {
            set,
            mode,
            phase: Phase::Active,
            total_unique,
            mastered: HashSet::new(),
            pool,
            current: Some(current),
            cursor: 0,
            attempts: 0,
            mistakes: 0,
            started_at: Instant::now(),
            finished_at: None,
        });
        Ok(())
    }

    /// Checks an answer against the current quiz item. A correct answer
    /// masters the item and draws the next one; an incorrect one leaves the
    /// pool untouched and keeps the same item current.
    pub fn submit_answer(&mut self, text: &str) -> Result<Feedback, SessionError> {
        let Some(state) = self.state.as_mut() else {
            return Err(self.invalid("submit_answer"));
        };
        if state.mode != Mode::Quiz || state.phase != Phase::Active {
            return Err(self.invalid("submit_answer"));
        }
        let Some(current) = state.current.clone() else {
            return Err(self.invalid("submit_answer"));
        };

        state.attempts += 1;
        let correct = current.accepts(text);
        let feedback = Feedback {
            correct,
            display: current.display.clone(),
            expected: current.answer.clone(),
            given: text.trim().to_string(),
        };

        if correct {
            state.mastered.insert(current.display.clone());
            state.pool.remove(&current.display);
            debug_assert_eq!(
                state.mastered.len(),
                state.total_unique - state.pool.len(),
                "mastered count out of step with pool"
            );

            if state.pool.is_empty() {
                state.phase = Phase::Complete;
                state.current = None;
                state.finished_at = Some(Instant::now());
                tracing::info!(
                    set = %state.set.key,
                    attempts = state.attempts,
                    mistakes = state.mistakes,
                    "session complete"
                );
                if let Some(sink) = &self.sink {
                    sink.record_completed(&state.set.key);
                }
            } else {
                state.current = Some(state.pool.draw(&mut self.rng)?.clone());
            }
        } else {
            state.mistakes += 1;
            tracing::debug!(display = %current.display, "incorrect answer");
        }

        self.last_feedback = Some(feedback.clone());
        Ok(feedback)
    }

    pub fn next(&mut self) -> Result<&Item, SessionError> {
        self.step("next", true)
    }

    pub fn previous(&mut self) -> Result<&Item, SessionError> {
        self.step("previous", false)
    }

    fn step(&mut self, op: &'static str, forward: bool) -> Result<&Item, SessionError> {
        let (phase, mode) = (self.phase(), self.mode());
        let state = match self.state.as_mut() {
            Some(s) if s.mode == Mode::Learning && s.phase == Phase::Active => s,
            _ => return Err(SessionError::InvalidState { op, phase, mode }),
        };

        let len = state.set.len();
        state.cursor = if forward {
            (state.cursor + 1) % len
        } else {
            (state.cursor + len - 1) % len
        };
        let item = state
            .set
            .get(state.cursor)
            .cloned()
            .ok_or(SessionError::EmptySet)?;
        Ok(state.current.insert(item))
    }

    /// Discards the session. A quiz abandoned before completion records
    /// nothing.
    pub fn reset(&mut self) {
        if let Some(state) = self.state.take()
            && state.mode == Mode::Quiz
            && state.phase == Phase::Active
        {
            tracing::debug!(
                set = %state.set.key,
                remaining = state.pool.len(),
                "quiz abandoned"
            );
        }
        self.last_feedback = None;
    }

    pub fn phase(&self) -> Phase {
        self.state.as_ref().map_or(Phase::Welcome, |s| s.phase)
    }

    pub fn mode(&self) -> Option<Mode> {
        self.state.as_ref().map(|s| s.mode)
    }

    pub fn set(&self) -> Option<&ItemSet> {
        self.state.as_ref().map(|s| &s.set)
    }

    pub fn current_item(&self) -> Option<&Item> {
        self.state.as_ref().and_then(|s| s.current.as_ref())
    }

    pub fn mastered_count(&self) -> usize {
        self.state.as_ref().map_or(0, |s| s.mastered.len())
    }

    pub fn total_unique(&self) -> usize {
        self.state.as_ref().map_or(0, |s| s.total_unique)
    }

    /// Size of the remaining quiz pool. Always zero in learning mode.
    pub fn remaining(&self) -> usize {
        self.state.as_ref().map_or(0, |s| s.pool.len())
    }

    pub fn is_remaining(&self, display: &str) -> bool {
        self.state.as_ref().is_some_and(|s| s.pool.contains(display))
    }

    pub fn cursor(&self) -> Option<usize> {
        self.state
            .as_ref()
            .filter(|s| s.mode == Mode::Learning)
            .map(|s| s.cursor)
    }

    pub fn last_feedback(&self) -> Option<&Feedback> {
        self.last_feedback.as_ref()
    }

    pub fn progress(&self) -> f64 {
        match &self.state {
            Some(s) if s.mode == Mode::Quiz && s.total_unique > 0 => {
                s.mastered.len() as f64 / s.total_unique as f64
            }
            Some(s) if s.mode == Mode::Learning && !s.set.is_empty() => {
                (s.cursor + 1) as f64 / s.set.len() as f64
            }
            _ => 0.0,
        }
    }

    pub fn summary(&self) -> Option<SessionSummary> {
        let s = self.state.as_ref()?;
        Some(SessionSummary::new(
            &s.set,
            s.mode,
            s.mastered.len(),
            s.total_unique,
            s.attempts,
            s.mistakes,
            s.elapsed_secs(),
            s.phase != Phase::Complete,
        ))
    }
}
