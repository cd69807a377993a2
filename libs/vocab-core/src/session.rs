//! Quiz session engine.
//!
//! One configurable engine covers both presentation modes: flip cards
//! (self-graded) and typed answers (graded by `matching`). A session runs
//! over a random subset of a dictionary's words, tallies correct and
//! incorrect answers, and terminates into a summary. All transitions are
//! synchronous responses to user input.

use crate::matching::{compare_answer, MatchResult};
use crate::types::{QuizMode, SessionConfig, TrainingStats, WordEntry};
use chrono::Utc;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Emitted when the requested sample size had to be clamped to the
/// available range. A warning for the user, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClampNotice {
    pub requested: usize,
    pub actual: usize,
}

/// Final tallies of a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub correct_count: u32,
    pub incorrect_count: u32,
    pub total_words: usize,
}

impl SessionSummary {
    /// Share of correct answers, rounded to a whole percentage.
    pub fn correct_percentage(&self) -> u32 {
        if self.total_words == 0 {
            return 0;
        }
        ((self.correct_count as f64 / self.total_words as f64) * 100.0).round() as u32
    }
}

impl From<SessionSummary> for TrainingStats {
    fn from(summary: SessionSummary) -> Self {
        Self {
            correct_count: summary.correct_count,
            incorrect_count: summary.incorrect_count,
            total_words: summary.total_words,
            timestamp: Utc::now(),
        }
    }
}

/// Outcome of advancing past the current card.
#[derive(Debug, Clone)]
pub enum Advance {
    /// Moved to the card at this index, awaiting an answer.
    Next(usize),
    /// The last card was passed; the session is over.
    Finished(SessionSummary),
}

#[derive(Debug, Clone)]
enum Phase {
    Awaiting,
    Answered(MatchResult),
    Finished,
}

/// A single training session over a sampled subset of words.
///
/// State machine: each card starts in `Awaiting`, moves to `Answered` on
/// `submit_answer`/`mark`, and `advance` either presents the next card or
/// finishes the session. A new session (or `reshuffle`) resets everything;
/// no state survives from a previous run.
#[derive(Debug)]
pub struct QuizSession {
    words: Vec<WordEntry>,
    mode: QuizMode,
    index: usize,
    correct_count: u32,
    incorrect_count: u32,
    phase: Phase,
}

impl QuizSession {
    /// Start a session over a random subset of `all_words`.
    ///
    /// The requested sample size is clamped to `[1, all_words.len()]`; a
    /// clamp is reported through the returned notice. The subset is drawn
    /// without replacement (shuffle then truncate) and presented in the
    /// shuffled order.
    pub fn start<R: Rng + ?Sized>(
        all_words: &[WordEntry],
        config: SessionConfig,
        rng: &mut R,
    ) -> (Self, Option<ClampNotice>) {
        let total = all_words.len();
        let actual = if total == 0 {
            0
        } else {
            config.sample_size.clamp(1, total)
        };
        let notice = (actual != config.sample_size).then_some(ClampNotice {
            requested: config.sample_size,
            actual,
        });

        let mut words = all_words.to_vec();
        words.shuffle(rng);
        words.truncate(actual);

        let phase = if words.is_empty() {
            Phase::Finished
        } else {
            Phase::Awaiting
        };

        (
            Self {
                words,
                mode: config.mode,
                index: 0,
                correct_count: 0,
                incorrect_count: 0,
                phase,
            },
            notice,
        )
    }

    pub fn mode(&self) -> QuizMode {
        self.mode
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Zero-based position of the card being presented.
    pub fn position(&self) -> usize {
        self.index
    }

    /// Progress through the session as a whole percentage.
    pub fn progress_percent(&self) -> u32 {
        if self.words.is_empty() {
            return 100;
        }
        (((self.index + 1) as f64 / self.words.len() as f64) * 100.0).round() as u32
    }

    /// The card being presented, or `None` once the session is finished.
    pub fn current(&self) -> Option<&WordEntry> {
        if matches!(self.phase, Phase::Finished) {
            None
        } else {
            self.words.get(self.index)
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.phase, Phase::Finished)
    }

    /// Grade a typed answer against the current card's translation.
    ///
    /// Tallies once per card: submitting again while the card is already
    /// answered returns the recorded result unchanged. Returns `None` when
    /// the session is finished.
    pub fn submit_answer(&mut self, raw_answer: &str) -> Option<MatchResult> {
        match &self.phase {
            Phase::Awaiting => {
                let word = self.words.get(self.index)?;
                let result = compare_answer(raw_answer, &word.translation);
                self.record(result.clone());
                Some(result)
            }
            Phase::Answered(result) => Some(result.clone()),
            Phase::Finished => None,
        }
    }

    /// Self-grade the current card (flip mode).
    ///
    /// Same tally semantics as `submit_answer`.
    pub fn mark(&mut self, correct: bool) -> Option<MatchResult> {
        match &self.phase {
            Phase::Awaiting => {
                let word = self.words.get(self.index)?;
                let result = MatchResult {
                    is_correct: correct,
                    correct_translation: word.translation.clone(),
                };
                self.record(result.clone());
                Some(result)
            }
            Phase::Answered(result) => Some(result.clone()),
            Phase::Finished => None,
        }
    }

    /// Move past the current card, clearing the answer state. From the
    /// last card this finishes the session.
    pub fn advance(&mut self) -> Advance {
        if matches!(self.phase, Phase::Finished) || self.index + 1 >= self.words.len() {
            self.phase = Phase::Finished;
            return Advance::Finished(self.summary());
        }
        self.index += 1;
        self.phase = Phase::Awaiting;
        Advance::Next(self.index)
    }

    /// Explicit user-triggered restart: re-randomize the cards and reset
    /// position, tallies, and answer state.
    pub fn reshuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.words.shuffle(rng);
        self.index = 0;
        self.correct_count = 0;
        self.incorrect_count = 0;
        self.phase = if self.words.is_empty() {
            Phase::Finished
        } else {
            Phase::Awaiting
        };
    }

    /// Tallies so far (final once the session is finished).
    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            correct_count: self.correct_count,
            incorrect_count: self.incorrect_count,
            total_words: self.words.len(),
        }
    }

    fn record(&mut self, result: MatchResult) {
        if result.is_correct {
            self.correct_count += 1;
        } else {
            self.incorrect_count += 1;
        }
        self.phase = Phase::Answered(result);
    }
}
