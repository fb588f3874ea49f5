//! Session scoring state
//!
//! All score and life bookkeeping lives in one explicit value that the game
//! loop threads through each round. The transitions here are pure with
//! respect to I/O and carry the game's scoring rules.

/// Rounds that may end in exhaustion before the session terminates.
pub const MAX_ROUNDS: u32 = 3;

/// Wrong guesses allowed within a single round.
pub const MAX_TRIES: u32 = 3;

/// Lives at the start of a session.
pub const STARTING_LIVES: u32 = 3;

/// Points awarded for a solved round.
pub const WIN_POINTS: i64 = 10;

/// Points deducted for a wrong guess (subject to the zero-score floor).
pub const MISS_PENALTY: i64 = 5;

/// Minimum similarity for a guess to count as correct.
pub const SOLVE_THRESHOLD: f64 = 0.85;

/// Result of recording a wrong guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissOutcome {
    /// The round continues; prompt for another guess.
    Retry,
    /// The try budget is spent; the round ends and a life is lost.
    RoundExhausted,
}

/// Mutable state for one game session.
///
/// Created once at game start and mutated exclusively by the round and
/// session loops. Invariants:
/// - `incorrect_tries` stays in `[0, MAX_TRIES)` between guesses and resets
///   to 0 whenever a round ends, solved or exhausted.
/// - `incorrect_rounds` stays in `[0, MAX_ROUNDS]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    total_score: i64,
    incorrect_rounds: u32,
    incorrect_tries: u32,
    lives: u32,
}

impl SessionState {
    /// Fresh state: no score, no failed rounds, full lives.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            total_score: 0,
            incorrect_rounds: 0,
            incorrect_tries: 0,
            lives: STARTING_LIVES,
        }
    }

    #[cfg(test)]
    pub(crate) const fn with_total_score(total_score: i64) -> Self {
        Self {
            total_score,
            incorrect_rounds: 0,
            incorrect_tries: 0,
            lives: STARTING_LIVES,
        }
    }

    #[inline]
    #[must_use]
    pub const fn total_score(&self) -> i64 {
        self.total_score
    }

    #[inline]
    #[must_use]
    pub const fn incorrect_rounds(&self) -> u32 {
        self.incorrect_rounds
    }

    #[inline]
    #[must_use]
    pub const fn incorrect_tries(&self) -> u32 {
        self.incorrect_tries
    }

    #[inline]
    #[must_use]
    pub const fn lives(&self) -> u32 {
        self.lives
    }

    /// The session is over once the round budget is spent.
    #[inline]
    #[must_use]
    pub const fn game_over(&self) -> bool {
        self.incorrect_rounds == MAX_ROUNDS
    }

    /// Record a correct guess: award points and end the round.
    pub fn record_solve(&mut self) {
        self.total_score += WIN_POINTS;
        self.incorrect_tries = 0;
    }

    /// Record a wrong guess.
    ///
    /// A miss at exactly zero deducts nothing; any other score, negative
    /// included, pays the penalty. The floor test is on the score at the
    /// moment of the miss, so scores that are already negative keep sinking.
    pub fn record_miss(&mut self) -> MissOutcome {
        if self.total_score != 0 {
            self.total_score -= MISS_PENALTY;
        }
        self.incorrect_tries += 1;

        if self.incorrect_tries == MAX_TRIES {
            self.incorrect_rounds += 1;
            self.lives = self.lives.saturating_sub(1);
            self.incorrect_tries = 0;
            MissOutcome::RoundExhausted
        } else {
            MissOutcome::Retry
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
