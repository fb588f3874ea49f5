//! One guessing round for a single movie.
//!
//! The round loops prompt -> evaluate until the guess clears the solve
//! threshold or the try budget is spent. Scoring effects go through
//! [`SessionState`]; everything the player sees goes through the console
//! port.

use std::io;

use crate::console::{Art, Console};
use crate::core::{MissOutcome, SOLVE_THRESHOLD, SessionState, WIN_POINTS, similarity};

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// A guess cleared the solve threshold.
    Solved,
    /// Three wrong guesses; the title was revealed.
    Exhausted,
}

/// Drives the guessing loop for one movie.
pub struct RoundEngine<'a> {
    title: &'a str,
    clue: &'a str,
}

impl<'a> RoundEngine<'a> {
    #[must_use]
    pub const fn new(title: &'a str, clue: &'a str) -> Self {
        Self { title, clue }
    }

    /// Play the round to a terminal state.
    ///
    /// # Errors
    /// Returns an I/O error if reading a guess from the console fails.
    pub fn play<C: Console>(
        &self,
        state: &mut SessionState,
        console: &mut C,
    ) -> io::Result<RoundOutcome> {
        console.info(&format!("You have {} lives left:", state.lives()));

        loop {
            console.info("Can you guess the flick? 🤔");
            console.info(self.clue);

            let guess = console.prompt("What is your guess?")?;
            let score = similarity(&guess.to_lowercase(), &self.title.to_lowercase());

            if score >= SOLVE_THRESHOLD {
                state.record_solve();
                console.success(&format!(
                    "Congrats! 🎉 You've earned {WIN_POINTS} points. Total score: {} 😎",
                    state.total_score()
                ));
                console.success(&format!("You gave the correct answer: {}", self.title));
                console.show(Art::Win);
                return Ok(RoundOutcome::Solved);
            }

            let outcome = state.record_miss();
            console.failure("Not quite... Try again! 😞");
            console.failure(&format!("Total score: {} 📝", state.total_score()));
            console.show(Art::Retry);

            if outcome == MissOutcome::RoundExhausted {
                console.failure(&format!(
                    "Sorry, the correct answer was: {} 😞",
                    self.title
                ));
                return Ok(RoundOutcome::Exhausted);
            }
        }
    }
}
