//! Session orchestration: fetch puzzles, run rounds, decide continuation.

use std::collections::HashSet;
use std::io;

use tracing::debug;

use crate::console::{Art, Console};
use crate::core::SessionState;
use crate::provider::ContentProvider;

use super::round::RoundEngine;

/// The full game from welcome banner to farewell.
///
/// Owns the session state, the set of already-asked titles, and the two
/// injected ports (content provider and console).
pub struct GameSession<P: ContentProvider, C: Console> {
    provider: P,
    console: C,
    state: SessionState,
    asked: HashSet<String>,
}

impl<P: ContentProvider, C: Console> GameSession<P, C> {
    #[must_use]
    pub fn new(provider: P, console: C) -> Self {
        Self {
            provider,
            console,
            state: SessionState::new(),
            asked: HashSet::new(),
        }
    }

    /// Final scores and counters for this session.
    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    /// Run the session to completion.
    ///
    /// # Errors
    /// Returns an I/O error if console input fails.
    pub fn run(&mut self) -> io::Result<()> {
        self.welcome();

        while !self.state.game_over() {
            self.console.info("\nLoading movie... 🎥");
            let (title, clue) = self.next_puzzle();

            let _outcome =
                RoundEngine::new(&title, &clue).play(&mut self.state, &mut self.console)?;

            if !self.state.game_over() && !self.should_continue()? {
                break;
            }
        }

        self.farewell();
        Ok(())
    }

    /// Fetch a fresh (title, clue) pair, skipping unusable results.
    ///
    /// Absent titles, titles already asked this session, and titles without
    /// a usable clue are all skipped with a refetch. A title is marked asked
    /// as soon as it passes deduplication, so a failed clue lookup does not
    /// bring it back later.
    fn next_puzzle(&mut self) -> (String, String) {
        loop {
            let Some(title) = self.provider.fetch_random_title() else {
                debug!("catalog yielded nothing, refetching");
                continue;
            };

            if self.asked.contains(&title) {
                debug!("'{title}' already asked this session, refetching");
                continue;
            }
            self.asked.insert(title.clone());

            let Some(clue) = self.provider.fetch_clue(&title) else {
                self.console.info(&format!(
                    "Couldn't retrieve the summary for {title}. Skipping to the next movie."
                ));
                continue;
            };

            return (title, clue);
        }
    }

    /// Ask the player whether to keep going.
    ///
    /// Only an explicit "no" ends the session; any other answer plays on.
    fn should_continue(&mut self) -> io::Result<bool> {
        let answer = self
            .console
            .prompt("Do you want to play another round? (yes/no) 😊🍀:")?
            .to_lowercase();

        if answer == "no" {
            return Ok(false);
        }
        if answer == "yes" {
            self.console.info("Loading new movie. Please wait... 🎬");
        }
        Ok(true)
    }

    fn welcome(&mut self) {
        let stars = "★".repeat(3);
        self.console
            .success(&format!("{stars} WELCOME TO WikiFlicks! 😊🎬 {stars}"));
        self.console.info(
            "★ The game for Cinephiles who can name the movie from a single Wikipedia clue! 📽️ ★",
        );
        self.console.info(
            "You will be given a snippet from a movie, and you should write the movie's title. 📝",
        );
        self.console.info("If you're right, you'll earn 10 points!");
        self.console
            .info("Every wrong answer costs you 5 points. Be careful!");
    }

    fn farewell(&mut self) {
        if self.state.total_score() == 0 {
            self.console.failure("Game over! Better luck next time. 😢");
            self.console.show(Art::Lose);
        } else {
            self.console.info("Thanks for playing! 🎉");
            self.console.info(&format!(
                "You scored {} points. 🏆",
                self.state.total_score()
            ));
            self.console.info("Take care!");
        }
    }
}
