//! WikiFlicks
//!
//! Terminal trivia game: guess the movie from a truncated encyclopedia plot
//! clue. Correct guesses (fuzzy-matched at a 0.85 similarity threshold) earn
//! 10 points; wrong answers cost 5, with three tries per movie and three
//! failed rounds ending the session.
//!
//! # Quick Start
//!
//! ```rust
//! use wikiflicks::core::{SessionState, similarity};
//!
//! let score = similarity("inception", "inception");
//! assert_eq!(score, 1.0);
//!
//! let mut state = SessionState::new();
//! state.record_solve();
//! assert_eq!(state.total_score(), 10);
//! ```

// Core domain types
pub mod core;

// Movie catalog and encyclopedia providers
pub mod provider;

// Terminal input/output port
pub mod console;

// Round and session loops
pub mod game;
