//! Core domain types for WikiFlicks
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod similarity;
mod state;

pub use similarity::similarity;
pub use state::{
    MAX_ROUNDS, MAX_TRIES, MISS_PENALTY, MissOutcome, SOLVE_THRESHOLD, STARTING_LIVES,
    SessionState, WIN_POINTS,
};
