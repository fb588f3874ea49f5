//! Game loops: one round of guessing, and the session around it.

mod round;
mod session;

pub use round::{RoundEngine, RoundOutcome};
pub use session::GameSession;
