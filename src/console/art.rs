//! ASCII assets shown at the big moments

/// Named art assets keyed by game moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Art {
    Win,
    Retry,
    Lose,
}

pub const WIN: &str = r"
  ╔══════════════════════════════╗
  ║   ★ ★ ★  NAILED IT!  ★ ★ ★   ║
  ║        🎬  🍿  🎬  🍿        ║
  ╚══════════════════════════════╝";

pub const RETRY: &str = r"
  ┌──────────────────────────────┐
  │   🎬  CUT! ... TAKE TWO  🎬  │
  └──────────────────────────────┘";

pub const LOSE: &str = r"
  ╔══════════════════════════════╗
  ║         T H E   E N D        ║
  ║      (better luck soon)      ║
  ╚══════════════════════════════╝";

impl Art {
    /// The ASCII block for this asset.
    #[must_use]
    pub const fn block(self) -> &'static str {
        match self {
            Self::Win => WIN,
            Self::Retry => RETRY,
            Self::Lose => LOSE,
        }
    }
}
