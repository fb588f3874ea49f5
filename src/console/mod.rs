//! Terminal input/output port
//!
//! The game talks to the player through the [`Console`] trait so the round
//! and session loops can be driven by a scripted double in tests, without a
//! real terminal. [`Terminal`] is the stdin/stdout implementation.

mod art;

pub use art::Art;

use colored::Colorize;
use std::io::{self, Write};

/// Line-oriented presentation and input channel.
///
/// Output methods carry a styling category (success, failure, info); the
/// prompt method styles its text and blocks for one line of input. Art
/// display is best-effort: implementations swallow display failures.
pub trait Console {
    /// Print a success line (green).
    fn success(&mut self, line: &str);

    /// Print a failure line (red).
    fn failure(&mut self, line: &str);

    /// Print an informational line (cyan).
    fn info(&mut self, line: &str);

    /// Print a styled prompt and read one trimmed line of input.
    ///
    /// # Errors
    /// Returns an I/O error if stdout cannot be flushed or stdin read fails.
    fn prompt(&mut self, text: &str) -> io::Result<String>;

    /// Show a named art asset. Failures are silently ignored.
    fn show(&mut self, art: Art);
}

/// Real terminal backed by stdin/stdout.
pub struct Terminal;

impl Terminal {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for Terminal {
    fn success(&mut self, line: &str) {
        println!("{}", line.green());
    }

    fn failure(&mut self, line: &str) {
        println!("{}", line.red());
    }

    fn info(&mut self, line: &str) {
        println!("{}", line.cyan());
    }

    fn prompt(&mut self, text: &str) -> io::Result<String> {
        print!("{} ", text.bright_yellow());
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        Ok(input.trim().to_string())
    }

    fn show(&mut self, art: Art) {
        let block = art.block();
        match art {
            Art::Win => println!("{}", block.green()),
            Art::Retry => println!("{}", block.yellow()),
            Art::Lose => println!("{}", block.red()),
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Scripted console for driving the game loops in tests.

    use super::{Art, Console};
    use std::collections::VecDeque;
    use std::io;

    /// Console double that serves queued answers and records everything.
    #[derive(Default)]
    pub struct ScriptedConsole {
        answers: VecDeque<String>,
        pub lines: Vec<String>,
        pub prompts: Vec<String>,
        pub shown: Vec<Art>,
    }

    impl ScriptedConsole {
        pub fn with_answers(answers: &[&str]) -> Self {
            Self {
                answers: answers.iter().map(|s| (*s).to_string()).collect(),
                ..Self::default()
            }
        }

        /// True if some recorded output line contains `needle`.
        pub fn printed(&self, needle: &str) -> bool {
            self.lines.iter().any(|line| line.contains(needle))
        }
    }

    impl Console for ScriptedConsole {
        fn success(&mut self, line: &str) {
            self.lines.push(line.to_string());
        }

        fn failure(&mut self, line: &str) {
            self.lines.push(line.to_string());
        }

        fn info(&mut self, line: &str) {
            self.lines.push(line.to_string());
        }

        fn prompt(&mut self, text: &str) -> io::Result<String> {
            self.prompts.push(text.to_string());
            self.answers
                .pop_front()
                .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
        }

        fn show(&mut self, art: Art) {
            self.shown.push(art);
        }
    }

    #[test]
    fn scripted_console_serves_answers_in_order() {
        let mut console = ScriptedConsole::with_answers(&["first", "second"]);
        assert_eq!(console.prompt("q1").unwrap(), "first");
        assert_eq!(console.prompt("q2").unwrap(), "second");
        assert!(console.prompt("q3").is_err());
    }
}
