//! # Terminal Input Helper
//!
//! Blocking, single-threaded console prompting. A [`Terminal`] owns one input
//! handle and one output handle for its whole life; every prompt writes its
//! message without a trailing newline, reads one line and repeats until the
//! line passes the requested [`Sanitize`] filters.
//!
//! Rejections are recovered locally: the filter's message is printed on its
//! own line and the prompt is shown again. Only console failures leave the
//! loop, as a [`PromptError`].
//!
//! ## Example
//! ```rust,no_run
//! use fieldkit_core::utils::Terminal;
//!
//! let mut term = Terminal::stdio();
//! let age = term.prompt_double("Enter age: ", &[0.0, 130.0]).unwrap();
//! if term.prompt_yes_no("Save? (Y/N): ").unwrap() {
//!     println!("Saved age {age}");
//! }
//! ```
//!
//! Tests and hosts can drive the same loop from any [`BufRead`]:
//! ```rust
//! use std::io::Cursor;
//! use fieldkit_core::utils::{Sanitize, FieldKind, Terminal};
//!
//! let mut out = Vec::new();
//! let mut term = Terminal::new(Cursor::new("12345\n0123456789\n"), &mut out);
//! let phone = term
//!     .ask("Phone: ", false, &[Sanitize::Field(FieldKind::Phone)])
//!     .unwrap();
//! assert_eq!(phone, "0123456789");
//! ```

use crate::utils::sanitize::{Sanitize, parse_number};
use log::{debug, warn};
use std::{
    fmt::Display,
    io::{self, BufRead, Write},
};
use thiserror::Error;

/// Result type for console prompts.
pub type PromptResult<T> = Result<T, PromptError>;

/// Console failures that end a prompt loop.
#[derive(Debug, Error)]
pub enum PromptError {
    /// The prompt or a status message could not be written.
    #[error("Couldn't write to the console: {0}")]
    Output(#[from] io::Error),

    /// The input stream stayed exhausted for the configured number of reads.
    #[error("Input closed after {attempts} attempts")]
    InputClosed { attempts: u32 },
}

/// Prompt loop behavior.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct PromptConfig {
    /// Consecutive exhausted or unreadable reads tolerated before
    /// [`PromptError::InputClosed`]. `None` retries forever.
    #[cfg_attr(feature = "serde", serde(default))]
    pub eof_retry_limit: Option<u32>,
}

/// A long-lived console handle: one reader, one writer.
pub struct Terminal<R, W> {
    input: R,
    output: W,
    config: PromptConfig,
}

impl Terminal<io::StdinLock<'static>, io::Stdout> {
    /// Terminal over the process's standard input and output.
    pub fn stdio() -> Self {
        Terminal::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Terminal {
            input,
            output,
            config: PromptConfig::default(),
        }
    }

    pub fn with_config(mut self, config: PromptConfig) -> Self {
        self.config = config;
        self
    }

    /// Prints `text` as a full line.
    pub fn say(&mut self, text: impl Display) -> PromptResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Shows `message` and reads lines until one satisfies the empty policy.
    ///
    /// An exhausted or unreadable input stream is reported as
    /// `Unsupported Input Detected` and retried; an empty line with
    /// `allow_empty == false` is reported as `Cannot Input Nothing` and retried.
    /// The returned line has its line terminator removed and is otherwise verbatim.
    pub fn prompt_line(&mut self, message: &str, allow_empty: bool) -> PromptResult<String> {
        let mut exhausted: u32 = 0;

        loop {
            write!(self.output, "{}", message)?;
            self.output.flush()?;

            match self.read_line() {
                Some(line) => {
                    exhausted = 0;
                    if allow_empty || !line.is_empty() {
                        return Ok(line);
                    }
                    self.say("Cannot Input Nothing")?;
                }
                None => {
                    exhausted += 1;
                    self.say("Unsupported Input Detected")?;
                    if self
                        .config
                        .eof_retry_limit
                        .is_some_and(|limit| exhausted >= limit)
                    {
                        return Err(PromptError::InputClosed {
                            attempts: exhausted,
                        });
                    }
                }
            }
        }
    }

    /// Prompts until the line passes every filter and returns it verbatim.
    ///
    /// With `allow_empty`, an empty line is accepted without running the filters.
    pub fn ask(
        &mut self,
        message: &str,
        allow_empty: bool,
        filters: &[Sanitize],
    ) -> PromptResult<String> {
        loop {
            let answer = self.prompt_line(message, allow_empty)?;
            if allow_empty && answer.is_empty() {
                return Ok(answer);
            }

            match Sanitize::execute(&answer, filters) {
                Ok(data) => return Ok(data),
                Err(e) => self.say(e)?,
            }
        }
    }

    /// Prompts for a floating-point number.
    ///
    /// `limits` holds either no bounds (any number) or exactly two, in any
    /// order, forming an inclusive range. Any other count is a caller error: it
    /// is logged as an invalid limit and the number is returned unchecked.
    pub fn prompt_double(&mut self, message: &str, limits: &[f64]) -> PromptResult<f64> {
        let mut filters = vec![Sanitize::IsNumber];
        match limits {
            [] => {}
            &[a, b] => {
                let (low, high) = if a > b { (b, a) } else { (a, b) };
                filters.push(Sanitize::IsBetween(low, high));
            }
            _ => warn!(
                "invalid limit: expected 0 or 2 range bounds, got {}",
                limits.len()
            ),
        }

        loop {
            let answer = self.ask(message, false, &filters)?;
            if let Ok(number) = parse_number(&answer) {
                return Ok(number);
            }
        }
    }

    /// Prompts until the answer is exactly `Y` (true) or `N` (false).
    pub fn prompt_yes_no(&mut self, message: &str) -> PromptResult<bool> {
        let options = vec!["Y".to_string(), "N".to_string()];
        let answer = self.ask(message, false, &[Sanitize::MatchStrings(options)])?;
        Ok(answer == "Y")
    }

    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => {
                if line.ends_with('\n') {
                    line.pop();
                    if line.ends_with('\r') {
                        line.pop();
                    }
                }
                Some(line)
            }
            Err(e) => {
                debug!("console read failed: {}", e);
                None
            }
        }
    }
}
