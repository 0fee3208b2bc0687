//! Line-oriented console used by the interactive session.
//!
//! Generic over the reader and writer so a whole session can be driven from
//! an in-memory buffer.

use crate::errors::{AppError, AppResult};
use crate::ui::messages;
use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `prompt` and read one trimmed line.
    /// End of input is reported as [`AppError::InputClosed`].
    pub fn ask(&mut self, prompt: &str) -> AppResult<String> {
        write!(self.output, "{} ", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(AppError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    /// True only for "yes", in any case.
    pub fn confirm(&mut self, prompt: &str) -> AppResult<bool> {
        let answer = self.ask(prompt)?;
        Ok(answer.eq_ignore_ascii_case("yes"))
    }

    /// Ask until `parse` accepts the answer, printing `invalid` after each rejection.
    pub fn choose<T>(
        &mut self,
        prompt: &str,
        invalid: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> AppResult<T> {
        loop {
            let answer = self.ask(prompt)?;
            match parse(&answer) {
                Some(value) => return Ok(value),
                None => {
                    tracing::debug!(answer = %answer, "rejected input");
                    messages::warning(&mut self.output, invalid)?;
                }
            }
        }
    }
}
