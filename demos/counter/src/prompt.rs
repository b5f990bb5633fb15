//! Retry-until-valid integer prompts.

use std::io::{BufRead, Write};

use anyhow::{Result, bail};

/// Reads integers from a line-based input, re-asking until the answer is an
/// integer no smaller than the requested minimum.
pub struct Prompter<R, W, E> {
    input:  R,
    output: W,
    errors: E,
}

impl<R: BufRead, W: Write, E: Write> Prompter<R, W, E> {
    pub fn new(input: R, output: W, errors: E) -> Self {
        Self { input, output, errors }
    }

    #[cfg(test)]
    pub fn into_streams(self) -> (W, E) {
        (self.output, self.errors)
    }

    /// Ask `question` until the reply parses as an integer `>= min`.
    ///
    /// `too_small` is shown when the reply is an integer below `min`.  Fails
    /// only when the input ends or cannot be read.
    pub fn ask(&mut self, question: &str, min: u64, too_small: &str) -> Result<u64> {
        let mut line = String::new();
        loop {
            write!(self.output, "{question}")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                bail!("input ended while waiting for: {}", question.trim_end());
            }

            // Only the first token counts; trailing words on the line are ignored.
            let token = line.split_whitespace().next().unwrap_or("");
            match token.parse::<i64>() {
                Ok(n) if n >= 0 && n as u64 >= min => return Ok(n as u64),
                Ok(_) => writeln!(self.errors, "{too_small}")?,
                Err(_) => writeln!(self.errors, "Please enter an integer.")?,
            }
        }
    }
}
