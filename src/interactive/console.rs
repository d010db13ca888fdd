//! Line-oriented console over injectable input, output, and error streams.
//!
//! The real program wires a [`Console`] to locked stdin/stdout/stderr; tests
//! feed a byte slice as input and capture both output streams in `Vec<u8>`.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};

/// Console used by the interactive session.
#[derive(Debug)]
pub struct Console<R, W, E> {
    input: R,
    output: W,
    error: E,
}

impl<R: BufRead, W: Write, E: Write> Console<R, W, E> {
    /// Create a console over the given streams.
    pub fn new(input: R, output: W, error: E) -> Self {
        Self {
            input,
            output,
            error,
        }
    }

    /// Print `question` without a newline and read one line of answer.
    ///
    /// The trailing line terminator is stripped. End of input reads as an
    /// empty answer.
    ///
    /// # Errors
    ///
    /// Fails if the prompt cannot be written or the input cannot be read.
    pub fn prompt(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{question}").context("Failed to write prompt")?;
        self.output.flush().context("Failed to flush prompt")?;

        let mut answer = String::new();
        let read = self
            .input
            .read_line(&mut answer)
            .context("Failed to read answer to prompt")?;
        if read == 0 {
            log::debug!("End of input while waiting for: {}", question.trim_end());
        }

        let trimmed_len = answer.trim_end_matches(['\r', '\n']).len();
        answer.truncate(trimmed_len);
        Ok(answer)
    }

    /// Write one line to the output stream.
    ///
    /// # Errors
    ///
    /// Fails if the output stream cannot be written.
    pub fn say(&mut self, line: impl Display) -> Result<()> {
        writeln!(self.output, "{line}").context("Failed to write to output")
    }

    /// Write one line to the error stream.
    ///
    /// # Errors
    ///
    /// Fails if the error stream cannot be written.
    pub fn warn(&mut self, line: impl Display) -> Result<()> {
        writeln!(self.error, "{line}").context("Failed to write to error output")
    }

    /// Flush both output streams.
    ///
    /// # Errors
    ///
    /// Fails if either stream cannot be flushed.
    pub fn flush(&mut self) -> io::Result<()> {
        self.output.flush()?;
        self.error.flush()
    }

    /// Take the streams back.
    pub fn into_parts(self) -> (R, W, E) {
        (self.input, self.output, self.error)
    }
}
