//! line-oriented prompting over any reader/writer pair.
use std::io::{BufRead, Write};

use bikeshare_core::BikeshareError;

/// answer to a yes/no prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    /// "yes" or anything starting with `y` is yes, "no" or anything starting
    /// with `n` is no. case is ignored.
    pub fn parse(input: &str) -> Option<YesNo> {
        let normalized = input.trim().to_lowercase();
        if normalized.starts_with('y') {
            Some(YesNo::Yes)
        } else if normalized.starts_with('n') {
            Some(YesNo::No)
        } else {
            None
        }
    }
}

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// writes one line of output.
    pub fn print(&mut self, text: impl std::fmt::Display) -> Result<(), BikeshareError> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// prints the prompt and reads one line, without its line ending. bytes
    /// that are not valid UTF-8 are replaced, not treated as an error.
    pub fn ask(&mut self, prompt: &str) -> Result<String, BikeshareError> {
        writeln!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = vec![];
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Err(BikeshareError::InputClosed);
        }
        let line = String::from_utf8_lossy(&line);
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// repeats the prompt until `parse` accepts the answer.
    ///
    /// # Arguments
    ///
    /// * `prompt` - text shown before each attempt
    /// * `invalid_message` - printed after a rejected answer, if any
    /// * `parse` - returns `Some` for an accepted answer
    pub fn prompt_until<T>(
        &mut self,
        prompt: &str,
        invalid_message: Option<&str>,
        parse: impl Fn(&str) -> Option<T>,
    ) -> Result<T, BikeshareError> {
        loop {
            let answer = self.ask(prompt)?;
            if let Some(value) = parse(&answer) {
                return Ok(value);
            }
            log::debug!("rejected answer '{answer}'");
            if let Some(msg) = invalid_message {
                self.print(msg)?;
            }
        }
    }

    pub fn output(&self) -> &W {
        &self.output
    }
}
