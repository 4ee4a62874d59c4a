//! Plain line-oriented prompt.

use std::cell::RefCell;
use std::io::{self, BufRead, BufReader, Stdin, Stderr, Write};

use kochanowski_core::{
    application::{ApplicationError, ports::NamePrompt},
    domain::{NamePolicy, ProjectName},
    error::ScaffoldResult,
};
use tracing::debug;

/// Asks for a project name over any reader/writer pair, re-asking until the
/// answer is valid.
///
/// Used when stdin is not a terminal (piped input, CI) and in tests.
pub struct LinePrompt<R, W> {
    reader: RefCell<R>,
    writer: RefCell<W>,
}

impl LinePrompt<BufReader<Stdin>, Stderr> {
    /// Read from stdin, write the question to stderr.
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stderr())
    }
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader: RefCell::new(reader),
            writer: RefCell::new(writer),
        }
    }

    /// Give back the writer, e.g. to inspect what was shown.
    pub fn into_writer(self) -> W {
        self.writer.into_inner()
    }

    fn read_answer(&self, question: &str) -> io::Result<Option<String>> {
        let mut writer = self.writer.borrow_mut();
        write!(writer, "? {question} ")?;
        writer.flush()?;

        let mut line = String::new();
        if self.reader.borrow_mut().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

impl<R: BufRead, W: Write> NamePrompt for LinePrompt<R, W> {
    fn ask(&self, question: &str, policy: NamePolicy) -> ScaffoldResult<ProjectName> {
        loop {
            let answer = self
                .read_answer(question)
                .map_err(|e| ApplicationError::PromptFailed {
                    reason: e.to_string(),
                })?
                .ok_or_else(|| ApplicationError::PromptFailed {
                    reason: "input ended before a project name was given".into(),
                })?;

            match ProjectName::parse_with(&answer, policy) {
                Ok(name) => return Ok(name),
                Err(rejection) => {
                    debug!(%rejection, "Project name rejected, asking again");
                    writeln!(self.writer.borrow_mut(), ">> {rejection}").map_err(|e| {
                        ApplicationError::PromptFailed {
                            reason: e.to_string(),
                        }
                    })?;
                }
            }
        }
    }
}
