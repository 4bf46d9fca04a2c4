//! Line-oriented prompter over any reader/writer pair.

use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};
use std::sync::Mutex;

use kitgen_core::{
    application::{ApplicationError, ports::Prompter},
    error::KitResult,
};

/// Writes each question, then reads one line as the answer.
///
/// End of input is treated as an empty answer so piped runs fall through
/// to the defaults instead of failing.
pub struct LinePrompter<R, W> {
    io: Mutex<(R, W)>,
}

impl LinePrompter<BufReader<Stdin>, Stdout> {
    /// Prompt on stdout, read from stdin.
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            io: Mutex::new((reader, writer)),
        }
    }

    /// Give back the reader and writer.
    pub fn into_inner(self) -> (R, W) {
        self.io.into_inner().unwrap_or_else(|e| e.into_inner())
    }
}

fn prompt_error(question: &str, e: io::Error) -> ApplicationError {
    ApplicationError::PromptFailed {
        question: question.to_string(),
        reason: e.to_string(),
    }
}

impl<R, W> Prompter for LinePrompter<R, W>
where
    R: BufRead + Send,
    W: Write + Send,
{
    fn note(&self, lines: &[String]) -> KitResult<()> {
        let mut guard = self.io.lock().unwrap_or_else(|e| e.into_inner());
        let (_, writer) = &mut *guard;
        for line in lines {
            writeln!(writer, "{line}").map_err(|e| prompt_error(line, e))?;
        }
        Ok(())
    }

    fn ask(&self, question: &str) -> KitResult<String> {
        let mut guard = self.io.lock().unwrap_or_else(|e| e.into_inner());
        let (reader, writer) = &mut *guard;

        write!(writer, "? {question}: ")
            .and_then(|()| writer.flush())
            .map_err(|e| prompt_error(question, e))?;

        let mut answer = String::new();
        reader
            .read_line(&mut answer)
            .map_err(|e| prompt_error(question, e))?;

        Ok(answer.trim_end_matches(['\r', '\n']).to_string())
    }
}
