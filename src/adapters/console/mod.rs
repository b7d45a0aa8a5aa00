//! Console input adapter

use std::io::{self, BufRead, Write};

use crate::error::{EpmuxError, EpmuxResult};

/// Write `prompt` without a newline, then read one line into `input`.
///
/// The trailing line ending is stripped. When the reader is already at end of
/// input, `input` is left unchanged and no error is returned.
pub fn read_line_into<R, W>(
    reader: &mut R,
    writer: &mut W,
    prompt: &str,
    input: &mut String,
) -> EpmuxResult<()>
where
    R: BufRead,
    W: Write,
{
    if let Some(line) = prompt_line(reader, writer, prompt)? {
        *input = line;
    }
    Ok(())
}

/// Prompt and read one line; `None` at end of input
fn prompt_line<R, W>(reader: &mut R, writer: &mut W, prompt: &str) -> EpmuxResult<Option<String>>
where
    R: BufRead,
    W: Write,
{
    write!(writer, "{}", prompt)
        .and_then(|_| writer.flush())
        .map_err(|source| EpmuxError::InputFailed { source })?;

    let mut line = String::new();
    let read = reader
        .read_line(&mut line)
        .map_err(|source| EpmuxError::InputFailed { source })?;
    if read == 0 {
        return Ok(None);
    }

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(Some(line))
}

/// Interactive prompts over stdin/stdout
#[derive(Debug, Default)]
pub struct Console;

impl Console {
    pub fn new() -> Self {
        Self
    }

    /// Prompt on stdout and read one line from stdin into `input`
    pub fn read_line(&self, prompt: &str, input: &mut String) -> EpmuxResult<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        read_line_into(&mut stdin.lock(), &mut stdout.lock(), prompt, input)
    }

    /// Prompt repeatedly until the answer parses as `T`.
    ///
    /// End of input without an answer is reported as an input failure so a
    /// closed stdin cannot loop forever.
    pub fn read_parsed<T>(&self, prompt: &str) -> EpmuxResult<T>
    where
        T: std::str::FromStr,
        T::Err: std::fmt::Display,
    {
        let stdin = io::stdin();
        let stdout = io::stdout();
        read_parsed_from(&mut stdin.lock(), &mut stdout.lock(), prompt)
    }
}

/// Loop behind [`Console::read_parsed`]
pub fn read_parsed_from<R, W, T>(reader: &mut R, writer: &mut W, prompt: &str) -> EpmuxResult<T>
where
    R: BufRead,
    W: Write,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    loop {
        let Some(answer) = prompt_line(reader, writer, prompt)? else {
            return Err(EpmuxError::InputFailed {
                source: io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"),
            });
        };

        match answer.trim().parse::<T>() {
            Ok(value) => return Ok(value),
            Err(e) => {
                writeln!(writer, "Invalid value '{}': {}", answer.trim(), e)
                    .map_err(|source| EpmuxError::InputFailed { source })?;
            }
        }
    }
}
