//! Line-oriented console input
//!
//! `Prompter` writes a label, reads one line and turns it into a typed value.
//! It is generic over the reader and writer so sessions can be scripted in
//! tests with in-memory buffers.
//!
//! # Error Handling
//!
//! - Blank or malformed input on a required prompt is an `InputError` that
//!   aborts the current action; the caller reports it and carries on
//! - Blank or malformed input on an optional prompt means "skip"
//! - End of input is `InputError::Closed`, which ends the session

use rust_decimal::Decimal;
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use thiserror::Error;

/// Failure to acquire a value from the console
#[derive(Debug, Error)]
pub enum InputError {
    #[error("a value is required")]
    Empty,

    #[error("'{input}' is not a valid number")]
    NotANumber { input: String },

    #[error("'{input}' must be greater than 0")]
    NonPositive { input: String },

    /// The input stream reached end of file
    #[error("input closed")]
    Closed,

    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
}

impl InputError {
    /// Whether the session can continue after reporting this error
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            InputError::Empty | InputError::NotANumber { .. } | InputError::NonPositive { .. }
        )
    }
}

/// Typed prompts over a line reader and an output writer
#[derive(Debug)]
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writer used for prompts, for callers that print between prompts
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `label`, then read one trimmed line
    fn ask(&mut self, label: &str) -> Result<String, InputError> {
        write!(self.output, "{}: ", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(InputError::Closed);
        }
        Ok(line.trim().to_string())
    }

    pub fn required_string(&mut self, label: &str) -> Result<String, InputError> {
        let line = self.ask(label)?;
        if line.is_empty() {
            return Err(InputError::Empty);
        }
        Ok(line)
    }

    /// Read an identifier (a strictly positive integer)
    pub fn required_id(&mut self, label: &str) -> Result<u32, InputError> {
        let line = self.required_string(label)?;
        let value: i64 = parse_number(&line)?;
        if value <= 0 {
            return Err(InputError::NonPositive { input: line });
        }
        u32::try_from(value).map_err(|_| InputError::NotANumber { input: line })
    }

    pub fn required_int(&mut self, label: &str) -> Result<i64, InputError> {
        let line = self.required_string(label)?;
        parse_number(&line)
    }

    pub fn required_decimal(&mut self, label: &str) -> Result<Decimal, InputError> {
        let line = self.required_string(label)?;
        parse_number(&line)
    }

    /// Read a line, `None` when left blank
    pub fn optional_string(&mut self, label: &str) -> Result<Option<String>, InputError> {
        let line = self.ask(label)?;
        Ok(Some(line).filter(|line| !line.is_empty()))
    }

    /// Read an integer, `None` when blank or unparseable
    pub fn optional_int(&mut self, label: &str) -> Result<Option<i64>, InputError> {
        Ok(self
            .optional_string(label)?
            .and_then(|line| parse_number(&line).ok()))
    }

    /// Read a decimal, `None` when blank or unparseable
    pub fn optional_decimal(&mut self, label: &str) -> Result<Option<Decimal>, InputError> {
        Ok(self
            .optional_string(label)?
            .and_then(|line| parse_number(&line).ok()))
    }

    /// Read a menu choice in `1..=max`, asking again until one is valid
    pub fn menu_choice(&mut self, max: usize) -> Result<usize, InputError> {
        loop {
            let line = self.ask("Your choice")?;
            match line.parse::<usize>() {
                Ok(choice) if (1..=max).contains(&choice) => return Ok(choice),
                _ => writeln!(self.output, "Invalid choice, try again.")?,
            }
        }
    }

    /// Ask a yes/no question; anything but `y` or `yes` means no
    pub fn confirm(&mut self, label: &str) -> Result<bool, InputError> {
        let line = self.ask(&format!("{} (y/n)", label))?;
        Ok(matches!(line.to_lowercase().as_str(), "y" | "yes"))
    }
}

fn parse_number<T: FromStr>(line: &str) -> Result<T, InputError> {
    line.parse().map_err(|_| InputError::NotANumber {
        input: line.to_string(),
    })
}
