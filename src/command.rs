use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Record an action, already upper-cased
    Log(String),
    CalculateReturn,
    Help,
    Exit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// `LOG` with nothing after it
    InvalidLog,
    Unknown,
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::InvalidLog => write!(f, "Invalid LOG command"),
            CommandError::Unknown => write!(f, "Unknown command"),
        }
    }
}

impl std::error::Error for CommandError {}

impl Command {
    ///
    /// Parses one line of input. Matching is case-insensitive: the line is
    /// trimmed and upper-cased before anything else, and the action text of a
    /// `LOG` keeps that upper-cased form.
    ///
    pub fn parse(line: &str) -> Result<Command, CommandError> {
        let line = line.trim().to_uppercase();
        let (keyword, rest) = match line.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim_start()),
            None => (line.as_str(), ""),
        };
        match (keyword, rest.is_empty()) {
            ("LOG", false) => Ok(Command::Log(rest.to_string())),
            ("LOG", true) => Err(CommandError::InvalidLog),
            ("CALCULATE_RETURN", true) => Ok(Command::CalculateReturn),
            ("HELP", true) => Ok(Command::Help),
            ("EXIT", true) => Ok(Command::Exit),
            _ => Err(CommandError::Unknown),
        }
    }
}
