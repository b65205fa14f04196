use crate::command::Command;
use crate::retracer::{ActionLog, ReturnStep};
use clap::ValueEnum;
use log::{debug, info};
use std::io::{self, BufRead, Write};

pub const BANNER: &str = "GPS Retracer CLI
Commands:
LOG <FWD distance | LEFT | RIGHT>
CALCULATE_RETURN
Type EXIT to quit
";

pub const NO_ACTIONS: &str = "No actions logged.";

/// How return paths are written out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One `<n>. <action>` line per step
    #[default]
    Text,
    /// A single JSON array of `{"step", "action"}` objects
    Json,
}

#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub banner: bool,
    /// Written before each line is read, `None` for no prompt
    pub prompt: Option<String>,
    pub format: OutputFormat,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            banner: true,
            prompt: Some("> ".to_string()),
            format: OutputFormat::Text,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Exit,
    EndOfInput,
}

///
/// An interactive session. Owns the only action log; commands are read one
/// line at a time and answered on the output until `EXIT` or end of input.
///
pub struct Session {
    config: SessionConfig,
    log: ActionLog,
}

impl Session {
    pub fn new(config: SessionConfig) -> Session {
        Session {
            config,
            log: ActionLog::new(),
        }
    }

    pub fn action_log(&self) -> &ActionLog {
        &self.log
    }

    pub fn run<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        mut output: W,
    ) -> io::Result<SessionEnd> {
        if self.config.banner {
            writeln!(output, "{}", BANNER)?;
        }
        let mut line = String::new();
        loop {
            if let Some(prompt) = &self.config.prompt {
                write!(output, "{}", prompt)?;
                output.flush()?;
            }
            line.clear();
            if input.read_line(&mut line)? == 0 {
                info!("End of input, leaving session");
                return Ok(SessionEnd::EndOfInput);
            }
            match Command::parse(&line) {
                Ok(Command::Exit) => {
                    info!("Exit requested, {} actions left unretraced", self.log.len());
                    return Ok(SessionEnd::Exit);
                }
                Ok(command) => self.dispatch(command, &mut output)?,
                Err(err) => {
                    debug!("Rejected input {:?}: {}", line.trim_end(), err);
                    writeln!(output, "{}", err)?;
                }
            }
        }
    }

    fn dispatch<W: Write>(&mut self, command: Command, output: &mut W) -> io::Result<()> {
        match command {
            Command::Log(action) => self.log.log(action),
            Command::CalculateReturn => {
                let steps = self.log.retrace();
                self.write_steps(&steps, output)?;
            }
            Command::Help => writeln!(output, "{}", BANNER)?,
            Command::Exit => unreachable!(),
        }
        Ok(())
    }

    fn write_steps<W: Write>(&self, steps: &[ReturnStep], output: &mut W) -> io::Result<()> {
        match self.config.format {
            OutputFormat::Text if steps.is_empty() => writeln!(output, "{}", NO_ACTIONS),
            OutputFormat::Text => steps
                .iter()
                .try_for_each(|step| writeln!(output, "{}", step)),
            OutputFormat::Json => {
                serde_json::to_writer(&mut *output, steps)?;
                writeln!(output)
            }
        }
    }
}
