//! Logs movement actions and prints the path back to where they started
use clap::Parser;
use env_logger::fmt::Formatter;
use log::Record;
use retrace_rs::session::{OutputFormat, Session, SessionConfig, SessionEnd};
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Read commands from this file instead of stdin
    #[arg(short, long)]
    script: Option<PathBuf>,

    /// Output format for return paths
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Don't print the command summary on start
    #[arg(long)]
    no_banner: bool,

    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

fn run(args: &Args) -> io::Result<SessionEnd> {
    let config = SessionConfig {
        banner: !args.no_banner,
        // Scripts don't need prompting
        prompt: match args.script {
            Some(_) => None,
            None => Some("> ".to_string()),
        },
        format: args.format,
    };
    let mut session = Session::new(config);
    let stdout = io::stdout();
    match &args.script {
        Some(path) => {
            log::info!("Reading commands from {}", path.display());
            let file = File::open(path)?;
            session.run(BufReader::new(file), stdout.lock())
        }
        None => session.run(io::stdin().lock(), stdout.lock()),
    }
}

fn main() {
    let args = Args::parse();
    env_logger::Builder::new()
        .format(|buf: &mut Formatter, record: &Record| {
            let timestamp = buf.timestamp_millis();
            writeln!(
                buf,
                "[{}] [{}] - {}",
                timestamp,
                record.level(),
                record.args()
            )
        })
        .filter_level(args.verbose.log_level_filter())
        .init();

    match run(&args) {
        Ok(end) => log::debug!("Session ended: {:?}", end),
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    }
}
