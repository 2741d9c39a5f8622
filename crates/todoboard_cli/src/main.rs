//! Terminal front end for the to-do board.
//!
//! # Responsibility
//! - Act as a line-oriented view layer over `todoboard_core`.
//! - Read commands from stdin (interactive or piped) until EOF or `quit`.

mod command;
mod repl;

use clap::Parser;
use std::io;
use std::process;
use todoboard_core::{default_log_level, init_logging, TodoBoard};

/// In-memory to-do board driven from stdin.
#[derive(Debug, Parser)]
#[command(name = "todoboard", version)]
struct Cli {
    /// Absolute directory for rolling log files. Logging is off when unset.
    #[arg(long, env = "TODOBOARD_LOG_DIR")]
    log_dir: Option<String>,

    /// trace|debug|info|warn|error
    #[arg(long, env = "TODOBOARD_LOG_LEVEL")]
    log_level: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        if let Err(err) = init_logging(level, log_dir) {
            eprintln!("{err}");
            process::exit(1);
        }
    }

    let mut board = TodoBoard::new();
    let result = repl::run_session(
        &mut board,
        io::stdin().lock(),
        &mut io::stdout(),
        &mut io::stderr(),
    );
    if let Err(err) = result {
        eprintln!("session ended: {err}");
        process::exit(1);
    }
}
