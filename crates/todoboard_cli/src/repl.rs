//! Read loop over any line source (terminal or pipe).

use crate::command::{execute, parse_line, render_table, Command, HELP};
use std::io::{self, BufRead, Write};
use todoboard_core::TodoBoard;

/// Runs commands from `input` until EOF or `quit`.
///
/// Command errors and undecodable lines go to `err` and the loop continues.
/// Only read/write failures end the session early.
pub fn run_session(
    board: &mut TodoBoard,
    mut input: impl BufRead,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<()> {
    writeln!(out, "{}", render_table(board))?;

    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(());
        }

        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line.trim_end_matches(['\r', '\n']),
            Err(decode_err) => {
                writeln!(err, "skipping line: not valid UTF-8 ({decode_err})")?;
                continue;
            }
        };

        match parse_line(line) {
            Ok(None) => {}
            Ok(Some(Command::Quit)) => return Ok(()),
            Ok(Some(Command::Help)) => writeln!(out, "{HELP}")?,
            Ok(Some(cmd)) => match execute(board, cmd) {
                Ok(output) => writeln!(out, "{output}")?,
                Err(message) => writeln!(err, "{message}")?,
            },
            Err(message) => writeln!(err, "{message}")?,
        }
    }
}
