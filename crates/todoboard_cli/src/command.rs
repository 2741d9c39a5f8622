//! Line command parsing and execution.
//!
//! Lines are split with shell quoting rules, so names with spaces are
//! written as `add "Mary Ann" 31`.

use todoboard_core::{core_version, ping, DispatchOutcome, Draft, RecordId, TodoBoard};

pub const HELP: &str = "\
commands:
  list                      show the table
  panel                     show the side panel
  add <name> <age>          add a record
  edit <id> <name> <age>    replace name and age
  remove|rm <id>            delete a record
  toggle <id>               flip complete
  reset                     restore the seed records
  ping | version | help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Panel,
    Add { name: String, age: String },
    Edit { id: RecordId, name: String, age: String },
    Remove { id: RecordId },
    Toggle { id: RecordId },
    Reset,
    Ping,
    Version,
    Help,
    Quit,
}

/// Parses one input line. Blank lines yield `Ok(None)`.
pub fn parse_line(line: &str) -> Result<Option<Command>, String> {
    let words = shlex::split(line).ok_or_else(|| "unbalanced quotes".to_string())?;
    let Some((head, args)) = words.split_first() else {
        return Ok(None);
    };

    let command = match (head.as_str(), args) {
        ("list" | "ls", []) => Command::List,
        ("panel" | "info", []) => Command::Panel,
        ("add", [name, age]) => Command::Add {
            name: name.clone(),
            age: age.clone(),
        },
        ("edit", [id, name, age]) => Command::Edit {
            id: parse_id(id)?,
            name: name.clone(),
            age: age.clone(),
        },
        ("remove" | "rm" | "delete", [id]) => Command::Remove { id: parse_id(id)? },
        ("toggle" | "complete", [id]) => Command::Toggle { id: parse_id(id)? },
        ("reset", []) => Command::Reset,
        ("ping", []) => Command::Ping,
        ("version", []) => Command::Version,
        ("help", _) => Command::Help,
        ("quit" | "exit", []) => Command::Quit,
        (other, _) => return Err(format!("unknown or malformed command `{other}`; try `help`")),
    };
    Ok(Some(command))
}

fn parse_id(raw: &str) -> Result<RecordId, String> {
    raw.parse::<RecordId>()
        .map_err(|_| format!("invalid record id `{raw}`"))
}

/// Runs one command and returns the text to print.
pub fn execute(board: &mut TodoBoard, command: Command) -> Result<String, String> {
    let outcome = match command {
        Command::List => return Ok(render_table(board)),
        Command::Panel => return Ok(render_panel(board)),
        Command::Reset => {
            board.reset();
            return Ok(render_table(board));
        }
        Command::Ping => return Ok(ping().to_string()),
        Command::Version => return Ok(core_version().to_string()),
        Command::Help => return Ok(HELP.to_string()),
        Command::Quit => return Ok(String::new()),
        Command::Add { name, age } => board
            .submit_add(Draft::new(name, age))
            .map_err(|err| err.to_string())?,
        Command::Edit { id, name, age } => board
            .submit_edit(id, Draft::new(name, age))
            .map_err(|err| err.to_string())?,
        Command::Remove { id } => board.remove(id),
        Command::Toggle { id } => board.toggle_complete(id),
    };

    if let DispatchOutcome::NoMatch(id) = outcome {
        return Ok(format!("no record with id {id}"));
    }
    Ok(render_table(board))
}

pub fn render_table(board: &TodoBoard) -> String {
    let rows = board.table_rows();
    let name_width = rows
        .iter()
        .map(|row| row.name.chars().count())
        .chain(std::iter::once("Name".len()))
        .max()
        .unwrap_or(0);

    let mut out = format!(
        "{:>4}  {:<name_width$}  {:>5}  {}",
        "ID", "Name", "Age", "Complete"
    );
    for row in rows {
        out.push_str(&format!(
            "\n{:>4}  {:<name_width$}  {:>5}  {}",
            row.id,
            row.name,
            row.age.to_string(),
            row.status
        ));
    }
    out
}

pub fn render_panel(board: &TodoBoard) -> String {
    board
        .panel_items()
        .into_iter()
        .map(|item| format!("{}\n  {}", item.primary, item.secondary))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::{execute, parse_line, render_panel, Command};
    use todoboard_core::TodoBoard;

    #[test]
    fn parse_line_handles_quotes_and_blank_lines() {
        assert_eq!(parse_line("   ").unwrap(), None);
        assert_eq!(
            parse_line(r#"add "Mary Ann" 31"#).unwrap(),
            Some(Command::Add {
                name: "Mary Ann".to_string(),
                age: "31".to_string()
            })
        );
        assert_eq!(
            parse_line("rm 4").unwrap(),
            Some(Command::Remove { id: 4 })
        );
    }

    #[test]
    fn parse_line_rejects_bad_ids_and_arity() {
        assert!(parse_line("toggle four").unwrap_err().contains("invalid record id"));
        assert!(parse_line("add Tom").is_err());
        assert!(parse_line("add \"Tom 9").unwrap_err().contains("quotes"));
    }

    #[test]
    fn execute_add_then_edit_updates_table() {
        let mut board = TodoBoard::new();

        let table = execute(
            &mut board,
            Command::Add {
                name: "Tom".to_string(),
                age: "9".to_string(),
            },
        )
        .unwrap();
        assert!(table.contains("Tom"));

        execute(
            &mut board,
            Command::Edit {
                id: 6,
                name: "Tommy".to_string(),
                age: "10".to_string(),
            },
        )
        .unwrap();
        assert_eq!(board.records()[3].name, "Tommy");
    }

    #[test]
    fn execute_rejects_blank_draft() {
        let mut board = TodoBoard::new();
        let err = execute(
            &mut board,
            Command::Add {
                name: " ".to_string(),
                age: "9".to_string(),
            },
        )
        .unwrap_err();
        assert_eq!(err, "name must not be blank");
        assert_eq!(board.records().len(), 3);
    }

    #[test]
    fn execute_reports_missing_id() {
        let mut board = TodoBoard::new();
        let output = execute(&mut board, Command::Toggle { id: 99 }).unwrap();
        assert_eq!(output, "no record with id 99");
    }

    #[test]
    fn execute_quit_prints_nothing() {
        let mut board = TodoBoard::new();
        assert_eq!(execute(&mut board, Command::Quit).unwrap(), "");
        assert_eq!(board.records().len(), 3);
    }

    #[test]
    fn panel_lists_name_and_status_lines() {
        let board = TodoBoard::new();
        let panel = render_panel(&board);
        assert!(panel.starts_with("Name: Ali\n  Status: active, Age: 12"));
    }
}
