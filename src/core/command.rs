use crate::core::activity::{ActivityId, ActivityStatus};
use crate::core::error::CommandError;

pub const ADD_USAGE: &str = "Usage: add <description>";
pub const LIST_USAGE: &str = "Usage: list <all|todo|in-progress|done>";
pub const UPDATE_USAGE: &str = "Usage: update <id> <desc|status> <value>";
pub const DELETE_USAGE: &str = "Usage: delete <id>";

/// A line split into its keyword and the untouched rest.
#[derive(Debug, PartialEq, Eq)]
pub struct ParsedLine<'a> {
    pub command: &'a str,
    pub remainder: Option<&'a str>,
}

impl<'a> ParsedLine<'a> {
    pub fn parse(line: &'a str) -> Self {
        let line = line.trim();
        match line.split_once(char::is_whitespace) {
            Some((command, rest)) => {
                let rest = rest.trim();
                ParsedLine {
                    command,
                    remainder: (!rest.is_empty()).then_some(rest),
                }
            }
            None => ParsedLine {
                command: line,
                remainder: None,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListFilter {
    All,
    Status(ActivityStatus),
}

impl ListFilter {
    pub fn matches(&self, status: ActivityStatus) -> bool {
        match self {
            ListFilter::All => true,
            ListFilter::Status(wanted) => *wanted == status,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivityUpdate {
    SetDescription(String),
    SetStatus(ActivityStatus),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add { description: String },
    List { filter: ListFilter },
    Update { id: ActivityId, update: ActivityUpdate },
    Delete { id: ActivityId },
    Quit,
    Empty,
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let ParsedLine { command, remainder } = ParsedLine::parse(line);
        match command {
            "" => Ok(Command::Empty),
            "quit" | "q" => Ok(Command::Quit),
            "add" => parse_add(remainder),
            "list" => parse_list(remainder),
            "update" => parse_update(remainder),
            "delete" => parse_delete(remainder),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

fn strip_quotes(value: &str) -> &str {
    value.trim_matches(|c| c == '\'' || c == '"')
}

fn parse_add(remainder: Option<&str>) -> Result<Command, CommandError> {
    let description = remainder.map(str::trim).unwrap_or("");
    if strip_quotes(description).trim().is_empty() {
        return Err(CommandError::usage(ADD_USAGE));
    }
    Ok(Command::Add {
        description: description.to_string(),
    })
}

fn parse_list(remainder: Option<&str>) -> Result<Command, CommandError> {
    let filter = match remainder {
        None => return Err(CommandError::usage(LIST_USAGE)),
        Some("all") => ListFilter::All,
        Some(status) => ListFilter::Status(
            status
                .parse()
                .map_err(|_e| CommandError::usage(LIST_USAGE))?,
        ),
    };
    Ok(Command::List { filter })
}

fn parse_update(remainder: Option<&str>) -> Result<Command, CommandError> {
    let tokens: Vec<&str> = remainder.unwrap_or("").split_whitespace().collect();
    let [id, field, value @ ..] = tokens.as_slice() else {
        return Err(CommandError::usage(UPDATE_USAGE));
    };
    if value.is_empty() {
        return Err(CommandError::usage(UPDATE_USAGE));
    }

    let id: ActivityId = id.parse()?;
    let value = value.join(" ");
    let value = strip_quotes(&value);

    let update = match *field {
        "desc" => {
            if value.trim().is_empty() {
                return Err(CommandError::usage(UPDATE_USAGE));
            }
            ActivityUpdate::SetDescription(value.to_string())
        }
        "status" => ActivityUpdate::SetStatus(value.parse()?),
        _ => return Err(CommandError::usage(UPDATE_USAGE)),
    };

    Ok(Command::Update { id, update })
}

fn parse_delete(remainder: Option<&str>) -> Result<Command, CommandError> {
    let id = remainder
        .and_then(|rest| rest.split_whitespace().next())
        .ok_or_else(|| CommandError::usage(DELETE_USAGE))?;
    Ok(Command::Delete { id: id.parse()? })
}
