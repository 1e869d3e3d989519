// src/engine/command.rs

//! The line-oriented command language read from stdin.

use std::path::PathBuf;
use std::str::FromStr;

use crate::types::TimerMode;

pub const HELP: &str = "\
commands:
  start | pause | reset | jump <min>      playback clock
  load <path>                             load a plan (JSON)
  timer add | timer reset-all
  timer start|stop|clear|remove <id>
  timer set <id> <min> <sec>
  timer mode <id> up|down
  timer name <id> <text>
  person add <name> | person remove <id>
  assign <person> <task>                  toggle one task
  assign-lane <person> <lane>             toggle a whole lane
  pin <task> | unpin <task>
  show | help | quit";

/// A parsed user command.
#[derive(Debug, Clone, PartialEq)]
pub enum UserCommand {
    Start,
    Pause,
    Reset,
    /// Raw jump target; parsed by the session, non-numeric input is ignored.
    Jump(String),
    Load(PathBuf),
    Show,
    Help,
    Quit,
    TimerAdd,
    TimerStart(String),
    TimerStop(String),
    TimerClear(String),
    TimerRemove(String),
    TimerResetAll,
    TimerSet {
        id: String,
        minutes: String,
        seconds: String,
    },
    TimerMode {
        id: String,
        mode: TimerMode,
    },
    TimerName {
        id: String,
        name: String,
    },
    PersonAdd(String),
    PersonRemove(String),
    Assign {
        person: String,
        task: String,
    },
    AssignLane {
        person: String,
        lane: String,
    },
    Pin(String),
    Unpin(String),
}

impl FromStr for UserCommand {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (head, rest) = split_word(line);

        let cmd = match head.to_lowercase().as_str() {
            "start" | "play" => UserCommand::Start,
            "pause" => UserCommand::Pause,
            "reset" => UserCommand::Reset,
            "jump" => UserCommand::Jump(required(rest, "jump <min>")?.to_string()),
            "load" => UserCommand::Load(PathBuf::from(required(rest, "load <path>")?)),
            "show" => UserCommand::Show,
            "help" | "?" => UserCommand::Help,
            "quit" | "exit" => UserCommand::Quit,
            "timer" => parse_timer(rest)?,
            "person" => parse_person(rest)?,
            "assign" => {
                let (person, task) = split_word(rest);
                UserCommand::Assign {
                    person: required(person, "assign <person> <task>")?.to_string(),
                    task: required(task, "assign <person> <task>")?.to_string(),
                }
            }
            "assign-lane" => {
                let (person, lane) = split_word(rest);
                UserCommand::AssignLane {
                    person: required(person, "assign-lane <person> <lane>")?.to_string(),
                    lane: required(lane, "assign-lane <person> <lane>")?.to_string(),
                }
            }
            "pin" => UserCommand::Pin(required(rest, "pin <task>")?.to_string()),
            "unpin" => UserCommand::Unpin(required(rest, "unpin <task>")?.to_string()),
            "" => return Err("empty command".to_string()),
            other => return Err(format!("unknown command: {other} (try `help`)")),
        };

        Ok(cmd)
    }
}

fn parse_timer(rest: &str) -> Result<UserCommand, String> {
    let (action, rest) = split_word(rest);
    let (id, rest) = split_word(rest);

    let cmd = match action {
        "add" => UserCommand::TimerAdd,
        "reset-all" | "clear-all" => UserCommand::TimerResetAll,
        "start" => UserCommand::TimerStart(required(id, "timer start <id>")?.to_string()),
        "stop" => UserCommand::TimerStop(required(id, "timer stop <id>")?.to_string()),
        "clear" => UserCommand::TimerClear(required(id, "timer clear <id>")?.to_string()),
        "remove" => UserCommand::TimerRemove(required(id, "timer remove <id>")?.to_string()),
        "set" => {
            let (minutes, seconds) = split_word(rest);
            UserCommand::TimerSet {
                id: required(id, "timer set <id> <min> <sec>")?.to_string(),
                minutes: minutes.to_string(),
                seconds: seconds.to_string(),
            }
        }
        "mode" => UserCommand::TimerMode {
            id: required(id, "timer mode <id> up|down")?.to_string(),
            mode: required(rest, "timer mode <id> up|down")?.parse()?,
        },
        "name" => UserCommand::TimerName {
            id: required(id, "timer name <id> <text>")?.to_string(),
            name: rest.to_string(),
        },
        other => return Err(format!("unknown timer action: {other:?}")),
    };
    Ok(cmd)
}

fn parse_person(rest: &str) -> Result<UserCommand, String> {
    let (action, rest) = split_word(rest);
    match action {
        "add" => Ok(UserCommand::PersonAdd(
            required(rest, "person add <name>")?.to_string(),
        )),
        "remove" => Ok(UserCommand::PersonRemove(
            required(rest, "person remove <id>")?.to_string(),
        )),
        other => Err(format!("unknown person action: {other:?}")),
    }
}

/// Split off the first whitespace-delimited word; the remainder is trimmed.
fn split_word(s: &str) -> (&str, &str) {
    let s = s.trim();
    match s.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (s, ""),
    }
}

fn required<'a>(value: &'a str, usage: &str) -> Result<&'a str, String> {
    if value.is_empty() {
        Err(format!("usage: {usage}"))
    } else {
        Ok(value)
    }
}
