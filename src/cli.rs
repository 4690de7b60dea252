use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "hourglass", version, about = "Weekly schedule and to-do list")]
pub struct Cli {
    /// Directory holding schedule.txt and tasks.txt
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,
    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the events of one week (defaults to the current week)
    Week {
        /// Any date in the week, YYYYMMDD
        #[arg(long)]
        date: Option<String>,
    },
    /// Show a month calendar (defaults to the current month)
    Month {
        #[arg(long)]
        year: Option<i32>,
        /// Month number, 1-12
        #[arg(long)]
        month: Option<u32>,
    },
    /// Schedule an event
    AddEvent {
        /// Date in YYYYMMDD format
        date: String,
        /// Time in HHMM (24-hour) format
        time: String,
        /// Background color as rrggbb hex
        color: String,
        /// What the event is (quote it; spacing is kept as typed)
        description: String,
    },
    /// Remove the first event matching all fields
    RemoveEvent {
        date: String,
        time: String,
        color: String,
        description: String,
    },
    /// List to-do tasks
    Tasks,
    /// Add a to-do task
    AddTask {
        description: String,
    },
    /// Mark a task done, or not done again
    ToggleTask {
        description: String,
    },
    /// Remove a to-do task
    RemoveTask {
        description: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptions_keep_their_spacing() {
        let cli = Cli::try_parse_from([
            "hourglass",
            "remove-event",
            "20240115",
            "0930",
            "ff0000",
            "team  sync",
        ])
        .unwrap();
        match cli.command {
            Some(Command::RemoveEvent { description, .. }) => assert_eq!(description, "team  sync"),
            other => panic!("unexpected command {:?}", other),
        }

        let cli = Cli::try_parse_from(["hourglass", "toggle-task", "call  mom"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Command::ToggleTask { description }) if description == "call  mom"
        ));
    }

    #[test]
    fn unquoted_words_are_rejected() {
        assert!(Cli::try_parse_from(["hourglass", "add-task", "call", "mom"]).is_err());
    }

    #[test]
    fn week_is_the_default_command() {
        let cli = Cli::try_parse_from(["hourglass", "--data-dir", "/tmp/h"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/h")));
    }
}
