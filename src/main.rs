mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = cli::Cli::parse();
    let ctx = commands::Context::new(args.data_dir, args.config)?;
    let command = args.command.unwrap_or(cli::Command::Week { date: None });
    match command {
        cli::Command::Week { date } => commands::week(&ctx, date),
        cli::Command::Month { year, month } => commands::month(&ctx, year, month),
        cli::Command::AddEvent {
            date,
            time,
            color,
            description,
        } => commands::add_event(&ctx, date, time, color, description),
        cli::Command::RemoveEvent {
            date,
            time,
            color,
            description,
        } => commands::remove_event(&ctx, date, time, color, description),
        cli::Command::Tasks => commands::tasks(&ctx),
        cli::Command::AddTask { description } => commands::add_task(&ctx, description),
        cli::Command::ToggleTask { description } => commands::toggle_task(&ctx, description),
        cli::Command::RemoveTask { description } => commands::remove_task(&ctx, description),
    }
}
