mod cli;
mod commands;
mod git;
mod paths;
mod testutil;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let root = paths::expand_tilde(&cli.root);

    match cli.command {
        Command::Packages => {
            let result = commands::cmd_packages(&root)?;
            output(&result, cli.json, commands::format_packages_human)?;
        }
        Command::Status => {
            let result = commands::cmd_status(&root)?;
            let exit_code = result.failure_exit_code();
            output(&result, cli.json, commands::format_status_human)?;
            if let Some(code) = exit_code {
                std::process::exit(code);
            }
        }
    }
    Ok(())
}

fn output<T: serde::Serialize>(result: &T, json: bool, human_fn: fn(&T) -> String) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
    } else {
        let text = human_fn(result);
        if !text.is_empty() {
            println!("{}", text);
        }
    }
    Ok(())
}
