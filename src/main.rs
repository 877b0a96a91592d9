//! Abook - Main entry point
//!
//! Runs the line-oriented REPL over stdin/stdout. All replies go to
//! stdout; logging stays on stderr so the conversation is not polluted.

use abook::commands::{execute, Command};
use abook::{AddressBook, Config};
use anyhow::Result;
use chrono::Local;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Initialize logging (stderr only to keep stdout for the REPL)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = Config::from_env()?;
    info!(
        horizon_days = config.birthday_horizon_days,
        "configuration loaded"
    );

    let mut book = AddressBook::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("Welcome to the assistant bot!");

    loop {
        print!("Enter a command: ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF: behave like an explicit exit
            println!("Good bye!");
            break;
        }

        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                println!("Error: {}", err);
                continue;
            }
        };

        if command == Command::Exit {
            println!("Good bye!");
            break;
        }

        let today = Local::now().date_naive();
        match execute(&mut book, command, config.birthday_horizon_days, today) {
            Ok(reply) => println!("{}", reply),
            Err(err) => {
                debug!(%err, "command failed");
                println!("Error: {}", err);
            }
        }
    }

    Ok(())
}
