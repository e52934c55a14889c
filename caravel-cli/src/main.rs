// SPDX-License-Identifier: AGPL-3.0-or-later
//! caravel: interactive file-manager shell
//!
//! A single current-directory cursor navigated with short commands:
//! navigate, list, read, create, rename, copy, move, delete, hash,
//! compress, decompress, plus host-info queries.

mod dispatch;
mod hostinfo;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use caravel_core::Session;
use dispatch::Outcome;

#[derive(Parser)]
#[command(name = "caravel")]
#[command(version, about = "Interactive file-manager shell", long_about = None)]
struct Cli {
    /// Name shown in the greeting banner
    #[arg(long, default_value = "Guest")]
    username: String,

    /// Starting directory (defaults to the home directory)
    #[arg(long)]
    start_dir: Option<PathBuf>,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn start_dir(cli: &Cli) -> PathBuf {
    if let Some(dir) = &cli.start_dir {
        return dir.clone();
    }
    if let Some(dirs) = directories::UserDirs::new() {
        return dirs.home_dir().to_path_buf();
    }
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("/"))
}

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    let mut session = match Session::open(start_dir(&cli)).await {
        Ok(session) => session,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!("Welcome to the File Manager, {}!", cli.username);
    println!("You are currently in {}", session.current().display());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        // one command runs to completion before the next line is taken
        tokio::select! {
            line = lines.next_line() => match line {
                Ok(Some(line)) => {
                    match dispatch::dispatch(&line, &mut session).await {
                        Ok(Outcome::Exit) => break,
                        Ok(Outcome::Done) => {}
                        Err(e) => {
                            tracing::debug!("command failed: {e}");
                            println!("{}", e.notice());
                        }
                    }
                    println!("You are currently in {}", session.current().display());
                }
                Ok(None) => break,
                Err(e) => {
                    tracing::debug!("stdin error: {e}");
                    break;
                }
            },
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    println!("Thank you for using File Manager, {}, goodbye!", cli.username);
    ExitCode::SUCCESS
}
