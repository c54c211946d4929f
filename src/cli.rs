use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::CommandReport;
use crate::commands::update::{self, UpdateOptions};
use crate::commands::verify::{self, VerifyOptions};

#[derive(Parser)]
#[command(name = "gallery-sync")]
#[command(about = "Group generated image folders into gallery entries", long_about = None)]
struct Cli {
    /// Gallery root holding the index file and assets directory (defaults to current directory)
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    /// Print the command report as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Rebuild the entries of each category folder and merge them into the index
    Update {
        /// Category folders, each directly under the assets directory
        folders: Vec<String>,

        /// Compute the merge without writing the index
        #[arg(short = 'n', long)]
        dry_run: bool,
    },

    /// Check the stored index against its invariants
    Verify,
}

fn render(report: &CommandReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }
    for line in &report.details {
        println!("{line}");
    }
    for issue in &report.issues {
        eprintln!("issue: {issue}");
    }
    Ok(())
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let report = match cli.command {
        Command::Update { folders, dry_run } => update::run(&UpdateOptions {
            root: cli.root,
            folders,
            dry_run,
        })?,
        Command::Verify => verify::run(&VerifyOptions { root: cli.root })?,
    };

    render(&report, cli.json)?;
    if !report.ok {
        anyhow::bail!("{} reported {} issue(s)", report.command, report.issues.len());
    }
    Ok(())
}
