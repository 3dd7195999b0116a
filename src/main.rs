mod config;
mod core;
mod utils;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use crate::config::RulesManager;
use crate::core::pipeline::Pipeline;
use crate::core::repair::RepairTable;
use crate::utils::file_helper;

#[derive(Parser)]
#[command(name = "moji_repair", about = "Repair mis-decoded Japanese text in source files")]
struct Cli {
    /// Root directory to scan (defaults to the executable's directory)
    #[arg(long)]
    root: Option<PathBuf>,

    /// File extension to process
    #[arg(long, default_value = "java")]
    extension: String,

    /// Write repaired files back to disk (default is a dry run)
    #[arg(long)]
    apply: bool,

    /// Write the built-in rule table to the rules file and exit
    #[arg(long)]
    dump_rules: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let manager = RulesManager::new();

    if cli.dump_rules {
        let table = RepairTable::builtin();
        manager.save(&table).with_context(|| {
            format!("failed to write {}", manager.rules_file_path().display())
        })?;
        println!("Wrote rule table to {}", manager.rules_file_path().display());
        return Ok(());
    }

    let root = cli.root.unwrap_or_else(config::exe_directory);
    if !file_helper::directory_exists(&root) {
        bail!("root directory does not exist: {}", root.display());
    }

    if !cli.apply {
        println!("Dry run: no files will be modified (pass --apply to write changes)");
    }

    let pipeline = Pipeline::new(manager.load(), cli.extension, cli.apply);
    let summary = pipeline.run(&root);

    // Per-file failures only lower this count; they never fail the process.
    println!();
    println!(
        "Processed {}/{} files successfully",
        summary.fixed, summary.discovered
    );

    Ok(())
}
