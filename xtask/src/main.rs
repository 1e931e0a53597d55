//! Build helpers: man pages and shell completions for `textmetrics`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "xtask", about = "Development tasks for textmetrics")]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate man pages for the CLI and each subcommand
    Man {
        /// Output directory
        #[arg(long, default_value = "target/man")]
        out: PathBuf,
    },
    /// Generate shell completion scripts
    Completions {
        /// Output directory
        #[arg(long, default_value = "target/completions")]
        out: PathBuf,
    },
}

fn main() -> io::Result<()> {
    match Xtask::parse().task {
        Task::Man { out } => man(&out),
        Task::Completions { out } => completions(&out),
    }
}

fn man(out: &Path) -> io::Result<()> {
    fs::create_dir_all(out)?;
    let cmd = textmetrics::command();
    clap_mangen::generate_to(cmd, out)?;
    println!("man pages written to {}", out.display());
    Ok(())
}

fn completions(out: &Path) -> io::Result<()> {
    fs::create_dir_all(out)?;
    let mut cmd = textmetrics::command();
    let bin = cmd.get_name().to_string();
    for shell in [Shell::Bash, Shell::Zsh, Shell::Fish, Shell::PowerShell, Shell::Elvish] {
        let path = clap_complete::generate_to(shell, &mut cmd, &bin, out)?;
        println!("{}", path.display());
    }
    Ok(())
}
