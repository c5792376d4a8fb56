//! tslisp CLI entry point.

mod compile;
mod config;
mod error;
mod repl;
mod run;

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::run::Mode;

#[derive(Debug, Parser)]
#[command(name = "tslisp")]
#[command(about = "Compile S-expressions to JavaScript")]
struct Cli {
    /// Config file (defaults to ./tslisp.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run a file, or start a REPL when no file is given
    Run {
        /// Source file
        file: Option<PathBuf>,

        /// Print tokens as JSON instead of running
        #[arg(long, conflicts_with = "parse")]
        tokenize: bool,

        /// Print the syntax tree as JSON instead of running
        #[arg(long)]
        parse: bool,
    },

    /// Compile files to JavaScript
    Compile {
        /// Input file(s)
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Output directory
        #[arg(short, long)]
        out_dir: Option<PathBuf>,

        /// Write to stdout instead of files
        #[arg(long)]
        stdout: bool,
    },

    /// List builtin forms and their arity
    Builtins,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr; stdout carries program output.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("tslisp=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref(), &std::env::current_dir()?)?;

    match cli.command {
        Commands::Run {
            file,
            tokenize,
            parse,
        } => {
            let mode = Mode::from_flags(tokenize, parse);
            let mut stdout = std::io::stdout();

            match file {
                Some(path) => {
                    let code = run::run_file(&path, mode, &config.runtime, &mut stdout).await?;
                    if code != 0 {
                        std::process::exit(code);
                    }
                }
                None => {
                    let input = tokio::io::BufReader::new(tokio::io::stdin());
                    repl::repl(input, &mut stdout, &mut std::io::stderr(), mode, &config.runtime)
                        .await?
                }
            }
        }

        Commands::Compile {
            files,
            out_dir,
            stdout,
        } => {
            let mut output = config.output;
            if out_dir.is_some() {
                output.dir = out_dir;
            }

            let written = compile::compile_files(&files, &output, stdout)?;
            if !stdout {
                info!("Compiled {} file(s)", written.len());
            }
        }

        Commands::Builtins => list_builtins(&mut std::io::stdout())?,
    }

    Ok(())
}

fn list_builtins<W: Write>(out: &mut W) -> std::io::Result<()> {
    for builtin in tslisp_core::builtins() {
        writeln!(out, "{:<8} {}", builtin.name, builtin.arity)?;
    }
    Ok(())
}
