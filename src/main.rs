//! Main CLI application for the toroidal Game of Life simulator

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use std::ffi::OsString;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use toroidal_life::{
    config::{CliOverrides, Settings},
    game_of_life::save_grid_to_file,
    screen::TerminalScreen,
    utils::ColorOutput,
    Session, SessionSummary,
};
use tracing::{info, Level};

#[derive(Parser, Debug)]
#[command(name = "toroidal_life")]
#[command(about = "Conway's Game of Life on a wrapping grid")]
#[command(version = "0.1.0")]
struct Cli {
    /// Initial state: whitespace-separated 0/1 values, one row per line
    input_file: PathBuf,

    /// YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write a JSON summary of the session to this path
    #[arg(long)]
    summary: Option<PathBuf>,

    /// Write the last grid to this path
    #[arg(long)]
    save_final: Option<PathBuf>,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Outcome of argument parsing and initial-state loading
enum Startup {
    Ready {
        cli: Cli,
        settings: Settings,
        session: Session,
    },
    Exit(i32),
}

fn main() -> Result<()> {
    let (cli, settings, mut session) = match start(std::env::args_os(), &mut std::io::stdout())? {
        Startup::Ready { cli, settings, session } => (cli, settings, session),
        Startup::Exit(code) => std::process::exit(code),
    };

    init_tracing(cli.verbose, cli.log_file.as_deref())?;

    let outcome = {
        let mut screen = TerminalScreen::new().context("Failed to initialize terminal")?;
        session.run(&mut screen).context("Terminal session failed")?
    };

    let summary = session.summary(outcome);
    info!(?summary, "session finished");
    write_outputs(&settings, &session, &summary)?;

    println!(
        "{}",
        ColorOutput::success(&format!(
            "Finished after {} generation(s) ({:?})",
            summary.generation, summary.outcome
        ))
    );

    Ok(())
}

/// Parse arguments and load the initial grid without touching the terminal.
///
/// Usage and load errors are written to `out` and mapped to exit code 1;
/// `--help` and `--version` map to clap's own exit code.
fn start<I, T, W>(args: I, out: &mut W) -> Result<Startup>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) => {
            writeln!(out, "{}", err.render())?;
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit_code(),
                _ => 1,
            };
            return Ok(Startup::Exit(code));
        }
    };

    let settings = load_settings(&cli)?;

    match Session::from_settings(&cli.input_file, &settings) {
        Ok(session) => Ok(Startup::Ready { cli, settings, session }),
        Err(err) => {
            writeln!(out, "{}", ColorOutput::error(&err.to_string()))?;
            Ok(Startup::Exit(1))
        }
    }
}

fn load_settings(cli: &Cli) -> Result<Settings> {
    let mut settings = match &cli.config {
        Some(path) => Settings::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Settings::default(),
    };

    settings.merge_with_cli(&CliOverrides {
        summary_file: cli.summary.clone(),
        final_grid_file: cli.save_final.clone(),
    });
    settings.validate().context("Configuration validation failed")?;

    Ok(settings)
}

fn write_outputs(settings: &Settings, session: &Session, summary: &SessionSummary) -> Result<()> {
    if let Some(path) = &settings.output.summary_file {
        let json = summary.to_json().context("Failed to serialize session summary")?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write summary to {}", path.display()))?;
        println!("{}", ColorOutput::info(&format!("Summary saved to {}", path.display())));
    }

    if let Some(path) = &settings.output.final_grid_file {
        save_grid_to_file(session.engine().grid(), path)?;
        println!("{}", ColorOutput::info(&format!("Final grid saved to {}", path.display())));
    }

    Ok(())
}

fn init_tracing(verbose: bool, log_file: Option<&Path>) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let builder = tracing_subscriber::fmt().with_max_level(level).with_target(false);

    let installed = match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).try_init()
        }
        None => builder.with_writer(std::io::stderr).try_init(),
    };

    installed.map_err(|err| anyhow::anyhow!("Failed to initialize logging: {}", err))
}
