mod cli;
mod config;
mod paths;
mod report;
mod ui;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use cli::Cli;
use pomscan::Scanner;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let log_level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(if cli.quiet {
            log::LevelFilter::Error
        } else {
            log_level
        })
        .format_timestamp(None)
        .init();

    ui::set_color(!cli.no_color);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            ui::error(&format!("{:#}", err));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "pomdeploy", &mut io::stdout());
        return Ok(());
    }

    let root = config::scan_root(cli)?;
    let file_config = config::FileConfig::discover(cli.config.as_deref(), &root)?;
    let options = config::scan_options(cli, &file_config, root)?;

    match &options.compare_to {
        Some(other) => log::info!(
            "comparing {} against {}",
            options.root.display(),
            other.display()
        ),
        None => log::info!("scanning {}", options.root.display()),
    }

    let root_display = options.root.display().to_string();
    let report = Scanner::new(options)
        .run()
        .with_context(|| format!("Scan of {} aborted", root_display))?;

    if report.problem_count() > 0 {
        ui::warn(&format!("{} problem(s) found", report.problem_count()));
    }
    report::print(&report);
    Ok(())
}
