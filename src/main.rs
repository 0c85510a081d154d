use std::{ffi::OsString, path::PathBuf};

use cardflip::prelude::*;
use clap::Parser;

/// Plays a card flip animation cut from a sprite sheet
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Sheet shown when the animation starts
    #[arg(default_value = "assets/back_of_the_card.png")]
    sheet: PathBuf,

    /// Sheet swapped in two thirds of the way through
    #[arg(default_value = "assets/test2.png")]
    swap_sheet: PathBuf,

    /// Disable vsync
    #[arg(long)]
    no_vsync: bool,
}

/// Diagnostics are printed to stdout
fn log_target() -> env_logger::Target {
    env_logger::Target::Stdout
}

/// Parse arguments, reporting bad ones instead of exiting with clap's status code
fn parse_cli<I, T>(args: I) -> Option<Cli>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => Some(cli),
        Err(err) if err.use_stderr() => {
            log::error!("{err}");
            None
        }
        Err(err) => {
            // --help and --version
            let _ = err.print();
            None
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(log_target())
        .init();

    let Some(cli) = parse_cli(std::env::args_os()) else {
        return;
    };
    let app = App::default()
        .sheet(cli.sheet)
        .swap_sheet(cli.swap_sheet)
        .vsync(!cli.no_vsync);
    if let Err(err) = app.run() {
        log::error!("{err:#}");
    }
}
