#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::perf,
    clippy::style,
    clippy::missing_safety_doc,
    clippy::missing_const_for_fn
)]
#![allow(clippy::as_conversions, clippy::mod_module_files)]

use std::process;

mod commands;
mod terminal;

use commands::Commands;

use clap::{Args, Parser};
use eyre::{Context, Result};
use log::{error, trace};

fn main() {
    if let Err(err) = try_main() {
        error!("{:#}", err);
        process::exit(2);
    }
}

fn try_main() -> Result<()> {
    let Cli {
        command,
        global_opts:
            GlobalOpts {
                api_url,
                verbosity,
                quiet,
            },
    } = Cli::parse();

    setup_errlog(verbosity as usize, quiet)?;

    if let Some(url) = &api_url {
        trace!("'api-url' option used with value of '{url}'");
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .wrap_err("Cannot start the async runtime")?;

    let message = runtime.block_on(command.execute(api_url))?;
    println!("{message}");
    Ok(())
}

fn setup_errlog(verbosity: usize, quiet: bool) -> Result<()> {
    // if quiet then ignore verbosity but still show errors
    let verbosity = if quiet { 0 } else { verbosity + 1 };

    stderrlog::new()
        .verbosity(verbosity)
        .init()
        .wrap_err("Cannot initialise logging")
}

#[derive(Parser)]
#[clap(name = "bookfill")]
#[clap(about = "Look up books by ISBN and fill a book-entry form from the terminal")]
#[clap(version, author)]
struct Cli {
    #[clap(subcommand)]
    command: Commands,

    #[clap(flatten)]
    global_opts: GlobalOpts,
}

#[derive(Debug, Args)]
struct GlobalOpts {
    /// The volumes endpoint to query instead of the Google Books API
    #[clap(long, global = true)]
    api_url: Option<String>,

    /// How chatty the program is when performing commands
    ///
    /// The number of times this flag is used will increase how chatty
    /// the program is.
    #[clap(short, long, parse(from_occurrences), global = true)]
    verbosity: u8,

    /// Prevents the program from logging anything but errors.
    #[clap(short, long, global = true)]
    quiet: bool,
}
