use std::error::Error;
use std::io::{self, Write};

use ansio::Coder;
use ansio::cli::{TitleArgs, write_title};
use ansio::error::CliError;
use sarge::prelude::*;

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  ansio_title --title <text>");
    eprintln!();
    eprintln!("Sets the terminal window title (OSC 0) when stdout is a terminal.");
    eprintln!("With stdout redirected, the title text is written unframed.");
}

fn run() -> Result<(), Box<dyn Error>> {
    let mut reader = ArgumentReader::new();

    let title_ref = reader.add::<TitleArgs>(tag::both('t', "title"));

    let args = reader.parse()?;

    let title = match title_ref.get(&args) {
        Some(Ok(v)) => v,
        Some(Err(_)) => unreachable!("TitleArgs parsing is infallible"),
        None => TitleArgs::default(),
    };
    let title = title.require_title()?;

    let mut coder = Coder::new(io::stdout());
    write_title(&mut coder, title).map_err(|e| CliError::write("-", e))?;
    coder.flush().map_err(|e| CliError::write("-", e))?;

    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("ansio_title error: {e}");
        print_usage();
        std::process::exit(1);
    }
}
