//! pdfskim CLI - quick PDF text skim for first pages

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;

use pdfskim::{console_encoding, render_for_console, ExtractOptions, DEFAULT_MAX_PAGES};

#[derive(Parser)]
#[command(name = "pdfskim")]
#[command(version)]
#[command(about = "Print plain text from the first pages of a PDF", long_about = None)]
struct Cli {
    /// Input PDF file
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Max pages to extract
    #[arg(
        long,
        value_name = "N",
        default_value_t = DEFAULT_MAX_PAGES as u64,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pages: u64,

    /// Output file (stdout if not specified)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    log::debug!("skimming {} (limit {})", cli.input.display(), cli.pages);

    let options = ExtractOptions::new().with_max_pages(cli.pages as usize);
    let skim = pdfskim::skim_file_with_options(&cli.input, &options)?;
    let text = skim.to_text();

    if let Some(path) = &cli.output {
        fs::write(path, &text)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        // The console pass never fails; it drops what the terminal can't show
        println!("{}", render_for_console(&text, console_encoding()));
    }

    Ok(())
}
