use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::Parser;
use draftmd::{Config, RawDocument};

#[derive(Parser)]
#[command(name = "draftmd")]
#[command(about = "Convert raw rich-text block documents (JSON) to Markdown")]
struct Cli {
    /// Input JSON file (reads stdin when omitted or "-")
    input: Option<PathBuf>,

    /// Output Markdown file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Rendering config file (TOML)
    #[arg(short, long, default_value = "draftmd.toml")]
    config: PathBuf,
}

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> draftmd::Result<()> {
    let config = Config::load(&cli.config)?;
    let document = read_document(cli.input.as_deref())?;
    let markdown = draftmd::document_to_markdown(&document, &config);

    match &cli.output {
        Some(output) => {
            fs::write(output, markdown)?;
            log::info!("Created {}", output.display());
        }
        None => print!("{}", markdown),
    }

    Ok(())
}

fn read_document(input: Option<&Path>) -> draftmd::Result<RawDocument> {
    match input {
        Some(path) if path.as_os_str() != "-" => draftmd::parse_file(path),
        _ => draftmd::parse_reader(io::stdin().lock()),
    }
}
