//! Command-line interface for html-to-text.
//!
//! Reads HTML from a file or stdin and writes structured plain text to stdout
//! or a file.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, CommandFactory, Parser};
use clap_complete::Shell;
use html_to_text::{ConversionOptions, convert_html, render_html};
use log::{LevelFilter, debug, info};

#[derive(Parser, Debug)]
#[command(name = "html-to-text", version, about = "Convert HTML to structured plain text")]
struct Cli {
    /// Input HTML file (use "-" or omit for stdin)
    input: Option<PathBuf>,

    /// Write output to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Load conversion options from a JSON file; flags override its values
    #[arg(long, value_name = "FILE")]
    options: Option<PathBuf>,

    /// Maximum element nesting depth
    #[arg(long, value_name = "N")]
    max_depth: Option<usize>,

    /// Drop an element and its content (repeatable; replaces the default list)
    #[arg(long = "drop-tag", value_name = "TAG")]
    drop_tags: Vec<String>,

    /// Leave HTML character references undecoded
    #[arg(long)]
    keep_entities: bool,

    /// Print the walker output without whitespace normalization
    #[arg(long)]
    raw: bool,

    /// Print shell completions and exit
    #[arg(long, value_name = "SHELL")]
    completions: Option<Shell>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(&cli) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    if let Some(shell) = cli.completions {
        clap_complete::generate(shell, &mut Cli::command(), "html-to-text", &mut io::stdout());
        return Ok(());
    }

    let options = build_options(cli)?;
    debug!("conversion options: {options:?}");

    let html = read_input(cli.input.as_deref())?;
    let text = if cli.raw {
        render_html(&html, &options)?
    } else {
        let mut text = convert_html(&html, &options)?;
        if !text.is_empty() {
            text.push('\n');
        }
        text
    };

    write_output(cli.output.as_deref(), &text)
}

fn build_options(cli: &Cli) -> Result<ConversionOptions> {
    let mut options = match &cli.options {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("failed to read options file {}", path.display()))?;
            serde_json::from_str(&json).with_context(|| format!("invalid options file {}", path.display()))?
        }
        None => ConversionOptions::default(),
    };

    if let Some(max_depth) = cli.max_depth {
        options.max_depth = max_depth;
    }
    if !cli.drop_tags.is_empty() {
        options.drop_tags.clone_from(&cli.drop_tags);
    }
    if cli.keep_entities {
        options.decode_entities = false;
    }
    Ok(options)
}

fn read_input(input: Option<&Path>) -> Result<String> {
    let bytes = match input {
        Some(path) if path != Path::new("-") => {
            info!("reading {}", path.display());
            fs::read(path).with_context(|| format!("failed to read {}", path.display()))?
        }
        _ => {
            let mut buffer = Vec::new();
            io::stdin()
                .read_to_end(&mut buffer)
                .context("failed to read stdin")?;
            buffer
        }
    };

    Ok(match String::from_utf8(bytes) {
        Ok(html) => html,
        Err(err) => {
            info!("input is not valid UTF-8, decoding lossily");
            String::from_utf8_lossy(err.as_bytes()).into_owned()
        }
    })
}

fn write_output(output: Option<&Path>, text: &str) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, text).with_context(|| format!("failed to write {}", path.display()))?;
            info!("wrote {} bytes to {}", text.len(), path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(text.as_bytes()).context("failed to write stdout")?;
            stdout.flush().context("failed to write stdout")?;
        }
    }
    Ok(())
}
