use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use radiko_lib::output::{format_analysis, to_bracketed};
use radiko_lib::{analyze_text, Lexicon, WordAnalysis};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "radiko", about = "Esperanto word decomposer")]
struct Cli {
    /// Words to decompose; an argument may hold several words. If omitted,
    /// reads lines from stdin.
    words: Vec<String>,

    /// Output a JSON array of analyses.
    #[arg(long)]
    json: bool,

    /// Pretty-print JSON output.
    #[arg(long)]
    pretty: bool,

    /// Output in bracketed {segment:role} format.
    #[arg(long)]
    bracketed: bool,

    /// Only show words whose root is not in the dictionary.
    #[arg(long)]
    verify: bool,

    /// Load the lexicon from a JSON file instead of the built-in one.
    #[arg(long, value_name = "PATH")]
    lexicon: Option<PathBuf>,

    /// Log the stripping and selection steps to stderr.
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let lexicon = load_lexicon(cli.lexicon.as_deref())?;

    // JSON output is a single array; every other format prints per line.
    let mut collected = Vec::new();
    if cli.words.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = line.context("failed to read stdin")?;
            process_line(&line, &lexicon, &cli, &mut collected);
        }
    } else {
        for arg in &cli.words {
            process_line(arg, &lexicon, &cli, &mut collected);
        }
    }

    if cli.json {
        print_json(&collected, cli.pretty)?;
    }
    Ok(())
}

fn process_line(line: &str, lexicon: &Lexicon, cli: &Cli, collected: &mut Vec<WordAnalysis>) {
    let mut analyses = analyze_text(line, lexicon).words;
    if cli.verify {
        analyses.retain(|a| a.headword.is_none());
    }

    if cli.json {
        collected.extend(analyses);
        return;
    }
    for a in &analyses {
        if cli.bracketed {
            println!("{}", to_bracketed(&a.decomposition));
        } else {
            println!("{}", format_analysis(a, cli.verify));
        }
    }
}

fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_lexicon(path: Option<&Path>) -> Result<Lexicon> {
    match path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("cannot open lexicon {}", path.display()))?;
            let lexicon = Lexicon::from_reader(BufReader::new(file))
                .with_context(|| format!("cannot load lexicon {}", path.display()))?;
            tracing::debug!(path = %path.display(), "loaded lexicon");
            Ok(lexicon)
        }
        None => Ok(Lexicon::embedded()),
    }
}

fn print_json(analyses: &[WordAnalysis], pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(analyses)
    } else {
        serde_json::to_string(analyses)
    };
    println!("{}", json.context("JSON serialization failed")?);
    Ok(())
}
