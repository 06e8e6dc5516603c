use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use search_core::{build_from_files, KeywordIndex, Occurrence, Strictness};
use serde::Serialize;
use tracing_subscriber::{fmt, EnvFilter};

use std::collections::BTreeMap;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "indexer")]
#[command(about = "Index keyword occurrences and run two-keyword top-5 searches", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args)]
struct CorpusArgs {
    /// File listing the documents to index, whitespace separated
    #[arg(long)]
    docs: PathBuf,
    /// File listing the noise words, whitespace separated
    #[arg(long)]
    noise: PathBuf,
    /// Fail if any listed document cannot be read
    #[arg(long, default_value_t = false)]
    strict: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the index and search for documents containing either keyword
    Search {
        #[command(flatten)]
        corpus: CorpusArgs,
        /// First keyword; prompted for when omitted
        #[arg(long)]
        kw1: Option<String>,
        /// Second keyword; prompted for when omitted
        #[arg(long)]
        kw2: Option<String>,
        /// Print the result as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Build the index and print every keyword with its occurrences
    Dump {
        #[command(flatten)]
        corpus: CorpusArgs,
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

#[derive(Serialize)]
struct SearchOutput<'a> {
    kw1: &'a str,
    kw2: &'a str,
    results: &'a [String],
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Search { corpus, kw1, kw2, json } => {
            let index = load(&corpus)?;
            let kw1 = match kw1 {
                Some(kw) => kw,
                None => prompt("enter a word to search for")?,
            };
            let kw2 = match kw2 {
                Some(kw) => kw,
                None => prompt("enter a word to search for")?,
            };
            search(&index, &kw1, &kw2, json)
        }
        Commands::Dump { corpus, json } => {
            let index = load(&corpus)?;
            dump(&index, json)
        }
    }
}

fn load(corpus: &CorpusArgs) -> Result<KeywordIndex> {
    let strictness = if corpus.strict { Strictness::Strict } else { Strictness::Lenient };
    let index = build_from_files(&corpus.docs, &corpus.noise, strictness)?;
    Ok(index)
}

fn prompt(message: &str) -> Result<String> {
    let mut stdout = io::stdout();
    writeln!(stdout, "{message}")?;
    stdout.flush()?;
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        bail!("unexpected end of input while reading a keyword");
    }
    Ok(line.trim().to_string())
}

fn search(index: &KeywordIndex, kw1: &str, kw2: &str, json: bool) -> Result<()> {
    let results = index.top5search(kw1, kw2);
    tracing::debug!(kw1, kw2, hits = results.len(), "search complete");
    if json {
        let out = SearchOutput { kw1, kw2, results: &results };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }
    println!("1: {kw1} 2: {kw2}");
    if results.is_empty() {
        println!("no matching documents");
    } else {
        println!("[{}]", results.join(", "));
    }
    Ok(())
}

fn dump(index: &KeywordIndex, json: bool) -> Result<()> {
    if json {
        let map: BTreeMap<&str, &[Occurrence]> = index.iter().collect();
        println!("{}", serde_json::to_string_pretty(&map)?);
        return Ok(());
    }
    for (keyword, occs) in index.iter() {
        let list: Vec<String> = occs.iter().map(ToString::to_string).collect();
        println!("{keyword} -> [{}]", list.join(", "));
    }
    Ok(())
}
