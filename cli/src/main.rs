use anyhow::Result;
use clap::builder::RangedU64ValueParser;
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use textdex_core::config::{DEFAULT_MAX_COMPLETIONS, DEFAULT_MAX_EDIT_DISTANCE};
use textdex_core::SearchConfig;
use tracing_subscriber::{fmt, EnvFilter};

mod ingest;
mod repl;

#[derive(Parser)]
#[command(name = "textdex")]
#[command(about = "Index a directory of text files and search it with TF-IDF", long_about = None)]
struct Cli {
    /// Directory to index recursively
    #[arg(long, global = true, default_value = "20_newsgroups")]
    dataset: PathBuf,
    /// Number of ranked results to print
    #[arg(long, global = true, default_value_t = 5, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    top: usize,
    /// Maximum prefix completions offered
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_COMPLETIONS)]
    max_completions: usize,
    /// Largest edit distance accepted for a spelling suggestion
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_EDIT_DISTANCE)]
    max_edit_distance: usize,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive search prompt (default)
    Repl,
    /// Run a single query and exit
    Query {
        /// Free-text query
        text: String,
        /// Print hits as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    println!("Indexing documents from: {} ...", cli.dataset.display());
    let (index, report) = ingest::build_index(&cli.dataset)?;
    let index = index.with_config(SearchConfig {
        max_completions: cli.max_completions,
        max_edit_distance: cli.max_edit_distance,
        ..SearchConfig::default()
    });
    println!("Indexing Complete.");
    println!("Total Documents: {}", report.documents);
    println!("Total Unique Terms: {}", report.unique_terms);
    println!("Time taken to index: {} seconds", report.elapsed.as_secs_f64());
    println!("------------------------------------------------");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.command.unwrap_or(Commands::Repl) {
        Commands::Repl => repl::run(&index, io::stdin().lock(), &mut out, cli.top)?,
        Commands::Query { text, json } => {
            let hits = index.search_top(&text, cli.top);
            if json {
                serde_json::to_writer_pretty(&mut out, &repl::hits_out(&index, &hits))?;
                writeln!(out)?;
            } else {
                repl::print_hits(&index, &hits, cli.top, &mut out)?;
            }
        }
    }
    Ok(())
}
