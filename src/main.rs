mod index;
mod output;
mod query;
mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};
use index::{GeneralizedSuffixTree, Limit, StringId};
use std::path::{Path, PathBuf};
use utils::{load_corpus, ProgressBar, ProgressStyle};

#[derive(Parser)]
#[command(name = "sufx")]
#[command(about = "In-memory generalized suffix tree for multi-string substring search")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Search pattern (when no subcommand is given)
    #[arg(trailing_var_arg = true)]
    pattern: Vec<String>,

    /// Corpus file, one string per line
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Maximum number of results (0 or negative for all)
    #[arg(short, long, default_value_t = 0)]
    limit: i64,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the corpus for strings containing a pattern
    Search {
        /// Pattern to look up
        pattern: String,

        /// Corpus file, one string per line
        #[arg(short, long)]
        file: PathBuf,

        /// Maximum number of results (0 or negative for all)
        #[arg(short, long, default_value_t = 0)]
        limit: i64,

        /// Print matching ids only
        #[arg(long)]
        ids_only: bool,

        /// Print only the number of matches
        #[arg(short, long)]
        count: bool,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },
    /// Show tree statistics for a corpus
    Stats {
        /// Corpus file, one string per line
        #[arg(short, long)]
        file: PathBuf,

        /// Emit machine-readable JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Search {
            pattern,
            file,
            limit,
            ids_only,
            count,
            no_color,
        }) => {
            run_search(&pattern, &file, limit, ids_only, count, no_color)?;
        }
        Some(Commands::Stats { file, json }) => {
            let corpus = load_corpus(&file)?;
            let tree = build_tree(&corpus);
            index::stats::show_stats(&tree, json)?;
        }
        None => {
            let Some(file) = cli.file else {
                anyhow::bail!("No corpus file given. Try: sufx search <PATTERN> --file <CORPUS>");
            };
            let pattern = cli.pattern.join(" ");
            run_search(&pattern, &file, cli.limit, false, false, false)?;
        }
    }

    Ok(())
}

fn run_search(
    pattern: &str,
    file: &Path,
    limit: i64,
    ids_only: bool,
    count: bool,
    no_color: bool,
) -> Result<()> {
    let corpus = load_corpus(file)?;
    let tree = build_tree(&corpus);
    let ids = tree.search(pattern, Limit::from_count(limit));

    if count {
        output::print_match_count(&ids)?;
    } else if ids_only {
        output::print_ids_only(&ids)?;
    } else {
        output::print_matches(&corpus, &ids, pattern, !no_color)?;
    }

    Ok(())
}

/// Index every corpus line under its position.
fn build_tree(corpus: &[String]) -> GeneralizedSuffixTree {
    let pb = ProgressBar::new(corpus.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("█▓▒░  "),
    );

    let mut tree = GeneralizedSuffixTree::new();
    for (id, text) in corpus.iter().enumerate() {
        tree.put(text, id as StringId);
        pb.inc(1);
    }
    pb.finish_and_clear();

    tree
}
