use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use prefix_dawg::dawg::wordlist::build_dawg_from_file;
use prefix_dawg::dawg::{LoadError, LoadOptions};

#[derive(Parser)]
#[command(name = "prefix-dawg", about = "Build a DAWG from a word list and query it", version)]
struct Cli {
    /// Word list, one word per line ('#' starts a comment line)
    wordlist: PathBuf,

    /// List the words starting with this prefix (repeatable)
    #[arg(long, short = 'p')]
    prefix: Vec<String>,

    /// Check whether this word is in the list (repeatable)
    #[arg(long, short = 'w')]
    word: Vec<String>,

    /// Sort and deduplicate the list instead of requiring sorted input
    #[arg(long)]
    sort: bool,

    /// Lowercase every word before building
    #[arg(long)]
    lowercase: bool,

    /// Print at most this many words per prefix
    #[arg(long)]
    limit: Option<usize>,

    /// Enable verbose output
    #[arg(long, short = 'v', conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress log output
    #[arg(long, short = 'q', conflicts_with = "verbose")]
    quiet: bool,
}

fn init_tracing(cli: &Cli) {
    //   --quiet   → "off"
    //   --verbose → RUST_LOG if set, otherwise debug for this crate
    //   default   → warnings only
    let filter = if cli.quiet {
        tracing_subscriber::EnvFilter::new("off")
    } else if cli.verbose {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "prefix_dawg=debug".into())
    } else {
        tracing_subscriber::EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<(), LoadError> {
    let options = LoadOptions {
        sort: cli.sort,
        lowercase: cli.lowercase,
    };

    let start = Instant::now();
    let dawg = build_dawg_from_file(&cli.wordlist, &options)?;
    let elapsed = start.elapsed();

    println!("Words read: {}", dawg.word_count());
    println!("Total edges: {}", dawg.edge_count());
    println!("States: {}", dawg.state_count());
    println!("Built DAWG in: {} ms", elapsed.as_millis());

    for word in &cli.word {
        let word = if cli.lowercase {
            word.to_lowercase()
        } else {
            word.clone()
        };
        let found = if dawg.contains(&word) { "yes" } else { "no" };
        println!("{word}: {found}");
    }

    for prefix in &cli.prefix {
        let prefix = if cli.lowercase {
            prefix.to_lowercase()
        } else {
            prefix.clone()
        };
        let start = Instant::now();
        println!("Prefix '{prefix}' exists: {}", dawg.has_prefix(&prefix));
        let words = dawg.words_with_prefix(&prefix);
        let elapsed = start.elapsed();

        for word in words.iter().take(cli.limit.unwrap_or(usize::MAX)) {
            println!("  {word}");
        }
        println!(
            "Prefix '{prefix}' matched {} words in: {} ms",
            words.len(),
            elapsed.as_millis()
        );
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
