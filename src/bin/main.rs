use affix_core::{AutocompleteEngine, CompletionResult, EngineConfig};
use clap::Parser;
use crossterm::style::Stylize;
use log::error;
use std::io::{self, stdin, stdout, Write};
use std::path::PathBuf;
use std::process::ExitCode;

const RESET_COMMAND: &str = "#";
const EXIT_COMMAND: &str = "#exit";

/// Fuzzy autocomplete over the lines of a text corpus.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Zip archive, text file or directory of .txt files to index
    #[arg(short, long, default_value = affix_core::config::DEFAULT_CORPUS_PATH)]
    corpus: PathBuf,

    /// Cached index location
    #[arg(short, long, default_value = affix_core::config::DEFAULT_INDEX_PATH)]
    index: PathBuf,

    /// Maximum completions shown per query
    #[arg(short = 'k', long, default_value_t = affix_core::config::DEFAULT_RESULT_LIMIT)]
    limit: usize,

    /// Seed for sampling when more lines match than the limit
    #[arg(long)]
    seed: Option<u64>,

    /// Rebuild the index from the corpus even when a cached one exists
    #[arg(long)]
    rebuild: bool,

    /// Print completions as JSON objects, one per line
    #[arg(long)]
    json: bool,
}

impl From<&Args> for EngineConfig {
    fn from(args: &Args) -> Self {
        Self {
            result_limit: args.limit,
            index_path: args.index.clone(),
            corpus_path: args.corpus.clone(),
            seed: args.seed,
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let engine = match AutocompleteEngine::open(EngineConfig::from(&args), args.rebuild) {
        Ok(engine) => engine,
        Err(e) => {
            error!("could not load the corpus: {}", e);
            return ExitCode::FAILURE;
        }
    };
    println!("Data processed successfully.\n");

    if let Err(e) = run_session(&engine, args.json) {
        error!("session ended with an error: {}", e);
        return ExitCode::FAILURE;
    }
    println!("Goodbye!");
    ExitCode::SUCCESS
}

fn run_session(engine: &AutocompleteEngine, json: bool) -> io::Result<()> {
    let mut rng = engine.sampling_rng();
    let mut current_query = String::new();

    println!("{}", "Hello! You can start searching:".bold());
    println!(
        "To start a new sentence, enter '{}'. To exit, type '{}'.",
        RESET_COMMAND, EXIT_COMMAND
    );

    let mut input = String::new();
    loop {
        print!("{}", current_query.as_str().dark_grey());
        stdout().flush()?;

        input.clear();
        if stdin().read_line(&mut input)? == 0 {
            break; // EOF
        }
        let typed = input.trim_end_matches(['\n', '\r']);

        if typed.eq_ignore_ascii_case(EXIT_COMMAND) {
            break;
        }
        if typed == RESET_COMMAND {
            current_query.clear();
            continue;
        }
        current_query.push_str(typed);

        let results = engine.complete(&current_query, &mut rng);
        print_results(&results, json)?;
    }
    Ok(())
}

fn print_results(results: &[CompletionResult], json: bool) -> io::Result<()> {
    let mut out = stdout().lock();
    if results.is_empty() {
        writeln!(out, "{}", "No completions found.".italic())?;
    }
    for (i, result) in results.iter().enumerate() {
        if json {
            let line = serde_json::to_string(result).map_err(io::Error::from)?;
            writeln!(out, "{}", line)?;
        } else {
            writeln!(out, "{}{}", format!("({})", i + 1).cyan(), result)?;
        }
    }
    out.flush()
}
