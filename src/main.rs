//! Word Trie - Main entrypoint.
//!
//! Loads configuration and word lists, then answers completion queries from
//! the command line. Logs go to standard error so standard output only
//! carries completions.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::info;
use word_trie_lib::config::completion::OutputFormat;
use word_trie_lib::config::{self, ConfigLoader, LogConfig, WordTrieConfig};
use word_trie_lib::data_structures::{DictionaryLoader, WordTrie};
use word_trie_lib::error::{
    report_error, set_error_reporter, ErrorContext, TracingErrorReporter, WordTrieError,
    WordTrieResult,
};

/// Command line arguments for Word Trie.
#[derive(Parser, Debug)]
#[clap(name = "word_trie", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Extra word list files, loaded after the configured ones
    #[clap(short, long = "words", value_parser)]
    words: Vec<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Print every loaded word starting with a prefix
    Complete {
        /// Prefix to complete (empty lists every word)
        #[clap(default_value = "")]
        prefix: String,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_logging(log: &LogConfig) -> WordTrieResult<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_file(log.source_location)
        .with_line_number(log.source_location);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| WordTrieError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Builds a trie from the configured and extra word lists and prints the
/// completions of `prefix`.
fn complete(config: &WordTrieConfig, extra_words: &[PathBuf], prefix: &str) -> WordTrieResult<()> {
    let mut trie = WordTrie::new();
    let loader = DictionaryLoader::with_config(&config.dictionary);

    let paths = config.dictionary.paths.iter().chain(extra_words.iter());
    let loaded = loader.load_files(&mut trie, paths)?;
    info!(words = loaded, nodes = trie.node_count(), "Dictionary ready");

    let completions = config.completion.apply_limit(trie.find_completions(prefix));

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match config.completion.output {
        OutputFormat::Plain => {
            for completion in &completions {
                writeln!(out, "{completion}")?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut out, &completions)?;
            writeln!(out)?;
        }
    }

    Ok(())
}

/// Writes the default configuration as TOML to `output`.
fn gen_config(output: &Path) -> WordTrieResult<()> {
    info!("Generating default configuration");
    let default_config = WordTrieConfig::default();

    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let toml = toml::to_string_pretty(&default_config)
        .map_err(|e| WordTrieError::Custom(format!("Failed to serialize config: {e}")))?;

    std::fs::write(output, toml)?;

    info!("Default configuration written to {:?}", output);
    Ok(())
}

fn run(args: Args) -> WordTrieResult<()> {
    let config_loader = ConfigLoader::new(args.config.as_deref(), config::ENV_PREFIX);
    let loaded = config_loader.load();

    // Configuration errors are still logged with the default settings.
    let log_config = loaded
        .as_ref()
        .map(|config| config.log.clone())
        .unwrap_or_default();
    init_logging(&log_config)?;
    set_error_reporter(Arc::new(TracingErrorReporter));

    match args.command {
        Command::Complete { prefix } => {
            let config = loaded?;
            complete(&config, &args.words, &prefix)
        }
        Command::Validate => {
            loaded?;
            info!("Configuration validated successfully");
            Ok(())
        }
        Command::GenConfig { output } => gen_config(&output),
    }
}

/// Main entry point for the application.
fn main() {
    let args = <Args as clap::Parser>::parse();
    let command = format!("{:?}", args.command);

    if let Err(e) = run(args) {
        report_error(ErrorContext::new(e, "word_trie").with_details(format!("command: {command}")));
        process::exit(1);
    }
}
