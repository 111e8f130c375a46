// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{error, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use vocabman::app_config::{self, Config};
use vocabman::app_controller::{Controller, DictionaryCommand};

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List available dictionaries
    List,

    /// Create a new dictionary (e.g. 'English-Ukrainian')
    Create {
        /// Language pair written as From-To
        #[arg(value_name = "FROM-TO")]
        type_spec: String,
    },

    /// Print every word of a dictionary with its translations
    Show {
        dictionary: String,
    },

    /// Print the translations of a word
    Get {
        dictionary: String,
        word: String,
    },

    /// Look a word up, reporting when nothing is found
    Search {
        dictionary: String,
        word: String,
    },

    /// Add a new word with its translations (replaces an existing word)
    Add {
        dictionary: String,
        word: String,
        /// One or more translations
        #[arg(required = true, num_args = 1..)]
        translations: Vec<String>,
    },

    /// Add a translation to an existing word
    Append {
        dictionary: String,
        word: String,
        translation: String,
    },

    /// Change an existing word, keeping its translations
    Rename {
        dictionary: String,
        old_word: String,
        new_word: String,
    },

    /// Change an existing translation of a word
    Replace {
        dictionary: String,
        word: String,
        old_translation: String,
        new_translation: String,
    },

    /// Delete a word with all its translations
    Remove {
        dictionary: String,
        word: String,
    },

    /// Delete one translation of a word
    RemoveTranslation {
        dictionary: String,
        word: String,
        translation: String,
    },

    /// Export a word and its translations to <export dir>/<NAME>.json
    Export {
        dictionary: String,
        word: String,
        name: String,
    },

    /// Generate shell completions for vocabman
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Commands {
    // @returns: Library command, or None for commands handled by the CLI itself
    fn into_dictionary_command(self) -> Option<DictionaryCommand> {
        let command = match self {
            Commands::List => DictionaryCommand::List,
            Commands::Create { type_spec } => DictionaryCommand::Create { type_spec },
            Commands::Show { dictionary } => DictionaryCommand::Show { dictionary },
            Commands::Get { dictionary, word } => DictionaryCommand::Get { dictionary, word },
            Commands::Search { dictionary, word } => DictionaryCommand::Search { dictionary, word },
            Commands::Add { dictionary, word, translations } => {
                DictionaryCommand::Add { dictionary, word, translations }
            }
            Commands::Append { dictionary, word, translation } => {
                DictionaryCommand::Append { dictionary, word, translation }
            }
            Commands::Rename { dictionary, old_word, new_word } => {
                DictionaryCommand::Rename { dictionary, old_word, new_word }
            }
            Commands::Replace { dictionary, word, old_translation, new_translation } => {
                DictionaryCommand::Replace { dictionary, word, old_translation, new_translation }
            }
            Commands::Remove { dictionary, word } => DictionaryCommand::Remove { dictionary, word },
            Commands::RemoveTranslation { dictionary, word, translation } => {
                DictionaryCommand::RemoveTranslation { dictionary, word, translation }
            }
            Commands::Export { dictionary, word, name } => {
                DictionaryCommand::Export { dictionary, word, name }
            }
            Commands::Completions { .. } => return None,
        };
        Some(command)
    }
}

/// vocabman - personal vocabulary manager
///
/// Keeps words and their translations per language pair as JSON files.
#[derive(Parser, Debug)]
#[command(name = "vocabman")]
#[command(version)]
#[command(about = "Personal vocabulary manager")]
#[command(long_about = "vocabman keeps one dictionary per language pair and maps each word to a list of translations.

EXAMPLES:
    vocabman create English-French                 # Create a dictionary
    vocabman add English-French cat chat           # Add a word
    vocabman append English-French cat minou       # Add another translation
    vocabman get English-French cat                # Show translations
    vocabman export English-French cat catexport   # Export a single pair
    vocabman completions bash > vocabman.bash      # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config. If the config file doesn't exist, a default one
    will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json", global = true)]
    config_path: PathBuf,

    /// Root directory for dictionaries and exports (overrides the config)
    #[arg(short, long, global = true)]
    root: Option<PathBuf>,

    /// Set logging level
    #[arg(short, long, value_enum, global = true)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(LevelFilter::Trace));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "1;31",
            Level::Warn => "1;33",
            Level::Info => "1;32",
            Level::Debug => "1;36",
            Level::Trace => "1;35",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {:<5} {}\x1B[0m",
                color,
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> ExitCode {
    // Initialize the logger once with info level by default
    // The level is updated after loading the config
    if let Err(e) = CustomLogger::init(LevelFilter::Info) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    let cli = CommandLineOptions::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: CommandLineOptions) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(level) = &cli.log_level {
        let level: app_config::LogLevel = level.clone().into();
        log::set_max_level(level.to_level_filter());
    }

    // Completions never touch the dictionaries
    if let Commands::Completions { shell } = cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(shell, &mut cmd, "vocabman", &mut std::io::stdout());
        return Ok(());
    }

    let Some(command) = cli.command.into_dictionary_command() else {
        return Ok(());
    };

    let mut config = Config::load_or_create(&cli.config_path)?;

    // Override config with CLI options if provided
    if let Some(root) = cli.root {
        config.root_dir = root;
    }
    match cli.log_level {
        Some(level) => config.log_level = level.into(),
        None => log::set_max_level(config.log_level.to_level_filter()),
    }

    let mut controller = Controller::with_config(config)?;
    let output = controller.run(command)?;
    println!("{}", output);

    Ok(())
}
