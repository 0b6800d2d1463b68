use clap::{Parser, Subcommand};
use colored::*;
use std::path::{Path, PathBuf};

/// Environment variable supplying the default `--log-path`.
const LOG_PATH_ENV: &str = "USERLINT_LOG_PATH";

#[derive(Debug, Parser)]
#[command(
    name = "userlint",
    about = "User list validator and bench scorer",
    version,
    long_about = "Validates JSON user lists and scores bench runs.\n\nExamples:\n  userlint validate users.json                    # Print valid users, log errors to errors.log beside the input\n  userlint validate users.json --log-path out.log # Log errors somewhere else\n  userlint score                                  # Score pytest_output.txt with default grades\n  userlint score run.txt 2 1                      # Score run.txt with manual grades"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Run in verbose mode with detailed output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Run in debug mode with extensive details
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate a JSON list of user records
    Validate {
        /// Path to the JSON document
        path: PathBuf,

        /// Where to append error lines (defaults to errors.log next to the input)
        #[arg(short, long)]
        log_path: Option<PathBuf>,

        /// Pretty-print the valid records
        #[arg(long, default_value_t = false)]
        pretty: bool,
    },

    /// Compute a bench score from captured test output
    Score {
        /// Captured test-run output
        #[arg(default_value = score::DEFAULT_OUTPUT_PATH)]
        output: PathBuf,

        /// Manual code quality grade (0-3)
        #[arg(
            default_value_t = score::DEFAULT_CODE_QUALITY,
            value_parser = score::parse_grade,
            allow_negative_numbers = true
        )]
        code_quality: i64,

        /// Manual I/O reliability grade (0-2)
        #[arg(
            default_value_t = score::DEFAULT_IO_RELIABILITY,
            value_parser = score::parse_grade,
            allow_negative_numbers = true
        )]
        io_reliability: i64,
    },
}

fn resolve_log_path(flag: Option<&PathBuf>) -> Option<PathBuf> {
    flag.cloned().or_else(|| {
        std::env::var(LOG_PATH_ENV)
            .ok()
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
    })
}

fn run_validate(path: &Path, log_path: Option<PathBuf>, pretty: bool) {
    let effective_log = log_path
        .clone()
        .unwrap_or_else(|| evaluator::default_log_path(path));

    let users = match evaluator::load_valid_users(path, log_path.as_deref()) {
        Ok(users) => users,
        Err(e) => {
            logging::error(&format!("Validation could not run: {}", e));
            std::process::exit(1);
        }
    };

    let rendered = if pretty {
        serde_json::to_string_pretty(&users)
    } else {
        serde_json::to_string(&users)
    };
    match rendered {
        Ok(json) => println!("{}", json),
        Err(e) => {
            logging::error(&format!("Failed to render users: {}", e));
            std::process::exit(1);
        }
    }

    eprintln!(
        "{} {} valid user(s) from {} (errors appended to {})",
        "✓".green(),
        users.len(),
        path.display(),
        effective_log.display()
    );
}

fn run_score(output: &Path, code_quality: i64, io_reliability: i64) {
    let card = match score::score_output(output, code_quality, io_reliability) {
        Ok(card) => card,
        Err(e) => {
            logging::warning(&format!("{}, scoring as empty output", e));
            score::ScoreCard::compute(0, code_quality, io_reliability)
        }
    };

    if let Err(e) = score::write_score(&card, Path::new(score::RESULT_FILE)) {
        logging::warning(&e.to_string());
    }

    match card.to_compact_json() {
        Ok(json) => println!("{}", json),
        Err(e) => logging::warning(&e.to_string()),
    }
}

fn main() {
    let cli = Cli::parse();

    if cli.debug {
        logging::set_log_level(logging::LogLevel::Debug);
        logging::debug("Debug mode enabled - showing detailed logs");
    } else if cli.verbose {
        logging::set_log_level(logging::LogLevel::Info);
        logging::info("Verbose mode enabled");
    } else {
        logging::set_log_level(logging::LogLevel::Warning);
    }

    match &cli.command {
        Commands::Validate {
            path,
            log_path,
            pretty,
        } => run_validate(path, resolve_log_path(log_path.as_ref()), *pretty),

        // Scoring always exits 0
        Commands::Score {
            output,
            code_quality,
            io_reliability,
        } => run_score(output, *code_quality, *io_reliability),
    }
}
