use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use env_logger::Builder;
use log::LevelFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(
    name = "birads",
    version,
    about = "BI-RADS decision support for mammography findings",
    long_about = "birads maps a structured mammography observation to an ACR BI-RADS\n\
        assessment category with an explanation, a management recommendation\n\
        and a literature reference.\n\n\
        Observations are JSON documents, for example:\n\
        \n  {\"exam_complete\": true, \"finding_types\": [\"Mass\"],\n\
        \n   \"shape\": \"Irregular\", \"margin\": \"Spiculated\"}\n\n\
        EXAMPLES:\n\
        \n  birads classify exam.json              Print a result card\n\
        \n  birads json exam.json                  Print a JSON report with the rule trace\n\
        \n  cat exam.json | birads validate        Check an observation from stdin\n\
        \n  birads options                         List findings and offered options",
    after_help = "Decision support only; the reader remains responsible for the final assessment."
)]
struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Directory holding example images (default: $BIRADS_IMAGE_ROOT or "images")
    #[arg(long = "image-root", value_name = "DIR", global = true)]
    image_root: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Classify an observation and print a result card
    #[command(
        about = "Classify an observation and print a result card",
        long_about = "Validates and classifies an observation document.\n\n\
            Reads from the specified file or stdin if no file is given.\n\
            Exits with 1 if the observation is inconsistent, 2 if it cannot be read."
    )]
    Classify(InputArgs),

    /// Classify an observation and print a JSON report
    #[command(about = "Classify an observation and print a JSON report with the rule trace")]
    Json(InputArgs),

    /// Check an observation without classifying it
    #[command(about = "Check an observation for structural consistency")]
    Validate(InputArgs),

    /// List the finding vocabulary
    #[command(about = "List finding types and the options offered for each")]
    Options,
}

#[derive(Debug, Args, Clone)]
struct InputArgs {
    /// Observation JSON file (reads from stdin if not provided)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    // RUST_LOG is parsed after the flag so it can still narrow or widen output.
    let _ = Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init();
}

fn resolve_image_root(flag: Option<PathBuf>) -> PathBuf {
    flag.or_else(|| std::env::var_os("BIRADS_IMAGE_ROOT").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(birads::DEFAULT_IMAGE_ROOT))
}

fn read_source_from_input(input: &Option<PathBuf>) -> Result<String, String> {
    if let Some(path) = input {
        fs::read_to_string(path).map_err(|e| format!("failed to read '{}': {e}", path.display()))
    } else {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| format!("failed to read from stdin: {e}"))?;
        Ok(buf)
    }
}

fn run_assess(source: &str, mode: OutputMode, image_root: &Path) -> i32 {
    let report = match birads::assess_json(source) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("error: {e}");
            return e.exit_code();
        }
    };
    log::info!(
        "{} decided by {}",
        report.result.category,
        report
            .deciding_rule
            .map(|rule| rule.name())
            .unwrap_or("no rule")
    );
    match mode {
        OutputMode::Text => {
            print!("{}", birads::render_text(&report.result, image_root));
            0
        }
        OutputMode::Json => match serde_json::to_string_pretty(&report) {
            Ok(json) => {
                println!("{json}");
                0
            }
            Err(e) => {
                eprintln!("error: failed to serialize JSON: {e}");
                2
            }
        },
    }
}

fn run_validate(source: &str) -> i32 {
    let draft = match birads::parse_draft(source) {
        Ok(draft) => draft,
        Err(e) => {
            eprintln!("error: invalid observation JSON: {e}");
            return 2;
        }
    };
    match draft.validate() {
        Ok(obs) => {
            let findings: Vec<&str> = obs.finding_types().iter().map(|f| f.label()).collect();
            if findings.is_empty() {
                println!("ok: no findings");
            } else {
                println!("ok: {}", findings.join(", "));
            }
            0
        }
        Err(e) => {
            eprintln!("error: invalid observation: {e}");
            1
        }
    }
}

fn run_cli() -> i32 {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let image_root = resolve_image_root(cli.image_root);

    let (args, action) = match cli.command {
        Command::Options => {
            print!("{}", birads::render_options());
            return 0;
        }
        Command::Classify(args) => (args, Some(OutputMode::Text)),
        Command::Json(args) => (args, Some(OutputMode::Json)),
        Command::Validate(args) => (args, None),
    };
    let source = match read_source_from_input(&args.input) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return 2;
        }
    };
    match action {
        Some(mode) => run_assess(&source, mode, &image_root),
        None => run_validate(&source),
    }
}

fn main() {
    std::process::exit(run_cli());
}
