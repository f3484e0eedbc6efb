//! `slotpaste` CLI: copy, paste and edit an availability schedule as compact text.
//!
//! The host is a JSON snapshot file holding the slot times, the per-slot
//! availability lists and the signed-in user:
//!
//! ```json
//! {"timeOfSlot":[1767600000,1767600900],"availableAtSlot":[[7],[]],"userId":7}
//! ```
//!
//! ## Usage
//!
//! ```sh
//! # Print the signed-in user's schedule text
//! slotpaste export --host meeting.json
//!
//! # Apply schedule text (stdin or file) to the signed-in user
//! slotpaste export --host monday.json | slotpaste import --host tuesday.json
//!
//! # Interactive: show the text, read the edited line back, save on success
//! slotpaste edit --host meeting.json
//!
//! # Describe schedule text in local time
//! slotpaste show --tz Europe/Berlin -i schedule.txt
//!
//! # Compare layouts against the size limit
//! slotpaste stats --host meeting.json
//! ```

use std::io::{self, BufRead, Read, Write};
use std::process;

use anyhow::{anyhow, Context, Result};
use chrono_tz::Tz;
use clap::{Parser, Subcommand};
use slotpaste_codec::{CodecConfig, Strategy};
use slotpaste_engine::{
    describe, export_text, import_text, read_current, run_session, Editor, Host, MemoryHost,
    Outcome, SessionConfig,
};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

#[derive(Parser)]
#[command(
    name = "slotpaste",
    version,
    about = "Copy, paste and edit availability schedules as compact text"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON config file (`step`, `strategy`, `max_chars`, `prompt`)
    #[arg(long, global = true)]
    config: Option<String>,

    /// Slot length in seconds
    #[arg(long, global = true)]
    step: Option<i64>,

    /// Output layout: interval-run or delta-list
    #[arg(long, global = true)]
    strategy: Option<Strategy>,

    /// Maximum schedule text length in characters
    #[arg(long, global = true, conflicts_with = "no_limit")]
    max_chars: Option<usize>,

    /// Disable the schedule text length limit
    #[arg(long, global = true)]
    no_limit: bool,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the signed-in user's schedule text
    Export {
        /// Host snapshot file
        #[arg(long)]
        host: String,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Apply schedule text to the signed-in user and save the host file
    Import {
        /// Host snapshot file
        #[arg(long)]
        host: String,
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Show the schedule text, read the edited line from stdin, save on success
    Edit {
        /// Host snapshot file
        #[arg(long)]
        host: String,
    },
    /// Describe schedule text as runs of slots in local time
    Show {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// IANA time zone for displayed times
        #[arg(long, default_value = "UTC")]
        tz: String,
    },
    /// Show schedule text sizes for both layouts
    Stats {
        /// Host snapshot file
        #[arg(long)]
        host: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;
    let config = load_config(&cli)?;

    match cli.command {
        Commands::Export { host, output } => {
            let snapshot = load_host(&host)?;
            let text = export_text(&snapshot, &config).context("Failed to export schedule")?;
            write_output(output.as_deref(), &text)?;
        }
        Commands::Import { host, input } => {
            let mut snapshot = load_host(&host)?;
            let text = read_input(input.as_deref())?;
            let summary =
                import_text(&mut snapshot, &text).context("Failed to import schedule")?;
            save_host(&host, &snapshot)?;
            eprintln!(
                "Schedule saved: {} slot(s) marked available, {} marked unavailable, {} unrecognised.",
                summary.added, summary.removed, summary.ignored
            );
        }
        Commands::Edit { host } => {
            let mut snapshot = load_host(&host)?;
            let outcome = run_session(&mut snapshot, &mut StdinEditor, &config);
            if outcome.is_applied() {
                save_host(&host, &snapshot)?;
            }
            eprintln!("{}", outcome.message());
            process::exit(exit_status(&outcome));
        }
        Commands::Show { input, tz } => {
            let zone: Tz = tz
                .parse()
                .map_err(|_| anyhow!("Unknown time zone: '{}'", tz))?;
            let text = read_input(input.as_deref())?;
            let schedule = slotpaste_codec::parse(&text).context("Failed to parse schedule")?;
            for row in describe(&schedule, zone).context("Failed to describe schedule")? {
                println!("{}", row);
            }
        }
        Commands::Stats { host } => {
            let snapshot = load_host(&host)?;
            let subject = snapshot.current_subject();
            let map = read_current(&snapshot, subject.as_ref());
            println!("Slots:       {} ({} available)", map.len(), map.available_count());
            for strategy in [Strategy::IntervalRun, Strategy::DeltaList] {
                let unlimited = CodecConfig {
                    strategy,
                    max_chars: None,
                    ..config.codec.clone()
                };
                match slotpaste_codec::encode(&map, &unlimited) {
                    Ok(text) => println!("{:<12} {} chars", format!("{}:", strategy), text.chars().count()),
                    Err(e) => println!("{:<12} unavailable ({})", format!("{}:", strategy), e),
                }
            }
            match config.codec.max_chars {
                Some(limit) => println!("Limit:       {} chars", limit),
                None => println!("Limit:       none"),
            }
        }
    }

    Ok(())
}

/// Presents the schedule on stderr and reads one edited line from stdin.
/// End of input or an empty line cancels.
struct StdinEditor;

impl Editor for StdinEditor {
    fn present(&mut self, prompt: &str, prefill: &str) -> Option<String> {
        let mut stderr = io::stderr();
        let _ = writeln!(stderr, "{}", prompt);
        let _ = writeln!(stderr, "{}", prefill);
        let _ = stderr.flush();

        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read edited schedule");
                None
            }
        }
    }
}

/// Process exit status for an edit session.
fn exit_status(outcome: &Outcome) -> i32 {
    match outcome {
        Outcome::Applied(_) | Outcome::Cancelled => 0,
        Outcome::Rejected(_) => 1,
        Outcome::NoSubject | Outcome::SizeExceeded(_) => 2,
    }
}

fn init_tracing(verbose: u8) -> Result<()> {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .with_filter(filter),
        )
        .try_init()
        .context("Failed to initialize logging")
}

/// Config file (if any), then command-line overrides.
fn load_config(cli: &Cli) -> Result<SessionConfig> {
    let mut config = match cli.config.as_deref() {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path))?;
            SessionConfig::from_json(&raw)
                .with_context(|| format!("Invalid config file: {}", path))?
        }
        None => SessionConfig::default(),
    };

    if let Some(step) = cli.step {
        config.codec.step = step;
    }
    if let Some(strategy) = cli.strategy {
        config.codec.strategy = strategy;
    }
    if let Some(max_chars) = cli.max_chars {
        config.codec.max_chars = Some(max_chars);
    }
    if cli.no_limit {
        config.codec.max_chars = None;
    }
    config.validate()?;
    Ok(config)
}

fn load_host(path: &str) -> Result<MemoryHost> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read host file: {}", path))?;
    MemoryHost::from_json(&raw).with_context(|| format!("Invalid host file: {}", path))
}

fn save_host(path: &str, host: &MemoryHost) -> Result<()> {
    let json = host.to_json_pretty()?;
    std::fs::write(path, json).with_context(|| format!("Failed to write host file: {}", path))
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
