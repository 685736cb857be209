//! tamil-drill CLI
//!
//! Interactive flashcard drill for Tamil script, plus a stateless
//! request/response mode that hands the deck state through a file.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;

use tamil_drill::corpus::corpus_for;
use tamil_drill::deck::{Corpora, DeckSession};
use tamil_drill::logging::{self, LogTarget};
use tamil_drill::report::{format_corpus, format_snapshot};
use tamil_drill::session_store::{clear_state, load_state, resolve_state_path, save_state};
use tamil_drill::tui;
use tamil_drill::types::{DrillConfig, Mode, OutputFormat, StateConfig};

#[derive(Parser)]
#[command(name = "tamil-drill")]
#[command(about = "Flashcard drill for Tamil script glyphs and words")]
#[command(version)]
struct Cli {
    /// Write logs to this file (the interactive drill logs nowhere otherwise)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive drill
    Drill {
        /// Deck to start with
        #[arg(long, value_enum, default_value = "characters")]
        mode: ModeArg,

        /// Fixed shuffle seed, for a reproducible deck
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print a whole deck in table order
    List {
        #[arg(long, value_enum, default_value = "characters")]
        mode: ModeArg,

        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },

    /// Print the current card (starts a session if none is saved)
    Show(StateArgs),

    /// Reveal the current card's pronunciation
    Reveal(StateArgs),

    /// Draw the next card
    Next(StateArgs),

    /// Switch to another deck
    Switch {
        #[arg(value_enum)]
        mode: ModeArg,

        #[command(flatten)]
        state: StateArgs,
    },

    /// Discard saved state and start a fresh deck
    Reset {
        #[arg(long, value_enum, default_value = "characters")]
        mode: ModeArg,

        #[command(flatten)]
        state: StateArgs,
    },
}

#[derive(clap::Args)]
struct StateArgs {
    /// State file (default: data dir)
    #[arg(long)]
    state: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "human")]
    format: OutputFormatArg,

    /// Fixed shuffle seed for any reshuffle this request performs
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum ModeArg {
    Characters,
    Words,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Characters => Mode::Characters,
            ModeArg::Words => Mode::Words,
        }
    }
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

/// One deck operation applied per stateless request.
#[derive(Clone, Copy)]
enum Request {
    Show,
    Reveal,
    Next,
    Switch(Mode),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let interactive = matches!(cli.command, Commands::Drill { .. });
    let target = match (&cli.log_file, interactive) {
        (Some(path), _) => LogTarget::File(path.as_path()),
        (None, true) => LogTarget::Off,
        (None, false) => LogTarget::Stderr,
    };
    if let Err(e) = logging::init(target) {
        eprintln!("Error: cannot open log file: {}", e);
        return ExitCode::FAILURE;
    }

    let result = match cli.command {
        Commands::Drill { mode, seed } => cmd_drill(mode.into(), seed),
        Commands::List { mode, format } => cmd_list(mode.into(), format.into()),
        Commands::Show(args) => cmd_request(Request::Show, &args),
        Commands::Reveal(args) => cmd_request(Request::Reveal, &args),
        Commands::Next(args) => cmd_request(Request::Next, &args),
        Commands::Switch { mode, state } => cmd_request(Request::Switch(mode.into()), &state),
        Commands::Reset { mode, state } => cmd_reset(mode.into(), &state),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// HELPERS
// ============================================================================

fn state_path(args: &StateArgs) -> PathBuf {
    let config = StateConfig {
        state_path: args.state.clone().unwrap_or_default(),
    };
    resolve_state_path(&config)
}

fn rng_for(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Load the saved session, or start a fresh characters deck.
fn load_or_start(path: &Path, seed: Option<u64>) -> Result<DeckSession, String> {
    let rng = rng_for(seed);
    match load_state(path).map_err(|e| e.to_string())? {
        Some(state) => {
            DeckSession::from_state(state, Corpora::default(), rng).map_err(|e| e.to_string())
        }
        None => {
            let (session, started) = DeckSession::with_rng(Mode::default(), rng);
            started.map_err(|e| e.to_string())?;
            Ok(session)
        }
    }
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

fn cmd_drill(mode: Mode, seed: Option<u64>) -> Result<(), String> {
    let config = DrillConfig { mode, seed };
    tui::run(&config).map_err(|e| e.to_string())
}

fn cmd_list(mode: Mode, format: OutputFormat) -> Result<(), String> {
    print!("{}", format_corpus(mode, corpus_for(mode), format));
    Ok(())
}

fn cmd_request(request: Request, args: &StateArgs) -> Result<(), String> {
    let path = state_path(args);
    let mut session = load_or_start(&path, args.seed)?;

    let outcome = match request {
        Request::Show => session.ensure_ready(),
        Request::Reveal => {
            session.reveal();
            session.ensure_ready()
        }
        Request::Next => session.next().map(|_| ()),
        Request::Switch(mode) => session.switch_mode(mode),
    };

    // Persist even on failure: an empty deck is still a valid state
    save_state(&session.to_state(), &path).map_err(|e| e.to_string())?;
    println!("{}", format_snapshot(&session.snapshot(), args.format.into()).trim_end());

    outcome.map_err(|e| e.to_string())
}

fn cmd_reset(mode: Mode, args: &StateArgs) -> Result<(), String> {
    let path = state_path(args);
    clear_state(&path).map_err(|e| e.to_string())?;

    let (session, started) = DeckSession::with_rng(mode, rng_for(args.seed));
    save_state(&session.to_state(), &path).map_err(|e| e.to_string())?;
    println!("{}", format_snapshot(&session.snapshot(), args.format.into()).trim_end());

    started.map_err(|e| e.to_string())
}
