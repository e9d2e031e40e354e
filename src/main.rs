//! GestureText CLI
//!
//! Usage:
//!   gesturetext --frame '{"hands": [[...21 points...]]}'   # Single frame
//!   gesturetext --interactive                             # JSON lines from stdin
//!   gesturetext --replay frames.jsonl                     # Replay a recorded stream
//!   gesturetext --serve                                   # HTTP API server
//!   gesturetext --list-gestures --mode numbers            # Gesture guide

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use tracing::warn;

use gesturetext::core::{run_server, supported_gestures, GestureSession};
use gesturetext::types::{FrameInput, HandFeatures, RuleSet, StabilizerConfig};
use gesturetext::VERSION;

#[derive(Parser, Debug)]
#[command(
    name = "gesturetext",
    version = VERSION,
    about = "GestureText - Turn hand landmarks into gesture labels and stable words",
    long_about = "GestureText classifies 21-point hand landmarks with a fixed geometric\n\
                  rule cascade and debounces the per-frame labels into display words.\n\n\
                  Input frames are JSON: {\"hands\": [[{\"x\":..,\"y\":..,\"z\":..}, ...]]}\n\
                  with exactly 21 points per hand, one frame per line.\n\n\
                  Modes:\n  \
                  alphabet  ASL letters + counting gestures (threshold 0.82, history 10)\n  \
                  numbers   Counting gestures only (threshold 0.7, history 5)"
)]
struct Args {
    /// Single frame to classify (JSON)
    #[arg(short, long)]
    frame: Option<String>,

    /// Interactive mode - read JSON frames line by line from stdin
    #[arg(short, long)]
    interactive: bool,

    /// Replay a JSON-lines file of frames through one session
    #[arg(short, long)]
    replay: Option<String>,

    /// Run as HTTP API server
    #[arg(short, long)]
    serve: bool,

    /// Server address (default: 127.0.0.1:3000)
    #[arg(long, default_value = "127.0.0.1:3000")]
    addr: String,

    /// Rule set: alphabet or numbers
    #[arg(short, long, default_value = "alphabet")]
    mode: RuleSet,

    /// Override the acceptance threshold
    #[arg(long)]
    threshold: Option<f32>,

    /// Override the history capacity
    #[arg(long)]
    history: Option<usize>,

    /// Print the supported gestures and exit
    #[arg(long)]
    list_gestures: bool,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Show finger state breakdown
    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gesturetext=info".into()),
        )
        .with_writer(io::stderr)
        .init();

    if args.no_color {
        colored::control::set_override(false);
    }

    let config = StabilizerConfig::with_overrides(args.mode, args.threshold, args.history)?;

    if args.list_gestures {
        print_gesture_guide(args.mode);
    } else if args.serve {
        run_serve(&args, config).await;
    } else if let Some(ref path) = args.replay {
        run_replay(path, &args, config)?;
    } else if let Some(ref frame) = args.frame {
        run_single(frame, &args, config)?;
    } else {
        // Default to interactive if no mode specified
        run_interactive(&args, config)?;
    }

    Ok(())
}

/// Classify a single frame
fn run_single(frame: &str, args: &Args, config: StabilizerConfig) -> Result<()> {
    let frame: FrameInput = serde_json::from_str(frame).context("invalid frame JSON")?;
    let mut session = GestureSession::new(args.mode, config);

    process_frame(&mut session, frame, args)?;
    Ok(())
}

/// Interactive mode: one JSON frame per stdin line
fn run_interactive(args: &Args, config: StabilizerConfig) -> Result<()> {
    let mut session = GestureSession::new(args.mode, config);

    print_header(args.mode, config);
    println!("Paste one JSON frame per line. Commands: 'stop', 'start', 'quit'.");
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("{}", format_prompt(&session));
        stdout.flush()?;

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(_) => break,
        }

        let line = line.trim();
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            println!("\nSession ended. Frames: {}", session.frame_count());
            break;
        }
        if line.eq_ignore_ascii_case("stop") {
            session.stop();
            continue;
        }
        if line.eq_ignore_ascii_case("start") {
            session.start();
            continue;
        }
        if line.is_empty() {
            continue;
        }

        let frame: FrameInput = match serde_json::from_str(line) {
            Ok(frame) => frame,
            Err(e) => {
                warn!(error = %e, "skipping unparseable frame");
                continue;
            }
        };

        if let Err(e) = process_frame(&mut session, frame, args) {
            warn!(error = %e, "skipping malformed frame");
        }
    }

    Ok(())
}

/// Replay a recorded JSON-lines stream through one session
fn run_replay(path: &str, args: &Args, config: StabilizerConfig) -> Result<()> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read replay file {}", path))?;
    let mut session = GestureSession::new(args.mode, config);

    for (n, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let frame: FrameInput = serde_json::from_str(line)
            .with_context(|| format!("{}:{}: invalid frame JSON", path, n + 1))?;
        process_frame(&mut session, frame, args)
            .with_context(|| format!("{}:{}: rejected frame", path, n + 1))?;
    }

    if !args.json {
        println!();
        println!(
            "Replayed {} frames, {} words accepted: {}",
            session.frame_count(),
            session.accepted_count(),
            session.display().history.iter().cloned().collect::<Vec<_>>().join(" ")
        );
    }
    Ok(())
}

/// Validate, classify and stabilize one frame, printing the result
fn process_frame(session: &mut GestureSession, frame: FrameInput, args: &Args) -> Result<()> {
    let hands = frame.into_hands()?;
    let output = session.process(&hands);

    if args.json {
        println!("{}", serde_json::to_string(&output)?);
        return Ok(());
    }

    if args.verbose {
        if let Some(hand) = hands.first() {
            print_features(&HandFeatures::from_landmarks(hand));
        }
    }

    if args.no_color {
        println!("{}", output.to_parseable_string());
    } else {
        println!("{}", output.to_terminal_string());
    }
    Ok(())
}

/// Print header
fn print_header(mode: RuleSet, config: StabilizerConfig) {
    println!("{}", "╔════════════════════════════════════════════╗".bold());
    println!("{}", format!("║  GestureText v{} - {:<10}               ║", VERSION, mode.as_str()).bold());
    println!("{}", "╚════════════════════════════════════════════╝".bold());
    println!(
        "threshold > {:.2} | history {} words",
        config.threshold, config.capacity
    );
    println!();
}

/// Prompt showing the word on display
fn format_prompt(session: &GestureSession) -> String {
    let word = &session.display().current_word;
    if !session.is_active() {
        format!("{} > ", "[stopped]".dimmed())
    } else if word.is_empty() {
        "[ ] > ".to_string()
    } else {
        format!("[{}] > ", word.cyan())
    }
}

/// Print verbose finger breakdown
fn print_features(features: &HandFeatures) {
    println!("┌──────────────────────────────────────┐");
    println!(
        "│ thumb={} index={} middle={} ring={} pinky={}",
        features.thumb.tag(),
        features.index.tag(),
        features.middle.tag(),
        features.ring.tag(),
        features.pinky.tag()
    );
    println!("│ fingers up: {}", features.fingers_up);
    println!(
        "│ thumb-index: {:.3} | thumb-middle: {:.3}",
        features.thumb_index_distance, features.thumb_middle_distance
    );
    println!(
        "│ index rise: {:.3} | thumb-index dx: {:.3} | index-middle dx: {:.3}",
        features.index_rise, features.thumb_index_spread, features.index_middle_spread
    );
    println!("└──────────────────────────────────────┘");
}

/// Print the supported gestures for a rule set
fn print_gesture_guide(mode: RuleSet) {
    println!("{}", format!("Supported gestures ({})", mode).bold());
    for (label, confidence) in supported_gestures(mode) {
        println!(
            "  {:<3} {:<10} {:<6} {:>3}%",
            label.glyph(),
            label.as_str(),
            label.display_word().unwrap_or("").green(),
            (confidence * 100.0).round() as u32
        );
    }
}

/// Run HTTP API server
async fn run_serve(args: &Args, config: StabilizerConfig) {
    println!();
    println!("GestureText API v{} ({} mode)", VERSION, args.mode);
    println!(
        "new sessions: threshold > {:.2} | history {} words",
        config.threshold, config.capacity
    );
    println!();

    if let Err(e) = run_server(&args.addr, args.mode, config).await {
        eprintln!("Server error: {}", e);
        std::process::exit(1);
    }
}
