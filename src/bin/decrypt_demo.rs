//! `decrypt_demo` - play a decrypt animation in the terminal
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin decrypt_demo -- "ACCESS GRANTED"
//! cargo run --bin decrypt_demo -- --direction center --speed 40 "Hello, world"
//! cargo run --bin decrypt_demo -- --iterative --max-iterations 30 "noise"
//! cargo run --bin decrypt_demo -- --headless --seed 7 "deterministic"
//! ```

use decrypt_text::ansi::{self, CURSOR_HIDE, CURSOR_SHOW};
use decrypt_text::terminal::{clip_to_width, is_tty, terminal_size};
use decrypt_text::{
    DecryptOptions, DecryptedText, DisplayFrame, LogLevel, RevealDirection, StyleHooks,
    TextAttributes, VisibilityEntry, set_log_callback,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::ffi::OsString;
use std::io::{self, Write};
use std::time::{Duration, Instant};

// ============================================================================
// CLI Parsing
// ============================================================================

const HELP_TEXT: &str = "decrypt_demo - scramble-and-reveal text animation

USAGE:
    decrypt_demo [OPTIONS] [TEXT]

OPTIONS:
    -h, --help                Print this help message and exit
    --speed <MS>              Tick interval in milliseconds (default: 50)
    --direction <DIR>         Reveal order: start, end, center (default: start)
    --iterative               Scramble the whole text instead of revealing
    --max-iterations <N>      Tick count for --iterative (default: 10)
    --original-only           Scramble with the text's own characters
    --charset <CHARS>         Explicit substitute characters
    --seed <N>                Deterministic random seed
    --headless                Run to completion without a TTY and print the result
    --verbose                 Print engine log messages to stderr

EXAMPLES:
    decrypt_demo \"ACCESS GRANTED\"
    decrypt_demo --direction center --speed 40 \"Hello, world\"
";

const DEFAULT_TEXT: &str = "Hello, world";
const DEFAULT_DEMO_SPEED_MS: u64 = 50;

/// Application configuration parsed from command-line arguments.
#[derive(Clone, Debug)]
#[allow(clippy::struct_excessive_bools)] // Config naturally has many boolean flags
pub struct Config {
    pub text: String,
    pub speed_ms: u64,
    pub direction: RevealDirection,
    pub iterative: bool,
    pub max_iterations: u32,
    pub original_only: bool,
    pub charset: Option<String>,
    pub seed: Option<u64>,
    pub headless: bool,
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            text: DEFAULT_TEXT.to_string(),
            speed_ms: DEFAULT_DEMO_SPEED_MS,
            direction: RevealDirection::Start,
            iterative: false,
            max_iterations: 10,
            original_only: false,
            charset: None,
            seed: None,
            headless: false,
            verbose: false,
        }
    }
}

/// Result of CLI parsing.
pub enum ParseResult {
    /// Successfully parsed configuration.
    Config(Config),
    /// User requested help.
    Help,
    /// Parse error with message.
    Error(String),
}

fn take_value<I>(args: &mut I, flag: &str) -> Result<String, String>
where
    I: Iterator<Item = OsString>,
{
    args.next()
        .map(|v| v.to_string_lossy().to_string())
        .ok_or_else(|| format!("{flag} requires a value"))
}

impl Config {
    /// Parse configuration from command-line arguments.
    pub fn from_args<I>(args: I) -> ParseResult
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();
        let mut positional: Vec<String> = Vec::new();

        // Skip program name
        args.next();

        while let Some(arg) = args.next() {
            let arg_str = arg.to_string_lossy();

            match arg_str.as_ref() {
                "-h" | "--help" => return ParseResult::Help,

                "--speed" => {
                    let value = match take_value(&mut args, "--speed") {
                        Ok(v) => v,
                        Err(e) => return ParseResult::Error(e),
                    };
                    match value.parse::<u64>() {
                        Ok(n) => config.speed_ms = n,
                        Err(_) => {
                            return ParseResult::Error(format!("Invalid --speed value: {value}"));
                        }
                    }
                }

                "--direction" => {
                    let value = match take_value(&mut args, "--direction") {
                        Ok(v) => v,
                        Err(e) => return ParseResult::Error(e),
                    };
                    match value.parse::<RevealDirection>() {
                        Ok(direction) => config.direction = direction,
                        Err(e) => return ParseResult::Error(e.to_string()),
                    }
                }

                "--iterative" => config.iterative = true,

                "--max-iterations" => {
                    let value = match take_value(&mut args, "--max-iterations") {
                        Ok(v) => v,
                        Err(e) => return ParseResult::Error(e),
                    };
                    match value.parse::<u32>() {
                        Ok(n) if n > 0 => config.max_iterations = n,
                        _ => {
                            return ParseResult::Error(format!(
                                "Invalid --max-iterations value: {value} (must be positive integer)"
                            ));
                        }
                    }
                }

                "--original-only" => config.original_only = true,

                "--charset" => match take_value(&mut args, "--charset") {
                    Ok(v) => config.charset = Some(v),
                    Err(e) => return ParseResult::Error(e),
                },

                "--seed" => {
                    let value = match take_value(&mut args, "--seed") {
                        Ok(v) => v,
                        Err(e) => return ParseResult::Error(e),
                    };
                    match value.parse::<u64>() {
                        Ok(n) => config.seed = Some(n),
                        Err(_) => {
                            return ParseResult::Error(format!("Invalid --seed value: {value}"));
                        }
                    }
                }

                "--headless" => config.headless = true,
                "--verbose" => config.verbose = true,

                other => {
                    if other.starts_with('-') && other.len() > 1 {
                        return ParseResult::Error(format!("Unknown option: {other}"));
                    }
                    positional.push(other.to_string());
                }
            }
        }

        if !positional.is_empty() {
            config.text = positional.join(" ");
        }
        ParseResult::Config(config)
    }

    /// Engine options for this run. The demo plays immediately, so the
    /// view trigger is fed a single "visible" signal at startup.
    #[must_use]
    pub fn decrypt_options(&self) -> DecryptOptions {
        let mut opts = DecryptOptions::new(self.text.replace("\\n", "\n"))
            .with_speed_ms(self.speed_ms)
            .with_direction(self.direction)
            .with_sequential(!self.iterative)
            .with_max_iterations(self.max_iterations)
            .with_original_chars_only(self.original_only)
            .with_style(
                StyleHooks::default()
                    .with_parent(TextAttributes::BOLD)
                    .with_encrypted(TextAttributes::DIM),
            );
        if let Some(charset) = &self.charset {
            opts = opts.with_characters(charset.clone());
        }
        opts
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

fn main() -> io::Result<()> {
    match Config::from_args(std::env::args_os()) {
        ParseResult::Config(config) => {
            if config.verbose {
                set_log_callback(|level: LogLevel, msg: &str| eprintln!("[{level:?}] {msg}"));
            }
            if config.headless || !is_tty(&io::stdout()) {
                run_headless(&config)
            } else {
                run_interactive(&config)
            }
        }
        ParseResult::Help => {
            print!("{HELP_TEXT}");
            Ok(())
        }
        ParseResult::Error(msg) => {
            eprintln!("Error: {msg}");
            eprintln!("Run with --help for usage information.");
            std::process::exit(1);
        }
    }
}

// ============================================================================
// Headless Mode
// ============================================================================

/// Tick to completion without waiting and print the settled text.
fn run_headless(config: &Config) -> io::Result<()> {
    let mut text = DecryptedText::with_rng(config.decrypt_options(), config.rng());
    let mut now = Instant::now();
    text.on_visibility(VisibilityEntry::visible(), now);

    let interval = Duration::from_millis(config.speed_ms);
    let mut ticks = 0u64;
    while text.is_scrambling() {
        now += interval;
        if text.advance(now).did_tick() {
            ticks += 1;
        }
    }

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", text.frame().text())?;
    writeln!(stdout, "settled after {ticks} ticks")?;
    Ok(())
}

// ============================================================================
// Interactive Mode
// ============================================================================

fn clipped(frame: DisplayFrame, columns: usize) -> DisplayFrame {
    if frame.width() <= columns {
        return frame;
    }
    DisplayFrame::plain(
        &frame
            .line_texts()
            .iter()
            .map(|line| clip_to_width(line, columns))
            .collect::<Vec<_>>()
            .join("\n"),
    )
}

/// Paint inline on the terminal, sleeping between ticks.
fn run_interactive(config: &Config) -> io::Result<()> {
    let columns = terminal_size().map_or(80, |(w, _)| usize::from(w));
    let mut text = DecryptedText::with_rng(config.decrypt_options(), config.rng());
    let hooks = text.options().style;
    let mut stdout = io::stdout().lock();

    stdout.write_all(CURSOR_HIDE.as_bytes())?;
    let mut painted = ansi::repaint_inline(&mut stdout, &clipped(text.frame(), columns), &hooks, 0)?;

    text.on_visibility(VisibilityEntry::visible(), Instant::now());
    while text.is_scrambling() {
        let now = Instant::now();
        if let Some(wait) = text.time_until_next_tick(now) {
            std::thread::sleep(wait);
        }
        if text.advance(Instant::now()).did_tick() {
            painted = ansi::repaint_inline(
                &mut stdout,
                &clipped(text.frame(), columns),
                &hooks,
                painted,
            )?;
        }
    }

    ansi::repaint_inline(&mut stdout, &clipped(text.frame(), columns), &hooks, painted)?;
    stdout.write_all(CURSOR_SHOW.as_bytes())?;
    stdout.write_all(b"\r\n")?;
    stdout.flush()
}

// ============================================================================
// Tests
// ============================================================================
