//! 2ch URL checker
//!
//! Reads URLs from the command line (or stdin, one per line) and prints one
//! JSON object per input with the extracted fields and rebuilt URLs.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use bbs2ch_url::{Matcher, MatcherConfig, UrlInfo};
use clap::Parser;
use serde::Serialize;
use tracing::{Level, debug, info};

/// CLI arguments
#[derive(Parser)]
#[command(name = "bbs2ch-check")]
#[command(about = "Validate 2ch / open2ch URLs and print their canonical forms")]
#[command(version)]
struct Cli {
    /// URLs to check (reads stdin when omitted)
    urls: Vec<String>,

    /// Thread key digit window, as MIN-MAX
    #[arg(long, value_parser = parse_digits, default_value = "9-10")]
    digits: (usize, usize),

    /// Skip the generic URI syntax check
    #[arg(long)]
    no_syntax_check: bool,

    /// Only print inputs that were accepted
    #[arg(long)]
    valid_only: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Serialize)]
struct CheckOutput {
    input: String,
    valid: bool,
    server_name: Option<String>,
    tld: Option<String>,
    board_name: Option<String>,
    thread_key: Option<String>,
    is_open: bool,
    kind: Option<String>,
    built_url: Option<String>,
    dat: Option<String>,
    subject: Option<String>,
    setting: Option<String>,
    error: Option<String>,
}

impl CheckOutput {
    fn accepted(input: &str, info: &UrlInfo) -> Self {
        Self {
            input: input.to_string(),
            valid: true,
            server_name: info.server_name().map(str::to_string),
            tld: Some(info.tld().to_string()),
            board_name: info.board_name().map(str::to_string),
            thread_key: info.thread_key().map(str::to_string),
            is_open: info.is_open(),
            kind: Some(info.kind().to_string()),
            built_url: info.built_url().map(str::to_string),
            dat: info.dat(),
            subject: info.subject(),
            setting: info.setting(),
            error: None,
        }
    }

    fn rejected(input: &str, error: String) -> Self {
        Self {
            input: input.to_string(),
            valid: false,
            server_name: None,
            tld: None,
            board_name: None,
            thread_key: None,
            is_open: false,
            kind: None,
            built_url: None,
            dat: None,
            subject: None,
            setting: None,
            error: Some(error),
        }
    }
}

fn parse_digits(s: &str) -> Result<(usize, usize), String> {
    let (min, max) = s
        .split_once('-')
        .ok_or_else(|| format!("expected MIN-MAX, got {s:?}"))?;
    let min = min.trim().parse::<usize>().map_err(|e| format!("bad MIN: {e}"))?;
    let max = max.trim().parse::<usize>().map_err(|e| format!("bad MAX: {e}"))?;
    Ok((min, max))
}

fn check(matcher: &Matcher, input: &str) -> CheckOutput {
    match matcher.try_parse(input) {
        Ok(info) => CheckOutput::accepted(input, &info),
        Err(err) => CheckOutput::rejected(input, err.to_string()),
    }
}

fn run(cli: Cli) -> Result<bool> {
    let config = MatcherConfig::new()
        .with_thread_key_digits(cli.digits.0, cli.digits.1)
        .with_syntax_check(!cli.no_syntax_check);
    let matcher = Matcher::new(config).context("failed to build URL matcher")?;
    debug!(config = ?matcher.config(), "matcher ready");

    let inputs: Box<dyn Iterator<Item = io::Result<String>>> = if cli.urls.is_empty() {
        Box::new(io::stdin().lock().lines())
    } else {
        Box::new(cli.urls.into_iter().map(Ok))
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let (mut checked, mut accepted) = (0usize, 0usize);

    for line in inputs {
        let line = line.context("failed to read input")?;
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let output = check(&matcher, input);
        checked += 1;
        if output.valid {
            accepted += 1;
        } else if cli.valid_only {
            continue;
        }

        serde_json::to_writer(&mut out, &output).context("failed to encode result")?;
        writeln!(out).context("failed to write result")?;
    }

    info!(checked, accepted, "done");
    Ok(checked == accepted)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .init();

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("bbs2ch-check error: {err:#}");
            ExitCode::from(2)
        }
    }
}
