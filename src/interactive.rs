//! Debounced interactive mode.
//!
//! Reads `<ip> <mask>` pairs from stdin and recalculates once input settles,
//! so a burst of updates collapses into a single calculation. The engine
//! itself stays synchronous; the coalescing lives entirely in this adapter.

use crate::config::OutputFormat;
use crate::{output, processing};
use colored::Colorize;
use std::error::Error;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::{sleep_until, Instant};

/// Run the interactive loop until stdin closes.
pub async fn run(debounce_ms: u64, format: OutputFormat) -> Result<(), Box<dyn Error>> {
    log::info!("#Start interactive mode, debounce {debounce_ms}ms");
    println!("Enter '<ip> <mask>' per line (Ctrl-D to exit):");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut pending: Option<(String, String)> = None;
    let mut deadline = Instant::now();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                match line? {
                    Some(text) => {
                        if let Some(pair) = parse_line(&text) {
                            pending = Some(pair);
                            deadline = Instant::now() + Duration::from_millis(debounce_ms);
                        } else if !text.trim().is_empty() {
                            eprintln!("{}", "Expected '<ip> <mask>'".red());
                        }
                    }
                    None => break,
                }
            }
            _ = sleep_until(deadline), if pending.is_some() => {
                flush(&mut pending, format);
            }
        }
    }

    // A pair still pending at EOF is calculated before exit
    flush(&mut pending, format);
    Ok(())
}

/// Calculate and render the pending pair, if any.
fn flush(pending: &mut Option<(String, String)>, format: OutputFormat) {
    if let Some((ip, mask)) = pending.take() {
        match processing::calculate(&ip, &mask) {
            Ok(result) => {
                if let Err(e) = output::render(&result, format) {
                    log::error!("Render failed: {e}");
                }
            }
            Err(e) => eprintln!("{}", e.to_string().red()),
        }
    }
}

/// Split one input line into an (ip, mask) pair.
fn parse_line(text: &str) -> Option<(String, String)> {
    let mut parts = text.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(ip), Some(mask), None) => Some((ip.to_string(), mask.to_string())),
        _ => None,
    }
}
