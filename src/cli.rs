//! Command-line interface.

use crate::config::{Config, OutputFormat};
use crate::{interactive, output, processing};
use clap::Parser;
use colored::Colorize;
use std::error::Error;

/// Built-in example calculations.
const EXAMPLES: [(&str, &str); 3] = [
    ("192.168.1.100", "255.255.255.0"),
    ("10.0.0.50", "/24"),
    ("172.16.10.1", "255.255.240.0"),
];

/// Calculate IPv4 subnet parameters from an address and mask.
#[derive(Parser, Debug)]
#[command(name = "subnet-calculator")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// IPv4 address in dotted-decimal form, e.g. 192.168.1.100
    #[arg(value_name = "IP")]
    pub ip: Option<String>,

    /// Subnet mask in dotted-decimal or CIDR form, e.g. 255.255.255.0 or /24
    #[arg(value_name = "MASK")]
    pub mask: Option<String>,

    /// Print the result as JSON
    #[arg(short, long)]
    pub json: bool,

    /// Read "<ip> <mask>" lines from stdin, recalculating after a debounce delay
    #[arg(short, long)]
    pub interactive: bool,

    /// Run the built-in example calculations
    #[arg(long)]
    pub examples: bool,
}

impl Args {
    /// Resolve the output format: the --json flag wins over the environment.
    pub fn output_format(&self, config: &Config) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            config.output
        }
    }
}

/// Dispatch one CLI invocation.
pub async fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let config = Config::from_env();
    let format = args.output_format(&config);

    if args.examples {
        return run_examples(format);
    }
    if args.interactive {
        return interactive::run(config.debounce_ms, format).await;
    }

    match (&args.ip, &args.mask) {
        (Some(ip), Some(mask)) => {
            let result = processing::calculate(ip, mask)?;
            output::render(&result, format)
        }
        _ => Err("Expected <IP> <MASK> arguments (or --interactive / --examples)".into()),
    }
}

/// Calculate and render each built-in example.
fn run_examples(format: OutputFormat) -> Result<(), Box<dyn Error>> {
    for (ip, mask) in EXAMPLES {
        println!("{}", format!("# {ip} {mask}").bold());
        let result = processing::calculate(ip, mask)?;
        output::render(&result, format)?;
        println!();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parse_positional() {
        let args = Args::try_parse_from(["subnet-calculator", "10.0.0.1", "/24"])
            .expect("Failed to parse args");
        assert_eq!(args.ip.as_deref(), Some("10.0.0.1"));
        assert_eq!(args.mask.as_deref(), Some("/24"));
        assert!(!args.json);
        assert!(!args.interactive);
    }

    #[test]
    fn test_args_parse_flags() {
        let args = Args::try_parse_from(["subnet-calculator", "--interactive", "--json"])
            .expect("Failed to parse args");
        assert!(args.interactive);
        assert!(args.json);
        assert_eq!(args.ip, None);
    }

    #[test]
    fn test_json_flag_wins_over_config() {
        let config = Config {
            output: OutputFormat::Text,
            debounce_ms: 500,
        };
        let args = Args::try_parse_from(["subnet-calculator", "--json"]).expect("Failed to parse");
        assert_eq!(args.output_format(&config), OutputFormat::Json);

        let args = Args::try_parse_from(["subnet-calculator"]).expect("Failed to parse");
        assert_eq!(args.output_format(&config), OutputFormat::Text);
    }

    #[test]
    fn test_examples_all_valid() {
        for (ip, mask) in EXAMPLES {
            processing::calculate(ip, mask)
                .unwrap_or_else(|e| panic!("Example {ip} {mask} failed: {e}"));
        }
    }
}
