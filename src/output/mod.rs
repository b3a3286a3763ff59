//! Output rendering for calculation results.
//!
//! - [`terminal`] - colored label/value table on stdout
//! - [`json`] - machine-readable JSON

pub mod json;
pub mod terminal;

use crate::config::OutputFormat;
use crate::models::SubnetResult;
use std::error::Error;

/// Render a result in the selected format.
pub fn render(result: &SubnetResult, format: OutputFormat) -> Result<(), Box<dyn Error>> {
    match format {
        OutputFormat::Json => println!("{}", json::to_json(result)?),
        OutputFormat::Text => terminal::print_result(result),
    }
    Ok(())
}
