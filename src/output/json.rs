//! JSON output for calculation results.

use crate::models::SubnetResult;
use std::error::Error;

/// Render a result as pretty-printed JSON.
pub fn to_json(result: &SubnetResult) -> Result<String, Box<dyn Error>> {
    Ok(serde_json::to_string_pretty(result)?)
}
