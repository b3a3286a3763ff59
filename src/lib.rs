// cargo watch -x 'fmt' -x 'run'  // 'run -- 192.168.1.100 /24'

//! IPv4 subnet calculator.
//!
//! The engine is a set of pure functions over two input strings: an IPv4
//! address and a subnet mask in dotted-decimal or `/N` form. Everything else
//! (CLI, interactive debounce, output rendering) is a thin adapter around
//! [`calculate`].

pub mod cli;
pub mod config;
pub mod interactive;
pub mod models;
pub mod output;
pub mod processing;

pub use models::{CalcError, SubnetResult};
pub use processing::{calculate, subnet_info};
