//! Command-line interface: argument definitions and command implementations.

mod args;
pub mod graph;
pub mod query;
pub mod resolve;
pub mod validate;

pub use args::{Cli, Commands, GraphArgs, QueryArgs, ResolveArgs, ValidateArgs};
