//! Commands Module
//!
//! The closed set of shell commands, the registry that names them, and the
//! dispatcher that runs them against a session.
//!
//! # Commands
//! - `help` - Print the command list
//! - `exit` - Leave the shell
//! - `map` / `mapb` - Page forward / backward through locations
//! - `explore <area>` - List creatures found in a location area
//! - `catch <name>` - Try to add a creature to the Pokedex
//! - `inspect <name>` - Show a caught creature's details
//! - `pokedex` - List caught creatures

pub mod dispatcher;
pub mod handlers;
pub mod registry;

pub use dispatcher::Dispatcher;
pub use registry::{CommandDescriptor, Registry};

/// One of the shell's commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Exit,
    Map,
    MapBack,
    Explore,
    Catch,
    Inspect,
    Pokedex,
}

/// What the command loop should do after a command returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}
