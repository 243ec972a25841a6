//! Pokedex CLI - An interactive shell over the PokeAPI catalog
//!
//! Pages through map locations, explores encounter lists, catches creatures
//! and keeps them in a session Pokedex. API responses are held in an
//! expiring cache swept by a background task.

pub mod api;
pub mod cache;
pub mod catch;
pub mod commands;
pub mod config;
pub mod error;
pub mod models;
pub mod pagination;
pub mod repl;
pub mod session;
pub mod tasks;

pub use commands::{Dispatcher, Registry};
pub use config::Config;
pub use error::{PokedexError, Result};
pub use session::Session;
pub use tasks::spawn_sweep_task;
