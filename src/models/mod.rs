//! Payload models for the catalog API
//!
//! This module defines the typed shapes that API response bodies are
//! decoded into.

pub mod creature;
pub mod location;

// Re-export commonly used types
pub use creature::{Creature, StatEntry, TypeSlot};
pub use location::{Encounter, LocationArea, LocationPage, NamedResource};

use serde::de::DeserializeOwned;

use crate::error::Result;

/// Decodes a response body into one of the payload shapes.
///
/// An empty body is a decode failure like any other malformed payload.
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    Ok(serde_json::from_slice(bytes)?)
}
