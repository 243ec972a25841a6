//! Session
//!
//! Everything a command may read or change, owned by the command loop and
//! lent to one command at a time.

use std::collections::BTreeMap;

use crate::api::ApiClient;
use crate::catch::{CatchRoll, RandomRoll};
use crate::models::Creature;
use crate::pagination::Cursor;

/// Mutable state threaded through successive commands.
pub struct Session {
    /// Cache-first API access
    pub client: ApiClient,
    /// Location listing position
    pub cursor: Cursor,
    /// Caught creatures by name
    pub pokedex: BTreeMap<String, Creature>,
    /// Draw source for catch attempts
    pub roll: Box<dyn CatchRoll>,
}

impl Session {
    /// Creates a session that pages locations from the client's first
    /// location page and rolls catches randomly.
    pub fn new(client: ApiClient) -> Self {
        let cursor = Cursor::new(format!("{}/location-area/", client.base_url()));
        Self {
            client,
            cursor,
            pokedex: BTreeMap::new(),
            roll: Box::new(RandomRoll),
        }
    }

    /// Replaces the catch draw source.
    pub fn with_roll(mut self, roll: impl CatchRoll + 'static) -> Self {
        self.roll = Box::new(roll);
        self
    }
}
