//! Location payloads
//!
//! Shapes of the paginated location listing and of a single location area.

use serde::Deserialize;

/// A `{name, url}` reference to another API resource.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// One page of `GET /location-area/`.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationPage {
    /// Total number of location areas
    #[serde(default)]
    pub count: u32,
    /// URL of the following page, absent on the last page
    pub next: Option<String>,
    /// URL of the preceding page, absent on the first page
    pub previous: Option<String>,
    /// Location areas on this page, in API order
    pub results: Vec<NamedResource>,
}

impl LocationPage {
    /// Names of the locations on this page.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.results.iter().map(|r| r.name.as_str())
    }
}

/// A creature that can be met in a location area.
#[derive(Debug, Clone, Deserialize)]
pub struct Encounter {
    pub pokemon: NamedResource,
}

/// `GET /location-area/{name}`.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationArea {
    #[serde(default)]
    pub name: String,
    pub pokemon_encounters: Vec<Encounter>,
}

impl LocationArea {
    /// Names of the creatures found in this area, in API order.
    pub fn creature_names(&self) -> impl Iterator<Item = &str> {
        self.pokemon_encounters.iter().map(|e| e.pokemon.name.as_str())
    }
}
