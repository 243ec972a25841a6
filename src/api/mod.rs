//! API Module
//!
//! Access to the remote catalog: the transport seam and the cached client
//! built on top of it.
//!
//! # Endpoints used
//! - `GET /location-area/` - Paginated location listing
//! - `GET /location-area/{name}` - Encounters in one location area
//! - `GET /pokemon/{name}` - Creature detail

pub mod client;
pub mod transport;

pub use client::ApiClient;
pub use transport::{HttpTransport, Transport};
