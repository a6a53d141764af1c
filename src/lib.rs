//! IntegriHomes location resolution engine.
//!
//! Resolves free-text location queries against an immutable gazetteer of
//! Ghanaian places, suggests autocomplete candidates, and ranks entries by
//! great-circle distance. Ships as a library, a CLI (`igeo`), and a small
//! HTTP API consumed by the listings frontend.

pub mod gazetteer;
pub mod server;

pub use gazetteer::{Gazetteer, GazetteerError, Location, MatchKind, NearbyLocation, Resolved};
