//! Gazetteer subsystem for IntegriHomes.
//!
//! An immutable table of named places with coordinates and zoom hints,
//! supporting exact/alias resolution, autocomplete suggestions, and
//! nearest-neighbor ranking by great-circle distance.

pub mod distance;
pub mod resolver;
pub mod store;
pub mod types;

pub use distance::{format_coords, haversine_km, EARTH_RADIUS_KM};
pub use store::{Gazetteer, DEFAULT_LIMIT};
pub use types::{GazetteerError, Location, MatchKind, NearbyLocation, Resolved};
