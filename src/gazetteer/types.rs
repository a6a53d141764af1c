//! Core types for the gazetteer subsystem.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named place with coordinates and a suggested map zoom.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    /// Map zoom when centering on this place (7 = country, 14 = neighborhood).
    pub zoom: u8,
    /// Lowercase alternate match keys. Empty when the name is the only key.
    #[serde(default)]
    pub aliases: Vec<String>,
}

/// How a query matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    /// Normalized query equals a name or one of its aliases.
    Exact,
    /// Normalized query is a substring of a name or alias.
    Partial,
    /// Empty query; the designated broadest-scope entry was returned.
    Default,
}

impl fmt::Display for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact => write!(f, "exact"),
            Self::Partial => write!(f, "partial"),
            Self::Default => write!(f, "default"),
        }
    }
}

/// A successful resolution: the matched location plus how it matched.
#[derive(Debug, Clone, Serialize)]
pub struct Resolved {
    pub location: Location,
    pub kind: MatchKind,
}

/// A gazetteer entry ranked by distance from a query point.
#[derive(Debug, Clone, Serialize)]
pub struct NearbyLocation {
    pub location: Location,
    pub distance_km: f64,
}

/// Gazetteer errors.
#[derive(Debug)]
pub enum GazetteerError {
    /// No exact or partial match for a non-empty query.
    NotFound(String),
    /// A gazetteer with no entries.
    Empty,
    /// Two entries share a name (case-insensitive).
    DuplicateName(String),
    /// Latitude outside [-90, 90] or longitude outside [-180, 180].
    OutOfRange { name: String, lat: f64, lng: f64 },
    /// The named default entry is not in the table.
    UnknownDefault(String),
    Io(String),
    Parse(String),
}

impl fmt::Display for GazetteerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(q) => write!(f, "Location not found: '{}'", q),
            Self::Empty => write!(f, "Gazetteer has no entries"),
            Self::DuplicateName(name) => write!(f, "Duplicate location name: '{}'", name),
            Self::OutOfRange { name, lat, lng } => write!(
                f,
                "Coordinates out of range for '{}': ({}, {}). Lat: -90..90, Lng: -180..180",
                name, lat, lng
            ),
            Self::UnknownDefault(name) => {
                write!(f, "Default location '{}' is not in the gazetteer", name)
            }
            Self::Io(msg) => write!(f, "Cannot read gazetteer file: {}", msg),
            Self::Parse(msg) => write!(f, "Invalid gazetteer file: {}", msg),
        }
    }
}

impl std::error::Error for GazetteerError {}
