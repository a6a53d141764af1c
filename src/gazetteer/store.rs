//! The gazetteer store: the built-in place table and file loading.
//!
//! The table is assembled once at startup and never mutated. Matching and
//! ranking operations live in `resolver` and `distance`.

use super::types::{GazetteerError, Location};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Result cap applied by the CLI and HTTP API when no limit is given.
pub const DEFAULT_LIMIT: usize = 5;

// ─── Built-in dataset ───────────────────────────────────────────

struct BuiltinPlace {
    name: &'static str,
    lat: f64,
    lng: f64,
    zoom: u8,
    aliases: &'static [&'static str],
}

const BUILTIN_PLACES: &[BuiltinPlace] = &[
    BuiltinPlace {
        name: "Accra",
        lat: 5.6037, lng: -0.187, zoom: 12,
        aliases: &["accra", "greater accra", "accra metropolitan"],
    },
    BuiltinPlace {
        name: "East Legon",
        lat: 5.6361, lng: -0.1633, zoom: 14,
        aliases: &["east legon", "eastlegon"],
    },
    BuiltinPlace {
        name: "Cantonments",
        lat: 5.5788, lng: -0.1761, zoom: 14,
        aliases: &["cantonments", "cantonment"],
    },
    BuiltinPlace {
        name: "Airport Residential",
        lat: 5.6025, lng: -0.1789, zoom: 14,
        aliases: &["airport residential", "airport", "airport residential area"],
    },
    BuiltinPlace {
        name: "Labone",
        lat: 5.5602, lng: -0.1752, zoom: 14,
        aliases: &["labone"],
    },
    BuiltinPlace {
        name: "Tema",
        lat: 5.6698, lng: -0.0167, zoom: 12,
        aliases: &["tema", "tema community", "tema metropolitan"],
    },
    BuiltinPlace {
        name: "Kumasi",
        lat: 6.6885, lng: -1.6244, zoom: 12,
        aliases: &["kumasi", "kumasi metropolitan", "ashanti region"],
    },
    BuiltinPlace {
        name: "Takoradi",
        lat: 4.9051, lng: -1.7741, zoom: 12,
        aliases: &["takoradi", "sekondi-takoradi", "sekondi takoradi"],
    },
    BuiltinPlace {
        name: "Tamale",
        lat: 9.4075, lng: -0.8533, zoom: 12,
        aliases: &["tamale", "tamale metropolitan"],
    },
    BuiltinPlace {
        name: "Cape Coast",
        lat: 5.1053, lng: -1.2466, zoom: 12,
        aliases: &["cape coast", "cape-coast"],
    },
    BuiltinPlace {
        name: "Koforidua",
        lat: 6.0945, lng: -0.2601, zoom: 12,
        aliases: &["koforidua"],
    },
    BuiltinPlace {
        name: "Ho",
        lat: 6.601, lng: 0.4712, zoom: 12,
        aliases: &["ho"],
    },
    BuiltinPlace {
        name: "Sunyani",
        lat: 7.3349, lng: -2.3268, zoom: 12,
        aliases: &["sunyani"],
    },
    BuiltinPlace {
        name: "Obuasi",
        lat: 6.2049, lng: -1.6662, zoom: 12,
        aliases: &["obuasi"],
    },
    BuiltinPlace {
        name: "Teshie",
        lat: 5.5927, lng: -0.1036, zoom: 14,
        aliases: &["teshie"],
    },
    BuiltinPlace {
        name: "Nungua",
        lat: 5.6028, lng: -0.0742, zoom: 14,
        aliases: &["nungua"],
    },
    BuiltinPlace {
        name: "Kokrobite",
        lat: 5.5192, lng: -0.3662, zoom: 14,
        aliases: &["kokrobite"],
    },
    BuiltinPlace {
        name: "Akosombo",
        lat: 6.346, lng: 0.0641, zoom: 13,
        aliases: &["akosombo"],
    },
    BuiltinPlace {
        name: "Ghana",
        lat: 7.9465, lng: -1.0232, zoom: 7,
        aliases: &["ghana", "republic of ghana"],
    },
];

/// The broadest-scope entry, returned for empty queries.
const BUILTIN_DEFAULT: &str = "Ghana";

// ─── File schema ────────────────────────────────────────────────

/// On-disk gazetteer: `{ "default": "...", "locations": [...] }`.
#[derive(Deserialize)]
struct GazetteerFile {
    #[serde(default)]
    default: Option<String>,
    locations: Vec<Location>,
}

// ─── The store ──────────────────────────────────────────────────

/// An immutable table of named places in declaration order.
///
/// Built once at process start; every operation takes `&self`, so a single
/// instance can be shared across request handlers without locking.
#[derive(Debug, Clone)]
pub struct Gazetteer {
    locations: Vec<Location>,
    default_idx: usize,
}

impl Gazetteer {
    /// The built-in Ghana table used by the platform.
    pub fn builtin() -> Self {
        let locations: Vec<Location> = BUILTIN_PLACES
            .iter()
            .map(|p| Location {
                name: p.name.to_string(),
                lat: p.lat,
                lng: p.lng,
                zoom: p.zoom,
                aliases: p.aliases.iter().map(|a| a.to_string()).collect(),
            })
            .collect();
        let default_idx = locations
            .iter()
            .position(|l| l.name == BUILTIN_DEFAULT)
            .unwrap_or(0);
        Self { locations, default_idx }
    }

    /// Assemble a validated gazetteer from caller data.
    ///
    /// Rejects empty tables, duplicate names (case-insensitive), and
    /// out-of-range coordinates. An alias claimed by two entries is not
    /// rejected; the first entry in declaration order wins at lookup time.
    /// With no `default_name`, the smallest-zoom entry is designated,
    /// first in declaration order on ties.
    pub fn new(
        mut locations: Vec<Location>,
        default_name: Option<&str>,
    ) -> Result<Self, GazetteerError> {
        if locations.is_empty() {
            return Err(GazetteerError::Empty);
        }

        let mut seen = HashSet::with_capacity(locations.len());
        for loc in &locations {
            if !(-90.0..=90.0).contains(&loc.lat) || !(-180.0..=180.0).contains(&loc.lng) {
                return Err(GazetteerError::OutOfRange {
                    name: loc.name.clone(),
                    lat: loc.lat,
                    lng: loc.lng,
                });
            }
            if !seen.insert(loc.name.to_lowercase()) {
                return Err(GazetteerError::DuplicateName(loc.name.clone()));
            }
        }

        // Match keys are lowercase; file data may carry mixed case.
        for loc in &mut locations {
            for alias in &mut loc.aliases {
                *alias = alias.to_lowercase();
            }
        }

        let default_idx = match default_name {
            Some(name) => {
                let wanted = name.to_lowercase();
                locations
                    .iter()
                    .position(|l| l.name.to_lowercase() == wanted)
                    .ok_or_else(|| GazetteerError::UnknownDefault(name.to_string()))?
            }
            None => {
                let mut idx = 0;
                for (i, loc) in locations.iter().enumerate() {
                    if loc.zoom < locations[idx].zoom {
                        idx = i;
                    }
                }
                idx
            }
        };

        Ok(Self { locations, default_idx })
    }

    /// Load a gazetteer from a JSON file.
    pub fn load_from(path: &Path) -> Result<Self, GazetteerError> {
        let data = fs::read_to_string(path)
            .map_err(|e| GazetteerError::Io(format!("{}: {}", path.display(), e)))?;
        let file: GazetteerFile =
            serde_json::from_str(&data).map_err(|e| GazetteerError::Parse(e.to_string()))?;
        Self::new(file.locations, file.default.as_deref())
    }

    /// User override at ~/.integri-geo/gazetteer.json when present and
    /// valid, else the built-in table.
    pub fn load_default() -> Self {
        let path = Self::override_path();
        if path.exists() {
            match Self::load_from(&path) {
                Ok(gazetteer) => return gazetteer,
                Err(e) => eprintln!("Warning: ignoring {}: {}", path.display(), e),
            }
        }
        Self::builtin()
    }

    fn override_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".integri-geo")
            .join("gazetteer.json")
    }

    /// All entries in declaration order.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// The designated broadest-scope entry.
    pub fn default_location(&self) -> &Location {
        &self.locations[self.default_idx]
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}
