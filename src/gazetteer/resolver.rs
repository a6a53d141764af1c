//! Query matching: free-text resolution and autocomplete suggestions.
//!
//! Resolution runs two passes over the table, both case-insensitive on the
//! trimmed query: exact (name or alias equality), then partial (query is a
//! substring of a name or alias). The first entry in declaration order wins
//! in each pass.

use super::store::Gazetteer;
use super::types::{GazetteerError, Location, MatchKind, Resolved};

impl Gazetteer {
    /// Resolve a free-text query to a single location.
    ///
    /// An empty or whitespace-only query is valid input and returns the
    /// designated default entry with [`MatchKind::Default`]; a non-empty
    /// query with no match returns [`GazetteerError::NotFound`].
    pub fn resolve(&self, query: &str) -> Result<Resolved, GazetteerError> {
        let normalized = query.trim().to_lowercase();
        if normalized.is_empty() {
            return Ok(Resolved {
                location: self.default_location().clone(),
                kind: MatchKind::Default,
            });
        }

        if let Some(location) = self.exact_match(&normalized) {
            return Ok(Resolved {
                location: location.clone(),
                kind: MatchKind::Exact,
            });
        }

        if let Some(location) = self.partial_match(&normalized) {
            return Ok(Resolved {
                location: location.clone(),
                kind: MatchKind::Partial,
            });
        }

        Err(GazetteerError::NotFound(query.trim().to_string()))
    }

    fn exact_match(&self, normalized: &str) -> Option<&Location> {
        self.locations().iter().find(|loc| {
            loc.name.to_lowercase() == normalized
                || loc.aliases.iter().any(|alias| alias == normalized)
        })
    }

    fn partial_match(&self, normalized: &str) -> Option<&Location> {
        self.locations().iter().find(|loc| {
            loc.name.to_lowercase().contains(normalized)
                || loc.aliases.iter().any(|alias| alias.contains(normalized))
        })
    }

    /// Autocomplete candidates for a partial input, in declaration order.
    ///
    /// Trimmed inputs shorter than two characters return no candidates.
    pub fn suggest(&self, input: &str, limit: usize) -> Vec<Location> {
        let trimmed = input.trim();
        if trimmed.chars().count() < 2 {
            return Vec::new();
        }

        let normalized = trimmed.to_lowercase();
        self.locations()
            .iter()
            .filter(|loc| {
                loc.name.to_lowercase().contains(&normalized)
                    || loc.aliases.iter().any(|alias| alias.contains(&normalized))
            })
            .take(limit)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_town_gazetteer() -> Gazetteer {
        Gazetteer::new(
            vec![
                Location {
                    name: "Accra".to_string(),
                    lat: 5.6037,
                    lng: -0.187,
                    zoom: 12,
                    aliases: vec!["accra".to_string()],
                },
                Location {
                    name: "Tema".to_string(),
                    lat: 5.6698,
                    lng: -0.0167,
                    zoom: 12,
                    aliases: vec![],
                },
            ],
            None,
        )
        .unwrap()
    }

    #[test]
    fn test_resolve_every_builtin_name() {
        let gazetteer = Gazetteer::builtin();
        for loc in gazetteer.locations() {
            let resolved = gazetteer.resolve(&loc.name).unwrap();
            assert_eq!(resolved.location, *loc);
            assert_eq!(resolved.kind, MatchKind::Exact);
            // Coordinates come back exactly as stored.
            assert_eq!(resolved.location.lat, loc.lat);
            assert_eq!(resolved.location.lng, loc.lng);
        }
    }

    #[test]
    fn test_resolve_every_builtin_alias() {
        let gazetteer = Gazetteer::builtin();
        for loc in gazetteer.locations() {
            for alias in &loc.aliases {
                let resolved = gazetteer.resolve(alias).unwrap();
                assert_eq!(resolved.location.name, loc.name, "alias '{}'", alias);
                assert_eq!(resolved.kind, MatchKind::Exact);
            }
        }
    }

    #[test]
    fn test_resolve_case_insensitive() {
        let gazetteer = Gazetteer::builtin();
        let resolved = gazetteer.resolve("ACCRA").unwrap();
        assert_eq!(resolved.location.name, "Accra");
        assert_eq!(resolved.kind, MatchKind::Exact);

        let resolved = gazetteer.resolve("  East LEGON  ").unwrap();
        assert_eq!(resolved.location.name, "East Legon");
    }

    #[test]
    fn test_resolve_empty_returns_default() {
        let gazetteer = Gazetteer::builtin();
        for query in ["", "   ", "\t\n"] {
            let resolved = gazetteer.resolve(query).unwrap();
            assert_eq!(resolved.location.name, "Ghana");
            assert_eq!(resolved.kind, MatchKind::Default);
        }
    }

    #[test]
    fn test_resolve_partial_match() {
        let gazetteer = Gazetteer::builtin();
        // No name or alias equals "legon"; "East Legon" contains it.
        let resolved = gazetteer.resolve("legon").unwrap();
        assert_eq!(resolved.location.name, "East Legon");
        assert_eq!(resolved.kind, MatchKind::Partial);
    }

    #[test]
    fn test_resolve_partial_via_alias() {
        let gazetteer = Gazetteer::builtin();
        // "sekondi" only appears inside Takoradi's aliases.
        let resolved = gazetteer.resolve("sekondi").unwrap();
        assert_eq!(resolved.location.name, "Takoradi");
        assert_eq!(resolved.kind, MatchKind::Partial);
    }

    #[test]
    fn test_resolve_exact_beats_partial() {
        let gazetteer = Gazetteer::builtin();
        // "ho" is a substring of several names but an exact name itself.
        let resolved = gazetteer.resolve("Ho").unwrap();
        assert_eq!(resolved.location.name, "Ho");
        assert_eq!(resolved.kind, MatchKind::Exact);
    }

    #[test]
    fn test_resolve_not_found() {
        let gazetteer = Gazetteer::builtin();
        let result = gazetteer.resolve("nonexistent-place-xyz");
        assert!(matches!(result, Err(GazetteerError::NotFound(_))));
    }

    #[test]
    fn test_resolve_shared_alias_first_wins() {
        let gazetteer = Gazetteer::new(
            vec![
                Location {
                    name: "Tema".to_string(),
                    lat: 5.6698,
                    lng: -0.0167,
                    zoom: 12,
                    aliases: vec!["harbour city".to_string()],
                },
                Location {
                    name: "Takoradi".to_string(),
                    lat: 4.9051,
                    lng: -1.7741,
                    zoom: 12,
                    aliases: vec!["harbour city".to_string()],
                },
            ],
            None,
        )
        .unwrap();

        let resolved = gazetteer.resolve("harbour city").unwrap();
        assert_eq!(resolved.location.name, "Tema");
    }

    #[test]
    fn test_resolve_scenario_two_towns() {
        let gazetteer = two_town_gazetteer();
        let resolved = gazetteer.resolve("ACCRA").unwrap();
        assert_eq!(resolved.location.name, "Accra");
        assert_eq!(resolved.location.lat, 5.6037);
    }

    #[test]
    fn test_suggest_short_input() {
        let gazetteer = Gazetteer::builtin();
        assert!(gazetteer.suggest("e", 5).is_empty());
        assert!(gazetteer.suggest("", 5).is_empty());
        // Trimmed length is what counts.
        assert!(gazetteer.suggest("  e  ", 5).is_empty());
    }

    #[test]
    fn test_suggest_substring_in_order() {
        let gazetteer = Gazetteer::builtin();
        let suggestions = gazetteer.suggest("ea", 5);
        // "greater accra" (Accra alias), "East Legon", and "airport
        // residential area" (Airport Residential alias) all contain "ea",
        // in declaration order.
        let names: Vec<&str> = suggestions.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Accra", "East Legon", "Airport Residential"]);
    }

    #[test]
    fn test_suggest_limit() {
        let gazetteer = Gazetteer::builtin();
        // Every entry matches "a" in some key, but "a" is too short; use a
        // broad two-character input instead.
        let all = gazetteer.suggest("an", gazetteer.len());
        assert!(all.len() > 2);
        let capped = gazetteer.suggest("an", 2);
        assert_eq!(capped.len(), 2);
        assert_eq!(capped[..], all[..2]);
    }

    #[test]
    fn test_suggest_scenario_two_towns() {
        let gazetteer = two_town_gazetteer();
        let suggestions = gazetteer.suggest("tem", 5);
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].name, "Tema");
    }
}
