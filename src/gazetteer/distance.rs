//! Great-circle distance and nearest-neighbor ranking.

use super::store::Gazetteer;
use super::types::NearbyLocation;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine great-circle distance between two WGS84 points, in km.
pub fn haversine_km(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lng = (lng2 - lng1).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Format a coordinate pair as a human-readable N/S, E/W string.
pub fn format_coords(lat: f64, lng: f64) -> String {
    let ns = if lat >= 0.0 { 'N' } else { 'S' };
    let ew = if lng >= 0.0 { 'E' } else { 'W' };
    format!("{:.4}\u{00B0} {}, {:.4}\u{00B0} {}", lat.abs(), ns, lng.abs(), ew)
}

impl Gazetteer {
    /// Rank all entries by distance from the given point, nearest first,
    /// truncated to `limit`.
    ///
    /// Inputs are not range-checked here; out-of-range coordinates produce
    /// a numerically valid but meaningless distance. Equal distances keep
    /// declaration order.
    pub fn nearby(&self, lat: f64, lng: f64, limit: usize) -> Vec<NearbyLocation> {
        let mut ranked: Vec<NearbyLocation> = self
            .locations()
            .iter()
            .map(|loc| NearbyLocation {
                distance_km: haversine_km(lat, lng, loc.lat, loc.lng),
                location: loc.clone(),
            })
            .collect();

        ranked.sort_by(|a, b| {
            a.distance_km
                .partial_cmp(&b.distance_km)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        ranked.truncate(limit);
        ranked
    }
}
