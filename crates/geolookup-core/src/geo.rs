// crates/geolookup-core/src/geo.rs

//! Great-circle geometry over latitude/longitude pairs in decimal degrees.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A coordinate pair in decimal degrees.
///
/// Used for caller-supplied reference points (e.g. the user's detected
/// geolocation). Callers are expected to supply values produced by
/// geolocation APIs or the dataset; no range validation is performed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coord {
    pub lat: f64,
    pub lon: f64,
}

impl Coord {
    pub fn new(lat: f64, lon: f64) -> Self {
        Coord { lat, lon }
    }
}

/// Distance between two points in kilometers along the great-circle path.
///
/// Uses the Haversine formula with standard double-precision trigonometry.
/// Antipodal points and poles get no special casing; the intended domain is
/// city-to-city distances.
///
/// # Examples
///
/// ```
/// use geolookup_core::geo::{distance_km, Coord};
///
/// let austin = Coord::new(30.27, -97.74);
/// let boston = Coord::new(42.36, -71.06);
/// let d = distance_km(austin, boston);
/// assert!((d - 2384.0).abs() < 20.0);
/// ```
pub fn distance_km(a: Coord, b: Coord) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lon / 2.0).sin().powi(2);

    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Initial bearing (forward azimuth) from `a` to `b` in degrees, [0, 360).
///
/// 0° is due north, 90° due east.
pub fn initial_bearing_deg(a: Coord, b: Coord) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let d_lon = (b.lon - a.lon).to_radians();

    let y = d_lon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();

    (y.atan2(x).to_degrees() + 360.0) % 360.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const AUSTIN: Coord = Coord {
        lat: 30.27,
        lon: -97.74,
    };
    const BOSTON: Coord = Coord {
        lat: 42.36,
        lon: -71.06,
    };
    const BERLIN: Coord = Coord {
        lat: 52.52,
        lon: 13.40,
    };

    #[test]
    fn distance_is_symmetric() {
        for (a, b) in [(AUSTIN, BOSTON), (AUSTIN, BERLIN), (BOSTON, BERLIN)] {
            assert_relative_eq!(distance_km(a, b), distance_km(b, a), max_relative = 1e-9);
        }
    }

    #[test]
    fn distance_zero_identity() {
        assert_eq!(distance_km(AUSTIN, AUSTIN), 0.0);
        assert_eq!(distance_km(BERLIN, BERLIN), 0.0);
    }

    #[test]
    fn triangle_inequality() {
        let direct = distance_km(AUSTIN, BERLIN);
        let via_boston = distance_km(AUSTIN, BOSTON) + distance_km(BOSTON, BERLIN);
        assert!(direct <= via_boston + 1e-6);
    }

    #[test]
    fn austin_to_boston_is_about_2384_km() {
        let d = distance_km(AUSTIN, BOSTON);
        assert!((d - 2384.0).abs() < 20.0, "got {d}");
    }

    #[test]
    fn bearing_due_east_at_equator() {
        let origin = Coord::new(0.0, 0.0);
        let east = Coord::new(0.0, 10.0);
        assert_relative_eq!(initial_bearing_deg(origin, east), 90.0, epsilon = 1e-6);
    }

    #[test]
    fn bearing_due_north() {
        let origin = Coord::new(10.0, 20.0);
        let north = Coord::new(30.0, 20.0);
        assert_relative_eq!(initial_bearing_deg(origin, north), 0.0, epsilon = 1e-6);
    }
}
