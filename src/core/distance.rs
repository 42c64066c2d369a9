use crate::models::Coordinate;

/// Earth's radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Assumed average travel speed in city traffic, km/h
const AVERAGE_SPEED_KMH: f64 = 30.0;

/// Estimate the great-circle distance between two coordinates in kilometers
///
/// Uses the Haversine formula and rounds the result to one decimal place.
/// The rounded value is the observable distance everywhere downstream: the
/// matcher compares it against the radius and the match summary reports it.
///
/// # Returns
/// Distance in kilometers, rounded to one decimal place
#[inline]
pub fn estimate_distance(a: Coordinate, b: Coordinate) -> f64 {
    let lat1_rad = a.latitude.to_radians();
    let lat2_rad = b.latitude.to_radians();
    let delta_lat = (b.latitude - a.latitude).to_radians();
    let delta_lon = (b.longitude - a.longitude).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    let d = EARTH_RADIUS_KM * c;
    (d * 10.0).round() / 10.0
}

/// Derive a human-readable travel-time estimate from a distance
///
/// Assumes a constant 30 km/h average speed. Formats as `"<m> min"` under an
/// hour, otherwise `"<h>h <m>min"`, dropping the minutes segment when zero.
pub fn estimate_eta(distance_km: f64) -> String {
    let hours = distance_km / AVERAGE_SPEED_KMH;
    let minutes = (hours * 60.0).round() as u64;

    if minutes < 60 {
        format!("{} min", minutes)
    } else {
        let hrs = minutes / 60;
        let mins = minutes % 60;
        if mins > 0 {
            format!("{}h {}min", hrs, mins)
        } else {
            format!("{}h", hrs)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_london_to_paris() {
        // Approximately 344 km
        let london = Coordinate::new(51.5074, -0.1278);
        let paris = Coordinate::new(48.8566, 2.3522);

        let distance = estimate_distance(london, paris);
        assert!(
            (distance - 344.0).abs() < 10.0,
            "Distance should be ~344km, got {}",
            distance
        );
    }

    #[test]
    fn test_distance_identical_coordinates_is_zero() {
        let p = Coordinate::new(40.7589, -73.9851);
        assert_eq!(estimate_distance(p, p), 0.0);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = Coordinate::new(40.7589, -73.9851);
        let b = Coordinate::new(40.6782, -73.9442);
        assert_eq!(estimate_distance(a, b), estimate_distance(b, a));
    }

    #[test]
    fn test_distance_rounded_to_one_decimal() {
        let a = Coordinate::new(40.7589, -73.9851);
        let b = Coordinate::new(40.7489, -73.9651);

        let distance = estimate_distance(a, b);
        assert_eq!(distance, (distance * 10.0).round() / 10.0);
        assert_eq!(distance, 2.0);
    }

    #[test]
    fn test_eta_under_an_hour() {
        assert_eq!(estimate_eta(12.0), "24 min");
        assert_eq!(estimate_eta(2.0), "4 min");
    }

    #[test]
    fn test_eta_zero_distance() {
        assert_eq!(estimate_eta(0.0), "0 min");
    }

    #[test]
    fn test_eta_hours_and_minutes() {
        assert_eq!(estimate_eta(45.0), "1h 30min");
    }

    #[test]
    fn test_eta_whole_hours_drop_minutes() {
        assert_eq!(estimate_eta(30.0), "1h");
        assert_eq!(estimate_eta(60.0), "2h");
    }
}
