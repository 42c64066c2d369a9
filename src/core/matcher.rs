use crate::core::distance::{estimate_distance, estimate_eta};
use crate::models::{Coordinate, FoodRequest};

/// Default matching radius in kilometers
pub const DEFAULT_MAX_DISTANCE_KM: f64 = 5.0;

/// Result of a single matching call
///
/// Ephemeral; never persisted. Carries the winning request together with the
/// rounded distance and the ETA derived from it.
#[derive(Debug, Clone)]
pub struct MatchResult {
    pub request: FoodRequest,
    pub distance_km: f64,
    pub eta: String,
}

/// Nearest-candidate search over active requests
///
/// Performs a linear scan; at the target scale (tens to low thousands of
/// open requests) this beats any indexing scheme on simplicity.
#[derive(Debug, Clone, Copy)]
pub struct Matcher {
    max_distance_km: f64,
}

impl Matcher {
    pub fn new(max_distance_km: f64) -> Self {
        Self { max_distance_km }
    }

    pub fn max_distance_km(&self) -> f64 {
        self.max_distance_km
    }

    /// Find the nearest active request within radius of `origin`
    ///
    /// Candidates that are not active are skipped. Among in-radius
    /// candidates the strictly smallest distance wins; on equal distances
    /// the candidate appearing first in the input list is kept (the running
    /// minimum is only replaced on strict less-than). Returns `None` when no
    /// active candidate lies within radius.
    ///
    /// Does not mutate its inputs; the winner is cloned out.
    pub fn find_nearest(
        &self,
        origin: Coordinate,
        candidates: &[FoodRequest],
    ) -> Option<MatchResult> {
        let mut nearest: Option<MatchResult> = None;
        let mut min_distance = f64::INFINITY;

        for request in candidates.iter().filter(|r| r.is_active()) {
            let distance = estimate_distance(origin, request.coordinate());

            if distance <= self.max_distance_km && distance < min_distance {
                min_distance = distance;
                nearest = Some(MatchResult {
                    request: request.clone(),
                    distance_km: distance,
                    eta: estimate_eta(distance),
                });
            }
        }

        nearest
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DISTANCE_KM)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RequestStatus;
    use chrono::Utc;

    fn create_request(id: &str, lat: f64, lon: f64, status: RequestStatus) -> FoodRequest {
        FoodRequest {
            id: id.to_string(),
            organization_name: format!("Org {}", id),
            requirement_type: "Any food donations".to_string(),
            quantity_required: "30-40 meals".to_string(),
            address: format!("{} Example St", id),
            latitude: lat,
            longitude: lon,
            contact_number: "+1-555-0100".to_string(),
            status,
            created_at: Utc::now(),
        }
    }

    const ORIGIN: Coordinate = Coordinate {
        latitude: 40.7589,
        longitude: -73.9851,
    };

    #[test]
    fn test_empty_candidate_list_returns_none() {
        let matcher = Matcher::default();
        assert!(matcher.find_nearest(ORIGIN, &[]).is_none());
    }

    #[test]
    fn test_skips_non_active_candidates() {
        let matcher = Matcher::default();
        let candidates = vec![
            create_request("1", 40.7589, -73.9851, RequestStatus::Fulfilled),
            create_request("2", 40.7589, -73.9851, RequestStatus::Inactive),
        ];

        assert!(matcher.find_nearest(ORIGIN, &candidates).is_none());
    }

    #[test]
    fn test_out_of_radius_returns_none() {
        let matcher = Matcher::default();
        // ~10 km north of the origin, radius is 5
        let candidates = vec![create_request("1", 40.8489, -73.9851, RequestStatus::Active)];

        assert!(matcher.find_nearest(ORIGIN, &candidates).is_none());
    }

    #[test]
    fn test_picks_closest_of_two() {
        let matcher = Matcher::default();
        // ~4 km and ~2 km north of the origin
        let candidates = vec![
            create_request("far", 40.7949, -73.9851, RequestStatus::Active),
            create_request("near", 40.7769, -73.9851, RequestStatus::Active),
        ];

        let result = matcher.find_nearest(ORIGIN, &candidates).unwrap();
        assert_eq!(result.request.id, "near");
        assert_eq!(result.distance_km, 2.0);
    }

    #[test]
    fn test_tie_break_first_in_input_order_wins() {
        let matcher = Matcher::default();
        // Equidistant: same latitude offset north and south
        let candidates = vec![
            create_request("first", 40.7769, -73.9851, RequestStatus::Active),
            create_request("second", 40.7409, -73.9851, RequestStatus::Active),
        ];

        let result = matcher.find_nearest(ORIGIN, &candidates).unwrap();
        assert_eq!(result.request.id, "first");
    }

    #[test]
    fn test_exact_coincidence_matches_at_zero() {
        let matcher = Matcher::default();
        let candidates = vec![create_request("1", 40.7589, -73.9851, RequestStatus::Active)];

        let result = matcher.find_nearest(ORIGIN, &candidates).unwrap();
        assert_eq!(result.distance_km, 0.0);
        assert_eq!(result.eta, "0 min");
    }

    #[test]
    fn test_no_match_is_idempotent() {
        let matcher = Matcher::default();
        let candidates = vec![create_request("1", 40.8489, -73.9851, RequestStatus::Active)];

        assert!(matcher.find_nearest(ORIGIN, &candidates).is_none());
        assert!(matcher.find_nearest(ORIGIN, &candidates).is_none());
    }

    #[test]
    fn test_does_not_mutate_candidates() {
        let matcher = Matcher::default();
        let candidates = vec![create_request("1", 40.7769, -73.9851, RequestStatus::Active)];

        let _ = matcher.find_nearest(ORIGIN, &candidates);
        assert_eq!(candidates[0].status, RequestStatus::Active);
    }
}
