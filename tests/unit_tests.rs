// Unit tests for the MealBridge estimator and matcher

use mealbridge::core::{
    distance::{estimate_distance, estimate_eta},
    matcher::Matcher,
};
use mealbridge::models::{Coordinate, FoodRequest, RequestStatus};
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

// Times Square-ish; the reference point used throughout these tests
const ORIGIN: Coordinate = Coordinate {
    latitude: 40.7589,
    longitude: -73.9851,
};

#[test]
fn test_distance_zero_for_identical_points() {
    assert_eq!(estimate_distance(ORIGIN, ORIGIN), 0.0);
}

#[test]
fn test_distance_symmetry() {
    let brooklyn = Coordinate::new(40.6782, -73.9442);
    assert_eq!(
        estimate_distance(ORIGIN, brooklyn),
        estimate_distance(brooklyn, ORIGIN)
    );

    let tokyo = Coordinate::new(35.6762, 139.6503);
    let sydney = Coordinate::new(-33.8688, 151.2093);
    assert_eq!(
        estimate_distance(tokyo, sydney),
        estimate_distance(sydney, tokyo)
    );
}

#[test]
fn test_distance_manhattan_to_brooklyn() {
    // Manhattan to Brooklyn is approximately 5-10 km
    let brooklyn = Coordinate::new(40.6782, -73.9442);
    let distance = estimate_distance(ORIGIN, brooklyn);
    assert!(distance > 5.0 && distance < 15.0);
}

#[test]
fn test_distance_has_one_decimal() {
    let b = Coordinate::new(40.7489, -73.9651);
    let distance = estimate_distance(ORIGIN, b);
    assert_eq!(distance, (distance * 10.0).round() / 10.0);
}

#[test]
fn test_eta_formats() {
    assert_eq!(estimate_eta(0.0), "0 min");
    assert_eq!(estimate_eta(12.0), "24 min");
    assert_eq!(estimate_eta(45.0), "1h 30min");
    assert_eq!(estimate_eta(30.0), "1h");
}

#[test]
fn test_matcher_only_returns_active_in_radius() {
    let matcher = Matcher::default();
    let candidates = vec![
        // Fulfilled at zero distance: must be skipped
        create_request("claimed", 40.7589, -73.9851, RequestStatus::Fulfilled),
        // Inactive at zero distance: must be skipped
        create_request("withdrawn", 40.7589, -73.9851, RequestStatus::Inactive),
        // Active but ~10 km away: out of the 5 km radius
        create_request("far", 40.8489, -73.9851, RequestStatus::Active),
        // Active at ~4 km: the only eligible candidate
        create_request("eligible", 40.7949, -73.9851, RequestStatus::Active),
    ];

    let result = matcher.find_nearest(ORIGIN, &candidates).unwrap();
    assert_eq!(result.request.id, "eligible");
    assert_eq!(result.request.status, RequestStatus::Active);
    assert!(result.distance_km <= matcher.max_distance_km());
}

#[test]
fn test_matcher_no_active_candidates() {
    let matcher = Matcher::default();
    let candidates = vec![
        create_request("1", 40.7589, -73.9851, RequestStatus::Fulfilled),
        create_request("2", 40.7489, -73.9651, RequestStatus::Inactive),
    ];

    assert!(matcher.find_nearest(ORIGIN, &candidates).is_none());
}

#[test]
fn test_matcher_tie_break_is_first_in_input_order() {
    let matcher = Matcher::default();
    // Both exactly 2.0 km from the origin (same latitude offset, north and
    // south), so the running minimum is never replaced after the first
    let candidates = vec![
        create_request("north", 40.7769, -73.9851, RequestStatus::Active),
        create_request("south", 40.7409, -73.9851, RequestStatus::Active),
    ];

    let result = matcher.find_nearest(ORIGIN, &candidates).unwrap();
    assert_eq!(result.request.id, "north");

    // Reversed input order flips the winner
    let reversed: Vec<FoodRequest> = candidates.into_iter().rev().collect();
    let result = matcher.find_nearest(ORIGIN, &reversed).unwrap();
    assert_eq!(result.request.id, "south");
}

#[test]
fn test_matcher_no_match_is_idempotent() {
    let matcher = Matcher::default();
    let candidates = vec![create_request("far", 40.8489, -73.9851, RequestStatus::Active)];

    let first = matcher.find_nearest(ORIGIN, &candidates);
    let second = matcher.find_nearest(ORIGIN, &candidates);
    assert!(first.is_none());
    assert!(second.is_none());
}

#[test]
fn test_matcher_custom_radius() {
    // A 15 km radius admits the ~10 km candidate the default rejects
    let matcher = Matcher::new(15.0);
    let candidates = vec![create_request("far", 40.8489, -73.9851, RequestStatus::Active)];

    let result = matcher.find_nearest(ORIGIN, &candidates).unwrap();
    assert_eq!(result.request.id, "far");
    assert_eq!(result.distance_km, 10.0);
    assert_eq!(result.eta, "20 min");
}
