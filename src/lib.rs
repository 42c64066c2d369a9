//! MealBridge - Geolocation matching service for food donations
//!
//! This library matches incoming food donations to open recipient requests by
//! geographic proximity, then performs an exclusive, irreversible claim so
//! that no request is matched twice and no donation is assigned more than
//! once.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{estimate_distance, estimate_eta, AssignmentCoordinator, MatchResult, Matcher};
pub use crate::models::{
    Coordinate, Donation, DonationStatus, FoodRequest, MatchSummary, RequestStatus,
};
pub use crate::services::{MemStorage, Storage, StorageError};
