use serde::{Deserialize, Serialize};

use crate::models::domain::Donation;

/// Summary of a successful match, for presentation to the donor
///
/// All fields are derived from the matched request at assignment time, never
/// independently stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchSummary {
    pub name: String,
    /// Kilometers, rounded to one decimal place
    pub distance: f64,
    pub eta: String,
    pub address: String,
    pub contact: String,
}

/// Response for the donation creation endpoint: the (possibly assigned)
/// donation, plus a match summary when one was found within radius
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignResponse {
    pub donation: Donation,
    #[serde(rename = "match", skip_serializing_if = "Option::is_none")]
    pub match_summary: Option<MatchSummary>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
