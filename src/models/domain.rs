use serde::{Deserialize, Serialize};

/// Geographic coordinate (decimal degrees)
///
/// Latitude is in [-90, 90], longitude in [-180, 180]. Immutable value type;
/// range validation happens at the HTTP boundary before one of these is built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Lifecycle of a recipient request
///
/// `Active -> Fulfilled` is written only by a successful claim and happens
/// exactly once. `Active -> Inactive` is an external transition (e.g. an
/// organization withdrawing); the matching core never writes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Active,
    Fulfilled,
    Inactive,
}

/// Lifecycle of a donation offer
///
/// The core transitions `Pending -> Assigned` at most once, atomically with
/// marking the matched request fulfilled. `Assigned -> Completed` is external.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DonationStatus {
    Pending,
    Assigned,
    Completed,
}

/// A standing need for food donations, posted by an NGO or shelter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodRequest {
    pub id: String,
    #[serde(rename = "organizationName")]
    pub organization_name: String,
    #[serde(rename = "requirementType")]
    pub requirement_type: String,
    #[serde(rename = "quantityRequired")]
    pub quantity_required: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(rename = "contactNumber")]
    pub contact_number: String,
    pub status: RequestStatus,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl FoodRequest {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }

    /// Eligible as a match candidate
    pub fn is_active(&self) -> bool {
        self.status == RequestStatus::Active
    }
}

/// An offer of food from a donor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Donation {
    pub id: String,
    #[serde(rename = "foodType")]
    pub food_type: String,
    pub quantity: String,
    #[serde(rename = "pickupTime")]
    pub pickup_time: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(rename = "contactNumber")]
    pub contact_number: String,
    #[serde(rename = "contactName")]
    pub contact_name: String,
    pub status: DonationStatus,
    /// Set if and only if status is `Assigned` (by the core's writes)
    #[serde(rename = "matchedRequestId")]
    pub matched_request_id: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Donation {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

/// Insert payload for a new request; id, status and timestamp are assigned
/// by the store
#[derive(Debug, Clone)]
pub struct NewFoodRequest {
    pub organization_name: String,
    pub requirement_type: String,
    pub quantity_required: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub contact_number: String,
}

/// Insert payload for a new donation
#[derive(Debug, Clone)]
pub struct NewDonation {
    pub food_type: String,
    pub quantity: String,
    pub pickup_time: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub contact_number: String,
    pub contact_name: String,
}
