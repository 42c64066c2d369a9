use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{NewDonation, NewFoodRequest};

/// Payload for creating a new donation offer
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateDonationRequest {
    #[validate(length(min = 1, message = "Food type is required"))]
    #[serde(alias = "food_type", rename = "foodType")]
    pub food_type: String,
    #[validate(length(min = 1, message = "Quantity is required"))]
    pub quantity: String,
    #[validate(length(min = 1, message = "Pickup time is required"))]
    #[serde(alias = "pickup_time", rename = "pickupTime")]
    pub pickup_time: String,
    #[validate(length(min = 5, message = "Address must be at least 5 characters"))]
    pub address: String,
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
    #[validate(length(min = 10, message = "Valid contact number required"))]
    #[serde(alias = "contact_number", rename = "contactNumber")]
    pub contact_number: String,
    #[validate(length(min = 2, message = "Contact name required"))]
    #[serde(alias = "contact_name", rename = "contactName")]
    pub contact_name: String,
}

impl From<CreateDonationRequest> for NewDonation {
    fn from(req: CreateDonationRequest) -> Self {
        NewDonation {
            food_type: req.food_type,
            quantity: req.quantity,
            pickup_time: req.pickup_time,
            address: req.address,
            latitude: req.latitude,
            longitude: req.longitude,
            contact_number: req.contact_number,
            contact_name: req.contact_name,
        }
    }
}

/// Payload for creating a new recipient request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateFoodRequestRequest {
    #[validate(length(min = 2, message = "Organization name is required"))]
    #[serde(alias = "organization_name", rename = "organizationName")]
    pub organization_name: String,
    #[validate(length(min = 1, message = "Requirement type is required"))]
    #[serde(alias = "requirement_type", rename = "requirementType")]
    pub requirement_type: String,
    #[validate(length(min = 1, message = "Quantity required is required"))]
    #[serde(alias = "quantity_required", rename = "quantityRequired")]
    pub quantity_required: String,
    #[validate(length(min = 5, message = "Address must be at least 5 characters"))]
    pub address: String,
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
    #[validate(length(min = 10, message = "Valid contact number required"))]
    #[serde(alias = "contact_number", rename = "contactNumber")]
    pub contact_number: String,
}

impl From<CreateFoodRequestRequest> for NewFoodRequest {
    fn from(req: CreateFoodRequestRequest) -> Self {
        NewFoodRequest {
            organization_name: req.organization_name,
            requirement_type: req.requirement_type,
            quantity_required: req.quantity_required,
            address: req.address,
            latitude: req.latitude,
            longitude: req.longitude,
            contact_number: req.contact_number,
        }
    }
}
