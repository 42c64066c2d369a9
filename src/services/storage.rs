use std::collections::HashMap;
use std::sync::RwLock;

use thiserror::Error;
use uuid::Uuid;

use crate::models::{
    Donation, DonationStatus, FoodRequest, NewDonation, NewFoodRequest, RequestStatus,
};

/// Errors that can occur when interacting with the store
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("storage lock poisoned")]
    Poisoned,
}

/// Repository contract the matching core depends on
///
/// The core only needs a snapshot of active requests, a conditional
/// request-side claim, and the donation-side half of the claim. The rest is
/// the CRUD surface used by the HTTP layer. Implementations must make
/// `try_set_request_fulfilled` atomic with respect to concurrent callers;
/// that single primitive is what keeps two simultaneous assignments from
/// claiming the same request.
pub trait Storage: Send + Sync {
    // Donations
    fn create_donation(&self, new: NewDonation) -> Result<Donation, StorageError>;
    fn get_donation(&self, id: &str) -> Result<Option<Donation>, StorageError>;
    /// All donations, newest first
    fn list_donations(&self) -> Result<Vec<Donation>, StorageError>;
    /// Donation-side half of the claim: status -> assigned, link recorded
    fn set_donation_assigned(
        &self,
        id: &str,
        matched_request_id: &str,
    ) -> Result<Donation, StorageError>;

    // Requests
    fn create_request(&self, new: NewFoodRequest) -> Result<FoodRequest, StorageError>;
    fn get_request(&self, id: &str) -> Result<Option<FoodRequest>, StorageError>;
    /// All requests regardless of status, newest first
    fn list_requests(&self) -> Result<Vec<FoodRequest>, StorageError>;
    /// Snapshot of requests with status = active at call time, newest first
    fn list_active_requests(&self) -> Result<Vec<FoodRequest>, StorageError>;
    /// Conditional claim: active -> fulfilled. Returns false when the
    /// request was no longer active (already claimed or deactivated).
    fn try_set_request_fulfilled(&self, id: &str) -> Result<bool, StorageError>;
}

#[derive(Default)]
struct StoreInner {
    donations: HashMap<String, Donation>,
    requests: HashMap<String, FoodRequest>,
}

/// In-memory store backing the service
///
/// A single `RwLock` guards both entity maps; the conditional claim runs
/// under the write lock, which is what makes it a true compare-and-set.
#[derive(Default)]
pub struct MemStorage {
    inner: RwLock<StoreInner>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with a few demo organizations around Midtown
    /// Manhattan, handy for local development
    pub fn with_sample_data() -> Self {
        let storage = Self::new();

        let samples = [
            NewFoodRequest {
                organization_name: "Hope Community Shelter".to_string(),
                requirement_type: "Cooked meals".to_string(),
                quantity_required: "50 servings/day".to_string(),
                address: "123 Main St, Downtown".to_string(),
                latitude: 40.7589,
                longitude: -73.9851,
                contact_number: "+1-555-0101".to_string(),
            },
            NewFoodRequest {
                organization_name: "City Food Bank".to_string(),
                requirement_type: "Fresh produce and packaged food".to_string(),
                quantity_required: "100kg daily".to_string(),
                address: "456 Oak Ave, Midtown".to_string(),
                latitude: 40.7489,
                longitude: -73.9651,
                contact_number: "+1-555-0102".to_string(),
            },
            NewFoodRequest {
                organization_name: "Sunrise Shelter".to_string(),
                requirement_type: "Any food donations".to_string(),
                quantity_required: "30-40 meals".to_string(),
                address: "789 Pine Rd, Uptown".to_string(),
                latitude: 40.7789,
                longitude: -73.9551,
                contact_number: "+1-555-0103".to_string(),
            },
        ];

        for sample in samples {
            // Fresh store, lock cannot be poisoned yet
            let _ = storage.create_request(sample);
        }

        storage
    }
}

impl Storage for MemStorage {
    fn create_donation(&self, new: NewDonation) -> Result<Donation, StorageError> {
        let donation = Donation {
            id: Uuid::new_v4().to_string(),
            food_type: new.food_type,
            quantity: new.quantity,
            pickup_time: new.pickup_time,
            address: new.address,
            latitude: new.latitude,
            longitude: new.longitude,
            contact_number: new.contact_number,
            contact_name: new.contact_name,
            status: DonationStatus::Pending,
            matched_request_id: None,
            created_at: chrono::Utc::now(),
        };

        let mut inner = self.inner.write().map_err(|_| StorageError::Poisoned)?;
        inner.donations.insert(donation.id.clone(), donation.clone());
        Ok(donation)
    }

    fn get_donation(&self, id: &str) -> Result<Option<Donation>, StorageError> {
        let inner = self.inner.read().map_err(|_| StorageError::Poisoned)?;
        Ok(inner.donations.get(id).cloned())
    }

    fn list_donations(&self) -> Result<Vec<Donation>, StorageError> {
        let inner = self.inner.read().map_err(|_| StorageError::Poisoned)?;
        let mut donations: Vec<Donation> = inner.donations.values().cloned().collect();
        donations.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(donations)
    }

    fn set_donation_assigned(
        &self,
        id: &str,
        matched_request_id: &str,
    ) -> Result<Donation, StorageError> {
        let mut inner = self.inner.write().map_err(|_| StorageError::Poisoned)?;
        let donation = inner
            .donations
            .get_mut(id)
            .ok_or_else(|| StorageError::NotFound(format!("donation {}", id)))?;

        donation.status = DonationStatus::Assigned;
        donation.matched_request_id = Some(matched_request_id.to_string());
        Ok(donation.clone())
    }

    fn create_request(&self, new: NewFoodRequest) -> Result<FoodRequest, StorageError> {
        let request = FoodRequest {
            id: Uuid::new_v4().to_string(),
            organization_name: new.organization_name,
            requirement_type: new.requirement_type,
            quantity_required: new.quantity_required,
            address: new.address,
            latitude: new.latitude,
            longitude: new.longitude,
            contact_number: new.contact_number,
            status: RequestStatus::Active,
            created_at: chrono::Utc::now(),
        };

        let mut inner = self.inner.write().map_err(|_| StorageError::Poisoned)?;
        inner.requests.insert(request.id.clone(), request.clone());
        Ok(request)
    }

    fn get_request(&self, id: &str) -> Result<Option<FoodRequest>, StorageError> {
        let inner = self.inner.read().map_err(|_| StorageError::Poisoned)?;
        Ok(inner.requests.get(id).cloned())
    }

    fn list_requests(&self) -> Result<Vec<FoodRequest>, StorageError> {
        let inner = self.inner.read().map_err(|_| StorageError::Poisoned)?;
        let mut requests: Vec<FoodRequest> = inner.requests.values().cloned().collect();
        requests.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(requests)
    }

    fn list_active_requests(&self) -> Result<Vec<FoodRequest>, StorageError> {
        let inner = self.inner.read().map_err(|_| StorageError::Poisoned)?;
        let mut requests: Vec<FoodRequest> = inner
            .requests
            .values()
            .filter(|r| r.is_active())
            .cloned()
            .collect();
        requests.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(requests)
    }

    fn try_set_request_fulfilled(&self, id: &str) -> Result<bool, StorageError> {
        let mut inner = self.inner.write().map_err(|_| StorageError::Poisoned)?;
        match inner.requests.get_mut(id) {
            Some(request) if request.is_active() => {
                request.status = RequestStatus::Fulfilled;
                Ok(true)
            }
            // Already claimed or deactivated: the caller lost the race
            Some(_) => Ok(false),
            None => Err(StorageError::NotFound(format!("request {}", id))),
        }
    }
}
