use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::core::AssignmentCoordinator;
use crate::models::{CreateDonationRequest, ErrorResponse, NewDonation};
use crate::services::Storage;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn Storage>,
    pub coordinator: AssignmentCoordinator,
}

/// Configure donation routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/donations", web::get().to(list_donations))
        .route("/donations", web::post().to(create_donation));
}

/// List all donations, newest first
///
/// GET /api/donations
async fn list_donations(state: web::Data<AppState>) -> impl Responder {
    match state.storage.list_donations() {
        Ok(donations) => HttpResponse::Ok().json(donations),
        Err(e) => {
            tracing::error!("Failed to fetch donations: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch donations".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Create a donation and match it with the nearest active request
///
/// POST /api/donations
///
/// Request body:
/// ```json
/// {
///   "foodType": "string",
///   "quantity": "string",
///   "pickupTime": "string",
///   "address": "string",
///   "latitude": 40.7589,
///   "longitude": -73.9851,
///   "contactNumber": "string",
///   "contactName": "string"
/// }
/// ```
///
/// Responds 201 with `{donation, match?}`; `match` is present only when an
/// active request was claimed within the configured radius.
async fn create_donation(
    state: web::Data<AppState>,
    req: web::Json<CreateDonationRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for create_donation request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Invalid donation data".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let donation = match state.storage.create_donation(NewDonation::from(req.into_inner())) {
        Ok(donation) => donation,
        Err(e) => {
            tracing::error!("Failed to create donation: {}", e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to create donation".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    match state.coordinator.assign(&donation) {
        Ok(outcome) => HttpResponse::Created().json(outcome),
        Err(e) => {
            tracing::error!("Assignment failed for donation {}: {}", donation.id, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to create donation".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}
