use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::models::{CreateFoodRequestRequest, ErrorResponse, NewFoodRequest};
use crate::routes::donations::AppState;

/// Configure request routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/requests", web::get().to(list_requests))
        .route("/requests", web::post().to(create_request))
        .route("/requests/active", web::get().to(list_active_requests));
}

/// List active requests (the default safe view for donors)
///
/// GET /api/requests
async fn list_requests(state: web::Data<AppState>) -> impl Responder {
    match state.storage.list_active_requests() {
        Ok(requests) => HttpResponse::Ok().json(requests),
        Err(e) => {
            tracing::error!("Failed to fetch requests: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch requests".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Create a new food request
///
/// POST /api/requests
async fn create_request(
    state: web::Data<AppState>,
    req: web::Json<CreateFoodRequestRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for create_request request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Invalid request data".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    match state
        .storage
        .create_request(NewFoodRequest::from(req.into_inner()))
    {
        Ok(request) => HttpResponse::Created().json(request),
        Err(e) => {
            tracing::error!("Failed to create request: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to create request".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// List active requests for the matching view
///
/// GET /api/requests/active
async fn list_active_requests(state: web::Data<AppState>) -> impl Responder {
    match state.storage.list_active_requests() {
        Ok(requests) => HttpResponse::Ok().json(requests),
        Err(e) => {
            tracing::error!("Failed to fetch active requests: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch active requests".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}
