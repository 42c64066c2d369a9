// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Coordinate, Donation, DonationStatus, FoodRequest, NewDonation, NewFoodRequest, RequestStatus,
};
pub use requests::{CreateDonationRequest, CreateFoodRequestRequest};
pub use responses::{AssignResponse, ErrorResponse, HealthResponse, MatchSummary};
