// Core algorithm exports
pub mod coordinator;
pub mod distance;
pub mod matcher;

pub use coordinator::{AssignError, AssignmentCoordinator, DEFAULT_MAX_CLAIM_ATTEMPTS};
pub use distance::{estimate_distance, estimate_eta};
pub use matcher::{MatchResult, Matcher, DEFAULT_MAX_DISTANCE_KM};
