use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::core::matcher::Matcher;
use crate::models::{AssignResponse, Donation, MatchSummary};
use crate::services::{Storage, StorageError};

/// Default bound on claim retries after a lost race
pub const DEFAULT_MAX_CLAIM_ATTEMPTS: u32 = 3;

/// Errors surfaced by an assignment attempt
///
/// A missing match is not an error; it is the no-match outcome. Only
/// repository failures surface here, and they mean the donation is still
/// pending.
#[derive(Debug, Error)]
pub enum AssignError {
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Orchestrates matching and the claim transition
///
/// The only component that mutates shared state. The claim is a conditional
/// write (`try_set_request_fulfilled`): when it reports the request was no
/// longer active, a concurrent attempt won the race and this attempt re-runs
/// the match against a fresh snapshot, up to `max_claim_attempts` times.
/// Exhausted retries fall through to the no-match outcome.
#[derive(Clone)]
pub struct AssignmentCoordinator {
    storage: Arc<dyn Storage>,
    matcher: Matcher,
    max_claim_attempts: u32,
}

impl AssignmentCoordinator {
    pub fn new(storage: Arc<dyn Storage>, matcher: Matcher, max_claim_attempts: u32) -> Self {
        Self {
            storage,
            matcher,
            max_claim_attempts,
        }
    }

    pub fn with_defaults(storage: Arc<dyn Storage>) -> Self {
        Self::new(storage, Matcher::default(), DEFAULT_MAX_CLAIM_ATTEMPTS)
    }

    /// Match a pending donation against the current active requests and, if
    /// a candidate is found within radius, claim it
    ///
    /// On success the donation comes back assigned and linked to the
    /// fulfilled request, together with a presentation summary. The two
    /// status writes land as one logical unit: the request side is the
    /// conditional gate, and the donation side is only written after that
    /// gate is won, so no reader ever observes the same request claimed
    /// twice.
    pub fn assign(&self, donation: &Donation) -> Result<AssignResponse, AssignError> {
        for attempt in 0..self.max_claim_attempts {
            let active = self.storage.list_active_requests()?;

            let Some(found) = self.matcher.find_nearest(donation.coordinate(), &active) else {
                debug!(
                    donation_id = %donation.id,
                    candidates = active.len(),
                    "no active request within radius"
                );
                return Ok(AssignResponse {
                    donation: donation.clone(),
                    match_summary: None,
                });
            };

            if !self.storage.try_set_request_fulfilled(&found.request.id)? {
                warn!(
                    donation_id = %donation.id,
                    request_id = %found.request.id,
                    attempt = attempt + 1,
                    "claim conflict, rescanning with fresh snapshot"
                );
                continue;
            }

            let updated = self
                .storage
                .set_donation_assigned(&donation.id, &found.request.id)?;

            info!(
                donation_id = %updated.id,
                request_id = %found.request.id,
                distance_km = found.distance_km,
                "donation assigned"
            );

            return Ok(AssignResponse {
                donation: updated,
                match_summary: Some(MatchSummary {
                    name: found.request.organization_name,
                    distance: found.distance_km,
                    eta: found.eta,
                    address: found.request.address,
                    contact: found.request.contact_number,
                }),
            });
        }

        warn!(
            donation_id = %donation.id,
            attempts = self.max_claim_attempts,
            "claim retries exhausted, treating as no-match"
        );
        Ok(AssignResponse {
            donation: donation.clone(),
            match_summary: None,
        })
    }
}
