use serde::Serialize;
use tracing::{info, warn};

use crate::models::ActivityListing;
use crate::registry::{ActivityRegistry, RegistryResult};

/// Success body for the mutating endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Acknowledgement {
    pub message: String,
}

/// One card on the index page.
pub struct ActivityCardView {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub spots_left: usize,
    pub participants: Vec<String>,
}

pub async fn list_activities(registry: &ActivityRegistry) -> ActivityListing {
    registry.list().await
}

pub async fn signup(
    registry: &ActivityRegistry,
    activity_name: &str,
    email: &str,
) -> RegistryResult<Acknowledgement> {
    match registry.signup(activity_name, email).await {
        Ok(()) => {
            info!(activity = %activity_name, email = %email, "signup accepted");
            Ok(Acknowledgement {
                message: format!("Signed up {} for {}", email, activity_name),
            })
        }
        Err(e) => {
            warn!(activity = %activity_name, email = %email, error = %e, "signup rejected");
            Err(e)
        }
    }
}

pub async fn unregister(
    registry: &ActivityRegistry,
    activity_name: &str,
    email: &str,
) -> RegistryResult<Acknowledgement> {
    match registry.unregister(activity_name, email).await {
        Ok(()) => {
            info!(activity = %activity_name, email = %email, "participant removed");
            Ok(Acknowledgement {
                message: format!("Removed {} from {}", email, activity_name),
            })
        }
        Err(e) => {
            warn!(activity = %activity_name, email = %email, error = %e, "unregister rejected");
            Err(e)
        }
    }
}

/// Index page cards, built from the same snapshot `GET /activities` returns.
pub fn activity_cards(listing: ActivityListing) -> Vec<ActivityCardView> {
    listing
        .into_iter()
        .map(|a| ActivityCardView {
            spots_left: a.spots_left(),
            name: a.name,
            description: a.description,
            schedule: a.schedule,
            max_participants: a.max_participants,
            participants: a.participants,
        })
        .collect()
}
