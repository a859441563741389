use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use serde::Deserialize;
use tracing::debug;

use crate::error::ApiError;
use crate::models::ActivityListing;
use crate::registry::RegistryError;
use crate::services::activities_service::{self, Acknowledgement};
use crate::web::AppState;

#[derive(Debug, Deserialize, Default)]
pub struct ParticipantQuery {
    pub email: Option<String>,
}

impl ParticipantQuery {
    fn into_email(self) -> Result<String, ApiError> {
        self.email.ok_or(ApiError::MissingEmail)
    }
}

/// A name that does not decode cannot be a catalog key.
fn decode_activity_name(path: Result<Path<String>, PathRejection>) -> Result<String, ApiError> {
    match path {
        Ok(Path(name)) => Ok(name),
        Err(rejection) => {
            debug!(error = %rejection, "undecodable activity name");
            Err(RegistryError::NotFound.into())
        }
    }
}

fn participant_email(
    query: Result<Query<ParticipantQuery>, QueryRejection>,
) -> Result<String, ApiError> {
    let Query(query) = query?;
    query.into_email()
}

pub async fn list_activities_handler(State(state): State<AppState>) -> Json<ActivityListing> {
    Json(activities_service::list_activities(&state.registry).await)
}

pub async fn signup_handler(
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<ParticipantQuery>, QueryRejection>,
    State(state): State<AppState>,
) -> Result<Json<Acknowledgement>, ApiError> {
    let activity_name = decode_activity_name(path)?;
    let email = participant_email(query)?;
    let ack = activities_service::signup(&state.registry, &activity_name, &email).await?;
    Ok(Json(ack))
}

pub async fn unregister_handler(
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<ParticipantQuery>, QueryRejection>,
    State(state): State<AppState>,
) -> Result<Json<Acknowledgement>, ApiError> {
    let activity_name = decode_activity_name(path)?;
    let email = participant_email(query)?;
    let ack = activities_service::unregister(&state.registry, &activity_name, &email).await?;
    Ok(Json(ack))
}
