use axum::{
    extract::{Path, Query, State},
    Json,
};
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::database::ActivityRegistry;
use crate::models::ActivityRecord;
use crate::services::activities_service::{self, ActivityError};

#[derive(Debug, Deserialize)]
pub struct ParticipantQuery {
    pub email: String,
}

pub async fn list_activities_handler(
    State(registry): State<ActivityRegistry>,
) -> Json<IndexMap<String, ActivityRecord>> {
    Json(activities_service::list_activities(&registry))
}

// Path segments arrive percent-decoded, so "Programming%20Club" matches.
pub async fn signup_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<ParticipantQuery>,
    State(registry): State<ActivityRegistry>,
) -> Result<Json<Value>, ActivityError> {
    activities_service::signup(&registry, &activity_name, &query.email)
        .map(|message| Json(serde_json::json!({ "message": message })))
        .map_err(|e| {
            warn!(activity = %activity_name, email = %query.email, "signup rejected: {}", e);
            e
        })
}

pub async fn unregister_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<ParticipantQuery>,
    State(registry): State<ActivityRegistry>,
) -> Result<Json<Value>, ActivityError> {
    activities_service::unregister(&registry, &activity_name, &query.email)
        .map(|message| Json(serde_json::json!({ "message": message })))
        .map_err(|e| {
            warn!(activity = %activity_name, email = %query.email, "unregister rejected: {}", e);
            e
        })
}
