use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::services::activities_service::{ActivityError, ActivityErrorKind};

impl ActivityError {
    pub fn status_code(&self) -> StatusCode {
        match self.kind() {
            ActivityErrorKind::NotFound => StatusCode::NOT_FOUND,
            // Clients of this API expect 400 for capacity and duplicate conflicts.
            ActivityErrorKind::Conflict | ActivityErrorKind::Invalid => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ActivityError {
    fn into_response(self) -> Response {
        (
            self.status_code(),
            Json(serde_json::json!({ "detail": self.to_string() })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes() {
        assert_eq!(
            ActivityError::ActivityNotFound.status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ActivityError::ParticipantNotFound.status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ActivityError::AlreadySignedUp.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ActivityError::ActivityFull.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ActivityError::MissingEmail.status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn into_response_uses_status_code() {
        let response = ActivityError::ActivityFull.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
