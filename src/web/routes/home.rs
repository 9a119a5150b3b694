use askama::Template;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
};
use tracing::error;

use crate::database::ActivityRegistry;
use crate::services::activities_service::{self, ActivityCardView};

#[derive(Template)]
#[template(path = "index.html")]
pub struct HomeTemplate {
    pub activities: Vec<ActivityCardView>,
}

pub async fn home_handler(State(registry): State<ActivityRegistry>) -> impl IntoResponse {
    let template = HomeTemplate {
        activities: activities_service::build_activity_cards(&registry),
    };

    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            error!("Landing page render failed: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
