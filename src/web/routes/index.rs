use askama::Template;
use axum::{extract::State, response::Html};

use crate::error::ApiError;
use crate::services::activities_service::{self, ActivityCardView};
use crate::web::AppState;
use crate::BUILD_ID;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub activities: Vec<ActivityCardView>,
    pub build_id: &'static str,
}

pub async fn index_handler(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let listing = activities_service::list_activities(&state.registry).await;
    let template = IndexTemplate {
        activities: activities_service::activity_cards(listing),
        build_id: BUILD_ID,
    };
    Ok(Html(template.render()?))
}
