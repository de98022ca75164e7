use crate::AppState;
use askama::Template;
use axum::{extract::State, response::IntoResponse};

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub identifiers: Vec<String>,
}

pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    IndexTemplate {
        identifiers: state.directory.identifiers(),
    }
}

pub async fn health_check() -> &'static str {
    "OK"
}
