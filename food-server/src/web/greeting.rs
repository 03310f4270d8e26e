//! Greeting 页面

use axum::{
    Router,
    extract::{Query, State},
    response::Html,
    routing::get,
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::utils::AppResult;
use crate::web::views::{GreetingView, render};

pub fn router() -> Router<ServerState> {
    Router::new().route("/greeting", get(show))
}

#[derive(Debug, Deserialize)]
pub struct GreetingQuery {
    pub name: Option<String>,
}

/// GET /greeting?name=...
pub async fn show(
    State(state): State<ServerState>,
    Query(query): Query<GreetingQuery>,
) -> AppResult<Html<String>> {
    render(&GreetingView {
        current_greeting: state.greeter.message_of_the_day(),
        name: query.name.unwrap_or_default(),
    })
}
