//! Next-date endpoint

use axum::{Router, extract::Query, http::StatusCode, routing::get};
use scheduler_core::date::parse_compact;
use serde::Deserialize;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/nextdate", get(next_date))
}

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct NextDateParams {
    pub now: String,
    pub date: String,
    pub repeat: String,
}

/// GET /api/nextdate?now=YYYYMMDD&date=YYYYMMDD&repeat=RULE
///
/// Answers with the bare date, or a 400 with the error message as plain text.
async fn next_date(Query(params): Query<NextDateParams>) -> Result<String, (StatusCode, String)> {
    let now = parse_compact(&params.now).map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            "invalid 'now' date format".to_string(),
        )
    })?;

    scheduler_core::next_date(now, &params.date, &params.repeat)
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))
}
