use crate::models::AnalyticsResponse;
use crate::services::aggregator;
use crate::AppState;
use rocket::serde::json::Json;
use rocket::{get, State};

#[get("/")]
pub async fn analytics(state: &State<AppState>) -> Json<AnalyticsResponse> {
    Json(aggregator::analytics_overview(&state.youtube).await)
}
