use crate::models::ContentIdea;
use crate::services::ideas;
use crate::AppState;
use log::info;
use rocket::serde::json::Json;
use rocket::{get, State};

#[get("/")]
pub async fn list_ideas(state: &State<AppState>) -> Json<Vec<ContentIdea>> {
    let ideas = ideas::initial_ideas(&state.youtube).await;
    info!("Generated {} initial content ideas", ideas.len());
    Json(ideas)
}

#[get("/generate?<topic>")]
pub async fn generate_idea(
    topic: Option<String>,
    state: &State<AppState>,
) -> Json<Option<ContentIdea>> {
    let topic = topic.unwrap_or_default();
    let topic = topic.trim();
    if topic.is_empty() {
        return Json(None);
    }
    Json(ideas::idea_for_topic(&state.youtube, topic).await)
}
