use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::idea::show_conversation_ideas;

pub fn build_idea_routers() -> Router<AppRegistry> {
    Router::new().route("/ideas", get(show_conversation_ideas))
}
