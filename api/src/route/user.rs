use axum::{
    routing::{get, post, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::{
    matching::show_my_match,
    profile::{
        get_my_email_preferences, get_my_profile, update_my_email_preferences, update_my_profile,
    },
    questionnaire::{update_my_interests, update_my_personality},
    user::{get_current_user, register_user},
};

pub fn build_user_routers() -> Router<AppRegistry> {
    let user_routers = Router::new()
        .route("/", post(register_user))
        .route("/me", get(get_current_user))
        .route("/me/profile", get(get_my_profile))
        .route("/me/profile", put(update_my_profile))
        .route("/me/interests", put(update_my_interests))
        .route("/me/personality", put(update_my_personality))
        .route("/me/match", get(show_my_match))
        .route("/me/preferences", get(get_my_email_preferences))
        .route("/me/preferences", put(update_my_email_preferences));

    Router::new().nest("/users", user_routers)
}
