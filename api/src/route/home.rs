use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::home::show_senior_homes;

pub fn build_home_routers() -> Router<AppRegistry> {
    Router::new().route("/homes", get(show_senior_homes))
}
