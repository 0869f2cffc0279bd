use axum::{
    routing::{get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::reservation::{
    book_reservation, cancel_reservation, complete_reservation, show_my_reservations,
    show_open_reservations, show_reservation, show_senior_comments, show_timesheet,
    show_total_hours,
};

pub fn build_reservation_routers() -> Router<AppRegistry> {
    let reservation_routers = Router::new()
        .route("/open", get(show_open_reservations))
        .route("/me", get(show_my_reservations))
        .route("/:reservation_id", get(show_reservation))
        .route("/:reservation_id/book", post(book_reservation))
        .route("/:reservation_id/cancel", post(cancel_reservation))
        .route("/:reservation_id/complete", post(complete_reservation));

    let timesheet_routers = Router::new()
        .route("/", get(show_timesheet))
        .route("/hours", get(show_total_hours));

    let senior_routers = Router::new().route("/:senior_id/comments", get(show_senior_comments));

    Router::new()
        .nest("/reservations", reservation_routers)
        .nest("/timesheet", timesheet_routers)
        .nest("/seniors", senior_routers)
}
