use crate::{
    extractor::AuthorizedUser,
    model::reservation::{
        CompleteReservationRequest, ReservationResponse, ReservationsResponse,
        SessionCommentsResponse, TotalHoursResponse,
    },
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use garde::Validate;
use kernel::model::{
    id::{ReservationId, UserId},
    reservation::event::{BookReservation, CancelReservation, CompleteReservation},
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn show_open_reservations(
    _user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ReservationsResponse>> {
    let now = Utc::now();
    registry
        .reservation_repository()
        .find_open(now)
        .await
        .map(|items| ReservationsResponse::from_reservations(items, now))
        .map(Json)
}

pub async fn show_my_reservations(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ReservationsResponse>> {
    registry
        .reservation_repository()
        .find_by_volunteer(user.id())
        .await
        .map(|items| ReservationsResponse::from_reservations(items, Utc::now()))
        .map(Json)
}

pub async fn show_reservation(
    _user: AuthorizedUser,
    Path(reservation_id): Path<ReservationId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ReservationResponse>> {
    registry
        .reservation_repository()
        .find_by_id(reservation_id)
        .await
        .map(|r| ReservationResponse::from_reservation(r, Utc::now()))
        .map(Json)
}

pub async fn book_reservation(
    user: AuthorizedUser,
    Path(reservation_id): Path<ReservationId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    // slots are claimed by volunteers; seniors only view them
    if !user.is_volunteer() {
        return Err(AppError::UnauthorizedError);
    }

    registry
        .reservation_repository()
        .book(BookReservation::new(reservation_id, user.id()))
        .await
        .map(|_| StatusCode::OK)
}

pub async fn cancel_reservation(
    user: AuthorizedUser,
    Path(reservation_id): Path<ReservationId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    registry
        .reservation_repository()
        .cancel(CancelReservation::new(reservation_id, user.id(), Utc::now()))
        .await
        .map(|_| StatusCode::OK)
}

pub async fn complete_reservation(
    user: AuthorizedUser,
    Path(reservation_id): Path<ReservationId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<CompleteReservationRequest>,
) -> AppResult<StatusCode> {
    req.validate(&())?;

    registry
        .reservation_repository()
        .complete(CompleteReservation::new(
            reservation_id,
            user.id(),
            req.comment,
        ))
        .await
        .map(|_| StatusCode::OK)
}

pub async fn show_timesheet(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ReservationsResponse>> {
    let now = Utc::now();
    registry
        .reservation_repository()
        .find_timesheet(user.id(), now)
        .await
        .map(|items| ReservationsResponse::from_reservations(items, now))
        .map(Json)
}

pub async fn show_total_hours(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<TotalHoursResponse>> {
    registry
        .reservation_repository()
        .total_hours(user.id())
        .await
        .map(|total_hours| Json(TotalHoursResponse { total_hours }))
}

pub async fn show_senior_comments(
    _user: AuthorizedUser,
    Path(senior_id): Path<UserId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<SessionCommentsResponse>> {
    registry
        .reservation_repository()
        .find_comments_by_senior(senior_id)
        .await
        .map(SessionCommentsResponse::from)
        .map(Json)
}
