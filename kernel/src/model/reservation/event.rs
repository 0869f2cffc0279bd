use crate::model::id::{ReservationId, UserId};
use chrono::{DateTime, Utc};
use derive_new::new;

#[derive(new)]
pub struct BookReservation {
    pub reservation_id: ReservationId,
    pub volunteer_id: UserId,
}

#[derive(new)]
pub struct CancelReservation {
    pub reservation_id: ReservationId,
    pub requested_by: UserId,
    pub now: DateTime<Utc>,
}

#[derive(new)]
pub struct CompleteReservation {
    pub reservation_id: ReservationId,
    pub requested_by: UserId,
    pub comment: Option<String>,
}
