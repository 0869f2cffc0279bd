use crate::model::{
    id::{ReservationId, UserId},
    reservation::{
        event::{BookReservation, CancelReservation, CompleteReservation},
        Reservation, SessionComment,
    },
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shared::error::AppResult;

#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// Open slots starting after `now`, oldest first.
    async fn find_open(&self, now: DateTime<Utc>) -> AppResult<Vec<Reservation>>;
    /// The volunteer's booked upcoming sessions.
    async fn find_by_volunteer(&self, volunteer_id: UserId) -> AppResult<Vec<Reservation>>;
    /// The volunteer's sessions that started on or before `today`,
    /// booked or completed, newest first. Feeds the timesheet.
    async fn find_timesheet(
        &self,
        volunteer_id: UserId,
        today: DateTime<Utc>,
    ) -> AppResult<Vec<Reservation>>;
    async fn find_by_id(&self, reservation_id: ReservationId) -> AppResult<Reservation>;
    /// Claim an open slot for a volunteer.
    async fn book(&self, event: BookReservation) -> AppResult<()>;
    /// Release a booked slot back to open. Enforces both occupancy and the
    /// cancellation window.
    async fn cancel(&self, event: CancelReservation) -> AppResult<()>;
    /// Mark a booked session completed, recording the volunteer's comment.
    async fn complete(&self, event: CompleteReservation) -> AppResult<()>;
    /// Total completed hours for a volunteer.
    async fn total_hours(&self, volunteer_id: UserId) -> AppResult<f64>;
    /// Feedback comments left on a senior's completed sessions, newest first.
    async fn find_comments_by_senior(&self, senior_id: UserId)
        -> AppResult<Vec<SessionComment>>;
}
