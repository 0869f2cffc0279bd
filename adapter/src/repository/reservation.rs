use crate::database::{
    model::reservation::{ReservationRow, ReservationStateRow, SessionCommentRow},
    ConnectionPool,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use derive_new::new;
use kernel::{
    model::{
        id::{ReservationId, UserId},
        reservation::{
            event::{BookReservation, CancelReservation, CompleteReservation},
            is_cancelable, Reservation, ReservationStatus, SessionComment,
        },
    },
    repository::reservation::ReservationRepository,
};
use shared::error::{AppError, AppResult};

const RESERVATION_COLUMNS: &str = "\
    r.reservation_id, \
    r.senior_id, \
    u.user_name AS senior_name, \
    r.scheduled_at, \
    r.duration_minutes, \
    r.volunteer_id, \
    r.status, \
    r.comment, \
    r.created_at";

#[derive(new)]
pub struct ReservationRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl ReservationRepository for ReservationRepositoryImpl {
    async fn find_open(&self, now: DateTime<Utc>) -> AppResult<Vec<Reservation>> {
        sqlx::query_as::<_, ReservationRow>(&format!(
            "SELECT {RESERVATION_COLUMNS}
             FROM reservations AS r
             INNER JOIN users AS u ON r.senior_id = u.user_id
             WHERE r.status = $1 AND r.scheduled_at > $2
             ORDER BY r.scheduled_at ASC",
        ))
        .bind(ReservationStatus::Open)
        .bind(now)
        .fetch_all(self.db.inner_ref())
        .await
        .map(|rows| rows.into_iter().map(Reservation::from).collect())
        .map_err(AppError::SpecificOperationError)
    }

    async fn find_by_volunteer(&self, volunteer_id: UserId) -> AppResult<Vec<Reservation>> {
        sqlx::query_as::<_, ReservationRow>(&format!(
            "SELECT {RESERVATION_COLUMNS}
             FROM reservations AS r
             INNER JOIN users AS u ON r.senior_id = u.user_id
             WHERE r.volunteer_id = $1 AND r.status = $2
             ORDER BY r.scheduled_at ASC",
        ))
        .bind(volunteer_id)
        .bind(ReservationStatus::Booked)
        .fetch_all(self.db.inner_ref())
        .await
        .map(|rows| rows.into_iter().map(Reservation::from).collect())
        .map_err(AppError::SpecificOperationError)
    }

    async fn find_timesheet(
        &self,
        volunteer_id: UserId,
        today: DateTime<Utc>,
    ) -> AppResult<Vec<Reservation>> {
        sqlx::query_as::<_, ReservationRow>(&format!(
            "SELECT {RESERVATION_COLUMNS}
             FROM reservations AS r
             INNER JOIN users AS u ON r.senior_id = u.user_id
             WHERE r.volunteer_id = $1
               AND r.scheduled_at <= $2
               AND (r.status = $3 OR r.status = $4)
             ORDER BY r.scheduled_at DESC",
        ))
        .bind(volunteer_id)
        .bind(today)
        .bind(ReservationStatus::Booked)
        .bind(ReservationStatus::Completed)
        .fetch_all(self.db.inner_ref())
        .await
        .map(|rows| rows.into_iter().map(Reservation::from).collect())
        .map_err(AppError::SpecificOperationError)
    }

    async fn find_by_id(&self, reservation_id: ReservationId) -> AppResult<Reservation> {
        sqlx::query_as::<_, ReservationRow>(&format!(
            "SELECT {RESERVATION_COLUMNS}
             FROM reservations AS r
             INNER JOIN users AS u ON r.senior_id = u.user_id
             WHERE r.reservation_id = $1",
        ))
        .bind(reservation_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?
        .map(Reservation::from)
        .ok_or_else(|| {
            AppError::EntityNotFound(format!("reservation {reservation_id} not found"))
        })
    }

    async fn book(&self, event: BookReservation) -> AppResult<()> {
        let mut tx = self.db.begin().await?;
        self.set_transaction_serializable(&mut tx).await?;

        let state = self
            .fetch_state(&mut tx, event.reservation_id)
            .await?
            .ok_or_else(|| {
                AppError::EntityNotFound(format!(
                    "reservation {} not found",
                    event.reservation_id
                ))
            })?;

        // occupant present iff booked; both checked to keep the invariant
        if state.status != ReservationStatus::Open || state.volunteer_id.is_some() {
            return Err(AppError::UnprocessableEntity(format!(
                "reservation {} is not open for booking",
                event.reservation_id
            )));
        }

        let res = sqlx::query(
            "UPDATE reservations
             SET volunteer_id = $2, status = $3
             WHERE reservation_id = $1",
        )
        .bind(event.reservation_id)
        .bind(event.volunteer_id)
        .bind(ReservationStatus::Booked)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "no reservation record has been booked".into(),
            ));
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(())
    }

    async fn cancel(&self, event: CancelReservation) -> AppResult<()> {
        let mut tx = self.db.begin().await?;
        self.set_transaction_serializable(&mut tx).await?;

        let state = self
            .fetch_state(&mut tx, event.reservation_id)
            .await?
            .ok_or_else(|| {
                AppError::EntityNotFound(format!(
                    "reservation {} not found",
                    event.reservation_id
                ))
            })?;

        if state.status != ReservationStatus::Booked
            || state.volunteer_id != Some(event.requested_by)
        {
            return Err(AppError::ForbiddenOperation(format!(
                "reservation {} is not booked by the requesting user",
                event.reservation_id
            )));
        }

        // The advisory client-side check is repeated here as the
        // authoritative one; the window may have closed in between.
        if !is_cancelable(state.scheduled_at, event.now) {
            return Err(AppError::ForbiddenOperation(
                "sessions can only be cancelled at least 48 hours in advance".into(),
            ));
        }

        // release the slot: back to open, occupant cleared
        let res = sqlx::query(
            "UPDATE reservations
             SET volunteer_id = NULL, status = $2
             WHERE reservation_id = $1",
        )
        .bind(event.reservation_id)
        .bind(ReservationStatus::Open)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "no reservation record has been cancelled".into(),
            ));
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(())
    }

    async fn complete(&self, event: CompleteReservation) -> AppResult<()> {
        let mut tx = self.db.begin().await?;
        self.set_transaction_serializable(&mut tx).await?;

        let state = self
            .fetch_state(&mut tx, event.reservation_id)
            .await?
            .ok_or_else(|| {
                AppError::EntityNotFound(format!(
                    "reservation {} not found",
                    event.reservation_id
                ))
            })?;

        if state.status != ReservationStatus::Booked
            || state.volunteer_id != Some(event.requested_by)
        {
            return Err(AppError::ForbiddenOperation(format!(
                "reservation {} is not booked by the requesting user",
                event.reservation_id
            )));
        }

        let res = sqlx::query(
            "UPDATE reservations
             SET status = $2, comment = $3
             WHERE reservation_id = $1",
        )
        .bind(event.reservation_id)
        .bind(ReservationStatus::Completed)
        .bind(&event.comment)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "no reservation record has been completed".into(),
            ));
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(())
    }

    async fn total_hours(&self, volunteer_id: UserId) -> AppResult<f64> {
        let total_minutes: i64 = sqlx::query_scalar(
            "SELECT COALESCE(SUM(duration_minutes), 0)::BIGINT
             FROM reservations
             WHERE volunteer_id = $1 AND status = $2",
        )
        .bind(volunteer_id)
        .bind(ReservationStatus::Completed)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(total_minutes as f64 / 60.0)
    }

    async fn find_comments_by_senior(
        &self,
        senior_id: UserId,
    ) -> AppResult<Vec<SessionComment>> {
        sqlx::query_as::<_, SessionCommentRow>(
            "SELECT reservation_id, volunteer_id, comment, created_at
             FROM reservations
             WHERE senior_id = $1 AND status = $2 AND comment IS NOT NULL
             ORDER BY created_at DESC",
        )
        .bind(senior_id)
        .bind(ReservationStatus::Completed)
        .fetch_all(self.db.inner_ref())
        .await
        .map(|rows| rows.into_iter().map(SessionComment::from).collect())
        .map_err(AppError::SpecificOperationError)
    }
}

impl ReservationRepositoryImpl {
    // book/cancel/complete race on the same row, so their transactions run
    // SERIALIZABLE; losers surface as a database error and the client retries.
    async fn set_transaction_serializable(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    ) -> AppResult<()> {
        sqlx::query("SET TRANSACTION ISOLATION LEVEL SERIALIZABLE")
            .execute(&mut **tx)
            .await
            .map_err(AppError::SpecificOperationError)?;
        Ok(())
    }

    async fn fetch_state(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        reservation_id: ReservationId,
    ) -> AppResult<Option<ReservationStateRow>> {
        sqlx::query_as::<_, ReservationStateRow>(
            "SELECT scheduled_at, volunteer_id, status
             FROM reservations
             WHERE reservation_id = $1",
        )
        .bind(reservation_id)
        .fetch_optional(&mut **tx)
        .await
        .map_err(AppError::SpecificOperationError)
    }
}
