use kernel::model::{
    id::{ReservationId, UserId},
    reservation::{Reservation, ReservationSenior, ReservationStatus, SessionComment},
};
use sqlx::types::chrono::{DateTime, Utc};

/// A reservation joined with the senior it belongs to.
#[derive(sqlx::FromRow)]
pub struct ReservationRow {
    pub reservation_id: ReservationId,
    pub senior_id: UserId,
    pub senior_name: String,
    pub scheduled_at: DateTime<Utc>,
    pub duration_minutes: i32,
    pub volunteer_id: Option<UserId>,
    pub status: ReservationStatus,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<ReservationRow> for Reservation {
    fn from(value: ReservationRow) -> Self {
        let ReservationRow {
            reservation_id,
            senior_id,
            senior_name,
            scheduled_at,
            duration_minutes,
            volunteer_id,
            status,
            comment,
            created_at,
        } = value;
        Reservation {
            reservation_id,
            scheduled_at,
            duration_minutes,
            volunteer_id,
            status,
            comment,
            created_at,
            senior: ReservationSenior {
                senior_id,
                senior_name,
            },
        }
    }
}

#[derive(sqlx::FromRow)]
pub struct SessionCommentRow {
    pub reservation_id: ReservationId,
    pub volunteer_id: UserId,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

impl From<SessionCommentRow> for SessionComment {
    fn from(value: SessionCommentRow) -> Self {
        let SessionCommentRow {
            reservation_id,
            volunteer_id,
            comment,
            created_at,
        } = value;
        SessionComment {
            reservation_id,
            volunteer_id,
            comment,
            created_at,
        }
    }
}

/// Occupancy snapshot read inside the book/cancel/complete transactions.
#[derive(sqlx::FromRow)]
pub struct ReservationStateRow {
    pub scheduled_at: DateTime<Utc>,
    pub volunteer_id: Option<UserId>,
    pub status: ReservationStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn open_row_converts_without_occupant() {
        let row = ReservationRow {
            reservation_id: ReservationId::new(),
            senior_id: UserId::new(),
            senior_name: "Margaret".into(),
            scheduled_at: Utc.with_ymd_and_hms(2025, 4, 1, 15, 0, 0).unwrap(),
            duration_minutes: 60,
            volunteer_id: None,
            status: ReservationStatus::Open,
            comment: None,
            created_at: Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap(),
        };
        let reservation = Reservation::from(row);
        assert!(reservation.volunteer_id.is_none());
        assert_eq!(reservation.status, ReservationStatus::Open);
        assert_eq!(reservation.senior.senior_name, "Margaret");
    }
}
