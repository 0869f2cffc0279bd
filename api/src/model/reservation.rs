use chrono::{DateTime, Utc};
use garde::Validate;
use kernel::model::{
    id::{ReservationId, UserId},
    reservation::{is_cancelable, Reservation, ReservationSenior, ReservationStatus, SessionComment},
};
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationsResponse {
    pub items: Vec<ReservationResponse>,
}

impl ReservationsResponse {
    pub fn from_reservations(value: Vec<Reservation>, now: DateTime<Utc>) -> Self {
        Self {
            items: value
                .into_iter()
                .map(|r| ReservationResponse::from_reservation(r, now))
                .collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationResponse {
    pub reservation_id: ReservationId,
    pub scheduled_at: DateTime<Utc>,
    pub duration_minutes: i32,
    pub volunteer_id: Option<UserId>,
    pub status: ReservationStatus,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub senior: ReservationSeniorResponse,
    /// Advisory: whether a cancel action should be offered. The cancel
    /// endpoint re-checks authoritatively.
    pub cancelable: bool,
}

impl ReservationResponse {
    pub fn from_reservation(value: Reservation, now: DateTime<Utc>) -> Self {
        let Reservation {
            reservation_id,
            scheduled_at,
            duration_minutes,
            volunteer_id,
            status,
            comment,
            created_at,
            senior,
        } = value;
        let cancelable = status == ReservationStatus::Booked && is_cancelable(scheduled_at, now);
        Self {
            reservation_id,
            scheduled_at,
            duration_minutes,
            volunteer_id,
            status,
            comment,
            created_at,
            senior: senior.into(),
            cancelable,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationSeniorResponse {
    pub senior_id: UserId,
    pub senior_name: String,
}

impl From<ReservationSenior> for ReservationSeniorResponse {
    fn from(value: ReservationSenior) -> Self {
        let ReservationSenior {
            senior_id,
            senior_name,
        } = value;
        Self {
            senior_id,
            senior_name,
        }
    }
}

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CompleteReservationRequest {
    #[garde(inner(length(max = 2000)))]
    pub comment: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalHoursResponse {
    pub total_hours: f64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionCommentsResponse {
    pub items: Vec<SessionCommentResponse>,
}

impl From<Vec<SessionComment>> for SessionCommentsResponse {
    fn from(value: Vec<SessionComment>) -> Self {
        Self {
            items: value.into_iter().map(SessionCommentResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionCommentResponse {
    pub reservation_id: ReservationId,
    pub volunteer_id: UserId,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

impl From<SessionComment> for SessionCommentResponse {
    fn from(value: SessionComment) -> Self {
        let SessionComment {
            reservation_id,
            volunteer_id,
            comment,
            created_at,
        } = value;
        Self {
            reservation_id,
            volunteer_id,
            comment,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn reservation(scheduled_at: DateTime<Utc>, status: ReservationStatus) -> Reservation {
        Reservation {
            reservation_id: ReservationId::new(),
            scheduled_at,
            duration_minutes: 60,
            volunteer_id: Some(UserId::new()),
            status,
            comment: None,
            created_at: scheduled_at - Duration::days(14),
            senior: ReservationSenior {
                senior_id: UserId::new(),
                senior_name: "Margaret".into(),
            },
        }
    }

    #[test]
    fn booked_session_far_ahead_offers_cancel() {
        let now = Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap();
        let res = ReservationResponse::from_reservation(
            reservation(now + Duration::hours(49), ReservationStatus::Booked),
            now,
        );
        assert!(res.cancelable);
    }

    #[test]
    fn booked_session_inside_window_does_not_offer_cancel() {
        let now = Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap();
        let res = ReservationResponse::from_reservation(
            reservation(now + Duration::hours(47), ReservationStatus::Booked),
            now,
        );
        assert!(!res.cancelable);
    }

    #[test]
    fn open_slot_never_offers_cancel() {
        let now = Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap();
        let res = ReservationResponse::from_reservation(
            reservation(now + Duration::days(10), ReservationStatus::Open),
            now,
        );
        assert!(!res.cancelable);
    }
}
