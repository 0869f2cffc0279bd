use crate::model::id::{ReservationId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod event;

/// Minimum lead time for a volunteer-initiated cancellation, in milliseconds.
pub const CANCEL_WINDOW_MS: i64 = 48 * 60 * 60 * 1000;

/// Whether a cancellation of a session scheduled at `scheduled_at` may be
/// initiated at `now`. The boundary is inclusive: exactly 48 hours ahead is
/// still cancelable. Sessions in the past (or starting right now) are not.
///
/// The same predicate serves two callers: response assembly marks bookings
/// with an advisory `cancelable` flag, and the cancel transaction enforces
/// the rule authoritatively.
pub fn is_cancelable(scheduled_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    (scheduled_at - now).num_milliseconds() >= CANCEL_WINDOW_MS
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "reservation_status", rename_all = "lowercase")]
pub enum ReservationStatus {
    Open,
    Booked,
    Cancelled,
    Completed,
}

#[derive(Debug)]
pub struct Reservation {
    pub reservation_id: ReservationId,
    pub scheduled_at: DateTime<Utc>,
    pub duration_minutes: i32,
    pub volunteer_id: Option<UserId>,
    pub status: ReservationStatus,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub senior: ReservationSenior,
}

#[derive(Debug)]
pub struct ReservationSenior {
    pub senior_id: UserId,
    pub senior_name: String,
}

/// A completed session's feedback comment, listed per senior.
#[derive(Debug)]
pub struct SessionComment {
    pub reservation_id: ReservationId,
    pub volunteer_id: UserId,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap()
    }

    #[test]
    fn exactly_forty_eight_hours_ahead_is_cancelable() {
        let now = now();
        assert!(is_cancelable(now + Duration::hours(48), now));
    }

    #[test]
    fn one_millisecond_inside_the_window_is_not_cancelable() {
        let now = now();
        let scheduled = now + Duration::hours(48) - Duration::milliseconds(1);
        assert!(!is_cancelable(scheduled, now));
    }

    #[test]
    fn far_future_session_is_cancelable() {
        let now = now();
        assert!(is_cancelable(now + Duration::days(30), now));
    }

    #[test]
    fn session_starting_now_is_not_cancelable() {
        let now = now();
        assert!(!is_cancelable(now, now));
    }

    #[test]
    fn past_session_is_never_cancelable() {
        let now = now();
        assert!(!is_cancelable(now - Duration::milliseconds(1), now));
        assert!(!is_cancelable(now - Duration::days(7), now));
    }

    #[test]
    fn predicate_matches_the_window_constant() {
        let now = now();
        for offset_ms in [-1i64, 0, 1, CANCEL_WINDOW_MS - 1, CANCEL_WINDOW_MS] {
            let scheduled = now + Duration::milliseconds(offset_ms);
            assert_eq!(
                is_cancelable(scheduled, now),
                offset_ms >= CANCEL_WINDOW_MS,
                "offset {offset_ms}ms"
            );
        }
    }
}
