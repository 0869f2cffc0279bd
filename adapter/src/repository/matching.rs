use crate::database::{
    model::matching::{MatchPartnerRow, UpcomingSessionRow},
    ConnectionPool,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use derive_new::new;
use kernel::{
    model::{
        id::UserId,
        matching::{MatchOverview, MatchPartner, UpcomingSession},
        reservation::ReservationStatus,
    },
    repository::matching::MatchRepository,
};
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct MatchRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl MatchRepository for MatchRepositoryImpl {
    async fn find_overview(
        &self,
        user_id: UserId,
        now: DateTime<Utc>,
    ) -> AppResult<MatchOverview> {
        // A match row names both sides; the partner is whichever side the
        // caller is not. Profile preferred names fall back to account names.
        let permanent = sqlx::query_as::<_, MatchPartnerRow>(
            "SELECT u.user_id AS partner_id,
                    COALESCE(p.preferred_name, u.user_name) AS preferred_name
             FROM matches AS m
             INNER JOIN users AS u
                 ON u.user_id = CASE WHEN m.volunteer_id = $1
                                     THEN m.senior_id
                                     ELSE m.volunteer_id END
             LEFT JOIN volunteer_profiles AS p ON p.user_id = u.user_id
             WHERE m.volunteer_id = $1 OR m.senior_id = $1",
        )
        .bind(user_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?
        .map(MatchPartner::from);

        let sessions = sqlx::query_as::<_, UpcomingSessionRow>(
            "SELECT COALESCE(p.preferred_name, u.user_name) AS preferred_name,
                    r.scheduled_at
             FROM reservations AS r
             INNER JOIN users AS u
                 ON u.user_id = CASE WHEN r.volunteer_id = $1
                                     THEN r.senior_id
                                     ELSE r.volunteer_id END
             LEFT JOIN volunteer_profiles AS p ON p.user_id = u.user_id
             WHERE (r.volunteer_id = $1 OR r.senior_id = $1)
               AND r.status = $2
               AND r.scheduled_at > $3
             ORDER BY r.scheduled_at ASC",
        )
        .bind(user_id)
        .bind(ReservationStatus::Booked)
        .bind(now)
        .fetch_all(self.db.inner_ref())
        .await
        .map(|rows| rows.into_iter().map(UpcomingSession::from).collect())
        .map_err(AppError::SpecificOperationError)?;

        Ok(MatchOverview {
            permanent,
            sessions,
        })
    }
}
