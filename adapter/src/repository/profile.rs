use crate::database::{
    model::profile::{PrivateProfileRow, PublicProfileRow},
    ConnectionPool,
};
use async_trait::async_trait;
use derive_new::new;
use kernel::{
    model::{
        id::UserId,
        profile::{event::UpdateProfile, PrivateProfile, PublicProfile},
    },
    repository::profile::ProfileRepository,
};
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct ProfileRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl ProfileRepository for ProfileRepositoryImpl {
    async fn find_partitions(
        &self,
        user_id: UserId,
    ) -> AppResult<(Option<PublicProfile>, Option<PrivateProfile>)> {
        let public = sqlx::query_as::<_, PublicProfileRow>(
            "SELECT first_name, last_name, preferred_name, senior_home
             FROM volunteer_profiles WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?
        .map(PublicProfile::from);

        let private = sqlx::query_as::<_, PrivateProfileRow>(
            "SELECT preferred_name, email, phone_number, gender, birthday
             FROM private_volunteer_profiles WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?
        .map(PrivateProfile::from);

        Ok((public, private))
    }

    // Registration and profile editing write both partitions together, so a
    // half-updated profile is never observable.
    async fn upsert(&self, event: UpdateProfile) -> AppResult<()> {
        let mut tx = self.db.begin().await?;

        sqlx::query(
            "INSERT INTO volunteer_profiles
                 (user_id, first_name, last_name, preferred_name, senior_home)
             VALUES ($1, $2, $3, $4, $5)
             ON CONFLICT (user_id) DO UPDATE SET
                 first_name = EXCLUDED.first_name,
                 last_name = EXCLUDED.last_name,
                 preferred_name = EXCLUDED.preferred_name,
                 senior_home = EXCLUDED.senior_home",
        )
        .bind(event.user_id)
        .bind(&event.public.first_name)
        .bind(&event.public.last_name)
        .bind(&event.public.preferred_name)
        .bind(&event.public.senior_home)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        sqlx::query(
            "INSERT INTO private_volunteer_profiles
                 (user_id, preferred_name, email, phone_number, gender, birthday)
             VALUES ($1, $2, $3, $4, $5, $6)
             ON CONFLICT (user_id) DO UPDATE SET
                 preferred_name = EXCLUDED.preferred_name,
                 email = EXCLUDED.email,
                 phone_number = EXCLUDED.phone_number,
                 gender = EXCLUDED.gender,
                 birthday = EXCLUDED.birthday",
        )
        .bind(event.user_id)
        .bind(&event.private.preferred_name)
        .bind(&event.private.email)
        .bind(&event.private.phone_number)
        .bind(&event.private.gender)
        .bind(event.private.birthday)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(())
    }

    async fn find_email_preferences(&self, user_id: UserId) -> AppResult<Vec<String>> {
        let homes: Option<Vec<String>> = sqlx::query_scalar(
            "SELECT email_preferences FROM private_volunteer_profiles WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(homes.unwrap_or_default())
    }

    // The private partition row may not exist yet when preferences are first
    // saved, so this is an upsert that leaves the other columns alone.
    async fn update_email_preferences(
        &self,
        user_id: UserId,
        homes: Vec<String>,
    ) -> AppResult<()> {
        let res = sqlx::query(
            "INSERT INTO private_volunteer_profiles (user_id, email_preferences)
             VALUES ($1, $2)
             ON CONFLICT (user_id) DO UPDATE SET
                 email_preferences = EXCLUDED.email_preferences",
        )
        .bind(user_id)
        .bind(&homes)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "no email preference record has been saved".into(),
            ));
        }

        Ok(())
    }
}
