use crate::database::ConnectionPool;
use async_trait::async_trait;
use derive_new::new;
use kernel::{
    model::questionnaire::event::{RegisterInterests, RegisterPersonality},
    repository::questionnaire::QuestionnaireRepository,
};
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct QuestionnaireRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl QuestionnaireRepository for QuestionnaireRepositoryImpl {
    async fn upsert_interests(&self, event: RegisterInterests) -> AppResult<()> {
        let res = sqlx::query(
            "INSERT INTO user_interests
                 (user_id, gardening, literature, visual_arts, music, fitness)
             VALUES ($1, $2, $3, $4, $5, $6)
             ON CONFLICT (user_id) DO UPDATE SET
                 gardening = EXCLUDED.gardening,
                 literature = EXCLUDED.literature,
                 visual_arts = EXCLUDED.visual_arts,
                 music = EXCLUDED.music,
                 fitness = EXCLUDED.fitness",
        )
        .bind(event.user_id)
        .bind(event.interests.gardening)
        .bind(event.interests.literature)
        .bind(event.interests.visual_arts)
        .bind(event.interests.music)
        .bind(event.interests.fitness)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "no interests record has been saved".into(),
            ));
        }

        Ok(())
    }

    async fn upsert_personality(&self, event: RegisterPersonality) -> AppResult<()> {
        let res = sqlx::query(
            "INSERT INTO user_personality_scores
                 (user_id, agreeableness, conscientiousness, extraversion,
                  neuroticism, openness_to_experience)
             VALUES ($1, $2, $3, $4, $5, $6)
             ON CONFLICT (user_id) DO UPDATE SET
                 agreeableness = EXCLUDED.agreeableness,
                 conscientiousness = EXCLUDED.conscientiousness,
                 extraversion = EXCLUDED.extraversion,
                 neuroticism = EXCLUDED.neuroticism,
                 openness_to_experience = EXCLUDED.openness_to_experience",
        )
        .bind(event.user_id)
        .bind(event.scores.agreeableness)
        .bind(event.scores.conscientiousness)
        .bind(event.scores.extraversion)
        .bind(event.scores.neuroticism)
        .bind(event.scores.openness_to_experience)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "no personality record has been saved".into(),
            ));
        }

        Ok(())
    }
}
