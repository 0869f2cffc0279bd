use std::sync::Arc;

use adapter::{
    database::ConnectionPool,
    gateway::idea::IdeaGatewayImpl,
    redis::RedisClient,
    repository::{
        auth::AuthRepositoryImpl, health::HealthCheckRepositoryImpl, home::SeniorHomeRepositoryImpl,
        matching::MatchRepositoryImpl, profile::ProfileRepositoryImpl,
        questionnaire::QuestionnaireRepositoryImpl, reservation::ReservationRepositoryImpl,
        user::UserRepositoryImpl,
    },
};
use kernel::{
    gateway::idea::IdeaGateway,
    repository::{
        auth::AuthRepository, health::HealthCheckRepository, home::SeniorHomeRepository,
        matching::MatchRepository, profile::ProfileRepository,
        questionnaire::QuestionnaireRepository, reservation::ReservationRepository,
        user::UserRepository,
    },
};
use shared::config::AppConfig;

#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    auth_repository: Arc<dyn AuthRepository>,
    user_repository: Arc<dyn UserRepository>,
    profile_repository: Arc<dyn ProfileRepository>,
    questionnaire_repository: Arc<dyn QuestionnaireRepository>,
    match_repository: Arc<dyn MatchRepository>,
    reservation_repository: Arc<dyn ReservationRepository>,
    senior_home_repository: Arc<dyn SeniorHomeRepository>,
    idea_gateway: Arc<dyn IdeaGateway>,
}

impl AppRegistry {
    pub fn new(pool: ConnectionPool, kv: Arc<RedisClient>, app_config: AppConfig) -> Self {
        let health_check_repository = Arc::new(HealthCheckRepositoryImpl::new(pool.clone()));
        let auth_repository = Arc::new(AuthRepositoryImpl::new(
            pool.clone(),
            kv.clone(),
            app_config.auth.ttl,
        ));
        let user_repository = Arc::new(UserRepositoryImpl::new(pool.clone()));
        let profile_repository = Arc::new(ProfileRepositoryImpl::new(pool.clone()));
        let questionnaire_repository = Arc::new(QuestionnaireRepositoryImpl::new(pool.clone()));
        let match_repository = Arc::new(MatchRepositoryImpl::new(pool.clone()));
        let reservation_repository = Arc::new(ReservationRepositoryImpl::new(pool.clone()));
        let senior_home_repository = Arc::new(SeniorHomeRepositoryImpl::new(pool.clone()));
        let idea_gateway = Arc::new(IdeaGatewayImpl::new(&app_config.ideas, kv.clone()));
        Self {
            health_check_repository,
            auth_repository,
            user_repository,
            profile_repository,
            questionnaire_repository,
            match_repository,
            reservation_repository,
            senior_home_repository,
            idea_gateway,
        }
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn auth_repository(&self) -> Arc<dyn AuthRepository> {
        self.auth_repository.clone()
    }

    pub fn user_repository(&self) -> Arc<dyn UserRepository> {
        self.user_repository.clone()
    }

    pub fn profile_repository(&self) -> Arc<dyn ProfileRepository> {
        self.profile_repository.clone()
    }

    pub fn questionnaire_repository(&self) -> Arc<dyn QuestionnaireRepository> {
        self.questionnaire_repository.clone()
    }

    pub fn match_repository(&self) -> Arc<dyn MatchRepository> {
        self.match_repository.clone()
    }

    pub fn reservation_repository(&self) -> Arc<dyn ReservationRepository> {
        self.reservation_repository.clone()
    }

    pub fn senior_home_repository(&self) -> Arc<dyn SeniorHomeRepository> {
        self.senior_home_repository.clone()
    }

    pub fn idea_gateway(&self) -> Arc<dyn IdeaGateway> {
        self.idea_gateway.clone()
    }
}
