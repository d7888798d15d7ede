//! 애플리케이션 상태 조립
//!
//! 저장소 구현(MongoDB 또는 메모리)을 고르고 그 위에 서비스 그래프를 만듭니다.
//! 핸들러는 `web::Data<AppState>`로 서비스에 접근합니다.

use std::sync::Arc;
use crate::caching::redis::RedisClient;
use crate::config::AppConfig;
use crate::core::errors::AppResult;
use crate::db::Database;
use crate::domain::entities::requests::{MentorshipRequest, RecommendationRequest};
use crate::repositories::{
    InMemoryRequestRepository, InMemoryUserRepository, MongoRequestRepository,
    MongoUserRepository, RequestRepository, UserRepository,
    MENTORSHIP_REQUESTS_COLLECTION, RECOMMENDATION_REQUESTS_COLLECTION,
};
use crate::services::events::{EventPublisher, InMemoryEventPublisher, RedisEventPublisher};
use crate::services::mentorship::{MentorshipRequestService, MentorshipService};
use crate::services::recommendation::RecommendationRequestService;
use crate::services::users::{AvatarService, UserService};

/// 핸들러가 공유하는 서비스 묶음
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub user_service: Arc<UserService>,
    pub mentorship_service: Arc<MentorshipService>,
    pub mentorship_request_service: Arc<MentorshipRequestService>,
    pub recommendation_request_service: Arc<RecommendationRequestService>,
}

impl AppState {
    pub fn new(
        config: &AppConfig,
        users: Arc<dyn UserRepository>,
        mentorship_requests: Arc<dyn RequestRepository<MentorshipRequest>>,
        recommendation_requests: Arc<dyn RequestRepository<RecommendationRequest>>,
        events: Arc<dyn EventPublisher>,
    ) -> Self {
        let mentorship_service = Arc::new(MentorshipService::new(users.clone()));

        let user_service = Arc::new(UserService::new(
            users.clone(),
            mentorship_service.clone(),
            AvatarService::new(config.avatar.clone()),
            events.clone(),
        ));

        let mentorship_request_service = Arc::new(MentorshipRequestService::new(
            mentorship_requests,
            users.clone(),
            mentorship_service.clone(),
            events.clone(),
            config.mentorship_policy,
        ));

        let recommendation_request_service = Arc::new(RecommendationRequestService::new(
            recommendation_requests,
            users.clone(),
            events,
            config.recommendation_policy,
        ));

        Self {
            users,
            user_service,
            mentorship_service,
            mentorship_request_service,
            recommendation_request_service,
        }
    }

    /// 프로세스 메모리 저장소와 기록용 이벤트 발행자로 구성합니다.
    pub fn in_memory(config: &AppConfig) -> Self {
        Self::new(
            config,
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(InMemoryRequestRepository::<MentorshipRequest>::new()),
            Arc::new(InMemoryRequestRepository::<RecommendationRequest>::new()),
            Arc::new(InMemoryEventPublisher::new()),
        )
    }

    /// MongoDB 저장소와 Redis 이벤트 발행자로 구성하고 인덱스를 만듭니다.
    pub async fn with_mongo(config: &AppConfig, db: &Database, redis: RedisClient) -> AppResult<Self> {
        let users = MongoUserRepository::new(db, redis.clone(), config.data.user_cache_ttl_seconds);
        let mentorship_requests =
            MongoRequestRepository::<MentorshipRequest>::new(db, MENTORSHIP_REQUESTS_COLLECTION);
        let recommendation_requests =
            MongoRequestRepository::<RecommendationRequest>::new(db, RECOMMENDATION_REQUESTS_COLLECTION);

        users.create_indexes().await?;
        mentorship_requests.create_indexes().await?;
        recommendation_requests.create_indexes().await?;
        log::info!("✅ MongoDB 인덱스 생성 완료");

        Ok(Self::new(
            config,
            Arc::new(users),
            Arc::new(mentorship_requests),
            Arc::new(recommendation_requests),
            Arc::new(RedisEventPublisher::new(redis)),
        ))
    }
}
