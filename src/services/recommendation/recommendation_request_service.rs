//! # 추천 요청 서비스
//!
//! 요청자가 수신자에게 특정 스킬에 대한 추천을 요청합니다.
//! 수락에는 추가 규칙이 없으며, 수락 이벤트를 받은 외부 서비스가 추천서를 작성합니다.

use std::sync::Arc;
use validator::Validate;
use crate::config::RequestPolicy;
use crate::core::errors::AppResult;
use crate::domain::dto::common::RejectionDto;
use crate::domain::dto::recommendation::{
    CreateRecommendationRequest, RecommendationRequestFilterDto, RecommendationRequestResponse,
};
use crate::domain::entities::requests::RecommendationRequest;
use crate::domain::events::{DomainEvent, RecommendationAcceptedEvent, RecommendationRequestedEvent};
use crate::filters::recommendation_request_filter_chain;
use crate::repositories::{RequestRepository, UserRepository};
use crate::services::events::{publish_best_effort, EventPublisher};
use crate::services::requests::{NoopAcceptHook, RequestLifecycle};
use crate::validators::{validate_message, validate_requested_skills};

pub struct RecommendationRequestService {
    lifecycle: RequestLifecycle<RecommendationRequest, RecommendationRequestFilterDto>,
    events: Arc<dyn EventPublisher>,
}

impl RecommendationRequestService {
    pub fn new(
        requests: Arc<dyn RequestRepository<RecommendationRequest>>,
        users: Arc<dyn UserRepository>,
        events: Arc<dyn EventPublisher>,
        policy: RequestPolicy,
    ) -> Self {
        let lifecycle = RequestLifecycle::new(
            requests,
            users,
            Arc::new(NoopAcceptHook),
            recommendation_request_filter_chain(),
            policy,
        );

        Self { lifecycle, events }
    }

    pub async fn create(
        &self,
        request: CreateRecommendationRequest,
    ) -> AppResult<RecommendationRequestResponse> {
        request.validate()?;
        let message = validate_message(&request.message)?;
        validate_requested_skills(&request.skill_ids)?;

        let created = self
            .lifecycle
            .create(RecommendationRequest::new(
                request.requester_id,
                request.receiver_id,
                message,
                request.skill_ids,
            ))
            .await?;

        publish_best_effort(
            self.events.as_ref(),
            DomainEvent::RecommendationRequested(RecommendationRequestedEvent {
                request_id: created.id.clone(),
                requester_id: created.requester_id.clone(),
                receiver_id: created.receiver_id.clone(),
            }),
        )
        .await;

        Ok(RecommendationRequestResponse::from(created))
    }

    pub async fn get_request(&self, id: &str) -> AppResult<RecommendationRequestResponse> {
        self.lifecycle.get(id).await.map(RecommendationRequestResponse::from)
    }

    pub async fn get_requests(
        &self,
        filter: &RecommendationRequestFilterDto,
    ) -> AppResult<Vec<RecommendationRequestResponse>> {
        let requests = self.lifecycle.list(filter).await?;
        Ok(requests.into_iter().map(RecommendationRequestResponse::from).collect())
    }

    pub async fn accept_request(&self, id: &str) -> AppResult<RecommendationRequestResponse> {
        let accepted = self.lifecycle.accept(id).await?;

        publish_best_effort(
            self.events.as_ref(),
            DomainEvent::RecommendationAccepted(RecommendationAcceptedEvent {
                request_id: accepted.id.clone(),
                requester_id: accepted.requester_id.clone(),
                receiver_id: accepted.receiver_id.clone(),
                skill_ids: accepted.skill_ids.clone(),
            }),
        )
        .await;

        Ok(RecommendationRequestResponse::from(accepted))
    }

    pub async fn reject_request(
        &self,
        id: &str,
        rejection: RejectionDto,
    ) -> AppResult<RecommendationRequestResponse> {
        rejection.validate()?;

        let rejected = self
            .lifecycle
            .reject(id, rejection.rejection_reason)
            .await?;

        Ok(RecommendationRequestResponse::from(rejected))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::AppError;
    use crate::domain::entities::requests::RequestStatus;
    use crate::domain::entities::users::{NewUser, User};
    use crate::repositories::{InMemoryRequestRepository, InMemoryUserRepository};
    use crate::services::events::InMemoryEventPublisher;

    struct Fixture {
        service: RecommendationRequestService,
        requests: Arc<InMemoryRequestRepository<RecommendationRequest>>,
        events: Arc<InMemoryEventPublisher>,
        requester: User,
        receiver: User,
    }

    async fn fixture() -> Fixture {
        let users = Arc::new(InMemoryUserRepository::new());
        let requests = Arc::new(InMemoryRequestRepository::new());
        let events = Arc::new(InMemoryEventPublisher::new());

        let requester = users
            .create(User::new(NewUser {
                username: "requester".to_string(),
                email: "requester@example.com".to_string(),
                ..Default::default()
            }))
            .await
            .unwrap();
        let receiver = users
            .create(User::new(NewUser {
                username: "receiver".to_string(),
                email: "receiver@example.com".to_string(),
                ..Default::default()
            }))
            .await
            .unwrap();

        let service = RecommendationRequestService::new(
            requests.clone(),
            users,
            events.clone(),
            RequestPolicy::with_cooldown_days(180),
        );

        Fixture { service, requests, events, requester, receiver }
    }

    fn dto(f: &Fixture, message: &str, skills: &[&str]) -> CreateRecommendationRequest {
        CreateRecommendationRequest {
            requester_id: f.requester.id.clone(),
            receiver_id: f.receiver.id.clone(),
            message: message.to_string(),
            skill_ids: skills.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[actix_web::test]
    async fn test_create_trims_message() {
        let f = fixture().await;

        let created = f.service.create(dto(&f, "  함께 일해 주셔서 감사합니다 ", &["rust"])).await.unwrap();

        assert_eq!(created.status, RequestStatus::Pending);
        assert_eq!(created.message, "함께 일해 주셔서 감사합니다");
        assert_eq!(f.events.published().len(), 1);
    }

    #[actix_web::test]
    async fn test_create_validates_content() {
        let f = fixture().await;

        let blank = f.service.create(dto(&f, "   ", &["rust"])).await;
        assert!(matches!(blank, Err(AppError::ValidationError(_))));

        let no_skills = f.service.create(dto(&f, "hello", &[])).await;
        assert!(matches!(no_skills, Err(AppError::ValidationError(_))));

        let duplicate = f.service.create(dto(&f, "hello", &["rust", "rust"])).await;
        assert!(matches!(duplicate, Err(AppError::ValidationError(_))));

        assert!(f.requests.find_all().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_duplicate_within_window() {
        let f = fixture().await;
        f.service.create(dto(&f, "first", &["rust"])).await.unwrap();

        let result = f.service.create(dto(&f, "second", &["go"])).await;

        assert!(matches!(result, Err(AppError::DuplicateRequestWindow(_))));
    }

    #[actix_web::test]
    async fn test_accept_publishes_skills() {
        let f = fixture().await;
        let created = f.service.create(dto(&f, "hello", &["rust", "sql"])).await.unwrap();

        let accepted = f.service.accept_request(&created.id).await.unwrap();

        assert_eq!(accepted.status, RequestStatus::Accepted);
        match f.events.published().last() {
            Some(DomainEvent::RecommendationAccepted(event)) => {
                assert_eq!(event.skill_ids, vec!["rust".to_string(), "sql".to_string()]);
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[actix_web::test]
    async fn test_accepted_request_cannot_be_rejected() {
        let f = fixture().await;
        let created = f.service.create(dto(&f, "hello", &["rust"])).await.unwrap();
        f.service.accept_request(&created.id).await.unwrap();

        let result = f
            .service
            .reject_request(&created.id, RejectionDto { rejection_reason: "no".to_string() })
            .await;

        assert!(matches!(result, Err(AppError::InvalidStateTransition(_))));
        let stored = f.service.get_request(&created.id).await.unwrap();
        assert_eq!(stored.status, RequestStatus::Accepted);
        assert!(stored.rejection_reason.is_none());
    }

    #[actix_web::test]
    async fn test_get_missing_request() {
        let f = fixture().await;
        assert!(matches!(f.service.get_request("nope").await, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_get_requests_by_status() {
        let f = fixture().await;
        let created = f.service.create(dto(&f, "hello", &["rust"])).await.unwrap();
        f.service.accept_request(&created.id).await.unwrap();

        let pending = RecommendationRequestFilterDto {
            status: Some(RequestStatus::Pending),
            ..Default::default()
        };
        assert!(f.service.get_requests(&pending).await.unwrap().is_empty());

        let accepted = RecommendationRequestFilterDto {
            status: Some(RequestStatus::Accepted),
            ..Default::default()
        };
        assert_eq!(f.service.get_requests(&accepted).await.unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn test_rejection_reason_is_stored_as_given() {
        let f = fixture().await;
        let created = f.service.create(dto(&f, "hello", &["rust"])).await.unwrap();

        let rejected = f
            .service
            .reject_request(&created.id, RejectionDto { rejection_reason: " 지금은 어렵습니다\n".to_string() })
            .await
            .unwrap();

        assert_eq!(rejected.rejection_reason.as_deref(), Some(" 지금은 어렵습니다\n"));
    }
}
