//! # 멘토십 요청 서비스
//!
//! 요청자가 수신자에게 멘토가 되어 달라고 요청하는 흐름입니다.
//! 수락되면 수신자는 요청자의 멘토가, 요청자는 수신자의 멘티가 됩니다.

use std::sync::Arc;
use async_trait::async_trait;
use validator::Validate;
use crate::config::RequestPolicy;
use crate::core::errors::AppResult;
use crate::domain::dto::common::RejectionDto;
use crate::domain::dto::mentorship::{
    CreateMentorshipRequest, MentorshipRequestFilterDto, MentorshipRequestResponse,
};
use crate::domain::entities::requests::{MentorshipRequest, RequestRecord};
use crate::domain::events::{DomainEvent, MentorshipRequestedEvent, MentorshipStartedEvent};
use crate::filters::mentorship_request_filter_chain;
use crate::repositories::{RequestRepository, UserRepository};
use crate::services::events::{publish_best_effort, EventPublisher};
use crate::services::mentorship::MentorshipService;
use crate::services::requests::{AcceptHook, RequestLifecycle};
use crate::utils::string_utils::validate_required_string;
use crate::utils::time::to_chrono;
use crate::validators::validate_mentorship_acceptance;

/// 멘토십 수락 규칙: 순환/중복 관계 검사 후 양쪽 사용자를 연결합니다.
pub struct MentorshipAcceptHook {
    users: Arc<dyn UserRepository>,
    mentorship: Arc<MentorshipService>,
}

impl MentorshipAcceptHook {
    pub fn new(users: Arc<dyn UserRepository>, mentorship: Arc<MentorshipService>) -> Self {
        Self { users, mentorship }
    }
}

#[async_trait]
impl AcceptHook<MentorshipRequest> for MentorshipAcceptHook {
    async fn validate(&self, request: &MentorshipRequest) -> AppResult<()> {
        validate_mentorship_acceptance(self.users.as_ref(), &request.requester_id, &request.receiver_id).await
    }

    async fn apply(&self, request: &MentorshipRequest) -> AppResult<()> {
        self.mentorship.link(&request.receiver_id, &request.requester_id).await
    }
}

pub struct MentorshipRequestService {
    lifecycle: RequestLifecycle<MentorshipRequest, MentorshipRequestFilterDto>,
    events: Arc<dyn EventPublisher>,
}

impl MentorshipRequestService {
    pub fn new(
        requests: Arc<dyn RequestRepository<MentorshipRequest>>,
        users: Arc<dyn UserRepository>,
        mentorship: Arc<MentorshipService>,
        events: Arc<dyn EventPublisher>,
        policy: RequestPolicy,
    ) -> Self {
        let hook = Arc::new(MentorshipAcceptHook::new(users.clone(), mentorship));
        let lifecycle = RequestLifecycle::new(
            requests,
            users,
            hook,
            mentorship_request_filter_chain(),
            policy,
        );

        Self { lifecycle, events }
    }

    pub async fn request_mentorship(
        &self,
        request: CreateMentorshipRequest,
    ) -> AppResult<MentorshipRequestResponse> {
        request.validate()?;
        let description = validate_required_string(&request.description, "description")?;

        let created = self
            .lifecycle
            .create(MentorshipRequest::new(
                request.requester_id,
                request.receiver_id,
                description,
            ))
            .await?;

        publish_best_effort(
            self.events.as_ref(),
            DomainEvent::MentorshipRequested(MentorshipRequestedEvent {
                request_id: created.id.clone(),
                requester_id: created.requester_id.clone(),
                receiver_id: created.receiver_id.clone(),
                created_at: to_chrono(created.created_at),
            }),
        )
        .await;

        Ok(MentorshipRequestResponse::from(created))
    }

    pub async fn get_requests(
        &self,
        filter: &MentorshipRequestFilterDto,
    ) -> AppResult<Vec<MentorshipRequestResponse>> {
        let requests = self.lifecycle.list(filter).await?;
        Ok(requests.into_iter().map(MentorshipRequestResponse::from).collect())
    }

    pub async fn accept_request(&self, id: &str) -> AppResult<MentorshipRequestResponse> {
        let accepted = self.lifecycle.accept(id).await?;

        publish_best_effort(
            self.events.as_ref(),
            DomainEvent::MentorshipStarted(MentorshipStartedEvent {
                request_id: accepted.id().to_string(),
                mentor_id: accepted.receiver_id.clone(),
                mentee_id: accepted.requester_id.clone(),
            }),
        )
        .await;

        Ok(MentorshipRequestResponse::from(accepted))
    }

    pub async fn reject_request(
        &self,
        id: &str,
        rejection: RejectionDto,
    ) -> AppResult<MentorshipRequestResponse> {
        rejection.validate()?;

        let rejected = self
            .lifecycle
            .reject(id, rejection.rejection_reason)
            .await?;

        Ok(MentorshipRequestResponse::from(rejected))
    }
}
