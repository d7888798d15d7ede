//! # Domain Events
//!
//! 메시지 버스(Redis Pub/Sub)로 발행되거나 구독하는 도메인 이벤트입니다.
//! 각 이벤트는 자신이 발행될 채널 이름을 알고 있으며, 페이로드는 JSON입니다.
//!
//! | 이벤트 | 채널 | 발행 시점 |
//! |--------|------|-----------|
//! | [`ProfileViewEvent`] | `profile_view_channel` | 다른 사용자의 프로필 조회 |
//! | [`ProfilePicEvent`] | `profile_pic_channel` | 아바타 업로드 |
//! | [`MentorshipRequestedEvent`] | `mentorship_request_channel` | 멘토십 요청 생성 |
//! | [`MentorshipStartedEvent`] | `mentorship_start_channel` | 멘토십 요청 수락 |
//! | [`RecommendationRequestedEvent`] | `recommendation_request_channel` | 추천 요청 생성 |
//! | [`RecommendationAcceptedEvent`] | `recommendation_accepted_channel` | 추천 요청 수락 |
//! | [`BanEvent`] (수신) | `user_ban` | 외부 서비스의 사용자 밴 |

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::core::errors::{AppResult, ErrorContext};

pub const PROFILE_VIEW_CHANNEL: &str = "profile_view_channel";
pub const PROFILE_PIC_CHANNEL: &str = "profile_pic_channel";
pub const MENTORSHIP_REQUEST_CHANNEL: &str = "mentorship_request_channel";
pub const MENTORSHIP_START_CHANNEL: &str = "mentorship_start_channel";
pub const RECOMMENDATION_REQUEST_CHANNEL: &str = "recommendation_request_channel";
pub const RECOMMENDATION_ACCEPTED_CHANNEL: &str = "recommendation_accepted_channel";
pub const USER_BAN_CHANNEL: &str = "user_ban";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileViewEvent {
    pub viewer_id: String,
    pub viewed_user_id: String,
    pub received_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfilePicEvent {
    pub user_id: String,
    pub file_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MentorshipRequestedEvent {
    pub request_id: String,
    pub requester_id: String,
    pub receiver_id: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MentorshipStartedEvent {
    pub request_id: String,
    pub mentor_id: String,
    pub mentee_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationRequestedEvent {
    pub request_id: String,
    pub requester_id: String,
    pub receiver_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationAcceptedEvent {
    pub request_id: String,
    pub requester_id: String,
    pub receiver_id: String,
    pub skill_ids: Vec<String>,
}

/// 외부 서비스가 `user_ban` 채널로 보내는 밴 메시지
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BanEvent {
    pub author_id: String,
}

/// 발행 가능한 도메인 이벤트
#[derive(Debug, Clone, PartialEq)]
pub enum DomainEvent {
    ProfileView(ProfileViewEvent),
    ProfilePic(ProfilePicEvent),
    MentorshipRequested(MentorshipRequestedEvent),
    MentorshipStarted(MentorshipStartedEvent),
    RecommendationRequested(RecommendationRequestedEvent),
    RecommendationAccepted(RecommendationAcceptedEvent),
}

impl DomainEvent {
    pub fn channel(&self) -> &'static str {
        match self {
            DomainEvent::ProfileView(_) => PROFILE_VIEW_CHANNEL,
            DomainEvent::ProfilePic(_) => PROFILE_PIC_CHANNEL,
            DomainEvent::MentorshipRequested(_) => MENTORSHIP_REQUEST_CHANNEL,
            DomainEvent::MentorshipStarted(_) => MENTORSHIP_START_CHANNEL,
            DomainEvent::RecommendationRequested(_) => RECOMMENDATION_REQUEST_CHANNEL,
            DomainEvent::RecommendationAccepted(_) => RECOMMENDATION_ACCEPTED_CHANNEL,
        }
    }

    /// 채널로 전송할 JSON 페이로드
    pub fn to_payload(&self) -> AppResult<String> {
        let payload = match self {
            DomainEvent::ProfileView(event) => serde_json::to_string(event),
            DomainEvent::ProfilePic(event) => serde_json::to_string(event),
            DomainEvent::MentorshipRequested(event) => serde_json::to_string(event),
            DomainEvent::MentorshipStarted(event) => serde_json::to_string(event),
            DomainEvent::RecommendationRequested(event) => serde_json::to_string(event),
            DomainEvent::RecommendationAccepted(event) => serde_json::to_string(event),
        };

        payload.with_context(|| format!("{} 이벤트 직렬화 실패", self.channel()))
    }
}
