//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! 프로필 정보와 함께 멘토/멘티/팔로워 관계를 사용자 ID 목록으로 보관합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 사용자 엔티티
///
/// 관계 필드(`mentors`, `mentees`, `followers`)는 다른 사용자의 ID 목록이며,
/// 멘토십 요청 수락 시 요청자와 수신자 양쪽에 함께 기록됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    /// 사용자 이름 (unique)
    pub username: String,
    /// 사용자 이메일 (unique)
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub about_me: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// 경력 (년)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<i32>,
    /// 계정 활성화 여부
    pub is_active: bool,
    /// 밴 여부 (밴 이벤트로 설정됨)
    #[serde(default)]
    pub is_banned: bool,
    /// 이 사용자의 멘토 ID 목록
    #[serde(default)]
    pub mentors: Vec<String>,
    /// 이 사용자의 멘티 ID 목록
    #[serde(default)]
    pub mentees: Vec<String>,
    /// 이 사용자를 팔로우하는 사용자 ID 목록
    #[serde(default)]
    pub followers: Vec<String>,
    /// 프로필 이미지 파일 키
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_pic: Option<UserProfilePic>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

/// 프로필 이미지 파일 키
///
/// 실제 파일은 외부 파일 저장소가 관리하며, 이 서비스는 키만 보관합니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfilePic {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub small_file_id: Option<String>,
}

/// 새 사용자 생성에 필요한 프로필 값
#[derive(Debug, Clone, Default)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub phone: Option<String>,
    pub about_me: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub experience: Option<i32>,
}

impl User {
    /// 새 활성 사용자 생성
    ///
    /// ID는 새 `ObjectId`로 할당되고 관계 목록은 비어 있는 상태로 시작합니다.
    pub fn new(profile: NewUser) -> Self {
        let now = DateTime::now();

        Self {
            id: ObjectId::new().to_hex(),
            username: profile.username,
            email: profile.email,
            phone: profile.phone,
            about_me: profile.about_me,
            city: profile.city,
            country: profile.country,
            experience: profile.experience,
            is_active: true,
            is_banned: false,
            mentors: Vec::new(),
            mentees: Vec::new(),
            followers: Vec::new(),
            profile_pic: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn has_mentor(&self, user_id: &str) -> bool {
        self.mentors.iter().any(|id| id == user_id)
    }

    pub fn has_mentee(&self, user_id: &str) -> bool {
        self.mentees.iter().any(|id| id == user_id)
    }

    /// 멘토를 추가합니다. 이미 있으면 아무것도 하지 않고 `false`를 반환합니다.
    pub fn add_mentor(&mut self, mentor_id: &str) -> bool {
        if self.has_mentor(mentor_id) {
            return false;
        }
        self.mentors.push(mentor_id.to_string());
        true
    }

    /// 멘티를 추가합니다. 이미 있으면 아무것도 하지 않고 `false`를 반환합니다.
    pub fn add_mentee(&mut self, mentee_id: &str) -> bool {
        if self.has_mentee(mentee_id) {
            return false;
        }
        self.mentees.push(mentee_id.to_string());
        true
    }

    pub fn remove_mentor(&mut self, mentor_id: &str) -> bool {
        let before = self.mentors.len();
        self.mentors.retain(|id| id != mentor_id);
        before != self.mentors.len()
    }

    pub fn remove_mentee(&mut self, mentee_id: &str) -> bool {
        let before = self.mentees.len();
        self.mentees.retain(|id| id != mentee_id);
        before != self.mentees.len()
    }

    /// 수정 시간을 현재 시각으로 갱신합니다.
    pub fn touch(&mut self) {
        self.updated_at = DateTime::now();
    }
}
