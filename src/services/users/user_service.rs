//! # 사용자 관리 서비스 구현
//!
//! 사용자 프로필의 생명주기를 관리하는 비즈니스 로직입니다.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                      UserService                         │
//! ├──────────────────────────────────────────────────────────┤
//! │  생성 / 조회 (프로필 조회 이벤트) / 필터 검색 + 페이지     │
//! │  비활성화 (멘토십 종료) / 팔로워 / 존재 확인              │
//! │  아바타 키 저장 · 업로드 · 랜덤 아바타 · 삭제             │
//! └──────────────────────────────────────────────────────────┘
//!              │                  │                  │
//!              ▼                  ▼                  ▼
//!       UserRepository     MentorshipService    EventPublisher
//! ```
//!
//! 모든 검사는 쓰기 전에 끝납니다. 이벤트 발행 실패는 작업을 실패시키지 않습니다.

use std::collections::HashSet;
use std::sync::Arc;
use chrono::Utc;
use validator::Validate;
use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::users::{CreateUserRequest, UserFilterDto, UserProfilePicDto, UserResponse};
use crate::domain::entities::users::{User, UserProfilePic};
use crate::domain::events::{DomainEvent, ProfilePicEvent, ProfileViewEvent};
use crate::domain::models::UserContext;
use crate::filters::{user_filter_chain, FilterChain};
use crate::repositories::UserRepository;
use crate::services::events::{publish_best_effort, EventPublisher};
use crate::services::mentorship::MentorshipService;
use crate::services::users::{AvatarService, AvatarUpload};

pub struct UserService {
    users: Arc<dyn UserRepository>,
    mentorship: Arc<MentorshipService>,
    avatars: AvatarService,
    events: Arc<dyn EventPublisher>,
    filters: FilterChain<User, UserFilterDto>,
}

impl UserService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        mentorship: Arc<MentorshipService>,
        avatars: AvatarService,
        events: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            users,
            mentorship,
            avatars,
            events,
            filters: user_filter_chain(),
        }
    }

    /// 아바타 업로드 허용 최대 크기 (바이트)
    pub fn max_avatar_bytes(&self) -> usize {
        self.avatars.max_upload_bytes()
    }

    async fn find_user(&self, id: &str) -> AppResult<User> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("사용자를 찾을 수 없습니다: {}", id)))
    }

    /// 사용자 프로필 조회
    ///
    /// 다른 사용자가 조회한 경우 프로필 조회 이벤트를 발행합니다.
    /// 본인 조회나 호출자 정보가 없는 조회는 이벤트를 남기지 않습니다.
    pub async fn get_user(&self, id: &str, viewer: Option<&UserContext>) -> AppResult<UserResponse> {
        let user = self.find_user(id).await?;

        if let Some(viewer) = viewer.filter(|viewer| !viewer.is(id)) {
            publish_best_effort(
                self.events.as_ref(),
                DomainEvent::ProfileView(ProfileViewEvent {
                    viewer_id: viewer.user_id.clone(),
                    viewed_user_id: user.id.clone(),
                    received_at: Utc::now(),
                }),
            )
            .await;
        }

        Ok(UserResponse::from(user))
    }

    /// 새 사용자 생성
    ///
    /// 아바타 파일이 함께 오면 업로드 키를 할당하고 프로필 이미지 이벤트를 발행합니다.
    /// 파일이 없으면 랜덤 아바타를 설정합니다.
    pub async fn create_user(
        &self,
        request: CreateUserRequest,
        avatar: Option<AvatarUpload>,
    ) -> AppResult<UserResponse> {
        request.validate()?;
        if let Some(upload) = &avatar {
            self.avatars.validate_upload(upload)?;
        }

        let mut user = User::new(request.into_new_user());
        user.profile_pic = Some(match &avatar {
            Some(_) => self.avatars.upload_keys(&user.id),
            None => self.avatars.random_avatar(),
        });

        let created = self.users.create(user).await?;
        log::info!("사용자 생성: {} ({})", created.username, created.id);

        if let Some(upload) = avatar {
            self.publish_profile_pic(&created.id, upload.file_name).await;
        }

        Ok(UserResponse::from(created))
    }

    /// 외부 저장소에 올라간 아바타 파일 키를 기록합니다.
    pub async fn upload_avatar_keys(&self, id: &str, keys: UserProfilePicDto) -> AppResult<UserProfilePicDto> {
        keys.validate()?;

        let mut user = self.find_user(id).await?;
        user.profile_pic = Some(UserProfilePic::from(keys.clone()));
        user.touch();
        self.users.save(user).await?;

        Ok(keys)
    }

    /// 아바타 변경. 파일이 없으면 랜덤 아바타로 바꿉니다.
    pub async fn update_user_avatar(
        &self,
        id: &str,
        avatar: Option<AvatarUpload>,
    ) -> AppResult<UserProfilePicDto> {
        if let Some(upload) = &avatar {
            self.avatars.validate_upload(upload)?;
        }

        let mut user = self.find_user(id).await?;
        let pic = match &avatar {
            Some(_) => self.avatars.upload_keys(&user.id),
            None => self.avatars.random_avatar(),
        };
        user.profile_pic = Some(pic.clone());
        user.touch();
        self.users.save(user).await?;

        if let Some(upload) = avatar {
            self.publish_profile_pic(id, upload.file_name).await;
        }

        Ok(UserProfilePicDto::from(pic))
    }

    pub async fn get_users_by_ids(&self, ids: &[String]) -> AppResult<Vec<UserResponse>> {
        let users = self.users.find_all_by_ids(ids).await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    /// 필터 조건을 모두 만족하는 사용자를 페이지 단위로 반환합니다.
    pub async fn get_users_by_filter(&self, filter: &UserFilterDto) -> AppResult<Vec<UserResponse>> {
        filter.validate()?;

        let (skip, size) = filter.pagination();
        let matched = self.filters.filter_all(self.users.find_all().await?, filter)?;

        log::debug!(
            "사용자 필터 검색: 적용 필터 {:?}, 결과 {}건",
            self.filters.applicable(filter),
            matched.len()
        );

        Ok(matched
            .into_iter()
            .skip(skip)
            .take(size)
            .map(UserResponse::from)
            .collect())
    }

    /// 계정 비활성화
    ///
    /// 이 사용자가 멘토로 참여하던 멘토십은 모두 종료됩니다.
    pub async fn deactivate_user(&self, id: &str) -> AppResult<UserResponse> {
        let mut user = self.find_user(id).await?;

        self.mentorship.stop_mentorship(&mut user).await?;
        user.is_active = false;
        user.touch();

        let saved = self.users.save(user).await?;
        log::warn!("사용자 비활성화: {}", saved.id);

        Ok(UserResponse::from(saved))
    }

    pub async fn check_user_existence(&self, id: &str) -> AppResult<bool> {
        self.users.exists_by_id(id).await
    }

    pub async fn get_user_followers(&self, id: &str) -> AppResult<Vec<UserResponse>> {
        let user = self.find_user(id).await?;
        let followers = self.users.find_all_by_ids(&user.followers).await?;
        Ok(followers.into_iter().map(UserResponse::from).collect())
    }

    /// 주어진 ID가 모두 존재하는 사용자인지 확인합니다.
    pub async fn check_all_users_exist(&self, ids: &[String]) -> AppResult<bool> {
        let unique: HashSet<&str> = ids.iter().map(String::as_str).collect();
        let found = self.users.find_all_by_ids(ids).await?;
        let found: HashSet<&str> = found.iter().map(|user| user.id.as_str()).collect();

        Ok(unique.iter().all(|id| found.contains(id)))
    }

    pub async fn delete_avatar(&self, id: &str) -> AppResult<()> {
        let mut user = self.find_user(id).await?;
        user.profile_pic = None;
        user.touch();
        self.users.save(user).await?;

        log::info!("아바타 삭제: {}", id);
        Ok(())
    }

    /// 아바타 파일 키 조회
    ///
    /// 사용자가 없으면 `NotFound`, 아바타가 없으면 빈 값의 키를 반환합니다.
    pub async fn get_avatar_keys(&self, id: &str) -> AppResult<UserProfilePicDto> {
        let user = self.find_user(id).await?;
        Ok(user.profile_pic.map(UserProfilePicDto::from).unwrap_or_default())
    }

    async fn publish_profile_pic(&self, user_id: &str, file_name: String) {
        publish_best_effort(
            self.events.as_ref(),
            DomainEvent::ProfilePic(ProfilePicEvent {
                user_id: user_id.to_string(),
                file_name,
            }),
        )
        .await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AvatarConfig;
    use crate::repositories::InMemoryUserRepository;
    use crate::services::events::InMemoryEventPublisher;

    struct Fixture {
        service: UserService,
        users: Arc<InMemoryUserRepository>,
        mentorship: Arc<MentorshipService>,
        events: Arc<InMemoryEventPublisher>,
    }

    fn fixture() -> Fixture {
        let users = Arc::new(InMemoryUserRepository::new());
        let events = Arc::new(InMemoryEventPublisher::new());
        let mentorship = Arc::new(MentorshipService::new(users.clone()));
        let service = UserService::new(
            users.clone(),
            mentorship.clone(),
            AvatarService::new(AvatarConfig::default()),
            events.clone(),
        );

        Fixture { service, users, mentorship, events }
    }

    fn create_request(username: &str, city: &str, experience: i32) -> CreateUserRequest {
        CreateUserRequest {
            username: username.to_string(),
            email: format!("{}@example.com", username),
            phone: None,
            about_me: None,
            city: Some(city.to_string()),
            country: None,
            experience: Some(experience),
        }
    }

    fn upload() -> AvatarUpload {
        AvatarUpload { file_name: "me.png".to_string(), size: 1024 }
    }

    #[actix_web::test]
    async fn test_create_without_file_sets_random_avatar() {
        let f = fixture();

        let user = f.service.create_user(create_request("alice", "Seoul", 3), None).await.unwrap();

        assert!(user.is_active);
        let pic = user.profile_pic.unwrap();
        assert!(pic.file_id.contains("seed="));
        assert!(f.events.published().is_empty());
    }

    #[actix_web::test]
    async fn test_create_with_file_publishes_profile_pic() {
        let f = fixture();

        let user = f.service.create_user(create_request("alice", "Seoul", 3), Some(upload())).await.unwrap();

        assert!(user.profile_pic.unwrap().file_id.starts_with("avatars/"));
        assert_eq!(
            f.events.published(),
            vec![DomainEvent::ProfilePic(ProfilePicEvent {
                user_id: user.id.clone(),
                file_name: "me.png".to_string(),
            })]
        );
    }

    #[actix_web::test]
    async fn test_create_duplicate_email_conflicts() {
        let f = fixture();
        f.service.create_user(create_request("alice", "Seoul", 3), None).await.unwrap();

        let mut duplicate = create_request("alice2", "Busan", 1);
        duplicate.email = "ALICE@example.com".to_string();
        let result = f.service.create_user(duplicate, None).await;

        assert!(matches!(result, Err(AppError::ConflictError(_))));
    }

    #[actix_web::test]
    async fn test_get_user_publishes_view_for_other_viewer() {
        let f = fixture();
        let user = f.service.create_user(create_request("alice", "Seoul", 3), None).await.unwrap();

        f.service.get_user(&user.id, None).await.unwrap();
        f.service.get_user(&user.id, Some(&UserContext::new(user.id.clone()))).await.unwrap();
        assert!(f.events.published().is_empty());

        f.service.get_user(&user.id, Some(&UserContext::new("viewer".to_string()))).await.unwrap();
        match f.events.published().as_slice() {
            [DomainEvent::ProfileView(event)] => {
                assert_eq!(event.viewer_id, "viewer");
                assert_eq!(event.viewed_user_id, user.id);
            }
            other => panic!("unexpected events: {:?}", other),
        }
    }

    #[actix_web::test]
    async fn test_get_missing_user() {
        let f = fixture();
        assert!(matches!(f.service.get_user("missing", None).await, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_filter_and_paginate() {
        let f = fixture();
        for (name, city, experience) in [("a1", "Seoul", 1), ("a2", "Seoul", 5), ("a3", "Seoul", 7), ("b1", "Busan", 9)] {
            f.service.create_user(create_request(name, city, experience), None).await.unwrap();
        }

        let filter = UserFilterDto {
            city_pattern: Some("Seoul".to_string()),
            experience_min: Some(2),
            ..Default::default()
        };
        let result = f.service.get_users_by_filter(&filter).await.unwrap();
        let names: Vec<_> = result.iter().map(|u| u.username.as_str()).collect();
        assert_eq!(names, vec!["a2", "a3"]);

        let paged = UserFilterDto { page: Some(1), page_size: Some(3), ..Default::default() };
        let result = f.service.get_users_by_filter(&paged).await.unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].username, "b1");
    }

    #[actix_web::test]
    async fn test_deactivate_stops_mentorship() {
        let f = fixture();
        let mentor = f.service.create_user(create_request("mentor", "Seoul", 10), None).await.unwrap();
        let mentee = f.service.create_user(create_request("mentee", "Seoul", 1), None).await.unwrap();
        f.mentorship.link(&mentor.id, &mentee.id).await.unwrap();

        let deactivated = f.service.deactivate_user(&mentor.id).await.unwrap();

        assert!(!deactivated.is_active);
        assert!(deactivated.mentee_ids.is_empty());
        let mentee = f.users.find_by_id(&mentee.id).await.unwrap().unwrap();
        assert!(mentee.mentors.is_empty());
    }

    #[actix_web::test]
    async fn test_avatar_keys_lifecycle() {
        let f = fixture();
        let user = f.service.create_user(create_request("alice", "Seoul", 3), None).await.unwrap();

        let keys = UserProfilePicDto {
            file_id: "file".to_string(),
            small_file_id: "small".to_string(),
        };
        f.service.upload_avatar_keys(&user.id, keys.clone()).await.unwrap();
        assert_eq!(f.service.get_avatar_keys(&user.id).await.unwrap(), keys);

        f.service.delete_avatar(&user.id).await.unwrap();
        assert_eq!(f.service.get_avatar_keys(&user.id).await.unwrap(), UserProfilePicDto::default());

        assert!(matches!(f.service.get_avatar_keys("missing").await, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_update_avatar_rejects_oversized_file() {
        let f = fixture();
        let user = f.service.create_user(create_request("alice", "Seoul", 3), None).await.unwrap();
        let before = f.service.get_avatar_keys(&user.id).await.unwrap();

        let oversized = AvatarUpload {
            file_name: "huge.png".to_string(),
            size: AvatarConfig::DEFAULT_MAX_UPLOAD_BYTES + 1,
        };
        let result = f.service.update_user_avatar(&user.id, Some(oversized)).await;

        assert!(matches!(result, Err(AppError::ValidationError(_))));
        assert_eq!(f.service.get_avatar_keys(&user.id).await.unwrap(), before);
    }

    #[actix_web::test]
    async fn test_followers_and_existence() {
        let f = fixture();
        let alice = f.service.create_user(create_request("alice", "Seoul", 3), None).await.unwrap();
        let bob = f.service.create_user(create_request("bob", "Seoul", 3), None).await.unwrap();

        let mut stored = f.users.find_by_id(&alice.id).await.unwrap().unwrap();
        stored.followers.push(bob.id.clone());
        f.users.save(stored).await.unwrap();

        let followers = f.service.get_user_followers(&alice.id).await.unwrap();
        assert_eq!(followers[0].id, bob.id);

        assert!(f.service.check_user_existence(&alice.id).await.unwrap());
        assert!(f.service.check_all_users_exist(&[alice.id.clone(), bob.id.clone(), bob.id.clone()]).await.unwrap());
        assert!(!f.service.check_all_users_exist(&[alice.id.clone(), "ghost".to_string()]).await.unwrap());
    }
}
