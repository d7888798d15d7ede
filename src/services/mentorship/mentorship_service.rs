//! # 멘토십 관계 서비스
//!
//! 사용자 간 멘토/멘티 관계를 조회하고 해제합니다.
//! 관계는 양쪽 사용자 문서에 함께 기록되므로 변경도 항상 양쪽에 적용합니다.

use std::sync::Arc;
use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::users::UserResponse;
use crate::domain::entities::users::User;
use crate::repositories::UserRepository;

pub struct MentorshipService {
    users: Arc<dyn UserRepository>,
}

impl MentorshipService {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    async fn get_user(&self, id: &str) -> AppResult<User> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("사용자를 찾을 수 없습니다: {}", id)))
    }

    pub async fn get_mentors(&self, user_id: &str) -> AppResult<Vec<UserResponse>> {
        let user = self.get_user(user_id).await?;
        let mentors = self.users.find_all_by_ids(&user.mentors).await?;
        Ok(mentors.into_iter().map(UserResponse::from).collect())
    }

    pub async fn get_mentees(&self, user_id: &str) -> AppResult<Vec<UserResponse>> {
        let user = self.get_user(user_id).await?;
        let mentees = self.users.find_all_by_ids(&user.mentees).await?;
        Ok(mentees.into_iter().map(UserResponse::from).collect())
    }

    /// 멘토와 멘티를 연결합니다. 이미 연결되어 있으면 아무것도 쓰지 않습니다.
    ///
    /// 멘티 쪽 저장이 실패하면 멘토 쪽 변경을 되돌린 뒤 에러를 반환합니다.
    pub async fn link(&self, mentor_id: &str, mentee_id: &str) -> AppResult<()> {
        let mut mentor = self.get_user(mentor_id).await?;
        let mut mentee = self.get_user(mentee_id).await?;

        let mentor_changed = mentor.add_mentee(mentee_id);
        if mentor_changed {
            mentor.touch();
            mentor = self.users.save(mentor).await?;
        }
        if mentee.add_mentor(mentor_id) {
            mentee.touch();
            if let Err(e) = self.users.save(mentee).await {
                if mentor_changed {
                    mentor.remove_mentee(mentee_id);
                    mentor.touch();
                    if let Err(revert) = self.users.save(mentor).await {
                        log::error!("멘토 {} 연결 복구 실패: {}", mentor_id, revert);
                    }
                }
                return Err(e);
            }
        }

        log::info!("멘토십 시작: 멘토 {} → 멘티 {}", mentor_id, mentee_id);
        Ok(())
    }

    /// 멘티의 멘토 목록에서 멘토를 제거합니다.
    pub async fn delete_mentor(&self, mentee_id: &str, mentor_id: &str) -> AppResult<()> {
        self.unlink(mentor_id, mentee_id).await
    }

    /// 멘토의 멘티 목록에서 멘티를 제거합니다.
    pub async fn delete_mentee(&self, mentor_id: &str, mentee_id: &str) -> AppResult<()> {
        self.unlink(mentor_id, mentee_id).await
    }

    /// 사용자가 멘토로 참여 중인 모든 멘토십을 종료합니다 (계정 비활성화).
    pub async fn stop_mentorship(&self, mentor: &mut User) -> AppResult<()> {
        let mentees = self.users.find_all_by_ids(&mentor.mentees).await?;

        for mut mentee in mentees {
            if mentee.remove_mentor(&mentor.id) {
                mentee.touch();
                self.users.save(mentee).await?;
            }
        }

        mentor.mentees.clear();
        Ok(())
    }

    async fn unlink(&self, mentor_id: &str, mentee_id: &str) -> AppResult<()> {
        let mut mentor = self.get_user(mentor_id).await?;
        let mut mentee = self.get_user(mentee_id).await?;

        let removed_from_mentor = mentor.remove_mentee(mentee_id);
        let removed_from_mentee = mentee.remove_mentor(mentor_id);

        if !removed_from_mentor && !removed_from_mentee {
            return Err(AppError::NotFound(format!(
                "사용자 {}는 사용자 {}의 멘토가 아닙니다",
                mentor_id, mentee_id
            )));
        }

        if removed_from_mentor {
            mentor.touch();
            self.users.save(mentor).await?;
        }
        if removed_from_mentee {
            mentee.touch();
            self.users.save(mentee).await?;
        }

        log::info!("멘토십 해제: 멘토 {} → 멘티 {}", mentor_id, mentee_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::users::NewUser;
    use crate::repositories::InMemoryUserRepository;
    use crate::repositories::users::failing::FailingSaveUserRepository;

    async fn setup() -> (MentorshipService, Arc<InMemoryUserRepository>, User, User) {
        let users = Arc::new(InMemoryUserRepository::new());
        let mut created = Vec::new();
        for name in ["mentor", "mentee"] {
            created.push(
                users
                    .create(User::new(NewUser {
                        username: name.to_string(),
                        email: format!("{}@example.com", name),
                        ..Default::default()
                    }))
                    .await
                    .unwrap(),
            );
        }
        let mentee = created.remove(1);
        let mentor = created.remove(0);
        (MentorshipService::new(users.clone()), users, mentor, mentee)
    }

    #[actix_web::test]
    async fn test_link_and_list() {
        let (service, _, mentor, mentee) = setup().await;

        service.link(&mentor.id, &mentee.id).await.unwrap();

        let mentors = service.get_mentors(&mentee.id).await.unwrap();
        assert_eq!(mentors.len(), 1);
        assert_eq!(mentors[0].id, mentor.id);
        let mentees = service.get_mentees(&mentor.id).await.unwrap();
        assert_eq!(mentees[0].id, mentee.id);
    }

    #[actix_web::test]
    async fn test_delete_mentor_updates_both_sides() {
        let (service, users, mentor, mentee) = setup().await;
        service.link(&mentor.id, &mentee.id).await.unwrap();

        service.delete_mentor(&mentee.id, &mentor.id).await.unwrap();

        assert!(users.find_by_id(&mentor.id).await.unwrap().unwrap().mentees.is_empty());
        assert!(users.find_by_id(&mentee.id).await.unwrap().unwrap().mentors.is_empty());
        assert!(matches!(
            service.delete_mentor(&mentee.id, &mentor.id).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[actix_web::test]
    async fn test_stop_mentorship() {
        let (service, users, mentor, mentee) = setup().await;
        service.link(&mentor.id, &mentee.id).await.unwrap();

        let mut mentor = users.find_by_id(&mentor.id).await.unwrap().unwrap();
        service.stop_mentorship(&mut mentor).await.unwrap();

        assert!(mentor.mentees.is_empty());
        assert!(users.find_by_id(&mentee.id).await.unwrap().unwrap().mentors.is_empty());
    }

    #[actix_web::test]
    async fn test_link_reverts_mentor_when_mentee_save_fails() {
        let users = Arc::new(FailingSaveUserRepository::new());
        let mut ids = Vec::new();
        for name in ["mentor", "mentee"] {
            let user = users
                .create(User::new(NewUser {
                    username: name.to_string(),
                    email: format!("{}@example.com", name),
                    ..Default::default()
                }))
                .await
                .unwrap();
            ids.push(user.id);
        }
        let service = MentorshipService::new(users.clone());

        users.fail_on_save(2);
        let result = service.link(&ids[0], &ids[1]).await;
        assert!(matches!(result, Err(AppError::DatabaseError(_))));

        assert!(users.find_by_id(&ids[0]).await.unwrap().unwrap().mentees.is_empty());
        assert!(users.find_by_id(&ids[1]).await.unwrap().unwrap().mentors.is_empty());
    }
}
