//! 멘토십 수락 역할 검사

use crate::core::errors::{AppError, AppResult};
use crate::repositories::UserRepository;

/// 멘토십 요청 수락 전 관계 검사
///
/// 요청자가 수신자에게 멘토가 되어 달라고 요청한 상황에서
///
/// - 수신자가 이미 요청자의 멘티이면 순환이므로 `CyclicMentorship`
/// - 수신자가 이미 요청자의 멘토이면 `ConflictError`
pub async fn validate_mentorship_acceptance(
    users: &dyn UserRepository,
    requester_id: &str,
    receiver_id: &str,
) -> AppResult<()> {
    if users.is_mentee_of(receiver_id, requester_id).await? {
        return Err(AppError::CyclicMentorship(format!(
            "사용자 {}는 이미 사용자 {}의 멘티입니다",
            receiver_id, requester_id
        )));
    }

    if users.is_mentee_of(requester_id, receiver_id).await? {
        return Err(AppError::ConflictError(format!(
            "사용자 {}는 이미 사용자 {}의 멘토입니다",
            receiver_id, requester_id
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::users::{NewUser, User};
    use crate::repositories::InMemoryUserRepository;

    async fn pair(users: &InMemoryUserRepository) -> (User, User) {
        let a = users
            .create(User::new(NewUser {
                username: "a".to_string(),
                email: "a@example.com".to_string(),
                ..Default::default()
            }))
            .await
            .unwrap();
        let b = users
            .create(User::new(NewUser {
                username: "b".to_string(),
                email: "b@example.com".to_string(),
                ..Default::default()
            }))
            .await
            .unwrap();
        (a, b)
    }

    #[actix_web::test]
    async fn test_unrelated_users_pass() {
        let users = InMemoryUserRepository::new();
        let (a, b) = pair(&users).await;
        assert!(validate_mentorship_acceptance(&users, &a.id, &b.id).await.is_ok());
    }

    #[actix_web::test]
    async fn test_receiver_already_mentee_is_cycle() {
        let users = InMemoryUserRepository::new();
        let (requester, mut receiver) = pair(&users).await;
        receiver.add_mentor(&requester.id);
        users.save(receiver.clone()).await.unwrap();

        let result = validate_mentorship_acceptance(&users, &requester.id, &receiver.id).await;

        assert!(matches!(result, Err(AppError::CyclicMentorship(_))));
    }

    #[actix_web::test]
    async fn test_receiver_already_mentor_is_conflict() {
        let users = InMemoryUserRepository::new();
        let (mut requester, receiver) = pair(&users).await;
        requester.add_mentor(&receiver.id);
        users.save(requester.clone()).await.unwrap();

        let result = validate_mentorship_acceptance(&users, &requester.id, &receiver.id).await;

        assert!(matches!(result, Err(AppError::ConflictError(_))));
    }
}
