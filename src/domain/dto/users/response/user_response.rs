use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::domain::dto::users::request::UserProfilePicDto;
use crate::domain::entities::users::User;
use crate::utils::time::to_chrono;

/// 사용자 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub phone: Option<String>,
    pub about_me: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub experience: Option<i32>,
    pub is_active: bool,
    pub is_banned: bool,
    pub mentor_ids: Vec<String>,
    pub mentee_ids: Vec<String>,
    pub follower_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_pic: Option<UserProfilePicDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            username,
            email,
            phone,
            about_me,
            city,
            country,
            experience,
            is_active,
            is_banned,
            mentors,
            mentees,
            followers,
            profile_pic,
            created_at,
            updated_at,
        } = user;

        Self {
            id,
            username,
            email,
            phone,
            about_me,
            city,
            country,
            experience,
            is_active,
            is_banned,
            mentor_ids: mentors,
            mentee_ids: mentees,
            follower_ids: followers,
            profile_pic: profile_pic.map(UserProfilePicDto::from),
            created_at: to_chrono(created_at),
            updated_at: to_chrono(updated_at),
        }
    }
}
