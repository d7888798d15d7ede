//! 사용자 검색 필터 체인

use super::{Bound, BoundFilter, FilterChain, PatternFilter};
use crate::domain::dto::users::UserFilterDto;
use crate::domain::entities::users::User;

/// 사용자 검색에 쓰이는 필터 체인
///
/// 등록 순서: username → about → email → phone → city → country →
/// experience min → experience max
pub fn user_filter_chain() -> FilterChain<User, UserFilterDto> {
    FilterChain::new()
        .register(PatternFilter::new(
            "username",
            |c: &UserFilterDto| c.username_pattern.as_deref(),
            |u: &User| Some(u.username.as_str()),
        ))
        .register(PatternFilter::new(
            "about",
            |c: &UserFilterDto| c.about_pattern.as_deref(),
            |u: &User| u.about_me.as_deref(),
        ))
        .register(PatternFilter::new(
            "email",
            |c: &UserFilterDto| c.email_pattern.as_deref(),
            |u: &User| Some(u.email.as_str()),
        ))
        .register(PatternFilter::new(
            "phone",
            |c: &UserFilterDto| c.phone_pattern.as_deref(),
            |u: &User| u.phone.as_deref(),
        ))
        .register(PatternFilter::new(
            "city",
            |c: &UserFilterDto| c.city_pattern.as_deref(),
            |u: &User| u.city.as_deref(),
        ))
        .register(PatternFilter::new(
            "country",
            |c: &UserFilterDto| c.country_pattern.as_deref(),
            |u: &User| u.country.as_deref(),
        ))
        .register(BoundFilter::new(
            "experience_min",
            Bound::AtLeast,
            |c: &UserFilterDto| c.experience_min,
            |u: &User| u.experience,
        ))
        .register(BoundFilter::new(
            "experience_max",
            Bound::AtMost,
            |c: &UserFilterDto| c.experience_max,
            |u: &User| u.experience,
        ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::users::NewUser;

    fn user(username: &str, city: Option<&str>, experience: Option<i32>) -> User {
        User::new(NewUser {
            username: username.to_string(),
            email: format!("{}@example.com", username),
            city: city.map(str::to_string),
            experience,
            ..Default::default()
        })
    }

    fn users() -> Vec<User> {
        vec![
            user("alice", Some("Seoul"), Some(5)),
            user("bob", Some("Busan"), Some(1)),
            user("carol", None, None),
        ]
    }

    fn names(users: &[User]) -> Vec<&str> {
        users.iter().map(|u| u.username.as_str()).collect()
    }

    #[test]
    fn test_empty_filter_returns_all_users_in_order() {
        let users = users();
        let result = user_filter_chain()
            .filter_all(users.clone(), &UserFilterDto::default())
            .unwrap();
        assert_eq!(result, users);
    }

    #[test]
    fn test_city_pattern_skips_users_without_city() {
        let filter = UserFilterDto { city_pattern: Some(".*".to_string()), ..Default::default() };

        let result = user_filter_chain().filter_all(users(), &filter).unwrap();

        assert_eq!(names(&result), vec!["alice", "bob"]);
    }

    #[test]
    fn test_experience_range() {
        let filter = UserFilterDto {
            experience_min: Some(1),
            experience_max: Some(3),
            ..Default::default()
        };

        let result = user_filter_chain().filter_all(users(), &filter).unwrap();

        assert_eq!(names(&result), vec!["bob"]);
    }

    #[test]
    fn test_email_and_city_combined() {
        let filter = UserFilterDto {
            email_pattern: Some("(alice|bob)@example\\.com".to_string()),
            city_pattern: Some("Seoul".to_string()),
            ..Default::default()
        };

        let result = user_filter_chain().filter_all(users(), &filter).unwrap();

        assert_eq!(names(&result), vec!["alice"]);
    }
}
