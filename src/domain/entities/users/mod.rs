//! Users Entity Module
//!
//! 사용자 프로필과 사용자 간 관계(멘토, 멘티, 팔로워)를 표현하는 엔티티입니다.

pub mod user;

pub use user::{NewUser, User, UserProfilePic};
